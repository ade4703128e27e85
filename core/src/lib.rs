#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! Primitive concepts shared by the DICOM transfer syntax crates.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] holds the DICOM value representation type ([`VR`]),
//!   which decides how a data element header is laid out
//!   under an explicit VR transfer syntax.
//! - [`byte_order`] describes the byte order of encoded data,
//!   including the possibility of it being unknown.
//!
//! [`header`]: ./header/index.html
//! [`byte_order`]: ./byte_order/index.html

pub mod byte_order;
pub mod header;

pub use byte_order::ByteOrder;
pub use header::VR;

// re-export crates that are part of the public API
pub use byteordered;
