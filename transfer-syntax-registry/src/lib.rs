#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]
//! This crate contains the DICOM transfer syntax registry.
//!
//! The registry maps the identity of a transfer syntax,
//! given by [`TransferSyntaxId`], a UID or a keyword,
//! into a [`TransferSyntax`] descriptor,
//! which tells how data sets in that transfer syntax are encoded:
//! byte order, VR encoding mode, pixel data encapsulation,
//! compression and a few other properties.
//! It also determines the size of data element headers
//! (see [`tag_header`]).
//!
//! Look-ups never fail.
//! Strings which do not resolve yield the unknown transfer syntax,
//! which the caller should check for with
//! [`TransferSyntax::is_unknown`].
//!
//! ```
//! use dicom_xfer_core::VR;
//! use dicom_xfer_registry::{TransferSyntax, TransferSyntaxId};
//!
//! let ts = TransferSyntax::from_uid("1.2.840.10008.1.2.1");
//! assert_eq!(ts.id(), TransferSyntaxId::LittleEndianExplicit);
//! assert!(ts.is_explicit_vr());
//! assert_eq!(ts.tag_header_size(VR::OB), 12);
//!
//! assert!(TransferSyntax::from_uid("1.2.3.4").is_unknown());
//! ```
//!
//! ## Features
//!
//! - `deflate` (default): support deflated data set streams via `flate2`.
//!   Without it, deflated transfer syntaxes
//!   report [`StreamCompression::Unsupported`].

mod entries;
mod id;
mod properties;
mod transfer_syntax;

#[cfg(feature = "deflate")]
pub mod deflate;
pub mod tag_header;
pub mod uids;

pub use entries::{find_by_keyword, find_by_name, find_by_uid, lookup};
pub use id::{TransferSyntaxId, UnknownTransferSyntaxError};
pub use properties::{Encapsulation, StreamCompression, TransferSyntaxProperties, VrEncoding};
pub use tag_header::{tag_header_size, tag_header_size_for_code, TagHeaderLayout};
pub use transfer_syntax::TransferSyntax;

/// The registry of all transfer syntaxes known to this crate.
///
/// This is a unit type over the library's global catalog,
/// which is available at all times.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct TransferSyntaxRegistry;

impl TransferSyntaxRegistry {
    /// Obtain a transfer syntax by its UID.
    ///
    /// This method is robust to the presence of a trailing null character
    /// (`\0`), which pads UIDs to an even length in encoded data.
    /// Returns `None` if the UID is not recognized.
    pub fn get<U: AsRef<str>>(&self, uid: U) -> Option<TransferSyntax> {
        let uid = uid.as_ref();
        let uid = uid.strip_suffix('\0').unwrap_or(uid);
        let ts = TransferSyntax::from_uid(uid);
        if ts.is_unknown() {
            None
        } else {
            Some(ts)
        }
    }

    /// Obtain a transfer syntax by its keyword.
    /// Returns `None` if the keyword is not recognized.
    pub fn by_keyword(&self, keyword: &str) -> Option<TransferSyntax> {
        let ts = TransferSyntax::from_keyword(keyword);
        if ts.is_unknown() {
            None
        } else {
            Some(ts)
        }
    }

    /// Iterate over all known transfer syntaxes, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = TransferSyntax> {
        TransferSyntaxId::ALL
            .iter()
            .map(|id| TransferSyntax::new(*id))
    }

    /// The number of known transfer syntaxes.
    pub fn len(&self) -> usize {
        TransferSyntaxId::ALL.len()
    }

    /// Always `false`, the registry is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Retrieve the default transfer syntax
/// (Implicit VR Little Endian).
pub fn default() -> TransferSyntax {
    TransferSyntax::new(TransferSyntaxId::LittleEndianImplicit)
}

/// Retrieve the global transfer syntax registry.
pub fn get_registry() -> &'static TransferSyntaxRegistry {
    &TransferSyntaxRegistry
}
