//! Property types describing how a transfer syntax encodes data.
use crate::TransferSyntaxId;
use dicom_xfer_core::ByteOrder;

/// Whether value representations are written in each element header.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum VrEncoding {
    /// The VR is not transmitted and must be resolved from a data dictionary
    Implicit,
    /// The VR is written in each data element header
    Explicit,
}

/// Whether pixel data is encapsulated in fragments.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum Encapsulation {
    /// Pixel data is stored natively, as a single value
    NotEncapsulated,
    /// Pixel data is stored as a sequence of length-delimited fragments
    Encapsulated,
}

/// Compression applied to the whole data set stream,
/// after the file meta group.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum StreamCompression {
    /// The data set is not compressed
    None,
    /// The data set is compressed in a way which this build does not support
    Unsupported,
    /// The data set is compressed with raw deflate (zlib without headers)
    Zlib,
}

/// The full set of properties of a transfer syntax, as recorded in the catalog.
///
/// Entries are only ever reached through `&'static` references
/// to the process-wide catalog.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct TransferSyntaxProperties {
    /// the identity which this entry describes
    pub id: TransferSyntaxId,
    /// the canonical transfer syntax UID
    pub uid: &'static str,
    /// a human readable name
    pub name: &'static str,
    /// the keyword (identifier-like alias)
    pub keyword: &'static str,
    /// byte order of the data set
    pub byte_order: ByteOrder,
    /// byte order of native pixel data
    pub pixel_data_byte_order: ByteOrder,
    /// implicit or explicit VR
    pub vr_encoding: VrEncoding,
    /// whether pixel data is encapsulated
    pub encapsulation: Encapsulation,
    /// JPEG process for 8-bit images, 0 outside of the lossy JPEG family
    pub jpeg_process_8: u32,
    /// JPEG process for 12-bit images, 0 outside of the lossy JPEG family
    pub jpeg_process_12: u32,
    /// whether the pixel data compression is lossy
    pub lossy: bool,
    /// whether the transfer syntax was retired from the standard
    pub retired: bool,
    /// compression of the data set stream
    pub stream_compression: StreamCompression,
    /// whether pixel data is referenced via Pixel Data Provider URL
    pub referenced: bool,
    /// whether the encapsulated pixel stream may be split into fragments
    pub fragmentable: bool,
}
