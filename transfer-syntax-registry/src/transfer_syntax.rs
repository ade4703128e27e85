//! The transfer syntax descriptor type.
use crate::entries::{find_by_any, find_by_keyword, find_by_name, find_by_uid, lookup};
use crate::properties::{Encapsulation, StreamCompression, TransferSyntaxProperties, VrEncoding};
use crate::tag_header::tag_header_size;
use crate::TransferSyntaxId;
use dicom_xfer_core::byteordered::Endianness;
use dicom_xfer_core::{ByteOrder, VR};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A DICOM transfer syntax descriptor.
///
/// This is a lightweight view over one entry of the process-wide catalog,
/// bound to a single [`TransferSyntaxId`].
/// Descriptors are cheap to copy and can be created wherever needed.
///
/// Two descriptors are equal if and only if they refer to the same identity.
/// In particular, all unknown transfer syntaxes are equal to each other.
///
/// Construction never fails:
/// a UID or keyword which is not recognized
/// produces the unknown transfer syntax,
/// which should be checked with [`is_unknown`](Self::is_unknown).
#[derive(Debug, Copy, Clone)]
pub struct TransferSyntax {
    id: TransferSyntaxId,
    properties: &'static TransferSyntaxProperties,
}

impl TransferSyntax {
    /// Create a descriptor for the given identity.
    #[inline]
    pub fn new(id: TransferSyntaxId) -> Self {
        TransferSyntax {
            id,
            properties: lookup(id),
        }
    }

    /// Create a descriptor from a transfer syntax UID.
    ///
    /// Yields the unknown transfer syntax if the UID is not recognized.
    pub fn from_uid(uid: &str) -> Self {
        Self::new(find_by_uid(uid))
    }

    /// Create a descriptor from a transfer syntax keyword.
    ///
    /// Yields the unknown transfer syntax if the keyword is not recognized.
    pub fn from_keyword(keyword: &str) -> Self {
        Self::new(find_by_keyword(keyword))
    }

    /// Create a descriptor from a transfer syntax name,
    /// such as `"Explicit VR Little Endian"`.
    ///
    /// Yields the unknown transfer syntax if the name is not recognized.
    pub fn from_name(name: &str) -> Self {
        Self::new(find_by_name(name))
    }

    /// Create a descriptor from a string holding
    /// a transfer syntax UID, a keyword or a name,
    /// tried in that order.
    ///
    /// Yields the unknown transfer syntax if the string is not recognized.
    pub fn from_uid_or_keyword(name_or_uid: &str) -> Self {
        Self::new(find_by_any(name_or_uid))
    }

    /// Obtain the identity of this transfer syntax.
    #[inline]
    pub fn id(&self) -> TransferSyntaxId {
        self.id
    }

    /// Obtain the full catalog entry of this transfer syntax.
    #[inline]
    pub fn properties(&self) -> &'static TransferSyntaxProperties {
        self.properties
    }

    /// Whether this is the unknown transfer syntax.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.id.is_unknown()
    }

    /// Obtain this transfer syntax' unique identifier.
    /// Empty if the transfer syntax is unknown.
    pub fn uid(&self) -> &'static str {
        self.properties.uid
    }

    /// Obtain the name of this transfer syntax.
    /// Empty if the transfer syntax is unknown.
    pub fn name(&self) -> &'static str {
        self.properties.name
    }

    /// Obtain the keyword of this transfer syntax.
    /// Empty if the transfer syntax is unknown.
    pub fn keyword(&self) -> &'static str {
        self.properties.keyword
    }

    /// Obtain the byte order of the data set.
    pub fn byte_order(&self) -> ByteOrder {
        self.properties.byte_order
    }

    /// Obtain the byte order of native pixel data.
    ///
    /// This is the same as [`byte_order`](Self::byte_order)
    /// for all transfer syntaxes but one private transfer syntax.
    pub fn pixel_data_byte_order(&self) -> ByteOrder {
        self.properties.pixel_data_byte_order
    }

    /// Obtain the expected endianness of the data set,
    /// if known.
    pub fn endianness(&self) -> Option<Endianness> {
        self.byte_order().to_endianness()
    }

    /// Obtain the expected endianness of native pixel data,
    /// if known.
    pub fn pixel_data_endianness(&self) -> Option<Endianness> {
        self.pixel_data_byte_order().to_endianness()
    }

    /// Whether native pixel data is in a different byte order
    /// than the rest of the data set.
    pub fn needs_pixel_data_swap(&self) -> bool {
        self.byte_order()
            .needs_swap_to(self.pixel_data_byte_order())
    }

    /// Whether the data set is encoded in little endian.
    pub fn is_little_endian(&self) -> bool {
        self.byte_order() == ByteOrder::LittleEndian
    }

    /// Whether the data set is encoded in big endian.
    pub fn is_big_endian(&self) -> bool {
        self.byte_order() == ByteOrder::BigEndian
    }

    /// Obtain the value representation encoding mode.
    pub fn vr_encoding(&self) -> VrEncoding {
        self.properties.vr_encoding
    }

    /// Whether value representations are implicit.
    pub fn is_implicit_vr(&self) -> bool {
        self.vr_encoding() == VrEncoding::Implicit
    }

    /// Whether value representations are written in each element header.
    pub fn is_explicit_vr(&self) -> bool {
        self.vr_encoding() == VrEncoding::Explicit
    }

    /// Obtain the pixel data encapsulation mode.
    pub fn encapsulation(&self) -> Encapsulation {
        self.properties.encapsulation
    }

    /// Whether pixel data is encapsulated.
    pub fn is_encapsulated(&self) -> bool {
        self.encapsulation() == Encapsulation::Encapsulated
    }

    /// Whether pixel data is native (not encapsulated).
    pub fn is_not_encapsulated(&self) -> bool {
        self.encapsulation() == Encapsulation::NotEncapsulated
    }

    /// Obtain the JPEG process used for 8-bit images.
    ///
    /// Lossy JPEG transfer syntaxes support two alternative processes,
    /// one for 8 and one for 12 bits.
    /// Returns 0 for transfer syntaxes outside of the lossy JPEG family.
    pub fn jpeg_process_8bit(&self) -> u32 {
        self.properties.jpeg_process_8
    }

    /// Obtain the JPEG process used for 12-bit images.
    ///
    /// Returns 0 for transfer syntaxes outside of the lossy JPEG family.
    pub fn jpeg_process_12bit(&self) -> u32 {
        self.properties.jpeg_process_12
    }

    /// Whether pixel data may be compressed with loss.
    pub fn is_lossy(&self) -> bool {
        self.properties.lossy
    }

    /// Whether pixel data is compressed without loss, or not compressed.
    pub fn is_lossless(&self) -> bool {
        !self.properties.lossy
    }

    /// Whether this transfer syntax was retired from the standard.
    pub fn is_retired(&self) -> bool {
        self.properties.retired
    }

    /// Obtain the compression applied to the data set stream.
    pub fn stream_compression(&self) -> StreamCompression {
        self.properties.stream_compression
    }

    /// Whether pixel data is referenced through
    /// the Pixel Data Provider URL (0028,7FE0) instead of being embedded.
    pub fn is_referenced(&self) -> bool {
        self.properties.referenced
    }

    /// Whether the encapsulated pixel stream of a frame
    /// may be split into more than one fragment.
    pub fn is_fragmentable(&self) -> bool {
        self.properties.fragmentable
    }

    /// Obtain the number of bytes taken by a data element header
    /// (tag, VR, reserved bytes and length)
    /// when encoding an element of the given VR in this transfer syntax.
    ///
    /// See [`tag_header_size`](crate::tag_header::tag_header_size).
    #[inline]
    pub fn tag_header_size(&self, vr: VR) -> u32 {
        tag_header_size(self, vr)
    }

    /// Obtain an adapter for inflating and deflating the data set stream,
    /// if this transfer syntax is deflated.
    #[cfg(feature = "deflate")]
    pub fn deflate_adapter(&self) -> Option<crate::deflate::FlateAdapter> {
        if self.stream_compression() == StreamCompression::Zlib {
            Some(crate::deflate::FlateAdapter)
        } else {
            None
        }
    }
}

impl Default for TransferSyntax {
    /// The unknown transfer syntax.
    fn default() -> Self {
        TransferSyntax::new(TransferSyntaxId::Unknown)
    }
}

impl From<TransferSyntaxId> for TransferSyntax {
    fn from(id: TransferSyntaxId) -> Self {
        TransferSyntax::new(id)
    }
}

impl PartialEq for TransferSyntax {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TransferSyntax {}

impl PartialEq<TransferSyntaxId> for TransferSyntax {
    fn eq(&self, other: &TransferSyntaxId) -> bool {
        self.id == *other
    }
}

impl Hash for TransferSyntax {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}
