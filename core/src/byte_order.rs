//! Byte order of encoded DICOM content.
use byteordered::Endianness;
use std::fmt;

/// The byte order declared by a transfer syntax.
///
/// Unlike [`Endianness`], this type can also express
/// that the byte order is not known,
/// which is the case for an unrecognized transfer syntax.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ByteOrder {
    /// The byte order is not known
    #[default]
    Unknown,
    /// Little endian
    LittleEndian,
    /// Big endian
    BigEndian,
}

impl ByteOrder {
    /// Obtain the byte order of the machine running the program.
    pub fn native() -> Self {
        Endianness::native().into()
    }

    /// Convert to the endianness type of `byteordered`,
    /// which is only possible when the byte order is known.
    pub fn to_endianness(self) -> Option<Endianness> {
        match self {
            ByteOrder::LittleEndian => Some(Endianness::Little),
            ByteOrder::BigEndian => Some(Endianness::Big),
            ByteOrder::Unknown => None,
        }
    }

    /// Whether this byte order is known and differs from `other`.
    ///
    /// Values encoded in this byte order
    /// must be byte-swapped before being interpreted in `other`.
    pub fn needs_swap_to(self, other: ByteOrder) -> bool {
        self != ByteOrder::Unknown && other != ByteOrder::Unknown && self != other
    }
}

impl From<Endianness> for ByteOrder {
    fn from(e: Endianness) -> Self {
        match e {
            Endianness::Little => ByteOrder::LittleEndian,
            Endianness::Big => ByteOrder::BigEndian,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ByteOrder::Unknown => "unknown",
            ByteOrder::LittleEndian => "little endian",
            ByteOrder::BigEndian => "big endian",
        })
    }
}
