//! Data element header sizing.
//!
//! The layout of a data element header depends on
//! the VR encoding mode of the transfer syntax,
//! and under explicit VR, on the value representation of the element
//! (PS3.5 section 7.1).
//! Element readers and writers should rely on this module
//! rather than re-deriving the rules.
use crate::TransferSyntax;
use dicom_xfer_core::VR;

/// Size of a header with a 16-bit length field,
/// or of any header in implicit VR.
pub const SHORT_HEADER_SIZE: u32 = 8;

/// Size of an explicit VR header with a 32-bit length field.
pub const LONG_HEADER_SIZE: u32 = 12;

/// The layout of a data element header.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum TagHeaderLayout {
    /// tag (4 bytes), length (4 bytes)
    Implicit,
    /// tag (4 bytes), VR (2 bytes), length (2 bytes)
    ExplicitShort,
    /// tag (4 bytes), VR (2 bytes), reserved (2 bytes), length (4 bytes)
    ExplicitLong,
}

impl TagHeaderLayout {
    /// The total number of bytes of a header in this layout.
    pub fn size(self) -> u32 {
        match self {
            TagHeaderLayout::Implicit | TagHeaderLayout::ExplicitShort => SHORT_HEADER_SIZE,
            TagHeaderLayout::ExplicitLong => LONG_HEADER_SIZE,
        }
    }

    /// The number of bytes of the value length field.
    pub fn length_field_size(self) -> u32 {
        match self {
            TagHeaderLayout::Implicit | TagHeaderLayout::ExplicitLong => 4,
            TagHeaderLayout::ExplicitShort => 2,
        }
    }

    /// Whether the VR is written in the header.
    pub fn has_vr(self) -> bool {
        self != TagHeaderLayout::Implicit
    }
}

/// Whether an explicit VR header for this VR
/// uses the 16-bit length field.
fn has_short_length(vr: VR) -> bool {
    // PS3.5 7.1.2:
    // for VRs of AE, AS, AT, CS, DA, DS, DT, FL, FD, IS, LO, LT, PN,
    // SH, SL, SS, ST, TM, UI, UL and US the Value Length Field is the
    // 16-bit unsigned integer following the two byte VR Field.
    // All other VRs have 2 reserved bytes and a 32-bit length.
    matches!(
        vr,
        VR::AE
            | VR::AS
            | VR::AT
            | VR::CS
            | VR::DA
            | VR::DS
            | VR::DT
            | VR::FL
            | VR::FD
            | VR::IS
            | VR::LO
            | VR::LT
            | VR::PN
            | VR::SH
            | VR::SL
            | VR::SS
            | VR::ST
            | VR::TM
            | VR::UI
            | VR::UL
            | VR::US
    )
}

/// Determine the header layout of an element with the given VR
/// in the given transfer syntax.
pub fn tag_header_layout(ts: &TransferSyntax, vr: VR) -> TagHeaderLayout {
    if ts.is_implicit_vr() {
        TagHeaderLayout::Implicit
    } else if has_short_length(vr) {
        TagHeaderLayout::ExplicitShort
    } else {
        TagHeaderLayout::ExplicitLong
    }
}

/// Determine the header layout of an element
/// with the given two-byte VR code, as found in encoded data.
///
/// A code which is not a known value representation
/// takes the long form in explicit VR,
/// so that the header size is never underestimated.
pub fn tag_header_layout_for_code(ts: &TransferSyntax, code: [u8; 2]) -> TagHeaderLayout {
    match VR::from_binary(code) {
        Some(vr) => tag_header_layout(ts, vr),
        None if ts.is_implicit_vr() => TagHeaderLayout::Implicit,
        None => TagHeaderLayout::ExplicitLong,
    }
}

/// Obtain the number of bytes taken by a data element header
/// (tag, VR, reserved bytes and length)
/// when encoding an element of the given VR in the given transfer syntax.
///
/// This is always 8 bytes in implicit VR,
/// including the unknown transfer syntax.
/// In explicit VR, it is 8 bytes for VRs with a 16-bit length field
/// and 12 bytes for the rest (OB, OD, OF, OL, OV, OW, SQ, SV, UC, UN, UR, UT, UV).
pub fn tag_header_size(ts: &TransferSyntax, vr: VR) -> u32 {
    tag_header_layout(ts, vr).size()
}

/// Obtain the number of bytes taken by a data element header
/// with the given two-byte VR code.
///
/// See [`tag_header_layout_for_code`].
pub fn tag_header_size_for_code(ts: &TransferSyntax, code: [u8; 2]) -> u32 {
    tag_header_layout_for_code(ts, code).size()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransferSyntaxId;

    #[test]
    fn implicit_vr_is_always_8_bytes() {
        for id in [
            TransferSyntaxId::LittleEndianImplicit,
            TransferSyntaxId::BigEndianImplicit,
            TransferSyntaxId::PrivateGeImplicitLittleEndianBigEndianPixelData,
            TransferSyntaxId::Unknown,
        ] {
            let ts = TransferSyntax::new(id);
            for vr in VR::ALL {
                assert_eq!(tag_header_size(&ts, vr), 8, "{:?} {}", id, vr);
            }
            assert_eq!(tag_header_size_for_code(&ts, *b"??"), 8);
        }
    }

    #[test]
    fn explicit_vr_sizes() {
        let ts = TransferSyntax::new(TransferSyntaxId::LittleEndianExplicit);
        assert_eq!(ts.tag_header_size(VR::OB), 12);
        assert_eq!(ts.tag_header_size(VR::SQ), 12);
        assert_eq!(ts.tag_header_size(VR::UN), 12);
        assert_eq!(ts.tag_header_size(VR::US), 8);
        assert_eq!(ts.tag_header_size(VR::AE), 8);

        let long: Vec<VR> = VR::ALL
            .iter()
            .copied()
            .filter(|vr| ts.tag_header_size(*vr) == 12)
            .collect();
        assert_eq!(
            long,
            vec![
                VR::OB,
                VR::OD,
                VR::OF,
                VR::OL,
                VR::OV,
                VR::OW,
                VR::SQ,
                VR::SV,
                VR::UC,
                VR::UN,
                VR::UR,
                VR::UT,
                VR::UV
            ]
        );
    }

    #[test]
    fn big_endian_and_encapsulated_follow_explicit_rules() {
        for id in [
            TransferSyntaxId::BigEndianExplicit,
            TransferSyntaxId::JpegProcess1,
            TransferSyntaxId::DeflatedLittleEndianExplicit,
        ] {
            let ts = TransferSyntax::new(id);
            assert_eq!(ts.tag_header_size(VR::OW), 12);
            assert_eq!(ts.tag_header_size(VR::UL), 8);
        }
    }

    #[test]
    fn unrecognized_codes_take_long_form() {
        let ts = TransferSyntax::new(TransferSyntaxId::LittleEndianExplicit);
        assert_eq!(tag_header_size_for_code(&ts, *b"US"), 8);
        assert_eq!(tag_header_size_for_code(&ts, *b"OB"), 12);
        assert_eq!(tag_header_size_for_code(&ts, *b"ox"), 12);
        assert_eq!(tag_header_size_for_code(&ts, [0, 0]), 12);
    }

    #[test]
    fn layouts() {
        let ts = TransferSyntax::new(TransferSyntaxId::LittleEndianExplicit);
        let layout = tag_header_layout(&ts, VR::UT);
        assert_eq!(layout, TagHeaderLayout::ExplicitLong);
        assert_eq!(layout.length_field_size(), 4);
        assert!(layout.has_vr());

        let layout = tag_header_layout(&ts, VR::DA);
        assert_eq!(layout, TagHeaderLayout::ExplicitShort);
        assert_eq!(layout.length_field_size(), 2);

        let ts = TransferSyntax::new(TransferSyntaxId::LittleEndianImplicit);
        let layout = tag_header_layout(&ts, VR::DA);
        assert_eq!(layout, TagHeaderLayout::Implicit);
        assert_eq!(layout.length_field_size(), 4);
        assert!(!layout.has_vr());
    }
}
