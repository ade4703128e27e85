//! The catalog of transfer syntaxes known to the registry.
//!
//! The catalog is a static table holding one entry per well-known
//! [`TransferSyntaxId`], in the same order as [`TransferSyntaxId::ALL`].
//! A few legacy UIDs are accepted as aliases of a canonical entry;
//! they never produce an identity of their own.
//!
//! Look-ups by UID and keyword go through hash indices
//! which are built on first use.

use crate::properties::{
    Encapsulation, StreamCompression, TransferSyntaxProperties as Ts, VrEncoding,
};
use crate::uids;
use crate::TransferSyntaxId as Id;
use dicom_xfer_core::ByteOrder;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Stream compression reported by the deflated transfer syntaxes,
/// which depends on whether this build can inflate them.
const ZLIB: StreamCompression = if cfg!(feature = "deflate") {
    StreamCompression::Zlib
} else {
    StreamCompression::Unsupported
};

/// The entry describing [`Id::Unknown`].
const UNKNOWN_ENTRY: Ts = Ts {
    id: Id::Unknown,
    uid: "",
    name: "",
    keyword: "",
    byte_order: ByteOrder::Unknown,
    pixel_data_byte_order: ByteOrder::Unknown,
    vr_encoding: VrEncoding::Implicit,
    encapsulation: Encapsulation::NotEncapsulated,
    jpeg_process_8: 0,
    jpeg_process_12: 0,
    lossy: false,
    retired: false,
    stream_compression: StreamCompression::None,
    referenced: false,
    fragmentable: false,
};

static UNKNOWN: Ts = UNKNOWN_ENTRY;

/// create an entry with native (non-encapsulated) pixel data
const fn native(
    id: Id,
    uid: &'static str,
    name: &'static str,
    keyword: &'static str,
    byte_order: ByteOrder,
    vr_encoding: VrEncoding,
) -> Ts {
    Ts {
        id,
        uid,
        name,
        keyword,
        byte_order,
        pixel_data_byte_order: byte_order,
        vr_encoding,
        ..UNKNOWN_ENTRY
    }
}

/// create an entry with fragmentable encapsulated pixel data,
/// compressed without loss
const fn lossless(id: Id, uid: &'static str, name: &'static str, keyword: &'static str) -> Ts {
    Ts {
        encapsulation: Encapsulation::Encapsulated,
        fragmentable: true,
        ..native(
            id,
            uid,
            name,
            keyword,
            ByteOrder::LittleEndian,
            VrEncoding::Explicit,
        )
    }
}

/// create an entry with fragmentable encapsulated pixel data,
/// possibly compressed with loss
const fn lossy(id: Id, uid: &'static str, name: &'static str, keyword: &'static str) -> Ts {
    Ts {
        lossy: true,
        ..lossless(id, uid, name, keyword)
    }
}

/// create an entry from the lossy JPEG family,
/// with the processes for 8-bit and 12-bit images
const fn lossy_jpeg(
    id: Id,
    uid: &'static str,
    name: &'static str,
    keyword: &'static str,
    jpeg_process_8: u32,
    jpeg_process_12: u32,
) -> Ts {
    Ts {
        jpeg_process_8,
        jpeg_process_12,
        ..lossy(id, uid, name, keyword)
    }
}

/// create an entry for a video transfer syntax
const fn video(
    id: Id,
    uid: &'static str,
    name: &'static str,
    keyword: &'static str,
    fragmentable: bool,
) -> Ts {
    Ts {
        fragmentable,
        ..lossy(id, uid, name, keyword)
    }
}

/// create an entry whose pixel data is referenced by URL
const fn referenced(
    id: Id,
    uid: &'static str,
    name: &'static str,
    keyword: &'static str,
    stream_compression: StreamCompression,
) -> Ts {
    Ts {
        referenced: true,
        fragmentable: false,
        stream_compression,
        ..lossy(id, uid, name, keyword)
    }
}

/// mark an entry as retired
const fn retired(ts: Ts) -> Ts {
    Ts {
        retired: true,
        ..ts
    }
}

/// All well-known transfer syntaxes, in identity order.
#[rustfmt::skip]
pub(crate) static CATALOG: [Ts; 54] = [
    // -- native encodings --
    native(Id::LittleEndianImplicit, uids::IMPLICIT_VR_LITTLE_ENDIAN,
        "Implicit VR Little Endian", "ImplicitVRLittleEndian",
        ByteOrder::LittleEndian, VrEncoding::Implicit),
    native(Id::BigEndianImplicit, uids::IMPLICIT_VR_BIG_ENDIAN,
        "Implicit VR Big Endian", "ImplicitVRBigEndian",
        ByteOrder::BigEndian, VrEncoding::Implicit),
    native(Id::LittleEndianExplicit, uids::EXPLICIT_VR_LITTLE_ENDIAN,
        "Explicit VR Little Endian", "ExplicitVRLittleEndian",
        ByteOrder::LittleEndian, VrEncoding::Explicit),
    retired(native(Id::BigEndianExplicit, uids::EXPLICIT_VR_BIG_ENDIAN,
        "Explicit VR Big Endian", "ExplicitVRBigEndian",
        ByteOrder::BigEndian, VrEncoding::Explicit)),

    // -- JPEG --
    lossy_jpeg(Id::JpegProcess1, uids::JPEG_BASELINE8_BIT,
        "JPEG Baseline (Process 1)", "JPEGBaseline8Bit", 1, 1),
    lossy_jpeg(Id::JpegProcess2_4, uids::JPEG_EXTENDED12_BIT,
        "JPEG Extended (Process 2 & 4)", "JPEGExtended12Bit", 2, 4),
    retired(lossy_jpeg(Id::JpegProcess3_5, uids::JPEG_EXTENDED35,
        "JPEG Extended (Process 3 & 5)", "JPEGExtended35", 3, 5)),
    retired(lossy_jpeg(Id::JpegProcess6_8, uids::JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL68,
        "JPEG Spectral Selection, Non-Hierarchical (Process 6 & 8)",
        "JPEGSpectralSelectionNonHierarchical68", 6, 8)),
    retired(lossy_jpeg(Id::JpegProcess7_9, uids::JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL79,
        "JPEG Spectral Selection, Non-Hierarchical (Process 7 & 9)",
        "JPEGSpectralSelectionNonHierarchical79", 7, 9)),
    retired(lossy_jpeg(Id::JpegProcess10_12, uids::JPEG_FULL_PROGRESSION_NON_HIERARCHICAL1012,
        "JPEG Full Progression, Non-Hierarchical (Process 10 & 12)",
        "JPEGFullProgressionNonHierarchical1012", 10, 12)),
    retired(lossy_jpeg(Id::JpegProcess11_13, uids::JPEG_FULL_PROGRESSION_NON_HIERARCHICAL1113,
        "JPEG Full Progression, Non-Hierarchical (Process 11 & 13)",
        "JPEGFullProgressionNonHierarchical1113", 11, 13)),
    lossless(Id::JpegProcess14, uids::JPEG_LOSSLESS,
        "JPEG Lossless, Non-Hierarchical (Process 14)", "JPEGLossless"),
    retired(lossless(Id::JpegProcess15, uids::JPEG_LOSSLESS_NON_HIERARCHICAL15,
        "JPEG Lossless, Non-Hierarchical (Process 15)", "JPEGLosslessNonHierarchical15")),
    retired(lossy_jpeg(Id::JpegProcess16_18, uids::JPEG_EXTENDED_HIERARCHICAL1618,
        "JPEG Extended, Hierarchical (Process 16 & 18)",
        "JPEGExtendedHierarchical1618", 16, 18)),
    retired(lossy_jpeg(Id::JpegProcess17_19, uids::JPEG_EXTENDED_HIERARCHICAL1719,
        "JPEG Extended, Hierarchical (Process 17 & 19)",
        "JPEGExtendedHierarchical1719", 17, 19)),
    retired(lossy_jpeg(Id::JpegProcess20_22, uids::JPEG_SPECTRAL_SELECTION_HIERARCHICAL2022,
        "JPEG Spectral Selection, Hierarchical (Process 20 & 22)",
        "JPEGSpectralSelectionHierarchical2022", 20, 22)),
    retired(lossy_jpeg(Id::JpegProcess21_23, uids::JPEG_SPECTRAL_SELECTION_HIERARCHICAL2123,
        "JPEG Spectral Selection, Hierarchical (Process 21 & 23)",
        "JPEGSpectralSelectionHierarchical2123", 21, 23)),
    retired(lossy_jpeg(Id::JpegProcess24_26, uids::JPEG_FULL_PROGRESSION_HIERARCHICAL2426,
        "JPEG Full Progression, Hierarchical (Process 24 & 26)",
        "JPEGFullProgressionHierarchical2426", 24, 26)),
    retired(lossy_jpeg(Id::JpegProcess25_27, uids::JPEG_FULL_PROGRESSION_HIERARCHICAL2527,
        "JPEG Full Progression, Hierarchical (Process 25 & 27)",
        "JPEGFullProgressionHierarchical2527", 25, 27)),
    retired(lossless(Id::JpegProcess28, uids::JPEG_LOSSLESS_HIERARCHICAL28,
        "JPEG Lossless, Hierarchical (Process 28)", "JPEGLosslessHierarchical28")),
    retired(lossless(Id::JpegProcess29, uids::JPEG_LOSSLESS_HIERARCHICAL29,
        "JPEG Lossless, Hierarchical (Process 29)", "JPEGLosslessHierarchical29")),
    lossless(Id::JpegProcess14Sv1, uids::JPEG_LOSSLESS_SV1,
        "JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14 [Selection Value 1])",
        "JPEGLosslessSV1"),

    lossless(Id::RleLossless, uids::RLE_LOSSLESS, "RLE Lossless", "RLELossless"),
    Ts {
        stream_compression: ZLIB,
        ..native(Id::DeflatedLittleEndianExplicit, uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
            "Deflated Explicit VR Little Endian", "DeflatedExplicitVRLittleEndian",
            ByteOrder::LittleEndian, VrEncoding::Explicit)
    },

    // -- JPEG-LS --
    lossless(Id::JpegLsLossless, uids::JPEGLS_LOSSLESS,
        "JPEG-LS Lossless Image Compression", "JPEGLSLossless"),
    lossy(Id::JpegLsLossy, uids::JPEGLS_NEAR_LOSSLESS,
        "JPEG-LS Lossy (Near-Lossless) Image Compression", "JPEGLSNearLossless"),

    // -- JPEG 2000 --
    lossless(Id::Jpeg2000LosslessOnly, uids::JPEG2000_LOSSLESS,
        "JPEG 2000 Image Compression (Lossless Only)", "JPEG2000Lossless"),
    lossy(Id::Jpeg2000, uids::JPEG2000, "JPEG 2000 Image Compression", "JPEG2000"),
    lossless(Id::Jpeg2000MulticomponentLosslessOnly, uids::JPEG2000MC_LOSSLESS,
        "JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)",
        "JPEG2000MCLossless"),
    lossy(Id::Jpeg2000Multicomponent, uids::JPEG2000MC,
        "JPEG 2000 Part 2 Multi-component Image Compression", "JPEG2000MC"),
    referenced(Id::JpipReferenced, uids::JPIP_REFERENCED,
        "JPIP Referenced", "JPIPReferenced", StreamCompression::None),
    referenced(Id::JpipReferencedDeflate, uids::JPIP_REFERENCED_DEFLATE,
        "JPIP Referenced Deflate", "JPIPReferencedDeflate", ZLIB),

    // -- video --
    video(Id::Mpeg2MainProfileMainLevel, uids::MPEG2MPML,
        "MPEG2 Main Profile / Main Level", "MPEG2MPML", false),
    video(Id::FragmentableMpeg2MainProfileMainLevel, uids::MPEG2MPMLF,
        "Fragmentable MPEG2 Main Profile / Main Level", "MPEG2MPMLF", true),
    video(Id::Mpeg2MainProfileHighLevel, uids::MPEG2MPHL,
        "MPEG2 Main Profile / High Level", "MPEG2MPHL", false),
    video(Id::FragmentableMpeg2MainProfileHighLevel, uids::MPEG2MPHLF,
        "Fragmentable MPEG2 Main Profile / High Level", "MPEG2MPHLF", true),
    video(Id::Mpeg4HighProfileLevel4_1, uids::MPEG4HP41,
        "MPEG-4 AVC/H.264 High Profile / Level 4.1", "MPEG4HP41", false),
    video(Id::FragmentableMpeg4HighProfileLevel4_1, uids::MPEG4HP41F,
        "Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.1", "MPEG4HP41F", true),
    video(Id::Mpeg4BdCompatibleHighProfileLevel4_1, uids::MPEG4HP41BD,
        "MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1", "MPEG4HP41BD", false),
    video(Id::FragmentableMpeg4BdCompatibleHighProfileLevel4_1, uids::MPEG4HP41BDF,
        "Fragmentable MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1",
        "MPEG4HP41BDF", true),
    video(Id::Mpeg4HighProfileLevel4_2For2dVideo, uids::MPEG4HP422D,
        "MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video", "MPEG4HP422D", false),
    video(Id::FragmentableMpeg4HighProfileLevel4_2For2dVideo, uids::MPEG4HP422DF,
        "Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video",
        "MPEG4HP422DF", true),
    video(Id::Mpeg4HighProfileLevel4_2For3dVideo, uids::MPEG4HP423D,
        "MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video", "MPEG4HP423D", false),
    video(Id::FragmentableMpeg4HighProfileLevel4_2For3dVideo, uids::MPEG4HP423DF,
        "Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video",
        "MPEG4HP423DF", true),
    video(Id::Mpeg4StereoHighProfileLevel4_2, uids::MPEG4HP42_STEREO,
        "MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2", "MPEG4HP42STEREO", false),
    video(Id::FragmentableMpeg4StereoHighProfileLevel4_2, uids::MPEG4HP42_STEREOF,
        "Fragmentable MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2",
        "MPEG4HP42STEREOF", true),
    video(Id::HevcMainProfileLevel5_1, uids::HEVCMP51,
        "HEVC/H.265 Main Profile / Level 5.1", "HEVCMP51", false),
    video(Id::HevcMain10ProfileLevel5_1, uids::HEVCM10P51,
        "HEVC/H.265 Main 10 Profile / Level 5.1", "HEVCM10P51", false),

    // -- HTJ2K --
    lossless(Id::HighThroughputJpeg2000LosslessOnly, uids::HTJ2K_LOSSLESS,
        "High-Throughput JPEG 2000 Image Compression (Lossless Only)", "HTJ2KLossless"),
    lossless(Id::HighThroughputJpeg2000WithRpclOptionsLosslessOnly, uids::HTJ2K_LOSSLESS_RPCL,
        "High-Throughput JPEG 2000 with RPCL Options Image Compression (Lossless Only)",
        "HTJ2KLosslessRPCL"),
    lossy(Id::HighThroughputJpeg2000, uids::HTJ2K,
        "High-Throughput JPEG 2000 Image Compression", "HTJ2K"),
    referenced(Id::JpipHtj2kReferenced, uids::JPIPHTJ2K_REFERENCED,
        "JPIP HTJ2K Referenced", "JPIPHTJ2KReferenced", StreamCompression::None),
    referenced(Id::JpipHtj2kReferencedDeflate, uids::JPIPHTJ2K_REFERENCED_DEFLATE,
        "JPIP HTJ2K Referenced Deflate", "JPIPHTJ2KReferencedDeflate", ZLIB),

    // -- private --
    // pixel data is big endian, against the rest of the data set
    Ts {
        pixel_data_byte_order: ByteOrder::BigEndian,
        ..native(Id::PrivateGeImplicitLittleEndianBigEndianPixelData,
            uids::PRIVATE_GE_IMPLICIT_VR_LITTLE_ENDIAN_BIG_ENDIAN_PIXEL_DATA,
            "Private GE Implicit VR Little Endian with Big Endian Pixel Data",
            "PrivateGEImplicitVRLittleEndianBigEndianPixelData",
            ByteOrder::LittleEndian, VrEncoding::Implicit)
    },
];

/// Legacy UIDs resolving to a canonical identity.
pub(crate) static ALIASES: [(&str, Id); 2] = [
    (uids::IMPLICIT_VR_BIG_ENDIAN_LEGACY, Id::BigEndianImplicit),
    (uids::JPEG2000MC_MISTYPED, Id::Jpeg2000Multicomponent),
];

/// Hash indices over the catalog.
#[derive(Debug)]
struct CatalogIndex {
    /// mapping: uid → identity, aliases included
    by_uid: HashMap<&'static str, Id>,
    /// mapping: keyword → identity
    by_keyword: HashMap<&'static str, Id>,
    /// mapping: name → identity
    by_name: HashMap<&'static str, Id>,
}

impl CatalogIndex {
    fn build() -> Self {
        let by_uid: HashMap<_, _> = CATALOG
            .iter()
            .map(|e| (e.uid, e.id))
            .chain(ALIASES.iter().copied())
            .collect();
        let by_keyword: HashMap<_, _> = CATALOG.iter().map(|e| (e.keyword, e.id)).collect();
        let by_name: HashMap<_, _> = CATALOG.iter().map(|e| (e.name, e.id)).collect();
        debug!(
            "Indexed {} transfer syntaxes ({} UIDs, {} keywords, {} names)",
            CATALOG.len(),
            by_uid.len(),
            by_keyword.len(),
            by_name.len()
        );
        CatalogIndex {
            by_uid,
            by_keyword,
            by_name,
        }
    }
}

static INDEX: Lazy<CatalogIndex> = Lazy::new(CatalogIndex::build);

/// Retrieve the catalog entry of the given identity.
///
/// `Unknown` yields a sentinel entry with empty strings,
/// unknown byte order and no special encoding features.
#[inline]
pub fn lookup(id: Id) -> &'static Ts {
    match id.index() {
        Some(i) => &CATALOG[i],
        None => &UNKNOWN,
    }
}

/// Find the transfer syntax with the given UID.
///
/// Matching is exact and case-sensitive.
/// Besides canonical UIDs, a few legacy aliases are recognized.
/// Yields `Unknown` if there is no match.
pub fn find_by_uid(uid: &str) -> Id {
    match INDEX.by_uid.get(uid) {
        Some(id) => *id,
        None => {
            trace!("Unrecognized transfer syntax UID `{}`", uid);
            Id::Unknown
        }
    }
}

/// Find the transfer syntax with the given keyword.
///
/// Matching is exact and case-sensitive.
/// Yields `Unknown` if there is no match.
pub fn find_by_keyword(keyword: &str) -> Id {
    match INDEX.by_keyword.get(keyword) {
        Some(id) => *id,
        None => {
            trace!("Unrecognized transfer syntax keyword `{}`", keyword);
            Id::Unknown
        }
    }
}

/// Find the transfer syntax with the given human readable name,
/// such as `"Explicit VR Little Endian"`.
///
/// Matching is exact and case-sensitive.
/// Yields `Unknown` if there is no match.
pub fn find_by_name(name: &str) -> Id {
    match INDEX.by_name.get(name) {
        Some(id) => *id,
        None => {
            trace!("Unrecognized transfer syntax name `{}`", name);
            Id::Unknown
        }
    }
}

/// Find a transfer syntax by UID, then by keyword, then by name.
pub(crate) fn find_by_any(s: &str) -> Id {
    [find_by_uid, find_by_keyword, find_by_name]
        .iter()
        .map(|find| find(s))
        .find(|id| !id.is_unknown())
        .unwrap_or(Id::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn one_entry_per_identity_in_order() {
        assert_eq!(CATALOG.len(), Id::ALL.len());
        for (entry, id) in CATALOG.iter().zip(Id::ALL) {
            assert_eq!(entry.id, id);
            assert!(std::ptr::eq(lookup(id), entry));
        }
    }

    #[test]
    fn strings_are_unique_and_present() {
        let mut uids = HashSet::new();
        let mut keywords = HashSet::new();
        let mut names = HashSet::new();
        for entry in CATALOG.iter() {
            assert!(!entry.uid.is_empty());
            assert!(!entry.name.is_empty());
            assert!(!entry.keyword.is_empty());
            assert!(uids.insert(entry.uid), "duplicate UID {}", entry.uid);
            assert!(
                keywords.insert(entry.keyword),
                "duplicate keyword {}",
                entry.keyword
            );
            assert!(names.insert(entry.name), "duplicate name {}", entry.name);
        }
        for &(alias, id) in ALIASES.iter() {
            assert!(uids.insert(alias), "alias {} collides", alias);
            assert!(!id.is_unknown());
        }
    }

    #[test]
    fn entry_invariants() {
        for entry in CATALOG.iter() {
            if !entry.lossy {
                assert_eq!(entry.jpeg_process_8, 0, "{}", entry.keyword);
                assert_eq!(entry.jpeg_process_12, 0, "{}", entry.keyword);
            }
            if entry.encapsulation == Encapsulation::NotEncapsulated {
                assert!(!entry.fragmentable, "{}", entry.keyword);
                assert!(!entry.referenced, "{}", entry.keyword);
            }
            assert_ne!(entry.byte_order, ByteOrder::Unknown);
        }
    }

    #[test]
    fn only_one_entry_overrides_pixel_data_byte_order() {
        let overriding: Vec<_> = CATALOG
            .iter()
            .filter(|e| e.pixel_data_byte_order != e.byte_order)
            .map(|e| e.id)
            .collect();
        assert_eq!(
            overriding,
            vec![Id::PrivateGeImplicitLittleEndianBigEndianPixelData]
        );
    }

    #[test]
    fn unknown_sentinel() {
        let entry = lookup(Id::Unknown);
        assert_eq!(entry.id, Id::Unknown);
        assert_eq!(entry.uid, "");
        assert_eq!(entry.name, "");
        assert_eq!(entry.keyword, "");
        assert_eq!(entry.byte_order, ByteOrder::Unknown);
        assert_eq!(entry.pixel_data_byte_order, ByteOrder::Unknown);
        assert_eq!(entry.vr_encoding, VrEncoding::Implicit);
        assert_eq!(entry.encapsulation, Encapsulation::NotEncapsulated);
        assert_eq!(entry.stream_compression, StreamCompression::None);
        assert!(!entry.lossy && !entry.retired && !entry.referenced && !entry.fragmentable);
    }

    #[test]
    fn lookup_by_uid() {
        assert_eq!(find_by_uid("1.2.840.10008.1.2"), Id::LittleEndianImplicit);
        assert_eq!(find_by_uid("1.2.840.10008.1.2.1"), Id::LittleEndianExplicit);
        assert_eq!(
            find_by_uid("1.2.840.10008.1.2.4.100.1"),
            Id::FragmentableMpeg2MainProfileMainLevel
        );
        assert_eq!(find_by_uid("not-a-uid"), Id::Unknown);
        assert_eq!(find_by_uid(""), Id::Unknown);
        // no prefix matching, no trimming
        assert_eq!(find_by_uid("1.2.840.10008.1"), Id::Unknown);
        assert_eq!(find_by_uid("1.2.840.10008.1.2\0"), Id::Unknown);
        assert_eq!(find_by_uid(" 1.2.840.10008.1.2"), Id::Unknown);
    }

    #[test]
    fn lookup_by_keyword() {
        assert_eq!(
            find_by_keyword("ExplicitVRBigEndian"),
            Id::BigEndianExplicit
        );
        assert_eq!(find_by_keyword("HTJ2K"), Id::HighThroughputJpeg2000);
        assert_eq!(find_by_keyword("explicitvrbigendian"), Id::Unknown);
        assert_eq!(find_by_keyword("JPEG"), Id::Unknown);
        assert_eq!(find_by_keyword(""), Id::Unknown);
    }

    #[test]
    fn lookup_by_name() {
        for entry in CATALOG.iter() {
            assert_eq!(find_by_name(entry.name), entry.id);
        }
        assert_eq!(
            find_by_name("Explicit VR Little Endian"),
            Id::LittleEndianExplicit
        );
        assert_eq!(find_by_name("explicit vr little endian"), Id::Unknown);
        assert_eq!(find_by_name("Explicit VR"), Id::Unknown);
        assert_eq!(find_by_name(""), Id::Unknown);
    }

    #[test]
    fn aliases_resolve_to_canonical_identity() {
        assert_eq!(
            find_by_uid(uids::IMPLICIT_VR_BIG_ENDIAN_LEGACY),
            Id::BigEndianImplicit
        );
        assert_eq!(
            find_by_uid(uids::JPEG2000MC_MISTYPED),
            Id::Jpeg2000Multicomponent
        );
        // the canonical UID is still the one reported
        assert_eq!(lookup(Id::Jpeg2000Multicomponent).uid, uids::JPEG2000MC);
    }

    #[test]
    fn deflated_entries_follow_build_support() {
        let expected = if cfg!(feature = "deflate") {
            StreamCompression::Zlib
        } else {
            StreamCompression::Unsupported
        };
        for id in [
            Id::DeflatedLittleEndianExplicit,
            Id::JpipReferencedDeflate,
            Id::JpipHtj2kReferencedDeflate,
        ] {
            assert_eq!(lookup(id).stream_compression, expected);
        }
        let compressed = CATALOG
            .iter()
            .filter(|e| e.stream_compression != StreamCompression::None)
            .count();
        assert_eq!(compressed, 3);
    }
}
