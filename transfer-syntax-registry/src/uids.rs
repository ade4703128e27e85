//! Transfer syntax UID declarations.
//!
//! One constant per catalog entry,
//! plus the legacy UIDs which are only accepted as aliases.

/// Transfer Syntax: Implicit VR Little Endian: Default Transfer Syntax for DICOM
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Transfer Syntax: Implicit VR Big Endian (virtual, private UID)
pub const IMPLICIT_VR_BIG_ENDIAN: &str = "1.2.276.0.7230010.3.1.2.2";
/// Transfer Syntax: Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Transfer Syntax: Explicit VR Big Endian (Retired)
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
/// Transfer Syntax: Deflated Explicit VR Little Endian
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";

/// Transfer Syntax: JPEG Baseline (Process 1)
pub const JPEG_BASELINE8_BIT: &str = "1.2.840.10008.1.2.4.50";
/// Transfer Syntax: JPEG Extended (Process 2 & 4)
pub const JPEG_EXTENDED12_BIT: &str = "1.2.840.10008.1.2.4.51";
/// Transfer Syntax: JPEG Extended (Process 3 & 5) (Retired)
pub const JPEG_EXTENDED35: &str = "1.2.840.10008.1.2.4.52";
/// Transfer Syntax: JPEG Spectral Selection, Non-Hierarchical (Process 6 & 8) (Retired)
pub const JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL68: &str = "1.2.840.10008.1.2.4.53";
/// Transfer Syntax: JPEG Spectral Selection, Non-Hierarchical (Process 7 & 9) (Retired)
pub const JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL79: &str = "1.2.840.10008.1.2.4.54";
/// Transfer Syntax: JPEG Full Progression, Non-Hierarchical (Process 10 & 12) (Retired)
pub const JPEG_FULL_PROGRESSION_NON_HIERARCHICAL1012: &str = "1.2.840.10008.1.2.4.55";
/// Transfer Syntax: JPEG Full Progression, Non-Hierarchical (Process 11 & 13) (Retired)
pub const JPEG_FULL_PROGRESSION_NON_HIERARCHICAL1113: &str = "1.2.840.10008.1.2.4.56";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical (Process 14)
pub const JPEG_LOSSLESS: &str = "1.2.840.10008.1.2.4.57";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical (Process 15) (Retired)
pub const JPEG_LOSSLESS_NON_HIERARCHICAL15: &str = "1.2.840.10008.1.2.4.58";
/// Transfer Syntax: JPEG Extended, Hierarchical (Process 16 & 18) (Retired)
pub const JPEG_EXTENDED_HIERARCHICAL1618: &str = "1.2.840.10008.1.2.4.59";
/// Transfer Syntax: JPEG Extended, Hierarchical (Process 17 & 19) (Retired)
pub const JPEG_EXTENDED_HIERARCHICAL1719: &str = "1.2.840.10008.1.2.4.60";
/// Transfer Syntax: JPEG Spectral Selection, Hierarchical (Process 20 & 22) (Retired)
pub const JPEG_SPECTRAL_SELECTION_HIERARCHICAL2022: &str = "1.2.840.10008.1.2.4.61";
/// Transfer Syntax: JPEG Spectral Selection, Hierarchical (Process 21 & 23) (Retired)
pub const JPEG_SPECTRAL_SELECTION_HIERARCHICAL2123: &str = "1.2.840.10008.1.2.4.62";
/// Transfer Syntax: JPEG Full Progression, Hierarchical (Process 24 & 26) (Retired)
pub const JPEG_FULL_PROGRESSION_HIERARCHICAL2426: &str = "1.2.840.10008.1.2.4.63";
/// Transfer Syntax: JPEG Full Progression, Hierarchical (Process 25 & 27) (Retired)
pub const JPEG_FULL_PROGRESSION_HIERARCHICAL2527: &str = "1.2.840.10008.1.2.4.64";
/// Transfer Syntax: JPEG Lossless, Hierarchical (Process 28) (Retired)
pub const JPEG_LOSSLESS_HIERARCHICAL28: &str = "1.2.840.10008.1.2.4.65";
/// Transfer Syntax: JPEG Lossless, Hierarchical (Process 29) (Retired)
pub const JPEG_LOSSLESS_HIERARCHICAL29: &str = "1.2.840.10008.1.2.4.66";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical, First-Order Prediction
pub const JPEG_LOSSLESS_SV1: &str = "1.2.840.10008.1.2.4.70";

/// Transfer Syntax: JPEG-LS Lossless Image Compression
pub const JPEGLS_LOSSLESS: &str = "1.2.840.10008.1.2.4.80";
/// Transfer Syntax: JPEG-LS Lossy (Near-Lossless) Image Compression
pub const JPEGLS_NEAR_LOSSLESS: &str = "1.2.840.10008.1.2.4.81";

/// Transfer Syntax: JPEG 2000 Image Compression (Lossless Only)
pub const JPEG2000_LOSSLESS: &str = "1.2.840.10008.1.2.4.90";
/// Transfer Syntax: JPEG 2000 Image Compression
pub const JPEG2000: &str = "1.2.840.10008.1.2.4.91";
/// Transfer Syntax: JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)
pub const JPEG2000MC_LOSSLESS: &str = "1.2.840.10008.1.2.4.92";
/// Transfer Syntax: JPEG 2000 Part 2 Multi-component Image Compression
pub const JPEG2000MC: &str = "1.2.840.10008.1.2.4.93";
/// Transfer Syntax: JPIP Referenced
pub const JPIP_REFERENCED: &str = "1.2.840.10008.1.2.4.94";
/// Transfer Syntax: JPIP Referenced Deflate
pub const JPIP_REFERENCED_DEFLATE: &str = "1.2.840.10008.1.2.4.95";

/// Transfer Syntax: MPEG2 Main Profile / Main Level
pub const MPEG2MPML: &str = "1.2.840.10008.1.2.4.100";
/// Transfer Syntax: Fragmentable MPEG2 Main Profile / Main Level
pub const MPEG2MPMLF: &str = "1.2.840.10008.1.2.4.100.1";
/// Transfer Syntax: MPEG2 Main Profile / High Level
pub const MPEG2MPHL: &str = "1.2.840.10008.1.2.4.101";
/// Transfer Syntax: Fragmentable MPEG2 Main Profile / High Level
pub const MPEG2MPHLF: &str = "1.2.840.10008.1.2.4.101.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 High Profile / Level 4.1
pub const MPEG4HP41: &str = "1.2.840.10008.1.2.4.102";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.1
pub const MPEG4HP41F: &str = "1.2.840.10008.1.2.4.102.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1
pub const MPEG4HP41BD: &str = "1.2.840.10008.1.2.4.103";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1
pub const MPEG4HP41BDF: &str = "1.2.840.10008.1.2.4.103.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video
pub const MPEG4HP422D: &str = "1.2.840.10008.1.2.4.104";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video
pub const MPEG4HP422DF: &str = "1.2.840.10008.1.2.4.104.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video
pub const MPEG4HP423D: &str = "1.2.840.10008.1.2.4.105";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video
pub const MPEG4HP423DF: &str = "1.2.840.10008.1.2.4.105.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2
pub const MPEG4HP42_STEREO: &str = "1.2.840.10008.1.2.4.106";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2
pub const MPEG4HP42_STEREOF: &str = "1.2.840.10008.1.2.4.106.1";
/// Transfer Syntax: HEVC/H.265 Main Profile / Level 5.1
pub const HEVCMP51: &str = "1.2.840.10008.1.2.4.107";
/// Transfer Syntax: HEVC/H.265 Main 10 Profile / Level 5.1
pub const HEVCM10P51: &str = "1.2.840.10008.1.2.4.108";

/// Transfer Syntax: High-Throughput JPEG 2000 Image Compression (Lossless Only)
pub const HTJ2K_LOSSLESS: &str = "1.2.840.10008.1.2.4.201";
/// Transfer Syntax: High-Throughput JPEG 2000 with RPCL Options Image Compression (Lossless Only)
pub const HTJ2K_LOSSLESS_RPCL: &str = "1.2.840.10008.1.2.4.202";
/// Transfer Syntax: High-Throughput JPEG 2000 Image Compression
pub const HTJ2K: &str = "1.2.840.10008.1.2.4.203";
/// Transfer Syntax: JPIP HTJ2K Referenced
pub const JPIPHTJ2K_REFERENCED: &str = "1.2.840.10008.1.2.4.204";
/// Transfer Syntax: JPIP HTJ2K Referenced Deflate
pub const JPIPHTJ2K_REFERENCED_DEFLATE: &str = "1.2.840.10008.1.2.4.205";

/// Transfer Syntax: RLE Lossless
pub const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";

/// Transfer Syntax: Private GE Implicit VR Little Endian with big endian pixel data
pub const PRIVATE_GE_IMPLICIT_VR_LITTLE_ENDIAN_BIG_ENDIAN_PIXEL_DATA: &str = "1.2.840.113619.5.2";

/// Legacy alias of [`IMPLICIT_VR_BIG_ENDIAN`]
pub const IMPLICIT_VR_BIG_ENDIAN_LEGACY: &str = "1.2.276.0.7230010.3.1.2.2.1";
/// Historically mistyped alias of [`JPEG2000MC`]
pub const JPEG2000MC_MISTYPED: &str = "1.2.840.10008.1.2.4.9.3";
