//! The closed set of transfer syntax identities known to the registry.
use crate::entries::{find_by_any, lookup};
use snafu::{ensure, Snafu};
use std::fmt;
use std::str::FromStr;

/// Error raised when strictly parsing a transfer syntax
/// from a string which is neither a known UID nor a known keyword.
#[derive(Debug, Snafu)]
#[snafu(display("Unknown transfer syntax `{}`", value))]
pub struct UnknownTransferSyntaxError {
    value: String,
}

impl UnknownTransferSyntaxError {
    /// The string which failed to resolve.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Identity of a transfer syntax known to the registry.
///
/// Each well-known variant has exactly one entry in the catalog,
/// which can be retrieved with [`properties`](TransferSyntaxId::properties).
/// `Unknown` stands for any transfer syntax which could not be resolved,
/// and is also the identity of data sets created in memory.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum TransferSyntaxId {
    /// unknown transfer syntax, or data set created in memory
    #[default]
    Unknown,
    /// Implicit VR Little Endian
    LittleEndianImplicit,
    /// Implicit VR Big Endian (virtual, no standard transfer syntax exists)
    BigEndianImplicit,
    /// Explicit VR Little Endian
    LittleEndianExplicit,
    /// Explicit VR Big Endian
    BigEndianExplicit,
    /// JPEG Baseline (Process 1)
    JpegProcess1,
    /// JPEG Extended Sequential (Processes 2 & 4)
    JpegProcess2_4,
    /// JPEG Extended Sequential, arithmetic coding (Processes 3 & 5)
    JpegProcess3_5,
    /// JPEG Spectral Selection, Non-Hierarchical (Processes 6 & 8)
    JpegProcess6_8,
    /// JPEG Spectral Selection, Non-Hierarchical, arithmetic coding (Processes 7 & 9)
    JpegProcess7_9,
    /// JPEG Full Progression, Non-Hierarchical (Processes 10 & 12)
    JpegProcess10_12,
    /// JPEG Full Progression, Non-Hierarchical, arithmetic coding (Processes 11 & 13)
    JpegProcess11_13,
    /// JPEG Lossless, Non-Hierarchical (Process 14)
    JpegProcess14,
    /// JPEG Lossless, Non-Hierarchical, arithmetic coding (Process 15)
    JpegProcess15,
    /// JPEG Extended, Hierarchical (Processes 16 & 18)
    JpegProcess16_18,
    /// JPEG Extended, Hierarchical, arithmetic coding (Processes 17 & 19)
    JpegProcess17_19,
    /// JPEG Spectral Selection, Hierarchical (Processes 20 & 22)
    JpegProcess20_22,
    /// JPEG Spectral Selection, Hierarchical, arithmetic coding (Processes 21 & 23)
    JpegProcess21_23,
    /// JPEG Full Progression, Hierarchical (Processes 24 & 26)
    JpegProcess24_26,
    /// JPEG Full Progression, Hierarchical, arithmetic coding (Processes 25 & 27)
    JpegProcess25_27,
    /// JPEG Lossless, Hierarchical (Process 28)
    JpegProcess28,
    /// JPEG Lossless, Hierarchical, arithmetic coding (Process 29)
    JpegProcess29,
    /// JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14, Selection Value 1)
    JpegProcess14Sv1,
    /// RLE Lossless
    RleLossless,
    /// Deflated Explicit VR Little Endian
    DeflatedLittleEndianExplicit,
    /// JPEG-LS Lossless
    JpegLsLossless,
    /// JPEG-LS Lossy (Near-Lossless)
    JpegLsLossy,
    /// JPEG 2000 (Lossless Only)
    Jpeg2000LosslessOnly,
    /// JPEG 2000 (lossless or lossy)
    Jpeg2000,
    /// JPEG 2000 Part 2 Multi-component (Lossless Only)
    Jpeg2000MulticomponentLosslessOnly,
    /// JPEG 2000 Part 2 Multi-component (lossless or lossy)
    Jpeg2000Multicomponent,
    /// JPIP Referenced
    JpipReferenced,
    /// JPIP Referenced Deflate
    JpipReferencedDeflate,
    /// MPEG2 Main Profile / Main Level
    Mpeg2MainProfileMainLevel,
    /// Fragmentable MPEG2 Main Profile / Main Level
    FragmentableMpeg2MainProfileMainLevel,
    /// MPEG2 Main Profile / High Level
    Mpeg2MainProfileHighLevel,
    /// Fragmentable MPEG2 Main Profile / High Level
    FragmentableMpeg2MainProfileHighLevel,
    /// MPEG-4 AVC/H.264 High Profile / Level 4.1
    Mpeg4HighProfileLevel4_1,
    /// Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.1
    FragmentableMpeg4HighProfileLevel4_1,
    /// MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1
    Mpeg4BdCompatibleHighProfileLevel4_1,
    /// Fragmentable MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1
    FragmentableMpeg4BdCompatibleHighProfileLevel4_1,
    /// MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video
    Mpeg4HighProfileLevel4_2For2dVideo,
    /// Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video
    FragmentableMpeg4HighProfileLevel4_2For2dVideo,
    /// MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video
    Mpeg4HighProfileLevel4_2For3dVideo,
    /// Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video
    FragmentableMpeg4HighProfileLevel4_2For3dVideo,
    /// MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2
    Mpeg4StereoHighProfileLevel4_2,
    /// Fragmentable MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2
    FragmentableMpeg4StereoHighProfileLevel4_2,
    /// HEVC/H.265 Main Profile / Level 5.1
    HevcMainProfileLevel5_1,
    /// HEVC/H.265 Main 10 Profile / Level 5.1
    HevcMain10ProfileLevel5_1,
    /// High-Throughput JPEG 2000 (Lossless Only)
    HighThroughputJpeg2000LosslessOnly,
    /// High-Throughput JPEG 2000 with RPCL Options (Lossless Only)
    HighThroughputJpeg2000WithRpclOptionsLosslessOnly,
    /// High-Throughput JPEG 2000 (lossless or lossy)
    HighThroughputJpeg2000,
    /// JPIP HTJ2K Referenced
    JpipHtj2kReferenced,
    /// JPIP HTJ2K Referenced Deflate
    JpipHtj2kReferencedDeflate,
    /// Private GE Implicit VR Little Endian with big endian pixel data
    PrivateGeImplicitLittleEndianBigEndianPixelData,
}

impl TransferSyntaxId {
    /// All well-known identities, in catalog order.
    /// The position of each identity in this array is its numeric code.
    pub const ALL: [TransferSyntaxId; 54] = {
        use TransferSyntaxId::*;
        [
            LittleEndianImplicit,
            BigEndianImplicit,
            LittleEndianExplicit,
            BigEndianExplicit,
            JpegProcess1,
            JpegProcess2_4,
            JpegProcess3_5,
            JpegProcess6_8,
            JpegProcess7_9,
            JpegProcess10_12,
            JpegProcess11_13,
            JpegProcess14,
            JpegProcess15,
            JpegProcess16_18,
            JpegProcess17_19,
            JpegProcess20_22,
            JpegProcess21_23,
            JpegProcess24_26,
            JpegProcess25_27,
            JpegProcess28,
            JpegProcess29,
            JpegProcess14Sv1,
            RleLossless,
            DeflatedLittleEndianExplicit,
            JpegLsLossless,
            JpegLsLossy,
            Jpeg2000LosslessOnly,
            Jpeg2000,
            Jpeg2000MulticomponentLosslessOnly,
            Jpeg2000Multicomponent,
            JpipReferenced,
            JpipReferencedDeflate,
            Mpeg2MainProfileMainLevel,
            FragmentableMpeg2MainProfileMainLevel,
            Mpeg2MainProfileHighLevel,
            FragmentableMpeg2MainProfileHighLevel,
            Mpeg4HighProfileLevel4_1,
            FragmentableMpeg4HighProfileLevel4_1,
            Mpeg4BdCompatibleHighProfileLevel4_1,
            FragmentableMpeg4BdCompatibleHighProfileLevel4_1,
            Mpeg4HighProfileLevel4_2For2dVideo,
            FragmentableMpeg4HighProfileLevel4_2For2dVideo,
            Mpeg4HighProfileLevel4_2For3dVideo,
            FragmentableMpeg4HighProfileLevel4_2For3dVideo,
            Mpeg4StereoHighProfileLevel4_2,
            FragmentableMpeg4StereoHighProfileLevel4_2,
            HevcMainProfileLevel5_1,
            HevcMain10ProfileLevel5_1,
            HighThroughputJpeg2000LosslessOnly,
            HighThroughputJpeg2000WithRpclOptionsLosslessOnly,
            HighThroughputJpeg2000,
            JpipHtj2kReferenced,
            JpipHtj2kReferencedDeflate,
            PrivateGeImplicitLittleEndianBigEndianPixelData,
        ]
    };

    /// Obtain the numeric code of this identity:
    /// its position in [`ALL`](Self::ALL), or -1 for `Unknown`.
    pub fn code(self) -> i32 {
        match self.index() {
            Some(i) => i as i32,
            None => -1,
        }
    }

    /// Obtain the identity with the given numeric code.
    /// Codes out of range resolve to `Unknown`.
    pub fn from_code(code: i32) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(TransferSyntaxId::Unknown)
    }

    /// Whether this is the `Unknown` identity.
    #[inline]
    pub fn is_unknown(self) -> bool {
        self == TransferSyntaxId::Unknown
    }

    /// Obtain the catalog entry of this identity.
    #[inline]
    pub fn properties(self) -> &'static crate::TransferSyntaxProperties {
        lookup(self)
    }

    /// Position of this identity in the catalog.
    pub(crate) fn index(self) -> Option<usize> {
        // variants are declared in catalog order, right after `Unknown`
        (self as usize).checked_sub(1)
    }
}

impl fmt::Display for TransferSyntaxId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_unknown() {
            f.write_str("Unknown Transfer Syntax")
        } else {
            f.write_str(self.properties().name)
        }
    }
}

/// Strict parsing of a transfer syntax UID, keyword or name.
///
/// Unlike the lookup functions of this crate,
/// a string which does not resolve is reported as an error.
impl FromStr for TransferSyntaxId {
    type Err = UnknownTransferSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = find_by_any(s);
        ensure!(!id.is_unknown(), UnknownTransferSyntaxSnafu { value: s });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::TransferSyntaxId;

    #[test]
    fn codes_follow_catalog_order() {
        assert_eq!(TransferSyntaxId::Unknown.code(), -1);
        assert_eq!(TransferSyntaxId::LittleEndianImplicit.code(), 0);
        assert_eq!(TransferSyntaxId::DeflatedLittleEndianExplicit.code(), 23);
        assert_eq!(
            TransferSyntaxId::PrivateGeImplicitLittleEndianBigEndianPixelData.code(),
            53
        );
        for (i, id) in TransferSyntaxId::ALL.iter().enumerate() {
            assert_eq!(id.code(), i as i32);
            assert_eq!(TransferSyntaxId::from_code(i as i32), *id);
        }
    }

    #[test]
    fn out_of_range_codes_are_unknown() {
        assert_eq!(TransferSyntaxId::from_code(-1), TransferSyntaxId::Unknown);
        assert_eq!(TransferSyntaxId::from_code(-40), TransferSyntaxId::Unknown);
        assert_eq!(TransferSyntaxId::from_code(54), TransferSyntaxId::Unknown);
    }

    #[test]
    fn parse_uid_or_keyword() {
        assert_eq!(
            "1.2.840.10008.1.2.4.50"
                .parse::<TransferSyntaxId>()
                .unwrap(),
            TransferSyntaxId::JpegProcess1
        );
        assert_eq!(
            "RLELossless".parse::<TransferSyntaxId>().unwrap(),
            TransferSyntaxId::RleLossless
        );
        let err = "rlelossless".parse::<TransferSyntaxId>().unwrap_err();
        assert_eq!(err.value(), "rlelossless");
        assert_eq!(err.to_string(), "Unknown transfer syntax `rlelossless`");
    }

    #[test]
    fn display_name() {
        assert_eq!(
            TransferSyntaxId::LittleEndianExplicit.to_string(),
            "Explicit VR Little Endian"
        );
        assert_eq!(
            TransferSyntaxId::Unknown.to_string(),
            "Unknown Transfer Syntax"
        );
    }
}
