//! Domain intrinsic catalog.
//!
//! Intrinsics are call-like operations identified by a fixed name. The
//! catalog is closed: each entry is declared once below together with its
//! printed name and its [`IntrinsicCategory`]. Prefix conventions in the
//! names: `f` operates on floating point data, `r` returns a narrowed
//! (1..4 lane) result.

use std::fmt;
use std::str::FromStr;

/// Coarse grouping of intrinsics by what they do to lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntrinsicCategory {
    /// Reads and writes of pipeline inputs/outputs and interpolants.
    Pipeline,
    /// Bit packing and unpacking between vectors and scalars.
    Packing,
    /// Texture sampling, texel fetch and gather.
    TextureSample,
    /// Texture size and LOD queries.
    TextureQuery,
    /// Geometric functions over whole vectors.
    Geometry,
    /// Screen-space derivatives and the fixed-function transform.
    Derivative,
    /// Horizontal reductions.
    VectorReduction,
    /// Elementwise floating point math.
    FloatMath,
    /// Elementwise integer math.
    IntegerMath,
    /// Elementwise bit manipulation and reinterpretation.
    BitManipulation,
    /// Lane assembly (swizzles and multi-inserts).
    VectorAssembly,
    /// Primitive emission, barriers and discard.
    Control,
}

macro_rules! intrinsics {
    ($($category:ident { $($variant:ident => $name:literal,)* })*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Intrinsic {
            $($($variant,)*)*
        }

        impl Intrinsic {
            pub const ALL: &'static [Intrinsic] = &[$($(Intrinsic::$variant,)*)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $($(Intrinsic::$variant => $name,)*)*
                }
            }

            pub const fn category(self) -> IntrinsicCategory {
                match self {
                    $($(Intrinsic::$variant => IntrinsicCategory::$category,)*)*
                }
            }
        }
    };
}

intrinsics! {
    Pipeline {
        ReadData => "readData",
        FReadData => "fReadData",
        FWriteInterpolant => "fWriteInterpolant",
        FReadInterpolant => "fReadInterpolant",
        FReadInterpolantOffset => "fReadInterpolantOffset",
        GetInterpolant => "getInterpolant",
        WriteData => "writeData",
        FWriteData => "fWriteData",
    }
    Packing {
        FPackUnorm2x16 => "fPackUnorm2x16",
        FPackUnorm4x8 => "fPackUnorm4x8",
        FPackSnorm4x8 => "fPackSnorm4x8",
        FUnpackUnorm2x16 => "fUnpackUnorm2x16",
        FUnpackUnorm4x8 => "fUnpackUnorm4x8",
        FUnpackSnorm4x8 => "fUnpackSnorm4x8",
        FPackDouble2x32 => "fPackDouble2x32",
        FUnpackDouble2x32 => "fUnpackDouble2x32",
    }
    TextureSample {
        TextureSample => "textureSample",
        FTextureSample => "fTextureSample",
        RTextureSample1 => "rTextureSample1",
        FRTextureSample1 => "fRTextureSample1",
        RTextureSample2 => "rTextureSample2",
        FRTextureSample2 => "fRTextureSample2",
        RTextureSample3 => "rTextureSample3",
        FRTextureSample3 => "fRTextureSample3",
        RTextureSample4 => "rTextureSample4",
        FRTextureSample4 => "fRTextureSample4",
        TextureSampleLodRefZ => "textureSampleLodRefZ",
        FTextureSampleLodRefZ => "fTextureSampleLodRefZ",
        RTextureSampleLodRefZ1 => "rTextureSampleLodRefZ1",
        FRTextureSampleLodRefZ1 => "fRTextureSampleLodRefZ1",
        RTextureSampleLodRefZ2 => "rTextureSampleLodRefZ2",
        FRTextureSampleLodRefZ2 => "fRTextureSampleLodRefZ2",
        RTextureSampleLodRefZ3 => "rTextureSampleLodRefZ3",
        FRTextureSampleLodRefZ3 => "fRTextureSampleLodRefZ3",
        RTextureSampleLodRefZ4 => "rTextureSampleLodRefZ4",
        FRTextureSampleLodRefZ4 => "fRTextureSampleLodRefZ4",
        TextureSampleLodRefZOffset => "textureSampleLodRefZOffset",
        FTextureSampleLodRefZOffset => "fTextureSampleLodRefZOffset",
        RTextureSampleLodRefZOffset1 => "rTextureSampleLodRefZOffset1",
        FRTextureSampleLodRefZOffset1 => "fRTextureSampleLodRefZOffset1",
        RTextureSampleLodRefZOffset2 => "rTextureSampleLodRefZOffset2",
        FRTextureSampleLodRefZOffset2 => "fRTextureSampleLodRefZOffset2",
        RTextureSampleLodRefZOffset3 => "rTextureSampleLodRefZOffset3",
        FRTextureSampleLodRefZOffset3 => "fRTextureSampleLodRefZOffset3",
        RTextureSampleLodRefZOffset4 => "rTextureSampleLodRefZOffset4",
        FRTextureSampleLodRefZOffset4 => "fRTextureSampleLodRefZOffset4",
        TextureSampleLodRefZOffsetGrad => "textureSampleLodRefZOffsetGrad",
        FTextureSampleLodRefZOffsetGrad => "fTextureSampleLodRefZOffsetGrad",
        RTextureSampleLodRefZOffsetGrad1 => "rTextureSampleLodRefZOffsetGrad1",
        FRTextureSampleLodRefZOffsetGrad1 => "fRTextureSampleLodRefZOffsetGrad1",
        RTextureSampleLodRefZOffsetGrad2 => "rTextureSampleLodRefZOffsetGrad2",
        FRTextureSampleLodRefZOffsetGrad2 => "fRTextureSampleLodRefZOffsetGrad2",
        RTextureSampleLodRefZOffsetGrad3 => "rTextureSampleLodRefZOffsetGrad3",
        FRTextureSampleLodRefZOffsetGrad3 => "fRTextureSampleLodRefZOffsetGrad3",
        RTextureSampleLodRefZOffsetGrad4 => "rTextureSampleLodRefZOffsetGrad4",
        FRTextureSampleLodRefZOffsetGrad4 => "fRTextureSampleLodRefZOffsetGrad4",
        TexelFetchOffset => "texelFetchOffset",
        FTexelFetchOffset => "fTexelFetchOffset",
        TexelGather => "texelGather",
        FTexelGather => "fTexelGather",
        TexelGatherOffset => "texelGatherOffset",
        FTexelGatherOffset => "fTexelGatherOffset",
        TexelGatherOffsets => "texelGatherOffsets",
        FTexelGatherOffsets => "fTexelGatherOffsets",
    }
    TextureQuery {
        QueryTextureSize => "queryTextureSize",
        FQueryTextureLod => "fQueryTextureLod",
    }
    Geometry {
        FLength => "fLength",
        FDistance => "fDistance",
        FDot2 => "fDot2",
        FDot3 => "fDot3",
        FDot4 => "fDot4",
        FCross => "fCross",
        FNormalize => "fNormalize",
        FNormalize3D => "fNormalize3D",
        FLit => "fLit",
        FFaceForward => "fFaceForward",
        FReflect => "fReflect",
        FRefract => "fRefract",
    }
    Derivative {
        FDFdx => "fDFdx",
        FDFdy => "fDFdy",
        FFilterWidth => "fFilterWidth",
        FFixedTransform => "fFixedTransform",
    }
    VectorReduction {
        Any => "any",
        All => "all",
    }
    FloatMath {
        FSaturate => "fSaturate",
        FClamp => "fClamp",
        FMin => "fMin",
        FMax => "fMax",
        FAbs => "fAbs",
        FSign => "fSign",
        FFloor => "fFloor",
        FCeiling => "fCeiling",
        FRoundEven => "fRoundEven",
        FRoundZero => "fRoundZero",
        FRoundFast => "fRoundFast",
        FFraction => "fFraction",
        FModF => "fModF",
        FMix => "fMix",
        FStep => "fStep",
        FSmoothStep => "fSmoothStep",
        FIsNan => "fIsNan",
        FIsInf => "fIsInf",
        FFma => "fFma",
        FSqrt => "fSqrt",
        FInverseSqrt => "fInverseSqrt",
        FSin => "fSin",
        FCos => "fCos",
        FTan => "fTan",
        FAsin => "fAsin",
        FAcos => "fAcos",
        FAtan => "fAtan",
        FAtan2 => "fAtan2",
        FSinh => "fSinh",
        FCosh => "fCosh",
        FTanh => "fTanh",
        FAsinh => "fAsinh",
        FAcosh => "fAcosh",
        FAtanh => "fAtanh",
        FPow => "fPow",
        FPowi => "fPowi",
        FExp => "fExp",
        FLog => "fLog",
        FExp2 => "fExp2",
        FLog2 => "fLog2",
        FExp10 => "fExp10",
        FLog10 => "fLog10",
    }
    IntegerMath {
        SMin => "sMin",
        SMax => "sMax",
        UMin => "uMin",
        UMax => "uMax",
        SClamp => "sClamp",
        UClamp => "uClamp",
        Abs => "abs",
        Sign => "sign",
        AddCarry => "addCarry",
        SubBorrow => "subBorrow",
        UMulExtended => "umulExtended",
        SMulExtended => "smulExtended",
    }
    BitManipulation {
        SBitFieldExtract => "sBitFieldExtract",
        UBitFieldExtract => "uBitFieldExtract",
        BitFieldInsert => "bitFieldInsert",
        BitReverse => "bitReverse",
        BitCount => "bitCount",
        FindLSB => "findLSB",
        SFindMSB => "sFindMSB",
        UFindMSB => "uFindMSB",
        FFrexp => "fFrexp",
        FLdexp => "fLdexp",
        FloatBitsToInt => "floatBitsToInt",
        IntBitsToFloat => "intBitsToFloat",
    }
    VectorAssembly {
        Swizzle => "swizzle",
        FSwizzle => "fSwizzle",
        MultiInsert => "multiInsert",
        FMultiInsert => "fMultiInsert",
    }
    Control {
        EmitVertex => "emitVertex",
        EndPrimitive => "endPrimitive",
        EmitStreamVertex => "emitStreamVertex",
        EndStreamPrimitive => "endStreamPrimitive",
        Barrier => "barrier",
        MemoryBarrier => "memoryBarrier",
        DiscardConditional => "discardConditional",
    }
}


impl fmt::Display for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Intrinsic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intrinsic::ALL
            .iter()
            .copied()
            .find(|intr| intr.name() == s)
            .ok_or_else(|| format!("unknown intrinsic '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsic_names_are_unique_and_parse_back() {
        let mut seen = hashbrown::HashSet::new();
        for &intr in Intrinsic::ALL {
            assert!(seen.insert(intr.name()), "duplicate name {}", intr.name());
            assert_eq!(intr.name().parse::<Intrinsic>(), Ok(intr));
        }
        assert!("fTextureSampleLater".parse::<Intrinsic>().is_err());
    }

    #[test]
    fn test_categories() {
        assert_eq!(Intrinsic::FTextureSample.category(), IntrinsicCategory::TextureSample);
        assert_eq!(Intrinsic::FTexelGatherOffsets.category(), IntrinsicCategory::TextureSample);
        assert_eq!(Intrinsic::FDot3.category(), IntrinsicCategory::Geometry);
        assert_eq!(Intrinsic::Any.category(), IntrinsicCategory::VectorReduction);
        assert_eq!(Intrinsic::FClamp.category(), IntrinsicCategory::FloatMath);
        assert_eq!(Intrinsic::QueryTextureSize.category(), IntrinsicCategory::TextureQuery);
    }
}
