// Copyright (c) 2024 The sample-counts developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! The formats whose sample counts are checked.
//!
//! A format describes the texel data of an image. For the purpose of the supported sample count
//! rules, what matters about a format is its *class*: whether it is a color format (and then
//! whether its numeric type is floating-point, fixed-point or integer), a depth and/or stencil
//! format, a block-compressed format or a YCbCr format. The class decides which device limit the
//! reported sample counts are compared against.
//!
//! # Depth/stencil formats
//!
//! Depth/stencil formats can be identified by the `D` and `S` components in their names. Some
//! formats have only a depth or stencil component, while others combine both. The two components
//! are represented as separate *aspects*.
//!
//! # Block-compressed formats
//!
//! A block-compressed format encodes a block of texels into a smaller number of bytes. There is
//! no device limit for these formats, so they never have an expected set of sample counts.
//!
//! # YCbCr formats
//!
//! YCbCr formats are primarily used in video applications. Most of them make use of chroma
//! subsampling and many are *multi-planar*, storing the components in separate planes that act
//! like independent images. Images of these formats must be single-sampled.

use crate::{
    image::ImageAspects,
    macros::vulkan_bitflags,
};
use std::fmt::{Display, Error as FmtError, Formatter};

/// The class of a format, which decides the device limits that apply to it.
///
/// Every format belongs to exactly one class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatClass {
    /// An uncompressed color format with a floating-point numeric type.
    ColorFloat,
    /// An uncompressed color format with a normalized or scaled numeric type.
    ColorFixedPoint,
    /// An uncompressed color format with an integer numeric type.
    ColorInteger,
    /// A format with only a depth aspect.
    Depth,
    /// A format with only a stencil aspect.
    Stencil,
    /// A format with both a depth and a stencil aspect.
    DepthStencil,
    /// A block-compressed color format.
    Compressed,
    /// A YCbCr format, packed or multi-planar.
    Ycbcr,
}

impl FormatClass {
    /// Returns whether the class is one of the uncompressed color classes.
    #[inline]
    pub const fn is_color(self) -> bool {
        matches!(
            self,
            FormatClass::ColorFloat | FormatClass::ColorFixedPoint | FormatClass::ColorInteger
        )
    }

    /// Returns whether the class has a depth aspect.
    #[inline]
    pub const fn has_depth(self) -> bool {
        matches!(self, FormatClass::Depth | FormatClass::DepthStencil)
    }

    /// Returns whether the class has a stencil aspect.
    #[inline]
    pub const fn has_stencil(self) -> bool {
        matches!(self, FormatClass::Stencil | FormatClass::DepthStencil)
    }
}

/// The numeric type that represents data of a format in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum NumericType {
    /// Signed floating-point number.
    SFLOAT,
    /// Unsigned floating-point number.
    UFLOAT,
    /// Signed integer.
    SINT,
    /// Unsigned integer.
    UINT,
    /// Signed integer that represents a normalized floating-point value in the range \[-1,1].
    SNORM,
    /// Unsigned integer that represents a normalized floating-point value in the range \[0,1].
    UNORM,
    /// Signed integer that is converted to a floating-point value directly.
    SSCALED,
    /// Unsigned integer that is converted to a floating-point value directly.
    USCALED,
    /// Unsigned integer where R, G, B components represent a normalized floating-point value in the
    /// sRGB color space, while the A component is a simple normalized value as in `UNORM`.
    SRGB,
}

impl NumericType {
    /// Returns whether the numeric type is `SINT` or `UINT`.
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, NumericType::SINT | NumericType::UINT)
    }
}

/// The block compression scheme used in a format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(non_camel_case_types)]
pub enum CompressionType {
    /// Adaptive Scalable Texture Compression, low dynamic range.
    ASTC_LDR,
    /// Adaptive Scalable Texture Compression, high dynamic range.
    ASTC_HDR,
    /// S3TC Block Compression.
    BC,
    /// Ericsson Texture Compression 2.
    ETC2,
    /// ETC2 Alpha Compression.
    EAC,
    /// PowerVR Texture Compression.
    PVRTC,
}

/// For YCbCr formats, the type of chroma sampling used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChromaSampling {
    /// The chroma components are represented at the same resolution as the luma component.
    Mode444,
    /// The chroma components have half the horizontal resolution as the luma component.
    Mode422,
    /// The chroma components have half the horizontal and vertical resolution as the luma
    /// component.
    Mode420,
}

macro_rules! formats {
    {
        $(
            $name:ident = $ffi:ident [$class:ident, $numeric_type:ident $(, $compression:ident)?],
        )+
    } => {
        /// An image format.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[allow(non_camel_case_types)]
        #[repr(i32)]
        pub enum Format {
            $(
                $name = ash::vk::Format::$ffi.as_raw(),
            )+
        }

        impl Format {
            /// Every format, in the order in which the cases are registered.
            pub const ALL: &'static [Format] = &[$(Format::$name),+];

            /// Returns the name of the format, as it is spelled in the Vulkan registry without
            /// the `VK_FORMAT_` prefix.
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Format::$name => stringify!($name),)+
                }
            }

            /// Returns the class of the format.
            #[inline]
            pub const fn class(self) -> FormatClass {
                match self {
                    $(Format::$name => FormatClass::$class,)+
                }
            }

            /// Returns the numeric type of the format.
            ///
            /// For combined depth/stencil formats this is the numeric type of the depth aspect.
            #[inline]
            pub const fn numeric_type(self) -> NumericType {
                match self {
                    $(Format::$name => NumericType::$numeric_type,)+
                }
            }

            /// Returns the block compression scheme of the format, if it is compressed.
            #[inline]
            pub const fn compression(self) -> Option<CompressionType> {
                match self {
                    $(Format::$name => formats!(@compression $($compression)?),)+
                }
            }
        }

        impl TryFrom<ash::vk::Format> for Format {
            type Error = ();

            #[inline]
            fn try_from(val: ash::vk::Format) -> Result<Self, Self::Error> {
                Ok(match val {
                    $(
                        ash::vk::Format::$ffi => Format::$name,
                    )+
                    _ => return Err(()),
                })
            }
        }
    };

    (@compression) => { None };
    (@compression $compression:ident) => { Some(CompressionType::$compression) };
}

formats! {
    R4G4_UNORM_PACK8 = R4G4_UNORM_PACK8 [ColorFixedPoint, UNORM],
    R4G4B4A4_UNORM_PACK16 = R4G4B4A4_UNORM_PACK16 [ColorFixedPoint, UNORM],
    B4G4R4A4_UNORM_PACK16 = B4G4R4A4_UNORM_PACK16 [ColorFixedPoint, UNORM],
    R5G6B5_UNORM_PACK16 = R5G6B5_UNORM_PACK16 [ColorFixedPoint, UNORM],
    B5G6R5_UNORM_PACK16 = B5G6R5_UNORM_PACK16 [ColorFixedPoint, UNORM],
    R5G5B5A1_UNORM_PACK16 = R5G5B5A1_UNORM_PACK16 [ColorFixedPoint, UNORM],
    B5G5R5A1_UNORM_PACK16 = B5G5R5A1_UNORM_PACK16 [ColorFixedPoint, UNORM],
    A1R5G5B5_UNORM_PACK16 = A1R5G5B5_UNORM_PACK16 [ColorFixedPoint, UNORM],
    R8_UNORM = R8_UNORM [ColorFixedPoint, UNORM],
    R8_SNORM = R8_SNORM [ColorFixedPoint, SNORM],
    R8_USCALED = R8_USCALED [ColorFixedPoint, USCALED],
    R8_SSCALED = R8_SSCALED [ColorFixedPoint, SSCALED],
    R8_UINT = R8_UINT [ColorInteger, UINT],
    R8_SINT = R8_SINT [ColorInteger, SINT],
    R8_SRGB = R8_SRGB [ColorFixedPoint, SRGB],
    R8G8_UNORM = R8G8_UNORM [ColorFixedPoint, UNORM],
    R8G8_SNORM = R8G8_SNORM [ColorFixedPoint, SNORM],
    R8G8_USCALED = R8G8_USCALED [ColorFixedPoint, USCALED],
    R8G8_SSCALED = R8G8_SSCALED [ColorFixedPoint, SSCALED],
    R8G8_UINT = R8G8_UINT [ColorInteger, UINT],
    R8G8_SINT = R8G8_SINT [ColorInteger, SINT],
    R8G8_SRGB = R8G8_SRGB [ColorFixedPoint, SRGB],
    R8G8B8_UNORM = R8G8B8_UNORM [ColorFixedPoint, UNORM],
    R8G8B8_SNORM = R8G8B8_SNORM [ColorFixedPoint, SNORM],
    R8G8B8_USCALED = R8G8B8_USCALED [ColorFixedPoint, USCALED],
    R8G8B8_SSCALED = R8G8B8_SSCALED [ColorFixedPoint, SSCALED],
    R8G8B8_UINT = R8G8B8_UINT [ColorInteger, UINT],
    R8G8B8_SINT = R8G8B8_SINT [ColorInteger, SINT],
    R8G8B8_SRGB = R8G8B8_SRGB [ColorFixedPoint, SRGB],
    B8G8R8_UNORM = B8G8R8_UNORM [ColorFixedPoint, UNORM],
    B8G8R8_SNORM = B8G8R8_SNORM [ColorFixedPoint, SNORM],
    B8G8R8_USCALED = B8G8R8_USCALED [ColorFixedPoint, USCALED],
    B8G8R8_SSCALED = B8G8R8_SSCALED [ColorFixedPoint, SSCALED],
    B8G8R8_UINT = B8G8R8_UINT [ColorInteger, UINT],
    B8G8R8_SINT = B8G8R8_SINT [ColorInteger, SINT],
    B8G8R8_SRGB = B8G8R8_SRGB [ColorFixedPoint, SRGB],
    R8G8B8A8_UNORM = R8G8B8A8_UNORM [ColorFixedPoint, UNORM],
    R8G8B8A8_SNORM = R8G8B8A8_SNORM [ColorFixedPoint, SNORM],
    R8G8B8A8_USCALED = R8G8B8A8_USCALED [ColorFixedPoint, USCALED],
    R8G8B8A8_SSCALED = R8G8B8A8_SSCALED [ColorFixedPoint, SSCALED],
    R8G8B8A8_UINT = R8G8B8A8_UINT [ColorInteger, UINT],
    R8G8B8A8_SINT = R8G8B8A8_SINT [ColorInteger, SINT],
    R8G8B8A8_SRGB = R8G8B8A8_SRGB [ColorFixedPoint, SRGB],
    B8G8R8A8_UNORM = B8G8R8A8_UNORM [ColorFixedPoint, UNORM],
    B8G8R8A8_SNORM = B8G8R8A8_SNORM [ColorFixedPoint, SNORM],
    B8G8R8A8_USCALED = B8G8R8A8_USCALED [ColorFixedPoint, USCALED],
    B8G8R8A8_SSCALED = B8G8R8A8_SSCALED [ColorFixedPoint, SSCALED],
    B8G8R8A8_UINT = B8G8R8A8_UINT [ColorInteger, UINT],
    B8G8R8A8_SINT = B8G8R8A8_SINT [ColorInteger, SINT],
    B8G8R8A8_SRGB = B8G8R8A8_SRGB [ColorFixedPoint, SRGB],
    A8B8G8R8_UNORM_PACK32 = A8B8G8R8_UNORM_PACK32 [ColorFixedPoint, UNORM],
    A8B8G8R8_SNORM_PACK32 = A8B8G8R8_SNORM_PACK32 [ColorFixedPoint, SNORM],
    A8B8G8R8_USCALED_PACK32 = A8B8G8R8_USCALED_PACK32 [ColorFixedPoint, USCALED],
    A8B8G8R8_SSCALED_PACK32 = A8B8G8R8_SSCALED_PACK32 [ColorFixedPoint, SSCALED],
    A8B8G8R8_UINT_PACK32 = A8B8G8R8_UINT_PACK32 [ColorInteger, UINT],
    A8B8G8R8_SINT_PACK32 = A8B8G8R8_SINT_PACK32 [ColorInteger, SINT],
    A8B8G8R8_SRGB_PACK32 = A8B8G8R8_SRGB_PACK32 [ColorFixedPoint, SRGB],
    A2R10G10B10_UNORM_PACK32 = A2R10G10B10_UNORM_PACK32 [ColorFixedPoint, UNORM],
    A2R10G10B10_SNORM_PACK32 = A2R10G10B10_SNORM_PACK32 [ColorFixedPoint, SNORM],
    A2R10G10B10_USCALED_PACK32 = A2R10G10B10_USCALED_PACK32 [ColorFixedPoint, USCALED],
    A2R10G10B10_SSCALED_PACK32 = A2R10G10B10_SSCALED_PACK32 [ColorFixedPoint, SSCALED],
    A2R10G10B10_UINT_PACK32 = A2R10G10B10_UINT_PACK32 [ColorInteger, UINT],
    A2R10G10B10_SINT_PACK32 = A2R10G10B10_SINT_PACK32 [ColorInteger, SINT],
    A2B10G10R10_UNORM_PACK32 = A2B10G10R10_UNORM_PACK32 [ColorFixedPoint, UNORM],
    A2B10G10R10_SNORM_PACK32 = A2B10G10R10_SNORM_PACK32 [ColorFixedPoint, SNORM],
    A2B10G10R10_USCALED_PACK32 = A2B10G10R10_USCALED_PACK32 [ColorFixedPoint, USCALED],
    A2B10G10R10_SSCALED_PACK32 = A2B10G10R10_SSCALED_PACK32 [ColorFixedPoint, SSCALED],
    A2B10G10R10_UINT_PACK32 = A2B10G10R10_UINT_PACK32 [ColorInteger, UINT],
    A2B10G10R10_SINT_PACK32 = A2B10G10R10_SINT_PACK32 [ColorInteger, SINT],
    R16_UNORM = R16_UNORM [ColorFixedPoint, UNORM],
    R16_SNORM = R16_SNORM [ColorFixedPoint, SNORM],
    R16_USCALED = R16_USCALED [ColorFixedPoint, USCALED],
    R16_SSCALED = R16_SSCALED [ColorFixedPoint, SSCALED],
    R16_UINT = R16_UINT [ColorInteger, UINT],
    R16_SINT = R16_SINT [ColorInteger, SINT],
    R16_SFLOAT = R16_SFLOAT [ColorFloat, SFLOAT],
    R16G16_UNORM = R16G16_UNORM [ColorFixedPoint, UNORM],
    R16G16_SNORM = R16G16_SNORM [ColorFixedPoint, SNORM],
    R16G16_USCALED = R16G16_USCALED [ColorFixedPoint, USCALED],
    R16G16_SSCALED = R16G16_SSCALED [ColorFixedPoint, SSCALED],
    R16G16_UINT = R16G16_UINT [ColorInteger, UINT],
    R16G16_SINT = R16G16_SINT [ColorInteger, SINT],
    R16G16_SFLOAT = R16G16_SFLOAT [ColorFloat, SFLOAT],
    R16G16B16_UNORM = R16G16B16_UNORM [ColorFixedPoint, UNORM],
    R16G16B16_SNORM = R16G16B16_SNORM [ColorFixedPoint, SNORM],
    R16G16B16_USCALED = R16G16B16_USCALED [ColorFixedPoint, USCALED],
    R16G16B16_SSCALED = R16G16B16_SSCALED [ColorFixedPoint, SSCALED],
    R16G16B16_UINT = R16G16B16_UINT [ColorInteger, UINT],
    R16G16B16_SINT = R16G16B16_SINT [ColorInteger, SINT],
    R16G16B16_SFLOAT = R16G16B16_SFLOAT [ColorFloat, SFLOAT],
    R16G16B16A16_UNORM = R16G16B16A16_UNORM [ColorFixedPoint, UNORM],
    R16G16B16A16_SNORM = R16G16B16A16_SNORM [ColorFixedPoint, SNORM],
    R16G16B16A16_USCALED = R16G16B16A16_USCALED [ColorFixedPoint, USCALED],
    R16G16B16A16_SSCALED = R16G16B16A16_SSCALED [ColorFixedPoint, SSCALED],
    R16G16B16A16_UINT = R16G16B16A16_UINT [ColorInteger, UINT],
    R16G16B16A16_SINT = R16G16B16A16_SINT [ColorInteger, SINT],
    R16G16B16A16_SFLOAT = R16G16B16A16_SFLOAT [ColorFloat, SFLOAT],
    R32_UINT = R32_UINT [ColorInteger, UINT],
    R32_SINT = R32_SINT [ColorInteger, SINT],
    R32_SFLOAT = R32_SFLOAT [ColorFloat, SFLOAT],
    R32G32_UINT = R32G32_UINT [ColorInteger, UINT],
    R32G32_SINT = R32G32_SINT [ColorInteger, SINT],
    R32G32_SFLOAT = R32G32_SFLOAT [ColorFloat, SFLOAT],
    R32G32B32_UINT = R32G32B32_UINT [ColorInteger, UINT],
    R32G32B32_SINT = R32G32B32_SINT [ColorInteger, SINT],
    R32G32B32_SFLOAT = R32G32B32_SFLOAT [ColorFloat, SFLOAT],
    R32G32B32A32_UINT = R32G32B32A32_UINT [ColorInteger, UINT],
    R32G32B32A32_SINT = R32G32B32A32_SINT [ColorInteger, SINT],
    R32G32B32A32_SFLOAT = R32G32B32A32_SFLOAT [ColorFloat, SFLOAT],
    R64_UINT = R64_UINT [ColorInteger, UINT],
    R64_SINT = R64_SINT [ColorInteger, SINT],
    R64_SFLOAT = R64_SFLOAT [ColorFloat, SFLOAT],
    R64G64_UINT = R64G64_UINT [ColorInteger, UINT],
    R64G64_SINT = R64G64_SINT [ColorInteger, SINT],
    R64G64_SFLOAT = R64G64_SFLOAT [ColorFloat, SFLOAT],
    R64G64B64_UINT = R64G64B64_UINT [ColorInteger, UINT],
    R64G64B64_SINT = R64G64B64_SINT [ColorInteger, SINT],
    R64G64B64_SFLOAT = R64G64B64_SFLOAT [ColorFloat, SFLOAT],
    R64G64B64A64_UINT = R64G64B64A64_UINT [ColorInteger, UINT],
    R64G64B64A64_SINT = R64G64B64A64_SINT [ColorInteger, SINT],
    R64G64B64A64_SFLOAT = R64G64B64A64_SFLOAT [ColorFloat, SFLOAT],
    B10G11R11_UFLOAT_PACK32 = B10G11R11_UFLOAT_PACK32 [ColorFloat, UFLOAT],
    E5B9G9R9_UFLOAT_PACK32 = E5B9G9R9_UFLOAT_PACK32 [ColorFloat, UFLOAT],
    D16_UNORM = D16_UNORM [Depth, UNORM],
    X8_D24_UNORM_PACK32 = X8_D24_UNORM_PACK32 [Depth, UNORM],
    D32_SFLOAT = D32_SFLOAT [Depth, SFLOAT],
    S8_UINT = S8_UINT [Stencil, UINT],
    D16_UNORM_S8_UINT = D16_UNORM_S8_UINT [DepthStencil, UNORM],
    D24_UNORM_S8_UINT = D24_UNORM_S8_UINT [DepthStencil, UNORM],
    D32_SFLOAT_S8_UINT = D32_SFLOAT_S8_UINT [DepthStencil, SFLOAT],
    BC1_RGB_UNORM_BLOCK = BC1_RGB_UNORM_BLOCK [Compressed, UNORM, BC],
    BC1_RGB_SRGB_BLOCK = BC1_RGB_SRGB_BLOCK [Compressed, SRGB, BC],
    BC1_RGBA_UNORM_BLOCK = BC1_RGBA_UNORM_BLOCK [Compressed, UNORM, BC],
    BC1_RGBA_SRGB_BLOCK = BC1_RGBA_SRGB_BLOCK [Compressed, SRGB, BC],
    BC2_UNORM_BLOCK = BC2_UNORM_BLOCK [Compressed, UNORM, BC],
    BC2_SRGB_BLOCK = BC2_SRGB_BLOCK [Compressed, SRGB, BC],
    BC3_UNORM_BLOCK = BC3_UNORM_BLOCK [Compressed, UNORM, BC],
    BC3_SRGB_BLOCK = BC3_SRGB_BLOCK [Compressed, SRGB, BC],
    BC4_UNORM_BLOCK = BC4_UNORM_BLOCK [Compressed, UNORM, BC],
    BC4_SNORM_BLOCK = BC4_SNORM_BLOCK [Compressed, SNORM, BC],
    BC5_UNORM_BLOCK = BC5_UNORM_BLOCK [Compressed, UNORM, BC],
    BC5_SNORM_BLOCK = BC5_SNORM_BLOCK [Compressed, SNORM, BC],
    BC6H_UFLOAT_BLOCK = BC6H_UFLOAT_BLOCK [Compressed, UFLOAT, BC],
    BC6H_SFLOAT_BLOCK = BC6H_SFLOAT_BLOCK [Compressed, SFLOAT, BC],
    BC7_UNORM_BLOCK = BC7_UNORM_BLOCK [Compressed, UNORM, BC],
    BC7_SRGB_BLOCK = BC7_SRGB_BLOCK [Compressed, SRGB, BC],
    ETC2_R8G8B8_UNORM_BLOCK = ETC2_R8G8B8_UNORM_BLOCK [Compressed, UNORM, ETC2],
    ETC2_R8G8B8_SRGB_BLOCK = ETC2_R8G8B8_SRGB_BLOCK [Compressed, SRGB, ETC2],
    ETC2_R8G8B8A1_UNORM_BLOCK = ETC2_R8G8B8A1_UNORM_BLOCK [Compressed, UNORM, ETC2],
    ETC2_R8G8B8A1_SRGB_BLOCK = ETC2_R8G8B8A1_SRGB_BLOCK [Compressed, SRGB, ETC2],
    ETC2_R8G8B8A8_UNORM_BLOCK = ETC2_R8G8B8A8_UNORM_BLOCK [Compressed, UNORM, ETC2],
    ETC2_R8G8B8A8_SRGB_BLOCK = ETC2_R8G8B8A8_SRGB_BLOCK [Compressed, SRGB, ETC2],
    EAC_R11_UNORM_BLOCK = EAC_R11_UNORM_BLOCK [Compressed, UNORM, EAC],
    EAC_R11_SNORM_BLOCK = EAC_R11_SNORM_BLOCK [Compressed, SNORM, EAC],
    EAC_R11G11_UNORM_BLOCK = EAC_R11G11_UNORM_BLOCK [Compressed, UNORM, EAC],
    EAC_R11G11_SNORM_BLOCK = EAC_R11G11_SNORM_BLOCK [Compressed, SNORM, EAC],
    ASTC_4x4_UNORM_BLOCK = ASTC_4X4_UNORM_BLOCK [Compressed, UNORM, ASTC_LDR],
    ASTC_4x4_SRGB_BLOCK = ASTC_4X4_SRGB_BLOCK [Compressed, SRGB, ASTC_LDR],
    ASTC_5x4_UNORM_BLOCK = ASTC_5X4_UNORM_BLOCK [Compressed, UNORM, ASTC_LDR],
    ASTC_5x4_SRGB_BLOCK = ASTC_5X4_SRGB_BLOCK [Compressed, SRGB, ASTC_LDR],
    ASTC_5x5_UNORM_BLOCK = ASTC_5X5_UNORM_BLOCK [Compressed, UNORM, ASTC_LDR],
    ASTC_5x5_SRGB_BLOCK = ASTC_5X5_SRGB_BLOCK [Compressed, SRGB, ASTC_LDR],
    ASTC_6x5_UNORM_BLOCK = ASTC_6X5_UNORM_BLOCK [Compressed, UNORM, ASTC_LDR],
    ASTC_6x5_SRGB_BLOCK = ASTC_6X5_SRGB_BLOCK [Compressed, SRGB, ASTC_LDR],
    ASTC_6x6_UNORM_BLOCK = ASTC_6X6_UNORM_BLOCK [Compressed, UNORM, ASTC_LDR],
    ASTC_6x6_SRGB_BLOCK = ASTC_6X6_SRGB_BLOCK [Compressed, SRGB, ASTC_LDR],
    ASTC_8x5_UNORM_BLOCK = ASTC_8X5_UNORM_BLOCK [Compressed, UNORM, ASTC_LDR],
    ASTC_8x5_SRGB_BLOCK = ASTC_8X5_SRGB_BLOCK [Compressed, SRGB, ASTC_LDR],
    ASTC_8x6_UNORM_BLOCK = ASTC_8X6_UNORM_BLOCK [Compressed, UNORM, ASTC_LDR],
    ASTC_8x6_SRGB_BLOCK = ASTC_8X6_SRGB_BLOCK [Compressed, SRGB, ASTC_LDR],
    ASTC_8x8_UNORM_BLOCK = ASTC_8X8_UNORM_BLOCK [Compressed, UNORM, ASTC_LDR],
    ASTC_8x8_SRGB_BLOCK = ASTC_8X8_SRGB_BLOCK [Compressed, SRGB, ASTC_LDR],
    ASTC_10x5_UNORM_BLOCK = ASTC_10X5_UNORM_BLOCK [Compressed, UNORM, ASTC_LDR],
    ASTC_10x5_SRGB_BLOCK = ASTC_10X5_SRGB_BLOCK [Compressed, SRGB, ASTC_LDR],
    ASTC_10x6_UNORM_BLOCK = ASTC_10X6_UNORM_BLOCK [Compressed, UNORM, ASTC_LDR],
    ASTC_10x6_SRGB_BLOCK = ASTC_10X6_SRGB_BLOCK [Compressed, SRGB, ASTC_LDR],
    ASTC_10x8_UNORM_BLOCK = ASTC_10X8_UNORM_BLOCK [Compressed, UNORM, ASTC_LDR],
    ASTC_10x8_SRGB_BLOCK = ASTC_10X8_SRGB_BLOCK [Compressed, SRGB, ASTC_LDR],
    ASTC_10x10_UNORM_BLOCK = ASTC_10X10_UNORM_BLOCK [Compressed, UNORM, ASTC_LDR],
    ASTC_10x10_SRGB_BLOCK = ASTC_10X10_SRGB_BLOCK [Compressed, SRGB, ASTC_LDR],
    ASTC_12x10_UNORM_BLOCK = ASTC_12X10_UNORM_BLOCK [Compressed, UNORM, ASTC_LDR],
    ASTC_12x10_SRGB_BLOCK = ASTC_12X10_SRGB_BLOCK [Compressed, SRGB, ASTC_LDR],
    ASTC_12x12_UNORM_BLOCK = ASTC_12X12_UNORM_BLOCK [Compressed, UNORM, ASTC_LDR],
    ASTC_12x12_SRGB_BLOCK = ASTC_12X12_SRGB_BLOCK [Compressed, SRGB, ASTC_LDR],
    G8B8G8R8_422_UNORM = G8B8G8R8_422_UNORM [Ycbcr, UNORM],
    B8G8R8G8_422_UNORM = B8G8R8G8_422_UNORM [Ycbcr, UNORM],
    G8_B8_R8_3PLANE_420_UNORM = G8_B8_R8_3PLANE_420_UNORM [Ycbcr, UNORM],
    G8_B8R8_2PLANE_420_UNORM = G8_B8R8_2PLANE_420_UNORM [Ycbcr, UNORM],
    G8_B8_R8_3PLANE_422_UNORM = G8_B8_R8_3PLANE_422_UNORM [Ycbcr, UNORM],
    G8_B8R8_2PLANE_422_UNORM = G8_B8R8_2PLANE_422_UNORM [Ycbcr, UNORM],
    G8_B8_R8_3PLANE_444_UNORM = G8_B8_R8_3PLANE_444_UNORM [Ycbcr, UNORM],
    R10X6_UNORM_PACK16 = R10X6_UNORM_PACK16 [Ycbcr, UNORM],
    R10X6G10X6_UNORM_2PACK16 = R10X6G10X6_UNORM_2PACK16 [Ycbcr, UNORM],
    R10X6G10X6B10X6A10X6_UNORM_4PACK16 = R10X6G10X6B10X6A10X6_UNORM_4PACK16 [Ycbcr, UNORM],
    G10X6B10X6G10X6R10X6_422_UNORM_4PACK16 = G10X6B10X6G10X6R10X6_422_UNORM_4PACK16 [Ycbcr, UNORM],
    B10X6G10X6R10X6G10X6_422_UNORM_4PACK16 = B10X6G10X6R10X6G10X6_422_UNORM_4PACK16 [Ycbcr, UNORM],
    G10X6_B10X6_R10X6_3PLANE_420_UNORM_3PACK16 = G10X6_B10X6_R10X6_3PLANE_420_UNORM_3PACK16 [Ycbcr, UNORM],
    G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16 = G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16 [Ycbcr, UNORM],
    G10X6_B10X6_R10X6_3PLANE_422_UNORM_3PACK16 = G10X6_B10X6_R10X6_3PLANE_422_UNORM_3PACK16 [Ycbcr, UNORM],
    G10X6_B10X6R10X6_2PLANE_422_UNORM_3PACK16 = G10X6_B10X6R10X6_2PLANE_422_UNORM_3PACK16 [Ycbcr, UNORM],
    G10X6_B10X6_R10X6_3PLANE_444_UNORM_3PACK16 = G10X6_B10X6_R10X6_3PLANE_444_UNORM_3PACK16 [Ycbcr, UNORM],
    R12X4_UNORM_PACK16 = R12X4_UNORM_PACK16 [Ycbcr, UNORM],
    R12X4G12X4_UNORM_2PACK16 = R12X4G12X4_UNORM_2PACK16 [Ycbcr, UNORM],
    R12X4G12X4B12X4A12X4_UNORM_4PACK16 = R12X4G12X4B12X4A12X4_UNORM_4PACK16 [Ycbcr, UNORM],
    G12X4B12X4G12X4R12X4_422_UNORM_4PACK16 = G12X4B12X4G12X4R12X4_422_UNORM_4PACK16 [Ycbcr, UNORM],
    B12X4G12X4R12X4G12X4_422_UNORM_4PACK16 = B12X4G12X4R12X4G12X4_422_UNORM_4PACK16 [Ycbcr, UNORM],
    G12X4_B12X4_R12X4_3PLANE_420_UNORM_3PACK16 = G12X4_B12X4_R12X4_3PLANE_420_UNORM_3PACK16 [Ycbcr, UNORM],
    G12X4_B12X4R12X4_2PLANE_420_UNORM_3PACK16 = G12X4_B12X4R12X4_2PLANE_420_UNORM_3PACK16 [Ycbcr, UNORM],
    G12X4_B12X4_R12X4_3PLANE_422_UNORM_3PACK16 = G12X4_B12X4_R12X4_3PLANE_422_UNORM_3PACK16 [Ycbcr, UNORM],
    G12X4_B12X4R12X4_2PLANE_422_UNORM_3PACK16 = G12X4_B12X4R12X4_2PLANE_422_UNORM_3PACK16 [Ycbcr, UNORM],
    G12X4_B12X4_R12X4_3PLANE_444_UNORM_3PACK16 = G12X4_B12X4_R12X4_3PLANE_444_UNORM_3PACK16 [Ycbcr, UNORM],
    G16B16G16R16_422_UNORM = G16B16G16R16_422_UNORM [Ycbcr, UNORM],
    B16G16R16G16_422_UNORM = B16G16R16G16_422_UNORM [Ycbcr, UNORM],
    G16_B16_R16_3PLANE_420_UNORM = G16_B16_R16_3PLANE_420_UNORM [Ycbcr, UNORM],
    G16_B16R16_2PLANE_420_UNORM = G16_B16R16_2PLANE_420_UNORM [Ycbcr, UNORM],
    G16_B16_R16_3PLANE_422_UNORM = G16_B16_R16_3PLANE_422_UNORM [Ycbcr, UNORM],
    G16_B16R16_2PLANE_422_UNORM = G16_B16R16_2PLANE_422_UNORM [Ycbcr, UNORM],
    G16_B16_R16_3PLANE_444_UNORM = G16_B16_R16_3PLANE_444_UNORM [Ycbcr, UNORM],
    PVRTC1_2BPP_UNORM_BLOCK_IMG = PVRTC1_2BPP_UNORM_BLOCK_IMG [Compressed, UNORM, PVRTC],
    PVRTC1_4BPP_UNORM_BLOCK_IMG = PVRTC1_4BPP_UNORM_BLOCK_IMG [Compressed, UNORM, PVRTC],
    PVRTC2_2BPP_UNORM_BLOCK_IMG = PVRTC2_2BPP_UNORM_BLOCK_IMG [Compressed, UNORM, PVRTC],
    PVRTC2_4BPP_UNORM_BLOCK_IMG = PVRTC2_4BPP_UNORM_BLOCK_IMG [Compressed, UNORM, PVRTC],
    PVRTC1_2BPP_SRGB_BLOCK_IMG = PVRTC1_2BPP_SRGB_BLOCK_IMG [Compressed, SRGB, PVRTC],
    PVRTC1_4BPP_SRGB_BLOCK_IMG = PVRTC1_4BPP_SRGB_BLOCK_IMG [Compressed, SRGB, PVRTC],
    PVRTC2_2BPP_SRGB_BLOCK_IMG = PVRTC2_2BPP_SRGB_BLOCK_IMG [Compressed, SRGB, PVRTC],
    PVRTC2_4BPP_SRGB_BLOCK_IMG = PVRTC2_4BPP_SRGB_BLOCK_IMG [Compressed, SRGB, PVRTC],
    ASTC_4x4_SFLOAT_BLOCK = ASTC_4X4_SFLOAT_BLOCK [Compressed, SFLOAT, ASTC_HDR],
    ASTC_5x4_SFLOAT_BLOCK = ASTC_5X4_SFLOAT_BLOCK [Compressed, SFLOAT, ASTC_HDR],
    ASTC_5x5_SFLOAT_BLOCK = ASTC_5X5_SFLOAT_BLOCK [Compressed, SFLOAT, ASTC_HDR],
    ASTC_6x5_SFLOAT_BLOCK = ASTC_6X5_SFLOAT_BLOCK [Compressed, SFLOAT, ASTC_HDR],
    ASTC_6x6_SFLOAT_BLOCK = ASTC_6X6_SFLOAT_BLOCK [Compressed, SFLOAT, ASTC_HDR],
    ASTC_8x5_SFLOAT_BLOCK = ASTC_8X5_SFLOAT_BLOCK [Compressed, SFLOAT, ASTC_HDR],
    ASTC_8x6_SFLOAT_BLOCK = ASTC_8X6_SFLOAT_BLOCK [Compressed, SFLOAT, ASTC_HDR],
    ASTC_8x8_SFLOAT_BLOCK = ASTC_8X8_SFLOAT_BLOCK [Compressed, SFLOAT, ASTC_HDR],
    ASTC_10x5_SFLOAT_BLOCK = ASTC_10X5_SFLOAT_BLOCK [Compressed, SFLOAT, ASTC_HDR],
    ASTC_10x6_SFLOAT_BLOCK = ASTC_10X6_SFLOAT_BLOCK [Compressed, SFLOAT, ASTC_HDR],
    ASTC_10x8_SFLOAT_BLOCK = ASTC_10X8_SFLOAT_BLOCK [Compressed, SFLOAT, ASTC_HDR],
    ASTC_10x10_SFLOAT_BLOCK = ASTC_10X10_SFLOAT_BLOCK [Compressed, SFLOAT, ASTC_HDR],
    ASTC_12x10_SFLOAT_BLOCK = ASTC_12X10_SFLOAT_BLOCK [Compressed, SFLOAT, ASTC_HDR],
    ASTC_12x12_SFLOAT_BLOCK = ASTC_12X12_SFLOAT_BLOCK [Compressed, SFLOAT, ASTC_HDR],
    G8_B8R8_2PLANE_444_UNORM = G8_B8R8_2PLANE_444_UNORM [Ycbcr, UNORM],
    G10X6_B10X6R10X6_2PLANE_444_UNORM_3PACK16 = G10X6_B10X6R10X6_2PLANE_444_UNORM_3PACK16 [Ycbcr, UNORM],
    G12X4_B12X4R12X4_2PLANE_444_UNORM_3PACK16 = G12X4_B12X4R12X4_2PLANE_444_UNORM_3PACK16 [Ycbcr, UNORM],
    G16_B16R16_2PLANE_444_UNORM = G16_B16R16_2PLANE_444_UNORM [Ycbcr, UNORM],
    A4R4G4B4_UNORM_PACK16 = A4R4G4B4_UNORM_PACK16 [ColorFixedPoint, UNORM],
    A4B4G4R4_UNORM_PACK16 = A4B4G4R4_UNORM_PACK16 [ColorFixedPoint, UNORM],
}

impl Format {
    /// Returns the name of the format in lower case, as used in case names.
    #[inline]
    pub fn short_name(self) -> String {
        self.name().to_ascii_lowercase()
    }

    /// Returns whether the format is block-compressed.
    #[inline]
    pub const fn is_compressed(self) -> bool {
        self.compression().is_some()
    }

    /// Returns whether the format is a YCbCr format.
    #[inline]
    pub const fn is_ycbcr(self) -> bool {
        matches!(self.class(), FormatClass::Ycbcr)
    }

    /// Returns the number of planes that images of this format have.
    #[inline]
    pub fn planes(self) -> u32 {
        let name = self.name();

        if name.contains("_3PLANE_") {
            3
        } else if name.contains("_2PLANE_") {
            2
        } else {
            1
        }
    }

    /// For YCbCr formats, returns the chroma sampling of the format. Returns `None` for the
    /// padded single-component and four-component formats, which are not subsampled.
    #[inline]
    pub fn ycbcr_chroma_sampling(self) -> Option<ChromaSampling> {
        if !self.is_ycbcr() {
            return None;
        }

        let name = self.name();

        if name.contains("_420_") {
            Some(ChromaSampling::Mode420)
        } else if name.contains("_422_") {
            Some(ChromaSampling::Mode422)
        } else if name.contains("_444_") {
            Some(ChromaSampling::Mode444)
        } else {
            None
        }
    }

    /// Returns the aspects that images of this format have.
    pub fn aspects(self) -> ImageAspects {
        match self.class() {
            FormatClass::Depth => ImageAspects::DEPTH,
            FormatClass::Stencil => ImageAspects::STENCIL,
            FormatClass::DepthStencil => ImageAspects::DEPTH | ImageAspects::STENCIL,
            FormatClass::Ycbcr => match self.planes() {
                3 => {
                    ImageAspects::COLOR
                        | ImageAspects::PLANE_0
                        | ImageAspects::PLANE_1
                        | ImageAspects::PLANE_2
                }
                2 => ImageAspects::COLOR | ImageAspects::PLANE_0 | ImageAspects::PLANE_1,
                _ => ImageAspects::COLOR,
            },
            FormatClass::ColorFloat
            | FormatClass::ColorFixedPoint
            | FormatClass::ColorInteger
            | FormatClass::Compressed => ImageAspects::COLOR,
        }
    }
}

impl From<Format> for ash::vk::Format {
    #[inline]
    fn from(val: Format) -> Self {
        ash::vk::Format::from_raw(val as i32)
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.write_str(self.name())
    }
}

vulkan_bitflags! {
    /// The features supported by a device for an image or buffer with a particular format.
    FormatFeatures = FormatFeatureFlags(u32);

    /// Can be used with a sampled image descriptor.
    SAMPLED_IMAGE = SAMPLED_IMAGE,

    /// Can be used with a storage image descriptor.
    STORAGE_IMAGE = STORAGE_IMAGE,

    /// Can be used with a storage image descriptor with atomic operations in a shader.
    STORAGE_IMAGE_ATOMIC = STORAGE_IMAGE_ATOMIC,

    /// Can be used as a color attachment in a render pass, or with a color attachment in a
    /// framebuffer.
    COLOR_ATTACHMENT = COLOR_ATTACHMENT,

    /// Can be used as a color attachment with blending enabled.
    COLOR_ATTACHMENT_BLEND = COLOR_ATTACHMENT_BLEND,

    /// Can be used as a depth/stencil attachment in a render pass, or with a depth/stencil
    /// attachment in a framebuffer.
    DEPTH_STENCIL_ATTACHMENT = DEPTH_STENCIL_ATTACHMENT,

    /// Can be used as the source image of a blit command.
    BLIT_SRC = BLIT_SRC,

    /// Can be used as the destination image of a blit command.
    BLIT_DST = BLIT_DST,

    /// Can be used with a sampler that has `mag_filter` or `min_filter` set to `Linear`.
    SAMPLED_IMAGE_FILTER_LINEAR = SAMPLED_IMAGE_FILTER_LINEAR,

    /// Can be used as the source image of image transfer commands.
    TRANSFER_SRC = TRANSFER_SRC,

    /// Can be used as the destination image of image transfer commands.
    TRANSFER_DST = TRANSFER_DST,

    /// Multi-planar images of this format can be created with the `DISJOINT` flag.
    DISJOINT = DISJOINT,
}

/// The properties of a format that are supported by a physical device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatProperties {
    /// Features available for images with linear tiling.
    pub linear_tiling_features: FormatFeatures,

    /// Features available for images with optimal tiling.
    pub optimal_tiling_features: FormatFeatures,

    /// Features available for buffers.
    pub buffer_features: FormatFeatures,
}

impl From<ash::vk::FormatProperties> for FormatProperties {
    #[inline]
    fn from(props: ash::vk::FormatProperties) -> Self {
        Self {
            linear_tiling_features: props.linear_tiling_features.into(),
            optimal_tiling_features: props.optimal_tiling_features.into(),
            buffer_features: props.buffer_features.into(),
        }
    }
}
