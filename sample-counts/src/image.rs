// Copyright (c) 2024 The sample-counts developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Image parameters that make up a capability query, and the properties returned for it.

use crate::{
    format::Format,
    macros::{vulkan_bitflags, vulkan_bitflags_enum, vulkan_enum},
    memory::{ExternalMemoryHandleType, ExternalMemoryProperties},
    NonExhaustive,
};

vulkan_bitflags! {
    /// Describes how an image is going to be used.
    ImageUsage = ImageUsageFlags(u32);

    /// The image can be used as a source for transfer, blit, resolve and clear commands.
    TRANSFER_SRC = TRANSFER_SRC,

    /// The image can be used as a destination for transfer, blit, resolve and clear commands.
    TRANSFER_DST = TRANSFER_DST,

    /// The image can be used as a sampled image in a shader.
    SAMPLED = SAMPLED,

    /// The image can be used as a storage image in a shader.
    STORAGE = STORAGE,

    /// The image can be used as a color attachment in a render pass/framebuffer.
    COLOR_ATTACHMENT = COLOR_ATTACHMENT,

    /// The image can be used as a depth/stencil attachment in a render pass/framebuffer.
    DEPTH_STENCIL_ATTACHMENT = DEPTH_STENCIL_ATTACHMENT,

    /// The image will be used as an attachment, and will only ever be used temporarily.
    TRANSIENT_ATTACHMENT = TRANSIENT_ATTACHMENT,

    /// The image can be used as an input attachment in a render pass/framebuffer.
    INPUT_ATTACHMENT = INPUT_ATTACHMENT,
}

vulkan_bitflags! {
    /// Flags specifying additional properties of an image.
    ImageCreateFlags = ImageCreateFlags(u32);

    /// For non-multi-planar formats, whether an image view wrapping the image can have a
    /// different format.
    MUTABLE_FORMAT = MUTABLE_FORMAT,

    /// For 2D images, whether an image view of type `ImageViewType::Cube` or
    /// `ImageViewType::CubeArray` can be created from the image.
    CUBE_COMPATIBLE = CUBE_COMPATIBLE,

    /// For 3D images, whether an image view of type `ImageViewType::Dim2dArray` can be created
    /// from the image.
    DIM2D_ARRAY_COMPATIBLE = TYPE_2D_ARRAY_COMPATIBLE,

    /// For images with a compressed format, whether an image view with an uncompressed format
    /// can be created from the image.
    BLOCK_TEXEL_VIEW_COMPATIBLE = BLOCK_TEXEL_VIEW_COMPATIBLE,

    /// Whether an image view can be created with usage flags that the image's format doesn't
    /// support.
    EXTENDED_USAGE = EXTENDED_USAGE,

    /// For images with a multi-planar format, whether each plane has its memory bound
    /// separately.
    DISJOINT = DISJOINT,
}

vulkan_bitflags_enum! {
    /// A set of [`SampleCount`] values.
    SampleCounts,

    /// The number of samples per texel of an image.
    SampleCount,

    = SampleCountFlags(u32);

    /// 1 sample per texel.
    SAMPLE_1, Sample1 = TYPE_1,

    /// 2 samples per texel.
    SAMPLE_2, Sample2 = TYPE_2,

    /// 4 samples per texel.
    SAMPLE_4, Sample4 = TYPE_4,

    /// 8 samples per texel.
    SAMPLE_8, Sample8 = TYPE_8,

    /// 16 samples per texel.
    SAMPLE_16, Sample16 = TYPE_16,

    /// 32 samples per texel.
    SAMPLE_32, Sample32 = TYPE_32,

    /// 64 samples per texel.
    SAMPLE_64, Sample64 = TYPE_64,
}

impl SampleCounts {
    /// Returns the maximum sample count in `self`.
    #[inline]
    pub const fn max_count(self) -> SampleCount {
        if self.intersects(SampleCounts::SAMPLE_64) {
            SampleCount::Sample64
        } else if self.intersects(SampleCounts::SAMPLE_32) {
            SampleCount::Sample32
        } else if self.intersects(SampleCounts::SAMPLE_16) {
            SampleCount::Sample16
        } else if self.intersects(SampleCounts::SAMPLE_8) {
            SampleCount::Sample8
        } else if self.intersects(SampleCounts::SAMPLE_4) {
            SampleCount::Sample4
        } else if self.intersects(SampleCounts::SAMPLE_2) {
            SampleCount::Sample2
        } else {
            SampleCount::Sample1
        }
    }

    /// Returns whether `self` is exactly the single-sample set.
    #[inline]
    pub const fn is_single_sample(self) -> bool {
        self.0 == SampleCounts::SAMPLE_1.0
    }
}

impl From<SampleCount> for u32 {
    #[inline]
    fn from(value: SampleCount) -> Self {
        value as u32
    }
}

impl TryFrom<u32> for SampleCount {
    type Error = ();

    #[inline]
    fn try_from(val: u32) -> Result<Self, Self::Error> {
        match val {
            1 => Ok(Self::Sample1),
            2 => Ok(Self::Sample2),
            4 => Ok(Self::Sample4),
            8 => Ok(Self::Sample8),
            16 => Ok(Self::Sample16),
            32 => Ok(Self::Sample32),
            64 => Ok(Self::Sample64),
            _ => Err(()),
        }
    }
}

vulkan_enum! {
    /// The basic dimensionality of an image.
    ImageType = ImageType(i32);

    /// A one-dimensional image, consisting of only a width, with a height and depth of 1.
    Dim1d = TYPE_1D,

    /// A two-dimensional image, consisting of a width and height, with a depth of 1.
    Dim2d = TYPE_2D,

    /// A three-dimensional image, consisting of a width, height and depth.
    Dim3d = TYPE_3D,
}

impl ImageType {
    /// The image types, in the order in which cases are registered.
    pub const ALL: [ImageType; 3] = [ImageType::Dim1d, ImageType::Dim2d, ImageType::Dim3d];

    /// Returns the name used for the image type in case names.
    #[inline]
    pub const fn short_name(self) -> &'static str {
        match self {
            ImageType::Dim1d => "1d",
            ImageType::Dim2d => "2d",
            ImageType::Dim3d => "3d",
        }
    }
}

vulkan_enum! {
    /// The arrangement of texels or texel blocks in an image.
    ImageTiling = ImageTiling(i32);

    /// The arrangement is optimized for access in an implementation-defined way.
    ///
    /// This layout is opaque to the user, and cannot be queried. Data can only be read from or
    /// written to the image by using Vulkan commands, such as copy commands.
    Optimal = OPTIMAL,

    /// The texels are laid out in memory in row-major order.
    Linear = LINEAR,
}

impl ImageTiling {
    /// The tilings, in the order in which cases are registered.
    pub const ALL: [ImageTiling; 2] = [ImageTiling::Optimal, ImageTiling::Linear];

    /// Returns the name used for the tiling in case names.
    #[inline]
    pub const fn short_name(self) -> &'static str {
        match self {
            ImageTiling::Optimal => "optimal",
            ImageTiling::Linear => "linear",
        }
    }
}

vulkan_bitflags! {
    /// An individual data type within an image.
    ///
    /// Most images have only the [`COLOR`] aspect, but some may have others.
    ///
    /// [`COLOR`]: ImageAspects::COLOR
    ImageAspects = ImageAspectFlags(u32);

    /// The single aspect of images with a color format, or the combined aspect of all planes of
    /// images with a multi-planar format.
    COLOR = COLOR,

    /// The single aspect of images with a depth format, or one of the two aspects of images with
    /// a combined depth/stencil format.
    DEPTH = DEPTH,

    /// The single aspect of images with a stencil format, or one of the two aspects of images
    /// with a combined depth/stencil format.
    STENCIL = STENCIL,

    /// An aspect used with sparse memory on some implementations, to hold implementation-defined
    /// metadata of an image.
    METADATA = METADATA,

    /// The first plane of an image with a multi-planar format.
    PLANE_0 = PLANE_0,

    /// The second plane of an image with a multi-planar format.
    PLANE_1 = PLANE_1,

    /// The third plane of an image with a multi-planar format.
    PLANE_2 = PLANE_2,
}

/// The image configuration to query in
/// [`CapabilityOracle::image_format_properties`](crate::oracle::CapabilityOracle::image_format_properties).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageFormatInfo {
    /// The `flags` that the image will have.
    ///
    /// The default value is [`ImageCreateFlags::empty()`].
    pub flags: ImageCreateFlags,

    /// The `format` that the image will have.
    pub format: Format,

    /// The dimension type that the image will have.
    ///
    /// The default value is [`ImageType::Dim2d`].
    pub image_type: ImageType,

    /// The `tiling` that the image will have.
    ///
    /// The default value is [`ImageTiling::Optimal`].
    pub tiling: ImageTiling,

    /// The `usage` that the image will have.
    ///
    /// The default value is [`ImageUsage::empty()`].
    pub usage: ImageUsage,

    /// An external memory handle type that will be imported to or exported from the image.
    ///
    /// This is needed to retrieve the
    /// [`external_memory_properties`](ImageFormatProperties::external_memory_properties) value.
    ///
    /// The default value is `None`.
    pub external_memory_handle_type: Option<ExternalMemoryHandleType>,

    #[cfg_attr(feature = "serde", serde(skip, default = "NonExhaustive::new"))]
    pub _ne: NonExhaustive,
}

impl ImageFormatInfo {
    /// Returns an `ImageFormatInfo` for `format` with every other member at its default value.
    #[inline]
    pub fn new(format: Format) -> Self {
        Self {
            flags: ImageCreateFlags::empty(),
            format,
            image_type: ImageType::Dim2d,
            tiling: ImageTiling::Optimal,
            usage: ImageUsage::empty(),
            external_memory_handle_type: None,
            _ne: NonExhaustive::new(),
        }
    }
}

/// The properties that are supported by a physical device for images of a certain type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageFormatProperties {
    /// The maximum image extent.
    pub max_extent: [u32; 3],

    /// The maximum number of mip levels.
    pub max_mip_levels: u32,

    /// The maximum number of array layers.
    pub max_array_layers: u32,

    /// The supported sample counts.
    pub sample_counts: SampleCounts,

    /// The maximum total size of an image, in bytes. This is guaranteed to be at least
    /// 0x80000000.
    pub max_resource_size: u64,

    /// The properties for external memory.
    /// This will be [`ExternalMemoryProperties::default()`] if `external_memory_handle_type`
    /// was `None`.
    pub external_memory_properties: ExternalMemoryProperties,
}

impl From<ash::vk::ImageFormatProperties> for ImageFormatProperties {
    #[inline]
    fn from(props: ash::vk::ImageFormatProperties) -> Self {
        Self {
            max_extent: [
                props.max_extent.width,
                props.max_extent.height,
                props.max_extent.depth,
            ],
            max_mip_levels: props.max_mip_levels,
            max_array_layers: props.max_array_layers,
            sample_counts: props.sample_counts.into(),
            max_resource_size: props.max_resource_size,
            external_memory_properties: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ImageFormatInfo, ImageTiling, ImageType, ImageUsage, SampleCount, SampleCounts};
    use crate::format::Format;

    #[test]
    fn max_count() {
        assert_eq!(SampleCounts::SAMPLE_1.max_count(), SampleCount::Sample1);
        assert_eq!(
            (SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_4 | SampleCounts::SAMPLE_8).max_count(),
            SampleCount::Sample8,
        );
        assert_eq!(SampleCounts::all().max_count(), SampleCount::Sample64);
    }

    #[test]
    fn single_sample() {
        assert!(SampleCounts::SAMPLE_1.is_single_sample());
        assert!(!SampleCounts::empty().is_single_sample());
        assert!(!(SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_2).is_single_sample());
    }

    #[test]
    fn sample_count_iter() {
        let counts = SampleCounts::SAMPLE_2 | SampleCounts::SAMPLE_16;
        let collected: Vec<u32> = counts.into_iter().map(u32::from).collect();
        assert_eq!(collected, [2, 16]);
        assert_eq!(counts.into_iter().collect::<SampleCounts>(), counts);
        assert!(counts.contains_enum(SampleCount::Sample16));
        assert_eq!(SampleCount::try_from(3), Err(()));
    }

    #[test]
    fn ffi_flags_are_masked() {
        let raw = ash::vk::SampleCountFlags::from_raw(0xffff_ffff);
        assert_eq!(SampleCounts::from(raw), SampleCounts::all());

        let usage = ImageUsage::SAMPLED | ImageUsage::STORAGE;
        assert_eq!(
            ash::vk::ImageUsageFlags::from(usage),
            ash::vk::ImageUsageFlags::SAMPLED | ash::vk::ImageUsageFlags::STORAGE,
        );
    }

    #[test]
    fn debug_lists_flags() {
        let usage = ImageUsage::COLOR_ATTACHMENT | ImageUsage::SAMPLED;
        assert_eq!(format!("{usage:?}"), "SAMPLED | COLOR_ATTACHMENT");
        assert_eq!(format!("{:?}", ImageUsage::empty()), "empty()");
    }

    #[test]
    fn format_info_defaults() {
        let info = ImageFormatInfo::new(Format::R8G8B8A8_UNORM);
        assert_eq!(info.image_type, ImageType::Dim2d);
        assert_eq!(info.tiling, ImageTiling::Optimal);
        assert!(info.usage.is_empty());
        assert!(info.flags.is_empty());
        assert!(info.external_memory_handle_type.is_none());
    }
}
