// Copyright (c) 2024 The sample-counts developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! The supported sample count rules.
//!
//! The sample counts that an implementation reports for an image depend on the image's
//! parameters:
//!
//! - If the tiling is linear, or the image type is not 2D, only one sample is supported.
//! - Cube-compatible images, and images of a YCbCr format, are single-sampled.
//! - If the format supports neither color nor depth/stencil attachments with optimal tiling, the
//!   image is single-sampled.
//! - Otherwise, each usage of the image corresponds to a device limit, and the reported sample
//!   counts must include that limit.
//! - When no limit applies, the reported sample counts must still include one sample.
//!
//! Each rule asks the [`CapabilityOracle`] for what it needs and returns whether the answers are
//! consistent. A failed query makes the rule fail.

use crate::{
    format::{Format, FormatClass, FormatFeatures},
    image::{ImageCreateFlags, ImageFormatInfo, ImageTiling, ImageType, ImageUsage, SampleCounts},
    limits::DeviceLimits,
    memory::ExternalMemoryHandleType,
    oracle::CapabilityOracle,
    tree::CaseDef,
};
use log::{trace, warn};

/// One of the four image usages that have a corresponding sample-count limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UsageCategory {
    ColorAttachment,
    DepthStencilAttachment,
    Sampled,
    Storage,
}

impl UsageCategory {
    /// The usage categories, with the color attachment category as the lowest bit of the usage
    /// subsets.
    pub const ALL: [UsageCategory; 4] = [
        UsageCategory::ColorAttachment,
        UsageCategory::DepthStencilAttachment,
        UsageCategory::Sampled,
        UsageCategory::Storage,
    ];

    /// Returns the image usage flag of the category.
    #[inline]
    pub const fn usage(self) -> ImageUsage {
        match self {
            UsageCategory::ColorAttachment => ImageUsage::COLOR_ATTACHMENT,
            UsageCategory::DepthStencilAttachment => ImageUsage::DEPTH_STENCIL_ATTACHMENT,
            UsageCategory::Sampled => ImageUsage::SAMPLED,
            UsageCategory::Storage => ImageUsage::STORAGE,
        }
    }

    /// Returns the name used for the category in case names.
    #[inline]
    pub const fn short_name(self) -> &'static str {
        match self {
            UsageCategory::ColorAttachment => "color",
            UsageCategory::DepthStencilAttachment => "depth_stencil",
            UsageCategory::Sampled => "sampled",
            UsageCategory::Storage => "storage",
        }
    }

    /// Returns the categories whose usage flag is set in `usage`, in the order of
    /// [`ALL`](Self::ALL).
    pub fn from_usage(usage: ImageUsage) -> impl Iterator<Item = UsageCategory> {
        Self::ALL
            .into_iter()
            .filter(move |category| usage.intersects(category.usage()))
    }

    /// Returns the sample counts that an image of `format` with this usage must support.
    ///
    /// Returns an empty set if the device limits have no entry for the combination.
    pub fn expected_sample_counts(self, format: Format, limits: &DeviceLimits) -> SampleCounts {
        let class = format.class();

        match self {
            UsageCategory::ColorAttachment => match class {
                FormatClass::ColorFloat | FormatClass::ColorFixedPoint => {
                    limits.framebuffer_color_sample_counts
                }
                FormatClass::ColorInteger => limits.framebuffer_integer_color_sample_counts,
                _ => SampleCounts::empty(),
            },
            UsageCategory::DepthStencilAttachment => {
                let mut sample_counts = SampleCounts::empty();

                if class.has_depth() {
                    sample_counts |= limits.framebuffer_depth_sample_counts;
                }

                if class.has_stencil() {
                    sample_counts |= limits.framebuffer_stencil_sample_counts;
                }

                sample_counts
            }
            UsageCategory::Sampled => {
                if matches!(class, FormatClass::Compressed | FormatClass::Ycbcr) {
                    return SampleCounts::empty();
                }

                let mut sample_counts = SampleCounts::empty();

                if class.is_color() {
                    sample_counts |= limits.sampled_image_color_sample_counts;
                }

                if class.has_depth() {
                    sample_counts |= limits.sampled_image_depth_sample_counts;
                }

                if format.numeric_type().is_integer() {
                    sample_counts |= limits.sampled_image_integer_sample_counts;
                }

                sample_counts
            }
            UsageCategory::Storage => limits.storage_image_sample_counts,
        }
    }
}

/// Returns whether the `reported` sample counts of an image with `usage` and `format` are
/// consistent with the device `limits`.
///
/// With a single usage category, `reported` must contain every expected sample count. With
/// several, `reported` must share at least one sample count with the union of the expected ones.
/// With none, `reported` must contain one sample.
pub fn usage_sample_counts_satisfied(
    usage: ImageUsage,
    format: Format,
    limits: &DeviceLimits,
    reported: SampleCounts,
) -> bool {
    let mut categories = UsageCategory::from_usage(usage).peekable();

    let Some(first) = categories.next() else {
        return reported.contains(SampleCounts::SAMPLE_1);
    };

    if categories.peek().is_none() {
        return reported.contains(first.expected_sample_counts(format, limits));
    }

    let expected = categories.fold(first.expected_sample_counts(format, limits), |acc, category| {
        acc | category.expected_sample_counts(format, limits)
    });

    reported.intersects(expected)
}

/// A check on the sample counts reported for one case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleCountRule {
    /// Images with linear tiling, or that are not 2D, are single-sampled.
    LinearTilingOrNot2d,

    /// 2D images created with `CUBE_COMPATIBLE` are single-sampled.
    CubeCompatible,

    /// If the optimal tiling features of the format include neither `COLOR_ATTACHMENT` nor
    /// `DEPTH_STENCIL_ATTACHMENT`, the image is single-sampled.
    OptimalTilingFeatures,

    /// Images that are imported from or exported to external memory are single-sampled, for
    /// every handle type that supports the image at all.
    ExternalMemoryHandleTypes,

    /// Images that need a sampler YCbCr conversion are single-sampled.
    YcbcrConversion,

    /// The reported sample counts for the case's usage are consistent with the device limits.
    UsageFlags,

    /// With no usage, the reported sample counts include one sample.
    OneSampleCountPresent,
}

impl SampleCountRule {
    /// Returns the name of the rule, as used in case names.
    ///
    /// For [`UsageFlags`](Self::UsageFlags) this is only the prefix; the case name appends the
    /// usage categories.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            SampleCountRule::LinearTilingOrNot2d => "linear_tiling_and_not_2d_image_type",
            SampleCountRule::CubeCompatible => "cube_compatible",
            SampleCountRule::OptimalTilingFeatures => "optimal_tiling_features",
            SampleCountRule::ExternalMemoryHandleTypes => "external_memory_handle_types",
            SampleCountRule::YcbcrConversion => "ycbcr_conversion",
            SampleCountRule::UsageFlags => "usage_flags",
            SampleCountRule::OneSampleCountPresent => "one_sample_count_present",
        }
    }

    /// Returns whether the rule applies to images with `image_type` and `tiling`.
    #[inline]
    pub const fn applies_to(self, image_type: ImageType, tiling: ImageTiling) -> bool {
        let optimal_2d = matches!(image_type, ImageType::Dim2d)
            && matches!(tiling, ImageTiling::Optimal);

        match self {
            SampleCountRule::LinearTilingOrNot2d => !optimal_2d,
            _ => optimal_2d,
        }
    }

    /// Evaluates the rule for `case_def`, asking `oracle` for the capabilities it needs.
    pub fn evaluate<O>(self, oracle: &O, case_def: &CaseDef) -> bool
    where
        O: CapabilityOracle + ?Sized,
    {
        let &CaseDef {
            format,
            image_type,
            tiling,
            usage,
        } = case_def;

        let info = ImageFormatInfo {
            image_type,
            tiling,
            ..ImageFormatInfo::new(format)
        };

        match self {
            SampleCountRule::LinearTilingOrNot2d => {
                self.applies_to(image_type, tiling)
                    && query_sample_counts(oracle, &info)
                        .is_some_and(SampleCounts::is_single_sample)
            }
            SampleCountRule::CubeCompatible => {
                let info = ImageFormatInfo {
                    flags: ImageCreateFlags::CUBE_COMPATIBLE,
                    ..info
                };

                query_sample_counts(oracle, &info).is_some_and(SampleCounts::is_single_sample)
            }
            SampleCountRule::OptimalTilingFeatures => {
                let features = match oracle.format_properties(format) {
                    Ok(properties) => properties.optimal_tiling_features,
                    Err(err) => {
                        warn!("format properties query for {format} failed: {err}");
                        return false;
                    }
                };

                let Some(sample_counts) = query_sample_counts(oracle, &info) else {
                    return false;
                };

                let attachment = features.intersects(
                    FormatFeatures::COLOR_ATTACHMENT | FormatFeatures::DEPTH_STENCIL_ATTACHMENT,
                );

                attachment || sample_counts.is_single_sample()
            }
            SampleCountRule::ExternalMemoryHandleTypes => {
                ExternalMemoryHandleType::ALL.into_iter().all(|handle_type| {
                    let info = ImageFormatInfo {
                        external_memory_handle_type: Some(handle_type),
                        ..info.clone()
                    };

                    match oracle.image_format_properties(&info) {
                        Ok(Some(properties)) => properties.sample_counts.is_single_sample(),
                        Ok(None) => true,
                        Err(err) => {
                            warn!(
                                "external memory query for {format} with {handle_type:?} \
                                failed: {err}",
                            );

                            false
                        }
                    }
                })
            }
            SampleCountRule::YcbcrConversion => {
                query_sample_counts(oracle, &info).is_some_and(SampleCounts::is_single_sample)
            }
            SampleCountRule::UsageFlags => {
                let info = ImageFormatInfo { usage, ..info };

                let Some(reported) = query_sample_counts(oracle, &info) else {
                    return false;
                };

                let limits = match oracle.device_limits() {
                    Ok(limits) => limits,
                    Err(err) => {
                        warn!("device limits query failed: {err}");
                        return false;
                    }
                };

                usage_sample_counts_satisfied(usage, format, &limits, reported)
            }
            SampleCountRule::OneSampleCountPresent => query_sample_counts(oracle, &info)
                .is_some_and(|sample_counts| sample_counts.contains(SampleCounts::SAMPLE_1)),
        }
    }
}

// Unsupported and failed queries both yield `None`; failures are logged.
fn query_sample_counts<O>(oracle: &O, info: &ImageFormatInfo) -> Option<SampleCounts>
where
    O: CapabilityOracle + ?Sized,
{
    match oracle.image_format_properties(info) {
        Ok(Some(properties)) => Some(properties.sample_counts),
        Ok(None) => {
            trace!("{} is not supported with {:?}", info.format, info.flags);
            None
        }
        Err(err) => {
            warn!("image format query for {} failed: {err}", info.format);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{usage_sample_counts_satisfied, SampleCountRule, UsageCategory};
    use crate::{
        format::{Format, FormatFeatures, FormatProperties},
        image::{
            ImageCreateFlags, ImageFormatInfo, ImageFormatProperties, ImageTiling, ImageType,
            ImageUsage, SampleCounts,
        },
        limits::DeviceLimits,
        memory::ExternalMemoryHandleType,
        oracle::CapabilityOracle,
        tree::CaseDef,
        VulkanError,
    };

    const ONE: SampleCounts = SampleCounts::SAMPLE_1;
    const ONE_FOUR: SampleCounts = SampleCounts::SAMPLE_1.union(SampleCounts::SAMPLE_4);

    fn properties(sample_counts: SampleCounts) -> Option<ImageFormatProperties> {
        Some(ImageFormatProperties {
            sample_counts,
            ..Default::default()
        })
    }

    fn case_def(format: Format, usage: ImageUsage) -> CaseDef {
        CaseDef {
            format,
            image_type: ImageType::Dim2d,
            tiling: ImageTiling::Optimal,
            usage,
        }
    }

    fn limits() -> DeviceLimits {
        table_oracle!().device_limits().unwrap()
    }

    #[test]
    fn color_attachment_expected() {
        let limits = limits();
        let color = UsageCategory::ColorAttachment;

        assert_eq!(color.expected_sample_counts(Format::R8G8B8A8_UNORM, &limits), ONE_FOUR);
        assert_eq!(color.expected_sample_counts(Format::R16G16_SFLOAT, &limits), ONE_FOUR);
        assert_eq!(color.expected_sample_counts(Format::R8G8B8A8_UINT, &limits), ONE);
        assert!(color
            .expected_sample_counts(Format::BC1_RGB_UNORM_BLOCK, &limits)
            .is_empty());
        assert!(color.expected_sample_counts(Format::D16_UNORM, &limits).is_empty());
    }

    #[test]
    fn depth_stencil_expected() {
        let limits = DeviceLimits {
            framebuffer_depth_sample_counts: SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_2,
            framebuffer_stencil_sample_counts: SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_8,
            ..Default::default()
        };
        let depth_stencil = UsageCategory::DepthStencilAttachment;

        assert_eq!(
            depth_stencil.expected_sample_counts(Format::D32_SFLOAT, &limits),
            SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_2,
        );
        assert_eq!(
            depth_stencil.expected_sample_counts(Format::S8_UINT, &limits),
            SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_8,
        );
        assert_eq!(
            depth_stencil.expected_sample_counts(Format::D24_UNORM_S8_UINT, &limits),
            SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_2 | SampleCounts::SAMPLE_8,
        );
        assert!(depth_stencil
            .expected_sample_counts(Format::R8_UNORM, &limits)
            .is_empty());
    }

    #[test]
    fn sampled_expected() {
        let limits = DeviceLimits {
            sampled_image_color_sample_counts: SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_4,
            sampled_image_depth_sample_counts: SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_2,
            sampled_image_integer_sample_counts: SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_8,
            ..Default::default()
        };
        let sampled = UsageCategory::Sampled;

        assert_eq!(
            sampled.expected_sample_counts(Format::R8G8B8A8_SRGB, &limits),
            SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_4,
        );
        assert_eq!(
            sampled.expected_sample_counts(Format::R32_SINT, &limits),
            SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_4 | SampleCounts::SAMPLE_8,
        );
        assert_eq!(
            sampled.expected_sample_counts(Format::D16_UNORM_S8_UINT, &limits),
            SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_2,
        );
        assert_eq!(
            sampled.expected_sample_counts(Format::S8_UINT, &limits),
            SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_8,
        );
        assert!(sampled
            .expected_sample_counts(Format::ETC2_R8G8B8_UNORM_BLOCK, &limits)
            .is_empty());
        assert!(sampled
            .expected_sample_counts(Format::G8_B8_R8_3PLANE_420_UNORM, &limits)
            .is_empty());
    }

    #[test]
    fn storage_expected_for_any_format() {
        let limits = limits();

        for format in [Format::R8_UNORM, Format::BC7_UNORM_BLOCK, Format::D32_SFLOAT] {
            assert_eq!(
                UsageCategory::Storage.expected_sample_counts(format, &limits),
                ONE,
            );
        }
    }

    #[test]
    fn single_usage_requires_superset() {
        let limits = limits();
        let usage = ImageUsage::COLOR_ATTACHMENT;

        assert!(usage_sample_counts_satisfied(
            usage,
            Format::R8G8B8A8_UNORM,
            &limits,
            ONE_FOUR | SampleCounts::SAMPLE_8,
        ));
        assert!(!usage_sample_counts_satisfied(
            usage,
            Format::R8G8B8A8_UNORM,
            &limits,
            ONE,
        ));
        assert!(usage_sample_counts_satisfied(
            usage,
            Format::R8G8B8A8_UINT,
            &limits,
            ONE,
        ));
    }

    #[test]
    fn multiple_usages_require_intersection() {
        let limits = limits();
        let usage = ImageUsage::COLOR_ATTACHMENT | ImageUsage::STORAGE;

        // Not a superset of the union, but shares a sample count with it.
        assert!(usage_sample_counts_satisfied(
            usage,
            Format::R8G8B8A8_UNORM,
            &limits,
            SampleCounts::SAMPLE_4,
        ));
        assert!(!usage_sample_counts_satisfied(
            usage,
            Format::R8G8B8A8_UNORM,
            &limits,
            SampleCounts::SAMPLE_2,
        ));

        // The union is empty, so nothing intersects it.
        assert!(!usage_sample_counts_satisfied(
            ImageUsage::COLOR_ATTACHMENT | ImageUsage::DEPTH_STENCIL_ATTACHMENT,
            Format::BC1_RGB_UNORM_BLOCK,
            &limits,
            ONE,
        ));
    }

    #[test]
    fn no_usage_requires_one_sample() {
        let limits = limits();

        assert!(usage_sample_counts_satisfied(
            ImageUsage::TRANSFER_SRC,
            Format::R8_UNORM,
            &limits,
            ONE_FOUR,
        ));
        assert!(!usage_sample_counts_satisfied(
            ImageUsage::empty(),
            Format::R8_UNORM,
            &limits,
            SampleCounts::SAMPLE_4,
        ));
    }

    #[test]
    fn color_attachment_scenario() {
        let case = case_def(Format::R8G8B8A8_UNORM, ImageUsage::COLOR_ATTACHMENT);

        let mut oracle = table_oracle!();
        oracle.insert_image_format_default(
            Format::R8G8B8A8_UNORM,
            ImageType::Dim2d,
            ImageTiling::Optimal,
            properties(ONE_FOUR),
        );
        assert!(SampleCountRule::UsageFlags.evaluate(&oracle, &case));

        oracle.insert_image_format_default(
            Format::R8G8B8A8_UNORM,
            ImageType::Dim2d,
            ImageTiling::Optimal,
            properties(ONE),
        );
        assert!(!SampleCountRule::UsageFlags.evaluate(&oracle, &case));
    }

    #[test]
    fn compressed_sampled_scenario() {
        let case = case_def(Format::BC1_RGB_UNORM_BLOCK, ImageUsage::SAMPLED);

        let mut oracle = table_oracle!();
        oracle.insert_image_format_default(
            Format::BC1_RGB_UNORM_BLOCK,
            ImageType::Dim2d,
            ImageTiling::Optimal,
            properties(ONE),
        );

        assert!(SampleCountRule::UsageFlags.evaluate(&oracle, &case));
    }

    #[test]
    fn non_2d_scenario() {
        let case = CaseDef {
            image_type: ImageType::Dim3d,
            ..case_def(Format::D32_SFLOAT, ImageUsage::empty())
        };

        let mut oracle = table_oracle!();
        oracle.insert_image_format_default(
            Format::D32_SFLOAT,
            ImageType::Dim3d,
            ImageTiling::Optimal,
            properties(ONE),
        );
        assert!(SampleCountRule::LinearTilingOrNot2d.evaluate(&oracle, &case));

        oracle.insert_image_format_default(
            Format::D32_SFLOAT,
            ImageType::Dim3d,
            ImageTiling::Optimal,
            properties(ONE_FOUR),
        );
        assert!(!SampleCountRule::LinearTilingOrNot2d.evaluate(&oracle, &case));
    }

    #[test]
    fn linear_rule_does_not_apply_to_optimal_2d() {
        let case = case_def(Format::R8_UNORM, ImageUsage::empty());

        let mut oracle = table_oracle!();
        oracle.set_default_image_format_properties(properties(ONE));

        assert!(!SampleCountRule::LinearTilingOrNot2d.evaluate(&oracle, &case));
        assert!(SampleCountRule::LinearTilingOrNot2d
            .evaluate(&oracle, &CaseDef { tiling: ImageTiling::Linear, ..case }));
    }

    #[test]
    fn cube_compatible_scenario() {
        let format = Format::G8_B8R8_2PLANE_420_UNORM;
        let case = case_def(format, ImageUsage::empty());
        let cube_info = ImageFormatInfo {
            flags: ImageCreateFlags::CUBE_COMPATIBLE,
            ..ImageFormatInfo::new(format)
        };

        let mut oracle = table_oracle!();
        oracle.insert_image_format_properties(cube_info.clone(), properties(ONE));
        assert!(SampleCountRule::CubeCompatible.evaluate(&oracle, &case));

        oracle.insert_image_format_properties(
            cube_info.clone(),
            properties(SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_2),
        );
        assert!(!SampleCountRule::CubeCompatible.evaluate(&oracle, &case));

        oracle.insert_image_format_properties(cube_info, None);
        assert!(!SampleCountRule::CubeCompatible.evaluate(&oracle, &case));
    }

    #[test]
    fn optimal_tiling_features() {
        let format = Format::R8G8B8A8_UNORM;
        let case = case_def(format, ImageUsage::empty());

        let mut oracle = table_oracle!();
        oracle.set_default_image_format_properties(properties(ONE_FOUR));
        assert!(!SampleCountRule::OptimalTilingFeatures.evaluate(&oracle, &case));

        oracle.insert_format_properties(
            format,
            FormatProperties {
                optimal_tiling_features: FormatFeatures::COLOR_ATTACHMENT,
                ..Default::default()
            },
        );
        assert!(SampleCountRule::OptimalTilingFeatures.evaluate(&oracle, &case));

        oracle.insert_format_properties_error(format, VulkanError::DeviceLost);
        assert!(!SampleCountRule::OptimalTilingFeatures.evaluate(&oracle, &case));
    }

    #[test]
    fn optimal_tiling_features_single_sample_without_attachment() {
        let case = case_def(Format::BC1_RGB_UNORM_BLOCK, ImageUsage::empty());

        let mut oracle = table_oracle!();
        oracle.set_default_image_format_properties(properties(ONE));

        assert!(SampleCountRule::OptimalTilingFeatures.evaluate(&oracle, &case));
    }

    #[test]
    fn external_memory_handle_types() {
        let format = Format::G8_B8R8_2PLANE_420_UNORM;
        let case = case_def(format, ImageUsage::empty());
        let external_info = |handle_type| ImageFormatInfo {
            external_memory_handle_type: Some(handle_type),
            ..ImageFormatInfo::new(format)
        };

        // Nothing is supported, which is consistent.
        let mut oracle = table_oracle!();
        assert!(SampleCountRule::ExternalMemoryHandleTypes.evaluate(&oracle, &case));

        oracle.insert_image_format_properties(
            external_info(ExternalMemoryHandleType::OpaqueFd),
            properties(ONE),
        );
        assert!(SampleCountRule::ExternalMemoryHandleTypes.evaluate(&oracle, &case));

        oracle.insert_image_format_properties(
            external_info(ExternalMemoryHandleType::D3D12Heap),
            properties(ONE_FOUR),
        );
        assert!(!SampleCountRule::ExternalMemoryHandleTypes.evaluate(&oracle, &case));

        oracle.insert_image_format_properties_error(
            external_info(ExternalMemoryHandleType::D3D12Heap),
            VulkanError::Unknown,
        );
        assert!(!SampleCountRule::ExternalMemoryHandleTypes.evaluate(&oracle, &case));
    }

    #[test]
    fn ycbcr_conversion() {
        let format = Format::G8_B8_R8_3PLANE_420_UNORM;
        let case = case_def(format, ImageUsage::empty());

        let mut oracle = table_oracle!();
        assert!(!SampleCountRule::YcbcrConversion.evaluate(&oracle, &case));

        oracle.set_default_image_format_properties(properties(ONE));
        assert!(SampleCountRule::YcbcrConversion.evaluate(&oracle, &case));

        oracle.set_default_image_format_properties(properties(ONE_FOUR));
        assert!(!SampleCountRule::YcbcrConversion.evaluate(&oracle, &case));
    }

    #[test]
    fn usage_flags_with_failed_queries() {
        let case = case_def(Format::R8G8B8A8_UNORM, ImageUsage::SAMPLED);

        let mut oracle = table_oracle!();
        oracle.set_default_image_format_properties(properties(ONE_FOUR));
        assert!(SampleCountRule::UsageFlags.evaluate(&oracle, &case));

        oracle.set_device_limits_error(VulkanError::DeviceLost);
        assert!(!SampleCountRule::UsageFlags.evaluate(&oracle, &case));

        let mut oracle = table_oracle!();
        oracle.insert_image_format_properties_error(
            ImageFormatInfo {
                usage: ImageUsage::SAMPLED,
                ..ImageFormatInfo::new(Format::R8G8B8A8_UNORM)
            },
            VulkanError::OutOfHostMemory,
        );
        assert!(!SampleCountRule::UsageFlags.evaluate(&oracle, &case));
    }

    #[test]
    fn one_sample_count_present() {
        let case = case_def(Format::R16_UNORM, ImageUsage::empty());

        let mut oracle = table_oracle!();
        oracle.set_default_image_format_properties(properties(SampleCounts::SAMPLE_4));
        assert!(!SampleCountRule::OneSampleCountPresent.evaluate(&oracle, &case));

        oracle.set_default_image_format_properties(properties(ONE_FOUR));
        assert!(SampleCountRule::OneSampleCountPresent.evaluate(&oracle, &case));
    }
}
