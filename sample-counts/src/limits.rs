// Copyright (c) 2024 The sample-counts developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

use crate::image::SampleCounts;

/// The sample-count limits of a physical device.
///
/// These are the subset of the device limits that the supported sample counts of an image are
/// compared against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceLimits {
    /// `framebufferColorSampleCounts`
    pub framebuffer_color_sample_counts: SampleCounts,

    /// `framebufferIntegerColorSampleCounts`
    ///
    /// This limit was added in Vulkan 1.2. On earlier devices it is empty.
    pub framebuffer_integer_color_sample_counts: SampleCounts,

    /// `framebufferDepthSampleCounts`
    pub framebuffer_depth_sample_counts: SampleCounts,

    /// `framebufferStencilSampleCounts`
    pub framebuffer_stencil_sample_counts: SampleCounts,

    /// `sampledImageColorSampleCounts`
    pub sampled_image_color_sample_counts: SampleCounts,

    /// `sampledImageDepthSampleCounts`
    pub sampled_image_depth_sample_counts: SampleCounts,

    /// `sampledImageIntegerSampleCounts`
    pub sampled_image_integer_sample_counts: SampleCounts,

    /// `storageImageSampleCounts`
    pub storage_image_sample_counts: SampleCounts,
}

impl DeviceLimits {
    /// Builds the limits from the core 1.0 limits and, if available, the Vulkan 1.2 properties.
    pub fn from_vk(
        limits: &ash::vk::PhysicalDeviceLimits,
        properties12: Option<&ash::vk::PhysicalDeviceVulkan12Properties<'_>>,
    ) -> Self {
        DeviceLimits {
            framebuffer_color_sample_counts: limits.framebuffer_color_sample_counts.into(),
            framebuffer_integer_color_sample_counts: properties12
                .map(|p| p.framebuffer_integer_color_sample_counts.into())
                .unwrap_or_default(),
            framebuffer_depth_sample_counts: limits.framebuffer_depth_sample_counts.into(),
            framebuffer_stencil_sample_counts: limits.framebuffer_stencil_sample_counts.into(),
            sampled_image_color_sample_counts: limits.sampled_image_color_sample_counts.into(),
            sampled_image_depth_sample_counts: limits.sampled_image_depth_sample_counts.into(),
            sampled_image_integer_sample_counts: limits
                .sampled_image_integer_sample_counts
                .into(),
            storage_image_sample_counts: limits.storage_image_sample_counts.into(),
        }
    }
}
