// Copyright (c) 2024 The sample-counts developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! The capability queries that the sample count rules are evaluated against.
//!
//! The rules never talk to a driver directly. Instead they ask a [`CapabilityOracle`], which is
//! implemented by [`PhysicalDevice`] for a real Vulkan implementation and by [`TableOracle`] for
//! capabilities that are known in advance.
//!
//! Every query is answered fresh. Implementations must not assume that a query is made only
//! once, and must give the same answer when asked the same question twice.
//!
//! [`PhysicalDevice`]: crate::physical::PhysicalDevice
//! [`TableOracle`]: table::TableOracle

use crate::{
    format::{Format, FormatProperties},
    image::{ImageFormatInfo, ImageFormatProperties},
    limits::DeviceLimits,
    VulkanError,
};

pub mod table;

/// Answers the questions that the sample count rules ask about an implementation.
pub trait CapabilityOracle {
    /// Returns the sample-count limits of the device.
    fn device_limits(&self) -> Result<DeviceLimits, VulkanError>;

    /// Returns the features that the device supports for `format`.
    fn format_properties(&self, format: Format) -> Result<FormatProperties, VulkanError>;

    /// Returns the properties that the device supports for images created with the parameters
    /// in `image_format_info`.
    ///
    /// Returns `Ok(None)` if the combination of parameters is not supported. If
    /// `image_format_info.external_memory_handle_type` is `Some`, the query also covers importing
    /// and exporting memory of that handle type.
    fn image_format_properties(
        &self,
        image_format_info: &ImageFormatInfo,
    ) -> Result<Option<ImageFormatProperties>, VulkanError>;
}

impl<T> CapabilityOracle for &T
where
    T: CapabilityOracle + ?Sized,
{
    #[inline]
    fn device_limits(&self) -> Result<DeviceLimits, VulkanError> {
        (**self).device_limits()
    }

    #[inline]
    fn format_properties(&self, format: Format) -> Result<FormatProperties, VulkanError> {
        (**self).format_properties(format)
    }

    #[inline]
    fn image_format_properties(
        &self,
        image_format_info: &ImageFormatInfo,
    ) -> Result<Option<ImageFormatProperties>, VulkanError> {
        (**self).image_format_properties(image_format_info)
    }
}
