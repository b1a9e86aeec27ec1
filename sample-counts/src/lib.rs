// Copyright (c) 2024 The sample-counts developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Conformance checks for the sample counts that a Vulkan implementation reports for images.
//!
//! For every combination of format, image type, tiling and usage, the Vulkan specification
//! describes which sample counts `vkGetPhysicalDeviceImageFormatProperties` must report, in terms
//! of the sample-count limits of the physical device. This crate enumerates those combinations as
//! named cases and checks each of them against a [`CapabilityOracle`].
//!
//! # Brief summary
//!
//! - A [`CapabilityOracle`] answers the three queries that the checks need: the device limits,
//!   the format properties of a format, and the image format properties of an
//!   [`ImageFormatInfo`]. The [`PhysicalDevice`] oracle asks a real Vulkan driver, while the
//!   [`TableOracle`] answers from in-memory tables.
//!
//! - A [`SampleCountRule`] is one of the checks. Rules are pure functions of the answers that
//!   the oracle gives.
//!
//! - [`sample_count_cases`] builds the full list of [`TestCase`]s, each with a stable
//!   hierarchical name such as `sample_counts.2d.optimal.image_format_r8g8b8a8_unorm_cube_compatible`.
//!
//! - [`run`] evaluates a list of cases against an oracle and collects a [`RunReport`].
//!
//! # Example
//!
//! ```no_run
//! use sample_counts::{run, sample_count_cases, Instance, InstanceCreateInfo, RunnerCreateInfo};
//!
//! let instance = Instance::new(InstanceCreateInfo::default()).unwrap();
//! let physical_device = instance.physical_device(0).unwrap();
//! let report = run(&physical_device, &sample_count_cases(), RunnerCreateInfo::default()).unwrap();
//!
//! println!("{} passed, {} failed", report.passed(), report.failed());
//! ```

pub use crate::{
    format::{Format, FormatClass, FormatFeatures, FormatProperties, NumericType},
    image::{
        ImageCreateFlags, ImageFormatInfo, ImageFormatProperties, ImageTiling, ImageType,
        ImageUsage, SampleCount, SampleCounts,
    },
    instance::{Instance, InstanceCreateInfo, LoadingError},
    limits::DeviceLimits,
    memory::{ExternalMemoryHandleType, ExternalMemoryHandleTypes},
    oracle::{table::CapabilityTable, table::TableOracle, CapabilityOracle},
    physical::{PhysicalDevice, PhysicalDeviceError, PhysicalDeviceType},
    rules::{usage_sample_counts_satisfied, SampleCountRule, UsageCategory},
    runner::{run, CaseResult, RunReport, RunnerCreateInfo, RunnerError, TestStatus},
    tree::{sample_count_cases, CaseDef, TestCase},
    version::Version,
};
use std::{
    error::Error,
    fmt::{Display, Error as FmtError, Formatter},
};

#[macro_use]
mod tests;
mod macros;

pub mod format;
pub mod image;
pub mod instance;
pub mod limits;
pub mod memory;
pub mod oracle;
pub mod physical;
pub mod rules;
pub mod runner;
pub mod tree;
mod version;

/// An error returned by a Vulkan function.
///
/// Only the results that the capability queries and instance creation can return have their own
/// variant. Anything else is kept as [`VulkanError::Unnamed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VulkanError {
    OutOfHostMemory,
    OutOfDeviceMemory,
    InitializationFailed,
    DeviceLost,
    LayerNotPresent,
    ExtensionNotPresent,
    IncompatibleDriver,
    FormatNotSupported,
    Unknown,
    InvalidExternalHandle,
    ValidationFailed,
    Unnamed(ash::vk::Result),
}

impl From<ash::vk::Result> for VulkanError {
    fn from(val: ash::vk::Result) -> VulkanError {
        match val {
            ash::vk::Result::ERROR_OUT_OF_HOST_MEMORY => Self::OutOfHostMemory,
            ash::vk::Result::ERROR_OUT_OF_DEVICE_MEMORY => Self::OutOfDeviceMemory,
            ash::vk::Result::ERROR_INITIALIZATION_FAILED => Self::InitializationFailed,
            ash::vk::Result::ERROR_DEVICE_LOST => Self::DeviceLost,
            ash::vk::Result::ERROR_LAYER_NOT_PRESENT => Self::LayerNotPresent,
            ash::vk::Result::ERROR_EXTENSION_NOT_PRESENT => Self::ExtensionNotPresent,
            ash::vk::Result::ERROR_INCOMPATIBLE_DRIVER => Self::IncompatibleDriver,
            ash::vk::Result::ERROR_FORMAT_NOT_SUPPORTED => Self::FormatNotSupported,
            ash::vk::Result::ERROR_UNKNOWN => Self::Unknown,
            ash::vk::Result::ERROR_INVALID_EXTERNAL_HANDLE => Self::InvalidExternalHandle,
            ash::vk::Result::ERROR_VALIDATION_FAILED_EXT => Self::ValidationFailed,
            _ => Self::Unnamed(val),
        }
    }
}

impl Error for VulkanError {}

impl Display for VulkanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        let msg = match self {
            VulkanError::OutOfHostMemory => "a host memory allocation has failed",
            VulkanError::OutOfDeviceMemory => "a device memory allocation has failed",
            VulkanError::InitializationFailed => {
                "initialization of an object could not be completed for \
                implementation-specific reasons"
            }
            VulkanError::DeviceLost => "the logical or physical device has been lost",
            VulkanError::LayerNotPresent => {
                "a requested layer is not present or could not be loaded"
            }
            VulkanError::ExtensionNotPresent => "a requested extension is not supported",
            VulkanError::IncompatibleDriver => {
                "the requested version of Vulkan is not supported by the driver or is otherwise \
                incompatible for implementation-specific reasons"
            }
            VulkanError::FormatNotSupported => {
                "a requested format is not supported on this device"
            }
            VulkanError::Unknown => {
                "an unknown error has occurred; either the application has provided invalid \
                input, or an implementation failure has occurred"
            }
            VulkanError::InvalidExternalHandle => {
                "an external handle is not a valid handle of the specified type"
            }
            VulkanError::ValidationFailed => "validation failed",
            VulkanError::Unnamed(result) => {
                return write!(f, "unnamed error, VkResult value {}", result.as_raw());
            }
        };

        write!(f, "{msg}")
    }
}

/// A helper type for non-exhaustive structs.
///
/// This type cannot be constructed outside this crate. Structures with a field of this type can
/// only be constructed by calling a constructor function or `Default::default()`. The effect is
/// similar to the standard Rust `#[non_exhaustive]` attribute, except that it does not prevent
/// update syntax from being used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)] // add traits as needed
pub struct NonExhaustive(pub(crate) ());

impl NonExhaustive {
    #[inline]
    pub(crate) const fn new() -> Self {
        NonExhaustive(())
    }
}

#[cfg(test)]
mod error_tests {
    use super::VulkanError;

    #[test]
    fn from_vk_result() {
        assert_eq!(
            VulkanError::from(ash::vk::Result::ERROR_FORMAT_NOT_SUPPORTED),
            VulkanError::FormatNotSupported,
        );
        assert_eq!(
            VulkanError::from(ash::vk::Result::ERROR_FRAGMENTED_POOL),
            VulkanError::Unnamed(ash::vk::Result::ERROR_FRAGMENTED_POOL),
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            VulkanError::DeviceLost.to_string(),
            "the logical or physical device has been lost",
        );
        assert!(VulkanError::Unnamed(ash::vk::Result::ERROR_FRAGMENTED_POOL)
            .to_string()
            .starts_with("unnamed error"));
    }
}
