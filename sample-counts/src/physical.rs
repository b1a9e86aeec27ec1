// Copyright (c) 2024 The sample-counts developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

use crate::{
    format::{Format, FormatProperties},
    image::{ImageFormatInfo, ImageFormatProperties},
    instance::Instance,
    limits::DeviceLimits,
    macros::vulkan_enum,
    oracle::CapabilityOracle,
    Version, VulkanError,
};
use log::trace;
use std::{
    cmp,
    error::Error,
    fmt::{Display, Error as FmtError, Formatter},
    sync::Arc,
};

/// A physical device, answering capability queries through the Vulkan driver.
///
/// Every query goes to the driver again; nothing is cached.
#[derive(Debug)]
pub struct PhysicalDevice {
    instance: Arc<Instance>,
    handle: ash::vk::PhysicalDevice,
    index: usize,
    api_version: Version,
    device_name: String,
    device_type: PhysicalDeviceType,
}

impl PhysicalDevice {
    pub(crate) fn from_handle(
        instance: Arc<Instance>,
        handle: ash::vk::PhysicalDevice,
        index: usize,
    ) -> Self {
        let properties = unsafe { instance.fns().get_physical_device_properties(handle) };

        let device_name = properties
            .device_name_as_c_str()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let device_type =
            PhysicalDeviceType::try_from(properties.device_type).unwrap_or(PhysicalDeviceType::Other);
        let api_version = cmp::min(instance.api_version(), Version::from(properties.api_version));

        PhysicalDevice {
            instance,
            handle,
            index,
            api_version,
            device_name,
            device_type,
        }
    }

    /// Returns the instance this physical device belongs to.
    #[inline]
    pub fn instance(&self) -> &Arc<Instance> {
        &self.instance
    }

    /// Returns the position of the device in the list returned by
    /// [`Instance::enumerate_physical_devices`].
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the version of Vulkan that the queries use on this device.
    ///
    /// This is the lower of the version supported by the device and the version of the instance.
    #[inline]
    pub fn api_version(&self) -> Version {
        self.api_version
    }

    /// Returns the name that the driver reports for the device.
    #[inline]
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Returns the type of the device.
    #[inline]
    pub fn device_type(&self) -> PhysicalDeviceType {
        self.device_type
    }

    #[inline]
    pub fn handle(&self) -> ash::vk::PhysicalDevice {
        self.handle
    }

    fn image_format_properties2(
        &self,
        image_format_info: &ImageFormatInfo,
    ) -> Result<ImageFormatProperties, ash::vk::Result> {
        let &ImageFormatInfo {
            flags,
            format,
            image_type,
            tiling,
            usage,
            external_memory_handle_type,
            _ne: _,
        } = image_format_info;

        let mut external_info = ash::vk::PhysicalDeviceExternalImageFormatInfo::default();
        let mut external_properties = ash::vk::ExternalImageFormatProperties::default();

        let mut info_vk = ash::vk::PhysicalDeviceImageFormatInfo2::default()
            .format(format.into())
            .ty(image_type.into())
            .tiling(tiling.into())
            .usage(usage.into())
            .flags(flags.into());
        let mut properties_vk = ash::vk::ImageFormatProperties2::default();

        if let Some(handle_type) = external_memory_handle_type {
            external_info = external_info.handle_type(handle_type.into());
            info_vk = info_vk.push_next(&mut external_info);
            properties_vk = properties_vk.push_next(&mut external_properties);
        }

        unsafe {
            self.instance
                .fns()
                .get_physical_device_image_format_properties2(
                    self.handle,
                    &info_vk,
                    &mut properties_vk,
                )
        }?;

        let mut properties = ImageFormatProperties::from(properties_vk.image_format_properties);

        if external_memory_handle_type.is_some() {
            properties.external_memory_properties =
                external_properties.external_memory_properties.into();
        }

        Ok(properties)
    }
}

impl CapabilityOracle for PhysicalDevice {
    fn device_limits(&self) -> Result<DeviceLimits, VulkanError> {
        let fns = self.instance.fns();

        if self.api_version >= Version::V1_2 {
            let mut properties12 = ash::vk::PhysicalDeviceVulkan12Properties::default();
            let mut properties2 =
                ash::vk::PhysicalDeviceProperties2::default().push_next(&mut properties12);
            unsafe { fns.get_physical_device_properties2(self.handle, &mut properties2) };
            let limits = properties2.properties.limits;

            Ok(DeviceLimits::from_vk(&limits, Some(&properties12)))
        } else {
            let properties = unsafe { fns.get_physical_device_properties(self.handle) };

            Ok(DeviceLimits::from_vk(&properties.limits, None))
        }
    }

    fn format_properties(&self, format: Format) -> Result<FormatProperties, VulkanError> {
        let properties = unsafe {
            self.instance
                .fns()
                .get_physical_device_format_properties(self.handle, format.into())
        };

        Ok(properties.into())
    }

    fn image_format_properties(
        &self,
        image_format_info: &ImageFormatInfo,
    ) -> Result<Option<ImageFormatProperties>, VulkanError> {
        let result = if self.api_version >= Version::V1_1 {
            self.image_format_properties2(image_format_info)
        } else if image_format_info.external_memory_handle_type.is_some() {
            // External memory queries need the 1.1 entry point.
            trace!(
                "{}: external memory query without Vulkan 1.1, treating as unsupported",
                image_format_info.format,
            );

            return Ok(None);
        } else {
            unsafe {
                self.instance
                    .fns()
                    .get_physical_device_image_format_properties(
                        self.handle,
                        image_format_info.format.into(),
                        image_format_info.image_type.into(),
                        image_format_info.tiling.into(),
                        image_format_info.usage.into(),
                        image_format_info.flags.into(),
                    )
            }
            .map(ImageFormatProperties::from)
        };

        match result {
            Ok(properties) => Ok(Some(properties)),
            Err(ash::vk::Result::ERROR_FORMAT_NOT_SUPPORTED) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

vulkan_enum! {
    /// Type of a physical device.
    PhysicalDeviceType = PhysicalDeviceType(i32);

    /// The device is an integrated GPU.
    IntegratedGpu = INTEGRATED_GPU,

    /// The device is a discrete GPU.
    DiscreteGpu = DISCRETE_GPU,

    /// The device is a virtual GPU.
    VirtualGpu = VIRTUAL_GPU,

    /// The device is a CPU.
    Cpu = CPU,

    /// The device is something else.
    Other = OTHER,
}

/// Error that can happen when selecting a physical device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhysicalDeviceError {
    /// The instance has no physical devices.
    NoDevices,

    /// The requested index is not smaller than the number of physical devices.
    IndexOutOfRange { index: usize, count: usize },

    /// The Vulkan driver returned an error while enumerating the devices.
    VulkanError(VulkanError),
}

impl Error for PhysicalDeviceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::VulkanError(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for PhysicalDeviceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::NoDevices => write!(f, "no physical devices are available"),
            Self::IndexOutOfRange { index, count } => write!(
                f,
                "physical device index {index} is out of range, there are {count} devices",
            ),
            Self::VulkanError(err) => write!(f, "a runtime error occurred: {err}"),
        }
    }
}

impl From<VulkanError> for PhysicalDeviceError {
    fn from(err: VulkanError) -> Self {
        Self::VulkanError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::PhysicalDeviceError;
    use crate::{
        format::Format,
        image::{ImageFormatInfo, ImageTiling, ImageType, ImageUsage, SampleCounts},
        memory::ExternalMemoryHandleType,
        oracle::CapabilityOracle,
        rules::SampleCountRule,
        tree::CaseDef,
    };

    #[test]
    fn index_out_of_range() {
        let instance = instance!();

        match instance.physical_device(usize::MAX) {
            Err(PhysicalDeviceError::IndexOutOfRange { index, .. }) => {
                assert_eq!(index, usize::MAX)
            }
            Err(PhysicalDeviceError::NoDevices) => (),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn device_limits_contain_one_sample() {
        let physical_device = physical_device!();
        let limits = physical_device.device_limits().unwrap();

        assert!(limits
            .framebuffer_color_sample_counts
            .contains(SampleCounts::SAMPLE_1));
        assert!(limits
            .storage_image_sample_counts
            .contains(SampleCounts::SAMPLE_1));
    }

    #[test]
    fn mandatory_format_is_supported() {
        let physical_device = physical_device!();
        let info = ImageFormatInfo {
            usage: ImageUsage::SAMPLED,
            ..ImageFormatInfo::new(Format::R8G8B8A8_UNORM)
        };

        let properties = physical_device.image_format_properties(&info).unwrap();
        assert!(properties.is_some());
    }

    #[test]
    fn queries_are_idempotent() {
        let physical_device = physical_device!();
        let info = ImageFormatInfo {
            image_type: ImageType::Dim3d,
            tiling: ImageTiling::Linear,
            ..ImageFormatInfo::new(Format::D32_SFLOAT)
        };

        assert_eq!(
            physical_device.image_format_properties(&info),
            physical_device.image_format_properties(&info),
        );
        assert_eq!(
            physical_device.format_properties(Format::D32_SFLOAT),
            physical_device.format_properties(Format::D32_SFLOAT),
        );
    }

    #[test]
    fn external_memory_query() {
        let physical_device = physical_device!();

        for handle_type in ExternalMemoryHandleType::ALL {
            let info = ImageFormatInfo {
                external_memory_handle_type: Some(handle_type),
                ..ImageFormatInfo::new(Format::G8_B8R8_2PLANE_420_UNORM)
            };

            match physical_device.image_format_properties(&info) {
                Ok(Some(properties)) => {
                    assert!(
                        properties.sample_counts.contains(SampleCounts::SAMPLE_1),
                        "{handle_type:?}: {:?}",
                        properties.sample_counts,
                    );
                }
                Ok(None) => (),
                Err(err) => panic!("{handle_type:?}: {err}"),
            }
        }
    }

    #[test]
    fn external_memory_rule_on_device() {
        let physical_device = physical_device!();
        let case_def = CaseDef {
            format: Format::G8_B8R8_2PLANE_420_UNORM,
            image_type: ImageType::Dim2d,
            tiling: ImageTiling::Optimal,
            usage: ImageUsage::empty(),
        };

        assert!(SampleCountRule::ExternalMemoryHandleTypes.evaluate(&physical_device, &case_def));
    }
}
