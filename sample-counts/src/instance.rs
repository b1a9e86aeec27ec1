// Copyright (c) 2024 The sample-counts developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Loading the Vulkan library and creating an instance.
//!
//! The instance is the only object that the capability queries need. No logical device is ever
//! created: every query goes through the physical device.

use crate::{
    physical::{PhysicalDevice, PhysicalDeviceError},
    NonExhaustive, Version, VulkanError,
};
use log::{debug, info, warn};
use std::{
    cmp,
    error::Error,
    ffi::{c_char, CStr, CString, NulError},
    fmt::{Debug, Display, Error as FmtError, Formatter},
    sync::Arc,
};

const ENGINE_NAME: &CStr = c"sample-counts";
const ENGINE_VERSION: Version = Version::major_minor(0, 1);

/// An initialized Vulkan instance, together with the library it was loaded from.
///
/// The instance is destroyed when the last reference to it is dropped.
pub struct Instance {
    handle: ash::Instance,
    // Kept alive for as long as the instance exists.
    _entry: ash::Entry,
    api_version: Version,
    portability_enumeration: bool,
}

impl Instance {
    /// Loads the Vulkan library and creates a new instance.
    pub fn new(create_info: InstanceCreateInfo) -> Result<Arc<Instance>, LoadingError> {
        let InstanceCreateInfo {
            application_name,
            application_version,
            max_api_version,
            enumerate_portability,
            _ne: _,
        } = create_info;

        let entry = unsafe { ash::Entry::load() }.map_err(LoadingError::LibraryLoadFailure)?;

        let library_version = unsafe { entry.try_enumerate_instance_version() }
            .map_err(VulkanError::from)?
            .map_or(Version::V1_0, Version::from);
        let max_api_version = max_api_version.unwrap_or(Version::V1_3);
        let api_version = cmp::min(max_api_version, library_version);

        // A 1.0 library rejects any other requested version.
        let requested_api_version = if library_version >= Version::V1_1 {
            max_api_version
        } else {
            Version::V1_0
        };

        let application_name = application_name
            .map(CString::new)
            .transpose()
            .map_err(LoadingError::InvalidApplicationName)?;

        let mut flags = ash::vk::InstanceCreateFlags::empty();
        let mut enabled_extensions: Vec<*const c_char> = Vec::new();
        let mut portability_enumeration = false;

        if enumerate_portability {
            let extension_properties = unsafe { entry.enumerate_instance_extension_properties(None) }
                .map_err(VulkanError::from)?;
            let name = ash::khr::portability_enumeration::NAME;

            if extension_properties
                .iter()
                .any(|properties| properties.extension_name_as_c_str() == Ok(name))
            {
                flags |= ash::vk::InstanceCreateFlags::ENUMERATE_PORTABILITY_KHR;
                enabled_extensions.push(name.as_ptr());
                portability_enumeration = true;
            } else {
                warn!(
                    "portability enumeration was requested, but {} is not available",
                    name.to_string_lossy(),
                );
            }
        }

        let mut application_info = ash::vk::ApplicationInfo::default()
            .application_version(
                u32::try_from(application_version)
                    .map_err(|()| LoadingError::VersionOutOfRange(application_version))?,
            )
            .engine_name(ENGINE_NAME)
            .engine_version(
                u32::try_from(ENGINE_VERSION)
                    .map_err(|()| LoadingError::VersionOutOfRange(ENGINE_VERSION))?,
            )
            .api_version(
                u32::try_from(requested_api_version)
                    .map_err(|()| LoadingError::VersionOutOfRange(requested_api_version))?,
            );

        if let Some(application_name) = application_name.as_deref() {
            application_info = application_info.application_name(application_name);
        }

        let create_info_vk = ash::vk::InstanceCreateInfo::default()
            .flags(flags)
            .application_info(&application_info)
            .enabled_extension_names(&enabled_extensions);

        let handle = unsafe { entry.create_instance(&create_info_vk, None) }
            .map_err(VulkanError::from)?;

        info!("created Vulkan instance with API version {api_version}");

        Ok(Arc::new(Instance {
            handle,
            _entry: entry,
            api_version,
            portability_enumeration,
        }))
    }

    /// Returns the Vulkan version supported by the instance.
    ///
    /// This is the lower of the library version and the
    /// [`max_api_version`](InstanceCreateInfo::max_api_version) requested on creation.
    #[inline]
    pub fn api_version(&self) -> Version {
        self.api_version
    }

    /// Returns whether portability subset devices are enumerated.
    #[inline]
    pub fn portability_enumeration(&self) -> bool {
        self.portability_enumeration
    }

    /// Returns the physical devices available on the system, in the order the driver reports
    /// them.
    pub fn enumerate_physical_devices(
        self: &Arc<Self>,
    ) -> Result<Vec<PhysicalDevice>, VulkanError> {
        let handles = unsafe { self.handle.enumerate_physical_devices() }?;
        debug!("found {} physical devices", handles.len());

        Ok(handles
            .into_iter()
            .enumerate()
            .map(|(index, handle)| PhysicalDevice::from_handle(self.clone(), handle, index))
            .collect())
    }

    /// Returns the physical device at `index` in the order of
    /// [`enumerate_physical_devices`](Self::enumerate_physical_devices).
    pub fn physical_device(
        self: &Arc<Self>,
        index: usize,
    ) -> Result<PhysicalDevice, PhysicalDeviceError> {
        let mut physical_devices = self.enumerate_physical_devices()?;
        let count = physical_devices.len();

        if count == 0 {
            return Err(PhysicalDeviceError::NoDevices);
        }

        if index >= count {
            return Err(PhysicalDeviceError::IndexOutOfRange { index, count });
        }

        Ok(physical_devices.swap_remove(index))
    }

    #[inline]
    pub(crate) fn fns(&self) -> &ash::Instance {
        &self.handle
    }
}

impl Drop for Instance {
    #[inline]
    fn drop(&mut self) {
        unsafe { self.handle.destroy_instance(None) };
    }
}

impl Debug for Instance {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.debug_struct("Instance")
            .field("handle", &self.handle.handle())
            .field("api_version", &self.api_version)
            .field("portability_enumeration", &self.portability_enumeration)
            .finish_non_exhaustive()
    }
}

/// Parameters to create a new `Instance`.
#[derive(Clone, Debug)]
pub struct InstanceCreateInfo {
    /// A string of your choice stating the name of your application.
    ///
    /// The default value is `None`.
    pub application_name: Option<String>,

    /// A version number of your choice specifying the version of your application.
    ///
    /// The default value is zero.
    pub application_version: Version,

    /// The highest Vulkan API version that the queries may use.
    ///
    /// The default value is `None`, which selects Vulkan 1.3. Lower values limit the queries to
    /// the entry points of that version, which is useful to check how an implementation behaves
    /// for older applications.
    pub max_api_version: Option<Version>,

    /// Include portability subset devices when enumerating physical devices.
    ///
    /// If the library doesn't support `VK_KHR_portability_enumeration`, a warning is logged and
    /// the instance is created without it.
    ///
    /// The default value is `false`.
    pub enumerate_portability: bool,

    pub _ne: NonExhaustive,
}

impl Default for InstanceCreateInfo {
    #[inline]
    fn default() -> Self {
        Self {
            application_name: None,
            application_version: Version::major_minor(0, 0),
            max_api_version: None,
            enumerate_portability: false,
            _ne: NonExhaustive::new(),
        }
    }
}

/// Error that can happen when creating an instance.
#[derive(Debug)]
pub enum LoadingError {
    /// Failed to load the Vulkan shared library.
    LibraryLoadFailure(ash::LoadingError),

    /// The application name contains a nul byte.
    InvalidApplicationName(NulError),

    /// A version doesn't fit in the packed Vulkan version format.
    VersionOutOfRange(Version),

    /// The Vulkan driver returned an error and was unable to complete the operation.
    VulkanError(VulkanError),
}

impl Error for LoadingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::LibraryLoadFailure(err) => Some(err),
            Self::InvalidApplicationName(err) => Some(err),
            Self::VulkanError(err) => Some(err),
            Self::VersionOutOfRange(_) => None,
        }
    }
}

impl Display for LoadingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::LibraryLoadFailure(_) => write!(f, "failed to load the Vulkan shared library"),
            Self::InvalidApplicationName(_) => {
                write!(f, "the application name contains a nul byte")
            }
            Self::VersionOutOfRange(version) => {
                write!(f, "version {version} cannot be passed to Vulkan")
            }
            Self::VulkanError(err) => write!(f, "a runtime error occurred: {err}"),
        }
    }
}

impl From<VulkanError> for LoadingError {
    fn from(err: VulkanError) -> Self {
        Self::VulkanError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{Instance, InstanceCreateInfo, LoadingError};
    use crate::Version;

    #[test]
    fn create_instance() {
        let instance = instance!();
        assert!(instance.api_version() >= Version::V1_0);
    }

    #[test]
    fn max_api_version_is_respected() {
        let instance = match Instance::new(InstanceCreateInfo {
            max_api_version: Some(Version::V1_0),
            ..Default::default()
        }) {
            Ok(instance) => instance,
            Err(_) => return,
        };

        assert_eq!(instance.api_version(), Version::V1_0);
    }

    #[test]
    fn nul_in_application_name() {
        match Instance::new(InstanceCreateInfo {
            application_name: Some("bad\0name".to_owned()),
            ..Default::default()
        }) {
            Err(LoadingError::InvalidApplicationName(_)) => (),
            // No Vulkan library on this machine, so the name is never checked.
            Err(LoadingError::LibraryLoadFailure(_)) | Err(LoadingError::VulkanError(_)) => (),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
