// Copyright (c) 2024 The sample-counts developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! An oracle that answers from in-memory tables.
//!
//! Image format queries are looked up in three steps:
//!
//! 1. an entry for exactly the queried [`ImageFormatInfo`],
//! 2. otherwise, an entry for the queried format, image type and tiling, regardless of usage,
//!    flags and external memory handle type,
//! 3. otherwise, the table-wide default, which is "not supported" unless set.

use super::CapabilityOracle;
use crate::{
    format::{Format, FormatProperties},
    image::{ImageFormatInfo, ImageFormatProperties, ImageTiling, ImageType},
    limits::DeviceLimits,
    VulkanError,
};
use foldhash::HashMap;

/// A [`CapabilityOracle`] backed by hash maps.
#[derive(Clone, Debug, Default)]
pub struct TableOracle {
    device_limits: DeviceLimits,
    device_limits_error: Option<VulkanError>,
    format_properties: HashMap<Format, Result<FormatProperties, VulkanError>>,
    image_format_properties:
        HashMap<ImageFormatInfo, Result<Option<ImageFormatProperties>, VulkanError>>,
    image_format_defaults:
        HashMap<(Format, ImageType, ImageTiling), Option<ImageFormatProperties>>,
    default_image_format_properties: Option<ImageFormatProperties>,
}

impl TableOracle {
    /// Returns a table with the given device limits, where no image format is supported and every
    /// format has no features.
    pub fn new(device_limits: DeviceLimits) -> Self {
        TableOracle {
            device_limits,
            ..Default::default()
        }
    }

    /// Makes `device_limits` fail with `err`.
    pub fn set_device_limits_error(&mut self, err: VulkanError) {
        self.device_limits_error = Some(err);
    }

    /// Sets the answer for `format_properties(format)`.
    pub fn insert_format_properties(&mut self, format: Format, properties: FormatProperties) {
        self.format_properties.insert(format, Ok(properties));
    }

    /// Makes `format_properties(format)` fail with `err`.
    pub fn insert_format_properties_error(&mut self, format: Format, err: VulkanError) {
        self.format_properties.insert(format, Err(err));
    }

    /// Sets the answer for exactly `image_format_info`. `None` means "not supported".
    pub fn insert_image_format_properties(
        &mut self,
        image_format_info: ImageFormatInfo,
        properties: Option<ImageFormatProperties>,
    ) {
        self.image_format_properties
            .insert(image_format_info, Ok(properties));
    }

    /// Makes the query for exactly `image_format_info` fail with `err`.
    pub fn insert_image_format_properties_error(
        &mut self,
        image_format_info: ImageFormatInfo,
        err: VulkanError,
    ) {
        self.image_format_properties
            .insert(image_format_info, Err(err));
    }

    /// Sets the answer for every query of `format` with `image_type` and `tiling` that has no
    /// exact entry.
    pub fn insert_image_format_default(
        &mut self,
        format: Format,
        image_type: ImageType,
        tiling: ImageTiling,
        properties: Option<ImageFormatProperties>,
    ) {
        self.image_format_defaults
            .insert((format, image_type, tiling), properties);
    }

    /// Sets the answer for every query that has neither an exact nor a per-format entry.
    pub fn set_default_image_format_properties(
        &mut self,
        properties: Option<ImageFormatProperties>,
    ) {
        self.default_image_format_properties = properties;
    }
}

impl CapabilityOracle for TableOracle {
    fn device_limits(&self) -> Result<DeviceLimits, VulkanError> {
        match self.device_limits_error {
            Some(err) => Err(err),
            None => Ok(self.device_limits),
        }
    }

    fn format_properties(&self, format: Format) -> Result<FormatProperties, VulkanError> {
        self.format_properties
            .get(&format)
            .copied()
            .unwrap_or(Ok(FormatProperties::default()))
    }

    fn image_format_properties(
        &self,
        image_format_info: &ImageFormatInfo,
    ) -> Result<Option<ImageFormatProperties>, VulkanError> {
        if let Some(&result) = self.image_format_properties.get(image_format_info) {
            return result;
        }

        let key = (
            image_format_info.format,
            image_format_info.image_type,
            image_format_info.tiling,
        );

        Ok(self
            .image_format_defaults
            .get(&key)
            .copied()
            .unwrap_or(self.default_image_format_properties))
    }
}

/// A serializable description of a [`TableOracle`].
///
/// This is the form in which capability tables are stored on disk and replayed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CapabilityTable {
    /// The answer to every `device_limits` query.
    pub device_limits: DeviceLimits,

    /// The answers to `format_properties` queries. Formats that aren't listed have no features.
    pub format_properties: Vec<FormatEntry>,

    /// Answers for exact image format queries.
    pub image_format_properties: Vec<ImageFormatEntry>,

    /// Answers for a format, image type and tiling, regardless of the other query parameters.
    pub image_format_defaults: Vec<ImageFormatDefault>,

    /// The answer for queries that match no other entry. `None` means "not supported".
    pub default_image_format_properties: Option<ImageFormatProperties>,
}

/// The features of one format in a [`CapabilityTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatEntry {
    pub format: Format,
    pub properties: FormatProperties,
}

/// The answer to one exact image format query in a [`CapabilityTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageFormatEntry {
    pub info: ImageFormatInfo,
    pub properties: Option<ImageFormatProperties>,
}

/// The answer for a format, image type and tiling in a [`CapabilityTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageFormatDefault {
    pub format: Format,
    pub image_type: ImageType,
    pub tiling: ImageTiling,
    pub properties: Option<ImageFormatProperties>,
}

impl From<CapabilityTable> for TableOracle {
    fn from(table: CapabilityTable) -> Self {
        let CapabilityTable {
            device_limits,
            format_properties,
            image_format_properties,
            image_format_defaults,
            default_image_format_properties,
        } = table;

        let mut oracle = TableOracle::new(device_limits);

        for entry in format_properties {
            oracle.insert_format_properties(entry.format, entry.properties);
        }

        for entry in image_format_properties {
            oracle.insert_image_format_properties(entry.info, entry.properties);
        }

        for entry in image_format_defaults {
            oracle.insert_image_format_default(
                entry.format,
                entry.image_type,
                entry.tiling,
                entry.properties,
            );
        }

        oracle.set_default_image_format_properties(default_image_format_properties);
        oracle
    }
}

#[cfg(test)]
mod tests {
    use super::{CapabilityTable, ImageFormatDefault, TableOracle};
    use crate::{
        format::{Format, FormatFeatures, FormatProperties},
        image::{
            ImageCreateFlags, ImageFormatInfo, ImageFormatProperties, ImageTiling, ImageType,
            SampleCounts,
        },
        limits::DeviceLimits,
        oracle::CapabilityOracle,
        VulkanError,
    };

    fn properties(sample_counts: SampleCounts) -> ImageFormatProperties {
        ImageFormatProperties {
            sample_counts,
            ..Default::default()
        }
    }

    #[test]
    fn unsupported_by_default() {
        let oracle = TableOracle::new(DeviceLimits::default());
        let info = ImageFormatInfo::new(Format::R8G8B8A8_UNORM);

        assert_eq!(oracle.image_format_properties(&info), Ok(None));
        assert_eq!(
            oracle.format_properties(Format::R8G8B8A8_UNORM),
            Ok(FormatProperties::default()),
        );
    }

    #[test]
    fn lookup_order() {
        let mut oracle = TableOracle::new(DeviceLimits::default());
        oracle.set_default_image_format_properties(Some(properties(SampleCounts::SAMPLE_1)));
        oracle.insert_image_format_default(
            Format::R8_UNORM,
            ImageType::Dim2d,
            ImageTiling::Optimal,
            Some(properties(SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_4)),
        );

        let cube_info = ImageFormatInfo {
            flags: ImageCreateFlags::CUBE_COMPATIBLE,
            ..ImageFormatInfo::new(Format::R8_UNORM)
        };
        oracle.insert_image_format_properties(cube_info.clone(), None);

        let plain = oracle
            .image_format_properties(&ImageFormatInfo::new(Format::R8_UNORM))
            .unwrap()
            .unwrap();
        assert_eq!(plain.sample_counts, SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_4);

        assert_eq!(oracle.image_format_properties(&cube_info), Ok(None));

        let other = oracle
            .image_format_properties(&ImageFormatInfo::new(Format::R8_SNORM))
            .unwrap()
            .unwrap();
        assert_eq!(other.sample_counts, SampleCounts::SAMPLE_1);
    }

    #[test]
    fn errors() {
        let mut oracle = TableOracle::new(DeviceLimits::default());
        let info = ImageFormatInfo::new(Format::D32_SFLOAT);
        oracle.insert_image_format_properties_error(info.clone(), VulkanError::DeviceLost);
        oracle.insert_format_properties_error(Format::D32_SFLOAT, VulkanError::OutOfHostMemory);
        oracle.set_device_limits_error(VulkanError::Unknown);

        assert_eq!(
            oracle.image_format_properties(&info),
            Err(VulkanError::DeviceLost),
        );
        assert_eq!(
            oracle.format_properties(Format::D32_SFLOAT),
            Err(VulkanError::OutOfHostMemory),
        );
        assert_eq!(oracle.device_limits(), Err(VulkanError::Unknown));
    }

    #[test]
    fn answers_are_idempotent() {
        let mut oracle = TableOracle::new(DeviceLimits {
            storage_image_sample_counts: SampleCounts::SAMPLE_1,
            ..Default::default()
        });
        oracle.insert_format_properties(
            Format::R8G8B8A8_UNORM,
            FormatProperties {
                optimal_tiling_features: FormatFeatures::COLOR_ATTACHMENT,
                ..Default::default()
            },
        );
        oracle.insert_image_format_default(
            Format::R8G8B8A8_UNORM,
            ImageType::Dim2d,
            ImageTiling::Optimal,
            Some(properties(SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_8)),
        );

        let info = ImageFormatInfo::new(Format::R8G8B8A8_UNORM);
        assert_eq!(
            oracle.image_format_properties(&info),
            oracle.image_format_properties(&info),
        );
        assert_eq!(
            oracle.format_properties(Format::R8G8B8A8_UNORM),
            oracle.format_properties(Format::R8G8B8A8_UNORM),
        );
        assert_eq!(oracle.device_limits(), oracle.device_limits());
    }

    #[test]
    fn from_capability_table() {
        let table = CapabilityTable {
            device_limits: DeviceLimits {
                sampled_image_color_sample_counts: SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_4,
                ..Default::default()
            },
            image_format_defaults: vec![ImageFormatDefault {
                format: Format::BC1_RGB_UNORM_BLOCK,
                image_type: ImageType::Dim2d,
                tiling: ImageTiling::Optimal,
                properties: Some(properties(SampleCounts::SAMPLE_1)),
            }],
            ..Default::default()
        };

        let oracle = TableOracle::from(table);
        assert_eq!(
            oracle.device_limits().unwrap().sampled_image_color_sample_counts,
            SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_4,
        );
        assert!(oracle
            .image_format_properties(&ImageFormatInfo::new(Format::BC1_RGB_UNORM_BLOCK))
            .unwrap()
            .is_some());
    }
}
