// Copyright (c) 2024 The sample-counts developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! The named cases, grouped by image type and tiling.
//!
//! Case names have the form
//! `sample_counts.<image type>.<tiling>.image_format_<format>_<rule>`, for example
//! `sample_counts.2d.optimal.image_format_d32_sfloat_usage_flags_depth_stencil_sampled`.

use crate::{
    format::Format,
    image::{ImageTiling, ImageType, ImageUsage},
    rules::{SampleCountRule, UsageCategory},
};
use smallvec::{smallvec, SmallVec};
use std::fmt::Write as _;

const ROOT_GROUP: &str = "sample_counts";

/// The image parameters of one case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseDef {
    pub format: Format,
    pub image_type: ImageType,
    pub tiling: ImageTiling,

    /// The usage checked by [`SampleCountRule::UsageFlags`], and the usage of the support check
    /// that precedes every case. Empty for the other rules.
    pub usage: ImageUsage,
}

/// A named case: a rule and the image parameters it is evaluated for.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TestCase {
    /// The groups the case belongs to, outermost first.
    pub group: SmallVec<[&'static str; 3]>,

    /// The name of the case within its group.
    pub name: String,

    pub case_def: CaseDef,
    pub rule: SampleCountRule,
}

impl TestCase {
    /// Returns the fully qualified name of the case, with groups separated by dots.
    pub fn full_name(&self) -> String {
        let mut full_name = String::new();

        for group in &self.group {
            full_name.push_str(group);
            full_name.push('.');
        }

        full_name.push_str(&self.name);
        full_name
    }
}

/// Returns every case, in registration order.
///
/// Cases are nested by image type, then tiling, then format. Optimal 2D images get one case per
/// rule, with one [`UsageFlags`](SampleCountRule::UsageFlags) case for each non-empty subset of
/// the usage categories. All other image types and tilings get a single
/// [`LinearTilingOrNot2d`](SampleCountRule::LinearTilingOrNot2d) case.
pub fn sample_count_cases() -> Vec<TestCase> {
    let mut cases = Vec::new();

    for image_type in ImageType::ALL {
        for tiling in ImageTiling::ALL {
            for &format in Format::ALL {
                push_format_cases(&mut cases, format, image_type, tiling);
            }
        }
    }

    cases
}

fn push_format_cases(
    cases: &mut Vec<TestCase>,
    format: Format,
    image_type: ImageType,
    tiling: ImageTiling,
) {
    let group: SmallVec<[&'static str; 3]> =
        smallvec![ROOT_GROUP, image_type.short_name(), tiling.short_name()];
    let case_def = CaseDef {
        format,
        image_type,
        tiling,
        usage: ImageUsage::empty(),
    };
    let format_name = format.short_name();

    let mut push = |rule: SampleCountRule, usage: ImageUsage| {
        let mut name = format!("image_format_{format_name}_{}", rule.name());

        for category in UsageCategory::from_usage(usage) {
            let _ = write!(name, "_{}", category.short_name());
        }

        cases.push(TestCase {
            group: group.clone(),
            name,
            case_def: CaseDef { usage, ..case_def },
            rule,
        });
    };

    if SampleCountRule::LinearTilingOrNot2d.applies_to(image_type, tiling) {
        push(SampleCountRule::LinearTilingOrNot2d, ImageUsage::empty());
        return;
    }

    push(SampleCountRule::CubeCompatible, ImageUsage::empty());
    push(SampleCountRule::OptimalTilingFeatures, ImageUsage::empty());

    if format.is_ycbcr() {
        push(SampleCountRule::ExternalMemoryHandleTypes, ImageUsage::empty());
        push(SampleCountRule::YcbcrConversion, ImageUsage::empty());
    }

    for usage in usage_subsets() {
        push(SampleCountRule::UsageFlags, usage);
    }

    push(SampleCountRule::OneSampleCountPresent, ImageUsage::empty());
}

/// Returns the 15 non-empty combinations of the usage categories.
///
/// Subset `i` contains category `j` of [`UsageCategory::ALL`] if bit `j` of `i` is set, and the
/// subsets are returned for `i` from 1 to 15.
pub fn usage_subsets() -> impl Iterator<Item = ImageUsage> {
    (1u32..1 << UsageCategory::ALL.len()).map(|bits| {
        UsageCategory::ALL
            .into_iter()
            .enumerate()
            .filter(|&(j, _)| bits & (1 << j) != 0)
            .fold(ImageUsage::empty(), |usage, (_, category)| {
                usage | category.usage()
            })
    })
}
