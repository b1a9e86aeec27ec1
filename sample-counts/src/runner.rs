// Copyright (c) 2024 The sample-counts developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Evaluating cases against an oracle.

use crate::{
    image::ImageFormatInfo,
    oracle::CapabilityOracle,
    rules::SampleCountRule,
    tree::TestCase,
    NonExhaustive,
};
use log::{debug, info, warn};
use rayon::{
    iter::{IntoParallelIterator, ParallelIterator},
    ThreadPoolBuildError, ThreadPoolBuilder,
};
use std::{
    error::Error,
    fmt::{Display, Error as FmtError, Formatter},
    time::{Duration, Instant},
};

/// The outcome of one case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TestStatus {
    /// The reported sample counts are consistent with the rule.
    Pass,

    /// The reported sample counts are inconsistent with the rule, or a query failed.
    Fail,

    /// The format isn't supported with the case's image type, tiling and usage, so the case was
    /// skipped.
    NotSupported,
}

impl TestStatus {
    /// Returns the message reported for the status.
    #[inline]
    pub const fn message(self) -> &'static str {
        match self {
            TestStatus::Pass => "OK",
            TestStatus::Fail => "FAILED",
            TestStatus::NotSupported => "Format is not supported",
        }
    }
}

impl Display for TestStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.write_str(self.message())
    }
}

/// The outcome of one case, together with the case's name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseResult {
    /// The fully qualified name of the case.
    pub name: String,
    pub rule: SampleCountRule,
    pub status: TestStatus,
}

/// The results of a run, in the order of the cases that were given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    pub results: Vec<CaseResult>,

    /// The wall-clock time taken by the run.
    pub elapsed: Duration,
}

impl RunReport {
    /// Returns the number of cases with the given status.
    pub fn count(&self, status: TestStatus) -> usize {
        self.results
            .iter()
            .filter(|result| result.status == status)
            .count()
    }

    #[inline]
    pub fn passed(&self) -> usize {
        self.count(TestStatus::Pass)
    }

    #[inline]
    pub fn failed(&self) -> usize {
        self.count(TestStatus::Fail)
    }

    #[inline]
    pub fn not_supported(&self) -> usize {
        self.count(TestStatus::NotSupported)
    }

    /// Returns the cases that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results
            .iter()
            .filter(|result| result.status == TestStatus::Fail)
    }

    /// Returns whether no case failed.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Parameters of a run.
#[derive(Clone, Debug)]
pub struct RunnerCreateInfo {
    /// Only cases whose fully qualified name contains this string are run.
    ///
    /// The default value is `None`, which runs every case.
    pub filter: Option<String>,

    /// The number of threads that evaluate cases. The oracle is shared between them.
    ///
    /// A value of 0 is treated as 1. The default value is 1.
    pub thread_count: usize,

    pub _ne: NonExhaustive,
}

impl Default for RunnerCreateInfo {
    #[inline]
    fn default() -> Self {
        Self {
            filter: None,
            thread_count: 1,
            _ne: NonExhaustive::new(),
        }
    }
}

/// Error that can happen when running cases.
#[derive(Debug)]
pub enum RunnerError {
    /// The worker threads could not be started.
    ThreadPool(ThreadPoolBuildError),
}

impl Error for RunnerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ThreadPool(err) => Some(err),
        }
    }
}

impl Display for RunnerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::ThreadPool(_) => write!(f, "failed to start the worker threads"),
        }
    }
}

impl From<ThreadPoolBuildError> for RunnerError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

/// Evaluates `cases` against `oracle` and returns the results in the order of `cases`.
///
/// With more than one thread, the cases are evaluated on a dedicated thread pool that is torn
/// down before returning.
pub fn run<O>(
    oracle: &O,
    cases: &[TestCase],
    create_info: RunnerCreateInfo,
) -> Result<RunReport, RunnerError>
where
    O: CapabilityOracle + Sync + ?Sized,
{
    let RunnerCreateInfo {
        filter,
        thread_count,
        _ne: _,
    } = create_info;

    let start = Instant::now();

    let selected: Vec<(String, &TestCase)> = cases
        .iter()
        .map(|case| (case.full_name(), case))
        .filter(|(name, _)| filter.as_deref().is_none_or(|filter| name.contains(filter)))
        .collect();

    let thread_count = thread_count.clamp(1, selected.len().max(1));
    info!(
        "running {} of {} cases on {thread_count} thread(s)",
        selected.len(),
        cases.len(),
    );

    let evaluate = |(name, case): (String, &TestCase)| {
        let status = run_case(oracle, case);
        debug!("{name}: {status}");

        CaseResult {
            name,
            rule: case.rule,
            status,
        }
    };

    let results: Vec<CaseResult> = if thread_count == 1 {
        selected.into_iter().map(evaluate).collect()
    } else {
        let pool = ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .thread_name(|index| format!("sample-counts-{index}"))
            .build()?;

        pool.install(|| selected.into_par_iter().map(evaluate).collect())
    };

    let report = RunReport {
        results,
        elapsed: start.elapsed(),
    };

    info!(
        "{} passed, {} failed, {} not supported in {:.2?}",
        report.passed(),
        report.failed(),
        report.not_supported(),
        report.elapsed,
    );

    Ok(report)
}

/// Evaluates a single case.
///
/// The format is first queried with the case's image type, tiling and usage. If it is not
/// supported, the case is skipped.
pub fn run_case<O>(oracle: &O, case: &TestCase) -> TestStatus
where
    O: CapabilityOracle + ?Sized,
{
    let case_def = &case.case_def;
    let support_info = ImageFormatInfo {
        image_type: case_def.image_type,
        tiling: case_def.tiling,
        usage: case_def.usage,
        ..ImageFormatInfo::new(case_def.format)
    };

    match oracle.image_format_properties(&support_info) {
        Ok(Some(_)) => (),
        Ok(None) => return TestStatus::NotSupported,
        Err(err) => {
            warn!("support check for {} failed: {err}", case.full_name());
            return TestStatus::Fail;
        }
    }

    if case.rule.evaluate(oracle, case_def) {
        TestStatus::Pass
    } else {
        TestStatus::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::{run, run_case, RunnerCreateInfo, TestStatus};
    use crate::{
        format::{Format, FormatFeatures, FormatProperties},
        image::{ImageFormatInfo, ImageFormatProperties, ImageTiling, ImageType, SampleCounts},
        tree::sample_count_cases,
        VulkanError,
    };

    fn properties(sample_counts: SampleCounts) -> Option<ImageFormatProperties> {
        Some(ImageFormatProperties {
            sample_counts,
            ..Default::default()
        })
    }

    #[test]
    fn unsupported_formats_are_skipped() {
        let oracle = table_oracle!();
        let cases = sample_count_cases();

        let report = run(&oracle, &cases[..40], RunnerCreateInfo::default()).unwrap();
        assert_eq!(report.results.len(), 40);
        assert_eq!(report.not_supported(), 40);
        assert!(report.is_success());
    }

    #[test]
    fn failed_support_check_fails() {
        let mut oracle = table_oracle!();
        let cases = sample_count_cases();
        let case = &cases[0];
        oracle.insert_image_format_properties_error(
            ImageFormatInfo {
                image_type: case.case_def.image_type,
                tiling: case.case_def.tiling,
                ..ImageFormatInfo::new(case.case_def.format)
            },
            VulkanError::DeviceLost,
        );

        assert_eq!(run_case(&oracle, case), TestStatus::Fail);
    }

    #[test]
    fn filter_selects_by_name() {
        let mut oracle = table_oracle!();
        oracle.set_default_image_format_properties(properties(SampleCounts::SAMPLE_1));

        let report = run(
            &oracle,
            &sample_count_cases(),
            RunnerCreateInfo {
                filter: Some("2d.optimal.image_format_r8g8b8a8_unorm_".to_owned()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(report.results.len(), 18);
        assert!(report
            .results
            .iter()
            .all(|result| result.name.contains("r8g8b8a8_unorm")));

        // Color attachment expects 1 and 4 samples, but only 1 is reported.
        let failures: Vec<_> = report.failures().map(|r| r.name.as_str()).collect();
        assert!(failures.contains(
            &"sample_counts.2d.optimal.image_format_r8g8b8a8_unorm_usage_flags_color"
        ));
        assert!(!failures.contains(
            &"sample_counts.2d.optimal.image_format_r8g8b8a8_unorm_cube_compatible"
        ));
    }

    #[test]
    fn conforming_device_passes() {
        let mut oracle = table_oracle!();
        let format = Format::R8G8B8A8_UNORM;
        let all = SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_4;

        oracle.insert_format_properties(
            format,
            FormatProperties {
                optimal_tiling_features: FormatFeatures::COLOR_ATTACHMENT
                    | FormatFeatures::SAMPLED_IMAGE,
                ..Default::default()
            },
        );
        oracle.set_default_image_format_properties(properties(SampleCounts::SAMPLE_1));
        oracle.insert_image_format_default(
            format,
            ImageType::Dim2d,
            ImageTiling::Optimal,
            properties(all),
        );
        oracle.insert_image_format_properties(
            ImageFormatInfo {
                flags: crate::image::ImageCreateFlags::CUBE_COMPATIBLE,
                ..ImageFormatInfo::new(format)
            },
            properties(SampleCounts::SAMPLE_1),
        );

        let report = run(
            &oracle,
            &sample_count_cases(),
            RunnerCreateInfo {
                filter: Some("image_format_r8g8b8a8_unorm_".to_owned()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(report.results.len(), 18 + 5);
        assert!(report.is_success(), "{:?}", report.failures().collect::<Vec<_>>());
    }

    #[test]
    fn threads_preserve_order() {
        let mut oracle = table_oracle!();
        oracle.set_default_image_format_properties(properties(
            SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_4,
        ));
        let cases = sample_count_cases();

        let single = run(&oracle, &cases, RunnerCreateInfo::default()).unwrap();
        let threaded = run(
            &oracle,
            &cases,
            RunnerCreateInfo {
                thread_count: 4,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(single.results, threaded.results);
        assert_eq!(single.results.len(), cases.len());
    }

    #[test]
    fn more_threads_than_cases() {
        let oracle = table_oracle!();
        let cases = sample_count_cases();
        let filter = "2d.optimal.image_format_r8g8b8a8_unorm_usage_flags_color_";

        let report = run(
            &oracle,
            &cases,
            RunnerCreateInfo {
                filter: Some(filter.to_owned()),
                thread_count: 64,
                ..Default::default()
            },
        )
        .unwrap();

        let expected: Vec<String> = cases
            .iter()
            .map(|case| case.full_name())
            .filter(|name| name.contains(filter))
            .collect();
        let names: Vec<String> = report.results.into_iter().map(|r| r.name).collect();

        assert_eq!(names.len(), 7);
        assert_eq!(names, expected);
    }

    #[test]
    fn status_messages() {
        assert_eq!(TestStatus::Pass.to_string(), "OK");
        assert_eq!(TestStatus::Fail.to_string(), "FAILED");
    }
}
