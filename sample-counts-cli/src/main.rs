// Copyright (c) 2024 The sample-counts developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

use clap::Parser;
use sample_counts::{
    run, sample_count_cases, CapabilityTable, Instance, InstanceCreateInfo, RunReport,
    RunnerCreateInfo, TableOracle, TestStatus, Version,
};
use std::{error::Error, fs, path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Index of the physical device to check.
    #[clap(short, long, default_value = "0")]
    device: usize,
    /// Only run cases whose name contains this string.
    #[clap(short, long)]
    filter: Option<String>,
    /// Number of threads evaluating cases.
    #[clap(short = 'j', long, default_value = "1")]
    threads: usize,
    /// Highest Vulkan version to use for the queries, in form "MAJOR.MINOR".
    #[clap(long, value_parser = parse_version)]
    max_api_version: Option<Version>,
    /// Also enumerate portability subset devices.
    #[clap(long)]
    portability: bool,
    /// Answer the queries from a capability table (JSON) instead of a device.
    #[clap(long)]
    replay: Option<PathBuf>,
    /// Write the report as JSON to this file.
    #[clap(short, long)]
    report: Option<PathBuf>,
    /// Print every result instead of only the failures.
    #[clap(short, long)]
    verbose: bool,
    /// Print the case names and exit.
    #[clap(long)]
    list: bool,
    /// Print the available physical devices and exit.
    #[clap(long, conflicts_with = "replay")]
    list_devices: bool,
}

fn parse_version(value: &str) -> Result<Version, String> {
    let (major, minor) = value
        .split_once('.')
        .ok_or_else(|| format!("expected MAJOR.MINOR, got `{value}`"))?;
    let major = major.parse().map_err(|err| format!("invalid major version: {err}"))?;
    let minor = minor.parse().map_err(|err| format!("invalid minor version: {err}"))?;

    Ok(Version::major_minor(major, minor))
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::init();

    match try_main(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            let mut messages = error_chain(&*err).into_iter();

            if let Some(message) = messages.next() {
                log::error!("{message}");
            }

            for message in messages {
                log::error!("caused by: {message}");
            }

            ExitCode::from(2)
        }
    }
}

/// Returns the messages of `err` and its sources, outermost first.
///
/// Some errors display their source as their own message, so a message equal to the previous
/// one is skipped.
fn error_chain(err: &dyn Error) -> Vec<String> {
    let mut messages: Vec<String> = vec![err.to_string()];
    let mut source = err.source();

    while let Some(err) = source {
        let message = err.to_string();

        if messages.last() != Some(&message) {
            messages.push(message);
        }

        source = err.source();
    }

    messages
}

fn try_main(args: Args) -> Result<bool, Box<dyn Error>> {
    let cases = sample_count_cases();

    if args.list {
        for case in &cases {
            println!("{}", case.full_name());
        }

        return Ok(true);
    }

    let runner_info = RunnerCreateInfo {
        filter: args.filter.clone(),
        thread_count: args.threads,
        ..Default::default()
    };

    let report = if let Some(path) = &args.replay {
        let table: CapabilityTable = serde_json::from_str(&fs::read_to_string(path)?)?;
        log::info!("replaying capability table {}", path.display());

        run(&TableOracle::from(table), &cases, runner_info)?
    } else {
        let instance = Instance::new(InstanceCreateInfo {
            application_name: Some("sample-counts".to_owned()),
            max_api_version: args.max_api_version,
            enumerate_portability: args.portability,
            ..Default::default()
        })?;

        if args.list_devices {
            for physical_device in instance.enumerate_physical_devices()? {
                println!(
                    "{}: {} ({:?}, Vulkan {})",
                    physical_device.index(),
                    physical_device.device_name(),
                    physical_device.device_type(),
                    physical_device.api_version(),
                );
            }

            return Ok(true);
        }

        let physical_device = instance.physical_device(args.device)?;
        log::info!(
            "checking {} (Vulkan {})",
            physical_device.device_name(),
            physical_device.api_version(),
        );

        run(&physical_device, &cases, runner_info)?
    };

    print_report(&report, args.verbose);

    if let Some(path) = &args.report {
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        log::info!("report written to {}", path.display());
    }

    Ok(report.is_success())
}

fn print_report(report: &RunReport, verbose: bool) {
    for result in &report.results {
        if verbose || result.status == TestStatus::Fail {
            println!("{}: {}", result.name, result.status);
        }
    }

    println!(
        "{} cases: {} passed, {} failed, {} not supported ({:.2?})",
        report.results.len(),
        report.passed(),
        report.failed(),
        report.not_supported(),
        report.elapsed,
    );
}
