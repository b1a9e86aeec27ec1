// Copyright (c) 2024 The sample-counts developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

#![cfg(test)]

/// Creates an instance or returns if initialization fails.
macro_rules! instance {
    () => {{
        let _ = env_logger::builder().is_test(true).try_init();

        match crate::instance::Instance::new(Default::default()) {
            Ok(instance) => instance,
            Err(_) => return,
        }
    }};
}

/// Returns the first physical device, or returns if there is none.
macro_rules! physical_device {
    () => {{
        let instance = instance!();

        match instance.physical_device(0) {
            Ok(physical_device) => physical_device,
            Err(_) => return,
        }
    }};
}

/// Returns a table oracle whose device limits allow 1 and 4 samples everywhere, except for
/// integer color attachments and storage images, which are single-sampled.
macro_rules! table_oracle {
    () => {{
        use crate::image::SampleCounts;

        let one_four = SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_4;

        crate::oracle::table::TableOracle::new(crate::limits::DeviceLimits {
            framebuffer_color_sample_counts: one_four,
            framebuffer_integer_color_sample_counts: SampleCounts::SAMPLE_1,
            framebuffer_depth_sample_counts: one_four,
            framebuffer_stencil_sample_counts: one_four,
            sampled_image_color_sample_counts: one_four,
            sampled_image_depth_sample_counts: one_four,
            sampled_image_integer_sample_counts: SampleCounts::SAMPLE_1,
            storage_image_sample_counts: SampleCounts::SAMPLE_1,
        })
    }};
}
