//! Measured values plotted by the two binaries.

use crate::core::bar_chart::{storage_comparison, DEFAULT_BAR_WIDTH};
use crate::core::line_chart::latency_line;
use crate::domain::model::Chart;
use crate::utils::error::Result;

/// Block storage in KB with provenance disabled, per batch of iPhones.
pub const WITHOUT_PROVENANCE_KB: [f64; 5] = [800.0, 920.0, 1040.0, 1160.0, 1280.0];

/// Block storage in KB with provenance enabled, per batch of iPhones.
pub const WITH_PROVENANCE_KB: [f64; 5] = [4524.0, 6276.0, 8012.0, 9756.0, 11492.0];

pub const IPHONE_BATCH_LABELS: [&str; 5] = ["100", "200", "300", "400", "500"];

pub const QUERY_LATENCIES_MS: [f64; 6] = [286.259, 304.378, 318.036, 338.917, 356.256, 368.425];

pub const QUERY_LABELS: [&str; 6] = ["Q0", "Q1", "Q2", "Q3", "Q4", "Q5"];

/// The label list the latency plot originally shipped with. It has one label
/// more than there are measurements and fails validation.
pub const LEGACY_QUERY_LABELS: [&str; 7] = ["Q0", "Q1", "Q2", "Q3", "Q4", "Q5", "Q6"];

pub fn block_storage_chart() -> Result<Chart> {
    storage_comparison(
        &WITHOUT_PROVENANCE_KB,
        &WITH_PROVENANCE_KB,
        &IPHONE_BATCH_LABELS,
        DEFAULT_BAR_WIDTH,
    )
}

pub fn query_latency_chart() -> Result<Chart> {
    latency_line(&QUERY_LATENCIES_MS, &QUERY_LABELS)
}
