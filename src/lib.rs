//! Air-quality period comparison
//!
//! Loads two periods of pollutant measurements, runs a Welch t-test on the daily
//! medians of each pollutant and reports which changes are significant.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod pollutant;
pub mod report;
pub mod stats;

use anyhow::Context;
use config::StudyConfig;
use data::DataLoader;
use stats::{ComparisonResult, StatsCalculator};

/// Load both periods and compare every configured pollutant.
pub fn analyze(config: &StudyConfig) -> anyhow::Result<Vec<ComparisonResult>> {
    config.validate()?;

    let loader = DataLoader::new(config);
    let pre = loader
        .load_period(&config.labels.pre_period, &config.pre_paths)
        .context("Failed to load pre-period data")?;
    let post = loader
        .load_period(&config.labels.post_period, &config.post_paths)
        .context("Failed to load post-period data")?;

    let results =
        StatsCalculator::compare_all(&pre, &post, &config.pollutants, config.significance_level)?;
    Ok(results)
}
