//! Compares pollutant medians between a pre-pandemic and a later period.

use aq_compare::config::StudyConfig;
use aq_compare::report::Reporter;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = StudyConfig::default();
    let results = aq_compare::analyze(&config)?;
    Reporter::report(&results, &config.labels)
}
