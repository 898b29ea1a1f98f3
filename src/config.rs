//! Study Configuration
//! Input locations, cleaning parameters and chart labels for one comparison run.

use crate::pollutant::Pollutant;
use std::path::PathBuf;
use thiserror::Error;

/// Significance threshold for the Welch t-test
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

/// Metadata lines preceding the header row in the source exports.
pub const DEFAULT_SKIP_ROWS: usize = 4;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("No input files configured for the {0} period")]
    NoInputFiles(&'static str),
    #[error("No date formats configured")]
    NoDateFormats,
    #[error("No pollutants selected for comparison")]
    NoPollutants,
    #[error("Significance level must lie in (0, 1), got {0}")]
    InvalidSignificance(f64),
}

/// Text shown on the comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub pre_period: String,
    pub post_period: String,
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            pre_period: "Pre-COVID (2019 Q4)".to_string(),
            post_period: "After COVID (2020 Q3)".to_string(),
            title: "Significant Changes in Air Quality Due to COVID-19".to_string(),
            x_axis: "Pollutants".to_string(),
            y_axis: "Median Concentration".to_string(),
        }
    }
}

/// Everything one run needs, passed explicitly through the pipeline.
#[derive(Debug, Clone)]
pub struct StudyConfig {
    /// Files making up the earlier period, stacked in order
    pub pre_paths: Vec<PathBuf>,
    /// Files making up the later period, stacked in order
    pub post_paths: Vec<PathBuf>,
    pub skip_rows: usize,
    /// Rows whose Date text contains this character are discarded
    pub comment_marker: char,
    /// strftime patterns tried in order on the Date column
    pub date_formats: Vec<String>,
    pub pollutants: Vec<Pollutant>,
    pub significance_level: f64,
    pub labels: ChartLabels,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            pre_paths: vec![PathBuf::from("data2019_Q4.csv")],
            post_paths: vec![PathBuf::from("data2020_Q3.csv")],
            skip_rows: DEFAULT_SKIP_ROWS,
            comment_marker: '#',
            date_formats: vec!["%Y-%m-%d".to_string(), "%Y/%m/%d".to_string()],
            pollutants: Pollutant::ALL.to_vec(),
            significance_level: SIGNIFICANCE_THRESHOLD,
            labels: ChartLabels::default(),
        }
    }
}

impl StudyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pre_paths.is_empty() {
            return Err(ConfigError::NoInputFiles("pre"));
        }
        if self.post_paths.is_empty() {
            return Err(ConfigError::NoInputFiles("post"));
        }
        if self.pollutants.is_empty() {
            return Err(ConfigError::NoPollutants);
        }
        if self.date_formats.is_empty() {
            return Err(ConfigError::NoDateFormats);
        }
        let alpha = self.significance_level;
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfigError::InvalidSignificance(alpha));
        }
        Ok(())
    }
}
