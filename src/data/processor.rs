//! Data Processor Module
//! Handles row cleaning and period merging.

use super::{DATE_COL, MEDIAN_COL, SPECIE_COL};
use crate::config::StudyConfig;
use polars::prelude::*;

/// Handles data cleaning and transformation operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Drop comment rows and rows with unparsable dates.
    ///
    /// Output columns: ["Date" (Date), "Specie" (String), "median" (Float64)].
    /// Row order is preserved; non-numeric medians become null.
    pub fn clean_air_data(df: DataFrame, config: &StudyConfig) -> PolarsResult<DataFrame> {
        let marker = config.comment_marker.to_string();
        let parsed_date = Self::parse_date_expr(&config.date_formats)?;

        df.lazy()
            .with_column(col(DATE_COL).cast(DataType::String))
            .filter(col(DATE_COL).str().contains_literal(lit(marker)).not())
            .with_column(parsed_date)
            .filter(col(DATE_COL).is_not_null())
            .select([
                col(DATE_COL),
                col(SPECIE_COL).cast(DataType::String),
                col(MEDIAN_COL).cast(DataType::Float64),
            ])
            .collect()
    }

    /// Date parse trying each format in order, first match wins.
    ///
    /// Matching is non-exact so a trailing time of day is ignored.
    fn parse_date_expr(formats: &[String]) -> PolarsResult<Expr> {
        formats
            .iter()
            .map(|format| {
                col(DATE_COL).str().to_date(StrptimeOptions {
                    format: Some(format.as_str().into()),
                    strict: false,
                    exact: false,
                    ..Default::default()
                })
            })
            .reduce(|parsed, fallback| {
                when(parsed.clone().is_not_null())
                    .then(parsed)
                    .otherwise(fallback)
            })
            .map(|expr| expr.alias(DATE_COL))
            .ok_or_else(|| PolarsError::ComputeError("no date formats configured".into()))
    }

    /// Append a cleaned frame below another one.
    pub fn stack(mut acc: DataFrame, next: &DataFrame) -> PolarsResult<DataFrame> {
        acc.vstack_mut(next)?;
        Ok(acc)
    }
}
