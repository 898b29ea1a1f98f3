//! One observation period of cleaned measurements.

use super::{MEDIAN_COL, SPECIE_COL};
use crate::pollutant::Pollutant;
use polars::prelude::*;

/// Cleaned measurement rows for a single period.
#[derive(Debug, Clone)]
pub struct Dataset {
    label: String,
    df: DataFrame,
}

impl Dataset {
    pub fn new(label: impl Into<String>, df: DataFrame) -> Self {
        Self {
            label: label.into(),
            df,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the number of rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Median measurements for one pollutant, with missing values dropped.
    pub fn median_values(&self, pollutant: Pollutant) -> PolarsResult<Vec<f64>> {
        let subset = self
            .df
            .clone()
            .lazy()
            .filter(col(SPECIE_COL).eq(lit(pollutant.code())))
            .select([col(MEDIAN_COL).cast(DataType::Float64)])
            .collect()?;

        let values = subset
            .column(MEDIAN_COL)?
            .f64()?
            .into_iter()
            .flatten()
            .filter(|v| !v.is_nan())
            .collect();

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_values_filters_species_and_nulls() {
        let df = df!(
            "Specie" => ["pm25", "o3", "pm25", "pm25", "pm10"],
            "median" => [Some(10.0), Some(1.0), None, Some(f64::NAN), Some(12.0)]
        )
        .unwrap();
        let dataset = Dataset::new("pre", df);

        assert_eq!(dataset.median_values(Pollutant::Pm25).unwrap(), vec![10.0]);
        assert_eq!(dataset.median_values(Pollutant::Pm10).unwrap(), vec![12.0]);
        assert!(dataset.median_values(Pollutant::Co).unwrap().is_empty());
    }
}
