//! CSV Data Loader Module
//! Handles CSV file loading, schema checks and period assembly using Polars.

use super::{DataProcessor, Dataset, REQUIRED_COLUMNS};
use crate::config::StudyConfig;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to load CSV {}: {source}", .path.display())]
    CsvError {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("Missing required column '{column}' in {}", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("No input files for period '{0}'")]
    NoData(String),
}

/// Loads source exports into cleaned, per-period datasets.
pub struct DataLoader<'a> {
    config: &'a StudyConfig,
}

impl<'a> DataLoader<'a> {
    pub fn new(config: &'a StudyConfig) -> Self {
        Self { config }
    }

    /// Load one raw CSV file, skipping the metadata lines above the header.
    ///
    /// Column types are inferred from the whole file so a late decimal median
    /// does not fall outside an integer column.
    pub fn load_csv(&self, file_path: &Path) -> Result<DataFrame, LoaderError> {
        if !file_path.exists() {
            return Err(LoaderError::FileNotFound(file_path.to_path_buf()));
        }

        let df = LazyCsvReader::new(file_path)
            .with_skip_rows(self.config.skip_rows)
            .with_has_header(true)
            .with_infer_schema_length(None)
            .with_ignore_errors(true)
            .finish()
            .and_then(|lf| lf.collect())
            .map_err(|source| LoaderError::CsvError {
                path: file_path.to_path_buf(),
                source,
            })?;

        for column in REQUIRED_COLUMNS {
            if df.column(column).is_err() {
                return Err(LoaderError::MissingColumn {
                    path: file_path.to_path_buf(),
                    column,
                });
            }
        }

        Ok(df)
    }

    /// Load and clean every file of one observation period, stacked in path order.
    pub fn load_period(&self, label: &str, paths: &[PathBuf]) -> Result<Dataset, LoaderError> {
        let mut merged: Option<DataFrame> = None;

        for path in paths {
            let raw = self.load_csv(path)?;
            let raw_rows = raw.height();
            let cleaned = DataProcessor::clean_air_data(raw, self.config)?;
            log::debug!(
                "{}: kept {} of {} rows after cleaning",
                path.display(),
                cleaned.height(),
                raw_rows
            );

            merged = Some(match merged {
                None => cleaned,
                Some(acc) => DataProcessor::stack(acc, &cleaned)?,
            });
        }

        let df = merged.ok_or_else(|| LoaderError::NoData(label.to_string()))?;
        log::info!(
            "Loaded {} rows for '{}' from {} file(s)",
            df.height(),
            label,
            paths.len()
        );

        Ok(Dataset::new(label, df))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "# meta 1\n# meta 2\n# meta 3\n# meta 4").expect("write header");
        write!(file, "{body}").expect("write body");
        file.flush().expect("flush");
        file
    }

    #[test]
    fn test_load_csv_skips_metadata_lines() {
        let file = write_csv(
            "Date,Country,City,Specie,count,min,max,median,variance\n\
             2019-10-01,IN,Delhi,pm25,10,50,200,120,30\n\
             2019-10-02,IN,Delhi,pm25,10,40,180,110,25\n",
        );
        let config = StudyConfig::default();
        let df = DataLoader::new(&config).load_csv(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert!(df.column("Specie").is_ok());
    }

    #[test]
    fn test_load_csv_missing_file() {
        let config = StudyConfig::default();
        let err = DataLoader::new(&config)
            .load_csv(Path::new("/nonexistent/data2019_Q4.csv"))
            .unwrap_err();
        assert!(matches!(err, LoaderError::FileNotFound(_)));
    }

    #[test]
    fn test_load_csv_missing_median_column() {
        let file = write_csv("Date,Specie,mean\n2019-10-01,pm25,12\n2019-10-02,pm25,13\n");
        let config = StudyConfig::default();
        let err = DataLoader::new(&config).load_csv(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::MissingColumn {
                column: "median",
                ..
            }
        ));
    }

    #[test]
    fn test_load_period_stacks_files_in_order() {
        let first = write_csv("Date,Specie,median\n2020-07-01,pm25,40\n");
        let second = write_csv("Date,Specie,median\n2020-08-01,pm25,35\n2020-08-02,o3,12\n");
        let config = StudyConfig::default();
        let dataset = DataLoader::new(&config)
            .load_period(
                "post",
                &[first.path().to_path_buf(), second.path().to_path_buf()],
            )
            .unwrap();

        assert_eq!(dataset.height(), 3);
        assert_eq!(dataset.label(), "post");
        let pm25 = dataset.median_values(crate::pollutant::Pollutant::Pm25).unwrap();
        assert_eq!(pm25, vec![40.0, 35.0]);
    }

    #[test]
    fn test_late_decimal_medians_survive_integer_prefix() {
        let mut body = String::from("Date,Specie,median\n");
        for _ in 0..10_050 {
            body.push_str("2019-10-01,so2,4\n");
        }
        body.push_str("2019-10-02,pm25,12.5\n2019-10-03,pm25,13.5\n");
        let file = write_csv(&body);

        let config = StudyConfig::default();
        let dataset = DataLoader::new(&config)
            .load_period("pre", &[file.path().to_path_buf()])
            .unwrap();

        let pm25 = dataset.median_values(crate::pollutant::Pollutant::Pm25).unwrap();
        assert_eq!(pm25, vec![12.5, 13.5]);
        assert_eq!(
            dataset.median_values(crate::pollutant::Pollutant::So2).unwrap().len(),
            10_050
        );
    }

    #[test]
    fn test_load_period_without_files() {
        let config = StudyConfig::default();
        let err = DataLoader::new(&config).load_period("pre", &[]).unwrap_err();
        assert!(matches!(err, LoaderError::NoData(label) if label == "pre"));
    }
}
