//! Result Reporter
//! Prints the comparison table and shows the chart for significant changes.

use crate::charts::ChartData;
use crate::config::ChartLabels;
use crate::gui;
use crate::stats::ComparisonResult;
use anyhow::anyhow;

pub const NO_SIGNIFICANT_MESSAGE: &str = "No statistically significant changes were found.";

const HEADERS: [&str; 6] = [
    "Pollutant",
    "Pre Mean",
    "Post Mean",
    "% Change",
    "p-value",
    "Significant",
];

/// What the reporter does after printing the table.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    NoSignificantChanges,
    Chart(ChartData),
}

/// Render results as an aligned text table, one row per result.
pub fn format_results_table(results: &[ComparisonResult]) -> String {
    let rows: Vec<[String; 6]> = results
        .iter()
        .map(|r| {
            [
                r.pollutant.code().to_string(),
                format!("{:.2}", r.pre_mean),
                format!("{:.2}", r.post_mean),
                r.percent_change
                    .map(|p| format!("{p:.2}"))
                    .unwrap_or_else(|| "N/A".to_string()),
                format!("{:.4}", r.p_value),
                r.is_significant.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let format_line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == 0 {
                    format!("{cell:<width$}")
                } else {
                    format!("{cell:>width$}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    out.push_str(&format_line(&HEADERS));
    out.push('\n');
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&format_line(&cells));
        out.push('\n');
    }
    out
}

pub struct Reporter;

impl Reporter {
    /// Decide whether a chart is needed for these results.
    pub fn summarize(results: &[ComparisonResult], labels: &ChartLabels) -> ReportOutcome {
        match ChartData::from_results(results, labels) {
            Some(chart) => ReportOutcome::Chart(chart),
            None => ReportOutcome::NoSignificantChanges,
        }
    }

    /// Print the table, then either the fallback message or the chart window.
    pub fn report(results: &[ComparisonResult], labels: &ChartLabels) -> anyhow::Result<()> {
        println!("T-Test Results:");
        print!("{}", format_results_table(results));

        match Self::summarize(results, labels) {
            ReportOutcome::NoSignificantChanges => {
                println!("{NO_SIGNIFICANT_MESSAGE}");
            }
            ReportOutcome::Chart(chart) => {
                log::info!("Showing chart for {} pollutant(s)", chart.pairs.len());
                gui::show_chart(chart).map_err(|e| anyhow!("Chart window failed: {e}"))?;
            }
        }

        Ok(())
    }
}
