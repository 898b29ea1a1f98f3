//! Chart Plotter Module
//! Builds the significant-change bar chart and draws it with egui_plot.

use crate::config::ChartLabels;
use crate::pollutant::Pollutant;
use crate::stats::ComparisonResult;
use egui::{Align2, Color32, RichText};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Text};

/// Bar colors for the two periods
pub const PRE_COLOR: Color32 = Color32::from_rgb(31, 119, 180); // Blue
pub const POST_COLOR: Color32 = Color32::from_rgb(255, 127, 14); // Orange

/// Width of a single bar; a pollutant's pair spans twice this.
pub const BAR_WIDTH: f64 = 0.35;

/// Vertical gap between the taller bar and its annotation.
const ANNOTATION_OFFSET: f64 = 1.0;

/// Both period means for one significant pollutant.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPair {
    pub pollutant: Pollutant,
    pub pre_mean: f64,
    pub post_mean: f64,
    pub annotation: String,
    pub annotation_height: f64,
}

/// Chart data for the significant results
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: ChartLabels,
    pub pairs: Vec<BarPair>,
}

impl ChartData {
    /// One bar pair per significant result, in result order. None if nothing is significant.
    pub fn from_results(results: &[ComparisonResult], labels: &ChartLabels) -> Option<Self> {
        let pairs: Vec<BarPair> = results
            .iter()
            .filter(|r| r.is_significant)
            .map(|r| BarPair {
                pollutant: r.pollutant,
                pre_mean: r.pre_mean,
                post_mean: r.post_mean,
                annotation: annotation_text(r.percent_change),
                annotation_height: r.pre_mean.max(r.post_mean) + ANNOTATION_OFFSET,
            })
            .collect();

        if pairs.is_empty() {
            return None;
        }

        Some(Self {
            labels: labels.clone(),
            pairs,
        })
    }
}

/// Absolute percent change with a direction arrow, e.g. "54.5% ↓".
pub fn annotation_text(percent_change: Option<f64>) -> String {
    match percent_change {
        Some(pct) => {
            let direction = if pct < 0.0 { "↓" } else { "↑" };
            format!("{:.1}% {}", pct.abs(), direction)
        }
        None => "N/A".to_string(),
    }
}

/// Creates the comparison chart using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw grouped bars (pre left, post right) with change annotations.
    /// X-axis: pollutants, Y-axis: mean of medians
    pub fn draw_bar_chart(ui: &mut egui::Ui, chart_data: &ChartData) {
        let labels = &chart_data.labels;
        let x_labels: Vec<String> = chart_data
            .pairs
            .iter()
            .map(|p| p.pollutant.code().to_string())
            .collect();

        let pre_bars: Vec<Bar> = chart_data
            .pairs
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Bar::new(i as f64 - BAR_WIDTH / 2.0, p.pre_mean)
                    .width(BAR_WIDTH)
                    .name(p.pollutant.code())
            })
            .collect();
        let post_bars: Vec<Bar> = chart_data
            .pairs
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Bar::new(i as f64 + BAR_WIDTH / 2.0, p.post_mean)
                    .width(BAR_WIDTH)
                    .name(p.pollutant.code())
            })
            .collect();

        Plot::new("significant_changes")
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label(labels.x_axis.clone())
            .y_axis_label(labels.y_axis.clone())
            .x_axis_formatter(move |mark, _range| {
                let rounded = mark.value.round();
                if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
                    return String::new();
                }
                x_labels.get(rounded as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(pre_bars)
                        .name(&labels.pre_period)
                        .color(PRE_COLOR),
                );
                plot_ui.bar_chart(
                    BarChart::new(post_bars)
                        .name(&labels.post_period)
                        .color(POST_COLOR),
                );

                for (i, pair) in chart_data.pairs.iter().enumerate() {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(i as f64, pair.annotation_height),
                            RichText::new(&pair.annotation).size(14.0).strong(),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(pollutant: Pollutant, pre: f64, post: f64, pct: Option<f64>, sig: bool) -> ComparisonResult {
        ComparisonResult {
            pollutant,
            pre_mean: pre,
            post_mean: post,
            percent_change: pct,
            p_value: if sig { 0.001 } else { 0.5 },
            is_significant: sig,
            pre_count: 3,
            post_count: 3,
        }
    }

    #[test]
    fn test_annotation_text() {
        assert_eq!(annotation_text(Some(-54.55)), "54.5% ↓");
        assert_eq!(annotation_text(Some(12.34)), "12.3% ↑");
        assert_eq!(annotation_text(Some(0.0)), "0.0% ↑");
        assert_eq!(annotation_text(None), "N/A");
    }

    #[test]
    fn test_chart_has_one_pair_per_significant_result() {
        let results = vec![
            result(Pollutant::Pm25, 11.0, 5.0, Some(-54.55), true),
            result(Pollutant::Pm10, 40.0, 39.0, Some(-2.5), false),
            result(Pollutant::No2, 8.0, 12.0, Some(50.0), true),
        ];
        let chart = ChartData::from_results(&results, &ChartLabels::default()).unwrap();

        let codes: Vec<Pollutant> = chart.pairs.iter().map(|p| p.pollutant).collect();
        assert_eq!(codes, vec![Pollutant::Pm25, Pollutant::No2]);
        assert_eq!(chart.pairs[0].annotation, "54.5% ↓");
        assert_eq!(chart.pairs[0].annotation_height, 12.0);
        assert_eq!(chart.pairs[1].annotation, "50.0% ↑");
        assert_eq!(chart.pairs[1].annotation_height, 13.0);
    }

    #[test]
    fn test_no_chart_without_significant_results() {
        let results = vec![result(Pollutant::O3, 20.0, 21.0, Some(5.0), false)];
        assert!(ChartData::from_results(&results, &ChartLabels::default()).is_none());
        assert!(ChartData::from_results(&[], &ChartLabels::default()).is_none());
    }
}
