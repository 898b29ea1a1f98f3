//! Comparison Chart Window
//! Native window displaying the significant-change bar chart.

use crate::charts::{ChartData, ChartPlotter};
use egui::RichText;

/// Main application window.
pub struct ComparisonApp {
    chart_data: ChartData,
}

impl ComparisonApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart_data: ChartData) -> Self {
        Self { chart_data }
    }
}

impl eframe::App for ComparisonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&self.chart_data.labels.title)
                        .size(18.0)
                        .strong(),
                );
            });
            ui.add_space(8.0);
            ChartPlotter::draw_bar_chart(ui, &self.chart_data);
        });
    }
}

/// Open the chart window and block until it is closed.
pub fn show_chart(chart_data: ChartData) -> eframe::Result<()> {
    let title = chart_data.labels.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(ComparisonApp::new(cc, chart_data)))),
    )
}
