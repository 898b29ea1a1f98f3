//! Charts module - Chart rendering

mod plotter;

pub use plotter::{annotation_text, BarPair, ChartData, ChartPlotter};
