//! Stats module - Welch t-tests and period comparison

mod calculator;

pub use calculator::{ComparisonResult, StatsCalculator, WelchTest};
