//! Statistics Calculator Module
//! Compares pre/post period medians per pollutant with Welch's t-test.

use crate::data::Dataset;
use crate::pollutant::Pollutant;
use polars::prelude::PolarsResult;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Outcome of a two-sample Welch t-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WelchTest {
    pub t_statistic: f64,
    /// Two-tailed
    pub p_value: f64,
    pub degrees_of_freedom: f64,
}

/// Comparison of one pollutant between the two periods.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub pollutant: Pollutant,
    /// Mean of daily medians, 2 dp
    pub pre_mean: f64,
    /// Mean of daily medians, 2 dp
    pub post_mean: f64,
    /// Change of post relative to pre in percent, 2 dp; None when the pre mean is zero
    pub percent_change: Option<f64>,
    /// 4 dp
    pub p_value: f64,
    /// Decided on the unrounded p-value
    pub is_significant: bool,
    pub pre_count: usize,
    pub post_count: usize,
}

/// Handles statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Arithmetic mean, NaN for an empty sample.
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Unbiased sample variance (n - 1).
    fn sample_variance(values: &[f64], mean: f64) -> f64 {
        values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64
    }

    /// Round half away from zero to `decimals` places.
    pub fn round_to(value: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    }

    /// Relative change of `post` against `pre`, in percent.
    pub fn percent_change(pre_mean: f64, post_mean: f64) -> Option<f64> {
        let change = (post_mean - pre_mean) / pre_mean * 100.0;
        change.is_finite().then_some(change)
    }

    /// Perform Welch's t-test (independent samples, unequal variance).
    ///
    /// Returns None when either sample has fewer than two observations. Two
    /// constant samples give an undefined statistic and a NaN p-value.
    pub fn welch_ttest(sample_a: &[f64], sample_b: &[f64]) -> Option<WelchTest> {
        if sample_a.len() < 2 || sample_b.len() < 2 {
            return None;
        }

        let n1 = sample_a.len() as f64;
        let n2 = sample_b.len() as f64;
        let mean1 = Self::mean(sample_a);
        let mean2 = Self::mean(sample_b);
        let var1 = Self::sample_variance(sample_a, mean1);
        let var2 = Self::sample_variance(sample_b, mean2);

        let se = (var1 / n1 + var2 / n2).sqrt();
        if se == 0.0 {
            return Some(WelchTest {
                t_statistic: f64::NAN,
                p_value: f64::NAN,
                degrees_of_freedom: f64::NAN,
            });
        }

        let t = (mean1 - mean2) / se;

        // Welch-Satterthwaite degrees of freedom
        let df_num = (var1 / n1 + var2 / n2).powi(2);
        let df_denom = (var1 / n1).powi(2) / (n1 - 1.0) + (var2 / n2).powi(2) / (n2 - 1.0);
        let df = df_num / df_denom;

        let p_value = match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => 2.0 * dist.sf(t.abs()),
            Err(_) => f64::NAN,
        };

        Some(WelchTest {
            t_statistic: t,
            p_value,
            degrees_of_freedom: df,
        })
    }

    /// Compare one pollutant's samples. None if either period has < 2 observations.
    pub fn compare(
        pollutant: Pollutant,
        pre: &[f64],
        post: &[f64],
        significance_level: f64,
    ) -> Option<ComparisonResult> {
        let test = Self::welch_ttest(pre, post)?;

        let pre_mean = Self::mean(pre);
        let post_mean = Self::mean(post);
        let percent_change = Self::percent_change(pre_mean, post_mean);
        if percent_change.is_none() {
            log::warn!(
                "{}: pre-period mean is {}, percent change is undefined",
                pollutant,
                pre_mean
            );
        }

        Some(ComparisonResult {
            pollutant,
            pre_mean: Self::round_to(pre_mean, 2),
            post_mean: Self::round_to(post_mean, 2),
            percent_change: percent_change.map(|p| Self::round_to(p, 2)),
            p_value: Self::round_to(test.p_value, 4),
            is_significant: test.p_value < significance_level,
            pre_count: pre.len(),
            post_count: post.len(),
        })
    }

    /// Compare every pollutant in order, skipping those without enough data.
    pub fn compare_all(
        pre: &Dataset,
        post: &Dataset,
        pollutants: &[Pollutant],
        significance_level: f64,
    ) -> PolarsResult<Vec<ComparisonResult>> {
        let mut results = Vec::with_capacity(pollutants.len());

        for &pollutant in pollutants {
            let pre_values = pre.median_values(pollutant)?;
            let post_values = post.median_values(pollutant)?;

            match Self::compare(pollutant, &pre_values, &post_values, significance_level) {
                Some(result) => results.push(result),
                None => log::debug!(
                    "{}: skipped, {} pre and {} post observations",
                    pollutant,
                    pre_values.len(),
                    post_values.len()
                ),
            }
        }

        log::info!(
            "Compared {} of {} pollutants",
            results.len(),
            pollutants.len()
        );
        Ok(results)
    }
}
