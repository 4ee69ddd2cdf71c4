//! Least-squares trends over a series of readings.

use serde::{Deserialize, Serialize};

/// Direction of a [`Trend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// The slope is positive and not negligible.
    Increasing,
    /// The slope is negative and not negligible.
    Decreasing,
    /// The slope is below the stable threshold in absolute value.
    Stable,
}

/// Slope of a fitted line and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Change per reading.
    pub slope: f64,
    /// Classified direction.
    pub direction: TrendDirection,
}

impl Trend {
    /// A flat trend.
    pub const STABLE: Self = Self {
        slope: 0.0,
        direction: TrendDirection::Stable,
    };
}

/// Fits `y = a + slope * x` to the present values, with `x` the position of
/// each value among the present ones (`0, 1, 2, ...`).
///
/// Missing values are dropped before fitting. With fewer than two values the
/// trend is [`Trend::STABLE`].
pub fn linear_trend<I>(values: I, stable_threshold: f64) -> Trend
where
    I: IntoIterator<Item = Option<f64>>,
{
    let clean: Vec<f64> = values.into_iter().flatten().collect();
    if clean.len() < 2 {
        return Trend::STABLE;
    }

    #[allow(clippy::cast_precision_loss)]
    let n = clean.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
    for (i, &y) in clean.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x);
    let direction = if slope.abs() < stable_threshold {
        TrendDirection::Stable
    } else if slope > 0.0 {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    };
    Trend { slope, direction }
}

/// Trends for the vitals tracked over time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalsTrends {
    /// Heart rate trend.
    pub heart_rate: Trend,
    /// Weight trend.
    pub weight: Trend,
    /// BMI trend.
    pub bmi: Trend,
}
