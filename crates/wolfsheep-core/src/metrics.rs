//! Per-tick population statistics.

use serde::{Deserialize, Serialize};

/// Life events counted during a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvents {
    /// Animals culled for running out of energy
    pub starved: u32,
    /// Sheep eaten by wolves
    pub sheep_eaten: u32,
    /// Grass patches eaten by sheep
    pub grass_eaten: u32,
    /// Offspring created
    pub births: u32,
}

/// One row of the data collector, captured after a completed tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickMetrics {
    pub tick: u64,
    pub average_grass_growth: f64,
    pub average_sheep_energy: f64,
    pub max_sheep_energy: i32,
    pub average_wolf_energy: f64,
    pub max_wolf_energy: i32,
    pub sheep_count: usize,
    pub wolf_count: usize,
    pub events: TickEvents,
}

/// Mean of the values, or 0 for an empty population.
pub fn mean_or_zero<I>(values: I) -> f64
where
    I: IntoIterator<Item = i32>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0i64, 0u64), |(sum, count), v| (sum + v as i64, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Maximum of the values, or 0 for an empty population.
pub fn max_or_zero<I>(values: I) -> i32
where
    I: IntoIterator<Item = i32>,
{
    values.into_iter().max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_population_reports_zero() {
        assert_eq!(mean_or_zero(std::iter::empty()), 0.0);
        assert_eq!(max_or_zero(std::iter::empty()), 0);
    }

    #[test]
    fn test_mean_and_max() {
        assert_eq!(mean_or_zero([10, 20, 30]), 20.0);
        assert_eq!(mean_or_zero([1, 2]), 1.5);
        assert_eq!(max_or_zero([3, 99, 42]), 99);
    }

    #[test]
    fn test_metrics_serialization() {
        let metrics = TickMetrics {
            tick: 3,
            sheep_count: 12,
            events: TickEvents {
                births: 2,
                ..Default::default()
            },
            ..Default::default()
        };
        let json = serde_json::to_string(&metrics).unwrap();
        let back: TickMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metrics);
    }
}
