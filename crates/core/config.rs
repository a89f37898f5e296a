//! Query configuration.
//!
//! Serializable settings for the region query planner, loadable from JSON
//! or built up with the `with_*` methods.

use crate::geometry::DistanceMetric;
use serde::{Deserialize, Serialize};

/// Settings for a nearby-POI query.
///
/// # Example
///
/// ```rust
/// use pubgrid::Config;
///
/// // Defaults: 1000 m radius, haversine distances.
/// let config = Config::default();
/// assert_eq!(config.radius_m, 1000.0);
///
/// // Load from JSON
/// let config: Config = serde_json::from_str(r#"{"radius_m": 250.0}"#).unwrap();
/// assert_eq!(config.radius_m, 250.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Search radius in meters. Results beyond it are dropped, and the
    /// fetch fan-out covers exactly the cells within it.
    #[serde(default = "Config::default_radius_m")]
    pub radius_m: f64,

    /// Metric used for the per-POI distance annotation.
    #[serde(default)]
    pub metric: DistanceMetric,
}

impl Config {
    const fn default_radius_m() -> f64 {
        1000.0
    }

    /// Set the search radius in meters.
    pub fn with_radius_m(mut self, radius_m: f64) -> Self {
        self.radius_m = radius_m;
        self
    }

    /// Set the distance metric.
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            radius_m: Self::default_radius_m(),
            metric: DistanceMetric::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.radius_m, 1000.0);
        assert_eq!(config.metric, DistanceMetric::Haversine);
    }

    #[test]
    fn test_json_defaults_fill_missing_fields() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.radius_m, 1000.0);

        let config: Config =
            serde_json::from_str(r#"{"radius_m": 500.0, "metric": "geodesic"}"#).unwrap();
        assert_eq!(config.radius_m, 500.0);
        assert_eq!(config.metric, DistanceMetric::Geodesic);
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::default()
            .with_radius_m(2000.0)
            .with_metric(DistanceMetric::Geodesic);
        assert_eq!(config.radius_m, 2000.0);
        assert_eq!(config.metric, DistanceMetric::Geodesic);
    }
}
