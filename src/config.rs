//! Tunables of a particle field.

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest accepted `density_divisor`: at most one node per pixel.
pub const MIN_DENSITY_DIVISOR: f32 = 1.0;

/// Largest accepted `radius_max`.
pub const MAX_RADIUS: f32 = 10_000.0;

/// Largest accepted `max_speed`.
pub const MAX_SPEED: f32 = 10_000.0;

/// Errors raised while loading or validating a [`FieldConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("proximity threshold must be positive and finite, got {0}")]
    Threshold(f32),

    #[error("density divisor must be at least 1 and finite, got {0}")]
    DensityDivisor(f32),

    #[error("invalid radius range [{min}, {max}], must lie within [0, 10000]")]
    RadiusRange { min: f32, max: f32 },

    #[error("max speed must lie within [0, 10000], got {0}")]
    MaxSpeed(f32),

    #[error("edge width must be finite and not negative, got {0}")]
    EdgeWidth(f32),

    #[error("{name} must lie within [0, 1], got {value}")]
    Alpha { name: &'static str, value: f32 },

    #[error("malformed field config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything that shapes how a field is seeded and drawn.
///
/// Missing keys fall back to their defaults when deserializing, so hosts
/// may only pass the values they want to change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Two nodes closer than this at startup get an edge.
    ///
    /// Default: `150.0`
    pub proximity_threshold: f32,

    /// Surface area (in device pixels) per node.
    ///
    /// Default: `20000.0`
    pub density_divisor: f32,

    /// Default: `1.0`
    pub radius_min: f32,

    /// Default: `3.0`
    pub radius_max: f32,

    /// Upper bound of a velocity component, in surface units per frame.
    /// Components are drawn from `[-max_speed, max_speed]`.
    ///
    /// Default: `0.25`
    pub max_speed: f32,

    /// RGB color shared by nodes and edges.
    ///
    /// Default: `[0, 255, 204]`
    pub color: [u8; 3],

    /// Default: `0.7`
    pub node_alpha: f32,

    /// Edge stroke alpha is the edge opacity multiplied by this.
    ///
    /// Default: `0.2`
    pub edge_alpha_scale: f32,

    /// Default: `0.5`
    pub edge_width: f32,

    /// Fixed seed for reproducible fields. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl FieldConfig {
    /// Parses a (possibly partial) JSON object and validates the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every value a field is seeded from or drawn with.
    ///
    /// A config that passes can be handed to [`InitField::random`](crate::init_field::InitField::random)
    /// for any surface size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.proximity_threshold.is_finite() || self.proximity_threshold <= 0.0 {
            return Err(ConfigError::Threshold(self.proximity_threshold));
        }
        if !self.density_divisor.is_finite() || self.density_divisor < MIN_DENSITY_DIVISOR {
            return Err(ConfigError::DensityDivisor(self.density_divisor));
        }
        let radius_ok = self.radius_min >= 0.0
            && self.radius_min <= self.radius_max
            && self.radius_max <= MAX_RADIUS;
        if !radius_ok {
            return Err(ConfigError::RadiusRange {
                min: self.radius_min,
                max: self.radius_max,
            });
        }
        if !(0.0..=MAX_SPEED).contains(&self.max_speed) {
            return Err(ConfigError::MaxSpeed(self.max_speed));
        }
        if !self.edge_width.is_finite() || self.edge_width < 0.0 {
            return Err(ConfigError::EdgeWidth(self.edge_width));
        }
        for (name, value) in [
            ("node_alpha", self.node_alpha),
            ("edge_alpha_scale", self.edge_alpha_scale),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Alpha { name, value });
            }
        }
        Ok(())
    }

    /// Random source for seeding a field.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: 150.0,
            density_divisor: 20000.0,
            radius_min: 1.0,
            radius_max: 3.0,
            max_speed: 0.25,
            color: [0, 255, 204],
            node_alpha: 0.7,
            edge_alpha_scale: 0.2,
            edge_width: 0.5,
            seed: None,
        }
    }
}
