use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_ATTRACTOR_MASS, DEFAULT_ATTRACTOR_RADIUS, DEFAULT_COUPLING, DEFAULT_DISK_INNER_MARGIN,
    DEFAULT_INITIAL_DISK_PARTICLES, DEFAULT_LENSING_STRENGTH, DEFAULT_LENSING_STRIDE,
    DEFAULT_MASS_INCREMENT, DEFAULT_MIN_DISTANCE, DEFAULT_SPAWN_INTERVAL, MAX_ATTRACTOR_MASS,
    MIN_ATTRACTOR_MASS,
};
use crate::core::utils::random::DEFAULT_SEED;

/// Simulation settings.
///
/// Every field is optional in JSON; missing fields keep their defaults:
/// `{"seed": 7, "max_disk_particles": 2000}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Seed for the xorshift stream (must be non-zero)
    pub seed: u32,
    pub attractor_mass: f32,
    pub attractor_radius: f32,
    /// Mass added by `press()`
    pub mass_increment: f32,
    /// Velocity coupling applied to the raw force each frame
    pub coupling: f32,
    /// Floor for the distance in the force denominator
    pub min_distance: f32,
    pub initial_disk_particles: u32,
    /// One disk particle is injected every `spawn_interval` steps
    pub spawn_interval: u32,
    /// Gap between the event horizon and the inner edge of the spawn ring
    pub disk_inner_margin: f32,
    /// Optional hard cap on the disk population (None = unbounded)
    pub max_disk_particles: Option<u32>,
    pub lensing_stride: f32,
    pub lensing_strength: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            attractor_mass: DEFAULT_ATTRACTOR_MASS,
            attractor_radius: DEFAULT_ATTRACTOR_RADIUS,
            mass_increment: DEFAULT_MASS_INCREMENT,
            coupling: DEFAULT_COUPLING,
            min_distance: DEFAULT_MIN_DISTANCE,
            initial_disk_particles: DEFAULT_INITIAL_DISK_PARTICLES,
            spawn_interval: DEFAULT_SPAWN_INTERVAL,
            disk_inner_margin: DEFAULT_DISK_INNER_MARGIN,
            max_disk_particles: None,
            lensing_stride: DEFAULT_LENSING_STRIDE,
            lensing_strength: DEFAULT_LENSING_STRENGTH,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.seed == 0 {
            return Err("seed must be non-zero".to_string());
        }
        finite("attractor_mass", self.attractor_mass)?;
        if !(MIN_ATTRACTOR_MASS..=MAX_ATTRACTOR_MASS).contains(&self.attractor_mass) {
            return Err(format!(
                "attractor_mass must be within [{}, {}], got {}",
                MIN_ATTRACTOR_MASS, MAX_ATTRACTOR_MASS, self.attractor_mass
            ));
        }
        positive("attractor_radius", self.attractor_radius)?;
        finite("mass_increment", self.mass_increment)?;
        finite("coupling", self.coupling)?;
        positive("min_distance", self.min_distance)?;
        if self.spawn_interval == 0 {
            return Err("spawn_interval must be at least 1".to_string());
        }
        finite("disk_inner_margin", self.disk_inner_margin)?;
        if self.disk_inner_margin < 0.0 {
            return Err(format!(
                "disk_inner_margin must not be negative, got {}",
                self.disk_inner_margin
            ));
        }
        positive("lensing_stride", self.lensing_stride)?;
        finite("lensing_strength", self.lensing_strength)?;
        Ok(())
    }
}

fn finite(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("{} must be finite, got {}", name, value))
    }
}

fn positive(name: &str, value: f32) -> Result<(), String> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be positive, got {}", name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SimConfig::from_json(r#"{"seed": 7, "max_disk_particles": 300}"#)
            .expect("partial config should parse");
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_disk_particles, Some(300));
        assert_eq!(config.attractor_mass, DEFAULT_ATTRACTOR_MASS);
        assert_eq!(config.spawn_interval, DEFAULT_SPAWN_INTERVAL);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SimConfig::from_json("{}"), Ok(SimConfig::default()));
    }

    #[test]
    fn json_roundtrip() {
        let mut config = SimConfig::default();
        config.lensing_stride = 40.0;
        assert_eq!(SimConfig::from_json(&config.to_json()), Ok(config));
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(SimConfig::from_json(r#"{"attractor_mass": 0}"#).is_err());
        assert!(SimConfig::from_json(r#"{"attractor_radius": -5}"#).is_err());
        assert!(SimConfig::from_json(r#"{"spawn_interval": 0}"#).is_err());
        assert!(SimConfig::from_json(r#"{"lensing_stride": 0}"#).is_err());
        assert!(SimConfig::from_json(r#"{"min_distance": 0}"#).is_err());
        assert!(SimConfig::from_json(r#"{"seed": 0}"#).is_err());
        assert!(SimConfig::from_json(r#"{"attractor_mass": 1e13}"#).is_err());
    }

    #[test]
    fn mass_below_the_floor_is_rejected_by_name() {
        let err = SimConfig::from_json(r#"{"attractor_mass": 0.5}"#).unwrap_err();
        assert!(err.contains("attractor_mass"), "{}", err);
        assert!(SimConfig::from_json(r#"{"attractor_mass": 1.0}"#).is_ok());
    }

    #[test]
    fn negative_inner_margin_is_rejected() {
        let err = SimConfig::from_json(r#"{"disk_inner_margin": -40}"#).unwrap_err();
        assert!(err.contains("disk_inner_margin"), "{}", err);
        assert!(SimConfig::from_json(r#"{"disk_inner_margin": 0}"#).is_ok());
    }

    #[test]
    fn rejects_unknown_fields_and_bad_json() {
        let err = SimConfig::from_json(r#"{"gravity": 9.8}"#).unwrap_err();
        assert!(err.contains("gravity"));
        assert!(SimConfig::from_json("not json").is_err());
    }
}
