// Game configuration and environment overrides

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::core::math::Arena;
use crate::engine::physics::{BodyParams, RESTITUTION};

/// Errors raised while building or validating a [`GameConfig`]
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("arena {width}x{height} cannot fit a body of radius {max_radius}")]
    ArenaTooSmall {
        width: f64,
        height: f64,
        max_radius: f64,
    },

    #[error("at least one body is required")]
    NoBodies,

    #[error("radius range {min}..={max} is invalid")]
    InvalidRadius { min: f64, max: f64 },

    #[error("speed range {min}..{max} is invalid")]
    InvalidSpeed { min: f64, max: f64 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("tick rate {0} gives a tick period too long to schedule")]
    TickRateTooLow(f64),

    #[error("restitution must lie in [0, 1], got {0}")]
    InvalidRestitution(f64),

    #[error("could not parse {var}={value:?}")]
    BadOverride { var: &'static str, value: String },
}

/// Every tunable of a session
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub width: f64,
    pub height: f64,

    pub body_count: usize,

    /// Fixed simulation rate (ticks per second)
    pub tick_rate: f64,

    /// Maximum ticks run in one frame when catching up
    pub max_catch_up: u32,

    /// Two presses closer than this (seconds) reset the game
    pub double_press_window: f64,

    /// Drag displacement is divided by this to give fling velocity
    pub fling_divisor: f64,

    pub min_radius: f64,
    pub max_radius: f64,

    pub min_speed: f64,
    pub max_speed: f64,

    pub restitution: f64,

    /// Fixed seed for reproducible sessions; entropy when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 970.0,
            height: 580.0,
            body_count: 3,
            tick_rate: 60.0,
            max_catch_up: 5,
            double_press_window: 0.3,
            fling_divisor: 10.0,
            min_radius: 10.0,
            max_radius: 30.0,
            min_speed: 1.0,
            max_speed: 2.0,
            restitution: RESTITUTION,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Defaults with `BONK_*` environment overrides applied, then validated
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(width) = parse_var(&lookup, "BONK_WIDTH")? {
            config.width = width;
        }
        if let Some(height) = parse_var(&lookup, "BONK_HEIGHT")? {
            config.height = height;
        }
        if let Some(count) = parse_var(&lookup, "BONK_BODIES")? {
            config.body_count = count;
        }
        if let Some(rate) = parse_var(&lookup, "BONK_TICK_RATE")? {
            config.tick_rate = rate;
        }
        if let Some(seed) = parse_var(&lookup, "BONK_SEED")? {
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_radius > 0.0 && self.min_radius <= self.max_radius) {
            return Err(ConfigError::InvalidRadius {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if !(self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 2.0 * self.max_radius
            && self.height >= 2.0 * self.max_radius)
        {
            return Err(ConfigError::ArenaTooSmall {
                width: self.width,
                height: self.height,
                max_radius: self.max_radius,
            });
        }
        if self.body_count == 0 {
            return Err(ConfigError::NoBodies);
        }
        if !(self.min_speed > 0.0 && self.min_speed < self.max_speed) {
            return Err(ConfigError::InvalidSpeed {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        for (name, value) in [
            ("tick_rate", self.tick_rate),
            ("double_press_window", self.double_press_window),
            ("fling_divisor", self.fling_divisor),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if Duration::try_from_secs_f64(self.tick_rate.recip()).is_err() {
            return Err(ConfigError::TickRateTooLow(self.tick_rate));
        }
        if self.max_catch_up == 0 {
            return Err(ConfigError::NotPositive {
                name: "max_catch_up",
                value: 0.0,
            });
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::InvalidRestitution(self.restitution));
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.width, self.height)
    }

    pub fn body_params(&self) -> BodyParams {
        BodyParams {
            radius: self.min_radius..=self.max_radius,
            speed_min: self.min_speed,
            speed_max: self.max_speed,
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::BadOverride { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::game_loop::GameLoop;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.arena(), Arena::new(970.0, 580.0));
        assert_eq!(config.body_count, 3);
    }

    #[test]
    fn test_overrides_applied() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("BONK_WIDTH", "640"),
            ("BONK_HEIGHT", " 480 "),
            ("BONK_BODIES", "8"),
            ("BONK_SEED", "1234"),
        ]))
        .unwrap();

        assert_eq!(config.width, 640.0);
        assert_eq!(config.height, 480.0);
        assert_eq!(config.body_count, 8);
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn test_bad_override_reported() {
        let err = GameConfig::from_lookup(lookup_from(&[("BONK_BODIES", "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::BadOverride {
                var: "BONK_BODIES",
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_tiny_arena() {
        let config = GameConfig {
            width: 50.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ArenaTooSmall { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_bodies() {
        let config = GameConfig {
            body_count: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoBodies));
    }

    #[test]
    fn test_rejects_bad_ranges() {
        let radius = GameConfig {
            min_radius: 40.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            radius.validate(),
            Err(ConfigError::InvalidRadius { .. })
        ));

        let speed = GameConfig {
            min_speed: 2.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            speed.validate(),
            Err(ConfigError::InvalidSpeed { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_tunables() {
        let config = GameConfig {
            fling_divisor: 0.0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                name: "fling_divisor",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_unschedulable_tick_rate() {
        let err = GameConfig::from_lookup(lookup_from(&[("BONK_TICK_RATE", "1e-300")])).unwrap_err();
        assert_eq!(err, ConfigError::TickRateTooLow(1e-300));

        // Slow but representable rates are fine, and the loop accepts them
        let slow = GameConfig::from_lookup(lookup_from(&[("BONK_TICK_RATE", "0.5")])).unwrap();
        let game_loop = GameLoop::new(slow.tick_rate, slow.max_catch_up);
        assert_eq!(game_loop.tick_duration(), Duration::from_secs(2));
    }

    #[test]
    fn test_rejects_restitution_out_of_range() {
        let config = GameConfig {
            restitution: 1.5,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidRestitution(1.5)));
    }

    #[test]
    fn test_body_params_follow_config() {
        let params = GameConfig::default().body_params();
        assert_eq!(params.radius, 10.0..=30.0);
        assert_eq!(params.speed_min, 1.0);
        assert_eq!(params.speed_max, 2.0);
    }
}
