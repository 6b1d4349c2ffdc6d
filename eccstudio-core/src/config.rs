//! Studio configuration
//!
//! Every field has a default, so a configuration file only needs the values
//! it overrides.

use crate::constants::{
    DEFAULT_BATTLE_ROUNDS, DEFAULT_BATTLE_SAMPLES, DEFAULT_RS_PARITY, MAX_RS_PARITY,
};
use crate::error::EccError;
use crate::noise::NoiseKind;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Reed-Solomon check bytes per block
    pub rs_parity: usize,

    /// Seed for the noise generator; fresh entropy when absent
    pub seed: Option<u64>,

    /// Noise family used when a command does not pick one
    pub noise: NoiseKind,

    /// Battle mode settings
    pub battle: BattleSettings,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            rs_parity: DEFAULT_RS_PARITY,
            seed: None,
            noise: NoiseKind::Random,
            battle: BattleSettings::default(),
        }
    }
}

impl StudioConfig {
    /// Reject values no codec can work with
    pub fn validate(&self) -> Result<(), EccError> {
        if self.rs_parity == 0 || self.rs_parity > MAX_RS_PARITY {
            return Err(EccError::InvalidParity(self.rs_parity));
        }
        self.battle.validate()
    }
}

/// Parameters for repeated random trials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleSettings {
    /// Number of rounds; each round runs every scheme applicable to one sample
    pub rounds: usize,

    /// Inputs drawn uniformly at random each round
    pub samples: Vec<String>,

    /// Worker threads sharing the rounds
    pub workers: usize,
}

impl Default for BattleSettings {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_BATTLE_ROUNDS,
            samples: DEFAULT_BATTLE_SAMPLES.iter().map(|s| s.to_string()).collect(),
            workers: 1,
        }
    }
}

impl BattleSettings {
    /// Reject settings that cannot produce a single trial
    pub fn validate(&self) -> Result<(), EccError> {
        if self.rounds == 0 {
            return Err(EccError::Config("battle rounds must be at least 1".into()));
        }
        if self.workers == 0 {
            return Err(EccError::Config("battle workers must be at least 1".into()));
        }
        if self.samples.is_empty() {
            return Err(EccError::Config("battle needs at least one sample".into()));
        }
        if self.samples.iter().any(|s| s.is_empty()) {
            return Err(EccError::Config("battle samples must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StudioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rs_parity, 10);
        assert_eq!(config.battle.rounds, 100);
        assert_eq!(config.battle.samples.len(), 8);
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = StudioConfig {
            rs_parity: 0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err(), EccError::InvalidParity(0));

        let mut config = StudioConfig::default();
        config.battle.rounds = 0;
        assert!(config.validate().is_err());

        let mut config = StudioConfig::default();
        config.battle.samples = vec!["1010".into(), String::new()];
        assert!(config.validate().is_err());
    }
}
