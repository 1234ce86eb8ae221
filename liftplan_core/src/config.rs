//! Engine configuration for Liftplan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/liftplan/config.toml`.
//! Every field has a default, so a missing or partial file is fine.

use crate::progression::tables::PrescriptionTables;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Engine configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub rounding: RoundingConfig,

    #[serde(default)]
    pub deload: DeloadConfig,

    #[serde(default)]
    pub wave: WaveConfig,

    #[serde(default)]
    pub tables: PrescriptionTables,
}

/// Load rounding steps per equipment class
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundingConfig {
    /// Barbell/machine loads round down to this step (kg)
    #[serde(default = "default_barbell_step")]
    pub barbell_step_kg: f64,

    /// Dumbbell loads round down to this step (kg)
    #[serde(default = "default_dumbbell_step")]
    pub dumbbell_step_kg: f64,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            barbell_step_kg: default_barbell_step(),
            dumbbell_step_kg: default_dumbbell_step(),
        }
    }
}

/// Deload policy
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeloadConfig {
    /// Fixed-interval trigger: every Nth week (0 disables the interval rule)
    #[serde(default = "default_deload_interval")]
    pub interval_weeks: u32,

    /// Intensity multiplier applied on a deload week
    #[serde(default = "default_deload_intensity")]
    pub intensity_factor: f64,

    /// Volume multiplier applied on a deload week
    #[serde(default = "default_deload_volume")]
    pub volume_factor: f64,

    /// RPE forced on a deload week
    #[serde(default = "default_deload_rpe")]
    pub rpe: f64,
}

impl Default for DeloadConfig {
    fn default() -> Self {
        Self {
            interval_weeks: default_deload_interval(),
            intensity_factor: default_deload_intensity(),
            volume_factor: default_deload_volume(),
            rpe: default_deload_rpe(),
        }
    }
}

/// Shape of the 3-week wave sub-cycle
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Intensity step between light/medium/heavy slots (%)
    #[serde(default = "default_wave_step")]
    pub step_percent: f64,

    /// Baseline rise per completed wave (%)
    #[serde(default = "default_wave_increment")]
    pub baseline_increment: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            step_percent: default_wave_step(),
            baseline_increment: default_wave_increment(),
        }
    }
}

// Default value functions
fn default_barbell_step() -> f64 {
    2.5
}

fn default_dumbbell_step() -> f64 {
    2.0
}

fn default_deload_interval() -> u32 {
    4
}

fn default_deload_intensity() -> f64 {
    0.65
}

fn default_deload_volume() -> f64 {
    0.5
}

fn default_deload_rpe() -> f64 {
    5.0
}

fn default_wave_step() -> f64 {
    5.0
}

fn default_wave_increment() -> f64 {
    2.5
}

impl EngineConfig {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("liftplan").join("config.toml")
    }

    /// Reject configurations the calculators cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.rounding.barbell_step_kg <= 0.0 {
            return Err(Error::Config("barbell rounding step must be positive".into()));
        }
        if !(0.0..1.0).contains(&self.deload.intensity_factor) {
            return Err(Error::Config(
                "deload intensity factor must be in (0, 1)".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.deload.volume_factor) {
            return Err(Error::Config("deload volume factor must be in (0, 1)".into()));
        }
        Ok(())
    }
}
