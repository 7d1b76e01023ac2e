//! Balance configuration document.
//!
//! The persisted document is JSON with nine top-level sections. Every field
//! carries a literal default, so partial documents deserialize cleanly and a
//! default-constructed config always passes validation. An installed config
//! is never mutated in place; reloads replace the whole document.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::constants::{DEFAULT_BIOME_WEIGHT, SPAWN_RATE_TOLERANCE};
use crate::variant::MimicVariant;

pub mod store;

pub use store::{ConfigSource, ConfigStore, DefaultSource, FileSource};

/// Errors from explicit config I/O. The lookup and validation paths never
/// error; callers of `load_or_default` never see these.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config watch error: {0}")]
    Watch(#[from] notify::Error),
    #[error("config failed validation: {0}")]
    Invalid(&'static str),
}

/// Per-variant spawn weights. Semantically a probability distribution that
/// should sum to 1.0 within tolerance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnRates {
    pub classic: f64,
    pub corrupted: f64,
    pub ender: f64,
    pub christmas: f64,
}

impl Default for SpawnRates {
    fn default() -> Self {
        Self {
            classic: 0.70,
            corrupted: 0.20,
            ender: 0.08,
            christmas: 0.02,
        }
    }
}

impl SpawnRates {
    pub fn rate(&self, variant: MimicVariant) -> f64 {
        match variant {
            MimicVariant::Classic => self.classic,
            MimicVariant::Corrupted => self.corrupted,
            MimicVariant::Ender => self.ender,
            MimicVariant::Christmas => self.christmas,
        }
    }

    pub fn total(&self) -> f64 {
        self.classic + self.corrupted + self.ender + self.christmas
    }
}

/// Base values and per-difficulty-step deltas for combat stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatScaling {
    pub health_base: f64,
    pub health_per_difficulty: f64,
    pub damage_base: f64,
    pub damage_per_difficulty: f64,
    pub experience_base: i32,
}

impl Default for CombatScaling {
    fn default() -> Self {
        Self {
            health_base: 24.0,
            health_per_difficulty: 8.0,
            damage_base: 4.0,
            damage_per_difficulty: 2.0,
            experience_base: 10,
        }
    }
}

/// Multiplier triple a deployment can override per variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantMultipliers {
    pub health: f64,
    pub damage: f64,
    pub experience: f64,
}

impl Default for VariantMultipliers {
    fn default() -> Self {
        Self {
            health: 1.0,
            damage: 1.0,
            experience: 1.0,
        }
    }
}

impl VariantMultipliers {
    pub fn new(health: f64, damage: f64, experience: f64) -> Self {
        Self {
            health,
            damage,
            experience,
        }
    }
}

/// World-generation spawn gates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    pub min_group_size: u32,
    pub max_group_size: u32,
    pub spawn_weight: u32,
    pub min_light_level: u8,
    pub max_light_level: u8,
    pub spawn_in_dungeon: bool,
    pub spawn_in_mineshaft: bool,
    pub spawn_in_stronghold: bool,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            min_group_size: 1,
            max_group_size: 1,
            spawn_weight: 8,
            min_light_level: 0,
            max_light_level: 7,
            spawn_in_dungeon: true,
            spawn_in_mineshaft: true,
            spawn_in_stronghold: true,
        }
    }
}

/// Behavioral thresholds consumed by the host entity logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Behavior {
    pub idle_sound_interval_ticks: i32,
    pub reveal_on_attack: bool,
    pub can_disguise_again: bool,
    pub aggro_range: f64,
    pub movement_speed: f64,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            idle_sound_interval_ticks: 200,
            reveal_on_attack: true,
            can_disguise_again: false,
            aggro_range: 24.0,
            movement_speed: 0.23,
        }
    }
}

/// Per-variant rare-book drop chances. Lookup falls back to the classic
/// (lowest-rarity) tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RareBookDropChance {
    pub classic: f64,
    pub corrupted: f64,
    pub ender: f64,
    pub christmas: f64,
}

impl Default for RareBookDropChance {
    fn default() -> Self {
        Self {
            classic: 0.15,
            corrupted: 0.25,
            ender: 0.30,
            christmas: 0.50,
        }
    }
}

impl RareBookDropChance {
    pub fn chance(&self, variant: MimicVariant) -> f64 {
        match variant {
            MimicVariant::Classic => self.classic,
            MimicVariant::Corrupted => self.corrupted,
            MimicVariant::Ender => self.ender,
            MimicVariant::Christmas => self.christmas,
        }
    }
}

/// Loot drop tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LootSettings {
    pub always_drop_tooth: bool,
    pub tooth_drop_chance: f64,
    pub rare_book_drop_chance: RareBookDropChance,
    pub looting_multiplier: f64,
}

impl Default for LootSettings {
    fn default() -> Self {
        Self {
            always_drop_tooth: true,
            tooth_drop_chance: 0.8,
            rare_book_drop_chance: RareBookDropChance::default(),
            looting_multiplier: 0.5,
        }
    }
}

/// Development/debug switches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Debug {
    pub enable_spawn_logging: bool,
    pub enable_combat_logging: bool,
    pub show_hitboxes: bool,
}

/// The full balance document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    pub spawn_rates: SpawnRates,
    pub christmas_dates: Vec<String>,
    pub combat_scaling: CombatScaling,
    pub biome_weights: HashMap<String, f64>,
    pub variant_multipliers: HashMap<String, VariantMultipliers>,
    pub spawn_settings: SpawnSettings,
    pub behavior: Behavior,
    pub loot_settings: LootSettings,
    pub debug: Debug,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            spawn_rates: SpawnRates::default(),
            christmas_dates: default_christmas_dates(),
            combat_scaling: CombatScaling::default(),
            biome_weights: default_biome_weights(),
            variant_multipliers: default_variant_multipliers(),
            spawn_settings: SpawnSettings::default(),
            behavior: Behavior::default(),
            loot_settings: LootSettings::default(),
            debug: Debug::default(),
        }
    }
}

fn default_christmas_dates() -> Vec<String> {
    vec!["12-24".into(), "12-25".into(), "12-26".into()]
}

fn default_biome_weights() -> HashMap<String, f64> {
    let entries = [
        ("minecraft:plains", 1.0),
        ("minecraft:forest", 1.2),
        ("minecraft:dark_forest", 1.8),
        ("minecraft:swamp", 1.5),
        ("minecraft:taiga", 1.1),
        ("minecraft:jungle", 1.3),
        ("minecraft:desert", 0.7),
        ("minecraft:savanna", 0.8),
        ("minecraft:badlands", 0.9),
        ("minecraft:mushroom_fields", 0.3),
        ("minecraft:the_nether", 0.0),
        ("minecraft:the_end", 0.0),
        ("minecraft:deep_dark", 2.5),
        ("minecraft:dripstone_caves", 1.6),
        ("minecraft:lush_caves", 1.4),
    ];
    entries
        .iter()
        .map(|(id, w)| (id.to_string(), *w))
        .collect()
}

fn default_variant_multipliers() -> HashMap<String, VariantMultipliers> {
    MimicVariant::ALL
        .iter()
        .map(|v| {
            (
                v.id().to_string(),
                VariantMultipliers::new(
                    v.health_multiplier(),
                    v.damage_multiplier(),
                    v.experience_multiplier(),
                ),
            )
        })
        .collect()
}

impl BalanceConfig {
    /// Sanity-check the document. Short-circuits on the first failure and
    /// logs which check failed; no side effects beyond the result.
    pub fn validate(&self) -> bool {
        let total = self.spawn_rates.total();
        if (total - 1.0).abs() > SPAWN_RATE_TOLERANCE {
            warn!(total, "spawn rates don't sum to 1.0");
            return false;
        }

        if self.combat_scaling.health_base <= 0.0 {
            warn!(
                health_base = self.combat_scaling.health_base,
                "health_base must be positive"
            );
            return false;
        }

        if self.combat_scaling.damage_base <= 0.0 {
            warn!(
                damage_base = self.combat_scaling.damage_base,
                "damage_base must be positive"
            );
            return false;
        }

        if self.spawn_settings.min_group_size > self.spawn_settings.max_group_size {
            warn!("min_group_size cannot exceed max_group_size");
            return false;
        }

        if self.spawn_settings.min_light_level > self.spawn_settings.max_light_level {
            warn!("min_light_level cannot exceed max_light_level");
            return false;
        }

        for (biome, weight) in &self.biome_weights {
            if *weight < 0.0 {
                warn!(biome = %biome, weight = *weight, "biome weight is negative");
                return false;
            }
        }

        true
    }

    /// Spawn weight for a biome; unknown biomes weigh 1.0.
    pub fn biome_weight(&self, biome_id: &str) -> f64 {
        self.biome_weights
            .get(biome_id)
            .copied()
            .unwrap_or(DEFAULT_BIOME_WEIGHT)
    }

    /// Multiplier triple for a variant; unknown variants scale by 1.0.
    pub fn variant_multipliers_for(&self, variant: MimicVariant) -> VariantMultipliers {
        self.variant_multipliers
            .get(variant.id())
            .copied()
            .unwrap_or_default()
    }

    /// Whether a date falls inside the configured seasonal window.
    pub fn is_seasonal_date(&self, date: NaiveDate) -> bool {
        let key = date.format("%m-%d").to_string();
        self.christmas_dates.iter().any(|d| *d == key)
    }

    /// Seasonal check against the system clock.
    pub fn is_seasonal_today(&self) -> bool {
        self.is_seasonal_date(chrono::Local::now().date_naive())
    }

    /// Load and validate a document from disk.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: BalanceConfig = serde_json::from_str(&raw)?;
        if !config.validate() {
            return Err(ConfigError::Invalid("validation failed"));
        }
        Ok(config)
    }

    /// Load a document, substituting defaults on any failure. Never errors;
    /// a missing file is written back so the deployment has a template.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!(?path, "config file not found, creating default configuration");
            let config = BalanceConfig::default();
            if let Err(err) = config.save_to(path) {
                warn!(%err, "failed to write default config");
            }
            return config;
        }

        match Self::load_from(path) {
            Ok(config) => {
                info!(?path, "configuration loaded");
                config
            }
            Err(err) => {
                warn!(%err, "invalid configuration, using defaults");
                BalanceConfig::default()
            }
        }
    }

    /// Persist the document as pretty JSON.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Debug-gated config dump.
    pub fn log_summary(&self) {
        if !self.debug.enable_spawn_logging {
            return;
        }
        info!(
            classic = self.spawn_rates.classic,
            corrupted = self.spawn_rates.corrupted,
            ender = self.spawn_rates.ender,
            christmas = self.spawn_rates.christmas,
            "spawn rates"
        );
        info!(
            health_base = self.combat_scaling.health_base,
            damage_base = self.combat_scaling.damage_base,
            experience_base = self.combat_scaling.experience_base,
            "base stats"
        );
        info!(
            dates = ?self.christmas_dates,
            seasonal_today = self.is_seasonal_today(),
            "seasonal window"
        );
    }
}
