//! Stat scaling.
//!
//! Pure functions mapping (config, biome, variant, difficulty) to scaled
//! health, damage, and experience. Biome weight feeds a per-difficulty-step
//! bonus, the variant multiplies, the world difficulty multiplies again, and
//! a floor clamps the result. Nothing here touches the store or the world;
//! callers resolve those first.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::BalanceConfig;
use crate::constants::{MIN_DAMAGE, MIN_EXPERIENCE, MIN_HEALTH};
use crate::variant::MimicVariant;

/// World difficulty, as reported by the host. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Peaceful,
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Health scales down on peaceful, up on hard.
    pub fn health_multiplier(&self) -> f64 {
        match self {
            Difficulty::Peaceful => 0.5,
            Difficulty::Easy => 0.75,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.5,
        }
    }

    /// Damage zeroes out on peaceful. The damage floor still applies after
    /// this multiply, so peaceful damage lands at exactly the floor.
    pub fn damage_multiplier(&self) -> f64 {
        match self {
            Difficulty::Peaceful => 0.0,
            Difficulty::Easy => 0.5,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.5,
        }
    }
}

/// Scaled stat bundle for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledStats {
    pub health: f64,
    pub damage: f64,
    pub experience: i32,
}

/// Scaled max health. Floor: never below 1.0.
pub fn scaled_health(
    config: &BalanceConfig,
    biome_id: &str,
    variant: MimicVariant,
    difficulty: Difficulty,
) -> f64 {
    let biome_weight = config.biome_weight(biome_id);
    let bonus = config.combat_scaling.health_per_difficulty * (biome_weight - 1.0);
    let mult = config.variant_multipliers_for(variant).health;
    let raw = (config.combat_scaling.health_base + bonus) * mult;
    let result = (raw * difficulty.health_multiplier()).max(MIN_HEALTH);

    if config.debug.enable_combat_logging {
        debug!(%variant, biome_id, ?difficulty, result, "scaled health");
    }

    result
}

/// Scaled attack damage. Floor: never below 0.5, even under Peaceful where
/// the difficulty multiplier is 0.0.
pub fn scaled_damage(
    config: &BalanceConfig,
    biome_id: &str,
    variant: MimicVariant,
    difficulty: Difficulty,
) -> f64 {
    let biome_weight = config.biome_weight(biome_id);
    let bonus = config.combat_scaling.damage_per_difficulty * (biome_weight - 1.0);
    let mult = config.variant_multipliers_for(variant).damage;
    let raw = (config.combat_scaling.damage_base + bonus) * mult;
    let result = (raw * difficulty.damage_multiplier()).max(MIN_DAMAGE);

    if config.debug.enable_combat_logging {
        debug!(%variant, biome_id, ?difficulty, result, "scaled damage");
    }

    result
}

/// Scaled experience reward. Rounded half-away-from-zero, floor 1.
pub fn scaled_experience(config: &BalanceConfig, variant: MimicVariant, base_xp: i32) -> i32 {
    let mult = config.variant_multipliers_for(variant).experience;
    let result = ((base_xp as f64 * mult).round() as i32).max(MIN_EXPERIENCE);

    if config.debug.enable_combat_logging {
        debug!(%variant, base_xp, result, "scaled experience");
    }

    result
}

/// All three scaled stats in one pass, using the config's base experience.
pub fn scaled_stats(
    config: &BalanceConfig,
    biome_id: &str,
    variant: MimicVariant,
    difficulty: Difficulty,
) -> ScaledStats {
    ScaledStats {
        health: scaled_health(config, biome_id, variant, difficulty),
        damage: scaled_damage(config, biome_id, variant, difficulty),
        experience: scaled_experience(config, variant, config.combat_scaling.experience_base),
    }
}
