//! Loot drop decisions.
//!
//! Pure functions over caller-supplied rolls in `[0, 1)`. The host owns the
//! RNG and the actual item spawning; this module only answers yes/no and
//! by-how-much.

use crate::config::BalanceConfig;
use crate::constants::MAX_LOOTING_LEVEL;
use crate::variant::MimicVariant;

/// Total drop-count multiplier for a looting enchantment level (0-3).
/// Levels beyond 3 clamp rather than scale further.
pub fn loot_multiplier(config: &BalanceConfig, looting_level: u32) -> f64 {
    let level = looting_level.min(MAX_LOOTING_LEVEL);
    1.0 + level as f64 * config.loot_settings.looting_multiplier
}

/// Whether a rare book drops. Chance is variant-tiered; unknown variants
/// already resolved to the classic (lowest) tier by the catalog.
pub fn should_drop_rare_book(config: &BalanceConfig, variant: MimicVariant, roll: f64) -> bool {
    roll < config.loot_settings.rare_book_drop_chance.chance(variant)
}

/// Whether a tooth drops. `always_drop_tooth` short-circuits the roll.
pub fn should_drop_tooth(config: &BalanceConfig, roll: f64) -> bool {
    if config.loot_settings.always_drop_tooth {
        return true;
    }
    roll < config.loot_settings.tooth_drop_chance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loot_multiplier_per_level() {
        let config = BalanceConfig::default();
        assert_eq!(loot_multiplier(&config, 0), 1.0);
        assert_eq!(loot_multiplier(&config, 1), 1.5);
        assert_eq!(loot_multiplier(&config, 3), 2.5);
    }

    #[test]
    fn test_loot_multiplier_clamps_level() {
        let config = BalanceConfig::default();
        assert_eq!(loot_multiplier(&config, 10), loot_multiplier(&config, 3));
    }

    #[test]
    fn test_rare_book_tiers() {
        let config = BalanceConfig::default();
        // Roll just under the classic tier drops for everyone.
        assert!(should_drop_rare_book(&config, MimicVariant::Classic, 0.10));
        // Roll between classic and christmas tiers splits by variant.
        assert!(!should_drop_rare_book(&config, MimicVariant::Classic, 0.40));
        assert!(should_drop_rare_book(&config, MimicVariant::Christmas, 0.40));
    }

    #[test]
    fn test_rare_book_boundary_exclusive() {
        let config = BalanceConfig::default();
        assert!(!should_drop_rare_book(&config, MimicVariant::Classic, 0.15));
    }

    #[test]
    fn test_tooth_always_drops_by_default() {
        let config = BalanceConfig::default();
        assert!(should_drop_tooth(&config, 0.999));
    }

    #[test]
    fn test_tooth_chance_when_not_guaranteed() {
        let mut config = BalanceConfig::default();
        config.loot_settings.always_drop_tooth = false;
        assert!(should_drop_tooth(&config, 0.79));
        assert!(!should_drop_tooth(&config, 0.80));
    }
}
