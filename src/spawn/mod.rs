//! Spawn-side rolls and gates.
//!
//! Variant selection walks the configured spawn-rate distribution; seasonal
//! dates boost the christmas variant. The RNG is always injected so hosts
//! (and tests) control determinism.

use rand::Rng;
use tracing::debug;

use crate::config::BalanceConfig;
use crate::constants::SEASONAL_BOOST_CHANCE;
use crate::variant::MimicVariant;

/// Roll a variant from the spawn-rate distribution. When `seasonal` is set,
/// half of all spawns are forced to Christmas before the normal walk.
/// Total: a distribution that underflows 1.0 resolves to the last variant.
pub fn roll_variant(config: &BalanceConfig, rng: &mut impl Rng, seasonal: bool) -> MimicVariant {
    if seasonal && rng.gen::<f64>() < SEASONAL_BOOST_CHANCE {
        return MimicVariant::Christmas;
    }

    let roll = rng.gen::<f64>();
    let mut cumulative = 0.0;

    cumulative += config.spawn_rates.classic;
    if roll < cumulative {
        return MimicVariant::Classic;
    }

    cumulative += config.spawn_rates.corrupted;
    if roll < cumulative {
        return MimicVariant::Corrupted;
    }

    cumulative += config.spawn_rates.ender;
    if roll < cumulative {
        return MimicVariant::Ender;
    }

    MimicVariant::Christmas
}

/// Variant roll with the seasonal flag taken from the system date.
pub fn roll_variant_today(config: &BalanceConfig, rng: &mut impl Rng) -> MimicVariant {
    roll_variant(config, rng, config.is_seasonal_today())
}

/// Spawn weight for a biome (0.0 means never spawn there).
pub fn biome_spawn_weight(config: &BalanceConfig, biome_id: &str) -> f64 {
    let weight = config.biome_weight(biome_id);
    if config.debug.enable_spawn_logging {
        debug!(biome_id, weight, "biome spawn weight");
    }
    weight
}

/// Whether the light level (0-15) permits a spawn.
pub fn can_spawn_in_light(config: &BalanceConfig, light_level: u8) -> bool {
    light_level >= config.spawn_settings.min_light_level
        && light_level <= config.spawn_settings.max_light_level
}

/// Group size for a spawn attempt, uniform over the configured range.
/// Relies on validation having ordered the bounds.
pub fn group_size(config: &BalanceConfig, rng: &mut impl Rng) -> u32 {
    let min = config.spawn_settings.min_group_size;
    let max = config.spawn_settings.max_group_size.max(min);
    rng.gen_range(min..=max)
}
