//! Edge case & boundary tests.
//!
//! Behavior at system boundaries:
//! - All five documented invalid config mutations are rejected
//! - Lookup misses degrade silently, never error
//! - Store behavior under reset and concurrent access
//! - Chunk-boundary arithmetic at negative and extreme coordinates

use std::sync::Arc;

use mimic_core::config::{BalanceConfig, ConfigStore, VariantMultipliers};
use mimic_core::entity::{BlockPos, ChunkPos, DerivedState};
use mimic_core::scaling::{scaled_damage, scaled_health, scaled_stats, Difficulty};
use mimic_core::variant::MimicVariant;

// ============================================================
// Validation boundaries
// ============================================================

#[test]
fn invalid_spawn_rate_sum_rejected() {
    let mut config = BalanceConfig::default();
    config.spawn_rates.ender = 0.2; // sum 1.12
    assert!(!config.validate());
}

#[test]
fn nonpositive_health_base_rejected() {
    let mut config = BalanceConfig::default();
    config.combat_scaling.health_base = 0.0;
    assert!(!config.validate());
}

#[test]
fn nonpositive_damage_base_rejected() {
    let mut config = BalanceConfig::default();
    config.combat_scaling.damage_base = -0.1;
    assert!(!config.validate());
}

#[test]
fn inverted_group_size_rejected() {
    let mut config = BalanceConfig::default();
    config.spawn_settings.min_group_size = 3;
    config.spawn_settings.max_group_size = 1;
    assert!(!config.validate());
}

#[test]
fn inverted_light_levels_rejected() {
    let mut config = BalanceConfig::default();
    config.spawn_settings.min_light_level = 8;
    config.spawn_settings.max_light_level = 7;
    assert!(!config.validate());
}

#[test]
fn negative_biome_weight_rejected() {
    let mut config = BalanceConfig::default();
    config.biome_weights.insert("minecraft:plains".into(), -1.0);
    assert!(!config.validate());
}

#[test]
fn negative_per_difficulty_steps_are_allowed() {
    // Per-step deltas are unconstrained reals; only the bases must be positive.
    let mut config = BalanceConfig::default();
    config.combat_scaling.health_per_difficulty = -8.0;
    config.combat_scaling.damage_per_difficulty = -2.0;
    assert!(config.validate());
    // Floors still hold.
    let health = scaled_health(&config, "minecraft:deep_dark", MimicVariant::Classic, Difficulty::Normal);
    assert!(health >= 1.0);
}

// ============================================================
// Silent-degrade lookups
// ============================================================

#[test]
fn empty_biome_table_defaults_everywhere() {
    let mut config = BalanceConfig::default();
    config.biome_weights.clear();
    assert!(config.validate());
    assert_eq!(config.biome_weight("minecraft:deep_dark"), 1.0);
    let stats = scaled_stats(&config, "minecraft:deep_dark", MimicVariant::Classic, Difficulty::Normal);
    assert_eq!(stats.health, 24.0);
}

#[test]
fn missing_variant_multiplier_scales_by_one() {
    let mut config = BalanceConfig::default();
    config.variant_multipliers.remove("ender");
    let health = scaled_health(&config, "minecraft:plains", MimicVariant::Ender, Difficulty::Normal);
    assert_eq!(health, 24.0);
}

#[test]
fn overridden_variant_multiplier_wins_over_builtin() {
    let mut config = BalanceConfig::default();
    config
        .variant_multipliers
        .insert("classic".into(), VariantMultipliers::new(3.0, 1.0, 1.0));
    let health = scaled_health(&config, "minecraft:plains", MimicVariant::Classic, Difficulty::Normal);
    assert_eq!(health, 72.0);
}

#[test]
fn unknown_variant_id_resolves_to_fallback_then_scales() {
    let config = BalanceConfig::default();
    let variant = MimicVariant::from_id("not-a-variant");
    let stats = scaled_stats(&config, "minecraft:plains", variant, Difficulty::Normal);
    assert_eq!(stats.health, 24.0);
    assert_eq!(stats.damage, 4.0);
    assert_eq!(stats.experience, 10);
}

// ============================================================
// Store boundaries
// ============================================================

#[test]
fn store_survives_source_panic_free_failure() {
    use mimic_core::config::ConfigError;
    let store = ConfigStore::new(|| -> Result<BalanceConfig, ConfigError> {
        Err(ConfigError::Invalid("deliberately broken"))
    });
    let config = store.get();
    assert!(config.validate(), "fallback defaults must be valid");
}

#[test]
fn store_shared_across_threads_after_reset() {
    let store = Arc::new(ConfigStore::with_defaults());
    store.ensure_initialized();
    store.reset();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.get())
        })
        .collect();

    let configs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for config in &configs[1..] {
        assert!(Arc::ptr_eq(&configs[0], config), "all threads see one instance");
    }
    assert_eq!(store.generation(), 2);
}

// ============================================================
// Chunk arithmetic extremes
// ============================================================

#[test]
fn chunk_boundaries_at_negative_coordinates() {
    // -1..-16 are all chunk -1; -17 starts chunk -2.
    assert_eq!(ChunkPos::containing(BlockPos::new(-1, 0, 0)).x, -1);
    assert_eq!(ChunkPos::containing(BlockPos::new(-16, 0, 0)).x, -1);
    assert_eq!(ChunkPos::containing(BlockPos::new(-17, 0, 0)).x, -2);
}

#[test]
fn chunk_containing_extreme_coordinates() {
    let far = ChunkPos::containing(BlockPos::new(i32::MAX, 0, i32::MIN));
    assert_eq!(far.x, i32::MAX >> 4);
    assert_eq!(far.z, i32::MIN >> 4);
}

#[test]
fn vertical_movement_never_invalidates_biome_cache() {
    let mut state = DerivedState::new();
    let mut calls = 0;
    for y in [0, 64, 128, 255, -64] {
        state.resolve_biome(BlockPos::new(5, y, 5), |_| {
            calls += 1;
            Some("minecraft:lush_caves".into())
        });
    }
    assert_eq!(calls, 1, "y-only movement stays in the same column");
}

#[test]
fn scaled_damage_exact_at_every_difficulty() {
    let config = BalanceConfig::default();
    let base = |d| scaled_damage(&config, "minecraft:plains", MimicVariant::Classic, d);
    assert_eq!(base(Difficulty::Peaceful), 0.5);
    assert_eq!(base(Difficulty::Easy), 2.0);
    assert_eq!(base(Difficulty::Normal), 4.0);
    assert_eq!(base(Difficulty::Hard), 6.0);
}
