//! Centralized balance constants.
//!
//! Eliminates magic numbers duplicated across scaling, caching, and spawn
//! logic. Per-section defaults (base stats, biome weights, drop chances)
//! live in `config` as the single source of truth.

// =====================================================
// Stat floors
// =====================================================

/// Scaled health never drops below this, regardless of config or difficulty.
pub const MIN_HEALTH: f64 = 1.0;

/// Scaled damage never drops below this. Note: under Peaceful the difficulty
/// multiplier is 0.0, so this floor is the entire result.
pub const MIN_DAMAGE: f64 = 0.5;

/// Scaled experience never drops below this.
pub const MIN_EXPERIENCE: i32 = 1;

// =====================================================
// Lookup defaults
// =====================================================

/// Weight assumed for biomes absent from the `biome_weights` table.
pub const DEFAULT_BIOME_WEIGHT: f64 = 1.0;

/// Biome reported when the world lookup cannot resolve a position.
pub const DEFAULT_BIOME_ID: &str = "minecraft:plains";

// =====================================================
// Spatial partitioning
// =====================================================

/// Per-axis right-shift mapping a block coordinate to its chunk coordinate
/// (16-unit partitions).
pub const CHUNK_SHIFT: i32 = 4;

// =====================================================
// Validation / spawn
// =====================================================

/// Allowed deviation of the spawn-rate sum from 1.0.
pub const SPAWN_RATE_TOLERANCE: f64 = 0.01;

/// Chance that a spawn during a seasonal date is forced to Christmas.
pub const SEASONAL_BOOST_CHANCE: f64 = 0.5;

/// Maximum looting level the loot multiplier honors.
pub const MAX_LOOTING_LEVEL: u32 = 3;
