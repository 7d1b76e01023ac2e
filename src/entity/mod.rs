//! Per-entity derived-state cache.
//!
//! Each simulation entity owns one `DerivedState`; nothing here is shared or
//! locked. Two values are cached independently: the current biome id, keyed
//! by the 16-unit chunk the entity stands in, and a config-derived idle
//! interval that only an explicit clear refreshes. The chunk key changes far
//! less often than the entity steps, which is what makes the biome lookup
//! affordable.

use tracing::debug;

use crate::config::store::ConfigStore;
use crate::constants::{CHUNK_SHIFT, DEFAULT_BIOME_ID};

/// Block-granularity position in the host world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Coarse spatial partition key: per-axis `>> 4` of the block position.
/// The y axis is deliberately ignored; biomes here are columnar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    /// Chunk containing a block position. Pure, so boundary-crossing logic
    /// is testable without a live entity.
    pub fn containing(pos: BlockPos) -> Self {
        Self {
            x: pos.x >> CHUNK_SHIFT,
            z: pos.z >> CHUNK_SHIFT,
        }
    }
}

/// Derived values cached per entity. Created with the entity, mutated only
/// by its own step logic, dropped with it.
#[derive(Debug, Default)]
pub struct DerivedState {
    cached_biome_id: Option<String>,
    last_check_chunk: Option<ChunkPos>,
    cached_interval: Option<i32>,
    stats_applied: bool,
}

impl DerivedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current biome id for `pos`, invoking `lookup` only when the entity
    /// has crossed a chunk boundary since the last check (or never checked).
    /// An unresolvable lookup falls back to the default biome; cache misses
    /// never fail.
    pub fn resolve_biome<F>(&mut self, pos: BlockPos, mut lookup: F) -> &str
    where
        F: FnMut(BlockPos) -> Option<String>,
    {
        let chunk = ChunkPos::containing(pos);
        if self.last_check_chunk != Some(chunk) {
            let biome = lookup(pos).unwrap_or_else(|| DEFAULT_BIOME_ID.to_string());
            debug!(?chunk, biome = %biome, "biome cache refreshed");
            self.cached_biome_id = Some(biome);
            self.last_check_chunk = Some(chunk);
        }
        self.cached_biome_id.as_deref().unwrap_or(DEFAULT_BIOME_ID)
    }

    /// Biome id from the last resolve, if any.
    pub fn cached_biome(&self) -> Option<&str> {
        self.cached_biome_id.as_deref()
    }

    /// Idle-sound interval in ticks, fetched from the store once and reused.
    /// A config reload does not refresh this; call `clear_interval` after
    /// observing a store generation bump if freshness matters.
    pub fn idle_sound_interval(&mut self, store: &ConfigStore) -> i32 {
        if let Some(interval) = self.cached_interval {
            return interval;
        }
        let interval = store.get().behavior.idle_sound_interval_ticks;
        self.cached_interval = Some(interval);
        interval
    }

    /// Drop the cached interval so the next query re-fetches.
    pub fn clear_interval(&mut self) {
        self.cached_interval = None;
    }

    /// True once scaled stats have been applied to the entity.
    pub fn stats_applied(&self) -> bool {
        self.stats_applied
    }

    /// Record that scaled stats have been applied; subsequent steps skip
    /// recomputation.
    pub fn mark_stats_applied(&mut self) {
        self.stats_applied = true;
    }

    /// Force stat recomputation on the next step, e.g. after a variant
    /// change.
    pub fn reset_stats(&mut self) {
        self.stats_applied = false;
    }
}
