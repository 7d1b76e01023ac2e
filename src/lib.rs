//! Mimic Balance Core
//!
//! This crate provides the balance and scaling logic for mimic entities:
//! - Variant catalog (closed classification set driving all scaling)
//! - Balance configuration (validated, reloadable JSON document)
//! - Config store (lazy one-time materialization, explicit invalidation)
//! - Stat scaling (biome/variant/difficulty -> health, damage, experience)
//! - Loot rolls (tooth and rare-book drop decisions)
//! - Per-entity derived-state cache (chunk-keyed biome, cached intervals)
//! - Spawn rolls (variant selection, light gates, group sizes)
//! - Config file watcher for hot-reload
//!
//! The host simulation drives this crate; nothing here blocks, spawns
//! threads, or touches ambient global state.

pub mod config;
pub mod constants;
pub mod entity;
pub mod logging;
pub mod loot;
pub mod scaling;
pub mod spawn;
pub mod variant;
pub mod watcher;
