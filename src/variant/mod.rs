//! Mimic variant catalog.
//!
//! Closed classification set driving all stat scaling. Each variant carries
//! a stable string id and built-in multiplier coefficients; the balance
//! config may override the multipliers per deployment.

use serde::{Deserialize, Serialize};

/// The four mimic variants. `Classic` is the designated fallback for any
/// identifier the catalog does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MimicVariant {
    Classic,
    Corrupted,
    Ender,
    Christmas,
}

impl MimicVariant {
    /// All variants, in fallback-priority order.
    pub const ALL: [MimicVariant; 4] = [
        MimicVariant::Classic,
        MimicVariant::Corrupted,
        MimicVariant::Ender,
        MimicVariant::Christmas,
    ];

    /// Stable identifier used in the config document and entity persistence.
    pub fn id(&self) -> &'static str {
        match self {
            MimicVariant::Classic => "classic",
            MimicVariant::Corrupted => "corrupted",
            MimicVariant::Ender => "ender",
            MimicVariant::Christmas => "christmas",
        }
    }

    /// Resolve an identifier to a variant. Total: unknown or empty ids fall
    /// back to `Classic` rather than failing.
    pub fn from_id(id: &str) -> Self {
        match id {
            "corrupted" => MimicVariant::Corrupted,
            "ender" => MimicVariant::Ender,
            "christmas" => MimicVariant::Christmas,
            _ => MimicVariant::Classic,
        }
    }

    /// Built-in health multiplier (config `variant_multipliers` overrides).
    pub fn health_multiplier(&self) -> f64 {
        match self {
            MimicVariant::Classic => 1.0,
            MimicVariant::Corrupted => 1.5,
            MimicVariant::Ender => 2.0,
            MimicVariant::Christmas => 1.2,
        }
    }

    /// Built-in damage multiplier.
    pub fn damage_multiplier(&self) -> f64 {
        match self {
            MimicVariant::Classic => 1.0,
            MimicVariant::Corrupted => 1.4,
            MimicVariant::Ender => 1.8,
            MimicVariant::Christmas => 1.1,
        }
    }

    /// Built-in experience multiplier.
    pub fn experience_multiplier(&self) -> f64 {
        match self {
            MimicVariant::Classic => 1.0,
            MimicVariant::Corrupted => 2.0,
            MimicVariant::Ender => 3.0,
            MimicVariant::Christmas => 1.5,
        }
    }

    /// Ender mimics shrug off fire; everything else burns.
    pub fn fire_immune(&self) -> bool {
        matches!(self, MimicVariant::Ender)
    }
}

impl Default for MimicVariant {
    fn default() -> Self {
        MimicVariant::Classic
    }
}

impl std::fmt::Display for MimicVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
