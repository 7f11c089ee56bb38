use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level partition of the catalog.
///
/// A unit's kind, price, and engine are always drawn from the lists of a
/// single dimension; the two dimensions never mix within one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "2D")]
    TwoD,
    #[serde(rename = "3D")]
    ThreeD,
}

impl Dimension {
    /// Label used in names and prose, e.g. `2D`.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::TwoD => "2D",
            Dimension::ThreeD => "3D",
        }
    }

    /// Lowercase tag used in hashtags, e.g. `2d`.
    pub fn tag(&self) -> &'static str {
        match self {
            Dimension::TwoD => "2d",
            Dimension::ThreeD => "3d",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sampling lists for one dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSet {
    pub kinds: Vec<String>,
    pub prices: Vec<i64>,
    pub engines: Vec<String>,
}

/// Immutable catalog enumerating the legal kind/price/engine lists per
/// dimension. Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "2d")]
    pub two_d: TemplateSet,
    #[serde(rename = "3d")]
    pub three_d: TemplateSet,
}

impl Catalog {
    pub fn templates(&self, dimension: Dimension) -> &TemplateSet {
        match dimension {
            Dimension::TwoD => &self.two_d,
            Dimension::ThreeD => &self.three_d,
        }
    }

    /// Check the sampling precondition: every dimension has at least one
    /// entry in each list. Run once at startup so draws cannot fail later.
    pub fn validate(&self) -> Result<()> {
        for (dimension, set) in [
            (Dimension::TwoD, &self.two_d),
            (Dimension::ThreeD, &self.three_d),
        ] {
            if set.kinds.is_empty() {
                return Err(Error::InvalidCatalog(format!("{dimension} has no kinds")));
            }
            if set.prices.is_empty() {
                return Err(Error::InvalidCatalog(format!("{dimension} has no prices")));
            }
            if set.engines.is_empty() {
                return Err(Error::InvalidCatalog(format!("{dimension} has no engines")));
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            two_d: TemplateSet {
                kinds: strings(&["Platformer", "Puzzle", "Shooter", "Runner", "Strategy", "RPG"]),
                prices: vec![29, 49, 79, 99, 129, 149],
                engines: strings(&["Unity 2D", "Godot", "Pygame", "Construct", "Phaser"]),
            },
            three_d: TemplateSet {
                kinds: strings(&[
                    "FPS",
                    "Racing",
                    "Open World",
                    "Survival",
                    "Battle Royale",
                    "Simulator",
                ]),
                prices: vec![49, 99, 149, 199, 299, 349],
                engines: strings(&["Unity 3D", "Unreal Engine", "Godot 3D", "Blender Game Engine"]),
            },
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
