use serde::{Deserialize, Serialize};

/// Options for the unit generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Probability of drawing the 3D dimension; the remainder goes to 2D.
    pub three_d_weight: f64,
    /// Seed for the sampling RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            // documented 60/40 split between 3D and 2D
            three_d_weight: 0.6,
            seed: None,
        }
    }
}
