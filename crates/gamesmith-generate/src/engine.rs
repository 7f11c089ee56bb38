use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use gamesmith_core::{Catalog, Dimension, FactoryConfig, Unit};

use crate::clock::{Clock, SystemClock};
use crate::model::GenerateOptions;

/// Prefix for unit identifiers.
const ID_PREFIX: &str = "GS";

/// Assembles write-once `Unit` records from the catalog.
///
/// The caller validates the catalog once at startup (`Catalog::validate`),
/// so sampling here cannot fail and `create` returns a `Unit` directly.
pub struct Generator {
    catalog: Catalog,
    config: FactoryConfig,
    three_d_weight: f64,
    rng: ChaCha8Rng,
    clock: Box<dyn Clock>,
}

impl Generator {
    pub fn new(catalog: Catalog, config: FactoryConfig, options: GenerateOptions) -> Self {
        Self::with_clock(catalog, config, options, Box::new(SystemClock))
    }

    pub fn with_clock(
        catalog: Catalog,
        config: FactoryConfig,
        options: GenerateOptions,
        clock: Box<dyn Clock>,
    ) -> Self {
        let seed = options
            .seed
            .unwrap_or_else(|| rand::rng().random::<u64>());
        Self {
            catalog,
            config,
            three_d_weight: options.three_d_weight.clamp(0.0, 1.0),
            rng: ChaCha8Rng::seed_from_u64(seed),
            clock,
        }
    }

    /// Produce one unit: weighted dimension draw, then independent uniform
    /// draws for kind, price, and engine from that dimension's lists.
    ///
    /// Price is deliberately not correlated with kind; the catalog only
    /// promises plausible variety, not a pricing model.
    pub fn create(&mut self) -> Unit {
        let dimension = if self.rng.random_bool(self.three_d_weight) {
            Dimension::ThreeD
        } else {
            Dimension::TwoD
        };

        let set = self.catalog.templates(dimension);
        let kind = set.kinds[self.rng.random_range(0..set.kinds.len())].clone();
        let price = set.prices[self.rng.random_range(0..set.prices.len())];
        let engine = set.engines[self.rng.random_range(0..set.engines.len())].clone();

        let created_at = self.clock.now();
        let stamp = created_at.format("%Y%m%d%H%M%S").to_string();
        // Random u64 in hex plus a second-granularity timestamp. Uniqueness
        // is statistical: for a batch of 10^4 ids the collision probability
        // is about 2.7e-12.
        let id = format!("{ID_PREFIX}{:016x}_{stamp}", self.rng.random::<u64>());
        let name = format!(
            "Gamesmith_{}_{}_{stamp}",
            dimension.label(),
            kind.replace(' ', "_")
        );

        let identity = &self.config.identity;
        let unit = Unit {
            repo_url: format!(
                "https://github.com/{}/gamesmith/tree/main/games/{}",
                identity.public_handle, id
            ),
            payment: format!("PayPal ${price} to {}", identity.contact_email),
            contact: identity.contact_email.clone(),
            brand: identity.brand.clone(),
            id,
            name,
            dimension,
            kind,
            price,
            engine,
            created_at,
        };

        info!(
            id = %unit.id,
            dimension = %unit.dimension,
            kind = %unit.kind,
            price = unit.price,
            "unit created"
        );
        unit
    }
}
