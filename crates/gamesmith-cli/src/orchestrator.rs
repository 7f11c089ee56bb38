use tracing::{info, warn};

use gamesmith_core::Unit;
use gamesmith_generate::Generator;
use gamesmith_publish::PublishError;

/// Run `count` independent generation cycles, returning only the units
/// whose publish step succeeded.
///
/// A failed cycle is logged and skipped; its unit is dropped entirely and
/// any partial artifacts it left on disk are not rolled back.
pub fn run_cycles<F>(generator: &mut Generator, count: u32, mut publish: F) -> Vec<Unit>
where
    F: FnMut(&Unit) -> Result<(), PublishError>,
{
    let mut produced = Vec::with_capacity(count as usize);

    for cycle in 1..=count {
        info!(cycle, total = count, "creating unit");
        let unit = generator.create();
        match publish(&unit) {
            Ok(()) => {
                info!(
                    cycle,
                    id = %unit.id,
                    name = %unit.name,
                    price = unit.price,
                    "cycle completed"
                );
                produced.push(unit);
            }
            Err(err) => {
                warn!(cycle, id = %unit.id, error = %err, "cycle failed, unit dropped");
            }
        }
    }

    produced
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use std::path::PathBuf;

    use chrono::{TimeZone, Utc};

    use gamesmith_core::{Catalog, FactoryConfig, TemplateSet};
    use gamesmith_generate::{FixedClock, GenerateOptions, Generator};
    use gamesmith_publish::{Persister, Promoter};
    use gamesmith_report::Reporter;

    fn temp_out_dir(label: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("gamesmith_cli_{label}_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("create temp out dir");
        dir
    }

    fn seeded_generator(catalog: Catalog, three_d_weight: f64) -> Generator {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap());
        Generator::with_clock(
            catalog,
            FactoryConfig::default(),
            GenerateOptions {
                three_d_weight,
                seed: Some(17),
            },
            Box::new(clock),
        )
    }

    fn io_failure() -> PublishError {
        PublishError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }

    #[test]
    fn all_failed_cycles_yield_an_empty_batch() {
        let mut generator = seeded_generator(Catalog::default(), 0.6);
        let units = run_cycles(&mut generator, 5, |_| Err(io_failure()));
        assert!(units.is_empty());
    }

    #[test]
    fn a_failed_cycle_is_dropped_and_the_batch_continues() {
        let mut generator = seeded_generator(Catalog::default(), 0.6);
        let mut calls = 0;
        let units = run_cycles(&mut generator, 3, |_| {
            calls += 1;
            if calls == 1 { Err(io_failure()) } else { Ok(()) }
        });
        assert_eq!(units.len(), 2);
    }

    #[test]
    fn pinned_catalog_end_to_end() {
        // single-entry 2D lists, weight forced fully to 2D
        let catalog = Catalog {
            two_d: TemplateSet {
                kinds: vec!["Puzzle".to_string()],
                prices: vec![49],
                engines: vec!["X".to_string()],
            },
            three_d: Catalog::default().three_d,
        };
        catalog.validate().expect("catalog");

        let out_dir = temp_out_dir("e2e");
        let config = FactoryConfig::default();
        let persister = Persister::new(config.clone(), &out_dir);
        let promoter = Promoter::new(config.clone(), &out_dir);

        let mut generator = seeded_generator(catalog, 0.0);
        let units = run_cycles(&mut generator, 3, |unit| {
            persister.persist(unit)?;
            promoter.promote(unit)?;
            Ok(())
        });

        assert_eq!(units.len(), 3);
        for unit in &units {
            assert_eq!(unit.kind, "Puzzle");
            assert_eq!(unit.price, 49);
            assert_eq!(unit.engine, "X");
            assert!(out_dir.join("games").join(&unit.id).join("game_info.json").is_file());
            assert!(out_dir.join("promotion").join(&unit.id).join("promotion.json").is_file());
        }

        let reporter = Reporter::new(config, &out_dir);
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap();
        let paths = reporter.write_daily(&units, "run-e2e", now).expect("report");

        let report: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(&paths.report_path).expect("read report"),
        )
        .expect("parse report");
        assert_eq!(report["units_created"], 3);
        assert_eq!(report["total_value"], 147);
        assert_eq!(report["units_2d"], 3);
        assert_eq!(report["units_3d"], 0);
    }
}
