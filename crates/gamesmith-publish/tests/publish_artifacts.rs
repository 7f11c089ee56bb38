use std::fs;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};

use gamesmith_core::{Catalog, FactoryConfig, Unit};
use gamesmith_generate::{FixedClock, GenerateOptions, Generator};
use gamesmith_publish::{Persister, Promoter};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("gamesmith_publish_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn sample_unit(seed: u64) -> Unit {
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap());
    let mut generator = Generator::with_clock(
        Catalog::default(),
        FactoryConfig::default(),
        GenerateOptions {
            three_d_weight: 0.6,
            seed: Some(seed),
        },
        Box::new(clock),
    );
    generator.create()
}

#[test]
fn persist_writes_all_three_artifacts() {
    let out_dir = temp_out_dir("artifacts");
    let persister = Persister::new(FactoryConfig::default(), &out_dir);
    let unit = sample_unit(5);

    let unit_dir = persister.persist(&unit).expect("persist unit");
    assert_eq!(unit_dir, out_dir.join("games").join(&unit.id));

    for file in ["game_info.json", "README.md", "game.py"] {
        assert!(unit_dir.join(file).is_file(), "missing {file}");
    }

    let info: Unit = serde_json::from_str(
        &fs::read_to_string(unit_dir.join("game_info.json")).expect("read game_info.json"),
    )
    .expect("parse game_info.json");
    assert_eq!(info.id, unit.id);
    assert_eq!(info.price, unit.price);
}

#[test]
fn persist_twice_is_byte_identical() {
    let out_dir = temp_out_dir("idempotent");
    let persister = Persister::new(FactoryConfig::default(), &out_dir);
    let unit = sample_unit(6);

    let dir = persister.persist(&unit).expect("first persist");
    let first = fs::read(dir.join("game_info.json")).expect("read first");
    let first_readme = fs::read(dir.join("README.md")).expect("read first readme");

    let dir = persister.persist(&unit).expect("second persist");
    let second = fs::read(dir.join("game_info.json")).expect("read second");
    let second_readme = fs::read(dir.join("README.md")).expect("read second readme");

    assert_eq!(first, second);
    assert_eq!(first_readme, second_readme);
}

#[test]
fn persist_propagates_io_failure() {
    let out_dir = temp_out_dir("blocked");
    // a plain file where the games directory should go
    fs::write(out_dir.join("games"), b"blocked").expect("block games dir");

    let persister = Persister::new(FactoryConfig::default(), &out_dir);
    persister
        .persist(&sample_unit(7))
        .expect_err("persist should fail when the games path is a file");
}

#[test]
fn promote_writes_kit_and_text_variants() {
    let out_dir = temp_out_dir("promo");
    let promoter = Promoter::new(FactoryConfig::default(), &out_dir);
    let unit = sample_unit(8);

    let kit = promoter.promote(&unit).expect("promote unit");
    let unit_dir = out_dir.join("promotion").join(&unit.id);

    let json: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(unit_dir.join("promotion.json")).expect("read promotion.json"),
    )
    .expect("parse promotion.json");
    assert_eq!(json["short"], serde_json::Value::String(kit.short.clone()));

    for (file, content) in [
        ("short_promo.txt", &kit.short),
        ("medium_promo.txt", &kit.medium),
        ("long_promo.txt", &kit.long),
    ] {
        let on_disk = fs::read_to_string(unit_dir.join(file)).expect("read promo variant");
        assert_eq!(&on_disk, content);
    }

    assert!(kit.long.contains(&unit.repo_url));
    assert!(kit.medium.contains(&unit.engine));
}
