// File: tests/cli_commands.rs
use std::fs;
use std::sync::Arc;
use tripdeck::cli::{Command, run_command};
use tripdeck::config::Config;
use tripdeck::context::{AppContext, SharedContext, TestContext};
use tripdeck::model::DayRecord;
use tripdeck::storage::LocalStorage;

fn run(ctx: &Arc<TestContext>, cfg: &Config, command: Command) -> String {
    let shared: SharedContext = ctx.clone();
    let mut out = Vec::new();
    run_command(&command, shared, cfg, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_parse_given_seed_file() {
    let ctx = Arc::new(TestContext::new());
    let seed = ctx.root.join("trip.json");
    fs::write(
        &seed,
        r#"{ "itinerary": { "2025-11-07": { "day": "Viernes", "items": ["17:16 – Llegada a MSY"] } } }"#,
    )
    .unwrap();

    let out = run(&ctx, &Config::default(), Command::Parse(Some(seed)));
    let days: Vec<DayRecord> = serde_json::from_str(&out).unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].activities[0].time.as_deref(), Some("17:16"));
}

#[test]
fn test_parse_missing_file_is_an_error() {
    let ctx = Arc::new(TestContext::new());
    let shared: SharedContext = ctx.clone();
    let mut out = Vec::new();
    let missing = ctx.root.join("nope.json");
    let err = run_command(
        &Command::Parse(Some(missing)),
        shared,
        &Config::default(),
        &mut out,
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("nope.json"));
}

#[test]
fn test_export_prefers_persisted_days() {
    let ctx = Arc::new(TestContext::new());
    let edited = vec![DayRecord {
        date: "2025-11-07".to_string(),
        label: "Solo un día".to_string(),
        activities: vec![],
    }];
    LocalStorage::save_days(ctx.as_ref(), &edited).unwrap();

    let out = run(&ctx, &Config::default(), Command::Export);
    let days: Vec<DayRecord> = serde_json::from_str(&out).unwrap();
    assert_eq!(days, edited);
}

#[test]
fn test_reset_rewrites_days_file() {
    let ctx = Arc::new(TestContext::new());
    let path = ctx.get_days_path().unwrap();
    fs::write(&path, "garbage").unwrap();

    let out = run(&ctx, &Config::default(), Command::Reset);
    assert!(out.starts_with("Reset "));

    let days = LocalStorage::load_days(ctx.as_ref()).unwrap().unwrap();
    assert!(!days.is_empty());
}
