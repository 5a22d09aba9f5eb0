use std::io::Cursor;

use tempfile::tempdir;
use tradefee_cli::config::Config;
use tradefee_cli::interactive::run_interactive;
use tradefee_cli::{build_state, AppState};

fn bundled_state() -> AppState {
    build_state(&Config::default()).unwrap()
}

fn run(state: &AppState, script: &str) -> String {
    let mut out = Vec::new();
    run_interactive(&state.lookup, Cursor::new(script.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn search_select_and_close() {
    let state = bundled_state();
    let output = run(&state, ":open\nrestaurant\n:select 1\n:close\n:quit\n");

    assert!(output.contains("  1. Full-Service Restaurant"));
    assert!(output.contains("> Full-Service Restaurant"));
    assert!(output.contains("Restaurant with up to 20 customer seats"));
    assert!(output.contains("25,000"));

    // The last page rendered is the idle page with an empty fee table.
    let last_page = output.rsplit("Business Activity Information").next().unwrap();
    assert!(last_page.contains("[ Search or select activity ]"));
    assert!(!last_page.contains("25,000"));
}

#[test]
fn activity_without_fee_rows_renders_empty_table() {
    let state = bundled_state();
    let output = run(&state, ":open\nmobile food\n:select 1\n");

    let last_page = output.rsplit("Business Activity Information").next().unwrap();
    assert!(last_page.contains("> Mobile Food Vendor"));
    let table = last_page.split("Finance Act").nth(1).unwrap();
    assert_eq!(table.trim().lines().count(), 2);
}

#[test]
fn typing_before_open_is_ignored() {
    let state = bundled_state();
    let output = run(&state, "hotel\n:select 1\n");

    assert!(output.contains("Type :open to start searching."));
    assert!(output.contains("No match number 1 to select."));
}

#[test]
fn data_dir_overrides_bundled_fees() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("finance_act.json"),
        r#"[{ "code": "900", "NAICS": "721110", "des": "Override hotel",
              "trade": 1234567, "fire": 0, "food": 0, "health": 0, "pest": 0 }]"#,
    )
    .unwrap();
    let config = Config {
        data_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let state = build_state(&config).unwrap();

    let output = run(&state, ":open\nhotel\n:select 1\n");
    assert!(output.contains("Override hotel"));
    assert!(output.contains("1,234,567"));
}
