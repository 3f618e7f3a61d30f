//! End-to-end tests for the `cropplan` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `cropplan` invocation isolated from the host: no user config, no
/// dataset override, and a scratch working directory.
fn cropplan(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cropplan").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env_remove("CROPPLAN_DATASET")
        .env_remove("CROPPLAN_LOG_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn write_dataset(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("small.csv");
    fs::write(
        &path,
        "Name,Category,Season,Shelf Life (days)\n\
         Basil,Herb,Summer,20\n\
         Okra,Fruit,Summer,5\n\
         Kale,Leafy,Winter,7\n",
    )
    .unwrap();
    path
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    cropplan(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vegetable garden planner"))
        .stdout(predicate::str::contains("plan"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    cropplan(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_plan_summer_builtin() {
    let temp = TempDir::new().unwrap();
    cropplan(temp.path())
        .args([
            "plan", "--area", "10", "--season", "summer", "--people", "3", "-k", "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== GARDEN SUMMARY ==="))
        .stdout(predicate::str::contains("Season: Summer"))
        .stdout(predicate::str::contains(
            "Tomato (Fruit) - units=8, area=0.5, yield=2.2, days=80",
        ))
        .stdout(predicate::str::contains("Sweet Potato (Tuber) - units=8"))
        .stdout(predicate::str::contains("Sweet Corn (Grain) - units=8"))
        .stdout(predicate::str::contains("Total plants: 24"))
        .stdout(predicate::str::contains("Used area (m²): 10.00"))
        .stdout(predicate::str::contains("Total yield (kg): 37.84"))
        .stdout(predicate::str::contains("Yield per person (kg): 12.61"))
        .stdout(predicate::str::contains("Average growth time (days): 99.3"));
}

#[test]
fn test_plan_defaults_come_from_config() {
    let temp = TempDir::new().unwrap();
    cropplan(temp.path())
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Season: Spring"))
        .stdout(predicate::str::contains("Total area (m²): 20"))
        .stdout(predicate::str::contains("People: 2"))
        .stdout(predicate::str::contains("Potato (Tuber) - units=11"))
        .stdout(predicate::str::contains("Total plants: 51"))
        .stdout(predicate::str::contains("Total yield (kg): 41.25"));
}

#[test]
fn test_plan_exclusion_promotes_next_plant() {
    let temp = TempDir::new().unwrap();
    cropplan(temp.path())
        .args([
            "plan", "-a", "10", "-s", "summer", "-p", "3", "-k", "3", "--exclude", "TOMATO",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Excluded plants: tomato"))
        .stdout(predicate::str::contains("Zucchini (Fruit) - units=8"))
        .stdout(predicate::str::contains("Tomato (Fruit)").not());
}

#[test]
fn test_plan_winter_fits_partial_round() {
    let temp = TempDir::new().unwrap();
    cropplan(temp.path())
        .args(["plan", "-a", "5", "-s", "Winter", "-p", "1", "-k", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Barley (Grain) - units=8"))
        .stdout(predicate::str::contains("Broad Bean (Legume) - units=7"))
        .stdout(predicate::str::contains("Used area (m²): 4.85"))
        .stdout(predicate::str::contains("Total yield (kg): 11.94"));
}

#[test]
fn test_plan_zero_area_reports_no_plants() {
    let temp = TempDir::new().unwrap();
    cropplan(temp.path())
        .args(["plan", "--area", "0", "--season", "summer"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No plants found for this configuration.",
        ))
        .stdout(predicate::str::contains("Plants chosen").not());
}

#[test]
fn test_plan_json_output() {
    let temp = TempDir::new().unwrap();
    let output = cropplan(temp.path())
        .args([
            "plan", "-a", "10", "-s", "summer", "-p", "3", "-k", "3", "--format", "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["request"]["season"], "summer");
    assert_eq!(plan["selections"][0]["name"], "Tomato");
    assert_eq!(plan["selections"][0]["units"], 8);
    assert_eq!(plan["stats"]["total_plants"], 24);
    assert!(plan.get("empty_reason").is_none());
}

#[test]
fn test_plan_json_for_empty_plan_carries_reason() {
    let temp = TempDir::new().unwrap();
    let dataset = write_dataset(temp.path());
    let output = cropplan(temp.path())
        .args(["--output-format", "json", "plan", "-s", "autumn", "--dataset"])
        .arg(&dataset)
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["empty_reason"], "no_season_match");
    assert_eq!(plan["stats"]["total_plants"], 0);
}

#[test]
fn test_plan_with_custom_dataset() {
    let temp = TempDir::new().unwrap();
    let dataset = write_dataset(temp.path());
    cropplan(temp.path())
        .args(["plan", "--area", "1", "--season", "summer", "--dataset"])
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("Okra (Fruit) - units=1"))
        .stdout(predicate::str::contains("Basil (Herb) - units=3"))
        .stdout(predicate::str::contains("  Health: N/A"));
}

#[test]
fn test_dataset_from_environment() {
    let temp = TempDir::new().unwrap();
    let dataset = write_dataset(temp.path());
    cropplan(temp.path())
        .env("CROPPLAN_DATASET", &dataset)
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout("Basil\nKale\nOkra\n");
}

#[test]
fn test_dataset_from_config_file() {
    let temp = TempDir::new().unwrap();
    let dataset = write_dataset(temp.path());
    let config = temp.path().join("custom.toml");
    fs::write(
        &config,
        format!(
            "[planner]\nseason = \"Winter\"\narea = 2.0\n\n[data]\npath = {:?}\n",
            dataset.display().to_string()
        ),
    )
    .unwrap();

    cropplan(temp.path())
        .args(["--config"])
        .arg(&config)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Season: Winter"))
        .stdout(predicate::str::contains("Kale (Leafy) - units=10"));
}

#[test]
fn test_info_shows_every_field() {
    let temp = TempDir::new().unwrap();
    cropplan(temp.path())
        .args(["info", "swiss", "chard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Information about Swiss Chard"))
        .stdout(predicate::str::contains("Sicily"))
        .stdout(predicate::str::contains("Magnesium and vitamin K"))
        .stdout(predicate::str::contains("5 days"));
}

#[test]
fn test_info_json() {
    let temp = TempDir::new().unwrap();
    let output = cropplan(temp.path())
        .args(["info", "CARROT", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["name"], "Carrot");
    assert_eq!(record["origin"], "Central Asia");
    assert_eq!(record["shelf_life_days"], 28.0);
}

#[test]
fn test_list_filters_by_season_and_category() {
    let temp = TempDir::new().unwrap();
    cropplan(temp.path())
        .args(["list", "--season", "summer", "--category", "fruit", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,category,season\n"))
        .stdout(predicate::str::contains("Tomato,Fruit,Summer"))
        .stdout(predicate::str::contains("Pumpkin").not());
}

#[test]
fn test_list_json_is_sorted() {
    let temp = TempDir::new().unwrap();
    let dataset = write_dataset(temp.path());
    let output = cropplan(temp.path())
        .args(["list", "--format", "json", "--dataset"])
        .arg(&dataset)
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Basil", "Kale", "Okra"]);
}

#[test]
fn test_init_local_then_config_get() {
    let temp = TempDir::new().unwrap();
    cropplan(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join("cropplan.toml")).unwrap();
    assert!(written.contains("[planner]"));
    assert!(written.contains("season = \"Spring\""));

    cropplan(temp.path())
        .args(["config", "get", "planner.max_categories"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_local_config_is_picked_up() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("cropplan.toml"),
        "[planner]\nseason = \"Autumn\"\n",
    )
    .unwrap();

    cropplan(temp.path())
        .args(["config", "get", "planner.season"])
        .assert()
        .success()
        .stdout("Autumn\n");
}

#[test]
fn test_environment_overrides_config() {
    let temp = TempDir::new().unwrap();
    cropplan(temp.path())
        .env("CROPPLAN_PLANNER__PEOPLE", "7")
        .args(["config", "get", "planner.people"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    cropplan(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cropplan"));
}

#[test]
fn test_log_file_receives_events() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("logs").join("cropplan.log");
    cropplan(temp.path())
        .args(["-v", "--log-file"])
        .arg(&log)
        .args(["plan", "-a", "2", "-s", "summer"])
        .assert()
        .success();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Garden planned"));
}
