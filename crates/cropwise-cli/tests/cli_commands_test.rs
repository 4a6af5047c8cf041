//! End-to-end tests for the `cropwise` binary
//!
//! Each test runs in its own temporary directory with a small dataset and
//! an isolated result cache.

use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const DATASET: &str = r#"{
  "version": "test-1",
  "zones": [
    {
      "latRange": [8, 20],
      "lonRange": [70, 80],
      "recommendedCrops": [
        {"name": "Rice", "soilType": "Clayey", "climate": "Tropical", "waterRequirement": "High",
         "idealPH": [5.5, 7.0], "idealN": 80, "idealP": 40, "idealK": 40, "season": "Kharif"},
        {"name": "Wheat", "soilType": "Loamy", "climate": "Temperate", "waterRequirement": "Moderate",
         "idealPH": [6.0, 7.5], "idealN": 40, "idealP": 20, "idealK": 30}
      ]
    },
    {
      "latRange": [15, 24],
      "lonRange": [73, 81],
      "recommendedCrops": [
        {"name": "Maize", "soilType": "Loamy", "climate": "Warm", "waterRequirement": "Moderate",
         "idealPH": [5.5, 7.5], "idealN": 50, "idealP": 30, "idealK": 40}
      ]
    }
  ]
}"#;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("crops.json"), DATASET).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn run(&self, args: &[&str]) -> Output {
        let cache_dir: PathBuf = self.path().join("cache");
        Command::new(env!("CARGO_BIN_EXE_cropwise"))
            .current_dir(self.path())
            .env_remove("CROPWISE_DATASET")
            .env_remove("CROPWISE_CACHE_DIR")
            .env_remove("CROPWISE_FALLBACK")
            .arg("--dataset")
            .arg(self.path().join("crops.json"))
            .arg("--cache-dir")
            .arg(cache_dir)
            .args(args)
            .output()
            .expect("Failed to execute cropwise")
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        let output = self.run(&full);
        assert!(
            output.status.success(),
            "cropwise {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON")
    }
}

fn crop_names(data: &Value) -> Vec<String> {
    data["crops"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn zone_command_returns_overlapping_crops() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_json(&["zone", "--lat", "18", "--lon", "76"]);

    assert_eq!(out["status"], "success");
    assert_eq!(crop_names(&out["data"]), vec!["Rice", "Wheat", "Maize"]);
    assert_eq!(out["data"]["usedFallback"], false);
}

#[test]
fn zone_command_accepts_negative_coordinates() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_json(&["zone", "--lat", "-12.5", "--lon", "-45"]);
    assert!(crop_names(&out["data"]).is_empty());
}

#[test]
fn zone_command_requires_both_coordinates() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["zone", "--lon", "75"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("latitude"), "stderr was: {}", stderr);
}

#[test]
fn soil_command_defaults_and_fallback() {
    let sandbox = Sandbox::new();

    let out = sandbox.run_json(&["soil"]);
    assert_eq!(crop_names(&out["data"]), vec!["Maize"]);

    let out = sandbox.run_json(&["soil", "--ph", "3"]);
    assert_eq!(crop_names(&out["data"]), vec!["Rice", "Wheat"]);
    assert_eq!(out["data"]["usedFallback"], true);

    let out = sandbox.run_json(&["--fallback", "none", "soil", "--ph", "3"]);
    assert!(crop_names(&out["data"]).is_empty());
    assert_eq!(out["data"]["usedFallback"], false);
}

#[test]
fn last_command_shows_and_clears_saved_result() {
    let sandbox = Sandbox::new();

    let out = sandbox.run_json(&["last", "soil"]);
    assert!(out["data"].is_null());

    sandbox.run_json(&["soil", "--n", "48"]);

    let out = sandbox.run_json(&["last", "specialized"]);
    assert_eq!(out["data"]["datasetVersion"], "test-1");
    assert_eq!(crop_names(&out["data"]["recommendation"]), vec!["Maize"]);

    let out = sandbox.run_json(&["last", "soil", "--clear"]);
    assert_eq!(out["data"]["cleared"], true);
    assert!(!sandbox.path().join("cache").join("soil.json").exists());
}

#[test]
fn no_save_leaves_cache_untouched() {
    let sandbox = Sandbox::new();
    sandbox.run_json(&["zone", "--lat", "10", "--lon", "75", "--no-save"]);
    assert!(!sandbox.path().join("cache").join("zone.json").exists());
}

#[test]
fn catalog_lists_every_entry() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_json(&["catalog"]);

    let names: Vec<&str> =
        out["data"].as_array().unwrap().iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Rice", "Wheat", "Maize"]);
}

#[test]
fn validate_reports_every_issue() {
    let sandbox = Sandbox::new();
    let bad = sandbox.path().join("bad.json");
    std::fs::write(
        &bad,
        r#"{"zones": [{"latRange": [20, 8], "lonRange": [70, 80], "recommendedCrops": [
            {"name": "", "soilType": "x", "climate": "x", "waterRequirement": "x",
             "idealPH": [6, 7], "idealN": 0, "idealP": 20, "idealK": 30}]}]}"#,
    )
    .unwrap();

    let output = sandbox.run(&["--json", "validate", bad.to_str().unwrap()]);
    assert!(!output.status.success());

    let out: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(out["status"], "error");
    assert_eq!(out["data"]["valid"], false);

    let locations: Vec<&str> = out["data"]["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["location"].as_str().unwrap())
        .collect();
    assert_eq!(
        locations,
        vec![
            "zones[0].latRange",
            "zones[0].recommendedCrops[0].name",
            "zones[0].recommendedCrops[0].idealN"
        ]
    );
}

#[test]
fn validate_failure_is_reported_once() {
    let sandbox = Sandbox::new();
    let bad = sandbox.path().join("bad.json");
    std::fs::write(
        &bad,
        r#"{"zones": [{"latRange": [8, 20], "lonRange": [80, 70], "recommendedCrops": []}]}"#,
    )
    .unwrap();

    let output = sandbox.run(&["validate", bad.to_str().unwrap()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Dataset validation failed").count(), 1, "stderr was: {}", stderr);
    assert_eq!(stderr.matches("zones[0].lonRange").count(), 1, "stderr was: {}", stderr);
}

#[test]
fn validate_accepts_configured_dataset() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_json(&["validate"]);

    assert_eq!(out["data"]["valid"], true);
    assert_eq!(out["data"]["summary"]["zoneCount"], 2);
    assert_eq!(out["data"]["summary"]["version"], "test-1");
}

#[test]
fn irrigate_command() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_json(&["irrigate", "--moisture", "30", "--temperature", "28"]);

    assert_eq!(out["data"]["action"], "irrigate");
    assert_eq!(out["data"]["band"], "moderate");

    let output = sandbox.run(&["irrigate", "--moisture", "120"]);
    assert!(!output.status.success());
}

#[test]
fn config_command_reports_sources() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.path().join("cropwise.toml"), "fallback = \"none\"\n").unwrap();

    let out = sandbox.run_json(&["config"]);
    let rows = out["data"].as_array().unwrap();

    let row = |key: &str| rows.iter().find(|r| r["key"] == key).unwrap().clone();
    assert_eq!(row("fallback")["value"], "none");
    assert_eq!(row("fallback")["source"], "File");
    assert_eq!(row("dataset")["source"], "Cli");
}
