//! CLI integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const CATALOG: &str = r#"[
  {
    "softwareId": 1,
    "softwareName": "NextCloud",
    "softwareDescription": "File hosting and sharing",
    "addedTime": 300,
    "updateTime": 30,
    "lastVersion": { "semVer": "27.0.0", "publicationTime": 1700000000000 },
    "userCount": 10,
    "referentCount": 3,
    "categories": ["storage"],
    "organizations": ["DINUM"],
    "environments": { "linux": true, "browser": true },
    "prerogatives": { "isPresentInSupportContract": true }
  },
  {
    "softwareId": 2,
    "softwareName": "OnlyOffice",
    "softwareDescription": "Collaborative office suite",
    "addedTime": 100,
    "updateTime": 10,
    "userCount": 5,
    "referentCount": 1,
    "categories": ["office"],
    "organizations": ["DINUM"]
  },
  {
    "softwareId": 3,
    "softwareName": "LibreOffice",
    "softwareDescription": "Desktop office suite",
    "addedTime": 200,
    "updateTime": 40,
    "lastVersion": { "semVer": "7.5.0", "publicationTime": 1690000000000 },
    "userCount": 30,
    "referentCount": 2,
    "categories": ["office"],
    "organizations": ["CNRS"],
    "environments": { "linux": true, "windows": true, "mac": true },
    "prerogatives": { "isTestable": true, "doRespectRgaa": true }
  },
  {
    "softwareId": 4,
    "softwareName": "Thunderbird",
    "softwareDescription": "Mail client",
    "addedTime": 200,
    "updateTime": 20,
    "userCount": 10,
    "referentCount": 3,
    "categories": ["email", "office"],
    "organizations": ["CNRS"],
    "environments": { "windows": true },
    "prerogatives": { "isTestable": true }
  }
]"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("catalog.json"), CATALOG).unwrap();
        Self { dir }
    }

    fn catalog(&self) -> PathBuf {
        self.dir.path().join("catalog.json")
    }

    /// 設定ファイルを無効化した `sill` コマンド
    fn sill(&self) -> Command {
        let mut cmd = Command::cargo_bin("sill").unwrap();
        cmd.env("SILL_CONFIG", self.dir.path().join("absent.toml"))
            .env_remove("SILL_CATALOG")
            .env("NO_COLOR", "1");
        cmd
    }

    fn sill_with_catalog(&self) -> Command {
        let mut cmd = self.sill();
        cmd.arg("--catalog").arg(self.catalog());
        cmd
    }
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

fn ids(value: &serde_json::Value) -> Vec<u64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["softwareId"].as_u64().unwrap())
        .collect()
}

// ========================================
// help
// ========================================

#[test]
fn root_help_lists_commands() {
    Command::cargo_bin("sill")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SILL software catalog CLI"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("facets"));
}

#[test]
fn search_help_lists_filter_flags() {
    Command::cargo_bin("sill")
        .unwrap()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--organization"))
        .stdout(predicate::str::contains("--prerogative"))
        .stdout(predicate::str::contains("--sort"));
}

// ========================================
// search
// ========================================

#[test]
fn search_table_prints_summary() {
    let fixture = Fixture::new();
    fixture
        .sill_with_catalog()
        .args(["search", "--category", "office"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LibreOffice"))
        .stdout(predicate::str::contains("3 of 4 software(s) matched"));
}

#[test]
fn search_simple_prints_ids_and_names() {
    let fixture = Fixture::new();
    fixture
        .sill_with_catalog()
        .args(["search", "--simple", "--organization", "CNRS"])
        .assert()
        .success()
        .stdout("3\tLibreOffice\n4\tThunderbird\n");
}

#[test]
fn search_json_applies_sort() {
    let fixture = Fixture::new();
    let json = stdout_json(fixture.sill_with_catalog().args([
        "search",
        "--json",
        "--category",
        "office",
        "--sort",
        "user-count-asc",
    ]));
    assert_eq!(ids(&json), vec![2, 4, 3]);
}

#[test]
fn search_json_projects_derived_prerogative() {
    let fixture = Fixture::new();
    let json = stdout_json(fixture.sill_with_catalog().args([
        "search",
        "--json",
        "--prerogative",
        "isInstallableOnUserTerminal",
        "--prerogative",
        "isTestable",
    ]));
    assert_eq!(ids(&json), vec![3, 4]);
    assert_eq!(json[0]["prerogatives"]["isInstallableOnUserTerminal"], true);
}

#[test]
fn search_is_fuzzy() {
    let fixture = Fixture::new();
    let json = stdout_json(
        fixture
            .sill_with_catalog()
            .args(["search", "--json", "--search", "nxtcld"]),
    );
    assert_eq!(ids(&json), vec![1]);
}

#[test]
fn catalog_from_env_var() {
    let fixture = Fixture::new();
    fixture
        .sill()
        .env("SILL_CATALOG", fixture.catalog())
        .args(["search", "--simple", "--environment", "browser"])
        .assert()
        .success()
        .stdout("1\tNextCloud\n");
}

#[test]
fn config_supplies_catalog_and_default_sort() {
    let fixture = Fixture::new();
    let config = fixture.dir.path().join("config.toml");
    fs::write(
        &config,
        "catalog = \"catalog.json\"\ndefault_sort = \"added time\"\n",
    )
    .unwrap();

    fixture
        .sill()
        .env("SILL_CONFIG", &config)
        .args(["search", "--simple"])
        .assert()
        .success()
        .stdout("1\tNextCloud\n3\tLibreOffice\n4\tThunderbird\n2\tOnlyOffice\n");
}

// ========================================
// facets / view / info
// ========================================

#[test]
fn facets_json_excludes_own_dimension() {
    let fixture = Fixture::new();
    let json = stdout_json(fixture.sill_with_catalog().args([
        "facets",
        "--json",
        "--dimension",
        "category",
        "--category",
        "storage",
        "--organization",
        "DINUM",
    ]));

    let count = |value: &str| {
        json.as_array()
            .unwrap()
            .iter()
            .find(|o| o["value"] == value)
            .map(|o| o["softwareCount"].as_u64().unwrap())
    };
    assert_eq!(count("office"), Some(1));
    assert_eq!(count("storage"), Some(1));
    assert_eq!(count("email"), Some(0));
}

#[test]
fn facets_table_prints_every_dimension() {
    let fixture = Fixture::new();
    fixture
        .sill_with_catalog()
        .arg("facets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Organization"))
        .stdout(predicate::str::contains("Prerogatives"))
        .stdout(predicate::str::contains("isInstallableOnUserTerminal"));
}

#[test]
fn view_outputs_list_and_options() {
    let fixture = Fixture::new();
    let json = stdout_json(
        fixture
            .sill_with_catalog()
            .args(["view", "--compact", "--organization", "CNRS"]),
    );
    assert_eq!(ids(&json["softwares"]), vec![3, 4]);
    assert!(json["options"]["organizations"].is_array());
}

#[test]
fn info_shows_single_software() {
    let fixture = Fixture::new();
    fixture
        .sill_with_catalog()
        .args(["info", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LibreOffice"))
        .stdout(predicate::str::contains("Respects RGAA"));
}

// ========================================
// errors
// ========================================

#[test]
fn invalid_environment_is_reported_with_code() {
    let fixture = Fixture::new();
    fixture
        .sill_with_catalog()
        .args(["search", "--environment", "amiga"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[VAL003]"));
}

#[test]
fn missing_catalog_file_is_reported() {
    let fixture = Fixture::new();
    fixture
        .sill()
        .arg("--catalog")
        .arg(fixture.dir.path().join("nope.json"))
        .arg("search")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[CAT001]"));
}

#[test]
fn no_catalog_configured_is_config_error() {
    let fixture = Fixture::new();
    fixture
        .sill()
        .arg("search")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[CFG001]"));
}

#[test]
fn unknown_software_id_is_reported() {
    let fixture = Fixture::new();
    fixture
        .sill_with_catalog()
        .args(["info", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[CAT003]"));
}

#[test]
fn verbose_errors_include_remediation() {
    let fixture = Fixture::new();
    fixture
        .sill_with_catalog()
        .args(["--verbose", "facets", "--dimension", "search"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[VAL002]"))
        .stderr(predicate::str::contains("Remediation"));
}
