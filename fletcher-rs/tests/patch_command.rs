//! Integration tests for the fletcher-rs CLI

use assert_cmd::Command;
use predicates::prelude::*;

fn plugin_json() -> &'static str {
    r#"{
        "name": "Base.esp",
        "projectiles": [
            {
                "key": { "plugin": "Base.esp", "id": 16 },
                "editor_id": "IronArrowProjectile",
                "kind": "Arrow",
                "speed": 3600.0,
                "gravity": 1.0,
                "impact_force": 0.44,
                "sound_level": "Normal",
                "flags": 128
            },
            {
                "key": { "plugin": "Base.esp", "id": 17 },
                "editor_id": "TrapDweBallista01",
                "kind": "Missile",
                "speed": 1800.0,
                "gravity": 0.0,
                "impact_force": 0.2,
                "sound_level": "Normal"
            }
        ],
        "ammo": [
            {
                "key": { "plugin": "Base.esp", "id": 32 },
                "editor_id": "Ammo_IronArrow",
                "flags": 4,
                "damage": 8.0,
                "value": 1,
                "weight": 0.0
            }
        ]
    }"#
}

#[test]
fn patch_writes_a_plugin_and_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let plugin_path = dir.path().join("Base.json");
    let output_path = dir.path().join("ArcheryPatch.json");
    std::fs::write(&plugin_path, plugin_json()).unwrap();

    Command::cargo_bin("fletcher-rs")
        .unwrap()
        .arg("patch")
        .arg(&plugin_path)
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Arrows:             1"))
        .stdout(predicate::str::contains("Trap projectiles:   1"));

    let patch: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(patch["name"], "ArcheryPatch.json");
    assert_eq!(patch["projectiles"].as_array().unwrap().len(), 2);

    let ballista = patch["projectiles"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["editor_id"] == "TrapDweBallista01")
        .unwrap();
    assert_eq!(ballista["speed"], 6400.0);
    assert_eq!(ballista["display_name"], "Ballista Trap Bolt");
}

#[test]
fn settings_file_drives_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let plugin_path = dir.path().join("Base.json");
    let settings_path = dir.path().join("settings.json");
    let output_path = dir.path().join("ArcheryPatch.json");
    std::fs::write(&plugin_path, plugin_json()).unwrap();
    // Arrows off, traps off: only the ammo table does work.
    std::fs::write(
        &settings_path,
        r#"{
            "arrows": { "enabled": false },
            "bolts": { "enabled": false },
            "misc": { "patch_traps": false },
            "arrow_ammo": { "enabled": true, "damage": 10.0 }
        }"#,
    )
    .unwrap();

    Command::cargo_bin("fletcher-rs")
        .unwrap()
        .arg("patch")
        .arg(&plugin_path)
        .arg("--settings")
        .arg(&settings_path)
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Arrow ammunition:   1"))
        .stdout(predicate::str::contains("Arrows:             0"));
}

#[test]
fn missing_settings_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let plugin_path = dir.path().join("Base.json");
    std::fs::write(&plugin_path, plugin_json()).unwrap();

    Command::cargo_bin("fletcher-rs")
        .unwrap()
        .arg("patch")
        .arg(&plugin_path)
        .arg("--settings")
        .arg(dir.path().join("nope.json"))
        .arg("--output")
        .arg(dir.path().join("out.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn settings_template_prints_every_group() {
    Command::cargo_bin("fletcher-rs")
        .unwrap()
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("disable_autoaim"))
        .stdout(predicate::str::contains("bloodcursed_ids"))
        .stdout(predicate::str::contains("arrow_ammo"));
}
