use serde_json::Value;
use serial_test::serial;
use sequence_cli::run;
use std::io::Write;

fn reset_env() {
    unsafe {
        std::env::remove_var("SEQUENCE_CONFIG");
        std::env::remove_var("SEQUENCE_SEED");
        std::env::remove_var("SEQUENCE_DIFFICULTY");
        std::env::remove_var("SEQUENCE_AI_DELAY_MS");
    }
}

fn cfg_json() -> (i32, Option<Value>, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["sequence", "cfg"], &mut out, &mut err);
    let json = serde_json::from_slice(&out).ok();
    (code, json, String::from_utf8(err).unwrap())
}

#[test]
#[serial]
fn defaults_are_reported_with_their_source() {
    reset_env();
    let (code, json, _) = cfg_json();
    assert_eq!(code, 0);
    let json = json.expect("json");
    assert_eq!(json["difficulty"]["value"].as_str(), Some("medium"));
    assert_eq!(json["difficulty"]["source"].as_str(), Some("default"));
    assert_eq!(json["ai_delay_ms"]["value"].as_u64(), Some(700));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["player_one"]["value"].as_str(), Some("Player 1"));
}

#[test]
#[serial]
fn env_overrides_file() {
    reset_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "player_one = \"Ada\"\ndifficulty = \"easy\"\nseed = 5\nai_delay_ms = 0"
    )
    .unwrap();
    unsafe {
        std::env::set_var("SEQUENCE_CONFIG", file.path());
        std::env::set_var("SEQUENCE_SEED", "99");
    }
    let (code, json, _) = cfg_json();
    reset_env();

    assert_eq!(code, 0);
    let json = json.expect("json");
    assert_eq!(json["player_one"]["value"].as_str(), Some("Ada"));
    assert_eq!(json["player_one"]["source"].as_str(), Some("file"));
    assert_eq!(json["player_two"]["source"].as_str(), Some("default"));
    assert_eq!(json["difficulty"]["value"].as_str(), Some("easy"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(99));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["ai_delay_ms"]["value"].as_u64(), Some(0));
}

#[test]
#[serial]
fn invalid_values_exit_with_error() {
    reset_env();
    unsafe {
        std::env::set_var("SEQUENCE_AI_DELAY_MS", "20000");
    }
    let (code, _, stderr) = cfg_json();
    reset_env();
    assert_eq!(code, 2);
    assert!(stderr.contains("ai_delay_ms"));

    unsafe {
        std::env::set_var("SEQUENCE_DIFFICULTY", "expert");
    }
    let (code, _, stderr) = cfg_json();
    reset_env();
    assert_eq!(code, 2);
    assert!(stderr.contains("unknown difficulty"));
}

#[test]
#[serial]
fn unreadable_config_file_is_an_error() {
    reset_env();
    let dir = tempfile::tempdir().unwrap();
    unsafe {
        std::env::set_var("SEQUENCE_CONFIG", dir.path().join("missing.toml"));
    }
    let (code, _, stderr) = cfg_json();
    reset_env();
    assert_eq!(code, 2);
    assert!(stderr.contains("cannot read config file"));
}
