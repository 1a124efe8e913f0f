//! tests/config_tests.rs
//! Config file parsing, env overrides and strategy resolution

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use pass_export::config::expand_home;
use pass_export::consts::{CONFIG_ENV_VAR, STORE_DIR_ENV_VAR};
use pass_export::core::strategy::{DepthBasedConfig, FlatConfig, HeuristicConfig};
use pass_export::{Config, ExportError, NameFrom, StrategyConfig, StrategyKind, UsernameSource};
use serial_test::serial;
use tempfile::tempdir;

#[test]
fn defaults_match_pass_layout() {
    let conf = Config::default();
    assert_eq!(conf.store.dir, PathBuf::from("~/.password-store"));
    assert_eq!(conf.store.suffix, ".gpg");
    assert_eq!(conf.output.path, PathBuf::from("bitwarden_smart_import.csv"));
    assert_eq!(conf.parsing.strategy, "heuristic");
    assert_eq!(
        conf.parsing.resolve().unwrap(),
        StrategyConfig::Heuristic(HeuristicConfig::default())
    );
}

#[test]
fn empty_file_is_all_defaults() {
    let conf = Config::from_toml_str("").unwrap();
    assert_eq!(conf.parsing.strategy, "heuristic");
    assert_eq!(conf.parsing.flat, FlatConfig::default());
    assert_eq!(conf.parsing.depth_based, DepthBasedConfig::default());
}

#[test]
fn full_file_resolves_depth_based() {
    let conf = Config::from_toml_str(
        r#"
        [store]
        dir = "/srv/pass"
        suffix = ".asc"

        [output]
        path = "out.csv"

        [parsing]
        strategy = "depth-based"

        [parsing.depth_based]
        folder_levels = [0, 1]
        name_level = 2
        username_from = "parent_dir"
        "#,
    )
    .unwrap();

    assert_eq!(conf.store.dir, PathBuf::from("/srv/pass"));
    assert_eq!(conf.store.suffix, ".asc");
    assert_eq!(conf.output.path, PathBuf::from("out.csv"));

    match conf.parsing.resolve().unwrap() {
        StrategyConfig::DepthBased(depth) => {
            assert_eq!(depth.folder_levels, vec![0, 1]);
            assert_eq!(depth.name_level, 2);
            assert_eq!(depth.username_from, UsernameSource::ParentDir);
            assert_eq!(depth.url_pattern, DepthBasedConfig::default().url_pattern);
        }
        other => panic!("expected depth-based, got {other:?}"),
    }
}

#[test]
fn inactive_strategy_options_are_ignored() {
    let conf = Config::from_toml_str(
        r#"
        [parsing]
        strategy = "flat"

        [parsing.heuristic]
        min_folder_depth = 1
        username_from = "none"

        [parsing.flat]
        name_from = "filename"
        "#,
    )
    .unwrap();

    assert_eq!(
        conf.parsing.resolve().unwrap(),
        StrategyConfig::Flat(FlatConfig {
            default_folder: "Imported".into(),
            name_from: NameFrom::Filename,
        })
    );
}

#[test]
fn unknown_strategy_is_a_configuration_error() {
    let conf = Config::from_toml_str("[parsing]\nstrategy = \"smart\"\n").unwrap();
    let err = conf.parsing.resolve().unwrap_err();
    assert!(matches!(err, ExportError::UnknownStrategy(ref s) if s == "smart"));
    assert!(err.is_configuration());
}

#[test]
fn strategy_names_round_trip() {
    for kind in StrategyKind::ALL {
        assert_eq!(kind.as_str().parse::<StrategyKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.as_str());
    }
    assert!("Heuristic".parse::<StrategyKind>().is_err());
    assert!("depth_based".parse::<StrategyKind>().is_err());
}

#[test]
fn wrong_value_type_is_rejected() {
    let err = Config::from_toml_str("[parsing.depth_based]\nname_level = \"one\"\n").unwrap_err();
    assert!(matches!(err, ExportError::Config(_)));
}

#[test]
fn misspelled_keys_are_rejected() {
    for text in [
        "[parsing]\nstrateg = \"flat\"\n",
        "[parsing.heuristic]\nurl_detection_regex = 'x'\n",
        "[parsing.heuristic]\nmin_folder_dept = 1\n",
        "[parsing.depth_based]\nfolder_level = [0]\n",
        "[parsing.flat]\nfolder = \"Old\"\n",
        "[store]\ndirectory = \"/tmp/store\"\n",
        "[output]\nfile = \"out.csv\"\n",
        "[parser]\nstrategy = \"flat\"\n",
    ] {
        let err = Config::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ExportError::Config(_)), "accepted: {text}");
    }
}

#[test]
fn unknown_username_source_is_rejected() {
    let err =
        Config::from_toml_str("[parsing.heuristic]\nusername_from = \"email\"\n").unwrap_err();
    assert!(matches!(err, ExportError::Config(_)));
}

#[test]
fn tilde_expands_to_home() {
    if let Some(home) = dirs::home_dir() {
        assert_eq!(
            expand_home(Path::new("~/.password-store")),
            home.join(".password-store")
        );
    }
    assert_eq!(expand_home(Path::new("/abs/store")), PathBuf::from("/abs/store"));
    assert_eq!(expand_home(Path::new("~bob/store")), PathBuf::from("~bob/store"));
}

#[test]
#[serial]
fn load_reads_explicit_file() {
    env::remove_var(CONFIG_ENV_VAR);
    env::remove_var(STORE_DIR_ENV_VAR);

    let dir = tempdir().unwrap();
    let path = dir.path().join("export.toml");
    fs::write(&path, "[parsing]\nstrategy = \"flat\"\n").unwrap();

    let conf = Config::load(Some(&path)).unwrap();
    assert_eq!(conf.parsing.strategy, "flat");
}

#[test]
#[serial]
fn load_missing_explicit_file_fails() {
    env::remove_var(CONFIG_ENV_VAR);
    let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}

#[test]
#[serial]
fn load_honors_env_config_and_store_dir() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("env.toml");
    fs::write(&path, "[store]\ndir = \"/from/file\"\n[parsing]\nstrategy = \"depth-based\"\n").unwrap();

    env::set_var(CONFIG_ENV_VAR, &path);
    env::set_var(STORE_DIR_ENV_VAR, "/from/env");
    let conf = Config::load(None);
    env::remove_var(CONFIG_ENV_VAR);
    env::remove_var(STORE_DIR_ENV_VAR);

    let conf = conf.unwrap();
    assert_eq!(conf.parsing.strategy, "depth-based");
    assert_eq!(conf.store.dir, PathBuf::from("/from/env"));
}

#[test]
#[serial]
fn load_without_any_file_uses_defaults() {
    env::remove_var(CONFIG_ENV_VAR);
    env::remove_var(STORE_DIR_ENV_VAR);
    let conf = Config::load(None).unwrap();
    assert_eq!(conf.parsing.strategy, "heuristic");
    assert_eq!(conf.store.dir, PathBuf::from("~/.password-store"));
}
