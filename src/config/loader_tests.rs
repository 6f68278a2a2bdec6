//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

// ===== Paths =====

#[test]
fn default_config_path_contains_guidebook_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("guidebook") && path_str.ends_with("config.toml"),
        "Path should contain 'guidebook' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_guidebook_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("guidebook.log"),
        "Default log path should end with 'guidebook.log', got: {:?}",
        path
    );
}

// ===== load_config_file =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("guidebook_test_config.toml");
    fs::write(
        &config_path,
        r#"
tree_width_percent = 40
show_help_on_start = true
log_file_path = "/tmp/guidebook-test.log"
"#,
    )
    .expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.tree_width_percent, Some(40));
    assert_eq!(config.show_help_on_start, Some(true));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/guidebook-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("guidebook_test_invalid.toml");
    fs::write(&config_path, "tree_width_percent = [unclosed").expect("Failed to write");

    let result = load_config_file(&config_path);

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"");
    assert!(result.is_err(), "Unknown keys should be rejected");
}

#[test]
fn config_file_accepts_reserved_keybindings_table() {
    let config: ConfigFile = toml::from_str("[keybindings]\nquit = \"x\"").unwrap();
    assert!(config.keybindings.is_some());
}

// ===== merge_config =====

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let custom_path = PathBuf::from("/custom/path/to/app.log");
    let config_file = ConfigFile {
        tree_width_percent: Some(45),
        log_file_path: Some(custom_path.clone()),
        show_help_on_start: Some(true),
        keybindings: None,
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.tree_width_percent, 45);
    assert_eq!(resolved.log_file_path, custom_path);
    assert!(resolved.show_help_on_start);
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let resolved = merge_config(Some(ConfigFile::default()));
    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
fn merge_config_clamps_tree_width() {
    let resolved = merge_config(Some(ConfigFile {
        tree_width_percent: Some(99),
        ..ConfigFile::default()
    }));
    assert_eq!(resolved.tree_width_percent, 90);
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.tree_width_percent, DEFAULT_TREE_WIDTH_PERCENT);
    assert!(!config.show_help_on_start);
    assert!(!config.log_file_path.as_os_str().is_empty());
}

// ===== Env overrides =====

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(guidebook_tree_width)]
fn apply_env_overrides_respects_tree_width() {
    let _guard = EnvGuard::new("GUIDEBOOK_TREE_WIDTH");
    env::set_var("GUIDEBOOK_TREE_WIDTH", "55");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.tree_width_percent, 55);
}

#[test]
#[serial(guidebook_tree_width)]
fn apply_env_overrides_ignores_invalid_tree_width() {
    let _guard = EnvGuard::new("GUIDEBOOK_TREE_WIDTH");
    env::set_var("GUIDEBOOK_TREE_WIDTH", "wide");

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base);
}

#[test]
#[serial(guidebook_tree_width)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new("GUIDEBOOK_TREE_WIDTH");

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base, "Config should be unchanged when env var not set");
}

// ===== Precedence =====

#[test]
#[serial(guidebook_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new("GUIDEBOOK_CONFIG");
    let temp_dir = env::temp_dir();

    let explicit_path = temp_dir.join("guidebook_explicit.toml");
    fs::write(&explicit_path, "tree_width_percent = 20").expect("Failed to write explicit config");

    let env_path = temp_dir.join("guidebook_env.toml");
    fs::write(&env_path, "tree_width_percent = 70").expect("Failed to write env config");
    env::set_var("GUIDEBOOK_CONFIG", &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .unwrap()
        .unwrap();

    assert_eq!(
        config.tree_width_percent,
        Some(20),
        "Should use explicit path, not GUIDEBOOK_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(guidebook_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new("GUIDEBOOK_CONFIG");

    let env_path = env::temp_dir().join("guidebook_env_only.toml");
    fs::write(&env_path, "show_help_on_start = true").expect("Failed to write env config");
    env::set_var("GUIDEBOOK_CONFIG", &env_path);

    let config = load_config_with_precedence(None).unwrap().unwrap();

    assert_eq!(config.show_help_on_start, Some(true));
    fs::remove_file(env_path).ok();
}

// ===== CLI overrides =====

#[test]
fn apply_cli_overrides_sets_tree_width() {
    let result = apply_cli_overrides(ResolvedConfig::default(), Some(5));
    assert_eq!(result.tree_width_percent, 10, "CLI width is clamped");
}

#[test]
fn apply_cli_overrides_without_flags_is_identity() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None), base);
}
