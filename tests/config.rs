use penstock::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.default_section, "nodes");
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.display.float_precision, 3);
    assert!(config.display.show_units);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 10;
    assert!(config.validate().is_err());

    // Reset and test invalid default section
    config.ui.sidebar_width = 28;
    config.ui.default_section = "pumps".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid float precision
    config.ui.default_section = "analysis".to_string();
    config.display.float_precision = 12;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_section = \"nodes\""));
    assert!(toml_str.contains("float_precision = 3"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
sidebar_width = 35

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.sidebar_width, 35);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.ui.default_section, "nodes"); // default value
    assert!(config.ui.mouse_enabled); // default value
    assert_eq!(config.display.float_precision, 3); // default value
    assert!(config.display.show_units); // default value
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.default_section, default_config.ui.default_section);
    assert_eq!(config.ui.sidebar_width, default_config.ui.sidebar_width);
    assert_eq!(config.display.float_precision, default_config.display.float_precision);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("penstock_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(temp_dir.exists());
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Penstock Configuration File"));
    assert!(content.contains("default_section = \"nodes\""));

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("penstock_test_invalid_config");
    let _ = fs::remove_dir_all(&temp_dir);
    fs::create_dir_all(&temp_dir).unwrap();

    let config_path = temp_dir.join("config.toml");
    fs::write(&config_path, "[ui]\nsidebar_width = 5\n").unwrap();

    assert!(Config::load_from_file(&config_path).is_err());

    let _ = fs::remove_dir_all(&temp_dir);
}
