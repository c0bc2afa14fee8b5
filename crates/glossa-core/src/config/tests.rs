use super::*;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.glossa.log_level, "info");
    assert_eq!(cfg.locale.default_language, Language::En);
    assert_eq!(cfg.locale.languages, vec![Language::Hr]);
    assert!(!cfg.locale.strict_shape);
    assert!(!cfg.interpolation.separate_adjacent_slots);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let cfg: Config = toml::from_str("").unwrap();
    assert_eq!(cfg.locale.dir, "~/.glossa/locales");
    assert_eq!(cfg.locale.default_language, Language::En);
}

#[test]
fn test_full_toml() {
    let toml_str = r#"
        [glossa]
        log_level = "debug"

        [locale]
        dir = "/srv/locales"
        default_language = "hr"
        languages = ["en"]
        strict_shape = true

        [interpolation]
        separate_adjacent_slots = true
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.glossa.log_level, "debug");
    assert_eq!(cfg.locale.dir_path(), PathBuf::from("/srv/locales"));
    assert_eq!(cfg.locale.default_language, Language::Hr);
    assert_eq!(cfg.locale.languages, vec![Language::En]);
    assert!(cfg.locale.strict_shape);
    assert!(cfg.interpolation.separate_adjacent_slots);
}

#[test]
fn test_unknown_language_rejected() {
    let toml_str = r#"
        [locale]
        default_language = "xx"
    "#;
    assert!(toml::from_str::<Config>(toml_str).is_err());
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let cfg = load("/nonexistent/__glossa_config__.toml").unwrap();
    assert_eq!(cfg.glossa.log_level, "info");
}

#[test]
fn test_load_invalid_file_is_config_error() {
    let tmp = std::env::temp_dir().join("__glossa_test_bad_config__.toml");
    std::fs::write(&tmp, "[locale\nbroken").unwrap();

    let err = load(tmp.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, GlossaError::Config(_)));

    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_shellexpand_leaves_absolute_paths() {
    assert_eq!(shellexpand("/etc/glossa"), "/etc/glossa");
}
