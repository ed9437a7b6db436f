use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_nothing_set() {
    let cfg = SiteConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.theme_storage_key, "theme");
    assert_eq!(cfg.avatar.size, 1024);
    assert_eq!(cfg.avatar.background, "0ea5e9");
    assert_eq!(cfg.avatar.color, "fff");
    assert!(cfg.avatar.bold);
}

#[test]
fn from_lookup_applies_overrides() {
    let cfg = SiteConfig::from_lookup(lookup_from(&[
        ("PORTFOLIO_THEME_KEY", " portfolio_theme "),
        ("PORTFOLIO_AVATAR_SIZE", "256"),
        ("PORTFOLIO_AVATAR_BACKGROUND", "#112233"),
        ("PORTFOLIO_AVATAR_COLOR", "000"),
        ("PORTFOLIO_AVATAR_BASE_URL", "https://avatars.example.com/api/"),
    ]))
    .unwrap();

    assert_eq!(cfg.theme_storage_key, "portfolio_theme");
    assert_eq!(cfg.avatar.size, 256);
    assert_eq!(cfg.avatar.background, "112233");
    assert_eq!(cfg.avatar.color, "000");
    assert_eq!(cfg.avatar.base_url, "https://avatars.example.com/api/");
}

#[test]
fn from_lookup_rejects_empty_theme_key() {
    let err = SiteConfig::from_lookup(lookup_from(&[("PORTFOLIO_THEME_KEY", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { var: "PORTFOLIO_THEME_KEY" });
}

#[test]
fn from_lookup_rejects_out_of_range_size() {
    for raw in ["0", "4096", "big"] {
        let err = SiteConfig::from_lookup(lookup_from(&[("PORTFOLIO_AVATAR_SIZE", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSize { .. }), "{raw}: {err}");
    }
}

#[test]
fn from_lookup_rejects_bad_color() {
    let err = SiteConfig::from_lookup(lookup_from(&[("PORTFOLIO_AVATAR_COLOR", "white")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidColor { var: "PORTFOLIO_AVATAR_COLOR", value: "white".to_owned() });
}

#[test]
fn from_lookup_rejects_sign_prefixed_color() {
    let err = SiteConfig::from_lookup(lookup_from(&[("PORTFOLIO_AVATAR_BACKGROUND", "+fffff")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidColor { var: "PORTFOLIO_AVATAR_BACKGROUND", .. }), "{err}");
}

#[test]
fn from_lookup_rejects_non_http_base_url() {
    for raw in ["ftp://example.com/", "not a url", "mailto:someone@example.com"] {
        let err = SiteConfig::from_lookup(lookup_from(&[("PORTFOLIO_AVATAR_BASE_URL", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }), "{raw}: {err}");
    }
}

#[test]
fn error_messages_name_the_variable() {
    let err = ConfigError::InvalidSize { var: "PORTFOLIO_AVATAR_SIZE", value: "0".to_owned() };
    assert_eq!(err.to_string(), "PORTFOLIO_AVATAR_SIZE must be an integer between 16 and 1024, got '0'");
}

#[test]
fn from_build_env_produces_usable_config() {
    let cfg = SiteConfig::from_build_env();
    assert!(!cfg.theme_storage_key.is_empty());
    assert!(cfg.avatar.size <= MAX_AVATAR_SIZE);
}
