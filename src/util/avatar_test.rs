use super::*;

#[test]
fn placeholder_url_matches_service_format() {
    assert_eq!(
        placeholder_url("Shakhzod Gaipov", &AvatarConfig::default()),
        "https://ui-avatars.com/api/?name=Shakhzod+Gaipov&size=1024&background=0ea5e9&color=fff&bold=true"
    );
}

#[test]
fn placeholder_url_is_deterministic_per_name() {
    let cfg = AvatarConfig::default();
    assert_eq!(placeholder_url("Ada Lovelace", &cfg), placeholder_url("Ada Lovelace", &cfg));
    assert_ne!(placeholder_url("Ada Lovelace", &cfg), placeholder_url("Grace Hopper", &cfg));
}

#[test]
fn placeholder_url_encodes_reserved_characters() {
    let url = placeholder_url("A&B O'Neil", &AvatarConfig::default());
    assert!(url.contains("name=A%26B+O%27Neil&"), "{url}");
}

#[test]
fn placeholder_url_respects_config() {
    let cfg = AvatarConfig { size: 128, bold: false, ..AvatarConfig::default() };
    let url = placeholder_url("Shakhzod Gaipov", &cfg);
    assert!(url.contains("size=128"));
    assert!(url.ends_with("bold=false"));
}

#[test]
fn initials_take_first_and_last_word() {
    assert_eq!(initials("Shakhzod Gaipov"), "SG");
    assert_eq!(initials("Shakhzod Gaipov Shavkat ugli"), "SU");
    assert_eq!(initials("  cher "), "C");
    assert_eq!(initials(""), "");
}

#[test]
fn initials_data_uri_is_svg_with_initials() {
    let uri = initials_data_uri("Shakhzod Gaipov", &AvatarConfig::default());
    let body = uri.strip_prefix("data:image/svg+xml;charset=utf-8,").unwrap();
    assert!(!body.contains(' '));
    assert!(!body.contains('+'));
    assert!(uri.contains("%3ESG%3C%2Ftext%3E"), "{uri}");
    assert!(uri.contains("%230ea5e9"));
}

#[test]
fn initials_data_uri_is_deterministic() {
    let cfg = AvatarConfig::default();
    assert_eq!(initials_data_uri("Shakhzod Gaipov", &cfg), initials_data_uri("Shakhzod Gaipov", &cfg));
}
