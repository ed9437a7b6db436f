#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn store_is_unavailable_in_non_csr_tests() {
    assert!(matches!(LocalStorageStore.read("theme"), Err(PreferenceError::Unavailable)));
    assert!(matches!(LocalStorageStore.write("theme", "dark"), Err(PreferenceError::Unavailable)));
}

#[test]
fn system_preference_reads_light_in_non_csr_tests() {
    assert!(!MediaQueryPreference.prefers_dark());
}

#[test]
fn init_without_browser_resolves_light() {
    let theme = init("theme");
    assert_eq!(theme.mode(), ThemeMode::Light);
}

#[test]
fn toggle_without_storage_still_flips() {
    let mut theme = init("theme");
    assert_eq!(theme.toggle(), ThemeMode::Dark);
    assert_eq!(theme.toggle(), ThemeMode::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    DocumentRoot.apply(ThemeMode::Dark);
    DocumentRoot.apply(ThemeMode::Light);
}
