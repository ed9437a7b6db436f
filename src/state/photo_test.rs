use super::*;
use crate::state::profile::profile;

fn photo() -> PhotoState {
    PhotoState::new(profile(), &AvatarConfig::default())
}

#[test]
fn starts_with_local_photo() {
    let state = photo();
    assert_eq!(state.stage(), PhotoStage::Primary);
    assert_eq!(state.src(), "/assets/profile.jpg");
}

#[test]
fn missing_photo_swaps_to_name_keyed_placeholder() {
    let mut state = photo();
    assert!(state.record_load_error());
    assert_eq!(state.stage(), PhotoStage::Placeholder);
    assert_eq!(
        state.src(),
        "https://ui-avatars.com/api/?name=Shakhzod+Gaipov&size=1024&background=0ea5e9&color=fff&bold=true"
    );
}

#[test]
fn failed_placeholder_swaps_to_initials() {
    let mut state = photo();
    state.record_load_error();
    assert!(state.record_load_error());
    assert_eq!(state.stage(), PhotoStage::Initials);
    assert!(state.src().starts_with("data:image/svg+xml"));
}

#[test]
fn initials_stage_is_terminal() {
    let mut state = photo();
    state.record_load_error();
    state.record_load_error();
    let src = state.src().to_owned();
    assert!(!state.record_load_error());
    assert_eq!(state.stage(), PhotoStage::Initials);
    assert_eq!(state.src(), src);
}

#[test]
fn same_profile_yields_same_sources() {
    assert_eq!(photo(), photo());
}
