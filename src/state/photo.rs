//! Profile photo source with a bounded fallback chain.
//!
//! DESIGN
//! ======
//! Each load error advances one stage: local photo, then the generated remote
//! avatar, then an inline initials SVG. The last stage never fails to load and
//! never advances, so `error` events cannot loop.

#[cfg(test)]
#[path = "photo_test.rs"]
mod photo_test;

use crate::config::AvatarConfig;
use crate::state::profile::Profile;
use crate::util::avatar::{initials_data_uri, placeholder_url};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhotoStage {
    #[default]
    Primary,
    Placeholder,
    Initials,
}

/// Resolved image sources for the hero photo plus the active stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoState {
    stage: PhotoStage,
    primary: String,
    placeholder: String,
    initials: String,
}

impl PhotoState {
    pub fn new(profile: &Profile, avatar: &AvatarConfig) -> Self {
        Self {
            stage: PhotoStage::Primary,
            primary: profile.assets.profile_photo.to_owned(),
            placeholder: placeholder_url(profile.short_name, avatar),
            initials: initials_data_uri(profile.short_name, avatar),
        }
    }

    pub fn stage(&self) -> PhotoStage {
        self.stage
    }

    /// Image source for the current stage.
    pub fn src(&self) -> &str {
        match self.stage {
            PhotoStage::Primary => &self.primary,
            PhotoStage::Placeholder => &self.placeholder,
            PhotoStage::Initials => &self.initials,
        }
    }

    /// Advance after the current source failed to load.
    ///
    /// Returns `true` when the source changed.
    pub fn record_load_error(&mut self) -> bool {
        let next = match self.stage {
            PhotoStage::Primary => PhotoStage::Placeholder,
            PhotoStage::Placeholder | PhotoStage::Initials => PhotoStage::Initials,
        };
        let changed = next != self.stage;
        if changed {
            log::debug!("profile photo failed to load, falling back to {next:?}");
        }
        self.stage = next;
        changed
    }
}
