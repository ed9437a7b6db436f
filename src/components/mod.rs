//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections as a projection of the static profile.
//! None of them hold state except the hero photo fallback and the theme toggle.

pub mod about;
pub mod contact_block;
pub mod credential_gallery;
pub mod education_timeline;
pub mod hero;
pub mod icon;
pub mod nav_bar;
pub mod site_footer;
