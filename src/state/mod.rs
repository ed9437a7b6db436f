//! Page state: the static profile record, theme mode, and photo fallback.

pub mod photo;
pub mod profile;
pub mod theme;
