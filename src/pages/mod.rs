//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site has a single page. It owns section ordering and delegates
//! rendering details to `components`.

pub mod home;
