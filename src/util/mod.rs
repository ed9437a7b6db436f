//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and string formatting
//! from component markup to improve reuse and testability.

pub mod avatar;
pub mod color;
pub mod dark_mode;
pub mod links;
pub mod metadata;
