//! Theme mode resolution, application, and persistence.
//!
//! DESIGN
//! ======
//! `ThemeController` is the only owner of the active `ThemeMode`. Storage,
//! the system color-scheme signal, and the styled document root are reached
//! through small traits so the browser bindings in `util::dark_mode` and the
//! in-memory doubles used by tests drive the same code path.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failed read resolves like a missing value and
//! a failed write still flips the applied mode; both are logged, never raised.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Display mode applied to the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Interpret a stored preference value.
    ///
    /// An empty string counts as no stored choice. Any other value that is not
    /// `"dark"` resolves to light.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "dark" => Some(Self::Dark),
            _ => Some(Self::Light),
        }
    }
}

/// Failure reported by a preference store.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("failed to read preference `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write preference `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Client-scoped key-value storage for the theme choice.
pub trait PreferenceStore {
    /// Read a stored value. `Ok(None)` means no prior choice.
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Environment-level "prefers dark" signal.
pub trait SystemPreference {
    fn prefers_dark(&self) -> bool;
}

/// Styling scope that switches every descendant rule between modes.
///
/// Implementations must be idempotent: applying the mode already shown is a
/// no-op.
pub trait ThemeSurface {
    fn apply(&self, mode: ThemeMode);
}

/// Resolve the startup mode from the stored choice and the system signal.
///
/// The stored choice always wins. The system signal is only queried when no
/// usable stored value exists.
pub fn resolve_initial_mode<S, P>(store: &S, system: &P, key: &str) -> ThemeMode
where
    S: PreferenceStore + ?Sized,
    P: SystemPreference + ?Sized,
{
    let stored = match store.read(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("theme preference read failed, using system preference: {e}");
            None
        }
    };

    if let Some(mode) = stored.as_deref().and_then(ThemeMode::from_stored) {
        log::debug!("theme resolved from stored preference: {}", mode.as_str());
        return mode;
    }

    let mode = if system.prefers_dark() { ThemeMode::Dark } else { ThemeMode::Light };
    log::debug!("theme resolved from system preference: {}", mode.as_str());
    mode
}

/// Single source of truth for the session's display mode.
///
/// The system signal is only consulted during `init`, so the controller keeps
/// the store and surface alone.
#[derive(Clone, Debug)]
pub struct ThemeController<S, A> {
    store: S,
    surface: A,
    key: String,
    current: ThemeMode,
}

impl<S, A> ThemeController<S, A>
where
    S: PreferenceStore,
    A: ThemeSurface,
{
    /// Resolve the initial mode and apply it to the surface.
    ///
    /// Call once per session, before the page is mounted, so the first paint
    /// already uses the resolved mode.
    pub fn init<P: SystemPreference>(store: S, system: &P, surface: A, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = resolve_initial_mode(&store, system, &key);
        surface.apply(current);
        Self { store, surface, key, current }
    }

    pub fn mode(&self) -> ThemeMode {
        self.current
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Re-apply the current mode to the surface.
    ///
    /// The applied flag always follows `mode()`; only `toggle` changes it.
    pub fn reapply(&self) {
        self.surface.apply(self.current);
    }

    /// Flip the mode, apply it, and persist it under the controller's key.
    ///
    /// A failed write is logged; the applied mode still changes.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.current.toggled();
        self.surface.apply(next);
        if let Err(e) = self.store.write(&self.key, next.as_str()) {
            log::warn!("theme preference write failed: {e}");
        }
        self.current = next;
        log::debug!("theme toggled to {}", next.as_str());
        next
    }

    #[cfg(test)]
    fn surface(&self) -> &A {
        &self.surface
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }
}
