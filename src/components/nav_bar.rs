//! Sticky navigation bar with section anchors and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The toggle is the only control that mutates theme state. It receives the
//! controller signal as a prop rather than reading it from context, so the
//! ownership of that state stays explicit at the call site.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::profile::Profile;
use crate::util::dark_mode::BrowserThemeController;
use crate::util::links::section_href;

/// Section anchors in page order: (id, label).
pub const SECTIONS: [(&str, &str); 4] = [
    ("about", "About"),
    ("education", "Education"),
    ("credentials", "Credentials"),
    ("contact", "Contact"),
];

#[component]
pub fn NavBar(profile: &'static Profile, theme: RwSignal<BrowserThemeController>) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav__inner container">
                <a href="#" class="nav__brand">{profile.brand_label()}</a>
                <div class="nav__actions">
                    <div class="nav__links">
                        {SECTIONS
                            .iter()
                            .map(|(id, label)| {
                                view! { <a href=section_href(id) class="nav__link">{*label}</a> }
                            })
                            .collect_view()}
                    </div>
                    <ThemeToggle theme=theme/>
                </div>
            </div>
        </nav>
    }
}

/// Light/dark switch. Shows the sun while dark and the moon while light.
#[component]
pub fn ThemeToggle(theme: RwSignal<BrowserThemeController>) -> impl IntoView {
    let is_dark = move || theme.with(|t| t.mode().is_dark());

    view! {
        <button
            class="nav__theme-toggle"
            on:click=move |_| {
                theme.update(|t| {
                    t.toggle();
                });
            }
            aria-label="Toggle Theme"
            title="Toggle Theme"
        >
            {move || {
                if is_dark() {
                    view! { <Icon kind=IconKind::Sun/> }
                } else {
                    view! { <Icon kind=IconKind::Moon/> }
                }
            }}
        </button>
    }
}
