//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::pages::home::HomePage;
use crate::state::profile::profile;
use crate::util::dark_mode;
use crate::util::metadata::{page_description, page_title, person_json_ld};

/// Root application component.
///
/// Resolves and applies the theme before any section is built, then owns the
/// controller signal for the session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_build_env();
    let profile = profile();
    let theme = RwSignal::new(dark_mode::init(&config.theme_storage_key));

    view! {
        <Title text=page_title(profile)/>
        <Meta name="description" content=page_description(profile)/>
        <script type="application/ld+json" inner_html=person_json_ld(profile)></script>

        <HomePage profile=profile theme=theme avatar=config.avatar/>
    }
}
