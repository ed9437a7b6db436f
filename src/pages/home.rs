//! The portfolio page, sections in display order.

use leptos::prelude::*;

use crate::components::about::AboutSection;
use crate::components::contact_block::ContactBlock;
use crate::components::credential_gallery::CredentialGallery;
use crate::components::education_timeline::EducationTimeline;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::site_footer::SiteFooter;
use crate::config::AvatarConfig;
use crate::state::profile::Profile;
use crate::util::dark_mode::BrowserThemeController;

#[component]
pub fn HomePage(
    profile: &'static Profile,
    theme: RwSignal<BrowserThemeController>,
    avatar: AvatarConfig,
) -> impl IntoView {
    view! {
        <div class="page">
            <NavBar profile=profile theme=theme/>
            <main>
                <Hero profile=profile avatar=avatar/>
                <AboutSection profile=profile/>
                <EducationTimeline profile=profile/>
                <CredentialGallery profile=profile/>
                <ContactBlock profile=profile/>
            </main>
            <SiteFooter profile=profile/>
        </div>
    }
}
