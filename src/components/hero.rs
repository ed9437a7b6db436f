//! Hero banner with headline, calls to action, and the profile photo.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::config::AvatarConfig;
use crate::state::photo::PhotoState;
use crate::state::profile::Profile;

#[component]
pub fn Hero(profile: &'static Profile, avatar: AvatarConfig) -> impl IntoView {
    let photo = RwSignal::new(PhotoState::new(profile, &avatar));
    let (first_name, last_name) = profile.short_name.split_once(' ').unwrap_or((profile.short_name, ""));

    view! {
        <section class="hero">
            <div class="hero__inner container">
                <div class="hero__copy">
                    <div class="hero__badge">
                        <span class="hero__pulse"></span>
                        "Academic Portfolio 2025"
                    </div>
                    <h1 class="hero__title">
                        {first_name}
                        <br/>
                        <span class="hero__title-accent">{last_name}</span>
                    </h1>
                    <p class="hero__tagline">
                        "Incoming " {profile.current_study.major} " student at "
                        <strong>"UDST"</strong>
                        ". Exploring the intersection of "
                        <span class="hero__underline">"Finance and Technology"</span>
                        "."
                    </p>
                    <div class="hero__actions">
                        <a href="#contact" class="button button--primary">
                            "Contact Me"
                            <Icon kind=IconKind::Mail size=22/>
                        </a>
                        <a href="#credentials" class="button button--outline">
                            "View Documents"
                            <Icon kind=IconKind::FileText size=22/>
                        </a>
                    </div>
                </div>
                <div class="hero__portrait">
                    <div class="hero__glow"></div>
                    <div class="hero__frame">
                        <img
                            class="hero__photo"
                            src=move || photo.with(|p| p.src().to_owned())
                            alt=profile.photo_alt()
                            on:error=move |_| {
                                photo.update(|p| {
                                    p.record_load_error();
                                });
                            }
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
