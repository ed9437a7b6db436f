//! About section: personal detail card and narrative.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::profile::Profile;

#[component]
pub fn AboutSection(profile: &'static Profile) -> impl IntoView {
    let details = [
        (IconKind::Calendar, "Date of Birth", profile.date_of_birth),
        (IconKind::MapPin, "Nationality", profile.from),
        (IconKind::Briefcase, "Future Major", profile.about.focus),
    ];

    view! {
        <section id="about" class="section section--tinted">
            <div class="about container">
                <div class="about__details">
                    <div class="section-heading">
                        <h2 class="section-heading__eyebrow">"Introduction"</h2>
                        <h3 class="section-heading__title">"Personal Details"</h3>
                    </div>
                    <div class="card about__card">
                        {details
                            .into_iter()
                            .map(|(icon, label, value)| {
                                view! {
                                    <div class="detail">
                                        <div class="detail__icon">
                                            <Icon kind=icon size=24/>
                                        </div>
                                        <div>
                                            <p class="detail__label">{label}</p>
                                            <p class="detail__value">{value}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="about__story">
                    <blockquote class="about__quote">{format!("\"{}\"", profile.about.quote)}</blockquote>
                    <p class="about__bio">{profile.about.bio}</p>
                </div>
            </div>
        </section>
    }
}
