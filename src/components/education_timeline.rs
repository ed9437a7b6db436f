//! Numbered education timeline, in profile order.

use leptos::prelude::*;

use crate::state::profile::Profile;

#[component]
pub fn EducationTimeline(profile: &'static Profile) -> impl IntoView {
    view! {
        <section id="education" class="section">
            <div class="container">
                <div class="section-heading section-heading--center">
                    <h2 class="section-heading__eyebrow">"Milestones"</h2>
                    <h3 class="section-heading__title">"Education Journey"</h3>
                </div>
                <ol class="timeline">
                    {profile
                        .timeline()
                        .map(|(ordinal, item)| {
                            view! {
                                <li class="timeline__item">
                                    <div class="timeline__ordinal">{ordinal}</div>
                                    <div class="card timeline__card">
                                        <div class="timeline__header">
                                            <h4 class="timeline__school">{item.school}</h4>
                                            <span class="timeline__period">{item.period}</span>
                                        </div>
                                        <p class="timeline__detail">{item.detail}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
