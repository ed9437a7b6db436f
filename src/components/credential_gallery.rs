//! Credential cards linking to their source documents.
//!
//! DESIGN
//! ======
//! Document URLs are opaque; each card opens its document in a new browsing
//! context without granting it access to this page.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::profile::Profile;
use crate::util::links::{NEW_TAB_REL, NEW_TAB_TARGET, open_document_title};

#[component]
pub fn CredentialGallery(profile: &'static Profile) -> impl IntoView {
    view! {
        <section id="credentials" class="section section--inverted">
            <div class="container">
                <div class="section-heading section-heading--center">
                    <h2 class="section-heading__eyebrow">"Achievements"</h2>
                    <h3 class="section-heading__title">"Verified Credentials"</h3>
                    <p class="section-heading__note">"Documents open in a new browser tab for verification."</p>
                </div>
                <div class="credentials">
                    {profile
                        .credentials
                        .iter()
                        .map(|cred| {
                            view! {
                                <a
                                    class="credential"
                                    href=cred.url
                                    target=NEW_TAB_TARGET
                                    rel=NEW_TAB_REL
                                    title=open_document_title(cred.title)
                                >
                                    <div class="credential__watermark">
                                        <Icon kind=IconKind::FileText size=160/>
                                    </div>
                                    <div class="credential__body">
                                        <div class="credential__top">
                                            <div class="credential__badge">
                                                <Icon kind=IconKind::Award size=32/>
                                            </div>
                                            <Icon kind=IconKind::ExternalLink size=28 class_name="credential__external"/>
                                        </div>
                                        <h3 class="credential__title">{cred.title}</h3>
                                        <p class="credential__subtitle">{cred.subtitle}</p>
                                        <div class="credential__cta">
                                            "View Full PDF"
                                            <Icon kind=IconKind::ChevronRight size=18/>
                                        </div>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
