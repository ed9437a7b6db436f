//! Contact section: email, phone, and social profile cards.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::profile::{Profile, SocialLink};
use crate::util::links::{NEW_TAB_REL, NEW_TAB_TARGET, mailto_href, tel_href};

#[component]
pub fn ContactBlock(profile: &'static Profile) -> impl IntoView {
    let contact = &profile.contact;

    view! {
        <section id="contact" class="section section--roomy">
            <div class="container">
                <div class="contact">
                    <div class="contact__glow"></div>
                    <div class="contact__grid">
                        <div class="contact__intro">
                            <h2 class="contact__title">"Let's " <br/> "Connect."</h2>
                            <p class="contact__lead">
                                "Available for professional opportunities and networking. Reach out via any platform below."
                            </p>
                            <div class="contact__direct">
                                <a href=mailto_href(contact.email) class="contact__line">
                                    <span class="contact__line-icon">
                                        <Icon kind=IconKind::Mail size=28/>
                                    </span>
                                    <span class="contact__line-text contact__line-text--wrap">{contact.email}</span>
                                </a>
                                <a href=tel_href(contact.phone) class="contact__line">
                                    <span class="contact__line-icon">
                                        <Icon kind=IconKind::Phone size=28/>
                                    </span>
                                    <span class="contact__line-text">{contact.phone}</span>
                                </a>
                            </div>
                        </div>
                        <div class="contact__links">
                            {profile.links.iter().map(|link| view! { <SocialCard link=link/> }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One social profile. The handle line is omitted when the link has none.
#[component]
fn SocialCard(link: &'static SocialLink) -> impl IntoView {
    view! {
        <a class="social" href=link.url target=NEW_TAB_TARGET rel=NEW_TAB_REL>
            <span class="social__main">
                <Icon kind=IconKind::from(link.icon)/>
                <span class="social__text">
                    <span class="social__label">{link.label}</span>
                    {link.handle.map(|handle| view! { <span class="social__handle">{handle}</span> })}
                </span>
            </span>
            <Icon kind=IconKind::ChevronRight size=24 class_name="social__chevron"/>
        </a>
    }
}
