//! Page footer with the copyright line.

use leptos::prelude::*;

use crate::state::profile::Profile;
use crate::util::metadata::{copyright_line, current_year};

#[component]
pub fn SiteFooter(profile: &'static Profile) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>{copyright_line(profile, current_year())}</p>
            </div>
        </footer>
    }
}
