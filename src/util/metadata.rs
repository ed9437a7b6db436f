//! Document metadata generated from the profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Title, description, and the schema.org `Person` block are all derived from
//! the static record so search previews never drift from the rendered page.

#[cfg(test)]
#[path = "metadata_test.rs"]
mod metadata_test;

use serde::Serialize;

use crate::state::profile::Profile;

#[derive(Serialize)]
struct PersonLd<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(rename = "alternateName")]
    alternate_name: &'a str,
    #[serde(rename = "homeLocation")]
    home_location: PlaceLd<'a>,
    email: String,
    telephone: &'a str,
    #[serde(rename = "alumniOf")]
    alumni_of: Vec<OrganizationLd<'a>>,
    #[serde(rename = "sameAs")]
    same_as: Vec<&'a str>,
}

#[derive(Serialize)]
struct PlaceLd<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

#[derive(Serialize)]
struct OrganizationLd<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

pub fn page_title(profile: &Profile) -> String {
    format!("{} | Academic Portfolio", profile.short_name)
}

pub fn page_description(profile: &Profile) -> String {
    let study = &profile.current_study;
    format!(
        "{} from {}. {} student ({}) at {}, starting {}.",
        profile.full_name, profile.from, study.major, study.track, study.university, study.start
    )
}

/// schema.org `Person` JSON-LD for the profile owner.
pub fn person_json_ld(profile: &Profile) -> String {
    let person = PersonLd {
        context: "https://schema.org",
        kind: "Person",
        name: profile.full_name,
        alternate_name: profile.short_name,
        home_location: PlaceLd { kind: "Place", name: profile.from },
        email: format!("mailto:{}", profile.contact.email),
        telephone: profile.contact.phone,
        alumni_of: profile
            .education
            .iter()
            .map(|e| OrganizationLd { kind: "EducationalOrganization", name: e.school })
            .collect(),
        same_as: profile.links.iter().map(|l| l.url).collect(),
    };
    // Escape `<` so the payload cannot close its surrounding <script> element.
    serde_json::to_string(&person).map_or_else(
        |e| {
            log::warn!("failed to serialize person metadata: {e}");
            String::from("{}")
        },
        |json| json.replace('<', "\\u003c"),
    )
}

/// Footer copyright line for `year`.
pub fn copyright_line(profile: &Profile, year: i32) -> String {
    format!("© {year} {}. Built with Excellence.", profile.full_name)
}

/// Calendar year at render time (UTC).
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
