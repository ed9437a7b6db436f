//! Static profile record rendered by every page section.
//!
//! DESIGN
//! ======
//! The record is a `static` built from borrowed string slices. Components only
//! ever receive `&'static Profile`, so the rendering layer has no way to mutate
//! it.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

#[derive(Debug)]
pub struct Profile {
    pub full_name: &'static str,
    pub short_name: &'static str,
    pub date_of_birth: &'static str,
    pub from: &'static str,
    pub current_study: CurrentStudy,
    pub education: &'static [Education],
    pub credentials: &'static [Credential],
    pub links: &'static [SocialLink],
    pub contact: Contact,
    pub assets: Assets,
    pub about: About,
}

#[derive(Debug)]
pub struct CurrentStudy {
    pub university: &'static str,
    pub start: &'static str,
    pub major: &'static str,
    pub track: &'static str,
}

/// One timeline entry. Slice order is display order.
#[derive(Debug)]
pub struct Education {
    pub school: &'static str,
    pub detail: &'static str,
    pub period: &'static str,
}

/// A verifiable document. `url` is opaque and opened in a new tab.
#[derive(Debug)]
pub struct Credential {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkIcon {
    LinkedIn,
    Telegram,
    Instagram,
}

#[derive(Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub handle: Option<&'static str>,
    pub icon: LinkIcon,
}

#[derive(Debug)]
pub struct Contact {
    pub email: &'static str,
    pub phone: &'static str,
}

#[derive(Debug)]
pub struct Assets {
    pub profile_photo: &'static str,
}

/// Copy for the about section.
#[derive(Debug)]
pub struct About {
    pub focus: &'static str,
    pub quote: &'static str,
    pub bio: &'static str,
}

static PROFILE: Profile = Profile {
    full_name: "Shakhzod Gaipov Shavkat ugli",
    short_name: "Shakhzod Gaipov",
    date_of_birth: "29/08/2007",
    from: "Tashkent, Uzbekistan",
    current_study: CurrentStudy {
        university: "University of Doha for Science and Technology (UDST)",
        start: "January 2026",
        major: "Business Administration",
        track: "Finance and Technology in Banking",
    },
    education: &[
        Education {
            school: "University of Doha for Science and Technology (UDST)",
            detail: "Business Administration — Finance and Technology in Banking",
            period: "Jan 2026 — Present",
        },
        Education {
            school: "Academic Lyceum of Westminster International University in Tashkent",
            detail: "Graduated with High Honors in 2025",
            period: "2023 — 2025",
        },
        Education {
            school: "School No. 250",
            detail: "Academic Excellence Award Recipient",
            period: "Until 2023",
        },
    ],
    credentials: &[
        Credential {
            title: "IELTS Academic — Overall 7.5",
            subtitle: "Verified English Proficiency Certificate",
            url: "/documents/ielts.pdf",
        },
        Credential {
            title: "Academic Lyceum Diploma — 2025",
            subtitle: "Official Graduation Diploma - AL WIUT",
            url: "/documents/lyceum-diploma.pdf",
        },
    ],
    links: &[
        SocialLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/shakhzod-gaipov-b40204393?utm_source=share&utm_campaign=share_via&utm_content=profile&utm_medium=ios_app",
            handle: None,
            icon: LinkIcon::LinkedIn,
        },
        SocialLink {
            label: "Telegram",
            url: "https://t.me/shakhzodgaipov",
            handle: Some("@shakhzodgaipov"),
            icon: LinkIcon::Telegram,
        },
        SocialLink {
            label: "Instagram",
            url: "https://instagram.com/shakhzodgaipovv",
            handle: Some("@shakhzodgaipovv"),
            icon: LinkIcon::Instagram,
        },
    ],
    contact: Contact { email: "shakhzodgaipov@gmail.com", phone: "+998909451677" },
    assets: Assets { profile_photo: "/assets/profile.jpg" },
    about: About {
        focus: "Banking & Fintech",
        quote: "My academic path has been defined by excellence, culminating in graduation from the prestigious Westminster International University Academic Lyceum.",
        bio: "I am a high-achieving student with a deep interest in financial markets and the banking sector. My goal is to leverage modern technology within the banking sector, exploring how Fintech is reshaping global finance. I bring strong analytical skills and a 7.5 IELTS proficiency level to the table, and I am excited to begin my journey at UDST in Doha.",
    },
};

/// The portfolio owner's profile.
pub fn profile() -> &'static Profile {
    &PROFILE
}

impl Profile {
    /// Brand label shown in the navigation bar.
    pub fn brand_label(&self) -> String {
        self.short_name.to_uppercase()
    }

    /// Alt text for the hero photo.
    pub fn photo_alt(&self) -> String {
        format!("{}, the author of this personal portfolio website", self.full_name)
    }

    /// Timeline rows paired with their 1-based ordinal.
    pub fn timeline(&self) -> impl Iterator<Item = (usize, &'static Education)> {
        self.education.iter().enumerate().map(|(i, e)| (i + 1, e))
    }
}
