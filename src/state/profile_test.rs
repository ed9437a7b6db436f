use super::*;

#[test]
fn accessor_returns_the_same_record() {
    assert!(std::ptr::eq(profile(), profile()));
}

#[test]
fn identity_fields_are_populated() {
    let p = profile();
    assert_eq!(p.short_name, "Shakhzod Gaipov");
    assert!(p.full_name.starts_with(p.short_name));
    assert!(!p.date_of_birth.is_empty());
    assert!(!p.from.is_empty());
    assert!(!p.assets.profile_photo.is_empty());
}

#[test]
fn education_keeps_insertion_order() {
    let schools: Vec<_> = profile().education.iter().map(|e| e.school).collect();
    assert_eq!(
        schools,
        [
            "University of Doha for Science and Technology (UDST)",
            "Academic Lyceum of Westminster International University in Tashkent",
            "School No. 250",
        ]
    );
}

#[test]
fn timeline_ordinals_start_at_one() {
    let ordinals: Vec<_> = profile().timeline().map(|(n, _)| n).collect();
    assert_eq!(ordinals, [1, 2, 3]);
}

#[test]
fn credentials_reference_documents() {
    let urls: Vec<_> = profile().credentials.iter().map(|c| c.url).collect();
    assert_eq!(urls, ["/documents/ielts.pdf", "/documents/lyceum-diploma.pdf"]);
}

#[test]
fn linkedin_has_no_handle() {
    let linkedin = profile().links.iter().find(|l| l.icon == LinkIcon::LinkedIn).unwrap();
    assert_eq!(linkedin.handle, None);
    assert!(profile().links.iter().filter(|l| l.handle.is_some()).count() >= 2);
}

#[test]
fn brand_label_is_upper_cased_short_name() {
    assert_eq!(profile().brand_label(), "SHAKHZOD GAIPOV");
}

#[test]
fn photo_alt_names_the_author() {
    assert_eq!(
        profile().photo_alt(),
        "Shakhzod Gaipov Shavkat ugli, the author of this personal portfolio website"
    );
}
