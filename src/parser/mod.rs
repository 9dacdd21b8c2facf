pub mod classify;
pub mod extract;
pub mod normalize;

use scraper::Html;

use crate::records::DoctorRecord;

/// Three-pass pipeline per profile: extract fields → flatten the biography
/// paragraph → classify its tokens. None when the profile has no usable
/// biography (no paragraph, or only the subtitle paragraph).
pub fn process_profile(doc: &Html, url: &str, specialty: &str) -> Option<DoctorRecord> {
    let name = extract::doctor_name(doc);
    let thumbnail = extract::thumbnail_url(doc);
    let biography = extract::biography_html(doc)?;
    let fields = classify::classify(&normalize::flatten(&biography));

    Some(DoctorRecord {
        name,
        specialties: vec![specialty.to_string()],
        url: url.to_string(),
        thumbnail,
        hospital: fields.hospital,
        office: fields.office,
        location: fields.location,
        schedule: fields.schedule,
        phones: fields.phones,
    })
}
