use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One doctor in the output collection. Field order is the output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub name: String,
    pub specialties: Vec<String>,
    pub url: String,
    pub thumbnail: String,
    pub hospital: String,
    pub office: String,
    pub location: String,
    pub schedule: String,
    pub phones: Vec<String>,
}

/// Merge a freshly scraped record into the collection. Doctors are keyed by
/// exact name; a repeat encounter only contributes its specialties, in
/// first-seen order so reruns serialize identically.
pub fn merge_record(records: &mut Vec<DoctorRecord>, new: DoctorRecord) {
    if let Some(existing) = records.iter_mut().find(|r| r.name == new.name) {
        for specialty in new.specialties {
            if !existing.specialties.contains(&specialty) {
                existing.specialties.push(specialty);
            }
        }
    } else {
        records.push(new);
    }
}

/// Write the collection as 4-space-indented JSON, overwriting any prior file.
/// Non-ASCII text is written literally.
pub fn write_records(path: &Path, records: &[DoctorRecord]) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    std::fs::write(path, buf)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, specialty: &str, hospital: &str) -> DoctorRecord {
        DoctorRecord {
            name: name.to_string(),
            specialties: vec![specialty.to_string()],
            url: format!("https://guiasaludyvida.com/{}/", name.to_lowercase()),
            thumbnail: "https://guiasaludyvida.com/foto.jpg".to_string(),
            hospital: hospital.to_string(),
            office: "Consultorio 2".to_string(),
            location: "Estado Miranda".to_string(),
            schedule: "Lunes a viernes 8am-12pm".to_string(),
            phones: vec!["02125551234".to_string()],
        }
    }

    #[test]
    fn merge_unions_specialties() {
        let mut all = Vec::new();
        merge_record(&mut all, record("Dr. Juan Pérez", "oncología", "Clínica Uno"));
        merge_record(&mut all, record("Dr. Juan Pérez", "mastología", "Clínica Dos"));
        assert_eq!(all.len(), 1);
        assert!(all[0].specialties.contains(&"oncología".to_string()));
        assert!(all[0].specialties.contains(&"mastología".to_string()));
    }

    #[test]
    fn merge_ignores_duplicate_specialty() {
        let mut all = Vec::new();
        merge_record(&mut all, record("Dra. Ana Díaz", "oncología", "Clínica Uno"));
        merge_record(&mut all, record("Dra. Ana Díaz", "oncología", "Clínica Uno"));
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].specialties, vec!["oncología"]);
    }

    #[test]
    fn first_encounter_wins_scalar_fields() {
        let mut all = Vec::new();
        merge_record(&mut all, record("Dr. Juan Pérez", "oncología", "Clínica Uno"));
        merge_record(&mut all, record("Dr. Juan Pérez", "mastología", "Clínica Dos"));
        assert_eq!(all[0].hospital, "Clínica Uno");
    }

    #[test]
    fn distinct_names_append() {
        let mut all = Vec::new();
        merge_record(&mut all, record("Dr. Juan Pérez", "oncología", "Clínica Uno"));
        merge_record(&mut all, record("Dra. Ana Díaz", "oncología", "Clínica Dos"));
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn written_json_round_trips() {
        let path = std::env::temp_dir().join("gsv_scraper_roundtrip.json");
        let all = vec![
            record("Dr. José Pérez", "oncología", "Clínica Santa Sofía"),
            record("Dra. Ana Díaz", "mastología", "Clínica El Ávila"),
        ];
        write_records(&path, &all).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<DoctorRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, all);
    }

    #[test]
    fn output_shape() {
        let path = std::env::temp_dir().join("gsv_scraper_shape.json");
        let all = vec![record("Dr. José Pérez", "oncología", "Clínica Santa Sofía")];
        write_records(&path, &all).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        // 4-space indent, name first
        assert!(text.starts_with("[\n    {\n        \"name\""));
        // accented characters written literally, not escaped
        assert!(text.contains("oncología"));
        assert!(text.contains("Dr. José Pérez"));
        assert!(!text.contains("\\u"));
        // field order follows the record declaration
        let order = ["name", "specialties", "url", "thumbnail", "hospital", "office", "location", "schedule", "phones"];
        let positions: Vec<usize> = order
            .iter()
            .map(|f| text.find(&format!("\"{}\"", f)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rewrites_are_byte_identical() {
        let path_a = std::env::temp_dir().join("gsv_scraper_idem_a.json");
        let path_b = std::env::temp_dir().join("gsv_scraper_idem_b.json");
        let all = vec![record("Dr. José Pérez", "oncología", "Clínica Santa Sofía")];
        write_records(&path_a, &all).unwrap();
        write_records(&path_b, &all).unwrap();
        assert_eq!(
            std::fs::read(&path_a).unwrap(),
            std::fs::read(&path_b).unwrap()
        );
    }
}
