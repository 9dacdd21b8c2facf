use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};

pub const SITE_ORIGIN: &str = "https://guiasaludyvida.com";

/// Listing pages to crawl, one per specialty.
pub const BASE_URLS: &[&str] = &[
    "https://guiasaludyvida.com/cirugia-oncologica/",
    "https://guiasaludyvida.com/directorio-medico/especialidades-medicas/cirugia-mastologia/",
];

static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[title]").unwrap());

/// Specialty label for a listing URL.
pub fn specialty_for_url(url: &str) -> &'static str {
    if url.contains("cirugia-oncologica") {
        "oncología"
    } else if url.contains("cirugia-mastologia") {
        "mastología"
    } else {
        "desconocida"
    }
}

/// Hrefs of anchors whose title attribute names a doctor.
/// Deduplicated, document order (reruns must produce identical output).
pub fn profile_links(doc: &Html) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for anchor in doc.select(&ANCHOR_SEL) {
        let Some(title) = anchor.value().attr("title") else {
            continue;
        };
        if !title.contains("Dr.") && !title.contains("Dra.") {
            continue;
        }
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if seen.insert(href.to_string()) {
            links.push(href.to_string());
        }
    }
    links
}

/// Resolve a listing href against the site origin.
pub fn resolve_url(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", SITE_ORIGIN, href)
    }
}
