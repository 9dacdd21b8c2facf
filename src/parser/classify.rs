use std::sync::LazyLock;

use regex::Regex;

static NON_PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9/]").unwrap());

/// Typed fields recovered from one flattened biography paragraph.
#[derive(Debug, Default, PartialEq)]
pub struct Classification {
    pub hospital: String,
    pub office: String,
    pub location: String,
    pub schedule: String,
    pub phones: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Hospital,
    Office,
    Location,
    Schedule,
    Phones,
}

struct Rule {
    slot: Slot,
    keywords: &'static [&'static str],
}

const WEEKDAYS: &[&str] = &[
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

// Evaluated in order; the first matching rule claims the token.
const RULES: &[Rule] = &[
    Rule { slot: Slot::Hospital, keywords: &["clínica"] },
    Rule { slot: Slot::Office, keywords: &["consultorio"] },
    Rule { slot: Slot::Location, keywords: &["estado"] },
    Rule { slot: Slot::Schedule, keywords: WEEKDAYS },
    Rule { slot: Slot::Phones, keywords: &["teléfono"] },
];

/// Split a flattened paragraph on `_` and route each token to its slot by
/// case-insensitive keyword containment. Scalar slots are last-write-wins;
/// phones accumulates. Tokens matching no rule are dropped.
pub fn classify(text: &str) -> Classification {
    let mut result = Classification::default();
    for token in text.split('_') {
        let token = token.trim();
        let lower = token.to_lowercase();
        let matched = RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)));
        let Some(rule) = matched else {
            continue;
        };
        match rule.slot {
            Slot::Hospital => result.hospital = title_case(token),
            Slot::Office => result.office = token.to_string(),
            Slot::Location => result.location = token.to_string(),
            Slot::Schedule => result.schedule = token.to_string(),
            Slot::Phones => result.phones.extend(phone_list(token)),
        }
    }
    result
}

/// First letter of each word uppercased, the rest lowercased.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Keep only digits and `/`, then split on `/`. Empty segments from
/// consecutive separators are kept.
fn phone_list(token: &str) -> Vec<String> {
    let cleaned = NON_PHONE_RE.replace_all(token, "");
    cleaned.split('/').map(str::to_string).collect()
}
