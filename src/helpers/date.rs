//! Date helper functions

use chrono::{Datelike, NaiveDate};

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Format a date as "month day, year" in the site language
///
/// # Examples
/// ```ignore
/// long_date(date, "es-mx") // -> "febrero 25, 2025"
/// long_date(date, "en")    // -> "February 25, 2025"
/// ```
pub fn long_date(date: NaiveDate, language: &str) -> String {
    if is_spanish(language) {
        let month = MONTHS_ES[date.month0() as usize];
        format!("{} {}, {}", month, date.day(), date.year())
    } else {
        date.format("%B %-d, %Y").to_string()
    }
}

/// ISO 8601 date, for `<time datetime>` attributes
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Generate a <time> HTML element
pub fn time_tag(date: NaiveDate, language: &str) -> String {
    format!(
        r#"<time datetime="{}">{}</time>"#,
        iso_date(date),
        long_date(date, language)
    )
}

fn is_spanish(language: &str) -> bool {
    language
        .split(['-', '_'])
        .next()
        .map(|primary| primary.eq_ignore_ascii_case("es"))
        .unwrap_or(false)
}
