//! Pre-compiled pattern rules shared across the extraction engine.

use regex::Regex;
use std::sync::LazyLock;

/// RFC-5322-lite email shape: `local@domain.tld`. Structural validation
/// only, not deliverability.
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("regex is compile-time constant")
});

/// Phone patterns in priority order: US, parenthesized area code,
/// international with country code.
pub static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("regex is compile-time constant"),
        Regex::new(r"\(\d{3}\)\s*\d{3}[-.]?\d{4}").expect("regex is compile-time constant"),
        Regex::new(r"\+\d{1,3}[\s.-]?\d{3,4}[\s.-]?\d{3,4}[\s.-]?\d{3,4}")
            .expect("regex is compile-time constant"),
    ]
});

/// LinkedIn profile link.
pub static LINKEDIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)linkedin\.com/in/[\w-]+").expect("regex is compile-time constant")
});

/// GitHub profile or repository link.
pub static GITHUB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)github\.com/[\w./-]+").expect("regex is compile-time constant")
});

/// Bare portfolio URL.
pub static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+").expect("regex is compile-time constant"));

/// `City, ST` with a two-letter state abbreviation.
pub static CITY_STATE_ABBR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][a-z]+(?: [A-Z][a-z]+)*),\s*([A-Z]{2})\b")
        .expect("regex is compile-time constant")
});

/// `City, State` with a spelled-out state or country.
pub static CITY_STATE_FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][a-z]+(?: [A-Z][a-z]+)*),\s*([A-Z][a-z]+(?: [A-Z][a-z]+)*)")
        .expect("regex is compile-time constant")
});

/// Month-name date range: `Jan 2019 - Dec 2020`, `March 2021 to Present`.
/// Open ends ("present"/"current") are captured in the `end_open` group.
pub static DATE_RANGE_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        \b(?P<start_mon>jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+
        (?P<start_year>(?:19|20)\d{2})
        \s*(?:[-\u{2013}\u{2014}]|to)\s*
        (?:
            (?P<end_mon>jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+
            (?P<end_year>(?:19|20)\d{2})
          | (?P<end_open>present|current)
        )",
    )
    .expect("regex is compile-time constant")
});

/// Year-only date range: `2019-2021`, `2019 - Present`.
pub static DATE_RANGE_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        \b(?P<start_year>(?:19|20)\d{2})
        \s*[-\u{2013}\u{2014}]\s*
        (?:(?P<end_year>(?:19|20)\d{2})|(?P<end_open>present|current))\b",
    )
    .expect("regex is compile-time constant")
});

/// A four-digit year in the 1900s or 2000s.
pub static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("regex is compile-time constant"));

/// GPA value, e.g. `GPA: 3.8`.
pub static GPA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)gpa:?\s*(\d+\.?\d*)").expect("regex is compile-time constant")
});

/// Bullet glyphs opening a description line.
pub static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\u{2022}\-\*\u{25cf}]\s*").expect("regex is compile-time constant"));

/// Month-name prefix (first three letters) to month number.
#[must_use]
pub fn month_number(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_lowercase();
    match prefix.as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

/// Whether a line contains any date-range pattern.
#[must_use]
pub fn has_date_range(line: &str) -> bool {
    DATE_RANGE_MONTH.is_match(line) || DATE_RANGE_YEAR.is_match(line)
}
