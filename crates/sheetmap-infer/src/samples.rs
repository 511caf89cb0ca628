//! Sample-value classification: the evidence side of type inference.
//!
//! Up to [`SAMPLE_CAP`] non-null values per column are classified as
//! numeric-looking, boolean-like, or date-like, and the resulting fractions
//! drive both the standalone classification and the override rules in the
//! cascade.

use std::sync::LazyLock;

use regex::Regex;
use sheetmap_model::{CellValue, SemanticType};

/// Maximum non-null samples examined per column.
pub const SAMPLE_CAP: usize = 20;

/// Excel date serials in this range are treated as plausible dates
/// (roughly 1954 through 2064).
const DATE_SERIAL_MIN: f64 = 20_000.0;
const DATE_SERIAL_MAX: f64 = 60_000.0;

const BOOLEAN_FRACTION_MIN: f64 = 0.8;
const DATE_FRACTION_MIN: f64 = 0.7;
const NUMBER_FRACTION_MIN: f64 = 0.7;
const SMALL_INTEGER_FRACTION_MIN: f64 = 0.7;

static DATE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    // ISO, slash-, and dot-separated day forms, with an optional time part.
    Regex::new(r"^(\d{4}-\d{1,2}-\d{1,2}|\d{1,2}/\d{1,2}/\d{2,4}|\d{1,2}\.\d{1,2}\.\d{2,4})([ T].*)?$")
        .expect("static pattern compiles")
});

static LEADING_ZERO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0\d[\d,]*(\.\d+)?$").expect("static pattern compiles"));

pub fn looks_numeric(text: &str) -> bool {
    let mut cleaned = text.trim().replace(',', "");
    if let Some(rest) = cleaned.strip_prefix('$') {
        cleaned = rest.to_string();
    }
    if let Some(rest) = cleaned.strip_suffix('%') {
        cleaned = rest.to_string();
    }
    !cleaned.is_empty() && cleaned.parse::<f64>().is_ok()
}

pub fn looks_boolean(text: &str) -> bool {
    matches!(
        text.trim().to_lowercase().as_str(),
        "true" | "false" | "yes" | "no" | "y" | "n" | "1" | "0"
    )
}

pub fn looks_date_text(text: &str) -> bool {
    DATE_TEXT.is_match(text.trim())
}

/// Excel-style date serial in a plausible range.
pub fn looks_date_serial(value: f64) -> bool {
    value.fract() == 0.0 && (DATE_SERIAL_MIN..=DATE_SERIAL_MAX).contains(&value)
}

/// Text values that must stay text to preserve leading zeros (ZIP codes,
/// zero-padded identifiers).
pub fn has_leading_zero(text: &str) -> bool {
    LEADING_ZERO.is_match(text.trim())
}

fn is_small_integer(value: f64) -> bool {
    value.fract() == 0.0 && (0.0..=999.0).contains(&value)
}

/// Classification counts over a column's sampled values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProfile {
    pub classified: usize,
    pub numeric: usize,
    pub boolean: usize,
    pub date: usize,
    pub small_integer: usize,
    pub leading_zero: usize,
}

impl SampleProfile {
    /// Classify up to [`SAMPLE_CAP`] non-null values.
    pub fn collect(samples: &[CellValue]) -> Self {
        let mut profile = SampleProfile::default();
        for value in samples.iter().filter(|value| !value.is_empty()).take(SAMPLE_CAP) {
            profile.classified += 1;
            match value {
                CellValue::Bool(_) => profile.boolean += 1,
                CellValue::Number(number) => {
                    profile.numeric += 1;
                    if looks_date_serial(*number) {
                        profile.date += 1;
                    }
                    if is_small_integer(*number) {
                        profile.small_integer += 1;
                        if *number == 0.0 || *number == 1.0 {
                            profile.boolean += 1;
                        }
                    }
                }
                CellValue::Text(text) => {
                    let trimmed = text.trim();
                    if has_leading_zero(trimmed) {
                        profile.leading_zero += 1;
                    }
                    if looks_boolean(trimmed) {
                        profile.boolean += 1;
                    }
                    if looks_date_text(trimmed) {
                        profile.date += 1;
                    } else if looks_numeric(trimmed) {
                        profile.numeric += 1;
                        if let Ok(number) = trimmed.replace(',', "").parse::<f64>() {
                            if looks_date_serial(number) {
                                profile.date += 1;
                            }
                            if is_small_integer(number) {
                                profile.small_integer += 1;
                            }
                        }
                    }
                }
                CellValue::Null => {}
            }
        }
        profile
    }

    fn fraction(&self, count: usize) -> f64 {
        if self.classified == 0 {
            0.0
        } else {
            count as f64 / self.classified as f64
        }
    }

    /// Any leading-zero value forces text storage.
    pub fn forces_text(&self) -> bool {
        self.leading_zero > 0
    }

    /// True when the sampled values are dominated by small integers with no
    /// date separators. Used to veto name-based date evidence.
    pub fn dominated_by_small_integers(&self) -> bool {
        self.fraction(self.small_integer) > SMALL_INTEGER_FRACTION_MIN
            && self.fraction(self.date) < DATE_FRACTION_MIN
    }

    /// Standalone sample-based classification.
    pub fn classify(&self) -> SemanticType {
        if self.classified == 0 {
            return SemanticType::String;
        }
        if self.fraction(self.boolean) > BOOLEAN_FRACTION_MIN {
            SemanticType::Boolean
        } else if self.fraction(self.date) > DATE_FRACTION_MIN {
            SemanticType::Date
        } else if self.fraction(self.numeric) > NUMBER_FRACTION_MIN {
            SemanticType::Number
        } else {
            SemanticType::String
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|value| CellValue::from(*value)).collect()
    }

    #[test]
    fn numeric_text_recognized() {
        assert!(looks_numeric("1,234.56"));
        assert!(looks_numeric("$450000"));
        assert!(looks_numeric("6.25%"));
        assert!(!looks_numeric("n/a"));
    }

    #[test]
    fn date_text_recognized() {
        assert!(looks_date_text("2025-03-31"));
        assert!(looks_date_text("3/31/25"));
        assert!(looks_date_text("31.03.2025"));
        assert!(looks_date_text("2025-03-31 00:00:00"));
        assert!(!looks_date_text("123"));
    }

    #[test]
    fn leading_zero_values() {
        assert!(has_leading_zero("01234"));
        assert!(has_leading_zero("00501"));
        assert!(!has_leading_zero("0"));
        assert!(!has_leading_zero("0.5"));
        assert!(!has_leading_zero("1234"));
    }

    #[test]
    fn small_integer_profile() {
        let profile = SampleProfile::collect(&texts(&["0", "1", "2", "14", "350"]));
        assert!(profile.dominated_by_small_integers());
        assert_eq!(profile.classify(), SemanticType::Number);
    }

    #[test]
    fn date_strings_not_small_integers() {
        let profile = SampleProfile::collect(&texts(&["2025-01-01", "2025-02-01", "2025-03-01"]));
        assert!(!profile.dominated_by_small_integers());
        assert_eq!(profile.classify(), SemanticType::Date);
    }

    #[test]
    fn excel_serials_classify_as_dates() {
        let samples: Vec<CellValue> = [45000.0, 45031.0, 45059.0]
            .iter()
            .map(|value| CellValue::Number(*value))
            .collect();
        let profile = SampleProfile::collect(&samples);
        assert_eq!(profile.classify(), SemanticType::Date);
    }

    #[test]
    fn boolean_samples() {
        let profile = SampleProfile::collect(&texts(&["Y", "N", "Y", "Y", "N"]));
        assert_eq!(profile.classify(), SemanticType::Boolean);
    }

    #[test]
    fn sample_cap_applies() {
        let many: Vec<CellValue> = (0..100).map(|i| CellValue::from(format!("{i}").as_str())).collect();
        let profile = SampleProfile::collect(&many);
        assert_eq!(profile.classified, SAMPLE_CAP);
    }

    #[test]
    fn empty_samples_default_to_string() {
        let profile = SampleProfile::collect(&[]);
        assert_eq!(profile.classify(), SemanticType::String);
        assert!(!profile.forces_text());
    }
}
