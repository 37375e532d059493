//! Categorical value normalization.
//!
//! Applied once at load time so that every downstream filter and
//! aggregation can rely on exact string equality. The pipeline is
//! deliberately symmetric: user-supplied filter values go through the
//! same [`normalize_category`] as ingested data.

/// Sentinel substituted for missing or blank categorical values.
pub const UNSPECIFIED: &str = "Unspecified";

/// Normalizes a raw categorical value to its canonical display form.
///
/// Missing or blank values become the [`UNSPECIFIED`] sentinel; everything
/// else is trimmed and title-cased.
#[must_use]
pub fn normalize_category(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        None | Some("") => UNSPECIFIED.to_string(),
        Some(value) => title_case(value),
    }
}

/// Title-cases a string: every letter that follows a non-letter is
/// uppercased, every other letter lowercased.
///
/// Matches the canonical form the source data is displayed in, including
/// hyphenated values ("Failure To Yield Right-Of-Way").
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_was_letter = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_was_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_was_letter = true;
        } else {
            out.push(c);
            prev_was_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_uppercase_source_values() {
        assert_eq!(title_case("PASSENGER DISTRACTION"), "Passenger Distraction");
        assert_eq!(title_case("brooklyn"), "Brooklyn");
        assert_eq!(title_case("sPoRt UtIlItY"), "Sport Utility");
    }

    #[test]
    fn title_cases_after_punctuation() {
        assert_eq!(
            title_case("FAILURE TO YIELD RIGHT-OF-WAY"),
            "Failure To Yield Right-Of-Way"
        );
    }

    #[test]
    fn substitutes_sentinel_for_missing() {
        assert_eq!(normalize_category(None), UNSPECIFIED);
        assert_eq!(normalize_category(Some("")), UNSPECIFIED);
        assert_eq!(normalize_category(Some("   ")), UNSPECIFIED);
    }

    #[test]
    fn normalizes_present_values() {
        assert_eq!(normalize_category(Some(" TAXI ")), "Taxi");
        assert_eq!(normalize_category(Some("UNSPECIFIED")), UNSPECIFIED);
    }
}
