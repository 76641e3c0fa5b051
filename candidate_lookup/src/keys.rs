// Key construction for the two lookup tables.
//
// The embedded table and the directory use different key shapes and must never
// share a map. The embedded table is exact-match; the directory normalizes its
// code fields.

use std::fmt::Display;

pub(crate) const KEY_SEPARATOR: &str = "|";

/// Upper-cases a contest/office code. Absent input becomes the empty string.
pub fn normalize_contest(contest: Option<&str>) -> String {
    normalize_code(contest)
}

/// Upper-cases a county code. Absent input becomes the empty string.
pub fn normalize_county(county: Option<&str>) -> String {
    normalize_code(county)
}

/// Upper-cases a party code. Absent input becomes the empty string.
pub fn normalize_party(party: Option<&str>) -> String {
    normalize_code(party)
}

fn normalize_code(code: Option<&str>) -> String {
    code.unwrap_or("").to_uppercase()
}

/// Key of the embedded table: `year|contest|party`, taken verbatim.
pub fn static_key(year: impl Display, contest: &str, party: &str) -> String {
    format!("{}{}{}{}{}", year, KEY_SEPARATOR, contest, KEY_SEPARATOR, party)
}

/// Key of the directory: `CONTEST|year|COUNTY|PARTY`.
///
/// The year is only converted to its string form: it is neither padded nor
/// case-folded, so `2020` and `"2020"` give the same key but `"02020"` does not.
pub fn directory_key<'a>(
    contest: impl Into<Option<&'a str>>,
    year: impl Display,
    county: impl Into<Option<&'a str>>,
    party: impl Into<Option<&'a str>>,
) -> String {
    [
        normalize_contest(contest.into()),
        year.to_string(),
        normalize_county(county.into()),
        normalize_party(party.into()),
    ]
    .join(KEY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_upper_cased() {
        assert_eq!(normalize_contest(Some("pre")), "PRE");
        assert_eq!(normalize_county(Some("Mia")), "MIA");
        assert_eq!(normalize_party(Some("dem")), "DEM");
        assert_eq!(normalize_party(None), "");
        assert_eq!(normalize_county(Some("")), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_contest(Some("uSs"));
        assert_eq!(normalize_contest(Some(once.as_str())), once);
    }

    #[test]
    fn directory_key_ignores_case_and_year_type() {
        assert_eq!(
            directory_key("pre", "2020", "mia", "dem"),
            directory_key("PRE", 2020, "MIA", "DEM")
        );
        assert_eq!(directory_key("gov", "2014", None::<&str>, None::<&str>), "GOV|2014||");
    }

    #[test]
    fn directory_key_keeps_year_verbatim() {
        assert_ne!(
            directory_key("gov", "02014", "leo", "rep"),
            directory_key("gov", 2014, "leo", "rep")
        );
    }

    #[test]
    fn static_key_is_exact() {
        assert_eq!(
            static_key(2018, "Attorney General", "Republican"),
            "2018|Attorney General|Republican"
        );
        assert_eq!(
            static_key("2018", "attorney general", "republican"),
            "2018|attorney general|republican"
        );
    }
}
