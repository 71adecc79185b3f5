// src/app/utils.rs: display text for movie fields
use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::data::Movie;

pub const DIRECTOR_UNKNOWN: &str = "Director unknown";
pub const GENRE_UNSPECIFIED: &str = "Unspecified genre";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const DATE_UNKNOWN: &str = "Unknown";
pub const EMPTY_LIST: &str = "No movies available. Add a new movie to get started.";

fn present(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

pub fn director_line(m: &Movie) -> String {
    match present(m.director.as_deref()) {
        Some(d) => format!("Directed by {d}"),
        None => DIRECTOR_UNKNOWN.to_string(),
    }
}

pub fn genre_label(m: &Movie) -> &str {
    present(m.genre.as_deref()).unwrap_or(GENRE_UNSPECIFIED)
}

pub fn description_text(m: &Movie) -> &str {
    present(m.description.as_deref()).unwrap_or(NO_DESCRIPTION)
}

pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// `M/D/YYYY`; "Unknown" when absent, the raw text when unparseable.
pub fn format_release_date(raw: Option<&str>) -> String {
    let Some(raw) = present(raw) else {
        return DATE_UNKNOWN.to_string();
    };
    match parse_release_date(raw) {
        Some(d) => format!("{}/{}/{}", d.month(), d.day(), d.year()),
        None => raw.trim().to_string(),
    }
}

pub fn title_line(m: &Movie) -> String {
    match m.release_date.as_deref().and_then(parse_release_date) {
        Some(d) => format!("{} ({})", m.title, d.year()),
        None => m.title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::movie;

    fn bare(id: i64) -> Movie {
        Movie {
            director: None,
            release_date: None,
            genre: None,
            description: None,
            ..movie(id, "Bare")
        }
    }

    #[test]
    fn fallbacks_for_missing_fields() {
        let m = bare(1);
        assert_eq!(director_line(&m), "Director unknown");
        assert_eq!(genre_label(&m), "Unspecified genre");
        assert_eq!(description_text(&m), "No description available.");
        assert_eq!(format_release_date(m.release_date.as_deref()), "Unknown");
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let m = Movie {
            director: Some(String::new()),
            genre: Some(" ".into()),
            ..bare(1)
        };
        assert_eq!(director_line(&m), DIRECTOR_UNKNOWN);
        assert_eq!(genre_label(&m), GENRE_UNSPECIFIED);
        assert_eq!(format_release_date(Some("")), DATE_UNKNOWN);
    }

    #[test]
    fn present_fields_render() {
        let m = movie(1, "Test Movie 1");
        assert_eq!(director_line(&m), "Directed by Test Director 1");
        assert_eq!(genre_label(&m), "Action");
        assert_eq!(description_text(&m), "Test description 1");
    }

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_release_date(Some("2023-01-01")), "1/1/2023");
        assert_eq!(format_release_date(Some("2023-12-25")), "12/25/2023");
        assert_eq!(format_release_date(Some("1999-03-31T00:00:00")), "3/31/1999");
        assert_eq!(format_release_date(Some("sometime")), "sometime");
    }

    #[test]
    fn title_line_adds_year_when_known() {
        assert_eq!(title_line(&movie(1, "Alien")), "Alien (2023)");
        assert_eq!(title_line(&bare(2)), "Bare");
    }
}
