// src/app/data.rs
use serde::{Deserialize, Serialize};

/// One catalog entry as the movie service returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Form-local movie being composed; empty strings mean "not given".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovieDraft {
    pub title: String,
    pub director: String,
    pub release_date: String,
    pub genre: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Director,
    ReleaseDate,
    Genre,
    Description,
}

impl FormField {
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Director,
        Self::ReleaseDate,
        Self::Genre,
        Self::Description,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Director => "director",
            Self::ReleaseDate => "releaseDate",
            Self::Genre => "genre",
            Self::Description => "description",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Director => "Director",
            Self::ReleaseDate => "Release Date",
            Self::Genre => "Genre",
            Self::Description => "Description",
        }
    }
}

impl MovieDraft {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Director => &self.director,
            FormField::ReleaseDate => &self.release_date,
            FormField::Genre => &self.genre,
            FormField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Director => &mut self.director,
            FormField::ReleaseDate => &mut self.release_date,
            FormField::Genre => &mut self.genre,
            FormField::Description => &mut self.description,
        };
        *slot = value;
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Body for `POST /api/movies`. Blank optional fields go out as `null`.
    pub fn to_request(&self) -> NewMovie<'_> {
        NewMovie {
            title: &self.title,
            director: non_blank(&self.director),
            release_date: non_blank(&self.release_date),
            genre: non_blank(&self.genre),
            description: non_blank(&self.description),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie<'a> {
    pub title: &'a str,
    pub director: Option<&'a str>,
    pub release_date: Option<&'a str>,
    pub genre: Option<&'a str>,
    pub description: Option<&'a str>,
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
