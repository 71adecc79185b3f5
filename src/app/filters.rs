use itertools::Itertools;

use super::data::Movie;

fn genre_of(m: &Movie) -> Option<&str> {
    m.genre.as_deref().map(str::trim).filter(|g| !g.is_empty())
}

/// Distinct genres present in the list, sorted case-insensitively.
pub fn collect_genres(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .filter_map(genre_of)
        .unique_by(|g| g.to_lowercase())
        .sorted_by_key(|g| g.to_lowercase())
        .map(str::to_string)
        .collect()
}

/// Indices into `movies` to display, preserving list order.
pub fn filtered_indices(movies: &[Movie], selected_genre: Option<&str>) -> Vec<usize> {
    movies
        .iter()
        .enumerate()
        .filter(|&(_, m)| match selected_genre {
            Some(g) => genre_of(m).is_some_and(|mg| mg.eq_ignore_ascii_case(g.trim())),
            None => true,
        })
        .map(|(i, _)| i)
        .collect()
}
