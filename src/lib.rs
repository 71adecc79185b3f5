//! Desktop client for a small movie catalog kept by a REST service.
//!
//! The window lists movies, adds new ones through a validated form and
//! deletes them. `app::MovieCollectionController` owns the list and
//! `app::MovieFormController` the pending draft; `app::RemoteMovieClient`
//! talks to `/api/movies`.

pub mod app;
pub mod config;
