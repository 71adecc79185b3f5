// src/app/collection.rs: authoritative client-side movie list
use std::sync::Arc;

use itertools::Itertools;
use tracing::{error, info, warn};

use super::data::{Movie, MovieDraft};
use super::remote::{MovieApi, TransportError};

pub const LOAD_FAILED: &str = "Failed to load movies. Please try again later.";
pub const ADD_FAILED: &str = "Failed to add movie. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete movie. Please try again.";
pub const DETAILS_FAILED: &str = "Failed to load movie details. Please try again.";

/// Everything the view reads from the collection side.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionState {
    pub movies: Vec<Movie>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: Option<Movie>,
}

pub type Observer = Box<dyn FnMut(&CollectionState) + Send>;

pub struct MovieCollectionController {
    api: Arc<dyn MovieApi>,
    state: CollectionState,
    observers: Vec<Observer>,
}

impl MovieCollectionController {
    pub fn new(api: Arc<dyn MovieApi>) -> Self {
        Self {
            api,
            state: CollectionState::default(),
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    pub fn movies(&self) -> &[Movie] {
        &self.state.movies
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn selected(&self) -> Option<&Movie> {
        self.state.selected.as_ref()
    }

    /// Called with the new state after every change.
    pub fn subscribe(&mut self, observer: impl FnMut(&CollectionState) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn publish(&mut self) {
        for observer in self.observers.iter_mut() {
            observer(&self.state);
        }
    }

    // ---- load ----

    pub fn load(&mut self) {
        self.begin_load();
        let outcome = self.api.list_movies();
        self.finish_load(outcome);
    }

    pub fn begin_load(&mut self) {
        self.state.loading = true;
        self.state.error = None;
        self.publish();
    }

    /// On failure the previous list stays visible.
    pub fn finish_load(&mut self, outcome: Result<Vec<Movie>, TransportError>) {
        match outcome {
            Ok(fetched) => {
                let total = fetched.len();
                let movies: Vec<Movie> = fetched.into_iter().unique_by(|m| m.id).collect();
                if movies.len() != total {
                    warn!("dropped {} duplicate movie id(s) from listing", total - movies.len());
                }
                info!("Loaded {} movies", movies.len());
                self.state.movies = movies;
                self.state.error = None;
            }
            Err(err) => {
                error!("Error loading movies: {err}");
                self.state.error = Some(LOAD_FAILED.to_string());
            }
        }
        self.state.loading = false;
        self.publish();
    }

    // ---- create ----

    pub fn add_movie(&mut self, draft: &MovieDraft) -> bool {
        let outcome = self.api.create_movie(draft);
        self.finish_add(outcome)
    }

    pub fn finish_add(&mut self, outcome: Result<Movie, TransportError>) -> bool {
        let added = match outcome {
            Ok(saved) => {
                info!("Added movie {} ({})", saved.id, saved.title);
                // Ids stay unique over append order: if an overlapping load
                // already brought this id in, its stale copy is dropped first.
                self.state.movies.retain(|m| m.id != saved.id);
                self.state.movies.push(saved);
                true
            }
            Err(err) => {
                error!("Error adding movie: {err}");
                self.state.error = Some(ADD_FAILED.to_string());
                false
            }
        };
        self.publish();
        added
    }

    // ---- delete ----

    pub fn delete_movie(&mut self, id: i64) -> bool {
        let outcome = self.api.delete_movie(id);
        self.finish_delete(id, outcome)
    }

    pub fn finish_delete(&mut self, id: i64, outcome: Result<bool, TransportError>) -> bool {
        let removed = match outcome {
            Ok(_) => {
                self.state.movies.retain(|m| m.id != id);
                if self.state.selected.as_ref().is_some_and(|m| m.id == id) {
                    self.state.selected = None;
                }
                info!("Deleted movie {id}");
                true
            }
            Err(err) => {
                error!("Error deleting movie: {err}");
                self.state.error = Some(DELETE_FAILED.to_string());
                false
            }
        };
        self.publish();
        removed
    }

    // ---- details ----

    pub fn show_details(&mut self, id: i64) {
        let outcome = self.api.get_movie(id);
        self.finish_details(id, outcome);
    }

    pub fn finish_details(&mut self, id: i64, outcome: Result<Movie, TransportError>) {
        match outcome {
            Ok(movie) => self.state.selected = Some(movie),
            Err(err) => {
                error!("Error loading movie {id}: {err}");
                self.state.error = Some(DETAILS_FAILED.to_string());
            }
        }
        self.publish();
    }

    pub fn close_details(&mut self) {
        self.state.selected = None;
        self.publish();
    }

    pub fn dismiss_error(&mut self) {
        self.state.error = None;
        self.publish();
    }
}
