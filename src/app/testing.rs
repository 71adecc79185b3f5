// src/app/testing.rs: scripted MovieApi double shared by the unit tests
use std::collections::VecDeque;
use std::sync::Mutex;

use super::data::{Movie, MovieDraft};
use super::remote::{MovieApi, TransportError};

type Script<T> = Mutex<VecDeque<Result<T, TransportError>>>;

/// Replays queued outcomes in order; an unscripted call fails.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    lists: Script<Vec<Movie>>,
    gets: Script<Movie>,
    creates: Script<Movie>,
    deletes: Script<bool>,
    pub(crate) list_calls: Mutex<usize>,
    pub(crate) created: Mutex<Vec<MovieDraft>>,
    pub(crate) deleted: Mutex<Vec<i64>>,
}

impl ScriptedApi {
    pub(crate) fn list(self, outcome: Result<Vec<Movie>, TransportError>) -> Self {
        self.lists.lock().unwrap().push_back(outcome);
        self
    }

    pub(crate) fn get(self, outcome: Result<Movie, TransportError>) -> Self {
        self.gets.lock().unwrap().push_back(outcome);
        self
    }

    pub(crate) fn create(self, outcome: Result<Movie, TransportError>) -> Self {
        self.creates.lock().unwrap().push_back(outcome);
        self
    }

    pub(crate) fn delete(self, outcome: Result<bool, TransportError>) -> Self {
        self.deletes.lock().unwrap().push_back(outcome);
        self
    }

    fn next<T>(script: &Script<T>, op: &'static str) -> Result<T, TransportError> {
        script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(failure(op)))
    }
}

impl MovieApi for ScriptedApi {
    fn list_movies(&self) -> Result<Vec<Movie>, TransportError> {
        *self.list_calls.lock().unwrap() += 1;
        Self::next(&self.lists, "GET")
    }

    fn get_movie(&self, _id: i64) -> Result<Movie, TransportError> {
        Self::next(&self.gets, "GET")
    }

    fn create_movie(&self, draft: &MovieDraft) -> Result<Movie, TransportError> {
        self.created.lock().unwrap().push(draft.clone());
        Self::next(&self.creates, "POST")
    }

    fn delete_movie(&self, id: i64) -> Result<bool, TransportError> {
        self.deleted.lock().unwrap().push(id);
        Self::next(&self.deletes, "DELETE")
    }
}

pub(crate) fn failure(op: &'static str) -> TransportError {
    TransportError::new(op, "http://localhost:8080/api/movies", "connection refused")
}

pub(crate) fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        director: Some(format!("Test Director {id}")),
        release_date: Some("2023-01-01".to_string()),
        genre: Some("Action".to_string()),
        description: Some(format!("Test description {id}")),
    }
}

pub(crate) fn sample_movies() -> Vec<Movie> {
    vec![movie(1, "Test Movie 1"), movie(2, "Test Movie 2")]
}
