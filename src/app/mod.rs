// src/app/mod.rs: movie catalog window, controllers + background remote calls

// ---- Standard lib imports ----
use std::sync::Arc;

// ---- Crates ----
use eframe::egui as eg;
use tracing::{debug, info};

// ---- Local modules ----
pub mod collection;
pub mod data;
pub mod detail;
pub mod filters;
pub mod form;
pub mod remote;
pub mod tasks;
pub mod types;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod testing;

pub use collection::{CollectionState, MovieCollectionController};
pub use data::{FormField, Movie, MovieDraft};
pub use form::MovieFormController;
pub use remote::{MovieApi, RemoteMovieClient, TransportError};

use crate::config::AppConfig;
use tasks::RemoteTasks;
use types::{CardAction, RemoteMsg};

// ---- Tunables ----
const MAX_MSGS_PER_FRAME: usize = 16;

pub struct MovieDeskApp {
    config: AppConfig,
    movies: MovieCollectionController,
    form: MovieFormController,
    tasks: RemoteTasks,

    // view-only filter; never touches the collection
    genre_filter: Option<String>,

    // one-time init guard
    did_init: bool,
}

impl MovieDeskApp {
    pub fn new(ctx: &eg::Context, config: AppConfig) -> Self {
        let api: Arc<dyn MovieApi> = Arc::new(RemoteMovieClient::from_config(&config));
        Self::with_api(ctx, config, api)
    }

    pub fn with_api(ctx: &eg::Context, config: AppConfig, api: Arc<dyn MovieApi>) -> Self {
        let mut movies = MovieCollectionController::new(Arc::clone(&api));
        let repaint = ctx.clone();
        movies.subscribe(move |_| repaint.request_repaint());

        let wake = ctx.clone();
        let tasks = RemoteTasks::new(api).with_waker(Arc::new(move || wake.request_repaint()));

        Self {
            config,
            movies,
            form: MovieFormController::new(),
            tasks,
            genre_filter: None,
            did_init: false,
        }
    }

    pub fn collection(&self) -> &MovieCollectionController {
        &self.movies
    }

    pub fn form(&self) -> &MovieFormController {
        &self.form
    }

    // ---- user-triggered operations ----

    pub(crate) fn request_load(&mut self) {
        self.movies.begin_load();
        self.tasks.spawn_load();
    }

    pub(crate) fn request_submit(&mut self) {
        if let Some(draft) = self.form.begin_submit() {
            self.tasks.spawn_create(draft);
        }
    }

    pub(crate) fn apply_card_action(&mut self, action: CardAction) {
        match action {
            CardAction::Delete(id) => self.tasks.spawn_delete(id),
            CardAction::Details(id) => self.tasks.spawn_details(id),
        }
    }

    // ---- remote completions ----

    fn apply(&mut self, msg: RemoteMsg) {
        debug!("applying {} result", msg.kind());
        match msg {
            RemoteMsg::Loaded(result) => self.movies.finish_load(result),
            RemoteMsg::Created(result) => {
                let created = self.movies.finish_add(result);
                self.form.finish_submit(created);
            }
            RemoteMsg::Deleted { id, result } => {
                self.movies.finish_delete(id, result);
            }
            RemoteMsg::Details { id, result } => self.movies.finish_details(id, result),
        }
        self.sync_genre_filter();
    }

    fn poll_remote(&mut self) {
        for msg in self.tasks.drain(MAX_MSGS_PER_FRAME) {
            self.apply(msg);
        }
    }

    /// Drop a genre filter whose last movie went away.
    fn sync_genre_filter(&mut self) {
        let Some(g) = self.genre_filter.as_deref() else { return };
        if filters::filtered_indices(self.movies.movies(), Some(g)).is_empty() {
            self.genre_filter = None;
        }
    }
}

// ========== App impl ==========
impl eframe::App for MovieDeskApp {
    fn update(&mut self, ctx: &eg::Context, _frame: &mut eframe::Frame) {
        // First frame
        if !self.did_init {
            self.did_init = true;
            info!("Loading movies from {}", self.config.api_base_url);
            self.request_load();
        }

        self.poll_remote();

        eg::TopBottomPanel::top("topbar").show(ctx, |ui| {
            self.ui_render_topbar(ui);
            self.ui_render_error_banner(ui);
        });

        eg::SidePanel::left("form_panel")
            .resizable(true)
            .default_width(300.0)
            .min_width(240.0)
            .show(ctx, |ui| self.ui_render_form(ui));

        self.ui_render_detail_panel(ctx);

        eg::CentralPanel::default().show(ctx, |ui| {
            if self.movies.is_loading() {
                self.ui_render_loading(ui);
            } else {
                self.ui_render_movie_grid(ui);
            }
        });
    }
}
