pub mod catalog;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;
pub mod ui;

use catalog::MovieCatalog;
use config::TheatreConfig;

// State for the whole application, owned by the booking service once built
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: MovieCatalog,
    pub rules: TheatreConfig,
}

impl AppState {
    pub fn new(rules: TheatreConfig) -> Self {
        let catalog = MovieCatalog::new(rules.capacity);
        Self { catalog, rules }
    }
}
