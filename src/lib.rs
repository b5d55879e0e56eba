pub mod assemble;
pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod templates;

use crate::repository::MovieRepository;

#[derive(Clone)]
pub struct AppState {
    pub repo: MovieRepository,
}
