//! Car catalog
//!
//! Manufacturers, car models and cars in PostgreSQL, exposed through HTML
//! pages and a JSON API. The car listing can be narrowed by manufacturer
//! and/or model.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
pub mod views;

pub use routes::create_app;
pub use state::AppState;
