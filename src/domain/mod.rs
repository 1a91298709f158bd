pub mod editor;
pub mod engine;
pub mod error;
pub mod history;
pub mod models;
pub mod registry;
pub mod store;
