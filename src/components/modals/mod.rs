pub mod confirm;
pub mod editor;
pub mod error;
pub mod help;
pub mod helpers;
pub mod manager;

pub use manager::ModalManager;
