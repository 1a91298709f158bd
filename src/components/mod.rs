pub mod footer;
pub mod header;
pub mod history;
pub mod modals;
pub mod sidebar;
pub mod stage;
