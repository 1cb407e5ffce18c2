pub mod api;
pub mod assembly;
pub mod config;
pub mod content;
pub mod layout;
pub mod render;
