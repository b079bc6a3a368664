pub mod config;
pub mod events;
pub mod gui;
pub mod state;
pub mod sys;
