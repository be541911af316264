// Public API for integration tests and potential library usage

pub mod api;
pub mod config;
pub mod error;
pub mod order;
pub mod phrases;
pub mod protocol;
pub mod reveal;
pub mod selector;
pub mod session;
pub mod state;
pub mod types;
pub mod ws;
