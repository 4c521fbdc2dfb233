pub mod api;
pub mod args;
pub mod config;
pub mod state;

pub use api::router;
pub use state::AppState;
