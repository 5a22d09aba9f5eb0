pub mod config;
pub mod interactive;
pub mod main_lib;
pub mod render;

pub use main_lib::{build_state, init_tracing, AppState};
