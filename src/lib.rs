// Library surface for the binary and for headless/integration tests.
pub mod app;
pub mod app_dirs;
pub mod canvas;
pub mod celebration;
pub mod config;
pub mod content;
pub mod error;
pub mod feedback;
pub mod games;
pub mod logging;
pub mod match_grid;
pub mod pacing;
pub mod round;
pub mod runtime;
pub mod ui;
pub mod util;
