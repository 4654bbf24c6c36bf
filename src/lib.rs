pub mod api;
pub mod cancel;
pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod store;
pub mod ui;
