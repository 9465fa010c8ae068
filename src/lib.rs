pub mod config;
pub mod console;
pub mod logging;
pub mod model;
pub mod shutdown;
pub mod store;
pub mod ui;
