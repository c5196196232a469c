pub mod cli;
pub mod config;
pub mod desktop;
pub mod error;
pub mod launch;
pub mod logging;
pub mod menu;
pub mod paths;
pub mod tray;
