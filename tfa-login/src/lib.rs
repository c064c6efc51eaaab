pub mod args;
pub mod client;
pub mod logger;
pub mod state;
pub mod views;
