pub mod app_state;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

#[cfg(test)]
pub mod test_utils;
