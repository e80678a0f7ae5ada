pub mod app_context;
pub mod config;
pub mod document;
pub mod errors;
pub mod graphql;
pub mod ids;
pub mod server;
pub mod store;
