pub mod agents;
pub mod app;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod credentials;
pub mod keyring;
pub mod message;
pub mod model_client;
pub mod session;
