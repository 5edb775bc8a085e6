pub mod errors;
pub mod routes;
pub mod server;
pub mod settings;
pub mod state;

pub use server::{ServerConfig, serve};
pub use settings::Settings;
