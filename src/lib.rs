pub mod analysis;
pub mod environment;
pub mod web;

pub use environment::EnvironmentConfig;
pub use web::start_web_server;
