//! motorctl: drive the motor panel endpoints from a terminal

pub mod commands;
pub mod config;
pub mod http;

pub use commands::Overrides;
pub use config::Config;
pub use http::ReqwestTransport;
