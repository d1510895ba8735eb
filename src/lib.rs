pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod dispute;
pub mod domain;
pub mod error;
pub mod utils;

pub use client::{AdminApiClient, ClientError};
pub use config::Config;
pub use error::AppError;
