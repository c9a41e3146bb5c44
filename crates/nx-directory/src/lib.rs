pub mod client;
pub mod error;
pub mod presence;
pub mod topology;

pub use client::DirectoryClient;
pub use error::DirectoryError;
