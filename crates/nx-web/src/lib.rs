pub mod app;
pub mod components;
pub mod pages;
pub mod server_fns;
pub mod types;
