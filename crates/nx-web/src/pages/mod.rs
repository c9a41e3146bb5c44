pub mod gateways;
pub mod not_found;
pub mod overview;
