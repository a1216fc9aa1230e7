pub mod auth;
pub mod client;
pub mod describe;
pub mod proxy;
pub mod utils;
