pub mod auth;
pub mod clients;
pub mod sales;
pub mod tasks;
