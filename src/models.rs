pub mod appointment;
pub mod auth;
pub mod client;
pub mod report;
pub mod sale;
pub mod status;
pub mod task;
