pub mod auth;
pub mod client_service;
pub mod lifecycle;
pub mod report_service;
pub mod sale_service;
pub mod task_service;
