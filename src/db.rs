pub mod user_repo;
pub use user_repo::UserRepository;
pub mod rbac_repo;
pub use rbac_repo::RbacRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod status_repo;
pub use status_repo::StatusRepository;
pub mod sale_repo;
pub use sale_repo::SaleRepository;
pub mod task_repo;
pub use task_repo::TaskRepository;
pub mod report_repo;
pub use report_repo::ReportRepository;
