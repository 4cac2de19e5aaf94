pub mod car_repo;
pub mod customer_repo;
pub mod report_repo;
pub mod sale_repo;

pub use car_repo::CarRepository;
pub use customer_repo::CustomerRepository;
pub use report_repo::ReportRepository;
pub use sale_repo::SaleRepository;
