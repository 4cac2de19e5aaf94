pub mod car;
pub mod customer;
pub mod report;
pub mod sale;

pub use car::{Car, CarPayload};
pub use customer::Customer;
pub use report::BrandSales;
pub use sale::SalePayload;
