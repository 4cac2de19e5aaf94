pub mod cars;
pub mod customers;
pub mod health;
pub mod reports;
pub mod sales;
