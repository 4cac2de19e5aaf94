pub mod dealership;

pub use dealership::DealershipService;
