pub mod errors;
pub mod products;
pub mod subscriptions;
