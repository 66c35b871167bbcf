pub mod products;
pub mod subscriptions;
