pub mod clock;
pub mod errors;
pub mod products;
pub mod subscriptions;
