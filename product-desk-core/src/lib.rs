pub mod models;
pub mod products_api;
pub mod worldtime;

// Widget state + operations
pub mod manager;
