pub mod admin;
pub mod health;
pub mod officer;
pub mod results;
