pub mod auth;
pub mod company;
pub mod health;
pub mod job;
pub mod validation;
