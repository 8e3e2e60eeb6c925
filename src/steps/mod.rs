pub mod auth;
pub mod companies;
pub mod dashboard;
pub mod hakedis;
pub mod inspections;
pub mod static_checks;
