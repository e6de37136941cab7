pub mod config;
pub mod flows;
pub mod routes;
pub mod validate;
