pub mod config;
pub mod cors;
pub mod error;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod storage;
pub mod telemetry;
