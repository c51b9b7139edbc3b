//! Configuration and shared request/delivery models

pub mod config;
pub mod models;
