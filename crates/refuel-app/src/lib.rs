//! Application service layer - dispatch use case, config, logging

pub mod app;
pub mod config;
pub mod logging;
pub mod repository;
