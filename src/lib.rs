pub mod analytics;
pub mod calendar;
pub mod config;
pub mod ledger;
pub mod models;
pub mod service;
pub mod storage;
