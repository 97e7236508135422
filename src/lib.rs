//! Sales trainer: per-user training sessions, scoring and scenario catalog.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gateway;
pub mod scoring;
pub mod session;
