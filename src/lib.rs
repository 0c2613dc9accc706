//! Library crate for scorewatch exposing reusable modules.
pub mod app;
pub mod board;
pub mod fetch;
pub mod ranking;
pub mod sla;
pub mod status;
pub mod types;
pub mod ui;
