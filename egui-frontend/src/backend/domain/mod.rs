//! Domain layer: pure calculation logic plus the export orchestration.

pub mod export_service;
pub mod ledger_service;
pub mod models;
