//! # Backend Module
//!
//! Embedded synchronous backend for the cash drawer counter. The UI owns a
//! single `Backend` instance and calls straight into it from event handlers;
//! there is no server, no async runtime, and no shared state outside this
//! struct.
//!
//! ## Module Organization:
//! - `domain` - Business logic: ledger calculation and export services
//! - `storage` - JSON-file persistence for saved drawer counts

pub mod domain;
pub mod storage;

use anyhow::Result;

use domain::export_service::ExportService;
use domain::ledger_service::LedgerService;
use storage::json::{JsonConnection, SnapshotRepository};

/// Service container wired up once at app startup.
pub struct Backend {
    pub ledger_service: LedgerService,
    pub export_service: ExportService,
    pub snapshot_repository: SnapshotRepository,
}

impl Backend {
    pub fn new() -> Result<Self> {
        let connection = JsonConnection::new()?;
        Ok(Self {
            ledger_service: LedgerService::new(),
            export_service: ExportService::new(),
            snapshot_repository: SnapshotRepository::new(connection),
        })
    }
}
