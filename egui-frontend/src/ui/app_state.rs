//! # App State Module
//!
//! Central application state for the cash drawer counter.
//!
//! ## Purpose:
//! `CashDrawerApp` holds everything in one place: the backend services, the
//! raw text of every tracked input field, the transient banner messages, and
//! which overlay modal (if any) is open. All UI components are `impl` blocks
//! on this struct, following the single-source-of-truth pattern.

use log::info;

use crate::backend::domain::ledger_service::DrawerForm;
use crate::backend::Backend;

/// Main application struct for the egui cash drawer counter.
pub struct CashDrawerApp {
    pub backend: Backend,

    /// Raw text of every tracked field; totals derive from this each frame
    pub form: DrawerForm,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,

    // Modal states
    pub show_export_modal: bool,
    pub show_reset_confirm: bool,
}

impl CashDrawerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("Initializing CashDrawerApp");

        crate::ui::components::styling::setup_drawer_style(&cc.egui_ctx);

        let backend = Backend::new()?;

        Ok(Self {
            backend,
            form: DrawerForm::new(),
            error_message: None,
            success_message: None,
            show_export_modal: false,
            show_reset_confirm: false,
        })
    }

    /// Clear any error or success messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }
}
