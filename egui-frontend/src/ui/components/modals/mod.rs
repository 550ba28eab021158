pub mod export_modal;
pub mod reset_confirm;
