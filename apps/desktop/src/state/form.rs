//! # Form State
//!
//! Everything the window shows that can change: the controller's selection,
//! the receipt text in the display area, and the dialog currently open.
//!
//! ## Single Owner
//! The egui update loop owns the one `FormState` directly. All writes go
//! through `commands::dispatch`, one command at a time, so there is no lock.

use pizza_core::OrderForm;

use crate::error::UiError;

/// A dialog that blocks the rest of the form until answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Informational message with a single OK button.
    Message(UiError),

    /// "Are you sure you want to quit?" with Yes / No.
    ConfirmQuit,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    form: OrderForm,
    receipt: String,
    dialog: Option<Dialog>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut OrderForm {
        &mut self.form
    }

    /// Text in the order details area; empty until the first order.
    pub fn receipt(&self) -> &str {
        &self.receipt
    }

    pub fn set_receipt(&mut self, receipt: String) {
        self.receipt = receipt;
    }

    pub fn clear_receipt(&mut self) {
        self.receipt.clear();
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
    }

    pub fn close_dialog(&mut self) -> Option<Dialog> {
        self.dialog.take()
    }

    /// True while a dialog is open and the form widgets must ignore input.
    pub fn is_blocked(&self) -> bool {
        self.dialog.is_some()
    }
}
