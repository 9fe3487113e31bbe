//! # Quit Commands
//!
//! Quit is two steps: the button (or the window close button) opens the
//! confirmation, and the answer decides. The window never closes on the
//! first click.

use tracing::info;

use pizza_core::QuitResponse;

use super::{CommandOutcome, CommandResult};
use crate::state::{Dialog, FormState};

pub fn request_quit(state: &mut FormState) -> CommandResult {
    state.open_dialog(Dialog::ConfirmQuit);
    Ok(CommandOutcome::Continue)
}

pub fn answer_quit(state: &mut FormState, response: QuitResponse) -> CommandResult {
    state.close_dialog();

    if state.form().confirm_quit(response) {
        info!("quit confirmed");
        Ok(CommandOutcome::Exit)
    } else {
        Ok(CommandOutcome::Continue)
    }
}
