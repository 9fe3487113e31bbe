//! # Commands Module
//!
//! Every user interaction with the form, as data.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Form Commands                                      │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐         │
//! │  │    form.rs      │  │    order.rs     │  │    quit.rs      │         │
//! │  │                 │  │                 │  │                 │         │
//! │  │ select_crust    │  │ place_order     │  │ request_quit    │         │
//! │  │ select_size     │  │                 │  │ answer_quit     │         │
//! │  │ toggle_topping  │  │                 │  │                 │         │
//! │  │ clear_form      │  │                 │  │                 │         │
//! │  │ dismiss_dialog  │  │                 │  │                 │         │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘         │
//! │                                                                         │
//! │  Each handler returns Result<CommandOutcome, UiError>.                  │
//! │  dispatch() turns an Err into a blocking message dialog.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod form;
pub mod order;
pub mod quit;

use tracing::debug;

use pizza_core::{CrustType, QuitResponse, SizeOption, Topping};

use crate::error::UiError;
use crate::state::{ConfigState, Dialog, FormState};

/// A user interaction forwarded by the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    SelectCrust(CrustType),
    SelectSize(SizeOption),
    ToggleTopping(Topping, bool),
    /// "Order" button
    Order,
    /// "Clear" button
    Clear,
    /// "Quit" button or the window's close button
    Quit,
    /// Answer to the quit confirmation
    AnswerQuit(QuitResponse),
    /// OK on a message dialog
    DismissDialog,
}

impl FormCommand {
    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            FormCommand::SelectCrust(_) => "select_crust",
            FormCommand::SelectSize(_) => "select_size",
            FormCommand::ToggleTopping(..) => "toggle_topping",
            FormCommand::Order => "order",
            FormCommand::Clear => "clear",
            FormCommand::Quit => "quit",
            FormCommand::AnswerQuit(_) => "answer_quit",
            FormCommand::DismissDialog => "dismiss_dialog",
        }
    }
}

/// What the window should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    /// The user confirmed quitting; close the window and end the process.
    Exit,
}

/// Result type returned by the individual command handlers.
pub type CommandResult = Result<CommandOutcome, UiError>;

/// Applies one command to the form state.
pub fn dispatch(state: &mut FormState, config: &ConfigState, command: FormCommand) -> CommandOutcome {
    debug!(command = command.name(), ?command, "dispatching form command");

    let result = match command {
        FormCommand::SelectCrust(crust) => form::select_crust(state, crust),
        FormCommand::SelectSize(size) => form::select_size(state, size),
        FormCommand::ToggleTopping(topping, selected) => {
            form::toggle_topping(state, topping, selected)
        }
        FormCommand::Order => order::place_order(state, config),
        FormCommand::Clear => form::clear_form(state),
        FormCommand::Quit => quit::request_quit(state),
        FormCommand::AnswerQuit(response) => quit::answer_quit(state, response),
        FormCommand::DismissDialog => form::dismiss_dialog(state),
    };

    match result {
        Ok(outcome) => outcome,
        Err(err) => {
            debug!(code = ?err.code, message = %err.message, "command rejected");
            state.open_dialog(Dialog::Message(err));
            CommandOutcome::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: &mut FormState, commands: &[FormCommand]) -> Vec<CommandOutcome> {
        let config = ConfigState::default();
        commands
            .iter()
            .map(|command| dispatch(state, &config, *command))
            .collect()
    }

    #[test]
    fn test_order_flow_renders_receipt() {
        let mut state = FormState::new();
        run(
            &mut state,
            &[
                FormCommand::SelectCrust(CrustType::Thin),
                FormCommand::SelectSize(SizeOption::Medium),
                FormCommand::ToggleTopping(Topping::Pepperoni, true),
                FormCommand::ToggleTopping(Topping::Olives, true),
                FormCommand::Order,
            ],
        );

        assert!(state.dialog().is_none());
        assert!(state.receipt().contains("Total: $14.98"));
    }

    #[test]
    fn test_order_without_crust_opens_message() {
        let mut state = FormState::new();
        let outcomes = run(
            &mut state,
            &[FormCommand::ToggleTopping(Topping::Cheese, true), FormCommand::Order],
        );

        assert_eq!(outcomes, vec![CommandOutcome::Continue; 2]);
        match state.dialog() {
            Some(Dialog::Message(err)) => assert_eq!(err.message, "Please select a crust type."),
            other => panic!("unexpected dialog: {other:?}"),
        }
        assert_eq!(state.receipt(), "");
    }

    #[test]
    fn test_order_without_toppings_opens_message() {
        let mut state = FormState::new();
        run(
            &mut state,
            &[FormCommand::SelectCrust(CrustType::Regular), FormCommand::Order],
        );

        match state.dialog() {
            Some(Dialog::Message(err)) => {
                assert!(err.is_validation());
                assert_eq!(err.message, "Please select at least one topping.");
            }
            other => panic!("unexpected dialog: {other:?}"),
        }
    }

    #[test]
    fn test_failed_order_keeps_previous_receipt() {
        let mut state = FormState::new();
        run(
            &mut state,
            &[
                FormCommand::SelectCrust(CrustType::Thin),
                FormCommand::ToggleTopping(Topping::Bacon, true),
                FormCommand::Order,
            ],
        );
        let receipt = state.receipt().to_string();

        run(
            &mut state,
            &[FormCommand::ToggleTopping(Topping::Bacon, false), FormCommand::Order],
        );
        assert_eq!(state.receipt(), receipt);
        assert!(state.is_blocked());
    }

    #[test]
    fn test_clear_resets_form_and_receipt() {
        let mut state = FormState::new();
        run(
            &mut state,
            &[
                FormCommand::SelectCrust(CrustType::DeepDish),
                FormCommand::SelectSize(SizeOption::Large),
                FormCommand::ToggleTopping(Topping::Mushrooms, true),
                FormCommand::Order,
                FormCommand::Clear,
            ],
        );

        assert_eq!(state.receipt(), "");
        assert_eq!(state.form().crust(), None);
        assert_eq!(state.form().size(), SizeOption::Small);
        assert!(!state.form().is_topping_selected(Topping::Mushrooms));
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let mut state = FormState::new();
        let outcomes = run(
            &mut state,
            &[FormCommand::Quit, FormCommand::AnswerQuit(QuitResponse::No)],
        );
        assert_eq!(outcomes, vec![CommandOutcome::Continue; 2]);
        assert!(state.dialog().is_none());

        let outcomes = run(
            &mut state,
            &[FormCommand::Quit, FormCommand::AnswerQuit(QuitResponse::Yes)],
        );
        assert_eq!(outcomes, vec![CommandOutcome::Continue, CommandOutcome::Exit]);
    }

    #[test]
    fn test_dismiss_closes_message() {
        let mut state = FormState::new();
        run(&mut state, &[FormCommand::Order]);
        assert!(state.is_blocked());

        run(&mut state, &[FormCommand::DismissDialog]);
        assert!(!state.is_blocked());
    }

    #[test]
    fn test_command_names() {
        assert_eq!(FormCommand::Order.name(), "order");
        assert_eq!(
            FormCommand::ToggleTopping(Topping::Cheese, false).name(),
            "toggle_topping"
        );
    }
}
