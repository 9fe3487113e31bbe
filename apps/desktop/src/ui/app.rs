//! The order form window.
//!
//! Layout:
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Order Details (read-only receipt text)       │
//! ├────────────┬───────────────┬─────────────────┤
//! │ Crust      │ Size          │ Toppings (3×2)  │
//! │ ( ) Thin   │ [Small    ▼]  │ [ ] Cheese  ... │
//! ├────────────┴───────────────┴─────────────────┤
//! │           [Order] [Clear] [Quit]             │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Widgets only read state and collect `FormCommand`s; the commands are
//! dispatched after all panels are drawn.

use pizza_core::{CrustType, QuitResponse, SizeOption, Topping};

use crate::commands::{dispatch, CommandOutcome, FormCommand};
use crate::state::{ConfigState, Dialog, FormState};

pub struct PizzaApp {
    state: FormState,
    config: ConfigState,
    /// Set once the user confirmed quitting so the next close request passes.
    allowed_to_close: bool,
}

impl PizzaApp {
    pub fn new(config: ConfigState) -> Self {
        Self {
            state: FormState::new(),
            config,
            allowed_to_close: false,
        }
    }

    fn show_order_details(&self, ui: &mut egui::Ui) {
        ui.strong("Order Details");
        let mut receipt = self.state.receipt();
        egui::ScrollArea::vertical()
            .max_height(160.0)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut receipt)
                        .font(egui::TextStyle::Monospace)
                        .desired_rows(8)
                        .desired_width(f32::INFINITY),
                );
            });
    }

    fn show_crust(&self, ui: &mut egui::Ui, commands: &mut Vec<FormCommand>) {
        ui.strong("Select Crust Type");
        let current = self.state.form().crust();
        for crust in CrustType::ALL {
            if ui.radio(current == Some(crust), crust.label()).clicked() {
                commands.push(FormCommand::SelectCrust(crust));
            }
        }
    }

    fn show_size(&self, ui: &mut egui::Ui, commands: &mut Vec<FormCommand>) {
        ui.strong("Select Size");
        let current = self.state.form().size();
        egui::ComboBox::from_id_salt("size_combo")
            .selected_text(current.label())
            .show_ui(ui, |ui| {
                for size in SizeOption::ALL {
                    if ui.selectable_label(current == size, size.label()).clicked() {
                        commands.push(FormCommand::SelectSize(size));
                    }
                }
            });
    }

    fn show_toppings(&self, ui: &mut egui::Ui, commands: &mut Vec<FormCommand>) {
        ui.strong("Select Toppings");
        egui::Grid::new("toppings_grid")
            .num_columns(2)
            .show(ui, |ui| {
                for (i, topping) in Topping::ALL.into_iter().enumerate() {
                    let mut checked = self.state.form().is_topping_selected(topping);
                    if ui.checkbox(&mut checked, topping.label()).changed() {
                        commands.push(FormCommand::ToggleTopping(topping, checked));
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    }

    fn show_buttons(&self, ui: &mut egui::Ui, commands: &mut Vec<FormCommand>) {
        ui.horizontal(|ui| {
            if ui.button("Order").clicked() {
                commands.push(FormCommand::Order);
            }
            if ui.button("Clear").clicked() {
                commands.push(FormCommand::Clear);
            }
            if ui.button("Quit").clicked() {
                commands.push(FormCommand::Quit);
            }
        });
    }

    fn show_dialog(&self, ctx: &egui::Context, commands: &mut Vec<FormCommand>) {
        let Some(dialog) = self.state.dialog() else {
            return;
        };

        let title = match dialog {
            Dialog::Message(_) => "Message",
            Dialog::ConfirmQuit => "Confirm Quit",
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| match dialog {
                Dialog::Message(err) => {
                    ui.label(err.message.as_str());
                    if ui.button("OK").clicked() {
                        commands.push(FormCommand::DismissDialog);
                    }
                }
                Dialog::ConfirmQuit => {
                    ui.label("Are you sure you want to quit?");
                    ui.horizontal(|ui| {
                        if ui.button("Yes").clicked() {
                            commands.push(FormCommand::AnswerQuit(QuitResponse::Yes));
                        }
                        if ui.button("No").clicked() {
                            commands.push(FormCommand::AnswerQuit(QuitResponse::No));
                        }
                    });
                }
            });
    }
}

impl eframe::App for PizzaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = Vec::new();

        // The window's close button asks first, same as the Quit button.
        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            if !self.state.is_blocked() {
                commands.push(FormCommand::Quit);
            }
        }

        let blocked = self.state.is_blocked();

        egui::TopBottomPanel::top("order_details_panel").show(ctx, |ui| {
            self.show_order_details(ui);
        });

        egui::TopBottomPanel::bottom("button_panel").show(ctx, |ui| {
            if blocked {
                ui.disable();
            }
            self.show_buttons(ui, &mut commands);
        });

        egui::SidePanel::left("crust_panel")
            .resizable(false)
            .show(ctx, |ui| {
                if blocked {
                    ui.disable();
                }
                self.show_crust(ui, &mut commands);
            });

        egui::SidePanel::right("toppings_panel")
            .resizable(false)
            .show(ctx, |ui| {
                if blocked {
                    ui.disable();
                }
                self.show_toppings(ui, &mut commands);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if blocked {
                ui.disable();
            }
            self.show_size(ui, &mut commands);
        });

        self.show_dialog(ctx, &mut commands);

        for command in commands {
            if dispatch(&mut self.state, &self.config, command) == CommandOutcome::Exit {
                self.allowed_to_close = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}
