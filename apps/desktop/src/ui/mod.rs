//! Window and widgets.

pub mod app;

pub use app::PizzaApp;
