//! The three panels of the lookup screen.

pub mod catalog;
pub mod name_input;
pub mod result_panel;

pub use catalog::CatalogPicker;
pub use name_input::NameInput;
pub use result_panel::ResultPanel;
