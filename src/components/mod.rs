//! Built-in UI components

pub mod date_picker;
pub mod frame;
pub mod text;

pub use date_picker::{
    Cell, ClickTarget, CloseReason, DatePicker, DateValue, GridKind, OnChange, SelectionMode,
    SelectionState, SelectionStrategy,
};
pub use frame::draw_frame;
