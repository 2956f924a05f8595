//! mkui-calendar - terminal date picker widgets for mkui-style hosts
//!
//! One [`DatePicker`] component covers six selection modes:
//! - single date, multiple dates, week, month, year and date range
//! - a popup calendar that closes on outside presses and Escape
//! - locale-aware display text (Korean and English tables)
//! - mouse and keyboard input through the mkui event model

pub mod component;
pub mod components;
pub mod config;
pub mod context;
pub mod date;
pub mod event;
pub mod focus;
pub mod i18n;
pub mod layout;
pub mod listeners;
pub mod logging;
pub mod render;
pub mod theme;

// Re-export commonly used types
pub use component::{dispatch_event, Component};
pub use components::{
    ClickTarget, CloseReason, DatePicker, DateValue, GridKind, SelectionMode, SelectionState,
};
pub use config::{ConfigError, DatePickerConfig, ShowcaseConfig};
pub use context::{RenderContext, UseLocale, UseTheme};
pub use date::{CalendarDate, ViewPosition};
pub use event::{Event, EventHandler, Key};
pub use focus::{FocusDirection, FocusRing};
pub use i18n::Locale;
pub use layout::Rect;
pub use listeners::{ListenerKind, ListenerRegistry, Subscription};
pub use render::Renderer;
pub use theme::{BorderStyle, Color, Theme};
