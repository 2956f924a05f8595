//! Selection state and the values a picker emits

use super::mode::SelectionMode;
use crate::date::CalendarDate;

/// Value reported through `on_change` and accepted as an initial value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    /// A single date (single, week, month, and year modes)
    Date(CalendarDate),
    /// Every selected date, in selection order (multiple mode)
    Dates(Vec<CalendarDate>),
    /// Range endpoints (range mode)
    Range {
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
    },
}

/// What the picker currently holds; the shape follows the mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// At most one anchor date (single, week, month, year)
    Anchor(Option<CalendarDate>),
    /// Selected dates without duplicates (multiple)
    Set(Vec<CalendarDate>),
    /// Range endpoints; `end` is only present together with `start`, and
    /// `start <= end` once both are set
    Range {
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
    },
}

impl SelectionState {
    /// Nothing selected, in the shape the mode expects
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Multiple => SelectionState::Set(Vec::new()),
            SelectionMode::Range => SelectionState::Range {
                start: None,
                end: None,
            },
            _ => SelectionState::Anchor(None),
        }
    }

    /// Seed state from an initial value
    ///
    /// A value whose shape does not fit the mode yields the empty state.
    pub fn from_value(mode: SelectionMode, value: DateValue) -> Self {
        match (mode, value) {
            (SelectionMode::Multiple, DateValue::Dates(dates)) => {
                let mut unique: Vec<CalendarDate> = Vec::with_capacity(dates.len());
                for date in dates {
                    if !unique.contains(&date) {
                        unique.push(date);
                    }
                }
                SelectionState::Set(unique)
            }
            (SelectionMode::Range, DateValue::Range { start, end }) => match (start, end) {
                (Some(a), Some(b)) => SelectionState::Range {
                    start: Some(a.min(b)),
                    end: Some(a.max(b)),
                },
                (Some(a), None) | (None, Some(a)) => SelectionState::Range {
                    start: Some(a),
                    end: None,
                },
                (None, None) => SelectionState::empty(mode),
            },
            (SelectionMode::Month, DateValue::Date(date)) => {
                SelectionState::Anchor(CalendarDate::new(date.year(), date.month(), 1))
            }
            (SelectionMode::Year, DateValue::Date(date)) => {
                SelectionState::Anchor(CalendarDate::new(date.year(), 1, 1))
            }
            (SelectionMode::Single | SelectionMode::Week, DateValue::Date(date)) => {
                SelectionState::Anchor(Some(date))
            }
            (mode, value) => {
                tracing::warn!(?mode, ?value, "initial value does not fit mode, ignoring");
                SelectionState::empty(mode)
            }
        }
    }

    /// The anchor date, if this is an anchor state holding one
    pub fn anchor(&self) -> Option<CalendarDate> {
        match self {
            SelectionState::Anchor(anchor) => *anchor,
            _ => None,
        }
    }

    /// Selected dates of a set state
    pub fn dates(&self) -> &[CalendarDate] {
        match self {
            SelectionState::Set(dates) => dates,
            _ => &[],
        }
    }

    /// Range endpoints of a range state
    pub fn range(&self) -> (Option<CalendarDate>, Option<CalendarDate>) {
        match self {
            SelectionState::Range { start, end } => (*start, *end),
            _ => (None, None),
        }
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        match self {
            SelectionState::Anchor(anchor) => anchor.is_none(),
            SelectionState::Set(dates) => dates.is_empty(),
            SelectionState::Range { start, .. } => start.is_none(),
        }
    }

    /// Whether a range has its start but is waiting for an end
    pub fn is_range_pending(&self) -> bool {
        matches!(
            self,
            SelectionState::Range {
                start: Some(_),
                end: None
            }
        )
    }

    /// The current selection as an emitted value, if anything is selected
    pub fn value(&self) -> Option<DateValue> {
        match self {
            SelectionState::Anchor(anchor) => anchor.map(DateValue::Date),
            SelectionState::Set(dates) => Some(DateValue::Dates(dates.clone())),
            SelectionState::Range { start: None, .. } => None,
            SelectionState::Range { start, end } => Some(DateValue::Range {
                start: *start,
                end: *end,
            }),
        }
    }
}
