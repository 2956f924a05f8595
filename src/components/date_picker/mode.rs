//! Selection modes and the per-mode click interpreters
//!
//! Each mode is a small [`SelectionStrategy`] chosen once when the picker is
//! built. A strategy turns a clicked cell into a [`Transition`]: the next
//! [`SelectionState`], the value to emit (if any), and whether the popup
//! should close.

use super::grid::{ClickTarget, GridKind};
use super::selection::{DateValue, SelectionState};
use crate::date::CalendarDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How clicks are interpreted; fixed for a picker's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
    Week,
    Month,
    Year,
    Range,
}

impl SelectionMode {
    pub const ALL: [SelectionMode; 6] = [
        SelectionMode::Single,
        SelectionMode::Multiple,
        SelectionMode::Week,
        SelectionMode::Month,
        SelectionMode::Year,
        SelectionMode::Range,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Single => "single",
            SelectionMode::Multiple => "multiple",
            SelectionMode::Week => "week",
            SelectionMode::Month => "month",
            SelectionMode::Year => "year",
            SelectionMode::Range => "range",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far one navigation step moves the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStep {
    Months(i32),
    Years(i32),
}

/// Result of interpreting one click
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the click
    pub state: SelectionState,
    /// Value to report through `on_change`
    pub emit: Option<DateValue>,
    /// Whether the interaction is complete and the popup should close
    pub close: bool,
}

impl Transition {
    /// Commit a single date: replace the anchor, emit it, close
    fn commit_anchor(date: CalendarDate) -> Self {
        Transition {
            state: SelectionState::Anchor(Some(date)),
            emit: Some(DateValue::Date(date)),
            close: true,
        }
    }
}

/// Per-mode click interpretation and selection test
pub trait SelectionStrategy {
    fn mode(&self) -> SelectionMode;

    /// Which grid the popup shows
    fn grid(&self) -> GridKind {
        GridKind::Days
    }

    fn nav_step(&self) -> NavStep {
        NavStep::Months(1)
    }

    /// Nothing selected, in the shape this mode's state takes
    fn empty_state(&self) -> SelectionState {
        SelectionState::empty(self.mode())
    }

    /// Interpret a click; None when the target means nothing in this mode
    fn apply(&self, state: &SelectionState, target: ClickTarget) -> Option<Transition>;

    /// Whether a cell shows as selected
    fn is_selected(&self, state: &SelectionState, target: &ClickTarget) -> bool;
}

/// Build the strategy for a mode
pub fn strategy_for(mode: SelectionMode) -> Box<dyn SelectionStrategy> {
    match mode {
        SelectionMode::Single => Box::new(SingleDate),
        SelectionMode::Multiple => Box::new(MultipleDates),
        SelectionMode::Week => Box::new(WeekOfDate),
        SelectionMode::Month => Box::new(MonthOfYear),
        SelectionMode::Year => Box::new(YearOfWindow),
        SelectionMode::Range => Box::new(DateRange),
    }
}

struct SingleDate;

impl SelectionStrategy for SingleDate {
    fn mode(&self) -> SelectionMode {
        SelectionMode::Single
    }

    fn apply(&self, _state: &SelectionState, target: ClickTarget) -> Option<Transition> {
        match target {
            ClickTarget::Day(date) => Some(Transition::commit_anchor(date)),
            _ => None,
        }
    }

    fn is_selected(&self, state: &SelectionState, target: &ClickTarget) -> bool {
        match target {
            ClickTarget::Day(date) => state.anchor() == Some(*date),
            _ => false,
        }
    }
}

struct MultipleDates;

impl SelectionStrategy for MultipleDates {
    fn mode(&self) -> SelectionMode {
        SelectionMode::Multiple
    }

    fn apply(&self, state: &SelectionState, target: ClickTarget) -> Option<Transition> {
        let ClickTarget::Day(date) = target else {
            return None;
        };

        let mut dates = state.dates().to_vec();
        match dates.iter().position(|d| *d == date) {
            Some(pos) => {
                dates.remove(pos);
            }
            None => dates.push(date),
        }

        Some(Transition {
            emit: Some(DateValue::Dates(dates.clone())),
            state: SelectionState::Set(dates),
            close: false,
        })
    }

    fn is_selected(&self, state: &SelectionState, target: &ClickTarget) -> bool {
        match target {
            ClickTarget::Day(date) => state.dates().contains(date),
            _ => false,
        }
    }
}

/// Stores the clicked date; the week is derived when testing and formatting
struct WeekOfDate;

impl SelectionStrategy for WeekOfDate {
    fn mode(&self) -> SelectionMode {
        SelectionMode::Week
    }

    fn apply(&self, _state: &SelectionState, target: ClickTarget) -> Option<Transition> {
        match target {
            ClickTarget::Day(date) => Some(Transition::commit_anchor(date)),
            _ => None,
        }
    }

    fn is_selected(&self, state: &SelectionState, target: &ClickTarget) -> bool {
        match (target, state.anchor()) {
            (ClickTarget::Day(date), Some(anchor)) => {
                *date >= anchor.week_start() && *date <= anchor.week_end()
            }
            _ => false,
        }
    }
}

struct MonthOfYear;

impl SelectionStrategy for MonthOfYear {
    fn mode(&self) -> SelectionMode {
        SelectionMode::Month
    }

    fn grid(&self) -> GridKind {
        GridKind::Months
    }

    fn nav_step(&self) -> NavStep {
        NavStep::Years(1)
    }

    fn apply(&self, _state: &SelectionState, target: ClickTarget) -> Option<Transition> {
        match target {
            ClickTarget::Month { year, month0 } => {
                CalendarDate::new(year, month0 + 1, 1).map(Transition::commit_anchor)
            }
            _ => None,
        }
    }

    fn is_selected(&self, state: &SelectionState, target: &ClickTarget) -> bool {
        match (target, state.anchor()) {
            (ClickTarget::Month { year, month0 }, Some(anchor)) => {
                anchor.year() == *year && anchor.month0() == *month0
            }
            _ => false,
        }
    }
}

struct YearOfWindow;

impl SelectionStrategy for YearOfWindow {
    fn mode(&self) -> SelectionMode {
        SelectionMode::Year
    }

    fn grid(&self) -> GridKind {
        GridKind::Years
    }

    fn nav_step(&self) -> NavStep {
        NavStep::Years(12)
    }

    fn apply(&self, _state: &SelectionState, target: ClickTarget) -> Option<Transition> {
        match target {
            ClickTarget::Year(year) => {
                CalendarDate::new(year, 1, 1).map(Transition::commit_anchor)
            }
            _ => None,
        }
    }

    fn is_selected(&self, state: &SelectionState, target: &ClickTarget) -> bool {
        match (target, state.anchor()) {
            (ClickTarget::Year(year), Some(anchor)) => anchor.year() == *year,
            _ => false,
        }
    }
}

/// Two-click range: first click opens, second finalizes in ascending order
struct DateRange;

impl SelectionStrategy for DateRange {
    fn mode(&self) -> SelectionMode {
        SelectionMode::Range
    }

    fn apply(&self, state: &SelectionState, target: ClickTarget) -> Option<Transition> {
        let ClickTarget::Day(date) = target else {
            return None;
        };

        match state.range() {
            (Some(pending), None) => {
                let (start, end) = if date < pending {
                    (date, pending)
                } else {
                    (pending, date)
                };
                Some(Transition {
                    state: SelectionState::Range {
                        start: Some(start),
                        end: Some(end),
                    },
                    emit: Some(DateValue::Range {
                        start: Some(start),
                        end: Some(end),
                    }),
                    close: true,
                })
            }
            // No start yet, or a finished pair: begin a new range
            _ => Some(Transition {
                state: SelectionState::Range {
                    start: Some(date),
                    end: None,
                },
                emit: None,
                close: false,
            }),
        }
    }

    fn is_selected(&self, state: &SelectionState, target: &ClickTarget) -> bool {
        let ClickTarget::Day(date) = target else {
            return false;
        };
        match state.range() {
            (Some(start), Some(end)) => *date >= start && *date <= end,
            (start, None) => start == Some(*date),
            (None, Some(_)) => false,
        }
    }
}
