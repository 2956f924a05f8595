//! Calendar grid computation
//!
//! Pure functions of the view position, the current selection (for the
//! selected flag), and today's date (for the today flag).

use super::mode::{NavStep, SelectionStrategy};
use super::selection::SelectionState;
use crate::date::{days_in_month, CalendarDate, ViewPosition};

/// Number of cells in the month and year views
pub const PICKER_CELLS: usize = 12;

/// Which grid the popup shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKind {
    Days,
    Months,
    Years,
}

impl GridKind {
    /// Cells per row
    pub fn columns(&self) -> usize {
        match self {
            GridKind::Days => 7,
            GridKind::Months | GridKind::Years => 4,
        }
    }
}

/// What a non-padding cell selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    Day(CalendarDate),
    /// A month of a year; `month0` is 0-11
    Month { year: i32, month0: u32 },
    Year(i32),
}

/// One rendered grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// None for the padding before the first day of a month
    pub target: Option<ClickTarget>,
    pub is_selected: bool,
    pub is_today: bool,
}

impl Cell {
    fn padding() -> Self {
        Cell {
            target: None,
            is_selected: false,
            is_today: false,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.target.is_none()
    }
}

/// Build the cells for the strategy's grid at the given view
pub fn build_cells(
    strategy: &dyn SelectionStrategy,
    view: ViewPosition,
    state: &SelectionState,
    today: CalendarDate,
) -> Vec<Cell> {
    let targets = match strategy.grid() {
        GridKind::Days => day_targets(view),
        GridKind::Months => month_targets(view),
        GridKind::Years => year_targets(view),
    };

    targets
        .into_iter()
        .map(|target| match target {
            None => Cell::padding(),
            Some(target) => Cell {
                is_selected: strategy.is_selected(state, &target),
                is_today: is_today(&target, today),
                target: Some(target),
            },
        })
        .collect()
}

/// Leading padding for the weekday of the 1st, then every day of the month
fn day_targets(view: ViewPosition) -> Vec<Option<ClickTarget>> {
    let Some(first) = view.first_day() else {
        return Vec::new();
    };
    let leading = first.weekday_from_sunday() as usize;
    let month = view.month0() + 1;
    let days = days_in_month(view.year(), month);

    let mut targets = Vec::with_capacity(leading + days as usize);
    targets.extend(std::iter::repeat_n(None, leading));
    targets.extend(
        (1..=days)
            .filter_map(|day| CalendarDate::new(view.year(), month, day))
            .map(|date| Some(ClickTarget::Day(date))),
    );
    targets
}

fn month_targets(view: ViewPosition) -> Vec<Option<ClickTarget>> {
    (0..PICKER_CELLS as u32)
        .map(|month0| {
            Some(ClickTarget::Month {
                year: view.year(),
                month0,
            })
        })
        .collect()
}

fn year_targets(view: ViewPosition) -> Vec<Option<ClickTarget>> {
    let start = view.year_window_start();
    (0..PICKER_CELLS as i32)
        .map(|offset| Some(ClickTarget::Year(start + offset)))
        .collect()
}

fn is_today(target: &ClickTarget, today: CalendarDate) -> bool {
    match *target {
        ClickTarget::Day(date) => date == today,
        ClickTarget::Month { year, month0 } => year == today.year() && month0 == today.month0(),
        ClickTarget::Year(year) => year == today.year(),
    }
}

/// Move the view one step in the given direction (-1 back, +1 forward)
pub fn navigate(view: ViewPosition, step: NavStep, direction: i32) -> ViewPosition {
    match step {
        NavStep::Months(n) => view.shift_months(n * direction),
        NavStep::Years(n) => view.shift_years(n * direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::date_picker::mode::{strategy_for, SelectionMode};

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    fn cells_for(mode: SelectionMode, view: ViewPosition) -> Vec<Cell> {
        let strategy = strategy_for(mode);
        build_cells(
            strategy.as_ref(),
            view,
            &SelectionState::empty(mode),
            d(2024, 3, 15),
        )
    }

    #[test]
    fn test_day_grid_sizes_for_every_month() {
        for year in [1900, 2000, 2023, 2024, 2025] {
            for month0 in 0..12u32 {
                let view = ViewPosition::new(year, month0 as i32);
                let cells = cells_for(SelectionMode::Single, view);

                let first = d(year, month0 + 1, 1);
                let leading = first.weekday_from_sunday() as usize;
                let days = days_in_month(year, month0 + 1) as usize;

                assert_eq!(cells.len(), leading + days, "{}-{}", year, month0 + 1);
                assert!(cells[..leading].iter().all(Cell::is_padding));
                assert!(cells[leading..].iter().all(|c| !c.is_padding()));
            }
        }
    }

    #[test]
    fn test_february_leap_years() {
        let leap = cells_for(SelectionMode::Single, ViewPosition::new(2024, 1));
        let non_leap = cells_for(SelectionMode::Single, ViewPosition::new(2023, 1));

        let count_days = |cells: &[Cell]| cells.iter().filter(|c| !c.is_padding()).count();
        assert_eq!(count_days(&leap), 29);
        assert_eq!(count_days(&non_leap), 28);
    }

    #[test]
    fn test_march_2024_layout() {
        // March 1st 2024 is a Friday
        let cells = cells_for(SelectionMode::Single, ViewPosition::new(2024, 2));
        assert_eq!(cells.len(), 5 + 31);
        assert_eq!(cells[5].target, Some(ClickTarget::Day(d(2024, 3, 1))));
        assert!(cells[5 + 14].is_today);
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn test_month_grid() {
        let cells = cells_for(SelectionMode::Month, ViewPosition::new(2024, 7));
        assert_eq!(cells.len(), 12);
        assert_eq!(
            cells[0].target,
            Some(ClickTarget::Month {
                year: 2024,
                month0: 0
            })
        );
        assert!(cells[2].is_today);
    }

    #[test]
    fn test_year_grid_window() {
        let cells = cells_for(SelectionMode::Year, ViewPosition::new(2024, 0));
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0].target, Some(ClickTarget::Year(2016)));
        assert_eq!(cells[11].target, Some(ClickTarget::Year(2027)));
        assert!(cells[8].is_today);
    }

    #[test]
    fn test_selected_flags_follow_state() {
        let mode = SelectionMode::Week;
        let strategy = strategy_for(mode);
        let state = SelectionState::Anchor(Some(d(2024, 3, 13)));
        let cells = build_cells(strategy.as_ref(), ViewPosition::new(2024, 2), &state, d(2024, 1, 1));

        let selected: Vec<u32> = cells
            .iter()
            .filter(|c| c.is_selected)
            .filter_map(|c| match c.target {
                Some(ClickTarget::Day(date)) => Some(date.day()),
                _ => None,
            })
            .collect();
        assert_eq!(selected, vec![10, 11, 12, 13, 14, 15, 16]);
    }

    #[test]
    fn test_year_window_navigation() {
        let step = strategy_for(SelectionMode::Year).nav_step();
        let view = ViewPosition::new(2016, 0);

        let forward = navigate(view, step, 1);
        assert_eq!(forward.year_window_start(), 2028);

        let back = navigate(view, step, -1);
        assert_eq!(back.year_window_start(), 2004);
    }

    #[test]
    fn test_month_and_day_navigation_steps() {
        let view = ViewPosition::new(2024, 0);
        let month_step = strategy_for(SelectionMode::Month).nav_step();
        assert_eq!(navigate(view, month_step, 1), ViewPosition::new(2025, 0));

        let day_step = strategy_for(SelectionMode::Single).nav_step();
        assert_eq!(navigate(view, day_step, -1), ViewPosition::new(2023, 11));
    }

    #[test]
    fn test_columns() {
        assert_eq!(GridKind::Days.columns(), 7);
        assert_eq!(GridKind::Years.columns(), 4);
    }
}
