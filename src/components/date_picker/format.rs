//! Text shown by the picker: input value, popup title, placeholder, footer

use super::grid::{ClickTarget, GridKind};
use super::mode::SelectionMode;
use super::selection::SelectionState;
use crate::date::ViewPosition;
use crate::i18n::Locale;

/// Separator between the two ends of a week or range
const RANGE_SEPARATOR: &str = " ~ ";

/// Text for the read-only input; empty when nothing is selected
pub fn display_text(mode: SelectionMode, state: &SelectionState, locale: &Locale) -> String {
    match mode {
        SelectionMode::Single => state
            .anchor()
            .map(|date| locale.format_date(&date))
            .unwrap_or_default(),
        SelectionMode::Multiple => match state.dates().len() {
            0 => String::new(),
            n => locale.selected_count(n),
        },
        SelectionMode::Week => state
            .anchor()
            .map(|anchor| {
                format!(
                    "{}{}{}",
                    locale.format_date(&anchor.week_start()),
                    RANGE_SEPARATOR,
                    locale.format_date(&anchor.week_end())
                )
            })
            .unwrap_or_default(),
        SelectionMode::Month => state
            .anchor()
            .map(|anchor| locale.year_month_label(anchor.year(), anchor.month0()))
            .unwrap_or_default(),
        SelectionMode::Year => state
            .anchor()
            .map(|anchor| locale.year_label(anchor.year()))
            .unwrap_or_default(),
        SelectionMode::Range => match state.range() {
            (Some(start), Some(end)) => format!(
                "{}{}{}",
                locale.format_date(&start),
                RANGE_SEPARATOR,
                locale.format_date(&end)
            ),
            // Open-ended: keep the trailing separator
            (Some(start), None) => format!("{}{}", locale.format_date(&start), RANGE_SEPARATOR),
            _ => String::new(),
        },
    }
}

/// Popup header title for the current view
pub fn title(grid: GridKind, view: ViewPosition, locale: &Locale) -> String {
    match grid {
        GridKind::Years => {
            let start = view.year_window_start();
            format!("{} - {}", start, start + 11)
        }
        GridKind::Months => locale.year_label(view.year()),
        GridKind::Days => locale.year_month_label(view.year(), view.month0()),
    }
}

/// Placeholder for an empty input; an explicit override wins
pub fn placeholder(mode: SelectionMode, custom: Option<&str>, locale: &Locale) -> String {
    if let Some(custom) = custom {
        return custom.to_string();
    }
    let placeholders = &locale.messages().placeholders;
    match mode {
        SelectionMode::Single => placeholders.single,
        SelectionMode::Multiple => placeholders.multiple,
        SelectionMode::Week => placeholders.week,
        SelectionMode::Month => placeholders.month,
        SelectionMode::Year => placeholders.year,
        SelectionMode::Range => placeholders.range,
    }
    .to_string()
}

/// Footer line under the grid, if the mode has one right now
///
/// Range mode hints for the end date while a start is pending; multiple mode
/// shows the Done button once something is selected.
pub fn footer(mode: SelectionMode, state: &SelectionState, locale: &Locale) -> Option<Footer> {
    match mode {
        SelectionMode::Range if state.is_range_pending() => {
            Some(Footer::Hint(locale.messages().range_hint.to_string()))
        }
        SelectionMode::Multiple if !state.dates().is_empty() => {
            Some(Footer::Done(locale.done_label(state.dates().len())))
        }
        _ => None,
    }
}

/// Footer content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footer {
    /// Informational text
    Hint(String),
    /// Label of the clickable Done button
    Done(String),
}

/// Text inside one grid cell
pub fn cell_label(target: &ClickTarget, locale: &Locale) -> String {
    match target {
        ClickTarget::Day(date) => date.day().to_string(),
        ClickTarget::Month { month0, .. } => {
            locale.messages().months_short[(*month0 % 12) as usize].to_string()
        }
        ClickTarget::Year(year) => year.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::CalendarDate;

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    fn ko() -> Locale {
        Locale::from_string("ko-KR")
    }

    #[test]
    fn test_empty_states_display_nothing() {
        for mode in SelectionMode::ALL {
            assert_eq!(display_text(mode, &SelectionState::empty(mode), &ko()), "");
        }
    }

    #[test]
    fn test_single_and_week_display() {
        let state = SelectionState::Anchor(Some(d(2024, 3, 13)));
        assert_eq!(display_text(SelectionMode::Single, &state, &ko()), "2024-03-13");
        assert_eq!(
            display_text(SelectionMode::Week, &state, &ko()),
            "2024-03-10 ~ 2024-03-16"
        );
    }

    #[test]
    fn test_month_and_year_display() {
        let state = SelectionState::Anchor(Some(d(2024, 3, 1)));
        assert_eq!(display_text(SelectionMode::Month, &state, &ko()), "2024년 3월");
        assert_eq!(display_text(SelectionMode::Year, &state, &ko()), "2024년");
        assert_eq!(
            display_text(SelectionMode::Month, &state, &Locale::default()),
            "March 2024"
        );
    }

    #[test]
    fn test_multiple_count() {
        let state = SelectionState::Set(vec![d(2024, 3, 1), d(2024, 3, 2)]);
        assert_eq!(display_text(SelectionMode::Multiple, &state, &ko()), "2개 선택됨");
        assert_eq!(
            display_text(SelectionMode::Multiple, &state, &Locale::default()),
            "2 selected"
        );
    }

    #[test]
    fn test_range_display() {
        let open = SelectionState::Range {
            start: Some(d(2024, 3, 10)),
            end: None,
        };
        assert_eq!(display_text(SelectionMode::Range, &open, &ko()), "2024-03-10 ~ ");

        let closed = SelectionState::Range {
            start: Some(d(2024, 3, 10)),
            end: Some(d(2024, 3, 15)),
        };
        assert_eq!(
            display_text(SelectionMode::Range, &closed, &ko()),
            "2024-03-10 ~ 2024-03-15"
        );
    }

    #[test]
    fn test_titles() {
        let view = ViewPosition::new(2024, 2);
        assert_eq!(title(GridKind::Years, view, &ko()), "2016 - 2027");
        assert_eq!(title(GridKind::Months, view, &ko()), "2024년");
        assert_eq!(title(GridKind::Days, view, &ko()), "2024년 3월");
        assert_eq!(title(GridKind::Days, view, &Locale::default()), "March 2024");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholder(SelectionMode::Range, None, &ko()), "기간 선택");
        assert_eq!(
            placeholder(SelectionMode::Week, None, &Locale::default()),
            "Select week"
        );
        assert_eq!(
            placeholder(SelectionMode::Week, Some("Pick one"), &ko()),
            "Pick one"
        );
    }

    #[test]
    fn test_footers() {
        let pending = SelectionState::Range {
            start: Some(d(2024, 3, 10)),
            end: None,
        };
        assert_eq!(
            footer(SelectionMode::Range, &pending, &ko()),
            Some(Footer::Hint("종료일을 선택하세요".to_string()))
        );
        assert_eq!(
            footer(SelectionMode::Range, &SelectionState::empty(SelectionMode::Range), &ko()),
            None
        );

        let picked = SelectionState::Set(vec![d(2024, 3, 1)]);
        assert_eq!(
            footer(SelectionMode::Multiple, &picked, &Locale::default()),
            Some(Footer::Done("Done (1)".to_string()))
        );
        assert_eq!(
            footer(SelectionMode::Multiple, &SelectionState::Set(Vec::new()), &ko()),
            None
        );
    }

    #[test]
    fn test_cell_labels() {
        let en = Locale::default();
        assert_eq!(cell_label(&ClickTarget::Day(d(2024, 3, 7)), &en), "7");
        assert_eq!(
            cell_label(&ClickTarget::Month { year: 2024, month0: 0 }, &en),
            "Jan"
        );
        assert_eq!(
            cell_label(&ClickTarget::Month { year: 2024, month0: 11 }, &ko()),
            "12월"
        );
        assert_eq!(cell_label(&ClickTarget::Year(2030), &en), "2030");
    }
}
