//! Calendar date picker
//!
//! A read-only input showing the current selection, and a popup calendar that
//! opens below it. The selection mode is fixed at construction:
//!
//! - `single`: one date, closes on click
//! - `multiple`: toggles dates, closes through the Done button
//! - `week`: the Sunday-aligned week around the clicked date
//! - `month` / `year`: month and year grids instead of days
//! - `range`: two clicks, ordered automatically
//!
//! # Example
//!
//! ```
//! use mkui_calendar::components::date_picker::{DatePicker, SelectionMode};
//! use mkui_calendar::components::date_picker::grid::ClickTarget;
//! use mkui_calendar::date::CalendarDate;
//! use mkui_calendar::i18n::Locale;
//!
//! let today = CalendarDate::new(2024, 3, 1).unwrap();
//! let mut picker = DatePicker::new(SelectionMode::Range).with_today(today);
//! picker.toggle();
//!
//! let first = CalendarDate::new(2024, 3, 15).unwrap();
//! let second = CalendarDate::new(2024, 3, 10).unwrap();
//! picker.click(Some(ClickTarget::Day(first)));
//! picker.click(Some(ClickTarget::Day(second)));
//!
//! assert!(!picker.is_open());
//! let ko = Locale::from_string("ko-KR");
//! assert_eq!(picker.display_text(&ko), "2024-03-10 ~ 2024-03-15");
//! ```

pub mod format;
pub mod grid;
pub mod mode;
pub mod selection;
pub mod visibility;

pub use grid::{Cell, ClickTarget, GridKind};
pub use mode::{SelectionMode, SelectionStrategy};
pub use selection::{DateValue, SelectionState};
pub use visibility::CloseReason;

use self::format::Footer;
use self::mode::strategy_for;
use self::visibility::PopupVisibility;
use crate::component::Component;
use crate::components::frame::draw_frame;
use crate::components::text;
use crate::context::{RenderContext, UseLocale, UseTheme};
use crate::date::{CalendarDate, ViewPosition};
use crate::event::{Event, EventHandler, Key, MouseButton, MouseEvent};
use crate::i18n::Locale;
use crate::layout::Rect;
use crate::listeners::ListenerRegistry;
use crate::render::Renderer;
use crate::theme::Theme;
use anyhow::Result;

/// Selection change callback type
pub type OnChange = Box<dyn FnMut(&DateValue)>;

const DEFAULT_WIDTH: u16 = 28;
const DAY_CELL_WIDTH: u16 = 3;
const PICKER_CELL_WIDTH: u16 = 6;
const CALENDAR_ICON: &str = "▦";
const PREV_ARROW: &str = "◀";
const NEXT_ARROW: &str = "▶";

/// Screen regions from the last render, used for hit testing
#[derive(Debug, Clone, Default)]
struct HitMap {
    /// Label and input rows
    picker: Rect,
    input: Rect,
    popup: Option<Rect>,
    prev: Rect,
    next: Rect,
    cells: Vec<(Rect, Option<ClickTarget>)>,
    done: Option<Rect>,
}

impl HitMap {
    /// Whether a position lies within the picker's own subtree
    fn contains(&self, col: u16, row: u16) -> bool {
        self.picker.contains(col, row) || self.popup.is_some_and(|p| p.contains(col, row))
    }
}

/// Calendar date picker component
pub struct DatePicker {
    strategy: Box<dyn SelectionStrategy>,
    state: SelectionState,
    view: ViewPosition,
    today: CalendarDate,
    label: Option<String>,
    placeholder: Option<String>,
    width: u16,
    popup: PopupVisibility,
    on_change: Option<OnChange>,
    hit_map: HitMap,
    /// Keyboard cursor: index into the current grid's cells
    cursor: Option<usize>,
    focused: bool,
    dirty: bool,
}

impl std::fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatePicker")
            .field("mode", &self.strategy.mode())
            .field("state", &self.state)
            .field("view", &self.view)
            .field("label", &self.label)
            .field("open", &self.popup.is_open())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl DatePicker {
    /// Create a picker showing today's month with nothing selected
    pub fn new(mode: SelectionMode) -> Self {
        let today = CalendarDate::today();
        let strategy = strategy_for(mode);
        Self {
            state: strategy.empty_state(),
            strategy,
            view: ViewPosition::of(today),
            today,
            label: None,
            placeholder: None,
            width: DEFAULT_WIDTH,
            popup: PopupVisibility::new(ListenerRegistry::new()),
            on_change: None,
            hit_map: HitMap::default(),
            cursor: None,
            focused: false,
            dirty: true,
        }
    }

    /// Set the label shown above the input
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Override the mode's default placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Seed the selection; a value of the wrong shape leaves it empty
    pub fn with_value(mut self, value: DateValue) -> Self {
        self.state = SelectionState::from_value(self.mode(), value);
        self
    }

    /// Override today's date (also moves the view to it)
    pub fn with_today(mut self, today: CalendarDate) -> Self {
        self.today = today;
        self.view = ViewPosition::of(today);
        self
    }

    /// Share a listener registry with the host
    pub fn with_listeners(mut self, registry: ListenerRegistry) -> Self {
        self.popup = PopupVisibility::new(registry);
        self
    }

    /// Preferred input width in cells
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the selection change callback
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&DateValue) + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn mode(&self) -> SelectionMode {
        self.strategy.mode()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Current selection as a value, if anything is selected
    pub fn value(&self) -> Option<DateValue> {
        self.state.value()
    }

    pub fn view(&self) -> ViewPosition {
        self.view
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.popup.is_open()
    }

    /// Registry holding this picker's listener subscription while open
    pub fn listeners(&self) -> &ListenerRegistry {
        self.popup.registry()
    }

    /// Cells of the grid at the current view
    pub fn cells(&self) -> Vec<Cell> {
        grid::build_cells(self.strategy.as_ref(), self.view, &self.state, self.today)
    }

    pub fn is_selected(&self, target: &ClickTarget) -> bool {
        self.strategy.is_selected(&self.state, target)
    }

    /// Text for the input field (empty when nothing is selected)
    pub fn display_text(&self, locale: &Locale) -> String {
        format::display_text(self.mode(), &self.state, locale)
    }

    /// Popup header title for the current view
    pub fn title(&self, locale: &Locale) -> String {
        format::title(self.strategy.grid(), self.view, locale)
    }

    pub fn placeholder(&self, locale: &Locale) -> String {
        format::placeholder(self.mode(), self.placeholder.as_deref(), locale)
    }

    /// Input activation: open when closed, close when open
    pub fn toggle(&mut self) {
        self.popup.toggle();
        self.cursor = None;
        self.dirty = true;
    }

    /// The Done action of a multiple selection
    pub fn done(&mut self) {
        self.close_popup(CloseReason::Done);
    }

    /// Interpret a click on a cell
    ///
    /// Padding cells and targets the mode does not use are ignored. Returns
    /// whether the selection changed.
    pub fn click(&mut self, target: Option<ClickTarget>) -> bool {
        let Some(target) = target else {
            tracing::trace!("click on padding cell ignored");
            return false;
        };
        let Some(transition) = self.strategy.apply(&self.state, target) else {
            tracing::trace!(mode = %self.mode(), ?target, "click not applicable to mode");
            return false;
        };

        self.state = transition.state;
        self.dirty = true;
        tracing::debug!(mode = %self.mode(), state = ?self.state, "selection updated");

        if let Some(value) = transition.emit {
            if let Some(callback) = &mut self.on_change {
                callback(&value);
            }
        }
        if transition.close {
            self.close_popup(CloseReason::Completed);
        }
        true
    }

    /// Move the view back (-1) or forward (+1) by the mode's step
    pub fn navigate(&mut self, direction: i32) {
        self.view = grid::navigate(self.view, self.strategy.nav_step(), direction);
        self.cursor = None;
        self.dirty = true;
        tracing::debug!(year = self.view.year(), month0 = self.view.month0(), "calendar navigated");
    }

    fn close_popup(&mut self, reason: CloseReason) {
        if self.popup.close(reason) {
            self.cursor = None;
            self.dirty = true;
        }
    }

    fn handle_press(&mut self, col: u16, row: u16) -> bool {
        if self.hit_map.input.contains(col, row) {
            self.toggle();
            return true;
        }
        if !self.popup.is_open() {
            return false;
        }

        if self.hit_map.prev.contains(col, row) {
            self.navigate(-1);
            return true;
        }
        if self.hit_map.next.contains(col, row) {
            self.navigate(1);
            return true;
        }
        if self.hit_map.done.is_some_and(|r| r.contains(col, row)) {
            self.done();
            return true;
        }
        let hit = self
            .hit_map
            .cells
            .iter()
            .find(|(rect, _)| rect.contains(col, row))
            .map(|(_, target)| *target);
        if let Some(target) = hit {
            self.click(target);
            return true;
        }

        // Presses on the popup body are absorbed
        self.hit_map.popup.is_some_and(|p| p.contains(col, row))
    }

    fn handle_key(&mut self, key: Key) -> bool {
        if !self.popup.is_open() {
            return match key {
                Key::Enter | Key::Char(' ') => {
                    self.toggle();
                    true
                }
                _ => false,
            };
        }

        let columns = self.strategy.grid().columns() as isize;
        match key {
            Key::Left => self.move_cursor(-1),
            Key::Right => self.move_cursor(1),
            Key::Up => self.move_cursor(-columns),
            Key::Down => self.move_cursor(columns),
            Key::PageUp => self.navigate(-1),
            Key::PageDown => self.navigate(1),
            Key::Enter | Key::Char(' ') => self.activate_cursor(),
            Key::Tab if self.mode() == SelectionMode::Multiple => self.done(),
            _ => return false,
        }
        true
    }

    /// Selected cell, else today, else the first real cell
    fn initial_cursor(cells: &[Cell]) -> Option<usize> {
        cells
            .iter()
            .position(|c| c.is_selected)
            .or_else(|| cells.iter().position(|c| c.is_today))
            .or_else(|| cells.iter().position(|c| !c.is_padding()))
    }

    fn move_cursor(&mut self, delta: isize) {
        let cells = self.cells();
        let Some(current) = self
            .cursor
            .filter(|i| *i < cells.len())
            .or_else(|| Self::initial_cursor(&cells))
        else {
            return;
        };

        // First movement only places the cursor
        if self.cursor.is_none() {
            self.cursor = Some(current);
            self.dirty = true;
            return;
        }

        let next = current as isize + delta;
        if next < 0 || next as usize >= cells.len() || cells[next as usize].is_padding() {
            return;
        }
        self.cursor = Some(next as usize);
        self.dirty = true;
    }

    fn activate_cursor(&mut self) {
        let cells = self.cells();
        let index = self
            .cursor
            .filter(|i| *i < cells.len())
            .or_else(|| Self::initial_cursor(&cells));
        let target = index.and_then(|i| cells.get(i)).and_then(|c| c.target);
        self.click(target);
    }

    fn cell_style(&self, index: usize, cell: &Cell, theme: &Theme) -> String {
        if cell.is_selected {
            theme.selected_style()
        } else if self.cursor == Some(index) {
            theme.cursor_style()
        } else if cell.is_today {
            theme.today_style()
        } else {
            String::new()
        }
    }

    fn render_input(
        &self,
        renderer: &mut Renderer,
        input: Rect,
        theme: &Theme,
        locale: &Locale,
    ) -> Result<()> {
        let value = self.display_text(locale);
        let (content, content_style) = if value.is_empty() {
            (self.placeholder(locale), theme.fg(theme.placeholder_fg))
        } else {
            (value, theme.fg(theme.text_fg))
        };
        let border_style = if self.focused || self.popup.is_open() {
            theme.fg(theme.focus_border_color)
        } else {
            theme.fg(theme.border_color)
        };

        // "[ " + content + " " + icon + "]"
        let content_width = input.width.saturating_sub(5) as usize;

        renderer.move_cursor(input.x, input.y)?;
        renderer.write_styled("[", &border_style)?;
        renderer.write_text(" ")?;
        renderer.write_styled(&text::fit(&content, content_width), &content_style)?;
        renderer.write_text(" ")?;
        renderer.write_styled(CALENDAR_ICON, &theme.fg(theme.text_fg))?;
        renderer.write_styled("]", &border_style)?;
        Ok(())
    }

    fn render_popup(
        &self,
        renderer: &mut Renderer,
        input: Rect,
        theme: &Theme,
        locale: &Locale,
        hit_map: &mut HitMap,
    ) -> Result<()> {
        let grid_kind = self.strategy.grid();
        let cells = self.cells();
        let columns = grid_kind.columns();
        let cell_width = match grid_kind {
            GridKind::Days => DAY_CELL_WIDTH,
            GridKind::Months | GridKind::Years => PICKER_CELL_WIDTH,
        };
        let grid_rows = cells.len().div_ceil(columns) as u16;
        let weekday_rows = u16::from(grid_kind == GridKind::Days);
        let footer = format::footer(self.mode(), &self.state, locale);

        let inner_width = columns as u16 * cell_width;
        let inner_height = 1 + weekday_rows + grid_rows + u16::from(footer.is_some());
        let frame = input.below(inner_width + 2, inner_height + 2);
        draw_frame(
            renderer,
            frame,
            theme.border_style,
            &theme.fg(theme.border_color),
        )?;
        hit_map.popup = Some(frame);

        let inner = frame.inner(1);

        // Header: navigation arrows around the title
        let title = self.title(locale);
        renderer.move_cursor(inner.x, inner.y)?;
        renderer.write_text(PREV_ARROW)?;
        renderer.write_styled(
            &text::center(&title, inner_width.saturating_sub(2) as usize),
            &format!("\x1b[1m{}", theme.fg(theme.title_fg)),
        )?;
        renderer.write_text(NEXT_ARROW)?;
        hit_map.prev = Rect::new(inner.x, inner.y, 1, 1);
        hit_map.next = Rect::new(inner.right().saturating_sub(1), inner.y, 1, 1);

        let mut y = inner.y + 1;
        if grid_kind == GridKind::Days {
            renderer.move_cursor(inner.x, y)?;
            let label_style = theme.fg(theme.label_fg);
            for label in locale.messages().weekdays {
                renderer.write_styled(&text::right(label, 2), &label_style)?;
                renderer.write_text(" ")?;
            }
            y += 1;
        }

        for (index, cell) in cells.iter().enumerate() {
            let col = (index % columns) as u16;
            let row = (index / columns) as u16;
            let rect = Rect::new(inner.x + col * cell_width, y + row, cell_width, 1);
            hit_map.cells.push((rect, cell.target));

            renderer.move_cursor(rect.x, rect.y)?;
            let body_width = (cell_width - 1) as usize;
            match &cell.target {
                None => renderer.write_repeated(' ', cell_width as usize)?,
                Some(target) => {
                    let label = format::cell_label(target, locale);
                    let body = match target {
                        ClickTarget::Day(_) => text::right(&label, body_width),
                        _ => text::center(&label, body_width),
                    };
                    renderer.write_styled(&body, &self.cell_style(index, cell, theme))?;
                    renderer.write_text(" ")?;
                }
            }
        }
        y += grid_rows;

        match footer {
            Some(Footer::Hint(hint)) => {
                renderer.move_cursor(inner.x, y)?;
                renderer.write_styled(
                    &text::fit(&hint, inner_width as usize),
                    &theme.fg(theme.placeholder_fg),
                )?;
            }
            Some(Footer::Done(label)) => {
                let button = format!("[{}]", label);
                let width = text::display_width(&button) as u16;
                let x = inner.x + inner_width.saturating_sub(width) / 2;
                renderer.move_cursor(x, y)?;
                renderer.write_styled(&button, &theme.selected_style())?;
                hit_map.done = Some(Rect::new(x, y, width, 1));
            }
            None => {}
        }

        Ok(())
    }
}

impl EventHandler for DatePicker {
    fn handle_event(&mut self, event: &Event) -> bool {
        let hit_map = &self.hit_map;
        if let Some(reason) = self
            .popup
            .dismissal(event, |col, row| hit_map.contains(col, row))
        {
            self.close_popup(reason);
            // Outside presses stay available to whatever was pressed
            return reason == CloseReason::Escape;
        }

        match event {
            Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row)) => {
                self.handle_press(*col, *row)
            }
            Event::Key(key) if self.focused => self.handle_key(*key),
            _ => false,
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
        self.dirty = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
        self.dirty = true;
    }
}

impl Component for DatePicker {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        let theme = self.use_theme(ctx);
        let locale = self.use_locale(ctx);
        let width = bounds.width.min(self.width).max(6);

        let mut row = bounds.y;
        if let Some(label) = &self.label {
            renderer.move_cursor(bounds.x, row)?;
            renderer.write_styled(&text::fit(label, width as usize), &theme.fg(theme.label_fg))?;
            row += 1;
        }

        let input = Rect::new(bounds.x, row, width, 1);
        self.render_input(renderer, input, theme, locale)?;

        let mut hit_map = HitMap {
            picker: Rect::new(bounds.x, bounds.y, width, row - bounds.y + 1),
            input,
            ..HitMap::default()
        };
        if self.popup.is_open() {
            self.render_popup(renderer, input, theme, locale, &mut hit_map)?;
        }

        self.hit_map = hit_map;
        self.dirty = false;
        Ok(())
    }

    fn min_size(&self) -> (u16, u16) {
        let label_rows = u16::from(self.label.is_some());
        (self.width, label_rows + 1)
    }

    fn has_overlay(&self) -> bool {
        self.popup.is_open()
    }

    fn on_unmount(&mut self) {
        self.close_popup(CloseReason::Unmount);
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn name(&self) -> &str {
        "DatePicker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    fn ko() -> Locale {
        Locale::from_string("ko-KR")
    }

    /// Picker pinned to March 2024 with a recording on_change
    fn picker(mode: SelectionMode) -> (DatePicker, Rc<RefCell<Vec<DateValue>>>) {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = emitted.clone();
        let picker = DatePicker::new(mode)
            .with_today(d(2024, 3, 20))
            .on_change(move |value| sink.borrow_mut().push(value.clone()));
        (picker, emitted)
    }

    fn day(y: i32, m: u32, dd: u32) -> Option<ClickTarget> {
        Some(ClickTarget::Day(d(y, m, dd)))
    }

    fn render(picker: &mut DatePicker, theme: &Theme) -> Renderer {
        let mut renderer = Renderer::headless();
        let ctx = RenderContext::new(theme);
        picker
            .render(&mut renderer, Rect::new(0, 0, 30, 2), &ctx)
            .unwrap();
        renderer
    }

    fn cell_rect(picker: &DatePicker, target: ClickTarget) -> Rect {
        picker
            .hit_map
            .cells
            .iter()
            .find(|(_, t)| *t == Some(target))
            .map(|(rect, _)| *rect)
            .unwrap()
    }

    /// Three single pickers at stacked host slots, rendered closed-first
    fn stacked(theme: &Theme, open: usize) -> Vec<DatePicker> {
        let mut pickers: Vec<DatePicker> = (0..3).map(|_| picker(SelectionMode::Single).0).collect();
        pickers[open].toggle();
        render_stack(&mut pickers, theme);
        pickers
    }

    fn render_stack(pickers: &mut [DatePicker], theme: &Theme) {
        let mut renderer = Renderer::headless();
        let ctx = RenderContext::new(theme);
        for overlay_pass in [false, true] {
            for (i, picker) in pickers.iter_mut().enumerate() {
                if picker.has_overlay() == overlay_pass {
                    let slot = Rect::new(2, 1 + i as u16 * 3, 30, 3);
                    picker.render(&mut renderer, slot, &ctx).unwrap();
                }
            }
        }
    }

    #[test]
    fn test_stacked_cell_press_reaches_only_the_open_popup() {
        let theme = Theme::new(ko());
        let mut pickers = stacked(&theme, 0);

        // The 15th sits on the row of the third picker's input
        let cell = cell_rect(&pickers[0], ClickTarget::Day(d(2024, 3, 15)));
        assert!(pickers[2].hit_map.input.contains(cell.x, cell.y));

        assert!(crate::component::dispatch_event(
            &mut pickers,
            &Event::click(cell.x, cell.y)
        ));
        assert_eq!(pickers[0].state().anchor(), Some(d(2024, 3, 15)));
        assert!(!pickers[0].is_open());
        assert!(!pickers[1].is_open());
        assert!(!pickers[2].is_open());
    }

    #[test]
    fn test_stacked_popup_body_press_is_absorbed() {
        let theme = Theme::new(ko());
        let mut pickers = stacked(&theme, 0);

        // Weekday header row of the popup overlaps the second picker's input
        let input = pickers[1].hit_map.input;
        assert!(crate::component::dispatch_event(
            &mut pickers,
            &Event::click(input.x + 2, input.y)
        ));
        assert!(pickers[0].is_open());
        assert!(!pickers[1].is_open());
    }

    #[test]
    fn test_stacked_dismissing_press_falls_through() {
        let theme = Theme::new(ko());
        let mut pickers = stacked(&theme, 2);

        let input = pickers[0].hit_map.input;
        assert!(crate::component::dispatch_event(
            &mut pickers,
            &Event::click(input.x + 2, input.y)
        ));
        assert!(!pickers[2].is_open());
        assert!(pickers[0].is_open());
        assert!(!pickers[1].is_open());
    }

    #[test]
    fn test_initial_state() {
        let (picker, _) = picker(SelectionMode::Single);
        assert!(!picker.is_open());
        assert!(picker.state().is_empty());
        assert_eq!(picker.view(), ViewPosition::new(2024, 2));
        assert_eq!(picker.display_text(&ko()), "");
        assert_eq!(picker.placeholder(&ko()), "날짜 선택");
    }

    #[test]
    fn test_single_click_sets_text_and_closes() {
        let (mut picker, emitted) = picker(SelectionMode::Single);
        picker.toggle();
        assert!(picker.is_open());

        assert!(picker.click(day(2024, 3, 5)));
        assert!(!picker.is_open());
        assert_eq!(picker.display_text(&ko()), "2024-03-05");

        picker.toggle();
        picker.click(day(2024, 3, 9));
        assert_eq!(picker.display_text(&ko()), "2024-03-09");
        assert_eq!(picker.state(), &SelectionState::Anchor(Some(d(2024, 3, 9))));
        assert_eq!(
            *emitted.borrow(),
            vec![DateValue::Date(d(2024, 3, 5)), DateValue::Date(d(2024, 3, 9))]
        );
    }

    #[test]
    fn test_multiple_counts_and_stays_open() {
        let (mut picker, emitted) = picker(SelectionMode::Multiple);
        picker.toggle();

        picker.click(day(2024, 3, 1));
        assert_eq!(picker.display_text(&ko()), "1개 선택됨");
        picker.click(day(2024, 3, 2));
        assert_eq!(picker.display_text(&ko()), "2개 선택됨");
        picker.click(day(2024, 3, 1));
        assert_eq!(picker.display_text(&ko()), "1개 선택됨");
        assert!(picker.is_open());

        // Every toggle reports the full running set
        assert_eq!(emitted.borrow().len(), 3);
        assert_eq!(
            emitted.borrow().last(),
            Some(&DateValue::Dates(vec![d(2024, 3, 2)]))
        );

        picker.done();
        assert!(!picker.is_open());
    }

    #[test]
    fn test_range_end_to_end() {
        let (mut picker, emitted) = picker(SelectionMode::Range);
        picker.toggle();

        picker.click(day(2024, 3, 15));
        assert!(picker.is_open());
        assert_eq!(picker.display_text(&ko()), "2024-03-15 ~ ");
        assert!(emitted.borrow().is_empty());

        picker.click(day(2024, 3, 10));
        assert!(!picker.is_open());
        assert_eq!(
            *emitted.borrow(),
            vec![DateValue::Range {
                start: Some(d(2024, 3, 10)),
                end: Some(d(2024, 3, 15)),
            }]
        );
        assert_eq!(picker.display_text(&ko()), "2024-03-10 ~ 2024-03-15");

        // A third click starts over
        picker.toggle();
        picker.click(day(2024, 3, 20));
        assert_eq!(picker.state().range(), (Some(d(2024, 3, 20)), None));
        assert!(picker.is_open());
    }

    #[test]
    fn test_week_marks_whole_week() {
        let (mut picker, emitted) = picker(SelectionMode::Week);
        picker.toggle();
        picker.click(day(2024, 3, 13));

        let selected: Vec<CalendarDate> = picker
            .cells()
            .iter()
            .filter(|c| c.is_selected)
            .filter_map(|c| match c.target {
                Some(ClickTarget::Day(date)) => Some(date),
                _ => None,
            })
            .collect();
        assert_eq!(selected.len(), 7);
        assert_eq!(selected[0], d(2024, 3, 10));
        assert_eq!(selected[6], d(2024, 3, 16));
        assert_eq!(picker.display_text(&ko()), "2024-03-10 ~ 2024-03-16");
        assert_eq!(*emitted.borrow(), vec![DateValue::Date(d(2024, 3, 13))]);
        assert!(!picker.is_open());
    }

    #[test]
    fn test_padding_and_mismatched_clicks_are_noops() {
        let (mut picker, emitted) = picker(SelectionMode::Single);
        picker.toggle();

        assert!(!picker.click(None));
        assert!(!picker.click(Some(ClickTarget::Year(2024))));
        assert!(picker.state().is_empty());
        assert!(picker.is_open());
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn test_year_window_navigation_and_title() {
        let (mut picker, _) = picker(SelectionMode::Year);
        assert_eq!(picker.title(&ko()), "2016 - 2027");

        picker.navigate(1);
        assert_eq!(picker.view().year_window_start(), 2028);
        assert_eq!(picker.title(&ko()), "2028 - 2039");

        picker.navigate(-1);
        picker.navigate(-1);
        assert_eq!(picker.view().year_window_start(), 2004);
    }

    #[test]
    fn test_month_mode_click_and_title() {
        let (mut picker, emitted) = picker(SelectionMode::Month);
        assert_eq!(picker.title(&ko()), "2024년");
        picker.navigate(1);
        assert_eq!(picker.title(&ko()), "2025년");

        picker.toggle();
        picker.click(Some(ClickTarget::Month {
            year: 2025,
            month0: 6,
        }));
        assert_eq!(*emitted.borrow(), vec![DateValue::Date(d(2025, 7, 1))]);
        assert_eq!(picker.display_text(&ko()), "2025년 7월");
        assert!(!picker.is_open());
    }

    #[test]
    fn test_seeded_value_displays() {
        let picker = DatePicker::new(SelectionMode::Range).with_value(DateValue::Range {
            start: Some(d(2024, 1, 2)),
            end: Some(d(2024, 1, 5)),
        });
        assert_eq!(picker.display_text(&ko()), "2024-01-02 ~ 2024-01-05");

        let mismatched =
            DatePicker::new(SelectionMode::Multiple).with_value(DateValue::Date(d(2024, 1, 2)));
        assert_eq!(mismatched.display_text(&ko()), "");
    }

    #[test]
    fn test_escape_and_outside_press_close() {
        let theme = Theme::new(ko());
        let (mut picker, _) = picker(SelectionMode::Single);
        picker.toggle();
        render(&mut picker, &theme);

        assert!(picker.handle_event(&Event::Key(Key::Esc)));
        assert!(!picker.is_open());

        picker.toggle();
        render(&mut picker, &theme);
        // Outside press closes but is not consumed
        assert!(!picker.handle_event(&Event::click(60, 20)));
        assert!(!picker.is_open());

        // Escape while closed is ignored
        assert!(!picker.handle_event(&Event::Key(Key::Esc)));
    }

    #[test]
    fn test_mouse_flow_through_rendered_layout() {
        let theme = Theme::new(ko());
        let (mut picker, emitted) = picker(SelectionMode::Range);
        picker = picker.with_label("기간 선택");

        render(&mut picker, &theme);
        let input = picker.hit_map.input;
        assert_eq!(input.y, 1);

        assert!(picker.handle_event(&Event::click(input.x + 2, input.y)));
        assert!(picker.is_open());

        let renderer = render(&mut picker, &theme);
        assert!(renderer.plain_output().contains("2024년 3월"));

        let first = cell_rect(&picker, ClickTarget::Day(d(2024, 3, 15)));
        assert!(picker.handle_event(&Event::click(first.x, first.y)));
        assert!(picker.is_open());

        let renderer = render(&mut picker, &theme);
        assert!(renderer.plain_output().contains("종료일을 선택하세요"));

        let second = cell_rect(&picker, ClickTarget::Day(d(2024, 3, 10)));
        assert!(picker.handle_event(&Event::click(second.x + 1, second.y)));
        assert!(!picker.is_open());
        assert_eq!(emitted.borrow().len(), 1);

        let renderer = render(&mut picker, &theme);
        assert!(renderer.plain_output().contains("2024-03-10 ~ 2024-03-15"));
    }

    #[test]
    fn test_padding_cell_press_is_absorbed_without_change() {
        let theme = Theme::new(ko());
        let (mut picker, _) = picker(SelectionMode::Single);
        picker.toggle();
        render(&mut picker, &theme);

        // March 2024 starts on a Friday: five padding cells lead the grid
        let (rect, target) = picker.hit_map.cells[0];
        assert_eq!(target, None);
        assert!(picker.handle_event(&Event::click(rect.x, rect.y)));
        assert!(picker.is_open());
        assert!(picker.state().is_empty());
    }

    #[test]
    fn test_navigation_arrows() {
        let theme = Theme::new(ko());
        let (mut picker, _) = picker(SelectionMode::Single);
        picker.toggle();
        render(&mut picker, &theme);

        let next = picker.hit_map.next;
        assert!(picker.handle_event(&Event::click(next.x, next.y)));
        assert_eq!(picker.view(), ViewPosition::new(2024, 3));

        render(&mut picker, &theme);
        let prev = picker.hit_map.prev;
        picker.handle_event(&Event::click(prev.x, prev.y));
        picker.handle_event(&Event::click(prev.x, prev.y));
        assert_eq!(picker.view(), ViewPosition::new(2024, 1));
        assert!(picker.is_open());
    }

    #[test]
    fn test_done_button_closes_multiple() {
        let theme = Theme::new(Locale::default());
        let (mut picker, _) = picker(SelectionMode::Multiple);
        picker.toggle();
        picker.click(day(2024, 3, 4));
        let renderer = render(&mut picker, &theme);
        assert!(renderer.plain_output().contains("[Done (1)]"));

        let done = picker.hit_map.done.unwrap();
        assert!(picker.handle_event(&Event::click(done.x, done.y)));
        assert!(!picker.is_open());
    }

    #[test]
    fn test_keyboard_selection() {
        let (mut picker, emitted) = picker(SelectionMode::Single);
        picker.on_focus();

        assert!(picker.handle_event(&Event::Key(Key::Enter)));
        assert!(picker.is_open());

        // First arrow lands on today (the 20th), then move a week back and one day right
        picker.handle_event(&Event::Key(Key::Down));
        picker.handle_event(&Event::Key(Key::Up));
        picker.handle_event(&Event::Key(Key::Right));
        picker.handle_event(&Event::Key(Key::Enter));

        assert_eq!(*emitted.borrow(), vec![DateValue::Date(d(2024, 3, 14))]);
        assert!(!picker.is_open());
    }

    #[test]
    fn test_keyboard_cursor_skips_padding() {
        let (mut picker, _) = picker(SelectionMode::Single);
        picker.on_focus();
        picker.toggle();
        picker.click(day(2024, 3, 1));
        picker.toggle();

        // Cursor starts on the selected 1st and cannot move into padding
        picker.handle_event(&Event::Key(Key::Left));
        picker.handle_event(&Event::Key(Key::Left));
        picker.handle_event(&Event::Key(Key::Up));
        picker.handle_event(&Event::Key(Key::Enter));
        assert_eq!(picker.state().anchor(), Some(d(2024, 3, 1)));
    }

    #[test]
    fn test_keyboard_ignored_without_focus() {
        let (mut picker, _) = picker(SelectionMode::Single);
        assert!(!picker.handle_event(&Event::Key(Key::Enter)));
        assert!(!picker.is_open());
    }

    #[test]
    fn test_page_keys_navigate_and_tab_finishes_multiple() {
        let (mut picker, _) = picker(SelectionMode::Multiple);
        picker.on_focus();
        picker.toggle();

        picker.handle_event(&Event::Key(Key::PageDown));
        assert_eq!(picker.view(), ViewPosition::new(2024, 3));
        picker.handle_event(&Event::Key(Key::PageUp));
        assert_eq!(picker.view(), ViewPosition::new(2024, 2));

        assert!(picker.handle_event(&Event::Key(Key::Tab)));
        assert!(!picker.is_open());
    }

    #[test]
    fn test_listeners_released_on_close_unmount_and_drop() {
        let registry = ListenerRegistry::new();
        let mut picker = DatePicker::new(SelectionMode::Single).with_listeners(registry.clone());

        picker.toggle();
        assert_eq!(registry.active_count(), 1);
        picker.toggle();
        assert_eq!(registry.active_count(), 0);

        picker.toggle();
        picker.on_unmount();
        assert_eq!(registry.active_count(), 0);
        assert!(!picker.is_open());

        picker.toggle();
        assert_eq!(picker.listeners().active_count(), 1);
        drop(picker);
        assert_eq!(registry.active_count(), 0);
    }

    #[test]
    fn test_month_grid_renders_korean_labels() {
        let theme = Theme::new(ko());
        let (mut picker, _) = picker(SelectionMode::Month);
        picker.toggle();
        let renderer = render(&mut picker, &theme);
        let output = renderer.plain_output();
        assert!(output.contains("12월"));
        assert!(output.contains("2024년"));
        assert_eq!(picker.hit_map.cells.len(), 12);
    }

    #[test]
    fn test_closed_picker_renders_placeholder_only() {
        let theme = Theme::new(Locale::default());
        let (mut picker, _) = picker(SelectionMode::Week);
        let renderer = render(&mut picker, &theme);
        let output = renderer.plain_output();
        assert!(output.contains("Select week"));
        assert!(picker.hit_map.popup.is_none());
        assert!(!picker.has_overlay());
        assert!(!picker.is_dirty());
    }
}
