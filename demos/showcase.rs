//! mkui-calendar showcase - one picker per selection mode
//!
//! Usage: `cargo run --example showcase [config.toml]`
//!
//! Tab/Shift-Tab move focus, Enter opens, arrows move the cursor, PageUp and
//! PageDown change the month. Logs go to `./logs/showcase.log`.

use anyhow::Result;
use mkui_calendar::{
    component::{dispatch_event, Component},
    context::RenderContext,
    event::{Event, EventHandler, EventPoller, Key},
    focus::{FocusDirection, FocusRing},
    layout::Rect,
    logging, DatePicker, Renderer, ShowcaseConfig, Theme,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const DEFAULT_CONFIG: &str = "demos/showcase.toml";
const PICKER_WIDTH: u16 = 30;
const PICKER_ROWS: u16 = 3;

fn main() -> Result<()> {
    let _log_guard = logging::init_file_logging("logs", "showcase.log")?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = ShowcaseConfig::load(&path)?;
    let theme = Theme::from_env().with_locale(config.locale());
    tracing::info!(path = %path, locale = %theme.locale, "showcase starting");

    // Last reported value, shown in the status line
    let status = Rc::new(RefCell::new(String::from("Tab: focus  Enter: open  q: quit")));

    let mut pickers = Vec::with_capacity(config.pickers.len());
    for picker_config in &config.pickers {
        let sink = status.clone();
        let mode = picker_config.mode;
        let picker = DatePicker::from_config(picker_config)?
            .with_width(PICKER_WIDTH)
            .on_change(move |value| {
                *sink.borrow_mut() = format!("{}: {:?}", mode, value);
            });
        pickers.push(picker);
    }
    for picker in &mut pickers {
        picker.on_mount();
    }

    let mut focus = FocusRing::new(pickers.len());
    if let Some((_, first)) = focus.move_focus(FocusDirection::Next) {
        pickers[first].on_focus();
    }

    let mut renderer = Renderer::new()?;
    renderer.enter_alt_screen()?;
    renderer.hide_cursor()?;
    renderer.clear()?;

    let events = EventPoller::new()?;
    let ctx = RenderContext::new(&theme);
    let mut needs_clear = false;

    loop {
        let (cols, rows) = crossterm::terminal::size()?;
        let screen = Rect::fullscreen(cols, rows);

        if needs_clear || pickers.iter().any(|p| p.is_dirty()) {
            renderer.clear()?;
            needs_clear = false;

            // Closed pickers first so an open popup draws over its neighbours
            let slots: Vec<Rect> = (0..pickers.len())
                .map(|i| Rect::new(2, 1 + i as u16 * PICKER_ROWS, PICKER_WIDTH, PICKER_ROWS))
                .collect();
            for overlay_pass in [false, true] {
                for (picker, slot) in pickers.iter_mut().zip(&slots) {
                    if picker.has_overlay() == overlay_pass {
                        picker.render(&mut renderer, *slot, &ctx)?;
                    }
                }
            }

            renderer.move_cursor(2, screen.bottom().saturating_sub(1))?;
            renderer.write_text(&status.borrow())?;
            renderer.flush()?;
        }

        let Some(event) = events.poll(Duration::from_millis(16))? else {
            continue;
        };

        // Open popups see the event first; dismissing presses fall through
        if dispatch_event(&mut pickers, &event) {
            continue;
        }

        let any_open = pickers.iter().any(|p| p.is_open());
        match event {
            Event::Key(Key::Char('q')) | Event::Key(Key::Ctrl('c')) if !any_open => break,
            Event::Key(Key::Tab) => move_focus(&mut focus, &mut pickers, FocusDirection::Next),
            Event::Key(Key::BackTab) => {
                move_focus(&mut focus, &mut pickers, FocusDirection::Previous)
            }
            Event::Resize(_, _) => needs_clear = true,
            _ => {}
        }
    }

    for picker in &mut pickers {
        picker.on_unmount();
    }

    // Cleanup
    renderer.exit_alt_screen()?;
    renderer.show_cursor()?;
    renderer.flush()?;

    println!("mkui-calendar showcase finished");

    Ok(())
}

fn move_focus(focus: &mut FocusRing, pickers: &mut [DatePicker], direction: FocusDirection) {
    if let Some((previous, next)) = focus.move_focus(direction) {
        if let Some(previous) = previous {
            pickers[previous].on_blur();
        }
        pickers[next].on_focus();
    }
}
