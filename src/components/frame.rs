//! Bordered overlay frame

use crate::layout::Rect;
use crate::render::Renderer;
use crate::theme::BorderStyle;
use anyhow::Result;

/// Draw a border around `bounds` and blank its interior
///
/// Frames smaller than 2x2 have no room for a border and are skipped.
pub fn draw_frame(
    renderer: &mut Renderer,
    bounds: Rect,
    border: BorderStyle,
    style: &str,
) -> Result<()> {
    if bounds.width < 2 || bounds.height < 2 {
        return Ok(());
    }

    let chars = border.chars();
    let span = (bounds.width - 2) as usize;

    let mut top = String::with_capacity(span + 2);
    top.push(chars.top_left);
    top.extend(std::iter::repeat_n(chars.horizontal, span));
    top.push(chars.top_right);
    renderer.move_cursor(bounds.x, bounds.y)?;
    renderer.write_styled(&top, style)?;

    let side = chars.vertical.to_string();
    for y in 1..(bounds.height - 1) {
        renderer.move_cursor(bounds.x, bounds.y + y)?;
        renderer.write_styled(&side, style)?;
        renderer.write_repeated(' ', span)?;
        renderer.write_styled(&side, style)?;
    }

    let mut bottom = String::with_capacity(span + 2);
    bottom.push(chars.bottom_left);
    bottom.extend(std::iter::repeat_n(chars.horizontal, span));
    bottom.push(chars.bottom_right);
    renderer.move_cursor(bounds.x, bounds.bottom() - 1)?;
    renderer.write_styled(&bottom, style)?;

    Ok(())
}
