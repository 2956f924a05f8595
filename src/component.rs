//! Component trait and lifecycle

use crate::context::RenderContext;
use crate::event::{Event, EventHandler};
use crate::layout::Rect;
use crate::render::Renderer;
use anyhow::Result;

/// A widget that draws itself each frame and keeps its state between frames
pub trait Component: EventHandler {
    /// Draw into `bounds`
    ///
    /// While [`has_overlay`](Component::has_overlay) is true the component may
    /// draw past the bottom of `bounds`.
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()>;

    /// Minimum (width, height) of the in-flow part
    fn min_size(&self) -> (u16, u16) {
        (0, 0)
    }

    /// Whether an overlay is showing; hosts render these components last
    fn has_overlay(&self) -> bool {
        false
    }

    fn on_mount(&mut self) {}

    /// Called before removal; overlays and subscriptions are released here
    fn on_unmount(&mut self) {}

    fn mark_dirty(&mut self) {}

    fn is_dirty(&self) -> bool {
        true
    }

    /// Name for debugging
    fn name(&self) -> &str {
        "Component"
    }
}

/// Offer an event to sibling components until one consumes it
///
/// Components showing an overlay go first, since their overlay sits on top of
/// the others. An event nobody consumes (such as a press that only dismissed
/// an overlay) keeps going to the rest.
pub fn dispatch_event<C: Component>(components: &mut [C], event: &Event) -> bool {
    let (overlays, rest): (Vec<usize>, Vec<usize>) =
        (0..components.len()).partition(|&i| components[i].has_overlay());

    for index in overlays.into_iter().chain(rest) {
        if components[index].handle_event(event) {
            tracing::trace!(index, ?event, "event consumed");
            return true;
        }
    }
    false
}
