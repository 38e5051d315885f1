use serde::{Deserialize, Serialize};

/// Capability implemented by the host's visual-node wrapper for a rendered
/// bubble.
///
/// Raising brings the bubble's stacking group above its siblings. How many
/// nesting levels that walk crosses is the wrapper's concern; this core
/// only decides *that* the reorder happens, never how layers are drawn.
pub trait Raisable {
    fn raise(&self);
}

/// Interactive pointer-capture surface whose cursor styling the host lets
/// this core adjust.
pub trait PointerSurface {
    fn set_cursor(&mut self, affordance: CursorAffordance);
}

/// Cursor styling instruction for the pointer-capture surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorAffordance {
    /// Host/platform default cursor.
    Auto,
    /// Cursor signalling the mark under the pointer is interactive.
    Clickable,
}

/// No-op surface used by tests and headless hosts.
///
/// It records the issued instructions so callers can assert on them
/// without a real rendering stack behind the seam.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub last_affordance: Option<CursorAffordance>,
    pub set_count: usize,
}

impl PointerSurface for NullSurface {
    fn set_cursor(&mut self, affordance: CursorAffordance) {
        self.last_affordance = Some(affordance);
        self.set_count += 1;
    }
}
