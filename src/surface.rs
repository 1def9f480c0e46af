//! Visible/hidden surface handles.
//!
//! A [`Surface`] is owned by whoever builds the scene; clones share the same
//! visibility flag, so the controller and the renderer always agree on what
//! is on screen.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to one panel's visibility.
#[derive(Clone)]
pub struct Surface {
    name: Rc<str>,
    visible: Rc<Cell<bool>>,
}

impl Surface {
    /// Create a surface with an initial visibility.
    pub fn new(name: impl Into<Rc<str>>, visible: bool) -> Self {
        Self {
            name: name.into(),
            visible: Rc::new(Cell::new(visible)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("name", &self.name)
            .field("visible", &self.visible.get())
            .finish()
    }
}
