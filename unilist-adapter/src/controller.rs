use std::sync::Arc;

use unilist::Align;

use crate::surface::Surface;
use crate::telemetry::{ErrorReporter, FailureEvent};

/// The imperative handle exposed to callers.
///
/// All three operations are synchronous and fire-and-forget: no return
/// values, no futures. A request the active surface cannot satisfy is logged,
/// reported to the error reporter, and swallowed — it is never raised to the
/// caller, and it never affects the rest of the list.
pub struct ListController<S> {
    surface: S,
    reporter: Option<Arc<dyn ErrorReporter + Send + Sync>>,
}

impl<S: Surface> ListController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            reporter: None,
        }
    }

    /// Attaches the telemetry collaborator that receives
    /// [`FailureEvent`]s.
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter + Send + Sync>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Moves the viewport to the start of the list, no animation.
    pub fn scroll_to_start(&mut self) {
        self.surface.scroll_to_start();
    }

    /// Moves the viewport so the last logical item is fully visible, no
    /// animation.
    pub fn scroll_to_end(&mut self) {
        self.surface.scroll_to_end();
    }

    /// Scrolls to a logical item index.
    ///
    /// With no `alignment` the active surface's default applies: `Center` on
    /// the native surface, `Smart` on the windowed surface. An index the
    /// surface cannot resolve emits one
    /// [`FailureEvent::ScrollToIndexFailed`] and returns normally.
    pub fn scroll_to_index(&mut self, index: usize, alignment: Option<Align>) {
        let align = alignment.unwrap_or_else(|| self.surface.default_alignment());
        if let Err(err) = self.surface.scroll_to_index(index, align) {
            lwarn!(
                index,
                measured_slots = err.measured_slots,
                "scroll_to_index failed"
            );
            let event = FailureEvent::ScrollToIndexFailed {
                index,
                measured_slots: err.measured_slots,
            };
            if let Some(reporter) = &self.reporter {
                reporter.notify(&event);
            }
        }
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for ListController<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListController")
            .field("surface", &self.surface)
            .field("has_reporter", &self.reporter.is_some())
            .finish()
    }
}
