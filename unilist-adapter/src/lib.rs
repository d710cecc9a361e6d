//! Surface drivers and the imperative scroll controller for the `unilist`
//! crate.
//!
//! The `unilist` core is UI-agnostic and only does the windowing/layout math.
//! This crate provides what an embedding UI needs on top of it:
//!
//! - the [`Surface`] capability trait and its two variants: [`NativeSurface`]
//!   for a native-style engine and [`WindowedSurface`] for a
//!   windowed-list-style engine, selected at construction
//! - the [`ListController`] imperative handle (`scroll_to_start`,
//!   `scroll_to_end`, `scroll_to_index`)
//! - the telemetry boundary for structured failure events
//!
//! The actual engines are supplied by the embedding UI through the
//! [`NativeScrollable`] and [`WindowedScrollable`] traits; this crate holds
//! no UI objects and performs no I/O.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod native;
mod surface;
mod telemetry;
mod windowed;

#[cfg(test)]
mod tests;

pub use controller::ListController;
pub use native::{NativeSurface, NativeTuning};
pub use surface::{NativeScrollable, SlotOutOfBounds, Surface, WindowedScrollable};
pub use telemetry::{ErrorReporter, FailureEvent, NoopReporter};
pub use windowed::WindowedSurface;
