//! `ratatui-carousel-core` is the navigation state machine behind the
//! `ratatui-carousel` widget set.
//!
//! Nothing in this crate draws anything. It owns the carousel's navigation
//! state, validates configuration, and computes where the carousel lands when
//! a control asks it to move. Rendering front ends (the widgets in
//! `ratatui-carousel`, or your own) read snapshots from the store and
//! dispatch requests back into it.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime: all transitions are synchronous, on the caller's
//!   thread.
//! - One store per carousel instance; no ambient/global state.
//!
//! ## Getting started
//!
//! Most users should depend on the widget crate `ratatui-carousel`. Use this
//! crate directly if you are building your own rendering on top of the
//! navigation core.
//!
//! Useful entry points:
//! - [`store::CarouselStore`]: the state container; subscribe to it, mutate
//!   through it.
//! - [`position`]: the pure clamp/wrap math, testable on its own.
//! - [`controls`]: disabled predicates and the [`controls::NavRequest`]
//!   dispatch surface shared by all controls.

pub mod controls;
pub mod input;
pub mod position;
pub mod state;
pub mod store;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;
