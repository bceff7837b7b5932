//! Carousel/slider widgets for [ratatui].
//!
//! The widgets here are thin rendering shells around the navigation core in
//! `ratatui-carousel-core`: each one reads a [`state::CarouselState`]
//! snapshot to draw itself and dispatches a request into the
//! [`store::CarouselStore`] when activated. All the movement rules
//! (clamping, infinite wraparound, pause-on-interaction) live in the core
//! and are shared by every control.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime: autoplay is a tick helper your loop polls.
//! - One [`store::CarouselStore`] per carousel instance; widgets never keep
//!   a private copy of navigation state.
//!
//! Useful entry points:
//! - [`slider::SliderView`]: the slide strip; you render each slide cell.
//! - [`buttons::NavButton`]: Back / Next / Play-Pause controls.
//! - [`dots::DotGroup`]: per-slide indicator with click-to-jump.
//! - [`autoplay::Autoplay`]: interval-based advance driven by your loop.
//!
//! [ratatui]: https://docs.rs/ratatui

pub mod autoplay;
pub mod buttons;
pub mod dots;
pub mod slider;
pub mod theme;

pub use ratatui_carousel_core::controls;
pub use ratatui_carousel_core::input;
pub use ratatui_carousel_core::position;
pub use ratatui_carousel_core::state;
pub use ratatui_carousel_core::store;

#[cfg(feature = "crossterm")]
pub use ratatui_carousel_core::crossterm_input;
