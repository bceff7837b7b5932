use thiserror::Error;

/// Snapshot of a carousel's navigation state.
///
/// `current_slide` is the index of the leftmost visible slide, always kept in
/// `0..=max_page()` by the store. The struct is `Copy`; observers and widgets
/// work on by-value snapshots and never hold a live reference into the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub current_slide: usize,
    pub total_slides: usize,
    pub visible_slides: usize,
    pub step: usize,
    pub infinite: bool,
    pub is_playing: bool,
}

impl CarouselState {
    /// Largest valid `current_slide`: the last page start.
    pub fn max_page(&self) -> usize {
        self.total_slides.saturating_sub(self.visible_slides)
    }

    /// False when every slide is already on screen; navigation is then a
    /// no-op and all controls report disabled.
    pub fn has_multiple_pages(&self) -> bool {
        self.total_slides > self.visible_slides
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("carousel needs at least one slide")]
    NoSlides,
    #[error("step must be at least 1")]
    ZeroStep,
    #[error("visible slides ({visible}) out of range for {total} slides")]
    VisibleOutOfRange { visible: usize, total: usize },
}

/// Construction-time configuration for a carousel store.
///
/// Only `total_slides` is required; everything else has the documented
/// defaults (`current_slide = 0`, `visible_slides = 1`, `step = 1`,
/// `infinite = false`, `is_playing = false`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselOptions {
    pub total_slides: usize,
    pub current_slide: usize,
    pub visible_slides: usize,
    pub step: usize,
    pub infinite: bool,
    pub is_playing: bool,
}

impl CarouselOptions {
    pub fn new(total_slides: usize) -> Self {
        Self {
            total_slides,
            current_slide: 0,
            visible_slides: 1,
            step: 1,
            infinite: false,
            is_playing: false,
        }
    }

    pub fn with_current_slide(mut self, current_slide: usize) -> Self {
        self.current_slide = current_slide;
        self
    }

    pub fn with_visible_slides(mut self, visible_slides: usize) -> Self {
        self.visible_slides = visible_slides;
        self
    }

    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    pub fn with_playing(mut self, is_playing: bool) -> Self {
        self.is_playing = is_playing;
        self
    }
}

/// Partial configuration merged by [`crate::store::CarouselStore::update_config`].
///
/// `None` fields keep their current value. A successful merge re-clamps
/// `current_slide` into the new bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselUpdate {
    pub total_slides: Option<usize>,
    pub visible_slides: Option<usize>,
    pub step: Option<usize>,
    pub infinite: Option<bool>,
}

pub fn validate(total_slides: usize, visible_slides: usize, step: usize) -> Result<(), ConfigError> {
    if total_slides == 0 {
        return Err(ConfigError::NoSlides);
    }
    if step == 0 {
        return Err(ConfigError::ZeroStep);
    }
    if visible_slides == 0 || visible_slides > total_slides {
        return Err(ConfigError::VisibleOutOfRange {
            visible: visible_slides,
            total: total_slides,
        });
    }
    Ok(())
}
