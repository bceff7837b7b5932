use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui_carousel_core::controls;
use ratatui_carousel_core::controls::CarouselBindings;
use ratatui_carousel_core::controls::NavRequest;
use ratatui_carousel_core::input::InputEvent;
use ratatui_carousel_core::input::MouseEventKind;
use ratatui_carousel_core::state::CarouselState;
use ratatui_carousel_core::store::CarouselStore;

#[derive(Clone, Debug)]
pub struct SliderViewOptions {
    /// Columns between slide cells.
    pub gap: u16,
    pub style: Style,
    pub current_style: Style,
}

impl Default for SliderViewOptions {
    fn default() -> Self {
        Self {
            gap: 1,
            style: Style::default(),
            current_style: Style::default(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SlideContext {
    /// Slide index in `0..total_slides`.
    pub index: usize,
    /// Position within the visible window, `0..visible_slides`.
    pub position_in_window: usize,
    /// True for the window start (the carousel's current slide).
    pub is_current: bool,
}

/// The slide strip: the visible window rendered as equal-width cells.
///
/// The view owns no slide content; the caller renders each cell through a
/// closure, the way list items are rendered elsewhere in this family of
/// widgets. In infinite mode the window wraps modulo the slide count so the
/// strip never shows an empty cell.
#[derive(Clone, Debug, Default)]
pub struct SliderView {
    options: SliderViewOptions,
    bindings: CarouselBindings,
}

impl SliderView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SliderViewOptions) -> Self {
        Self {
            options,
            bindings: CarouselBindings::default(),
        }
    }

    pub fn options(&self) -> &SliderViewOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SliderViewOptions) {
        self.options = options;
    }

    pub fn bindings(&self) -> &CarouselBindings {
        &self.bindings
    }

    pub fn set_bindings(&mut self, bindings: CarouselBindings) {
        self.bindings = bindings;
    }

    pub fn render<F>(
        &self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        state: &CarouselState,
        mut render_slide: F,
    ) where
        F: FnMut(Rect, SlideContext, &mut Buffer, &Theme),
    {
        if area.width == 0 || area.height == 0 || state.total_slides == 0 {
            return;
        }

        let window = state.visible_slides.max(1).min(area.width as usize) as u16;
        let total_gap = self.options.gap.saturating_mul(window.saturating_sub(1));
        let cell_w = area.width.saturating_sub(total_gap) / window;
        if cell_w == 0 {
            return;
        }

        for pos in 0..window as usize {
            let x = area.x + pos as u16 * (cell_w + self.options.gap);
            if x + cell_w > area.x + area.width {
                break;
            }
            let index = if state.infinite {
                (state.current_slide + pos) % state.total_slides
            } else {
                (state.current_slide + pos).min(state.total_slides - 1)
            };
            let is_current = pos == 0;
            let style = if is_current {
                theme.accent.patch(self.options.current_style)
            } else {
                theme.text_primary.patch(self.options.style)
            };
            let cell = Rect::new(x, area.y, cell_w, area.height);
            buf.set_style(cell, style);
            render_slide(
                cell,
                SlideContext {
                    index,
                    position_in_window: pos,
                    is_current,
                },
                buf,
                theme,
            );
        }
    }

    /// Keys go through the bindings; a mouse wheel inside the area pages
    /// back/forward. Returns true when the event was consumed.
    pub fn handle_event(
        &self,
        event: &InputEvent,
        area: Rect,
        store: &mut CarouselStore,
    ) -> bool {
        match event {
            InputEvent::Key(key) => {
                let Some(request) = self.bindings.action_for(key) else {
                    return false;
                };
                self.bindings.apply(store, request);
                true
            }
            InputEvent::Mouse(m) => {
                if !area.contains(Position::new(m.x, m.y)) {
                    return false;
                }
                match m.kind {
                    MouseEventKind::ScrollUp => {
                        controls::dispatch(store, NavRequest::Back);
                        true
                    }
                    MouseEventKind::ScrollDown => {
                        controls::dispatch(store, NavRequest::Next);
                        true
                    }
                    _ => false,
                }
            }
        }
    }
}
