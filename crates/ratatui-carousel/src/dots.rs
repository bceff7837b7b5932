use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui_carousel_core::controls;
use ratatui_carousel_core::controls::NavRequest;
use ratatui_carousel_core::input::InputEvent;
use ratatui_carousel_core::input::MouseButton;
use ratatui_carousel_core::input::MouseEventKind;
use ratatui_carousel_core::state::CarouselState;
use ratatui_carousel_core::store::CarouselStore;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug)]
pub struct DotGroupOptions {
    pub active_glyph: String,
    pub inactive_glyph: String,
    /// Columns between dots.
    pub gap: u16,
    pub style: Style,
    pub active_style: Style,
}

impl Default for DotGroupOptions {
    fn default() -> Self {
        Self {
            active_glyph: "●".to_string(),
            inactive_glyph: "○".to_string(),
            gap: 1,
            style: Style::default(),
            active_style: Style::default(),
        }
    }
}

/// One dot per slide; dots inside the visible window render active.
///
/// Clicking a dot jumps to that slide. A dot near the end whose window would
/// overflow lands on the last page start instead — the same clamp the store
/// applies to every direct jump, so the indicator can never request an
/// invalid position.
#[derive(Clone, Debug, Default)]
pub struct DotGroup {
    options: DotGroupOptions,
}

impl DotGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DotGroupOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DotGroupOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: DotGroupOptions) {
        self.options = options;
    }

    pub fn render_ref(&self, area: Rect, buf: &mut Buffer, theme: &Theme, state: &CarouselState) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let cell_w = self.cell_width();
        let pitch = cell_w + self.options.gap;
        let y = area.y + area.height / 2;

        for index in 0..state.total_slides {
            let offset = (index as u32) * (pitch as u32);
            if offset + cell_w as u32 > area.width as u32 {
                break;
            }
            let x = area.x + offset as u16;
            let in_window = index >= state.current_slide
                && index < state.current_slide + state.visible_slides;
            let (glyph, style) = if in_window {
                (
                    self.options.active_glyph.as_str(),
                    theme.dot_active.patch(self.options.active_style),
                )
            } else {
                (
                    self.options.inactive_glyph.as_str(),
                    theme.dot_inactive.patch(self.options.style),
                )
            };
            buf.set_stringn(x, y, glyph, cell_w as usize, style);
        }
    }

    /// Map a column inside `area` to the slide index of the dot under it.
    pub fn slide_at(&self, area: Rect, x: u16, y: u16, state: &CarouselState) -> Option<usize> {
        if !area.contains(Position::new(x, y)) {
            return None;
        }
        let cell_w = self.cell_width();
        let pitch = cell_w + self.options.gap;
        let rel = x - area.x;
        if rel % pitch >= cell_w {
            return None; // in the gap
        }
        let index = (rel / pitch) as usize;
        (index < state.total_slides).then_some(index)
    }

    /// Left-press on a dot dispatches a jump to that slide.
    pub fn handle_event(
        &self,
        event: &InputEvent,
        area: Rect,
        store: &mut CarouselStore,
    ) -> bool {
        let InputEvent::Mouse(m) = event else {
            return false;
        };
        if m.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        let Some(index) = self.slide_at(area, m.x, m.y, &store.state()) else {
            return false;
        };
        controls::dispatch(store, NavRequest::ToSlide(index));
        true
    }

    fn cell_width(&self) -> u16 {
        let w = self
            .options
            .active_glyph
            .as_str()
            .width()
            .max(self.options.inactive_glyph.as_str().width());
        (w.max(1)).min(u16::MAX as usize) as u16
    }
}
