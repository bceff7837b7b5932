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

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavButtonKind {
    Back,
    Next,
    Play,
}

/// Caller-facing configuration. Styles are patched onto the theme's styles,
/// never replacing them wholesale; `force_disabled` overrides the computed
/// disabled state in either direction.
#[derive(Clone, Debug, Default)]
pub struct NavButtonOptions {
    pub label: Option<String>,
    /// Label for a Play button while autoplay is running.
    pub playing_label: Option<String>,
    pub style: Style,
    pub disabled_style: Style,
    pub force_disabled: Option<bool>,
}

/// Everything a custom renderer needs to draw the button.
#[derive(Clone, Debug)]
pub struct NavButtonContext {
    pub kind: NavButtonKind,
    pub disabled: bool,
    pub label: String,
    pub style: Style,
}

/// A Back / Next / Play-Pause control.
///
/// The button is stateless apart from its options: disabled rendering is
/// computed from the store snapshot on every frame, and activation goes
/// straight back into the store. The store re-runs the full clamp/wrap
/// computation on dispatch, so a stale disabled state can never move the
/// carousel out of bounds.
pub struct NavButton {
    kind: NavButtonKind,
    options: NavButtonOptions,
    on_activate: Option<Box<dyn FnMut(CarouselState)>>,
}

impl NavButton {
    pub fn new(kind: NavButtonKind) -> Self {
        Self {
            kind,
            options: NavButtonOptions::default(),
            on_activate: None,
        }
    }

    pub fn with_options(kind: NavButtonKind, options: NavButtonOptions) -> Self {
        Self {
            kind,
            options,
            on_activate: None,
        }
    }

    pub fn options(&self) -> &NavButtonOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: NavButtonOptions) {
        self.options = options;
    }

    /// Callback invoked after a successful activation, with the new state.
    pub fn on_activate(&mut self, f: impl FnMut(CarouselState) + 'static) {
        self.on_activate = Some(Box::new(f));
    }

    pub fn request(&self) -> NavRequest {
        match self.kind {
            NavButtonKind::Back => NavRequest::Back,
            NavButtonKind::Next => NavRequest::Next,
            NavButtonKind::Play => NavRequest::PlayPause,
        }
    }

    /// `force_disabled` wins over the computed value when set.
    pub fn is_disabled(&self, state: &CarouselState) -> bool {
        if let Some(forced) = self.options.force_disabled {
            return forced;
        }
        match self.kind {
            NavButtonKind::Back => controls::back_disabled(state),
            NavButtonKind::Next => controls::next_disabled(state),
            NavButtonKind::Play => !state.has_multiple_pages(),
        }
    }

    pub fn context(&self, theme: &Theme, state: &CarouselState) -> NavButtonContext {
        let disabled = self.is_disabled(state);
        let (base, user) = if disabled {
            (theme.disabled, self.options.disabled_style)
        } else {
            (theme.text_primary, self.options.style)
        };
        NavButtonContext {
            kind: self.kind,
            disabled,
            label: self.label(state),
            style: base.patch(user),
        }
    }

    /// Default rendering: the label centered in the area.
    pub fn render_ref(&self, area: Rect, buf: &mut Buffer, theme: &Theme, state: &CarouselState) {
        self.render_with(area, buf, theme, state, |area, buf, ctx| {
            buf.set_style(area, ctx.style);
            let label_w = ctx.label.as_str().width().min(u16::MAX as usize) as u16;
            let x = area.x + area.width.saturating_sub(label_w) / 2;
            let y = area.y + area.height / 2;
            buf.set_stringn(x, y, &ctx.label, area.width as usize, ctx.style);
        });
    }

    /// Render with a caller-supplied strategy instead of the default body.
    pub fn render_with<F>(
        &self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        state: &CarouselState,
        f: F,
    ) where
        F: FnOnce(Rect, &mut Buffer, &NavButtonContext),
    {
        if area.width == 0 || area.height == 0 {
            return;
        }
        f(area, buf, &self.context(theme, state));
    }

    /// Left-press inside `area` on an enabled button dispatches the request
    /// and then fires `on_activate` with the new state. Returns true when
    /// the event was consumed.
    pub fn handle_event(
        &mut self,
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
        if !area.contains(Position::new(m.x, m.y)) {
            return false;
        }
        if self.is_disabled(&store.state()) {
            return false;
        }
        controls::dispatch(store, self.request());
        if let Some(cb) = self.on_activate.as_mut() {
            cb(store.state());
        }
        true
    }

    fn label(&self, state: &CarouselState) -> String {
        match self.kind {
            NavButtonKind::Back => self
                .options
                .label
                .clone()
                .unwrap_or_else(|| "‹ prev".to_string()),
            NavButtonKind::Next => self
                .options
                .label
                .clone()
                .unwrap_or_else(|| "next ›".to_string()),
            NavButtonKind::Play => {
                if state.is_playing {
                    self.options
                        .playing_label
                        .clone()
                        .unwrap_or_else(|| "pause".to_string())
                } else {
                    self.options
                        .label
                        .clone()
                        .unwrap_or_else(|| "play".to_string())
                }
            }
        }
    }
}
