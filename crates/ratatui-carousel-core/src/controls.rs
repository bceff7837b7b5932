//! Shared contracts for navigation controls.
//!
//! A control reads a [`CarouselState`] snapshot to decide its disabled
//! rendering, and on activation dispatches a [`NavRequest`] back into the
//! store. The disabled predicates are advisory: the store re-runs the full
//! clamp/wrap computation on every dispatch regardless.

use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::key_char;
use crate::state::CarouselState;
use crate::store::CarouselStore;

/// Whether a Back control should render disabled.
pub fn back_disabled(state: &CarouselState) -> bool {
    if !state.has_multiple_pages() {
        return true;
    }
    !state.infinite && state.current_slide == 0
}

/// Whether a Next control should render disabled.
pub fn next_disabled(state: &CarouselState) -> bool {
    if !state.has_multiple_pages() {
        return true;
    }
    !state.infinite && state.current_slide + state.visible_slides >= state.total_slides
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavRequest {
    Back,
    Next,
    PlayPause,
    First,
    Last,
    ToSlide(usize),
}

/// Apply a navigation request to the store.
pub fn dispatch(store: &mut CarouselStore, request: NavRequest) {
    match request {
        NavRequest::Back => store.move_back(),
        NavRequest::Next => store.move_next(),
        NavRequest::PlayPause => {
            let playing = store.state().is_playing;
            store.set_playing(!playing);
        }
        NavRequest::First => store.move_to_slide(0),
        NavRequest::Last => {
            let last = store.state().max_page();
            store.move_to_slide(last);
        }
        NavRequest::ToSlide(index) => store.move_to_slide(index),
    }
}

/// Key patterns for the navigation requests, one list per request.
#[derive(Clone, Debug)]
pub struct CarouselBindings {
    pub back: Vec<KeyEvent>,
    pub next: Vec<KeyEvent>,
    pub play_pause: Vec<KeyEvent>,
    pub first: Vec<KeyEvent>,
    pub last: Vec<KeyEvent>,
}

impl Default for CarouselBindings {
    fn default() -> Self {
        Self {
            back: vec![KeyEvent::new(KeyCode::Left), key_char('h')],
            next: vec![KeyEvent::new(KeyCode::Right), key_char('l')],
            play_pause: vec![key_char(' '), key_char('p')],
            first: vec![KeyEvent::new(KeyCode::Home), key_char('g')],
            last: vec![KeyEvent::new(KeyCode::End), key_char('G')],
        }
    }
}

impl CarouselBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<NavRequest> {
        if self.back.iter().any(|p| p.matches(key)) {
            return Some(NavRequest::Back);
        }
        if self.next.iter().any(|p| p.matches(key)) {
            return Some(NavRequest::Next);
        }
        if self.play_pause.iter().any(|p| p.matches(key)) {
            return Some(NavRequest::PlayPause);
        }
        if self.first.iter().any(|p| p.matches(key)) {
            return Some(NavRequest::First);
        }
        if self.last.iter().any(|p| p.matches(key)) {
            return Some(NavRequest::Last);
        }
        None
    }

    pub fn apply(&self, store: &mut CarouselStore, request: NavRequest) {
        dispatch(store, request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CarouselOptions;

    fn state(options: CarouselOptions) -> CarouselState {
        CarouselStore::new(options).unwrap().state()
    }

    #[test]
    fn back_is_disabled_on_the_first_slide() {
        assert!(back_disabled(&state(CarouselOptions::new(10))));
        assert!(!back_disabled(&state(
            CarouselOptions::new(10).with_current_slide(1)
        )));
    }

    #[test]
    fn back_is_enabled_on_the_first_slide_when_infinite() {
        assert!(!back_disabled(&state(
            CarouselOptions::new(10).with_infinite(true)
        )));
    }

    #[test]
    fn next_is_disabled_when_the_window_reaches_the_end() {
        assert!(next_disabled(&state(
            CarouselOptions::new(10).with_visible_slides(3).with_current_slide(7)
        )));
        assert!(!next_disabled(&state(
            CarouselOptions::new(10).with_visible_slides(3).with_current_slide(6)
        )));
        assert!(!next_disabled(&state(
            CarouselOptions::new(10)
                .with_visible_slides(3)
                .with_current_slide(7)
                .with_infinite(true)
        )));
    }

    #[test]
    fn everything_is_disabled_without_a_second_page() {
        let s = state(CarouselOptions::new(3).with_visible_slides(3).with_infinite(true));
        assert!(back_disabled(&s));
        assert!(next_disabled(&s));
    }

    #[test]
    fn back_becomes_disabled_after_clamping_at_the_edge() {
        let mut store = CarouselStore::new(
            CarouselOptions::new(3).with_current_slide(1).with_step(3),
        )
        .unwrap();
        store.move_back();
        assert_eq!(store.state().current_slide, 0);
        assert!(back_disabled(&store.state()));
    }

    #[test]
    fn default_bindings_map_arrows_and_vim_keys() {
        let b = CarouselBindings::default();
        assert_eq!(
            b.action_for(&KeyEvent::new(KeyCode::Left)),
            Some(NavRequest::Back)
        );
        assert_eq!(b.action_for(&key_char('l')), Some(NavRequest::Next));
        assert_eq!(b.action_for(&key_char(' ')), Some(NavRequest::PlayPause));
        assert_eq!(b.action_for(&key_char('q')), None);
    }

    #[test]
    fn dispatch_covers_every_request() {
        let mut store = CarouselStore::new(
            CarouselOptions::new(10).with_visible_slides(3).with_step(2),
        )
        .unwrap();

        dispatch(&mut store, NavRequest::Next);
        assert_eq!(store.state().current_slide, 2);
        dispatch(&mut store, NavRequest::Back);
        assert_eq!(store.state().current_slide, 0);
        dispatch(&mut store, NavRequest::Last);
        assert_eq!(store.state().current_slide, 7);
        dispatch(&mut store, NavRequest::First);
        assert_eq!(store.state().current_slide, 0);
        dispatch(&mut store, NavRequest::ToSlide(99));
        assert_eq!(store.state().current_slide, 7);

        dispatch(&mut store, NavRequest::PlayPause);
        assert!(store.state().is_playing);
        dispatch(&mut store, NavRequest::PlayPause);
        assert!(!store.state().is_playing);
    }
}
