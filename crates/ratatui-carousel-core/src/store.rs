use crate::position;
use crate::state::CarouselOptions;
use crate::state::CarouselState;
use crate::state::CarouselUpdate;
use crate::state::ConfigError;
use crate::state::validate;

/// Handle returned by [`CarouselStore::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Direction the autoplay driver advances in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayDirection {
    #[default]
    Forward,
    Backward,
}

type Observer = Box<dyn FnMut(CarouselState)>;

/// The single source of truth for one carousel's navigation state.
///
/// Every mutation goes through the store; controls and widgets only ever see
/// by-value [`CarouselState`] snapshots. Observers run synchronously, in
/// subscription order, strictly after a mutation has been applied. Mutation
/// methods take `&mut self`, so an observer cannot re-enter the store it is
/// being notified by; a transition is never observed partially applied.
///
/// Moves always run the full clamp/wrap computation, even when a control's
/// own disabled rendering would have hidden the action. The store does not
/// trust caller-side disabled checks.
pub struct CarouselStore {
    state: CarouselState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl CarouselStore {
    pub fn new(options: CarouselOptions) -> Result<Self, ConfigError> {
        validate(options.total_slides, options.visible_slides, options.step)?;
        let state = CarouselState {
            current_slide: position::clamp_slide(
                options.current_slide,
                options.total_slides,
                options.visible_slides,
            ),
            total_slides: options.total_slides,
            visible_slides: options.visible_slides,
            step: options.step,
            infinite: options.infinite,
            is_playing: options.is_playing,
        };
        Ok(Self {
            state,
            observers: Vec::new(),
            next_id: 0,
        })
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Move backward by `step`, clamping at the first page or wrapping to
    /// the last page start in infinite mode. Pauses autoplay.
    pub fn move_back(&mut self) {
        let s = self.state;
        let mut next = s;
        next.current_slide = position::compute_back(
            s.current_slide,
            s.step,
            s.total_slides,
            s.visible_slides,
            s.infinite,
        );
        next.is_playing = false;
        self.apply(next);
    }

    /// Move forward by `step`, clamping at the last page start or wrapping
    /// to the first page in infinite mode. Pauses autoplay.
    pub fn move_next(&mut self) {
        let s = self.state;
        let mut next = s;
        next.current_slide = position::compute_next(
            s.current_slide,
            s.step,
            s.total_slides,
            s.visible_slides,
            s.infinite,
        );
        next.is_playing = false;
        self.apply(next);
    }

    /// Jump to a slide directly (dot/thumbnail controls). The index is
    /// clamped to the last page start. Pauses autoplay.
    pub fn move_to_slide(&mut self, index: usize) {
        let s = self.state;
        let mut next = s;
        next.current_slide = position::clamp_slide(index, s.total_slides, s.visible_slides);
        next.is_playing = false;
        self.apply(next);
    }

    /// Set the autoplay flag without moving.
    pub fn set_playing(&mut self, is_playing: bool) {
        let mut next = self.state;
        next.is_playing = is_playing;
        self.apply(next);
    }

    /// Advance on an autoplay tick. Unlike the manual moves this wraps at
    /// the boundary in either mode (so playback loops) and leaves
    /// `is_playing` untouched.
    pub fn auto_advance(&mut self, direction: PlayDirection) {
        let s = self.state;
        let mut next = s;
        next.current_slide = match direction {
            PlayDirection::Forward => position::compute_next(
                s.current_slide,
                s.step,
                s.total_slides,
                s.visible_slides,
                true,
            ),
            PlayDirection::Backward => position::compute_back(
                s.current_slide,
                s.step,
                s.total_slides,
                s.visible_slides,
                true,
            ),
        };
        self.apply(next);
    }

    /// Merge a partial configuration change (prop updates from the host).
    ///
    /// Validation failures leave the state untouched. On success
    /// `current_slide` is re-clamped into the new bounds.
    pub fn update_config(&mut self, update: CarouselUpdate) -> Result<(), ConfigError> {
        let s = self.state;
        let total = update.total_slides.unwrap_or(s.total_slides);
        let visible = update.visible_slides.unwrap_or(s.visible_slides);
        let step = update.step.unwrap_or(s.step);
        validate(total, visible, step)?;

        let next = CarouselState {
            current_slide: position::clamp_slide(s.current_slide, total, visible),
            total_slides: total,
            visible_slides: visible,
            step,
            infinite: update.infinite.unwrap_or(s.infinite),
            is_playing: s.is_playing,
        };
        self.apply(next);
        Ok(())
    }

    /// Register an observer called with the new state after every
    /// transition that actually changed something. Panics in an observer
    /// propagate to the caller of the mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(CarouselState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    fn apply(&mut self, next: CarouselState) {
        if next == self.state {
            return;
        }
        self.state = next;
        for (_, observer) in &mut self.observers {
            observer(next);
        }
    }
}

impl std::fmt::Debug for CarouselStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store(options: CarouselOptions) -> CarouselStore {
        CarouselStore::new(options).unwrap()
    }

    #[test]
    fn new_rejects_invalid_configuration() {
        assert_eq!(
            CarouselStore::new(CarouselOptions::new(0)).unwrap_err(),
            ConfigError::NoSlides
        );
        assert_eq!(
            CarouselStore::new(CarouselOptions::new(5).with_step(0)).unwrap_err(),
            ConfigError::ZeroStep
        );
    }

    #[test]
    fn new_clamps_an_out_of_range_current_slide() {
        let s = store(CarouselOptions::new(10).with_visible_slides(3).with_current_slide(9));
        assert_eq!(s.state().current_slide, 7);
    }

    #[test]
    fn move_back_subtracts_step() {
        let mut s = store(CarouselOptions::new(10).with_current_slide(4).with_step(3));
        s.move_back();
        assert_eq!(s.state().current_slide, 1);
    }

    #[test]
    fn move_back_wraps_when_infinite() {
        let mut s = store(
            CarouselOptions::new(10)
                .with_visible_slides(3)
                .with_step(3)
                .with_infinite(true),
        );
        s.move_back();
        assert_eq!(s.state().current_slide, 7);
    }

    #[test]
    fn move_back_clamps_to_zero() {
        let mut s = store(CarouselOptions::new(3).with_current_slide(1).with_step(3));
        s.move_back();
        assert_eq!(s.state().current_slide, 0);
    }

    #[test]
    fn manual_moves_pause_autoplay() {
        let mut s = store(CarouselOptions::new(5).with_playing(true));
        s.move_next();
        assert!(!s.state().is_playing);

        let mut s = store(CarouselOptions::new(5).with_current_slide(2).with_playing(true));
        s.move_back();
        assert!(!s.state().is_playing);

        let mut s = store(CarouselOptions::new(5).with_playing(true));
        s.move_to_slide(3);
        assert!(!s.state().is_playing);
    }

    #[test]
    fn pause_applies_even_when_position_does_not_change() {
        // At the left edge, non-infinite: the move is a positional no-op but
        // still counts as manual interaction.
        let mut s = store(CarouselOptions::new(5).with_playing(true));
        s.move_back();
        assert_eq!(s.state().current_slide, 0);
        assert!(!s.state().is_playing);
    }

    #[test]
    fn auto_advance_keeps_playing_and_loops() {
        let mut s = store(CarouselOptions::new(3).with_playing(true));
        s.auto_advance(PlayDirection::Forward);
        s.auto_advance(PlayDirection::Forward);
        assert_eq!(s.state().current_slide, 2);
        assert!(s.state().is_playing);
        s.auto_advance(PlayDirection::Forward);
        assert_eq!(s.state().current_slide, 0);
        assert!(s.state().is_playing);
    }

    #[test]
    fn current_slide_stays_in_bounds_under_any_sequence() {
        let mut s = store(CarouselOptions::new(10).with_visible_slides(3).with_step(4));
        for i in 0..50 {
            match i % 7 {
                0 | 3 => s.move_next(),
                1 | 4 | 5 => s.move_back(),
                2 => s.move_to_slide(i),
                _ => s.auto_advance(PlayDirection::Forward),
            }
            let state = s.state();
            assert!(state.current_slide <= state.max_page());
        }
    }

    #[test]
    fn single_page_carousel_never_moves() {
        let mut s = store(CarouselOptions::new(3).with_visible_slides(3).with_infinite(true));
        s.move_next();
        s.move_back();
        s.move_to_slide(2);
        s.auto_advance(PlayDirection::Forward);
        assert_eq!(s.state().current_slide, 0);
    }

    #[test]
    fn update_config_reclamps_current_slide() {
        let mut s = store(CarouselOptions::new(10).with_current_slide(8));
        s.update_config(CarouselUpdate {
            total_slides: Some(5),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(s.state().current_slide, 4);

        s.update_config(CarouselUpdate {
            visible_slides: Some(3),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(s.state().current_slide, 2);
    }

    #[test]
    fn update_config_rejects_without_touching_state() {
        let mut s = store(CarouselOptions::new(10).with_current_slide(4));
        let err = s
            .update_config(CarouselUpdate {
                step: Some(0),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroStep);
        assert_eq!(s.state().current_slide, 4);
        assert_eq!(s.state().step, 1);
    }

    #[test]
    fn observers_run_in_subscription_order_with_the_new_state() {
        let seen: Rc<RefCell<Vec<(u8, usize)>>> = Rc::default();
        let mut s = store(CarouselOptions::new(10));

        let a = seen.clone();
        s.subscribe(move |state| a.borrow_mut().push((0, state.current_slide)));
        let b = seen.clone();
        s.subscribe(move |state| b.borrow_mut().push((1, state.current_slide)));

        s.move_next();
        assert_eq!(*seen.borrow(), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn no_notification_for_a_true_no_op() {
        let calls = Rc::new(RefCell::new(0));
        let mut s = store(CarouselOptions::new(5));
        let c = calls.clone();
        s.subscribe(move |_| *c.borrow_mut() += 1);

        s.move_back(); // already at 0, already paused
        s.set_playing(false); // already false
        assert_eq!(*calls.borrow(), 0);

        s.move_next();
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let calls = Rc::new(RefCell::new(0));
        let mut s = store(CarouselOptions::new(5));
        let c = calls.clone();
        let id = s.subscribe(move |_| *c.borrow_mut() += 1);

        s.move_next();
        assert!(s.unsubscribe(id));
        assert!(!s.unsubscribe(id));
        s.move_next();
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn set_playing_does_not_move() {
        let mut s = store(CarouselOptions::new(5).with_current_slide(2));
        s.set_playing(true);
        assert_eq!(s.state().current_slide, 2);
        assert!(s.state().is_playing);
    }
}
