//! Section navigation state for the slide decks.
//!
//! A deck is a fixed number of full-viewport sections with a single "current"
//! index. Wheel ticks, navigation keys, indicator clicks and the visibility
//! observer all funnel through [`NavigationState`]. At most one animated
//! transition is in flight at a time; requests arriving while one is pending
//! are dropped, and observer updates are ignored until it settles.

use std::rc::Rc;

use log::debug;
use yew::functional::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    /// A zero delta (horizontal gestures, some trackpads) has no direction.
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Direction::Forward)
        } else if delta_y < 0.0 {
            Some(Direction::Back)
        } else {
            None
        }
    }
}

/// An accepted navigation request whose scroll animation has not settled yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub id: u32,
    pub target: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    GoTo(usize),
    Step(Direction),
    JumpToStart,
    JumpToEnd,
    /// A section crossed the visibility threshold.
    Observed(usize),
    /// The settle timer for the transition with this id fired.
    Settle(u32),
}

/// Maps a `KeyboardEvent::key()` value to a navigation action.
pub fn action_for_key(key: &str) -> Option<NavAction> {
    match key {
        "ArrowDown" | "ArrowRight" | "PageDown" => Some(NavAction::Step(Direction::Forward)),
        "ArrowUp" | "ArrowLeft" | "PageUp" => Some(NavAction::Step(Direction::Back)),
        "Home" => Some(NavAction::JumpToStart),
        "End" => Some(NavAction::JumpToEnd),
        _ => None,
    }
}

/// Like [`action_for_key`], but keys typed into an input, select or textarea
/// belong to that control and never navigate.
pub fn key_action(key: &str, in_form_control: bool) -> Option<NavAction> {
    if in_form_control {
        return None;
    }
    action_for_key(key)
}

/// Parses the `data-section-index` attribute a deck puts on each section.
pub fn parse_section_index(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse().ok()
}

/// Turns one visibility observer entry into an `Observed` action. Only a
/// section that is at least `threshold` visible counts; the section being
/// scrolled away from is still intersecting but reports a smaller ratio.
pub fn observed_section(raw_index: Option<&str>, ratio: f64, threshold: f64) -> Option<NavAction> {
    if ratio < threshold {
        return None;
    }
    parse_section_index(raw_index).map(NavAction::Observed)
}

/// A named run of sections, e.g. "The Business" starting at slide 8.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionGroup {
    pub label: &'static str,
    pub start: usize,
}

/// The group containing `index`: the last one starting at or before it.
pub fn group_at(groups: &[SectionGroup], index: usize) -> Option<&SectionGroup> {
    groups.iter().filter(|group| group.start <= index).last()
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    current_index: usize,
    total_sections: usize,
    in_flight: Option<Transition>,
    next_transition_id: u32,
}

impl NavigationState {
    pub fn new(total_sections: usize) -> Self {
        Self {
            current_index: 0,
            total_sections: total_sections.max(1),
            in_flight: None,
            next_transition_id: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_sections(&self) -> usize {
        self.total_sections
    }

    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn transition(&self) -> Option<Transition> {
        self.in_flight
    }

    fn last_index(&self) -> usize {
        self.total_sections - 1
    }

    /// Starts a transition to `index`. Returns `None` when the request is
    /// dropped: another transition is in flight, the index is out of range,
    /// or it is already the current section.
    pub fn go_to(&mut self, index: usize) -> Option<Transition> {
        if let Some(pending) = self.in_flight {
            debug!(
                "Dropping navigation to {} while transition {} to {} is in flight",
                index, pending.id, pending.target
            );
            return None;
        }
        if index >= self.total_sections {
            debug!("Ignoring navigation to out-of-range section {}", index);
            return None;
        }
        if index == self.current_index {
            return None;
        }

        let transition = Transition {
            id: self.next_transition_id,
            target: index,
        };
        self.next_transition_id = self.next_transition_id.wrapping_add(1);
        self.in_flight = Some(transition);
        self.current_index = index;
        debug!("Transition {} to section {}", transition.id, index);
        Some(transition)
    }

    pub fn step(&mut self, direction: Direction) -> Option<Transition> {
        let target = match direction {
            Direction::Back => self.current_index.saturating_sub(1),
            Direction::Forward => (self.current_index + 1).min(self.last_index()),
        };
        if target == self.current_index {
            return None;
        }
        self.go_to(target)
    }

    pub fn jump_to_start(&mut self) -> Option<Transition> {
        self.go_to(0)
    }

    pub fn jump_to_end(&mut self) -> Option<Transition> {
        self.go_to(self.last_index())
    }

    /// Reconciles the index with a section that scrolled into view on its own.
    /// Returns whether the index changed.
    pub fn observe(&mut self, index: usize) -> bool {
        if self.in_flight.is_some() || index >= self.total_sections || index == self.current_index {
            return false;
        }
        self.current_index = index;
        true
    }

    /// Releases the lock held by transition `id`. Timers belonging to older
    /// transitions are ignored.
    pub fn settle(&mut self, id: u32) -> bool {
        match self.in_flight {
            Some(pending) if pending.id == id => {
                debug!("Transition {} settled on section {}", id, pending.target);
                self.in_flight = None;
                true
            }
            _ => false,
        }
    }

    pub fn apply(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::GoTo(index) => self.go_to(index).is_some(),
            NavAction::Step(direction) => self.step(direction).is_some(),
            NavAction::JumpToStart => self.jump_to_start().is_some(),
            NavAction::JumpToEnd => self.jump_to_end().is_some(),
            NavAction::Observed(index) => self.observe(index),
            NavAction::Settle(id) => self.settle(id),
        }
    }
}

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled_at(total: usize, index: usize) -> NavigationState {
        let mut state = NavigationState::new(total);
        if let Some(t) = state.go_to(index) {
            state.settle(t.id);
        }
        state
    }

    #[test]
    fn step_toward_boundary_is_noop() {
        for total in [3, 6, 17] {
            let mut start = NavigationState::new(total);
            assert_eq!(start.step(Direction::Back), None);
            assert_eq!(start.current_index(), 0);
            assert!(!start.is_transitioning());

            let mut end = settled_at(total, total - 1);
            assert_eq!(end.step(Direction::Forward), None);
            assert_eq!(end.current_index(), total - 1);
            assert!(!end.is_transitioning());
        }
    }

    #[test]
    fn requests_inside_settle_window_are_dropped() {
        let mut state = NavigationState::new(6);
        let first = state.go_to(3).expect("first request accepted");
        assert_eq!(first.target, 3);
        assert!(state.is_transitioning());

        assert_eq!(state.go_to(5), None);
        assert_eq!(state.step(Direction::Forward), None);
        assert_eq!(state.jump_to_start(), None);
        assert_eq!(state.current_index(), 3);

        assert!(state.settle(first.id));
        let second = state.go_to(5).expect("accepted after settle");
        assert_ne!(second.id, first.id);
        assert_eq!(state.current_index(), 5);
    }

    #[test]
    fn go_to_current_index_leaves_state_unchanged() {
        let mut state = settled_at(6, 2);
        let before = state.clone();
        assert_eq!(state.go_to(2), None);
        assert_eq!(state, before);
    }

    #[test]
    fn out_of_range_request_is_ignored() {
        let mut state = NavigationState::new(3);
        assert_eq!(state.go_to(3), None);
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn jumps_reach_both_ends() {
        let mut state = NavigationState::new(17);
        let t = state.jump_to_end().unwrap();
        assert_eq!(t.target, 16);
        state.settle(t.id);
        let t = state.jump_to_start().unwrap();
        assert_eq!(t.target, 0);
    }

    #[test]
    fn observer_is_ignored_while_transitioning() {
        let mut state = NavigationState::new(6);
        let t = state.go_to(4).unwrap();
        assert!(!state.observe(2));
        assert_eq!(state.current_index(), 4);

        state.settle(t.id);
        assert!(state.observe(2));
        assert_eq!(state.current_index(), 2);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn stale_settle_does_not_release_lock() {
        let mut state = NavigationState::new(6);
        let first = state.go_to(1).unwrap();
        state.settle(first.id);
        let second = state.go_to(2).unwrap();

        assert!(!state.settle(first.id));
        assert!(state.is_transitioning());
        assert!(state.settle(second.id));
    }

    #[test]
    fn zero_sections_is_treated_as_one() {
        let mut state = NavigationState::new(0);
        assert_eq!(state.total_sections(), 1);
        assert_eq!(state.step(Direction::Forward), None);
        assert_eq!(state.jump_to_end(), None);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(NavigationState::new(3));
        let same = state.clone().reduce(NavAction::Step(Direction::Back));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.clone().reduce(NavAction::Step(Direction::Forward));
        assert!(!Rc::ptr_eq(&state, &moved));
        assert_eq!(moved.current_index(), 1);
        let id = moved.transition().unwrap().id;

        let dropped = moved.clone().reduce(NavAction::GoTo(2));
        assert!(Rc::ptr_eq(&moved, &dropped));

        let settled = moved.reduce(NavAction::Settle(id));
        assert!(!settled.is_transitioning());
    }

    #[test]
    fn wheel_delta_sign_picks_direction() {
        assert_eq!(Direction::from_wheel_delta(42.0), Some(Direction::Forward));
        assert_eq!(Direction::from_wheel_delta(-3.5), Some(Direction::Back));
        assert_eq!(Direction::from_wheel_delta(0.0), None);
        assert_eq!(Direction::from_wheel_delta(-0.0), None);
    }

    #[test]
    fn backward_swipe_batch_lands_on_entered_section() {
        // Both sections cross the threshold in one batch, in document order:
        // the entered section above, then the one being left.
        let threshold = crate::config::DEFAULT_VISIBILITY_THRESHOLD;
        let mut state = settled_at(3, 2);
        let batch = [(Some("1"), 0.55), (Some("2"), 0.45)];
        for (raw, ratio) in batch {
            if let Some(action) = observed_section(raw, ratio, threshold) {
                state.apply(action);
            }
        }
        assert_eq!(state.current_index(), 1);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn visibility_ratio_must_reach_threshold() {
        let default = crate::config::DEFAULT_VISIBILITY_THRESHOLD;
        assert_eq!(observed_section(Some("4"), 0.49, default), None);
        assert_eq!(observed_section(Some("4"), 0.5, default), Some(NavAction::Observed(4)));
        assert_eq!(observed_section(Some("4"), 1.0, default), Some(NavAction::Observed(4)));

        let strategy = crate::config::STRATEGY_VISIBILITY_THRESHOLD;
        assert_eq!(observed_section(Some("1"), 0.55, strategy), None);
        assert_eq!(observed_section(Some("1"), 0.6, strategy), Some(NavAction::Observed(1)));
    }

    #[test]
    fn section_index_attribute_must_be_a_number() {
        assert_eq!(parse_section_index(Some("0")), Some(0));
        assert_eq!(parse_section_index(Some("16")), Some(16));
        assert_eq!(parse_section_index(None), None);
        assert_eq!(parse_section_index(Some("")), None);
        assert_eq!(parse_section_index(Some("-1")), None);
        assert_eq!(parse_section_index(Some("two")), None);
        assert_eq!(observed_section(Some("abc"), 0.9, 0.5), None);
        assert_eq!(observed_section(None, 0.9, 0.5), None);
    }

    #[test]
    fn keys_inside_form_controls_never_navigate() {
        for key in ["ArrowDown", "ArrowUp", "ArrowLeft", "ArrowRight", "PageDown", "PageUp", "Home", "End"] {
            assert_eq!(key_action(key, true), None);
            assert_eq!(key_action(key, false), action_for_key(key));
        }
        assert_eq!(key_action("ArrowRight", false), Some(NavAction::Step(Direction::Forward)));
    }

    #[test]
    fn keys_map_to_actions() {
        for key in ["ArrowDown", "ArrowRight", "PageDown"] {
            assert_eq!(action_for_key(key), Some(NavAction::Step(Direction::Forward)));
        }
        for key in ["ArrowUp", "ArrowLeft", "PageUp"] {
            assert_eq!(action_for_key(key), Some(NavAction::Step(Direction::Back)));
        }
        assert_eq!(action_for_key("Home"), Some(NavAction::JumpToStart));
        assert_eq!(action_for_key("End"), Some(NavAction::JumpToEnd));
        assert_eq!(action_for_key("Enter"), None);
        assert_eq!(action_for_key(" "), None);
    }

    #[test]
    fn group_lookup_uses_last_started_group() {
        let groups = vec![
            SectionGroup { label: "The Story", start: 0 },
            SectionGroup { label: "The Business", start: 7 },
            SectionGroup { label: "FAIRCUT", start: 16 },
        ];
        assert_eq!(group_at(&groups, 0).unwrap().label, "The Story");
        assert_eq!(group_at(&groups, 6).unwrap().label, "The Story");
        assert_eq!(group_at(&groups, 7).unwrap().label, "The Business");
        assert_eq!(group_at(&groups, 15).unwrap().label, "The Business");
        assert_eq!(group_at(&groups, 16).unwrap().label, "FAIRCUT");
        assert!(group_at(&[], 3).is_none());
    }
}
