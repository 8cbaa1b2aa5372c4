// SPDX-License-Identifier: MPL-2.0
//! Lightbox modal state machine.
//!
//! The modal is modeled as an explicit tagged union rather than a selection
//! plus a transition flag, so a navigation request can be accepted or
//! rejected synchronously before any timer fires. At most one transition is
//! ever in flight: requests arriving while `Transitioning` are a no-op.
//!
//! A transition has two timed phases driven by the application update loop:
//! after the fade delay [`Lightbox::advance`] swaps the selection to its
//! wraparound neighbor within the current visible set, and after the settle
//! delay [`Lightbox::finish`] returns to `Open`. Closing is allowed from any
//! state; timer messages that arrive after a close find `Closed` and do
//! nothing.

use crate::catalog::ImageRecord;

/// Direction of a next/previous navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Current modal state. The `id` always refers to a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    /// No modal shown.
    #[default]
    Closed,
    /// Modal shown for the selected record.
    Open { id: u32 },
    /// A navigation transition is in flight for the selected record.
    Transitioning { id: u32, direction: Direction },
}

impl Lightbox {
    /// Opens the modal on `record` (selection from the rendered set).
    pub fn open(&mut self, id: u32) {
        *self = Lightbox::Open { id };
    }

    /// Closes the modal from any state.
    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    /// Returns the selected record id, if the modal is open or transitioning.
    pub fn selection(&self) -> Option<u32> {
        match self {
            Lightbox::Closed => None,
            Lightbox::Open { id } | Lightbox::Transitioning { id, .. } => Some(*id),
        }
    }

    /// Whether a transition is currently in flight.
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Lightbox::Transitioning { .. })
    }

    /// Accepts a navigation request, entering `Transitioning`.
    ///
    /// Returns `true` when the request was accepted and the caller should
    /// start the fade timer. Requests are rejected while `Closed` (no
    /// selection) and while `Transitioning` (re-entrancy guard).
    pub fn request(&mut self, direction: Direction) -> bool {
        match *self {
            Lightbox::Open { id } => {
                *self = Lightbox::Transitioning { id, direction };
                true
            }
            Lightbox::Closed | Lightbox::Transitioning { .. } => false,
        }
    }

    /// Swaps the selection to its neighbor once the fade delay has elapsed.
    ///
    /// The neighbor is computed within the *current* visible set with
    /// wraparound: next of the last record is the first, previous of the
    /// first is the last. When the selection is no longer part of the
    /// visible set the modal closes instead of guessing an index. Does
    /// nothing unless a transition is in flight.
    pub fn advance(&mut self, visible: &[ImageRecord]) {
        let Lightbox::Transitioning { id, direction } = *self else {
            return;
        };

        let Some(index) = visible.iter().position(|record| record.id == id) else {
            *self = Lightbox::Closed;
            return;
        };

        let target = match direction {
            Direction::Next => (index + 1) % visible.len(),
            Direction::Previous => (index + visible.len() - 1) % visible.len(),
        };
        *self = Lightbox::Transitioning {
            id: visible[target].id,
            direction,
        };
    }

    /// Ends the visual transition once the settle delay has elapsed.
    pub fn finish(&mut self) {
        if let Lightbox::Transitioning { id, .. } = *self {
            *self = Lightbox::Open { id };
        }
    }

    /// Reconciles the modal with a freshly recomputed visible set.
    ///
    /// When a search narrows the visible set while the modal is open and the
    /// selected record is filtered out, the modal closes. This is the fixed
    /// policy for the otherwise-ambiguous "selection not found" case.
    pub fn sync_with_visible(&mut self, visible: &[ImageRecord]) {
        if let Some(id) = self.selection() {
            if !visible.iter().any(|record| record.id == id) {
                *self = Lightbox::Closed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, filename: &str) -> ImageRecord {
        ImageRecord {
            id,
            src: format!("/images/{}", filename),
            title: crate::catalog::display_title(filename),
            filename: filename.to_string(),
            size: "Unknown".to_string(),
            date: "Unknown".to_string(),
        }
    }

    fn two_images() -> Vec<ImageRecord> {
        vec![record(1, "anicat.png"), record(2, "anisigned.png")]
    }

    /// Runs a full transition: request, fade elapsed, settle elapsed.
    fn navigate(lightbox: &mut Lightbox, direction: Direction, visible: &[ImageRecord]) {
        assert!(lightbox.request(direction));
        lightbox.advance(visible);
        lightbox.finish();
    }

    #[test]
    fn open_then_close_round_trip() {
        let mut lightbox = Lightbox::default();
        assert_eq!(lightbox.selection(), None);

        lightbox.open(1);
        assert_eq!(lightbox.selection(), Some(1));

        lightbox.close();
        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn right_arrow_walks_forward_and_wraps() {
        let visible = two_images();
        let mut lightbox = Lightbox::default();
        lightbox.open(1);

        navigate(&mut lightbox, Direction::Next, &visible);
        assert_eq!(lightbox, Lightbox::Open { id: 2 });

        navigate(&mut lightbox, Direction::Next, &visible);
        assert_eq!(lightbox, Lightbox::Open { id: 1 });
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let visible = two_images();
        let mut lightbox = Lightbox::default();
        lightbox.open(1);

        navigate(&mut lightbox, Direction::Previous, &visible);
        assert_eq!(lightbox, Lightbox::Open { id: 2 });
    }

    #[test]
    fn navigation_request_while_transitioning_is_no_op() {
        let visible = two_images();
        let mut lightbox = Lightbox::default();
        lightbox.open(1);

        assert!(lightbox.request(Direction::Next));
        let in_flight = lightbox;

        // A second request must neither change state nor start a new timer.
        assert!(!lightbox.request(Direction::Next));
        assert!(!lightbox.request(Direction::Previous));
        assert_eq!(lightbox, in_flight);

        lightbox.advance(&visible);
        lightbox.finish();
        assert_eq!(lightbox, Lightbox::Open { id: 2 });
    }

    #[test]
    fn navigation_request_while_closed_is_rejected() {
        let mut lightbox = Lightbox::default();
        assert!(!lightbox.request(Direction::Next));
        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn close_during_transition_wins_over_late_timers() {
        let visible = two_images();
        let mut lightbox = Lightbox::default();
        lightbox.open(1);
        assert!(lightbox.request(Direction::Next));

        // Escape arrives before the fade timer fires.
        lightbox.close();
        assert_eq!(lightbox, Lightbox::Closed);

        // The stale timer messages find a closed modal and do nothing.
        lightbox.advance(&visible);
        lightbox.finish();
        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn advance_on_single_record_stays_put() {
        let visible = vec![record(1, "anicat.png")];
        let mut lightbox = Lightbox::default();
        lightbox.open(1);

        navigate(&mut lightbox, Direction::Next, &visible);
        assert_eq!(lightbox, Lightbox::Open { id: 1 });
    }

    #[test]
    fn advance_closes_when_selection_left_visible_set() {
        let mut lightbox = Lightbox::default();
        lightbox.open(1);
        assert!(lightbox.request(Direction::Next));

        // The visible set was re-filtered mid-transition and no longer
        // contains record 1.
        let visible = vec![record(2, "anisigned.png")];
        lightbox.advance(&visible);
        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn sync_closes_modal_when_selection_is_filtered_out() {
        let mut lightbox = Lightbox::default();
        lightbox.open(1);

        let narrowed = vec![record(2, "anisigned.png")];
        lightbox.sync_with_visible(&narrowed);
        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn sync_keeps_modal_when_selection_survives_filter() {
        let mut lightbox = Lightbox::default();
        lightbox.open(2);

        lightbox.sync_with_visible(&two_images());
        assert_eq!(lightbox, Lightbox::Open { id: 2 });
    }

    #[test]
    fn three_image_walk_matches_visible_order() {
        let visible = vec![
            record(1, "anicat.png"),
            record(3, "Catmessiahniko.jpg"),
            record(7, "gobbler_valis_and_arc.jpg"),
        ];
        let mut lightbox = Lightbox::default();
        lightbox.open(3);

        navigate(&mut lightbox, Direction::Next, &visible);
        assert_eq!(lightbox.selection(), Some(7));

        navigate(&mut lightbox, Direction::Next, &visible);
        assert_eq!(lightbox.selection(), Some(1));

        navigate(&mut lightbox, Direction::Previous, &visible);
        assert_eq!(lightbox.selection(), Some(7));
    }
}
