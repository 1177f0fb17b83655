use bevy::prelude::*;

use crate::catalog::{PlaceableCatalog, PlaceableKind};
use crate::config::TUTORIAL_HIDE_DELAY;
use crate::events::{CategoryChosen, ObjectPlaced, SelectPlaceable};

// =============================================================================
// Tutorial Step Definition
// =============================================================================

/// The sequential steps of the onboarding tutorials.
///
/// Both courses share the four movement steps and diverge at the
/// selection/placement tail (see [`TutorialCourse::steps`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TutorialStep {
    MoveForward,
    MoveLeft,
    MoveBackward,
    MoveRight,
    /// Basic course: pick any building from the palette.
    SelectBuilding,
    /// Basic course: click the ground to place it.
    PlaceBuilding,
    /// Guided course: open a category in the build menu.
    ChooseCategory,
    /// Guided course: pick an asset from the open category.
    ChooseAsset,
    /// Guided course: click the ground to place it.
    PlaceObject,
    /// Terminal step; no further transitions.
    Completed,
}

impl TutorialStep {
    /// Instruction text shown while waiting for this step's trigger.
    pub fn prompt(self) -> &'static str {
        match self {
            TutorialStep::MoveForward => "Press 'W' to move Forward",
            TutorialStep::MoveLeft => "Good! Now press 'A' to move Left",
            TutorialStep::MoveBackward => "Great! Now press 'S' to move Backward",
            TutorialStep::MoveRight => "Nice! Now press 'D' to move Right",
            TutorialStep::SelectBuilding => "Awesome! Now choose a building from the list.",
            TutorialStep::ChooseCategory => "Awesome! Now open a category in the build menu.",
            TutorialStep::ChooseAsset => "Good! Now choose an asset from the category.",
            TutorialStep::PlaceBuilding | TutorialStep::PlaceObject => {
                "Good! Now click on the ground to place the building."
            }
            TutorialStep::Completed => "Building placed successfully!",
        }
    }
}

/// Corrective text shown when the placement step hits a surface that is not
/// the ground slab. The step does not advance.
pub const INVALID_AREA_NOTICE: &str =
    "Invalid area! Please click on the ground to place the building.";

// =============================================================================
// Courses
// =============================================================================

/// Which of the two onboarding courses is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TutorialCourse {
    /// Movement keys, then pick and place a single building.
    #[default]
    Basic,
    /// Movement keys, then category, asset, and placement.
    Guided,
}

impl TutorialCourse {
    /// The full step sequence for this course, in order.
    pub fn steps(self) -> &'static [TutorialStep] {
        match self {
            TutorialCourse::Basic => &[
                TutorialStep::MoveForward,
                TutorialStep::MoveLeft,
                TutorialStep::MoveBackward,
                TutorialStep::MoveRight,
                TutorialStep::SelectBuilding,
                TutorialStep::PlaceBuilding,
                TutorialStep::Completed,
            ],
            TutorialCourse::Guided => &[
                TutorialStep::MoveForward,
                TutorialStep::MoveLeft,
                TutorialStep::MoveBackward,
                TutorialStep::MoveRight,
                TutorialStep::ChooseCategory,
                TutorialStep::ChooseAsset,
                TutorialStep::PlaceObject,
                TutorialStep::Completed,
            ],
        }
    }
}

// =============================================================================
// Tutorial State Resource
// =============================================================================

/// Tracks the player's progress through the onboarding tutorial.
///
/// The step ordinal is monotonically non-decreasing; there is no rollback.
#[derive(Resource, Debug, Clone)]
pub struct TutorialState {
    pub course: TutorialCourse,
    pub current_step: TutorialStep,
    /// Instruction text currently shown in the panel. Tracks the step's
    /// prompt except while a corrective notice is displayed.
    pub text: String,
    pub visible: bool,
    /// Countdown (seconds) until the panel hides after completion.
    /// `None` when no hide is pending.
    pub hide_countdown: Option<f32>,
}

impl Default for TutorialState {
    fn default() -> Self {
        Self::with_course(TutorialCourse::default())
    }
}

impl TutorialState {
    pub fn with_course(course: TutorialCourse) -> Self {
        let first = course.steps()[0];
        Self {
            course,
            current_step: first,
            text: first.prompt().to_string(),
            visible: true,
            hide_countdown: None,
        }
    }

    /// Position of the current step in the course sequence.
    pub fn index(&self) -> usize {
        self.course
            .steps()
            .iter()
            .position(|&s| s == self.current_step)
            .unwrap_or(0)
    }

    pub fn completed(&self) -> bool {
        self.current_step == TutorialStep::Completed
    }

    /// Advance one step and refresh the prompt. Returns false once terminal.
    /// Reaching `Completed` arms the hide countdown.
    pub fn advance(&mut self) -> bool {
        if self.completed() {
            return false;
        }
        let steps = self.course.steps();
        self.current_step = steps[self.index() + 1];
        self.text = self.current_step.prompt().to_string();
        if self.completed() {
            self.hide_countdown = Some(TUTORIAL_HIDE_DELAY);
        }
        true
    }

    /// Show a corrective message without changing the step.
    pub fn set_notice(&mut self, notice: &str) {
        self.text = notice.to_string();
    }

    /// Hide the panel immediately and cancel any pending countdown.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.hide_countdown = None;
    }

    /// Tick the post-completion countdown. Hidden panels cancel it.
    pub fn tick_hide(&mut self, dt: f32) {
        let Some(remaining) = self.hide_countdown else {
            return;
        };
        if !self.visible {
            self.hide_countdown = None;
            return;
        }
        let remaining = remaining - dt;
        if remaining <= 0.0 {
            self.visible = false;
            self.hide_countdown = None;
        } else {
            self.hide_countdown = Some(remaining);
        }
    }
}

// =============================================================================
// Progress Detection System
// =============================================================================

/// Advances the tutorial when the current step's designated trigger is
/// observed this frame. Any other input is ignored without feedback, except
/// an off-ground placement at the placement step, which shows the
/// corrective notice.
pub fn advance_tutorial(
    keys: Res<ButtonInput<KeyCode>>,
    catalog: Res<PlaceableCatalog>,
    mut tutorial: ResMut<TutorialState>,
    mut categories: EventReader<CategoryChosen>,
    mut selections: EventReader<SelectPlaceable>,
    mut placed: EventReader<ObjectPlaced>,
) {
    if !tutorial.visible || tutorial.completed() {
        categories.clear();
        selections.clear();
        placed.clear();
        return;
    }

    let triggered = match tutorial.current_step {
        TutorialStep::MoveForward => keys.just_pressed(KeyCode::KeyW),
        TutorialStep::MoveLeft => keys.just_pressed(KeyCode::KeyA),
        TutorialStep::MoveBackward => keys.just_pressed(KeyCode::KeyS),
        TutorialStep::MoveRight => keys.just_pressed(KeyCode::KeyD),
        TutorialStep::ChooseCategory => categories.read().next().is_some(),
        TutorialStep::ChooseAsset => selections.read().next().is_some(),
        TutorialStep::SelectBuilding => selections.read().any(|ev| {
            catalog
                .get(ev.category, ev.index)
                .is_some_and(|def| def.kind == PlaceableKind::Building)
        }),
        TutorialStep::PlaceBuilding | TutorialStep::PlaceObject => {
            let mut on_ground = false;
            for ev in placed.read() {
                if ev.on_ground {
                    on_ground = true;
                } else {
                    tutorial.set_notice(INVALID_AREA_NOTICE);
                }
            }
            on_ground
        }
        TutorialStep::Completed => false,
    };

    if triggered {
        tutorial.advance();
        debug!("tutorial advanced to {:?}", tutorial.current_step);
    }

    // Events observed at the wrong step are ignored, not queued.
    categories.clear();
    selections.clear();
    placed.clear();
}

/// Hides the tutorial panel a fixed delay after completion.
pub fn tick_tutorial_hide(time: Res<Time>, mut tutorial: ResMut<TutorialState>) {
    tutorial.tick_hide(time.delta_secs());
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_sequences_start_and_end_correctly() {
        for course in [TutorialCourse::Basic, TutorialCourse::Guided] {
            let steps = course.steps();
            assert_eq!(steps[0], TutorialStep::MoveForward);
            assert_eq!(*steps.last().unwrap(), TutorialStep::Completed);
        }
        assert_eq!(TutorialCourse::Basic.steps().len(), 7);
        assert_eq!(TutorialCourse::Guided.steps().len(), 8);
    }

    #[test]
    fn every_step_has_a_prompt() {
        for course in [TutorialCourse::Basic, TutorialCourse::Guided] {
            for step in course.steps() {
                assert!(!step.prompt().is_empty(), "{step:?} has no prompt");
            }
        }
    }

    #[test]
    fn advance_walks_the_sequence_in_order_and_stops_at_terminal() {
        let mut state = TutorialState::with_course(TutorialCourse::Guided);
        let steps = TutorialCourse::Guided.steps();
        for (i, &expected) in steps.iter().enumerate() {
            assert_eq!(state.current_step, expected);
            assert_eq!(state.index(), i);
            if expected != TutorialStep::Completed {
                assert!(state.advance());
            }
        }
        assert!(state.completed());
        assert!(!state.advance(), "terminal step must not advance");
        assert_eq!(state.current_step, TutorialStep::Completed);
    }

    #[test]
    fn completion_arms_the_hide_countdown() {
        let mut state = TutorialState::with_course(TutorialCourse::Basic);
        while !state.completed() {
            state.advance();
        }
        assert_eq!(state.hide_countdown, Some(TUTORIAL_HIDE_DELAY));
        assert_eq!(state.text, TutorialStep::Completed.prompt());
    }

    #[test]
    fn hide_countdown_ticks_down_then_hides() {
        let mut state = TutorialState::with_course(TutorialCourse::Basic);
        while !state.completed() {
            state.advance();
        }
        state.tick_hide(TUTORIAL_HIDE_DELAY / 2.0);
        assert!(state.visible);
        state.tick_hide(TUTORIAL_HIDE_DELAY);
        assert!(!state.visible);
        assert_eq!(state.hide_countdown, None);
    }

    #[test]
    fn early_dismissal_cancels_the_countdown() {
        let mut state = TutorialState::with_course(TutorialCourse::Basic);
        while !state.completed() {
            state.advance();
        }
        state.dismiss();
        assert_eq!(state.hide_countdown, None);
        // A later tick is a harmless no-op.
        state.tick_hide(10.0);
        assert!(!state.visible);
    }

    #[test]
    fn notice_overrides_text_until_next_advance() {
        let mut state = TutorialState::with_course(TutorialCourse::Guided);
        state.set_notice(INVALID_AREA_NOTICE);
        assert_eq!(state.text, INVALID_AREA_NOTICE);
        assert_eq!(state.current_step, TutorialStep::MoveForward);
        state.advance();
        assert_eq!(state.text, TutorialStep::MoveLeft.prompt());
    }
}
