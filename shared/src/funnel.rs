use serde::{Deserialize, Serialize};

use crate::quiz::{QUESTIONS, QUESTION_COUNT};
use crate::wheel::{self, MAX_ATTEMPTS};

/// Which screen of the funnel is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Zero-based question index.
    Question(usize),
    Completion,
    Wheel,
}

/// Lifecycle of a single wheel spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinPhase {
    Idle,
    Spinning,
    Stopping,
    Completed,
}

/// Audio cues the presentation layer can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    FirstSpin,
    RetrySpin,
}

/// Analytics events emitted by funnel transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackEvent {
    QuizStarted,
    AnswerSelected {
        question: usize,
        prompt: &'static str,
        answer: String,
    },
    QuizCompleted {
        answers: Vec<String>,
    },
    SpinStarted {
        attempt: u32,
    },
    SpinResult {
        label: String,
        is_win: bool,
    },
    ConversionClicked {
        label: String,
    },
}

/// Side effects a transition asks the presentation layer to perform.
///
/// The state machine itself never touches the pixel bridge, the audio
/// player, or the browser; it only describes what should happen.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Track(TrackEvent),
    PlayCue(Cue),
    BeginSpin { attempt: u32 },
    ShowResult { label: String },
    OpenRedemption { label: String },
}

/// The single source of truth for one visit through the funnel.
#[derive(Debug, Clone, PartialEq)]
pub struct Funnel {
    step: Step,
    answers: [Option<String>; QUESTION_COUNT],
    attempt_count: u32,
    spin_phase: SpinPhase,
    last_outcome: Option<String>,
}

impl Default for Funnel {
    fn default() -> Self {
        Self::new()
    }
}

impl Funnel {
    pub fn new() -> Self {
        Self {
            step: Step::Question(0),
            answers: Default::default(),
            attempt_count: 0,
            spin_phase: SpinPhase::Idle,
            last_outcome: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answer(&self, question: usize) -> Option<&str> {
        self.answers.get(question)?.as_deref()
    }

    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    pub fn attempts_left(&self) -> u32 {
        MAX_ATTEMPTS - self.attempt_count
    }

    pub fn spin_phase(&self) -> SpinPhase {
        self.spin_phase
    }

    pub fn last_outcome(&self) -> Option<&str> {
        self.last_outcome.as_deref()
    }

    /// True when the current question has a recorded answer.
    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::Question(i) => self.answers[i].is_some(),
            Step::Completion | Step::Wheel => true,
        }
    }

    pub fn can_spin(&self) -> bool {
        self.step == Step::Wheel
            && self.spin_phase == SpinPhase::Idle
            && self.attempt_count < MAX_ATTEMPTS
    }

    /// Progress-bar percentage for the current step.
    pub fn progress_percent(&self) -> u32 {
        const QUESTION_PROGRESS: [u32; QUESTION_COUNT] = [17, 33, 57, 79];
        match self.step {
            Step::Question(i) => QUESTION_PROGRESS[i],
            Step::Completion | Step::Wheel => 100,
        }
    }

    /// Records the answer for a question. Re-selecting overwrites the
    /// previous choice; answers are never cleared once set.
    pub fn select_answer(&mut self, question: usize, answer: impl Into<String>) -> Vec<Effect> {
        if question >= QUESTION_COUNT {
            log::debug!("answer rejected: question index {} out of range", question);
            return Vec::new();
        }
        let first_interaction = self.answers.iter().all(|a| a.is_none());
        let answer = answer.into();

        let mut effects = Vec::new();
        if first_interaction {
            effects.push(Effect::Track(TrackEvent::QuizStarted));
        }
        effects.push(Effect::Track(TrackEvent::AnswerSelected {
            question,
            prompt: QUESTIONS[question].prompt,
            answer: answer.clone(),
        }));
        self.answers[question] = Some(answer);
        effects
    }

    /// Moves to the next screen. A question step only advances once its
    /// answer is recorded; the final step is a no-op.
    pub fn advance(&mut self) -> Vec<Effect> {
        match self.step {
            Step::Question(i) => {
                if self.answers[i].is_none() {
                    log::debug!("advance rejected: question {} not answered", i + 1);
                    return Vec::new();
                }
                if i + 1 < QUESTION_COUNT {
                    self.step = Step::Question(i + 1);
                    Vec::new()
                } else {
                    self.step = Step::Completion;
                    let answers = self.answers.iter().flatten().cloned().collect();
                    vec![Effect::Track(TrackEvent::QuizCompleted { answers })]
                }
            }
            Step::Completion => {
                self.step = Step::Wheel;
                self.enter_wheel_step();
                Vec::new()
            }
            Step::Wheel => Vec::new(),
        }
    }

    /// Stale-state guard: every (re-)entry to the wheel screen starts
    /// from a clean attempt history.
    pub fn enter_wheel_step(&mut self) {
        self.attempt_count = 0;
        self.spin_phase = SpinPhase::Idle;
        self.last_outcome = None;
    }

    /// Starts a spin if one may start: the wheel is idle and the
    /// attempt cap has not been reached. Rejected silently otherwise.
    pub fn request_spin(&mut self) -> Vec<Effect> {
        if !self.can_spin() {
            log::debug!(
                "spin rejected: step {:?}, phase {:?}, attempt {}/{}",
                self.step,
                self.spin_phase,
                self.attempt_count,
                MAX_ATTEMPTS
            );
            return Vec::new();
        }
        self.attempt_count += 1;
        self.spin_phase = SpinPhase::Spinning;
        let cue = if self.attempt_count == 1 {
            Cue::FirstSpin
        } else {
            Cue::RetrySpin
        };
        vec![
            Effect::PlayCue(cue),
            Effect::Track(TrackEvent::SpinStarted {
                attempt: self.attempt_count,
            }),
            Effect::BeginSpin {
                attempt: self.attempt_count,
            },
        ]
    }

    /// The rotation animation reached its final frame.
    pub fn begin_stop(&mut self) {
        if self.spin_phase == SpinPhase::Spinning {
            self.spin_phase = SpinPhase::Stopping;
        }
    }

    /// The wheel has visually stopped on the given outcome.
    pub fn complete_spin(&mut self, label: impl Into<String>) -> Vec<Effect> {
        if self.spin_phase != SpinPhase::Stopping {
            log::debug!("spin result ignored in phase {:?}", self.spin_phase);
            return Vec::new();
        }
        let label = label.into();
        self.spin_phase = SpinPhase::Completed;
        self.last_outcome = Some(label.clone());
        vec![
            Effect::Track(TrackEvent::SpinResult {
                label: label.clone(),
                is_win: wheel::is_win(&label),
            }),
            Effect::ShowResult { label },
        ]
    }

    /// The user dismissed the result modal. A winning outcome routes
    /// through [`Self::confirm_redemption`] on its way out.
    pub fn acknowledge_result(&mut self) -> Vec<Effect> {
        if self.spin_phase != SpinPhase::Completed {
            return Vec::new();
        }
        self.spin_phase = SpinPhase::Idle;
        match self.last_outcome.take() {
            Some(label) if wheel::is_win(&label) => self.confirm_redemption(label),
            _ => Vec::new(),
        }
    }

    /// Final conversion: hand the won outcome to the redemption
    /// destination. Never changes the current step.
    pub fn confirm_redemption(&mut self, label: impl Into<String>) -> Vec<Effect> {
        let label = label.into();
        vec![
            Effect::Track(TrackEvent::ConversionClicked {
                label: label.clone(),
            }),
            Effect::OpenRedemption { label },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::{HEADLINE_SEGMENT, NO_WIN_LABEL, SEGMENTS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Answers every question and advances all the way onto the wheel.
    fn answered_funnel() -> Funnel {
        let mut funnel = Funnel::new();
        for i in 0..QUESTION_COUNT {
            funnel.select_answer(i, QUESTIONS[i].options[0]);
            funnel.advance();
        }
        // Leave the completion screen.
        funnel.advance();
        assert_eq!(funnel.step(), Step::Wheel);
        funnel
    }

    /// Drives the engine side of one spin: resolve the target segment,
    /// stop the animation, and report the label back.
    fn settle_spin(funnel: &mut Funnel, rng: &mut StdRng) -> String {
        let attempt = funnel.attempt_count();
        let label = SEGMENTS[wheel::target_segment(attempt, rng)].label.to_string();
        funnel.begin_stop();
        funnel.complete_spin(label.clone());
        label
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut funnel = Funnel::new();
        assert_eq!(funnel.step(), Step::Question(0));
        assert!(funnel.advance().is_empty());
        assert_eq!(funnel.step(), Step::Question(0));

        funnel.select_answer(0, "Fast delivery");
        funnel.advance();
        assert_eq!(funnel.step(), Step::Question(1));

        // Answering a later question does not unlock the current one.
        funnel.select_answer(2, "Low price");
        assert!(funnel.advance().is_empty());
        assert_eq!(funnel.step(), Step::Question(1));
    }

    #[test]
    fn reselecting_overwrites_the_answer() {
        let mut funnel = Funnel::new();
        funnel.select_answer(0, "first pick");
        funnel.select_answer(0, "second pick");
        assert_eq!(funnel.answer(0), Some("second pick"));
    }

    #[test]
    fn first_selection_emits_quiz_started() {
        let mut funnel = Funnel::new();
        let effects = funnel.select_answer(0, "a");
        assert_eq!(effects[0], Effect::Track(TrackEvent::QuizStarted));

        let effects = funnel.select_answer(1, "b");
        assert!(!effects.contains(&Effect::Track(TrackEvent::QuizStarted)));
    }

    #[test]
    fn completing_the_quiz_reports_all_answers() {
        let mut funnel = Funnel::new();
        for i in 0..QUESTION_COUNT {
            funnel.select_answer(i, format!("answer {i}"));
            if i < QUESTION_COUNT - 1 {
                funnel.advance();
            }
        }
        let effects = funnel.advance();
        assert_eq!(funnel.step(), Step::Completion);
        match &effects[0] {
            Effect::Track(TrackEvent::QuizCompleted { answers }) => {
                assert_eq!(answers.len(), QUESTION_COUNT);
                assert_eq!(answers[3], "answer 3");
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn full_quiz_reaches_the_wheel_reset() {
        // End-to-end: four selections, five advances.
        let funnel = answered_funnel();
        assert_eq!(funnel.step(), Step::Wheel);
        assert_eq!(funnel.attempt_count(), 0);
        assert_eq!(funnel.spin_phase(), SpinPhase::Idle);
        assert_eq!(funnel.last_outcome(), None);
    }

    #[test]
    fn spin_is_rejected_outside_the_wheel_step() {
        let mut funnel = Funnel::new();
        funnel.select_answer(0, "a");
        assert!(funnel.request_spin().is_empty());
        assert_eq!(funnel.spin_phase(), SpinPhase::Idle);
        assert_eq!(funnel.attempt_count(), 0);
    }

    #[test]
    fn first_spin_lands_on_try_again() {
        let mut funnel = answered_funnel();
        let mut rng = StdRng::seed_from_u64(1);

        let effects = funnel.request_spin();
        assert_eq!(funnel.attempt_count(), 1);
        assert_eq!(funnel.spin_phase(), SpinPhase::Spinning);
        assert!(effects.contains(&Effect::PlayCue(Cue::FirstSpin)));
        assert!(effects.contains(&Effect::BeginSpin { attempt: 1 }));

        let label = settle_spin(&mut funnel, &mut rng);
        assert_eq!(label, NO_WIN_LABEL);
        assert_eq!(funnel.spin_phase(), SpinPhase::Completed);
        assert_eq!(funnel.last_outcome(), Some(NO_WIN_LABEL));

        let effects = funnel.acknowledge_result();
        assert!(effects.is_empty());
        assert_eq!(funnel.spin_phase(), SpinPhase::Idle);
        assert_eq!(funnel.last_outcome(), None);
    }

    #[test]
    fn second_spin_wins_the_headline_discount() {
        let mut funnel = answered_funnel();
        let mut rng = StdRng::seed_from_u64(1);

        funnel.request_spin();
        settle_spin(&mut funnel, &mut rng);
        funnel.acknowledge_result();

        let effects = funnel.request_spin();
        assert_eq!(funnel.attempt_count(), 2);
        assert!(effects.contains(&Effect::PlayCue(Cue::RetrySpin)));

        let label = settle_spin(&mut funnel, &mut rng);
        assert_eq!(label, SEGMENTS[HEADLINE_SEGMENT].label);

        // Acknowledging a win routes through confirm_redemption.
        let effects = funnel.acknowledge_result();
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Track(TrackEvent::ConversionClicked { label }) if label == "95%"
        )));
        assert!(effects.contains(&Effect::OpenRedemption {
            label: "95%".into()
        }));
        assert_eq!(funnel.step(), Step::Wheel);
        assert_eq!(funnel.spin_phase(), SpinPhase::Idle);
    }

    #[test]
    fn double_spin_is_rejected() {
        let mut funnel = answered_funnel();
        funnel.request_spin();
        assert_eq!(funnel.spin_phase(), SpinPhase::Spinning);

        assert!(funnel.request_spin().is_empty());
        assert_eq!(funnel.attempt_count(), 1);
        assert_eq!(funnel.spin_phase(), SpinPhase::Spinning);
    }

    #[test]
    fn fourth_spin_is_a_no_op() {
        let mut funnel = answered_funnel();
        let mut rng = StdRng::seed_from_u64(99);

        for attempt in 1..=3 {
            funnel.request_spin();
            assert_eq!(funnel.attempt_count(), attempt);
            settle_spin(&mut funnel, &mut rng);
            funnel.acknowledge_result();
        }

        let phase_after_third_ack = funnel.spin_phase();
        assert!(funnel.request_spin().is_empty());
        assert_eq!(funnel.attempt_count(), 3);
        assert_eq!(funnel.spin_phase(), phase_after_third_ack);
    }

    #[test]
    fn spin_result_requires_a_stopping_wheel() {
        let mut funnel = answered_funnel();
        assert!(funnel.complete_spin("95%").is_empty());
        assert_eq!(funnel.spin_phase(), SpinPhase::Idle);

        funnel.request_spin();
        // Skipping begin_stop leaves the result unapplied.
        assert!(funnel.complete_spin("95%").is_empty());
        assert_eq!(funnel.spin_phase(), SpinPhase::Spinning);
    }

    #[test]
    fn reentering_the_wheel_resets_attempts() {
        let mut funnel = answered_funnel();
        let mut rng = StdRng::seed_from_u64(5);
        funnel.request_spin();
        settle_spin(&mut funnel, &mut rng);
        funnel.acknowledge_result();
        assert_eq!(funnel.attempt_count(), 1);

        funnel.enter_wheel_step();
        assert_eq!(funnel.attempt_count(), 0);
        assert_eq!(funnel.spin_phase(), SpinPhase::Idle);
        assert!(funnel.can_spin());
    }

    #[test]
    fn advancing_past_the_wheel_is_a_no_op() {
        let mut funnel = answered_funnel();
        assert!(funnel.advance().is_empty());
        assert_eq!(funnel.step(), Step::Wheel);
    }
}
