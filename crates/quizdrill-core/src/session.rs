//! Exam session state machine.
//!
//! Drives one timed attempt over a fixed question sequence: navigation,
//! answer capture, time-budget enforcement, and final scoring. The machine
//! is pure: it never reads a clock or a terminal. The interactive adapter
//! owns the wall clock and passes the elapsed time into every step, so the
//! whole traversal can be driven by a scripted action sequence in tests.
//!
//! The time budget is polled, not preemptive: expiry is only detected when
//! a step runs, so overrun is bounded by how long the user sits on one
//! prompt. Acceptable slack for a self-paced trainer.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::error::SessionError;
use crate::model::{AttemptResult, ExamAttempt, PassCondition, Question};

/// One user action inside a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Select answers by their positions in the displayed order.
    Answer(Vec<usize>),
    /// Go back one question (no-op on the first).
    Back,
    /// Re-confirm the already-recorded answer and move on.
    Next,
    /// Redisplay the current question and re-check the time budget.
    RefreshClock,
}

/// What a step did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// An answer was recorded (or re-confirmed) and the index advanced.
    Advanced,
    /// The index moved back (or was already at the first question).
    NavigatedBack,
    /// `Next` was rejected: the current question has no recorded answer.
    NeedsAnswer,
    /// The selection was empty or referenced a choice that does not exist.
    InvalidSelection,
    /// Nothing changed; the caller should redraw the current question.
    Redisplayed,
    /// The time budget ran out; the session is over, answers kept.
    TimeExpired,
}

/// A timed traversal over a fixed sequence of questions.
#[derive(Debug)]
pub struct ExamSession {
    results: Vec<AttemptResult>,
    current: usize,
    time_limit_minutes: u64,
    pass_condition: PassCondition,
    expired: bool,
}

impl ExamSession {
    /// Start a session over `questions` with a time budget in minutes.
    ///
    /// Result slots are pre-allocated with empty answers; `total` in the
    /// final record counts every slot, answered or not.
    pub fn new(
        questions: Vec<Question>,
        time_limit_minutes: u64,
        pass_condition: PassCondition,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        Ok(Self {
            results: questions.into_iter().map(AttemptResult::unanswered).collect(),
            current: 0,
            time_limit_minutes,
            pass_condition,
            expired: false,
        })
    }

    /// Seed a retake from a saved attempt: same questions (answers
    /// re-shuffled), same pass condition and time limit, all prior answers
    /// reset. This is a new attempt, not a continuation.
    pub fn from_attempt<R: Rng>(attempt: &ExamAttempt, rng: &mut R) -> Result<Self, SessionError> {
        let mut questions: Vec<Question> =
            attempt.results.iter().map(|r| r.question.clone()).collect();
        crate::bank::shuffle_answers(&mut questions, rng);
        Self::new(questions, attempt.time_limit, attempt.pass_condition.clone())
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// The question currently presented, or `None` once all are traversed.
    pub fn current(&self) -> Option<&AttemptResult> {
        self.results.get(self.current)
    }

    pub fn results(&self) -> &[AttemptResult] {
        &self.results
    }

    pub fn pass_condition(&self) -> &PassCondition {
        &self.pass_condition
    }

    pub fn time_limit_minutes(&self) -> u64 {
        self.time_limit_minutes
    }

    /// Time left in the budget after `elapsed`, zero once spent.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        Duration::from_secs(self.time_limit_minutes * 60).saturating_sub(elapsed)
    }

    /// All questions traversed.
    pub fn is_complete(&self) -> bool {
        self.current >= self.results.len()
    }

    /// The time budget ran out mid-session.
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn is_finished(&self) -> bool {
        self.is_complete() || self.expired
    }

    /// Apply one action, checking the time budget first.
    ///
    /// Actions on a finished session change nothing.
    pub fn step(&mut self, action: SessionAction, elapsed: Duration) -> StepOutcome {
        if self.expired {
            return StepOutcome::TimeExpired;
        }
        if self.is_complete() {
            return StepOutcome::Redisplayed;
        }
        if self.remaining(elapsed).is_zero() {
            self.expired = true;
            return StepOutcome::TimeExpired;
        }

        match action {
            SessionAction::RefreshClock => StepOutcome::Redisplayed,
            SessionAction::Back => {
                self.current = self.current.saturating_sub(1);
                StepOutcome::NavigatedBack
            }
            SessionAction::Next => {
                if self.results[self.current].is_answered() {
                    self.current += 1;
                    StepOutcome::Advanced
                } else {
                    StepOutcome::NeedsAnswer
                }
            }
            SessionAction::Answer(indices) => {
                let answers = &self.results[self.current].question.answers;
                if indices.is_empty() || indices.iter().any(|&i| i >= answers.len()) {
                    return StepOutcome::InvalidSelection;
                }
                self.results[self.current].user_answer =
                    indices.iter().map(|&i| answers[i].id.clone()).collect();
                self.current += 1;
                StepOutcome::Advanced
            }
        }
    }

    /// Freeze the session into its scored, persistable record.
    ///
    /// Works for completed and time-truncated sessions alike; slots never
    /// answered count against the score.
    pub fn finish(self, elapsed: Duration, timestamp: DateTime<Utc>) -> ExamAttempt {
        let score = self.results.iter().filter(|r| r.is_correct()).count() as u32;
        let total = self.results.len() as u32;
        let percentage = 100.0 * f64::from(score) / f64::from(total);
        let passed = self.pass_condition.is_met(score, percentage);

        ExamAttempt {
            timestamp,
            results: self.results,
            score,
            total,
            percentage,
            passed,
            pass_condition: self.pass_condition,
            elapsed_time: format_clock(elapsed),
            time_limit: self.time_limit_minutes,
        }
    }
}

/// Format a duration as MM:SS for display and attempt records.
pub fn format_clock(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Answer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn q1() -> Question {
        Question::new(
            "Which keyword declares an immutable binding?",
            vec![Answer::new("let", true), Answer::new("mut", false)],
        )
    }

    fn q2() -> Question {
        Question::new(
            "Which of these are integer types?",
            vec![
                Answer::new("u8", true),
                Answer::new("f32", false),
                Answer::new("i64", true),
                Answer::new("str", false),
            ],
        )
    }

    fn session(questions: Vec<Question>, minutes: u64, cond: &str) -> ExamSession {
        ExamSession::new(questions, minutes, cond.parse().unwrap()).unwrap()
    }

    const T0: Duration = Duration::ZERO;

    #[test]
    fn rejects_empty_question_list() {
        let err = ExamSession::new(vec![], 10, PassCondition::Count(1)).unwrap_err();
        assert!(matches!(err, SessionError::NoQuestions));
    }

    #[test]
    fn back_at_first_question_is_a_noop() {
        let mut s = session(vec![q1(), q2()], 10, "50%");
        assert_eq!(s.step(SessionAction::Back, T0), StepOutcome::NavigatedBack);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn next_requires_a_recorded_answer() {
        let mut s = session(vec![q1(), q2()], 10, "50%");
        assert_eq!(s.step(SessionAction::Next, T0), StepOutcome::NeedsAnswer);
        assert_eq!(s.current_index(), 0);

        assert_eq!(s.step(SessionAction::Answer(vec![0]), T0), StepOutcome::Advanced);
        assert_eq!(s.step(SessionAction::Back, T0), StepOutcome::NavigatedBack);
        // The answer is already recorded, so skip now re-confirms it.
        assert_eq!(s.step(SessionAction::Next, T0), StepOutcome::Advanced);
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn invalid_selection_leaves_state_untouched() {
        let mut s = session(vec![q1()], 10, "50%");
        assert_eq!(s.step(SessionAction::Answer(vec![]), T0), StepOutcome::InvalidSelection);
        assert_eq!(s.step(SessionAction::Answer(vec![5]), T0), StepOutcome::InvalidSelection);
        assert_eq!(s.current_index(), 0);
        assert!(!s.results()[0].is_answered());
    }

    #[test]
    fn refresh_clock_changes_nothing() {
        let mut s = session(vec![q1()], 10, "50%");
        assert_eq!(s.step(SessionAction::RefreshClock, T0), StepOutcome::Redisplayed);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn back_then_reanswer_overwrites() {
        let mut s = session(vec![q1(), q2()], 10, "50%");
        s.step(SessionAction::Answer(vec![1]), T0);
        s.step(SessionAction::Back, T0);
        s.step(SessionAction::Answer(vec![0]), T0);

        let expected = s.results()[0].question.answers[0].id.clone();
        assert_eq!(s.results()[0].user_answer.len(), 1);
        assert!(s.results()[0].user_answer.contains(&expected));
    }

    #[test]
    fn completes_after_last_question() {
        let mut s = session(vec![q1()], 10, "1");
        assert!(!s.is_finished());
        s.step(SessionAction::Answer(vec![0]), T0);
        assert!(s.is_complete());
        assert!(s.is_finished());
        assert!(s.current().is_none());
    }

    #[test]
    fn time_expiry_preserves_answers_and_total() {
        let mut s = session(vec![q1(), q2()], 1, "50%");
        s.step(SessionAction::Answer(vec![0]), Duration::from_secs(30));

        let outcome = s.step(SessionAction::RefreshClock, Duration::from_secs(61));
        assert_eq!(outcome, StepOutcome::TimeExpired);
        assert!(s.is_expired());
        assert!(s.is_finished());
        assert!(!s.is_complete());

        // Further actions are ignored.
        assert_eq!(
            s.step(SessionAction::Answer(vec![0]), Duration::from_secs(62)),
            StepOutcome::TimeExpired
        );

        let attempt = s.finish(Duration::from_secs(61), Utc::now());
        assert_eq!(attempt.total, 2);
        assert_eq!(attempt.score, 1);
        assert!(attempt.results[0].is_answered());
        assert!(!attempt.results[1].is_answered());
    }

    #[test]
    fn remaining_counts_down_and_saturates() {
        let s = session(vec![q1()], 2, "1");
        assert_eq!(s.remaining(Duration::from_secs(30)), Duration::from_secs(90));
        assert_eq!(s.remaining(Duration::from_secs(500)), Duration::ZERO);
    }

    #[test]
    fn scoring_scenario_half_right_passes_at_fifty_percent() {
        // Q1 (2 answers, 1 correct) answered correctly, Q2 (4 answers,
        // 2 correct) answered incorrectly, pass condition "50%".
        let mut s = session(vec![q1(), q2()], 10, "50%");
        s.step(SessionAction::Answer(vec![0]), T0);
        s.step(SessionAction::Answer(vec![1, 3]), T0);
        assert!(s.is_complete());

        let attempt = s.finish(Duration::from_secs(83), Utc::now());
        assert_eq!(attempt.score, 1);
        assert_eq!(attempt.total, 2);
        assert!((attempt.percentage - 50.0).abs() < f64::EPSILON);
        assert!(attempt.passed);
        assert_eq!(attempt.elapsed_time, "01:23");
        assert_eq!(attempt.time_limit, 10);
    }

    #[test]
    fn count_pass_condition_ignores_percentage() {
        let mut s = session(vec![q1(), q2()], 10, "2");
        s.step(SessionAction::Answer(vec![0]), T0);
        s.step(SessionAction::Answer(vec![0, 2]), T0);

        let attempt = s.finish(T0, Utc::now());
        assert_eq!(attempt.score, 2);
        assert!(attempt.passed);
    }

    #[test]
    fn retake_resets_answers_and_keeps_identity() {
        let mut s = session(vec![q1(), q2()], 15, "70%");
        s.step(SessionAction::Answer(vec![0]), T0);
        s.step(SessionAction::Answer(vec![0, 2]), T0);
        let attempt = s.finish(T0, Utc::now());

        let mut rng = StdRng::seed_from_u64(9);
        let retake = ExamSession::from_attempt(&attempt, &mut rng).unwrap();

        assert_eq!(retake.total(), 2);
        assert_eq!(retake.time_limit_minutes(), 15);
        assert_eq!(retake.pass_condition(), &attempt.pass_condition);
        for (fresh, old) in retake.results().iter().zip(&attempt.results) {
            assert_eq!(fresh.question.id, old.question.id);
            assert!(!fresh.is_answered());
        }
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_secs(61)), "01:01");
        assert_eq!(format_clock(Duration::from_secs(3600)), "60:00");
    }
}
