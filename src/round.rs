use tracing::{debug, info, warn};

/// Produces the next question for a round. Closures work out of the box.
pub trait QuestionSource<Q> {
    fn next_question(&mut self) -> Q;
}

impl<Q, F> QuestionSource<Q> for F
where
    F: FnMut() -> Q,
{
    fn next_question(&mut self) -> Q {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    AwaitingAnswer,
    /// A correct answer was given; the celebration is playing
    Resolving,
    Complete,
}

/// What `submit_answer` did with the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Not awaiting an answer, nothing changed
    Ignored,
    Correct,
    /// Round is not consumed; the presentation layer shakes
    Wrong,
}

/// What `acknowledge_resolution` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Ignored,
    NextRound(u32),
    Complete,
}

/// Fixed-length round loop shared by every quiz game.
///
/// Judging an answer (`submit_answer`) and moving on (`acknowledge_resolution`)
/// are separate calls so the celebration owns the pacing. The session never
/// advances by itself.
#[derive(Debug)]
pub struct RoundSession<Q, S> {
    total_rounds: u32,
    current_round: u32,
    score: u32,
    question: Option<Q>,
    phase: Phase,
    last_answer_was_correct: Option<bool>,
    source: S,
}

impl<Q, S: QuestionSource<Q>> RoundSession<Q, S> {
    pub fn new(total_rounds: u32, source: S) -> Self {
        if total_rounds == 0 {
            warn!("a session needs at least one round, using 1");
        }
        Self {
            total_rounds: total_rounds.max(1),
            current_round: 1,
            score: 0,
            question: None,
            phase: Phase::NotStarted,
            last_answer_was_correct: None,
            source,
        }
    }

    /// Begins (or restarts) the session from round one.
    pub fn start(&mut self) {
        if self.phase != Phase::NotStarted && self.phase != Phase::Complete {
            debug!(phase = ?self.phase, "restarting session mid-play");
        }
        self.score = 0;
        self.current_round = 1;
        self.next_question();
        self.phase = Phase::AwaitingAnswer;
        info!(total_rounds = self.total_rounds, "session started");
    }

    pub fn submit_answer(&mut self, is_correct: bool) -> AnswerOutcome {
        if self.phase != Phase::AwaitingAnswer {
            debug!(phase = ?self.phase, "answer dropped");
            return AnswerOutcome::Ignored;
        }

        self.last_answer_was_correct = Some(is_correct);
        if is_correct {
            self.score += 1;
            self.phase = Phase::Resolving;
            debug!(round = self.current_round, score = self.score, "correct answer");
            AnswerOutcome::Correct
        } else {
            debug!(round = self.current_round, "wrong answer");
            AnswerOutcome::Wrong
        }
    }

    pub fn acknowledge_resolution(&mut self) -> Advance {
        if self.phase != Phase::Resolving {
            return Advance::Ignored;
        }

        if self.current_round >= self.total_rounds {
            self.phase = Phase::Complete;
            info!(score = self.score, total_rounds = self.total_rounds, "session complete");
            return Advance::Complete;
        }

        self.current_round += 1;
        self.next_question();
        self.phase = Phase::AwaitingAnswer;
        Advance::NextRound(self.current_round)
    }

    /// Back to `NotStarted`. Score and round stay readable until the next `start`.
    pub fn reset(&mut self) {
        self.phase = Phase::NotStarted;
        self.last_answer_was_correct = None;
    }

    fn next_question(&mut self) {
        self.question = Some(self.source.next_question());
        self.last_answer_was_correct = None;
    }
}

impl<Q, S> RoundSession<Q, S> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn question(&self) -> Option<&Q> {
        self.question.as_ref()
    }

    pub fn last_answer_was_correct(&self) -> Option<bool> {
        self.last_answer_was_correct
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }
}
