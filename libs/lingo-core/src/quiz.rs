//! Multiple-choice quiz over a vocabulary list.
//!
//! State machine: `Idle -> Active(0) -> Active(1) -> ... -> Completed`.
//! Each step accepts exactly one answer; [`Quiz::advance`] moves on once it
//! has been given. `Completed` holds the summary until the next
//! [`Quiz::start`] or [`Quiz::dismiss`].

use crate::error::QuizError;
use crate::language::DEFAULT_TARGET_LANGUAGE;
use crate::matching::answers_match;
use crate::seed::default_vocabulary;
use crate::types::{Direction, VocabularyEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Questions per quiz when the caller does not choose.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// Below this many candidates the bundled default set is quizzed instead.
pub const MIN_CANDIDATES: usize = 3;

/// Which side of an entry is the expected answer. The prompt is the other side.
///
/// Forward quizzes show the translation and expect the term; reverse quizzes
/// show the term and expect the translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizField {
    pub direction: Direction,
    pub language: String,
}

impl Default for QuizField {
    fn default() -> Self {
        Self::new(Direction::Forward, DEFAULT_TARGET_LANGUAGE)
    }
}

impl QuizField {
    pub fn new(direction: Direction, language: impl Into<String>) -> Self {
        Self {
            direction,
            language: language.into(),
        }
    }

    pub fn answer(&self, entry: &VocabularyEntry) -> String {
        entry.primary_text(self.direction, &self.language).to_string()
    }

    pub fn prompt(&self, entry: &VocabularyEntry) -> String {
        entry.secondary_text(self.direction, &self.language).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizQuestion {
    pub entry_id: String,
    pub prompt: String,
    pub correct_answer: String,
    /// Absent when the quiz has a single question.
    pub distractor: Option<String>,
}

impl QuizQuestion {
    /// Options in display order: the correct answer, then the distractor.
    pub fn options(&self) -> Vec<&str> {
        std::iter::once(self.correct_answer.as_str())
            .chain(self.distractor.as_deref())
            .collect()
    }
}

/// Outcome of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// The step was already answered; the first answer stands.
    AlreadyAnswered,
}

/// Closing message band for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Perfect,
    Great,
    KeepPracticing,
}

impl Verdict {
    /// Perfect for a full score, Great from 70%, otherwise KeepPracticing.
    pub fn for_score(score: usize, total: usize) -> Self {
        if score == total {
            Self::Perfect
        } else if score * 10 >= total * 7 {
            Self::Great
        } else {
            Self::KeepPracticing
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizState {
    Idle,
    Active {
        step: usize,
        /// `Some(correct)` once the step has been answered.
        answered: Option<bool>,
    },
    Completed(QuizSummary),
}

#[derive(Debug, Clone)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
    state: QuizState,
    score: usize,
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

impl Quiz {
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            state: QuizState::Idle,
            score: 0,
        }
    }

    /// Start a new quiz, discarding any previous one.
    ///
    /// With fewer than [`MIN_CANDIDATES`] candidates the bundled default set
    /// is used. Candidates are shuffled and the first `count` become the
    /// questions. Returns the number of questions; asking for none leaves
    /// the quiz `Idle`.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        candidates: &[VocabularyEntry],
        field: &QuizField,
        count: usize,
        rng: &mut R,
    ) -> usize {
        if count == 0 {
            self.dismiss();
            return 0;
        }
        let mut pool: Vec<VocabularyEntry> = if candidates.len() < MIN_CANDIDATES {
            default_vocabulary()
        } else {
            candidates.to_vec()
        };
        pool.shuffle(rng);
        pool.truncate(count);

        let answers: Vec<String> = pool.iter().map(|e| field.answer(e)).collect();
        self.questions = pool
            .iter()
            .enumerate()
            .map(|(step, entry)| QuizQuestion {
                entry_id: entry.id.clone(),
                prompt: field.prompt(entry),
                correct_answer: answers[step].clone(),
                // First other question in the set.
                distractor: answers
                    .iter()
                    .enumerate()
                    .find(|(i, _)| *i != step)
                    .map(|(_, answer)| answer.clone()),
            })
            .collect();
        self.score = 0;
        self.state = QuizState::Active {
            step: 0,
            answered: None,
        };
        self.questions.len()
    }

    /// Answer the question at `step`. Only the first answer per step counts.
    pub fn submit_answer(&mut self, step: usize, answer: &str) -> Result<AnswerOutcome, QuizError> {
        let QuizState::Active {
            step: current,
            answered,
        } = &mut self.state
        else {
            return Err(QuizError::Inactive);
        };
        if step != *current {
            return Err(QuizError::StepMismatch {
                expected: *current,
                got: step,
            });
        }
        if answered.is_some() {
            return Ok(AnswerOutcome::AlreadyAnswered);
        }

        let correct = answers_match(answer, &self.questions[step].correct_answer);
        *answered = Some(correct);
        if correct {
            self.score += 1;
            Ok(AnswerOutcome::Correct)
        } else {
            Ok(AnswerOutcome::Incorrect)
        }
    }

    /// Move past an answered step. Returns the summary after the last step.
    pub fn advance(&mut self) -> Result<Option<QuizSummary>, QuizError> {
        let QuizState::Active { step, answered } = self.state else {
            return Err(QuizError::Inactive);
        };
        if answered.is_none() {
            return Err(QuizError::Unanswered);
        }

        if step + 1 < self.questions.len() {
            self.state = QuizState::Active {
                step: step + 1,
                answered: None,
            };
            return Ok(None);
        }

        let summary = QuizSummary {
            score: self.score,
            total: self.questions.len(),
            verdict: Verdict::for_score(self.score, self.questions.len()),
        };
        self.state = QuizState::Completed(summary);
        Ok(Some(summary))
    }

    /// Leave the quiz and return to `Idle`.
    pub fn dismiss(&mut self) {
        self.questions.clear();
        self.score = 0;
        self.state = QuizState::Idle;
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, QuizState::Active { .. })
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            QuizState::Active { step, .. } => self.questions.get(step),
            _ => None,
        }
    }
}
