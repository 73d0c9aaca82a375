//! The individual games and their question producers.
//!
//! Every multiple-choice game contributes one variant to [`Question`]. The round
//! loop only ever sees the enum as an opaque payload; the app asks it for text to
//! show and whether a picked option is right.

pub mod alphabet;
pub mod animals;
pub mod colors;
pub mod counting;
pub mod matching;
pub mod numbers;
pub mod patterns;
pub mod sorting;
pub mod tracing;

use std::sync::Arc;

use clap::ValueEnum;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::content::Content;
use crate::round::QuestionSource;

pub use counting::Difficulty;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum GameKind {
    Counting,
    Alphabet,
    Colors,
    Matching,
    Sorting,
    Patterns,
    Animals,
    Numbers,
    Tracing,
}

impl GameKind {
    pub const ALL: [GameKind; 9] = [
        GameKind::Counting,
        GameKind::Alphabet,
        GameKind::Colors,
        GameKind::Matching,
        GameKind::Sorting,
        GameKind::Patterns,
        GameKind::Animals,
        GameKind::Numbers,
        GameKind::Tracing,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            GameKind::Counting => "Counting Game",
            GameKind::Alphabet => "Alphabet Game",
            GameKind::Colors => "Colors & Shapes",
            GameKind::Matching => "Memory Match",
            GameKind::Sorting => "Sorting Game",
            GameKind::Patterns => "Patterns",
            GameKind::Animals => "Animal Sounds",
            GameKind::Numbers => "Numbers",
            GameKind::Tracing => "Tracing",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            GameKind::Counting => "Count the animals!",
            GameKind::Alphabet => "Match letters to words!",
            GameKind::Colors => "Learn colors and shapes!",
            GameKind::Matching => "Find the matching pairs!",
            GameKind::Sorting => "Which is bigger or smaller?",
            GameKind::Patterns => "What comes next?",
            GameKind::Animals => "Who makes that sound?",
            GameKind::Numbers => "Numbers, words and dots!",
            GameKind::Tracing => "Draw letters and numbers!",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GameKind::Counting => "🔢",
            GameKind::Alphabet => "🔤",
            GameKind::Colors => "🎨",
            GameKind::Matching => "🃏",
            GameKind::Sorting => "📏",
            GameKind::Patterns => "🧩",
            GameKind::Animals => "🔊",
            GameKind::Numbers => "💯",
            GameKind::Tracing => "✏️",
        }
    }

    /// The multiple-choice flavour of this game, if it is one
    pub fn quiz(&self) -> Option<QuizGame> {
        match self {
            GameKind::Counting => Some(QuizGame::Counting),
            GameKind::Alphabet => Some(QuizGame::Alphabet),
            GameKind::Colors => Some(QuizGame::Colors),
            GameKind::Sorting => Some(QuizGame::Sorting),
            GameKind::Patterns => Some(QuizGame::Patterns),
            GameKind::Animals => Some(QuizGame::Animals),
            GameKind::Numbers => Some(QuizGame::Numbers),
            GameKind::Matching | GameKind::Tracing => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QuizGame {
    Counting,
    Alphabet,
    Colors,
    Sorting,
    Patterns,
    Animals,
    Numbers,
}

/// A bit of text to show, optionally painted in a palette color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub text: String,
    pub color: Option<String>,
}

impl Tile {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn painted(text: impl Into<String>, color: &str) -> Self {
        Self {
            text: text.into(),
            color: Some(color.to_string()),
        }
    }
}

/// What the screen needs from a multiple-choice question
pub trait Quiz {
    /// The question asked, e.g. "How many 🐶 do you see?"
    fn title(&self) -> String;
    /// The thing being asked about, shown large
    fn display(&self) -> Vec<Tile>;
    fn options(&self) -> Vec<Tile>;
    fn is_correct(&self, choice: usize) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Question {
    Counting(counting::CountingQuestion),
    Alphabet(alphabet::AlphabetQuestion),
    Colors(colors::ColorsQuestion),
    Sorting(sorting::SortingQuestion),
    Patterns(patterns::PatternsQuestion),
    Animals(animals::AnimalsQuestion),
    Numbers(numbers::NumbersQuestion),
}

impl Question {
    pub fn as_quiz(&self) -> &dyn Quiz {
        match self {
            Question::Counting(q) => q,
            Question::Alphabet(q) => q,
            Question::Colors(q) => q,
            Question::Sorting(q) => q,
            Question::Patterns(q) => q,
            Question::Animals(q) => q,
            Question::Numbers(q) => q,
        }
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        self.as_quiz().is_correct(choice)
    }

    pub fn option_count(&self) -> usize {
        self.as_quiz().options().len()
    }
}

/// Builds a question for one of the quiz games
pub fn generate<R: Rng + ?Sized>(
    game: QuizGame,
    content: &Content,
    difficulty: Difficulty,
    rng: &mut R,
) -> Question {
    match game {
        QuizGame::Counting => Question::Counting(counting::generate(content, difficulty, rng)),
        QuizGame::Alphabet => Question::Alphabet(alphabet::generate(content, rng)),
        QuizGame::Colors => Question::Colors(colors::generate(content, rng)),
        QuizGame::Sorting => Question::Sorting(sorting::generate(content, rng)),
        QuizGame::Patterns => Question::Patterns(patterns::generate(content, rng)),
        QuizGame::Animals => Question::Animals(animals::generate(content, rng)),
        QuizGame::Numbers => Question::Numbers(numbers::generate(content, rng)),
    }
}

/// Question source handed to a round session
pub struct QuizQuestions<R = ThreadRng> {
    game: QuizGame,
    content: Arc<Content>,
    difficulty: Difficulty,
    rng: R,
}

impl QuizQuestions<ThreadRng> {
    pub fn new(game: QuizGame, content: Arc<Content>, difficulty: Difficulty) -> Self {
        Self::with_rng(game, content, difficulty, rand::thread_rng())
    }
}

impl<R: Rng> QuizQuestions<R> {
    pub fn with_rng(game: QuizGame, content: Arc<Content>, difficulty: Difficulty, rng: R) -> Self {
        Self {
            game,
            content,
            difficulty,
            rng,
        }
    }
}

impl<R: Rng> QuestionSource<Question> for QuizQuestions<R> {
    fn next_question(&mut self) -> Question {
        generate(self.game, &self.content, self.difficulty, &mut self.rng)
    }
}

/// Capitalizes the first letter, "red" -> "Red"
pub(crate) fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
