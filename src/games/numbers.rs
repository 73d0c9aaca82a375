use rand::Rng;

use super::{Quiz, Tile};
use crate::content::{Content, NumberWord};
use crate::util::{random_item, unique_options};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NumbersMode {
    WordToNumber,
    NumberToWord,
    DotsToNumber,
}

impl NumbersMode {
    const ALL: [NumbersMode; 3] = [
        NumbersMode::WordToNumber,
        NumbersMode::NumberToWord,
        NumbersMode::DotsToNumber,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumbersQuestion {
    pub mode: NumbersMode,
    pub target: NumberWord,
    pub options: Vec<NumberWord>,
}

pub fn generate<R: Rng + ?Sized>(content: &Content, rng: &mut R) -> NumbersQuestion {
    let mode = *random_item(&NumbersMode::ALL, rng).unwrap_or(&NumbersMode::WordToNumber);
    let target = random_item(&content.numbers, rng)
        .cloned()
        .unwrap_or_else(|| NumberWord {
            num: 1,
            word: "One".to_string(),
        });
    let options = unique_options(target.clone(), &content.numbers, 4, |a, b| a.num == b.num, rng);

    NumbersQuestion { mode, target, options }
}

impl Quiz for NumbersQuestion {
    fn title(&self) -> String {
        match self.mode {
            NumbersMode::WordToNumber => "What number is this?",
            NumbersMode::NumberToWord => "What is this number called?",
            NumbersMode::DotsToNumber => "How many dots?",
        }
        .to_string()
    }

    fn display(&self) -> Vec<Tile> {
        match self.mode {
            NumbersMode::WordToNumber => vec![Tile::plain(self.target.word.clone())],
            NumbersMode::NumberToWord => vec![Tile::plain(self.target.num.to_string())],
            NumbersMode::DotsToNumber => (0..self.target.num).map(|_| Tile::plain("●")).collect(),
        }
    }

    fn options(&self) -> Vec<Tile> {
        self.options
            .iter()
            .map(|n| match self.mode {
                NumbersMode::NumberToWord => Tile::plain(n.word.clone()),
                NumbersMode::WordToNumber | NumbersMode::DotsToNumber => Tile::plain(n.num.to_string()),
            })
            .collect()
    }

    fn is_correct(&self, choice: usize) -> bool {
        self.options
            .get(choice)
            .is_some_and(|n| n.num == self.target.num)
    }
}
