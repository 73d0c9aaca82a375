use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Quiz, Tile};
use crate::content::Content;
use crate::util::{random_in_range, random_item, unique_options};

#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// How many animals may show up, inclusive
    pub fn count_range(&self) -> (u32, u32) {
        match self {
            Difficulty::Easy => (1, 3),
            Difficulty::Medium => (1, 5),
            Difficulty::Hard => (1, 10),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountingQuestion {
    pub emoji: String,
    pub count: u32,
    pub options: Vec<u32>,
}

pub fn generate<R: Rng + ?Sized>(content: &Content, difficulty: Difficulty, rng: &mut R) -> CountingQuestion {
    let (min, max) = difficulty.count_range();
    let count = random_in_range(min, max, rng);
    let emoji = random_item(&content.counting_animals, rng)
        .cloned()
        .unwrap_or_else(|| "⭐".to_string());

    let pool: Vec<u32> = (min.saturating_sub(2).max(1)..=max + 2).collect();
    let options = unique_options(count, &pool, 4, |a, b| a == b, rng);

    CountingQuestion { emoji, count, options }
}

impl Quiz for CountingQuestion {
    fn title(&self) -> String {
        format!("How many {} do you see?", self.emoji)
    }

    fn display(&self) -> Vec<Tile> {
        (0..self.count).map(|_| Tile::plain(self.emoji.clone())).collect()
    }

    fn options(&self) -> Vec<Tile> {
        self.options.iter().map(|n| Tile::plain(n.to_string())).collect()
    }

    fn is_correct(&self, choice: usize) -> bool {
        self.options.get(choice) == Some(&self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::test_support::assert_well_formed;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_counts_stay_in_difficulty_range() {
        let content = Content::load().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let (min, max) = difficulty.count_range();
            for _ in 0..50 {
                let q = generate(&content, difficulty, &mut rng);
                assert!((min..=max).contains(&q.count), "{difficulty}: {}", q.count);
                assert_eq!(q.display().len(), q.count as usize);
                assert_well_formed(&q, 4);
            }
        }
    }

    #[test]
    fn test_options_near_the_answer() {
        let content = Content::load().unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let q = generate(&content, Difficulty::Easy, &mut rng);
            assert!(q.options.iter().all(|&n| (1..=5).contains(&n)));
        }
    }

    #[test]
    fn test_title_names_the_animal() {
        let q = CountingQuestion {
            emoji: "🐶".into(),
            count: 3,
            options: vec![2, 3, 4, 5],
        };
        assert_eq!(q.title(), "How many 🐶 do you see?");
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Hard.to_string(), "hard");
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
