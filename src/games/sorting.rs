use rand::Rng;

use super::{Quiz, Tile};
use crate::content::{Content, Sortable};
use crate::util::shuffle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingQuestion {
    pub items: [Sortable; 2],
    pub ask_bigger: bool,
}

impl SortingQuestion {
    /// Index of the item that answers the question
    pub fn answer(&self) -> usize {
        let first_bigger = self.items[0].size > self.items[1].size;
        if first_bigger == self.ask_bigger {
            0
        } else {
            1
        }
    }
}

/// Two items of different sizes; the table always has more than one size
pub fn generate<R: Rng + ?Sized>(content: &Content, rng: &mut R) -> SortingQuestion {
    let shuffled = shuffle(&content.sortables, rng);
    let fallback = || Sortable {
        name: "Mouse".to_string(),
        emoji: "🐭".to_string(),
        size: 1,
    };
    let first = shuffled.first().cloned().unwrap_or_else(fallback);
    let second = shuffled
        .iter()
        .find(|s| s.size != first.size)
        .cloned()
        .unwrap_or_else(|| Sortable {
            name: "Elephant".to_string(),
            emoji: "🐘".to_string(),
            size: first.size + 1,
        });

    SortingQuestion {
        items: [first, second],
        ask_bigger: rng.gen_bool(0.5),
    }
}

impl Quiz for SortingQuestion {
    fn title(&self) -> String {
        let word = if self.ask_bigger { "BIGGER" } else { "SMALLER" };
        format!("Which is {word}?")
    }

    fn display(&self) -> Vec<Tile> {
        vec![
            Tile::plain(self.items[0].emoji.clone()),
            Tile::plain("vs"),
            Tile::plain(self.items[1].emoji.clone()),
        ]
    }

    fn options(&self) -> Vec<Tile> {
        self.items
            .iter()
            .map(|s| Tile::plain(format!("{} {}", s.emoji, s.name)))
            .collect()
    }

    fn is_correct(&self, choice: usize) -> bool {
        choice == self.answer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::test_support::assert_well_formed;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn item(name: &str, size: u32) -> Sortable {
        Sortable {
            name: name.into(),
            emoji: "?".into(),
            size,
        }
    }

    #[test]
    fn test_generated_questions() {
        let content = Content::load().unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..50 {
            let q = generate(&content, &mut rng);
            assert_ne!(q.items[0].size, q.items[1].size);
            assert_well_formed(&q, 2);
        }
    }

    #[test]
    fn test_answer_follows_the_ask() {
        let mut q = SortingQuestion {
            items: [item("Mouse", 1), item("Whale", 10)],
            ask_bigger: true,
        };
        assert_eq!(q.title(), "Which is BIGGER?");
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));

        q.ask_bigger = false;
        assert_eq!(q.title(), "Which is SMALLER?");
        assert!(q.is_correct(0));
    }
}
