use rand::Rng;

use super::{Quiz, Tile};
use crate::content::{Content, Letter};
use crate::util::{random_item, unique_options};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetQuestion {
    pub target: Letter,
    pub options: Vec<char>,
}

pub fn generate<R: Rng + ?Sized>(content: &Content, rng: &mut R) -> AlphabetQuestion {
    let target = random_item(&content.letters, rng).cloned().unwrap_or_else(|| Letter {
        letter: 'A',
        word: "Apple".to_string(),
        color: "red".to_string(),
    });
    let pool: Vec<char> = content.letters.iter().map(|l| l.letter).collect();
    let options = unique_options(target.letter, &pool, 4, |a, b| a == b, rng);

    AlphabetQuestion { target, options }
}

impl Quiz for AlphabetQuestion {
    fn title(&self) -> String {
        format!("What letter does {} start with?", self.target.word)
    }

    /// The first letter painted, the rest of the word plain
    fn display(&self) -> Vec<Tile> {
        let mut chars = self.target.word.chars();
        let head: String = chars.next().into_iter().collect();
        let tail = chars.as_str().to_lowercase();
        vec![Tile::painted(head, &self.target.color), Tile::plain(tail)]
    }

    fn options(&self) -> Vec<Tile> {
        self.options.iter().map(|c| Tile::plain(c.to_string())).collect()
    }

    fn is_correct(&self, choice: usize) -> bool {
        self.options.get(choice) == Some(&self.target.letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::test_support::assert_well_formed;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_questions() {
        let content = Content::load().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let q = generate(&content, &mut rng);
            assert_well_formed(&q, 4);
            assert!(q.target.word.starts_with(q.target.letter));
            assert!(q.options.contains(&q.target.letter));
        }
    }

    #[test]
    fn test_title_and_display() {
        let q = AlphabetQuestion {
            target: Letter {
                letter: 'B',
                word: "Ball".into(),
                color: "blue".into(),
            },
            options: vec!['A', 'B', 'C', 'D'],
        };
        assert_eq!(q.title(), "What letter does Ball start with?");
        assert_eq!(
            q.display(),
            vec![Tile::painted("B", "blue"), Tile::plain("all")]
        );
        assert!(q.is_correct(1));
    }
}
