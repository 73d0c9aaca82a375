use rand::Rng;

use super::{Quiz, Tile};
use crate::content::{AnimalSound, Content};
use crate::util::{random_item, unique_options};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalsQuestion {
    pub target: AnimalSound,
    pub options: Vec<AnimalSound>,
}

pub fn generate<R: Rng + ?Sized>(content: &Content, rng: &mut R) -> AnimalsQuestion {
    let target = random_item(&content.animal_sounds, rng)
        .cloned()
        .unwrap_or_else(|| AnimalSound {
            emoji: "🐶".to_string(),
            name: "Dog".to_string(),
            sound: "Woof!".to_string(),
        });
    let options = unique_options(
        target.clone(),
        &content.animal_sounds,
        4,
        |a, b| a.name == b.name,
        rng,
    );

    AnimalsQuestion { target, options }
}

impl Quiz for AnimalsQuestion {
    fn title(&self) -> String {
        "Who makes this sound?".to_string()
    }

    fn display(&self) -> Vec<Tile> {
        vec![Tile::plain("🔊"), Tile::plain(format!("\"{}\"", self.target.sound))]
    }

    fn options(&self) -> Vec<Tile> {
        self.options
            .iter()
            .map(|a| Tile::plain(format!("{} {}", a.emoji, a.name)))
            .collect()
    }

    fn is_correct(&self, choice: usize) -> bool {
        self.options
            .get(choice)
            .is_some_and(|a| a.name == self.target.name)
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
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let q = generate(&content, &mut rng);
            assert_well_formed(&q, 4);
            assert!(q.display()[1].text.contains(&q.target.sound));
        }
    }
}
