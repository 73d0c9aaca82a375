use rand::Rng;

use super::{Quiz, Tile};
use crate::content::{ColoredShape, Content, Shape};
use crate::util::{random_item, shuffle};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Slot {
    A,
    B,
}

/// Sequence templates over a pair `(a, b)` and the slot that comes next
const TEMPLATES: [(&[Slot], Slot); 6] = [
    (&[Slot::A, Slot::B, Slot::A, Slot::B], Slot::A),
    (&[Slot::A, Slot::A, Slot::B, Slot::A, Slot::A], Slot::B),
    (&[Slot::A, Slot::B, Slot::B, Slot::A, Slot::B], Slot::B),
    (&[Slot::A, Slot::A, Slot::B, Slot::B, Slot::A, Slot::A], Slot::B),
    (&[Slot::A, Slot::B, Slot::A, Slot::B, Slot::A], Slot::B),
    (&[Slot::B, Slot::A, Slot::B, Slot::A, Slot::B], Slot::A),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternsQuestion {
    pub sequence: Vec<ColoredShape>,
    pub next: ColoredShape,
    pub options: Vec<ColoredShape>,
}

pub fn generate<R: Rng + ?Sized>(content: &Content, rng: &mut R) -> PatternsQuestion {
    let (a, b) = random_item(&content.pattern_pairs, rng)
        .cloned()
        .unwrap_or_else(|| {
            (
                ColoredShape {
                    shape: Shape::Circle,
                    color: "red".to_string(),
                },
                ColoredShape {
                    shape: Shape::Circle,
                    color: "blue".to_string(),
                },
            )
        });
    let (template, next_slot) = TEMPLATES[rng.gen_range(0..TEMPLATES.len())];
    let pick = |slot: Slot| match slot {
        Slot::A => a.clone(),
        Slot::B => b.clone(),
    };

    let sequence: Vec<ColoredShape> = template.iter().map(|&s| pick(s)).collect();
    let next = pick(next_slot);
    let other = pick(match next_slot {
        Slot::A => Slot::B,
        Slot::B => Slot::A,
    });

    let mut options = vec![next.clone(), other];
    // A decoy from some pair that a isn't part of
    let decoys: Vec<ColoredShape> = content
        .pattern_pairs
        .iter()
        .filter(|(x, y)| *x != a && *y != a)
        .flat_map(|(x, y)| [x.clone(), y.clone()])
        .filter(|item| *item != b)
        .collect();
    if let Some(decoy) = random_item(&decoys, rng) {
        options.push(decoy.clone());
    }

    PatternsQuestion {
        sequence,
        next,
        options: shuffle(&options, rng),
    }
}

fn tile(item: &ColoredShape) -> Tile {
    Tile::painted(item.shape.glyph().to_string(), &item.color)
}

impl Quiz for PatternsQuestion {
    fn title(&self) -> String {
        "What comes next?".to_string()
    }

    fn display(&self) -> Vec<Tile> {
        self.sequence
            .iter()
            .map(tile)
            .chain(std::iter::once(Tile::plain("?")))
            .collect()
    }

    fn options(&self) -> Vec<Tile> {
        self.options.iter().map(tile).collect()
    }

    fn is_correct(&self, choice: usize) -> bool {
        self.options.get(choice) == Some(&self.next)
    }
}
