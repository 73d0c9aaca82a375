//! Static game content: letters, animals, colors, shapes and friends.
//!
//! The tables are JSON files compiled into the binary and parsed once at startup.
//! Question producers read from them but never change them.

use include_dir::{include_dir, Dir};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;

static TABLES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/content/tables");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Diamond,
    Star,
    Heart,
}

impl Shape {
    pub fn glyph(&self) -> char {
        match self {
            Shape::Circle => '●',
            Shape::Square => '■',
            Shape::Triangle => '▲',
            Shape::Diamond => '◆',
            Shape::Star => '★',
            Shape::Heart => '♥',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedColor {
    pub name: String,
    pub hex: String,
}

impl NamedColor {
    /// `#rrggbb` as an rgb triple
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

/// A shape painted in one of the palette colors, compared by value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ColoredShape {
    pub shape: Shape,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Letter {
    pub letter: char,
    pub word: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnimalSound {
    pub emoji: String,
    pub name: String,
    pub sound: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sortable {
    pub name: String,
    pub emoji: String,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NumberWord {
    pub num: u32,
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TracingGlyph {
    pub glyph: char,
    pub color: String,
}

#[derive(Deserialize)]
struct ColorsTable {
    colors: Vec<NamedColor>,
    shapes: Vec<Shape>,
}

#[derive(Deserialize)]
struct AnimalsTable {
    counting: Vec<String>,
    sounds: Vec<AnimalSound>,
    sortables: Vec<Sortable>,
}

#[derive(Deserialize)]
struct ShapesTable {
    tracing: Vec<TracingGlyph>,
    pattern_pairs: Vec<(ColoredShape, ColoredShape)>,
    cards: Vec<ColoredShape>,
}

#[derive(Debug, Clone)]
pub struct Content {
    pub colors: Vec<NamedColor>,
    pub quiz_shapes: Vec<Shape>,
    pub letters: Vec<Letter>,
    pub counting_animals: Vec<String>,
    pub animal_sounds: Vec<AnimalSound>,
    pub sortables: Vec<Sortable>,
    pub numbers: Vec<NumberWord>,
    pub tracing: Vec<TracingGlyph>,
    pub pattern_pairs: Vec<(ColoredShape, ColoredShape)>,
    pub cards: Vec<ColoredShape>,
}

impl Content {
    /// Parses the embedded tables
    pub fn load() -> Result<Self, QuizError> {
        let colors: ColorsTable = read_table("colors.json")?;
        let animals: AnimalsTable = read_table("animals.json")?;
        let shapes: ShapesTable = read_table("shapes.json")?;

        Ok(Self {
            colors: colors.colors,
            quiz_shapes: colors.shapes,
            letters: read_table("alphabet.json")?,
            counting_animals: animals.counting,
            animal_sounds: animals.sounds,
            sortables: animals.sortables,
            numbers: read_table("numbers.json")?,
            tracing: shapes.tracing,
            pattern_pairs: shapes.pattern_pairs,
            cards: shapes.cards,
        })
    }

    pub fn color(&self, name: &str) -> Option<&NamedColor> {
        self.colors.iter().find(|c| c.name == name)
    }
}

fn read_table<T: DeserializeOwned>(file_name: &'static str) -> Result<T, QuizError> {
    let file = TABLES_DIR
        .get_file(file_name)
        .ok_or(QuizError::MissingContent(file_name))?;
    serde_json::from_slice(file.contents()).map_err(|source| QuizError::Content {
        table: file_name,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_loads() {
        let content = Content::load().unwrap();

        assert_eq!(content.letters.len(), 26);
        assert_eq!(content.colors.len(), 7);
        assert_eq!(content.numbers.len(), 10);
        assert_eq!(content.tracing.len(), 10);
        assert_eq!(content.cards.len(), 12);
        assert!(content.animal_sounds.len() >= 4);
        assert!(!content.counting_animals.is_empty());
    }

    #[test]
    fn test_color_references_resolve() {
        let content = Content::load().unwrap();

        let referenced = content
            .letters
            .iter()
            .map(|l| l.color.as_str())
            .chain(content.tracing.iter().map(|t| t.color.as_str()))
            .chain(content.cards.iter().map(|c| c.color.as_str()))
            .chain(
                content
                    .pattern_pairs
                    .iter()
                    .flat_map(|(a, b)| [a.color.as_str(), b.color.as_str()]),
            );

        for name in referenced {
            assert!(content.color(name).is_some(), "unknown color {name}");
        }
    }

    #[test]
    fn test_cards_are_distinct() {
        let content = Content::load().unwrap();
        let unique: std::collections::HashSet<_> = content.cards.iter().collect();
        assert_eq!(unique.len(), content.cards.len());
    }

    #[test]
    fn test_named_color_rgb() {
        let red = NamedColor {
            name: "red".into(),
            hex: "#ef476f".into(),
        };
        assert_eq!(red.rgb(), Some((0xef, 0x47, 0x6f)));

        let bad = NamedColor {
            name: "bad".into(),
            hex: "ef476f".into(),
        };
        assert_eq!(bad.rgb(), None);
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(Shape::Triangle.to_string(), "Triangle");
        assert_eq!(Shape::Heart.glyph(), '♥');
    }
}
