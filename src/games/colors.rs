use rand::Rng;

use super::{title_case, Quiz, Tile};
use crate::content::{Content, Shape};
use crate::util::{random_item, unique_options};

/// Half the questions ask for a color, half for a shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorsQuestion {
    Color {
        target: String,
        options: Vec<String>,
    },
    Shape {
        target: Shape,
        /// Paint for the shown shape, unrelated to the answer
        color: String,
        options: Vec<Shape>,
    },
}

pub fn generate<R: Rng + ?Sized>(content: &Content, rng: &mut R) -> ColorsQuestion {
    let names: Vec<String> = content.colors.iter().map(|c| c.name.clone()).collect();
    let any_color = |rng: &mut R| random_item(&names, rng).cloned().unwrap_or_else(|| "red".to_string());

    if rng.gen_bool(0.5) {
        let target = any_color(rng);
        let options = unique_options(target.clone(), &names, 4, |a, b| a == b, rng);
        ColorsQuestion::Color { target, options }
    } else {
        let target = *random_item(&content.quiz_shapes, rng).unwrap_or(&Shape::Circle);
        let options = unique_options(target, &content.quiz_shapes, 4, |a, b| a == b, rng);
        ColorsQuestion::Shape {
            target,
            color: any_color(rng),
            options,
        }
    }
}

impl Quiz for ColorsQuestion {
    fn title(&self) -> String {
        match self {
            ColorsQuestion::Color { .. } => "What color is this?",
            ColorsQuestion::Shape { .. } => "What shape is this?",
        }
        .to_string()
    }

    fn display(&self) -> Vec<Tile> {
        match self {
            ColorsQuestion::Color { target, .. } => vec![Tile::painted("██████", target)],
            ColorsQuestion::Shape { target, color, .. } => {
                vec![Tile::painted(target.glyph().to_string(), color)]
            }
        }
    }

    fn options(&self) -> Vec<Tile> {
        match self {
            ColorsQuestion::Color { options, .. } => options
                .iter()
                .map(|name| Tile::painted(title_case(name), name))
                .collect(),
            ColorsQuestion::Shape { options, .. } => options
                .iter()
                .map(|shape| Tile::plain(format!("{} {shape}", shape.glyph())))
                .collect(),
        }
    }

    fn is_correct(&self, choice: usize) -> bool {
        match self {
            ColorsQuestion::Color { target, options } => options.get(choice) == Some(target),
            ColorsQuestion::Shape { target, options, .. } => options.get(choice) == Some(target),
        }
    }
}
