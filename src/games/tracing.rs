use std::sync::Arc;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::content::{Content, TracingGlyph};
use crate::round::QuestionSource;
use crate::util::random_item;

pub fn generate<R: Rng + ?Sized>(content: &Content, rng: &mut R) -> TracingGlyph {
    random_item(&content.tracing, rng)
        .cloned()
        .unwrap_or_else(|| TracingGlyph {
            glyph: 'A',
            color: "red".to_string(),
        })
}

/// A random glyph to trace each round
pub struct TracingPrompts<R = ThreadRng> {
    content: Arc<Content>,
    rng: R,
}

impl TracingPrompts<ThreadRng> {
    pub fn new(content: Arc<Content>) -> Self {
        Self::with_rng(content, rand::thread_rng())
    }
}

impl<R: Rng> TracingPrompts<R> {
    pub fn with_rng(content: Arc<Content>, rng: R) -> Self {
        Self { content, rng }
    }
}

impl<R: Rng> QuestionSource<TracingGlyph> for TracingPrompts<R> {
    fn next_question(&mut self) -> TracingGlyph {
        generate(&self.content, &mut self.rng)
    }
}

pub fn title(glyph: &TracingGlyph) -> String {
    format!("Trace the {}!", glyph.glyph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_prompts_come_from_the_table() {
        let content = Arc::new(Content::load().unwrap());
        let mut prompts = TracingPrompts::with_rng(content.clone(), StdRng::seed_from_u64(10));
        for _ in 0..20 {
            let glyph = prompts.next_question();
            assert!(content.tracing.contains(&glyph));
        }
    }

    #[test]
    fn test_title() {
        let glyph = TracingGlyph {
            glyph: '3',
            color: "blue".into(),
        };
        assert_eq!(title(&glyph), "Trace the 3!");
    }
}
