use rand::Rng;
use tracing::warn;

use crate::content::{ColoredShape, Content};
use crate::match_grid::MatchGrid;
use crate::util::shuffle;

pub type MatchingDeck = MatchGrid<ColoredShape>;

/// Cards pair up when both shape and color agree
pub fn same_pattern(a: &ColoredShape, b: &ColoredShape) -> bool {
    a.shape == b.shape && a.color == b.color
}

/// Picks `pairs` distinct patterns and deals each twice
pub fn deal<R: Rng + ?Sized>(content: &Content, pairs: usize, rng: &mut R) -> MatchingDeck {
    if pairs > content.cards.len() {
        warn!(requested = pairs, available = content.cards.len(), "not enough card patterns");
    }
    let chosen: Vec<ColoredShape> = shuffle(&content.cards, rng).into_iter().take(pairs).collect();
    MatchGrid::deal(&chosen, same_pattern, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_grid::{FlipOutcome, Resolution};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_deal_sizes() {
        let content = Content::load().unwrap();
        let mut rng = StdRng::seed_from_u64(12);
        let deck = deal(&content, 6, &mut rng);
        assert_eq!(deck.cards().len(), 12);
        assert_eq!(deck.pairs(), 6);

        for card in deck.cards() {
            let partners = deck
                .cards()
                .iter()
                .filter(|c| c.id != card.id && same_pattern(&c.pattern, &card.pattern))
                .count();
            assert_eq!(partners, 1);
        }
    }

    #[test]
    fn test_deal_is_capped_by_content() {
        let content = Content::load().unwrap();
        let mut rng = StdRng::seed_from_u64(13);
        let deck = deal(&content, 50, &mut rng);
        assert_eq!(deck.cards().len(), content.cards.len() * 2);
    }

    #[test]
    fn test_solving_a_dealt_deck() {
        let content = Content::load().unwrap();
        let mut rng = StdRng::seed_from_u64(14);
        let mut deck = deal(&content, 3, &mut rng);

        while !deck.is_complete() {
            let first = deck.cards().iter().find(|c| !c.matched).unwrap().clone();
            let partner = deck
                .cards()
                .iter()
                .find(|c| c.id != first.id && same_pattern(&c.pattern, &first.pattern))
                .unwrap()
                .id;
            assert_eq!(deck.flip(first.id), FlipOutcome::Revealed);
            assert_eq!(deck.flip(partner), FlipOutcome::PairPending);
            assert_eq!(deck.resolve(), Resolution::Match);
        }
        assert_eq!(deck.moves(), 3);
        assert_eq!(deck.matches_found(), 3);
    }
}
