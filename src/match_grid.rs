use derive_more::{Display, Error};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Card<P> {
    pub id: usize,
    pub pattern: P,
    pub face_up: bool,
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    Ignored,
    Revealed,
    /// Second card is up; the caller waits a moment and then calls `resolve`
    PairPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Ignored,
    Match,
    Mismatch,
}

/// Rejected card layout
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum DeckError {
    #[display("a deck needs an even number of cards, got {_0}")]
    OddCardCount(#[error(not(source))] usize),
    #[display("card {_0} does not have exactly one partner")]
    Unpaired(#[error(not(source))] usize),
}

/// Pairs-matching memory game: reveal two cards, then resolve them.
#[derive(Debug, Clone)]
pub struct MatchGrid<P> {
    cards: Vec<Card<P>>,
    revealed: Vec<usize>,
    matches_found: u32,
    moves: u32,
    eq: fn(&P, &P) -> bool,
}

impl<P: Clone> MatchGrid<P> {
    /// Duplicates every pattern into a pair and shuffles the deck.
    ///
    /// Patterns equal under `eq` to an earlier one are dropped, so each pattern
    /// is dealt exactly twice.
    pub fn deal<R: Rng + ?Sized>(patterns: &[P], eq: fn(&P, &P) -> bool, rng: &mut R) -> Self {
        let mut distinct: Vec<P> = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            if !distinct.iter().any(|seen| eq(seen, pattern)) {
                distinct.push(pattern.clone());
            }
        }
        if distinct.len() < patterns.len() {
            warn!(
                given = patterns.len(),
                dealt = distinct.len(),
                "duplicate card patterns dropped"
            );
        }

        let mut layout: Vec<P> = distinct.iter().chain(distinct.iter()).cloned().collect();
        layout.shuffle(rng);
        Self::build(layout, eq)
    }
}

impl<P> MatchGrid<P> {
    /// Uses the given layout as-is, card ids follow the order given.
    pub fn from_layout(layout: Vec<P>, eq: fn(&P, &P) -> bool) -> Result<Self, DeckError> {
        if layout.len() % 2 != 0 {
            return Err(DeckError::OddCardCount(layout.len()));
        }
        for (i, pattern) in layout.iter().enumerate() {
            let partners = layout
                .iter()
                .enumerate()
                .filter(|&(j, other)| j != i && eq(pattern, other))
                .count();
            if partners != 1 {
                return Err(DeckError::Unpaired(i));
            }
        }
        Ok(Self::build(layout, eq))
    }

    fn build(layout: Vec<P>, eq: fn(&P, &P) -> bool) -> Self {
        let cards = layout
            .into_iter()
            .enumerate()
            .map(|(id, pattern)| Card {
                id,
                pattern,
                face_up: false,
                matched: false,
            })
            .collect();
        Self {
            cards,
            revealed: Vec::with_capacity(2),
            matches_found: 0,
            moves: 0,
            eq,
        }
    }

    pub fn flip(&mut self, card_id: usize) -> FlipOutcome {
        if self.revealed.len() >= 2 {
            return FlipOutcome::Ignored;
        }
        let Some(card) = self.cards.iter_mut().find(|c| c.id == card_id) else {
            return FlipOutcome::Ignored;
        };
        if card.face_up || card.matched {
            return FlipOutcome::Ignored;
        }

        card.face_up = true;
        self.revealed.push(card_id);

        if self.revealed.len() == 2 {
            self.moves += 1;
            debug!(moves = self.moves, "pair revealed");
            FlipOutcome::PairPending
        } else {
            FlipOutcome::Revealed
        }
    }

    /// Whether the two revealed cards match, `None` unless a pair is pending
    pub fn pending_is_match(&self) -> Option<bool> {
        match self.revealed.as_slice() {
            &[a, b] => Some(self.patterns_equal(a, b)),
            _ => None,
        }
    }

    pub fn resolve(&mut self) -> Resolution {
        let (first, second) = match self.revealed.as_slice() {
            &[a, b] => (a, b),
            _ => return Resolution::Ignored,
        };

        let is_match = self.patterns_equal(first, second);
        for card in self
            .cards
            .iter_mut()
            .filter(|c| c.id == first || c.id == second)
        {
            if is_match {
                card.matched = true;
            } else {
                card.face_up = false;
            }
        }
        self.revealed.clear();

        if is_match {
            self.matches_found += 1;
            debug!(matches_found = self.matches_found, "pair matched");
            Resolution::Match
        } else {
            Resolution::Mismatch
        }
    }

    fn patterns_equal(&self, a: usize, b: usize) -> bool {
        match (self.card(a), self.card(b)) {
            (Some(x), Some(y)) => (self.eq)(&x.pattern, &y.pattern),
            _ => false,
        }
    }

    pub fn card(&self, id: usize) -> Option<&Card<P>> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn cards(&self) -> &[Card<P>] {
        &self.cards
    }

    pub fn revealed(&self) -> &[usize] {
        &self.revealed
    }

    pub fn matches_found(&self) -> u32 {
        self.matches_found
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn pairs(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn is_complete(&self) -> bool {
        self.matches_found as usize == self.pairs()
    }
}

impl<P: PartialEq> MatchGrid<P> {
    pub fn with_partial_eq(layout: Vec<P>) -> Result<Self, DeckError> {
        Self::from_layout(layout, |a, b| a == b)
    }
}
