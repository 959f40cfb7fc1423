use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, CardId, CardKind, ColoredCard},
    constants::*,
};

/// The draw pile. Index 0 is the top of the pile.
#[derive(Debug, Clone)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// Builds the 108 cards in canonical order, ids assigned in that order.
    pub fn new() -> Self {
        let mut kinds = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in CardColor::iter() {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                kinds.push(CardKind::Colored(color, ColoredCard::Number(*number)));
            }

            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                kinds.push(CardKind::Colored(color, ColoredCard::Skip));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                kinds.push(CardKind::Colored(color, ColoredCard::Reverse));
            }

            // Draw Cards
            for _ in 0..DRAW_CARDS_PER_COLOR {
                kinds.push(CardKind::Colored(color, ColoredCard::Draw));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            kinds.push(CardKind::Wild);
        }

        for _ in 0..WILD_DRAW_CARDS_IN_DECK {
            kinds.push(CardKind::WildDraw);
        }

        let cards = kinds
            .into_iter()
            .enumerate()
            .map(|(id, kind)| Card::new(CardId(id as u8), kind))
            .collect();

        Self(cards)
    }

    pub(crate) fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    /// Takes up to `count` cards from the top.
    pub(crate) fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.0.len());
        self.0.drain(0..count).collect::<Vec<_>>()
    }

    /// Takes the bottom card to open the discard pile. Wild, wild +4 and +2 cards
    /// are put back on top until an acceptable one comes up.
    pub(crate) fn draw_starting_card(&mut self) -> Option<Card> {
        for _ in 0..self.0.len() {
            let card = self.0.pop()?;
            if Self::can_start_pile(&card) {
                return Some(card);
            }
            self.0.insert(0, card);
        }
        None
    }

    /// Shuffles recycled cards and slides them under whatever is still in the deck.
    pub(crate) fn replenish<R: Rng + ?Sized>(&mut self, mut cards: Vec<Card>, rng: &mut R) {
        cards.shuffle(rng);
        self.0.extend(cards);
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    fn can_start_pile(card: &Card) -> bool {
        !matches!(
            card.kind(),
            CardKind::Wild | CardKind::WildDraw | CardKind::Colored(_, ColoredCard::Draw)
        )
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
