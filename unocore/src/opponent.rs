use strum::IntoEnumIterator;

use crate::card::{Card, CardColor, CardId, PlayedCard};
use crate::rules;

/// What a strategy gets to see when it is its turn.
#[derive(Debug, Clone, Copy)]
pub struct OpponentView<'a> {
    pub hand: &'a [Card],
    pub top: &'a PlayedCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// `color` is the colour to name when `card` is a wild card.
    Play {
        card: CardId,
        color: Option<CardColor>,
    },
    Draw,
}

/// Interface for computer-controlled participants.
pub trait Opponent {
    fn decide(&mut self, view: &OpponentView<'_>) -> Decision;
}

/// Plays the first legal card in hand order, otherwise draws.
///
/// For a wild card it names the colour it holds most of. Ties go to the colour
/// that comes later in `Red, Blue, Green, Yellow`, so a hand without coloured
/// cards names Yellow.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyOpponent;

impl GreedyOpponent {
    pub fn new() -> Self {
        Self
    }

    pub fn most_held_color(hand: &[Card]) -> CardColor {
        // max_by_key keeps the last of equal maxima.
        CardColor::iter()
            .max_by_key(|color| {
                hand.iter()
                    .filter(|card| card.color() == Some(*color))
                    .count()
            })
            .unwrap_or(CardColor::Yellow)
    }
}

impl Opponent for GreedyOpponent {
    fn decide(&mut self, view: &OpponentView<'_>) -> Decision {
        let Some(card) = view.hand.iter().find(|card| rules::can_play(card, view.top)) else {
            return Decision::Draw;
        };

        let color = card.is_wild().then(|| Self::most_held_color(view.hand));

        Decision::Play {
            card: card.id(),
            color,
        }
    }
}
