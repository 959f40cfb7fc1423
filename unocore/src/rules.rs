//! Legality of a play and the effect each card has on the turn order.

use crate::card::{Card, CardKind, ColoredCard, PlayedCard};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEffect {
    None,
    /// The next participant loses a turn.
    Skip,
    /// Flips the direction of play.
    Reverse,
    /// The next participant draws two and loses a turn.
    DrawTwo,
    /// The player chooses the colour to match next.
    Wild,
    /// Colour choice, then the next participant draws four and loses a turn.
    WildDrawFour,
}

/// A card may go on `top` when it is black, shares the top's effective colour,
/// or shows the same value.
pub fn can_play(card: &Card, top: &PlayedCard) -> bool {
    if card.is_wild() {
        return true;
    }
    if card.color() == Some(top.color()) {
        return true;
    }
    card.same_value(top.card())
}

pub fn effect_of(card: &Card) -> CardEffect {
    match card.kind() {
        CardKind::Colored(_, ColoredCard::Number(_)) => CardEffect::None,
        CardKind::Colored(_, ColoredCard::Skip) => CardEffect::Skip,
        CardKind::Colored(_, ColoredCard::Reverse) => CardEffect::Reverse,
        CardKind::Colored(_, ColoredCard::Draw) => CardEffect::DrawTwo,
        CardKind::Wild => CardEffect::Wild,
        CardKind::WildDraw => CardEffect::WildDrawFour,
    }
}
