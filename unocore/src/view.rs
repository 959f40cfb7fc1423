use crate::card::{Card, PlayedCard};
use crate::turn::{Direction, Participant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandCard {
    pub card: Card,
    pub playable: bool,
}

/// Snapshot of everything the player is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub hand: Vec<HandCard>,
    pub computer_cards: usize,
    pub deck_count: usize,
    pub discard_count: usize,
    pub top_card: PlayedCard,
    pub current: Participant,
    pub direction: Direction,
    /// Set while the player has to name a colour for a wild card.
    pub selecting_color: bool,
    pub can_call_uno: bool,
    pub winner: Option<Participant>,
}

impl GameView {
    pub fn is_player_turn(&self) -> bool {
        self.winner.is_none() && self.current == Participant::Player
    }

    pub fn playable_count(&self) -> usize {
        self.hand.iter().filter(|card| card.playable).count()
    }
}
