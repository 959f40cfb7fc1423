//! Rules engine for a two-handed game of UNO: the player against a scripted computer.

pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod opponent;
pub mod pile;
pub mod player;
pub mod rules;
pub mod turn;
pub mod uno;
pub mod view;

pub use crate::card::{Card, CardColor, CardId, CardKind, ColoredCard, PlayedCard};
pub use crate::error::{Result, UnoError};
pub use crate::opponent::{Decision, GreedyOpponent, Opponent, OpponentView};
pub use crate::turn::{Direction, Participant, TurnAction, TurnActionResult, UnoStatus};
pub use crate::uno::{PlayTurnResult, Uno};
pub use crate::view::{GameView, HandCard};
