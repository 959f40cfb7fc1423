use core::fmt;
use std::fmt::Display;

use crate::card::{CardColor, CardId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Participant {
    Player,
    Computer,
}

impl Participant {
    pub fn opponent(self) -> Self {
        match self {
            Participant::Player => Participant::Computer,
            Participant::Computer => Participant::Player,
        }
    }
}

impl Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Player => write!(f, "You"),
            Participant::Computer => write!(f, "Computer"),
        }
    }
}

/// Direction of play. With two participants it only changes what is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Seating order, whose turn it is and which way play goes.
#[derive(Debug, Clone)]
pub struct TurnController {
    seats: Vec<Participant>,
    current_index: usize,
    direction: Direction,
}

impl TurnController {
    pub fn new() -> Self {
        Self {
            seats: vec![Participant::Player, Participant::Computer],
            current_index: 0,
            direction: Direction::Clockwise,
        }
    }

    pub fn current(&self) -> Participant {
        self.nth(0)
    }

    pub fn next(&self) -> Participant {
        self.nth(1)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Moves the turn `n` seats along the current direction. Skipping a
    /// participant is `advance(2)`.
    pub fn advance(&mut self, n: usize) {
        self.current_index = self.seat_index(n);
    }

    /// Flips the direction; the current participant keeps the turn.
    pub fn reverse(&mut self) {
        self.direction = self.direction.flipped();
    }

    fn nth(&self, n: usize) -> Participant {
        self.seats[self.seat_index(n)]
    }

    fn seat_index(&self, n: usize) -> usize {
        let len = self.seats.len();
        let n = n % len;
        match self.direction {
            Direction::Clockwise => (self.current_index + n) % len,
            Direction::CounterClockwise => (self.current_index + len - n) % len,
        }
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Play(CardId),
    ChooseColor(CardColor),
    Draw,
    CallUno,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    Neutral,
    CardNotInHand,
    IllegalPlay,
    Skip,
    Reverse,
    /// The opponent drew two and lost a turn.
    Draw,
    /// The acting participant drew this many cards and passed.
    SelfDraw(usize),
    ColorSelectionRequired,
    Wild(CardColor),
    /// The opponent drew four and lost a turn.
    WildDraw(CardColor),
    UnoSuccessful,
    UnoFailed,
}

/// Reported whenever a play leaves a hand holding a single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnoStatus {
    Silent,
    Announced,
    Missed,
}
