use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// The four suit colours. Wild cards are black and have no `CardColor` until played.
///
/// Declaration order matters: it is the iteration order used when the computer
/// breaks ties between equally represented colours.
#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    #[strum(to_string = "Red", serialize = "r")]
    Red,
    #[strum(to_string = "Blue", serialize = "b")]
    Blue,
    #[strum(to_string = "Green", serialize = "g")]
    Green,
    #[strum(to_string = "Yellow", serialize = "y")]
    Yellow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    Draw,
}

impl Display for ColoredCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColoredCard::Number(number) => write!(f, "{number}"),
            ColoredCard::Skip => write!(f, "Skip"),
            ColoredCard::Reverse => write!(f, "Reverse"),
            ColoredCard::Draw => write!(f, "+2"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardKind {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDraw,
}

/// Identifies one physical card of the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u8);

impl Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    id: CardId,
    kind: CardKind,
}

impl Card {
    pub fn new(id: CardId, kind: CardKind) -> Self {
        Self { id, kind }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// `None` for the black cards.
    pub fn color(&self) -> Option<CardColor> {
        match self.kind {
            CardKind::Colored(color, _) => Some(color),
            CardKind::Wild | CardKind::WildDraw => None,
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self.kind, CardKind::Wild | CardKind::WildDraw)
    }

    /// Whether both cards show the same face value, ignoring colour.
    pub fn same_value(&self, other: &Card) -> bool {
        match (self.kind, other.kind) {
            (CardKind::Colored(_, value), CardKind::Colored(_, other_value)) => {
                value == other_value
            }
            (CardKind::Wild, CardKind::Wild) | (CardKind::WildDraw, CardKind::WildDraw) => true,
            _ => false,
        }
    }

    /// `wild_color` is only used for black cards, coloured cards keep their own colour.
    pub fn into_played_card(self, wild_color: CardColor) -> PlayedCard {
        let color = self.color().unwrap_or(wild_color);
        PlayedCard { card: self, color }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CardKind::Colored(color, card) => write!(f, "{color} {card}"),
            CardKind::Wild => write!(f, "Wild"),
            CardKind::WildDraw => write!(f, "Wild +4"),
        }
    }
}

/// A card lying on the discard pile together with the colour it imposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayedCard {
    card: Card,
    color: CardColor,
}

impl PlayedCard {
    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn color(&self) -> CardColor {
        self.color
    }

    pub fn into_card(self) -> Card {
        self.card
    }
}

impl Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.card.is_wild() {
            write!(f, "{} ({})", self.card, self.color)
        } else {
            write!(f, "{}", self.card)
        }
    }
}
