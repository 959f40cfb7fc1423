use std::fmt;

use strum::IntoEnumIterator;
use unocore::{CardColor, Direction, GameView, Participant, PlayTurnResult, TurnActionResult, UnoStatus};

pub const WELCOME: &str = "UNO - your move!";

/// Draws the whole table as it should appear after `message`.
pub fn render(view: &GameView, message: &str) -> String {
    Table { view, message }.to_string()
}

struct Table<'a> {
    view: &'a GameView,
    message: &'a str,
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view;

        writeln!(f, "================== UNO ==================")?;
        writeln!(
            f,
            "Computer: {} {}  {}",
            view.computer_cards,
            cards_word(view.computer_cards),
            "[?]".repeat(view.computer_cards)
        )?;
        writeln!(
            f,
            "Draw pile: {} {}   Discard: {} ({} in pile)   Play goes {}",
            view.deck_count,
            cards_word(view.deck_count),
            view.top_card,
            view.discard_count,
            direction_word(view.direction)
        )?;

        match view.winner {
            Some(Participant::Player) => writeln!(f, "*** You won! ***")?,
            Some(Participant::Computer) => writeln!(f, "*** The computer won ***")?,
            None if view.current == Participant::Player => writeln!(f, ">>> Your turn")?,
            None => writeln!(f, "... Computer's turn")?,
        }

        if !self.message.is_empty() {
            writeln!(f, "\n  {}\n", self.message)?;
        }

        writeln!(
            f,
            "Your hand ({} {}):",
            view.hand.len(),
            cards_word(view.hand.len())
        )?;
        for (index, hand_card) in view.hand.iter().enumerate() {
            let marker = if hand_card.playable { "*" } else { " " };
            writeln!(f, "  {marker} [{index}] {}", hand_card.card)?;
        }

        if view.selecting_color {
            let options = CardColor::iter()
                .map(|color| format!("{color} ({})", color_letter(color)))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "Choose a colour: {options}")?;
        } else if view.winner.is_some() {
            writeln!(f, "'n' for a new game, 'q' to quit.")?;
        } else if view.is_player_turn() {
            if view.playable_count() > 0 {
                writeln!(f, "Cards marked * can be played. 'd' draws a card.")?;
            } else {
                writeln!(f, "Nothing fits. 'd' draws a card.")?;
            }
        }

        if view.can_call_uno {
            writeln!(f, "Two cards left - say UNO! with 'u'")?;
        }

        Ok(())
    }
}

/// The messages a result produces, in the order they should be shown.
pub fn describe(result: &PlayTurnResult) -> Vec<String> {
    let mut messages = Vec::new();
    let by_player = result.participant == Participant::Player;
    let target = if by_player { "The computer" } else { "You" };

    match result.uno {
        UnoStatus::Announced if by_player => messages.push("UNO!".to_string()),
        UnoStatus::Announced => messages.push("UNO! - the computer".to_string()),
        UnoStatus::Missed => messages.push("You forgot to say UNO!".to_string()),
        UnoStatus::Silent => {}
    }

    if result.won {
        messages.push(if by_player {
            "Congratulations! You won!".to_string()
        } else {
            "The computer won!".to_string()
        });
        return messages;
    }

    let message = match result.turn_action_result {
        TurnActionResult::Neutral => return messages,
        TurnActionResult::CardNotInHand => "You don't have that card.".to_string(),
        TurnActionResult::IllegalPlay => "You can't play that card!".to_string(),
        TurnActionResult::Skip if by_player => "The computer's turn is skipped!".to_string(),
        TurnActionResult::Skip => "Your turn is skipped!".to_string(),
        TurnActionResult::Reverse => "Direction reversed!".to_string(),
        TurnActionResult::Draw => format!("{target} drew 2 cards!"),
        TurnActionResult::SelfDraw(0) if by_player => {
            "There is nothing left to draw - now it's the computer's turn.".to_string()
        }
        TurnActionResult::SelfDraw(_) if by_player => {
            "You drew a card - now it's the computer's turn.".to_string()
        }
        TurnActionResult::SelfDraw(0) => {
            "There was nothing left for the computer to draw.".to_string()
        }
        TurnActionResult::SelfDraw(_) => "The computer drew a card.".to_string(),
        TurnActionResult::ColorSelectionRequired if by_player => "Choose a colour.".to_string(),
        TurnActionResult::ColorSelectionRequired => return messages,
        TurnActionResult::Wild(color) if by_player => format!("You chose {color}."),
        TurnActionResult::Wild(color) => format!("The computer chose {color}."),
        TurnActionResult::WildDraw(color) => format!("{target} drew 4 cards! The colour is {color}."),
        TurnActionResult::UnoSuccessful => "UNO!".to_string(),
        TurnActionResult::UnoFailed => "You can only say UNO with two cards in hand.".to_string(),
    };
    messages.push(message);
    messages
}

fn cards_word(count: usize) -> &'static str {
    if count == 1 {
        "card"
    } else {
        "cards"
    }
}

fn direction_word(direction: Direction) -> &'static str {
    match direction {
        Direction::Clockwise => "clockwise",
        Direction::CounterClockwise => "counter-clockwise",
    }
}

fn color_letter(color: CardColor) -> char {
    match color {
        CardColor::Red => 'r',
        CardColor::Blue => 'b',
        CardColor::Green => 'g',
        CardColor::Yellow => 'y',
    }
}
