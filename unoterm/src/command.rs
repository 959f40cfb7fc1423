use std::str::FromStr;

use thiserror::Error;
use unocore::CardColor;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(usize),
    Draw,
    Uno,
    Color(CardColor),
    NewGame,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Type something first. 'h' shows the commands.")]
    Empty,
    #[error("Unknown command `{0}`. 'h' shows the commands.")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        if let Ok(index) = input.parse::<usize>() {
            return Ok(Command::Play(index));
        }

        let command = match input.to_ascii_lowercase().as_str() {
            "d" | "draw" => Command::Draw,
            "u" | "uno" => Command::Uno,
            "n" | "new" => Command::NewGame,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => CardColor::from_str(other)
                .map(Command::Color)
                .map_err(|_| CommandError::Unknown(input.to_string()))?,
        };

        Ok(command)
    }
}

pub const HELP: &str = "\
Commands:
  <number>   play the card with that number
  d          draw a card (ends your turn)
  u          call UNO when you are down to two cards
  r/b/g/y    name the colour after playing a wild card
  n          start a new game
  h          show this help
  q          quit";
