use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use color_eyre::{eyre::WrapErr, Result};
use tracing::{debug, info};
use unocore::{GreedyOpponent, Participant, TurnAction, TurnActionResult, Uno, UnoError};

use crate::command::{Command, HELP};
use crate::render::{self, WELCOME};

/// Drives one interactive sitting: any number of games until the player quits
/// or input runs out.
pub struct Session<R, W> {
    game: Uno,
    opponent: GreedyOpponent,
    input: R,
    output: W,
    computer_delay: Duration,
    message: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Uno, input: R, output: W, computer_delay: Duration) -> Self {
        Self {
            game,
            opponent: GreedyOpponent::new(),
            input,
            output,
            computer_delay,
            message: WELCOME.to_string(),
        }
    }

    pub fn into_game(self) -> Uno {
        self.game
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.draw_table()?;

            if !self.game.is_over() && self.game.current_participant() == Participant::Computer {
                self.computer_turn()?;
                continue;
            }

            write!(self.output, "> ").wrap_err("failed to write prompt")?;
            self.output.flush().wrap_err("failed to flush stdout")?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .wrap_err("failed to read input")?;
            if read == 0 {
                debug!("input closed");
                return Ok(());
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => {
                    writeln!(self.output, "Bye!").wrap_err("failed to write output")?;
                    return Ok(());
                }
                Ok(command) => self.handle(command)?,
                Err(error) => self.message = error.to_string(),
            }
        }
    }

    fn draw_table(&mut self) -> Result<()> {
        let table = render::render(&self.game.view(), &self.message);
        writeln!(self.output, "\n{table}").wrap_err("failed to draw the table")?;
        Ok(())
    }

    fn computer_turn(&mut self) -> Result<()> {
        thread::sleep(self.computer_delay);
        let results = self.game.play_automated_turn(&mut self.opponent)?;

        let mut messages = Vec::with_capacity(results.len() + 1);
        let played = results
            .iter()
            .any(|result| !matches!(result.turn_action_result, TurnActionResult::SelfDraw(_)));
        if played {
            messages.push(format!("The computer played {}.", self.game.top_card()));
        }
        messages.extend(results.iter().flat_map(render::describe));
        self.message = messages.join(" ");
        Ok(())
    }

    fn handle(&mut self, command: Command) -> Result<()> {
        let action = match command {
            Command::Help => {
                self.message = HELP.to_string();
                return Ok(());
            }
            Command::NewGame => {
                self.game.new_game()?;
                info!("player started a new game");
                self.message = WELCOME.to_string();
                return Ok(());
            }
            Command::Quit => return Ok(()),
            Command::Play(index) => {
                let view = self.game.view();
                let Some(hand_card) = view.hand.get(index) else {
                    self.message = format!("There is no card number {index}.");
                    return Ok(());
                };
                TurnAction::Play(hand_card.card.id())
            }
            Command::Draw => TurnAction::Draw,
            Command::Uno => TurnAction::CallUno,
            Command::Color(color) => TurnAction::ChooseColor(color),
        };

        self.message = match self.game.play_turn(action) {
            Ok(result) => render::describe(&result).join(" "),
            Err(UnoError::GameOver) => "The game is over. 'n' starts a new one.".to_string(),
            Err(UnoError::ColorSelectionPending) => {
                "Choose a colour for your wild card first (r/b/g/y).".to_string()
            }
            Err(UnoError::NoColorSelectionPending) => {
                "There is no wild card waiting for a colour.".to_string()
            }
            Err(error) => return Err(error.into()),
        };
        Ok(())
    }
}
