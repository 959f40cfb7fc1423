use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::card::{Card, CardColor, CardId, PlayedCard};
use crate::constants::{
    DRAW_TWO_PENALTY, STARTING_HAND_SIZE, UNO_CALL_HAND_SIZE, WILD_DRAW_PENALTY,
};
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::opponent::{Decision, Opponent, OpponentView};
use crate::pile::DiscardPile;
use crate::player::Hand;
use crate::rules::{self, CardEffect};
use crate::turn::{Direction, Participant, TurnAction, TurnActionResult, TurnController, UnoStatus};
use crate::view::{GameView, HandCard};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PlayTurnResult {
    pub participant: Participant,
    pub turn_action_result: TurnActionResult,
    pub won: bool,
    pub uno: UnoStatus,
}

impl PlayTurnResult {
    fn new(participant: Participant, turn_action_result: TurnActionResult) -> Self {
        Self {
            participant,
            turn_action_result,
            won: false,
            uno: UnoStatus::Silent,
        }
    }
}

/// One game between the player and the computer.
#[derive(Debug)]
pub struct Uno {
    rng: ChaCha8Rng,
    deck: Deck,
    discard: DiscardPile,
    player: Hand,
    computer: Hand,
    turns: TurnController,
    pending_wild: Option<Card>,
    winner: Option<Participant>,
}

impl Uno {
    pub fn new() -> Result<Self> {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    /// The same seed always deals and draws the same cards.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: ChaCha8Rng) -> Result<Self> {
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let player = Hand::new(deck.draw_cards(STARTING_HAND_SIZE));
        let computer = Hand::new(deck.draw_cards(STARTING_HAND_SIZE));

        let Some(first) = deck.draw_starting_card() else {
            return Err(UnoError::NoStartingCard);
        };
        let Some(color) = first.color() else {
            return Err(UnoError::NoStartingCard);
        };
        let discard = DiscardPile::new(first.into_played_card(color));

        info!(starting_card = %first, "dealt a new game");

        Ok(Uno {
            rng,
            deck,
            discard,
            player,
            computer,
            turns: TurnController::new(),
            pending_wild: None,
            winner: None,
        })
    }

    /// Throws away the current game and deals a fresh one.
    pub fn new_game(&mut self) -> Result<()> {
        // The stream has moved on since the last deal, so the new game differs.
        *self = Self::from_rng(self.rng.clone())?;
        Ok(())
    }

    /// Performs `turn_action` for the participant whose turn it is.
    ///
    /// Moves that are not allowed (a card that is not held or does not fit the
    /// discard pile) are reported in the result and leave the turn untouched.
    /// On a winning play the result names the card's effect, which is not applied.
    pub fn play_turn(&mut self, turn_action: TurnAction) -> Result<PlayTurnResult> {
        if self.winner.is_some() {
            return Err(UnoError::GameOver);
        }

        let participant = self.turns.current();

        if let Some(wild) = self.pending_wild {
            return match turn_action {
                TurnAction::ChooseColor(color) => Ok(self.resolve_wild(participant, wild, color)),
                _ => Err(UnoError::ColorSelectionPending),
            };
        }

        let turn_action_result = match turn_action {
            TurnAction::Play(card_id) => return Ok(self.play_card(participant, card_id)),
            TurnAction::ChooseColor(_) => return Err(UnoError::NoColorSelectionPending),
            TurnAction::Draw => {
                let drawn = self.draw_cards_to_participant(participant, 1);
                self.turns.advance(1);
                debug!(?participant, drawn, "drew instead of playing");
                TurnActionResult::SelfDraw(drawn)
            }
            TurnAction::CallUno => {
                let hand = self.hand_mut(participant);
                if hand.cards_count() == UNO_CALL_HAND_SIZE {
                    hand.call_uno();
                    debug!(?participant, "called uno");
                    TurnActionResult::UnoSuccessful
                } else {
                    TurnActionResult::UnoFailed
                }
            }
        };

        Ok(PlayTurnResult::new(participant, turn_action_result))
    }

    /// Lets `strategy` take the whole turn of the current participant: the play
    /// and, for a wild card, the colour choice.
    pub fn play_automated_turn(
        &mut self,
        strategy: &mut dyn Opponent,
    ) -> Result<Vec<PlayTurnResult>> {
        if self.winner.is_some() {
            return Err(UnoError::GameOver);
        }
        if self.pending_wild.is_some() {
            return Err(UnoError::ColorSelectionPending);
        }

        let participant = self.turns.current();
        let decision = strategy.decide(&OpponentView {
            hand: self.hand(participant).cards(),
            top: self.discard.top(),
        });

        let mut results = Vec::with_capacity(2);
        match decision {
            Decision::Play { card, color } => {
                let played = self.play_turn(TurnAction::Play(card))?;
                match played.turn_action_result {
                    TurnActionResult::CardNotInHand | TurnActionResult::IllegalPlay => {
                        warn!(?participant, card = %card, "strategy chose an unplayable card, drawing instead");
                        results.push(self.play_turn(TurnAction::Draw)?);
                    }
                    TurnActionResult::ColorSelectionRequired => {
                        results.push(played);
                        let color = color.unwrap_or_else(|| self.discard.top().color());
                        results.push(self.play_turn(TurnAction::ChooseColor(color))?);
                    }
                    _ => results.push(played),
                }
            }
            Decision::Draw => results.push(self.play_turn(TurnAction::Draw)?),
        }

        Ok(results)
    }

    pub fn current_participant(&self) -> Participant {
        self.turns.current()
    }

    pub fn next_participant(&self) -> Participant {
        self.turns.next()
    }

    pub fn direction(&self) -> Direction {
        self.turns.direction()
    }

    pub fn top_card(&self) -> &PlayedCard {
        self.discard.top()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard
    }

    pub fn deck_count(&self) -> usize {
        self.deck.cards_count()
    }

    pub fn discard_count(&self) -> usize {
        self.discard.len()
    }

    pub fn hand(&self, participant: Participant) -> &Hand {
        match participant {
            Participant::Player => &self.player,
            Participant::Computer => &self.computer,
        }
    }

    /// Swaps the cards of `participant` for `cards`, returning the old ones.
    /// Lets tests set up a position; the swapped cards are not tracked by the deck.
    #[doc(hidden)]
    pub fn rig_hand(&mut self, participant: Participant, cards: Vec<Card>) -> Vec<Card> {
        self.hand_mut(participant).replace_cards(cards)
    }

    fn hand_mut(&mut self, participant: Participant) -> &mut Hand {
        match participant {
            Participant::Player => &mut self.player,
            Participant::Computer => &mut self.computer,
        }
    }

    /// The wild card waiting for its colour, if any.
    pub fn pending_wild(&self) -> Option<&Card> {
        self.pending_wild.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Participant> {
        self.winner
    }

    pub fn playable_cards(&self, participant: Participant) -> Vec<CardId> {
        let top = self.discard.top();
        self.hand(participant)
            .cards()
            .iter()
            .filter(|card| rules::can_play(card, top))
            .map(Card::id)
            .collect()
    }

    pub fn view(&self) -> GameView {
        let top = self.discard.top();
        let player_turn = !self.is_over() && self.turns.current() == Participant::Player;
        let player_to_move = player_turn && self.pending_wild.is_none();
        let hand = self
            .player
            .cards()
            .iter()
            .map(|card| HandCard {
                card: *card,
                playable: player_to_move && rules::can_play(card, top),
            })
            .collect();

        GameView {
            hand,
            computer_cards: self.computer.cards_count(),
            deck_count: self.deck.cards_count(),
            discard_count: self.discard.len(),
            top_card: *top,
            current: self.turns.current(),
            direction: self.turns.direction(),
            selecting_color: player_turn && self.pending_wild.is_some(),
            can_call_uno: player_to_move
                && self.player.cards_count() == UNO_CALL_HAND_SIZE
                && !self.player.uno_called(),
            winner: self.winner,
        }
    }

    fn play_card(&mut self, participant: Participant, card_id: CardId) -> PlayTurnResult {
        let hand = self.hand(participant);
        let Some(hand_card_index) = hand.position(card_id) else {
            return PlayTurnResult::new(participant, TurnActionResult::CardNotInHand);
        };
        if !rules::can_play(&hand.cards()[hand_card_index], self.discard.top()) {
            return PlayTurnResult::new(participant, TurnActionResult::IllegalPlay);
        }

        let hand = self.hand_mut(participant);
        let uno = if hand.cards_count() == UNO_CALL_HAND_SIZE {
            match participant {
                Participant::Computer => UnoStatus::Announced,
                Participant::Player if hand.uno_called() => UnoStatus::Announced,
                Participant::Player => UnoStatus::Missed,
            }
        } else {
            UnoStatus::Silent
        };
        let card = hand.remove_card(hand_card_index);
        let emptied = hand.is_empty();

        debug!(?participant, card = %card, "played card");

        let effect = rules::effect_of(&card);
        let top_color = self.discard.top().color();

        if emptied {
            self.discard.push(card.into_played_card(top_color));
            self.winner = Some(participant);
            info!(winner = ?participant, "game over");
            return PlayTurnResult {
                participant,
                turn_action_result: Self::nominal_result(effect, top_color),
                won: true,
                uno,
            };
        }

        let turn_action_result = match effect {
            CardEffect::Wild | CardEffect::WildDrawFour => {
                self.pending_wild = Some(card);
                TurnActionResult::ColorSelectionRequired
            }
            CardEffect::None => {
                self.discard.push(card.into_played_card(top_color));
                self.turns.advance(1);
                TurnActionResult::Neutral
            }
            CardEffect::Skip => {
                self.discard.push(card.into_played_card(top_color));
                self.turns.advance(2);
                TurnActionResult::Skip
            }
            CardEffect::Reverse => {
                self.discard.push(card.into_played_card(top_color));
                self.turns.reverse();
                self.turns.advance(1);
                TurnActionResult::Reverse
            }
            CardEffect::DrawTwo => {
                self.discard.push(card.into_played_card(top_color));
                self.draw_cards_to_participant(self.turns.next(), DRAW_TWO_PENALTY);
                self.turns.advance(2);
                TurnActionResult::Draw
            }
        };

        PlayTurnResult {
            participant,
            turn_action_result,
            won: false,
            uno,
        }
    }

    fn resolve_wild(
        &mut self,
        participant: Participant,
        wild: Card,
        color: CardColor,
    ) -> PlayTurnResult {
        self.pending_wild = None;
        self.discard.push(wild.into_played_card(color));
        debug!(?participant, %color, "chose colour");

        let turn_action_result = match rules::effect_of(&wild) {
            CardEffect::WildDrawFour => {
                self.draw_cards_to_participant(self.turns.next(), WILD_DRAW_PENALTY);
                self.turns.advance(2);
                TurnActionResult::WildDraw(color)
            }
            _ => {
                self.turns.advance(1);
                TurnActionResult::Wild(color)
            }
        };

        PlayTurnResult::new(participant, turn_action_result)
    }

    fn nominal_result(effect: CardEffect, color: CardColor) -> TurnActionResult {
        match effect {
            CardEffect::None => TurnActionResult::Neutral,
            CardEffect::Skip => TurnActionResult::Skip,
            CardEffect::Reverse => TurnActionResult::Reverse,
            CardEffect::DrawTwo => TurnActionResult::Draw,
            CardEffect::Wild => TurnActionResult::Wild(color),
            CardEffect::WildDrawFour => TurnActionResult::WildDraw(color),
        }
    }

    /// Returns how many cards were actually handed out.
    fn draw_cards_to_participant(&mut self, participant: Participant, count: usize) -> usize {
        if self.deck.cards_count() < count {
            let recycled = self.discard.take_recyclable();
            debug!(recycled = recycled.len(), "reshuffling discard pile into the deck");
            self.deck.replenish(recycled, &mut self.rng);
        }

        let cards = self.deck.draw_cards(count);
        if cards.len() < count {
            warn!(
                ?participant,
                wanted = count,
                got = cards.len(),
                "deck and discard pile are exhausted"
            );
        }

        let drawn = cards.len();
        let hand = self.hand_mut(participant);
        for card in cards {
            hand.add_card(card);
        }
        drawn
    }
}
