use crate::card::{Card, CardId};

#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    uno_called: bool,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            uno_called: false,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cards_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.uno_called = false;
    }

    pub fn remove_card(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }

    pub fn call_uno(&mut self) {
        self.uno_called = true;
    }

    pub fn uno_called(&self) -> bool {
        self.uno_called
    }

    pub(crate) fn replace_cards(&mut self, cards: Vec<Card>) -> Vec<Card> {
        self.uno_called = false;
        std::mem::replace(&mut self.cards, cards)
    }
}
