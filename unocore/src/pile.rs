use crate::card::{Card, PlayedCard};

/// Played cards, oldest first. Never empty: the last entry is the top card.
#[derive(Debug, Clone)]
pub struct DiscardPile(Vec<PlayedCard>);

impl DiscardPile {
    pub fn new(first: PlayedCard) -> Self {
        Self(vec![first])
    }

    pub fn push(&mut self, card: PlayedCard) {
        self.0.push(card);
    }

    pub fn top(&self) -> &PlayedCard {
        self.0
            .last()
            .expect("The discard pile always keeps its top card.")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayedCard> {
        self.0.iter()
    }

    /// Removes everything under the top card, stripping chosen wild colours.
    pub(crate) fn take_recyclable(&mut self) -> Vec<Card> {
        let top_index = self.0.len() - 1;
        self.0
            .drain(..top_index)
            .map(PlayedCard::into_card)
            .collect()
    }
}
