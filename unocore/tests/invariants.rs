use std::collections::HashSet;

use proptest::prelude::*;

use unocore::{
    card::CardId,
    constants::TOTAL_CARDS_IN_DECK,
    opponent::GreedyOpponent,
    turn::{Participant, TurnActionResult},
    uno::Uno,
};

const MAX_TURNS: usize = 600;

fn card_ids(uno: &Uno) -> Vec<CardId> {
    let mut ids = Vec::with_capacity(TOTAL_CARDS_IN_DECK as usize);
    ids.extend(uno.deck().cards().iter().map(|card| card.id()));
    ids.extend(uno.hand(Participant::Player).cards().iter().map(|card| card.id()));
    ids.extend(uno.hand(Participant::Computer).cards().iter().map(|card| card.id()));
    ids.extend(uno.discard_pile().iter().map(|played| played.card().id()));
    ids.extend(uno.pending_wild().map(|card| card.id()));
    ids
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_card_stays_in_play(seed in any::<u64>()) {
        let mut uno = Uno::with_seed(seed).unwrap();
        let mut player = GreedyOpponent::new();
        let mut computer = GreedyOpponent::new();

        for _ in 0..MAX_TURNS {
            if uno.is_over() {
                break;
            }
            let strategy = match uno.current_participant() {
                Participant::Player => &mut player,
                Participant::Computer => &mut computer,
            };
            let results = uno.play_automated_turn(strategy).unwrap();
            prop_assert!(!results.is_empty());
            prop_assert!(uno.pending_wild().is_none());

            let ids = card_ids(&uno);
            prop_assert_eq!(ids.len(), TOTAL_CARDS_IN_DECK as usize);
            prop_assert_eq!(ids.into_iter().collect::<HashSet<_>>().len(), TOTAL_CARDS_IN_DECK as usize);
        }

        if let Some(winner) = uno.winner() {
            prop_assert!(uno.hand(winner).is_empty());
            prop_assert!(!uno.hand(winner.opponent()).is_empty());
        }
    }

    #[test]
    fn greedy_never_passes_over_a_legal_card(seed in any::<u64>()) {
        let mut uno = Uno::with_seed(seed).unwrap();
        let mut strategy = GreedyOpponent::new();

        for _ in 0..MAX_TURNS {
            if uno.is_over() {
                break;
            }
            let participant = uno.current_participant();
            let had_legal_card = !uno.playable_cards(participant).is_empty();
            let results = uno.play_automated_turn(&mut strategy).unwrap();
            let drew = matches!(results[0].turn_action_result, TurnActionResult::SelfDraw(_));
            prop_assert_eq!(drew, !had_legal_card);
        }
    }
}

#[test]
fn same_seed_plays_out_identically() {
    let play = |seed| {
        let mut uno = Uno::with_seed(seed).unwrap();
        let mut strategy = GreedyOpponent::new();
        let mut history = Vec::new();
        for _ in 0..MAX_TURNS {
            if uno.is_over() {
                break;
            }
            history.extend(uno.play_automated_turn(&mut strategy).unwrap());
        }
        (history, uno.winner())
    };

    assert_eq!(play(99), play(99));
}
