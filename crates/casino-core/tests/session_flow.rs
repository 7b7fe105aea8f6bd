use casino_core::GameError;
use casino_core::game::{BlackjackPhase, Casino, RoundProgress};
use casino_core::model::DECK_SIZE;
use casino_core::roulette::{BetDescriptor, RoulettePhase, SpinProgress};

fn play_blackjack_hand(casino: &mut Casino, bet: u64) -> i128 {
    let before = i128::from(casino.balance());
    casino.blackjack_bet(bet).unwrap();
    let outcome = match casino.blackjack_deal().unwrap() {
        RoundProgress::Settled(outcome) => outcome,
        RoundProgress::PlayerTurn => loop {
            if casino.blackjack().player_hand().total() >= 17 {
                break casino.blackjack_stand().unwrap();
            }
            if let RoundProgress::Settled(outcome) = casino.blackjack_hit().unwrap() {
                break outcome;
            }
        },
    };
    assert_eq!(casino.blackjack().phase(), BlackjackPhase::Settled);
    if outcome.restocked {
        return 0;
    }
    assert_eq!(i128::from(casino.balance()) - before, outcome.net());
    outcome.net()
}

#[test]
fn blackjack_balance_tracks_every_settlement() {
    for seed in 0..25u64 {
        let mut casino = Casino::with_seed(seed);
        for _ in 0..10 {
            let bet = casino.balance().min(50);
            play_blackjack_hand(&mut casino, bet);
            let dealt = casino.blackjack().player_hand().len() + casino.blackjack().dealer_hand().len();
            assert_eq!(casino.blackjack().deck().remaining(), DECK_SIZE - dealt);
            casino.blackjack_new_round();
        }
    }
}

#[test]
fn settled_round_accepts_next_bet_directly() {
    let mut casino = Casino::with_seed(77);
    play_blackjack_hand(&mut casino, 10);
    casino.blackjack_bet(20).unwrap();
    assert_eq!(casino.blackjack().phase(), BlackjackPhase::Betting);
    assert_eq!(casino.blackjack().deck().remaining(), DECK_SIZE);
    assert!(casino.blackjack().player_hand().is_empty());
}

#[test]
fn roulette_spin_driven_by_steps() {
    let mut casino = Casino::with_seed(2024);
    casino.roulette_select_amount(10).unwrap();
    for label in ["red", "odd", "1-18", "number_0"] {
        casino.roulette_bet(label.parse().unwrap(), None).unwrap();
    }
    assert_eq!(casino.balance(), 960);
    casino.roulette_spin().unwrap();

    let result = loop {
        match casino.roulette_step().unwrap() {
            SpinProgress::Spinning { .. } => {
                assert_eq!(
                    casino.roulette_bet(BetDescriptor::Number(1), Some(1)),
                    Err(GameError::SpinInProgress)
                );
            }
            SpinProgress::Finished(result) => break result,
        }
    };
    assert_eq!(casino.balance(), 960 + result.winnings);
    assert!(matches!(casino.roulette().phase(), RoulettePhase::Result(_)));
    assert_eq!(casino.roulette_step(), Err(GameError::NotSpinning));

    let view = casino.roulette_view();
    assert_eq!(view.last_result, Some(result));
    assert!(view.to_json().unwrap().contains("\"phase\":\"result\""));
}
