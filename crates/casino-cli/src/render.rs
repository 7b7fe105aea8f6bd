use casino_core::game::{BlackjackPhase, BlackjackView, RouletteView};
use casino_core::model::Card;
use casino_ui::CardArt;
use std::fmt::Write;

const HIDDEN_CARD: &str = "??";

fn card_row(cards: &[Option<Card>]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards
        .iter()
        .map(|card| card.map_or_else(|| HIDDEN_CARD.to_string(), |card| card.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn art_row(cards: &[Option<Card>], art: &CardArt<'_>) -> String {
    cards
        .iter()
        .map(|card| art.resolve_slot(*card))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text rendering of a blackjack table. With `art`, each hand is followed by
/// the image paths the card-art manifest resolves to.
pub fn blackjack(view: &BlackjackView, art: Option<&CardArt<'_>>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Blackjack [{}]  bet {}  chips {}",
        view.phase.as_str(),
        view.bet,
        view.balance
    );
    if view.phase == BlackjackPhase::Idle || view.phase == BlackjackPhase::Betting {
        let _ = write!(out, "  Place a bet with 'bj bet N', then 'bj deal'.");
        return out;
    }

    let dealer_total = view
        .dealer_total
        .map_or_else(|| "showing".to_string(), |total| total.to_string());
    let player: Vec<Option<Card>> = view.player_cards.iter().copied().map(Some).collect();
    let _ = writeln!(out, "  Dealer: {}  ({dealer_total})", card_row(&view.dealer_cards));
    if let Some(art) = art {
        let _ = writeln!(out, "    art: {}", art_row(&view.dealer_cards, art));
    }
    let _ = writeln!(out, "  You:    {}  ({})", card_row(&player), view.player_total);
    if let Some(art) = art {
        let _ = writeln!(out, "    art: {}", art_row(&player, art));
    }

    match (&view.outcome, &view.message) {
        (Some(outcome), Some(message)) => {
            let _ = write!(out, "  {message} ({:+})", outcome.net());
            if outcome.restocked {
                let _ = write!(out, "\n  Out of chips: the house restocks you.");
            }
        }
        _ => {
            let _ = write!(out, "  'bj hit' or 'bj stand'?");
        }
    }
    out
}

pub fn roulette(view: &RouletteView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Roulette [{}]  amount {}  chips {}",
        view.phase, view.selected_amount, view.balance
    );

    if view.bets.is_empty() {
        let _ = write!(out, "  No bets on the table.");
    } else {
        let bets = view
            .bets
            .iter()
            .map(|bet| format!("{} {}", bet.bet, bet.amount))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(out, "  Bets: {bets}  (total {})", view.total_staked);
    }

    if let (Some(result), Some(message)) = (&view.last_result, &view.message) {
        let _ = write!(
            out,
            "\n  Ball lands on {} {}. {message}",
            result.number, result.color
        );
        if result.restocked {
            let _ = write!(out, "\n  Out of chips: the house restocks you.");
        }
    }
    out
}

pub fn chips(balance: u64) -> String {
    format!("Chips: {balance}")
}
