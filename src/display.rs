use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{Card, Suit};
use crate::equity::EquityResult;
use crate::hand_evaluator::HandCategory;
use crate::outs::DrawResult;

pub fn board_display(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            let rank = card.rank.to_char();
            let symbol = card.suit.symbol();
            match card.suit {
                Suit::Spades => format!("{}{}", rank, symbol).white().to_string(),
                Suit::Hearts => format!("{}{}", rank, symbol).red().to_string(),
                Suit::Diamonds => format!("{}{}", rank, symbol).blue().to_string(),
                Suit::Clubs => format!("{}{}", rank, symbol).green().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn equity_bar(equity: f64, width: usize) -> String {
    let filled = (equity * width as f64) as usize;
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(width - filled);
    let pct = format!("{:.1}%", equity * 100.0);

    if equity >= 0.6 {
        format!("{} {}", bar.green(), pct)
    } else if equity >= 0.4 {
        format!("{} {}", bar.yellow(), pct)
    } else {
        format!("{} {}", bar.red(), pct)
    }
}

pub fn equity_table(result: &EquityResult) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Outcome").set_alignment(CellAlignment::Left),
        Cell::new("Probability").set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Win".bold().to_string()),
        Cell::new(format!("{:.2}%", result.win * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Tie".bold().to_string()),
        Cell::new(format!("{:.2}%", result.tie * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Lose".bold().to_string()),
        Cell::new(format!("{:.2}%", result.lose * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Equity".bold().to_string()),
        Cell::new(format!("{:.2}%", result.equity() * 100.0)),
    ]);
    table.to_string()
}

pub fn distribution_table(entries: &[(HandCategory, f64)]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Hand").set_alignment(CellAlignment::Left),
        Cell::new("Probability").set_alignment(CellAlignment::Right),
        Cell::new("").set_alignment(CellAlignment::Left),
    ]);
    for &(category, probability) in entries {
        let filled = (probability * 20.0).round() as usize;
        let bar = "\u{2588}".repeat(filled);
        table.add_row(vec![
            Cell::new(category.to_string()),
            Cell::new(format!("{:.2}%", probability * 100.0)),
            Cell::new(bar.cyan().to_string()),
        ]);
    }
    table.to_string()
}

pub fn outs_summary(draws: &DrawResult) -> String {
    if !draws.has_draws() {
        return "No draws detected.".dimmed().to_string();
    }

    let mut lines = Vec::new();
    if let Some(fd) = &draws.flush_draw {
        lines.push(format!(
            "Flush draw {}: {} outs ({} hero card{})",
            fd.suit.symbol(),
            fd.outs,
            fd.hero_cards_in_suit,
            if fd.hero_cards_in_suit == 1 { "" } else { "s" },
        ));
    }
    for sd in &draws.straight_draws {
        lines.push(format!(
            "{} straight draw needing {}: {} outs",
            sd.kind,
            sd.target_rank.to_char(),
            sd.outs,
        ));
    }
    lines.push(format!(
        "Total outs: {}",
        draws.total_outs.to_string().bold(),
    ));
    lines.push(format!("Out cards: {}", board_display(&draws.out_cards)));
    lines.join("\n")
}

pub fn odds_table(pot: f64, call: f64, pot_odds: f64, ev: Option<f64>) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Metric").set_alignment(CellAlignment::Left),
        Cell::new("Value").set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Pot".bold().to_string()),
        Cell::new(format!("${:.0}", pot)),
    ]);
    table.add_row(vec![
        Cell::new("To Call".bold().to_string()),
        Cell::new(format!("${:.0}", call)),
    ]);
    table.add_row(vec![
        Cell::new("Pot After Call".bold().to_string()),
        Cell::new(format!("${:.0}", pot + call)),
    ]);
    table.add_row(vec![
        Cell::new("Pot Odds".bold().to_string()),
        Cell::new(format!("{:.1}%", pot_odds * 100.0)),
    ]);
    if let Some(ev_val) = ev {
        let ev_str = if ev_val >= 0.0 {
            format!("${:.2}", ev_val).green().to_string()
        } else {
            format!("${:.2}", ev_val).red().to_string()
        };
        table.add_row(vec![Cell::new("EV".bold().to_string()), Cell::new(ev_str)]);
    }
    table.to_string()
}

pub fn styled_action(action: &str) -> String {
    match action.to_uppercase().as_str() {
        "RAISE" => action.to_uppercase().red().bold().to_string(),
        "CALL" => action.to_uppercase().green().bold().to_string(),
        "FOLD" => action.to_uppercase().dimmed().bold().to_string(),
        _ => action.to_uppercase().bold().to_string(),
    }
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
