use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::advisor::get_advice;
use crate::cards::parse_board;
use crate::display::{
    board_display, distribution_table, equity_bar, equity_table, odds_table, outs_summary,
    print_error, styled_action,
};
use crate::distribution::hand_distribution;
use crate::equity::equity_vs_random;
use crate::error::HoldemResult;
use crate::math_engine::{pot_odds, should_call};
use crate::outs::detect_draws;

#[derive(Parser)]
#[command(
    name = "holdem",
    version = "1.0.0",
    about = "Texas Hold'em toolkit: equity, hand distribution, outs, odds, and advice."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hero equity vs a random opponent hand
    Equity {
        /// Your hole cards (e.g., AhKs)
        hand: String,
        /// Board cards (e.g., Qs7h2d)
        #[arg(short, long)]
        board: Option<String>,
        /// Sampling iterations for flop/preflop (defaults: 30000 flop, 10000 preflop)
        #[arg(short = 'n', long)]
        iterations: Option<usize>,
        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Probability of ending with each hand category
    Dist {
        /// Your hole cards (e.g., AhKs)
        hand: String,
        /// Board cards (e.g., Qs7h2d)
        #[arg(short, long)]
        board: Option<String>,
        /// Sampling iterations for flop/preflop (default 10000)
        #[arg(short = 'n', long)]
        iterations: Option<usize>,
        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Flush/straight draws and deduplicated out count
    Outs {
        /// Your hole cards (e.g., 9h8d)
        hand: String,
        /// Board cards, 3 or 4 of them (e.g., 7c6s2h)
        #[arg(short, long)]
        board: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Pot odds and, with --equity, the EV of calling
    Odds {
        /// Current pot size
        pot: f64,
        /// Amount to call
        call: f64,
        /// Your equity (0-1)
        #[arg(short, long)]
        equity: Option<f64>,
        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Rule-based action advice for a spot
    Advise {
        /// Your hole cards (e.g., AhKs)
        hand: String,
        /// Board cards (e.g., Qs7h2d)
        #[arg(short, long)]
        board: Option<String>,
        /// Current pot size
        #[arg(long)]
        pot: Option<f64>,
        /// Amount to call
        #[arg(long)]
        call: Option<f64>,
        /// Sampling iterations for flop/preflop equity
        #[arg(short = 'n', long)]
        iterations: Option<usize>,
        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run() {
    let cli = Cli::parse();
    if let Err(e) = dispatch(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> HoldemResult<()> {
    match cli.command {
        Commands::Equity {
            hand,
            board,
            iterations,
            seed,
            json,
        } => cmd_equity(&hand, board.as_deref(), iterations, seed, json),
        Commands::Dist {
            hand,
            board,
            iterations,
            seed,
            json,
        } => cmd_dist(&hand, board.as_deref(), iterations, seed, json),
        Commands::Outs { hand, board, json } => cmd_outs(&hand, &board, json),
        Commands::Odds {
            pot,
            call,
            equity,
            json,
        } => cmd_odds(pot, call, equity, json),
        Commands::Advise {
            hand,
            board,
            pot,
            call,
            iterations,
            seed,
            json,
        } => cmd_advise(&hand, board.as_deref(), pot, call, iterations, seed, json),
    }
}

fn parse_optional_board(board: Option<&str>) -> HoldemResult<Vec<crate::cards::Card>> {
    match board {
        Some(b) => parse_board(b),
        None => Ok(Vec::new()),
    }
}

fn cmd_equity(
    hand: &str,
    board: Option<&str>,
    iterations: Option<usize>,
    seed: Option<u64>,
    json: bool,
) -> HoldemResult<()> {
    let hero = parse_board(hand)?;
    let board = parse_optional_board(board)?;
    let result = equity_vs_random(&hero, &board, iterations, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Hand:  {}", board_display(&hero));
    if !board.is_empty() {
        println!("Board: {}", board_display(&board));
    }
    println!("{}", equity_table(&result));
    println!("{}", equity_bar(result.equity(), 30));
    Ok(())
}

fn cmd_dist(
    hand: &str,
    board: Option<&str>,
    iterations: Option<usize>,
    seed: Option<u64>,
    json: bool,
) -> HoldemResult<()> {
    let hero = parse_board(hand)?;
    let board = parse_optional_board(board)?;
    let entries = hand_distribution(&hero, &board, iterations, seed)?;

    if json {
        let mut map = serde_json::Map::new();
        for &(category, probability) in &entries {
            map.insert(
                category.wire_name().to_string(),
                serde_json::Value::from(probability),
            );
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::Value::Object(map))?
        );
        return Ok(());
    }

    println!("Hand:  {}", board_display(&hero));
    if !board.is_empty() {
        println!("Board: {}", board_display(&board));
    }
    println!("{}", distribution_table(&entries));
    Ok(())
}

fn cmd_outs(hand: &str, board: &str, json: bool) -> HoldemResult<()> {
    let hero = parse_board(hand)?;
    let board = parse_board(board)?;
    let draws = detect_draws(&hero, &board)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&draws)?);
        return Ok(());
    }

    println!("Hand:  {}", board_display(&hero));
    println!("Board: {}", board_display(&board));
    println!("{}", outs_summary(&draws));
    Ok(())
}

fn cmd_odds(pot: f64, call: f64, equity: Option<f64>, json: bool) -> HoldemResult<()> {
    match equity {
        Some(eq) => {
            let analysis = should_call(pot, call, eq)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
                return Ok(());
            }
            println!("{}", odds_table(pot, call, analysis.pot_odds, Some(analysis.ev)));
            let verdict = if analysis.profitable {
                "Calling is +EV".green().bold().to_string()
            } else {
                "Calling is -EV".red().bold().to_string()
            };
            println!("{} (edge {:+.1}%)", verdict, analysis.edge * 100.0);
        }
        None => {
            let po = pot_odds(pot, call)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({ "pot_odds": po }))?
                );
                return Ok(());
            }
            println!("{}", odds_table(pot, call, po, None));
        }
    }
    Ok(())
}

fn cmd_advise(
    hand: &str,
    board: Option<&str>,
    pot: Option<f64>,
    call: Option<f64>,
    iterations: Option<usize>,
    seed: Option<u64>,
    json: bool,
) -> HoldemResult<()> {
    let hero = parse_board(hand)?;
    let board = parse_optional_board(board)?;
    let advice = get_advice(&hero, &board, pot, call, iterations, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
        return Ok(());
    }

    println!("Hand:  {}", board_display(&hero));
    if !board.is_empty() {
        println!("Board: {}", board_display(&board));
    }
    println!(
        "\n{} ({})",
        styled_action(advice.action.as_str()),
        advice.confidence,
    );
    if let Some(sizing) = advice.bet_sizing {
        println!("Suggested sizing: {:.0}% of pot", sizing * 100.0);
    }
    println!();
    for line in &advice.rationale {
        println!("  \u{2022} {}", line);
    }
    Ok(())
}
