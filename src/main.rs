use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use tracing::info;

use tictactoe_history::{
    args::Args,
    board::parse_board,
    command::{Command, parse_moves, parse_script},
    game::GameState,
    logging,
    ui::run_ui,
    win::evaluate,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = logging::init(&args.log_dir)?;

    info!(size = args.size, headless = args.is_headless(), "starting");

    if let Some(rows) = &args.board {
        return evaluate_board(rows, args.json);
    }

    let mut game = GameState::new(args.size);

    if !args.is_headless() {
        return run_ui(game);
    }

    let mut commands: Vec<Command> = Vec::new();
    if let Some(path) = &args.script {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        commands.extend(parse_script(&text)?);
    }
    if let Some(moves) = &args.moves {
        commands.extend(parse_moves(moves)?);
    }

    for command in commands {
        if !game.apply(command) {
            eprintln!("ignored: {:?}", command);
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    } else {
        print_game(&game);
    }

    Ok(())
}

fn evaluate_board(rows: &str, json: bool) -> Result<()> {
    let (cells, size) = parse_board(rows)?;
    let win = evaluate(&cells, size);

    if json {
        println!("{}", serde_json::to_string_pretty(&win)?);
        return Ok(());
    }

    match win {
        Some(win) => println!("Winner: {} {:?}", win.winner, win.line),
        None if cells.iter().all(|c| !c.is_empty()) => println!("Draw"),
        None => println!("No winner"),
    }
    Ok(())
}

fn print_game(game: &GameState) {
    let size = game.board_size();
    for row in game.current_board().chunks(size) {
        let line: String = row.iter().map(|c| c.symbol()).collect();
        println!("{line}");
    }

    println!();
    println!("{}", game.status());
    if let Some(win) = game.winner() {
        println!("line: {:?}", win.line);
    }

    println!();
    for entry in game.move_list() {
        println!("{}", entry.description);
    }
}
