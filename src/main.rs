use anyhow::{Context, Result};
use clap::Parser;
use indicatif::*;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_engine::*;

mod display;

/// Play Connect 4 against a game tree search
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect 4 against a game tree search")]
struct Cli {
    /// Search algorithm: minimax or negascout
    #[arg(long, default_value = "minimax")]
    algorithm: String,

    /// Difficulty: easy, medium or expert
    #[arg(long, default_value = "medium")]
    difficulty: String,

    /// Search depth in plies, overriding the difficulty
    #[arg(long)]
    depth: Option<usize>,

    /// Moves to play before the game starts, as 1-indexed columns (e.g. 4453)
    #[arg(long, default_value = "")]
    moves: String,

    /// Whether the engine plays player 1 (asked when omitted)
    #[arg(long, action = clap::ArgAction::Set)]
    player_one_ai: Option<bool>,

    /// Whether the engine plays player 2 (asked when omitted)
    #[arg(long, action = clap::ArgAction::Set)]
    player_two_ai: Option<bool>,

    /// Show the engine's suggestion before each human move
    #[arg(long)]
    hint: bool,

    /// Play this many minimax vs negascout games and report the results
    #[arg(long)]
    self_play: Option<usize>,

    /// Search the candidate columns of each move in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = SearchConfig::from_labels(&cli.algorithm, &cli.difficulty)
        .context("invalid engine configuration")?
        .with_parallel(cli.parallel);
    if let Some(depth) = cli.depth {
        config = config.with_depth(depth)?;
    }

    if let Some(games) = cli.self_play {
        return self_play(config, games, &cli.moves);
    }

    let mut game = Game::from_moves(&cli.moves)
        .with_context(|| format!("failed to replay initial moves '{}'", cli.moves))?;
    let agent = Agent::new(config);
    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    println!(
        "Engine: {} searching {} plies\n",
        agent.config().algorithm,
        agent.config().depth()
    );

    let ai_players = (
        match cli.player_one_ai {
            Some(ai) => ai,
            None => ask(&stdin, "Is player 1 AI controlled? y/n: ")?,
        },
        match cli.player_two_ai {
            Some(ai) => ai,
            None => ask(&stdin, "Is player 2 AI controlled? y/n: ")?,
        },
    );

    // game loop
    loop {
        display::draw(&game).context("Failed to draw board!")?;

        match game.status() {
            GameStatus::InProgress => {
                let player = game.current_player();
                let ai_turn = match player {
                    Player::PlayerOne => ai_players.0,
                    Player::PlayerTwo => ai_players.1,
                };

                let next_move = if ai_turn {
                    println!("AI is thinking...");
                    stdout().flush()?;

                    // slow down play if both players are AI
                    if ai_players == (true, true) {
                        std::thread::sleep(std::time::Duration::new(1, 0));
                    }

                    match agent.best_move_as(game.board(), player) {
                        Some(outcome) => {
                            println!(
                                "Best move: {} (score {}, {} positions searched)",
                                outcome.column + 1,
                                outcome.score,
                                outcome.node_count
                            );
                            outcome.column as i64 + 1
                        }
                        None => {
                            println!("No move available");
                            break;
                        }
                    }

                // human player
                } else {
                    if cli.hint {
                        if let Some(column) = agent.choose_column_as(game.board(), player) {
                            println!("Hint: column {}", column + 1);
                        }
                    }
                    print!("{} move input > ", player);
                    stdout().flush()?;
                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    match input_str.trim().parse::<i64>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                        Ok(column) => column,
                    }
                };

                match game.play(next_move - 1) {
                    Err(EngineError::ColumnOutOfRange(_)) => {
                        println!(
                            "Invalid move, column {} out of range. Columns must be between 1 and {}",
                            next_move, WIDTH
                        );
                    }
                    Err(EngineError::ColumnFull(_)) => {
                        println!("Invalid move, column {} full", next_move);
                    }
                    Err(err) => println!("{}", err),
                    Ok(_) => {}
                }
            }

            // end states
            GameStatus::Won(win) => {
                println!("{} wins!", win.player);
                break;
            }
            GameStatus::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}

/// Asks a yes/no question until a recognisable answer is given
fn ask(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{}", question);
        stdout().flush()?;
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// Plays the two algorithms against each other
///
/// The engines swap sides every game, and each pair of games opens with a
/// different first column so the deterministic searches don't repeat a game.
fn self_play(config: SearchConfig, games: usize, moves: &str) -> Result<()> {
    let minimax = Agent::new(config.with_algorithm(Algorithm::Minimax));
    let negascout = Agent::new(config.with_algorithm(Algorithm::Negascout));

    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Self-play: {bar:40.cyan/blue} {pos}/{len} {msg}")
            .progress_chars("█▓▒░  "),
    );

    // minimax wins, negascout wins, draws
    let mut tally = (0, 0, 0);
    for i in 0..games {
        let mut game = Game::from_moves(moves)
            .with_context(|| format!("failed to replay initial moves '{}'", moves))?;
        let opening = ((i / 2) % WIDTH) as i64;
        if !game.status().is_finished() && game.board().is_legal_move(opening as usize) {
            game.play(opening)?;
        }
        let minimax_side = if i % 2 == 0 {
            game.current_player()
        } else {
            game.current_player().other()
        };

        while !game.status().is_finished() {
            let player = game.current_player();
            let agent = if player == minimax_side {
                &minimax
            } else {
                &negascout
            };
            let column = agent
                .choose_column_as(game.board(), player)
                .context("engine found no move in an unfinished game")?;
            game.play(column as i64)?;
        }

        match game.winner() {
            Some(player) if player == minimax_side => tally.0 += 1,
            Some(_) => tally.1 += 1,
            None => tally.2 += 1,
        }
        progress.inc(1);
        progress.set_message(&format!(
            "minimax {} / negascout {} / draws {}",
            tally.0, tally.1, tally.2
        ));
    }
    progress.finish();

    println!(
        "{} games: minimax won {}, negascout won {}, {} drawn",
        games, tally.0, tally.1, tally.2
    );
    Ok(())
}
