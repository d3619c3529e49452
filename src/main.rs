#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use blackbox::{
    border_cells, init_logging, trace_path,
    ui::{parse_cell, parse_cells, print_board},
    Board, Cell, GameSession, GameStatus, RayKind, DEFAULT_ATOMS,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game on the terminal.
    Play {
        #[arg(long, help = "Atom cells as 'r,c r,c ...' (default: random placement)")]
        atoms: Option<String>,
        #[arg(long, default_value_t = DEFAULT_ATOMS, help = "Number of random atoms")]
        random: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Resume a game saved with the 'save' command")]
        load: Option<PathBuf>,
        #[arg(long, default_value = "blackbox.save", help = "File used by the 'save' command")]
        save: PathBuf,
    },
    /// Trace rays against a known layout and print one JSON line per ray.
    Trace {
        #[arg(long, help = "Atom cells as 'r,c r,c ...'")]
        atoms: String,
        #[arg(long = "entry", help = "Entry cell 'r,c' (repeatable; default: every border cell)")]
        entries: Vec<String>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            atoms,
            random,
            seed,
            load,
            save,
        } => {
            let session = if let Some(path) = load {
                let bytes = std::fs::read(&path)?;
                println!("Resuming game from {}", path.display());
                GameSession::from_bytes(&bytes)?
            } else if let Some(list) = atoms {
                let cells = parse_cells(&list).map_err(|e| anyhow::anyhow!(e))?;
                GameSession::new(&cells).map_err(|e| anyhow::anyhow!(e))?
            } else {
                if let Some(s) = seed {
                    println!("Using fixed seed: {} (game will be reproducible)", s);
                }
                let mut rng = if let Some(s) = seed {
                    SmallRng::seed_from_u64(s)
                } else {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                };
                let board = Board::random(&mut rng, random).map_err(|e| anyhow::anyhow!(e))?;
                GameSession::with_board(board)
            };
            run_play(session, save)?;
        }
        Commands::Trace { atoms, entries } => {
            let cells = parse_cells(&atoms).map_err(|e| anyhow::anyhow!(e))?;
            let board = Board::new(&cells).map_err(|e| anyhow::anyhow!(e))?;
            let entries: Vec<Cell> = if entries.is_empty() {
                border_cells().collect()
            } else {
                entries
                    .iter()
                    .map(|e| parse_cell(e))
                    .collect::<Result<_, _>>()
                    .map_err(|e| anyhow::anyhow!(e))?
            };
            for entry in entries {
                let t = trace_path(&board, entry).map_err(|e| anyhow::anyhow!(e))?;
                let line = json!({
                    "entry": t.outcome.entry,
                    "exit": t.outcome.exit,
                    "kind": t.outcome.kind,
                    "turns": t.turns,
                    "path": t.path,
                });
                println!("{}", serde_json::to_string(&line)?);
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
const HELP: &str = "\
Commands:
  shoot R C   fire a ray from border cell (R, C)
  guess R C   guess that interior cell (R, C) holds an atom
  score       show the current score
  left        show how many atoms are still hidden
  board       show the board
  reveal      give up and show every atom
  save        write the game to the save file
  help        show this message
  quit        leave the game";

#[cfg(feature = "std")]
fn run_play(mut session: GameSession, save: PathBuf) -> anyhow::Result<()> {
    println!(
        "Black Box: find {} atom(s). Score starts at {}.",
        session.atoms_left(),
        session.score()
    );
    println!("{}", HELP);
    print_board(&session, false);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else {
            continue;
        };
        let rest: Vec<&str> = words.collect();

        match cmd {
            "shoot" | "s" => {
                let entry = match parse_cell(&rest.join(",")) {
                    Ok(c) => c,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                match session.shoot(entry) {
                    Ok(report) => {
                        match (report.outcome.kind, report.outcome.exit) {
                            (RayKind::Hit, _) => println!("Hit! The ray was absorbed."),
                            (RayKind::Reflection, _) => println!("Reflection: the ray came back out."),
                            (kind, Some(exit)) => println!("{}: the ray exits at {}", kind, exit),
                            (kind, None) => println!("{}", kind),
                        }
                        println!("Score: {}", report.score);
                    }
                    Err(e) => println!("Cannot shoot from there: {}", e),
                }
            }
            "guess" | "g" => {
                let cell = match parse_cell(&rest.join(",")) {
                    Ok(c) => c,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                match session.guess(cell) {
                    Ok(report) => {
                        if report.result.correct {
                            println!("Correct! {} atom(s) left.", session.atoms_left());
                        } else if report.result.is_new_wrong {
                            println!("Wrong guess.");
                        } else {
                            println!("Wrong guess (already tried, no extra charge).");
                        }
                        println!("Score: {}", report.score);
                    }
                    Err(e) => println!("Cannot guess there: {}", e),
                }
            }
            "score" => println!("Score: {}", session.score()),
            "left" => println!("{} atom(s) left", session.atoms_left()),
            "board" | "b" => print_board(&session, false),
            "reveal" => {
                print_board(&session, true);
                println!("Final score: {}", session.score());
                return Ok(());
            }
            "save" => {
                std::fs::write(&save, session.to_bytes()?)?;
                println!("Saved to {}", save.display());
            }
            "help" | "?" => println!("{}", HELP),
            "quit" | "q" | "exit" => break,
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }

        if session.status() == GameStatus::Solved {
            println!("\nAll atoms found!");
            print_board(&session, true);
            println!("Final score: {}", session.score());
            break;
        }
    }
    Ok(())
}
