use std::io::{self, BufRead};
use std::sync::mpsc::Sender;
use std::thread;

use tracing::info;
use tracing_subscriber::EnvFilter;

use plum_checkers::checkers_errors::CheckersError;
use plum_checkers::controller::game_controller::GameController;
use plum_checkers::engines::engine_config::EngineConfig;
use plum_checkers::engines::engine_human::{human_input_channel, HumanAgent, HumanInput};
use plum_checkers::engines::engine_minimax::MinimaxAgent;
use plum_checkers::game_state::checkers_types::Color;

fn main() -> Result<(), CheckersError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = EngineConfig::from_env()?;
    info!(?config, "starting console game");

    let (input_tx, input_rx) = human_input_channel();
    let mut human = HumanAgent::from_config("Human", input_rx, &config);
    let mut computer = MinimaxAgent::from_config(&config).with_name("Computer");
    let mut controller = GameController::with_rules(config.rules());

    // Stdin is read on its own thread so the human agent can time out.
    thread::spawn(move || read_console_input(input_tx));

    loop {
        println!("\n{}\n{}", controller.board(), controller.status_text());
        if controller.is_game_over() {
            break;
        }

        match controller.current_color() {
            Color::Light => {
                let hints: Vec<String> = controller
                    .legal_moves()
                    .iter()
                    .map(|m| m.to_compact_string())
                    .collect();
                println!("moves: {}", hints.join("  "));
                println!("enter `row col` to pick a piece, then its destination (`cancel`, `quit`)");

                match controller.play_agent_turn(&mut human) {
                    Ok(Some(mv)) => println!("you played {}", mv.to_compact_string()),
                    Ok(None) => {}
                    Err(CheckersError::InputChannelClosed) => {
                        info!("input closed, leaving the game");
                        return Ok(());
                    }
                    Err(e) => return Err(e),
                }
            }
            Color::Dark => {
                if let Some(mv) = controller.play_agent_turn(&mut computer)? {
                    println!("computer played {}", mv.to_compact_string());
                }
            }
        }
    }

    Ok(())
}

fn read_console_input(input_tx: Sender<HumanInput>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };

        let input = match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "c" | "cancel" => HumanInput::Cancel,
            other => match parse_click(other) {
                Some((row, col)) => HumanInput::Click { row, col },
                None => {
                    eprintln!("expected `row col`, got `{other}`");
                    continue;
                }
            },
        };

        if input_tx.send(input).is_err() {
            break;
        }
    }
}

fn parse_click(text: &str) -> Option<(i8, i8)> {
    let mut parts = text.split(|c: char| c.is_whitespace() || c == ',');
    let row = parts.next()?.trim().parse().ok()?;
    let col = parts.find(|p| !p.is_empty())?.trim().parse().ok()?;
    Some((row, col))
}
