//! Tic-tac-toe in the terminal
//!
//! Reads one command per line from stdin and prints the board after every
//! change. Type `help` for the command list.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tictactoe::cli::Cli;
use tictactoe::{Command, Outcome, TurnController};
use tracing::warn;

const HELP: &str = "\
Commands:
  <row> <col>   mark a cell (0-2 each)
  r | reset     new game
  g | mode      toggle human vs AI / two humans
  0 | 1         random / optimal AI
  ai x | ai o   choose the AI's mark
  q | quit      exit";

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    cli.init_tracing();

    let mut game = TurnController::new(cli.mode, cli.ai_config());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", HELP)?;
    advance_ai(&mut game);
    print_state(&mut stdout, &game)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            "" => continue,
            "q" | "quit" => break,
            "help" | "?" => {
                writeln!(stdout, "{}", HELP)?;
                continue;
            }
            _ => {}
        }

        let result = input
            .parse::<Command>()
            .and_then(|command| game.dispatch(command));
        if let Err(err) = result {
            warn!(%err, "command rejected");
            writeln!(stdout, "error: {}", err)?;
            continue;
        }

        advance_ai(&mut game);
        print_state(&mut stdout, &game)?;
    }

    Ok(())
}

fn advance_ai(game: &mut TurnController) {
    if let Err(err) = game.play_ai_turn() {
        warn!(%err, "AI turn failed");
    }
}

fn print_state(out: &mut impl Write, game: &TurnController) -> io::Result<()> {
    writeln!(out, "\n{}\n", game.board())?;
    match game.outcome() {
        Outcome::Win(winner) => writeln!(out, "{} wins. Type r to play again.", winner.symbol()),
        Outcome::Draw => writeln!(out, "Draw. Type r to play again."),
        Outcome::Ongoing => writeln!(out, "{} to move", game.current_player().symbol()),
    }
}
