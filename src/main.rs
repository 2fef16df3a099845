use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use lib_2048::{EngineConfig, GameEngine};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use command::{CommandParser, Mode, Parsed};
use session::{Outcome, Session};

mod command;
mod render;
mod session;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Play 2048 at a prompt and step back through the game"
)]
struct Cli {
    /// Cells per side (1 to 8)
    #[arg(long, value_name = "N", default_value_t = 4)]
    size: usize,

    /// A uniform draw above this spawns a 4, otherwise a 2
    #[arg(long, value_name = "P", default_value_t = 0.75)]
    random_factor_of_2: f64,

    /// Seed for tile placement (OS entropy when omitted)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Disable ANSI colours
    #[arg(long)]
    plain: bool,
}

fn redraw<R: Rng>(out: &mut impl Write, session: &Session<R>, colour: bool) -> io::Result<()> {
    render::draw_frame(out, session.shown_board(), &session.status(), colour)
}

fn run<R: Rng>(
    out: &mut impl Write,
    input: impl BufRead,
    engine: GameEngine<R>,
    colour: bool,
) -> Result<()> {
    let mut session = Session::new(engine);
    let mut parser = CommandParser::new()?;
    let mut lines = input.lines();

    redraw(out, &session, colour)?;

    loop {
        write!(out, "{}:/> ", session.mode())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };

        let command = match parser.parse(session.mode(), &line?) {
            Parsed::Command(command) => command,
            Parsed::Empty => continue,
            Parsed::Invalid(text) => {
                writeln!(out, "invalid command: {text}")?;
                continue;
            }
        };

        match session.execute(command)? {
            Outcome::Exit => break,
            Outcome::Unchanged => {}
            Outcome::Redraw => {
                redraw(out, &session, colour)?;

                if session.mode() == Mode::Play && session.engine().is_game_over() {
                    writeln!(out, "Game over")?;
                }
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = EngineConfig::new(cli.size, cli.random_factor_of_2);
    let rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let engine = GameEngine::with_rng(config, rng)?;
    info!("starting {}x{} game", cli.size, cli.size);

    let mut stdout = io::stdout().lock();
    let stdin = io::stdin().lock();

    run(&mut stdout, stdin, engine, !cli.plain)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session_output(script: &str) -> String {
        let engine = GameEngine::from_seed(EngineConfig::new(3, 0.75), 3).unwrap();
        let mut out = Vec::new();

        run(&mut out, Cursor::new(script), engine, false).unwrap();

        String::from_utf8(out).unwrap()
    }

    #[test]
    fn play_then_replay() {
        let output = session_output("l\nu\nswitch\nn\nset 1\nq\n");

        assert!(output.contains("play:/> "));
        assert!(output.contains("replay:/> "));
        assert!(output.contains("| status: replay"));
        assert!(!output.contains("invalid command"));
    }

    #[test]
    fn reports_invalid_commands() {
        let output = session_output("jump\nnext\nexit\n");

        assert!(output.contains("invalid command: jump"));
        assert!(output.contains("invalid command: next"));
    }

    #[test]
    fn stops_at_end_of_input() {
        let output = session_output("r\n");

        assert!(output.ends_with("play:/> "));
    }
}
