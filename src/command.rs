use std::fmt;

use aho_corasick::AhoCorasick;
use lib_2048::Direction;

const ARROW_KEYS: [&[u8]; 4] = [b"\x1b[A", b"\x1b[B", b"\x1b[C", b"\x1b[D"];
const ARROW_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Right,
    Direction::Left,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Play,
    Replay,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Play => "play",
            Self::Replay => "replay",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Prev,
    Next,
    Set(usize),
    Switch,
    Exit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parsed {
    Command(Command),
    /// Blank line with nothing to repeat.
    Empty,
    Invalid(String),
}

/// Turns prompt lines into commands. A blank line repeats the last command
/// that parsed.
pub struct CommandParser {
    arrows: AhoCorasick,
    last: Option<Command>,
}

impl CommandParser {
    pub fn new() -> Result<Self, aho_corasick::BuildError> {
        Ok(Self {
            arrows: AhoCorasick::new(ARROW_KEYS)?,
            last: None,
        })
    }

    pub fn parse(&mut self, mode: Mode, line: &str) -> Parsed {
        let line = line.trim();

        if line.is_empty() {
            return self.last.map_or(Parsed::Empty, Parsed::Command);
        }

        self.last = self.parse_fresh(mode, line);

        match self.last {
            Some(command) => Parsed::Command(command),
            None => Parsed::Invalid(line.to_owned()),
        }
    }

    fn parse_fresh(&self, mode: Mode, line: &str) -> Option<Command> {
        if let Some(found) = self.arrows.find(line) {
            let direction = ARROW_DIRECTIONS[found.pattern().as_usize()];

            return match mode {
                Mode::Play => Some(Command::Move(direction)),
                Mode::Replay => match direction {
                    Direction::Left | Direction::Up => Some(Command::Prev),
                    Direction::Right | Direction::Down => Some(Command::Next),
                },
            };
        }

        let line = line.to_ascii_lowercase();
        let mut words = line.split_whitespace();

        let word = words.next()?;
        let argument = words.next();

        if words.next().is_some() {
            return None;
        }

        let command = match (mode, word, argument) {
            (_, "switch", None) => Command::Switch,
            (_, "q" | "quit" | "exit", None) => Command::Exit,
            (Mode::Play, "u" | "up", None) => Command::Move(Direction::Up),
            (Mode::Play, "d" | "down", None) => Command::Move(Direction::Down),
            (Mode::Play, "l" | "left", None) => Command::Move(Direction::Left),
            (Mode::Play, "r" | "right", None) => Command::Move(Direction::Right),
            (Mode::Replay, "p" | "prev", None) => Command::Prev,
            (Mode::Replay, "n" | "next", None) => Command::Next,
            (Mode::Replay, "s" | "set", Some(step)) => Command::Set(step.parse().ok()?),
            _ => return None,
        };

        Some(command)
    }
}
