use lib_2048::{Board, EngineError, GameEngine};
use log::debug;

use crate::{
    command::{Command, Mode},
    render::Status,
};

enum View {
    Play,
    Replay { snapshots: Vec<Board>, step: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    Unchanged,
    Exit,
}

/// A game plus the play/replay view the player is looking at.
pub struct Session<R> {
    engine: GameEngine<R>,
    view: View,
}

impl<R> Session<R>
where
    R: rand::Rng,
{
    pub fn new(engine: GameEngine<R>) -> Self {
        Self {
            engine,
            view: View::Play,
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn mode(&self) -> Mode {
        match self.view {
            View::Play => Mode::Play,
            View::Replay { .. } => Mode::Replay,
        }
    }

    pub fn shown_board(&self) -> &Board {
        match &self.view {
            View::Play => self.engine.board(),
            View::Replay { snapshots, step } => &snapshots[*step],
        }
    }

    pub fn status(&self) -> Status {
        let step = match self.view {
            View::Play => self.engine.action_count(),
            View::Replay { step, .. } => step,
        };

        Status {
            mode: self.mode(),
            score: self.engine.score(),
            step,
            actions: self.engine.action_count(),
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome, EngineError> {
        match command {
            Command::Exit => return Ok(Outcome::Exit),
            Command::Switch => {
                self.switch_mode()?;
                return Ok(Outcome::Redraw);
            }
            _ => {}
        }

        let changed = match (&mut self.view, command) {
            (View::Play, Command::Move(direction)) => self.engine.apply_direction(direction),
            (View::Replay { step, .. }, Command::Prev) if *step > 0 => {
                *step -= 1;
                true
            }
            (View::Replay { snapshots, step }, Command::Next) if *step + 1 < snapshots.len() => {
                *step += 1;
                true
            }
            (View::Replay { snapshots, step }, Command::Set(target)) => {
                *step = target.min(snapshots.len() - 1);
                true
            }
            _ => false,
        };

        Ok(if changed {
            Outcome::Redraw
        } else {
            Outcome::Unchanged
        })
    }

    fn switch_mode(&mut self) -> Result<(), EngineError> {
        self.view = match self.view {
            View::Play => {
                let snapshots = self.engine.replay()?;
                debug!("replaying {} snapshots", snapshots.len());

                View::Replay { snapshots, step: 0 }
            }
            View::Replay { .. } => View::Play,
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lib_2048::{Direction, EngineConfig};
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn played_session() -> Session<ChaCha8Rng> {
        let mut session = Session::new(GameEngine::from_seed(EngineConfig::default(), 5).unwrap());

        for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down]
            .into_iter()
            .cycle()
            .take(20)
        {
            session.execute(Command::Move(direction)).unwrap();
        }

        session
    }

    #[test]
    fn switching_enters_replay_at_start() {
        let mut session = played_session();
        let actions = session.engine().action_count();
        assert!(actions > 0);

        assert_eq!(session.execute(Command::Switch), Ok(Outcome::Redraw));
        assert_eq!(session.mode(), Mode::Replay);
        assert_eq!(session.status().step, 0);
        assert_eq!(session.status().actions, actions);

        assert_eq!(session.execute(Command::Set(usize::MAX)), Ok(Outcome::Redraw));
        assert_eq!(session.status().step, actions);
        assert_eq!(session.shown_board(), session.engine().board());

        assert_eq!(session.execute(Command::Switch), Ok(Outcome::Redraw));
        assert_eq!(session.mode(), Mode::Play);
    }

    #[test]
    fn replay_navigation_stops_at_ends() {
        let mut session = played_session();
        session.execute(Command::Switch).unwrap();

        assert_eq!(session.execute(Command::Prev), Ok(Outcome::Unchanged));
        assert_eq!(session.execute(Command::Next), Ok(Outcome::Redraw));
        assert_eq!(session.status().step, 1);
        assert_eq!(session.execute(Command::Prev), Ok(Outcome::Redraw));

        let last = session.engine().action_count();
        session.execute(Command::Set(last)).unwrap();
        assert_eq!(session.execute(Command::Next), Ok(Outcome::Unchanged));
    }

    #[test]
    fn moves_ignored_while_replaying() {
        let mut session = played_session();
        session.execute(Command::Switch).unwrap();
        let actions = session.engine().action_count();

        assert_eq!(
            session.execute(Command::Move(Direction::Left)),
            Ok(Outcome::Unchanged)
        );
        assert_eq!(session.engine().action_count(), actions);
    }

    #[test]
    fn exit() {
        let mut session = played_session();
        assert_eq!(session.execute(Command::Exit), Ok(Outcome::Exit));
    }
}
