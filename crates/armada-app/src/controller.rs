//! Controller: executes parsed operator lines against the simulation.
//!
//! Output goes to any `io::Write`, so the same controller drives stdout in
//! the binary and an in-memory buffer in tests.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use thiserror::Error;
use tracing::debug;

use armada_core::error::SimError;
use armada_sim::{Simulation, ViewId};

use crate::parser::{parse_line, Line, ParseError};
use crate::sailing::SailingBoard;

/// Why a line could not be carried out. Displays the bare message the
/// operator sees.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error("failed to serialize snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Controller {
    sim: Simulation,
    board: Rc<RefCell<SailingBoard>>,
    board_id: Option<ViewId>,
}

impl Controller {
    /// Take over `sim` and attach a sailing data board to it.
    pub fn new(mut sim: Simulation) -> Self {
        let board = Rc::new(RefCell::new(SailingBoard::default()));
        let board_id = sim.attach(board.clone());
        Self {
            sim,
            board,
            board_id: Some(board_id),
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn board(&self) -> Rc<RefCell<SailingBoard>> {
        Rc::clone(&self.board)
    }

    /// Prompt shown before each line.
    pub fn prompt(&self) -> String {
        format!("\nTime {}: Enter command: ", self.sim.time().tick)
    }

    /// Run one line. Command failures are printed and the line is dropped;
    /// only output failures are returned.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        match self.execute(line, out) {
            Ok(flow) => Ok(flow),
            Err(CommandError::Io(error)) => Err(error),
            Err(error) => {
                debug!(%error, line, "command failed");
                writeln!(out, "{error}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Flow, CommandError> {
        let sim = &self.sim;
        let Some(parsed) = parse_line(line, |name| sim.is_ship_present(name))? else {
            return Ok(Flow::Continue);
        };

        match parsed {
            Line::Status => {
                for report in self.sim.describe_all() {
                    writeln!(out, "{report}")?;
                }
            }
            Line::Go => self.sim.advance_time(),
            Line::Show => write!(out, "{}", self.board.borrow())?,
            Line::Snapshot => {
                let json = serde_json::to_string_pretty(&self.sim.snapshot())?;
                writeln!(out, "{json}")?;
            }
            Line::Quit => {
                if let Some(id) = self.board_id.take() {
                    self.sim.detach(id);
                }
                writeln!(out, "Done")?;
                return Ok(Flow::Quit);
            }
            Line::Create {
                name,
                type_tag,
                position,
            } => {
                self.sim.create_ship(&name, &type_tag, position)?;
            }
            Line::Order(command) => self.sim.execute(command)?,
        }
        Ok(Flow::Continue)
    }
}
