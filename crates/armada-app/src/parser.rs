//! Operator command parser.
//!
//! One input line is one command: either a simulation keyword or a ship
//! name followed by a ship order. Parsing is purely textual; the only thing
//! the parser needs from the simulation is whether a word names a ship.

use thiserror::Error;

use armada_core::commands::Command;
use armada_core::constants::{MAX_COURSE_DEGREES, MIN_NAME_LENGTH};
use armada_core::types::Point;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unrecognized command!")]
    Unrecognized,
    #[error("Expected a double!")]
    ExpectedDouble,
    #[error("Negative speed entered!")]
    NegativeSpeed,
    #[error("Invalid heading entered!")]
    InvalidHeading,
    #[error("Name is too short!")]
    NameTooShort,
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// A parsed operator line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// Describe every entity.
    Status,
    /// Advance one tick.
    Go,
    /// Print the sailing data board.
    Show,
    /// Print the world snapshot as JSON.
    Snapshot,
    Quit,
    /// Build a ship from a type tag. The tag is checked by the factory.
    Create {
        name: String,
        type_tag: String,
        position: Point,
    },
    /// An order for one ship.
    Order(Command),
}

struct Tokens<'a> {
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn word(&mut self) -> Result<&'a str> {
        self.words.next().ok_or(ParseError::Unrecognized)
    }

    fn double(&mut self) -> Result<f64> {
        self.words
            .next()
            .and_then(|word| word.parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .ok_or(ParseError::ExpectedDouble)
    }

    fn speed(&mut self) -> Result<f64> {
        let speed = self.double()?;
        if speed < 0.0 {
            return Err(ParseError::NegativeSpeed);
        }
        Ok(speed)
    }

    fn point(&mut self) -> Result<Point> {
        let x = self.double()?;
        let y = self.double()?;
        Ok(Point::new(x, y))
    }
}

/// Parse one line. Returns `Ok(None)` for a blank line.
///
/// `is_ship` decides whether a leading word that is not a keyword names a
/// ship; anything else is unrecognized.
pub fn parse_line(line: &str, is_ship: impl Fn(&str) -> bool) -> Result<Option<Line>> {
    let mut tokens = Tokens {
        words: line.split_whitespace(),
    };
    let Some(first) = tokens.words.next() else {
        return Ok(None);
    };

    let parsed = match first {
        "status" => Line::Status,
        "go" => Line::Go,
        "show" => Line::Show,
        "snapshot" => Line::Snapshot,
        "quit" => Line::Quit,
        "create" => {
            let name = tokens.word()?;
            if name.chars().count() < MIN_NAME_LENGTH {
                return Err(ParseError::NameTooShort);
            }
            let type_tag = tokens.word()?;
            Line::Create {
                name: name.to_string(),
                type_tag: type_tag.to_string(),
                position: tokens.point()?,
            }
        }
        ship if is_ship(ship) => Line::Order(parse_order(ship, &mut tokens)?),
        _ => return Err(ParseError::Unrecognized),
    };
    Ok(Some(parsed))
}

fn parse_order(ship: &str, tokens: &mut Tokens<'_>) -> Result<Command> {
    let ship = ship.to_string();
    let order = match tokens.word()? {
        "course" => {
            let course = tokens.double()?;
            if !(0.0..MAX_COURSE_DEGREES).contains(&course) {
                return Err(ParseError::InvalidHeading);
            }
            Command::Course {
                ship,
                course,
                speed: tokens.speed()?,
            }
        }
        "position" => Command::Position {
            ship,
            destination: tokens.point()?,
            speed: tokens.speed()?,
        },
        "destination" => Command::Destination {
            ship,
            island: tokens.word()?.to_string(),
            speed: tokens.speed()?,
        },
        "load_at" => Command::LoadAt {
            ship,
            island: tokens.word()?.to_string(),
        },
        "unload_at" => Command::UnloadAt {
            ship,
            island: tokens.word()?.to_string(),
        },
        "dock_at" => Command::DockAt {
            ship,
            island: tokens.word()?.to_string(),
        },
        "attack" => Command::Attack {
            ship,
            target: tokens.word()?.to_string(),
        },
        "refuel" => Command::Refuel { ship },
        "stop" => Command::Stop { ship },
        "stop_attack" => Command::StopAttack { ship },
        _ => return Err(ParseError::Unrecognized),
    };
    Ok(order)
}
