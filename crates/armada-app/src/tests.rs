//! Tests for the command parser, sailing board and controller.

use armada_core::commands::Command;
use armada_core::types::Point;
use armada_sim::{Scenario, SimConfig};

use crate::controller::{Controller, Flow};
use crate::parser::{parse_line, Line, ParseError};
use crate::sailing::SailingBoard;

fn fleet(name: &str) -> bool {
    matches!(name, "Ajax" | "Xerxes" | "Valdez")
}

fn parse(line: &str) -> Result<Option<Line>, ParseError> {
    parse_line(line, fleet)
}

fn controller() -> Controller {
    let sim = Scenario::default_fleet()
        .build(SimConfig::default())
        .unwrap();
    Controller::new(sim)
}

fn send(controller: &mut Controller, line: &str) -> (Flow, String) {
    let mut out = Vec::new();
    let flow = controller.handle_line(line, &mut out).unwrap();
    (flow, String::from_utf8(out).unwrap())
}

// ---- Parser ----

#[test]
fn test_parse_keywords() {
    assert_eq!(parse("status"), Ok(Some(Line::Status)));
    assert_eq!(parse("  go  "), Ok(Some(Line::Go)));
    assert_eq!(parse("show"), Ok(Some(Line::Show)));
    assert_eq!(parse("quit"), Ok(Some(Line::Quit)));
    assert_eq!(parse("snapshot"), Ok(Some(Line::Snapshot)));
    assert_eq!(parse(""), Ok(None));
    assert_eq!(parse("   "), Ok(None));
    assert_eq!(parse("launch"), Err(ParseError::Unrecognized));
}

#[test]
fn test_parse_create() {
    assert_eq!(
        parse("create Nimitz Cruiser 1 -2.5"),
        Ok(Some(Line::Create {
            name: "Nimitz".into(),
            type_tag: "Cruiser".into(),
            position: Point::new(1.0, -2.5),
        }))
    );
    assert_eq!(
        parse("create N Cruiser 1 2"),
        Err(ParseError::NameTooShort)
    );
    assert_eq!(
        parse("create Nimitz Cruiser one 2"),
        Err(ParseError::ExpectedDouble)
    );
    assert_eq!(
        parse("create Nimitz Cruiser 1"),
        Err(ParseError::ExpectedDouble)
    );
}

#[test]
fn test_parse_ship_orders() {
    assert_eq!(
        parse("Ajax course 90 10"),
        Ok(Some(Line::Order(Command::Course {
            ship: "Ajax".into(),
            course: 90.0,
            speed: 10.0,
        })))
    );
    assert_eq!(
        parse("Xerxes position 3 4 12.5"),
        Ok(Some(Line::Order(Command::Position {
            ship: "Xerxes".into(),
            destination: Point::new(3.0, 4.0),
            speed: 12.5,
        })))
    );
    assert_eq!(
        parse("Valdez destination Shell 5"),
        Ok(Some(Line::Order(Command::Destination {
            ship: "Valdez".into(),
            island: "Shell".into(),
            speed: 5.0,
        })))
    );
    assert_eq!(
        parse("Valdez load_at Exxon"),
        Ok(Some(Line::Order(Command::LoadAt {
            ship: "Valdez".into(),
            island: "Exxon".into(),
        })))
    );
    assert_eq!(
        parse("Ajax attack Xerxes"),
        Ok(Some(Line::Order(Command::Attack {
            ship: "Ajax".into(),
            target: "Xerxes".into(),
        })))
    );
    assert_eq!(
        parse("Ajax stop_attack"),
        Ok(Some(Line::Order(Command::StopAttack {
            ship: "Ajax".into()
        })))
    );
}

#[test]
fn test_parse_order_errors() {
    assert_eq!(parse("Ajax course 360 10"), Err(ParseError::InvalidHeading));
    assert_eq!(parse("Ajax course -1 10"), Err(ParseError::InvalidHeading));
    assert_eq!(parse("Ajax course 90 -5"), Err(ParseError::NegativeSpeed));
    assert_eq!(parse("Ajax course ninety 5"), Err(ParseError::ExpectedDouble));
    assert_eq!(parse("Ajax fly"), Err(ParseError::Unrecognized));
    assert_eq!(parse("Ajax"), Err(ParseError::Unrecognized));
    assert_eq!(
        parse("Bogus stop"),
        Err(ParseError::Unrecognized),
        "unknown ship names are unrecognized commands"
    );
}

#[test]
fn test_parse_error_messages() {
    assert_eq!(ParseError::Unrecognized.to_string(), "Unrecognized command!");
    assert_eq!(ParseError::ExpectedDouble.to_string(), "Expected a double!");
    assert_eq!(ParseError::NegativeSpeed.to_string(), "Negative speed entered!");
    assert_eq!(ParseError::InvalidHeading.to_string(), "Invalid heading entered!");
    assert_eq!(ParseError::NameTooShort.to_string(), "Name is too short!");
}

// ---- Sailing board ----

#[test]
fn test_board_tracks_ships() {
    use armada_core::events::View;

    let mut board = SailingBoard::default();
    board.on_course_speed("Ajax", 90.0, 10.0);
    board.on_fuel("Ajax", 900.0);
    board.on_island_location("Exxon", Point::new(10.0, 10.0));
    assert_eq!(board.len(), 1, "islands are not listed");

    let ajax = board.get("Ajax").unwrap();
    assert_eq!(ajax.fuel, 900.0);
    assert_eq!(ajax.course, 90.0);

    let text = board.to_string();
    assert!(text.starts_with("----- Sailing Data -----\n"));
    assert!(text.contains("      Ship      Fuel    Course     Speed\n"));
    assert!(text.contains("      Ajax    900.00     90.00     10.00\n"));

    board.on_removed("Ajax");
    assert!(board.is_empty());
}

// ---- Controller ----

#[test]
fn test_controller_attaches_board() {
    let controller = controller();
    assert_eq!(controller.board().borrow().len(), 3);
    assert_eq!(controller.simulation().view_count(), 1);
    assert_eq!(controller.prompt(), "\nTime 0: Enter command: ");
}

#[test]
fn test_controller_status_and_go() {
    let mut controller = controller();
    let (flow, text) = send(&mut controller, "status");
    assert_eq!(flow, Flow::Continue);
    assert!(text.starts_with("Cruiser Ajax at (15.00, 15.00), fuel: 1000.00 tons"));
    assert!(text.contains("Island Exxon at position (10.00, 10.00)"));

    send(&mut controller, "Ajax course 90 10");
    send(&mut controller, "go");
    assert_eq!(controller.simulation().time().tick, 1);

    let (_, text) = send(&mut controller, "show");
    assert!(text.contains("      Ajax    900.00     90.00     10.00\n"), "{text}");
}

#[test]
fn test_controller_reports_errors() {
    let mut controller = controller();
    let (flow, text) = send(&mut controller, "Valdez attack Ajax");
    assert_eq!(flow, Flow::Continue);
    assert_eq!(text, "Valdez cannot attack!\n");

    let (_, text) = send(&mut controller, "create Ajax Tanker 1 1");
    assert_eq!(text, "Name is already in use: Ajax\n");

    let (_, text) = send(&mut controller, "create Nemo Submarine 0 0");
    assert_eq!(text, "Trying to create ship of unknown type: Submarine\n");

    let (_, text) = send(&mut controller, "Ajax course 400 5");
    assert_eq!(text, "Invalid heading entered!\n");

    let (_, text) = send(&mut controller, "Ajax dock_at Exxon");
    assert_eq!(text, "Can't dock!\n");
}

#[test]
fn test_controller_create_and_snapshot() {
    let mut controller = controller();
    let (_, text) = send(&mut controller, "create Queen Cruise_ship 0 0");
    assert!(text.is_empty());
    assert!(controller.simulation().is_ship_present("Queen"));
    assert_eq!(controller.board().borrow().len(), 4);

    let (_, json) = send(&mut controller, "snapshot");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["entities"].as_array().unwrap().len(), 8);
}

#[test]
fn test_controller_quit_detaches_board() {
    let mut controller = controller();
    let (flow, text) = send(&mut controller, "quit");
    assert_eq!(flow, Flow::Quit);
    assert_eq!(text, "Done\n");
    assert_eq!(controller.simulation().view_count(), 0);
}
