use gunner::{shot_line, Command, Coord, ProtocolError, ShotOutcome};

#[test]
fn parses_the_command_vocabulary() {
    assert_eq!(
        Command::parse("Init 10 10 4 3 3 2 2 2 1 1 1 1").unwrap(),
        Command::Init {
            width: 10,
            height: 10,
            sizes: vec![4, 3, 3, 2, 2, 2, 1, 1, 1, 1]
        }
    );
    assert_eq!(
        Command::parse("Wound 3 5").unwrap(),
        Command::Report {
            at: Coord::new(3, 5),
            outcome: ShotOutcome::Wound
        }
    );
    assert_eq!(
        Command::parse("Kill 0 9").unwrap(),
        Command::Report {
            at: Coord::new(0, 9),
            outcome: ShotOutcome::Kill
        }
    );
    assert_eq!(
        Command::parse("Miss 7 2").unwrap(),
        Command::Report {
            at: Coord::new(7, 2),
            outcome: ShotOutcome::Miss
        }
    );
}

#[test]
fn tolerates_surrounding_whitespace() {
    assert_eq!(
        Command::parse("  Miss   7  2 \n").unwrap(),
        Command::Report {
            at: Coord::new(7, 2),
            outcome: ShotOutcome::Miss
        }
    );
}

#[test]
fn rejects_malformed_lines() {
    assert_eq!(Command::parse("").unwrap_err(), ProtocolError::EmptyLine);
    assert_eq!(Command::parse("   ").unwrap_err(), ProtocolError::EmptyLine);
    assert_eq!(
        Command::parse("Fire 1 2").unwrap_err(),
        ProtocolError::UnknownCommand("Fire".into())
    );
    assert_eq!(
        Command::parse("Wound 1").unwrap_err(),
        ProtocolError::BadArguments
    );
    assert_eq!(
        Command::parse("Miss one 2").unwrap_err(),
        ProtocolError::BadArguments
    );
    assert_eq!(
        Command::parse("Init 10").unwrap_err(),
        ProtocolError::BadArguments
    );
}

#[test]
fn formats_shot_replies() {
    assert_eq!(shot_line(Coord::new(4, 7)), "4 7");
    assert_eq!(shot_line(Coord::new(0, 0)), "0 0");
}
