#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use serde_json::json;

    use crate::board::Board;
    use crate::builder::{BuildError, BuilderInvalidReason, LevelBuilder};
    use crate::cell::{Connection, Tile};
    use crate::engine::{Engine, GameState};
    use crate::error::{LoadError, Rejection, TileCodeError};
    use crate::location::Location;
    use crate::port::{Port, PortSet};
    use crate::propagate::propagate;
    use crate::shape::{BoardShape, HexStep, Step};

    // sc-2   rc-2-5 rc-1-4
    //   rc-1-6 rc-3-5 ec-6
    // swapping 2 and 4 completes start -> 1 -> 2 -> end
    fn two_by_three(max_swaps: usize) -> Engine {
        Engine::from_json(&json!({
            "rows": 2,
            "columns": 3,
            "state": "playing",
            "numberOfSwaps": 0,
            "maxNumberOfSwaps": max_swaps,
            "connectors": ["sc-2", "rc-2-5", "rc-1-4", "rc-1-6", "rc-3-5", "ec-6"],
        }).to_string()).unwrap()
    }

    fn dims(rows: usize, columns: usize) -> (NonZero<usize>, NonZero<usize>) {
        (NonZero::new(rows).unwrap(), NonZero::new(columns).unwrap())
    }

    fn all_ports() -> PortSet {
        [Port::One, Port::Two, Port::Three, Port::Four, Port::Five, Port::Six].into()
    }

    #[test]
    fn tile_codes() {
        assert_eq!("".parse::<Tile>(), Ok(Tile::Empty));
        assert_eq!("sc-2".parse::<Tile>(), Ok(Tile::Start { ports: [Port::Two].into() }));
        assert_eq!("rc-25".parse::<Tile>(), "rc-2-5".parse::<Tile>());
        assert_eq!(
            "cc-6-3".parse::<Tile>(),
            Ok(Tile::Regular { ports: [Port::Three, Port::Six].into(), connection: Connection::Active }),
        );

        assert_eq!("cc-6-3".parse::<Tile>().unwrap().to_string(), "cc-3-6");
        assert_eq!("ec-41".parse::<Tile>().unwrap().to_string(), "ec-1-4");
        assert_eq!(Tile::Empty.to_string(), "");

        assert_eq!("xc-1".parse::<Tile>(), Err(TileCodeError::UnknownRole("xc".to_owned())));
        assert_eq!("rc-17".parse::<Tile>(), Err(TileCodeError::BadPort('7')));
        assert_eq!("rc-".parse::<Tile>(), Err(TileCodeError::NoPorts));
        assert_eq!("rc25".parse::<Tile>(), Err(TileCodeError::MissingSeparator));
    }

    #[test]
    fn connection_state_changes() {
        let mut tile = Tile::regular([Port::One]);
        tile.mark_active();
        assert!(tile.is_active());
        tile.mark_active();
        assert!(tile.is_active());
        tile.reset_to_potential();
        assert_eq!(tile.connection(), Some(Connection::Potential));

        let mut start = Tile::Start { ports: [Port::One].into() };
        start.mark_active();
        start.reset_to_potential();
        assert_eq!(start, Tile::Start { ports: [Port::One].into() });
        assert!(start.is_endpoint() && start.is_anchor());
        assert_eq!(start.connection(), None);
    }

    #[test]
    fn hex_geometry() {
        // odd row
        assert_eq!(HexStep::DownLeft.attempt_from(Location(1, 1)), Location(2, 1));
        assert_eq!(HexStep::DownRight.attempt_from(Location(1, 1)), Location(2, 2));
        assert_eq!(HexStep::UpLeft.attempt_from(Location(1, 1)), Location(0, 1));
        assert_eq!(HexStep::UpRight.attempt_from(Location(1, 1)), Location(0, 2));
        // even row
        assert_eq!(HexStep::DownLeft.attempt_from(Location(2, 1)), Location(3, 0));
        assert_eq!(HexStep::DownRight.attempt_from(Location(2, 1)), Location(3, 1));
        assert_eq!(HexStep::UpLeft.attempt_from(Location(2, 1)), Location(1, 0));
        assert_eq!(HexStep::UpRight.attempt_from(Location(2, 1)), Location(1, 1));
        // parity independent
        assert_eq!(HexStep::Left.attempt_from(Location(1, 1)), Location(1, 0));
        assert_eq!(HexStep::Right.attempt_from(Location(2, 1)), Location(2, 2));

        for location in [Location(1, 2), Location(2, 2)] {
            for (direction, neighbor) in HexStep::neighbors_of(location) {
                assert_eq!(direction.invert().attempt_from(neighbor), location);
            }
        }
    }

    #[test]
    fn board_bounds_and_indices() {
        let engine = two_by_three(3);
        let board = engine.board();

        assert_eq!(board.location_of(4), Location(1, 1));
        assert_eq!(board.index_of(Location(1, 2)), 5);
        assert!(board.in_bounds(Location(1, 2)));
        assert!(!board.in_bounds(Location(2, 0)));
        assert!(!board.in_bounds(HexStep::Left.attempt_from(Location(0, 0))));

        let around_corner = board.neighbors_of(Location(0, 0));
        assert_eq!(around_corner, vec![(HexStep::Right, Location(0, 1)), (HexStep::DownRight, Location(1, 0))]);
        assert_eq!(board.start_location(), Some(Location(0, 0)));
        assert_eq!(board.end_location(), Some(Location(1, 2)));
    }

    #[test]
    fn port_rule_is_symmetric() {
        for direction in [HexStep::Left, HexStep::Right, HexStep::DownLeft, HexStep::DownRight, HexStep::UpLeft, HexStep::UpRight] {
            let from = Tile::regular([direction.port()]);
            let to = Tile::regular([direction.invert().port()]);
            assert!(direction.connects(&from, &to));
            assert!(direction.invert().connects(&to, &from));
            assert!(!direction.connects(&to, &from));
        }

        assert_eq!(HexStep::Left.port(), Port::Five);
        assert_eq!(HexStep::Right.port(), Port::Two);
        assert_eq!(HexStep::UpRight.port(), Port::One);
        assert!(!HexStep::Right.connects(&Tile::regular([Port::Two]), &Tile::Empty));
    }

    #[test]
    fn winning_swap() {
        let mut engine = two_by_three(3);

        assert_eq!(engine.swap(2, 4), Ok(GameState::Won));
        assert_eq!(engine.swap_count(), 1);
        assert_eq!(engine.active_indices(), vec![1, 2]);
        assert_eq!(
            engine.snapshot().connectors,
            vec!["sc-2", "cc-2-5", "cc-3-5", "rc-1-6", "rc-1-4", "ec-6"],
        );
        assert_eq!(engine.swap(1, 3), Err(Rejection::GameNotPlaying(GameState::Won)));
    }

    #[test]
    fn win_beats_exhausted_budget() {
        let mut engine = two_by_three(1);
        assert_eq!(engine.swap(2, 4), Ok(GameState::Won));
    }

    #[test]
    fn losing_swap() {
        let mut engine = two_by_three(1);

        assert_eq!(engine.swap(3, 4), Ok(GameState::Lost));
        assert_eq!(engine.swap_count(), 1);

        let before = engine.snapshot();
        assert_eq!(engine.swap(2, 4), Err(Rejection::GameNotPlaying(GameState::Lost)));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn swap_counts_towards_budget() {
        let mut engine = two_by_three(3);

        assert_eq!(engine.swap(3, 4), Ok(GameState::Playing));
        assert_eq!(engine.swap(3, 4), Ok(GameState::Playing));
        assert_eq!(engine.swap_count(), 2);
        assert_eq!(engine.swap(1, 3), Ok(GameState::Lost));
        assert_eq!(engine.swap_count(), 3);
    }

    #[test]
    fn stale_connections_are_cleared() {
        let mut engine = Engine::from_json(&json!({
            "rows": 2,
            "columns": 3,
            "state": "playing",
            "numberOfSwaps": 0,
            "maxNumberOfSwaps": 3,
            "connectors": ["sc-2", "cc-2-5", "rc-1-4", "cc-1-6", "rc-3-5", "ec-6"],
        }).to_string()).unwrap();

        // loaded verbatim
        assert_eq!(engine.active_indices(), vec![1, 3]);

        assert_eq!(engine.swap(3, 4), Ok(GameState::Playing));
        assert_eq!(engine.snapshot().connectors[4], "rc-1-6");
        assert_eq!(engine.active_indices(), vec![1]);
    }

    #[test]
    fn anchors_cannot_move() {
        let mut engine = two_by_three(3);
        let before = engine.snapshot();

        assert_eq!(engine.swap(0, 1), Err(Rejection::AnchorTileSwap { index: 0 }));
        assert_eq!(engine.swap(1, 5), Err(Rejection::AnchorTileSwap { index: 5 }));
        assert_eq!(engine.swap(5, 0), Err(Rejection::AnchorTileSwap { index: 5 }));
        assert_eq!(engine.snapshot(), before);
        assert!(!engine.can_undo());
    }

    #[test]
    fn out_of_range_swap() {
        let mut engine = two_by_three(3);
        let before = engine.snapshot();

        assert_eq!(engine.swap(1, 6), Err(Rejection::IndexOutOfRange { index: 6, len: 6 }));
        assert_eq!(engine.swap(usize::MAX, 1), Err(Rejection::IndexOutOfRange { index: usize::MAX, len: 6 }));
        // range is checked on both indices before either is checked for an anchor
        assert_eq!(engine.swap(0, 99), Err(Rejection::IndexOutOfRange { index: 99, len: 6 }));
        assert_eq!(engine.swap(5, 6), Err(Rejection::IndexOutOfRange { index: 6, len: 6 }));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn swap_by_code() {
        let mut engine = two_by_three(3);

        assert_eq!(
            engine.swap_codes("rc-1-4", "rc-9"),
            Err(Rejection::UnknownConnector("rc-9".to_owned())),
        );
        assert_eq!(engine.swap_count(), 0);
        assert_eq!(engine.swap_codes("rc-3-5", "rc-1-4"), Ok(GameState::Won));
    }

    #[test]
    fn undo_restores_exactly() {
        let mut engine = two_by_three(3);
        let before = engine.snapshot();
        let board_before: Board = engine.board().clone();

        assert_eq!(engine.swap(2, 4), Ok(GameState::Won));
        assert_eq!(engine.undo(), Ok(GameState::Playing));

        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.board(), &board_before);
        assert_eq!(engine.swap_count(), 0);
        assert_eq!(engine.undo(), Err(Rejection::EmptyHistory));
    }

    #[test]
    fn undo_steps_back_one_swap_at_a_time() {
        let mut engine = two_by_three(2);

        engine.swap(3, 4).unwrap();
        let after_first = engine.snapshot();
        assert_eq!(engine.swap(1, 3), Ok(GameState::Lost));
        assert_eq!(engine.undo_depth(), 2);

        assert_eq!(engine.undo(), Ok(GameState::Playing));
        assert_eq!(engine.snapshot(), after_first);
        assert_eq!(engine.undo_depth(), 1);

        // play resumes from the restored board
        assert_eq!(engine.swap(3, 4), Ok(GameState::Lost));
    }

    #[test]
    fn undo_on_fresh_engine() {
        let mut engine = two_by_three(3);
        let before = engine.snapshot();

        assert_eq!(engine.undo(), Err(Rejection::EmptyHistory));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn propagation_is_idempotent() {
        let engine = two_by_three(3);
        let mut board = engine.board().clone();
        let start = board.start_location().unwrap();

        board.reset_to_potential();
        assert!(!propagate(&mut board, start));
        let once = board.clone();
        assert!(!propagate(&mut board, start));

        assert_eq!(board, once);
        assert!(board.get(Location(0, 1)).unwrap().is_active());
        assert!(!board.get(Location(0, 2)).unwrap().is_active());
    }

    #[test]
    fn end_tile_is_a_sink() {
        let engine = LevelBuilder::with_dims(dims(1, 3))
            .start(Location(0, 0), [Port::Two])
            .end(Location(0, 1), [Port::Two, Port::Five])
            .regular(Location(0, 2), [Port::Five])
            .build()
            .unwrap();

        let mut board = engine.board().clone();
        assert!(propagate(&mut board, Location(0, 0)));
        assert!(!board.get(Location(0, 2)).unwrap().is_active());
    }

    #[test]
    fn cycles_and_holes() {
        let mut builder = LevelBuilder::with_dims(dims(2, 3));
        builder
            .start(Location(0, 0), all_ports())
            .regular(Location(0, 1), all_ports())
            .regular(Location(1, 0), all_ports())
            .regular(Location(1, 1), all_ports())
            .end(Location(1, 2), [Port::One])
            .max_swaps(5);
        let mut engine = builder.build().unwrap();

        assert_eq!(engine.snapshot().connectors[2], "");
        assert_eq!(engine.swap(2, 1), Err(Rejection::EmptySlot { index: 2 }));

        assert_eq!(engine.swap(3, 4), Ok(GameState::Playing));
        assert_eq!(engine.active_indices(), vec![1, 3, 4]);
    }

    #[test]
    fn load_rejects_bad_levels() {
        let level = |rows: usize, max: usize, connectors: &[&str]| json!({
            "rows": rows,
            "columns": 2,
            "state": "playing",
            "numberOfSwaps": 0,
            "maxNumberOfSwaps": max,
            "connectors": connectors,
        }).to_string();

        assert!(matches!(Engine::from_json(&level(1, 1, &["sc-2", "ec-5"])), Ok(_)));
        assert!(matches!(Engine::from_json(&level(1, 1, &["sc-2", "sc-5"])), Err(LoadError::StartCount(2))));
        assert!(matches!(Engine::from_json(&level(1, 1, &["sc-2", "rc-5"])), Err(LoadError::EndCount(0))));
        assert!(matches!(Engine::from_json(&level(1, 1, &["ec-2", "rc-5"])), Err(LoadError::StartCount(0))));
        assert!(matches!(
            Engine::from_json(&level(2, 1, &["sc-2", "ec-5"])),
            Err(LoadError::ConnectorCount { expected: 4, found: 2 }),
        ));
        assert!(matches!(Engine::from_json(&level(0, 1, &[])), Err(LoadError::ZeroDimension)));
        assert!(matches!(
            Engine::from_json(&level(usize::MAX, 1, &["sc-2", "ec-5"])),
            Err(LoadError::BoardTooLarge { rows: usize::MAX, columns: 2 }),
        ));
        assert!(matches!(Engine::from_json(&level(1, 0, &["sc-2", "ec-5"])), Err(LoadError::ZeroSwapBudget)));
        assert!(matches!(
            Engine::from_json(&level(1, 1, &["sc-2", "ec-8"])),
            Err(LoadError::BadTileCode { index: 1, source: TileCodeError::BadPort('8') }),
        ));
        assert!(matches!(Engine::from_json("{\"rows\": 1}"), Err(LoadError::Json(_))));
    }

    #[test]
    fn finished_levels_load_as_given() {
        let mut engine = Engine::from_json(&json!({
            "rows": 1,
            "columns": 3,
            "state": "lost",
            "numberOfSwaps": 4,
            "maxNumberOfSwaps": 4,
            "connectors": ["sc-2", "rc-1", "ec-5"],
        }).to_string()).unwrap();

        assert_eq!(engine.state(), GameState::Lost);
        assert_eq!(engine.swap_count(), 4);
        assert_eq!(engine.swap(1, 1), Err(Rejection::GameNotPlaying(GameState::Lost)));
        assert_eq!(engine.undo(), Err(Rejection::EmptyHistory));
    }

    #[test]
    fn snapshot_json_layout() {
        let mut engine = two_by_three(3);
        engine.swap(2, 4).unwrap();

        let value = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(value["state"], json!("won"));
        assert_eq!(value["numberOfSwaps"], json!(1));
        assert_eq!(value["maxNumberOfSwaps"], json!(3));
        assert_eq!(value["connectors"][2], json!("cc-3-5"));

        let reloaded = Engine::load(serde_json::from_value(value).unwrap()).unwrap();
        assert_eq!(reloaded.board(), engine.board());
    }

    #[test]
    fn stats_printout() {
        let mut engine = two_by_three(3);
        engine.swap(3, 4).unwrap();

        assert_eq!(format!("{}", engine), "CONNECTORS:
sc-2 cc-2-5 rc-1-4 \nrc-3-5 rc-1-6 ec-6 \n
SWAPS: 1 / 3
STATE: playing");
    }

    #[test]
    fn builder_reports_placement_problems() {
        let mut builder = LevelBuilder::with_dims(dims(2, 2));
        builder.start(Location(0, 0), [Port::Two]).end(Location(2, 0), [Port::Five]);
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::TileOutOfBounds]));
        assert!(matches!(builder.build(), Err(BuildError::Invalid(_))));

        let mut builder = LevelBuilder::with_dims(dims(2, 2));
        builder.start(Location(0, 0), [Port::Two]);
        assert_eq!(builder.is_valid(), None);
        assert!(matches!(builder.build(), Err(BuildError::Load(LoadError::EndCount(0)))));
        assert_eq!(
            builder.build().err().map(|err| err.to_string()),
            Some("board needs exactly one end connector, found 0".to_owned()),
        );

        let mut builder = LevelBuilder::default();
        builder.regular(Location(0, 0), PortSet::new());
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::NoPorts]));
    }

    #[test]
    fn game_state_strings() {
        assert_eq!(GameState::Won.to_string(), "won");
        assert_eq!("lost".parse::<GameState>(), Ok(GameState::Lost));
        assert_eq!(serde_json::to_string(&GameState::Playing).unwrap(), "\"playing\"");
    }
}
