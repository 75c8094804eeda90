#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use crate::builder::BoardBuilder;
    use crate::location::Location;
    use crate::matcher::MatchPolicy;
    use crate::shape::Orientation;
    use crate::{find_path, InvalidInput, LineMatcher, MoveOutcome, Occupancy, PathOutcome};

    #[test]
    fn row_of_five_through_the_middle() {
        let board = BoardBuilder::square(9)
            .add_tokens('R', (2..=6).map(|x| Location(x, 3)))
            .build()
            .unwrap();

        assert_eq!(format!("{}", board), ".........
.........
.........
..RRRRR..
.........
.........
.........
.........
.........
");

        let runs = LineMatcher::default().find_runs(board.cells(), Location(4, 3)).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].cells(), (2..=6).map(|x| Location(x, 3)).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn corridor_down_the_first_column() {
        let mut builder = BoardBuilder::square(9);
        for x in 1..9 {
            builder.add_tokens('#', (0..9).map(|y| Location(x, y)));
        }
        let board = builder.build().unwrap();

        assert_eq!(format!("{}", board), ".########
.########
.########
.########
.########
.########
.########
.########
.########
");

        let path = find_path(&board.occupancy(), Location(0, 0), Location(0, 8)).unwrap().into_path().unwrap();
        assert_eq!(path.cells(), (0..9).map(|y| Location(0, y)).collect::<Vec<_>>().as_slice());

        let mut occupancy = board.occupancy();
        occupancy[Location(8, 8).as_index()] = Occupancy::Empty;
        assert_eq!(find_path(&occupancy, Location(0, 0), Location(8, 8)), Ok(PathOutcome::Unreachable));
    }

    #[test]
    fn move_completes_a_row() {
        let mut board = BoardBuilder::square(9)
            .add_tokens('R', [Location(0, 4), Location(1, 4), Location(3, 4), Location(4, 4)])
            .add_token('R', Location(6, 0))
            .add_token('G', Location(2, 3))
            .build()
            .unwrap();

        let outcome = board.try_move(Location(6, 0), Location(2, 4)).unwrap();
        let MoveOutcome::Moved { path, cleared, points } = outcome else {
            panic!("move should go through");
        };
        assert_eq!(path.source(), Location(6, 0));
        assert_eq!(path.destination(), Location(2, 4));
        // (2, 4) is walled in on three sides, so the token has to come up from below
        assert_eq!(path.steps(), 10);
        assert_eq!(path.cells()[path.len() - 2], Location(2, 5));
        assert_eq!(cleared.len(), 1);
        assert_eq!(cleared[0].orientation(), Orientation::Horizontal);
        assert_eq!(points, 10);
        assert_eq!(board.score(), 10);

        assert_eq!(format!("{}", board), ".........
.........
.........
..G......
.........
.........
.........
.........
.........
");
    }

    #[test]
    fn move_without_a_run_asks_for_new_tokens() {
        let mut board = BoardBuilder::square(9)
            .add_token('R', Location(0, 0))
            .build()
            .unwrap();

        let outcome = board.try_move(Location(0, 0), Location(8, 8)).unwrap();
        assert!(outcome.needs_new_tokens());
        assert_eq!(board.score(), 0);
        assert_eq!(board.token_at(Location(8, 8)), Ok(Some(0)));
        assert_eq!(board.token_at(Location(0, 0)), Ok(None));
    }

    #[test]
    fn boxed_in_token_cannot_move() {
        let mut board = BoardBuilder::square(5)
            .add_token('R', Location(0, 0))
            .add_tokens('G', [Location(1, 0), Location(0, 1)])
            .build()
            .unwrap();
        let before = format!("{}", board);

        assert_eq!(board.try_move(Location(0, 0), Location(4, 4)), Ok(MoveOutcome::Rejected));
        assert_eq!(board.try_move(Location(0, 0), Location(1, 0)), Ok(MoveOutcome::Rejected));
        assert_eq!(board.try_move(Location(0, 0), Location(0, 0)), Ok(MoveOutcome::Rejected));
        assert_eq!(format!("{}", board), before);
    }

    #[test]
    fn moving_nothing_is_an_error() {
        let mut board = BoardBuilder::square(5).build().unwrap();
        assert_eq!(board.try_move(Location(2, 2), Location(3, 3)), Err(InvalidInput::NoToken { location: Location(2, 2) }));
        assert!(matches!(board.try_move(Location(2, 2), Location(9, 3)), Err(InvalidInput::OutOfBounds { .. })));
    }

    #[test]
    fn cross_clears_both_lines_but_scores_once() {
        let mut board = BoardBuilder::square(9)
            .add_tokens('Y', [Location(2, 4), Location(3, 4), Location(5, 4), Location(6, 4)])
            .add_tokens('Y', (0..4).map(|y| Location(4, y)))
            .add_token('Y', Location(8, 8))
            .build()
            .unwrap();

        let MoveOutcome::Moved { cleared, points, .. } = board.try_move(Location(8, 8), Location(4, 4)).unwrap() else {
            panic!("move should go through");
        };
        assert_eq!(cleared.len(), 2);
        assert_eq!(points, 10);
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().len(), 81);
    }

    #[test]
    fn score_stops_at_the_ceiling() {
        let mut board = BoardBuilder::square(9)
            .add_tokens('R', [Location(0, 0), Location(1, 0), Location(3, 0), Location(4, 0)])
            .add_tokens('R', [Location(0, 8), Location(1, 8), Location(3, 8), Location(4, 8)])
            .add_tokens('R', [Location(8, 4), Location(8, 5)])
            .revenue(u32::MAX)
            .build()
            .unwrap();

        assert!(!board.try_move(Location(8, 4), Location(2, 0)).unwrap().needs_new_tokens());
        assert_eq!(board.score(), u32::MAX);

        let MoveOutcome::Moved { points, .. } = board.try_move(Location(8, 5), Location(2, 8)).unwrap() else {
            panic!("move should go through");
        };
        assert_eq!(points, u32::MAX);
        assert_eq!(board.score(), u32::MAX);
    }

    #[test]
    fn placed_tokens_clear_without_scoring() {
        let mut board = BoardBuilder::square(9)
            .add_tokens('B', (0..4).map(|i| Location(i, i)))
            .add_color('G')
            .build()
            .unwrap();

        let cleared = board.place_tokens(&[(Location(8, 0), 1), (Location(4, 4), 0)]).unwrap();
        assert_eq!(cleared.len(), 1);
        assert_eq!(cleared[0].orientation(), Orientation::MainDiagonal);
        assert_eq!(board.score(), 0);
        assert_eq!(board.empty_cells().len(), 80);
        assert_eq!(board.token_at(Location(8, 0)), Ok(Some(1)));
    }

    #[test]
    fn bad_placements_change_nothing() {
        let mut board = BoardBuilder::square(5)
            .add_token('R', Location(0, 0))
            .min_run_length(3)
            .build()
            .unwrap();
        let before = format!("{}", board);

        assert_eq!(board.place_tokens(&[(Location(1, 1), 0), (Location(0, 0), 0)]), Err(InvalidInput::Occupied { location: Location(0, 0) }));
        assert_eq!(board.place_tokens(&[(Location(1, 1), 0), (Location(1, 1), 0)]), Err(InvalidInput::Occupied { location: Location(1, 1) }));
        assert_eq!(board.place_tokens(&[(Location(1, 1), 7)]), Err(InvalidInput::UnknownColor { color: 7 }));
        assert!(board.place_tokens(&[(Location(1, 1), 0), (Location(5, 5), 0)]).is_err());
        assert_eq!(format!("{}", board), before);
    }

    #[test]
    fn full_board_ends_the_game() {
        let mut board = BoardBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(2).unwrap()))
            .min_run_length(3)
            .add_tokens('A', [Location(0, 0), Location(2, 1)])
            .add_tokens('B', [Location(1, 0), Location(0, 1)])
            .add_token('C', Location(2, 0))
            .build()
            .unwrap();

        assert!(!board.is_full());
        assert_eq!(board.empty_cells(), vec![Location(1, 1)]);
        let cleared = board.place_tokens(&[(Location(1, 1), 2)]).unwrap();
        assert!(cleared.is_empty());
        assert!(board.is_full());
        assert_eq!(format!("{}", board), "ABC
BCA
");
    }

    #[test]
    fn full_scan_policy_skips_diagonals() {
        let builder = BoardBuilder::square(9)
            .add_tokens('B', (0..4).map(|i| Location(i, i)))
            .add_tokens('B', (0..4).map(|x| Location(x + 5, 8)))
            .add_token('B', Location(8, 0))
            .clone();

        let mut anchored = builder.build().unwrap();
        let MoveOutcome::Moved { cleared, .. } = anchored.try_move(Location(8, 0), Location(4, 4)).unwrap() else {
            panic!("move should go through");
        };
        assert_eq!(cleared.len(), 1);

        let mut full_scan = builder.clone().policy(MatchPolicy::FullScan).build().unwrap();
        let outcome = full_scan.try_move(Location(8, 0), Location(4, 4)).unwrap();
        assert!(outcome.needs_new_tokens());

        // straight runs still count
        let outcome = full_scan.try_move(Location(4, 4), Location(4, 8)).unwrap();
        let MoveOutcome::Moved { cleared, points, .. } = outcome else {
            panic!("move should go through");
        };
        assert_eq!(cleared.len(), 1);
        assert_eq!(cleared[0].cells().len(), 5);
        assert_eq!(points, 10);
    }
}
