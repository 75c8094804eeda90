use colorlines::{BoardBuilder, Location, MoveOutcome};

fn report(outcome: &MoveOutcome) {
    match outcome {
        MoveOutcome::Rejected => println!("no way through"),
        MoveOutcome::Moved { path, cleared, points } => {
            println!("moved in {} steps, cleared {} run(s), +{points}", path.steps(), cleared.len());
        }
    }
}

fn main() {
    let mut board = BoardBuilder::default()
        .add_tokens('R', [Location(2, 4), Location(3, 4), Location(5, 4), Location(6, 4)])
        .add_token('R', Location(8, 8))
        .add_tokens('G', [Location(4, 3), Location(4, 5), Location(7, 7), Location(8, 7)])
        .build()
        .unwrap();

    print!("{}", board);
    assert_eq!(format!("{}", board), ".........
.........
.........
....G....
..RR.RR..
....G....
.........
.......GG
........R
");

    // the gap in the reds is walled in on all four sides
    let outcome = board.try_move(Location(8, 8), Location(4, 4)).unwrap();
    report(&outcome);
    assert_eq!(outcome, MoveOutcome::Rejected);

    let outcome = board.try_move(Location(4, 5), Location(0, 0)).unwrap();
    report(&outcome);
    assert!(outcome.needs_new_tokens());

    let outcome = board.try_move(Location(8, 8), Location(4, 4)).unwrap();
    report(&outcome);
    assert_eq!(board.score(), 10);

    print!("{}", board);
    assert_eq!(format!("{}", board), "G........
.........
.........
....G....
.........
.........
.........
.......GG
.........
");
}
