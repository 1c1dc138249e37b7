use life_core::{CellState, Grid, RunState, Simulation};

fn grid(rows: &[&str]) -> Grid {
    Grid::from_rows(rows).expect("valid pattern")
}

#[test]
fn test_corner_wraps_to_all_opposite_corners() {
    let (height, width) = (5, 7);
    let mut board = Grid::new(width, height).unwrap();
    board.toggle(0, 0).unwrap();

    for (row, col) in [(height - 1, width - 1), (height - 1, 0), (0, width - 1)] {
        assert_eq!(board.count_live_neighbors(row, col), Ok(1), "({row}, {col})");
    }

    for (row, col) in [(height - 1, width - 1), (height - 1, 0), (0, width - 1)] {
        let mut board = Grid::new(width, height).unwrap();
        board.toggle(row, col).unwrap();
        assert_eq!(board.count_live_neighbors(0, 0), Ok(1), "({row}, {col})");
    }
}

#[test]
fn test_single_row_neighbors_alias() {
    let board = grid(&["#.."]);
    // Rows above and below are the row itself, so the cell sees itself twice.
    assert_eq!(board.count_live_neighbors(0, 0), Ok(2));
    assert_eq!(board.count_live_neighbors(0, 1), Ok(3));
    assert_eq!(board.count_live_neighbors(0, 2), Ok(3));
}

#[test]
fn test_two_rows_neighbors_alias() {
    let board = grid(&["#..", "..."]);
    assert_eq!(board.count_live_neighbors(1, 0), Ok(2));
    assert_eq!(board.count_live_neighbors(1, 1), Ok(2));
    assert_eq!(board.count_live_neighbors(0, 0), Ok(0));
}

#[test]
fn test_block_is_stable() {
    let block = grid(&["....", ".##.", ".##.", "...."]);
    assert_eq!(block.next_state(), block);
}

#[test]
fn test_isolated_cell_dies() {
    let next = grid(&[".....", ".....", "..#..", ".....", "....."]).next_state();
    assert_eq!(next.get(2, 2), Ok(CellState::Dead));
}

#[test]
fn test_two_neighbors_survive() {
    let board = grid(&[".....", ".....", ".###.", ".....", "....."]);
    assert_eq!(board.count_live_neighbors(2, 2), Ok(2));
    assert_eq!(board.next_state().get(2, 2), Ok(CellState::Alive));
}

#[test]
fn test_four_neighbors_die() {
    let board = grid(&[".....", ".#.#.", "..#..", ".#.#.", "....."]);
    assert_eq!(board.count_live_neighbors(2, 2), Ok(4));
    assert_eq!(board.next_state().get(2, 2), Ok(CellState::Dead));
}

#[test]
fn test_three_neighbors_reproduce() {
    let board = grid(&[".....", ".###.", ".....", ".....", "....."]);
    assert_eq!(board.count_live_neighbors(2, 2), Ok(3));
    assert_eq!(board.next_state().get(2, 2), Ok(CellState::Alive));
}

#[test]
fn test_two_neighbors_stay_dead() {
    let board = grid(&[".....", ".#.#.", ".....", ".....", "....."]);
    assert_eq!(board.count_live_neighbors(2, 2), Ok(2));
    assert_eq!(board.next_state().get(2, 2), Ok(CellState::Dead));
}

#[test]
fn test_glider_translates_after_four_generations() {
    let mut sim = Simulation::new(grid(&[
        ".#....", //
        "..#...", //
        "###...", //
        "......", //
        "......", //
        "......",
    ]));
    for _ in 0..4 {
        assert!(sim.step_once());
    }
    let expected = grid(&[
        "......", //
        "..#...", //
        "...#..", //
        ".###..", //
        "......", //
        "......",
    ]);
    assert_eq!(sim.grid(), &expected);
    assert_eq!(sim.generation(), 4);
}

#[test]
fn test_glider_circles_the_torus() {
    let start = grid(&[
        ".#....", //
        "..#...", //
        "###...", //
        "......", //
        "......", //
        "......",
    ]);
    let mut sim = Simulation::new(start.clone());
    sim.seek_to_generation(24);
    assert_eq!(sim.grid(), &start);
    assert_eq!(sim.population(), 5);
}

#[test]
fn test_running_loop_driven_by_ticks() {
    let mut sim = Simulation::new(grid(&[".....", "..#..", "..#..", "..#..", "....."]));
    sim.start();

    let mut ticks = 0;
    while sim.tick().should_reschedule() {
        ticks += 1;
        if ticks == 5 {
            sim.reset();
        }
    }
    assert_eq!(ticks, 5);
    assert_eq!(sim.state(), RunState::Idle);
    assert_eq!(sim.generation(), 0);
}
