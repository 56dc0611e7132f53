use std::collections::HashSet;

use conway::Grid;

fn set_cells(grid: &mut Grid, cells: &[(usize, usize)]) {
    for &(row, col) in cells {
        grid.set_alive(row, col, true).unwrap();
    }
}

fn assert_alive(grid: &Grid, cells: &[(usize, usize)]) {
    for &(row, col) in cells {
        assert!(grid.cell(row, col).unwrap(), "expected alive at ({row},{col})");
    }
}

fn assert_dead(grid: &Grid, cells: &[(usize, usize)]) {
    for &(row, col) in cells {
        assert!(!grid.cell(row, col).unwrap(), "expected dead at ({row},{col})");
    }
}

fn collect_live(grid: &Grid) -> HashSet<(usize, usize)> {
    grid.live_cells().collect()
}

/// Reference step over a set of live cells on an h x w torus.
fn step_naive(cells: &HashSet<(usize, usize)>, h: usize, w: usize) -> HashSet<(usize, usize)> {
    let mut next = HashSet::new();
    for row in 0..h {
        for col in 0..w {
            let mut neighbors = 0;
            for dr in [h - 1, 0, 1] {
                for dc in [w - 1, 0, 1] {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    if cells.contains(&((row + dr) % h, (col + dc) % w)) {
                        neighbors += 1;
                    }
                }
            }
            let alive = cells.contains(&(row, col));
            let next_alive = if alive {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            if next_alive {
                next.insert((row, col));
            }
        }
    }
    next
}

#[test]
fn neighbor_count_stays_in_range() {
    let mut grid = Grid::new(7, 5).unwrap();
    set_cells(&mut grid, &[(0, 0), (0, 6), (4, 0), (4, 6), (2, 3), (1, 1), (3, 5)]);
    for row in 0..5 {
        for col in 0..7 {
            assert!(grid.neighbor_count(row, col) <= 8);
        }
    }
}

#[test]
fn corners_are_diagonal_neighbours() {
    let mut grid = Grid::new(10, 8).unwrap();
    set_cells(&mut grid, &[(7, 9)]);
    assert_eq!(grid.neighbor_count(0, 0), 1);

    let mut grid = Grid::new(10, 8).unwrap();
    set_cells(&mut grid, &[(0, 0)]);
    assert_eq!(grid.neighbor_count(7, 9), 1);
    assert_eq!(grid.neighbor_count(7, 0), 1);
    assert_eq!(grid.neighbor_count(0, 9), 1);
    assert_eq!(grid.neighbor_count(4, 4), 0);
}

#[test]
fn advance_is_deterministic() {
    let seed = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3), (6, 6), (6, 7)];
    let mut first = Grid::new(12, 12).unwrap();
    set_cells(&mut first, &seed);
    first.advance_generation();

    let mut second = Grid::new(12, 12).unwrap();
    set_cells(&mut second, &seed);
    second.advance_generation();

    assert_eq!(collect_live(&first), collect_live(&second));
}

#[test]
fn block_is_stable() {
    let mut grid = Grid::new(10, 10).unwrap();
    let block = [(4, 4), (4, 5), (5, 4), (5, 5)];
    set_cells(&mut grid, &block);
    grid.advance_generation();
    assert_alive(&grid, &block);
    assert_eq!(grid.live_count(), 4);
}

#[test]
fn blinker_oscillates() {
    let mut grid = Grid::new(9, 9).unwrap();
    let horizontal = [(4, 3), (4, 4), (4, 5)];
    let vertical = [(3, 4), (4, 4), (5, 4)];
    set_cells(&mut grid, &horizontal);

    grid.advance_generation();
    assert_alive(&grid, &vertical);
    assert_dead(&grid, &[(4, 3), (4, 5)]);
    assert_eq!(grid.live_count(), 3);

    grid.advance_generation();
    assert_alive(&grid, &horizontal);
    assert_dead(&grid, &[(3, 4), (5, 4)]);
    assert_eq!(grid.live_count(), 3);
    assert_eq!(grid.generation(), 2);
}

#[test]
fn blinker_wraps_across_the_edge() {
    let mut grid = Grid::new(6, 6).unwrap();
    set_cells(&mut grid, &[(0, 5), (0, 0), (0, 1)]);
    grid.advance_generation();
    assert_alive(&grid, &[(5, 0), (0, 0), (1, 0)]);
    assert_eq!(grid.live_count(), 3);
}

#[test]
fn glider_returns_after_full_lap() {
    // A glider moves one cell diagonally every 4 generations, so on an n x n
    // torus it is back where it started after 4n generations.
    let mut grid = Grid::new(8, 8).unwrap();
    let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    set_cells(&mut grid, &glider);
    let start = collect_live(&grid);
    for _ in 0..32 {
        grid.advance_generation();
    }
    assert_eq!(collect_live(&grid), start);
}

#[test]
fn matches_reference_step() {
    let mut grid = Grid::new(11, 9).unwrap();
    set_cells(
        &mut grid,
        &[(0, 0), (0, 1), (1, 0), (2, 5), (2, 6), (3, 5), (8, 10), (8, 0), (4, 4), (5, 4), (6, 4)],
    );
    let mut expected = collect_live(&grid);
    for _ in 0..10 {
        expected = step_naive(&expected, 9, 11);
        grid.advance_generation();
        assert_eq!(collect_live(&grid), expected);
    }
}

#[test]
fn lonely_and_crowded_cells_die() {
    let mut grid = Grid::new(8, 8).unwrap();
    // plus sign: centre has four neighbours
    set_cells(&mut grid, &[(3, 3), (2, 3), (4, 3), (3, 2), (3, 4), (7, 7)]);
    grid.advance_generation();
    assert_dead(&grid, &[(3, 3), (7, 7)]);
}

#[test]
fn toggle_is_ignored_while_running() {
    let mut grid = Grid::new(5, 5).unwrap();
    set_cells(&mut grid, &[(1, 1)]);
    grid.set_running(true);
    let before = collect_live(&grid);
    assert_eq!(grid.toggle(1, 1), Ok(false));
    assert_eq!(grid.toggle(3, 3), Ok(false));
    assert_eq!(collect_live(&grid), before);

    grid.set_running(false);
    assert_eq!(grid.toggle(3, 3), Ok(true));
    assert_alive(&grid, &[(1, 1), (3, 3)]);
}
