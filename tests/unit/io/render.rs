//! Tests for cell glyph blocks and whole-map rendering

#[cfg(test)]
mod tests {
    use streetmap::io::render::{block_lines, render_cell, render_grid};
    use streetmap::spatial::{Cell, CellRole, Direction, Grid};

    fn lines(cell: &Cell) -> [String; 3] {
        block_lines(&render_cell(cell))
    }

    fn open_all(cell: &mut Cell) {
        for direction in Direction::ALL {
            cell.set_resolved(direction, true);
        }
    }

    // Tests a fully open cell renders as a crossing
    // Verified by swapping the east and west glyph columns
    #[test]
    fn test_crossing_block() {
        let mut cell = Cell::new([0, 0], 2, 2);
        open_all(&mut cell);

        assert_eq!(lines(&cell), ["  ║  ", "══╬══", "  ║  "]);
    }

    #[test]
    fn test_closed_cell_is_blank() {
        let mut cell = Cell::new([1, 1], 3, 3);
        cell.clear();

        assert_eq!(lines(&cell), ["     ", "     ", "     "]);
    }

    // Tests each single-road and corner block follows its open edges
    // Verified by keying the block table in north, south, east, west order
    #[test]
    fn test_corner_and_dead_end_blocks() {
        let mut corner = Cell::new([0, 0], 2, 2);
        corner.set_resolved(Direction::North, false);
        corner.set_resolved(Direction::West, false);
        corner.set_resolved(Direction::East, true);
        corner.set_resolved(Direction::South, true);
        assert_eq!(lines(&corner), ["     ", "  ╔══", "  ║  "]);

        let mut dead_end = Cell::new([0, 0], 2, 2);
        dead_end.clear();
        dead_end.set_resolved(Direction::West, true);
        assert_eq!(lines(&dead_end), ["     ", "══   ", "     "]);
    }

    // Tests all sixteen resolved blocks, keyed by (north, east, south, west)
    // Verified by swapping the ╠ and ╣ rows in the block table
    #[test]
    fn test_resolved_block_table() {
        let table: [((bool, bool, bool, bool), [&str; 3]); 16] = [
            ((true, true, true, true), ["  ║  ", "══╬══", "  ║  "]),
            ((true, true, true, false), ["  ║  ", "  ╠══", "  ║  "]),
            ((true, true, false, true), ["  ║  ", "══╩══", "     "]),
            ((true, true, false, false), ["  ║  ", "  ╚══", "     "]),
            ((true, false, true, true), ["  ║  ", "══╣  ", "  ║  "]),
            ((true, false, true, false), ["  ║  ", "  ║  ", "  ║  "]),
            ((true, false, false, true), ["  ║  ", "══╝  ", "     "]),
            ((true, false, false, false), ["  ║  ", "     ", "     "]),
            ((false, true, true, true), ["     ", "══╦══", "  ║  "]),
            ((false, true, true, false), ["     ", "  ╔══", "  ║  "]),
            ((false, true, false, true), ["     ", "═════", "     "]),
            ((false, true, false, false), ["     ", "   ══", "     "]),
            ((false, false, true, true), ["     ", "══╗  ", "  ║  "]),
            ((false, false, true, false), ["     ", "     ", "  ║  "]),
            ((false, false, false, true), ["     ", "══   ", "     "]),
            ((false, false, false, false), ["     ", "     ", "     "]),
        ];

        for ((north, east, south, west), expected) in table {
            // Perimeter cell, so no edge is forced open while building it
            let mut cell = Cell::new([0, 0], 2, 2);
            cell.set_resolved(Direction::North, north);
            cell.set_resolved(Direction::East, east);
            cell.set_resolved(Direction::South, south);
            cell.set_resolved(Direction::West, west);

            assert_eq!(
                lines(&cell),
                expected,
                "north={north} east={east} south={south} west={west}"
            );
        }
    }

    // Tests role markers replace the block center
    // Verified by overlaying markers on the top row
    #[test]
    fn test_role_markers() {
        let mut home = Cell::new([1, 0], 2, 1);
        open_all(&mut home);
        home.set_role(CellRole::Home);
        assert_eq!(lines(&home), ["  ║  ", "══H══", "  ║  "]);

        let mut start = Cell::new([0, 0], 2, 1);
        start.clear();
        start.set_role(CellRole::Start);
        assert_eq!(lines(&start), ["     ", "  S  ", "     "]);
    }

    // Tests unknown edges render as placeholders around a '?' center
    // Verified by rendering unknown edges as closed
    #[test]
    fn test_unresolved_blocks() {
        let fresh = Cell::new([1, 1], 3, 3);
        assert_eq!(lines(&fresh), ["?????", "?????", "?????"]);

        let mut partial = Cell::new([1, 1], 3, 3);
        partial.set_resolved(Direction::North, true);
        partial.set_resolved(Direction::East, false);
        assert_eq!(lines(&partial), ["??║??", "???  ", "?????"]);
    }

    // Tests the two-cell map renders start and home joined by a road
    // Verified by omitting the cell separator
    #[test]
    fn test_two_cell_map() {
        let grid = Grid::with_roles(2, 1, 0, 0).expect("valid grid");

        assert_eq!(
            render_grid(&grid),
            vec!["     │  ║  ", "══S══│══H══", "     │  ║  "]
        );
    }

    // Tests rows of cells are separated by a junction line, none at the end
    // Verified by emitting a separator after every row
    #[test]
    fn test_row_separators() {
        let grid = Grid::with_roles(2, 2, 0, 0).expect("valid grid");
        let rendered = render_grid(&grid);

        assert_eq!(rendered.len(), 7);
        assert_eq!(rendered.get(3).map(String::as_str), Some("─────┼─────"));
        assert!(rendered.iter().all(|line| line.chars().count() == 11));
        assert_ne!(rendered.last().map(String::as_str), Some("─────┼─────"));
    }

    #[test]
    fn test_default_map_size() {
        let mut grid = Grid::with_roles(10, 5, 0, 4).expect("valid grid");
        for cell in grid.cells_mut() {
            cell.clear();
        }

        let rendered = render_grid(&grid);
        assert_eq!(rendered.len(), 19);
        assert!(rendered.iter().all(|line| line.chars().count() == 59));
    }
}
