use more_asserts::assert_gt;

/**
 * Fixed-column grid of subplot slots. Rows are added until every palette of a
 * batch has a slot; trailing slots in the final row stay blank.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub occupied: usize,
}

impl GridLayout {
    pub fn new(occupied: usize, columns: usize) -> GridLayout {
        assert_gt!(columns, 0);
        assert_gt!(occupied, 0, "a grid needs at least one subplot");
        GridLayout {
            columns,
            rows: (occupied + columns - 1) / columns,
            occupied,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_blank(&self, slot: usize) -> bool {
        slot >= self.occupied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_round_up() {
        assert_eq!(GridLayout::new(1, 5).rows, 1);
        assert_eq!(GridLayout::new(5, 5).rows, 1);
        assert_eq!(GridLayout::new(6, 5).rows, 2);
        assert_eq!(GridLayout::new(100, 5).rows, 20);
        assert_eq!(GridLayout::new(199, 5).rows, 40);
    }

    #[test]
    fn test_trailing_slots_are_blank() {
        let grid = GridLayout::new(7, 5);
        assert_eq!(grid.slot_count(), 10);

        let blank: Vec<usize> = (0..grid.slot_count())
            .filter(|&slot| grid.is_blank(slot))
            .collect();
        assert_eq!(blank, vec![7, 8, 9]);
    }

    #[test]
    #[should_panic]
    fn test_empty_grid_is_rejected() {
        GridLayout::new(0, 5);
    }
}
