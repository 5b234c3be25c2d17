use super::{Cell, Neighborhood, RuleTable};

/// One row of an elementary automaton.
///
/// Generations are never edited in place: each one is derived fresh from
/// its predecessor. The two edge cells are always dead because a full
/// three-cell window cannot be formed around them.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Generation {
    cells: Vec<Cell>,
}

impl Generation {
    /// All-dead generation of the given width
    pub fn empty(width: usize) -> Self {
        Self {
            cells: vec![Cell::Dead; width],
        }
    }

    /// Starting row: a single live cell at `width / 2`.
    ///
    /// When the center falls on an edge (widths 1 and 2) the edge rule wins
    /// and the row stays empty.
    pub fn seed(width: usize) -> Self {
        let mut generation = Self::empty(width);
        let center = width / 2;
        if !generation.is_edge(center) {
            generation.cells[center] = Cell::Alive;
        }
        generation
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, x: usize) -> Option<Cell> {
        self.cells.get(x).copied()
    }

    fn is_edge(&self, x: usize) -> bool {
        x == 0 || x + 1 >= self.width()
    }

    /// Indices of live cells, left to right
    pub fn alive(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(x, _)| x)
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    /// Apply `rule` to every interior window and return the next row
    pub fn derive(&self, rule: &RuleTable) -> Self {
        let mut next = Self::empty(self.width());
        for (offset, window) in self.cells.windows(3).enumerate() {
            let neighborhood = Neighborhood::new(window[0], window[1], window[2]);
            next.cells[offset + 1] = rule.lookup(neighborhood);
        }
        next
    }
}
