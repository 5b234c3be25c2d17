use super::{Generation, RuleTable};

/// Every generation produced by one render, top row first.
pub struct Grid {
    width: usize,
    generations: Vec<Generation>,
}

impl Grid {
    /// Seed generation 0 and derive until `height` rows exist
    pub fn compute(rule: &RuleTable, width: usize, height: usize) -> Self {
        let generations = std::iter::successors(
            (height > 0).then(|| Generation::seed(width)),
            |previous| Some(previous.derive(rule)),
        )
        .take(height)
        .collect();

        Self { width, generations }
    }

    /// Width in cells and number of generations
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.generations.len())
    }

    pub fn generations(&self) -> &[Generation] {
        &self.generations
    }

    /// Generations that get painted. The last row is computed but
    /// left off the canvas.
    pub fn painted(&self) -> &[Generation] {
        let end = self.generations.len().saturating_sub(1);
        &self.generations[..end]
    }

    /// Iterate over live cells of the painted rows as (x, y)
    pub fn iter_painted_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.painted()
            .iter()
            .enumerate()
            .flat_map(|(y, generation)| generation.alive().map(move |x| (x, y)))
    }
}
