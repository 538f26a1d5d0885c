//! Generation loop: seed the grid, walk until the target fill is reached

use crate::grid::{FillTracker, Grid, Point};
use crate::rng::RandomStream;
use crate::walker::{ActionWeights, PathWalker};
use crate::MazeError;

/// Maze generator driving a single seeded random walk
///
/// Owns the random stream and the action odds; each [Self::generate]
/// call produces an independent grid. Two generators built with the
/// same seed and weights produce identical grids for identical calls.
pub struct MazeGenerator {
    random: RandomStream,
    weights: ActionWeights,
}

impl MazeGenerator {
    /// Upper bound on walk steps, per grid cell
    ///
    /// A random walk is not guaranteed to reach high fill targets in
    /// any fixed number of steps; the cap turns a walk that stalls
    /// into a [MazeError::TargetUnreachable] instead of a hang.
    const MAX_STEPS_PER_CELL: usize = 1000;

    pub fn new(seed: u64) -> Self {
        MazeGenerator {
            random: RandomStream::from_seed(seed),
            weights: ActionWeights::default(),
        }
    }

    /// Replace the default action odds
    pub fn with_weights(mut self, weights: ActionWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Generate a maze by carving passages until `target_fill_percent`
    /// of the grid is open
    ///
    /// The grid starts as all wall with a single open cell at a random
    /// position, which is also where the walk starts. Each iteration
    /// samples one action from the weight table and applies it; the
    /// loop stops as soon as the open fraction reaches the target.
    ///
    /// Errors with [MazeError::InvalidArgument] on zero dimensions or a
    /// target outside `[0, 100]`, with [MazeError::InvalidConfiguration]
    /// on a zero-sum weight table, and with
    /// [MazeError::TargetUnreachable] if the step cap is exhausted
    /// first. No grid is built on any of these failures.
    pub fn generate(
        &mut self,
        width: usize,
        height: usize,
        target_fill_percent: f64,
    ) -> Result<Grid, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidArgument(format!(
                "grid dimensions must be at least 1x1, got {width}x{height}"
            )));
        }
        if !(0.0..=100.0).contains(&target_fill_percent) {
            return Err(MazeError::InvalidArgument(format!(
                "target fill percent must be within [0, 100], got {target_fill_percent}"
            )));
        }
        self.weights.validate()?;

        let mut grid = Grid::new(width, height);
        let start = Point {
            x: self.random.range_inclusive(0, width - 1),
            y: self.random.range_inclusive(0, height - 1),
        };
        grid.carve(start);
        let mut tracker = FillTracker::new(1);
        let mut walker = PathWalker::new(start, self.random.direction());

        let total_cells = width * height;
        let max_steps = total_cells.saturating_mul(Self::MAX_STEPS_PER_CELL);
        let mut steps = 0;
        while tracker.percent_full(total_cells) < target_fill_percent {
            if steps >= max_steps {
                return Err(MazeError::TargetUnreachable {
                    target: target_fill_percent,
                    reached: tracker.percent_full(total_cells),
                    steps,
                });
            }
            let action = self.weights.sample(&mut self.random)?;
            walker.step(action, &mut grid, &mut tracker, &mut self.random);
            steps += 1;
            debug_assert_eq!(tracker.open_count(), grid.count_open());
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::MazeGenerator;
    use crate::grid::{Cell, Point};
    use crate::walker::{Action, ActionWeights};
    use crate::MazeError;

    #[test]
    fn generated_grid_has_requested_dimensions() {
        let grid = MazeGenerator::new(42).generate(5, 5, 10.0).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 5);
        // 10% of 25 cells, so at least 3 open once the target is crossed
        assert!(grid.count_open() >= 3);
    }

    #[test]
    fn seed_cell_alone_satisfies_tiny_targets() {
        // 1 of 25 cells is 4%, at target before any walk step
        let grid = MazeGenerator::new(42).generate(5, 5, 4.0).unwrap();
        assert_eq!(grid.count_open(), 1);
    }

    #[test]
    fn termination_is_a_postcondition() {
        for seed in 0..10 {
            let grid = MazeGenerator::new(seed).generate(8, 6, 40.0).unwrap();
            let open = grid.count_open();
            let percent = open as f64 / 48.0 * 100.0;
            assert!(percent >= 40.0, "seed {seed}: only {percent}% open");
            assert!(open <= 48);
        }
    }

    #[test]
    fn single_cell_grid_needs_no_walking() {
        let grid = MazeGenerator::new(7).generate(1, 1, 0.0).unwrap();
        assert_eq!(grid.get(Point { x: 0, y: 0 }), Cell::Open);
        assert_eq!(grid.count_open(), 1);
    }

    #[test]
    fn full_fill_completes_or_errs_within_the_cap() {
        match MazeGenerator::new(1).generate(10, 10, 100.0) {
            Ok(grid) => assert_eq!(grid.count_open(), 100),
            Err(MazeError::TargetUnreachable { .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_range_targets_are_rejected() {
        for target in [-1.0, 150.0] {
            assert!(matches!(
                MazeGenerator::new(5).generate(4, 4, target),
                Err(MazeError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        for (w, h) in [(0, 5), (5, 0), (0, 0)] {
            assert!(matches!(
                MazeGenerator::new(5).generate(w, h, 10.0),
                Err(MazeError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn zero_sum_weights_fail_before_generation() {
        let mut weights = ActionWeights::default();
        weights.set(Action::Continue, 0);
        weights.set(Action::ChangeDir, 0);
        assert!(matches!(
            MazeGenerator::new(5).with_weights(weights).generate(4, 4, 10.0),
            Err(MazeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn same_inputs_same_grid() {
        let a = MazeGenerator::new(42).generate(12, 9, 25.0).unwrap();
        let b = MazeGenerator::new(42).generate(12, 9, 25.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = MazeGenerator::new(1).generate(12, 9, 25.0).unwrap();
        let b = MazeGenerator::new(2).generate(12, 9, 25.0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn inert_actions_still_terminate() {
        // give the reserved actions most of the weight; progress is slower
        // but the walk still reaches a small target
        let mut weights = ActionWeights::default();
        weights.set(Action::Stop, 10);
        weights.set(Action::Fork, 10);
        weights.set(Action::MakeRoom, 10);
        let grid = MazeGenerator::new(3)
            .with_weights(weights)
            .generate(6, 6, 10.0)
            .unwrap();
        assert!(grid.count_open() >= 4);
    }
}
