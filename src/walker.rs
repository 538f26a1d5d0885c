//! Path walking: directions, actions, and the carving state machine

use crate::grid::{FillTracker, Grid, Point};
use crate::rng::RandomStream;
use crate::MazeError;

/// Heading of the ongoing walk
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit offset `(dx, dy)` of this heading
    fn offset(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// One step decision sampled each generation iteration
///
/// `Stop`, `Fork` and `MakeRoom` are inert: they carry zero weight in the
/// default table and their transitions change nothing. They are kept as
/// extension points for branching and room carving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Stop,
    Fork,
    Continue,
    ChangeDir,
    MakeRoom,
}

impl Action {
    /// Stable sampling order of the action set
    pub const ALL: [Action; 5] = [
        Action::Stop,
        Action::Fork,
        Action::Continue,
        Action::ChangeDir,
        Action::MakeRoom,
    ];
}

/// Relative odds of each action
///
/// The weights are relative to each other: if `Stop` is 1, `Fork` is 5
/// and `Continue` is 2, then `Stop` is drawn 1 time in 8. The table is
/// plain data so callers can reconfigure the walk without touching the
/// sampling code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionWeights {
    weights: [u32; Action::ALL.len()],
}

impl Default for ActionWeights {
    /// Continue-heavy odds with occasional direction changes; the inert
    /// actions are weighted zero.
    fn default() -> Self {
        let mut table = ActionWeights {
            weights: [0; Action::ALL.len()],
        };
        table.set(Action::Continue, 15);
        table.set(Action::ChangeDir, 5);
        table
    }
}

impl ActionWeights {
    pub fn set(&mut self, action: Action, weight: u32) {
        self.weights[action as usize] = weight;
    }

    pub fn weight(&self, action: Action) -> u32 {
        self.weights[action as usize]
    }

    fn total(&self) -> u64 {
        self.weights.iter().map(|w| u64::from(*w)).sum()
    }

    /// Reject a table from which no action can ever be drawn
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.total() == 0 {
            return Err(MazeError::InvalidConfiguration(
                "action weights sum to zero, no action can be drawn".into(),
            ));
        }
        Ok(())
    }

    /// Sample one action according to the weights
    ///
    /// Draws uniformly from `[1, total]` and walks the action set in
    /// declaration order, subtracting each weight from the draw until
    /// the remainder fits within the current action's weight.
    pub fn sample(&self, rng: &mut RandomStream) -> Result<Action, MazeError> {
        self.validate()?;
        let total = self.total();
        let mut val = rng.range_inclusive(1, total as usize) as u64;
        for action in Action::ALL {
            let odds = u64::from(self.weight(action));
            if val <= odds {
                return Ok(action);
            }
            val -= odds;
        }
        unreachable!("draw exceeded the sum of the action weights")
    }
}

/// Carving state machine: current position and heading
///
/// Applies one [Action] per invocation against a grid and its fill
/// tracker. The walker never steps outside the grid, whatever the
/// weight configuration drives it to attempt.
#[derive(Clone, Copy, Debug)]
pub struct PathWalker {
    pub position: Point,
    pub direction: Direction,
}

impl PathWalker {
    pub fn new(position: Point, direction: Direction) -> Self {
        PathWalker {
            position,
            direction,
        }
    }

    /// Apply a single action
    ///
    /// - `Continue` advances one cell along the current heading. A move
    ///   that would leave the grid is a no-op: the walker stays put and
    ///   the caller samples a fresh action next iteration. Stepping onto
    ///   a wall carves it and bumps the tracker; stepping onto an
    ///   already-open cell moves without changing the fill count.
    /// - `ChangeDir` resamples the heading uniformly, in place.
    /// - `Stop`, `Fork` and `MakeRoom` change nothing.
    pub fn step(
        &mut self,
        action: Action,
        grid: &mut Grid,
        tracker: &mut FillTracker,
        rng: &mut RandomStream,
    ) {
        match action {
            Action::Continue => {
                if let Some(next) = self.advance_target(grid) {
                    self.position = next;
                    if grid.carve(next) {
                        tracker.record_carve();
                    }
                }
            }
            Action::ChangeDir => {
                self.direction = rng.direction();
            }
            Action::Stop | Action::Fork | Action::MakeRoom => {}
        }
    }

    /// Cell one step along the heading, or `None` at the grid edge
    fn advance_target(&self, grid: &Grid) -> Option<Point> {
        let (dx, dy) = self.direction.offset();
        let x = self.position.x.checked_add_signed(dx)?;
        let y = self.position.y.checked_add_signed(dy)?;
        if x < grid.width() && y < grid.height() {
            Some(Point { x, y })
        } else {
            None
        }
    }
}
