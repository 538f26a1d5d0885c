//! Generate mazes by carving a seeded random walk into a wall-filled grid
//!
//! The walk starts at a random open cell and repeatedly samples one action
//! from a weighted table: continue along the current heading, or pick a new
//! heading. Carving stops once a target fraction of the grid is open. The
//! whole run is determined by the seed, so the same inputs always produce
//! the same maze.
//!
//! # Examples
//! ```
//! use mazewalk::MazeGenerator;
//!
//! let grid = MazeGenerator::new(42).generate(20, 10, 25.0)?;
//! assert_eq!(grid.width(), 20);
//! assert_eq!(grid.height(), 10);
//! println!("{}", grid.render());
//! # Ok::<(), mazewalk::MazeError>(())
//! ```

mod generator;
mod grid;
mod rng;
mod walker;

pub use generator::MazeGenerator;
pub use grid::{Cell, FillTracker, Grid, Point};
pub use rng::RandomStream;
pub use walker::{Action, ActionWeights, Direction, PathWalker};

use thiserror::Error;

/// Errors reported by maze generation
///
/// All failures are detected before or during generation and returned
/// synchronously; no partial grid is ever handed out.
#[derive(Debug, Error)]
pub enum MazeError {
    /// Bad caller input: zero dimensions or an out-of-range fill target
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Bad generator setup: a weight table from which nothing can be drawn
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The walk hit its step cap before reaching the fill target
    #[error("target fill {target}% unreachable: reached {reached:.1}% after {steps} steps")]
    TargetUnreachable {
        /// Requested fill percentage
        target: f64,
        /// Fill percentage when the cap was hit
        reached: f64,
        /// Number of walk steps taken
        steps: usize,
    },
}
