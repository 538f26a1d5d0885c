//! CLI for maze generation

use clap::Parser;
use mazewalk::MazeGenerator;
use rand::Rng;

/// Carve a random-walk maze and print it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    width: usize,

    /// Maze height in cells
    height: usize,

    /// Random seed; a fresh one is drawn when omitted
    seed: Option<u64>,

    /// Percentage of the maze to carve open
    #[arg(default_value_t = 10.0)]
    fill_percent: f64,
}

/// Generate a maze from the arguments, print parameters and the result
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let seed = args
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen_range(0..=999_999));

    println!(
        "width: {}\nheight: {}\nseed: {}\nfill: {}%\n",
        args.width, args.height, seed, args.fill_percent
    );

    let grid = MazeGenerator::new(seed).generate(args.width, args.height, args.fill_percent)?;
    println!("{}", grid.render());
    Ok(())
}
