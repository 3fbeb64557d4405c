use std::time::Instant;

use mazewalk::{MazeError, Solver, config::Config, find_path, generate_maze, logging};

const SIZE: usize = 255;

/// Seed of the `iter`-th profiled maze, wrapping past `u64::MAX`.
fn iteration_seed(base: u64, iter: usize) -> u64 {
    base.wrapping_add(iter as u64)
}

fn main() -> Result<(), MazeError> {
    let config = Config::from_env();
    let _guard = logging::init(&config);

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);
    let seed = config.seed.unwrap_or(0);

    for iter in 0..num_iters {
        let started = Instant::now();
        let grid = generate_maze(SIZE, SIZE, Some(iteration_seed(seed, iter)))?;
        println!(
            "[{}] generate {}x{}: {:?}",
            iter,
            SIZE,
            SIZE,
            started.elapsed()
        );

        for solver in Solver::ALL {
            let started = Instant::now();
            let path = find_path(&grid, solver)?;
            println!(
                "[{}] {}: {} steps in {:?}",
                iter,
                solver,
                path.len(),
                started.elapsed()
            );
        }
    }
    tracing::info!("Profiled {} mazes of {}x{}", num_iters, SIZE, SIZE);
    Ok(())
}
