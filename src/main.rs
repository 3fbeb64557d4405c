use std::io::{BufRead, Write};

use mazewalk::{Grid, MazeError, Solver, config::Config, find_path, generate_maze, logging};

fn prompt(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    message: &str,
) -> std::io::Result<String> {
    print!("{}", message);
    std::io::stdout().flush()?;
    let line = lines.next().transpose()?.unwrap_or_default();
    Ok(line.trim().to_string())
}

/// Reads `rows` lines of 0/1 codes typed by the user.
fn read_grid(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    rows: usize,
    cols: usize,
) -> std::io::Result<Result<Grid, MazeError>> {
    println!(
        "Enter {} rows of {} codes (0 - passage, 1 - wall):",
        rows, cols
    );
    let mut text = String::new();
    for _ in 0..rows {
        text.push_str(&lines.next().transpose()?.unwrap_or_default());
        text.push('\n');
    }
    let grid = text.parse::<Grid>().and_then(|grid| {
        if grid.rows() == rows && grid.cols() == cols {
            Ok(grid)
        } else {
            Err(MazeError::MalformedGrid(format!(
                "expected {}x{} cells, got {}x{}",
                rows,
                cols,
                grid.rows(),
                grid.cols()
            )))
        }
    });
    Ok(grid)
}

fn main() -> std::io::Result<()> {
    let config = Config::from_env();
    let _guard = logging::init(&config);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    let visual = prompt(
        &mut lines,
        "Show the maze and path as a picture? (y - yes, otherwise plain output): ",
    )?
    .eq_ignore_ascii_case("y");

    // Parse the input dimensions
    let dims = prompt(&mut lines, "Enter maze dimensions (rows columns): ")?
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<usize>().ok())
        .collect::<Vec<_>>();
    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for rows and columns.");
        return Ok(());
    }
    let (rows, cols) = (dims[0], dims[1]);

    let grid = match prompt(&mut lines, "Auto fill maze? (y - yes | n - no): ")?.as_str() {
        "y" | "Y" => generate_maze(rows, cols, config.seed),
        "n" | "N" => read_grid(&mut lines, rows, cols)?,
        _ => {
            eprintln!("Invalid selection.");
            return Ok(());
        }
    };
    let grid = match grid {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{}", err);
            return Ok(());
        }
    };
    tracing::info!("Maze ready, {}x{}", grid.rows(), grid.cols());

    if visual {
        print!("{}", grid);
    } else {
        print!("{}", grid.matrix());
    }

    println!("Select path finding algorithm:");
    Solver::ALL
        .iter()
        .enumerate()
        .for_each(|(i, solver)| println!("{}. {}", i + 1, solver));
    let solver = match prompt(&mut lines, "Algorithm number: ")?.as_str() {
        "1" => Solver::Wave,
        "2" => Solver::DepthFirst,
        "3" => Solver::Recursive,
        _ => {
            eprintln!("Invalid selection.");
            return Ok(());
        }
    };

    let path = match find_path(&grid, solver) {
        Ok(path) => path,
        Err(err) => {
            tracing::info!("{} failed: {}", solver, err);
            println!("No path found to the exit.");
            return Ok(());
        }
    };
    tracing::info!("{} found a path of {} steps", solver, path.len());

    if visual {
        match grid.mark_path(path) {
            Ok(marked) => print!("{}", marked),
            Err(err) => eprintln!("{}", err),
        }
    } else {
        println!("{}", path);
    }
    Ok(())
}
