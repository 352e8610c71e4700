use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;

use echelon::config::EliminationConfig;
use echelon::matrix::echelon::verdict;
use echelon::matrix::elimination::to_reduced_echelon;
use echelon::matrix::matrix::Matrix;
use echelon::matrix::matrix_gen::MatrixGen;
use echelon::matrix::transform::Layout;
use echelon::parse::{parse_values, read_matrix_file, read_text};
use echelon::session::{run_session, write_reduction, Session};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Entries with |v| <= tolerance count as zero (0 compares exactly)
    #[arg(
        short,
        long,
        env = "ECHELON_TOLERANCE",
        default_value_t = 0.0,
        value_parser = parse_tolerance,
        global = true
    )]
    tolerance: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reduce a matrix file to reduced row echelon form
    Reduce { file: PathBuf },
    /// Apply row operations from stdin, then reduce
    Interactive { file: PathBuf },
    /// Integer arithmetic on two square matrices followed by a scalar
    Arith {
        file: PathBuf,
        #[arg(short, long, default_value_t = 4)]
        size: usize,
    },
    /// Compose scale, translation and X/Y/Z rotations into a 4x4 matrix
    Transform {
        #[arg(
            long,
            num_args = 3,
            value_names = ["X", "Y", "Z"],
            allow_negative_numbers = true,
            default_values_t = [1.0, 1.0, 1.0]
        )]
        scale: Vec<f64>,
        #[arg(
            long,
            num_args = 3,
            value_names = ["X", "Y", "Z"],
            allow_negative_numbers = true,
            default_values_t = [0.0, 0.0, 0.0]
        )]
        translate: Vec<f64>,
        /// Rotation around the X axis, in radians
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        rotate_x: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        rotate_y: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        rotate_z: f64,
    },
}

fn parse_tolerance(text: &str) -> std::result::Result<f64, String> {
    let value: f64 = text.parse().map_err(|err| format!("{err}"))?;
    if !value.is_finite() {
        return Err(format!("{text} is not a finite number"));
    }
    Ok(value)
}

/// Number of values in one `size`x`size` matrix.
fn matrix_cells(size: usize) -> Result<usize> {
    size.checked_mul(size)
        .with_context(|| format!("a {size}x{size} matrix does not fit in memory"))
}

fn reduce(file: &Path, config: &EliminationConfig<f64>) -> Result<()> {
    let mut matrix = read_matrix_file::<f64>(file)?;
    let mut out = io::stdout().lock();

    writeln!(out, "Original Matrix:")?;
    write!(out, "{}", matrix)?;
    writeln!(out, "\nConverting to Reduced Row Echelon Form...")?;

    let report = to_reduced_echelon(&mut matrix, config)?;
    log::info!("rank {}, pivot columns {:?}", report.rank(), report.pivot_columns());
    write_reduction(&mut out, &matrix, &verdict(&matrix, config))?;
    Ok(())
}

fn interactive(file: &Path, config: &EliminationConfig<f64>) -> Result<()> {
    let matrix = read_matrix_file::<f64>(file)?;
    let mut session = Session::new(matrix, *config);
    run_session(&mut session, io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(())
}

fn arith(file: &Path, size: usize) -> Result<()> {
    let values: Vec<i64> = parse_values(&read_text(file)?)?;
    let cells = matrix_cells(size)?;
    if values.len().saturating_sub(1) / 2 < cells {
        anyhow::bail!(
            "{} holds {} values, expected two {}x{} matrices and a scalar",
            file.display(),
            values.len(),
            size,
            size
        );
    }

    let a = MatrixGen::from_values(size, size, &values[..cells])?;
    let b = MatrixGen::from_values(size, size, &values[cells..2 * cells])?;
    let scalar = values[2 * cells];
    let mut out = io::stdout().lock();

    if size == 2 {
        writeln!(out, "|A|:\n{}", a.checked_determinant()?)?;
    }
    write!(out, "AT:\n{}", a.transpose())?;
    if size == 2 {
        match a.checked_inverse() {
            Ok(inverse) => write!(out, "A-1:\n{}", inverse)?,
            Err(err) => writeln!(out, "A-1:\n{}", err)?,
        }
    } else {
        log::info!("determinant and inverse are only computed for 2x2 matrices");
    }
    write!(out, "Multiply A by scalar:\n{}", a.scale(scalar))?;
    write!(out, "A + B:\n{}", (&a + &b)?)?;
    write!(out, "A - B:\n{}", (&a - &b)?)?;
    write!(out, "A * B:\n{}", (&a * &b)?)?;
    write!(out, "B * A:\n{}", (&b * &a)?)?;
    write!(out, "Identity Matrix:\n{}", MatrixGen::<i64>::identity(size)?)?;
    Ok(())
}

fn transform(scale: &[f64], translate: &[f64], angles: [f64; 3]) -> Result<String> {
    let [sx, sy, sz] = <[f64; 3]>::try_from(scale).context("scale takes three factors")?;
    let [tx, ty, tz] = <[f64; 3]>::try_from(translate).context("translate takes three offsets")?;
    let [rx, ry, rz] = angles;

    let composed = MatrixGen::compose(&[
        MatrixGen::scaling(sx, sy, sz),
        MatrixGen::translation(tx, ty, tz),
        MatrixGen::rotation_x(rx),
        MatrixGen::rotation_y(ry),
        MatrixGen::rotation_z(rz),
    ])?;
    log::debug!("composed transformation:\n{composed}");

    Ok(format!(
        "Resultant Matrix (Column Major):\n{}\nResultant Matrix (Row Major):\n{}",
        composed.render(Layout::ColumnMajor),
        composed.render(Layout::RowMajor)
    ))
}

fn run(args: &Args) -> Result<()> {
    let config = EliminationConfig::with_tolerance(args.tolerance)?;

    match &args.command {
        Command::Reduce { file } => {
            reduce(file, &config).with_context(|| format!("reducing {}", file.display()))
        }
        Command::Interactive { file } => interactive(file, &config)
            .with_context(|| format!("interactive session on {}", file.display())),
        Command::Arith { file, size } => {
            arith(file, *size).with_context(|| format!("arithmetic on {}", file.display()))
        }
        Command::Transform {
            scale,
            translate,
            rotate_x,
            rotate_y,
            rotate_z,
        } => {
            let text = transform(scale, translate, [*rotate_x, *rotate_y, *rotate_z])?;
            io::stdout().lock().write_all(text.as_bytes())?;
            Ok(())
        }
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run(&args) {
        eprintln!("Error: {err:?}");
        process::exit(1)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
