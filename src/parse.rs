use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{EchelonError, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::{MatrixReal, RealElement};

fn parse_token<T: FromStr>(token: &str, line: usize) -> Result<T> {
    token.parse().map_err(|_| EchelonError::Parse {
        line,
        token: token.to_owned(),
    })
}

/// One row per line, numbers separated by whitespace. Blank lines are ignored.
pub fn parse_matrix<T: RealElement>(text: &str) -> Result<MatrixReal<T>> {
    let mut lines = vec![];

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| parse_token(token, index + 1))
            .collect::<Result<Vec<T>>>()?;
        lines.push(row);
    }

    MatrixReal::from_list(lines)
}

/// Every number in `text`, in reading order, regardless of line breaks.
pub fn parse_values<T: FromStr>(text: &str) -> Result<Vec<T>> {
    text.lines()
        .enumerate()
        .flat_map(|(index, line)| {
            line.split_whitespace()
                .map(move |token| parse_token(token, index + 1))
        })
        .collect()
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| EchelonError::Io {
        path: path.to_owned(),
        source,
    })
}

pub fn read_matrix_file<T: RealElement>(path: &Path) -> Result<MatrixReal<T>> {
    let matrix = parse_matrix(&read_text(path)?)?;
    log::info!(
        "read {}x{} matrix from {}",
        matrix.rows(),
        matrix.cols(),
        path.display()
    );
    Ok(matrix)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
