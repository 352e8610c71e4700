//! Interactive row operations on a held matrix, ending with a reduction.
//!
//! The menu reads whitespace-separated tokens, so a whole command can be typed
//! on one line (`2 1 3 -0.5`) or answered prompt by prompt.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::EliminationConfig;
use crate::error::{EchelonError, Result};
use crate::matrix::echelon::{verdict, Verdict};
use crate::matrix::elimination::{to_reduced_echelon, EliminationReport};
use crate::matrix::matrix_real::{MatrixReal, RealElement};

/// A user-issued operation. Row indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command<T> {
    Scale { row: usize, scalar: T },
    AddMultiple { target: usize, source: usize, scalar: T },
    Reduce,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Updated,
    Reduced {
        report: EliminationReport<T>,
        verdict: Verdict,
    },
}

pub struct Session<T> {
    matrix: MatrixReal<T>,
    config: EliminationConfig<T>,
}

impl<T: RealElement> Session<T> {
    pub fn new(matrix: MatrixReal<T>, config: EliminationConfig<T>) -> Self {
        Session { matrix, config }
    }

    pub fn matrix(&self) -> &MatrixReal<T> {
        &self.matrix
    }

    pub fn into_matrix(self) -> MatrixReal<T> {
        self.matrix
    }

    /// Apply one command. A failing row operation leaves the matrix unchanged.
    pub fn apply(&mut self, command: Command<T>) -> Result<Outcome<T>> {
        log::debug!("applying {:?}", command);

        match command {
            Command::Scale { row, scalar } => {
                self.matrix.scale_row(row, scalar)?;
                Ok(Outcome::Updated)
            }
            Command::AddMultiple {
                target,
                source,
                scalar,
            } => {
                self.matrix.add_scaled_row(target, source, scalar)?;
                Ok(Outcome::Updated)
            }
            Command::Reduce => {
                let report = to_reduced_echelon(&mut self.matrix, &self.config)?;
                let verdict = verdict(&self.matrix, &self.config);
                Ok(Outcome::Reduced { report, verdict })
            }
        }
    }
}

// cin-style token stream over a line-based reader
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
    line: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Tokens {
            input,
            pending: VecDeque::new(),
            line: 0,
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut buf = String::new();
            if self.input.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.pending.extend(buf.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    fn next_value<V: FromStr>(&mut self) -> Result<Option<V>> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        token.parse().map(Some).map_err(|_| EchelonError::Parse {
            line: self.line,
            token,
        })
    }

    // 1-based at the prompt
    fn next_row(&mut self) -> Result<Option<usize>> {
        match self.next_value::<usize>()? {
            Some(0) => Err(EchelonError::Parse {
                line: self.line,
                token: "0".into(),
            }),
            row => Ok(row.map(|r| r - 1)),
        }
    }

    /// Drop the rest of the current line after a bad token.
    fn discard_line(&mut self) {
        self.pending.clear();
    }
}

fn ask<W: Write>(output: &mut W, prompt: &str) -> Result<()> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    Ok(())
}

/// Read the next command; `Ok(None)` at end of input.
fn read_command<T: RealElement, R: BufRead, W: Write>(
    tokens: &mut Tokens<R>,
    output: &mut W,
) -> Result<Option<Command<T>>> {
    let Some(operation) = tokens.next_token()? else {
        return Ok(None);
    };

    let command = match operation.as_str() {
        "1" => {
            ask(output, "Enter row number: ")?;
            let Some(row) = tokens.next_row()? else {
                return Ok(None);
            };
            ask(output, "Enter scalar value: ")?;
            let Some(scalar) = tokens.next_value()? else {
                return Ok(None);
            };
            Command::Scale { row, scalar }
        }
        "2" => {
            ask(output, "Enter first row number: ")?;
            let Some(target) = tokens.next_row()? else {
                return Ok(None);
            };
            ask(output, "Enter second row number: ")?;
            let Some(source) = tokens.next_row()? else {
                return Ok(None);
            };
            ask(output, "Enter scalar value: ")?;
            let Some(scalar) = tokens.next_value()? else {
                return Ok(None);
            };
            Command::AddMultiple {
                target,
                source,
                scalar,
            }
        }
        "3" => Command::Reduce,
        _ => return Err(EchelonError::InvalidOperation(operation)),
    };

    Ok(Some(command))
}

/// Print the reduced matrix followed by both verdicts.
pub fn write_reduction<T: RealElement, W: Write>(
    output: &mut W,
    matrix: &MatrixReal<T>,
    verdict: &Verdict,
) -> Result<()> {
    writeln!(output, "\nMatrix in Reduced Row Echelon Form:")?;
    write!(output, "{}", matrix)?;

    let negation = |holds: bool| if holds { "" } else { "not " };
    writeln!(
        output,
        "\nThe matrix is {}in Row Echelon Form.",
        negation(verdict.row_echelon)
    )?;
    writeln!(
        output,
        "\nThe matrix is {}in Reduced Row Echelon Form.",
        negation(verdict.reduced_row_echelon)
    )?;
    Ok(())
}

/// Run the menu until the user picks the reduction (or input ends, which
/// reduces as well). Bad input is reported and the menu continues.
pub fn run_session<T: RealElement, R: BufRead, W: Write>(
    session: &mut Session<T>,
    input: R,
    output: &mut W,
) -> Result<Verdict> {
    let mut tokens = Tokens::new(input);

    writeln!(output, "Original Matrix:")?;
    write!(output, "{}", session.matrix())?;
    writeln!(output, "\nSelect an operation:")?;
    writeln!(output, "1. Multiply a row by a scalar")?;
    writeln!(output, "2. Add a multiple of one row to another row")?;
    writeln!(output, "3. Convert to Reduced Row Echelon Form")?;
    ask(output, "Enter operation number (1, 2, or 3): ")?;

    loop {
        let command = match read_command(&mut tokens, output) {
            Ok(Some(command)) => command,
            Ok(None) => {
                log::info!("end of input, reducing");
                Command::Reduce
            }
            Err(err @ EchelonError::Console(_)) => return Err(err),
            Err(err) => {
                log::warn!("{}", err);
                tokens.discard_line();
                match err {
                    EchelonError::InvalidOperation(_) => {
                        writeln!(output, "Invalid operation. Please try again.")?
                    }
                    _ => writeln!(output, "Error: {}", err)?,
                }
                ask(output, "\nSelect the next operation (1, 2, or 3): ")?;
                continue;
            }
        };

        if command == Command::Reduce {
            writeln!(output, "\nConverting to Reduced Row Echelon Form...")?;
        }

        match session.apply(command) {
            Ok(Outcome::Updated) => {
                writeln!(output, "\nMatrix after the operation:")?;
                write!(output, "{}", session.matrix())?;
            }
            Ok(Outcome::Reduced { verdict, .. }) => {
                write_reduction(output, session.matrix(), &verdict)?;
                return Ok(verdict);
            }
            Err(err) => {
                log::warn!("{}", err);
                writeln!(output, "Error: {}", err)?;
            }
        }

        ask(output, "\nSelect the next operation (1, 2, or 3): ")?;
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
