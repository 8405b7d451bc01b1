//! Configuration of [`CatchGame`](crate::CatchGame).
use crate::grid::Board;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use spiel_core::{GameParameters, SpielError};
use std::{
    convert::TryFrom,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 10;

/// Default number of columns.
pub const DEFAULT_COLUMNS: usize = 5;

/// Configuration of [`CatchGame`](crate::CatchGame).
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct CatchConfig {
    /// Rows of the board.
    pub rows: usize,

    /// Columns of the board.
    pub columns: usize,
}

impl Default for CatchConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl CatchConfig {
    /// Sets the number of rows.
    pub fn rows(mut self, v: usize) -> Self {
        self.rows = v;
        self
    }

    /// Sets the number of columns.
    pub fn columns(mut self, v: usize) -> Self {
        self.columns = v;
        self
    }

    /// Reads the integer parameters `rows` and `columns`, falling back to the
    /// defaults for missing ones.
    ///
    /// Non-positive values and values of another type are rejected.
    pub fn from_params(params: &GameParameters) -> Result<Self, SpielError> {
        let rows = positive(params, "rows", DEFAULT_ROWS)?;
        let columns = positive(params, "columns", DEFAULT_COLUMNS)?;
        Ok(Self { rows, columns })
    }

    /// Validated board of this configuration.
    pub fn board(&self) -> Result<Board, SpielError> {
        Board::new(self.rows, self.columns)
    }

    /// Constructs [`CatchConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`CatchConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

fn positive(params: &GameParameters, name: &str, default: usize) -> Result<usize, SpielError> {
    let v = params.get_int(name, default as i64)?;
    match usize::try_from(v) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(SpielError::InvalidConfiguration(format!(
            "`{}` must be positive, got {}",
            name, v
        ))),
    }
}
