//! Named game parameters.
use crate::error::SpielError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, fs::File, io::BufReader, path::Path};

/// Value of a game parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameParameter {
    /// Boolean value.
    Bool(bool),

    /// Integer value.
    Int(i64),

    /// Floating point value.
    Double(f64),

    /// Text value.
    String(String),
}

impl GameParameter {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Double(_) => "double",
            Self::String(_) => "string",
        }
    }
}

impl fmt::Display for GameParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
            Self::String(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for GameParameter {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for GameParameter {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for GameParameter {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for GameParameter {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for GameParameter {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for GameParameter {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

/// A set of named parameters used to construct a game.
///
/// It can be written in YAML as a plain mapping:
///
/// ```yaml
/// rows: 10
/// columns: 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameParameters(BTreeMap<String, GameParameter>);

impl GameParameters {
    /// Creates an empty set of parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<GameParameter>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a parameter, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<GameParameter>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the value of a parameter, if it is set.
    pub fn get(&self, name: &str) -> Option<&GameParameter> {
        self.0.get(name)
    }

    /// Returns an integer parameter, or `default` when it is not set.
    ///
    /// Fails if the parameter holds a value of another type.
    pub fn get_int(&self, name: &str, default: i64) -> Result<i64, SpielError> {
        match self.0.get(name) {
            None => Ok(default),
            Some(GameParameter::Int(v)) => Ok(*v),
            Some(other) => Err(SpielError::InvalidConfiguration(format!(
                "parameter `{}` must be an int, got {} `{}`",
                name,
                other.type_name(),
                other
            ))),
        }
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Constructs [`GameParameters`] from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let params = serde_yaml::from_reader(rdr)?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempdir::TempDir;

    #[test]
    fn test_get_int_default_and_value() {
        let params = GameParameters::new().with("rows", 7);
        assert_eq!(params.get_int("rows", 10), Ok(7));
        assert_eq!(params.get_int("columns", 5), Ok(5));
    }

    #[test]
    fn test_get_int_wrong_type() {
        let params = GameParameters::new().with("rows", "many");
        match params.get_int("rows", 10) {
            Err(SpielError::InvalidConfiguration(msg)) => assert!(msg.contains("rows")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_yaml() -> Result<()> {
        let params: GameParameters = serde_yaml::from_str("rows: 3\ncolumns: 4\nname: catch\n")?;
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("rows"), Some(&GameParameter::Int(3)));
        assert_eq!(params.get("name"), Some(&GameParameter::String("catch".into())));
        Ok(())
    }

    #[test]
    fn test_load_yaml_file() -> Result<()> {
        let dir = TempDir::new("game_parameters")?;
        let path = dir.path().join("game_parameters.yaml");
        File::create(&path)?.write_all(b"rows: 4\ncolumns: 2\nfast: true\n")?;

        let params = GameParameters::load(&path)?;
        assert_eq!(params.get_int("rows", 10)?, 4);
        assert_eq!(params.get_int("columns", 5)?, 2);
        assert_eq!(params.get("fast"), Some(&GameParameter::Bool(true)));
        assert!(!params.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        assert!(GameParameters::load("/nonexistent/game_parameters.yaml").is_err());
    }
}
