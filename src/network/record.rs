use serde::Deserialize;
use std::fmt;

use super::Status;


/// A raw cell as it arrives from a tabular source.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Cell {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    /// A blank cell.
    Empty,
}

impl Cell {
    /// Numeric-looking identifiers from different sources must compare
    /// equal, so `7`, `7.0` and `"7"` all become `"7"`.
    pub fn canonical(&self) -> String {
        match self {
            Cell::Integer(int) => int.to_string(),
            Cell::Float(float) if float.is_finite() && float.fract() == 0.0
                && float.abs() < i64::MAX as f64 => (*float as i64).to_string(),
            Cell::Float(float) => float.to_string(),
            Cell::Bool(flag) => flag.to_string(),
            Cell::Text(text) => text.trim().to_owned(),
            Cell::Empty => String::new(),
        }
    }
    /// Text is never coerced, even when it looks like a number.
    pub fn number(&self) -> Option<f64> {
        match self {
            Cell::Integer(int) => Some(*int as f64),
            Cell::Float(float) if float.is_finite() => Some(*float),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Integer(int) => write!(f, "{}", int),
            Cell::Float(float) => write!(f, "{}", float),
            Cell::Bool(flag) => write!(f, "{}", flag),
            Cell::Text(text) => write!(f, "{:?}", text),
            Cell::Empty => write!(f, "empty"),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_owned())
    }
}

impl From<i32> for Cell {
    fn from(int: i32) -> Self {
        Cell::Integer(int.into())
    }
}

impl From<i64> for Cell {
    fn from(int: i64) -> Self {
        Cell::Integer(int)
    }
}

impl From<f64> for Cell {
    fn from(float: f64) -> Self {
        Cell::Float(float)
    }
}


#[derive(Clone, Debug, Deserialize)]
pub struct EdgeRecord {
    pub ends: [Cell; 2],
    pub cost: Cell,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub capacity: Option<f64>,
    #[serde(default)]
    pub occupancy: f64,
    #[serde(default)]
    pub idle: Option<f64>,
}

impl EdgeRecord {
    pub fn new<A: Into<Cell>, B: Into<Cell>, C: Into<Cell>>(a: A, b: B, cost: C) -> Self {
        EdgeRecord {
            ends: [a.into(), b.into()],
            cost: cost.into(),
            status: Status::Enabled,
            capacity: None,
            occupancy: 0.0,
            idle: None,
        }
    }
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = Some(capacity);
        self
    }
    pub fn with_occupancy(mut self, occupancy: f64) -> Self {
        self.occupancy = occupancy;
        self
    }
    pub fn with_idle(mut self, idle: f64) -> Self {
        self.idle = Some(idle);
        self
    }
    /// An explicit capacity wins; otherwise an idle column implies one.
    pub fn effective_capacity(&self) -> Option<f64> {
        self.capacity
            .or_else(|| self.idle.map(|idle| idle + self.occupancy))
    }
}
