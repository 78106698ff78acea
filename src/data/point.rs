//! Point and series types.
//!
//! A [`Series`] is stored as one vector of [`Point`]s so the x and y columns can
//! never diverge in length. Values carry whatever the ingestion path produced:
//! manual entry always yields numbers (possibly NaN), CSV cells keep the type
//! inferred for them, and absent cells are [`Value::Missing`].

use std::fmt;

/// A single plotted coordinate value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Text(String),
    /// Absent or empty cell.
    Missing,
}

impl Value {
    /// Plottable view of the value: finite numbers only. NaN, infinities, text,
    /// bools and missing cells return `None` and leave a gap in the chart.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// Whether the value is a NaN number.
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(v) if v.is_nan())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) if v.is_infinite() => {
                if *v > 0.0 {
                    f.write_str("Infinity")
                } else {
                    f.write_str("-Infinity")
                }
            }
            Value::Number(v) => f.write_str(&format_number(*v)),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => f.write_str(s),
            Value::Missing => Ok(()),
        }
    }
}

/// Shortest round-trip text for a finite or NaN number; exponent notation
/// below 1e-6 and from 1e21 up, with an explicit `+` on positive exponents.
fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let mag = v.abs();
    if mag < 1e-6 || mag >= 1e21 {
        let text = format!("{v:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        format!("{v}")
    }
}

/// One (x, y) pair. Identity is its position in the series.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: Value,
    pub y: Value,
}

impl Point {
    pub fn new(x: impl Into<Value>, y: impl Into<Value>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}, Y: {}", self.x, self.y)
    }
}

/// Ordered sequence of points; insertion order defines plotted order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Parallel-array view of the x column.
    pub fn x_values(&self) -> Vec<Value> {
        self.points.iter().map(|p| p.x.clone()).collect()
    }

    /// Parallel-array view of the y column.
    pub fn y_values(&self) -> Vec<Value> {
        self.points.iter().map(|p| p.y.clone()).collect()
    }

    /// Build a series from two parallel columns; `None` if their lengths differ.
    pub fn from_columns(xs: Vec<Value>, ys: Vec<Value>) -> Option<Self> {
        if xs.len() != ys.len() {
            return None;
        }
        Some(xs.into_iter().zip(ys).map(|(x, y)| Point { x, y }).collect())
    }
}

impl FromIterator<Point> for Series {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Point>> for Series {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
