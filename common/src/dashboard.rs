#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum SectionBody {
    Text(Vec<String>),
    Table(Table),
    Metrics(Vec<Metric>),
    Heatmap(Heatmap),
    Error(String),
}

impl SectionBody {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub label: String,
    pub help: Option<String>,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColumnKind {
    Text,
    Number,
    Percent,
    /// Rendered as a bar filled proportionally between `min` and `max`.
    Progress { min: u64, max: u64 },
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Cell {
    Text(String),
    Int(u64),
    Float(f64),
}

impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Text(t) => f.write_str(t),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{:.2}", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Heatmap {
    pub x_label: String,
    pub y_label: String,
    pub value_label: String,
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub max: u64,
    pub palette: crate::Palette,
    /// Row-major, `y.len()` rows of `x.len()` cells.
    pub cells: Vec<Vec<HeatmapCell>>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HeatmapCell {
    pub value: u64,
    pub color: String,
    pub tooltip: String,
}
