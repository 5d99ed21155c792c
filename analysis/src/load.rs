use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

pub const LEADERBOARD_FILE: &str = "game_events.leaderboard.csv";
pub const COLORED_POPS_FILE: &str = "game_events.player_colored_pops.csv";
pub const COLOR_TREND_FILE: &str = "game_events.player_color_trend.csv";
pub const POP_TREND_FILE: &str = "game_events.player_pop_trend.csv";
pub const BONUS_POPS_FILE: &str = "game_events.player_bonus_pops.csv";

/// 2^53, above this a float no longer holds every integer exactly.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file {path:?} does not exist")]
    Missing { path: PathBuf },
    #[error("reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("file {path:?} contains no data")]
    Empty { path: PathBuf },
    #[error("file {path:?} is missing column {column:?}")]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("file {path:?} row {row}: column {column:?} has invalid value {value:?}")]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("file {path:?} row {row}: window_start is after window_end")]
    WindowOrder { path: PathBuf, row: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    Invalid { column: &'static str, value: String },
    WindowOrder,
}

/// A row type that can be read from one of the dashboard CSV files.
pub trait Record: Sized {
    /// Declared columns, in the order `Fields` indexes them.
    const COLUMNS: &'static [&'static str];

    fn from_fields(fields: &Fields<'_>) -> Result<Self, RowError>;
}

pub struct Fields<'r> {
    record: &'r csv::StringRecord,
    positions: &'r [usize],
    columns: &'static [&'static str],
}

impl<'r> Fields<'r> {
    pub fn text(&self, idx: usize) -> &'r str {
        self.record.get(self.positions[idx]).unwrap_or("")
    }

    pub fn string(&self, idx: usize) -> String {
        self.text(idx).to_owned()
    }

    /// Counters may be written as `12.0` by the upstream pipeline.
    pub fn counter<T>(&self, idx: usize) -> Result<T, RowError>
    where
        T: TryFrom<u64> + core::str::FromStr,
    {
        let raw = self.text(idx);
        if let Ok(v) = raw.parse::<T>() {
            return Ok(v);
        }

        let float: f64 = raw.parse().map_err(|_| self.invalid(idx, raw))?;
        if !float.is_finite() || float < 0.0 || float.fract() != 0.0 || float >= MAX_EXACT_FLOAT {
            return Err(self.invalid(idx, raw));
        }
        T::try_from(float as u64).map_err(|_| self.invalid(idx, raw))
    }

    pub fn timestamp(&self, idx: usize) -> Result<NaiveDateTime, RowError> {
        let raw = self.text(idx);
        parse_timestamp(raw).ok_or_else(|| self.invalid(idx, raw))
    }

    fn invalid(&self, idx: usize, raw: &str) -> RowError {
        RowError::Invalid {
            column: self.columns[idx],
            value: raw.to_owned(),
        }
    }
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = chrono::DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.naive_utc());
    }

    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub player: String,
    pub total_score: u64,
}

impl Record for LeaderboardRow {
    const COLUMNS: &'static [&'static str] = &["player", "total_score"];

    fn from_fields(fields: &Fields<'_>) -> Result<Self, RowError> {
        Ok(Self {
            player: fields.string(0),
            total_score: fields.counter(1)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHitsRow {
    pub player: String,
    pub balloon_color: String,
    pub hits: u32,
}

impl Record for ColorHitsRow {
    const COLUMNS: &'static [&'static str] = &["player", "balloon_color", "hits"];

    fn from_fields(fields: &Fields<'_>) -> Result<Self, RowError> {
        Ok(Self {
            player: fields.string(0),
            balloon_color: fields.string(1),
            hits: fields.counter(2)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub player: String,
    pub balloon_color: String,
    pub window_start: NaiveDateTime,
    pub window_end: NaiveDateTime,
    pub pop_count: u32,
    pub score_in_window: u64,
    pub bonus_hits: u32,
}

impl Record for EventRow {
    const COLUMNS: &'static [&'static str] = &[
        "player",
        "balloon_color",
        "window_start",
        "window_end",
        "pop_count",
        "score_in_window",
        "bonus_hits",
    ];

    fn from_fields(fields: &Fields<'_>) -> Result<Self, RowError> {
        let window_start = fields.timestamp(2)?;
        let window_end = fields.timestamp(3)?;
        if window_start > window_end {
            return Err(RowError::WindowOrder);
        }

        Ok(Self {
            player: fields.string(0),
            balloon_color: fields.string(1),
            window_start,
            window_end,
            pop_count: fields.counter(4)?,
            score_in_window: fields.counter(5)?,
            bonus_hits: fields.counter(6)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopTrendRow {
    pub player: String,
    pub window_start: NaiveDateTime,
    pub window_end: NaiveDateTime,
    pub pop_count: u32,
    pub score_in_window: u64,
}

impl Record for PopTrendRow {
    const COLUMNS: &'static [&'static str] = &[
        "player",
        "window_start",
        "window_end",
        "pop_count",
        "score_in_window",
    ];

    fn from_fields(fields: &Fields<'_>) -> Result<Self, RowError> {
        let window_start = fields.timestamp(1)?;
        let window_end = fields.timestamp(2)?;
        if window_start > window_end {
            return Err(RowError::WindowOrder);
        }

        Ok(Self {
            player: fields.string(0),
            window_start,
            window_end,
            pop_count: fields.counter(3)?,
            score_in_window: fields.counter(4)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusRow {
    pub player: String,
    pub bonus_hits: u32,
}

impl Record for BonusRow {
    const COLUMNS: &'static [&'static str] = &["player", "bonus_hits"];

    fn from_fields(fields: &Fields<'_>) -> Result<Self, RowError> {
        Ok(Self {
            player: fields.string(0),
            bonus_hits: fields.counter(1)?,
        })
    }
}

fn is_index_artifact(header: &str) -> bool {
    header.is_empty() || header.starts_with("Unnamed")
}

#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_csv<R, P>(path: P) -> Result<Vec<R>, LoadError>
where
    R: Record,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(LoadError::Missing {
                path: path.to_owned(),
            });
        }
        Err(e) => {
            return Err(LoadError::Io {
                path: path.to_owned(),
                source: e,
            });
        }
    };

    let rows = read_csv(path, file)?;
    tracing::debug!("Loaded {} rows", rows.len());

    Ok(rows)
}

/// Reads rows from any reader; `path` is only used for error reporting.
pub fn read_csv<R, I>(path: &Path, input: I) -> Result<Vec<R>, LoadError>
where
    R: Record,
    I: std::io::Read,
{
    let csv_error = |source| LoadError::Csv {
        path: path.to_owned(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().map_err(csv_error)?.clone();
    if headers.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_owned(),
        });
    }

    let skip_first = headers.get(0).map(is_index_artifact).unwrap_or(false);
    if skip_first {
        tracing::trace!("Dropping index column");
    }

    let positions = R::COLUMNS
        .iter()
        .map(|&column| {
            headers
                .iter()
                .enumerate()
                .skip(usize::from(skip_first))
                .find(|(_, h)| *h == column)
                .map(|(pos, _)| pos)
                .ok_or_else(|| LoadError::MissingColumn {
                    path: path.to_owned(),
                    column,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let fields = Fields {
            record: &record,
            positions: &positions,
            columns: R::COLUMNS,
        };

        let row = R::from_fields(&fields).map_err(|e| match e {
            RowError::Invalid { column, value } => LoadError::InvalidValue {
                path: path.to_owned(),
                row: idx + 1,
                column,
                value,
            },
            RowError::WindowOrder => LoadError::WindowOrder {
                path: path.to_owned(),
                row: idx + 1,
            },
        })?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_owned(),
        });
    }

    Ok(rows)
}
