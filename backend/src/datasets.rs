use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use analysis::load::{self, BonusRow, ColorHitsRow, EventRow, LeaderboardRow, PopTrendRow};
use analysis::LoadError;

/// The CSV snapshots in one data directory.
///
/// Only the color trend file is shared by several pages, so it is the one
/// dataset that can be kept around after the first successful load.
pub struct Datasets {
    dir: PathBuf,
    color_trend: Option<Mutex<Option<Arc<Vec<EventRow>>>>>,
}

impl Datasets {
    pub fn new<P>(dir: P, cache: bool) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            dir: dir.into(),
            color_trend: cache.then(|| Mutex::new(None)),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    pub fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, LoadError> {
        load::load_csv(self.path(load::LEADERBOARD_FILE))
    }

    pub fn colored_pops(&self) -> Result<Vec<ColorHitsRow>, LoadError> {
        load::load_csv(self.path(load::COLORED_POPS_FILE))
    }

    pub fn pop_trend(&self) -> Result<Vec<PopTrendRow>, LoadError> {
        load::load_csv(self.path(load::POP_TREND_FILE))
    }

    pub fn bonus_pops(&self) -> Result<Vec<BonusRow>, LoadError> {
        load::load_csv(self.path(load::BONUS_POPS_FILE))
    }

    /// Failed loads are not cached, the next render tries again.
    pub fn color_trend(&self) -> Result<Arc<Vec<EventRow>>, LoadError> {
        let cache = match &self.color_trend {
            Some(c) => c,
            None => return load::load_csv(self.path(load::COLOR_TREND_FILE)).map(Arc::new),
        };

        let mut cached = cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(rows) = cached.as_ref() {
            tracing::trace!("Using cached color trend");
            return Ok(rows.clone());
        }

        let rows = Arc::new(load::load_csv(self.path(load::COLOR_TREND_FILE))?);
        *cached = Some(rows.clone());

        Ok(rows)
    }
}
