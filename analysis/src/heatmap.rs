use chrono::{NaiveDateTime, Timelike};

use crate::load::{EventRow, PopTrendRow};

pub const HOURS: usize = 24;

/// Values bucketed by a categorical label and the hour of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatMap {
    labels: Vec<String>,
    rows: Vec<[u64; HOURS]>,
    max_value: u64,
}

impl HeatMap {
    fn new() -> Self {
        Self {
            labels: Vec::new(),
            rows: Vec::new(),
            max_value: 0,
        }
    }

    /// Buckets `(label, timestamp, value)` entries by the hour of the timestamp.
    pub fn build<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, NaiveDateTime, u64)>,
    {
        let mut buckets = std::collections::BTreeMap::<&str, [u64; HOURS]>::new();
        for (label, timestamp, value) in entries {
            let row = buckets.entry(label).or_insert([0; HOURS]);
            let cell = &mut row[timestamp.hour() as usize];
            *cell = cell.saturating_add(value);
        }

        let mut heatmap = Self::new();
        for (label, row) in buckets {
            heatmap.max_value = heatmap.max_value.max(row.iter().copied().max().unwrap_or(0));
            heatmap.labels.push(label.to_owned());
            heatmap.rows.push(row);
        }

        tracing::trace!(
            "HeatMap with {} rows, max {}",
            heatmap.labels.len(),
            heatmap.max_value
        );

        heatmap
    }

    pub fn pops_by_player_hour<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a EventRow>,
    {
        Self::build(
            events
                .into_iter()
                .map(|e| (e.player.as_str(), e.window_start, u64::from(e.pop_count))),
        )
    }

    pub fn pops_by_color_hour(events: &[EventRow]) -> Self {
        Self::build(
            events
                .iter()
                .map(|e| (e.balloon_color.as_str(), e.window_start, u64::from(e.pop_count))),
        )
    }

    pub fn trend_pops_by_player_hour(trend: &[PopTrendRow]) -> Self {
        Self::build(
            trend
                .iter()
                .map(|t| (t.player.as_str(), t.window_start, u64::from(t.pop_count))),
        )
    }

    pub fn trend_score_by_player_hour(trend: &[PopTrendRow]) -> Self {
        Self::build(
            trend
                .iter()
                .map(|t| (t.player.as_str(), t.window_start, t.score_in_window)),
        )
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn rows(&self) -> &[[u64; HOURS]] {
        &self.rows
    }

    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn row(&self, label: &str) -> Option<&[u64; HOURS]> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|idx| &self.rows[idx])
    }

    pub fn total(&self) -> u64 {
        crate::saturating_sum(self.rows.iter().flat_map(|r| r.iter().copied()))
    }
}

impl core::fmt::Display for HeatMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.max_value.checked_ilog10().unwrap_or(0) as usize + 1;
        let label_size = self.labels.iter().map(|l| l.len()).max().unwrap_or(0);

        for (label, row) in self.labels.iter().zip(self.rows.iter()) {
            write!(f, "{: <width$} ", label, width = label_size)?;
            for cell in row.iter().copied() {
                write!(f, "{: ^width$} ", cell, width = size)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
