use std::collections::BTreeMap;

use crate::load::{ColorHitsRow, EventRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHits {
    pub player: String,
    pub color: String,
    pub hits: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorShare {
    pub player: String,
    pub color: String,
    pub hits: u64,
    /// Share of the player's hits, not rounded.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTotal {
    pub color: String,
    pub hits: u64,
}

fn group<'a, I>(entries: I) -> Vec<ColorHits>
where
    I: Iterator<Item = (&'a str, &'a str, u64)>,
{
    let mut grouped = BTreeMap::<(&str, &str), u64>::new();
    for (player, color, hits) in entries {
        let entry = grouped.entry((player, color)).or_default();
        *entry = entry.saturating_add(hits);
    }

    grouped
        .into_iter()
        .map(|((player, color), hits)| ColorHits {
            player: player.to_owned(),
            color: color.to_owned(),
            hits,
        })
        .collect()
}

/// Sums `pop_count` per `(player, color)`.
pub fn distribution<'a, I>(events: I) -> Vec<ColorHits>
where
    I: IntoIterator<Item = &'a EventRow>,
{
    group(events.into_iter().map(|e| {
        (
            e.player.as_str(),
            e.balloon_color.as_str(),
            u64::from(e.pop_count),
        )
    }))
}

/// Same shape as [`distribution`], from the pre-aggregated hits file.
pub fn from_hits(rows: &[ColorHitsRow]) -> Vec<ColorHits> {
    group(
        rows.iter()
            .map(|r| (r.player.as_str(), r.balloon_color.as_str(), u64::from(r.hits))),
    )
}

pub fn shares(distribution: &[ColorHits]) -> Vec<ColorShare> {
    let mut player_totals = BTreeMap::<&str, u64>::new();
    for entry in distribution {
        let total = player_totals.entry(entry.player.as_str()).or_default();
        *total = total.saturating_add(entry.hits);
    }

    distribution
        .iter()
        .map(|entry| {
            let total = player_totals
                .get(entry.player.as_str())
                .copied()
                .unwrap_or(0);
            let percentage = if total == 0 {
                0.0
            } else {
                entry.hits as f64 / total as f64 * 100.0
            };

            ColorShare {
                player: entry.player.clone(),
                color: entry.color.clone(),
                hits: entry.hits,
                percentage,
            }
        })
        .collect()
}

pub fn color_totals(distribution: &[ColorHits]) -> Vec<ColorTotal> {
    let mut totals = BTreeMap::<&str, u64>::new();
    for entry in distribution {
        let total = totals.entry(entry.color.as_str()).or_default();
        *total = total.saturating_add(entry.hits);
    }

    totals
        .into_iter()
        .map(|(color, hits)| ColorTotal {
            color: color.to_owned(),
            hits,
        })
        .collect()
}

/// Most hits wins; on a tie the lexicographically smallest color.
pub fn most_popular(totals: &[ColorTotal]) -> Option<&ColorTotal> {
    totals
        .iter()
        .max_by(|a, b| a.hits.cmp(&b.hits).then_with(|| b.color.cmp(&a.color)))
}

/// Fewest hits wins; on a tie the lexicographically smallest color.
pub fn least_popular(totals: &[ColorTotal]) -> Option<&ColorTotal> {
    totals
        .iter()
        .min_by(|a, b| a.hits.cmp(&b.hits).then_with(|| a.color.cmp(&b.color)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(color: &str, hits: u64) -> ColorTotal {
        ColorTotal {
            color: color.to_owned(),
            hits,
        }
    }

    #[test]
    fn ties_break_on_color_name() {
        let totals = vec![total("red", 5), total("blue", 5), total("green", 1), total("amber", 1)];

        assert_eq!(most_popular(&totals).map(|t| t.color.as_str()), Some("blue"));
        assert_eq!(least_popular(&totals).map(|t| t.color.as_str()), Some("amber"));
    }

    #[test]
    fn no_colors() {
        assert_eq!(most_popular(&[]), None);
        assert_eq!(least_popular(&[]), None);
    }

    #[test]
    fn zero_hit_player_gets_zero_shares() {
        let dist = vec![ColorHits {
            player: "A".to_owned(),
            color: "red".to_owned(),
            hits: 0,
        }];

        assert_eq!(shares(&dist)[0].percentage, 0.0);
    }
}
