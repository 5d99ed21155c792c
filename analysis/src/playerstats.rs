use crate::load::EventRow;

/// Sorted distinct player names.
pub fn players<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .map(|n| n.to_owned())
        .collect()
}

pub fn select<'e>(events: &'e [EventRow], player: &str) -> Vec<&'e EventRow> {
    events.iter().filter(|e| e.player == player).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSummary {
    pub player: String,
    pub windows: usize,
    pub total_pops: u64,
    pub total_score: u64,
    pub total_bonus_hits: u64,
    pub mean_pop_count: f64,
    pub mean_score: f64,
    pub favourite_color: Option<String>,
}

/// Metrics over the windows of a single player. A player without any
/// windows yields zero counts and zero means.
#[tracing::instrument(skip(events))]
pub fn summarize(events: &[EventRow], player: &str) -> PlayerSummary {
    let selected = select(events, player);
    tracing::debug!("Selected {} windows", selected.len());

    let windows = selected.len();
    let total_pops = crate::saturating_sum(selected.iter().map(|e| u64::from(e.pop_count)));
    let total_score = crate::saturating_sum(selected.iter().map(|e| e.score_in_window));
    let total_bonus_hits = crate::saturating_sum(selected.iter().map(|e| u64::from(e.bonus_hits)));

    let mean = |total: u64| {
        if windows == 0 {
            0.0
        } else {
            total as f64 / windows as f64
        }
    };

    let distribution = crate::colors::distribution(selected.iter().copied());
    let totals = crate::colors::color_totals(&distribution);
    let favourite_color = crate::colors::most_popular(&totals)
        .filter(|t| t.hits > 0)
        .map(|t| t.color.clone());

    PlayerSummary {
        player: player.to_owned(),
        windows,
        total_pops,
        total_score,
        total_bonus_hits,
        mean_pop_count: mean(total_pops),
        mean_score: mean(total_score),
        favourite_color,
    }
}

/// Rounds to two decimals for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round2(2.345678), 2.35);
        assert_eq!(round2(10.0 / 3.0), 3.33);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn players_sorted_and_distinct() {
        assert_eq!(
            players(["bob", "alice", "bob", "carol"]),
            vec!["alice".to_owned(), "bob".to_owned(), "carol".to_owned()]
        );
    }
}
