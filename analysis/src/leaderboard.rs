use crate::load::{EventRow, LeaderboardRow};

/// Largest `total_score`, the upper end of the score bar.
pub fn max_score(rows: &[LeaderboardRow]) -> u64 {
    rows.iter().map(|r| r.total_score).max().unwrap_or(0)
}

/// Clamps at `u64::MAX` instead of overflowing.
pub fn total_score(rows: &[LeaderboardRow]) -> u64 {
    crate::saturating_sum(rows.iter().map(|r| r.total_score))
}

/// Highest score first, equal scores keep their input order.
pub fn sorted_by_score(rows: &[LeaderboardRow]) -> Vec<&LeaderboardRow> {
    let mut sorted: Vec<_> = rows.iter().collect();
    sorted.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    sorted
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTotals {
    pub player: String,
    pub windows: usize,
    pub score: u64,
    pub bonus_hits: u64,
    pub pop_count: u64,
}

/// Group-sum of the event rows per player, ordered by player name.
pub fn player_totals(events: &[EventRow]) -> Vec<PlayerTotals> {
    let mut totals = std::collections::BTreeMap::<&str, PlayerTotals>::new();

    for event in events {
        let entry = totals
            .entry(event.player.as_str())
            .or_insert_with(|| PlayerTotals {
                player: event.player.clone(),
                windows: 0,
                score: 0,
                bonus_hits: 0,
                pop_count: 0,
            });

        entry.windows += 1;
        entry.score = entry.score.saturating_add(event.score_in_window);
        entry.bonus_hits = entry.bonus_hits.saturating_add(u64::from(event.bonus_hits));
        entry.pop_count = entry.pop_count.saturating_add(u64::from(event.pop_count));
    }

    totals.into_values().collect()
}
