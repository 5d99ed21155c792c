use crate::load::{BonusRow, EventRow};

pub fn total(rows: &[BonusRow]) -> u64 {
    crate::saturating_sum(rows.iter().map(|r| u64::from(r.bonus_hits)))
}

pub fn max_bonus(rows: &[BonusRow]) -> u64 {
    rows.iter().map(|r| u64::from(r.bonus_hits)).max().unwrap_or(0)
}

/// Player with the most bonus hits, ties go to the smallest name.
pub fn top(rows: &[BonusRow]) -> Option<&BonusRow> {
    rows.iter().max_by(|a, b| {
        a.bonus_hits
            .cmp(&b.bonus_hits)
            .then_with(|| b.player.cmp(&a.player))
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct BonusRate {
    pub player: String,
    pub bonus_hits: u64,
    pub pop_count: u64,
    /// Percentage of pops that were bonus hits.
    pub rate: f64,
}

pub fn rates(events: &[EventRow]) -> Vec<BonusRate> {
    crate::leaderboard::player_totals(events)
        .into_iter()
        .map(|totals| BonusRate {
            rate: if totals.pop_count == 0 {
                0.0
            } else {
                totals.bonus_hits as f64 / totals.pop_count as f64 * 100.0
            },
            player: totals.player,
            bonus_hits: totals.bonus_hits,
            pop_count: totals.pop_count,
        })
        .collect()
}
