use analysis::leaderboard;
use analysis::load::LeaderboardRow;
use common::dashboard::{Cell, SectionBody, Table};

use super::{section, PageContent, PageContext};
use crate::presenter;

pub fn render(ctx: &PageContext<'_>) -> PageContent {
    let rows = ctx.datasets.leaderboard();

    PageContent {
        controls: Vec::new(),
        sections: vec![
            section("Leaderboard", rows.as_ref().map(|rows| table(rows))),
            section("Summary", rows.as_ref().map(|rows| summary(rows))),
        ],
    }
}

/// Rows stay in file order.
pub fn table(rows: &[LeaderboardRow]) -> SectionBody {
    SectionBody::Table(Table {
        columns: vec![
            presenter::text_column("Player"),
            presenter::progress_column_to(
                "Total Score",
                "Player's total score with visual progress bar",
                leaderboard::max_score(rows),
            ),
        ],
        rows: rows
            .iter()
            .map(|r| vec![presenter::text(&r.player), Cell::Int(r.total_score)])
            .collect(),
    })
}

fn summary(rows: &[LeaderboardRow]) -> SectionBody {
    let top = leaderboard::sorted_by_score(rows)
        .first()
        .map(|r| format!("{} ({})", r.player, presenter::format_grouped(r.total_score)))
        .unwrap_or_else(|| "-".to_owned());

    SectionBody::Metrics(vec![
        presenter::metric("Players", presenter::format_grouped(rows.len() as u64)),
        presenter::metric("Top Player", top),
        presenter::metric(
            "Total Score",
            presenter::format_grouped(leaderboard::total_score(rows)),
        ),
    ])
}
