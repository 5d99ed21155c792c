use analysis::heatmap::HeatMap;
use analysis::leaderboard;
use common::dashboard::{Cell, SectionBody, Table};

use super::{palette_control, section, PageContent, PageContext};
use crate::presenter;

pub fn render(ctx: &PageContext<'_>) -> PageContent {
    let palette = ctx.controls.palette();
    let trend = ctx.datasets.pop_trend();
    let events = ctx.datasets.color_trend();

    PageContent {
        controls: vec![palette_control(ctx.controls)],
        sections: vec![
            section(
                "Pops by Player and Hour",
                trend.as_ref().map(|t| {
                    SectionBody::Heatmap(presenter::hourly_heatmap(
                        &HeatMap::trend_pops_by_player_hour(t),
                        "player",
                        "pops",
                        palette,
                    ))
                }),
            ),
            section(
                "Score by Player and Hour",
                trend.as_ref().map(|t| {
                    SectionBody::Heatmap(presenter::hourly_heatmap(
                        &HeatMap::trend_score_by_player_hour(t),
                        "player",
                        "score",
                        palette,
                    ))
                }),
            ),
            section(
                "Pops by Color and Hour",
                events.as_ref().map(|e| {
                    SectionBody::Heatmap(presenter::hourly_heatmap(
                        &HeatMap::pops_by_color_hour(e),
                        "color",
                        "pops",
                        palette,
                    ))
                }),
            ),
            section(
                "Player Totals",
                events.as_ref().map(|e| {
                    let totals = leaderboard::player_totals(e);

                    SectionBody::Table(Table {
                        columns: vec![
                            presenter::text_column("Player"),
                            presenter::progress_column(
                                "Score",
                                "Score summed over all windows",
                                totals.iter().map(|t| t.score),
                            ),
                            presenter::number_column("Bonus Hits"),
                            presenter::number_column("Pops"),
                            presenter::number_column("Windows"),
                        ],
                        rows: totals
                            .into_iter()
                            .map(|t| {
                                vec![
                                    Cell::Text(t.player),
                                    Cell::Int(t.score),
                                    Cell::Int(t.bonus_hits),
                                    Cell::Int(t.pop_count),
                                    Cell::Int(t.windows as u64),
                                ]
                            })
                            .collect(),
                    })
                }),
            ),
        ],
    }
}
