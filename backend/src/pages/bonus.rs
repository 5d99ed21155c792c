use analysis::bonus;
use analysis::load::BonusRow;
use common::dashboard::{Cell, SectionBody, Table};

use super::{section, PageContent, PageContext};
use crate::presenter;

pub fn render(ctx: &PageContext<'_>) -> PageContent {
    let rows = ctx.datasets.bonus_pops();
    let events = ctx.datasets.color_trend();

    PageContent {
        controls: Vec::new(),
        sections: vec![
            section("Bonus Hits", rows.as_ref().map(|r| table(r))),
            section("Summary", rows.as_ref().map(|r| summary(r))),
            section(
                "Bonus Rate",
                events.as_ref().map(|e| {
                    let rates = bonus::rates(e);

                    SectionBody::Table(Table {
                        columns: vec![
                            presenter::text_column("Player"),
                            presenter::number_column("Bonus Hits"),
                            presenter::number_column("Pops"),
                            presenter::percent_column("Bonus Rate"),
                        ],
                        rows: rates
                            .into_iter()
                            .map(|r| {
                                vec![
                                    Cell::Text(r.player),
                                    Cell::Int(r.bonus_hits),
                                    Cell::Int(r.pop_count),
                                    Cell::Float(r.rate),
                                ]
                            })
                            .collect(),
                    })
                }),
            ),
        ],
    }
}

fn table(rows: &[BonusRow]) -> SectionBody {
    SectionBody::Table(Table {
        columns: vec![
            presenter::text_column("Player"),
            presenter::progress_column_to(
                "Bonus Hits",
                "Bonus hits with visual progress bar",
                bonus::max_bonus(rows),
            ),
        ],
        rows: rows
            .iter()
            .map(|r| vec![presenter::text(&r.player), Cell::Int(u64::from(r.bonus_hits))])
            .collect(),
    })
}

fn summary(rows: &[BonusRow]) -> SectionBody {
    let top = bonus::top(rows)
        .map(|r| format!("{} ({})", r.player, r.bonus_hits))
        .unwrap_or_else(|| "-".to_owned());

    SectionBody::Metrics(vec![
        presenter::metric("Total Bonus Hits", presenter::format_grouped(bonus::total(rows))),
        presenter::metric("Top Bonus Player", top),
    ])
}
