use analysis::colors::{self, ColorHits};
use common::dashboard::{Cell, SectionBody, Table};

use super::{palette_control, section, PageContent, PageContext};
use crate::presenter;

pub fn render(ctx: &PageContext<'_>) -> PageContent {
    let palette = ctx.controls.palette();
    let distribution = ctx
        .datasets
        .colored_pops()
        .map(|rows| colors::from_hits(&rows));

    PageContent {
        controls: vec![palette_control(ctx.controls)],
        sections: vec![
            section(
                "Color Distribution",
                distribution.as_ref().map(|d| table(d)),
            ),
            section("Popularity", distribution.as_ref().map(|d| popularity(d))),
            section(
                "Hits by Player and Color",
                distribution
                    .as_ref()
                    .map(|d| SectionBody::Heatmap(presenter::color_heatmap(d, palette))),
            ),
        ],
    }
}

fn table(distribution: &[ColorHits]) -> SectionBody {
    let shares = colors::shares(distribution);

    SectionBody::Table(Table {
        columns: vec![
            presenter::text_column("Player"),
            presenter::text_column("Balloon Color"),
            presenter::progress_column(
                "Hits",
                "Hits on this color",
                shares.iter().map(|s| s.hits),
            ),
            presenter::percent_column("Share"),
        ],
        rows: shares
            .into_iter()
            .map(|s| {
                vec![
                    Cell::Text(s.player),
                    Cell::Text(s.color),
                    Cell::Int(s.hits),
                    Cell::Float(s.percentage),
                ]
            })
            .collect(),
    })
}

fn popularity(distribution: &[ColorHits]) -> SectionBody {
    let totals = colors::color_totals(distribution);
    let describe = |total: Option<&colors::ColorTotal>| {
        total
            .map(|t| format!("{} ({} hits)", t.color, presenter::format_grouped(t.hits)))
            .unwrap_or_else(|| "-".to_owned())
    };

    SectionBody::Metrics(vec![
        presenter::metric("Most Popular Color", describe(colors::most_popular(&totals))),
        presenter::metric("Least Popular Color", describe(colors::least_popular(&totals))),
        presenter::metric("Colors", totals.len().to_string()),
    ])
}
