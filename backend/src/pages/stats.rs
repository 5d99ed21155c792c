use analysis::heatmap::HeatMap;
use analysis::load::EventRow;
use analysis::{colors, playerstats};
use common::dashboard::{Cell, SectionBody, Table};
use common::{Control, Palette};

use super::{section, PageContent, PageContext};
use crate::presenter;

pub fn render(ctx: &PageContext<'_>) -> PageContent {
    let events = ctx.datasets.color_trend();

    let options = match &events {
        Ok(events) => playerstats::players(events.iter().map(|e| e.player.as_str())),
        Err(_) => Vec::new(),
    };
    let selected = ctx.controls.player_in(&options).cloned();
    tracing::debug!(?selected, "Selected player");

    let player = selected.clone().unwrap_or_default();

    PageContent {
        controls: vec![Control::Player {
            options,
            selected,
        }],
        sections: vec![
            section(
                "Player Metrics",
                events.as_ref().map(|e| metrics(e, &player)),
            ),
            section(
                "Color Breakdown",
                events.as_ref().map(|e| breakdown(e, &player)),
            ),
            section(
                "Pops by Hour",
                events
                    .as_ref()
                    .map(|e| hourly(e, &player, ctx.controls.palette())),
            ),
        ],
    }
}

fn metrics(events: &[EventRow], player: &str) -> SectionBody {
    let summary = playerstats::summarize(events, player);

    SectionBody::Metrics(vec![
        presenter::metric("Windows", presenter::format_grouped(summary.windows as u64)),
        presenter::metric("Total Pops", presenter::format_grouped(summary.total_pops)),
        presenter::metric("Total Score", presenter::format_grouped(summary.total_score)),
        presenter::metric(
            "Bonus Hits",
            presenter::format_grouped(summary.total_bonus_hits),
        ),
        presenter::metric("Mean Pops per Window", presenter::format_mean(summary.mean_pop_count)),
        presenter::metric("Mean Score per Window", presenter::format_mean(summary.mean_score)),
        presenter::metric(
            "Favourite Color",
            summary.favourite_color.unwrap_or_else(|| "-".to_owned()),
        ),
    ])
}

fn breakdown(events: &[EventRow], player: &str) -> SectionBody {
    let selected = playerstats::select(events, player);
    let shares = colors::shares(&colors::distribution(selected.iter().copied()));

    SectionBody::Table(Table {
        columns: vec![
            presenter::text_column("Balloon Color"),
            presenter::progress_column("Pops", "Pops on this color", shares.iter().map(|s| s.hits)),
            presenter::percent_column("Share"),
        ],
        rows: shares
            .into_iter()
            .map(|s| vec![Cell::Text(s.color), Cell::Int(s.hits), Cell::Float(s.percentage)])
            .collect(),
    })
}

fn hourly(events: &[EventRow], player: &str, palette: Palette) -> SectionBody {
    let selected = playerstats::select(events, player);

    SectionBody::Heatmap(presenter::hourly_heatmap(
        &HeatMap::pops_by_player_hour(selected.iter().copied()),
        "player",
        "pops",
        palette,
    ))
}
