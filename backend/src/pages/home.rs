use common::dashboard::{Section, SectionBody};

use super::{PageContent, PageContext, PAGES};

pub fn render(_ctx: &PageContext<'_>) -> PageContent {
    let mut text = vec![
        "Welcome to the Balloon Pop Analytics Dashboard! Use the sidebar to navigate through the different sections:".to_owned(),
    ];
    text.extend(
        PAGES
            .iter()
            .filter(|p| !p.default)
            .map(|p| format!("{}: {}", p.title, description(p.id))),
    );

    PageContent {
        controls: Vec::new(),
        sections: vec![Section {
            title: "Player Analytics".to_owned(),
            body: SectionBody::Text(text),
        }],
    }
}

fn description(id: &str) -> &'static str {
    match id {
        "scores" => "Leaderboard totals with visual progress bars",
        "colors" => "Which balloon colors each player hits",
        "stats" => "Per-window averages for a single player",
        "trends" => "Activity by hour of day as heatmaps",
        "bonus" => "Bonus hits and bonus rate per player",
        _ => "",
    }
}
