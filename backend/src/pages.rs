use common::dashboard::{Section, SectionBody};
use common::{Control, Page, PageEntry, Palette};

use crate::datasets::Datasets;
use crate::Controls;

pub mod bonus;
pub mod colors;
pub mod home;
pub mod scores;
pub mod stats;
pub mod trends;

pub struct PageContext<'c> {
    pub datasets: &'c Datasets,
    pub controls: &'c Controls,
}

#[derive(Debug, Default)]
pub struct PageContent {
    pub controls: Vec<Control>,
    pub sections: Vec<Section>,
}

pub struct PageDef {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub default: bool,
    pipeline: fn(&PageContext<'_>) -> PageContent,
}

impl PageDef {
    #[tracing::instrument(name = "Page", skip(self, ctx), fields(id = self.id))]
    pub fn render(&self, ctx: &PageContext<'_>) -> Page {
        tracing::info!("Rendering page");

        let content = (self.pipeline)(ctx);

        let failed = content.sections.iter().filter(|s| s.body.is_error()).count();
        if failed > 0 {
            tracing::warn!("{} of {} sections failed", failed, content.sections.len());
        }

        Page {
            id: self.id.to_owned(),
            title: self.title.to_owned(),
            controls: content.controls,
            sections: content.sections,
        }
    }

    pub fn entry(&self) -> PageEntry {
        PageEntry {
            id: self.id.to_owned(),
            title: self.title.to_owned(),
            icon: self.icon.to_owned(),
            default: self.default,
        }
    }
}

pub static PAGES: &[PageDef] = &[
    PageDef {
        id: "home",
        title: "Home",
        icon: "home",
        default: true,
        pipeline: home::render,
    },
    PageDef {
        id: "scores",
        title: "Player Scores",
        icon: "scoreboard",
        default: false,
        pipeline: scores::render,
    },
    PageDef {
        id: "colors",
        title: "Color Distribution",
        icon: "palette",
        default: false,
        pipeline: colors::render,
    },
    PageDef {
        id: "stats",
        title: "Player Stats",
        icon: "analytics",
        default: false,
        pipeline: stats::render,
    },
    PageDef {
        id: "trends",
        title: "Activity Trends",
        icon: "trending_up",
        default: false,
        pipeline: trends::render,
    },
    PageDef {
        id: "bonus",
        title: "Bonus Hits",
        icon: "star",
        default: false,
        pipeline: bonus::render,
    },
];

pub fn find(id: &str) -> Option<&'static PageDef> {
    PAGES.iter().find(|p| p.id == id)
}

pub fn default_page() -> &'static PageDef {
    PAGES.iter().find(|p| p.default).unwrap_or(&PAGES[0])
}

pub fn entries() -> Vec<PageEntry> {
    PAGES.iter().map(|p| p.entry()).collect()
}

/// Turns a failed section into an inline error instead of failing the page.
pub fn section<E>(title: &str, body: Result<SectionBody, E>) -> Section
where
    E: core::fmt::Display,
{
    let body = match body {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("Section {:?}: {}", title, e);
            SectionBody::Error(format!("Could not load data: {}", e))
        }
    };

    Section {
        title: title.to_owned(),
        body,
    }
}

pub fn palette_control(controls: &Controls) -> Control {
    Control::Palette {
        options: Palette::ALL.to_vec(),
        selected: controls.palette(),
    }
}
