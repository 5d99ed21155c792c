use backend::datasets::Datasets;
use backend::pages::{self, PageContext};
use backend::Controls;
use common::dashboard::{Cell, ColumnKind, SectionBody};
use common::{Control, Page, Palette};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn testfiles() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../testfiles/")
}

fn render(datasets: &Datasets, id: &str, controls: &Controls) -> Page {
    pages::find(id).unwrap().render(&PageContext { datasets, controls })
}

fn body<'p>(page: &'p Page, title: &str) -> &'p SectionBody {
    &page
        .sections
        .iter()
        .find(|s| s.title == title)
        .unwrap_or_else(|| panic!("No section {:?} in {:?}", title, page.id))
        .body
}

#[test]
fn page_table() {
    let entries = pages::entries();

    assert_eq!(entries.iter().filter(|e| e.default).count(), 1);
    assert_eq!(pages::default_page().id, "home");
    assert_eq!(
        entries.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
        vec!["home", "scores", "colors", "stats", "trends", "bonus"]
    );
    assert!(pages::find("nope").is_none());
}

#[test]
fn home_is_static_text() {
    let datasets = Datasets::new("/does/not/exist", false);
    let page = render(&datasets, "home", &Controls::default());

    assert!(page.controls.is_empty());
    match body(&page, "Player Analytics") {
        SectionBody::Text(lines) => {
            assert_eq!(lines.len(), 6);
            assert!(lines[1].starts_with("Player Scores"));
        }
        other => panic!("Unexpected body: {:?}", other),
    }
}

#[test]
#[traced_test]
fn scores_leaderboard() {
    let datasets = Datasets::new(testfiles(), false);
    let page = render(&datasets, "scores", &Controls::default());

    let table = match body(&page, "Leaderboard") {
        SectionBody::Table(t) => t,
        other => panic!("Unexpected body: {:?}", other),
    };
    assert_eq!(table.columns[1].kind, ColumnKind::Progress { min: 0, max: 95 });
    assert_eq!(
        table.rows,
        vec![
            vec![Cell::Text("alice".to_owned()), Cell::Int(95)],
            vec![Cell::Text("bob".to_owned()), Cell::Int(85)],
            vec![Cell::Text("carol".to_owned()), Cell::Int(70)],
        ]
    );

    match body(&page, "Summary") {
        SectionBody::Metrics(metrics) => {
            assert_eq!(metrics[1].value, "alice (95)");
            assert_eq!(metrics[2].value, "250");
        }
        other => panic!("Unexpected body: {:?}", other),
    }
}

#[test]
#[traced_test]
fn broken_files_render_inline_errors() {
    let datasets = Datasets::new(testfiles().join("broken/"), false);

    for entry in pages::entries() {
        let page = render(&datasets, &entry.id, &Controls::default());
        if entry.default {
            continue;
        }

        assert!(
            page.sections.iter().all(|s| s.body.is_error()),
            "Page {:?}: {:?}",
            entry.id,
            page.sections
        );
    }

    assert!(logs_contain("Section"));
}

#[test]
fn missing_directory_renders_every_page() {
    let datasets = Datasets::new("/does/not/exist", true);

    for entry in pages::entries() {
        let page = render(&datasets, &entry.id, &Controls::default());
        assert_eq!(page.id, entry.id);
    }

    let page = render(&datasets, "scores", &Controls::default());
    match body(&page, "Leaderboard") {
        SectionBody::Error(message) => assert!(message.contains("does not exist"), "{}", message),
        other => panic!("Unexpected body: {:?}", other),
    }
}

#[test]
fn stats_defaults_to_first_player() {
    let datasets = Datasets::new(testfiles(), true);
    let page = render(&datasets, "stats", &Controls::default());

    assert_eq!(
        page.controls,
        vec![Control::Player {
            options: vec!["alice".to_owned(), "bob".to_owned(), "carol".to_owned()],
            selected: Some("alice".to_owned()),
        }]
    );

    match body(&page, "Player Metrics") {
        SectionBody::Metrics(metrics) => {
            let value = |label: &str| {
                metrics
                    .iter()
                    .find(|m| m.label == label)
                    .map(|m| m.value.clone())
                    .unwrap()
            };
            assert_eq!(value("Windows"), "3");
            assert_eq!(value("Total Pops"), "9");
            assert_eq!(value("Mean Pops per Window"), "3.00");
            assert_eq!(value("Mean Score per Window"), "31.67");
            assert_eq!(value("Favourite Color"), "red");
        }
        other => panic!("Unexpected body: {:?}", other),
    }
}

#[test]
fn stats_for_selected_player() {
    let datasets = Datasets::new(testfiles(), true);
    let controls = Controls {
        player: Some("bob".to_owned()),
        palette: None,
    };
    let page = render(&datasets, "stats", &controls);

    match body(&page, "Color Breakdown") {
        SectionBody::Table(table) => {
            assert_eq!(table.columns[1].kind, ColumnKind::Progress { min: 0, max: 7 });
            assert_eq!(table.rows.len(), 2);
            assert_eq!(table.rows[0][0], Cell::Text("green".to_owned()));
            assert_eq!(table.rows[0][1], Cell::Int(7));
        }
        other => panic!("Unexpected body: {:?}", other),
    }
}

#[test]
fn trends_use_selected_palette() {
    let datasets = Datasets::new(testfiles(), true);
    let controls = Controls {
        player: None,
        palette: Some(Palette::Reds),
    };
    let page = render(&datasets, "trends", &controls);

    assert_eq!(
        page.controls,
        vec![Control::Palette {
            options: Palette::ALL.to_vec(),
            selected: Palette::Reds,
        }]
    );

    match body(&page, "Pops by Color and Hour") {
        SectionBody::Heatmap(heatmap) => {
            assert_eq!(heatmap.palette, Palette::Reds);
            assert_eq!(heatmap.x.len(), 24);
            assert_eq!(heatmap.y, vec!["blue", "green", "red"]);
            assert_eq!(heatmap.max, 7);
            assert_eq!(heatmap.cells[1][9].tooltip, "color: green, hour: 9, pops: 7");
            assert_eq!(heatmap.cells[1][9].color.to_ascii_lowercase(), "#67000d");
        }
        other => panic!("Unexpected body: {:?}", other),
    }
}

#[test]
fn colors_page_popularity() {
    let datasets = Datasets::new(testfiles(), false);
    let page = render(&datasets, "colors", &Controls::default());

    match body(&page, "Popularity") {
        SectionBody::Metrics(metrics) => {
            assert_eq!(metrics[0].value, "blue (8 hits)");
            assert_eq!(metrics[1].value, "green (7 hits)");
        }
        other => panic!("Unexpected body: {:?}", other),
    }

    match body(&page, "Color Distribution") {
        SectionBody::Table(table) => {
            let alice_total: f64 = table
                .rows
                .iter()
                .filter(|row| row[0] == Cell::Text("alice".to_owned()))
                .map(|row| match row[3] {
                    Cell::Float(v) => v,
                    _ => panic!("Share is not a float"),
                })
                .sum();
            assert!((alice_total - 100.0).abs() < 1e-9);
        }
        other => panic!("Unexpected body: {:?}", other),
    }
}

#[test]
fn bonus_page() {
    let datasets = Datasets::new(testfiles(), false);
    let page = render(&datasets, "bonus", &Controls::default());

    match body(&page, "Summary") {
        SectionBody::Metrics(metrics) => {
            assert_eq!(metrics[0].value, "8");
            assert_eq!(metrics[1].value, "alice (3)");
        }
        other => panic!("Unexpected body: {:?}", other),
    }
    assert!(!body(&page, "Bonus Rate").is_error());
}

#[test]
fn rendering_is_repeatable() {
    let datasets = Datasets::new(testfiles(), false);

    for entry in pages::entries() {
        let first = render(&datasets, &entry.id, &Controls::default());
        let second = render(&datasets, &entry.id, &Controls::default());
        assert_eq!(first, second, "Page {:?}", entry.id);
    }
}

#[test]
fn cache_keeps_first_successful_load() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join(analysis::load::COLOR_TREND_FILE);
    let datasets = Datasets::new(dir.path(), true);

    assert!(datasets.color_trend().is_err());

    std::fs::copy(testfiles().join(analysis::load::COLOR_TREND_FILE), &target).unwrap();
    assert_eq!(datasets.color_trend().unwrap().len(), 7);

    std::fs::remove_file(&target).unwrap();
    assert_eq!(datasets.color_trend().unwrap().len(), 7);
}

#[test]
fn without_cache_every_render_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join(analysis::load::COLOR_TREND_FILE);
    let datasets = Datasets::new(dir.path(), false);

    std::fs::copy(testfiles().join(analysis::load::COLOR_TREND_FILE), &target).unwrap();
    assert!(datasets.color_trend().is_ok());

    std::fs::remove_file(&target).unwrap();
    assert!(datasets.color_trend().is_err());
}

#[test]
fn huge_scores_still_render() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(analysis::load::LEADERBOARD_FILE),
        "player,total_score\nalice,18446744073709551615\nbob,1\n",
    )
    .unwrap();
    let datasets = Datasets::new(dir.path(), false);
    let page = render(&datasets, "scores", &Controls::default());

    match body(&page, "Summary") {
        SectionBody::Metrics(metrics) => {
            assert_eq!(metrics[2].value, "18,446,744,073,709,551,615");
        }
        other => panic!("Unexpected body: {:?}", other),
    }
    assert!(!body(&page, "Leaderboard").is_error());
}

#[test]
fn stats_hourly_pops_for_selected_player() {
    let datasets = Datasets::new(testfiles(), true);
    let controls = Controls {
        player: Some("bob".to_owned()),
        palette: Some(Palette::Greens),
    };
    let page = render(&datasets, "stats", &controls);

    match body(&page, "Pops by Hour") {
        SectionBody::Heatmap(heatmap) => {
            assert_eq!(heatmap.y, vec!["bob"]);
            assert_eq!(heatmap.palette, Palette::Greens);
            assert_eq!(heatmap.cells[0][9].value, 7);
            assert_eq!(heatmap.cells[0][21].value, 1);
            assert_eq!(heatmap.cells[0].iter().map(|c| c.value).sum::<u64>(), 8);
        }
        other => panic!("Unexpected body: {:?}", other),
    }
}
