//! Turns aggregates into the view types the frontend renders.

use analysis::colors::ColorHits;
use analysis::colorscale::ColorScale;
use analysis::heatmap::{HeatMap, HOURS};
use common::dashboard::{Cell, Column, ColumnKind, Heatmap, HeatmapCell, Metric};
use common::Palette;

/// `1234567` -> `1,234,567`
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

pub fn format_mean(value: f64) -> String {
    format!("{:.2}", analysis::playerstats::round2(value))
}

pub fn metric<V>(label: &str, value: V) -> Metric
where
    V: Into<String>,
{
    Metric {
        label: label.to_owned(),
        value: value.into(),
    }
}

pub fn text_column(label: &str) -> Column {
    Column {
        label: label.to_owned(),
        help: None,
        kind: ColumnKind::Text,
    }
}

pub fn number_column(label: &str) -> Column {
    Column {
        label: label.to_owned(),
        help: None,
        kind: ColumnKind::Number,
    }
}

pub fn percent_column(label: &str) -> Column {
    Column {
        label: label.to_owned(),
        help: None,
        kind: ColumnKind::Percent,
    }
}

/// A bar column scaled from zero to the largest value currently shown.
pub fn progress_column<I>(label: &str, help: &str, values: I) -> Column
where
    I: IntoIterator<Item = u64>,
{
    progress_column_to(label, help, values.into_iter().max().unwrap_or(0))
}

pub fn progress_column_to(label: &str, help: &str, max: u64) -> Column {
    Column {
        label: label.to_owned(),
        help: Some(help.to_owned()),
        kind: ColumnKind::Progress { min: 0, max },
    }
}

pub fn text(value: &str) -> Cell {
    Cell::Text(value.to_owned())
}

pub struct HeatmapLabels<'l> {
    pub x: &'l str,
    pub y: &'l str,
    pub value: &'l str,
}

/// `values` is row-major with one row per `y` entry.
pub fn heatmap(
    labels: HeatmapLabels<'_>,
    x: Vec<String>,
    y: Vec<String>,
    values: &[Vec<u64>],
    palette: Palette,
) -> Heatmap {
    let scale = ColorScale::new(palette);
    let max = values
        .iter()
        .flat_map(|row| row.iter().copied())
        .max()
        .unwrap_or(0);

    let cells: Vec<Vec<HeatmapCell>> = y
        .iter()
        .zip(values.iter())
        .map(|(y_value, row)| {
            x.iter()
                .zip(row.iter().copied())
                .map(|(x_value, value)| HeatmapCell {
                    value,
                    color: scale.color(value, max),
                    tooltip: format!(
                        "{}: {}, {}: {}, {}: {}",
                        labels.y, y_value, labels.x, x_value, labels.value, value
                    ),
                })
                .collect::<Vec<_>>()
        })
        .collect();

    Heatmap {
        x_label: labels.x.to_owned(),
        y_label: labels.y.to_owned(),
        value_label: labels.value.to_owned(),
        x,
        y,
        max,
        palette,
        cells,
    }
}

pub fn hourly_heatmap(
    source: &HeatMap,
    y_label: &str,
    value_label: &str,
    palette: Palette,
) -> Heatmap {
    tracing::trace!("Hourly {} total {}\n{}", value_label, source.total(), source);

    let values: Vec<Vec<u64>> = source.rows().iter().map(|row| row.to_vec()).collect();

    heatmap(
        HeatmapLabels {
            x: "hour",
            y: y_label,
            value: value_label,
        },
        (0..HOURS).map(|h| h.to_string()).collect(),
        source.labels().to_vec(),
        &values,
        palette,
    )
}

/// Players on the y axis, colors on the x axis.
pub fn color_heatmap(distribution: &[ColorHits], palette: Palette) -> Heatmap {
    let players = analysis::playerstats::players(distribution.iter().map(|d| d.player.as_str()));
    let colors: Vec<String> = distribution
        .iter()
        .map(|d| d.color.clone())
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut values = vec![vec![0u64; colors.len()]; players.len()];
    for entry in distribution {
        let y = players.iter().position(|p| *p == entry.player);
        let x = colors.iter().position(|c| *c == entry.color);
        if let (Some(y), Some(x)) = (y, x) {
            values[y][x] = values[y][x].saturating_add(entry.hits);
        }
    }

    heatmap(
        HeatmapLabels {
            x: "color",
            y: "player",
            value: "hits",
        },
        colors,
        players,
        &values,
        palette,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(1234567), "1,234,567");
        assert_eq!(format_grouped(100000), "100,000");
    }

    #[test]
    fn means() {
        assert_eq!(format_mean(95.0 / 3.0), "31.67");
        assert_eq!(format_mean(0.0), "0.00");
    }

    #[test]
    fn progress_scale_follows_data() {
        let column = progress_column("Total Score", "", [100, 75, 90]);
        assert_eq!(column.kind, ColumnKind::Progress { min: 0, max: 100 });

        let column = progress_column("Total Score", "", [10, 5]);
        assert_eq!(column.kind, ColumnKind::Progress { min: 0, max: 10 });

        let column = progress_column("Total Score", "", Vec::new());
        assert_eq!(column.kind, ColumnKind::Progress { min: 0, max: 0 });
    }

    #[test]
    fn tooltip_names_all_three_fields() {
        let chart = heatmap(
            HeatmapLabels {
                x: "hour",
                y: "player",
                value: "pops",
            },
            vec!["9".to_owned()],
            vec!["alice".to_owned()],
            &[vec![6]],
            Palette::Magma,
        );

        assert_eq!(chart.max, 6);
        assert_eq!(chart.cells[0][0].tooltip, "player: alice, hour: 9, pops: 6");
        assert_eq!(chart.cells[0][0].color.to_ascii_lowercase(), "#fcfdbf");
    }

    #[test]
    fn color_matrix() {
        let dist = vec![
            ColorHits {
                player: "bob".to_owned(),
                color: "red".to_owned(),
                hits: 2,
            },
            ColorHits {
                player: "alice".to_owned(),
                color: "blue".to_owned(),
                hits: 5,
            },
        ];
        let chart = color_heatmap(&dist, Palette::default());

        assert_eq!(chart.y, vec!["alice".to_owned(), "bob".to_owned()]);
        assert_eq!(chart.x, vec!["blue".to_owned(), "red".to_owned()]);
        assert_eq!(
            chart
                .cells
                .iter()
                .map(|row| row.iter().map(|c| c.value).collect::<Vec<_>>())
                .collect::<Vec<_>>(),
            vec![vec![5, 0], vec![0, 2]]
        );
    }
}
