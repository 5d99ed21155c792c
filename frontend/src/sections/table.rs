use leptos::*;

use common::dashboard::{Cell, Column, ColumnKind, Table};

/// Share of the bar that should be filled, clamped to the column range
fn fill(value: f64, min: u64, max: u64) -> f64 {
    if max <= min {
        return 0.0;
    }

    ((value - min as f64) / (max - min) as f64 * 100.0).clamp(0.0, 100.0)
}

fn cell_value(cell: &Cell) -> f64 {
    match cell {
        Cell::Int(v) => *v as f64,
        Cell::Float(v) => *v,
        Cell::Text(_) => 0.0,
    }
}

#[leptos::component]
pub fn table_view(table: Table) -> impl leptos::IntoView {
    let style = stylers::style! {
        "TableView",
        table {
            border-collapse: collapse;
            width: 100%;
        }

        th {
            text-align: left;
            padding: 0.5vh 0.5vw;
            border-bottom: 1px solid #5d5d5d;
        }
        td {
            padding: 0.5vh 0.5vw;
        }

        .bar {
            position: relative;
            min-width: 10vw;
            height: 20px;

            background-color: #42424d;
        }
        .fill {
            height: 100%;
            background-color: #3f7fbf;
        }
        .bar > span {
            position: absolute;
            left: 5px;
            top: 0px;
        }
    };

    let render_cell = move |cell: Cell, column: &Column| match column.kind {
        ColumnKind::Progress { min, max } => {
            let width = fill(cell_value(&cell), min, max);
            view! {class = style,
                <div class="bar">
                    <div class="fill" style=format!("width: {:.1}%", width)></div>
                    <span>{ cell.to_string() }</span>
                </div>
            }
            .into_view()
        }
        ColumnKind::Percent => format!("{:.1}%", cell_value(&cell)).into_view(),
        ColumnKind::Text | ColumnKind::Number => cell.to_string().into_view(),
    };

    let header = table
        .columns
        .iter()
        .map(|column| {
            let help = column.help.clone().unwrap_or_default();
            view! {class = style, <th title=help>{ column.label.clone() }</th> }
        })
        .collect::<Vec<_>>();

    let columns = table.columns;
    let rows = table
        .rows
        .into_iter()
        .map(|row| {
            let cells = row
                .into_iter()
                .zip(columns.iter())
                .map(|(cell, column)| view! {class = style, <td>{ render_cell(cell, column) }</td> })
                .collect::<Vec<_>>();
            view! {class = style, <tr>{ cells }</tr> }
        })
        .collect::<Vec<_>>();

    view! {class = style,
        <table>
            <thead><tr>{ header }</tr></thead>
            <tbody>{ rows }</tbody>
        </table>
    }
}
