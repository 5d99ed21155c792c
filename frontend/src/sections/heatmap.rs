use leptos::*;

use common::dashboard::Heatmap;

#[leptos::component]
pub fn heatmap_view(heatmap: Heatmap) -> impl leptos::IntoView {
    let style = stylers::style! {
        "HeatmapView",
        .grid {
            display: grid;
            grid-template-columns: auto repeat(var(--columns), 1fr);
            gap: 2px;
            font-size: 12px;
        }

        .cell {
            min-height: 20px;
            border-radius: 2px;
        }

        .label {
            padding-right: 5px;
            text-align: right;
        }

        .axis {
            text-align: center;
        }

        .legend {
            margin-top: 1vh;
            font-size: 12px;
            color: #a5a5a5;
        }
    };

    let columns = heatmap.x.len();

    let x_axis = heatmap
        .x
        .into_iter()
        .map(|x| view! {class = style, <div class="axis">{ x }</div> })
        .collect::<Vec<_>>();

    let rows = heatmap
        .y
        .into_iter()
        .zip(heatmap.cells)
        .map(|(y, cells)| {
            let cells = cells
                .into_iter()
                .map(|cell| {
                    view! {class = style,
                        <div class="cell" title=cell.tooltip style=format!("background-color: {}", cell.color)></div>
                    }
                })
                .collect::<Vec<_>>();

            view! {class = style,
                <div class="label">{ y }</div>
                { cells }
            }
        })
        .collect::<Vec<_>>();

    view! {class = style,
        <div class="grid" style=format!("--columns: {}", columns)>
            <div class="label">{ format!("{} / {}", heatmap.y_label, heatmap.x_label) }</div>
            { x_axis }
            { rows }
        </div>
        <p class="legend">
            { format!("{}: 0 to {} ({} palette)", heatmap.value_label, heatmap.max, heatmap.palette) }
        </p>
    }
}
