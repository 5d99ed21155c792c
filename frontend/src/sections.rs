use leptos::*;

use common::dashboard::{Metric, Section, SectionBody};

pub mod heatmap;
pub mod table;

#[leptos::component]
pub fn section_view(section: Section) -> impl leptos::IntoView {
    let style = stylers::style! {
        "SectionView",
        .section {
            margin-bottom: 3vh;
            padding: 1vh 1vw;

            background-color: #28282f;
            border-radius: 10px;
        }

        .error {
            color: #ff7b72;
        }
    };

    let body = match section.body {
        SectionBody::Text(lines) => lines
            .into_iter()
            .map(|line| view! { <p>{ line }</p> })
            .collect::<Vec<_>>()
            .into_view(),
        SectionBody::Table(table) => view! { <table::TableView table=table /> }.into_view(),
        SectionBody::Metrics(metrics) => view! { <MetricCards metrics=metrics /> }.into_view(),
        SectionBody::Heatmap(heatmap) => {
            view! { <heatmap::HeatmapView heatmap=heatmap /> }.into_view()
        }
        SectionBody::Error(message) => view! {class = style,
            <p class="error">{ message }</p>
        }
        .into_view(),
    };

    view! {class = style,
        <div class="section">
            <h3>{ section.title }</h3>
            { body }
        </div>
    }
}

#[leptos::component]
fn metric_cards(metrics: Vec<Metric>) -> impl leptos::IntoView {
    let style = stylers::style! {
        "MetricCards",
        .cards {
            display: flex;
            flex-wrap: wrap;
            gap: 1vw;
        }

        .card {
            min-width: 10vw;
            padding: 1vh 1vw;

            background-color: #42424d;
            border-radius: 5px;
        }

        .label {
            font-size: 12px;
            color: #a5a5a5;
        }
        .value {
            font-size: 22px;
        }
    };

    view! {class = style,
        <div class="cards">
            {
                metrics.into_iter().map(|metric| view! {class = style,
                    <div class="card">
                        <div class="label">{ metric.label }</div>
                        <div class="value">{ metric.value }</div>
                    </div>
                }).collect::<Vec<_>>()
            }
        </div>
    }
}
