use leptos::*;

use crate::sections::SectionView;

async fn load_page(url: String) -> Result<common::Page, String> {
    let res = reqwasm::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !res.ok() {
        let body = res.text().await.unwrap_or_default();
        return Err(format!("{} {}", res.status(), body));
    }

    res.json::<common::Page>().await.map_err(|e| e.to_string())
}

#[leptos::component]
pub fn page_view() -> impl leptos::IntoView {
    let params = leptos_router::use_params_map();
    let query = leptos_router::use_query_map();

    let id = move || params.with(|params| params.get("id").cloned().unwrap_or_default());
    let player = move || query.with(|q| q.get("player").cloned());
    let palette = move || query.with(|q| q.get("palette").cloned());

    let page = create_resource(
        move || crate::page_url(&id(), player().as_deref(), palette().as_deref()),
        load_page,
    );

    let style = stylers::style! {
        "PageView",
        .controls {
            display: flex;
            column-gap: 20px;
            margin-bottom: 2vh;
        }

        .error {
            color: #ff7b72;
        }
    };

    let content = move || {
        page.get().map(|page| match page {
            Ok(page) => {
                let controls = page
                    .controls
                    .into_iter()
                    .map(|control| view! { <ControlSelect control=control /> })
                    .collect::<Vec<_>>();
                let sections = page
                    .sections
                    .into_iter()
                    .map(|section| view! { <SectionView section=section /> })
                    .collect::<Vec<_>>();

                view! {class = style,
                    <h2>{ page.title }</h2>
                    <div class="controls">{ controls }</div>
                    <div>{ sections }</div>
                }
                .into_view()
            }
            Err(e) => view! {class = style,
                <p class="error">Could not load page: { e }</p>
            }
            .into_view(),
        })
    };

    view! {
        <Suspense fallback=move || view! { <p>Loading Page</p> }>
            { content }
        </Suspense>
    }
}

/// Query string for the current page with a single control value replaced
fn select_query(query: &leptos_router::ParamsMap, key: &str, value: String) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for name in ["player", "palette"] {
        let current = if name == key {
            Some(value.clone())
        } else {
            query.get(name).cloned()
        };
        if let Some(current) = current {
            serializer.append_pair(name, &current);
        }
    }
    serializer.finish()
}

#[leptos::component]
fn control_select(control: common::Control) -> impl leptos::IntoView {
    let (key, label, options, selected) = match control {
        common::Control::Player { options, selected } => {
            ("player", "Player", options, selected.unwrap_or_default())
        }
        common::Control::Palette { options, selected } => (
            "palette",
            "Palette",
            options.into_iter().map(|p| p.name().to_owned()).collect(),
            selected.name().to_owned(),
        ),
    };

    let query = leptos_router::use_query_map();
    let location = leptos_router::use_location();
    let navigate = leptos_router::use_navigate();
    let on_change = move |ev: leptos::ev::Event| {
        let target = format!(
            "{}?{}",
            location.pathname.get_untracked(),
            select_query(&query.get_untracked(), key, event_target_value(&ev))
        );
        navigate(&target, Default::default());
    };

    let style = stylers::style! {
        "ControlSelect",
        label {
            display: flex;
            column-gap: 10px;
            align-items: center;
        }

        select {
            color: #d5d5d5;
            background-color: #42424d;
            padding: 0.5vh 0.5vw;
        }
    };

    view! {class = style,
        <label>
            <span>{ label }</span>
            <select on:change=on_change prop:value=selected.clone()>
                {
                    options.into_iter().map(|option| {
                        let is_selected = option == selected;
                        view! { <option value=option.clone() selected=is_selected>{ option }</option> }
                    }).collect::<Vec<_>>()
                }
            </select>
        </label>
    }
}
