use leptos::*;
use leptos_router::A;

#[leptos::component]
pub fn side_bar() -> impl leptos::IntoView {
    let entries = create_resource(|| (), |_| async move { crate::load_entries().await });

    let current = move || {
        let loc = leptos_router::use_location();
        let path = loc.pathname.get();
        path.strip_prefix("/page/")
            .map(|id| id.trim_end_matches('/').to_owned())
    };

    let style = stylers::style! {
        "SideBar",
        .bar {
            height: 100%;
            padding-top: 1vh;

            background-color: #28282f;
            color: #d5d5d5;
        }

        .logo {
            color: #d5d5d5;
            font-size: 24px;
            margin: 0px;
            margin-left: 1vw;
            margin-bottom: 2vh;
        }

        .entry {
            display: flex;
            align-items: center;
            column-gap: 10px;

            padding: 1vh 1vw;
            color: #d5d5d5;
        }
        .current {
            background-color: #42424d;
        }
    };

    let links = move || {
        entries.get().map(|entries| match entries {
            Ok(entries) => entries
                .into_iter()
                .map(|entry| {
                    let id = entry.id.clone();
                    let is_current = move || {
                        current().as_deref() == Some(id.as_str())
                    };

                    view! {class = style,
                        <A href=format!("/page/{}", entry.id)>
                            <div class="entry" class:current=is_current>
                                <span class="material-symbols-outlined">{ entry.icon }</span>
                                <span>{ entry.title }</span>
                            </div>
                        </A>
                    }
                })
                .collect::<Vec<_>>()
                .into_view(),
            Err(e) => view! { <p>{ e }</p> }.into_view(),
        })
    };

    view! {class = style,
        <div class="bar">
            <A href="/">
                <p class="logo">Balloon Pop</p>
            </A>

            <Suspense fallback=move || view! { <p>Loading</p> }>
                { links }
            </Suspense>
        </div>
    }
}
