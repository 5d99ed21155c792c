use leptos::*;

mod navbar;
pub use navbar::SideBar;

pub mod page;
pub use page::PageView;

pub mod sections;

/// Builds the api url for a page, only carrying over the control values that are set.
pub fn page_url(id: &str, player: Option<&str>, palette: Option<&str>) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(player) = player.filter(|p| !p.is_empty()) {
        query.append_pair("player", player);
    }
    if let Some(palette) = palette.filter(|p| !p.is_empty()) {
        query.append_pair("palette", palette);
    }

    let query = query.finish();
    if query.is_empty() {
        format!("/api/pages/{}", id)
    } else {
        format!("/api/pages/{}?{}", id, query)
    }
}

pub async fn load_entries() -> Result<Vec<common::PageEntry>, String> {
    let res = reqwasm::http::Request::get("/api/pages")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !res.ok() {
        return Err(format!("Loading pages failed with {}", res.status()));
    }

    res.json::<Vec<common::PageEntry>>()
        .await
        .map_err(|e| e.to_string())
}

/// Redirects to whichever page the backend marks as the default one
#[leptos::component]
pub fn default_page() -> impl leptos::IntoView {
    let entries = create_resource(|| (), |_| async move { load_entries().await });

    view! {
        <Suspense fallback=move || view! { <p>Loading</p> }>
            {
                move || entries.get().map(|entries| match entries {
                    Ok(entries) => match entries.into_iter().find(|e| e.default) {
                        Some(entry) => view! {
                            <leptos_router::Redirect path=format!("/page/{}", entry.id) />
                        }.into_view(),
                        None => view! { <p>No pages available</p> }.into_view(),
                    },
                    Err(e) => view! { <p class="error">{ e }</p> }.into_view(),
                })
            }
        </Suspense>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_without_controls() {
        assert_eq!(page_url("scores", None, Some("")), "/api/pages/scores");
    }

    #[test]
    fn page_url_encodes_values() {
        assert_eq!(
            page_url("stats", Some("bob & co"), Some("reds")),
            "/api/pages/stats?player=bob+%26+co&palette=reds"
        );
    }
}
