use axum::extract::{Path, Query, State};
use std::sync::Arc;

use crate::datasets::Datasets;
use crate::pages::{self, PageContext};
use crate::ControlSession;

struct DashboardState {
    datasets: Arc<Datasets>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct PageQuery {
    pub player: Option<String>,
    pub palette: Option<String>,
}

pub fn router(datasets: Arc<Datasets>) -> axum::Router {
    axum::Router::new()
        .route("/pages", axum::routing::get(list))
        .route("/pages/:id", axum::routing::get(render))
        .with_state(Arc::new(DashboardState { datasets }))
}

async fn list() -> axum::response::Json<Vec<common::PageEntry>> {
    axum::Json(pages::entries())
}

#[tracing::instrument(skip(state, session))]
async fn render(
    State(state): State<Arc<DashboardState>>,
    mut session: ControlSession,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<axum::response::Json<common::Page>, (axum::http::StatusCode, &'static str)> {
    let page = pages::find(&id).ok_or((axum::http::StatusCode::NOT_FOUND, "Unknown page"))?;

    let palette = match query.palette.as_deref().filter(|p| !p.is_empty()) {
        Some(raw) => Some(raw.parse::<common::Palette>().map_err(|e| {
            tracing::warn!("Rejecting palette: {}", e);
            (axum::http::StatusCode::BAD_REQUEST, "Unknown palette")
        })?),
        None => None,
    };
    let player = query.player.filter(|p| !p.is_empty());

    if player.is_some() || palette.is_some() {
        session
            .modify_data(|controls| {
                if let Some(player) = player {
                    controls.player = Some(player);
                }
                if let Some(palette) = palette {
                    controls.palette = Some(palette);
                }
            })
            .await
            .map_err(|e| {
                tracing::error!("Storing session controls: {:?}", e);
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not store session",
                )
            })?;
    }

    let controls = session.data().clone();
    let datasets = state.datasets.clone();

    let rendered = tokio::task::spawn_blocking(move || {
        page.render(&PageContext {
            datasets: &datasets,
            controls: &controls,
        })
    })
    .await
    .map_err(|e| {
        tracing::error!("Rendering page: {:?}", e);
        (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            "Rendering failed",
        )
    })?;

    Ok(axum::Json(rendered))
}
