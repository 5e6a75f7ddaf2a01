// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Server-rendered pages: caregiver start page and public tracking page.

use crate::error::AppError;
use crate::models::ShiftView;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use maud::{html, Markup, DOCTYPE};
use std::sync::Arc;

const APP_JS: &str = include_str!("assets/app.js");

/// Page routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/app.js", get(app_js))
        .route("/track/{token}", get(track_page))
}

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body { (body) }
        }
    }
}

/// Caregiver page. The script asks the browser for a fix and posts it.
async fn home() -> Html<String> {
    let page = layout(
        "Caregiver Tracking System",
        html! {
            main {
                h1 { "Caregiver Tracking System" }
                button #start-shift type="button" { "Iniciar Guardia" }
                p #error hidden {}
                p #status hidden {}
                div #tracking hidden {
                    p { "Link de Seguimiento:" }
                    a #tracking-link target="_blank" rel="noopener noreferrer" {}
                    button #copy-link type="button" { "Copiar Link" }
                }
                p #shift-id hidden {}
            }
            script src="/app.js" {}
        },
    );
    Html(page.into_string())
}

async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_JS,
    )
}

/// Render the tracking page for a resolved shift.
pub fn render_shift(view: &ShiftView) -> Markup {
    let status_class = if view.is_active {
        "status-active"
    } else {
        "status-inactive"
    };

    layout(
        "Seguimiento de Guardia",
        html! {
            main {
                h1 { "Seguimiento de Guardia" }
                p {
                    strong { "Estado de la Guardia: " }
                    span class=(status_class) { (view.status_label) }
                }
                p {
                    strong { "Latitud de Inicio: " }
                    (view.start_latitude)
                }
                p {
                    strong { "Longitud de Inicio: " }
                    (view.start_longitude)
                }
                a href=(view.map_url) target="_blank" rel="noopener noreferrer" {
                    "Ver en Google Maps"
                }
            }
        },
    )
}

fn render_not_found() -> Markup {
    layout(
        "Guardia No Encontrada",
        html! {
            main {
                h1 { "Guardia No Encontrada" }
                p { "El link de seguimiento no es válido o la guardia no existe." }
            }
        },
    )
}

fn render_error(details: &str) -> Markup {
    layout(
        "Error de Seguimiento",
        html! {
            main {
                h1 { "Error de Seguimiento" }
                p { "No se pudo consultar la guardia debido a un error en la base de datos." }
                p { "Detalles: " (details) }
            }
        },
    )
}

/// Public tracking page for `/track/{token}`.
async fn track_page(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> (StatusCode, Html<String>) {
    match state.resolver.resolve_shift(&token).await {
        Ok(view) => (StatusCode::OK, Html(render_shift(&view).into_string())),
        Err(AppError::NotFound) => (
            StatusCode::NOT_FOUND,
            Html(render_not_found().into_string()),
        ),
        Err(err) => {
            tracing::error!(error = %err, "Tracking page lookup failed");
            let details = match &err {
                AppError::LookupFailed(msg) => msg.clone(),
                other => other.to_string(),
            };
            (
                StatusCode::BAD_GATEWAY,
                Html(render_error(&details).into_string()),
            )
        }
    }
}
