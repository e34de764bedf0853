//! Local preview server
//!
//! Serves the generated `public/` directory and a live listing endpoint,
//! `GET /api/projects?exclude=a,b&range=1..2&featured=true`, which reloads
//! content on every request so edits show up without regenerating.

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::cards::build_cards;
use crate::projects::{ProjectQuery, RangeError};
use crate::Folio;

/// Request parameters the listing endpoint cannot serve
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("no `projects.featured` range in _config.yml")]
    NoFeaturedRange,
}

/// Query string of `/api/projects`
#[derive(Debug, Default, Deserialize)]
pub struct ProjectsParams {
    /// Comma-separated slugs
    pub exclude: Option<String>,
    /// `N`, `N..` or `N..M`
    pub range: Option<String>,
    /// Use the configured featured range
    #[serde(default)]
    pub featured: bool,
}

impl ProjectsParams {
    /// Turn request parameters into a query on top of the configured one
    pub fn to_query(&self, folio: &Folio) -> Result<ProjectQuery, ParamsError> {
        let projects = &folio.config.projects;
        let mut query = projects.query();

        if let Some(exclude) = &self.exclude {
            query = query.exclude(
                exclude
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty()),
            );
        }
        if self.featured {
            let range = projects.featured.ok_or(ParamsError::NoFeaturedRange)?;
            query = query.range(range);
        }
        if let Some(range) = &self.range {
            query = query.range(range.parse()?);
        }

        Ok(query)
    }
}

/// Start the preview server
pub async fn start(folio: &Folio, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(folio.clone());

    let app = Router::new()
        .route("/api/projects", get(projects_handler))
        .fallback_service(ServeDir::new(&folio.public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn projects_handler(
    State(folio): State<Arc<Folio>>,
    Query(params): Query<ProjectsParams>,
) -> Response {
    let query = match params.to_query(&folio) {
        Ok(query) => query,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    // Loading reads the filesystem
    let result = tokio::task::spawn_blocking(move || {
        folio
            .projects(&query)
            .map(|projects| build_cards(&folio.config, &projects))
    })
    .await;

    match result {
        Ok(Ok(cards)) => Json(cards).into_response(),
        Ok(Err(e)) => {
            tracing::error!("Failed to load projects: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
        Err(e) => {
            tracing::error!("Loader task panicked: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::ProjectRange;
    use tempfile::TempDir;

    fn folio() -> (TempDir, Folio) {
        let tmp = TempDir::new().unwrap();
        let mut folio = Folio::new(tmp.path()).unwrap();
        folio.config.projects.exclude = vec!["hidden".to_string()];
        folio.config.projects.featured = Some(ProjectRange::new(1, Some(2)).unwrap());
        (tmp, folio)
    }

    #[test]
    fn test_params_to_query() {
        let (_tmp, folio) = folio();
        let params = ProjectsParams {
            exclude: Some("a, b,,".to_string()),
            range: Some("2..3".to_string()),
            featured: false,
        };

        let query = params.to_query(&folio).unwrap();
        assert_eq!(query.exclude.len(), 3);
        assert!(query.exclude.contains("hidden"));
        assert!(query.exclude.contains("b"));
        assert_eq!(query.range, Some(ProjectRange::new(2, Some(3)).unwrap()));
    }

    #[test]
    fn test_featured_param_uses_configured_range() {
        let (_tmp, folio) = folio();
        let params = ProjectsParams {
            featured: true,
            ..Default::default()
        };
        let query = params.to_query(&folio).unwrap();
        assert_eq!(query.range, folio.config.projects.featured);
    }

    #[test]
    fn test_bad_range_is_rejected() {
        let (_tmp, folio) = folio();
        let params = ProjectsParams {
            range: Some("0..1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query(&folio),
            Err(ParamsError::Range(RangeError::ZeroStart))
        );
    }

    #[test]
    fn test_featured_without_configured_range_is_rejected() {
        let (_tmp, mut folio) = folio();
        folio.config.projects.featured = None;
        let params = ProjectsParams {
            featured: true,
            ..Default::default()
        };
        assert_eq!(params.to_query(&folio), Err(ParamsError::NoFeaturedRange));
    }

    #[tokio::test]
    async fn test_handler_answers_bad_request() {
        let (_tmp, mut folio) = folio();
        folio.config.projects.featured = None;
        let params = ProjectsParams {
            featured: true,
            ..Default::default()
        };

        let response = projects_handler(State(Arc::new(folio)), Query(params)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
