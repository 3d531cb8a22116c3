//! HTTP介面
//!
//! 一個頁面路由加一個查詢端點。底表與勝方標示在啟動時算好，
//! 包進Arc注入各handler，之後整個行程唯讀共用，不需要鎖。

mod page;

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::Result;
use crate::filter::FilterCriteria;
use crate::query::{run_query, QueryAction, QueryOutcome};
use crate::style::StyleDirective;
use crate::table::Table;
use crate::winner::winner_directives;

/// 行程層級的共用唯讀狀態
pub struct AppState {
    pub table: Table,
    /// 啟動時算好的勝方標示，之後每次查詢直接取用
    pub winner_styles: Vec<StyleDirective>,
    pub config: Config,
}

impl AppState {
    pub fn new(table: Table, config: Config) -> Self {
        let winner_styles = winner_directives(&table);
        Self { table, winner_styles, config }
    }
}

/// 查詢請求：動作加上目前的輸入框內容
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub action: QueryAction,
    #[serde(flatten)]
    pub criteria: FilterCriteria,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/query", post(query))
        .route("/api/health", get(health))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 綁定埠號並服務直到行程結束
pub async fn serve(state: AppState) -> Result<()> {
    let addr = format!("0.0.0.0:{}", state.config.port);
    let router = build_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "查詢系統已啟動");
    axum::serve(listener, router).await?;
    Ok(())
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(page::render(&state.config))
}

async fn query(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QueryRequest>,
) -> Json<QueryOutcome> {
    Json(run_query(
        &state.table,
        &state.winner_styles,
        &request.criteria,
        request.action,
    ))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
