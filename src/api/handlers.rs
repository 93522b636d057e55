use axum::{
    Json,
    extract::Query,
    http::StatusCode,
    response::Html,
};
use std::time::Instant;

use crate::data_models::SearchResult;
use crate::renderer::{render_result_item_html, render_results_list_html};

use super::models::{RenderItemRequest, RenderListRequest, RenderParams};

fn check(results: &[SearchResult]) -> Result<(), (StatusCode, String)> {
    for (idx, result) in results.iter().enumerate() {
        result.validate().map_err(|e| {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid result {}: {}", idx, e),
            )
        })?;
    }
    Ok(())
}

pub async fn render_item_handler(
    Query(params): Query<RenderParams>,
    Json(request): Json<RenderItemRequest>,
) -> Result<Html<String>, (StatusCode, String)> {
    if params.validate {
        check(std::slice::from_ref(&request.result))?;
    }

    let start = Instant::now();
    let html = render_result_item_html(&request.result, &request.options);
    tracing::info!(
        url = %request.result.entry.url,
        elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
        "rendered item"
    );
    Ok(Html(html))
}

pub async fn render_list_handler(
    Query(params): Query<RenderParams>,
    Json(request): Json<RenderListRequest>,
) -> Result<Html<String>, (StatusCode, String)> {
    // validate before prefixing, or an empty url would pass once prefixed
    if params.validate {
        check(&request.output.results)?;
    }
    let total_hit_count = request.output.total_hit_count;
    let results = request.output.into_prefixed_results();

    let start = Instant::now();
    let html = render_results_list_html(&results, request.selected, request.show_scores);
    tracing::info!(
        results = results.len(),
        total_hit_count,
        elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
        "rendered results list"
    );
    Ok(Html(html))
}
