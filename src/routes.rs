use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{AppState, error::AppResult, models::ReviewForm, templates};

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.repo.get_all_with_details().await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let Some(details) = state.repo.get_with_details(id).await? else {
        return Ok((StatusCode::NOT_FOUND, Html(templates::not_found_page(id))).into_response());
    };

    Ok(Html(templates::movie_page(&details)).into_response())
}

pub async fn add_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<ReviewForm>,
) -> AppResult<Response> {
    let comment = form.comment.trim().to_string();

    if !(1..=5).contains(&form.rating) {
        return Err(anyhow::anyhow!("rating must be between 1 and 5").into());
    }
    if comment.is_empty() {
        return Err(anyhow::anyhow!("comment is required").into());
    }

    if state.repo.get_movie(id).await?.is_none() {
        return Ok((StatusCode::NOT_FOUND, Html(templates::not_found_page(id))).into_response());
    }

    state.repo.add_review(id, form.rating, comment).await?;
    Ok(Redirect::to(&format!("/movies/{id}")).into_response())
}
