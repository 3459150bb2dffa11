use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::api::AppState;
use crate::domain::Film;
use crate::error::AppError;

/// `GET /`: every stored film as a JSON array, ordered by id.
///
/// Query parameters are not read.
pub async fn list_films(State(state): State<AppState>) -> Result<Json<Vec<Film>>, AppError> {
    let films = state.repo.list_films().await?;
    debug!(count = films.len(), "listing films");
    Ok(Json(films))
}
