use axum::extract::State;
use axum::response::Html;

use crate::AppState;

/// GET / — the self-refreshing dashboard page
pub async fn page(State(state): State<AppState>) -> Html<axum::body::Bytes> {
    Html(state.dashboard_page.clone())
}
