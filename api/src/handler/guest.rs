use crate::{extractor::AuthorizedUser, model::guest::GuestsResponse};
use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_guest_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GuestsResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .guest_repository()
        .find_all()
        .await
        .map(GuestsResponse::from)
        .map(Json)
}
