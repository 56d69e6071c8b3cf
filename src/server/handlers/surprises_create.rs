use crate::{
    error::Error as SurprisesError,
    server::app_state::AppState,
    surprises::{SurpriseParams, SurpriseStore},
    users::User,
};
use actix_web::{HttpResponse, web};
use serde_json::json;

/// POST /api/surprises
pub async fn surprises_create<S: SurpriseStore>(
    state: web::Data<AppState<S>>,
    user: User,
    body: web::Json<SurpriseParams>,
) -> Result<HttpResponse, SurprisesError> {
    let surprise = state
        .api
        .surprises()
        .create_surprise(&user, body.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(json!({ "surprise": surprise })))
}
