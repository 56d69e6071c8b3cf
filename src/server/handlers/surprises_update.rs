use crate::{
    error::Error as SurprisesError,
    server::app_state::AppState,
    surprises::{SurpriseId, SurpriseParams, SurpriseStore},
    users::User,
};
use actix_web::{HttpResponse, web};
use serde_json::json;

/// PUT /api/surprises/{id}
pub async fn surprises_update<S: SurpriseStore>(
    state: web::Data<AppState<S>>,
    user: User,
    id: web::Path<SurpriseId>,
    body: web::Json<SurpriseParams>,
) -> Result<HttpResponse, SurprisesError> {
    let surprise = state
        .api
        .surprises()
        .update_surprise(&user, id.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "surprise": surprise })))
}
