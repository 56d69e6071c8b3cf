use crate::{
    error::Error as SurprisesError,
    server::app_state::AppState,
    surprises::{RevealedSurprise, SurpriseStore},
    users::User,
};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct RevealParams {
    pub password: Option<String>,
}

/// GET /api/surprises/{token}?password=
pub async fn surprises_reveal<S: SurpriseStore>(
    state: web::Data<AppState<S>>,
    user: Option<User>,
    token: web::Path<String>,
    query: web::Query<RevealParams>,
) -> Result<HttpResponse, SurprisesError> {
    reveal(&state, &token, query.password.as_deref(), user.as_ref()).await
}

/// POST /api/surprises/{token}/unlock
pub async fn surprises_unlock<S: SurpriseStore>(
    state: web::Data<AppState<S>>,
    user: Option<User>,
    token: web::Path<String>,
    body: web::Json<RevealParams>,
) -> Result<HttpResponse, SurprisesError> {
    reveal(&state, &token, body.password.as_deref(), user.as_ref()).await
}

async fn reveal<S: SurpriseStore>(
    state: &AppState<S>,
    token: &str,
    password: Option<&str>,
    user: Option<&User>,
) -> Result<HttpResponse, SurprisesError> {
    let surprise: RevealedSurprise = state
        .api
        .surprises()
        .reveal_surprise(token, password, user)
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "surprise": surprise })))
}
