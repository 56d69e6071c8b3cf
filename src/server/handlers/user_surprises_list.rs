use crate::{
    error::Error as SurprisesError, server::app_state::AppState, surprises::SurpriseStore,
    users::User,
};
use actix_web::{HttpResponse, web};
use serde::Deserialize;

/// Number of surprises per page if not specified.
const DEFAULT_PAGE_LIMIT: u32 = 10;

#[derive(Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// GET /api/user/surprises?page=&limit=
pub async fn user_surprises_list<S: SurpriseStore>(
    state: web::Data<AppState<S>>,
    user: User,
    query: web::Query<ListParams>,
) -> Result<HttpResponse, SurprisesError> {
    let page = state
        .api
        .surprises()
        .list_surprises(
            &user,
            query.page.unwrap_or(1),
            query.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        )
        .await?;

    Ok(HttpResponse::Ok().json(page))
}
