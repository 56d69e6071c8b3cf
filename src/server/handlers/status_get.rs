use crate::{server::app_state::AppState, surprises::SurpriseStore};
use actix_web::{HttpResponse, web};

pub async fn status_get<S: SurpriseStore>(state: web::Data<AppState<S>>) -> HttpResponse {
    HttpResponse::Ok().json(&state.status)
}
