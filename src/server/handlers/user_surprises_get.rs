use crate::{
    error::Error as SurprisesError,
    server::app_state::AppState,
    surprises::{SurpriseId, SurpriseStore},
    users::User,
};
use actix_web::{HttpResponse, web};
use serde_json::json;

/// GET /api/user/surprises/{id}
pub async fn user_surprises_get<S: SurpriseStore>(
    state: web::Data<AppState<S>>,
    user: User,
    id: web::Path<SurpriseId>,
) -> Result<HttpResponse, SurprisesError> {
    let surprise = state
        .api
        .surprises()
        .get_surprise(&user, id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "surprise": surprise })))
}

#[cfg(test)]
mod tests {
    use crate::{
        server::tests::MockApp,
        tests::{mock_surprise_params, mock_user_with_id},
    };
    use actix_web::{
        App,
        test::{TestRequest, call_service, init_service, read_body_json},
    };
    use serde_json::{Value as JsonValue, json};
    use uuid::uuid;

    #[actix_web::test]
    async fn can_get_surprise() -> anyhow::Result<()> {
        let mock = MockApp::new()?;
        let app = init_service(App::new().configure(mock.routes())).await;
        let created = mock
            .state
            .api
            .surprises()
            .create_surprise(&mock.user, mock_surprise_params())
            .await?;
        let another_user = mock_user_with_id(uuid!("00000000-0000-0000-0000-000000000002"))?;
        let foreign = mock
            .state
            .api
            .surprises()
            .create_surprise(&another_user, mock_surprise_params())
            .await?;

        let response = call_service(
            &app,
            TestRequest::get()
                .uri(&format!("/api/user/surprises/{}", created.id))
                .insert_header(mock.auth_header()?)
                .to_request(),
        )
        .await;
        assert_eq!(response.status().as_u16(), 200);
        let body: JsonValue = read_body_json(response).await;
        assert_eq!(body["surprise"]["id"], json!(created.id));
        assert_eq!(body["surprise"]["viewCount"], json!(0));
        assert_eq!(body["surprise"]["lastViewedAt"], JsonValue::Null);
        assert_eq!(body["surprise"]["revelationsCount"], json!(3));
        assert!(body["surprise"].get("revelations").is_none());

        let response = call_service(
            &app,
            TestRequest::get()
                .uri(&format!("/api/user/surprises/{}", foreign.id))
                .insert_header(mock.auth_header()?)
                .to_request(),
        )
        .await;
        assert_eq!(response.status().as_u16(), 404);

        Ok(())
    }
}
