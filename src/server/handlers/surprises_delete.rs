use crate::{
    error::Error as SurprisesError,
    server::app_state::AppState,
    surprises::{SurpriseId, SurpriseStore},
    users::User,
};
use actix_web::{HttpResponse, web};

/// DELETE /api/surprises/{id}
pub async fn surprises_delete<S: SurpriseStore>(
    state: web::Data<AppState<S>>,
    user: User,
    id: web::Path<SurpriseId>,
) -> Result<HttpResponse, SurprisesError> {
    state
        .api
        .surprises()
        .delete_surprise(&user, id.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use crate::{
        server::tests::MockApp,
        tests::{mock_surprise_params, mock_user_with_id},
    };
    use actix_web::{
        App,
        test::{TestRequest, call_service, init_service},
    };
    use uuid::uuid;

    #[actix_web::test]
    async fn can_delete_surprise() -> anyhow::Result<()> {
        let mock = MockApp::new()?;
        let app = init_service(App::new().configure(mock.routes())).await;
        let created = mock
            .state
            .api
            .surprises()
            .create_surprise(&mock.user, mock_surprise_params())
            .await?;

        let response = call_service(
            &app,
            TestRequest::delete()
                .uri(&format!("/api/surprises/{}", created.id))
                .insert_header(mock.auth_header()?)
                .to_request(),
        )
        .await;
        assert_eq!(response.status().as_u16(), 204);
        assert!(mock.state.api.store.surprises().is_empty());

        let response = call_service(
            &app,
            TestRequest::get()
                .uri(&format!("/api/surprises/{}", created.token))
                .to_request(),
        )
        .await;
        assert_eq!(response.status().as_u16(), 404);

        let response = call_service(
            &app,
            TestRequest::delete()
                .uri(&format!("/api/surprises/{}", created.id))
                .insert_header(mock.auth_header()?)
                .to_request(),
        )
        .await;
        assert_eq!(response.status().as_u16(), 404);

        Ok(())
    }

    #[actix_web::test]
    async fn does_not_delete_surprise_of_another_user() -> anyhow::Result<()> {
        let mock = MockApp::new()?;
        let app = init_service(App::new().configure(mock.routes())).await;
        let another_user = mock_user_with_id(uuid!("00000000-0000-0000-0000-000000000002"))?;
        let created = mock
            .state
            .api
            .surprises()
            .create_surprise(&another_user, mock_surprise_params())
            .await?;

        let response = call_service(
            &app,
            TestRequest::delete()
                .uri(&format!("/api/surprises/{}", created.id))
                .insert_header(mock.auth_header()?)
                .to_request(),
        )
        .await;
        assert_eq!(response.status().as_u16(), 404);
        assert_eq!(mock.state.api.store.surprises().len(), 1);

        Ok(())
    }
}
