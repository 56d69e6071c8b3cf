use crate::{security::Security, users::User};
use actix_web::{
    Error, FromRequest, HttpRequest,
    dev::Payload,
    error::{ErrorInternalServerError, ErrorUnauthorized},
    web,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use anyhow::anyhow;
use std::{future::Future, pin::Pin};
use tracing::error;

impl FromRequest for User {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let Some(security) = req.app_data::<web::Data<Security>>() else {
                error!("Security service isn't registered.");
                return Err(ErrorInternalServerError(anyhow!("Internal server error")));
            };

            let Some(bearer_auth) = Option::<BearerAuth>::extract(&req).await? else {
                return Err(ErrorUnauthorized(anyhow!("Unauthorized")));
            };

            security
                .authenticate(bearer_auth.token())
                .ok_or_else(|| ErrorUnauthorized(anyhow!("Unauthorized")))
        })
    }
}
