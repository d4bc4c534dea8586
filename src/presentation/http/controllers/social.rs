use crate::application::{commands::social::UpdateSocialLinkCommand, dto::SocialLinkDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSocialLinkRequest {
    pub url: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/social-links",
    responses(
        (status = 200, description = "Social links shown in the site header.", body = [SocialLinkDto])
    ),
    tag = "Site"
)]
pub async fn list_social_links(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<SocialLinkDto>>> {
    state
        .services
        .social_queries
        .list_social_links()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/social-links/{platform}",
    params(("platform" = String, Path, description = "Platform name, e.g. `discord`")),
    request_body = UpdateSocialLinkRequest,
    responses(
        (status = 200, description = "Updated link.", body = SocialLinkDto),
        (status = 401, description = "Missing or wrong admin token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown platform.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_social_link(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Path(platform): Path<String>,
    Json(payload): Json<UpdateSocialLinkRequest>,
) -> HttpResult<Json<SocialLinkDto>> {
    state
        .services
        .social_commands
        .update_social_link(UpdateSocialLinkCommand {
            platform,
            url: payload.url,
        })
        .await
        .into_http()
        .map(Json)
}
