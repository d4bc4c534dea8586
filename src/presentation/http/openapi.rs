// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::titles::list_titles,
        crate::presentation::http::controllers::titles::get_title_by_slug,
        crate::presentation::http::controllers::titles::get_title,
        crate::presentation::http::controllers::titles::create_title,
        crate::presentation::http::controllers::titles::update_title,
        crate::presentation::http::controllers::titles::delete_title,
        crate::presentation::http::controllers::content::list_content,
        crate::presentation::http::controllers::content::create_content,
        crate::presentation::http::controllers::content::update_content,
        crate::presentation::http::controllers::content::delete_content,
        crate::presentation::http::controllers::social::list_social_links,
        crate::presentation::http::controllers::social::update_social_link,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::titles::TitleListResponse,
            crate::presentation::http::controllers::titles::CreateTitleRequest,
            crate::presentation::http::controllers::titles::UpdateTitleRequest,
            crate::presentation::http::controllers::content::CreateContentRequest,
            crate::presentation::http::controllers::content::UpdateContentRequest,
            crate::presentation::http::controllers::social::UpdateSocialLinkRequest,
            crate::application::dto::TitleDto,
            crate::application::dto::ContentUnitDto,
            crate::application::dto::DownloadLinkDto,
            crate::application::dto::SocialLinkDto
        )
    ),
    tags(
        (name = "Titles", description = "Public catalog of anime, movies and manga"),
        (name = "Site", description = "Site-wide settings such as social links"),
        (name = "Admin", description = "Catalog management, requires the admin token"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Anidex API",
        description = "Anime and manga directory backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
