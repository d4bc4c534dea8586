// src/presentation/http/controllers/titles.rs
use crate::application::{
    commands::titles::{CreateTitleCommand, DeleteTitleCommand, UpdateTitleCommand},
    dto::{CursorPage, TitleDto},
    queries::titles::{DEFAULT_PAGE_LIMIT, GetTitleBySlugQuery, ListTitlesQuery},
};
use crate::domain::title::{ContentType, SubDubStatus};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct TitleListParams {
    /// `Anime`, `Movie` or `Manga`.
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub content_type: Option<ContentType>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TitleListResponse {
    pub items: Vec<TitleDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl From<CursorPage<TitleDto>> for TitleListResponse {
    fn from(page: CursorPage<TitleDto>) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTitleRequest {
    pub title: String,
    #[schema(value_type = String, example = "Anime")]
    pub content_type: ContentType,
    #[serde(default)]
    #[schema(value_type = String, example = "SUB")]
    pub sub_dub: SubDubStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTitleRequest {
    pub title: Option<String>,
    #[schema(value_type = Option<String>)]
    pub content_type: Option<ContentType>,
    #[schema(value_type = Option<String>)]
    pub sub_dub: Option<SubDubStatus>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub genres: Option<Vec<String>>,
    pub release_year: Option<i32>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/titles",
    params(TitleListParams),
    responses(
        (status = 200, description = "Titles ordered by most recent episode or chapter activity.", body = TitleListResponse),
        (status = 400, description = "Invalid cursor.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Titles"
)]
pub async fn list_titles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<TitleListParams>,
) -> HttpResult<Json<TitleListResponse>> {
    state
        .services
        .title_queries
        .list_titles(ListTitlesQuery {
            content_type: params.content_type,
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/titles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Title slug")),
    responses(
        (status = 200, description = "Title detail.", body = TitleDto),
        (status = 404, description = "No title holds this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Titles"
)]
pub async fn get_title_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<TitleDto>> {
    state
        .services
        .title_queries
        .get_title_by_slug(GetTitleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/titles/{id}",
    params(("id" = i64, Path, description = "Title id")),
    responses(
        (status = 200, description = "Title detail.", body = TitleDto),
        (status = 404, description = "Title not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Titles"
)]
pub async fn get_title(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<TitleDto>> {
    state
        .services
        .title_queries
        .get_title_by_id(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/titles",
    request_body = CreateTitleRequest,
    responses(
        (status = 201, description = "Title created with a unique slug.", body = TitleDto),
        (status = 400, description = "Title has no sluggable characters or is invalid.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or wrong admin token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "No free slug could be found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_title(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Json(payload): Json<CreateTitleRequest>,
) -> HttpResult<(StatusCode, Json<TitleDto>)> {
    let command = CreateTitleCommand {
        title: payload.title,
        content_type: payload.content_type,
        sub_dub: payload.sub_dub,
        description: payload.description,
        thumbnail_url: payload.thumbnail_url,
        genres: payload.genres,
        release_year: payload.release_year,
        meta_title: payload.meta_title,
        meta_description: payload.meta_description,
    };

    state
        .services
        .title_commands
        .create_title(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/titles/{id}",
    params(("id" = i64, Path, description = "Title id")),
    request_body = UpdateTitleRequest,
    responses(
        (status = 200, description = "Updated title.", body = TitleDto),
        (status = 401, description = "Missing or wrong admin token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Title not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_title(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTitleRequest>,
) -> HttpResult<Json<TitleDto>> {
    let command = UpdateTitleCommand {
        id,
        title: payload.title,
        content_type: payload.content_type,
        sub_dub: payload.sub_dub,
        description: payload.description,
        thumbnail_url: payload.thumbnail_url,
        genres: payload.genres,
        release_year: payload.release_year,
        meta_title: payload.meta_title,
        meta_description: payload.meta_description,
    };

    state
        .services
        .title_commands
        .update_title(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/titles/{id}",
    params(("id" = i64, Path, description = "Title id")),
    responses(
        (status = 200, description = "Title and its episodes or chapters deleted."),
        (status = 401, description = "Missing or wrong admin token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Title not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_title(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .title_commands
        .delete_title(DeleteTitleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
