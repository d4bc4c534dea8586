// src/presentation/http/controllers/content.rs
use crate::application::{
    commands::content::{CreateContentCommand, DeleteContentCommand, UpdateContentCommand},
    dto::{ContentUnitDto, DownloadLinkDto},
    queries::content::ListContentQuery,
};
use crate::domain::content::ContentKind;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContentListParams {
    /// Restrict the listing to one session.
    #[serde(default)]
    pub session: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentRequest {
    /// Episode or chapter number.
    pub ordinal: i32,
    #[serde(default)]
    pub session: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    /// `episode` or `chapter`; must match the title's content type.
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "episode")]
    pub kind: Option<ContentKind>,
    #[serde(default)]
    pub download_links: Vec<DownloadLinkDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub download_links: Option<Vec<DownloadLinkDto>>,
}

#[utoipa::path(
    get,
    path = "/api/v1/titles/{id}/content",
    params(("id" = i64, Path, description = "Title id"), ContentListParams),
    responses(
        (status = 200, description = "Episodes or chapters ordered by session and number.", body = [ContentUnitDto]),
        (status = 404, description = "Title not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Titles"
)]
pub async fn list_content(
    Extension(state): Extension<HttpState>,
    Path(title_id): Path<i64>,
    Query(params): Query<ContentListParams>,
) -> HttpResult<Json<Vec<ContentUnitDto>>> {
    state
        .services
        .content_queries
        .list_content(ListContentQuery {
            title_id,
            session: params.session,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/titles/{id}/content",
    params(("id" = i64, Path, description = "Parent title id")),
    request_body = CreateContentRequest,
    responses(
        (status = 201, description = "Episode or chapter created; the title's freshness is bumped.", body = ContentUnitDto),
        (status = 400, description = "Invalid download links or kind.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or wrong admin token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Parent title not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Ordinal already used in this session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_content(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Path(title_id): Path<i64>,
    Json(payload): Json<CreateContentRequest>,
) -> HttpResult<(StatusCode, Json<ContentUnitDto>)> {
    let command = CreateContentCommand {
        title_id,
        ordinal: payload.ordinal,
        session: payload.session,
        name: payload.name,
        kind: payload.kind,
        download_links: payload.download_links.into_iter().map(Into::into).collect(),
    };

    state
        .services
        .content_commands
        .create_content(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/titles/{id}/content/{session}/{ordinal}",
    params(
        ("id" = i64, Path, description = "Parent title id"),
        ("session" = i32, Path, description = "Session number"),
        ("ordinal" = i32, Path, description = "Episode or chapter number")
    ),
    request_body = UpdateContentRequest,
    responses(
        (status = 200, description = "Updated episode or chapter.", body = ContentUnitDto),
        (status = 400, description = "Invalid download links.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or wrong admin token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such episode or chapter.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_content(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Path((title_id, session, ordinal)): Path<(i64, i32, i32)>,
    Json(payload): Json<UpdateContentRequest>,
) -> HttpResult<Json<ContentUnitDto>> {
    let command = UpdateContentCommand {
        title_id,
        ordinal,
        session,
        name: payload.name,
        download_links: payload
            .download_links
            .map(|links| links.into_iter().map(Into::into).collect()),
    };

    state
        .services
        .content_commands
        .update_content(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/titles/{id}/content/{session}/{ordinal}",
    params(
        ("id" = i64, Path, description = "Parent title id"),
        ("session" = i32, Path, description = "Session number"),
        ("ordinal" = i32, Path, description = "Episode or chapter number")
    ),
    responses(
        (status = 200, description = "Episode or chapter deleted."),
        (status = 401, description = "Missing or wrong admin token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such episode or chapter.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_content(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Path((title_id, session, ordinal)): Path<(i64, i32, i32)>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .content_commands
        .delete_content(DeleteContentCommand {
            title_id,
            ordinal,
            session,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
