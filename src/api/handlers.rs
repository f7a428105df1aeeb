use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::{
    api::{
        dto::{ListRoundtablesParams, ListRoundtablesResponse, RoundtableResponse, StatusResponse},
        error::ApiResult,
    },
    domain::CreateRoundtableRequest,
    state::AppState,
};

pub async fn healthcheck() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}

pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: state.directory.status(),
    })
}

pub async fn list_roundtables(
    State(state): State<AppState>,
    params: Result<Query<ListRoundtablesParams>, QueryRejection>,
) -> ApiResult<Json<ListRoundtablesResponse>> {
    let Query(params) = params?;
    let page = state.directory.list_roundtables(params.into_query()).await;
    Ok(Json(ListRoundtablesResponse::from(page)))
}

pub async fn create_roundtable(
    State(state): State<AppState>,
    request: Result<Json<CreateRoundtableRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RoundtableResponse>)> {
    let Json(request) = request?;
    let roundtable = state.directory.create_roundtable(request).await?;
    Ok((StatusCode::CREATED, Json(RoundtableResponse { roundtable })))
}

pub async fn get_roundtable(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RoundtableResponse>> {
    let roundtable = state.directory.get_roundtable(&id).await?;
    Ok(Json(RoundtableResponse { roundtable }))
}
