use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use ndlocator_core::{
    FilterCriteria, NewReseller, Position, RegionCode, RegionFilter, Reseller, ResellerPatch,
    SortKey, TypeFilter, Viewport,
};
use ndlocator_store::StoreError;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_store_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct FilterParams {
    #[serde(rename = "type")]
    unit_type: Option<String>,
    region: Option<String>,
    sort: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct LocateBody {
    position: Position,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchData {
    results: Vec<Reseller>,
    viewport: Viewport,
}

#[derive(Debug, Serialize)]
pub(super) struct DeletedData {
    id: i64,
}

pub(super) async fn list_units(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Reseller>>> {
    let store = state.store.read().await;
    Json(ApiResponse {
        data: store.records().to_vec(),
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Text query: recomputes the free-text result set and, on a hit, moves the
/// shared viewport to the first result. The viewport in the response tells
/// the caller where the map should be.
pub(super) async fn search_units(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Json<ApiResponse<SearchData>> {
    let records = state.store.read().await.records().to_vec();
    let mut search = state.search.write().await;
    let results = search.submit_query(&records, &params.q);
    Json(ApiResponse {
        data: SearchData {
            results,
            viewport: search.viewport,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn filter_units(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<FilterParams>,
) -> Result<Json<ApiResponse<Vec<Reseller>>>, ApiError> {
    let criteria = parse_criteria(&params)
        .map_err(|reason| ApiError::new(req_id.0.clone(), "validation_error", reason))?;
    let records = state.store.read().await.records().to_vec();
    let mut search = state.search.write().await;
    let results = search.set_criteria(&records, criteria);
    Ok(Json(ApiResponse {
        data: results,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Resets all filter criteria to defaults and reports the full list.
pub(super) async fn reset_filters(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Reseller>>> {
    let records = state.store.read().await.records().to_vec();
    let mut search = state.search.write().await;
    let results = search.clear_filters(&records);
    Json(ApiResponse {
        data: results,
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Coordinate query: centers the viewport on the supplied pair at the
/// regional zoom. Does not alter the filtered result list.
pub(super) async fn locate(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<LocateBody>,
) -> Result<Json<ApiResponse<Viewport>>, ApiError> {
    if !body.position.in_range() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "position out of range",
        ));
    }
    let mut search = state.search.write().await;
    search.locate(body.position);
    Ok(Json(ApiResponse {
        data: search.viewport,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn create_unit(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(new): Json<NewReseller>,
) -> Result<impl IntoResponse, ApiError> {
    validate_new(&new).map_err(|reason| {
        ApiError::new(req_id.0.clone(), "validation_error", reason)
    })?;

    let mut store = state.store.write().await;
    let created = store
        .create(&new)
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: created,
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

pub(super) async fn update_unit(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<i64>,
    Json(patch): Json<ResellerPatch>,
) -> Result<Json<ApiResponse<Reseller>>, ApiError> {
    validate_patch(&patch).map_err(|reason| {
        ApiError::new(req_id.0.clone(), "validation_error", reason)
    })?;

    let mut store = state.store.write().await;
    let updated = store.update(id, &patch).await.map_err(|e| match e {
        StoreError::EmptyResponse { .. } => {
            ApiError::new(req_id.0.clone(), "not_found", format!("no unit with id {id}"))
        }
        other => map_store_error(req_id.0.clone(), &other),
    })?;

    Ok(Json(ApiResponse {
        data: updated,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn delete_unit(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<DeletedData>>, ApiError> {
    let mut store = state.store.write().await;
    store
        .delete(id)
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: DeletedData { id },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Maps query params to filter criteria.
///
/// "all" (or absence) disables a predicate. Region codes come from a fixed
/// set, so an unknown code is a caller error; an unknown sort value instead
/// degrades to "input order unchanged", matching the engine's contract.
fn parse_criteria(params: &FilterParams) -> Result<FilterCriteria, String> {
    let unit_type = match params.unit_type.as_deref() {
        None | Some("all") => TypeFilter::All,
        Some(unit_type) => TypeFilter::Exact(unit_type.to_string()),
    };

    let region = match params.region.as_deref() {
        None | Some("all") => RegionFilter::All,
        Some(code) => RegionCode::parse(code)
            .map(RegionFilter::Code)
            .ok_or_else(|| format!("unknown region code: {code}"))?,
    };

    let sort = match params.sort.as_deref() {
        None => Some(SortKey::Name),
        Some(raw) => SortKey::parse(raw),
    };

    Ok(FilterCriteria {
        unit_type,
        region,
        sort,
    })
}

/// Presentational required-field checks, applied at the API boundary only.
fn validate_new(new: &NewReseller) -> Result<(), String> {
    for (field, value) in [
        ("name", &new.name),
        ("address", &new.address),
        ("phone", &new.phone),
        ("email", &new.email),
    ] {
        if value.trim().is_empty() {
            return Err(format!("{field} must be non-empty"));
        }
    }
    if !new.position.in_range() {
        return Err("position out of range".to_string());
    }
    if new.coverage_radius.is_some_and(|r| r <= 0.0) {
        return Err("coverageRadius must be positive".to_string());
    }
    Ok(())
}

fn validate_patch(patch: &ResellerPatch) -> Result<(), String> {
    if patch.is_empty() {
        return Err("patch must change at least one field".to_string());
    }
    if patch.position.is_some_and(|p| !p.in_range()) {
        return Err("position out of range".to_string());
    }
    if patch.coverage_radius.is_some_and(|r| r <= 0.0) {
        return Err("coverageRadius must be positive".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_criteria_defaults_to_all_all_name() {
        let params = FilterParams {
            unit_type: None,
            region: None,
            sort: None,
        };
        let criteria = parse_criteria(&params).unwrap();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn parse_criteria_rejects_unknown_region() {
        let params = FilterParams {
            unit_type: None,
            region: Some("rj".to_string()),
            sort: None,
        };
        assert!(parse_criteria(&params).is_err());
    }

    #[test]
    fn parse_criteria_degrades_unknown_sort_to_input_order() {
        let params = FilterParams {
            unit_type: Some("all".to_string()),
            region: Some("mg".to_string()),
            sort: Some("distance".to_string()),
        };
        let criteria = parse_criteria(&params).unwrap();
        assert_eq!(criteria.sort, None);
        assert_eq!(criteria.region, RegionFilter::Code(RegionCode::Mg));
    }

    #[test]
    fn validate_new_rejects_blank_required_fields() {
        let new = NewReseller {
            name: "  ".to_string(),
            address: "Y".to_string(),
            phone: "Z".to_string(),
            email: "x@y.z".to_string(),
            position: Position(1.0, 2.0),
            unit_type: "Unidade Regional".to_string(),
            website: None,
            description: None,
            photo: None,
            coverage_radius: None,
            show_coverage: None,
            covered_cities: None,
        };
        assert!(validate_new(&new).is_err());
    }

    #[test]
    fn validate_patch_rejects_empty_and_out_of_range() {
        assert!(validate_patch(&ResellerPatch::default()).is_err());
        let patch = ResellerPatch {
            position: Some(Position(0.0, 200.0)),
            ..ResellerPatch::default()
        };
        assert!(validate_patch(&patch).is_err());
        let patch = ResellerPatch {
            coverage_radius: Some(-5.0),
            ..ResellerPatch::default()
        };
        assert!(validate_patch(&patch).is_err());
    }
}
