use std::collections::HashMap;
use std::sync::Arc;

use api_problem::Problem;
use axum::extract::{Multipart, Path, Query};
use axum::{Extension, Json};
use tracing::info;

use crate::api::rest::dto::{ItemDto, PointDetailDto, PointDto, PointWithUrlDto, SearchQuery};
use crate::api::rest::error::{ApiError, ApiResult};
use crate::domain::service::RegisterPointInput;
use crate::infra::uploads::ImageStore;
use crate::Service;

/// Register a collection point from a multipart form submission.
///
/// The image file is stored first; the registry then consumes only the
/// resulting filename. Field validation itself lives in the domain service.
#[tracing::instrument(skip(svc, store, multipart))]
pub async fn create_point(
    Extension(svc): Extension<Arc<Service>>,
    Extension(store): Extension<Arc<ImageStore>>,
    mut multipart: Multipart,
) -> ApiResult<Json<PointDto>> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let Some(name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };

        if name == "image" {
            let file_name = field.file_name().unwrap_or("upload").to_owned();
            let bytes = field.bytes().await.map_err(bad_multipart)?;
            image = Some((file_name, bytes.to_vec()));
        } else {
            let text = field.text().await.map_err(bad_multipart)?;
            fields.insert(name, text);
        }
    }

    let (file_name, bytes) = image.ok_or_else(|| {
        ApiError::from(Problem::validation("image: an image file is required"))
    })?;

    let stored_name = store.save(&file_name, &bytes).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to store uploaded image");
        ApiError::from(Problem::internal())
    })?;

    info!(image = %stored_name, "Stored uploaded image");

    let input = RegisterPointInput {
        image: stored_name,
        name: take(&mut fields, "name")?,
        email: take(&mut fields, "email")?,
        whatsapp: take(&mut fields, "whatsapp")?,
        latitude: take_f64(&mut fields, "latitude")?,
        longitude: take_f64(&mut fields, "longitude")?,
        city: take(&mut fields, "city")?,
        uf: take(&mut fields, "uf")?,
        items: take(&mut fields, "items")?,
    };

    let point = svc.register_point(input).await?;
    Ok(Json(PointDto::from(point)))
}

/// List points matching the optional uf/city/items filters.
#[tracing::instrument(skip(svc, query))]
pub async fn list_points(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<PointWithUrlDto>>> {
    let points = svc
        .search_points(query.uf, query.city, query.items.as_deref())
        .await?;

    Ok(Json(points.into_iter().map(Into::into).collect()))
}

/// Fetch one point plus its associated item titles.
#[tracing::instrument(skip(svc), fields(point_id = id))]
pub async fn point_detail(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<PointDetailDto>> {
    let detail = svc.point_detail(id).await?;
    Ok(Json(detail.into()))
}

/// The static recyclable-item catalog.
#[tracing::instrument(skip(svc))]
pub async fn list_items(
    Extension(svc): Extension<Arc<Service>>,
) -> ApiResult<Json<Vec<ItemDto>>> {
    let items = svc.list_items().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> ApiError {
    Problem::validation(format!("malformed multipart request: {e}")).into()
}

fn take(fields: &mut HashMap<String, String>, name: &str) -> Result<String, ApiError> {
    fields
        .remove(name)
        .ok_or_else(|| Problem::validation(format!("{name}: field is required")).into())
}

fn take_f64(fields: &mut HashMap<String, String>, name: &str) -> Result<f64, ApiError> {
    let raw = take(fields, name)?;
    raw.trim()
        .parse()
        .map_err(|_| Problem::validation(format!("{name}: '{raw}' is not a number")).into())
}
