use axum::extract::{Extension, Json, Path, Query};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::entities::Place;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    name: String,
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Place>>, Error> {
    let places = api.list_places(params.name).await?;

    Ok(places.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<i32>,
) -> Result<Json<Place>, Error> {
    let place = api.find_place(id).await?;

    Ok(place.into())
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(place): Json<Place>,
) -> Result<(StatusCode, Json<Place>), Error> {
    place.validate()?;

    let place = api.create_place(place).await?;

    Ok((StatusCode::CREATED, place.into()))
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<i32>,
    Json(place): Json<Place>,
) -> Result<StatusCode, Error> {
    place.validate()?;

    api.update_place(id, place).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Error> {
    api.delete_place(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
