use super::Engine;

use async_trait::async_trait;
use sqlx::{postgres::PgRow, Executor, Row};

use crate::{
    api::PlaceAPI,
    entities::Place,
    error::{not_found_error, Error},
};

fn place_from_row(row: &PgRow) -> Result<Place, Error> {
    // description column is nullable
    let description: Option<String> = row.try_get("description")?;

    Ok(Place {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        address: row.try_get("address")?,
        description: description.unwrap_or_default(),
    })
}

#[async_trait]
impl PlaceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_places(&self, name_filter: String) -> Result<Vec<Place>, Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(
                sqlx::query(
                    "SELECT id, name, address, description FROM places WHERE LOWER(name) LIKE '%' || $1 || '%'",
                )
                .bind(name_filter.to_lowercase()),
            )
            .await?;

        let mut places = Vec::with_capacity(rows.len());
        for row in rows.iter() {
            places.push(place_from_row(row)?);
        }

        Ok(places)
    }

    #[tracing::instrument(skip(self))]
    async fn find_place(&self, id: i32) -> Result<Place, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_row = conn
            .fetch_optional(
                sqlx::query("SELECT id, name, address, description FROM places WHERE id = $1")
                    .bind(id),
            )
            .await?;

        let row = maybe_row.ok_or_else(|| not_found_error())?;

        place_from_row(&row)
    }

    #[tracing::instrument(skip(self, place))]
    async fn create_place(&self, place: Place) -> Result<Place, Error> {
        let mut conn = self.pool.acquire().await?;

        let row = conn
            .fetch_one(
                sqlx::query(
                    "INSERT INTO places (name, address, description) VALUES ($1, $2, $3) RETURNING id",
                )
                .bind(&place.name)
                .bind(&place.address)
                .bind(&place.description),
            )
            .await?;

        let id = row.try_get("id")?;

        Ok(Place { id, ..place })
    }

    #[tracing::instrument(skip(self, place))]
    async fn update_place(&self, id: i32, place: Place) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        // no rows-affected check: updating a missing id is not an error
        conn.execute(
            sqlx::query(
                "UPDATE places SET name = $1, address = $2, description = $3 WHERE id = $4",
            )
            .bind(&place.name)
            .bind(&place.address)
            .bind(&place.description)
            .bind(id),
        )
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_place(&self, id: i32) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(sqlx::query("DELETE FROM places WHERE id = $1").bind(id))
            .await?;

        Ok(())
    }
}
