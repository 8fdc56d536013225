use async_trait::async_trait;

use crate::entities::Place;
use crate::error::Error;

#[async_trait]
pub trait PlaceAPI {
    async fn list_places(&self, name_filter: String) -> Result<Vec<Place>, Error>;

    async fn find_place(&self, id: i32) -> Result<Place, Error>;

    async fn create_place(&self, place: Place) -> Result<Place, Error>;

    async fn update_place(&self, id: i32, place: Place) -> Result<(), Error>;

    async fn delete_place(&self, id: i32) -> Result<(), Error>;
}

pub trait API: PlaceAPI {}
