mod place_api;

use sqlx::{Executor, Pool, Postgres};

use crate::{api::API, error::Error};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>) -> Result<Self, Error> {
        // TODO: move this to migrations
        pool.execute(
            "CREATE TABLE IF NOT EXISTS places (id SERIAL PRIMARY KEY, name VARCHAR(100) NOT NULL, address VARCHAR(200) NOT NULL, description TEXT, created TIMESTAMP DEFAULT NOW())",
        )
        .await?;

        Ok(Self { pool })
    }
}

impl API for Engine {}
