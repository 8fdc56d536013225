use std::env;

use locus::db::PgPool;
use locus::engine::Engine;
use locus::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_uri = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let PgPool(pool) = PgPool::new(&db_uri, 5).await.unwrap();

    let engine = Engine::new(pool).await.unwrap();

    serve(engine).await;
}
