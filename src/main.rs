mod cart;
mod category;
mod checkout;
mod consultation;
mod gear;
mod order;
mod pool;
mod product;
mod twitter;
mod utils;

use axum::Router;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use listenfd::ListenFd;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/");

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    {
        let mut conn = nduthi_gear::establish_connection();
        conn.run_pending_migrations(MIGRATIONS).unwrap();
    }

    let pool = pool::get_pool().await.unwrap();

    let routes = Router::new()
        .merge(category::routes::get_routes())
        .merge(product::routes::get_routes())
        .merge(order::routes::get_routes())
        .merge(consultation::routes::get_routes())
        .merge(gear::routes::get_routes())
        .merge(twitter::routes::get_routes());

    let app = Router::new()
        .nest("/api", routes)
        .with_state(pool)
        .fallback(utils::handler_404);

    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0).unwrap() {
        // if we are given a tcp listener on listen fd 0, we use that one
        Some(listener) => {
            listener.set_nonblocking(true).unwrap();
            TcpListener::from_std(listener).unwrap()
        }
        // otherwise fall back to local listening
        None => TcpListener::bind("127.0.0.1:3000").await.unwrap(),
    };
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
