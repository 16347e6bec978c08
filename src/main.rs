use hostel_finder::{app, db, AppState};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let database_url = dotenv::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db_pool = db::connect(&database_url)
        .await
        .expect("failed to connect to database");
    db::init(&db_pool)
        .await
        .expect("failed to initialize database");

    let port = dotenv::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);

    let app = app(AppState { db_pool });

    log::info!("server running on port {port}");
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
