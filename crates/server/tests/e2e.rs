//! Live checks against a real MongoDB. Skipped unless `MONGO_URI` is set and
//! `SKIP_DB_TESTS` is not.

use std::net::SocketAddr;
use std::sync::Arc;

use configs::DatabaseConfig;
use models::{Product, Resource, User};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use server::openapi::ApiDocumented;
use server::{build_router, AppState};
use service::{MongoRepository, ResourceRepository, ResourceService};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

struct TestApp {
    base_url: String,
}

async fn start_server<R: Resource + ApiDocumented>() -> anyhow::Result<Option<TestApp>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let Ok(uri) = std::env::var("MONGO_URI") else {
        eprintln!("MONGO_URI missing; skip e2e tests");
        return Ok(None);
    };
    let cfg = DatabaseConfig {
        uri,
        connect_attempts: 1,
        connect_retry_delay_secs: 0,
        server_selection_timeout_secs: 2,
        probe_on_startup: true,
    };
    let client = match models::db::connect(&cfg).await {
        Ok(c) => c,
        Err(e) => {
            eprintln!("skip: cannot connect to MongoDB: {e}");
            return Ok(None);
        }
    };

    let repo: Arc<dyn ResourceRepository<R>> = Arc::new(MongoRepository::<R>::new(&client));
    let app = build_router(AppState::new(ResourceService::new(repo)), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {e}");
        }
    });
    Ok(Some(TestApp { base_url: format!("http://{addr}") }))
}

#[tokio::test]
async fn e2e_product_lifecycle() -> anyhow::Result<()> {
    let Some(app) = start_server::<Product>().await? else { return Ok(()) };
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/products/", app.base_url))
        .json(&json!({"name": "Widget", "price": 9.99}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created: Value = res.json().await?;
    let id = created["_id"].as_str().unwrap_or_default().to_string();
    assert_eq!(id.len(), 24);
    assert_eq!(created["name"], "Widget");
    assert_eq!(created["price"], 9.99);

    let res = c.get(format!("{}/products/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    let res = c
        .put(format!("{}/products/{id}", app.base_url))
        .json(&json!({"name": "Gadget", "price": 5}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["_id"], created["_id"]);
    assert_eq!(updated["name"], "Gadget");

    let res = c.delete(format!("{}/products/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"message": "Product deleted successfully"}));

    let res = c.get(format!("{}/products/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_user_list_and_validation() -> anyhow::Result<()> {
    let Some(app) = start_server::<User>().await? else { return Ok(()) };
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/users/not-a-valid-id", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["detail"], "Invalid user ID format");

    let res = c
        .post(format!("{}/users/", app.base_url))
        .json(&json!({"username": "e2e", "email": "e2e@example.com"}))
        .send()
        .await?;
    let created: Value = res.json().await?;
    let id = created["_id"].as_str().unwrap_or_default().to_string();

    let res = c
        .get(format!("{}/users/?skip=1000000&limit=5", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([]));

    let missing = "000000000000000000000000";
    let res = c
        .put(format!("{}/users/{missing}", app.base_url))
        .json(&json!({"username": "ghost", "email": "ghost@x"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.delete(format!("{}/users/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}
