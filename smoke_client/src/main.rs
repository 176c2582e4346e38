//! Smoke test: drives every users endpoint once, in order, against a running server.
//!
//! Run the server (`cargo run -p users-api`), then `cargo run -p smoke-client`.
//! `SMOKE_BASE_URL` overrides the target (default `http://localhost:3000`).

use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Value};

type BoxError = Box<dyn std::error::Error>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("smoke_client=info")),
        )
        .init();

    let base = std::env::var("SMOKE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());
    let users = format!("{}/users", base.trim_end_matches('/'));
    let client = Client::new();

    if let Err(e) = run(&client, &users).await {
        tracing::error!(error = %e, "smoke test failed");
        return Err(e);
    }
    tracing::info!("smoke test passed");
    Ok(())
}

async fn run(client: &Client, users: &str) -> Result<(), BoxError> {
    let created = expect(
        "Create User",
        client
            .post(users)
            .json(&json!({ "name": "John Doe", "email": "john@example.com", "address": "123 Main St" }))
            .send()
            .await?,
        StatusCode::OK,
    )
    .await?;
    let id = created["id"].as_i64().ok_or("create response has no integer id")?;
    let user_url = format!("{}/{}", users, id);

    expect("Get All Users", client.get(users).send().await?, StatusCode::OK).await?;
    expect("Get User by ID", client.get(&user_url).send().await?, StatusCode::OK).await?;

    expect(
        "Update User",
        client
            .put(&user_url)
            .json(&json!({ "name": "Harris", "email": "harris@fake.com", "address": "leof. alexandras 120" }))
            .send()
            .await?,
        StatusCode::OK,
    )
    .await?;
    let updated = expect("Get Updated User", client.get(&user_url).send().await?, StatusCode::OK).await?;
    if updated["user"]["name"] != "Harris" {
        return Err(format!("update not applied: {}", updated).into());
    }

    expect("Delete User", client.delete(&user_url).send().await?, StatusCode::OK).await?;
    expect("Get Deleted User", client.get(&user_url).send().await?, StatusCode::NOT_FOUND).await?;
    Ok(())
}

/// Log the response body under `step` and fail unless the status matches.
async fn expect(step: &str, res: Response, want: StatusCode) -> Result<Value, BoxError> {
    let status = res.status();
    let body: Value = res.json().await?;
    tracing::info!(%status, body = %body, "{} Response", step);
    if status != want {
        return Err(format!("{}: expected {}, got {} ({})", step, want, status, body).into());
    }
    Ok(body)
}
