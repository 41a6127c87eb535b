//! Endpoint smoke suite for a running calendar API.
//!
//! Start the server with demo data disabled (`SEED_DEMO_DATA=false`) so the
//! scenario controls every booking, then run `cargo run -p endpoint-integration-tests`.
//! `API_BASE_URL` overrides the default `http://localhost:3000`.

use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

type TestResult<T> = Result<T, Box<dyn std::error::Error>>;

pub struct ApiTestClient {
    client: Client,
    base_url: String,
}

impl ApiTestClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub async fn get(&self, path: &str) -> TestResult<Response> {
        Ok(self.client.get(format!("{}{}", self.base_url, path)).send().await?)
    }

    pub async fn post(&self, path: &str, body: Value) -> TestResult<Response> {
        Ok(self.client.post(format!("{}{}", self.base_url, path)).json(&body).send().await?)
    }

    pub async fn patch(&self, path: &str, body: Value) -> TestResult<Response> {
        Ok(self.client.patch(format!("{}{}", self.base_url, path)).json(&body).send().await?)
    }

    pub async fn delete(&self, path: &str) -> TestResult<Response> {
        Ok(self.client.delete(format!("{}{}", self.base_url, path)).send().await?)
    }
}

/// Test results tracker
#[derive(Debug, Default)]
pub struct TestResults {
    pub passed: u32,
    pub failed: u32,
    pub failures: Vec<String>,
}

impl TestResults {
    pub fn check(&mut self, test_name: &str, ok: bool, detail: impl std::fmt::Display) {
        if ok {
            self.passed += 1;
            println!("✅ {}", test_name);
        } else {
            self.failed += 1;
            self.failures.push(format!("{}: {}", test_name, detail));
            println!("❌ {}: {}", test_name, detail);
        }
    }

    pub fn summary(&self) {
        println!("\n{} passed, {} failed", self.passed, self.failed);
        for failure in &self.failures {
            println!("  - {}", failure);
        }
    }
}

fn booking(patient_name: &str, start: &str, end: &str) -> Value {
    json!({
        "start_time": start,
        "end_time": end,
        "patient_name": patient_name,
        "appointment_type": "Consultation",
        "phone": "+1234567890",
        "notes": "endpoint smoke test",
        "status": "confirmed"
    })
}

async fn created_id(response: Response) -> TestResult<(StatusCode, Option<u64>)> {
    let status = response.status();
    let body: Value = response.json().await?;
    Ok((status, body["data"]["id"].as_u64()))
}

async fn run_calendar_scenario(api: &ApiTestClient, results: &mut TestResults) -> TestResult<()> {
    let health = api.get("/").await?;
    results.check("API is reachable", health.status().is_success(), health.status());

    let (status, a) = created_id(api.post("/appointments", booking("Patient A", "2024-03-04T09:00:00Z", "2024-03-04T10:00:00Z")).await?).await?;
    results.check("Book A 09:00-10:00", status == StatusCode::CREATED, status);

    let (status, b) = created_id(api.post("/appointments", booking("Patient B", "2024-03-04T11:00:00Z", "2024-03-04T12:00:00Z")).await?).await?;
    results.check("Book B 11:00-12:00", status == StatusCode::CREATED, status);

    let overlap = api.post("/appointments", booking("Patient C", "2024-03-04T09:30:00Z", "2024-03-04T10:30:00Z")).await?;
    results.check("Overlap with A is rejected", overlap.status() == StatusCode::CONFLICT, overlap.status());

    let (status, _) = created_id(api.post("/appointments", booking("Patient C", "2024-03-04T10:00:00Z", "2024-03-04T11:00:00Z")).await?).await?;
    results.check("Slot between A and B is accepted", status == StatusCode::CREATED, status);

    let (Some(a), Some(b)) = (a, b) else {
        return Err("seed bookings did not return ids".into());
    };

    let moved = api.patch(&format!("/appointments/{}", b), json!({
        "start_time": "2024-03-04T10:00:00Z",
        "end_time": "2024-03-04T10:45:00Z"
    })).await?;
    results.check("Moving B onto C is rejected", moved.status() == StatusCode::CONFLICT, moved.status());

    let cancelled = api.delete(&format!("/appointments/{}", a)).await?;
    results.check("Cancel A", cancelled.status() == StatusCode::OK, cancelled.status());

    let again = api.delete(&format!("/appointments/{}", a)).await?;
    results.check("Cancel A again is not found", again.status() == StatusCode::NOT_FOUND, again.status());

    let stats: Value = api.get("/appointments/stats").await?.json().await?;
    results.check("Stats endpoint responds", stats["success"] == true, &stats);

    Ok(())
}

#[tokio::main]
async fn main() {
    let api = ApiTestClient::new();
    let mut results = TestResults::default();

    if let Err(e) = run_calendar_scenario(&api, &mut results).await {
        results.check("Calendar scenario completed", false, e);
    }

    results.summary();
    if results.failed > 0 {
        std::process::exit(1);
    }
}
