//! REST client for the roster store and scheduling engine.
//!
//! Implements every core port against the remote HTTP API. Non-success
//! statuses and undecodable bodies both surface as `RosterError::Network`;
//! nothing here touches in-memory state, so every failure is retriable by
//! re-invoking the operation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Method;
use rosterline_core::roster::ports::{AssignmentsGateway, EmployeeDirectory, ShiftTypeCatalog};
use rosterline_core::SchedulingEngine;
use rosterline_domain::{
    Assignment, Employee, EmployeeId, EmployeePatch, FillOffOutcome, GenerateOutcome,
    GenerateRequest, MonthToken, NewEmployee, Result, RosterError, ShiftType, ShiftTypeId,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ApiConfig;
use crate::http::HttpClient;

/// HTTP binding of the remote roster store and scheduling engine.
#[derive(Clone)]
pub struct RosterApiClient {
    base_url: String,
    http: HttpClient,
}

#[derive(Serialize)]
struct UpsertBody {
    employee_id: EmployeeId,
    day: NaiveDate,
    /// `null` clears the cell.
    shift_type_id: Option<ShiftTypeId>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[allow(dead_code)]
    ok: bool,
    created: u64,
    deleted: u64,
    #[serde(default)]
    warnings: Vec<String>,
}

#[derive(Deserialize)]
struct FillOffResponse {
    #[allow(dead_code)]
    ok: bool,
    created: u64,
    #[serde(default)]
    warnings: Vec<String>,
}

#[derive(Serialize)]
struct FillOffBody {
    active_only: bool,
}

impl RosterApiClient {
    /// Build a client for the given base URL (trailing slash tolerated).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder().timeout(timeout).max_attempts(3).build()?;
        Ok(Self { base_url: normalize_base_url(base_url.into()), http })
    }

    /// Build a client from loaded configuration.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(config.base_url.clone(), Duration::from_secs(config.timeout_seconds))
    }

    #[cfg(test)]
    fn with_http(base_url: impl Into<String>, http: HttpClient) -> Self {
        Self { base_url: normalize_base_url(base_url.into()), http }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and decode a JSON response.
    ///
    /// The body is read as text first so status failures can quote it and
    /// decode failures carry context.
    async fn exchange<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&impl Serialize>,
    ) -> Result<T> {
        let mut request = self.http.request(method.clone(), self.url(path)).query(query);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.http.send(request).await?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| RosterError::Network(format!("failed to read response body: {err}")))?;

        if !status.is_success() {
            debug!(%method, path, %status, "API request rejected");
            return Err(RosterError::Network(format!("API {status}: {text}")));
        }

        serde_json::from_str(&text).map_err(|err| {
            RosterError::Network(format!("unexpected response shape from {path}: {err}"))
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        self.exchange(Method::GET, path, query, None::<&()>).await
    }
}

fn normalize_base_url(raw: String) -> String {
    let trimmed = raw.trim();
    trimmed.strip_suffix('/').unwrap_or(trimmed).to_string()
}

#[async_trait]
impl EmployeeDirectory for RosterApiClient {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.get("/employees", &[]).await
    }

    async fn create_employee(&self, new: NewEmployee) -> Result<Employee> {
        self.exchange(Method::POST, "/employees", &[], Some(&new)).await
    }

    async fn patch_employee(&self, id: EmployeeId, patch: EmployeePatch) -> Result<Employee> {
        self.exchange(Method::PATCH, &format!("/employees/{id}"), &[], Some(&patch)).await
    }
}

#[async_trait]
impl ShiftTypeCatalog for RosterApiClient {
    async fn list_shift_types(&self) -> Result<Vec<ShiftType>> {
        self.get("/shift-types", &[]).await
    }
}

#[async_trait]
impl AssignmentsGateway for RosterApiClient {
    async fn list_assignments(&self, month: MonthToken) -> Result<Vec<Assignment>> {
        self.get("/assignments", &[("month", month.to_string())]).await
    }

    async fn upsert_assignment(
        &self,
        employee_id: EmployeeId,
        day: NaiveDate,
        shift_type_id: Option<ShiftTypeId>,
    ) -> Result<()> {
        let body = UpsertBody { employee_id, day, shift_type_id };
        let _ack: serde_json::Value =
            self.exchange(Method::PUT, "/assignments", &[], Some(&body)).await?;
        Ok(())
    }
}

#[async_trait]
impl SchedulingEngine for RosterApiClient {
    async fn generate(
        &self,
        month: MonthToken,
        request: GenerateRequest,
    ) -> Result<GenerateOutcome> {
        let response: GenerateResponse = self
            .exchange(
                Method::POST,
                "/schedule/generate",
                &[("month", month.to_string())],
                Some(&request),
            )
            .await?;
        Ok(GenerateOutcome {
            created: response.created,
            deleted: response.deleted,
            warnings: response.warnings,
        })
    }

    async fn fill_off(&self, month: MonthToken, active_only: bool) -> Result<FillOffOutcome> {
        let response: FillOffResponse = self
            .exchange(
                Method::POST,
                "/schedule/fill-off",
                &[("month", month.to_string())],
                Some(&FillOffBody { active_only }),
            )
            .await?;
        Ok(FillOffOutcome { created: response.created, warnings: response.warnings })
    }
}
