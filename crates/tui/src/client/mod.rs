use api_types::{
    budget::{BudgetResponse, BudgetUpsert},
    expense::{ExpenseDelete, ExpenseListResponse},
};
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::error::{AppError, Result};

#[derive(Debug)]
pub enum ClientError {
    Unauthorized,
    NotFound,
    Validation(String),
    Server(String),
    Transport(reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::Terminal(format!("invalid base_url: {err}")))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Fetches one page slice plus the complete set in a single round-trip.
    pub async fn expenses_list(
        &self,
        user_id: &str,
        page: u64,
        limit: u64,
    ) -> std::result::Result<ExpenseListResponse, ClientError> {
        let endpoint = self.endpoint("expenses")?;

        let res = self
            .http
            .get(endpoint)
            .query(&[
                ("userId", user_id),
                ("page", &page.to_string()),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return res
                .json::<ExpenseListResponse>()
                .await
                .map_err(ClientError::Transport);
        }

        Err(Self::error_for(res).await)
    }

    /// Asks the service to delete one expense. The caller mutates local state
    /// only after this resolves successfully.
    pub async fn expense_delete(
        &self,
        id: &str,
        user_id: &str,
    ) -> std::result::Result<(), ClientError> {
        let endpoint = self.endpoint(&format!("expenses/{id}"))?;

        let payload = ExpenseDelete {
            user_id: user_id.to_string(),
        };

        let res = self
            .http
            .delete(endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return Ok(());
        }

        Err(Self::error_for(res).await)
    }

    pub async fn budget_get(&self, user_id: &str) -> std::result::Result<f64, ClientError> {
        let endpoint = self.endpoint(&format!("budget/{user_id}"))?;

        let res = self
            .http
            .get(endpoint)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return res
                .json::<BudgetResponse>()
                .await
                .map(|body| body.budget)
                .map_err(ClientError::Transport);
        }

        Err(Self::error_for(res).await)
    }

    pub async fn budget_set(
        &self,
        user_id: &str,
        budget: f64,
    ) -> std::result::Result<(), ClientError> {
        let endpoint = self.endpoint("budget")?;

        let payload = BudgetUpsert {
            user_id: user_id.to_string(),
            budget,
        };

        let res = self
            .http
            .post(endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return Ok(());
        }

        Err(Self::error_for(res).await)
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Server(format!("invalid base_url: {err}")))
    }

    /// Maps a non-success response onto the error taxonomy. The service puts
    /// a human-readable message under `error` when it has one.
    async fn error_for(res: reqwest::Response) -> ClientError {
        let status = res.status();
        let body = res
            .json::<ErrorResponse>()
            .await
            .map(|err| err.error)
            .unwrap_or_else(|_| "unknown error".to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Unauthorized,
            StatusCode::NOT_FOUND => ClientError::NotFound,
            StatusCode::UNPROCESSABLE_ENTITY | StatusCode::BAD_REQUEST => {
                ClientError::Validation(body)
            }
            _ => ClientError::Server(body),
        }
    }
}

/// One-line description used for toasts and logs.
pub fn describe_error(err: &ClientError) -> String {
    match err {
        ClientError::Unauthorized => "Not authorized for this user.".to_string(),
        ClientError::NotFound => "Not found on the server.".to_string(),
        ClientError::Validation(message) => format!("Rejected by the server: {message}"),
        ClientError::Server(message) => format!("Server error: {message}"),
        ClientError::Transport(err) => format!("Server unreachable: {err}"),
    }
}
