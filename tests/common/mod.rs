//! Shared harness for the HTTP integration tests.
//!
//! The router runs with the real services and token verifier; only the
//! repositories are swapped for in-memory versions, and the database handle
//! is left disconnected.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::AUTHORIZATION, Method, Request, Response, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use reimbursement_api::api::{create_router, AppState};
use reimbursement_api::config::Config;
use reimbursement_api::domain::{Account, ListScope, PermissionLevel, Reimbursement};
use reimbursement_api::errors::{AppError, AppResult};
use reimbursement_api::infra::{AccountRepository, Database, ReimbursementRepository};
use reimbursement_api::services::{
    AccountManager, AuthService, Authenticator, ReimbursementManager,
};

pub const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

// =============================================================================
// In-memory repositories
// =============================================================================

#[derive(Default)]
pub struct InMemoryAccounts {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryAccounts {
    pub fn add(&self, account: Account) {
        self.accounts.lock().unwrap().push(account);
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.login == login)
            .cloned())
    }
}

/// Id-ordered store; ids start at 1 like a fresh sequence.
#[derive(Default)]
pub struct InMemoryReimbursements {
    rows: Mutex<BTreeMap<i64, Reimbursement>>,
    next_id: Mutex<i64>,
}

impl InMemoryReimbursements {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: i64) -> Option<Reimbursement> {
        self.rows.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl ReimbursementRepository for InMemoryReimbursements {
    async fn save(&self, mut record: Reimbursement) -> AppResult<Reimbursement> {
        let mut rows = self.rows.lock().unwrap();
        match record.id {
            Some(id) => {
                if !rows.contains_key(&id) {
                    return Err(AppError::NotFound);
                }
                rows.insert(id, record.clone());
            }
            None => {
                let mut next_id = self.next_id.lock().unwrap();
                *next_id += 1;
                record.id = Some(*next_id);
                rows.insert(*next_id, record.clone());
            }
        }
        Ok(record)
    }

    async fn find_all(&self) -> AppResult<Vec<Reimbursement>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_account(&self, account_id: i64) -> AppResult<Vec<Reimbursement>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Reimbursement>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

// =============================================================================
// Test application
// =============================================================================

pub struct TestApp {
    pub router: Router,
    pub accounts: Arc<InMemoryAccounts>,
    pub reimbursements: Arc<InMemoryReimbursements>,
    auth: Arc<Authenticator>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_scope(ListScope::All)
    }

    pub fn with_scope(list_scope: ListScope) -> Self {
        let mut config = Config::with_secret(TEST_SECRET);
        config.list_scope = list_scope;

        let accounts = Arc::new(InMemoryAccounts::default());
        let reimbursements = Arc::new(InMemoryReimbursements::default());
        let auth = Arc::new(Authenticator::new(config.clone()));

        let state = AppState::new(
            auth.clone(),
            Arc::new(AccountManager::new(accounts.clone())),
            Arc::new(ReimbursementManager::new(
                reimbursements.clone(),
                config.list_scope,
            )),
            Arc::new(Database::from_connection(DatabaseConnection::default())),
        );

        Self {
            router: create_router(state),
            accounts,
            reimbursements,
            auth,
        }
    }

    /// Register an account and return a bearer token for it
    pub fn account(&self, id: i64, login: &str, permission: PermissionLevel) -> String {
        self.accounts.add(Account::new(id, login, permission));
        self.token_for(login)
    }

    /// Token for a login, whether or not an account exists
    pub fn token_for(&self, login: &str) -> String {
        self.auth.issue_token(login).unwrap().access_token
    }

    /// Put a record straight into the store, bypassing permission checks
    pub async fn seed(&self, record: Reimbursement) -> Reimbursement {
        self.reimbursements.save(record).await.unwrap()
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

pub fn assert_status(response: &Response<Body>, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status");
}
