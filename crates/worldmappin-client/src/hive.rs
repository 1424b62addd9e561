//! Hive JSON-RPC profile client.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SourcesConfig;
use crate::error::{ClientError, Result};
use crate::sources::{HiveProfile, ProfileMetadata, ProfileSource};

/// JSON-RPC 2.0 request structure.
#[derive(Debug, Serialize)]
struct RpcRequest<'a, T: Serialize> {
    jsonrpc: &'static str,
    method: &'a str,
    params: T,
    id: u64,
}

/// JSON-RPC 2.0 response structure.
#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

/// JSON-RPC 2.0 error.
#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// The subset of a Hive account this client reads.
#[derive(Debug, Default, Deserialize)]
pub struct HiveAccount {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub posting_json_metadata: String,
    #[serde(default)]
    pub json_metadata: String,
}

#[derive(Debug, Default, Deserialize)]
struct AccountMetadata {
    #[serde(default)]
    profile: Option<ProfileMetadata>,
}

impl HiveAccount {
    /// Profile from posting metadata, falling back to the older account metadata.
    pub fn profile(&self) -> ProfileMetadata {
        [&self.posting_json_metadata, &self.json_metadata]
            .into_iter()
            .filter(|raw| !raw.trim().is_empty())
            .filter_map(|raw| serde_json::from_str::<AccountMetadata>(raw).ok())
            .find_map(|metadata| metadata.profile)
            .unwrap_or_default()
    }
}

/// Avatar URL served by the Hive image proxy.
pub fn hive_avatar_url(username: &str) -> String {
    format!("https://images.hive.blog/u/{}/avatar", urlencoding::encode(username))
}

/// Client for the Hive JSON-RPC API.
#[derive(Clone)]
pub struct HiveClient {
    http: Client,
    config: SourcesConfig,
    request_id: Arc<AtomicU64>,
}

impl HiveClient {
    pub fn new(config: SourcesConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            config,
            request_id: Arc::new(AtomicU64::new(1)),
        })
    }

    /// Look up accounts by name. Unknown names are absent from the result.
    pub async fn get_accounts(&self, usernames: &[&str]) -> Result<Vec<HiveAccount>> {
        self.rpc_call("condenser_api.get_accounts", [usernames]).await
    }

    /// Make a JSON-RPC call to the Hive API.
    async fn rpc_call<P: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        method: &str,
        params: P,
    ) -> Result<R> {
        let id = self.request_id.fetch_add(1, Ordering::SeqCst);
        let request = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id,
        };

        debug!("RPC call: {} (id={})", method, id);

        let response = self
            .http
            .post(&self.config.hive_api_url)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status {
                service: "Hive API",
                status: response.status().as_u16(),
            });
        }

        let rpc_response: RpcResponse<R> = response.json().await?;

        if let Some(error) = rpc_response.error {
            return Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        rpc_response.result.ok_or_else(|| ClientError::Rpc {
            code: -1,
            message: "No result in response".to_string(),
        })
    }
}

/// Build the lookup result for `username` from a `get_accounts` answer.
///
/// Only an account whose name matches the requested one counts as found.
pub fn profile_from_accounts(username: &str, accounts: Vec<HiveAccount>) -> HiveProfile {
    let Some(account) = accounts
        .into_iter()
        .find(|account| account.name.eq_ignore_ascii_case(username))
    else {
        debug!("Hive account not found: {}", username);
        return HiveProfile::not_found();
    };

    let profile = account.profile();
    let picture = profile
        .profile_image
        .clone()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| hive_avatar_url(&account.name));

    HiveProfile::found(profile, picture)
}

#[async_trait]
impl ProfileSource for HiveClient {
    async fn fetch_profile(&self, username: &str) -> Result<HiveProfile> {
        let accounts = self.get_accounts(&[username]).await?;
        Ok(profile_from_accounts(username, accounts))
    }
}

impl std::fmt::Debug for HiveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HiveClient")
            .field("api_url", &self.config.hive_api_url)
            .finish()
    }
}
