//! Command execution against the gateway
//!
//! Each command returns a JSON value; `main` prints it to stdout.

use anyhow::{Context, Result, anyhow};
use application::{
    FetchError,
    services::{FallbackPolicy, ResourceGateway},
};
use domain::{ResourceKind, ResourcePayload, ResourceRequest};
use serde_json::{Value, json};
use tracing::info;

use crate::cli::{CacheCommand, Locale};

fn describe(kind: ResourceKind, err: &FetchError) -> anyhow::Error {
    anyhow!("{kind}: {} ({err})", err.user_message())
}

fn to_json(payload: &ResourcePayload) -> Result<Value> {
    serde_json::to_value(payload).context("serializing response")
}

pub async fn fetch(
    gateway: &ResourceGateway,
    kind: ResourceKind,
    locale: Locale,
    refresh: bool,
    policy: FallbackPolicy,
) -> Result<Value> {
    let mut request = locale.request(kind);
    if refresh {
        request = request.refreshing();
    }
    let payload = gateway
        .resolve_with_policy(&request, policy)
        .await
        .map_err(|e| describe(kind, &e))?;
    to_json(&payload)
}

pub async fn fallback(gateway: &ResourceGateway, kind: ResourceKind) -> Result<Value> {
    if !kind.has_fallback() {
        anyhow::bail!("{kind} has no fallback provider; use sunshine or snow");
    }
    let payload = gateway
        .resolve_fallback(kind)
        .await
        .map_err(|e| describe(kind, &e))?;
    to_json(&payload)
}

/// Resolve every kind concurrently and report per-kind outcomes
pub async fn prefetch(gateway: &ResourceGateway, locale: Locale) -> Value {
    let requests: Vec<ResourceRequest> = ResourceKind::ALL
        .iter()
        .map(|kind| locale.request(*kind))
        .collect();
    let results = gateway.prefetch(&requests).await;

    let report: Vec<Value> = requests
        .iter()
        .zip(results)
        .map(|(request, result)| match result {
            Ok(_) => json!({
                "kind": request.kind,
                "key": request.cache_key().as_str(),
                "ok": true,
            }),
            Err(err) => json!({
                "kind": request.kind,
                "key": request.cache_key().as_str(),
                "ok": false,
                "error": err.user_message(),
            }),
        })
        .collect();
    let failed = report.iter().filter(|entry| entry["ok"] == false).count();
    info!(total = report.len(), failed, "Prefetch finished");
    Value::Array(report)
}

pub async fn cache(gateway: &ResourceGateway, action: CacheCommand) -> Result<Value> {
    match action {
        CacheCommand::Clear => {
            gateway.clear_cache().await.context("clearing cache")?;
            Ok(json!({ "cleared": true }))
        },
        CacheCommand::Remove { kind, locale } => {
            let request = locale.request(kind);
            gateway
                .invalidate(&request)
                .await
                .with_context(|| format!("removing {}", request.cache_key()))?;
            Ok(json!({ "removed": request.cache_key().as_str() }))
        },
    }
}
