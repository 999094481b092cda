//! Resource gateway
//!
//! Facade over the cache store, the fetch client and the fallback provider.
//! Resolution is cache-first: a fresh entry is returned without touching the
//! network, otherwise the primary API is queried and the result written back.

use std::fmt;
use std::sync::Arc;

use domain::{
    entities::{
        ActivitiesResponse, LunchResponse, NewsResponse, ResourcePayload, SnowResponse,
        SunshineResponse, WeekendResponse,
    },
    value_objects::{CacheKey, City, Language, ResourceKind, ResourceRequest, TtlPolicy},
};
use futures::future::join_all;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, instrument, warn};

use super::{fallback_policy::FallbackPolicy, fetch_client::FetchClient};
use crate::{
    error::{CacheError, FetchError, GatewayError},
    ports::{CacheStore, CacheStoreExt, FallbackForecastPort},
};

/// Query parameters sent to the primary API for a request
pub fn primary_query(request: &ResourceRequest) -> Vec<(&'static str, String)> {
    let mut query = vec![("lang", request.language.code().to_string())];
    if let Some(city) = request.effective_city() {
        query.push(("city", city.id().to_string()));
    }
    if request.force_refresh && request.kind.supports_server_refresh() {
        query.push(("refresh", "true".to_string()));
    }
    query
}

/// Cache-first access to every resource kind
pub struct ResourceGateway {
    client: FetchClient,
    cache: Arc<dyn CacheStore>,
    fallback: Arc<dyn FallbackForecastPort>,
    ttl: TtlPolicy,
}

impl fmt::Debug for ResourceGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceGateway")
            .field("client", &self.client)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl ResourceGateway {
    pub fn new(
        client: FetchClient,
        cache: Arc<dyn CacheStore>,
        fallback: Arc<dyn FallbackForecastPort>,
    ) -> Self {
        Self {
            client,
            cache,
            fallback,
            ttl: TtlPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_ttl_policy(mut self, ttl: TtlPolicy) -> Self {
        self.ttl = ttl;
        self
    }

    #[must_use]
    pub const fn ttl_policy(&self) -> &TtlPolicy {
        &self.ttl
    }

    /// Resolve a request to its canonical response
    ///
    /// Fetch errors propagate unchanged. Cache failures only cost a refetch.
    #[instrument(skip(self), fields(kind = %request.kind, key = %request.cache_key()))]
    pub async fn resolve(&self, request: &ResourceRequest) -> Result<ResourcePayload, GatewayError> {
        match request.kind {
            ResourceKind::News => self.resolve_as(request).await.map(ResourcePayload::News),
            ResourceKind::Activities => self
                .resolve_as(request)
                .await
                .map(ResourcePayload::Activities),
            ResourceKind::Lunch => self.resolve_as(request).await.map(ResourcePayload::Lunch),
            ResourceKind::Weekend => self.resolve_as(request).await.map(ResourcePayload::Weekend),
            ResourceKind::Sunshine => self
                .resolve_as(request)
                .await
                .map(ResourcePayload::Sunshine),
            ResourceKind::Snow => self.resolve_as(request).await.map(ResourcePayload::Snow),
        }
    }

    /// Resolve, answering from the fallback provider when `policy` allows it
    #[instrument(skip(self), fields(kind = %request.kind))]
    pub async fn resolve_with_policy(
        &self,
        request: &ResourceRequest,
        policy: FallbackPolicy,
    ) -> Result<ResourcePayload, GatewayError> {
        match self.resolve(request).await {
            Ok(payload) => Ok(payload),
            Err(err) if policy.should_fall_back(request.kind, &err) => {
                warn!(error = %err, policy = %policy, "Primary service failed, using fallback provider");
                self.resolve_fallback(request.kind).await
            },
            Err(err) => Err(err),
        }
    }

    pub async fn news(&self, language: Language, city: City) -> Result<NewsResponse, GatewayError> {
        self.resolve_as(&ResourceRequest::new(ResourceKind::News, language).with_city(city))
            .await
    }

    pub async fn activities(
        &self,
        language: Language,
        city: City,
    ) -> Result<ActivitiesResponse, GatewayError> {
        self.resolve_as(&ResourceRequest::new(ResourceKind::Activities, language).with_city(city))
            .await
    }

    pub async fn lunch(&self, language: Language, city: City) -> Result<LunchResponse, GatewayError> {
        self.resolve_as(&ResourceRequest::new(ResourceKind::Lunch, language).with_city(city))
            .await
    }

    pub async fn weekend(
        &self,
        language: Language,
        city: City,
    ) -> Result<WeekendResponse, GatewayError> {
        self.resolve_as(&ResourceRequest::new(ResourceKind::Weekend, language).with_city(city))
            .await
    }

    pub async fn sunshine(&self, language: Language) -> Result<SunshineResponse, GatewayError> {
        self.resolve_as(&ResourceRequest::new(ResourceKind::Sunshine, language))
            .await
    }

    pub async fn snow(&self, language: Language) -> Result<SnowResponse, GatewayError> {
        self.resolve_as(&ResourceRequest::new(ResourceKind::Snow, language))
            .await
    }

    /// Compute a forecast from the fallback provider
    ///
    /// Only sunshine and snow have a fallback; other kinds are rejected with
    /// [`FetchError::InvalidData`].
    pub async fn resolve_fallback(&self, kind: ResourceKind) -> Result<ResourcePayload, GatewayError> {
        match kind {
            ResourceKind::Sunshine => self.sunshine_fallback().await.map(ResourcePayload::Sunshine),
            ResourceKind::Snow => self.snow_fallback().await.map(ResourcePayload::Snow),
            other => Err(FetchError::InvalidData(format!(
                "no fallback provider for {other}"
            ))),
        }
    }

    /// Sunshine forecast from the fallback provider, cached under the primary key
    #[instrument(skip(self))]
    pub async fn sunshine_fallback(&self) -> Result<SunshineResponse, GatewayError> {
        let response = self.fallback.sunshine().await?;
        info!(
            destinations = response.destinations.len(),
            "Sunshine forecast computed by fallback provider"
        );
        self.store(&CacheKey::derive(ResourceKind::Sunshine, None, Language::default()), &response)
            .await;
        Ok(response)
    }

    /// Snow forecast from the fallback provider, cached under the primary key
    #[instrument(skip(self))]
    pub async fn snow_fallback(&self) -> Result<SnowResponse, GatewayError> {
        let response = self.fallback.snow().await?;
        info!(
            resorts = response.resorts.len(),
            "Snow forecast computed by fallback provider"
        );
        self.store(&CacheKey::derive(ResourceKind::Snow, None, Language::default()), &response)
            .await;
        Ok(response)
    }

    /// Fresh cached response, without any network access
    pub async fn cached(&self, request: &ResourceRequest) -> Option<ResourcePayload> {
        let key = request.cache_key();
        let bytes = self
            .cache
            .get(key.as_str(), self.ttl.ttl_for(request.kind))
            .await?;
        match ResourcePayload::from_json_slice(request.kind, &bytes) {
            Ok(payload) => Some(payload),
            Err(e) => {
                debug!(key = %key, error = %e, "Cached payload no longer matches schema");
                None
            },
        }
    }

    /// Drop the cached response for a request
    pub async fn invalidate(&self, request: &ResourceRequest) -> Result<(), CacheError> {
        let key = request.cache_key();
        debug!(key = %key, "Invalidating cache entry");
        self.cache.remove(key.as_str()).await
    }

    /// Drop every cached response
    pub async fn clear_cache(&self) -> Result<(), CacheError> {
        info!("Clearing response cache");
        self.cache.clear_all().await
    }

    /// Resolve several requests concurrently, one result per request in order
    pub async fn prefetch(
        &self,
        requests: &[ResourceRequest],
    ) -> Vec<Result<ResourcePayload, GatewayError>> {
        join_all(requests.iter().map(|request| self.resolve(request))).await
    }

    async fn resolve_as<T>(&self, request: &ResourceRequest) -> Result<T, GatewayError>
    where
        T: DeserializeOwned + Serialize + Send + Sync,
    {
        let key = request.cache_key();

        if request.force_refresh {
            debug!(key = %key, "Force refresh requested, skipping cache read");
        } else if let Some(hit) = self
            .cache
            .get_json::<T>(key.as_str(), self.ttl.ttl_for(request.kind))
            .await
        {
            debug!(key = %key, "Cache hit");
            return Ok(hit);
        } else {
            debug!(key = %key, "Cache miss");
        }

        let value: T = self
            .client
            .fetch(request.kind.endpoint_path(), &primary_query(request))
            .await?;
        self.store(&key, &value).await;
        Ok(value)
    }

    async fn store<T>(&self, key: &CacheKey, value: &T)
    where
        T: Serialize + Send + Sync,
    {
        if let Err(e) = self.cache.set_json(key.as_str(), value).await {
            warn!(key = %key, error = %e, "Failed to write cache entry");
        }
    }
}
