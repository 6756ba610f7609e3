use crate::catalog::matcher;
use crate::model::{CatalogSnapshot, LookupError, MatchResult, RefreshError};
use crate::parser::{Parser, SheetCsvParser};
use crate::source::CatalogSource;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Owns the current catalog snapshot and refreshes it on demand once it is
/// older than the configured TTL.
///
/// A lookup clones the Arc out once and matches against that object only;
/// refresh builds the replacement off to the side and installs it with a
/// single pointer swap. Concurrent refreshes are harmless, the last writer
/// wins.
pub struct CatalogCache {
    source: Arc<dyn CatalogSource>,
    parser: SheetCsvParser,
    ttl_seconds: u64,
    current: RwLock<Option<Arc<CatalogSnapshot>>>,
}

impl CatalogCache {
    pub fn new(source: Arc<dyn CatalogSource>, ttl_seconds: u64) -> Self {
        Self {
            source,
            parser: SheetCsvParser::new(),
            ttl_seconds,
            current: RwLock::new(None),
        }
    }

    /// Resolves a query against a fresh-or-stale snapshot. Fails only when
    /// the source is down and nothing was ever cached.
    pub async fn find(&self, query: &str) -> Result<MatchResult, LookupError> {
        let snapshot = self.fresh_snapshot().await?;
        Ok(matcher::find_in(&snapshot, query))
    }

    async fn fresh_snapshot(&self) -> Result<Arc<CatalogSnapshot>, LookupError> {
        if let Some(snapshot) = self.current_if_fresh().await {
            return Ok(snapshot);
        }

        match self.refresh().await {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => {
                let stale = self.current.read().await.clone();
                match stale {
                    Some(snapshot) => {
                        warn!(
                            "Refresh failed: {}. Serving snapshot from {}",
                            e, snapshot.fetched_at
                        );
                        Ok(snapshot)
                    }
                    None => Err(LookupError::SourceUnavailable(e.to_string())),
                }
            }
        }
    }

    async fn current_if_fresh(&self) -> Option<Arc<CatalogSnapshot>> {
        let ttl = Duration::seconds(self.ttl_seconds as i64);
        let guard = self.current.read().await;
        guard
            .as_ref()
            .filter(|s| Utc::now().signed_duration_since(s.fetched_at) < ttl)
            .cloned()
    }

    async fn refresh(&self) -> Result<Arc<CatalogSnapshot>, RefreshError> {
        let raw = self.source.fetch().await?;
        let rows = self.parser.parse(&raw)?;
        info!("Catalog refreshed: {} rows", rows.len());

        let snapshot = Arc::new(CatalogSnapshot {
            rows,
            fetched_at: Utc::now(),
        });
        *self.current.write().await = Some(snapshot.clone());
        Ok(snapshot)
    }
}
