//! Advisory service
//!
//! Wraps the shared resolver with the simulated satellite lookup latency
//! the dashboard expects.

use std::sync::Arc;
use std::time::Duration;

use shared::{AdvisoryRecord, AdvisoryResolver, LocationQuery, LocationRecord, LocationTable};

/// Advisory service over a read-only village table
#[derive(Clone)]
pub struct AdvisoryService {
    resolver: Arc<AdvisoryResolver>,
    delay: Duration,
}

impl AdvisoryService {
    pub fn new(resolver: AdvisoryResolver, delay: Duration) -> Self {
        Self {
            resolver: Arc::new(resolver),
            delay,
        }
    }

    /// Resolve an advisory after the configured delay. Never fails.
    pub async fn resolve(&self, query: &LocationQuery) -> AdvisoryRecord {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let advisory = self.resolver.resolve(query);

        if self.resolver.is_known(query) {
            tracing::debug!(
                village = %advisory.location_name,
                classification = %advisory.classification,
                "Resolved advisory"
            );
        } else {
            tracing::info!(
                requested = ?query.village_name,
                coordinates = %advisory.coordinates,
                classification = %advisory.classification,
                "Unmapped location, using default readings"
            );
        }

        advisory
    }

    /// Villages matching a search string, or all when `query` is empty
    pub fn search(&self, query: &str) -> Vec<LocationRecord> {
        self.table().search(query).into_iter().cloned().collect()
    }

    /// Whether the query names a village in the table
    pub fn is_known(&self, query: &LocationQuery) -> bool {
        self.resolver.is_known(query)
    }

    pub fn village(&self, name: &str) -> Option<LocationRecord> {
        self.table().get(name).cloned()
    }

    pub fn table(&self) -> &LocationTable {
        self.resolver.table()
    }
}
