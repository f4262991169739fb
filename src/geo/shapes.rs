//! Best-effort fetch of reference topology for map backgrounds.
//!
//! The boundary data is opaque to this crate: it is fetched once, cached
//! process-wide with a bounded staleness window, and handed to the frontend
//! as-is. A failed fetch degrades to rendering without boundaries.

use log::warn;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// US state outlines (TopoJSON, `states` object).
pub const US_STATES_TOPOLOGY_URL: &str =
    "https://cdn.jsdelivr.net/npm/vega-datasets@v1.29.0/data/us-10m.json";

/// CBSA outlines (TopoJSON, `cbsa_shapes` object).
pub const CBSA_SHAPES_URL: &str =
    "https://gist.githubusercontent.com/daveluo/ab3bbb49b563393acf5a910ba481ea4d/raw/26ec4896920891565c856acc05593490b8acf1d1/cbsa_shapes.json";

/// Which boundary dataset to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    States,
    Cbsa,
}

impl ShapeKind {
    pub fn url(&self) -> &'static str {
        match self {
            ShapeKind::States => US_STATES_TOPOLOGY_URL,
            ShapeKind::Cbsa => CBSA_SHAPES_URL,
        }
    }

    pub fn from_path(s: &str) -> Option<Self> {
        match s {
            "states" => Some(ShapeKind::States),
            "cbsa" => Some(ShapeKind::Cbsa),
            _ => None,
        }
    }
}

struct CachedShape {
    fetched_at: Instant,
    value: Arc<serde_json::Value>,
}

/// Process-wide cache of fetched topology documents.
pub struct ShapeCache {
    client: reqwest::Client,
    max_age: Duration,
    entries: RwLock<HashMap<ShapeKind, CachedShape>>,
}

impl ShapeCache {
    pub fn new(max_age: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            max_age,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch a topology document, reusing a live cached copy.
    ///
    /// Returns `None` when the upstream fetch fails and no live copy exists;
    /// the map renders without background boundaries in that case.
    pub async fn fetch(&self, kind: ShapeKind) -> Option<Arc<serde_json::Value>> {
        {
            let entries = self.entries.read();
            if let Some(cached) = entries.get(&kind) {
                if cached.fetched_at.elapsed() <= self.max_age {
                    return Some(Arc::clone(&cached.value));
                }
            }
        }

        match self.fetch_remote(kind).await {
            Ok(value) => {
                let value = Arc::new(value);
                self.entries.write().insert(
                    kind,
                    CachedShape {
                        fetched_at: Instant::now(),
                        value: Arc::clone(&value),
                    },
                );
                Some(value)
            }
            Err(e) => {
                warn!("topology fetch for {:?} failed: {}", kind, e);
                // A stale copy beats no boundaries at all
                let entries = self.entries.read();
                entries.get(&kind).map(|c| Arc::clone(&c.value))
            }
        }
    }

    async fn fetch_remote(&self, kind: ShapeKind) -> Result<serde_json::Value, reqwest::Error> {
        self.client
            .get(kind.url())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
