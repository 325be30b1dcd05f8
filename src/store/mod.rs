//! # Layout Store
//!
//! Per-building layout cache. `LayoutSource` is the contract between the
//! routing core and whatever persistence layer supplies building layouts;
//! the store parses each building's documents once and serves the result
//! to every subsequent route request.
//!
//! The cache is read-mostly and lazily populated. Population is serialized
//! per building key, so concurrent first requests for the same building do
//! the parse exactly once instead of racing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use parking_lot::{Mutex, RwLock};
use tracing::{info, warn};

use crate::floorplan::{self, ExtractConfig, FloorElement, FloorPlan};
use crate::graph::build_graph;
use crate::model::{GraphDoc, WalkGraph, canonical_name};
use crate::{Error, Result};

pub mod memory;

pub use memory::MemorySource;

/// The two artifacts a building layout is made of.
///
/// When `graph` is absent the store derives the walkable graph from the
/// element document's corridor polylines.
#[derive(Debug, Clone)]
pub struct LayoutDocuments {
    pub elements: Vec<FloorElement>,
    pub graph: Option<GraphDoc>,
}

impl LayoutDocuments {
    pub fn new(elements: Vec<FloorElement>) -> Self {
        Self {
            elements,
            graph: None,
        }
    }

    pub fn with_graph(mut self, graph: GraphDoc) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Parse both artifacts from their JSON forms.
    pub fn from_json(elements_json: &str, graph_json: Option<&str>) -> Result<Self> {
        Ok(Self {
            elements: floorplan::parse_elements(elements_json)?,
            graph: graph_json.map(serde_json::from_str).transpose()?,
        })
    }
}

/// Contract between the routing core and the persistence collaborator.
pub trait LayoutSource: Send + Sync {
    /// Fetch the layout documents for a building; `None` if the building
    /// is unknown to the source.
    fn fetch(&self, building: &str) -> Result<Option<LayoutDocuments>>;
}

/// A fully ingested building layout.
#[derive(Debug, Clone)]
pub struct BuildingLayout {
    pub building: String,
    pub plan: FloorPlan,
    pub graph: WalkGraph,
}

/// Record of requests for a building with no ingested layout.
///
/// The persistence collaborator drains these for operational follow-up
/// (which buildings people keep asking about but nobody has registered).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MissingLayout {
    pub building: String,
    pub requests: u64,
    pub first_requested: DateTime<Utc>,
    pub last_requested: DateTime<Utc>,
}

/// Process-wide layout cache keyed by canonical building name.
pub struct LayoutStore<S> {
    source: S,
    extract: ExtractConfig,
    layouts: RwLock<HashMap<String, Arc<BuildingLayout>>>,
    /// Per-key population gates: single-flight for first requests.
    inflight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    missing: Mutex<HashMap<String, MissingLayout>>,
}

impl<S: LayoutSource> LayoutStore<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, ExtractConfig::default())
    }

    pub fn with_config(source: S, extract: ExtractConfig) -> Self {
        Self {
            source,
            extract,
            layouts: RwLock::new(HashMap::new()),
            inflight: Mutex::new(HashMap::new()),
            missing: Mutex::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn contains(&self, building: &str) -> bool {
        self.layouts.read().contains_key(&canonical_name(building))
    }

    /// Cached layout for `building`, populating from the source on first
    /// use. A building the source does not know is recorded in the
    /// missing-layout log and reported as [`Error::LayoutUnavailable`].
    pub fn layout(&self, building: &str) -> Result<Arc<BuildingLayout>> {
        let key = canonical_name(building);
        if let Some(layout) = self.layouts.read().get(&key) {
            return Ok(layout.clone());
        }

        let gate = self
            .inflight
            .lock()
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = gate.lock();

        // Another flight may have landed while we waited on the gate.
        if let Some(layout) = self.layouts.read().get(&key) {
            return Ok(layout.clone());
        }

        let result = match self.source.fetch(&key) {
            Ok(Some(documents)) => {
                let layout = self.ingest(&key, &documents);
                self.layouts.write().insert(key.clone(), layout.clone());
                Ok(layout)
            }
            Ok(None) => {
                self.record_missing(&key);
                Err(Error::LayoutUnavailable(key.clone()))
            }
            Err(err) => Err(err),
        };
        self.inflight.lock().remove(&key);
        result
    }

    /// Ingest documents directly (the upload-pipeline path), replacing any
    /// cached layout for the building wholesale.
    pub fn insert_documents(&self, building: &str, documents: &LayoutDocuments) -> Arc<BuildingLayout> {
        let key = canonical_name(building);
        let layout = self.ingest(&key, documents);
        self.layouts.write().insert(key.clone(), layout.clone());
        self.missing.lock().remove(&key);
        layout
    }

    /// Buildings requested without an ingested layout, most-requested
    /// first.
    pub fn missing_layouts(&self) -> Vec<MissingLayout> {
        let mut entries: Vec<MissingLayout> = self.missing.lock().values().cloned().collect();
        entries.sort_by(|a, b| {
            b.requests
                .cmp(&a.requests)
                .then_with(|| a.building.cmp(&b.building))
        });
        entries
    }

    fn ingest(&self, key: &str, documents: &LayoutDocuments) -> Arc<BuildingLayout> {
        let plan = floorplan::extract(&documents.elements);
        let graph = match &documents.graph {
            Some(doc) => WalkGraph::from_doc(doc),
            None => build_graph(&plan, &self.extract),
        };
        info!(
            building = key,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "ingested building layout"
        );
        Arc::new(BuildingLayout {
            building: key.to_string(),
            plan,
            graph,
        })
    }

    fn record_missing(&self, key: &str) {
        let now = Utc::now();
        let mut missing = self.missing.lock();
        let entry = missing
            .entry_ref(key)
            .or_insert_with(|| MissingLayout {
                building: key.to_string(),
                requests: 0,
                first_requested: now,
                last_requested: now,
            });
        entry.requests += 1;
        entry.last_requested = now;
        warn!(
            building = key,
            requests = entry.requests,
            "no layout ingested for requested building"
        );
    }
}
