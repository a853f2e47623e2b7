// Plan Catalog - Core Library
// Exposes all modules for use in the CLI, the API server, and tests

pub mod record;     // Plan record model and carrier/period vocabulary
pub mod quantity;   // Field extraction and rewrite engine
pub mod reconciler; // Consistency passes over the whole catalog
pub mod catalog;    // Default catalog and the sync exporter
pub mod store;      // File and SQLite persistence
pub mod config;     // Runtime configuration

#[cfg(feature = "server")]
pub mod api; // HTTP surface, behind the `server` feature

// Re-export commonly used types
pub use record::{Carrier, Period, PlanRecord};
pub use quantity::{
    add_delta, classify, extract_quantity, is_none_sentinel, is_unlimited,
    mentions_high_speed_data, mentions_hotspot, rewrite_quantity, Extraction, QuantityKind,
};
pub use reconciler::{
    InvariantViolation, NameChange, PassKind, PassReport, ReconcileReport, Reconciler,
    DEFAULT_HOTSPOT_THRESHOLD,
};
pub use catalog::{
    body_fingerprint, default_packages, group_for_display, module_fingerprint,
    render_defaults_module, write_defaults_module,
};
pub use store::{FileStore, PackageStore, SaveEvent, SqliteStore};
pub use config::{Config, StoreBackend, DEFAULT_PORT};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
