// 📦 Plan Record Model - One row of the carrier catalog
// Shared by the store, the reconciler, the exporter and the API.
//
// The persisted file is a JSON array of these records. Field order here
// matches the serialized order, so regenerated artifacts stay diff-stable.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// CARRIER
// ============================================================================

/// Carrier - Identifica de qué operadora es el paquete
///
/// Closed set. Adding a carrier means adding a variant here plus its
/// display name and storefront position below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Carrier {
    Verizon,
    Att,
    Tmobile,
    Uscellular,
    Mintmobile,
    Cricket,
}

impl Carrier {
    /// All carriers in storefront display order
    pub const ALL: [Carrier; 6] = [
        Carrier::Verizon,
        Carrier::Att,
        Carrier::Tmobile,
        Carrier::Uscellular,
        Carrier::Mintmobile,
        Carrier::Cricket,
    ];

    /// Human-readable name for display
    pub fn name(&self) -> &str {
        match self {
            Carrier::Verizon => "Verizon",
            Carrier::Att => "AT&T",
            Carrier::Tmobile => "T-Mobile",
            Carrier::Uscellular => "UScellular",
            Carrier::Mintmobile => "Mint Mobile",
            Carrier::Cricket => "Cricket",
        }
    }

    /// Lowercase tag used in JSON and URL segments
    pub fn tag(&self) -> &str {
        match self {
            Carrier::Verizon => "verizon",
            Carrier::Att => "att",
            Carrier::Tmobile => "tmobile",
            Carrier::Uscellular => "uscellular",
            Carrier::Mintmobile => "mintmobile",
            Carrier::Cricket => "cricket",
        }
    }

    /// Parse a lowercase tag (JSON value or URL segment)
    pub fn from_tag(tag: &str) -> Option<Carrier> {
        Carrier::ALL.iter().copied().find(|c| c.tag() == tag)
    }

    /// Position in the storefront display order (used for grouping)
    pub fn display_rank(&self) -> usize {
        Carrier::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(Carrier::ALL.len())
    }
}

// ============================================================================
// BILLING PERIOD
// ============================================================================

/// Billing period. Month groups before year in every presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Month,
    Year,
}

impl Period {
    pub fn tag(&self) -> &str {
        match self {
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Period> {
        match tag {
            "month" => Some(Period::Month),
            "year" => Some(Period::Year),
            _ => None,
        }
    }

    pub fn display_rank(&self) -> usize {
        match self {
            Period::Month => 0,
            Period::Year => 1,
        }
    }
}

// ============================================================================
// PLAN RECORD
// ============================================================================

/// PlanRecord - one purchasable plan as shown on the storefront
///
/// `data` and `hotspot` are either a sentinel ("Unlimited" / "None") or a
/// quantity string like "25GB". Free-text fields (`name`, `features`) may
/// embed the same quantities; the reconciler keeps them in agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: String,            // Unique within the store
    pub carrier: Carrier,
    pub name: String,          // May embed "23GB" and a "(Annual)" style marker
    pub price: f64,            // Non-negative, in USD
    pub period: Period,
    pub data: String,          // "Unlimited" or "<N>GB"
    pub speed: String,         // Opaque descriptor, never parsed
    pub hotspot: String,       // "None" or "<N>GB"
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>, // Optional storefront label ("Best Value")
}

impl PlanRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        carrier: Carrier,
        name: impl Into<String>,
        price: f64,
        period: Period,
        data: impl Into<String>,
        speed: impl Into<String>,
        hotspot: impl Into<String>,
        features: Vec<String>,
    ) -> Self {
        PlanRecord {
            id: id.into(),
            carrier,
            name: name.into(),
            price,
            period,
            data: data.into(),
            speed: speed.into(),
            hotspot: hotspot.into(),
            features,
            badge: None,
        }
    }

    /// Builder pattern: add optional storefront badge
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Finite data allowance in GB, or None for the "Unlimited" sentinel
    pub fn data_amount(&self) -> Option<u32> {
        crate::quantity::extract_quantity(&self.data)
    }

    /// Finite hotspot allowance in GB, or None for the "None" sentinel
    pub fn hotspot_amount(&self) -> Option<u32> {
        crate::quantity::extract_quantity(&self.hotspot)
    }

    /// Shape check for records arriving from outside (API writes, seeds).
    ///
    /// Carrier and period are already enforced by the enum types; this
    /// covers the constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            bail!("record has an empty id");
        }
        if self.name.trim().is_empty() {
            bail!("record '{}' has an empty name", self.id);
        }
        if self.price < 0.0 || !self.price.is_finite() {
            bail!("record '{}' has an invalid price: {}", self.id, self.price);
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
