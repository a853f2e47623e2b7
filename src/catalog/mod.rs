// 🗂️ Catalog Exporter - Regenerate the embedded default catalog
//
// The store is the source of truth. The generated module is a read-only
// fallback compiled into the binary for first boot and empty stores; it is
// never edited by hand and never merged back.
//
// Rendering is deterministic: identical input sequence, byte-identical
// output. The fingerprint in the header is the SHA-256 of everything after
// the header block, so drift checks never depend on comment wording.

use crate::record::{Carrier, Period, PlanRecord};
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

pub mod defaults;

pub use defaults::default_packages;

// ============================================================================
// GROUPING
// ============================================================================

/// Order records for presentation: carrier in storefront order, month
/// plans before year plans, input order preserved within each group.
pub fn group_for_display(records: &[PlanRecord]) -> Vec<PlanRecord> {
    let mut grouped = records.to_vec();
    grouped.sort_by_key(|r| (r.carrier.display_rank(), r.period.display_rank()));
    grouped
}

// ============================================================================
// RENDERING
// ============================================================================

/// Render the full generated module, header included.
pub fn render_defaults_module(records: &[PlanRecord]) -> String {
    let grouped = group_for_display(records);

    let mut body = String::new();
    body.push_str("use crate::record::{Carrier, Period, PlanRecord};\n\n");
    body.push_str("/// Built-in catalog used when the store is empty or missing.\n");
    body.push_str("///\n");
    body.push_str("/// Grouped by carrier in storefront order, month plans before year plans.\n");
    body.push_str("pub fn default_packages() -> Vec<PlanRecord> {\n");
    body.push_str("    vec![\n");
    for record in &grouped {
        render_record(&mut body, record);
    }
    body.push_str("    ]\n");
    body.push_str("}\n");

    let fingerprint = body_fingerprint(&body);
    format!(
        "// @generated by `plan-catalog export`. Do not edit by hand.\n\
         // The package store is the source of truth; regenerate after catalog edits.\n\
         // Fingerprint: {}\n\n{}",
        fingerprint, body
    )
}

/// Fields render in the fixed presentation order: id, carrier, name,
/// price, period, data, speed, hotspot, features, badge.
fn render_record(out: &mut String, record: &PlanRecord) {
    out.push_str("        PlanRecord {\n");
    out.push_str(&format!(
        "            id: \"{}\".to_string(),\n",
        escape(&record.id)
    ));
    out.push_str(&format!(
        "            carrier: Carrier::{},\n",
        carrier_variant(record.carrier)
    ));
    out.push_str(&format!(
        "            name: \"{}\".to_string(),\n",
        escape(&record.name)
    ));
    out.push_str(&format!("            price: {:?},\n", record.price));
    out.push_str(&format!(
        "            period: Period::{},\n",
        period_variant(record.period)
    ));
    out.push_str(&format!(
        "            data: \"{}\".to_string(),\n",
        escape(&record.data)
    ));
    out.push_str(&format!(
        "            speed: \"{}\".to_string(),\n",
        escape(&record.speed)
    ));
    out.push_str(&format!(
        "            hotspot: \"{}\".to_string(),\n",
        escape(&record.hotspot)
    ));
    if record.features.is_empty() {
        out.push_str("            features: vec![],\n");
    } else {
        out.push_str("            features: vec![\n");
        for feature in &record.features {
            out.push_str(&format!(
                "                \"{}\".to_string(),\n",
                escape(feature)
            ));
        }
        out.push_str("            ],\n");
    }
    match &record.badge {
        Some(badge) => out.push_str(&format!(
            "            badge: Some(\"{}\".to_string()),\n",
            escape(badge)
        )),
        None => out.push_str("            badge: None,\n"),
    }
    out.push_str("        },\n");
}

fn carrier_variant(carrier: Carrier) -> &'static str {
    match carrier {
        Carrier::Verizon => "Verizon",
        Carrier::Att => "Att",
        Carrier::Tmobile => "Tmobile",
        Carrier::Uscellular => "Uscellular",
        Carrier::Mintmobile => "Mintmobile",
        Carrier::Cricket => "Cricket",
    }
}

fn period_variant(period: Period) -> &'static str {
    match period {
        Period::Month => "Month",
        Period::Year => "Year",
    }
}

/// Escape a string for a Rust double-quoted literal
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Fingerprint of a rendered module body (everything below the header)
pub fn body_fingerprint(body: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body.as_bytes());
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// DRIFT CHECK & WRITE
// ============================================================================

/// Pull the fingerprint out of a rendered (or on-disk) module.
pub fn module_fingerprint(source: &str) -> Option<&str> {
    source
        .lines()
        .find_map(|line| line.strip_prefix("// Fingerprint: "))
        .map(str::trim)
}

/// Regenerate the module on disk. The write goes through a sibling temp
/// file and a rename, so a crash never leaves a half-written artifact.
pub fn write_defaults_module(records: &[PlanRecord], path: &Path) -> Result<()> {
    let rendered = render_defaults_module(records);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let tmp_path = path.with_extension("rs.tmp");
    fs::write(&tmp_path, rendered)
        .with_context(|| format!("failed to write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
