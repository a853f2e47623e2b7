// ⚖️ Consistency Reconciler - Detect and repair drift between structured
// fields (data, hotspot) and the free text derived from them (name, features)
//
// Passes are total and idempotent: a record that already satisfies the
// target invariant is success with zero modifications, never an error.
// Order matters. The supported entry point is `reconcile()`, which runs
// the fixed pipeline: quantity sync, hotspot annotation, paren repair.
//
// The delta migration is deliberately NOT part of the pipeline: shifting
// every allowance by N GB is a one-shot catalog migration, and running it
// twice doubles the shift by definition.

use crate::quantity::{
    add_delta, classify, extract_quantity, is_none_sentinel, is_unlimited,
    mentions_high_speed_data, mentions_hotspot, rewrite_quantity, QuantityKind,
};
use crate::record::{Carrier, PlanRecord};
use serde::{Deserialize, Serialize};

/// Hotspot allowance (GB) at which the display name starts advertising it
pub const DEFAULT_HOTSPOT_THRESHOLD: u32 = 20;

// Period markers that may appear as a parenthetical in a display name.
// The annotation and repair passes only know these two; anything else in
// parentheses is opaque prose.
const PERIOD_MARKERS: [&str; 2] = ["Annual", "12 months"];

// ============================================================================
// PASS REPORTS
// ============================================================================

/// Which reconciliation pass produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassKind {
    DeltaMigration,
    QuantitySync,
    HotspotAnnotation,
    ParenRepair,
}

impl PassKind {
    /// Human-readable name for console reports
    pub fn name(&self) -> &str {
        match self {
            PassKind::DeltaMigration => "delta migration",
            PassKind::QuantitySync => "quantity sync",
            PassKind::HotspotAnnotation => "hotspot annotation",
            PassKind::ParenRepair => "parenthesis repair",
        }
    }
}

/// One display-name rewrite, for the audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameChange {
    pub carrier: Carrier,
    pub old_name: String,
    pub new_name: String,
}

/// Outcome of one pass over the full record sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassReport {
    pub pass: PassKind,
    /// Records this pass altered in any field
    pub modified: usize,
    /// Display-name rewrites, in record order
    pub name_changes: Vec<NameChange>,
}

impl PassReport {
    fn new(pass: PassKind) -> Self {
        PassReport {
            pass,
            modified: 0,
            name_changes: Vec::new(),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.modified == 0
    }

    pub fn summary(&self) -> String {
        format!("{}: {} record(s) modified", self.pass.name(), self.modified)
    }
}

/// Aggregate outcome of the full pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileReport {
    pub passes: Vec<PassReport>,
    pub reconciled_at: chrono::DateTime<chrono::Utc>,
}

impl ReconcileReport {
    /// Total modifications across all passes
    pub fn total_modifications(&self) -> usize {
        self.passes.iter().map(|p| p.modified).sum()
    }

    /// True when no pass had anything to fix
    pub fn is_clean(&self) -> bool {
        self.passes.iter().all(|p| p.is_noop())
    }

    pub fn summary(&self) -> String {
        if self.is_clean() {
            format!("Catalog consistent: {} passes, nothing to fix", self.passes.len())
        } else {
            format!(
                "Reconciled: {} modification(s) across {} passes",
                self.total_modifications(),
                self.passes.len()
            )
        }
    }
}

/// Drift the pipeline cannot repair on its own: a sentinel field with a
/// feature string still claiming a finite quantity of that kind. Removing
/// the claim would mean deleting marketing copy, which is an authoring
/// decision, so these are only reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvariantViolation {
    pub record_id: String,
    pub carrier: Carrier,
    pub feature: String,
    pub detail: String,
}

// ============================================================================
// RECONCILER
// ============================================================================

pub struct Reconciler {
    /// Hotspot size (GB) at which the annotation pass advertises the
    /// allowance in the display name (default: 20)
    pub hotspot_threshold: u32,
}

impl Reconciler {
    pub fn new() -> Self {
        Reconciler {
            hotspot_threshold: DEFAULT_HOTSPOT_THRESHOLD,
        }
    }

    pub fn with_threshold(hotspot_threshold: u32) -> Self {
        Reconciler { hotspot_threshold }
    }

    // ------------------------------------------------------------------
    // Pass 1: delta migration (one-shot, not part of the pipeline)
    // ------------------------------------------------------------------

    /// Shift every finite allowance by `delta` GB: the `data` and `hotspot`
    /// fields, every hotspot-pattern feature, and every high-speed-data
    /// feature on plans whose data is not "Unlimited".
    ///
    /// Sentinels ("Unlimited", "None") and features without a recognizable
    /// quantity pass through unchanged.
    pub fn apply_delta(&self, records: &mut [PlanRecord], delta: i64) -> PassReport {
        let mut report = PassReport::new(PassKind::DeltaMigration);

        for record in records.iter_mut() {
            let mut changed = false;

            let new_data = add_delta(&record.data, delta);
            if new_data != record.data {
                record.data = new_data;
                changed = true;
            }

            let new_hotspot = add_delta(&record.hotspot, delta);
            if new_hotspot != record.hotspot {
                record.hotspot = new_hotspot;
                changed = true;
            }

            let data_is_unlimited = is_unlimited(&record.data);
            for feature in record.features.iter_mut() {
                if extract_quantity(feature).is_none() {
                    continue;
                }
                // Hotspot mentions always follow the shift; high-speed data
                // mentions only when the plan's data is actually finite.
                let applies = if mentions_hotspot(feature) {
                    true
                } else if mentions_high_speed_data(feature) {
                    !data_is_unlimited
                } else {
                    false
                };
                if applies {
                    let new_feature = add_delta(feature, delta);
                    if new_feature != *feature {
                        *feature = new_feature;
                        changed = true;
                    }
                }
            }

            if changed {
                report.modified += 1;
            }
        }

        report
    }

    // ------------------------------------------------------------------
    // Pass 2: quantity sync
    // ------------------------------------------------------------------

    /// Rewrite free-text quantities to match the structured fields.
    ///
    /// The display name syncs by kind: a name mentioning "hotspot" syncs
    /// against `hotspot`, any other embedded quantity against `data`.
    /// Features sync only when they match a documented pattern (hotspot /
    /// mobile hotspot / high-speed data); other mentions ("5GB roaming")
    /// are opaque and never touched. Sentinel fields sync nothing.
    pub fn sync_quantities(&self, records: &mut [PlanRecord]) -> PassReport {
        let mut report = PassReport::new(PassKind::QuantitySync);

        for record in records.iter_mut() {
            let mut changed = false;

            if let Some(extraction) = classify(&record.name) {
                let target = match extraction.kind {
                    QuantityKind::Data => extract_quantity(&record.data),
                    QuantityKind::Hotspot => extract_quantity(&record.hotspot),
                };
                if let Some(target) = target {
                    if target != extraction.value {
                        let old_name = record.name.clone();
                        record.name = rewrite_quantity(&record.name, target);
                        report.name_changes.push(NameChange {
                            carrier: record.carrier,
                            old_name,
                            new_name: record.name.clone(),
                        });
                        changed = true;
                    }
                }
            }

            let data_target = extract_quantity(&record.data);
            let hotspot_target = extract_quantity(&record.hotspot);
            for feature in record.features.iter_mut() {
                let Some(value) = extract_quantity(feature) else {
                    continue;
                };
                let target = if mentions_hotspot(feature) {
                    hotspot_target
                } else if mentions_high_speed_data(feature) {
                    data_target
                } else {
                    None
                };
                if let Some(target) = target {
                    if target != value {
                        *feature = rewrite_quantity(feature, target);
                        changed = true;
                    }
                }
            }

            if changed {
                report.modified += 1;
            }
        }

        report
    }

    // ------------------------------------------------------------------
    // Pass 3: hotspot annotation
    // ------------------------------------------------------------------

    /// Advertise a large hotspot allowance in the display name.
    ///
    /// Applies only when the name has no embedded quantity yet and the
    /// hotspot allowance is finite and at or above the threshold. A period
    /// marker "(Annual)" / "(12 months)" is folded into one group so the
    /// name never gains a second parenthetical.
    pub fn annotate_hotspot(&self, records: &mut [PlanRecord]) -> PassReport {
        let mut report = PassReport::new(PassKind::HotspotAnnotation);

        for record in records.iter_mut() {
            if extract_quantity(&record.name).is_some() {
                continue; // already advertises a quantity
            }
            let Some(hotspot) = extract_quantity(&record.hotspot) else {
                continue; // "None" or unrecognizable
            };
            if hotspot < self.hotspot_threshold {
                continue;
            }

            let old_name = record.name.clone();
            record.name = annotate_name(&record.name, hotspot);
            report.name_changes.push(NameChange {
                carrier: record.carrier,
                old_name,
                new_name: record.name.clone(),
            });
            report.modified += 1;
        }

        report
    }

    // ------------------------------------------------------------------
    // Pass 4: parenthesis repair
    // ------------------------------------------------------------------

    /// Collapse doubled parenthetical groups left behind by older tooling:
    /// `"(Annual) ("` becomes `"(Annual - "`, same for "(12 months)". The
    /// second group's closing paren becomes the single terminator.
    ///
    /// A heuristic over the two observed marker patterns, not a grammar
    /// for nested annotations. Unknown markers pass through untouched.
    pub fn repair_parens(&self, records: &mut [PlanRecord]) -> PassReport {
        let mut report = PassReport::new(PassKind::ParenRepair);

        for record in records.iter_mut() {
            let mut name = record.name.clone();
            for marker in PERIOD_MARKERS {
                let doubled = format!("({}) (", marker);
                if name.contains(&doubled) {
                    name = name.replace(&doubled, &format!("({} - ", marker));
                }
            }
            if name != record.name {
                let old_name = record.name.clone();
                record.name = name;
                report.name_changes.push(NameChange {
                    carrier: record.carrier,
                    old_name,
                    new_name: record.name.clone(),
                });
                report.modified += 1;
            }
        }

        report
    }

    // ------------------------------------------------------------------
    // Pipeline
    // ------------------------------------------------------------------

    /// Run the fixed maintenance pipeline: quantity sync, hotspot
    /// annotation, parenthesis repair. Repair always runs last as cleanup.
    ///
    /// Running the pipeline twice is a no-op on the second run.
    pub fn reconcile(&self, records: &mut [PlanRecord]) -> ReconcileReport {
        let passes = vec![
            self.sync_quantities(records),
            self.annotate_hotspot(records),
            self.repair_parens(records),
        ];

        ReconcileReport {
            passes,
            reconciled_at: chrono::Utc::now(),
        }
    }

    /// Report feature claims that contradict a sentinel field. These need
    /// an authoring decision, so no pass repairs them.
    pub fn sentinel_violations(&self, records: &[PlanRecord]) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();

        for record in records {
            let data_unlimited = is_unlimited(&record.data);
            let hotspot_none = is_none_sentinel(&record.hotspot);

            for feature in &record.features {
                if extract_quantity(feature).is_none() {
                    continue;
                }
                if hotspot_none && mentions_hotspot(feature) {
                    violations.push(InvariantViolation {
                        record_id: record.id.clone(),
                        carrier: record.carrier,
                        feature: feature.clone(),
                        detail: "claims a hotspot allowance but hotspot is \"None\""
                            .to_string(),
                    });
                } else if data_unlimited && mentions_high_speed_data(feature) {
                    violations.push(InvariantViolation {
                        record_id: record.id.clone(),
                        carrier: record.carrier,
                        feature: feature.clone(),
                        detail: "claims a data cap but data is \"Unlimited\"".to_string(),
                    });
                }
            }
        }

        violations
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the annotated name for a hotspot allowance.
///
/// A known period marker is replaced in place: "(Annual)" becomes
/// "(23GB Hotspot - Annual)". Without a marker the annotation is appended.
fn annotate_name(name: &str, hotspot: u32) -> String {
    for marker in PERIOD_MARKERS {
        let wrapped = format!("({})", marker);
        if name.contains(&wrapped) {
            let folded = format!("({}GB Hotspot - {})", hotspot, marker);
            return name.replacen(&wrapped, &folded, 1);
        }
    }
    format!("{} ({}GB Hotspot)", name, hotspot)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Period;

    fn plan(name: &str, data: &str, hotspot: &str, features: &[&str]) -> PlanRecord {
        PlanRecord::new(
            "test-plan",
            Carrier::Tmobile,
            name,
            50.0,
            Period::Month,
            data,
            "5G",
            hotspot,
            features.iter().map(|f| f.to_string()).collect(),
        )
    }

    #[test]
    fn test_delta_shifts_fields_and_matching_features() {
        let engine = Reconciler::new();
        let mut records = vec![plan(
            "Starter",
            "5GB",
            "5GB",
            &["5GB hotspot included", "Unlimited talk & text"],
        )];

        let report = engine.apply_delta(&mut records, 20);

        assert_eq!(records[0].data, "25GB");
        assert_eq!(records[0].hotspot, "25GB");
        assert_eq!(records[0].features[0], "25GB hotspot included");
        assert_eq!(records[0].features[1], "Unlimited talk & text");
        assert_eq!(report.modified, 1);
        assert!(report.name_changes.is_empty());
    }

    #[test]
    fn test_delta_respects_unlimited_data() {
        let engine = Reconciler::new();
        let mut records = vec![plan("Unlimited Plan", "Unlimited", "10GB", &[])];

        engine.apply_delta(&mut records, 20);

        assert_eq!(records[0].data, "Unlimited");
        assert_eq!(records[0].hotspot, "30GB");
    }

    #[test]
    fn test_delta_skips_high_speed_feature_on_unlimited_plans() {
        let engine = Reconciler::new();
        let mut records = vec![
            plan("Unlimited Max", "Unlimited", "None", &["50GB high-speed data"]),
            plan("Capped", "20GB", "None", &["20GB high-speed data"]),
        ];

        engine.apply_delta(&mut records, 10);

        // Unlimited plan: the stale feature claim is NOT shifted
        assert_eq!(records[0].features[0], "50GB high-speed data");
        // Finite plan: field and feature move together
        assert_eq!(records[1].data, "30GB");
        assert_eq!(records[1].features[0], "30GB high-speed data");
    }

    #[test]
    fn test_delta_shifts_hotspot_features_even_on_unlimited_plans() {
        let engine = Reconciler::new();
        let mut records = vec![plan(
            "Unlimited Elite",
            "Unlimited",
            "40GB",
            &["40GB mobile hotspot"],
        )];

        engine.apply_delta(&mut records, 10);

        assert_eq!(records[0].hotspot, "50GB");
        assert_eq!(records[0].features[0], "50GB mobile hotspot");
    }

    #[test]
    fn test_delta_leaves_unrelated_quantity_features_alone() {
        let engine = Reconciler::new();
        let mut records = vec![plan("Traveler", "10GB", "None", &["5GB international roaming"])];

        engine.apply_delta(&mut records, 20);

        assert_eq!(records[0].data, "30GB");
        assert_eq!(records[0].features[0], "5GB international roaming");
    }

    #[test]
    fn test_negative_delta_saturates_at_zero() {
        let engine = Reconciler::new();
        let mut records = vec![plan("Small", "5GB", "2GB", &[])];

        engine.apply_delta(&mut records, -10);

        assert_eq!(records[0].data, "0GB");
        assert_eq!(records[0].hotspot, "0GB");
    }

    #[test]
    fn test_sync_rewrites_name_to_match_data() {
        let engine = Reconciler::new();
        let mut records = vec![plan("5GB Plan (12 months)", "10GB", "None", &[])];

        let report = engine.sync_quantities(&mut records);

        assert_eq!(records[0].name, "10GB Plan (12 months)");
        assert_eq!(report.modified, 1);
        assert_eq!(
            report.name_changes,
            vec![NameChange {
                carrier: Carrier::Tmobile,
                old_name: "5GB Plan (12 months)".to_string(),
                new_name: "10GB Plan (12 months)".to_string(),
            }]
        );
    }

    #[test]
    fn test_sync_uses_hotspot_field_for_hotspot_names() {
        let engine = Reconciler::new();
        let mut records = vec![plan(
            "Value Plus (23GB Hotspot)",
            "Unlimited",
            "25GB",
            &[],
        )];

        engine.sync_quantities(&mut records);

        // Name mentions "Hotspot", so it syncs against hotspot, not data
        assert_eq!(records[0].name, "Value Plus (25GB Hotspot)");
    }

    #[test]
    fn test_sync_is_noop_when_already_consistent() {
        let engine = Reconciler::new();
        let mut records = vec![
            plan("10GB Plan", "10GB", "None", &[]),
            plan("Basic Plan", "Unlimited", "None", &[]), // no quantity in name
        ];

        let report = engine.sync_quantities(&mut records);

        assert_eq!(report.modified, 0);
        assert!(report.is_noop());
    }

    #[test]
    fn test_sync_skips_names_when_target_is_sentinel() {
        let engine = Reconciler::new();
        let mut records = vec![plan("5GB Plan", "Unlimited", "None", &[])];

        let report = engine.sync_quantities(&mut records);

        // Nothing to sync against; flagged by sentinel_violations instead
        assert_eq!(records[0].name, "5GB Plan");
        assert_eq!(report.modified, 0);
    }

    #[test]
    fn test_sync_rewrites_pattern_features_only() {
        let engine = Reconciler::new();
        let mut records = vec![plan(
            "Family Plan",
            "30GB",
            "15GB",
            &[
                "10GB mobile hotspot",
                "25GB high-speed data",
                "5GB international roaming",
            ],
        )];

        let report = engine.sync_quantities(&mut records);

        assert_eq!(records[0].features[0], "15GB mobile hotspot");
        assert_eq!(records[0].features[1], "30GB high-speed data");
        assert_eq!(records[0].features[2], "5GB international roaming");
        assert_eq!(report.modified, 1);
    }

    #[test]
    fn test_annotation_appends_without_marker() {
        let engine = Reconciler::new();
        let mut records = vec![plan("Basic Plan", "Unlimited", "20GB", &[])];

        let report = engine.annotate_hotspot(&mut records);

        assert_eq!(records[0].name, "Basic Plan (20GB Hotspot)");
        assert_eq!(report.modified, 1);
    }

    #[test]
    fn test_annotation_folds_into_period_marker() {
        let engine = Reconciler::new();
        let mut records = vec![
            plan("Prepaid Saver (Annual)", "Unlimited", "23GB", &[]),
            plan("Prepaid Saver (12 months)", "Unlimited", "30GB", &[]),
        ];

        engine.annotate_hotspot(&mut records);

        assert_eq!(records[0].name, "Prepaid Saver (23GB Hotspot - Annual)");
        assert_eq!(records[1].name, "Prepaid Saver (30GB Hotspot - 12 months)");
    }

    #[test]
    fn test_annotation_respects_threshold() {
        let engine = Reconciler::new();
        let mut records = vec![
            plan("Small", "Unlimited", "15GB", &[]),
            plan("Large", "Unlimited", "20GB", &[]),
        ];

        let report = engine.annotate_hotspot(&mut records);

        assert_eq!(records[0].name, "Small"); // below default threshold of 20
        assert_eq!(records[1].name, "Large (20GB Hotspot)");
        assert_eq!(report.modified, 1);

        // Custom threshold picks up the smaller allowance too
        let engine = Reconciler::with_threshold(10);
        let mut records = vec![plan("Small", "Unlimited", "15GB", &[])];
        engine.annotate_hotspot(&mut records);
        assert_eq!(records[0].name, "Small (15GB Hotspot)");
    }

    #[test]
    fn test_annotation_skips_names_with_existing_quantity() {
        let engine = Reconciler::new();
        let mut records = vec![plan("50GB Plan", "50GB", "25GB", &[])];

        let report = engine.annotate_hotspot(&mut records);

        assert_eq!(records[0].name, "50GB Plan");
        assert!(report.is_noop());
    }

    #[test]
    fn test_annotation_skips_none_hotspot() {
        let engine = Reconciler::new();
        let mut records = vec![plan("Basic Plan", "Unlimited", "None", &[])];

        let report = engine.annotate_hotspot(&mut records);

        assert!(report.is_noop());
    }

    #[test]
    fn test_repair_collapses_doubled_parens() {
        let engine = Reconciler::new();
        let mut records = vec![
            plan("Value Plus (Annual) (23GB Hotspot)", "Unlimited", "23GB", &[]),
            plan("Saver (12 months) (20GB Hotspot)", "Unlimited", "20GB", &[]),
            plan("Clean Plan (Annual)", "Unlimited", "None", &[]),
        ];

        let report = engine.repair_parens(&mut records);

        assert_eq!(records[0].name, "Value Plus (Annual - 23GB Hotspot)");
        assert_eq!(records[1].name, "Saver (12 months - 20GB Hotspot)");
        assert_eq!(records[2].name, "Clean Plan (Annual)");
        assert_eq!(report.modified, 2);
        assert_eq!(report.name_changes.len(), 2);
    }

    #[test]
    fn test_every_pipeline_pass_is_idempotent() {
        let engine = Reconciler::new();
        let messy = vec![
            plan("5GB Plan (12 months)", "10GB", "None", &["8GB high-speed data"]),
            plan("Basic Plan (Annual)", "Unlimited", "25GB", &["20GB mobile hotspot"]),
            plan("Value Plus (Annual) (23GB Hotspot)", "Unlimited", "23GB", &[]),
        ];

        let mut once = messy.clone();
        engine.sync_quantities(&mut once);
        let mut twice = once.clone();
        let second = engine.sync_quantities(&mut twice);
        assert_eq!(once, twice, "quantity sync must be idempotent");
        assert!(second.is_noop());

        let mut once = messy.clone();
        engine.annotate_hotspot(&mut once);
        let mut twice = once.clone();
        let second = engine.annotate_hotspot(&mut twice);
        assert_eq!(once, twice, "hotspot annotation must be idempotent");
        assert!(second.is_noop());

        let mut once = messy.clone();
        engine.repair_parens(&mut once);
        let mut twice = once.clone();
        let second = engine.repair_parens(&mut twice);
        assert_eq!(once, twice, "paren repair must be idempotent");
        assert!(second.is_noop());
    }

    #[test]
    fn test_full_pipeline_settles_in_one_run() {
        let engine = Reconciler::new();
        let mut records = vec![
            plan("5GB Plan (12 months)", "10GB", "None", &[]),
            plan("Basic Plan (Annual)", "Unlimited", "25GB", &["20GB mobile hotspot"]),
            plan("Value Plus (Annual) (23GB Hotspot)", "Unlimited", "23GB", &[]),
            plan("Untouched", "Unlimited", "None", &["Nationwide 5G"]),
        ];

        let first = engine.reconcile(&mut records);
        assert!(!first.is_clean());

        // End state: names consistent, single parenthetical groups
        assert_eq!(records[0].name, "10GB Plan (12 months)");
        assert_eq!(records[1].name, "Basic Plan (25GB Hotspot - Annual)");
        assert_eq!(records[1].features[0], "25GB mobile hotspot");
        assert_eq!(records[2].name, "Value Plus (Annual - 23GB Hotspot)");
        assert_eq!(records[3].name, "Untouched");

        let snapshot = records.clone();
        let second = engine.reconcile(&mut records);
        assert!(second.is_clean(), "second pipeline run must be a no-op");
        assert_eq!(records, snapshot);

        println!("✅ Pipeline settled: {}", second.summary());
    }

    #[test]
    fn test_annotated_name_survives_resync() {
        // The annotation writes a hotspot quantity into the name; the sync
        // pass must recognize its kind and not "correct" it against data.
        let engine = Reconciler::new();
        let mut records = vec![plan("Premium (Annual)", "50GB", "30GB", &[])];

        engine.reconcile(&mut records);
        assert_eq!(records[0].name, "Premium (30GB Hotspot - Annual)");

        let report = engine.sync_quantities(&mut records);
        assert!(report.is_noop());
        assert_eq!(records[0].name, "Premium (30GB Hotspot - Annual)");
    }

    #[test]
    fn test_sentinel_violations_are_reported_not_repaired() {
        let engine = Reconciler::new();
        let records = vec![
            plan("Unlimited Max", "Unlimited", "None", &[
                "50GB high-speed data",
                "15GB hotspot",
                "Unlimited talk & text",
            ]),
            plan("Honest Plan", "10GB", "5GB", &["5GB hotspot"]),
        ];

        let violations = engine.sentinel_violations(&records);

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].feature, "50GB high-speed data");
        assert_eq!(violations[1].feature, "15GB hotspot");
    }

    #[test]
    fn test_empty_catalog_is_a_clean_noop() {
        let engine = Reconciler::new();
        let mut records: Vec<PlanRecord> = Vec::new();

        let report = engine.reconcile(&mut records);
        assert!(report.is_clean());
        assert_eq!(engine.apply_delta(&mut records, 5).modified, 0);
    }

    #[test]
    fn test_report_summaries_read_well() {
        let engine = Reconciler::new();
        let mut records = vec![plan("5GB Plan", "10GB", "None", &[])];

        let report = engine.reconcile(&mut records);
        assert!(report.summary().contains("1 modification(s)"));

        let clean = engine.reconcile(&mut records);
        assert!(clean.summary().contains("nothing to fix"));
    }
}
