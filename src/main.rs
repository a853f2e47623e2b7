// 📋 plan-catalog CLI - seed, migrate, reconcile, verify, export

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

use plan_catalog::{
    default_packages, module_fingerprint, render_defaults_module, write_defaults_module, Config,
    PackageStore, PassReport, PlanRecord, Reconciler, StoreBackend, DEFAULT_HOTSPOT_THRESHOLD,
};

#[derive(Parser)]
#[command(name = "plan-catalog", about = "Package catalog consistency and migration tool")]
struct Cli {
    /// Storage backend (overrides PLAN_CATALOG_STORE)
    #[arg(long, value_enum, global = true)]
    store: Option<BackendArg>,

    /// Store path (overrides PLAN_CATALOG_PATH)
    #[arg(long, global = true)]
    path: Option<PathBuf>,

    /// Report what would change without saving anything
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    File,
    Sqlite,
}

impl From<BackendArg> for StoreBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::File => StoreBackend::File,
            BackendArg::Sqlite => StoreBackend::Sqlite,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the embedded default catalog into an empty store
    Seed {
        /// Overwrite a non-empty store
        #[arg(long)]
        force: bool,
    },
    /// One-shot migration: shift every finite GB quantity by a delta
    ApplyDelta {
        /// Amount to add to each quantity, in GB (may be negative)
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Rewrite quantities embedded in names and features to match the structured fields
    SyncQuantities,
    /// Advertise large hotspot allowances in display names
    AnnotateHotspot {
        /// Hotspot size (GB) at which names start advertising it
        #[arg(long, default_value_t = DEFAULT_HOTSPOT_THRESHOLD)]
        threshold: u32,
    },
    /// Collapse doubled parentheticals left behind by annotation
    RepairNames,
    /// Run the full pipeline: sync, annotate, repair
    Reconcile {
        /// Hotspot size (GB) at which names start advertising it
        #[arg(long, default_value_t = DEFAULT_HOTSPOT_THRESHOLD)]
        threshold: u32,
    },
    /// Check the stored catalog is already consistent; exit 1 on drift
    Verify,
    /// Regenerate the default-catalog module from the store
    Export {
        /// Output path for the generated module
        #[arg(long, default_value = "src/catalog/defaults.rs")]
        out: PathBuf,
        /// Compare fingerprints instead of writing; exit 1 on drift
        #[arg(long)]
        check: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(cli.store.map(Into::into), cli.path.clone())?;
    let mut store = config.open_store()?;

    match cli.command {
        Commands::Seed { force } => cmd_seed(store.as_mut(), force, cli.dry_run),
        Commands::ApplyDelta { delta } => cmd_apply_delta(store.as_mut(), delta, cli.dry_run),
        Commands::SyncQuantities => cmd_single_pass(
            store.as_mut(),
            Reconciler::new(),
            cli.dry_run,
            "🔄 Syncing embedded quantities to match structured fields",
            |reconciler, records| reconciler.sync_quantities(records),
        ),
        Commands::AnnotateHotspot { threshold } => cmd_single_pass(
            store.as_mut(),
            Reconciler::with_threshold(threshold),
            cli.dry_run,
            "🏷️  Annotating large hotspot allowances",
            |reconciler, records| reconciler.annotate_hotspot(records),
        ),
        Commands::RepairNames => cmd_single_pass(
            store.as_mut(),
            Reconciler::new(),
            cli.dry_run,
            "🔧 Repairing doubled parentheticals",
            |reconciler, records| reconciler.repair_parens(records),
        ),
        Commands::Reconcile { threshold } => cmd_reconcile(store.as_mut(), threshold, cli.dry_run),
        Commands::Verify => cmd_verify(store.as_mut()),
        Commands::Export { out, check } => cmd_export(store.as_mut(), &out, check, cli.dry_run),
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

fn cmd_seed(store: &mut dyn PackageStore, force: bool, dry_run: bool) -> Result<()> {
    println!("🌱 Seeding default catalog");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let existing = store.load()?;
    if !existing.is_empty() && !force {
        bail!(
            "store already holds {} packages; pass --force to overwrite",
            existing.len()
        );
    }

    let defaults = default_packages();
    println!("\n📦 Target store: {}", store.describe());
    println!("✓ Prepared {} default packages", defaults.len());

    persist(store, &defaults, dry_run)
}

fn cmd_apply_delta(store: &mut dyn PackageStore, delta: i64, dry_run: bool) -> Result<()> {
    println!("📐 Applying data delta: {:+} GB", delta);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut records = load_catalog(store)?;

    let reconciler = Reconciler::new();
    let report = reconciler.apply_delta(&mut records, delta);
    println!("\n✓ {}", report.summary());

    persist(store, &records, dry_run)
}

fn cmd_single_pass<F>(
    store: &mut dyn PackageStore,
    reconciler: Reconciler,
    dry_run: bool,
    title: &str,
    run: F,
) -> Result<()>
where
    F: FnOnce(&Reconciler, &mut [PlanRecord]) -> PassReport,
{
    println!("{}", title);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut records = load_catalog(store)?;

    let report = run(&reconciler, &mut records);
    println!("\n✓ {}", report.summary());
    print_name_changes(&report);

    persist(store, &records, dry_run)
}

fn cmd_reconcile(store: &mut dyn PackageStore, threshold: u32, dry_run: bool) -> Result<()> {
    println!("⚖️  Reconciling catalog");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut records = load_catalog(store)?;

    let reconciler = Reconciler::with_threshold(threshold);
    let report = reconciler.reconcile(&mut records);

    println!();
    for pass in &report.passes {
        println!("✓ {}", pass.summary());
        print_name_changes(pass);
    }

    persist(store, &records, dry_run)?;

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ {}", report.summary());
    Ok(())
}

fn cmd_verify(store: &mut dyn PackageStore) -> Result<()> {
    println!("🔍 Verifying catalog consistency");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let records = load_catalog(store)?;

    // Run the pipeline on a scratch copy; the store is never written here
    let mut working = records.clone();
    let reconciler = Reconciler::new();
    let report = reconciler.reconcile(&mut working);
    let violations = reconciler.sentinel_violations(&records);

    println!();
    for pass in &report.passes {
        if pass.is_noop() {
            println!("✓ {}", pass.summary());
        } else {
            println!("✗ {}", pass.summary());
            print_name_changes(pass);
        }
    }
    for violation in &violations {
        println!(
            "✗ {} [{}]: {}",
            violation.record_id, violation.feature, violation.detail
        );
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if report.is_clean() && violations.is_empty() {
        println!("✅ Catalog is consistent: {} packages verified", records.len());
        Ok(())
    } else {
        println!("❌ Catalog has drift. Run `plan-catalog reconcile` to repair.");
        std::process::exit(1);
    }
}

fn cmd_export(
    store: &mut dyn PackageStore,
    out: &std::path::Path,
    check: bool,
    dry_run: bool,
) -> Result<()> {
    println!("📤 Exporting default-catalog module");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let records = load_catalog(store)?;
    if records.is_empty() {
        bail!("store is empty; seed or save a catalog before exporting");
    }

    let rendered = render_defaults_module(&records);
    let fingerprint = module_fingerprint(&rendered).unwrap_or("unknown");
    println!("✓ Rendered module, fingerprint {}", fingerprint);

    if check {
        let on_disk = fs::read_to_string(out)
            .with_context(|| format!("cannot read {}", out.display()))?;
        println!(
            "✓ On-disk fingerprint {}",
            module_fingerprint(&on_disk).unwrap_or("missing")
        );

        println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        if module_fingerprint(&on_disk) == Some(fingerprint) {
            println!("✅ {} is up to date", out.display());
            return Ok(());
        }
        println!("❌ {} is stale. Run `plan-catalog export` to regenerate.", out.display());
        std::process::exit(1);
    }

    if dry_run {
        println!("\n⚠️  Dry run: nothing written");
        return Ok(());
    }

    write_defaults_module(&records, out)?;
    println!("\n✓ Wrote {} ({} packages)", out.display(), records.len());
    Ok(())
}

// ============================================================================
// SHARED STEPS
// ============================================================================

fn load_catalog(store: &mut dyn PackageStore) -> Result<Vec<PlanRecord>> {
    println!("\n📂 Loading catalog from {}...", store.describe());
    let records = store.load()?;
    println!("✓ Loaded {} packages", records.len());
    Ok(records)
}

fn persist(store: &mut dyn PackageStore, records: &[PlanRecord], dry_run: bool) -> Result<()> {
    if dry_run {
        println!("\n⚠️  Dry run: store left untouched");
        return Ok(());
    }
    println!("\n💾 Saving catalog...");
    store.save(records)?;
    println!("✓ Saved {} packages to {}", records.len(), store.describe());
    Ok(())
}

fn print_name_changes(report: &PassReport) {
    for change in &report.name_changes {
        println!(
            "  {} | {} → {}",
            change.carrier.name(),
            change.old_name,
            change.new_name
        );
    }
}
