//! Load-profile entry point — CLI wiring, catalogue loading, and reporting.

use std::path::PathBuf;
use std::process;

use load_profile::catalogue::CatalogueFile;
use load_profile::io::export::export_csv;
use load_profile::profile::appliance::ApplianceRecord;
use load_profile::profile::scenario::ScenarioReport;
use load_profile::profile::{Scenario, run_scenarios};
use load_profile::store::CatalogueStore;

/// Record-store path used when `--db` is not given.
const DEFAULT_DB: &str = "load-profile.db";

/// Parsed CLI arguments.
struct CliArgs {
    catalogue_path: Option<PathBuf>,
    db_path: PathBuf,
    export_out: Option<PathBuf>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("load-profile — residential load profile via the Catalogue Method");
    eprintln!();
    eprintln!("Usage: load-profile [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --catalogue <path>   Compute from a TOML catalogue file (store untouched)");
    eprintln!("  --db <path>          Record-store path (default: {DEFAULT_DB})");
    eprintln!("  --export-out <path>  Export per-slot scenario series to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve              Start REST API server after computing");
        eprintln!("  --port <u16>         API server port (default: 3000)");
    }
    eprintln!("  --help               Show this help message");
    eprintln!();
    eprintln!("Without --catalogue, the record store is opened and seeded with the");
    eprintln!("default appliance dataset if empty.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        catalogue_path: None,
        db_path: PathBuf::from(DEFAULT_DB),
        export_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--catalogue" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --catalogue requires a path argument");
                    process::exit(1);
                }
                cli.catalogue_path = Some(PathBuf::from(&args[i]));
            }
            "--db" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --db requires a path argument");
                    process::exit(1);
                }
                cli.db_path = PathBuf::from(&args[i]);
            }
            "--export-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export-out requires a path argument");
                    process::exit(1);
                }
                cli.export_out = Some(PathBuf::from(&args[i]));
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Loads the catalogue snapshot: from a TOML file when `--catalogue` is
/// given, otherwise from the record store (seeded if empty).
fn load_records(cli: &CliArgs) -> Vec<ApplianceRecord> {
    if let Some(ref path) = cli.catalogue_path {
        let file = match CatalogueFile::from_toml_file(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        };
        match file.records() {
            Ok(records) => records,
            Err(errors) => {
                for e in &errors {
                    eprintln!("{e}");
                }
                process::exit(1);
            }
        }
    } else {
        let mut store = match CatalogueStore::open(&cli.db_path) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("error: cannot open store \"{}\": {e}", cli.db_path.display());
                process::exit(1);
            }
        };
        match store.seed_defaults() {
            Ok(0) => {}
            Ok(n) => eprintln!("Seeded {n} default appliances into {}", cli.db_path.display()),
            Err(e) => {
                eprintln!("error: failed to seed defaults: {e}");
                process::exit(1);
            }
        }
        match store.snapshot() {
            Ok(records) => records,
            Err(e) => {
                eprintln!("error: failed to read catalogue: {e}");
                process::exit(1);
            }
        }
    }
}

/// Prints one scenario's per-slot series and summary block.
fn print_report(report: &ScenarioReport, baseline: &ScenarioReport) {
    println!("\n--- {} ---", report.scenario.label());
    for total in &report.profile.slots {
        println!("{total}");
    }
    println!();
    println!("{}", report.summary);
    if report.scenario != Scenario::All {
        println!(
            "Share of off-grid peak: {:.1}% (apparent)",
            report.summary.apparent_share_pct(&baseline.summary)
        );
    }
}

fn main() {
    let cli = parse_args();
    let records = load_records(&cli);

    let reports = match run_scenarios(&records) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    for report in &reports {
        print_report(report, &reports[0]);
    }

    // Export CSV if requested
    if let Some(ref path) = cli.export_out {
        if let Err(e) = export_csv(&reports, path) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Slot series written to {}", path.display());
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(load_profile::api::AppState { records, reports });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(load_profile::api::serve(state, addr));
    }
}
