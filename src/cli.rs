use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::analysis::process_dataset;
use crate::data::catalog::load_catalog;
use crate::data::frequency::{load_frequency_table, FrequencyRound, FrequencyTable};
use crate::data::registry::{
    default_registry, frequency_path, load_registry, record_artifact, Registry,
    DEFAULT_DATA_ROOT, OVERVIEW_REGISTRY_KEY, REGISTRY_FILE_NAME,
};
use crate::export::export_overview_csv;
use crate::overview::{load_overview, write_overview, Overview, DEFAULT_OVERVIEW_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Process,
    Rank,
    Export,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("process") => Some(Command::Process),
        Some("rank") => Some(Command::Rank),
        Some("export") => Some(Command::Export),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Process) => handle_process(args),
        Some(Command::Rank) => handle_rank(args),
        Some(Command::Export) => handle_export(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: metascope <process|rank|export|validate>");
            2
        }
    }
}

fn registry_or_default(data_root: &Path) -> Registry {
    match load_registry(&data_root.join(REGISTRY_FILE_NAME)) {
        Some(registry) => registry,
        None => {
            println!("No registry manifest found, using built-in dataset layout");
            default_registry()
        }
    }
}

/// Load the five frequency partitions once; they are shared across every
/// dataset of the same round family. A missing or malformed partition
/// becomes an empty table, so its lookups all resolve to 1.0.
fn load_frequency_partitions(data_root: &Path) -> HashMap<FrequencyRound, FrequencyTable> {
    println!("Loading frequency data...");
    let mut partitions = HashMap::new();
    for round in FrequencyRound::ALL {
        let path = data_root.join(frequency_path(round));
        match load_frequency_table(&path) {
            Some(table) => {
                println!("  Loaded {} frequencies for {}", table.len(), round.as_str());
                partitions.insert(round, table);
            }
            None => {
                eprintln!(
                    "  No frequency data for {} ({}), defaulting all weights to 1.0",
                    round.as_str(),
                    path.display()
                );
                partitions.insert(round, FrequencyTable::new());
            }
        }
    }
    partitions
}

fn handle_process(args: &[String]) -> i32 {
    let data_root = PathBuf::from(args.get(2).map(String::as_str).unwrap_or(DEFAULT_DATA_ROOT));
    let output = PathBuf::from(
        args.get(3)
            .map(String::as_str)
            .unwrap_or(DEFAULT_OVERVIEW_PATH),
    );

    let registry = registry_or_default(&data_root);
    let partitions = load_frequency_partitions(&data_root);

    let mut overview = Overview::new();
    for (key, entry) in &registry {
        if key == OVERVIEW_REGISTRY_KEY {
            continue;
        }
        println!("Processing {key}...");
        let catalog_path = data_root.join(&entry.path);
        let Some(catalog) = load_catalog(&catalog_path) else {
            eprintln!(
                "  Skipping {key}: could not load catalog from {}",
                catalog_path.display()
            );
            continue;
        };
        println!("  Loaded {} sets", catalog.len());

        let round = FrequencyRound::for_dataset(key);
        let frequencies = partitions
            .get(&round)
            .cloned()
            .unwrap_or_default();

        let result = process_dataset(key, catalog, &frequencies);
        println!(
            "  Top sets: {}, bottom sets: {}, teams: {}",
            result.top_sets.len(),
            result.bottom_sets.len(),
            result.top_teams.len()
        );
        overview.insert(key.clone(), result);
    }

    if let Err(err) = write_overview(&output, &overview) {
        eprintln!("failed to write overview to {}: {err}", output.display());
        return 1;
    }
    println!("Overview for {} dataset(s) written to {}", overview.len(), output.display());

    // Non-fatal: the overview itself is already on disk.
    let registry_path = data_root.join(REGISTRY_FILE_NAME);
    if let Err(err) = record_artifact(
        &registry_path,
        OVERVIEW_REGISTRY_KEY,
        &output.to_string_lossy(),
        "metascope process",
    ) {
        eprintln!("failed to stamp registry {}: {err}", registry_path.display());
    }

    0
}

fn handle_rank(args: &[String]) -> i32 {
    let (Some(key), Some(catalog_path)) = (args.get(2), args.get(3)) else {
        eprintln!("usage: metascope rank <dataset-key> <catalog.json> [frequencies.json]");
        return 2;
    };

    let Some(catalog) = load_catalog(Path::new(catalog_path)) else {
        eprintln!("could not load catalog from {catalog_path}");
        return 1;
    };

    let frequencies = match args.get(4) {
        Some(path) => match load_frequency_table(Path::new(path)) {
            Some(table) => table,
            None => {
                eprintln!("could not load frequencies from {path}");
                return 1;
            }
        },
        None => FrequencyTable::new(),
    };

    let result = process_dataset(key, catalog, &frequencies);
    match serde_json::to_string_pretty(&result) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize dataset result: {err}");
            1
        }
    }
}

fn handle_export(args: &[String]) -> i32 {
    let (Some(overview_path), Some(csv_path)) = (args.get(2), args.get(3)) else {
        eprintln!("usage: metascope export <overview.json> <out.csv>");
        return 2;
    };

    let Some(overview) = load_overview(Path::new(overview_path)) else {
        eprintln!("could not load overview from {overview_path}");
        return 1;
    };

    match export_overview_csv(Path::new(csv_path), &overview) {
        Ok(()) => {
            println!("Exported {} dataset(s) to {csv_path}", overview.len());
            0
        }
        Err(err) => {
            eprintln!("export failed: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let data_root = PathBuf::from(args.get(2).map(String::as_str).unwrap_or(DEFAULT_DATA_ROOT));
    let registry = registry_or_default(&data_root);

    let mut ok = 0usize;
    let mut failed = 0usize;
    for (key, entry) in &registry {
        if key == OVERVIEW_REGISTRY_KEY {
            continue;
        }
        let path = data_root.join(&entry.path);
        match load_catalog(&path) {
            Some(catalog) => {
                println!("[{key}] ok: {} sets ({})", catalog.len(), path.display());
                ok += 1;
            }
            None => {
                eprintln!("[{key}] missing or invalid catalog: {}", path.display());
                failed += 1;
            }
        }
    }
    for round in FrequencyRound::ALL {
        let path = data_root.join(frequency_path(round));
        match load_frequency_table(&path) {
            Some(table) => {
                println!("[{}] ok: {} frequencies", round.as_str(), table.len());
                ok += 1;
            }
            None => {
                eprintln!(
                    "[{}] missing or invalid frequency file: {}",
                    round.as_str(),
                    path.display()
                );
                failed += 1;
            }
        }
    }

    println!("validated: {ok} ok, {failed} failed");
    if failed > 0 {
        1
    } else {
        0
    }
}
