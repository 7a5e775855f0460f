use anyhow::{Result, bail};
use comfy_table::Table;
use tracing::info_span;

use metrc_cli::pipeline::{IngestConfig, OutputConfig, extract_all, ingest, output};
use metrc_cli::summary::apply_table_style;
use metrc_cli::types::ExtractResult;
use metrc_model::{ExtractionOptions, KNOWN_SERVICES, UnmatchedPolicy};

use crate::cli::ExtractArgs;

/// List the known service categories in match-precedence order.
pub fn run_services() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Precedence", "Service"]);
    apply_table_style(&mut table);
    for (index, service) in KNOWN_SERVICES.iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), (*service).to_string()]);
    }
    println!("{table}");
    Ok(())
}

/// Run the full batch pipeline: ingest, extract, output.
pub fn run_extract(args: &ExtractArgs) -> Result<ExtractResult> {
    let run_span = info_span!("extract_run");
    let _run_guard = run_span.enter();

    // =========================================================================
    // Stage 1: Ingest - load reference tables, collect manifests
    // =========================================================================
    let ingested = ingest(&IngestConfig {
        manifests: &args.manifests,
        input_dir: args.input_dir.as_deref(),
        license_table: args.license_table.as_deref(),
        product_table: args.product_table.as_deref(),
    })?;
    if ingested.manifests.is_empty() {
        bail!("no manifest PDFs to process (pass files or --input-dir)");
    }

    // =========================================================================
    // Stage 2: Extract - decode and process each manifest in input order
    // =========================================================================
    let options = ExtractionOptions::new().with_unmatched_policy(if args.drop_unmatched {
        UnmatchedPolicy::Drop
    } else {
        UnmatchedPolicy::PassThrough
    });
    let extracted = extract_all(&ingested.manifests, ingested.tables(), options);

    // =========================================================================
    // Stage 3: Output - row table and optional run report
    // =========================================================================
    let written = output(
        &OutputConfig {
            output: &args.output,
            report_json: args.report_json.as_deref(),
            dry_run: args.dry_run,
        },
        &extracted.rows,
        &extracted.documents,
        &extracted.errors,
    );

    let mut errors = extracted.errors;
    errors.extend(written.errors);
    Ok(ExtractResult {
        output_path: written.output_path,
        report_path: written.report_path,
        row_count: extracted.rows.len(),
        documents: extracted.documents,
        errors,
    })
}
