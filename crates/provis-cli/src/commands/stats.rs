use crate::cli::StatsArgs;
use crate::config::{self, FileConfig, OutputFormat};
use crate::error::{CliError, Result};
use provis::core::io::pdb::PdbFile;
use provis::core::io::traits::StructureFile;
use provis::core::stats::StructureStats;
use std::fmt::Write;
use tracing::info;

pub fn run(args: StatsArgs) -> Result<()> {
    let file_config = FileConfig::load(args.config.as_deref())?;
    let format = config::resolve_output_format(&file_config, args.format.as_deref())?;

    info!("Loading structure from {:?}", &args.input);
    let structure = PdbFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;

    let stats = StructureStats::compute(&structure);
    info!(
        "Computed statistics: {} atoms across {} model(s).",
        stats.atoms, stats.models
    );

    match format {
        OutputFormat::Text => print!("{}", render_text(&stats)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stats)
                .map_err(|e| CliError::Other(e.into()))?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// Formats the statistics record as the human-readable report.
fn render_text(stats: &StructureStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Number of Atoms: {}", stats.atoms);
    let _ = writeln!(out, "Number of Residues: {}", stats.residues);
    let _ = writeln!(out, "Number of Chains: {}", stats.nr_chains);
    for (chain_id, length) in &stats.chain_lengths {
        let _ = writeln!(out, "  - Chain {}: {} residues", chain_id, length);
    }
    let _ = writeln!(out, "Number of Ligands: {}", stats.nr_ligands);
    if stats.nr_ligands > 0 {
        let _ = writeln!(out, "  - Ligands: {}", stats.ligands.join(", "));
    }
    let _ = writeln!(out, "Number of Water Molecules: {}", stats.waters);
    let _ = writeln!(out, "Number of Models: {}", stats.models);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_stats() -> StructureStats {
        StructureStats {
            atoms: 93,
            residues: 15,
            chains: vec!['A', 'B'],
            nr_chains: 2,
            chain_lengths: BTreeMap::from([('A', 10), ('B', 5)]),
            ligands: vec!["NAG".to_string()],
            nr_ligands: 1,
            waters: 3,
            models: 1,
        }
    }

    #[test]
    fn text_report_lists_all_fields() {
        let report = render_text(&sample_stats());
        assert!(report.contains("Number of Atoms: 93"));
        assert!(report.contains("Number of Residues: 15"));
        assert!(report.contains("Number of Chains: 2"));
        assert!(report.contains("  - Chain A: 10 residues"));
        assert!(report.contains("  - Chain B: 5 residues"));
        assert!(report.contains("Number of Ligands: 1"));
        assert!(report.contains("  - Ligands: NAG"));
        assert!(report.contains("Number of Water Molecules: 3"));
        assert!(report.contains("Number of Models: 1"));
    }

    #[test]
    fn text_report_omits_ligand_listing_when_empty() {
        let mut stats = sample_stats();
        stats.ligands.clear();
        stats.nr_ligands = 0;
        let report = render_text(&stats);
        assert!(report.contains("Number of Ligands: 0"));
        assert!(!report.contains("  - Ligands:"));
    }

    #[test]
    fn run_reports_statistics_for_a_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini.pdb");
        std::fs::write(
            &path,
            "ATOM      1  CA  ALA A   1      11.104  13.207   2.100  1.00  0.00           C\n",
        )
        .unwrap();

        let args = StatsArgs {
            input: path,
            format: Some("json".to_string()),
            config: None,
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn run_fails_cleanly_for_unparseable_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.pdb");
        std::fs::write(&path, "REMARK NOTHING\n").unwrap();

        let args = StatsArgs {
            input: path,
            format: None,
            config: None,
        };
        assert!(matches!(run(args), Err(CliError::FileParsing { .. })));
    }
}
