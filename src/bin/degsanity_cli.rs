use anyhow::{Context, Result, bail};
use degsanity::report_text::render_report;
use degsanity::{
    CountMatrix, Grade, MetadataSchema, QCReport, analyze_with_fold_changes, demo, table,
};
use serde::Serialize;
use std::env;

#[derive(Serialize)]
struct AnalysisOutput {
    report: QCReport,
    grade: Grade,
    summary: &'static str,
}

fn usage() {
    eprintln!(
        "Usage:\n  \
  degsanity_cli --version\n  \
  degsanity_cli analyze COUNTS.csv [--metadata PATH] [--fold-changes PATH] [--json]\n  \
  degsanity_cli demo [--json]\n\n  \
  COUNTS: comma- or tab-delimited, header row first, gene id in column 0.\n  \
  Metadata: batch label expected in column index 2 of each sample row.\n  \
  Fold changes: one log2 fold change per line."
    );
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text =
        serde_json::to_string_pretty(value).context("Could not serialize JSON output")?;
    println!("{text}");
    Ok(())
}

fn load_fold_changes(path: &str) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read fold-change file '{path}'"))?;
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<f64>()
                .with_context(|| format!("Bad fold-change value '{line}' in '{path}'"))
        })
        .collect()
}

fn report_from(
    matrix_rows: &[Vec<String>],
    metadata_path: Option<&str>,
    fold_changes: Option<&[f64]>,
) -> Result<QCReport> {
    let matrix = CountMatrix::from_rows(matrix_rows)?;
    let metadata = match metadata_path {
        Some(path) => {
            let rows = table::load_rows(path)?;
            table::optional_metadata(&rows, &MetadataSchema::default())?
        }
        None => None,
    };
    Ok(analyze_with_fold_changes(
        &matrix,
        metadata.as_ref(),
        fold_changes,
    )?)
}

fn emit(report: QCReport, json: bool) -> Result<()> {
    if json {
        let grade = Grade::from_report(&report);
        print_json(&AnalysisOutput {
            summary: grade.summary(),
            grade,
            report,
        })
    } else {
        print!("{}", render_report(&report));
        Ok(())
    }
}

fn run(args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("--version") => {
            println!("degsanity {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some("analyze") => {
            let Some(counts_path) = args.get(1).filter(|a| !a.starts_with("--")) else {
                usage();
                bail!("analyze needs a count-matrix path");
            };
            let mut metadata_path = None;
            let mut fold_changes_path = None;
            let mut json = false;
            let mut rest = args[2..].iter();
            while let Some(arg) = rest.next() {
                match arg.as_str() {
                    "--metadata" => {
                        metadata_path =
                            Some(rest.next().context("--metadata needs a path")?.clone());
                    }
                    "--fold-changes" => {
                        fold_changes_path =
                            Some(rest.next().context("--fold-changes needs a path")?.clone());
                    }
                    "--json" => json = true,
                    other => {
                        usage();
                        bail!("Unknown argument '{other}'");
                    }
                }
            }
            let rows = table::load_rows(counts_path)?;
            let fold_changes = match fold_changes_path.as_deref() {
                Some(path) => Some(load_fold_changes(path)?),
                None => None,
            };
            let report = report_from(&rows, metadata_path.as_deref(), fold_changes.as_deref())?;
            emit(report, json)
        }
        Some("demo") => {
            let mut json = false;
            for arg in &args[1..] {
                match arg.as_str() {
                    "--json" => json = true,
                    other => {
                        usage();
                        bail!("Unknown argument '{other}'");
                    }
                }
            }
            let report = report_from(&demo::demo_count_matrix(), None, None)?;
            emit(report, json)
        }
        _ => {
            usage();
            bail!("No command given");
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_demo_runs() {
        assert!(run(&args(&["demo"])).is_ok());
        assert!(run(&args(&["demo", "--json"])).is_ok());
    }

    #[test]
    fn test_demo_rejects_unknown_argument() {
        let err = run(&args(&["demo", "--bogus"])).unwrap_err();
        assert!(err.to_string().contains("--bogus"));
    }
}
