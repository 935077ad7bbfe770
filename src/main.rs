use clap::Parser;
use overlap_etl::utils::logger;
use overlap_etl::{CliArgs, CompileEngine, CsvConfig, CsvPipeline, LocalStorage, PairResult};

#[derive(serde::Serialize)]
struct PairReport<'a> {
    project_id: &'a str,
    first_employee_id: &'a str,
    second_employee_id: &'a str,
    shared_days: i64,
}

impl<'a> From<&'a PairResult> for PairReport<'a> {
    fn from(pair: &'a PairResult) -> Self {
        Self {
            project_id: &pair.project_id,
            first_employee_id: &pair.first_id,
            second_employee_id: &pair.second_id,
            shared_days: pair.shared_days(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("starting overlap-etl");

    let config = match &args.config {
        Some(path) => CsvConfig::from_file(path)?,
        None => CsvConfig::default(),
    };

    let pipeline = CsvPipeline::new(LocalStorage::new(), config);
    let engine = CompileEngine::new(pipeline);

    let results = engine.compile(&args.source, true).await?;

    if results.is_empty() {
        println!("No overlapping pairs found in {}", args.source);
        return Ok(());
    }

    if args.json {
        let report: Vec<PairReport> = results.iter().map(PairReport::from).collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for pair in &results {
            println!(
                "{} - {} + {} - {} days",
                pair.project_id,
                pair.first_id,
                pair.second_id,
                pair.shared_days()
            );
        }
    }

    Ok(())
}
