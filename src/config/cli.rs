use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "overlap-etl")]
#[command(about = "Computes shared project time for employee pairs from a CSV assignment log")]
pub struct CliArgs {
    /// CSV file with employee id, project id, date-from and date-to columns
    pub source: String,

    /// TOML file overriding the parsing defaults (date format, header tokens)
    #[arg(long)]
    pub config: Option<String>,

    /// Print the result as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
