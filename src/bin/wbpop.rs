use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wb_population::api::DEFAULT_BASE_URL;
use wb_population::{HttpTransport, PopulationProvider, WorldBank};
use wb_population::{stats, storage};

#[derive(Parser, Debug)]
#[command(
    name = "wbpop",
    version,
    about = "Fetch historical population series from The World Bank"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a population series (and optionally save it and print stats).
    Get(GetArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Country code (ISO2 like `it`, ISO3 like `ITA`, or an aggregate like `EUU`)
    #[arg(short, long)]
    country: String,
    /// First year (inclusive)
    #[arg(long, default_value_t = 2000)]
    from: i32,
    /// Last year (inclusive)
    #[arg(long, default_value_t = 2020)]
    to: i32,
    /// Save results to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Print summary statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// API base URL.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

fn jan_first(year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| anyhow::anyhow!("invalid year: {}", year))
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            let s = format!("{:.2}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Get(args) => cmd_get(args),
    }
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let transport = HttpTransport::try_default().context("build http client")?;
    let provider = WorldBank::new(transport).with_base_url(args.base_url.as_str());
    let from = jan_first(args.from)?;
    let to = jan_first(args.to)?;

    let resp = provider
        .fetch(&args.country, from, to)
        .with_context(|| format!("fetch population for {}", args.country))?;

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&resp, path)?,
            "json" => storage::save_json(&resp, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", resp.history.len(), path.display());
    } else {
        for i in &resp.history {
            println!("{}\t{}", i.date.format("%Y-%m-%d"), i.value);
        }
    }

    if args.stats {
        let s = stats::summary(&resp);
        println!(
            "{} | {}  count={}  min={} max={} mean={} median={}",
            resp.provider,
            args.country,
            s.count,
            fmt_opt(s.min.map(|v| v as f64)),
            fmt_opt(s.max.map(|v| v as f64)),
            fmt_opt(s.mean),
            fmt_opt(s.median)
        );
    }

    Ok(())
}
