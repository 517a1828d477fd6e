use anyhow::Result;
use chrono::Duration;
use clap::{Args, Parser, Subcommand};
use country_facts::{Client, Config, Engine, SearchQuery, SnapshotCache};

#[derive(Parser, Debug)]
#[command(
    name = "country-facts",
    version,
    about = "Fetch, cache & aggregate country data from a public REST source"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List countries, optionally filtered by region and minimum population.
    List(ListArgs),
    /// Look up a single country by its common name (case-insensitive).
    Get {
        /// Common name, e.g. "France".
        name: String,
    },
    /// Group countries by region with summed populations.
    Regions,
    /// Group countries by language with speaker totals.
    Languages,
    /// Print global statistics over the dataset.
    Stats,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Region filter, case-insensitive exact match (e.g. Europe).
    #[arg(short, long)]
    region: Option<String>,
    /// Keep only countries with at least this population.
    #[arg(short = 'p', long)]
    min_population: Option<u64>,
    /// 1-based page number.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,
    /// Page size.
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(1..))]
    limit: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::from_env()?;
    let client = Client::new(config.base_url.as_str(), config.timeout);
    let cache = SnapshotCache::new(client).with_ttl(Duration::seconds(config.ttl_secs));
    let engine = Engine::new(cache);

    match cli.cmd {
        Command::List(args) => {
            let query = SearchQuery {
                region: args.region,
                min_population: args.min_population,
                page: args.page as usize,
                limit: args.limit as usize,
            };
            let page = engine.search(&query)?;
            eprintln!("{} of {} matching countries", page.data.len(), page.total);
            print_json(&page)
        }
        Command::Get { name } => print_json(&engine.by_name(&name)?),
        Command::Regions => print_json(&engine.regions()?),
        Command::Languages => print_json(&engine.languages()?),
        Command::Stats => print_json(&engine.statistics()?),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
