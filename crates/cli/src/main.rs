use anyhow::{Context, Result};
use catalog::{sample, ByRatingDescending, ByTitle, ByYearAscending, Cinema, MovieOrdering};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};

/// Cinema - sort and list the sample movie catalog
#[derive(Parser, Debug)]
#[command(name = "cinema")]
#[command(about = "Sort the sample movie catalog and print it", long_about = None)]
struct Cli {
    /// Orderings to apply, each followed by a printed listing
    #[arg(long = "order", value_enum, default_values_t = [OrderingKind::Year, OrderingKind::Rating])]
    orders: Vec<OrderingKind>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Named orderings selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OrderingKind {
    /// Oldest release first
    Year,
    /// Highest rating first
    Rating,
    /// Alphabetical by title
    Title,
}

impl OrderingKind {
    fn strategy(self) -> Box<dyn MovieOrdering> {
        match self {
            OrderingKind::Year => Box::new(ByYearAscending),
            OrderingKind::Rating => Box::new(ByRatingDescending),
            OrderingKind::Title => Box::new(ByTitle),
        }
    }

    fn label(self) -> &'static str {
        match self {
            OrderingKind::Year => "year",
            OrderingKind::Rating => "rating",
            OrderingKind::Title => "title",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// One sorted listing, as written in JSON mode
#[derive(Serialize)]
struct SortedListing<'a> {
    sorted_by: &'a str,
    movies: &'a Cinema,
}

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for the listings
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}

/// Populate the sample cinema, then sort and print once per requested ordering
fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let mut cinema = sample::sample_cinema();
    tracing::info!("Loaded {} sample movies", cinema.len());

    for kind in &cli.orders {
        let strategy = kind.strategy();
        cinema.sort(strategy.as_ref());

        match cli.format {
            OutputFormat::Text => print_text(&cinema, kind.label(), out)?,
            OutputFormat::Json => print_json(&cinema, kind.label(), out)?,
        }
    }

    Ok(())
}

/// Header line, the rendered listing, then a blank separator line
fn print_text(cinema: &Cinema, label: &str, out: &mut impl Write) -> Result<()> {
    let listing = cinema
        .render()
        .with_context(|| format!("Failed to render movies sorted by {}", label))?;

    writeln!(out, "Movies sorted by {}:", label)?;
    writeln!(out, "{}", listing)?;
    Ok(())
}

fn print_json(cinema: &Cinema, label: &str, out: &mut impl Write) -> Result<()> {
    let listing = SortedListing {
        sorted_by: label,
        movies: cinema,
    };
    let json = serde_json::to_string_pretty(&listing).context("Failed to serialize listing")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut buf = Vec::new();
        run(&cli, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cinema"]).unwrap();
        assert_eq!(cli.orders, vec![OrderingKind::Year, OrderingKind::Rating]);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_default_output() {
        let expected = "\
Movies sorted by year:
Jurassic Park (1993), ScienceFiction, Directed by Steven Spielberg, Rating: 8.1
Schindler's List (1993), Drama, Directed by Steven Spielberg, Rating: 8.9
Inception (2010), Fantasy, Directed by Christopher Nolan, Rating: 8.8

Movies sorted by rating:
Schindler's List (1993), Drama, Directed by Steven Spielberg, Rating: 8.9
Inception (2010), Fantasy, Directed by Christopher Nolan, Rating: 8.8
Jurassic Park (1993), ScienceFiction, Directed by Steven Spielberg, Rating: 8.1

";
        assert_eq!(run_to_string(&["cinema"]), expected);
    }

    #[test]
    fn test_custom_order() {
        let output = run_to_string(&["cinema", "--order", "title"]);
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("Movies sorted by title:"));
        assert!(lines.next().unwrap().starts_with("Inception"));
        assert!(lines.next().unwrap().starts_with("Jurassic Park"));
        assert!(lines.next().unwrap().starts_with("Schindler's List"));
    }

    #[test]
    fn test_json_output() {
        let output = run_to_string(&["cinema", "--order", "rating", "--format", "json"]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["sorted_by"], "rating");
        let movies = value["movies"].as_array().unwrap();
        assert_eq!(movies.len(), 3);
        assert_eq!(movies[0]["title"], "Schindler's List");
        assert_eq!(movies[2]["title"], "Jurassic Park");
    }

    #[test]
    fn test_rejects_unknown_order() {
        assert!(Cli::try_parse_from(["cinema", "--order", "director"]).is_err());
    }
}
