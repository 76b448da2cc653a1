use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use jichul_analysis::{Analysis, detail, month_category_totals, months};
use jichul_core::{AnnotatedRow, CategoryRuleSet, YearMonth, annotate};
use jichul_ingest::{SAMPLE_CSV, load_expense_csv};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod output;
mod state;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("JICHUL_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "jichul",
    version,
    long_version = LONG_VERSION,
    about = "Keyword-classified personal expense analysis"
)]
struct Cli {
    /// Log debug output to stderr (otherwise JICHUL_LOG, default: warn)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct RuleArgs {
    /// Rule file (TOML) to use instead of the configured or built-in rules
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Match keywords case-sensitively
    #[arg(long, conflicts_with = "case_insensitive")]
    case_sensitive: bool,

    /// Match keywords ignoring case, even if the config or rule file says otherwise
    #[arg(long)]
    case_insensitive: bool,
}

impl RuleArgs {
    fn case_override(&self) -> Option<bool> {
        match (self.case_sensitive, self.case_insensitive) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify an expense CSV and print monthly / category breakdowns
    Analyze {
        /// Path to the expense CSV (date, description, amount)
        csv: PathBuf,

        #[command(flatten)]
        rule_args: RuleArgs,

        /// Show the category breakdown for one month (YYYY-MM)
        #[arg(long)]
        month: Option<YearMonth>,

        /// With --month: list that month's expenses in this category
        #[arg(long, requires = "month")]
        category: Option<String>,

        /// Number of annotated rows to preview (default: config, 20)
        #[arg(long)]
        preview: Option<usize>,

        /// Print the analysis as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Print the category for each description
    Classify {
        /// One or more descriptions
        #[arg(required = true)]
        text: Vec<String>,

        #[command(flatten)]
        rule_args: RuleArgs,
    },

    /// Show the active rules in priority order
    Rules {
        #[command(flatten)]
        rule_args: RuleArgs,
    },

    /// Write the sample CSV (stdout unless --out is given)
    Sample {
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Manage ~/.jichul/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Analyze {
            csv,
            rule_args,
            month,
            category,
            preview,
            json,
        } => {
            let cfg = config::load_config()?;
            let rules = rules_for(&cfg, &rule_args)?;
            let limit = preview.unwrap_or(cfg.display.preview_rows);
            analyze(&csv, &rules, month, category.as_deref(), limit, json)?;
        }

        Command::Classify { text, rule_args } => {
            let cfg = config::load_config()?;
            let rules = rules_for(&cfg, &rule_args)?;
            for t in &text {
                println!("{}\t{}", rules.classify(t), t);
            }
        }

        Command::Rules { rule_args } => {
            let cfg = config::load_config()?;
            let rules = rules_for(&cfg, &rule_args)?;
            println!(
                "{} rules (case-sensitive: {}); first match wins\n",
                rules.len(),
                rules.options().case_sensitive
            );
            println!("{}", output::rules_table(&rules));
        }

        Command::Sample { out } => match out {
            Some(path) => {
                std::fs::write(&path, SAMPLE_CSV)
                    .with_context(|| format!("write {}", path.display()))?;
                println!("Wrote {}", path.display());
            }
            None => print!("{SAMPLE_CSV}"),
        },

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("JICHUL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn rules_for(cfg: &config::Config, args: &RuleArgs) -> Result<CategoryRuleSet> {
    config::load_rule_set(cfg, args.rules.as_deref(), args.case_override())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: String,
    skipped: &'a [jichul_ingest::SkippedRow],
    #[serde(flatten)]
    analysis: &'a Analysis,
    rows: &'a [AnnotatedRow],
    #[serde(skip_serializing_if = "Option::is_none")]
    month: Option<MonthReport>,
}

#[derive(Serialize)]
struct MonthReport {
    year_month: YearMonth,
    by_category: Vec<jichul_analysis::CategoryTotal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<jichul_analysis::Detail>,
}

fn analyze(
    csv_path: &Path,
    rules: &CategoryRuleSet,
    month: Option<YearMonth>,
    category: Option<&str>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let loaded = load_expense_csv(csv_path)
        .with_context(|| format!("loading {}", csv_path.display()))?;

    let rows = annotate(&loaded.rows, rules);
    let analysis = Analysis::from_rows(&rows);
    info!(rows = rows.len(), skipped = loaded.skipped.len(), "analysis ready");

    let month_report = month_report(&rows, month, category)?;

    if json {
        let report = JsonReport {
            source: csv_path.display().to_string(),
            skipped: &loaded.skipped,
            analysis: &analysis,
            rows: &rows,
            month: month_report,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Parsed {} transactions from {} ({} skipped)",
        rows.len(),
        csv_path.display(),
        loaded.skipped.len()
    );
    if !loaded.has_description {
        println!("No description column found; every row is categorized as the fallback.");
    }
    println!("Total spending: {}원\n", output::won(analysis.total));

    println!("## Preview (first {limit} rows, with category)\n");
    println!("{}\n", output::preview_table(&rows, limit));

    println!("## Monthly totals\n");
    println!("{}\n", output::monthly_table(&analysis.monthly));

    println!("## By category (all months)\n");
    println!("{}\n", output::category_table(&analysis.by_category));

    println!("## Month x category\n");
    println!("{}", output::pivot_table(&analysis.pivot));

    if let Some(m) = &month_report {
        println!("\n## {} by category\n", m.year_month);
        println!("{}", output::category_table(&m.by_category));
        if let Some(d) = &m.detail {
            println!("\n## {} / {}\n", d.year_month, d.category);
            println!("{}", output::detail_text(d));
        }
    }

    Ok(())
}

/// Category totals (and optionally one category's detail) for the selected month.
/// A month with no expenses is an error naming the months the data covers.
fn month_report(
    rows: &[AnnotatedRow],
    month: Option<YearMonth>,
    category: Option<&str>,
) -> Result<Option<MonthReport>> {
    let Some(m) = month else {
        return Ok(None);
    };
    let covered = months(rows);
    if !covered.contains(&m) {
        bail!("no expenses in {m} (data covers {})", month_span(&covered));
    }
    Ok(Some(MonthReport {
        year_month: m,
        by_category: month_category_totals(rows, m),
        detail: category.map(|c| detail(rows, m, c)),
    }))
}

fn month_span(covered: &[YearMonth]) -> String {
    match (covered.first(), covered.last()) {
        (Some(first), Some(last)) => format!("{first} to {last}"),
        _ => "no months".to_string(),
    }
}
