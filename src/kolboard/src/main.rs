//! kolboard — campaign analytics and KOL matchmaking over a dashboard snapshot.
//!
//! Reads a JSON export of the KOL roster and campaigns, computes the
//! requested report and writes it as JSON to stdout. Logs go to stderr.

use clap::{Parser, Subcommand, ValueEnum};
use kol_core::config::{AppConfig, LogConfig};
use kol_core::Snapshot;
use kol_matchmaker::get_smart_recommendations;
use kol_reporting::engagement::{
    follower_engagement_rate, grade_engagement, EngagementQuality, PostInteractions,
};
use kol_reporting::performance::{kol_performance_rows, sort_rows, SortDirection, SortKey};
use kol_reporting::{build_scorecard, summarize_campaign};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "kolboard")]
#[command(about = "Campaign analytics and KOL matchmaking for influencer marketing")]
#[command(version)]
struct Cli {
    /// Config file (TOML/JSON/YAML, extension optional)
    #[arg(long, env = "KOLBOARD_CONFIG")]
    config: Option<String>,

    /// Pretty-print JSON output (overrides config)
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Emit logs as JSON (overrides config)
    #[arg(long, default_value_t = false)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Campaign roll-up and success metrics
    Summary {
        #[arg(long)]
        snapshot: PathBuf,
        /// Only this campaign (default: all)
        #[arg(long)]
        campaign: Option<String>,
    },
    /// Per-KOL performance table for one campaign
    Performance {
        #[arg(long)]
        snapshot: PathBuf,
        #[arg(long)]
        campaign: String,
        #[arg(long, value_enum)]
        sort: Option<SortColumn>,
        /// Sort descending instead of ascending
        #[arg(long, default_value_t = false)]
        desc: bool,
    },
    /// Smart KOL recommendations for one campaign
    Recommend {
        #[arg(long)]
        snapshot: PathBuf,
        #[arg(long)]
        campaign: String,
        /// Maximum results (overrides config)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Judge a quoted price against recent view counts
    Scorecard {
        #[arg(long)]
        price: f64,
        #[arg(long, default_value_t = 1)]
        slots: u32,
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        views: Vec<f64>,
    },
    /// Follower-based engagement rate and quality grade for one post
    Engagement {
        #[arg(long)]
        followers: u64,
        #[arg(long, default_value_t = 0)]
        likes: u64,
        #[arg(long, default_value_t = 0)]
        comments: u64,
        #[arg(long, default_value_t = 0)]
        shares: u64,
    },
}

#[derive(Serialize)]
struct EngagementReport {
    rate: f64,
    quality: EngagementQuality,
    label: &'static str,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortColumn {
    Name,
    Cost,
    Views,
    Er,
    Cpm,
    Efficiency,
}

impl From<SortColumn> for SortKey {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Name => SortKey::Name,
            SortColumn::Cost => SortKey::Cost,
            SortColumn::Views => SortKey::Views,
            SortColumn::Er => SortKey::EngagementRate,
            SortColumn::Cpm => SortKey::Cpm,
            SortColumn::Efficiency => SortKey::Efficiency,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config decides the log format, so it is loaded before tracing exists.
    let loaded = AppConfig::load(cli.config.as_deref());
    let mut config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };

    // Apply CLI overrides
    if cli.pretty {
        config.report.pretty = true;
    }
    if cli.json_logs {
        config.log.json = true;
    }

    init_tracing(&config.log);
    if let Err(e) = loaded {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    info!(
        recommendation_limit = config.report.recommendation_limit,
        pretty = config.report.pretty,
        "Configuration loaded"
    );

    run(cli.command, &config)
}

fn init_tracing(log: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| log.filter.as_str().into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(command: Command, config: &AppConfig) -> anyhow::Result<()> {
    let pretty = config.report.pretty;

    match command {
        Command::Summary { snapshot, campaign } => {
            let snapshot = Snapshot::load(&snapshot)?;
            let summaries: Vec<_> = match campaign {
                Some(id) => vec![summarize_campaign(snapshot.campaign(&id)?, &snapshot.kols)],
                None => snapshot
                    .campaigns
                    .iter()
                    .map(|c| summarize_campaign(c, &snapshot.kols))
                    .collect(),
            };
            emit(&summaries, pretty)
        }
        Command::Performance {
            snapshot,
            campaign,
            sort,
            desc,
        } => {
            let snapshot = Snapshot::load(&snapshot)?;
            let campaign = snapshot.campaign(&campaign)?;
            let mut rows = kol_performance_rows(campaign, &snapshot.kols);
            if let Some(column) = sort {
                let direction = if desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                };
                sort_rows(&mut rows, column.into(), direction);
            }
            emit(&rows, pretty)
        }
        Command::Recommend {
            snapshot,
            campaign,
            limit,
        } => {
            let snapshot = Snapshot::load(&snapshot)?;
            let campaign = snapshot.campaign(&campaign)?;
            let mut results = get_smart_recommendations(&snapshot.kols, campaign);
            let limit = limit.unwrap_or(config.report.recommendation_limit);
            if results.len() > limit {
                info!(total = results.len(), limit, "Truncating recommendations");
                results.truncate(limit);
            }
            emit(&results, pretty)
        }
        Command::Scorecard {
            price,
            slots,
            views,
        } => match build_scorecard(price, slots, &views) {
            Some(card) => emit(&card, pretty),
            None => anyhow::bail!("price must be positive, got {price}"),
        },
        Command::Engagement {
            followers,
            likes,
            comments,
            shares,
        } => {
            let rate = follower_engagement_rate(
                followers,
                PostInteractions {
                    likes,
                    comments,
                    shares,
                },
            );
            let quality = grade_engagement(rate);
            emit(
                &EngagementReport {
                    rate,
                    quality,
                    label: quality.label(),
                },
                pretty,
            )
        }
    }
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
