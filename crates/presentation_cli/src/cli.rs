//! Command-line arguments

use std::path::PathBuf;

use application::services::FallbackPolicy;
use clap::{Parser, Subcommand};
use domain::{City, Language, ResourceKind, ResourceRequest};

/// SwissInfo CLI
#[derive(Debug, Parser)]
#[command(name = "swissinfo-cli")]
#[command(author, version, about = "Swiss city news, activities, lunch and forecasts", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./swissinfo.toml when present)
    #[arg(short, long, global = true, env = "SWISSINFO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Language and city shared by the resource commands
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct Locale {
    /// Content language (en, de)
    #[arg(short, long, default_value = "en")]
    pub lang: Language,

    /// City for news, activities, lunch and weekend (default: zurich)
    #[arg(long)]
    pub city: Option<City>,
}

impl Locale {
    pub fn request(self, kind: ResourceKind) -> ResourceRequest {
        let request = ResourceRequest::new(kind, self.lang);
        match self.city {
            Some(city) => request.with_city(city),
            None => request,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch one resource, answering from cache when fresh
    ///
    /// Example: swissinfo-cli fetch lunch --city bern --lang de
    Fetch {
        /// news, activities, lunch, weekend, sunshine or snow
        kind: ResourceKind,

        #[command(flatten)]
        locale: Locale,

        /// Skip the cache and ask the server to recompute
        #[arg(long)]
        refresh: bool,

        /// When to answer from Open-Meteo instead (never, on-degraded,
        /// on-any-error); defaults to the configured policy
        #[arg(long)]
        fallback: Option<FallbackPolicy>,
    },

    /// Compute a sunshine or snow forecast directly from Open-Meteo
    Fallback {
        kind: ResourceKind,
    },

    /// Warm the cache for every resource kind
    Prefetch {
        #[command(flatten)]
        locale: Locale,
    },

    /// Cache maintenance
    Cache {
        #[command(subcommand)]
        action: CacheCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum CacheCommand {
    /// Delete every cached response
    Clear,

    /// Delete the cached response for one resource
    Remove {
        kind: ResourceKind,

        #[command(flatten)]
        locale: Locale,
    },
}

/// Determine log filter override from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
