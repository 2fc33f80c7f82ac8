use serde::Deserialize;
use argh::FromArgs;
use log::LevelFilter;

/// Least-cost trunk routing with cumulative link utilization
#[derive(FromArgs)]
pub struct Arguments {
    /// topology yaml file
    #[argh(positional)]
    pub network: String,
    /// demand yaml file, routed in order
    #[argh(positional)]
    pub demands: String,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// override log level (error, warn, info, debug or trace)
    #[argh(option, short='l')]
    pub log_level: Option<String>,
    /// write one row per demand to this csv file
    #[argh(option, short='r')]
    pub routes: Option<String>,
    /// write the link table with per-demand columns to this csv file
    #[argh(option, short='k')]
    pub links: Option<String>,
    /// compute shortest paths afresh for every demand
    #[argh(switch)]
    pub no_cache: bool,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_cache")]
    pub cache: bool,
    #[serde(default)]
    pub routes: Option<String>,
    #[serde(default)]
    pub links: Option<String>,
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_cache() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: String::from("default"),
            log_level: default_log_level(),
            cache: default_cache(),
            routes: None,
            links: None,
        }
    }
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(log_level) = &args.log_level {
            self.log_level = log_level.clone();
        }
        if let Some(routes) = &args.routes {
            self.routes = Some(routes.clone());
        }
        if let Some(links) = &args.links {
            self.links = Some(links.clone());
        }
        if args.no_cache {
            self.cache = false;
        }
    }
    /// Unknown level names fall back to info.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
