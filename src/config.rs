use anyhow::{bail, Context, Result};
use dotenvy::var;
use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use structstruck::strike;

use crate::types::DEFAULT_PAGE_SIZE;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenvy::dotenv().ok();
    Config::from_lookup_or_default(|name| var(name).ok())
});

strike! {
    #[strikethrough[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]]
    #[derive(Default)]
    pub struct Config {
        pub paging:
            pub struct {
                pub default_page_size: u64,
            }
        ,
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_page_size = match lookup("PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("PAGE_SIZE must be a number, got {:?}", raw))?,
            None => DEFAULT_PAGE_SIZE,
        };
        if default_page_size == 0 {
            bail!("PAGE_SIZE must be greater than zero");
        }

        Ok(Config {
            paging: Paging { default_page_size },
        })
    }

    /// Logs and falls back to defaults when a variable is invalid.
    pub fn from_lookup_or_default<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(lookup).unwrap_or_else(|err| {
            warn!("Invalid config, using defaults: {:#}", err);
            Config::default()
        })
    }
}
