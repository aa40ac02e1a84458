//! Engine configuration.
//!
//! Values are layered with `figment`: built-in defaults, then an optional
//! TOML file, then `ALGOSTEP_`-prefixed environment variables. Nested keys
//! use a double underscore, e.g. `ALGOSTEP_SCHEDULER__SORT_DELAY_MS=10`.
//!
//! ```toml
//! [scheduler]
//! traversal_delay_ms = 500
//! sort_delay_ms = 50
//!
//! [sort]
//! max_counting_value = 1000000
//! ```

use std::path::Path;
use std::time::Duration;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sort::DEFAULT_MAX_COUNTING_VALUE;

/// Prefix of environment variables read by [`EngineConfig::load`].
pub const ENV_PREFIX: &str = "ALGOSTEP_";

/// Step cadence of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Delay between traversal steps, in milliseconds.
    pub traversal_delay_ms: u64,
    /// Delay between sort steps, in milliseconds.
    pub sort_delay_ms: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            traversal_delay_ms: 500,
            sort_delay_ms: 50,
        }
    }
}

impl SchedulerConfig {
    /// Same delay for every run kind.
    #[must_use]
    pub fn uniform(delay_ms: u64) -> Self {
        Self {
            traversal_delay_ms: delay_ms,
            sort_delay_ms: delay_ms,
        }
    }

    /// Delay between traversal steps.
    #[must_use]
    pub fn traversal_delay(&self) -> Duration {
        Duration::from_millis(self.traversal_delay_ms)
    }

    /// Delay between sort steps.
    #[must_use]
    pub fn sort_delay(&self) -> Duration {
        Duration::from_millis(self.sort_delay_ms)
    }
}

/// Sort preparation limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Largest value counting sort accepts (bounds its frequency table).
    pub max_counting_value: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            max_counting_value: DEFAULT_MAX_COUNTING_VALUE,
        }
    }
}

/// Geometry of the draw-command projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Graph canvas width.
    pub graph_width: f64,
    /// Graph canvas height.
    pub graph_height: f64,
    /// Vertex circle radius.
    pub node_radius: f64,
    /// Gap between the vertex ring and the canvas edge.
    pub ring_margin: f64,
    /// Sort canvas width.
    pub sort_width: f64,
    /// Sort canvas height.
    pub sort_height: f64,
    /// Width of one bar.
    pub bar_width: f64,
    /// Bar height per unit of value.
    pub bar_scale: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            graph_width: 400.0,
            graph_height: 400.0,
            node_radius: 15.0,
            ring_margin: 40.0,
            sort_width: 600.0,
            sort_height: 400.0,
            bar_width: 20.0,
            bar_scale: 3.0,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Step cadence.
    pub scheduler: SchedulerConfig,
    /// Sort limits.
    pub sort: SortConfig,
    /// Projection geometry.
    pub render: RenderConfig,
}

impl EngineConfig {
    /// The layered provider: defaults, optional TOML file, environment.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `path` does not exist or a layer fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        }
        Ok(Self::figment(path).extract()?)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}
