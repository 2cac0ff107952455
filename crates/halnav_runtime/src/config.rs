//! Runtime configuration.

use std::path::PathBuf;

use halnav_debug::{TraceEvent, TracerConfig};
use halnav_foundation::Result;
use halnav_map::Topology;

/// Settings for a session, filled from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Topology file; the built-in spaceship when unset.
    pub topology: Option<PathBuf>,
    /// Chatbot seed.
    pub seed: u64,
    /// Whether to emit ANSI colors.
    pub color: bool,
    /// Terminal width used to align lines.
    pub width: usize,
    /// Whether to echo trace events to stderr.
    pub trace: bool,
    /// Whether trace events are JSON lines.
    pub trace_json: bool,
    /// Event types to record; empty records all.
    pub trace_events: Vec<String>,
    /// Whether to print event counts when the session ends.
    pub trace_summary: bool,
    /// Whether to show the chat banner.
    pub banner: bool,
    /// Prompt shown before each input line.
    pub prompt: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            topology: None,
            seed: 0,
            color: true,
            width: Self::DEFAULT_WIDTH,
            trace: false,
            trace_json: false,
            trace_events: Vec::new(),
            trace_summary: false,
            banner: true,
            prompt: "> ".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Terminal width when none is given.
    pub const DEFAULT_WIDTH: usize = 80;

    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to load the map from a file.
    #[must_use]
    pub fn with_topology(mut self, path: impl Into<PathBuf>) -> Self {
        self.topology = Some(path.into());
        self
    }

    /// Builder method to set the chatbot seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to set color output.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder method to set the terminal width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Builder method to enable tracing, optionally as JSON.
    #[must_use]
    pub fn with_trace(mut self, json: bool) -> Self {
        self.trace = true;
        self.trace_json = json;
        self
    }

    /// Builder method to record only some event types.
    ///
    /// # Errors
    ///
    /// Returns the first name that is not an event type.
    pub fn with_trace_events(mut self, list: &str) -> std::result::Result<Self, String> {
        let mut events = Vec::new();
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            if !TraceEvent::TYPES.contains(&name) {
                return Err(format!(
                    "unknown trace event: {name} (expected one of {})",
                    TraceEvent::TYPES.join(", ")
                ));
            }
            events.push(name.to_string());
        }
        self.trace_events = events;
        Ok(self)
    }

    /// Builder method to set whether the banner is shown.
    #[must_use]
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Loads the configured topology.
    ///
    /// # Errors
    ///
    /// Returns an error if the topology file cannot be read or parsed.
    pub fn load_topology(&self) -> Result<Topology> {
        match &self.topology {
            Some(path) => Topology::load(path),
            None => Ok(Topology::spaceship()),
        }
    }

    /// Returns the tracer settings implied by this configuration.
    ///
    /// Records are always buffered; `trace` only controls the stderr echo.
    #[must_use]
    pub fn tracer_config(&self) -> TracerConfig {
        let mut config = TracerConfig::new().enabled();
        if self.trace {
            config = config.to_stderr();
        }
        if self.trace_json {
            config = config.json();
        }
        config.filter_events(self.trace_events.clone())
    }
}
