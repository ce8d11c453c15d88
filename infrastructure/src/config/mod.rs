//! Configuration file loading for content-studio
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment (`HOST`, `PORT`, `STUDIO_*`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./studio.toml` or `./.studio.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/content-studio/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGeminiConfig, FileGenerationConfig, FileLoggingConfig, FileModelsConfig,
    FileOutputConfig, FileProvidersConfig, FileSearchConfig, FileSerperConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
