//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use studio_domain::{
    ContentOptions, ContentRequest, ContentType, DEFAULT_AUDIENCE, DomainError, ResearchDepth,
    SeoFocus, Tone, WordCount,
};

/// Output format for generated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Metadata, every agent's output, final content and SEO block
    Full,
    /// Only the final content
    Content,
    /// JSON output
    Json,
}

impl From<OutputFormat> for studio_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => studio_domain::OutputFormat::Full,
            OutputFormat::Content => studio_domain::OutputFormat::Content,
            OutputFormat::Json => studio_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for content-studio
#[derive(Parser, Debug)]
#[command(name = "content-studio")]
#[command(author, version, about = "AI Content Creation Studio - a writer, editor and SEO agent team")]
#[command(long_about = r#"
Content Studio runs a team of three AI agents over your topic:

1. Writer: researches the topic on the web and drafts the piece
2. Editor: reviews the draft for quality, readability and consistency
3. SEO Specialist: optimizes for search and adds metadata and social snippets

API keys are read from GOOGLE_API_KEY and SERPER_API_KEY. Without them
the studio answers in simulation mode.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./studio.toml       Project-level config
3. ~/.config/content-studio/config.toml   Global config

Example:
  content-studio generate "The Future of AI in Healthcare" --audience "clinicians"
  content-studio generate "Rust for data teams" --type article --words 1500 --output full
  content-studio serve --port 8501
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate content for a topic
    Generate(GenerateArgs),
    /// Run the web studio
    Serve(ServeArgs),
    /// Show which API keys and models are configured
    Status,
    /// Run a small test request through the whole team
    Check,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Main topic of the content
    pub topic: String,

    /// Target audience
    #[arg(short, long, default_value = DEFAULT_AUDIENCE)]
    pub audience: String,

    /// Content type (blog post, article, report, whitepaper, social media post,
    /// email newsletter, or free text)
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "blog post")]
    pub content_type: ContentType,

    /// Word count as a range ("800-1000") or a target ("1000" means 800-1200)
    #[arg(short, long, default_value = "800-1000")]
    pub words: WordCount,

    /// Content tone (professional, casual, academic, conversational)
    #[arg(long, default_value = "professional")]
    pub tone: Tone,

    /// Research depth (basic, comprehensive, in-depth)
    #[arg(long, default_value = "comprehensive")]
    pub depth: ResearchDepth,

    /// SEO focus (low, medium, high)
    #[arg(long, default_value = "medium")]
    pub seo_focus: SeoFocus,

    /// Use this model for every agent
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format (defaults to [output] format, then "content")
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Also write the final content to this file
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Fail instead of answering in simulation mode
    #[arg(long)]
    pub no_fallback: bool,
}

impl GenerateArgs {
    pub fn to_request(&self) -> Result<ContentRequest, DomainError> {
        ContentRequest::builder(&self.topic)
            .audience(&self.audience)
            .content_type(self.content_type.clone())
            .word_count(self.words)
            .options(ContentOptions {
                tone: self.tone,
                research_depth: self.depth,
                seo_focus: self.seo_focus,
            })
            .build()
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Address to bind (overrides [server] host and HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides [server] port and PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_generate_defaults() {
        let cli = parse(&["content-studio", "generate", "AI in Healthcare"]);
        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        let request = args.to_request().unwrap();
        assert_eq!(request.topic.as_str(), "AI in Healthcare");
        assert_eq!(request.audience, DEFAULT_AUDIENCE);
        assert_eq!(request.content_type, ContentType::BlogPost);
        assert_eq!(request.word_count.to_string(), "800-1000");
        assert_eq!(request.options, ContentOptions::default());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_generate_all_options() {
        let cli = parse(&[
            "content-studio",
            "-vv",
            "generate",
            "Rust",
            "--audience",
            "developers",
            "--type",
            "whitepaper",
            "--words",
            "1500",
            "--tone",
            "academic",
            "--depth",
            "in-depth",
            "--seo-focus",
            "high",
            "--output",
            "json",
            "--save",
            "out.md",
            "--no-fallback",
        ]);
        assert_eq!(cli.verbose, 2);
        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        let request = args.to_request().unwrap();
        assert_eq!(request.content_type, ContentType::Whitepaper);
        assert_eq!(request.word_count.to_string(), "1300-1700");
        assert_eq!(request.options.tone, Tone::Academic);
        assert_eq!(request.options.research_depth, ResearchDepth::InDepth);
        assert_eq!(request.options.seo_focus, SeoFocus::High);
        assert_eq!(args.output, Some(OutputFormat::Json));
        assert_eq!(args.save, Some(PathBuf::from("out.md")));
        assert!(args.no_fallback);
    }

    #[test]
    fn test_invalid_tone_is_rejected() {
        let result =
            Cli::try_parse_from(["content-studio", "generate", "Rust", "--tone", "shouty"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_topic_fails_request() {
        let cli = parse(&["content-studio", "generate", "   "]);
        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.to_request().unwrap_err(), DomainError::EmptyTopic);
    }

    #[test]
    fn test_serve_and_global_flags() {
        let cli = parse(&[
            "content-studio",
            "serve",
            "--port",
            "9000",
            "--no-config",
            "-q",
        ]);
        assert!(cli.no_config);
        assert!(cli.quiet);
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(9000));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = parse(&["content-studio", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
