//! CLI entrypoint for Content Studio
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use studio_application::{
    AgentModels, CheckSystemUseCase, CreateContentInput, CreateContentUseCase, SystemCheck,
};
use studio_domain::{Model, OutputFormat};
use studio_infrastructure::{
    ConfigLoader, FileConfig, GeminiClient, GeminiLlmGateway, JsonlGenerationLogger,
    SerperSearch,
};
use studio_presentation::{
    AppState, Cli, Command, ConsoleFormatter, GenerateArgs, OutputFormatter, ProgressReporter,
    ServeArgs, SimpleProgress, display_text, router, serve,
};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

type StudioUseCase = CreateContentUseCase<GeminiLlmGateway>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let serving = matches!(command, Command::Serve(_));
    let _log_guard = init_logging(cli.verbose, serving, config.logging.dir.as_deref());

    if !config.output.color {
        colored::control::set_override(false);
    }

    report_config_issues(&config, cli.quiet)?;

    info!("Starting Content Studio");

    // === Dependency Injection ===
    let shutdown = CancellationToken::new();
    let use_case = build_use_case(&config, shutdown.clone());

    match command {
        Command::Generate(args) => generate(&cli, &config, use_case, args, shutdown).await,
        Command::Serve(args) => run_server(&config, use_case, args, shutdown).await,
        Command::Status => {
            println!(
                "{}",
                ConsoleFormatter::format_status(&config.api_status(), &config.generation_settings())
            );
            Ok(())
        }
        Command::Check => {
            let check = CheckSystemUseCase::new(&use_case)
                .execute(config.generation_settings(), &config.api_status())
                .await;
            println!("{}", ConsoleFormatter::format_check(&check));
            if let SystemCheck::Failed(reason) = check {
                bail!("System check failed: {}", reason);
            }
            Ok(())
        }
    }
}

/// Initialize logging based on verbosity level
///
/// The returned guard flushes the file log and must live until exit.
fn init_logging(verbose: u8, serving: bool, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 if serving => "info",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = if serving && verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "content-studio.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    guard
}

fn report_config_issues(config: &FileConfig, quiet: bool) -> Result<()> {
    let issues = config.validate();
    let has_errors = issues.iter().any(|i| i.is_error());

    for issue in issues.iter().chain(config.credential_issues().iter()) {
        if issue.is_error() {
            eprintln!("{} {}", "error:".red().bold(), issue);
        } else if !quiet {
            eprintln!("{} {}", "warning:".yellow().bold(), issue);
        }
    }

    if has_errors {
        bail!("Invalid configuration");
    }
    Ok(())
}

fn build_use_case(config: &FileConfig, shutdown: CancellationToken) -> StudioUseCase {
    let gateway = Arc::new(GeminiLlmGateway::new(GeminiClient::from_config(
        &config.providers.gemini,
        &config.generation,
    )));

    let mut use_case = CreateContentUseCase::new(gateway)
        .with_behavior(config.behavior())
        .with_cancellation(shutdown);

    if config.search.enabled {
        let search = SerperSearch::from_config(&config.providers.serper, &config.search);
        if search.has_api_key() {
            use_case = use_case.with_search(Arc::new(search));
        }
    }

    if let Some(path) = &config.logging.generation_log
        && let Some(logger) = JsonlGenerationLogger::new(path)
    {
        use_case = use_case.with_logger(Arc::new(logger));
    }

    use_case
}

async fn generate(
    cli: &Cli,
    config: &FileConfig,
    use_case: StudioUseCase,
    args: GenerateArgs,
    shutdown: CancellationToken,
) -> Result<()> {
    let request = args.to_request()?;

    let mut settings = config.generation_settings();
    if let Some(model) = &args.model {
        let Ok(model) = model.parse::<Model>();
        settings.models = AgentModels::uniform(model);
    }

    let use_case = if args.no_fallback {
        let behavior = use_case.behavior().clone().with_fallback(false);
        use_case.with_behavior(behavior)
    } else {
        use_case
    };

    let format: OutputFormat = args
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // Ctrl-C cancels the run in flight
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.cancel();
        }
    });

    let input = CreateContentInput::new(request).with_settings(settings);
    let show_progress = !cli.quiet && config.output.show_progress && format != OutputFormat::Json;

    let outcome = if !show_progress {
        use_case.execute(input).await
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    } else {
        use_case.execute_with_progress(input, &SimpleProgress).await
    };

    let result = match outcome {
        Ok(result) => result,
        Err(e) => bail!("{}\n  hint: {}", e, e.troubleshooting()),
    };

    println!("{}", ConsoleFormatter.render(&result, format));

    if let Some(path) = &args.save {
        std::fs::write(path, display_text(&result.body))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        if !cli.quiet {
            eprintln!("{} {}", "Saved to".green(), path.display());
        }
    }

    Ok(())
}

async fn run_server(
    config: &FileConfig,
    use_case: StudioUseCase,
    args: ServeArgs,
    shutdown: CancellationToken,
) -> Result<()> {
    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", host, port);

    let state = AppState::new(
        use_case,
        config.generation_settings(),
        config.api_status(),
        config.server.max_stored_results,
    );

    serve(router(Arc::new(state)), &addr, shutdown)
        .await
        .with_context(|| format!("Failed to serve on {}", addr))
}
