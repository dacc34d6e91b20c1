use clap::Parser;
use colored::Colorize;

use repscan_cli::cli::{Cli, Commands};
use repscan_cli::commands;
use repscan_cli::error::CliError;
use repscan_cli::logging;
use repscan_cli::output::OutputWriter;

/// 로그 레벨 오버라이드로 허용되는 값
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

/// 설정 로드 → 로깅 초기화 → 서브커맨드 실행
///
/// `config` 서브커맨드는 설정 로드 실패를 직접 보고하므로 에러를 그대로 넘깁니다.
async fn run(cli: Cli) -> Result<(), CliError> {
    let writer = OutputWriter::new(cli.output);
    let loaded = commands::load_config(cli.config.as_deref()).await;

    // 설정 로드에 실패해도 에러를 기록할 수 있도록 기본 로깅 설정으로 초기화
    let mut general = loaded
        .as_ref()
        .map(|config| config.general.clone())
        .unwrap_or_default();
    if let Some(level) = cli.log_level {
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CliError::Config(format!(
                "invalid log level '{}' (expected: {})",
                level,
                LOG_LEVELS.join(", ")
            )));
        }
        general.log_level = level;
    }
    logging::init_tracing(&general).map_err(|e| CliError::Config(e.to_string()))?;
    repscan_core::metrics::describe_all();

    tracing::debug!(
        config = %commands::config_source(cli.config.as_deref()).display(),
        "repscan starting"
    );

    match cli.command {
        Commands::Config(args) => {
            let source = commands::config_source(cli.config.as_deref());
            commands::config::execute(args, &source, loaded, &writer).await
        }
        Commands::Version => commands::version::execute(&writer),
        Commands::Scan(args) => commands::scan::execute(args, &loaded?, &writer).await,
        Commands::Batch(args) => commands::batch::execute(args, &loaded?, &writer).await,
        Commands::Checks(args) => commands::checks::execute(args, &loaded?, &writer).await,
    }
}
