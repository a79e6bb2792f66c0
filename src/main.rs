use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tower_lsp::{LspService, Server};

use scss_namespace_lsp::logging::init_logging;
use scss_namespace_lsp::{Backend, Config};

/// Language server offering SCSS namespace completion.
#[derive(Parser, Debug)]
#[command(name = "scss_namespace_lsp", version, about)]
struct Args {
    /// Read configuration from this TOML file instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Tracing filter directive, e.g. `debug` or `scss_namespace_lsp=trace`.
    #[arg(long, value_name = "DIRECTIVE")]
    log_level: Option<String>,

    /// Disable ANSI colors in log output.
    #[arg(long)]
    no_color: bool,

    /// Communicate over stdin/stdout (the only supported transport).
    #[arg(long)]
    stdio: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("scss_namespace_lsp: {err}");
            return ExitCode::from(2);
        }
    };

    let level = args.log_level.as_deref().or(config.log.level.as_deref());
    init_logging(level, args.no_color);
    tracing::debug!(?config, stdio = args.stdio, "starting");

    let completion_config = config.completion;
    let (service, socket) =
        LspService::new(move |client| Backend::new_with_config(client, completion_config));
    Server::new(tokio::io::stdin(), tokio::io::stdout(), socket)
        .serve(service)
        .await;

    ExitCode::SUCCESS
}
