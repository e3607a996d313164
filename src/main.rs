// SPDX-License-Identifier: MPL-2.0
use apod_explorer::app::{self, paths, Flags};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Environment variable selecting the log level (`trace` .. `error`).
const ENV_LOG: &str = "APOD_EXPLORER_LOG";

const HELP: &str = "\
apod_explorer - browse NASA's Astronomy Picture of the Day

USAGE:
    apod_explorer [OPTIONS]

OPTIONS:
    --lang <LOCALE>       UI language (e.g. en-US, fr)
    --api-url <URL>       Backend base URL (default: http://localhost:8080)
    --data-dir <DIR>      Directory holding favorites and theme preferences
    --config-dir <DIR>    Directory holding settings.toml
    -h, --help            Print this help

ENVIRONMENT:
    APOD_EXPLORER_DATA_DIR, APOD_EXPLORER_CONFIG_DIR, APOD_EXPLORER_LOG
";

fn init_logging() {
    let level = match std::env::var(ENV_LOG)
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {err}");
    }
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        api_url: args.opt_value_from_str("--api-url")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
