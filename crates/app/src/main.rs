use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use iam_core::model::{AppSettings, AppSettingsDraft};
use iam_core::runners::authorization::Jitter;
use iam_core::time::TimerScale;
use services::{AppServices, AppServicesError, SessionService};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn start_session(&self) -> Result<SessionService, AppServicesError> {
        self.services.start_session()
    }

    fn timer_scale(&self) -> TimerScale {
        self.services.timer_scale()
    }

    fn ghost_jitter(&self) -> Jitter {
        services::ghost::random_offset
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui      [--challenge <id>] [--timer-scale <factor>] [--log <filter>]");
    eprintln!("  cargo run -p app -- catalog [--log <filter>]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  no challenge opened, --timer-scale 1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  IAM_CHALLENGE, IAM_TIMER_SCALE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Catalog,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "catalog" => Some(Self::Catalog),
            _ => None,
        }
    }
}

struct Args {
    flags: AppSettingsDraft,
    help: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut flags = AppSettingsDraft::new();
        let mut help = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--challenge" => {
                    flags.start_challenge = Some(require_value(args, "--challenge")?);
                }
                "--timer-scale" => {
                    flags.timer_scale = Some(require_value(args, "--timer-scale")?);
                }
                "--log" => {
                    flags.log_filter = Some(require_value(args, "--log")?);
                }
                "--help" | "-h" => help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { flags, help })
    }
}

fn env_settings() -> AppSettingsDraft {
    AppSettingsDraft {
        start_challenge: std::env::var("IAM_CHALLENGE").ok(),
        timer_scale: std::env::var("IAM_TIMER_SCALE").ok(),
        log_filter: None,
    }
}

/// `--log` wins over `RUST_LOG`, which wins over the default.
fn init_tracing(settings: &AppSettings) {
    let filter = match settings.log_filter() {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    // A second init (tests, embedders) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => {
            let Some(cmd) = Command::from_arg(first) else {
                let err = ArgsError::UnknownCommand(first.to_string());
                print_usage();
                return Err(err.into());
            };
            argv.remove(0);
            cmd
        }
    };

    let parsed = Args::parse(&mut argv.into_iter()).inspect_err(|_| print_usage())?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    let settings = parsed.flags.or(env_settings()).validate()?;
    init_tracing(&settings);
    debug!(?cmd, "arguments parsed");

    let services = AppServices::bootstrap(settings)?;

    match cmd {
        Command::Ui => {
            info!("launching desktop window");
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Défi IAM")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Catalog => {
            for challenge in services.catalog().challenges() {
                println!(
                    "{:<16} {:<16} {}",
                    challenge.id().as_str(),
                    challenge.kind().as_str(),
                    challenge.title()
                );
            }
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
