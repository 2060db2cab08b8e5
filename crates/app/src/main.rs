use std::process;
use std::sync::Arc;

use anyhow::Context;
use apex_core::Locale;
use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, DemoProgress, QuizService, TeacherDashboardService};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod config;
mod results;

use config::{AppConfig, prepare_sqlite_file};

#[derive(Parser)]
#[command(name = "apexmind", version, about = "Offline-first learning for rural classrooms")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// SQLite database URL or file path
    #[arg(long, env = "APEX_DB_URL", global = true)]
    db: Option<String>,

    /// Display language: english, hindi or punjabi
    #[arg(long, env = "APEX_LOCALE", global = true)]
    locale: Option<Locale>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    /// Launch the desktop app (default)
    Ui,
    /// Print the saved quiz results
    Results,
}

struct DesktopApp {
    locale: Locale,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn initial_locale(&self) -> Locale {
        self.locale
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn teacher_dashboard(&self) -> Arc<TeacherDashboardService> {
        self.services.teacher()
    }

    fn demo_progress(&self) -> Arc<DemoProgress> {
        self.services.demo()
    }
}

async fn open_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    // Open + migrate SQLite here so the library crates never touch the filesystem layout.
    if config.is_in_memory() {
        warn!("in-memory database: quiz results will not persist after exit");
    } else {
        prepare_sqlite_file(&config.db_url)?;
    }
    AppServices::new_sqlite(&config.db_url, Clock::default())
        .await
        .with_context(|| format!("opening {}", config.db_url))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::resolve(cli.db, cli.locale)?;
    let services = open_services(&config).await?;

    match cli.command.unwrap_or(Command::Ui) {
        Command::Results => {
            let history = services.quiz().history().await?;
            if history.is_empty() {
                println!("{}", results::EMPTY_LOG_MESSAGE);
            } else {
                println!("{}", results::results_table(&history));
            }
            Ok(())
        }
        Command::Ui => {
            info!(db = %config.db_url, locale = %config.locale, "launching desktop ui");
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                locale: config.locale,
                services,
            });
            let context = build_app_context(&app);

            // Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("ApexMind")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        process::exit(2);
    }
}
