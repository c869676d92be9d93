mod cli;
mod terminal;

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::Level;
use services::{StaticWordBanks, WordBankProvider};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

use crate::cli::{Cli, Command};
use crate::terminal::TerminalPlayer;

struct DesktopApp {
    word_banks: Arc<StaticWordBanks>,
    start_level: Option<Level>,
    shuffle_choices: bool,
}

impl UiApp for DesktopApp {
    fn word_banks(&self) -> Arc<dyn WordBankProvider> {
        self.word_banks.clone()
    }

    fn start_level(&self) -> Option<Level> {
        self.start_level
    }

    fn shuffle_choices(&self) -> bool {
        self.shuffle_choices
    }
}

fn init_tracing(cli: &Cli) {
    let filter = match cli.log_filter.as_deref() {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter())),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_word_banks(cli: &Cli) -> Result<StaticWordBanks> {
    match cli.banks.as_deref() {
        Some(path) => StaticWordBanks::from_path(path)
            .with_context(|| format!("loading word banks from {}", path.display())),
        None => StaticWordBanks::builtin().context("loading built-in word banks"),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let word_banks = Arc::new(load_word_banks(&cli)?);
    info!(levels = ?word_banks.levels(), "word banks loaded");

    match cli.command() {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                word_banks,
                start_level: cli.level,
                shuffle_choices: cli.shuffle_choices,
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Kelime Oyunu")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Play => {
            let stdin = io::stdin();
            let report = TerminalPlayer::new(word_banks, stdin.lock(), io::stdout())
                .run(cli.level)?;
            info!(rounds = report.completed.len(), "terminal session ended");
            Ok(())
        }
        Command::Check => {
            let mut out = io::stdout().lock();
            for (level, size) in word_banks.sizes() {
                writeln!(out, "{level}: {size} terms")?;
            }
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
