//! CLI entry point for office.

mod build_info;
mod cli;

use clap::Parser;
use crossterm::style::Stylize;
use office::audio::{AudioSource, HoverSound};
use office::config::{load_config_with_diagnostics, Config};
use office::error::{ConfigError, OfficeError};
use office::layout::OfficeScene;
use office::scene::PendingTransition;
use office::tui::settings::LABEL_LEAVING;
use office::tui::{run_interactive, run_line_driven, HostStep, SceneHost};
use office::ui::theme::{Theme, ThemeToken};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "OFFICE_LOG";

fn main() {
    let args = cli::Args::parse();
    init_tracing();
    tracing::debug!(
        version = build_info::VERSION,
        commit = build_info::GIT_COMMIT,
        built = build_info::BUILD_TIMESTAMP,
        profile = build_info::BUILD_PROFILE,
        "starting office"
    );

    match run(&args) {
        Ok(HostStep::Leave(scene)) => println!("{LABEL_LEAVING} {scene}."),
        Ok(_) => {}
        Err(e) => {
            if io::stderr().is_terminal() {
                let label = "error:".with(Theme::default().color(ThemeToken::Error));
                eprintln!("{label} {e}");
            } else {
                eprintln!("error: {e}");
            }
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr only when `OFFICE_LOG` is set, so the full-screen UI is
/// not interleaved with log lines by default.
fn init_tracing() {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn run(args: &cli::Args) -> Result<HostStep, OfficeError> {
    let loaded = load_config_with_diagnostics(args.config.as_deref())?;
    let mut config = loaded.config;
    apply_cli_overrides(&mut config, args);

    let (theme, theme_warnings) =
        Theme::from_config(&config.theme.name, &config.theme.colors).map_err(ConfigError::Invalid)?;
    for warning in loaded.diagnostics.warnings.iter().chain(&theme_warnings) {
        print_warning(&theme, config.display.color, warning);
    }

    let hover_audio: Option<Box<dyn AudioSource>> = config.audio.hover_sound.source();
    let scene = OfficeScene::build(&config, hover_audio, PendingTransition::default())?;
    let mut host = SceneHost::new(scene);

    let step = if io::stdin().is_terminal() && io::stdout().is_terminal() {
        run_interactive(&mut host, &theme, config.display.color)?
    } else {
        run_line_driven(&mut host, io::stdin().lock(), &mut io::stdout())?
    };
    Ok(step)
}

fn apply_cli_overrides(config: &mut Config, args: &cli::Args) {
    if args.no_color {
        config.display.color = false;
    }
    // Muting swaps the bell for a silent source; a missing source stays missing.
    if args.mute && config.audio.hover_sound == HoverSound::Bell {
        config.audio.hover_sound = HoverSound::Silent;
    }
}

fn print_warning(theme: &Theme, color: bool, message: &str) {
    if color {
        eprintln!(
            "{} {message}",
            "warning:".with(theme.color(ThemeToken::Warning))
        );
    } else {
        eprintln!("warning: {message}");
    }
}
