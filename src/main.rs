mod commands;
mod core;
mod linker;
mod release;
mod scaffold;
mod ui;
mod utils;

use clap::{Parser, Subcommand};
use crate::core::config::ForgeConfig;
use crate::core::error::{ForgeError, print_error};
use crate::release::version::Bump;
use crate::scaffold::ScaffoldOptions;

/// Scaffold, link, and release game-server plugins
#[derive(Parser)]
#[command(name = "plugforge")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct ForgeCli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Scaffold a new plugin skeleton
  Create {
    /// Name of the plugin to create (alpha-numeric and underscores)
    name: String,
    #[command(flatten)]
    options: ScaffoldOptions,
  },

  /// Symlink a plugin's subtrees into the host repository
  Link {
    /// Name of the plugin to link (interactive menu when omitted)
    plugin: Option<String>,
    /// Link all plugins
    #[arg(short, long)]
    all: bool,
  },

  /// List discovered plugins
  List {
    /// Output plugin names in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Package a versioned release archive for a plugin
  Release {
    /// Name of the plugin to release (interactive menu when omitted)
    plugin: Option<String>,
    /// Version bump class (skips the interactive prompt)
    #[arg(long, value_enum)]
    bump: Option<Bump>,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = ForgeCli::parse();

  let invocation_dir = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("Error: Failed to get current directory: {}", e);
      std::process::exit(1);
    }
  };

  // One config load per process; every component takes it by reference
  let config = match ForgeConfig::load(&invocation_dir) {
    Ok(config) => config,
    Err(err) => handle_error(err),
  };

  let result = match cli.command {
    Commands::Create { name, options } => commands::run_create(&config, name, options),
    Commands::Link { plugin, all } => commands::run_link(&config, plugin, all),
    Commands::List { json } => commands::run_list(&config, json),
    Commands::Release { plugin, bump } => commands::run_release(&config, plugin, bump),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: ForgeError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
