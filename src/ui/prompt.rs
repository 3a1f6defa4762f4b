//! Interactive numbered-menu prompts
//!
//! Invalid input never fails a run: the menu is re-asked until the answer
//! parses. The parse functions are split out so the menus can be tested
//! without a terminal; EOF on stdin is the one hard stop.

use crate::core::error::{ForgeError, ForgeResult};
use crate::release::version::Bump;
use std::io::{self, BufRead, Write};

const BUMP_CHOICES: [Bump; 4] = [Bump::Major, Bump::Minor, Bump::Patch, Bump::None];

/// Parse a bump-menu answer: a 1-based index into the choice list
pub fn parse_bump_choice(input: &str) -> Option<Bump> {
  let number: usize = input.trim().parse().ok()?;
  BUMP_CHOICES.get(number.checked_sub(1)?).copied()
}

/// Ask which type of version update this release should be
pub fn choose_bump() -> ForgeResult<Bump> {
  let mut previous: Option<String> = None;

  loop {
    if let Some(bad) = &previous {
      println!("Invalid value given \"{}\"", bad);
      println!();
    }
    println!("Which type of version update should this be?");
    println!();
    for (number, bump) in BUMP_CHOICES.iter().enumerate() {
      println!("\t({}) {}", number + 1, bump.label());
    }
    println!();

    let line = read_answer()?;
    match parse_bump_choice(&line) {
      Some(bump) => return Ok(bump),
      None => previous = Some(line.trim().to_string()),
    }
  }
}

/// A plugin-menu answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginChoice {
  One(String),
  All,
}

/// Parse a plugin-menu answer: an exact plugin name, a 1-based index,
/// or (when allowed) ALL / the index after the last plugin
pub fn parse_plugin_choice(input: &str, plugins: &[String], allow_all: bool) -> Option<PluginChoice> {
  let value = input.trim();
  if value.is_empty() {
    return None;
  }

  if plugins.iter().any(|p| p == value) {
    return Some(PluginChoice::One(value.to_string()));
  }
  if allow_all && value == "ALL" {
    return Some(PluginChoice::All);
  }

  let number: usize = value.parse().ok()?;
  if (1..=plugins.len()).contains(&number) {
    return Some(PluginChoice::One(plugins[number - 1].clone()));
  }
  if allow_all && number == plugins.len() + 1 {
    return Some(PluginChoice::All);
  }

  None
}

/// Ask which plugin to act on
pub fn choose_plugin(plugins: &[String], verb: &str) -> ForgeResult<String> {
  match ask_plugin(plugins, verb, false)? {
    PluginChoice::One(name) => Ok(name),
    PluginChoice::All => Err(ForgeError::message("ALL is not a valid choice here")),
  }
}

/// Ask which plugin to act on, with an ALL row
pub fn choose_plugin_or_all(plugins: &[String], verb: &str) -> ForgeResult<PluginChoice> {
  ask_plugin(plugins, verb, true)
}

fn ask_plugin(plugins: &[String], verb: &str, allow_all: bool) -> ForgeResult<PluginChoice> {
  loop {
    println!("What plugin would you like to {}?", verb);
    println!();
    for (number, plugin) in plugins.iter().enumerate() {
      println!("\t({}) {}", number + 1, plugin);
    }
    if allow_all {
      println!("\t({}) ALL", plugins.len() + 1);
    }
    println!();

    let line = read_answer()?;
    if let Some(choice) = parse_plugin_choice(&line, plugins, allow_all) {
      return Ok(choice);
    }
  }
}

fn read_answer() -> ForgeResult<String> {
  print!("> ");
  io::stdout().flush()?;

  let mut line = String::new();
  if io::stdin().lock().read_line(&mut line)? == 0 {
    return Err(ForgeError::message("stdin closed while waiting for input"));
  }
  Ok(line)
}
