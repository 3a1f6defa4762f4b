//! Premade file templates for new plugins
//!
//! Placeholders `{plugin_name}`, `{plugin_title}`, and `{author}` are
//! substituted at creation time.

pub const INFO_INI: &str = r#"# {plugin_name} metadata
name = {plugin_name}
title = {plugin_title}
author = {author}
version = 1.0.0
"#;

pub const PLUGIN_MAIN: &str = r#"# {plugin_name}.py

"""{plugin_title} plugin."""


def load():
    """Called when {plugin_title} is loaded."""


def unload():
    """Called when {plugin_title} is unloaded."""
"#;

pub const COMMANDS: &str = r#"# commands.py

"""Registers the {plugin_title} commands."""
"#;

pub const CONFIGURATION: &str = r#"# configuration.py

"""Creates the {plugin_name} configuration."""
"#;

pub const CUSTOM_EVENTS: &str = r#"# custom_events.py

"""Declares the {plugin_title} custom events."""
"#;

pub const RULES: &str = r#"# rules.py

"""Creates the {plugin_name} rules."""
"#;

pub const SETTINGS: &str = r#"# settings.py

"""Creates the {plugin_name} player settings."""
"#;

pub const SOUNDS: &str = r#"# sounds.py

"""Registers the {plugin_name} sounds."""
"#;

pub const README: &str = r#"# {plugin_title}

{plugin_title} plugin by {author}.
"#;

/// Substitute the template placeholders
pub fn render(template: &str, plugin_name: &str, plugin_title: &str, author: &str) -> String {
  template
    .replace("{plugin_name}", plugin_name)
    .replace("{plugin_title}", plugin_title)
    .replace("{author}", author)
}
