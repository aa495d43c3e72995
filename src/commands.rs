//! Command implementations. Each returns the text to print.

use std::fmt::Write as _;

use serde::Serialize;
use stakra_core::prelude::*;
use stakra_core::{
    classify_change, classify_label, classify_status, glass_decoration,
    gradient_border_decoration, DecorationSpec, GradientToken, TypeStyleName,
};

use crate::cli::{ClassifyKind, Command, DecorationKind, Format};

/// Column width for token and style names
const NAME_WIDTH: usize = 16;

/// Produce the output of a non-interactive command.
pub fn render(command: &Command, theme: &ThemeConfig) -> Result<String> {
    match command {
        Command::Tokens => Ok(tokens(theme)),
        Command::Typography => Ok(typography(theme)),
        Command::Theme { format } => theme_dump(theme, *format),
        Command::Classify { kind, text } => Ok(classify(theme, *kind, text)),
        Command::Decoration {
            kind,
            radius,
            format,
        } => serialize(&decoration(*kind, *radius), *format),
        Command::Preview { width, height, .. } => {
            let text = stakra_tui::render_to_string(theme, *width, *height);
            Ok(text.trim_end().to_string())
        }
    }
}

/// Color tokens with hex values, then gradients
pub fn tokens(theme: &ThemeConfig) -> String {
    let palette = theme.palette();
    let mut out = String::new();
    for (token, rgba) in palette.iter() {
        let _ = writeln!(out, "{:<NAME_WIDTH$}{rgba}", token.name());
    }
    for token in GradientToken::ALL {
        let gradient = palette.gradient(token);
        let _ = writeln!(
            out,
            "{:<NAME_WIDTH$}{} -> {}",
            format!("{}Gradient", token.name()),
            palette.color(gradient.from),
            palette.color(gradient.to)
        );
    }
    out.trim_end().to_string()
}

/// Text styles as `name size weight color`
pub fn typography(theme: &ThemeConfig) -> String {
    let mut out = String::new();
    for name in TypeStyleName::ALL {
        let style = theme.text(name);
        let _ = write!(
            out,
            "{:<NAME_WIDTH$}{:>4} {} {}",
            name.name(),
            style.size,
            style.weight.0,
            style.color
        );
        if let Some(spacing) = style.letter_spacing {
            let _ = write!(out, " {spacing:+}");
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

pub fn theme_dump(theme: &ThemeConfig, format: Format) -> Result<String> {
    let text = match format {
        Format::Json => theme.to_json().context("dumping theme")?,
        Format::Toml => theme.to_toml().context("dumping theme")?,
    };
    Ok(text.trim_end().to_string())
}

/// `<color token>` for labels and changes, `<color token> <display text>`
/// for statuses.
pub fn classify(theme: &ThemeConfig, kind: ClassifyKind, text: &str) -> String {
    let color = match kind {
        ClassifyKind::Status => {
            let result = classify_status(text);
            return format!("{} {}", result.color, result.label);
        }
        ClassifyKind::Label => classify_label(text),
        ClassifyKind::Change => classify_change(text),
    };
    debug!(%color, hex = %theme.color(color), "classified {text:?}");
    color.to_string()
}

pub fn decoration(kind: DecorationKind, radius: f32) -> DecorationSpec {
    match kind {
        DecorationKind::Glass => glass_decoration(radius),
        DecorationKind::GradientBorder => gradient_border_decoration(radius),
    }
}

fn serialize<T: Serialize>(value: &T, format: Format) -> Result<String> {
    let text = match format {
        Format::Json => serde_json::to_string_pretty(value).context("serializing to JSON")?,
        Format::Toml => toml::to_string_pretty(value).context("serializing to TOML")?,
    };
    Ok(text.trim_end().to_string())
}
