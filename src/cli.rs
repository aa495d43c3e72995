//! Command-line arguments

use clap::{Parser, Subcommand, ValueEnum};
use stakra_core::DEFAULT_DECORATION_RADIUS;

/// Stakra - inspect the design tokens, classify values and preview widgets
#[derive(Parser, Debug)]
#[command(name = "stakra", version)]
#[command(about = "Inspect the Stakra design system from the terminal", long_about = None)]
pub struct Cli {
    /// Log debug output to stderr (overridden by STAKRA_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List every color token and gradient with its value
    Tokens,

    /// List the text styles of the type scale
    Typography,

    /// Print the composed theme
    Theme {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Map a label, status or change to its display color
    Classify {
        #[arg(value_enum)]
        kind: ClassifyKind,

        /// Text to classify, e.g. `Bug`, `ready_for_qa` or `-3%`
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Print a surface decoration
    Decoration {
        #[arg(value_enum)]
        kind: DecorationKind,

        /// Corner radius in logical pixels
        #[arg(long, default_value_t = DEFAULT_DECORATION_RADIUS)]
        radius: f32,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Render the widget showcase
    Preview {
        #[arg(long, default_value_t = 80)]
        width: u16,

        #[arg(long, default_value_t = 24)]
        height: u16,

        /// Take over the terminal until `q` is pressed
        #[arg(short, long)]
        interactive: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyKind {
    Status,
    Label,
    Change,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationKind {
    Glass,
    GradientBorder,
}
