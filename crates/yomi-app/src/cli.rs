use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use yomi_config::Config;
use yomi_config::style::StyleConfig;
use yomi_types::{DisplayMode, ExportFormat, LayoutMode, Segmentation};

#[derive(Parser, Debug)]
#[command(name = "yomi", version, about = "Add katakana ruby readings to English text")]
pub struct Cli {
    /// Config JSON to use instead of the main profile
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a ruby-annotated document from English text
    Generate(GenerateArgs),

    /// Show the reading for individual words
    Lookup(LookupArgs),

    /// Create the main profile from defaults
    Init {
        /// Overwrite an existing main profile
        #[arg(long)]
        force: bool,
    },
}

/// CLI Wrapper for LayoutMode to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliLayout {
    Flowing,
    Tabular,
}

impl From<CliLayout> for LayoutMode {
    fn from(layout: CliLayout) -> Self {
        match layout {
            CliLayout::Flowing => LayoutMode::Flowing,
            CliLayout::Tabular => LayoutMode::Tabular,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliDisplay {
    Original,
    Clean,
}

impl From<CliDisplay> for DisplayMode {
    fn from(display: CliDisplay) -> Self {
        match display {
            CliDisplay::Original => DisplayMode::Original,
            CliDisplay::Clean => DisplayMode::Clean,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliSegmentation {
    Lexical,
    Whitespace,
}

impl From<CliSegmentation> for Segmentation {
    fn from(segmentation: CliSegmentation) -> Self {
        match segmentation {
            CliSegmentation::Lexical => Segmentation::Lexical,
            CliSegmentation::Whitespace => Segmentation::Whitespace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliFormat {
    Doc,
    Html,
}

impl From<CliFormat> for ExportFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Doc => ExportFormat::Doc,
            CliFormat::Html => ExportFormat::Html,
        }
    }
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Input text file, `-` or nothing reads stdin
    pub input: Option<PathBuf>,

    /// Inline input text, takes precedence over the file
    #[arg(long, short = 't')]
    pub text: Option<String>,

    #[arg(long, value_enum)]
    pub layout: Option<CliLayout>,

    #[arg(long, value_enum)]
    pub display: Option<CliDisplay>,

    #[arg(long, value_enum)]
    pub segmentation: Option<CliSegmentation>,

    /// Body font size in pt (10-40)
    #[arg(long)]
    pub font_size: Option<u32>,

    /// Reading font size in pt (5-20)
    #[arg(long)]
    pub ruby_size: Option<u32>,

    /// Line height (1.0-4.0)
    #[arg(long)]
    pub line_height: Option<f32>,

    /// Table cell padding in px (0-50)
    #[arg(long)]
    pub cell_padding: Option<u32>,

    /// Read unknown romaji words as katakana
    #[arg(long)]
    pub romaji: bool,

    /// Keep full-width Latin letters as they are
    #[arg(long)]
    pub no_fold: bool,

    /// Save an export file into this directory instead of printing the preview
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<CliFormat>,

    /// Export file name without extension
    #[arg(long)]
    pub file_stem: Option<String>,

    /// Export password, when the profile or environment sets one
    #[arg(long)]
    pub password: Option<String>,
}

impl GenerateArgs {
    /// Flags win over profile values; style clamping happens later
    pub fn apply_to(&self, config: &mut Config) {
        let rendering = &mut config.rendering;
        if let Some(layout) = self.layout {
            rendering.layout = layout.into();
        }
        if let Some(display) = self.display {
            rendering.display = display.into();
        }
        if let Some(segmentation) = self.segmentation {
            rendering.segmentation = segmentation.into();
        }
        if self.no_fold {
            rendering.fold_full_width = false;
        }

        config.style = config.style.overlay(StyleConfig {
            body_font_size: self.font_size,
            ruby_font_size: self.ruby_size,
            line_height: self.line_height,
            cell_padding: self.cell_padding,
        });

        if self.romaji {
            config.dictionary.romaji_fallback = true;
        }

        if let Some(format) = self.format {
            config.export.format = format.into();
        }
        if let Some(stem) = &self.file_stem {
            config.export.file_stem = stem.clone();
        }
    }
}

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Words to look up
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Read unknown romaji words as katakana
    #[arg(long)]
    pub romaji: bool,
}

impl LookupArgs {
    pub fn apply_to(&self, config: &mut Config) {
        if self.romaji {
            config.dictionary.romaji_fallback = true;
        }
    }
}
