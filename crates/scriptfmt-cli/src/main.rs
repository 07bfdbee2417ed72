use clap::{Args, Parser, Subcommand};
use scriptfmt_core::{FormatConfig, format, plain_text, query, unicode};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::fs;

#[derive(Parser)]
#[command(name = "scriptfmt")]
#[command(about = "ScriptFmt notation formatting tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite scientific notation in TEXT into rich-text markup
    Format {
        #[command(flatten)]
        input: Input,

        /// Load a JSON FormatConfig instead of the defaults
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Superscript size in percent of the base size
        #[arg(long, value_name = "PCT")]
        sup_size: Option<f32>,

        /// Subscript size in percent of the base size
        #[arg(long, value_name = "PCT")]
        sub_size: Option<f32>,

        /// Fraction size in percent of the base size
        #[arg(long, value_name = "PCT")]
        fraction_size: Option<f32>,

        /// Skip the Unicode glyph pass
        #[arg(long)]
        no_unicode: bool,

        /// Skip the caret exponent pass
        #[arg(long)]
        no_caret: bool,

        /// Skip the underscore subscript pass
        #[arg(long)]
        no_underscore: bool,

        /// Skip the fraction pass
        #[arg(long)]
        no_fractions: bool,

        /// Skip the chemical formula pass
        #[arg(long)]
        no_chemical: bool,
    },
    /// Convert generated markup back to Unicode glyphs where possible
    Unicode {
        #[command(flatten)]
        input: Input,
    },
    /// Strip all markup tags, leaving plain text
    Plain {
        #[command(flatten)]
        input: Input,
    },
    /// Report formatting and glyph content of TEXT as JSON
    Inspect {
        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args)]
struct Input {
    /// Text to process; omit to read a file or stdin
    text: Option<String>,

    /// Read the text from a file instead of the argument
    #[arg(long, short, value_name = "FILE", conflicts_with = "text")]
    file: Option<PathBuf>,
}

impl Input {
    fn read(&self) -> anyhow::Result<String> {
        if let Some(text) = &self.text {
            Ok(text.clone())
        } else if let Some(path) = &self.file {
            Ok(fs::read_to_string(path)?)
        } else {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            // Shell heredocs and pipes append a trailing newline.
            Ok(buf.trim_end_matches('\n').to_string())
        }
    }
}

#[derive(Serialize)]
struct InspectReport {
    has_formatting: bool,
    has_unicode_superscript: bool,
    has_unicode_subscript: bool,
    unicode_superscripts: Vec<char>,
    unicode_subscripts: Vec<char>,
    plain_text: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Format {
            input,
            config,
            sup_size,
            sub_size,
            fraction_size,
            no_unicode,
            no_caret,
            no_underscore,
            no_fractions,
            no_chemical,
        } => {
            let text = input.read()?;
            let mut cfg = match config {
                Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
                None => FormatConfig::default(),
            };
            if let Some(pct) = sup_size {
                cfg.set_superscript_size(*pct);
            }
            if let Some(pct) = sub_size {
                cfg.set_subscript_size(*pct);
            }
            if let Some(pct) = fraction_size {
                cfg.set_fraction_size(*pct);
            }
            cfg.convert_unicode &= !*no_unicode;
            cfg.convert_caret &= !*no_caret;
            cfg.convert_underscore &= !*no_underscore;
            cfg.convert_fractions &= !*no_fractions;
            cfg.convert_chemical_formulas &= !*no_chemical;
            println!("{}", format(&text, &cfg));
        }
        Commands::Unicode { input } => {
            println!("{}", unicode(&input.read()?));
        }
        Commands::Plain { input } => {
            println!("{}", plain_text(&input.read()?));
        }
        Commands::Inspect { input } => {
            let text = input.read()?;
            let report = InspectReport {
                has_formatting: query::has_formatting(&text),
                has_unicode_superscript: query::has_unicode_superscript(&text),
                has_unicode_subscript: query::has_unicode_subscript(&text),
                unicode_superscripts: query::unicode_superscripts(&text),
                unicode_subscripts: query::unicode_subscripts(&text),
                plain_text: plain_text(&text),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
