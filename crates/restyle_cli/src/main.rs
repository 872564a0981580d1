use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use restyle_swc_core::{transform, PrintConfig, QuoteStyle, TransformConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum QuoteArg {
  Single,
  Double,
}

impl From<QuoteArg> for QuoteStyle {
  fn from(value: QuoteArg) -> Self {
    match value {
      QuoteArg::Single => QuoteStyle::Single,
      QuoteArg::Double => QuoteStyle::Double,
    }
  }
}

/// Rewrite a JSS style map plus a JSX fragment into styled-components.
#[derive(Parser, Debug)]
#[command(name = "restyle", version)]
struct RestyleCommand {
  /// Path to the style-definition source ("-" for stdin)
  style: PathBuf,
  /// Path to the markup fragment ("-" for stdin)
  markup: PathBuf,
  /// Quote style for synthesized string literals
  #[arg(long, value_enum, default_value = "single")]
  quote: QuoteArg,
  /// Indentation width of the printed output
  #[arg(long, default_value_t = 2)]
  indent_width: usize,
  /// Emit both outputs as one JSON object instead of plain text
  #[arg(long)]
  json: bool,
}

fn main() -> anyhow::Result<()> {
  env_logger::init();
  let args = RestyleCommand::parse();

  ensure_single_stdin(&args.style, &args.markup)?;
  let style_source = read_input(&args.style)?;
  let markup_source = read_input(&args.markup)?;

  let config = TransformConfig {
    style_source,
    markup_source,
    print: PrintConfig {
      quote: args.quote.into(),
      indent_width: args.indent_width,
      ..Default::default()
    },
  };

  log::debug!("transforming {} + {}", args.style.display(), args.markup.display());
  let result = transform(&config)?;

  if args.json {
    println!("{}", serde_json::to_string_pretty(&result)?);
  } else {
    println!("{}", result.declarations.trim_end());
    println!();
    println!("{}", result.markup.trim_end());
  }

  Ok(())
}

/// Stdin can only be drained once, so at most one input may use `-`.
fn ensure_single_stdin(style: &Path, markup: &Path) -> anyhow::Result<()> {
  if style.as_os_str() == "-" && markup.as_os_str() == "-" {
    anyhow::bail!("only one of <STYLE> and <MARKUP> may read from stdin");
  }
  Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
  if path.as_os_str() == "-" {
    let mut buffer = String::new();
    std::io::stdin()
      .read_to_string(&mut buffer)
      .context("failed to read stdin")?;
    return Ok(buffer);
  }
  std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
