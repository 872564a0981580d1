use serde::{Deserialize, Serialize};

/// Quote style used for string literals the transform synthesizes.
///
/// Strings that were parsed from the input keep their original raw text, so
/// this only affects literals created during the rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
  #[default]
  Single,
  Double,
}

impl QuoteStyle {
  pub fn char(&self) -> char {
    match self {
      QuoteStyle::Single => '\'',
      QuoteStyle::Double => '"',
    }
  }

  /// Wrap `value` in this quote style, escaping as needed.
  pub fn wrap(&self, value: &str) -> String {
    let quote = self.char();
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for ch in value.chars() {
      match ch {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        c if c == quote => {
          out.push('\\');
          out.push(c);
        }
        c => out.push(c),
      }
    }
    out.push(quote);
    out
  }
}

/// Serialization options for [`crate::print_module`].
///
/// These only affect how trees are written back to text, never the structure
/// of the trees themselves. Defaults match the common jscodeshift print
/// options (`single`, width 2, trailing commas, spaced braces).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintConfig {
  pub quote: QuoteStyle,
  pub indent_width: usize,
  /// Accepted for config compatibility; the SWC emitter decides trailing
  /// commas itself.
  pub trailing_comma: bool,
  /// Accepted for config compatibility; the SWC emitter decides interior
  /// brace spacing itself.
  pub object_curly_spacing: bool,
}

impl Default for PrintConfig {
  fn default() -> Self {
    Self {
      quote: QuoteStyle::Single,
      indent_width: 2,
      trailing_comma: true,
      object_curly_spacing: true,
    }
  }
}

// The emitter wants a static indent string, so widths are mapped onto a
// fixed table and clamped at eight spaces.
const INDENTS: [&str; 9] = [
  "",
  " ",
  "  ",
  "   ",
  "    ",
  "     ",
  "      ",
  "       ",
  "        ",
];

impl PrintConfig {
  pub fn indent_str(&self) -> &'static str {
    INDENTS[self.indent_width.min(INDENTS.len() - 1)]
  }
}
