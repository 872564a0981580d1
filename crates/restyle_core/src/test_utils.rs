use restyle_swc_runner::{parse_module, print_module, PrintConfig};

use crate::{transform, TransformConfig, TransformResult};

/// Run the whole transform with default print options.
pub fn transform_default(style_source: &str, markup_source: &str) -> TransformResult {
  transform(&TransformConfig {
    style_source: style_source.to_string(),
    markup_source: markup_source.to_string(),
    print: PrintConfig::default(),
  })
  .unwrap()
}

/// Round-trip `code` through the default printer.
///
/// Comparing transform output against `pretty(expected)` pins the trees to be
/// equivalent without tying tests to emitter whitespace trivia.
pub fn pretty(code: &str) -> String {
  let parsed = parse_module(code).unwrap();
  print_module(&parsed, &PrintConfig::default()).unwrap()
}
