//! Pre-parse normalization of the style-definition source.
//!
//! The accepted grammar is deliberately small and anchored so the input
//! surface stays auditable:
//!
//! 1. An optional leading variable declaration (`const useStyles =`) is
//!    stripped, so `const useStyles = <expr>` and `<expr>` are equivalent.
//! 2. An optional wrapping hook-factory call (`makeStyles(...)` or
//!    `createUseStyles(...)`) spanning the whole remaining text is unwrapped
//!    to its parenthesized sole argument.
//!
//! Anything else passes through verbatim and is left to the parser.

use regex::Regex;

thread_local! {
  static RE_DECL_PREFIX: Regex =
    Regex::new(r"^\s*(?:const|let|var)\s+[A-Za-z_$][\w$]*\s*=").unwrap();
  static RE_FACTORY_CALL: Regex =
    Regex::new(r"^\s*(?:makeStyles|createUseStyles)\s*(\([\s\S]*\))\s*;?\s*$").unwrap();
}

pub fn normalize_style_source(source: &str) -> String {
  unwrap_factory_call(strip_declaration_prefix(source)).to_string()
}

fn strip_declaration_prefix(source: &str) -> &str {
  RE_DECL_PREFIX.with(|re| {
    if let Some(found) = re.find(source) {
      let rest = &source[found.end()..];
      // `=>` means the text was an arrow function all along, not a declaration
      if !rest.starts_with('>') {
        return rest;
      }
    }
    source
  })
}

fn unwrap_factory_call(source: &str) -> &str {
  RE_FACTORY_CALL.with(|re| match re.captures(source) {
    Some(caps) => caps.get(1).map_or(source, |group| group.as_str()),
    None => source,
  })
}
