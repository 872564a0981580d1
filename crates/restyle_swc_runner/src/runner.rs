use std::string::FromUtf8Error;

use swc_core::common::comments::{Comments, SingleThreadedComments};
use swc_core::common::input::StringInput;
use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, SourceMap};
use swc_core::ecma::ast::{EsVersion, Module, Str};
use swc_core::ecma::codegen::text_writer::JsWriter;
use swc_core::ecma::codegen::{Config as CodegenConfig, Emitter};
use swc_core::ecma::parser::lexer::Lexer;
use swc_core::ecma::parser::{Parser, Syntax, TsSyntax};
use swc_core::ecma::visit::{VisitMut, VisitMutWith};

use crate::print_config::{PrintConfig, QuoteStyle};

/// A parsed module together with the source map and comments it was parsed
/// against, so it can be printed again later.
pub struct ParsedModule {
  pub module: Module,
  pub source_map: Lrc<SourceMap>,
  pub comments: SingleThreadedComments,
}

impl ParsedModule {
  /// Wrap a module that was built in memory out of pieces of an existing
  /// parse, eg. a block of synthesized declarations around cloned style
  /// bodies. The origin's source map and comments come along so comments
  /// attached to the cloned nodes survive printing.
  pub fn synthesized(module: Module, origin: &ParsedModule) -> Self {
    Self {
      module,
      source_map: origin.source_map.clone(),
      comments: origin.comments.clone(),
    }
  }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to parse module: {0:?}")]
pub struct ParseError(pub swc_core::ecma::parser::error::Error);

#[derive(Debug, thiserror::Error)]
pub enum PrintError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("invalid utf-8 output: {0}")]
  InvalidUtf8Output(#[from] FromUtf8Error),
}

/// Parse `code` as a TSX module.
///
/// Both the style-definition and markup inputs go through here; TSX is a
/// superset of everything the transform accepts.
pub fn parse_module(code: &str) -> Result<ParsedModule, ParseError> {
  let source_map = Lrc::new(SourceMap::default());
  let source_file = source_map.new_source_file(Lrc::new(FileName::Anon), code.into());

  let comments = SingleThreadedComments::default();
  let syntax = Syntax::Typescript(TsSyntax {
    tsx: true,
    ..Default::default()
  });

  let lexer = Lexer::new(
    syntax,
    EsVersion::latest(),
    StringInput::from(&*source_file),
    Some(&comments),
  );

  let mut parser = Parser::new_from(lexer);
  let module = parser.parse_module().map_err(ParseError)?;

  Ok(ParsedModule {
    module,
    source_map,
    comments,
  })
}

/// Print a module back to source text.
///
/// Total over any tree [`parse_module`] or the transform can produce. The
/// module is cloned so the quote pass never mutates the caller's tree.
pub fn print_module(parsed: &ParsedModule, config: &PrintConfig) -> Result<String, PrintError> {
  let mut module = parsed.module.clone();
  module.visit_mut_with(&mut QuoteNormalizer {
    quote: config.quote,
  });

  let mut buf = vec![];
  {
    let mut writer = JsWriter::new(parsed.source_map.clone(), "\n", &mut buf, None);
    writer.set_indent_str(config.indent_str());
    let mut emitter = Emitter {
      cfg: CodegenConfig::default(),
      cm: parsed.source_map.clone(),
      comments: Some(&parsed.comments as &dyn Comments),
      wr: writer,
    };
    emitter.emit_module(&module)?;
  }

  Ok(String::from_utf8(buf)?)
}

/// Gives synthesized string literals (those with no raw text) a raw form in
/// the configured quote style. Parsed literals keep their original quotes.
struct QuoteNormalizer {
  quote: QuoteStyle,
}

impl VisitMut for QuoteNormalizer {
  fn visit_mut_str(&mut self, node: &mut Str) {
    if node.raw.is_none() {
      node.raw = Some(self.quote.wrap(&node.value).into());
    }
  }
}
