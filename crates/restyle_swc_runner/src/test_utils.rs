use swc_core::ecma::visit::{VisitMut, VisitMutWith};

use crate::print_config::PrintConfig;
use crate::runner::{parse_module, print_module};

pub struct RunVisitResult<V> {
  pub output_code: String,
  #[allow(unused)]
  pub visitor: V,
}

/// Helper to test SWC visitors.
///
/// * Parse `code` with SWC
/// * Run a visitor over it
/// * Return the printed result
///
pub fn run_test_visit<V: VisitMut>(code: &str, mut visitor: V) -> RunVisitResult<V> {
  let mut parsed = parse_module(code).unwrap();
  parsed.module.visit_mut_with(&mut visitor);
  let output_code = print_module(&parsed, &PrintConfig::default()).unwrap();
  RunVisitResult {
    output_code,
    visitor,
  }
}
