//! Rewrites a JSS-style map (as fed to a `makeStyles`-like hook factory) and
//! an accompanying JSX fragment into an equivalent styled-component pair: a
//! block of `const X = styled(tag)(styleBody);` declarations plus the
//! fragment with class references replaced by the new component names.
//!
//! The sole public entry point is [`transform`]; everything it needs is in
//! the config it receives and everything it produces is in the returned
//! result, so repeated calls over the same inputs are byte-identical.

pub mod markup_rewriter;
pub mod naming;
pub mod normalize;
pub mod style_extractor;
pub mod test_utils;

use serde::{Deserialize, Serialize};
use swc_core::common::DUMMY_SP;
use swc_core::ecma::ast::{Module, ModuleItem};
use swc_core::ecma::visit::VisitMutWith;

use markup_rewriter::MarkupRewriter;
pub use restyle_swc_runner::{ParseError, PrintConfig, PrintError, QuoteStyle};
use restyle_swc_runner::{parse_module, print_module, ParsedModule};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
  /// The style-definition source, eg. `({ root: { margin: 0 } })` or a whole
  /// `const useStyles = makeStyles(...)` statement.
  pub style_source: String,
  /// The JSX fragment whose `className` references should be rewritten.
  pub markup_source: String,
  #[serde(default)]
  pub print: PrintConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResult {
  /// The synthesized styled-component declarations.
  pub declarations: String,
  /// The rewritten markup.
  pub markup: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
  #[error("invalid style source")]
  StyleParse(#[source] ParseError),
  #[error("invalid markup source")]
  MarkupParse(#[source] ParseError),
  #[error(transparent)]
  Print(#[from] PrintError),
}

/// Run the full transform: normalize and parse the style source, parse the
/// markup, extract style groups, rewrite the markup per group and print both
/// outputs.
///
/// Both inputs are parsed up front, so a failure on either never leaves the
/// other partially rewritten. Groups with no matching element and style
/// sources with no recognizable groups are not errors; they produce empty
/// declarations and pass the markup through re-serialized but unmodified.
pub fn transform(config: &TransformConfig) -> Result<TransformResult, TransformError> {
  let normalized = normalize::normalize_style_source(&config.style_source);
  let style = parse_module(&normalized).map_err(TransformError::StyleParse)?;
  let mut markup = parse_module(&config.markup_source).map_err(TransformError::MarkupParse)?;

  let sheet = style_extractor::extract(&style.module);

  let mut declarations: Vec<ModuleItem> = Vec::new();
  for group in &sheet.groups {
    let Some(payload) = sheet.payload_for(&group.key) else {
      continue;
    };
    let mut rewriter = MarkupRewriter::new(group.key.as_ref(), &payload);
    markup.module.visit_mut_with(&mut rewriter);
    declarations.extend(rewriter.take_declarations());
  }

  // The payload expressions are clones out of the style parse, so the
  // declarations module prints against that parse's source map and comments;
  // comments inside copied style bodies stay attached.
  let declarations = ParsedModule::synthesized(
    Module {
      span: DUMMY_SP,
      body: declarations,
      shebang: None,
    },
    &style,
  );

  Ok(TransformResult {
    declarations: print_module(&declarations, &config.print)?,
    markup: print_module(&markup, &config.print)?,
  })
}

#[cfg(test)]
mod tests {
  use indoc::indoc;
  use pretty_assertions::assert_eq;

  use crate::test_utils::{pretty, transform_default};

  #[test]
  fn test_object_map_with_html_tag() {
    let result = transform_default(
      indoc! {"
        ({
          iframe: {
            display: 'block',
            width: '100%',
            minHeight: 400,
            maxHeight: 'calc(100vh - 187px)',
          },
        })
      "},
      "<div>\n  <iframe className={classes.iframe}/>\n</div>;",
    );
    assert_eq!(
      result.declarations,
      pretty(indoc! {"
        const StyledIframe = styled('iframe')({
          display: 'block',
          width: '100%',
          minHeight: 400,
          maxHeight: 'calc(100vh - 187px)',
        });
      "})
    );
    assert_eq!(
      result.markup,
      pretty("<div>\n  <StyledIframe/>\n</div>;")
    );
  }

  #[test]
  fn test_whole_make_styles_statement() {
    let result = transform_default(
      "const useStyles = makeStyles({ iframe: { display: 'block' } })",
      "<iframe className={classes.iframe}/>;",
    );
    assert_eq!(
      result.declarations,
      pretty("const StyledIframe = styled('iframe')({ display: 'block' });")
    );
  }

  #[test]
  fn test_make_styles_callback_without_theme() {
    let result = transform_default(
      "const useStyles = makeStyles(() => ({ iframe: { display: 'block' } }))",
      "<iframe className={classes.iframe}/>;",
    );
    assert_eq!(
      result.declarations,
      pretty("const StyledIframe = styled('iframe')(() => ({ display: 'block' }));")
    );
  }

  #[test]
  fn test_theme_arrow_nests_theme_binding() {
    let result = transform_default(
      "const styles = (theme) => ({ iframe: { minHeight: theme.spacing(50) } })",
      "<iframe className={classes.iframe}/>;",
    );
    assert_eq!(
      result.declarations,
      pretty(
        "const StyledIframe = styled('iframe')(({ theme }) => ({ minHeight: theme.spacing(50) }));"
      )
    );
  }

  #[test]
  fn test_destructured_theme_nests_under_theme_key() {
    let result = transform_default(
      indoc! {"
        ({ palette, spacing }) => ({
          iframe: {
            backgroundColor: palette.primary.main,
            minHeight: spacing(50),
          },
        })
      "},
      "<iframe className={clsx('some-class', classes.iframe)}/>;",
    );
    assert_eq!(
      result.declarations,
      pretty(indoc! {"
        const StyledIframe = styled('iframe')(({ theme: { palette, spacing } }) => ({
          backgroundColor: palette.primary.main,
          minHeight: spacing(50),
        }));
      "})
    );
  }

  #[test]
  fn test_props_callback_flattens_theme_ident() {
    let result = transform_default(
      "theme => ({ iframe: ({ height }) => ({ minHeight: height }) })",
      "<iframe className={classes.iframe}/>;",
    );
    assert_eq!(
      result.declarations,
      pretty(
        "const StyledIframe = styled('iframe')(({ theme, height }) => ({ minHeight: height }));"
      )
    );
  }

  #[test]
  fn test_props_callback_flattens_destructured_theme() {
    let result = transform_default(
      "({ palette, spacing }) => ({ iframe: ({ height }) => ({ minHeight: height }) })",
      "<iframe className={classes.iframe}/>;",
    );
    assert_eq!(
      result.declarations,
      pretty(
        "const StyledIframe = styled('iframe')(({ palette, spacing, height }) => ({ minHeight: height }));"
      )
    );
  }

  #[test]
  fn test_custom_component_binds_bare_reference() {
    let result = transform_default(
      "({ iframe: { display: 'block' } })",
      "<Cart className={classes.iframe}/>;",
    );
    assert_eq!(
      result.declarations,
      pretty("const CartIframe = styled(Cart)({ display: 'block' });")
    );
  }

  #[test]
  fn test_combinator_partial_strip_keeps_other_arguments() {
    let result = transform_default(
      "({ iframe: { display: 'block' } })",
      "<div>\n  <iframe className={clsx('something', classes.iframe)}/>\n</div>;",
    );
    assert_eq!(
      result.markup,
      pretty("<div>\n  <StyledIframe className={clsx('something')}/>\n</div>;")
    );
  }

  #[test]
  fn test_styles_identifier_is_recognized() {
    let result = transform_default(
      "({ img: { display: 'block' } })",
      "<div className={styles.img}/>;",
    );
    assert_eq!(result.markup, pretty("<DivImg/>;"));
    assert_eq!(
      result.declarations,
      pretty("const DivImg = styled('div')({ display: 'block' });")
    );
  }

  #[test]
  fn test_no_match_passes_markup_through() {
    let markup = "<div className={classes.other}/>;";
    let result = transform_default("({ root: { margin: 0 } })", markup);
    assert_eq!(result.declarations, "");
    assert_eq!(result.markup, pretty(markup));
  }

  #[test]
  fn test_unsupported_style_shape_passes_markup_through() {
    let markup = "<div className={classes.root}/>;";
    let result = transform_default("(a, b) => ({ root: { margin: 0 } })", markup);
    assert_eq!(result.declarations, "");
    assert_eq!(result.markup, pretty(markup));
  }

  #[test]
  fn test_group_matching_two_elements_yields_two_declarations() {
    let result = transform_default(
      "({ svg: { width: '40%' } })",
      "<div>\n  <img className={classes.svg}/>\n  <Icon className={classes.svg}/>\n</div>;",
    );
    assert_eq!(
      result.declarations,
      pretty(indoc! {"
        const ImgSvg = styled('img')({ width: '40%' });
        const IconSvg = styled(Icon)({ width: '40%' });
      "})
    );
  }

  #[test]
  fn test_multiple_groups_in_declaration_order() {
    let result = transform_default(
      indoc! {"
        (theme) => ({
          stepper: { minWidth: 400 },
          container: { marginTop: theme.spacing(4) },
        })
      "},
      indoc! {"
        <Container className={classes.container}>
          <Stepper className={classes.stepper}/>
        </Container>;
      "},
    );
    assert_eq!(
      result.declarations,
      pretty(indoc! {"
        const StyledStepper = styled(Stepper)(({ theme }) => ({ minWidth: 400 }));
        const StyledContainer = styled(Container)(({ theme }) => ({ marginTop: theme.spacing(4) }));
      "})
    );
    assert_eq!(
      result.markup,
      pretty(indoc! {"
        <StyledContainer>
          <StyledStepper/>
        </StyledContainer>;
      "})
    );
  }

  #[test]
  fn test_repeated_calls_are_byte_identical() {
    let style = "(theme) => ({ iframe: { minHeight: theme.spacing(2) } })";
    let markup = "<iframe className={clsx('a', classes.iframe)}/>;";
    let first = transform_default(style, markup);
    let second = transform_default(style, markup);
    assert_eq!(first, second);
  }

  #[test]
  fn test_comments_in_style_bodies_survive() {
    let result = transform_default(
      "({ iframe: { display: 'block' /* keep block */ } })",
      "<iframe className={classes.iframe}/>;",
    );
    assert!(
      result.declarations.contains("/* keep block */"),
      "comment lost from: {}",
      result.declarations
    );
  }

  #[test]
  fn test_style_parse_error_is_fatal() {
    let error = crate::transform(&crate::TransformConfig {
      style_source: "({ nope".to_string(),
      markup_source: "<div/>;".to_string(),
      print: Default::default(),
    })
    .unwrap_err();
    assert!(matches!(error, crate::TransformError::StyleParse(_)));
  }

  #[test]
  fn test_markup_parse_error_is_fatal() {
    let error = crate::transform(&crate::TransformConfig {
      style_source: "({ root: {} })".to_string(),
      markup_source: "<div".to_string(),
      print: Default::default(),
    })
    .unwrap_err();
    assert!(matches!(error, crate::TransformError::MarkupParse(_)));
  }
}
