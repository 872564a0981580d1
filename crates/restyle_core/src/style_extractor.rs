//! Extraction of named style groups from a parsed style-definition module.
//!
//! Recognition runs on the first top-level expression statement and accepts a
//! closed set of shapes:
//!
//! * an object literal (`({ root: {...} })`),
//! * a zero- or one-parameter arrow returning an object literal
//!   (`theme => ({...})`, `({ palette }) => ({...})`, `() => ({...})`),
//! * inside the arrow form, a group whose value is itself a one-parameter
//!   arrow of per-instance props (`root: ({ height }) => ({...})`).
//!
//! Any other outer shape yields an empty sheet, which downstream treats as
//! "no matches possible" rather than an error.

use std::collections::HashMap;

use swc_core::atoms::Atom;
use swc_core::common::{SyntaxContext, DUMMY_SP};
use swc_core::ecma::ast::*;

/// One named style block, keyed by the property name it was declared under.
pub struct StyleGroup {
  pub key: Atom,
  pub body: ObjectLit,
}

/// How the outer arrow bound its theme parameter.
pub enum ThemeParamForm {
  Ident(Ident),
  Pattern(ObjectPat),
}

/// Per-group factory expressions synthesized from an outer theme arrow.
pub struct ThemeFactory {
  pub theme_param: Option<ThemeParamForm>,
  per_group: HashMap<Atom, ArrowExpr>,
}

/// The result of extraction: groups in declaration order, plus the factory
/// context when the source was a theme arrow.
#[derive(Default)]
pub struct StyleSheet {
  pub groups: Vec<StyleGroup>,
  pub factory: Option<ThemeFactory>,
}

impl StyleSheet {
  /// The expression a styled-component declaration binds for `key`: the
  /// synthesized factory arrow when a theme context exists, the plain style
  /// object otherwise. Cloned per call; callers own the copy outright.
  pub fn payload_for(&self, key: &Atom) -> Option<Expr> {
    if let Some(factory) = &self.factory {
      factory.per_group.get(key).cloned().map(Expr::Arrow)
    } else {
      self
        .groups
        .iter()
        .find(|group| group.key == *key)
        .map(|group| Expr::Object(group.body.clone()))
    }
  }
}

/// Extract style groups from the first top-level expression statement.
pub fn extract(module: &Module) -> StyleSheet {
  let Some(expr) = first_expression_statement(module) else {
    return StyleSheet::default();
  };

  match unwrap_parens(expr) {
    Expr::Object(object) => extract_object_map(object),
    Expr::Arrow(arrow) => extract_theme_factory(arrow),
    _ => {
      log::debug!("style source is neither an object literal nor an arrow; skipping");
      StyleSheet::default()
    }
  }
}

fn first_expression_statement(module: &Module) -> Option<&Expr> {
  module.body.iter().find_map(|item| match item {
    ModuleItem::Stmt(Stmt::Expr(stmt)) => Some(&*stmt.expr),
    _ => None,
  })
}

fn unwrap_parens(expr: &Expr) -> &Expr {
  let mut expr = expr;
  while let Expr::Paren(paren) = expr {
    expr = &paren.expr;
  }
  expr
}

/// Shape A: a bare object map. Every object-valued property becomes a group.
fn extract_object_map(object: &ObjectLit) -> StyleSheet {
  let mut sheet = StyleSheet::default();
  for (key, value) in named_properties(object) {
    match unwrap_parens(value) {
      Expr::Object(body) => upsert_group(&mut sheet.groups, key, body.clone()),
      _ => log::debug!("style group `{key}` is not an object literal; skipping"),
    }
  }
  sheet
}

/// Shapes B and B': an arrow of an optional theme parameter returning the
/// object map.
fn extract_theme_factory(arrow: &ArrowExpr) -> StyleSheet {
  if arrow.params.len() > 1 {
    log::debug!("style factory takes more than one parameter; skipping");
    return StyleSheet::default();
  }

  let theme_param = match arrow.params.first() {
    None => None,
    Some(Pat::Ident(binding)) => Some(ThemeParamForm::Ident(binding.id.clone())),
    Some(Pat::Object(pattern)) => Some(ThemeParamForm::Pattern(pattern.clone())),
    Some(_) => {
      log::debug!("unsupported theme parameter pattern; skipping");
      return StyleSheet::default();
    }
  };

  let BlockStmtOrExpr::Expr(body) = &*arrow.body else {
    log::debug!("style factory has a block body; skipping");
    return StyleSheet::default();
  };
  let Expr::Object(object) = unwrap_parens(body) else {
    log::debug!("style factory does not return an object literal; skipping");
    return StyleSheet::default();
  };

  let mut groups: Vec<StyleGroup> = Vec::new();
  let mut per_group: HashMap<Atom, ArrowExpr> = HashMap::new();

  for (key, value) in named_properties(object) {
    let group_value = match unwrap_parens(value) {
      Expr::Object(body) => GroupValue::Plain(body),
      Expr::Arrow(inner) => match props_callback(inner) {
        Some(value) => value,
        None => {
          log::debug!("style group `{key}` has an unsupported callback shape; skipping");
          continue;
        }
      },
      _ => {
        log::debug!("style group `{key}` is not an object literal; skipping");
        continue;
      }
    };

    let factory = synthesize_group_factory(&theme_param, &group_value);
    let body = match group_value {
      GroupValue::Plain(body) => body.clone(),
      GroupValue::WithProps { body, .. } => body.clone(),
    };
    per_group.insert(key.clone(), factory);
    upsert_group(&mut groups, key, body);
  }

  StyleSheet {
    groups,
    factory: Some(ThemeFactory {
      theme_param,
      per_group,
    }),
  }
}

enum GroupValue<'a> {
  Plain(&'a ObjectLit),
  WithProps {
    props: &'a ObjectPat,
    body: &'a ObjectLit,
  },
}

/// Recognize `({ height }) => ({ ... })` group values: exactly one
/// object-pattern parameter and an object expression body.
fn props_callback(inner: &ArrowExpr) -> Option<GroupValue> {
  if inner.params.len() != 1 {
    return None;
  }
  let Pat::Object(props) = &inner.params[0] else {
    return None;
  };
  let BlockStmtOrExpr::Expr(body) = &*inner.body else {
    return None;
  };
  let Expr::Object(body) = unwrap_parens(body) else {
    return None;
  };
  Some(GroupValue::WithProps { props, body })
}

/// Build the zero-argument-style factory for one group.
///
/// The theme binding nests under a `theme` key for plain groups, but is
/// flattened alongside the prop keys for props callbacks; call sites that
/// already destructure per-instance props expect all inputs at the top level.
fn synthesize_group_factory(
  theme_param: &Option<ThemeParamForm>,
  group_value: &GroupValue,
) -> ArrowExpr {
  let (params, body) = match group_value {
    GroupValue::Plain(body) => {
      let params = match theme_param {
        None => vec![],
        Some(ThemeParamForm::Ident(ident)) => {
          vec![object_pat(vec![shorthand_prop(ident)])]
        }
        Some(ThemeParamForm::Pattern(pattern)) => {
          vec![object_pat(vec![theme_key_prop(pattern)])]
        }
      };
      (params, *body)
    }
    GroupValue::WithProps { props, body } => {
      let mut merged = match theme_param {
        None => vec![],
        Some(ThemeParamForm::Ident(ident)) => vec![shorthand_prop(ident)],
        Some(ThemeParamForm::Pattern(pattern)) => pattern.props.clone(),
      };
      merged.extend(props.props.iter().cloned());
      (vec![object_pat(merged)], *body)
    }
  };

  ArrowExpr {
    span: DUMMY_SP,
    ctxt: SyntaxContext::empty(),
    params,
    body: Box::new(BlockStmtOrExpr::Expr(Box::new(Expr::Object(body.clone())))),
    is_async: false,
    is_generator: false,
    type_params: None,
    return_type: None,
  }
}

fn object_pat(props: Vec<ObjectPatProp>) -> Pat {
  Pat::Object(ObjectPat {
    span: DUMMY_SP,
    props,
    optional: false,
    type_ann: None,
  })
}

/// `{ theme }`
fn shorthand_prop(ident: &Ident) -> ObjectPatProp {
  ObjectPatProp::Assign(AssignPatProp {
    span: DUMMY_SP,
    key: BindingIdent {
      id: ident.clone(),
      type_ann: None,
    },
    value: None,
  })
}

/// `{ theme: <original destructuring pattern> }`
fn theme_key_prop(pattern: &ObjectPat) -> ObjectPatProp {
  ObjectPatProp::KeyValue(KeyValuePatProp {
    key: PropName::Ident(IdentName {
      span: DUMMY_SP,
      sym: "theme".into(),
    }),
    value: Box::new(Pat::Object(pattern.clone())),
  })
}

/// Iterate the identifier- or string-keyed key/value properties of an object
/// literal; spreads, computed keys, shorthands and methods are skipped.
fn named_properties(object: &ObjectLit) -> impl Iterator<Item = (Atom, &Expr)> + '_ {
  object.props.iter().filter_map(|prop| {
    let PropOrSpread::Prop(prop) = prop else {
      return None;
    };
    let Prop::KeyValue(key_value) = &**prop else {
      return None;
    };
    let key = match &key_value.key {
      PropName::Ident(ident) => ident.sym.clone(),
      PropName::Str(name) => name.value.clone(),
      _ => return None,
    };
    Some((key, &*key_value.value))
  })
}

/// Later duplicate keys overwrite earlier ones, matching object-literal
/// semantics; the group keeps its original position.
fn upsert_group(groups: &mut Vec<StyleGroup>, key: Atom, body: ObjectLit) {
  match groups.iter_mut().find(|group| group.key == key) {
    Some(existing) => existing.body = body,
    None => groups.push(StyleGroup { key, body }),
  }
}
