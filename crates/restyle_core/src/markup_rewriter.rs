//! Per-group rewrite of a parsed markup fragment.
//!
//! For one style group, scans every JSX element pre-order, strips the
//! `className` reference to the group (the whole attribute for the direct
//! `classes.key` form, or just the matching argument of a combinator call
//! such as `clsx(...)`), renames the element to its display name and records
//! a `const <Name> = styled(<tag>)(<payload>);` declaration. Declarations
//! accumulate in visitor state and are taken by the caller once the pass is
//! done.

use swc_core::common::{SyntaxContext, DUMMY_SP};
use swc_core::ecma::ast::*;
use swc_core::ecma::visit::{VisitMut, VisitMutWith};
use swc_core::quote;

use crate::naming::display_name;

/// The only identifiers treated as a style-hook result. Any other object a
/// property is read from is never a class reference, even if the property
/// name matches a group key.
pub const CLASS_OBJECT_IDENTS: [&str; 2] = ["classes", "styles"];

pub struct MarkupRewriter<'a> {
  group_key: &'a str,
  payload: &'a Expr,
  declarations: Vec<ModuleItem>,
}

impl<'a> MarkupRewriter<'a> {
  pub fn new(group_key: &'a str, payload: &'a Expr) -> Self {
    Self {
      group_key,
      payload,
      declarations: Vec::new(),
    }
  }

  pub fn take_declarations(self) -> Vec<ModuleItem> {
    self.declarations
  }

  fn rewrite_element(&mut self, element: &mut JSXElement) {
    if !self.strip_class_reference(&mut element.opening.attrs) {
      return;
    }

    let JSXElementName::Ident(name_ident) = &element.opening.name else {
      return;
    };
    let element_name = name_ident.sym.to_string();
    if !element_name
      .chars()
      .next()
      .is_some_and(|c| c.is_ascii_alphabetic())
    {
      log::debug!("element `{element_name}` is not a tag or component name; not renaming");
      return;
    }

    let styled_name = display_name(&element_name, self.group_key);
    self.push_declaration(&element_name, &styled_name);
    rename_element(element, &styled_name);
  }

  /// Remove the reference to this group from the element's `className`
  /// attribute, if any. Returns whether a reference was removed. First match
  /// wins per attribute value.
  fn strip_class_reference(&self, attrs: &mut Vec<JSXAttrOrSpread>) -> bool {
    let mut matched = false;

    attrs.retain_mut(|attr| {
      if matched {
        return true;
      }
      let JSXAttrOrSpread::JSXAttr(attr) = attr else {
        return true;
      };
      if !is_class_name_attr(attr) {
        return true;
      }
      let Some(JSXAttrValue::JSXExprContainer(container)) = &mut attr.value else {
        return true;
      };
      let JSXExpr::Expr(expr) = &mut container.expr else {
        return true;
      };

      match &mut **expr {
        // className={classes.key} -> drop the attribute entirely
        Expr::Member(member) => {
          if self.is_group_reference(member) {
            matched = true;
            return false;
          }
          true
        }
        // className={clsx('other', classes.key)} -> drop only the matching
        // argument; a call left with zero arguments keeps the attribute
        Expr::Call(call) => {
          let found = call.args.iter().position(|arg| {
            arg.spread.is_none()
              && matches!(&*arg.expr, Expr::Member(member) if self.is_group_reference(member))
          });
          if let Some(index) = found {
            call.args.remove(index);
            matched = true;
          }
          true
        }
        _ => true,
      }
    });

    matched
  }

  fn is_group_reference(&self, member: &MemberExpr) -> bool {
    let Expr::Ident(object) = &*member.obj else {
      return false;
    };
    if !CLASS_OBJECT_IDENTS.contains(&object.sym.as_ref()) {
      return false;
    }
    let MemberProp::Ident(prop) = &member.prop else {
      return false;
    };
    prop.sym.as_ref() == self.group_key
  }

  fn push_declaration(&mut self, element_name: &str, styled_name: &str) {
    // Lower-case names are HTML tags and bind as string literals; upper-case
    // names are components and bind as bare references.
    let target: Expr = if element_name
      .chars()
      .next()
      .is_some_and(|c| c.is_ascii_lowercase())
    {
      Expr::Lit(Lit::Str(Str {
        span: DUMMY_SP,
        value: element_name.into(),
        raw: None,
      }))
    } else {
      Expr::Ident(Ident::new(
        element_name.into(),
        DUMMY_SP,
        SyntaxContext::empty(),
      ))
    };

    let name = Ident::new(styled_name.into(), DUMMY_SP, SyntaxContext::empty());
    let declaration = quote!(
      "const $name = styled($target)($payload);" as Stmt,
      name: Ident = name,
      target: Expr = target,
      payload: Expr = self.payload.clone(),
    );
    self.declarations.push(ModuleItem::Stmt(declaration));
  }
}

impl VisitMut for MarkupRewriter<'_> {
  fn visit_mut_jsx_element(&mut self, element: &mut JSXElement) {
    self.rewrite_element(element);
    element.visit_mut_children_with(self);
  }
}

fn is_class_name_attr(attr: &JSXAttr) -> bool {
  matches!(&attr.name, JSXAttrName::Ident(ident) if ident.sym.as_ref() == "className")
}

fn rename_element(element: &mut JSXElement, styled_name: &str) {
  if let JSXElementName::Ident(ident) = &mut element.opening.name {
    ident.sym = styled_name.into();
  }
  if let Some(closing) = &mut element.closing {
    if let JSXElementName::Ident(ident) = &mut closing.name {
      ident.sym = styled_name.into();
    }
  }
}
