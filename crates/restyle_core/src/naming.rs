//! Display-name policy for synthesized styled components.
//!
//! Pure functions of the element name and group key, so a deduplication
//! policy can be layered on top deterministically if it is ever needed.

/// Capitalize the first character, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
  let mut chars = value.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Compute the name a styled component is bound to and that replaces the
/// element's tag.
///
/// When the element and the style group share a name a generic `Styled`
/// prefix is enough (`iframe`/`iframe` -> `StyledIframe`); otherwise the
/// compound name documents intent (`img`/`svg` -> `ImgSvg`, `Button` /
/// `learnMore` -> `ButtonLearnMore`). The `a` tag becomes `Anchor` to avoid a
/// one-letter name. Component names compare case-insensitively, tag names
/// exactly.
pub fn display_name(element_name: &str, group_key: &str) -> String {
  let lower_case_tag = element_name
    .chars()
    .next()
    .is_some_and(|c| c.is_ascii_lowercase());

  if lower_case_tag {
    let tag = if element_name == "a" {
      "anchor"
    } else {
      element_name
    };
    if element_name == group_key {
      format!("Styled{}", capitalize(tag))
    } else {
      format!("{}{}", capitalize(tag), capitalize(group_key))
    }
  } else if element_name.eq_ignore_ascii_case(group_key) {
    format!("Styled{element_name}")
  } else {
    format!("{}{}", element_name, capitalize(group_key))
  }
}
