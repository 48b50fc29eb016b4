//! Groups contribute a dotted key prefix instead of being rendered themselves.

use crate::attr::{Attr, Value};

/// `req.` for groups `["req"]`, `a.b.` for `["a", "b"]`, empty for no groups.
pub(crate) fn group_prefix(groups: &[String]) -> String {
    if groups.is_empty() {
        return String::new();
    }
    let mut prefix = groups.join(".");
    prefix.push('.');
    prefix
}

/// Expands `attr` into its leaf attributes, each keyed by `prefix` plus the
/// dotted path of enclosing group names. Lazy values are resolved here.
/// Empty attributes and empty groups produce nothing.
#[must_use]
pub fn flatten(prefix: &str, attr: &Attr) -> Vec<Attr> {
    let mut out = Vec::new();
    flatten_into(prefix, attr, &mut out);
    out
}

fn flatten_into(prefix: &str, attr: &Attr, out: &mut Vec<Attr>) {
    let value = attr.value.resolve();

    if let Value::Group(children) = value {
        let nested = if attr.key.is_empty() {
            prefix.to_string()
        } else {
            format!("{prefix}{}.", attr.key)
        };
        for child in children {
            flatten_into(&nested, child, out);
        }
        return;
    }

    if attr.key.is_empty() && matches!(value, Value::Empty) {
        return;
    }

    out.push(Attr {
        key: format!("{prefix}{}", attr.key),
        value: value.clone(),
    });
}
