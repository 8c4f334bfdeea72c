//! Placeholder substitution for prose templates.
//!
//! Templates are plain `&'static str` values containing `{name}` markers.
//! Substitution is a single left-to-right pass: inserted values are never
//! re-scanned, and markers without a binding are emitted verbatim.

/// Placeholder bindings, looked up by name
pub type Vars<'a> = [(&'a str, &'a str)];

/// Fill every bound `{name}` in `template`
pub fn fill(template: &str, vars: &Vars<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match vars.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
