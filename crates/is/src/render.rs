//! Textual rendering of values and runtime type names for failure messages.

use std::any;
use std::fmt::Debug;

use crate::config::{Settings, TypeNames};

/// Renders a value with its `Debug` representation.
///
/// Failure templates already wrap values in quotes, so the quotes `Debug`
/// puts around strings are removed: `"123"` renders as `123`. The escapes
/// `Debug` applies inside strings stay, so a newline shows as `\n` and the
/// failure message keeps to one line.
pub fn value<T: Debug + ?Sized>(value: &T) -> String {
    unquote(format!("{:?}", value))
}

/// Name of `T` in the process-wide style.
pub fn type_name<T: ?Sized>() -> String {
    type_name_with::<T>(Settings::global().type_names)
}

/// Name of `T` in the given style.
pub fn type_name_with<T: ?Sized>(style: TypeNames) -> String {
    let full = any::type_name::<T>();
    match style {
        TypeNames::Full => full.to_string(),
        TypeNames::Short => shorten(full),
    }
}

/// Strips module paths from every path inside a type name.
///
/// `core::option::Option<&alloc::string::String>` becomes `Option<&String>`.
pub fn shorten(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut path = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || matches!(c, '_' | ':' | '{' | '}') {
            path.push(c);
        } else {
            flush_path(&mut out, &mut path);
            out.push(c);
        }
    }
    flush_path(&mut out, &mut path);

    out
}

fn flush_path(out: &mut String, path: &mut String) {
    if path.is_empty() {
        return;
    }
    let last = match path.rfind("::") {
        Some(idx) => &path[idx + 2..],
        None => path.as_str(),
    };
    out.push_str(last);
    path.clear();
}

fn unquote(rendered: String) -> String {
    if rendered.len() >= 2 && rendered.starts_with('"') && rendered.ends_with('"') {
        rendered[1..rendered.len() - 1].to_string()
    } else {
        rendered
    }
}
