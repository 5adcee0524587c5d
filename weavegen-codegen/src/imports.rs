//! Import specifier resolution between the output directory and the modules
//! the generated code imports from.

use std::path::{Component, Path, PathBuf};

/// Source extensions and the runtime extension they compile to.
const RUNTIME_EXTENSIONS: &[(&str, &str)] = &[("ts", "js"), ("mts", "mjs"), ("cts", "cjs")];

/// Resolves the import specifier of `target` as seen from files in `from_dir`.
///
/// Separators are normalized to `/`, a TypeScript source extension is replaced
/// with its runtime counterpart, and the result is prefixed with `./` unless it
/// already starts with a relative marker.
#[must_use]
pub fn resolve_import(from_dir: &Path, target: &Path) -> String {
    let relative = relative_path(from_dir, &runtime_path(target));
    let mut specifier = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
        .replace('\\', "/");

    if !specifier.starts_with('.') {
        specifier.insert_str(0, "./");
    }
    specifier
}

/// Swaps a TypeScript source extension for the runtime one.
fn runtime_path(path: &Path) -> PathBuf {
    let runtime = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| RUNTIME_EXTENSIONS.iter().find(|(src, _)| *src == ext))
        .map(|(_, runtime)| *runtime);

    match runtime {
        Some(ext) => path.with_extension(ext),
        None => path.to_path_buf(),
    }
}

/// Computes the path of `to` relative to `from`, lexically.
fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from = normalize(from);
    let to = normalize(to);

    let common = from
        .components()
        .zip(to.components())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in from.components().skip(common) {
        relative.push("..");
    }
    for component in to.components().skip(common) {
        relative.push(component.as_os_str());
    }
    relative
}

/// Makes a path absolute and removes `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();

    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
