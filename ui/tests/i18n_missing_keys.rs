use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical FTL file name per locale.
const FTL_FILENAME: &str = "ecotrack_ui.ftl";

/// Translation completeness test.
/// Ensures every non‑fallback locale provides *at least* the keys present
/// in the fallback (en-US) `ecotrack_ui.ftl`.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/ecotrack_ui.ftl`
/// 2. Copy all keys from `en-US/ecotrack_ui.ftl`
/// 3. Register it below and run `cargo test -p ecotrack-ui`.
#[test]
fn all_locales_have_all_fallback_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/ecotrack_ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/ecotrack_ui.ftl");

    let fallback_keys = extract_keys(EN_US);
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[
        ("es-ES", ES_ES),
        // Add new locales here.
    ];

    let mut failures = Vec::new();
    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys.iter().filter(|k| !keys.contains(*k)).collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Every `t!("...")` key used under `src/` must exist in the fallback bundle.
#[test]
fn source_keys_exist_in_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = fs::read_to_string(crate_root.join("i18n/en-US").join(FTL_FILENAME))
        .expect("fallback FTL readable");
    let fallback_keys = extract_keys(&fallback);

    let referenced = extract_translation_keys_from_source(&crate_root.join("src"));
    assert!(!referenced.is_empty(), "no t!() calls found under src/");

    let mut missing: Vec<_> = referenced
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .cloned()
        .collect();
    missing.sort();

    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback:\n{}",
        missing.join("\n")
    );
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    src.lines().filter_map(message_key).collect()
}

fn message_key(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') || line.starts_with('-') {
        return None;
    }
    let (left, _) = line.split_at(line.find('=')?);
    let key = left.trim();
    if !key.is_empty() && key.chars().all(valid_key_char) {
        Some(key.to_string())
    } else {
        None
    }
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for raw in src.lines() {
        if let Some(key) = message_key(raw) {
            if !seen.insert(key.clone()) {
                dups.insert(format!("{key}  (line: \"{raw}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}

/// Collect literal first arguments of `t!("...")` under `src_root`.
///
/// Does not see `fl!` calls or computed keys; direct usage is the convention.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (idx, _) in content.match_indices("t!(\"") {
            // Skip `format!(`, `assert!(` and friends.
            let preceded_by_ident = content[..idx]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            if preceded_by_ident {
                continue;
            }
            let rest = &content[idx + 4..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}
