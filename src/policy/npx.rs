//! `npx` policy: an intentionally small allowlist of tools, since `npx`
//! can otherwise silently fetch and execute arbitrary packages.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::output::Decision;

static NPX_TOOL_ALLOWLIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["@herb-tools/linter", "eslint", "prettier", "karma", "tsc", "stylelint", "jest"]
        .into_iter()
        .collect()
});

pub fn classify(argv: &[String]) -> Decision {
    let mut idx = 1;
    let mut package: Option<String> = None;

    while idx < argv.len() {
        match argv[idx].as_str() {
            "-y" | "--yes" | "--no-install" => idx += 1,
            "-p" | "--package" => {
                if let Some(p) = argv.get(idx + 1) {
                    package = Some(p.clone());
                }
                idx += 2;
            }
            arg if arg.starts_with("--package=") => {
                package = Some(arg.trim_start_matches("--package=").to_string());
                idx += 1;
            }
            "--" => {
                idx += 1;
                break;
            }
            _ => break,
        }
    }

    let positional = argv.get(idx).cloned();
    let tool = package.or(positional);

    match tool {
        Some(t) if NPX_TOOL_ALLOWLIST.contains(t.as_str()) => {
            Decision::allow(format!("npx {t} is in the npx tool allowlist"))
        }
        Some(t) => Decision::deny("npx-tool", format!("npx {t} is not in the npx tool allowlist")),
        None => Decision::deny("npx-tool", "npx requires a tool to run"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn allowlisted_tools_allowed() {
        assert!(classify(&v(&["npx", "@herb-tools/linter", "app/views/foo.html.erb"])).is_allow());
        assert!(classify(&v(&["npx", "eslint", "src/"])).is_allow());
        assert!(classify(&v(&["npx", "karma", "start"])).is_allow());
        assert!(classify(&v(&["npx", "--yes", "eslint", "src/"])).is_allow());
        assert!(classify(&v(&["npx", "-y", "@herb-tools/linter", "."])).is_allow());
        assert!(classify(&v(&[
            "npx", "--package", "@herb-tools/linter", "@herb-tools/linter", "."
        ]))
        .is_allow());
        assert!(classify(&v(&["npx", "--", "eslint", "src/"])).is_allow());
    }

    #[test]
    fn unlisted_tools_denied() {
        assert!(classify(&v(&["npx", "react-scripts", "start"])).is_deny());
        assert!(classify(&v(&["npx", "cowsay", "hello"])).is_deny());
    }

    #[test]
    fn bare_npx_denied() {
        assert!(classify(&v(&["npx"])).is_deny());
        assert!(classify(&v(&["npx", "--yes"])).is_deny());
    }
}
