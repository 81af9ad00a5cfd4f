//! `git` policy: a leading run of `-C DIR` is accepted, then the
//! subcommand must be read-only.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::output::Decision;

static READ_ONLY_SUBCOMMANDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "log",
        "diff",
        "show",
        "status",
        "fetch",
        "ls-tree",
        "ls-files",
        "grep",
        "rev-parse",
        "rev-list",
        "merge-base",
        "merge-tree",
        "cat-file",
        "blame",
        "shortlog",
        "describe",
        "reflog",
        "help",
        "--version",
        "--help",
    ]
    .into_iter()
    .collect()
});

static LISTING_FLAGS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["-l", "--list", "-v", "--contains"].into_iter().collect());

pub fn classify(argv: &[String]) -> Decision {
    let mut idx = 1;
    while argv.get(idx).map(String::as_str) == Some("-C") {
        if argv.get(idx + 1).is_none() {
            return Decision::deny("git-flag", "git -C requires a directory argument");
        }
        idx += 2;
    }

    let Some(subcommand) = argv.get(idx) else {
        return Decision::deny("git-no-subcommand", "git invoked without a subcommand");
    };

    if subcommand == "-c" {
        return Decision::deny("git-config-override", "git -c mutates effective configuration");
    }

    match subcommand.as_str() {
        s if READ_ONLY_SUBCOMMANDS.contains(s) => Decision::allow(format!("git {s} is read-only")),
        "remote" => classify_remote(&argv[idx + 1..]),
        "branch" => classify_listing_only(&argv[idx + 1..], "branch"),
        "tag" => classify_listing_only(&argv[idx + 1..], "tag"),
        "config" => classify_config(&argv[idx + 1..]),
        other => Decision::deny(
            "git-subcommand",
            format!("git {other} is not an allowed read-only subcommand"),
        ),
    }
}

fn classify_remote(rest: &[String]) -> Decision {
    match rest.first().map(String::as_str) {
        None => Decision::allow("git remote with no arguments lists remotes"),
        Some("-v") => Decision::allow("git remote -v is read-only"),
        Some(action @ ("show" | "get-url")) => {
            Decision::allow(format!("git remote {action} is read-only"))
        }
        Some(other) => Decision::deny("git-remote", format!("git remote {other} mutates remotes")),
    }
}

fn classify_listing_only(rest: &[String], name: &str) -> Decision {
    if rest.iter().all(|a| LISTING_FLAGS.contains(a.as_str())) {
        Decision::allow(format!("git {name} is a listing-only invocation"))
    } else {
        Decision::deny(
            "git-mutating",
            format!("git {name} with these arguments may create or delete"),
        )
    }
}

fn classify_config(rest: &[String]) -> Decision {
    if rest.is_empty() {
        return Decision::deny("git-config", "git config with no arguments is ambiguous");
    }
    const WRITE_FLAGS: &[&str] = &[
        "--unset",
        "--unset-all",
        "--add",
        "--replace-all",
        "--remove-section",
        "--rename-section",
    ];
    if rest.iter().any(|a| WRITE_FLAGS.contains(&a.as_str())) {
        return Decision::deny("git-config", "git config with a write flag mutates configuration");
    }
    let positionals = rest.iter().filter(|a| !a.starts_with('-')).count();
    if positionals > 1 {
        return Decision::deny("git-config", "git config KEY VALUE sets configuration");
    }
    Decision::allow("git config read is read-only")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn leading_dash_c_is_accepted() {
        assert!(classify(&v(&["git", "-C", "/some/repo", "-C", "nested", "log"])).is_allow());
    }

    #[test]
    fn dash_c_config_override_is_denied() {
        assert!(classify(&v(&["git", "-c", "user.name=foo", "log"])).is_deny());
    }

    #[test]
    fn read_only_subcommands_allowed() {
        for sub in ["log", "diff", "show", "status", "--version"] {
            assert!(classify(&v(&["git", sub])).is_allow(), "git {sub} should be allowed");
        }
    }

    #[test]
    fn mutating_subcommands_denied() {
        for argv in [
            vec!["git", "push"],
            vec!["git", "reset", "--hard", "HEAD~1"],
            vec!["git", "add", "."],
            vec!["git", "commit", "-m", "test"],
            vec!["git", "checkout", "--", "file.rb"],
            vec!["git", "rebase", "origin/master"],
            vec!["git", "stash"],
            vec!["git", "rm", "file.rb"],
        ] {
            assert!(classify(&v(&argv)).is_deny(), "{argv:?} should be denied");
        }
    }

    #[test]
    fn remote_listing_allowed_mutating_denied() {
        assert!(classify(&v(&["git", "remote"])).is_allow());
        assert!(classify(&v(&["git", "remote", "-v"])).is_allow());
        assert!(classify(&v(&["git", "remote", "show", "origin"])).is_allow());
        assert!(classify(&v(&["git", "remote", "get-url", "origin"])).is_allow());
        assert!(classify(&v(&["git", "remote", "add", "upstream", "url"])).is_deny());
        assert!(classify(&v(&["git", "remote", "remove", "upstream"])).is_deny());
        assert!(classify(&v(&["git", "remote", "rename", "origin", "upstream"])).is_deny());
    }

    #[test]
    fn branch_listing_allowed_mutating_denied() {
        assert!(classify(&v(&["git", "branch"])).is_allow());
        assert!(classify(&v(&["git", "branch", "-D", "feature"])).is_deny());
    }

    #[test]
    fn bare_git_is_denied() {
        assert!(classify(&v(&["git"])).is_deny());
    }
}
