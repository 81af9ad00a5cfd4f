//! Engine-level integration tests, exercised through the public `decide()`
//! API rather than any single module in isolation.

use claude_guardgate::engine::decide;

#[test]
fn flat_allowlisted_utilities_are_allowed() {
    for cmd in [
        "grep foo file.txt",
        "cat README.md",
        "ls -la /tmp",
        "jq '.foo' data.json",
        "find . -name '*.rs'",
        "wc -l file.txt",
    ] {
        assert!(decide(cmd).is_allow(), "{cmd} should be allowed");
    }
}

#[test]
fn destructive_commands_are_denied_by_default() {
    for cmd in [
        "rm -rf /",
        "dd if=/dev/zero of=/dev/sda",
        "mkfs.ext4 /dev/sda1",
        "shutdown -h now",
        "chmod -R 777 /",
    ] {
        assert!(decide(cmd).is_deny(), "{cmd} should be denied");
    }
}

#[test]
fn pipes_chains_and_logical_operators_all_require_every_stage_to_pass() {
    assert!(decide("grep foo file | head -5 | wc -l").is_allow());
    assert!(decide("git log && git diff").is_allow());
    assert!(decide("git status; git log").is_allow());
    assert!(decide("git log || echo fallback").is_allow());

    assert!(decide("grep foo file | rm -rf /").is_deny());
    assert!(decide("git log && rm -rf /").is_deny());
    assert!(decide("echo hi; rm -rf /").is_deny());
}

#[test]
fn wrapper_layers_compose_and_still_enforce_the_inner_policy() {
    assert!(decide("time git log").is_allow());
    assert!(decide("timeout 30 git status").is_allow());
    assert!(decide("timeout 30 git push").is_deny());
    assert!(decide("env RAILS_ENV=test bundle exec rspec").is_allow());
    assert!(decide("xargs grep foo").is_allow());
    assert!(decide(r#"bash -c "git log | head -1""#).is_allow());
    assert!(decide(r#"sh -c "rm -rf /tmp""#).is_deny());
}

#[test]
fn substitutions_redirections_and_backgrounding_are_always_denied() {
    for cmd in [
        "echo $(whoami)",
        "echo `id`",
        "cat secret > /tmp/leak",
        "cat < /etc/shadow",
        "echo hi 2> /tmp/err",
        "sleep 300 &",
        "cat <(echo hi)",
    ] {
        assert!(decide(cmd).is_deny(), "{cmd} should be denied");
    }
}

#[test]
fn malformed_shell_syntax_is_denied_not_panicked() {
    assert!(decide("echo 'unterminated").is_deny());
    assert!(decide("echo \"unterminated").is_deny());
    assert!(decide(r"echo trailing\").is_deny());
    assert!(decide("").is_deny());
    assert!(decide("   ").is_deny());
}

#[test]
fn decide_is_a_pure_function_of_its_input() {
    let cmd = "git -C /repo log --oneline -5";
    let a = decide(cmd);
    let b = decide(cmd);
    assert_eq!(a.is_allow(), b.is_allow());
}

#[test]
fn environment_assignments_never_change_the_decision_of_the_underlying_command() {
    let pairs = [
        ("bundle exec rspec", "RAILS_ENV=test bundle exec rspec"),
        ("rm -rf /", "RACK_ENV=test rm -rf /"),
        ("git log", "A=1 B=2 git log"),
    ];
    for (bare, prefixed) in pairs {
        assert_eq!(
            decide(bare).is_allow(),
            decide(prefixed).is_allow(),
            "{prefixed} should match {bare}"
        );
    }
}
