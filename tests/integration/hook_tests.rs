//! Integration tests for the hook JSON contract: parsing the envelope on
//! stdin and producing the envelope on stdout, independent of which
//! decision the engine itself reaches.

use claude_guardgate::{engine, Decision, HookInput, HookOutput};

fn run(json: &str) -> HookOutput {
    let input = HookInput::from_json(json).expect("valid envelope should parse");
    let decision = match input.command() {
        Some(cmd) => engine::decide(cmd),
        None => Decision::allow("not a Bash invocation"),
    };
    HookOutput::from_decision(&decision)
}

#[test]
fn allow_output_contains_the_load_bearing_discriminator() {
    let json = r#"{"tool_name":"Bash","tool_input":{"command":"git log"}}"#;
    let out = run(json).to_json();
    assert!(out.contains(r#""permissionDecision": "allow""#));
}

#[test]
fn deny_output_contains_deny_and_never_allow() {
    let json = r#"{"tool_name":"Bash","tool_input":{"command":"rm -rf /"}}"#;
    let out = run(json).to_json();
    assert!(out.contains(r#""permissionDecision": "deny""#));
    assert!(!out.contains(r#""permissionDecision": "allow""#));
}

#[test]
fn non_bash_tools_pass_straight_through_as_allow() {
    for json in [
        r#"{"tool_name":"Read","tool_input":{"file_path":"/etc/passwd"}}"#,
        r#"{"tool_name":"Edit","tool_input":{"file_path":"a.rs","old_string":"a","new_string":"b"}}"#,
        r#"{"tool_name":"Write","tool_input":{"file_path":"a.rs","content":"fn main() {}"}}"#,
        r#"{"tool_name":"WebFetch","tool_input":{"url":"https://example.com"}}"#,
    ] {
        let out = run(json).to_json();
        assert!(
            out.contains(r#""permissionDecision": "allow""#),
            "{json} should pass through as allow"
        );
    }
}

#[test]
fn malformed_json_is_a_parse_error_not_a_panic() {
    let malformed = r#"{"tool_name": "Bash", "tool_input": {"#;
    assert!(HookInput::from_json(malformed).is_err());
}

#[test]
fn session_id_is_preserved_when_present() {
    let json = r#"{"tool_name":"Bash","tool_input":{"command":"ls"},"session_id":"s-123"}"#;
    let input = HookInput::from_json(json).unwrap();
    assert_eq!(input.session_id.as_deref(), Some("s-123"));
}

#[test]
fn deny_carries_a_system_message_allow_does_not_require_one() {
    let deny_json = r#"{"tool_name":"Bash","tool_input":{"command":"rm -rf /"}}"#;
    let allow_json = r#"{"tool_name":"Bash","tool_input":{"command":"ls"}}"#;

    let deny_out = run(deny_json).to_json();
    let allow_out = run(allow_json).to_json();

    assert!(deny_out.contains("systemMessage"));
    let _ = allow_out; // allow's systemMessage is optional, not load-bearing
}
