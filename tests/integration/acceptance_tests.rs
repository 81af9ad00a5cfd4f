//! Golden-file acceptance suite: replays the reference scenarios from the
//! policy specification directly against the public `decide()` entry
//! point. Organized by utility/wrapper, one table per concern, so a
//! regression in one policy doesn't hide a regression in another.

use claude_guardgate::engine::decide;

fn allow(cases: &[&str]) {
    for cmd in cases {
        assert!(decide(cmd).is_allow(), "expected allow: {cmd}");
    }
}

fn deny(cases: &[&str]) {
    for cmd in cases {
        assert!(decide(cmd).is_deny(), "expected deny: {cmd}");
    }
}

#[test]
fn pipelines_and_chains() {
    allow(&["grep foo file.txt | head -5"]);
    deny(&["cat file | rm -rf /"]);
}

#[test]
fn shell_c_wrapper() {
    allow(&[r#"bash -c "cat file | head -5""#]);
    deny(&["bash script.sh"]);
}

#[test]
fn gh_policy() {
    deny(&["gh api repos/o/r/pulls/1 -X PATCH -f body=x"]);
    allow(&["gh api repos/o/r/contents/f --jq '.content' | base64 -d | head -50"]);
}

#[test]
fn git_policy() {
    allow(&["git -C /some/repo -C nested log"]);
    deny(&["git -c user.name=foo log"]);
}

#[test]
fn environment_prefix_transparency() {
    allow(&["RAILS_ENV=test bundle exec rspec"]);
    deny(&["RACK_ENV=test rm -rf /"]);
}

#[test]
fn timeout_wrapper() {
    deny(&["timeout 120 git push origin main"]);
}

#[test]
fn npx_allowlist() {
    allow(&["npx --package @herb-tools/linter @herb-tools/linter ."]);
    deny(&["npx cowsay hello"]);
}

#[test]
fn xargs_wrapper() {
    allow(&["xargs npx @herb-tools/linter"]);
    deny(&["xargs npx cowsay"]);
}

#[test]
fn jj_policy() {
    allow(&["jj log", "jj diff", "jj st", "jj op log", "jj config get user.name"]);
    deny(&["jj new", "jj squash", "jj git push", "jj rebase -d main"]);
}

#[test]
fn yarn_npm_bundle_policies() {
    allow(&["yarn test", "yarn run test:unit"]);
    deny(&["yarn add react", "yarn install"]);

    allow(&["npm view react version"]);
    deny(&["npm install react", "npm run build", "npm test"]);

    allow(&["bundle exec rspec spec/models", "bundle list"]);
    deny(&["bundle exec rails console", "bundle exec rake db:drop", "bundle install"]);
}

#[test]
fn mise_asdf_gem_brew_cargo_policies() {
    allow(&["mise ls", "mise current"]);
    deny(&["mise install ruby@3.4", "mise exec -- ruby foo.rb"]);

    allow(&["asdf current ruby", "asdf plugin list"]);
    deny(&["asdf install ruby 3.4.0", "asdf plugin add ruby"]);

    allow(&["gem list", "gem environment"]);
    deny(&["gem install rails", "gem push mygem.gem"]);

    allow(&["brew list", "brew info node"]);
    deny(&["brew install node", "brew services restart postgresql"]);

    allow(&["cargo clippy", "cargo test", "cargo build"]);
    deny(&["cargo install ripgrep", "cargo publish"]);
}

#[test]
fn unknown_utilities_default_deny() {
    deny(&["curl http://example.com", "wget http://example.com/x", "perl -e 'print 1'"]);
}
