//! Segmenter: groups a token stream into a chain of simple commands.

use crate::parser::token::{tokenize, ParseError, Token};

/// An ordered sequence of `NAME=VALUE` assignments followed by a non-empty
/// `argv`. Assignments are retained on the struct for completeness but are
/// never consulted by the policy layer — see the module docs on wrapper
/// unwrapping for why they're transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCommand {
    pub assignments: Vec<(String, String)>,
    pub argv: Vec<String>,
}

/// A non-empty ordered sequence of [`SimpleCommand`]; the operators that
/// joined them in the source text are discarded, since every element must
/// independently pass regardless of how it was combined.
pub type Chain = Vec<SimpleCommand>;

fn as_assignment(word: &str) -> Option<(String, String)> {
    let eq = word.find('=')?;
    let name = &word[..eq];
    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    if !chars.clone().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let _ = chars;
    Some((name.to_string(), word[eq + 1..].to_string()))
}

fn flush_words(words: &mut Vec<String>, chain: &mut Chain) -> Result<(), ParseError> {
    if words.is_empty() {
        return Ok(());
    }
    let mut assignments = Vec::new();
    let mut idx = 0;
    while idx < words.len() {
        match as_assignment(&words[idx]) {
            Some(pair) => {
                assignments.push(pair);
                idx += 1;
            }
            None => break,
        }
    }
    let argv: Vec<String> = words[idx..].to_vec();
    words.clear();
    if argv.is_empty() {
        return Err(ParseError::EmptyCommand);
    }
    chain.push(SimpleCommand { assignments, argv });
    Ok(())
}

/// Tokenize and segment `input` into a non-empty [`Chain`].
pub fn segment(input: &str) -> Result<Chain, ParseError> {
    let tokens = tokenize(input)?;
    let mut chain = Chain::new();
    let mut words: Vec<String> = Vec::new();

    for token in tokens {
        match token {
            Token::Word(w) => words.push(w),
            Token::Pipe | Token::AndIf | Token::OrIf | Token::Semicolon => {
                flush_words(&mut words, &mut chain)?;
            }
        }
    }
    flush_words(&mut words, &mut chain)?;

    if chain.is_empty() {
        return Err(ParseError::EmptyCommand);
    }

    Ok(chain)
}
