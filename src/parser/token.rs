//! Shell-syntax tokenizer.
//!
//! Splits a command line into words and operators. Anything the policy
//! layer cannot safely reason about — redirections, substitutions,
//! backgrounding — is denied on sight rather than tokenized.

use std::fmt;

/// A single token produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An unquoted shell word; quotes are stripped and escapes resolved.
    Word(String),
    Pipe,
    AndIf,
    OrIf,
    Semicolon,
}

/// Why tokenization (or, later, segmentation) refused to produce output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnterminatedSingleQuote,
    UnterminatedDoubleQuote,
    TrailingBackslash,
    DisallowedMetacharacter(char),
    DisallowedBackground,
    DisallowedSubstitution,
    EmptyCommand,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnterminatedSingleQuote => write!(f, "unterminated single quote"),
            ParseError::UnterminatedDoubleQuote => write!(f, "unterminated double quote"),
            ParseError::TrailingBackslash => write!(f, "command ends with a trailing backslash"),
            ParseError::DisallowedMetacharacter(c) => {
                write!(f, "disallowed metacharacter '{c}'")
            }
            ParseError::DisallowedBackground => write!(f, "backgrounded command ('&')"),
            ParseError::DisallowedSubstitution => write!(f, "command or process substitution"),
            ParseError::EmptyCommand => write!(f, "empty command"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Tokenize `input` per the module docs. ASCII space/tab are the only
/// whitespace; ASCII `'`/`"` are the only quote characters.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0usize;
    let mut current: Option<String> = None;

    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' => {
                if let Some(word) = current.take() {
                    tokens.push(Token::Word(word));
                }
                i += 1;
            }
            '|' => {
                if let Some(word) = current.take() {
                    tokens.push(Token::Word(word));
                }
                if chars.get(i + 1) == Some(&'|') {
                    tokens.push(Token::OrIf);
                    i += 2;
                } else {
                    tokens.push(Token::Pipe);
                    i += 1;
                }
            }
            '&' => {
                if chars.get(i + 1) == Some(&'&') {
                    if let Some(word) = current.take() {
                        tokens.push(Token::Word(word));
                    }
                    tokens.push(Token::AndIf);
                    i += 2;
                } else {
                    return Err(ParseError::DisallowedBackground);
                }
            }
            ';' => {
                if let Some(word) = current.take() {
                    tokens.push(Token::Word(word));
                }
                tokens.push(Token::Semicolon);
                i += 1;
            }
            '>' | '<' => return Err(ParseError::DisallowedMetacharacter(c)),
            '`' => return Err(ParseError::DisallowedSubstitution),
            '$' if chars.get(i + 1) == Some(&'(') => return Err(ParseError::DisallowedSubstitution),
            '\'' => {
                i += 1;
                let buf = current.get_or_insert_with(String::new);
                loop {
                    match chars.get(i) {
                        Some('\'') => {
                            i += 1;
                            break;
                        }
                        Some(&ch) => {
                            buf.push(ch);
                            i += 1;
                        }
                        None => return Err(ParseError::UnterminatedSingleQuote),
                    }
                }
            }
            '"' => {
                i += 1;
                let buf = current.get_or_insert_with(String::new);
                loop {
                    match chars.get(i) {
                        Some('"') => {
                            i += 1;
                            break;
                        }
                        Some('\\') => match chars.get(i + 1) {
                            Some(&next @ ('"' | '\\')) => {
                                buf.push(next);
                                i += 2;
                            }
                            Some(&next) => {
                                buf.push('\\');
                                buf.push(next);
                                i += 2;
                            }
                            None => return Err(ParseError::UnterminatedDoubleQuote),
                        },
                        Some(&ch) => {
                            buf.push(ch);
                            i += 1;
                        }
                        None => return Err(ParseError::UnterminatedDoubleQuote),
                    }
                }
            }
            '\\' => match chars.get(i + 1) {
                Some(&next) => {
                    current.get_or_insert_with(String::new).push(next);
                    i += 2;
                }
                None => return Err(ParseError::TrailingBackslash),
            },
            _ => {
                current.get_or_insert_with(String::new).push(c);
                i += 1;
            }
        }
    }

    if let Some(word) = current.take() {
        tokens.push(Token::Word(word));
    }

    Ok(tokens)
}
