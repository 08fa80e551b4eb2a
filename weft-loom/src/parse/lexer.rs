//! Token scanner for weft markup
//!
//! Splits raw markup into text runs, open tags, and close tags using nom
//! combinators. Scanning is lenient: a `<` that does not scan as a
//! syntactically valid tag is literal text. Whether an open tag's name is
//! actually registered is the parser driver's concern, not the scanner's.
//!
//! Grammar handled here:
//! - open tag: `<name:arg:arg>` with colon-delimited arguments
//! - close tag: `</name>`
//! - arguments: unquoted (no `:` `<` `>` `'` `"` `\`), or quoted with `'`
//!   or `"` where `\'`, `\"` and `\\` are escapes
//! - text: everything else; `\<` and `\\` are escapes

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::char,
    multi::many0,
    sequence::{delimited, preceded},
    IResult,
};

/// One lexical unit of a markup document.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A run of literal text, escapes already resolved.
    Text(String),
    /// A tag invocation: name as written, plus its raw argument tokens.
    Open { name: String, args: Vec<String> },
    /// A close tag: `</name>`.
    Close { name: String },
}

fn tag_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-')(input)
}

fn unquoted_argument(input: &str) -> IResult<&str, String> {
    let (rest, value) =
        take_while(|c: char| !matches!(c, ':' | '<' | '>' | '\'' | '"' | '\\'))(input)?;
    Ok((rest, value.to_string()))
}

/// Quoted argument body: `\'`, `\"` and `\\` unescape, any other backslash
/// sequence stays literal.
fn quoted_argument(quote: char) -> impl Fn(&str) -> IResult<&str, String> {
    move |input: &str| {
        let (input, _) = char(quote)(input)?;
        let mut value = String::new();
        let mut chars = input.char_indices();

        while let Some((index, c)) = chars.next() {
            if c == quote {
                return Ok((&input[index + c.len_utf8()..], value));
            }
            if c == '\\' {
                match chars.next() {
                    Some((_, escaped @ ('\'' | '"' | '\\'))) => value.push(escaped),
                    Some((_, other)) => {
                        value.push('\\');
                        value.push(other);
                    }
                    None => break,
                }
            } else {
                value.push(c);
            }
        }

        // Unterminated quote: not an argument
        Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        )))
    }
}

fn argument(input: &str) -> IResult<&str, String> {
    alt((
        quoted_argument('\''),
        quoted_argument('"'),
        unquoted_argument,
    ))(input)
}

fn open_tag(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('<')(input)?;
    let (input, name) = tag_name(input)?;
    let (input, args) = many0(preceded(char(':'), argument))(input)?;
    let (input, _) = char('>')(input)?;

    Ok((
        input,
        Token::Open {
            name: name.to_string(),
            args,
        },
    ))
}

fn close_tag(input: &str) -> IResult<&str, Token> {
    let (input, name) = delimited(tag("</"), tag_name, char('>'))(input)?;
    Ok((
        input,
        Token::Close {
            name: name.to_string(),
        },
    ))
}

/// Scan `input` into a token stream. Never fails: anything that does not
/// scan as a tag is literal text.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut rest = input;

    while !rest.is_empty() {
        if rest.starts_with('<') {
            let scanned = if rest.starts_with("</") {
                close_tag(rest)
            } else {
                open_tag(rest)
            };
            if let Ok((remaining, token)) = scanned {
                if !text.is_empty() {
                    tokens.push(Token::Text(std::mem::take(&mut text)));
                }
                tokens.push(token);
                rest = remaining;
                continue;
            }
        }

        let mut chars = rest.chars();
        let c = chars.next().expect("rest is non-empty");
        if c == '\\' {
            match chars.next() {
                Some(escaped @ ('<' | '\\')) => {
                    text.push(escaped);
                    rest = &rest[1 + escaped.len_utf8()..];
                }
                _ => {
                    text.push('\\');
                    rest = &rest[1..];
                }
            }
        } else {
            text.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }
    tokens
}
