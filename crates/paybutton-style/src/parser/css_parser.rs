//! CSS syntax parser using the `cssparser` crate.
//!
//! Rules are parsed into a selector plus raw declaration text. Values are not
//! interpreted; the browser does that. Keeping them as text is enough to
//! cascade declarations and to check generated stylesheets.

use cssparser::{
    Delimiter, ParseError as CssParseError, ParseErrorKind, Parser, ParserInput, Token,
};
use paybutton_core::logging::targets;

use crate::rules::{Declaration, StyleRule};
use crate::selector::{Combinator, Selector, SelectorPart};
use crate::{Error, Result};

/// Parse a CSS stylesheet string into a list of style rules.
///
/// Rules that fail to parse are skipped with a warning logged, and parsing
/// continues with the next rule. The returned rules carry incrementing
/// `order` values in source order.
///
/// # Example
///
/// ```
/// use paybutton_style::parse_css;
///
/// let rules = parse_css(".long { width: 240px; } .short { width: 160px; }").unwrap();
/// assert_eq!(rules.len(), 2);
/// ```
pub fn parse_css(css: &str) -> Result<Vec<StyleRule>> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = vec![];
    let mut order = 0u32;

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        match parse_rule(&mut parser, order) {
            Ok(rule) => {
                rules.push(rule);
                order += 1;
            }
            Err(e) => {
                tracing::warn!(target: targets::PARSER, "CSS parse error: {}", e);
                skip_to_next_rule(&mut parser);
            }
        }
    }

    Ok(rules)
}

/// Parse a single CSS rule: selector { declarations }
fn parse_rule<'i>(parser: &mut Parser<'i, '_>, order: u32) -> Result<StyleRule> {
    let selector = parser
        .parse_until_before(Delimiter::CurlyBracketBlock, |p| {
            parse_selector(p).map_err(|err| p.new_custom_error(err))
        })
        .map_err(into_style_error)?;

    let location = parser.current_source_location();
    let declarations = match parser.next() {
        Ok(Token::CurlyBracketBlock) => parser
            .parse_nested_block(|block_parser| parse_declarations(block_parser))
            .map_err(into_style_error)?,
        _ => {
            return Err(Error::parse(
                "Expected '{' after selector",
                location.line + 1,
                location.column,
            ));
        }
    };

    Ok(StyleRule::new(selector, declarations, order))
}

/// Parse a selector made of type/class compounds and `>`/whitespace combinators.
fn parse_selector(parser: &mut Parser<'_, '_>) -> Result<Selector> {
    let mut parts = vec![];
    let mut combinators = vec![];
    let mut current = SelectorPart::default();
    let mut pending: Option<Combinator> = None;

    parser.skip_whitespace();

    loop {
        let token = match parser.next_including_whitespace() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_) => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                    pending.get_or_insert(Combinator::Descendant);
                }
            }

            Token::Delim('>') => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
                if parts.is_empty() {
                    return Err(Error::invalid_selector(">", "Combinator without a left side"));
                }
                pending = Some(Combinator::Child);
            }

            Token::Ident(name) if current.is_empty() => {
                if let Some(combinator) = pending.take() {
                    combinators.push(combinator);
                }
                current.element = Some(name.to_string());
            }

            Token::Delim('.') => {
                let class = match parser.next_including_whitespace() {
                    Ok(Token::Ident(class)) => class.to_string(),
                    _ => {
                        return Err(Error::invalid_selector(".", "Expected class name after '.'"));
                    }
                };
                if current.is_empty() {
                    if let Some(combinator) = pending.take() {
                        combinators.push(combinator);
                    }
                }
                current.classes.push(class);
            }

            other => {
                return Err(Error::invalid_selector(
                    format!("{other:?}"),
                    "Unsupported selector syntax",
                ));
            }
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }

    if parts.is_empty() {
        return Err(Error::invalid_selector("", "Empty selector"));
    }
    if pending == Some(Combinator::Child) {
        return Err(Error::invalid_selector(">", "Combinator without a right side"));
    }

    Ok(Selector { parts, combinators })
}

/// Parse CSS declarations inside a `{ }` block.
fn parse_declarations<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Vec<Declaration>, CssParseError<'i, Error>> {
    let mut declarations = vec![];

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let name = match parser.expect_ident() {
            Ok(name) => name.to_string(),
            Err(_) => {
                skip_declaration(parser);
                continue;
            }
        };

        if parser.expect_colon().is_err() {
            tracing::warn!(target: targets::PARSER, "Missing ':' after property '{}'", name);
            skip_declaration(parser);
            continue;
        }

        let value = parser.parse_until_before(Delimiter::Semicolon, |p| {
            let start = p.position();
            while p.next().is_ok() {}
            Ok::<_, CssParseError<'i, Error>>(p.slice_from(start).trim().to_string())
        })?;

        // Skip optional semicolon
        let _ = parser.try_parse(|p| p.expect_semicolon());

        if value.is_empty() {
            tracing::warn!(target: targets::PARSER, "Empty value for property '{}'", name);
            continue;
        }
        declarations.push(Declaration::new(name, value));
    }

    Ok(declarations)
}

fn into_style_error(err: CssParseError<'_, Error>) -> Error {
    match err.kind {
        ParseErrorKind::Custom(inner) => inner,
        ParseErrorKind::Basic(basic) => {
            Error::parse(format!("{basic:?}"), err.location.line + 1, err.location.column)
        }
    }
}

/// Skip to the next rule (error recovery).
fn skip_to_next_rule(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::CurlyBracketBlock) => {
                // Block contents are skipped on the next call to `next`.
                return;
            }
            Err(_) => return,
            _ => {}
        }
    }
}

/// Skip to the end of the current declaration (error recovery).
fn skip_declaration(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Err(_) => return,
            _ => {}
        }
    }
}
