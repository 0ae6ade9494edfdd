//! Small glob matcher for navigation-target URLs.
//!
//! Supported syntax, matched against the raw URL string:
//! - `*` matches any run of characters within one `/`-delimited segment
//! - `**` matches any run of characters, crossing segment boundaries
//! - `@(a|b|c)` matches exactly one of the listed literals
//! - `{a,b}` expands the pattern into one branch per alternative
//!
//! There is no URL canonicalization here; this is routing policy, not a
//! security boundary. A pattern that fails to parse matches nothing.

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    /// `*`: any characters except the segment separator.
    AnySegment,
    /// `**`: any characters, including the segment separator.
    AnyPath,
    /// `@(a|b|c)`: one of the listed literals.
    Alternation(Vec<String>),
}

#[derive(Debug, Clone)]
pub(crate) struct UrlPattern {
    branches: Vec<Vec<Token>>,
}

impl UrlPattern {
    /// Compiles a pattern, returning `None` for malformed input
    /// (unbalanced braces or an unterminated alternation group).
    pub(crate) fn parse(pattern: &str) -> Option<UrlPattern> {
        let branches = expand_braces(pattern)?
            .iter()
            .map(|branch| tokenize(branch))
            .collect::<Option<Vec<_>>>()?;
        Some(UrlPattern { branches })
    }

    pub(crate) fn matches(&self, input: &str) -> bool {
        self.branches
            .iter()
            .any(|tokens| match_tokens(tokens, input))
    }
}

/// Expands every `{a,b}` group into its alternatives, producing one plain
/// pattern string per combination. Returns `None` on unbalanced braces.
fn expand_braces(pattern: &str) -> Option<Vec<String>> {
    let Some(open) = pattern.find('{') else {
        if pattern.contains('}') {
            return None;
        }
        return Some(vec![pattern.to_string()]);
    };

    let prefix = &pattern[..open];
    let mut depth = 0usize;
    let mut alternatives = Vec::new();
    let mut current = String::new();
    let mut rest_start = None;

    for (offset, ch) in pattern[open..].char_indices() {
        match ch {
            '{' => {
                depth += 1;
                if depth > 1 {
                    current.push(ch);
                }
            }
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    alternatives.push(current.clone());
                    rest_start = Some(open + offset + 1);
                    break;
                }
                current.push(ch);
            }
            ',' if depth == 1 => {
                alternatives.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    let rest = &pattern[rest_start?..];
    let mut expanded = Vec::new();
    for alternative in &alternatives {
        for tail in expand_braces(&format!("{alternative}{rest}"))? {
            expanded.push(format!("{prefix}{tail}"));
        }
    }
    Some(expanded)
}

fn tokenize(pattern: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    let flush = |literal: &mut String, tokens: &mut Vec<Token>| {
        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(literal)));
        }
    };

    while let Some(ch) = chars.next() {
        match ch {
            '*' => {
                flush(&mut literal, &mut tokens);
                if chars.peek() == Some(&'*') {
                    chars.next();
                    // Runs of three or more stars collapse into `**`.
                    while chars.peek() == Some(&'*') {
                        chars.next();
                    }
                    tokens.push(Token::AnyPath);
                } else {
                    tokens.push(Token::AnySegment);
                }
            }
            '@' if chars.peek() == Some(&'(') => {
                chars.next();
                flush(&mut literal, &mut tokens);
                let mut group = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == ')' {
                        closed = true;
                        break;
                    }
                    group.push(inner);
                }
                if !closed {
                    return None;
                }
                tokens.push(Token::Alternation(
                    group.split('|').map(str::to_string).collect(),
                ));
            }
            _ => literal.push(ch),
        }
    }
    flush(&mut literal, &mut tokens);
    Some(tokens)
}

fn match_tokens(tokens: &[Token], input: &str) -> bool {
    let Some((token, rest)) = tokens.split_first() else {
        return input.is_empty();
    };

    match token {
        Token::Literal(literal) => input
            .strip_prefix(literal.as_str())
            .is_some_and(|remaining| match_tokens(rest, remaining)),
        Token::Alternation(alternatives) => alternatives.iter().any(|alternative| {
            input
                .strip_prefix(alternative.as_str())
                .is_some_and(|remaining| match_tokens(rest, remaining))
        }),
        Token::AnySegment => {
            let mut offset = 0;
            loop {
                if match_tokens(rest, &input[offset..]) {
                    return true;
                }
                match input[offset..].chars().next() {
                    Some(ch) if ch != '/' => offset += ch.len_utf8(),
                    _ => return false,
                }
            }
        }
        Token::AnyPath => {
            let mut offset = 0;
            loop {
                if match_tokens(rest, &input[offset..]) {
                    return true;
                }
                match input[offset..].chars().next() {
                    Some(ch) => offset += ch.len_utf8(),
                    None => return false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, input: &str) -> bool {
        UrlPattern::parse(pattern)
            .expect("pattern parses")
            .matches(input)
    }

    #[test]
    fn literal_patterns_match_exactly() {
        assert!(matches("https://example.com/", "https://example.com/"));
        assert!(!matches("https://example.com/", "https://example.com/a"));
        assert!(!matches("https://example.com/", "https://example.com"));
    }

    #[test]
    fn single_star_stays_within_a_segment() {
        assert!(matches("http://www.google.*/logout", "http://www.google.de/logout"));
        assert!(matches("http://www.google.*/logout", "http://www.google.co/logout"));
        assert!(!matches(
            "http://www.google.*/logout",
            "http://www.google.co.uk/extra/logout"
        ));
    }

    #[test]
    fn single_star_matches_empty_run() {
        assert!(matches("a*b", "ab"));
        assert!(matches("a*b", "axyzb"));
        assert!(!matches("a*b", "a/b"));
    }

    #[test]
    fn double_star_crosses_segments() {
        assert!(matches("https://host/**", "https://host/a/b/c"));
        assert!(matches("https://host/**", "https://host/"));
        assert!(matches("https://host**", "https://host?query=1"));
    }

    #[test]
    fn alternation_matches_one_literal() {
        assert!(matches("pre@(one|two)post", "preonepost"));
        assert!(matches("pre@(one|two)post", "pretwopost"));
        assert!(!matches("pre@(one|two)post", "prethreepost"));
        assert!(!matches("pre@(one|two)post", "prepost"));
    }

    #[test]
    fn braces_expand_into_branches() {
        assert!(matches("https://{a,b}.example.com/", "https://a.example.com/"));
        assert!(matches("https://{a,b}.example.com/", "https://b.example.com/"));
        assert!(!matches("https://{a,b}.example.com/", "https://c.example.com/"));
    }

    #[test]
    fn brace_alternatives_may_contain_wildcards() {
        let pattern = UrlPattern::parse("https://host{**/**,**}").expect("pattern parses");
        assert!(pattern.matches("https://host"));
        assert!(pattern.matches("https://host/u/0/"));
        assert!(pattern.matches("https://host?x=1"));
    }

    #[test]
    fn malformed_patterns_fail_to_parse() {
        assert!(UrlPattern::parse("https://host{a,b").is_none());
        assert!(UrlPattern::parse("https://host}a{").is_none());
        assert!(UrlPattern::parse("pre@(one|two").is_none());
    }

    #[test]
    fn matching_is_idempotent() {
        let pattern = UrlPattern::parse("https://host/@(a|b)**").expect("pattern parses");
        let url = "https://host/a/deep/path";
        assert_eq!(pattern.matches(url), pattern.matches(url));
    }

    #[test]
    fn non_ascii_input_does_not_panic() {
        assert!(matches("https://host/**", "https://host/ünïcødé/päth"));
        assert!(!matches("https://host/*", "https://host/ü/x"));
    }
}
