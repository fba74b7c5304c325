//! Input clean-up ahead of token extraction.

/// Uppercase `input`, blank out every character that cannot be part of a
/// coordinate, collapse whitespace runs to one space, and trim.
///
/// Kept characters: ASCII digits, `.`, `-`, `,`, the marks `°` `'` `"`,
/// the hemisphere letters `N S E W`, and whitespace.  Typographic primes
/// (`′` `″`) and the ordinal sign `º` are folded onto `'` `"` `°` first.
pub fn sanitize(input: &str) -> String {
    let upper = input.to_uppercase();
    let mut out = String::with_capacity(upper.len());
    let mut pending_space = false;

    for c in upper.chars().map(fold_mark) {
        if is_kept(c) && !c.is_whitespace() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}

fn fold_mark(c: char) -> char {
    match c {
        '\u{2032}' => '\'',
        '\u{2033}' => '"',
        '\u{00BA}' => '°',
        c => c,
    }
}

fn is_kept(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(c, '.' | '-' | ',' | '°' | '\'' | '"' | 'N' | 'S' | 'E' | 'W')
}
