use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unexpected end of input, expected '{exp}'")]
    UnexpectedEof { exp: char },

    #[error("Expected '{exp}', but got '{got}'")]
    UnexpectedToken { exp: char, got: char },

    #[error("Unexpected trailing input \"{rest}\"")]
    TrailingInput { rest: String },
}

/// Consumes the slice until a non-ascii whitespace character is reached.
pub fn take_ws(bytes: &[u8]) -> &[u8] {
    let i = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());

    &bytes[i..]
}

/// Takes the next character from the slice. If none is found, the slice is left as-is.
pub const fn take_1(bytes: &[u8]) -> (Option<u8>, &[u8]) {
    let [b, bytes @ ..] = bytes else {
        return (None, bytes);
    };

    (Some(*b), bytes)
}

/// Like `take_1`, but doesn't consume the token
pub fn peek_1(bytes: &[u8]) -> Option<u8> {
    let [b, _bytes @ ..] = bytes else { return None };

    Some(*b)
}

/// Consumes the next character only if it satisfies `P`.
pub fn take_if<P>(p: P, bytes: &[u8]) -> (Option<u8>, &[u8])
where
    P: Fn(u8) -> bool,
{
    match peek_1(bytes) {
        Some(b) if p(b) => take_1(bytes),
        _ => (None, bytes),
    }
}

/// Expects the next character in `bytes` to be `b`. Otherwise leaves `bytes` unchanged.
pub fn expect(b: u8, bytes: &[u8]) -> ParseResult<&[u8]> {
    let (Some(a), bytes) = take_1(bytes) else {
        return Err(ParseError::UnexpectedEof { exp: b as char });
    };

    if a != b {
        return Err(ParseError::UnexpectedToken {
            exp: b as char,
            got: a as char,
        });
    }

    Ok(bytes)
}

/// Succeeds if nothing but whitespace is left.
pub fn expect_end(bytes: &[u8]) -> ParseResult<()> {
    let rest = take_ws(bytes);

    if rest.is_empty() {
        Ok(())
    } else {
        Err(ParseError::TrailingInput {
            rest: String::from_utf8_lossy(rest).to_string(),
        })
    }
}

/// Split `bytes` right before the first byte satisfying `P`. If no byte does, everything is
/// taken.
#[inline]
pub fn take_until_fn<P>(p: P, bytes: &[u8]) -> (&[u8], &[u8])
where
    P: Fn(u8) -> bool,
{
    let i = bytes.iter().position(|&a| p(a)).unwrap_or(bytes.len());

    bytes.split_at(i)
}

/// Advance the slice until byte `b` is found, without consuming it.
pub fn take_until(b: u8, bytes: &[u8]) -> (&[u8], &[u8]) {
    take_until_fn(|a| a == b, bytes)
}

/// Like `take_until`, but stops at the first ascii whitespace character found, without consuming it.
pub fn take_until_ws(bytes: &[u8]) -> (&[u8], &[u8]) {
    take_until_fn(|a| a.is_ascii_whitespace(), bytes)
}
