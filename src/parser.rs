//! The recursive descent engine that turns SNBT text into a [`Value`].
//!
//! The parser owns a byte-offset cursor and a nesting-depth counter, both
//! local to a single [`Parser::parse`] call, so independent parses never
//! share state and the engine is freely reentrant.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::{ByteArray, IntArray, LongArray, Value};

/// Options controlling a parse.
///
/// ```
/// use snbtlite::ParseOpts;
///
/// let opts = ParseOpts::new().max_depth(4);
/// assert!(snbtlite::parse_with_opts("{a:{b:{c:{d:1}}}}", opts).is_err());
/// assert!(snbtlite::parse("{a:{b:{c:{d:1}}}}").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOpts {
    max_depth: usize,
    strict: bool,
}

impl Default for ParseOpts {
    fn default() -> Self {
        Self {
            max_depth: 100,
            strict: false,
        }
    }
}

impl ParseOpts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nesting ceiling for compounds and arrays. Inputs nesting deeper than
    /// this fail with a depth error rather than exhausting the call stack.
    /// Defaults to 100.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Reserved for stricter grammar checking. Accepted so callers can set
    /// it ahead of time, but it does not currently alter parsing.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

/// Numeric literal before any typed-array conversion narrows it.
#[derive(Debug, Clone, Copy)]
enum Number {
    Double(f64),
    Long(i64),
}

impl Number {
    fn as_i8(self) -> i8 {
        match self {
            Number::Double(v) => v as i8,
            Number::Long(v) => v as i8,
        }
    }

    fn as_i32(self) -> i32 {
        match self {
            Number::Double(v) => v as i32,
            Number::Long(v) => v as i32,
        }
    }

    fn as_i64(self) -> i64 {
        match self {
            Number::Double(v) => v as i64,
            Number::Long(v) => v,
        }
    }
}

impl From<Number> for Value {
    fn from(num: Number) -> Self {
        match num {
            Number::Double(v) => Value::Double(v),
            Number::Long(v) => Value::Long(v),
        }
    }
}

/// A single-use SNBT parser over a borrowed input string. Most callers want
/// the [`parse`][`crate::parse`] family of functions instead; this type
/// exists for when the options need building once and reusing across calls.
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
    opts: ParseOpts,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_opts(input, ParseOpts::default())
    }

    pub fn with_opts(input: &'a str, opts: ParseOpts) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
            opts,
        }
    }

    /// Parse the whole input as one value. Trailing non-whitespace content
    /// after the value is an error; there is no partial output.
    pub fn parse(mut self) -> Result<Value> {
        self.skip_whitespace();
        let value = self.parse_value()?;
        self.skip_whitespace();

        if let Some(c) = self.peek() {
            return Err(Error::trailing_input(c, self.pos));
        }

        Ok(value)
    }

    // The depth counter increments for every value dispatched here, scalars
    // included, but only unwinds when a compound or array returns. The
    // default limit of 100 is tuned against that accounting, so keep the
    // two sides as they are.
    fn parse_value(&mut self) -> Result<Value> {
        self.check_depth()?;
        self.skip_whitespace();

        match self.peek() {
            Some('{') => {
                let value = self.parse_compound()?;
                self.depth -= 1;
                Ok(value)
            }
            Some('[') => {
                let value = self.parse_array()?;
                self.depth -= 1;
                Ok(value)
            }
            Some('"') | Some('\'') => Ok(Value::String(self.parse_quoted_string()?)),
            Some(c) if c.is_ascii_digit() || c == '-' || c == '+' => {
                Ok(self.parse_number()?.into())
            }
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                Ok(Value::String(self.parse_unquoted_string()?))
            }
            Some(c) => Err(Error::unexpected_char(c, self.pos)),
            None => Err(Error::unexpected_eof(self.pos)),
        }
    }

    fn parse_compound(&mut self) -> Result<Value> {
        self.expect('{')?;
        self.skip_whitespace();

        let mut compound = IndexMap::new();

        if self.peek() == Some('}') {
            self.advance();
            return Ok(Value::Compound(compound));
        }

        loop {
            self.skip_whitespace();

            let key = self.parse_key()?;
            self.skip_whitespace();
            self.expect(':')?;
            self.skip_whitespace();

            let value = self.parse_value()?;
            // A repeated key overwrites the value but keeps its original
            // position in the compound.
            compound.insert(key, value);

            self.skip_whitespace();

            match self.peek() {
                Some('}') => {
                    self.advance();
                    break;
                }
                Some(',') => {
                    self.advance();
                }
                _ => return Err(Error::bad_separator('}', self.pos)),
            }
        }

        Ok(Value::Compound(compound))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.expect('[')?;
        self.skip_whitespace();

        // A lone letter immediately followed by ';' switches to typed-array
        // mode. A letter followed by anything else is an ordinary bareword
        // list element, e.g. [Bob] is a list.
        if let (Some(tag), Some(';')) = (self.peek(), self.peek_second()) {
            if tag.is_ascii_alphabetic() {
                if !matches!(tag, 'B' | 'I' | 'L') {
                    return Err(Error::unknown_array_type(tag, self.pos));
                }
                self.advance();
                self.advance();
                return self.parse_typed_array(tag);
            }
        }

        self.parse_list()
    }

    fn parse_typed_array(&mut self, tag: char) -> Result<Value> {
        let mut values = Vec::new();
        self.skip_whitespace();

        if self.peek() == Some(']') {
            self.advance();
            return Ok(make_typed_array(tag, values));
        }

        loop {
            self.skip_whitespace();
            values.push(self.parse_number()?);
            self.skip_whitespace();

            match self.peek() {
                Some(']') => {
                    self.advance();
                    break;
                }
                Some(',') => {
                    self.advance();
                }
                _ => return Err(Error::bad_separator(']', self.pos)),
            }
        }

        Ok(make_typed_array(tag, values))
    }

    fn parse_list(&mut self) -> Result<Value> {
        let mut list: Vec<Value> = Vec::new();

        if self.peek() == Some(']') {
            self.advance();
            return Ok(Value::List(list));
        }

        loop {
            self.skip_whitespace();

            // A leading digit is ambiguous: `0:` addresses an explicit list
            // index, bare `0` is a numeric element. One token of lookahead
            // past the number settles it.
            let mut index = list.len();
            if matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                let start = self.pos;
                let token = self.parse_unquoted_string()?;

                if self.peek() == Some(':') {
                    index = leading_index(&token)
                        .ok_or_else(|| Error::invalid_number(&token, start))?;
                    self.advance();
                    self.skip_whitespace();
                } else {
                    // It was a value after all, not an index.
                    let num = float_prefix(&token)
                        .ok_or_else(|| Error::invalid_number(&token, start))?;
                    list.push(Value::Double(num));
                    self.skip_whitespace();

                    match self.peek() {
                        Some(']') => {
                            self.advance();
                            break;
                        }
                        Some(',') => {
                            self.advance();
                            continue;
                        }
                        _ => return Err(Error::bad_separator(']', self.pos)),
                    }
                }
            }

            let value = self.parse_value()?;
            store_at(&mut list, index, value);

            self.skip_whitespace();

            match self.peek() {
                Some(']') => {
                    self.advance();
                    break;
                }
                Some(',') => {
                    self.advance();
                }
                _ => return Err(Error::bad_separator(']', self.pos)),
            }
        }

        Ok(Value::List(list))
    }

    fn parse_key(&mut self) -> Result<String> {
        self.skip_whitespace();

        match self.peek() {
            Some('"') | Some('\'') => self.parse_quoted_string(),
            _ => self.parse_unquoted_string(),
        }
    }

    fn parse_quoted_string(&mut self) -> Result<String> {
        let quote = match self.advance() {
            Some(q) => q,
            None => return Err(Error::unexpected_eof(self.pos)),
        };

        let mut result = String::new();

        loop {
            match self.advance() {
                None => return Err(Error::unterminated_string(self.pos)),
                Some(c) if c == quote => return Ok(result),
                Some('\\') => match self.advance() {
                    None => return Err(Error::unterminated_string(self.pos)),
                    Some('n') => result.push('\n'),
                    Some('t') => result.push('\t'),
                    Some('r') => result.push('\r'),
                    // Covers \\ and both quotes; an unknown escape drops the
                    // backslash and keeps the character.
                    Some(other) => result.push(other),
                },
                Some(c) => result.push(c),
            }
        }
    }

    fn parse_unquoted_string(&mut self) -> Result<String> {
        let start = self.pos;

        while matches!(self.peek(), Some(c) if is_unquoted_char(c)) {
            self.advance();
        }

        let result = &self.input[start..self.pos];

        if !is_valid_unquoted(result) {
            return Err(Error::invalid_unquoted_string(result, start));
        }

        Ok(result.to_owned())
    }

    fn parse_number(&mut self) -> Result<Number> {
        let start = self.pos;

        if matches!(self.peek(), Some('-') | Some('+')) {
            self.advance();
        }

        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }

        let mut suffix = None;
        if let Some(c) = self.peek() {
            if matches!(c.to_ascii_lowercase(), 'b' | 's' | 'l' | 'f' | 'd') {
                suffix = Some(c.to_ascii_lowercase());
                self.advance();
            }
        }

        // Suffixes are one ASCII byte, so this slice is always on a char
        // boundary.
        let end = if suffix.is_some() {
            self.pos - 1
        } else {
            self.pos
        };
        let token = &self.input[start..end];

        if suffix == Some('l') {
            token
                .parse::<i64>()
                .map(Number::Long)
                .map_err(|_| Error::invalid_number(token, self.pos))
        } else {
            token
                .parse::<f64>()
                .map(Number::Double)
                .map_err(|_| Error::invalid_number(token, self.pos))
        }
    }

    fn check_depth(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.opts.max_depth {
            return Err(Error::depth_exceeded(self.opts.max_depth, self.pos));
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            _ => Err(Error::expected(expected, self.pos)),
        }
    }
}

fn make_typed_array(tag: char, values: Vec<Number>) -> Value {
    match tag {
        'B' => Value::ByteArray(ByteArray::new(
            values.into_iter().map(Number::as_i8).collect(),
        )),
        'I' => Value::IntArray(IntArray::new(
            values.into_iter().map(Number::as_i32).collect(),
        )),
        _ => Value::LongArray(LongArray::new(
            values.into_iter().map(Number::as_i64).collect(),
        )),
    }
}

fn store_at(list: &mut Vec<Value>, index: usize, value: Value) {
    if index < list.len() {
        list[index] = value;
    } else {
        // Holes left behind by an out-of-sequence index become Null.
        list.resize(index, Value::Null);
        list.push(value);
    }
}

fn is_unquoted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+' | '.')
}

// The accumulated token is already limited to the unquoted character set,
// so validity hinges on the first character: identifiers start with a
// letter or underscore, and digit-led tokens are allowed so they can serve
// as list indices or numeric values.
fn is_valid_unquoted(s: &str) -> bool {
    match s.chars().next() {
        Some(c) => c.is_ascii_alphanumeric() || c == '_',
        None => false,
    }
}

fn leading_index(token: &str) -> Option<usize> {
    let end = token
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(token.len());
    token[..end].parse().ok()
}

// The longest numeric prefix of a digit-led token: digits, an optional
// fraction, an optional exponent. Anything after the prefix is ignored, so
// [1b,2b] is the list [1.0, 2.0].
fn float_prefix(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let mut end = 0;

    while bytes.get(end).map_or(false, u8::is_ascii_digit) {
        end += 1;
    }
    if end == 0 {
        return None;
    }

    if bytes.get(end) == Some(&b'.') {
        let mut frac = end + 1;
        while bytes.get(frac).map_or(false, u8::is_ascii_digit) {
            frac += 1;
        }
        end = frac;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = exp;
        while bytes.get(exp).map_or(false, u8::is_ascii_digit) {
            exp += 1;
        }
        if exp > exp_digits {
            end = exp;
        }
    }

    token[..end].parse().ok()
}
