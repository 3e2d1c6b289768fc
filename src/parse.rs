// Copyright 2024 the Figures Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing of the `Debug` representation of shapes.
//!
//! `Circle(radius=5.0, x=1.0, y=2.0)` and
//! `Rectangle(width=3.0, height=4.0, x=0.0, y=0.0)` are read back into the
//! shapes they describe. Fields must appear in that order. ASCII whitespace
//! is allowed between tokens.

use core::fmt;
use core::str::FromStr;

use crate::{Circle, ConcreteShape, InvalidArgument, Rectangle};

/// An error which can be returned when parsing a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParseShapeError {
    /// The input does not start with the expected shape name.
    UnknownShape,
    /// A punctuation character was expected.
    ExpectedChar(char),
    /// The named field was expected next.
    ExpectedField(&'static str),
    /// A field value could not be parsed as a number.
    InvalidNumber,
    /// The input string ended while still expecting input.
    UnexpectedEof,
    /// There was input left after the closing parenthesis.
    TrailingInput,
    /// The values were read but do not describe a valid shape.
    Invalid(InvalidArgument),
}

impl fmt::Display for ParseShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseShapeError::UnknownShape => write!(f, "Unknown shape name"),
            ParseShapeError::ExpectedChar(c) => write!(f, "Expected \"{c}\""),
            ParseShapeError::ExpectedField(name) => write!(f, "Expected field \"{name}\""),
            ParseShapeError::InvalidNumber => write!(f, "Unable to parse a number"),
            ParseShapeError::UnexpectedEof => write!(f, "Unexpected EOF"),
            ParseShapeError::TrailingInput => write!(f, "Unexpected input after shape"),
            ParseShapeError::Invalid(_) => write!(f, "Invalid shape"),
        }
    }
}

impl core::error::Error for ParseShapeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ParseShapeError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidArgument> for ParseShapeError {
    fn from(err: InvalidArgument) -> Self {
        ParseShapeError::Invalid(err)
    }
}

struct Lexer<'a> {
    data: &'a str,
    ix: usize,
}

impl<'a> Lexer<'a> {
    fn new(data: &'a str) -> Self {
        Lexer { data, ix: 0 }
    }

    fn rest(&self) -> &[u8] {
        self.data.as_bytes().get(self.ix..).unwrap_or_default()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.rest().first() {
            if !c.is_ascii_whitespace() {
                break;
            }
            self.ix += 1;
        }
    }

    fn eat_str(&mut self, word: &str) -> bool {
        if self.rest().starts_with(word.as_bytes()) {
            self.ix += word.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: u8) -> Result<(), ParseShapeError> {
        self.skip_ws();
        match self.rest().first() {
            Some(&b) if b == c => {
                self.ix += 1;
                Ok(())
            }
            Some(_) => Err(ParseShapeError::ExpectedChar(c as char)),
            None => Err(ParseShapeError::UnexpectedEof),
        }
    }

    fn get_number(&mut self) -> Result<f64, ParseShapeError> {
        self.skip_ws();
        let start = self.ix;
        // Stopping only on ASCII bytes keeps `ix` on a char boundary.
        while let Some(&c) = self.rest().first() {
            if c == b',' || c == b')' || c.is_ascii_whitespace() {
                break;
            }
            self.ix += 1;
        }
        if start == self.ix {
            return Err(if self.rest().is_empty() {
                ParseShapeError::UnexpectedEof
            } else {
                ParseShapeError::InvalidNumber
            });
        }
        self.data
            .get(start..self.ix)
            .and_then(|s| s.parse().ok())
            .ok_or(ParseShapeError::InvalidNumber)
    }

    fn field(&mut self, name: &'static str) -> Result<f64, ParseShapeError> {
        self.skip_ws();
        if !self.eat_str(name) {
            return Err(if self.rest().is_empty() {
                ParseShapeError::UnexpectedEof
            } else {
                ParseShapeError::ExpectedField(name)
            });
        }
        self.expect(b'=')?;
        self.get_number()
    }
}

/// Read `name(field0=v0, field1=v1, ...)`, returning the values in order.
fn parse_fields<const N: usize>(
    input: &str,
    name: &str,
    fields: [&'static str; N],
) -> Result<[f64; N], ParseShapeError> {
    let mut lexer = Lexer::new(input);
    lexer.skip_ws();
    if !lexer.eat_str(name) {
        return Err(ParseShapeError::UnknownShape);
    }
    lexer.expect(b'(')?;
    let mut values = [0.0; N];
    for (i, (field, value)) in fields.into_iter().zip(values.iter_mut()).enumerate() {
        if i > 0 {
            lexer.expect(b',')?;
        }
        *value = lexer.field(field)?;
    }
    lexer.expect(b')')?;
    lexer.skip_ws();
    if lexer.rest().is_empty() {
        Ok(values)
    } else {
        Err(ParseShapeError::TrailingInput)
    }
}

impl FromStr for Circle {
    type Err = ParseShapeError;

    /// Parse the `Debug` form of a circle.
    ///
    /// # Examples
    ///
    /// ```
    /// use figures::Circle;
    ///
    /// let c: Circle = "Circle(radius=5.0, x=1.0, y=2.0)".parse().unwrap();
    /// assert_eq!(c, Circle::new((1.0, 2.0), 5.0).unwrap());
    /// assert_eq!(format!("{c:?}").parse::<Circle>(), Ok(c));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [radius, x, y] = parse_fields(s, "Circle", ["radius", "x", "y"])?;
        Ok(Circle::new((x, y), radius)?)
    }
}

impl FromStr for Rectangle {
    type Err = ParseShapeError;

    /// Parse the `Debug` form of a rectangle.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [width, height, x, y] = parse_fields(s, "Rectangle", ["width", "height", "x", "y"])?;
        Ok(Rectangle::new((x, y), (width, height))?)
    }
}

impl FromStr for ConcreteShape {
    type Err = ParseShapeError;

    /// Parse the `Debug` form of either shape.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim_start();
        if name.starts_with("Circle") {
            s.parse::<Circle>().map(ConcreteShape::from)
        } else if name.starts_with("Rectangle") {
            s.parse::<Rectangle>().map(ConcreteShape::from)
        } else {
            Err(ParseShapeError::UnknownShape)
        }
    }
}
