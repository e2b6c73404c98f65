//! Tokenizer for the header's dictionary literal
//!
//! Understands the subset of Python literal syntax that npy headers use:
//! quoted strings, `True`/`False`, non-negative integers and tuples of
//! integers, in any key order and with arbitrary whitespace. Any other
//! value is kept as raw text so that unknown keys can carry it.

use crate::endian::Endianness;
use crate::error::{NpyError, Result};
use crate::types::{DType, Header, Layout};

/// A literal value in the header dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal<'a> {
    Str(&'a str),
    Bool(bool),
    Int(u64),
    Tuple(Vec<u64>),
    /// Raw text of a value outside the understood subset, e.g. `1.5` or `None`
    Other(&'a str),
}

impl Literal<'_> {
    fn type_name(&self) -> &'static str {
        match self {
            Literal::Str(_) => "string",
            Literal::Bool(_) => "bool",
            Literal::Int(_) => "integer",
            Literal::Tuple(_) => "tuple",
            Literal::Other(_) => "unsupported",
        }
    }

    fn classify(raw: &str) -> Literal<'_> {
        let understood = match raw.as_bytes().first() {
            Some(b'\'' | b'"') => whole(raw, DictParser::parse_string).map(Literal::Str),
            Some(b'(') => whole(raw, DictParser::parse_tuple).map(Literal::Tuple),
            Some(b) if b.is_ascii_digit() => whole(raw, DictParser::parse_int).map(Literal::Int),
            _ => match raw {
                "True" => Some(Literal::Bool(true)),
                "False" => Some(Literal::Bool(false)),
                _ => None,
            },
        };
        understood.unwrap_or(Literal::Other(raw))
    }
}

/// Run `parse` over all of `raw`, or `None` if it fails or leaves input behind
fn whole<'a, T>(raw: &'a str, parse: fn(&mut DictParser<'a>) -> Result<T>) -> Option<T> {
    let mut parser = DictParser::new(raw);
    let value = parse(&mut parser).ok()?;
    parser.skip_ws();
    (parser.pos == raw.len()).then_some(value)
}

struct DictParser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> DictParser<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Consume `byte` if it is next, after skipping whitespace
    fn eat(&mut self, byte: u8) -> bool {
        self.skip_ws();
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(NpyError::header(
                format!("expected '{}'", byte as char),
                self.pos,
            ))
        }
    }

    fn parse_dict(&mut self) -> Result<Vec<(&'a str, Literal<'a>)>> {
        self.expect(b'{')?;
        let mut entries = Vec::new();

        loop {
            if self.eat(b'}') {
                break;
            }
            self.skip_ws();
            let key = self.parse_string()?;
            self.expect(b':')?;
            let value = self.parse_literal()?;
            entries.push((key, value));

            if !self.eat(b',') {
                self.expect(b'}')?;
                break;
            }
        }

        self.skip_ws();
        if self.pos != self.text.len() {
            return Err(NpyError::header(
                "unexpected trailing characters after dictionary",
                self.pos,
            ));
        }
        Ok(entries)
    }

    fn parse_literal(&mut self) -> Result<Literal<'a>> {
        self.skip_ws();
        let start = self.pos;
        self.skip_value()?;
        let raw = self.text[start..self.pos].trim_end();
        if raw.is_empty() {
            return Err(NpyError::header("expected value", start));
        }
        Ok(Literal::classify(raw))
    }

    /// Advance past one value, stopping at a `,` or closing bracket outside any nesting
    fn skip_value(&mut self) -> Result<()> {
        let mut depth = 0usize;
        while let Some(b) = self.peek() {
            match b {
                b'\'' | b'"' => {
                    self.parse_string()?;
                    continue;
                }
                b'(' | b'[' | b'{' => depth += 1,
                b',' | b')' | b']' | b'}' if depth == 0 => break,
                b')' | b']' | b'}' => depth -= 1,
                _ => {}
            }
            self.pos += 1;
        }
        Ok(())
    }

    fn parse_string(&mut self) -> Result<&'a str> {
        let start = self.pos;
        let quote = match self.peek() {
            Some(q @ (b'\'' | b'"')) => q,
            _ => return Err(NpyError::header("expected quoted string", start)),
        };
        self.pos += 1;

        let rest = &self.text[self.pos..];
        let len = rest
            .bytes()
            .position(|b| b == quote)
            .ok_or_else(|| NpyError::header("unterminated string", start))?;
        let s = &rest[..len];
        self.pos += len + 1;
        Ok(s)
    }

    fn parse_int(&mut self) -> Result<u64> {
        let start = self.pos;
        let rest = &self.text[self.pos..];
        let len = rest
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        self.pos += len;
        rest[..len]
            .parse()
            .map_err(|_| NpyError::header("invalid integer", start))
    }

    fn parse_tuple(&mut self) -> Result<Vec<u64>> {
        self.expect(b'(')?;
        let mut items = Vec::new();

        loop {
            if self.eat(b')') {
                break;
            }
            self.skip_ws();
            if !matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
                return Err(NpyError::header("expected integer in tuple", self.pos));
            }
            items.push(self.parse_int()?);

            if !self.eat(b',') {
                self.expect(b')')?;
                break;
            }
        }
        Ok(items)
    }
}

/// Split the header dictionary into key/value pairs
pub fn parse_dict(text: &str) -> Result<Vec<(&str, Literal<'_>)>> {
    DictParser::new(text).parse_dict()
}

/// Decode the header dictionary into a [`Header`]
///
/// `descr`, `fortran_order` and `shape` must each appear exactly once;
/// other keys are ignored.
pub fn parse_header_dict(text: &str) -> Result<Header> {
    let entries = parse_dict(text)?;

    let mut descr = None;
    let mut fortran_order = None;
    let mut shape = None;

    for (key, value) in entries {
        let slot_taken = match (key, value) {
            ("descr", Literal::Str(s)) => descr.replace(s).is_some(),
            ("fortran_order", Literal::Bool(b)) => fortran_order.replace(b).is_some(),
            ("shape", Literal::Tuple(dims)) => shape.replace(dims).is_some(),
            (k @ ("descr" | "fortran_order" | "shape"), other) => {
                return Err(NpyError::header(
                    format!("unexpected {} value for '{}'", other.type_name(), k),
                    0,
                ));
            }
            _ => false,
        };
        if slot_taken {
            return Err(NpyError::header(format!("duplicate key '{}'", key), 0));
        }
    }

    let descr = descr.ok_or_else(|| NpyError::header("missing key 'descr'", text.len()))?;
    let fortran_order = fortran_order
        .ok_or_else(|| NpyError::header("missing key 'fortran_order'", text.len()))?;
    let dims = shape.ok_or_else(|| NpyError::header("missing key 'shape'", text.len()))?;

    let (endianness, dtype) = parse_descr(descr)?;

    // A zero-rank array is stored as a single element
    let shape = if dims.is_empty() {
        vec![1]
    } else {
        dims.into_iter()
            .map(|d| {
                usize::try_from(d)
                    .map_err(|_| NpyError::shape(format!("dimension {} does not fit in usize", d)))
            })
            .collect::<Result<Vec<_>>>()?
    };

    Ok(Header {
        dtype,
        shape,
        layout: Layout::from_fortran_order(fortran_order),
        endianness,
    })
}

/// Split a `descr` string into its byte-order marker and element kind
fn parse_descr(descr: &str) -> Result<(Endianness, DType)> {
    let mut chars = descr.chars();
    let (marker, token) = match chars.next() {
        Some(c @ ('<' | '>' | '|' | '=')) => (Some(c), chars.as_str()),
        _ => (None, descr),
    };
    Ok((Endianness::from_marker(marker), DType::from_descriptor(token)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn canonical_header() {
        let header =
            parse_header_dict("{'descr': '<f8', 'fortran_order': False, 'shape': (2,3,), }    \n")
                .unwrap();
        assert_eq!(header.dtype, DType::F64);
        assert_eq!(header.shape, vec![2, 3]);
        assert_eq!(header.layout, Layout::RowMajor);
        assert_eq!(header.endianness, Endianness::Little);
    }

    #[test]
    fn reordered_fields_and_spacing() {
        let header = parse_header_dict(
            "{ \"shape\" : ( 4 , 5 ) ,'fortran_order':True,  'descr' :'>i4' }",
        )
        .unwrap();
        assert_eq!(header.dtype, DType::I32);
        assert_eq!(header.shape, vec![4, 5]);
        assert_eq!(header.layout, Layout::ColumnMajor);
        assert_eq!(header.endianness, Endianness::Big);
    }

    #[test]
    fn single_dimension_tuple() {
        let header =
            parse_header_dict("{'descr': '<u2', 'fortran_order': False, 'shape': (7,), }").unwrap();
        assert_eq!(header.shape, vec![7]);
    }

    #[test]
    fn empty_shape_is_one_element() {
        let header =
            parse_header_dict("{'descr': '<c16', 'fortran_order': False, 'shape': (), }").unwrap();
        assert_eq!(header.shape, vec![1]);
        assert_eq!(header.dtype, DType::Complex128);
    }

    #[test]
    fn not_applicable_marker() {
        let header =
            parse_header_dict("{'descr': '|b1', 'fortran_order': False, 'shape': (3,), }").unwrap();
        assert_eq!(header.dtype, DType::I8);
        assert_eq!(header.endianness, Endianness::Little);
    }

    #[test]
    fn unknown_keys_ignored() {
        let header = parse_header_dict(
            "{'descr': '<f4', 'fortran_order': False, 'shape': (1,), 'extra': 3, }",
        )
        .unwrap();
        assert_eq!(header.dtype, DType::F32);
    }

    #[test]
    fn unknown_keys_with_other_values_ignored() {
        let header = parse_header_dict(
            "{'descr': '<i2', 'x': 1.5, 'y': None, 'z': -3, 'w': [1, (2, 'a,b')], \
             'fortran_order': True, 'shape': (3,), }",
        )
        .unwrap();
        assert_eq!(header.dtype, DType::I16);
        assert_eq!(header.layout, Layout::ColumnMajor);
        assert_eq!(header.shape, vec![3]);
    }

    #[test]
    fn unsupported_value_for_required_key() {
        let err =
            parse_header_dict("{'descr': '<f8', 'fortran_order': None, 'shape': (1,)}").unwrap_err();
        assert!(err.to_string().contains("unsupported value for 'fortran_order'"));
    }

    #[test]
    fn missing_key() {
        let err = parse_header_dict("{'descr': '<f4', 'shape': (1,), }").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedFile);
        assert!(err.to_string().contains("fortran_order"));
    }

    #[test]
    fn duplicate_key() {
        let err = parse_header_dict(
            "{'descr': '<f4', 'descr': '<f8', 'fortran_order': False, 'shape': (1,)}",
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn unknown_descriptor() {
        let err =
            parse_header_dict("{'descr': '<f2', 'fortran_order': False, 'shape': (1,)}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedType);
    }

    #[test]
    fn wrong_value_types() {
        assert!(parse_header_dict("{'descr': 8, 'fortran_order': False, 'shape': (1,)}").is_err());
        assert!(parse_header_dict("{'descr': '<f8', 'fortran_order': 0, 'shape': (1,)}").is_err());
        assert!(parse_header_dict("{'descr': '<f8', 'fortran_order': Maybe, 'shape': (1,)}").is_err());
        assert!(parse_header_dict("{'descr': '<f8', 'fortran_order': False, 'shape': 3}").is_err());
    }

    #[test]
    fn malformed_shapes() {
        for text in [
            "{'descr': '<f8', 'fortran_order': False, 'shape': (2,,3)}",
            "{'descr': '<f8', 'fortran_order': False, 'shape': (-2,)}",
            "{'descr': '<f8', 'fortran_order': False, 'shape': (2 3)}",
            "{'descr': '<f8', 'fortran_order': False, 'shape': (2,3}",
        ] {
            assert!(parse_header_dict(text).is_err(), "{}", text);
        }
    }

    #[test]
    fn structural_errors_carry_position() {
        let err = parse_dict("{'descr' '<f8'}").unwrap_err();
        assert!(matches!(err, NpyError::MalformedHeader { position: 9, .. }));

        assert!(parse_dict("{'descr': '<f8'").is_err());
        assert!(parse_dict("'descr': '<f8'}").is_err());
        assert!(parse_dict("{'descr: '<f8'}").is_err());
        assert!(parse_dict("{} x").is_err());
    }

    #[test]
    fn empty_dict() {
        assert!(parse_dict("{}").unwrap().is_empty());
        assert!(parse_header_dict("{}").is_err());
    }

    #[test]
    fn literal_values() {
        let entries = parse_dict("{'a': 'x', 'b': True, 'c': 12, 'd': (1, 2)}").unwrap();
        assert_eq!(
            entries,
            vec![
                ("a", Literal::Str("x")),
                ("b", Literal::Bool(true)),
                ("c", Literal::Int(12)),
                ("d", Literal::Tuple(vec![1, 2])),
            ]
        );

        let entries = parse_dict("{'e': 2.5, 'f': (1, -1)}").unwrap();
        assert_eq!(
            entries,
            vec![("e", Literal::Other("2.5")), ("f", Literal::Other("(1, -1)"))]
        );
    }
}
