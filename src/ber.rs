//! BER encoding of OID contents (X.690 section 8.19)
//!
//! The first subidentifier carries two arcs as `first * 40 + second`, every other
//! subidentifier carries one arc. Subidentifiers are written in base 128, most
//! significant group first, with the high bit set on every byte but the last.

use crate::error::{Error, InvalidArgument, MalformedKind, Result};

/// Universal tag of an OBJECT IDENTIFIER
pub const TAG_OID: u8 = 0x06;

/// Encodes an arc sequence into OID content bytes.
///
/// ```
/// let bytes = gss_oid::ber::encode_asn1ber(&[1, 2, 840, 113554, 1, 2, 2]).unwrap();
/// assert_eq!(bytes, [0x2a, 0x86, 0x48, 0x86, 0xf7, 0x12, 0x01, 0x02, 0x02]);
/// ```
pub fn encode_asn1ber(arcs: &[u64]) -> Result<Vec<u8>> {
    let first = first_subidentifier(arcs)?;
    let rest = &arcs[2..];
    let needed = encoded_len(first) + rest.iter().copied().map(encoded_len).sum::<usize>();
    let mut out = Vec::new();
    out.try_reserve_exact(needed)
        .map_err(|_| Error::out_of_memory(needed))?;
    push_subidentifier(&mut out, first);
    for &arc in rest {
        push_subidentifier(&mut out, arc);
    }
    Ok(out)
}

/// Decodes OID content bytes into their arcs.
///
/// Fails with [`Error::Malformed`] on empty input, a truncated last subidentifier,
/// `0x80` padding or an arc that does not fit in 64 bits.
pub fn decode_asn1ber(bytes: &[u8]) -> Result<Vec<u64>> {
    let count = validate(bytes)?;
    let mut arcs = Vec::new();
    arcs.try_reserve_exact(count)
        .map_err(|_| Error::out_of_memory(count * std::mem::size_of::<u64>()))?;
    arcs.extend(Arcs::new(bytes));
    Ok(arcs)
}

/// Checks that `bytes` is a well-formed encoding and returns its arc count.
pub(crate) fn validate(bytes: &[u8]) -> Result<usize> {
    validate_inner(bytes).inspect_err(|err| {
        tracing::debug!(length = bytes.len(), %err, "rejected OID encoding");
    })
}
fn validate_inner(bytes: &[u8]) -> Result<usize> {
    if bytes.is_empty() {
        return Err(Error::malformed(0, MalformedKind::Empty));
    }
    let (_, mut pos) = read_subidentifier(bytes, 0)?;
    let mut count = 2;
    while pos < bytes.len() {
        (_, pos) = read_subidentifier(bytes, pos)?;
        count += 1;
    }
    Ok(count)
}

pub(crate) fn first_subidentifier(arcs: &[u64]) -> Result<u64> {
    let [first, second, ..] = *arcs else {
        return Err(InvalidArgument::TooFewArcs { count: arcs.len() }.into());
    };
    match first {
        0 | 1 if second >= 40 => Err(InvalidArgument::SecondArc { first, second }.into()),
        0..=2 => first
            .checked_mul(40)
            .and_then(|f| f.checked_add(second))
            .ok_or(InvalidArgument::ArcOverflow.into()),
        _ => Err(InvalidArgument::FirstArc(first).into()),
    }
}

fn split_first(subidentifier: u64) -> (u64, u64) {
    match subidentifier {
        0..=39 => (0, subidentifier),
        40..=79 => (1, subidentifier - 40),
        _ => (2, subidentifier - 80),
    }
}

fn encoded_len(value: u64) -> usize {
    let bits = (u64::BITS - value.leading_zeros()).max(1);
    bits.div_ceil(7) as usize
}

fn push_subidentifier(out: &mut Vec<u8>, value: u64) {
    for group in (0..encoded_len(value)).rev() {
        let byte = ((value >> (group * 7)) & 0x7f) as u8;
        out.push(if group > 0 { byte | 0x80 } else { byte });
    }
}

/// Reads one subidentifier starting at `offset`, returning its value and the offset after it.
fn read_subidentifier(bytes: &[u8], offset: usize) -> Result<(u64, usize)> {
    if bytes.get(offset) == Some(&0x80) {
        return Err(Error::malformed(offset, MalformedKind::NonMinimal));
    }
    let mut value = 0u64;
    let mut pos = offset;
    loop {
        let Some(&byte) = bytes.get(pos) else {
            return Err(Error::malformed(pos, MalformedKind::Truncated));
        };
        if value > u64::MAX >> 7 {
            return Err(Error::malformed(pos, MalformedKind::Overflow));
        }
        value = (value << 7) | u64::from(byte & 0x7f);
        pos += 1;
        if byte & 0x80 == 0 {
            return Ok((value, pos));
        }
    }
}

/// Iterator over the arcs of an encoding that already passed validation.
#[derive(Clone, Debug)]
pub struct Arcs<'a> {
    bytes: &'a [u8],
    pos: usize,
    second: Option<u64>,
}
impl<'a> Arcs<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            second: None,
        }
    }
}
impl Iterator for Arcs<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if let Some(second) = self.second.take() {
            return Some(second);
        }
        if self.pos >= self.bytes.len() {
            return None;
        }
        let at_start = self.pos == 0;
        let Ok((value, next)) = read_subidentifier(self.bytes, self.pos) else {
            debug_assert!(false, "Arcs created over an unvalidated encoding");
            self.pos = self.bytes.len();
            return None;
        };
        self.pos = next;
        if at_start {
            let (first, second) = split_first(value);
            self.second = Some(second);
            Some(first)
        } else {
            Some(value)
        }
    }
}

/// Wraps OID contents in a DER TLV: tag 0x06, definite length, contents.
pub fn write_der(contents: &[u8]) -> Result<Vec<u8>> {
    let length_bytes = contents.len().to_be_bytes();
    let significant = &length_bytes[length_bytes.iter().take_while(|b| **b == 0).count()..];
    let header = if contents.len() < 0x80 { 2 } else { 2 + significant.len() };
    let needed = header + contents.len();
    let mut out = Vec::new();
    out.try_reserve_exact(needed)
        .map_err(|_| Error::out_of_memory(needed))?;
    out.push(TAG_OID);
    if contents.len() < 0x80 {
        out.push(contents.len() as u8);
    } else {
        out.push(0x80 | significant.len() as u8);
        out.extend_from_slice(significant);
    }
    out.extend_from_slice(contents);
    Ok(out)
}

/// Parses exactly one DER OBJECT IDENTIFIER and returns its contents, unvalidated.
pub fn read_der(bytes: &[u8]) -> Result<&[u8]> {
    match bytes.first() {
        None => return Err(Error::malformed(0, MalformedKind::Truncated)),
        Some(&TAG_OID) => {}
        Some(&tag) => return Err(Error::malformed(0, MalformedKind::UnexpectedTag(tag))),
    }
    let Some(&initial) = bytes.get(1) else {
        return Err(Error::malformed(1, MalformedKind::Truncated));
    };
    let (length, start) = if initial < 0x80 {
        (usize::from(initial), 2)
    } else {
        let count = usize::from(initial & 0x7f);
        // 0x80 is the indefinite form, which primitive encodings may not use
        if count == 0 || count > std::mem::size_of::<usize>() {
            return Err(Error::malformed(1, MalformedKind::InvalidLength));
        }
        let Some(length_bytes) = bytes.get(2..2 + count) else {
            return Err(Error::malformed(bytes.len(), MalformedKind::Truncated));
        };
        if length_bytes[0] == 0 {
            return Err(Error::malformed(2, MalformedKind::InvalidLength));
        }
        let length = length_bytes.iter().fold(0usize, |acc, b| (acc << 8) | usize::from(*b));
        if length < 0x80 {
            return Err(Error::malformed(1, MalformedKind::InvalidLength));
        }
        (length, 2 + count)
    };
    let end = start
        .checked_add(length)
        .ok_or(Error::malformed(1, MalformedKind::InvalidLength))?;
    if end > bytes.len() {
        return Err(Error::malformed(bytes.len(), MalformedKind::Truncated));
    }
    if end < bytes.len() {
        return Err(Error::malformed(end, MalformedKind::TrailingData));
    }
    Ok(&bytes[start..end])
}
