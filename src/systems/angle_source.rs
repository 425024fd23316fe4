use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::resources::AngleOfAttackState;

/// Outcome of an angle refresh. Either way the state holds a usable angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleRefresh {
    /// A new value was read from the source (degrees).
    Updated(f64),
    /// Nothing usable was read; the previous value (degrees) is kept.
    Retained(f64),
}

impl AngleRefresh {
    pub fn degrees(&self) -> f64 {
        match self {
            AngleRefresh::Updated(deg) | AngleRefresh::Retained(deg) => *deg,
        }
    }
}

/// Text file holding the current angle of attack in degrees.
#[derive(Debug, Clone)]
pub struct AngleSource {
    path: PathBuf,
}

impl AngleSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-reads the source into `state`. A missing file or a file that does not
    /// start with a number leaves `state` untouched.
    pub fn refresh(&self, state: &mut AngleOfAttackState) -> AngleRefresh {
        match self.read() {
            Some(degrees) => {
                state.set_degrees(degrees);
                AngleRefresh::Updated(degrees)
            }
            None => AngleRefresh::Retained(state.degrees()),
        }
    }

    fn read(&self) -> Option<f64> {
        // Raw bytes: junk after the number, valid UTF-8 or not, must not hide it.
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("angle source {} not found", self.path.display());
                return None;
            }
            Err(e) => {
                warn!("could not read angle source {}: {}", self.path.display(), e);
                return None;
            }
        };

        let angle = parse_angle(&contents);
        if angle.is_none() {
            warn!("angle source {} does not start with a number", self.path.display());
        }
        angle
    }
}

/// Reads a leading angle in degrees the way `scanf("%lf")` does: whitespace is
/// skipped, then the longest prefix forming a decimal or `0x` hexadecimal float
/// is taken and anything after it is ignored (`"12.5deg"` reads as 12.5).
///
/// `nan` and `inf` spellings, and values that overflow to infinity, are rejected.
pub fn parse_angle<T: AsRef<[u8]> + ?Sized>(contents: &T) -> Option<f64> {
    let bytes = contents.as_ref();
    let start = bytes.iter().position(|b| !b.is_ascii_whitespace())?;
    let number = &bytes[start..];

    let angle = hex_prefix(number).or_else(|| decimal_prefix(number))?;
    angle.is_finite().then_some(angle)
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digits_len(bytes: &[u8], radix: u32) -> usize {
    bytes
        .iter()
        .take_while(|b| char::from(**b).is_digit(radix))
        .count()
}

/// Splits `digits[.digits]` at the start of `bytes` into its total length and the
/// digit counts before and after the point.
fn mantissa_len(bytes: &[u8], radix: u32) -> (usize, usize, usize) {
    let int_digits = digits_len(bytes, radix);
    if bytes.get(int_digits) != Some(&b'.') {
        return (int_digits, int_digits, 0);
    }
    let frac_digits = digits_len(&bytes[int_digits + 1..], radix);
    (int_digits + 1 + frac_digits, int_digits, frac_digits)
}

/// Length of a signed exponent after a marker byte, or 0 when no digits follow it.
fn exponent_len(bytes: &[u8], markers: [u8; 2]) -> usize {
    match bytes.first() {
        Some(b) if markers.contains(b) => {
            let sign = sign_len(&bytes[1..]);
            let digits = digits_len(&bytes[1 + sign..], 10);
            if digits == 0 {
                0
            } else {
                1 + sign + digits
            }
        }
        _ => 0,
    }
}

fn decimal_prefix(bytes: &[u8]) -> Option<f64> {
    let sign = sign_len(bytes);
    let (mantissa, int_digits, frac_digits) = mantissa_len(&bytes[sign..], 10);
    if int_digits + frac_digits == 0 {
        return None;
    }
    let end = sign + mantissa;
    let end = end + exponent_len(&bytes[end..], [b'e', b'E']);

    std::str::from_utf8(&bytes[..end]).ok()?.parse().ok()
}

fn hex_prefix(bytes: &[u8]) -> Option<f64> {
    let sign = sign_len(bytes);
    let rest = &bytes[sign..];
    if rest.len() < 3 || rest[0] != b'0' || !matches!(rest[1], b'x' | b'X') {
        return None;
    }
    let body = &rest[2..];
    let (mantissa_end, int_digits, frac_digits) = mantissa_len(body, 16);
    if int_digits + frac_digits == 0 {
        // "0x" with no hex digits reads as the decimal 0
        return None;
    }

    let mut mantissa = 0.0_f64;
    for b in body[..mantissa_end].iter().filter(|b| **b != b'.') {
        mantissa = mantissa * 16.0 + f64::from(char::from(*b).to_digit(16)?);
    }

    let mut exponent = i32::try_from(frac_digits).ok()?.checked_mul(-4)?;
    let exp_len = exponent_len(&body[mantissa_end..], [b'p', b'P']);
    if exp_len > 0 {
        let digits = &body[mantissa_end + 1..mantissa_end + exp_len];
        let power: i32 = std::str::from_utf8(digits).ok()?.parse().ok()?;
        exponent = exponent.saturating_add(power);
    }

    let magnitude = mantissa * 2.0_f64.powi(exponent);
    if bytes[0] == b'-' {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}
