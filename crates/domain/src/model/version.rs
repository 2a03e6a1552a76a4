use std::fmt;

use verbump_shared_kernel::{DomainError, DomainResult};

use crate::options::ParseMode;

/// Dotted version string split around its patch component.
///
/// `lead` holds everything before the patch (`"1.2"` for `"1.2.3"`), `trail`
/// holds any components after it. Lenient parsing keeps both verbatim so that
/// re-rendering only ever changes the patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    lead: String,
    patch: u64,
    trail: Vec<String>,
}

impl Version {
    pub fn parse(input: &str, mode: ParseMode) -> DomainResult<Self> {
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() < 3 {
            return Err(malformed(input, format!("expected 3 dot-separated components, found {}", parts.len())));
        }

        match mode {
            ParseMode::Strict => {
                if parts.len() > 3 {
                    return Err(malformed(input, format!("expected 3 dot-separated components, found {}", parts.len())));
                }
                // Every component must be numeric; the last one parsed is the patch.
                let mut patch = 0;
                for (name, part) in ["major", "minor", "patch"].into_iter().zip(&parts) {
                    patch = parse_decimal(part)
                        .ok_or_else(|| malformed(input, format!("{name} component '{part}' is not a decimal integer")))?;
                }
                Ok(Self { lead: parts[..2].join("."), patch, trail: Vec::new() })
            }
            ParseMode::Lenient => Ok(Self {
                lead: parts[..2].join("."),
                patch: lenient_patch(input, parts[2])?,
                trail: parts[3..].iter().map(|s| (*s).to_string()).collect(),
            }),
        }
    }

    /// Next version with the patch component raised by one.
    pub fn bump_patch(&self) -> DomainResult<Self> {
        let patch = self
            .patch
            .checked_add(1)
            .ok_or_else(|| DomainError::PatchOverflow { version: self.to_string() })?;
        Ok(Self { patch, ..self.clone() })
    }

    #[inline]
    pub const fn patch(&self) -> u64 {
        self.patch
    }

}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.lead, self.patch)?;
        for part in &self.trail {
            write!(f, ".{part}")?;
        }
        Ok(())
    }
}

fn parse_decimal(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Optional sign, then digits; anything else reads as zero. Negative values and
/// digit runs too large for `u64` are errors rather than zero.
fn lenient_patch(input: &str, part: &str) -> DomainResult<u64> {
    let (negative, digits) = match part.as_bytes().first() {
        Some(b'+') => (false, &part[1..]),
        Some(b'-') => (true, &part[1..]),
        _ => (false, part),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(0);
    }
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(malformed(input, format!("patch component '{part}' is negative")));
    }
    digits.parse().map_err(|_| DomainError::PatchOverflow { version: input.to_string() })
}

fn malformed(input: &str, reason: String) -> DomainError {
    DomainError::MalformedVersion { version: input.to_string(), reason }
}
