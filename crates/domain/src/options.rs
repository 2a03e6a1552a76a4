// crates/domain/src/options.rs
/// How strictly a version string is checked before it is incremented or stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// At least three components; a non-numeric patch counts as zero and
    /// anything after the patch is carried along untouched.
    #[default]
    Lenient,
    /// Exactly `MAJOR.MINOR.PATCH`, all plain decimal integers.
    Strict,
}

impl ParseMode {
    pub const fn from_strict_flag(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }

    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}
