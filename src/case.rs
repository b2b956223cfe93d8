use std::borrow::Cow;

/// Casing applied to the header names this crate writes.
///
/// Header names are case-insensitive on the wire, so this is purely cosmetic;
/// some clients and test suites compare them byte-for-byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderCasing {
    #[default]
    Lower,
    Pascal,
}

impl HeaderCasing {
    pub fn from_pascal_flag(use_pascal_case: bool) -> Self {
        if use_pascal_case {
            Self::Pascal
        } else {
            Self::Lower
        }
    }

    /// Renders a Pascal-Case constant from [`crate::constants::header`].
    pub fn apply(self, name: &'static str) -> Cow<'static, str> {
        match self {
            HeaderCasing::Pascal => Cow::Borrowed(name),
            HeaderCasing::Lower => Cow::Owned(name.to_ascii_lowercase()),
        }
    }
}

#[cfg(test)]
#[path = "case_test.rs"]
mod case_test;
