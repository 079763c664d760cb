// src/domain/collation.rs

use feruca::Collator;
use std::cmp::Ordering;

/// Orders names the way a browser's default collation does (Unicode
/// Collation Algorithm, CLDR root order).
///
/// Base letters decide first, ignoring case and accents, then accents,
/// then case with lowercase ahead of uppercase.
#[derive(Default)]
pub struct LocaleCollator {
    inner: Collator,
}

impl LocaleCollator {
    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.inner.collate(a, b)
    }
}
