//! Registration table for tagged test callables.
//!
//! Tests are plain `fn() -> bool` items listed explicitly, usually in a `const` table:
//!
//! ```rust
//! use strand_testing::{Category, Registry, TestRecord};
//!
//! fn adds_up() -> bool {
//!     2 + 2 == 4
//! }
//!
//! const TESTS: &[TestRecord] = &[TestRecord::unit("adds_up", Some("Math"), adds_up)];
//!
//! let registry = Registry::from_table(TESTS);
//! assert_eq!(registry.discover(Category::Unit, None::<&[&str]>).len(), 1);
//! ```

use crate::category::Category;

/// A zero-argument test callable. `true` means passed.
pub type TestFn = fn() -> bool;

/// One registered test: display name, category, optional tag and the callable itself.
#[derive(Debug, Clone, Copy)]
pub struct TestRecord {
    pub name: &'static str,
    pub category: Category,
    pub tag: Option<&'static str>,
    pub func: TestFn,
}

impl TestRecord {
    pub const fn new(name: &'static str, category: Category, tag: Option<&'static str>, func: TestFn) -> Self {
        Self {
            name,
            category,
            tag,
            func,
        }
    }

    /// Register a unit test.
    pub const fn unit(name: &'static str, tag: Option<&'static str>, func: TestFn) -> Self {
        Self::new(name, Category::Unit, tag, func)
    }

    /// Register an integration test.
    pub const fn integration(name: &'static str, tag: Option<&'static str>, func: TestFn) -> Self {
        Self::new(name, Category::Integration, tag, func)
    }

    /// Whether this record survives a tag filter.
    ///
    /// With no filter every record is kept. With a filter (even an empty one) only records whose non-empty
    /// tag appears in it are kept.
    pub fn matches_tags<S: AsRef<str>>(&self, tags: Option<&[S]>) -> bool {
        let Some(tags) = tags else {
            return true;
        };
        match self.tag {
            Some(tag) if !tag.is_empty() => tags.iter().any(|t| t.as_ref() == tag),
            _ => false,
        }
    }
}

/// Ordered collection of test records.
///
/// Order is registration order, which is also discovery and invocation order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    records: Vec<TestRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a declarative table.
    pub fn from_table(table: &[TestRecord]) -> Self {
        Self {
            records: table.to_vec(),
        }
    }

    /// Append a record. Duplicate names are allowed; names are only labels.
    pub fn register(&mut self, record: TestRecord) -> &mut Self {
        self.records.push(record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    /// Collect the records of `category` that pass the tag filter, in registration order.
    ///
    /// A fresh list is built on every call; nothing is cached between runs.
    pub fn discover<S: AsRef<str>>(&self, category: Category, tags: Option<&[S]>) -> Vec<&TestRecord> {
        let found: Vec<&TestRecord> = self
            .records
            .iter()
            .filter(|r| r.category == category && r.matches_tags(tags))
            .collect();
        tracing::debug!(%category, filtered = tags.is_some(), count = found.len(), "discovered tests");
        found
    }
}

impl FromIterator<TestRecord> for Registry {
    fn from_iter<I: IntoIterator<Item = TestRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<TestRecord> for Registry {
    fn extend<I: IntoIterator<Item = TestRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}
