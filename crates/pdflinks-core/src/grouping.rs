//! Two-level grouping of link records for the cross-index views.
//!
//! A [`Grouping`] partitions records by one key (file or domain) and then by
//! the other. Both levels iterate in lexicographic key order regardless of
//! extraction order, so the empty domain always comes first. The URL list
//! under each inner key keeps the order in which records were supplied.

use std::collections::BTreeMap;

use crate::record::LinkRecord;

/// Which record field forms the outer level of a [`Grouping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOrder {
    /// file name → domain → URLs
    ByFile,
    /// domain → file name → URLs
    ByDomain,
}

impl GroupOrder {
    /// Split a record into its (outer, inner) keys for this order.
    fn keys<'a>(&self, record: &'a LinkRecord) -> (&'a str, &'a str) {
        match self {
            GroupOrder::ByFile => (record.source_filename.as_str(), record.domain.as_str()),
            GroupOrder::ByDomain => (record.domain.as_str(), record.source_filename.as_str()),
        }
    }
}

/// Inner level of a grouping: inner key → URLs in first-seen order.
pub type InnerGroup = BTreeMap<String, Vec<String>>;

/// A sorted two-level partition of link records.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    order: GroupOrder,
    groups: BTreeMap<String, InnerGroup>,
}

impl Grouping {
    /// Group `records` according to `order`.
    ///
    /// Every record contributes one URL entry; records are expected to be
    /// unique per file already, as produced by the scanner.
    pub fn build(records: &[LinkRecord], order: GroupOrder) -> Self {
        let mut groups: BTreeMap<String, InnerGroup> = BTreeMap::new();

        for record in records {
            let (outer, inner) = order.keys(record);
            let urls = groups
                .entry(outer.to_string())
                .or_default()
                .entry(inner.to_string())
                .or_default();
            urls.push(record.url.clone());
        }

        Self { order, groups }
    }

    /// Shorthand for [`Grouping::build`] with [`GroupOrder::ByFile`].
    pub fn by_file(records: &[LinkRecord]) -> Self {
        Self::build(records, GroupOrder::ByFile)
    }

    /// Shorthand for [`Grouping::build`] with [`GroupOrder::ByDomain`].
    pub fn by_domain(records: &[LinkRecord]) -> Self {
        Self::build(records, GroupOrder::ByDomain)
    }

    pub fn order(&self) -> GroupOrder {
        self.order
    }

    /// Number of outer keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Inner group for one outer key.
    pub fn get(&self, outer: &str) -> Option<&InnerGroup> {
        self.groups.get(outer)
    }

    /// Iterate outer keys and their inner groups in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InnerGroup)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }
}
