use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Row;

pub const UNKNOWN_LABEL: &str = "Unknown";

/// Row attribute that contributes one ring of the sunburst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HierarchyAttribute {
    Platform,
    Pricing,
    Category,
    Kind,
}

impl HierarchyAttribute {
    fn key(self, row: &Row, category_label: &str) -> String {
        match self {
            Self::Platform => {
                let tags: SmallVec<[&str; 4]> =
                    row.platform_tags().iter().map(String::as_str).collect();
                if tags.is_empty() {
                    UNKNOWN_LABEL.to_owned()
                } else {
                    tags.join(", ")
                }
            }
            Self::Pricing => {
                let label = if row.is_free() { "Free" } else { "Paid" };
                label.to_owned()
            }
            Self::Category => category_label.to_owned(),
            Self::Kind => row.kind().unwrap_or(UNKNOWN_LABEL).to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyNode {
    pub name: String,
    /// Number of rows below this node.
    pub value: usize,
    /// Sorted by descending value; insertion order breaks ties.
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&HierarchyNode> {
        self.children.iter().find(|child| child.name == name)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

#[derive(Default)]
struct NodeBuilder {
    value: usize,
    children: IndexMap<String, NodeBuilder>,
}

impl NodeBuilder {
    fn finish(self, name: String) -> HierarchyNode {
        let mut children: Vec<HierarchyNode> = self
            .children
            .into_iter()
            .map(|(child_name, child)| child.finish(child_name))
            .collect();
        children.sort_by(|a, b| b.value.cmp(&a.value));
        HierarchyNode {
            name,
            value: self.value,
            children,
        }
    }
}

/// Nests one year's categorized rows by `attributes`, outermost ring first.
///
/// Only rows of `year` that carry both a category and a game type are used.
/// Categories outside the `top_n` most frequent of that year are folded into
/// `other_label`. An empty attribute list falls back to the platform ring.
#[must_use]
pub fn category_hierarchy(
    rows: &[Row],
    year: i32,
    attributes: &[HierarchyAttribute],
    top_n: usize,
    other_label: &str,
) -> HierarchyNode {
    let attributes = if attributes.is_empty() {
        &[HierarchyAttribute::Platform][..]
    } else {
        attributes
    };

    let year_rows: Vec<&Row> = rows
        .iter()
        .filter(|row| row.year() == Some(year) && row.category().is_some() && row.kind().is_some())
        .collect();

    let mut category_counts: IndexMap<&str, usize> = IndexMap::new();
    for row in &year_rows {
        if let Some(category) = row.category() {
            *category_counts.entry(category).or_default() += 1;
        }
    }
    category_counts.sort_by(|a_name, a_count, b_name, b_count| {
        b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
    });
    let top: HashSet<&str> = category_counts.keys().take(top_n).copied().collect();

    let mut root = NodeBuilder::default();
    for row in &year_rows {
        let category = row.category().unwrap_or(UNKNOWN_LABEL);
        let category_label = if top.contains(category) {
            category
        } else {
            other_label
        };

        root.value += 1;
        let mut node = &mut root;
        for attribute in attributes {
            let key = attribute.key(row, category_label);
            node = node.children.entry(key).or_default();
            node.value += 1;
        }
    }

    root.finish("root".to_owned())
}
