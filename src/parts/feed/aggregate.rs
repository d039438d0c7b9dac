use std::collections::HashMap;

use crate::parts::feed::model::{AggregatedPart, Product};

/// Insertion-ordered map from product code to [`AggregatedPart`].
///
/// Entries are created on the first sighting of a code and only extended
/// afterwards: later occurrences add a category path but never replace the
/// name, price or VAT recorded first.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FeedAggregate {
    parts: Vec<AggregatedPart>,
    index: HashMap<String, usize>,
}

impl FeedAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `product` under `category_path`.
    pub fn record(&mut self, code: &str, name: &str, product: &Product, category_path: String) {
        if let Some(&position) = self.index.get(code) {
            self.parts[position].categories.push(category_path);
            return;
        }

        self.index.insert(code.to_string(), self.parts.len());
        self.parts.push(AggregatedPart {
            code: code.to_string(),
            name: name.to_string(),
            vat_percent: product.vat_percent(),
            unit_price_incl_vat: product.unit_price_incl_vat(),
            categories: vec![category_path],
        });
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&AggregatedPart> {
        self.index.get(code).map(|&position| &self.parts[position])
    }

    /// Iterates the parts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &AggregatedPart> {
        self.parts.iter()
    }

    /// Whether the optional item ceiling has been hit.
    pub fn reached(&self, limit: Option<usize>) -> bool {
        limit.is_some_and(|max| self.parts.len() >= max)
    }
}
