use tracing::trace;

use crate::parts::feed::aggregate::FeedAggregate;
use crate::parts::feed::model::{CategoryNode, FeedDocument, PATH_SEPARATOR};

/// Walks every top-level category of `document`, seeding each walk with
/// `[vehicle name, category name]`.
pub fn walk_vehicle(document: &FeedDocument, aggregate: &mut FeedAggregate, limit: Option<usize>) {
    let vehicle = document.vehicle.name.as_deref();
    for category in &document.categories {
        let path = [vehicle, category.name.as_deref()];
        walk(category, &path, aggregate, limit);
    }
}

/// Folds the parts below `node` into `aggregate`.
///
/// `path` holds the ancestor names from the vehicle down to and including
/// `node` itself; `None` entries stand for `null` names in the source. Parts
/// are processed before children, both in source order.
///
/// With a `limit`, the walk returns as soon as the aggregate holds that many
/// entries, before the next part and before each descent. Truncation may
/// therefore stop in the middle of a branch.
pub fn walk(
    node: &CategoryNode,
    path: &[Option<&str>],
    aggregate: &mut FeedAggregate,
    limit: Option<usize>,
) {
    if aggregate.reached(limit) {
        return;
    }

    for part in &node.spare_parts {
        if aggregate.reached(limit) {
            return;
        }

        let product = &part.product;
        let (Some(name), Some(code)) = (product.name.as_deref(), product.product_no.as_deref())
        else {
            trace!(?product, "skipping part without name or code");
            continue;
        };
        let Some(category_path) = join_path(path) else {
            trace!(code, "skipping part below an unnamed category");
            continue;
        };

        aggregate.record(code, name, product, category_path);
    }

    for child in &node.categories {
        let mut child_path = Vec::with_capacity(path.len() + 1);
        child_path.extend_from_slice(path);
        child_path.push(child.name.as_deref());
        walk(child, &child_path, aggregate, limit);
    }
}

/// Joins the path with [`PATH_SEPARATOR`], or `None` if any element is null.
fn join_path(path: &[Option<&str>]) -> Option<String> {
    let names: Option<Vec<&str>> = path.iter().copied().collect();
    names.map(|names| names.join(PATH_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: serde_json::Value) -> FeedDocument {
        serde_json::from_value(value).expect("valid document")
    }

    fn part(name: &str, code: &str) -> serde_json::Value {
        json!({"product": {"name": name, "product_no": code}})
    }

    #[test]
    fn nested_categories_build_full_paths() {
        let doc = document(json!({
            "vehicle": {"name": "Car"},
            "categories": [{
                "name": "Brakes",
                "spare_parts": [part("Pad", "P1")],
                "categories": [{
                    "name": "Discs",
                    "spare_parts": [part("Disc", "D1"), part("Pad", "P1")]
                }]
            }]
        }));

        let mut aggregate = FeedAggregate::new();
        walk_vehicle(&doc, &mut aggregate, None);

        let pad = aggregate.get("P1").expect("pad aggregated");
        assert_eq!(pad.categories, vec!["Car > Brakes", "Car > Brakes > Discs"]);
        let disc = aggregate.get("D1").expect("disc aggregated");
        assert_eq!(disc.categories, vec!["Car > Brakes > Discs"]);

        let order: Vec<&str> = aggregate.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(order, vec!["P1", "D1"]);
    }

    #[test]
    fn null_identity_or_ancestor_is_skipped() {
        let doc = document(json!({
            "vehicle": {"name": "Car"},
            "categories": [
                {
                    "name": "Engine",
                    "spare_parts": [
                        {"product": {"name": null, "product_no": "N1"}},
                        {"product": {"name": "Bolt", "product_no": null}},
                        {"product": {"name": "Nut"}},
                        part("Filter", "F1")
                    ],
                    "categories": [{
                        "name": null,
                        "spare_parts": [part("Filter", "F1"), part("Hose", "H1")],
                        "categories": [{"name": "Deep", "spare_parts": [part("Clamp", "C1")]}]
                    }]
                }
            ]
        }));

        let mut aggregate = FeedAggregate::new();
        walk_vehicle(&doc, &mut aggregate, None);

        assert_eq!(aggregate.len(), 1);
        let filter = aggregate.get("F1").expect("filter aggregated");
        assert_eq!(filter.categories, vec!["Car > Engine"]);
        assert!(aggregate.get("H1").is_none());
        assert!(aggregate.get("C1").is_none());
    }

    #[test]
    fn null_vehicle_name_drops_everything() {
        let doc = document(json!({
            "vehicle": {"name": null},
            "categories": [{"name": "Engine", "spare_parts": [part("Filter", "F1")]}]
        }));

        let mut aggregate = FeedAggregate::new();
        walk_vehicle(&doc, &mut aggregate, None);
        assert!(aggregate.is_empty());
    }

    #[test]
    fn limit_stops_mid_branch() {
        let doc = document(json!({
            "vehicle": {"name": "Car"},
            "categories": [
                {
                    "name": "A",
                    "spare_parts": [part("One", "1"), part("One again", "1"), part("Two", "2"), part("Three", "3")],
                    "categories": [{"name": "A1", "spare_parts": [part("Four", "4")]}]
                },
                {"name": "B", "spare_parts": [part("Five", "5")]}
            ]
        }));

        let mut aggregate = FeedAggregate::new();
        walk_vehicle(&doc, &mut aggregate, Some(2));

        let codes: Vec<&str> = aggregate.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["1", "2"]);
        assert_eq!(
            aggregate.get("1").map(|p| p.categories.len()),
            Some(2),
            "duplicates seen before the ceiling still extend the entry"
        );
    }
}
