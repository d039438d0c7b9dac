use crate::parts::feed::aggregate::FeedAggregate;
use crate::parts::feed::model::PATH_SEPARATOR;

/// Separator vendors use inside vehicle names, folded into [`PATH_SEPARATOR`].
const VEHICLE_SEPARATOR: &str = " / ";

/// One `SHOPITEM` record of the output feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopItem {
    pub name: String,
    pub code: String,
    pub categories: Vec<String>,
    pub price_vat: String,
    pub vat: String,
}

/// The whole feed, ready to be written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopFeed {
    pub items: Vec<ShopItem>,
}

/// Projects the aggregate into shop items, keeping first-seen order.
pub fn build_shop(aggregate: &FeedAggregate) -> ShopFeed {
    let items = aggregate
        .iter()
        .map(|part| ShopItem {
            name: part.name.clone(),
            code: part.code.clone(),
            categories: part
                .categories
                .iter()
                .map(|path| format_category(path))
                .collect(),
            price_vat: part.unit_price_incl_vat.to_string(),
            vat: part.vat_percent.to_string(),
        })
        .collect();

    ShopFeed { items }
}

/// Renders a stored category path for the feed.
///
/// The path is split once on the first separator; every `" / "` in the
/// leading segment becomes `" > "` before the two halves are rejoined. A path
/// without a separator is returned unchanged.
pub fn format_category(path: &str) -> String {
    match path.split_once(PATH_SEPARATOR) {
        Some((head, tail)) => {
            let head = head.replace(VEHICLE_SEPARATOR, PATH_SEPARATOR);
            format!("{head}{PATH_SEPARATOR}{tail}")
        }
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::feed::model::Product;
    use serde_json::Number;

    #[test]
    fn plain_paths_round_trip() {
        assert_eq!(format_category("Car > Brakes > Discs"), "Car > Brakes > Discs");
    }

    #[test]
    fn slash_in_vehicle_segment_is_normalised() {
        assert_eq!(format_category("Car / SUV > Brakes"), "Car > SUV > Brakes");
    }

    #[test]
    fn only_the_first_segment_is_normalised() {
        assert_eq!(
            format_category("Car / SUV > Brakes / Pads > Front"),
            "Car > SUV > Brakes / Pads > Front"
        );
    }

    #[test]
    fn path_without_separator_is_untouched() {
        assert_eq!(format_category("Car / SUV"), "Car / SUV");
        assert_eq!(format_category(""), "");
    }

    #[test]
    fn build_shop_formats_numbers_and_categories() {
        let mut aggregate = FeedAggregate::new();
        let product = Product {
            vat_percent: Some(Number::from(21u64)),
            unit_price_incl_vat: Number::from_f64(15.5),
            ..Product::default()
        };
        aggregate.record("F1", "Filter", &product, "Truck / 4x4 > Engine".into());

        let shop = build_shop(&aggregate);
        assert_eq!(
            shop.items,
            vec![ShopItem {
                name: "Filter".into(),
                code: "F1".into(),
                categories: vec!["Truck > 4x4 > Engine".into()],
                price_vat: "15.5".into(),
                vat: "21".into(),
            }]
        );
    }
}
