use serde::Deserialize;
use serde_json::Number;

/// Separator placed between node names when rendering a category path.
pub const PATH_SEPARATOR: &str = " > ";

/// Product code identifying a part across every vendor document.
pub type ProductCode = String;

/// A single vendor document: one vehicle and its category tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedDocument {
    pub vehicle: Vehicle,
    pub categories: Vec<CategoryNode>,
}

/// The vehicle a document describes. A `null` name is allowed by the vendor
/// format; parts below such a vehicle are never aggregated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Vehicle {
    pub name: Option<String>,
}

/// One level of the category tree. Nodes may carry parts, children, or both.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryNode {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub spare_parts: Vec<SparePart>,
    #[serde(default)]
    pub categories: Vec<CategoryNode>,
}

/// Wrapper the vendor format puts around each product entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SparePart {
    pub product: Product,
}

/// Product details as they appear in the source document. Numbers are kept
/// as [`Number`] so the feed reproduces their original textual form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Product {
    pub name: Option<String>,
    pub product_no: Option<ProductCode>,
    pub vat_percent: Option<Number>,
    pub unit_price_incl_vat: Option<Number>,
}

impl Product {
    /// VAT percentage, `0` when absent.
    pub fn vat_percent(&self) -> Number {
        self.vat_percent.clone().unwrap_or_else(zero)
    }

    /// Unit price including VAT, `0` when absent or `null`.
    pub fn unit_price_incl_vat(&self) -> Number {
        self.unit_price_incl_vat.clone().unwrap_or_else(zero)
    }
}

fn zero() -> Number {
    Number::from(0u64)
}

/// Deduplicated record for one product code.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedPart {
    pub code: ProductCode,
    pub name: String,
    pub vat_percent: Number,
    pub unit_price_incl_vat: Number,
    /// One entry per valid occurrence, in the order they were encountered.
    pub categories: Vec<String>,
}
