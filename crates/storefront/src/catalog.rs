//! The read-only product catalog.
//!
//! Products come from a JSON file (see `data/products.json` for the
//! built-in set) and are loaded once at startup into an in-memory
//! catalog. The core never mutates a product; everything downstream
//! holds references or copies line-item fields into the cart.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fitgear_core::{Price, ProductId};

/// Built-in demo catalog, embedded at compile time.
const BUILTIN_CATALOG: &str = include_str!("../data/products.json");

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog JSON is malformed or violates a field invariant.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share an ID.
    #[error("duplicate product id {0} in catalog")]
    DuplicateId(ProductId),
}

/// A product category.
///
/// The set is closed: the storefront's navigation is built around these
/// five departments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weights,
    Cardio,
    Accessories,
    Clothing,
    Supplements,
}

impl Category {
    /// All categories, in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Weights,
        Self::Cardio,
        Self::Accessories,
        Self::Clothing,
        Self::Supplements,
    ];

    /// The lowercase slug used in catalog data and CLI arguments.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Weights => "weights",
            Self::Cardio => "cardio",
            Self::Accessories => "accessories",
            Self::Clothing => "clothing",
            Self::Supplements => "supplements",
        }
    }

    /// Human-readable category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weights => "Weights",
            Self::Cardio => "Cardio",
            Self::Accessories => "Accessories",
            Self::Clothing => "Clothing",
            Self::Supplements => "Supplements",
        }
    }

    /// Short description shown on the categories listing.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Weights => {
                "Dumbbells, barbells, kettlebells, and weight plates for strength training."
            }
            Self::Cardio => {
                "Treadmills, exercise bikes, rowing machines, and other cardio equipment."
            }
            Self::Accessories => {
                "Yoga mats, resistance bands, foam rollers, and other fitness accessories."
            }
            Self::Clothing => "Performance apparel, workout clothes, and athletic wear.",
            Self::Supplements => "Protein, pre-workout, and recovery supplements.",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown category {s:?}"))
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog-assigned product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Department the product belongs to.
    pub category: Category,
    /// Image path, if the product has one.
    #[serde(default)]
    pub image: Option<String>,
    /// Long-form description.
    pub description: String,
    /// Date the product was added to the catalog.
    pub date: NaiveDate,
    /// Whether the product carries the "New" badge.
    #[serde(default)]
    pub is_new: bool,
}

/// How a product listing is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order (the merchandising default).
    #[default]
    Featured,
    /// Cheapest first.
    PriceLowToHigh,
    /// Most expensive first.
    PriceHighToLow,
    /// Most recently added first.
    Newest,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price-low" => Ok(Self::PriceLowToHigh),
            "price-high" => Ok(Self::PriceHighToLow),
            "newest" => Ok(Self::Newest),
            other => Err(format!(
                "unknown sort order {other:?} (expected featured, price-low, price-high, or newest)"
            )),
        }
    }
}

/// A product listing query: filters plus a sort order.
///
/// Empty filters match everything, so `ProductFilter::default()` is the
/// unfiltered storefront listing.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive substring match against the product name.
    pub query: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Price>,
    /// Inclusive upper price bound.
    pub max_price: Option<Price>,
    /// Category allow-list; empty means all categories.
    pub categories: Vec<Category>,
    /// Ordering of the result.
    pub sort: SortOrder,
}

impl ProductFilter {
    /// Whether a single product passes every filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(query) = &self.query {
            if !product
                .name
                .to_lowercase()
                .contains(&query.to_lowercase())
            {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        true
    }

    /// Filter and sort a product slice.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut result: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        match self.sort {
            SortOrder::Featured => {}
            SortOrder::PriceLowToHigh => result.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOrder::PriceHighToLow => result.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::Newest => result.sort_by(|a, b| b.date.cmp(&a.date)),
        }
        result
    }
}

/// The loaded product catalog, indexed by ID.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from a product list, rejecting duplicate IDs.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an ID.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products, index })
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed, or
    /// contains duplicate IDs.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let products: Vec<Product> = serde_json::from_str(&raw)?;
        let catalog = Self::from_products(products)?;
        tracing::info!(products = catalog.len(), path = %path.display(), "catalog loaded");
        Ok(catalog)
    }

    /// Load the built-in demo catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the embedded data is invalid;
    /// that would be a packaging defect, not a runtime condition.
    pub fn builtin() -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(BUILTIN_CATALOG)?;
        Self::from_products(products)
    }

    /// All products, in catalog (featured) order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).and_then(|&i| self.products.get(i))
    }

    /// Products in a category, in catalog order.
    #[must_use]
    pub fn in_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Number of products in a category.
    #[must_use]
    pub fn count_in_category(&self, category: Category) -> usize {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .count()
    }
}
