use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Location of the catalog document relative to the site root.
pub const DEFAULT_CATALOG_URL: &str = "data/products.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog fetch failed: {0}")]
    Fetch(String),
    #[error("catalog request returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("catalog document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

// ── Catalog document ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub hs_code: String,
    #[serde(default)]
    pub hs_name: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(text)?)
    }

    /// All products in document order: category order, then product order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.categories.iter().flat_map(|c| c.products.iter())
    }
}

// ── Store ────────────────────────────────────────────────────────────

/// The fields copied into the quotation form when a product is picked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Enrichment {
    pub hs_code: String,
    pub hs_name: String,
    pub description: String,
}

impl From<&Product> for Enrichment {
    fn from(product: &Product) -> Self {
        Self {
            hs_code: product.hs_code.clone(),
            hs_name: product.hs_name.clone(),
            description: product.desc.clone(),
        }
    }
}

/// Flat product-name index over a loaded catalog.
///
/// Product names are the key, so they must be unique across categories. When
/// a name repeats, the later product in document order replaces the earlier
/// one; the repeated names are kept in `duplicate_names()` for reporting.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    entries: HashMap<String, Enrichment>,
    duplicates: Vec<String>,
}

impl CatalogStore {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut store = Self::default();
        for product in catalog.products() {
            let previous = store
                .entries
                .insert(product.name.clone(), Enrichment::from(product));
            if previous.is_some() && !store.duplicates.contains(&product.name) {
                store.duplicates.push(product.name.clone());
            }
        }
        store
    }

    pub fn lookup(&self, product_name: &str) -> Option<&Enrichment> {
        self.entries.get(product_name)
    }

    pub fn duplicate_names(&self) -> &[String] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Write-once handle shared between the loader and the form controllers.
pub type SharedStore = Rc<OnceCell<CatalogStore>>;

pub fn shared_store() -> SharedStore {
    Rc::new(OnceCell::new())
}

// ── Loader ───────────────────────────────────────────────────────────

#[async_trait(?Send)]
pub trait CatalogSource {
    fn location(&self) -> &str;
    async fn fetch_text(&self) -> Result<String, CatalogError>;
}

#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub store: CatalogStore,
}

/// Fetch and parse the catalog once. No retry.
pub async fn load_catalog<S>(source: &S) -> Result<LoadedCatalog, CatalogError>
where
    S: CatalogSource + ?Sized,
{
    let text = source.fetch_text().await?;
    let catalog = Catalog::from_json(&text)?;
    let store = CatalogStore::from_catalog(&catalog);
    Ok(LoadedCatalog { catalog, store })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPICES: &str = r#"{
        "categories": [
            {
                "id": "c1",
                "name": "Spices",
                "products": [
                    { "name": "Turmeric", "hs_code": "0910", "hs_name": "Turmeric, dried", "desc": "Whole/ground" }
                ]
            }
        ]
    }"#;

    struct FixedSource(Result<&'static str, &'static str>);

    #[async_trait(?Send)]
    impl CatalogSource for FixedSource {
        fn location(&self) -> &str {
            "memory"
        }

        async fn fetch_text(&self) -> Result<String, CatalogError> {
            self.0
                .map(str::to_owned)
                .map_err(|e| CatalogError::Fetch(e.to_owned()))
        }
    }

    fn product(name: &str, hs_code: &str) -> Product {
        Product {
            name: name.to_owned(),
            hs_code: hs_code.to_owned(),
            hs_name: format!("{name} hs"),
            desc: format!("{name} desc"),
        }
    }

    fn category(id: &str, products: Vec<Product>) -> Category {
        Category {
            id: id.to_owned(),
            name: id.to_uppercase(),
            description: String::new(),
            icon: String::new(),
            images: Vec::new(),
            products,
        }
    }

    #[test]
    fn turmeric_lookup_returns_enrichment() {
        let catalog = Catalog::from_json(SPICES).unwrap();
        let store = CatalogStore::from_catalog(&catalog);

        assert_eq!(
            store.lookup("Turmeric"),
            Some(&Enrichment {
                hs_code: "0910".into(),
                hs_name: "Turmeric, dried".into(),
                description: "Whole/ground".into(),
            })
        );
        assert!(store.lookup("Cumin").is_none());
        assert!(store.lookup("").is_none());
    }

    #[test]
    fn every_product_is_indexed() {
        let catalog = Catalog {
            categories: vec![
                category("a", vec![product("Rice", "1006"), product("Wheat", "1001")]),
                category("b", vec![product("Onion", "0703")]),
            ],
        };
        let store = CatalogStore::from_catalog(&catalog);

        assert_eq!(store.len(), 3);
        for p in catalog.products() {
            let found = store.lookup(&p.name).unwrap();
            assert_eq!(found.hs_code, p.hs_code);
            assert_eq!(found.hs_name, p.hs_name);
            assert_eq!(found.description, p.desc);
        }
        assert!(store.duplicate_names().is_empty());
    }

    #[test]
    fn duplicate_names_keep_last_occurrence() {
        let catalog = Catalog {
            categories: vec![
                category("a", vec![product("Ginger", "0910"), product("Ginger", "0911")]),
                category("b", vec![product("Ginger", "0912")]),
            ],
        };
        let store = CatalogStore::from_catalog(&catalog);

        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup("Ginger").unwrap().hs_code, "0912");
        assert_eq!(store.duplicate_names(), ["Ginger".to_owned()]);
    }

    #[test]
    fn optional_category_fields_default_to_empty() {
        let catalog = Catalog::from_json(SPICES).unwrap();
        let spices = &catalog.categories[0];
        assert!(spices.images.is_empty());
        assert_eq!(spices.icon, "");
        assert_eq!(spices.description, "");
    }

    #[test]
    fn malformed_documents_are_parse_errors() {
        for text in ["", "not json", "{}", r#"{"categories": [{"id": "x"}]}"#, "[]"] {
            let err = Catalog::from_json(text).unwrap_err();
            assert!(matches!(err, CatalogError::Parse(_)), "{text:?} gave {err}");
        }
    }

    #[test]
    fn empty_store_from_default_catalog() {
        let store = CatalogStore::from_catalog(&Catalog::default());
        assert!(store.is_empty());
    }

    #[test]
    fn shared_store_accepts_a_single_write() {
        let shared = shared_store();
        let reader = shared.clone();
        assert!(reader.get().is_none());

        let store = CatalogStore::from_catalog(&Catalog::from_json(SPICES).unwrap());
        assert!(shared.set(store).is_ok());
        assert!(shared.set(CatalogStore::default()).is_err());
        assert!(reader.get().unwrap().lookup("Turmeric").is_some());
    }

    #[tokio::test]
    async fn load_catalog_builds_store() {
        let loaded = load_catalog(&FixedSource(Ok(SPICES))).await.unwrap();
        assert_eq!(loaded.catalog.categories.len(), 1);
        assert_eq!(loaded.store.len(), 1);
    }

    #[tokio::test]
    async fn load_catalog_reports_fetch_failure() {
        let err = load_catalog(&FixedSource(Err("offline"))).await.unwrap_err();
        assert!(matches!(err, CatalogError::Fetch(ref m) if m == "offline"));
    }

    #[tokio::test]
    async fn load_catalog_reports_malformed_body() {
        let err = load_catalog(&FixedSource(Ok("<html>404</html>")))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
