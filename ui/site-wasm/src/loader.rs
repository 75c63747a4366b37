//! Catalog loading: one fetch, fail-open.

use crate::api;
use crate::state::App;
use async_trait::async_trait;
use gloo_console as console;
use hmv_catalog::{Catalog, CatalogError, CatalogSource, load_catalog};

pub struct FetchSource {
    url: String,
}

impl FetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl CatalogSource for FetchSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch_text(&self) -> Result<String, CatalogError> {
        let resp = api::fetch_text(&self.url).await.map_err(CatalogError::Fetch)?;
        if !resp.ok {
            return Err(CatalogError::Status {
                status: resp.status,
                body: resp.body,
            });
        }
        Ok(resp.body)
    }
}

/// Load the catalog and install its store on the app.
///
/// Returns the catalog for injection, or `None` after logging the failure.
pub async fn load<S>(app: &App, source: &S) -> Option<Catalog>
where
    S: CatalogSource + ?Sized,
{
    let loaded = match load_catalog(source).await {
        Ok(loaded) => loaded,
        Err(e) => {
            console::error!(format!("Error loading product data from {}: {e}", source.location()));
            return None;
        }
    };

    for name in loaded.store.duplicate_names() {
        console::warn!(format!("duplicate product name {name:?}; the last entry wins"));
    }

    if app.store.set(loaded.store).is_err() {
        console::warn!("catalog store already populated; keeping the first load");
    }
    Some(loaded.catalog)
}
