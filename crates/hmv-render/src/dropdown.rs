use hmv_catalog::Catalog;

/// One `<optgroup>` of the product picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<String>,
}

pub fn product_groups(catalog: &Catalog) -> Vec<OptionGroup> {
    catalog
        .categories
        .iter()
        .map(|category| OptionGroup {
            label: category.name.clone(),
            options: category.products.iter().map(|p| p.name.clone()).collect(),
        })
        .collect()
}
