use crate::RenderConfig;
use hmv_catalog::{Category, Product};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

/// Percent-encode the characters that would end a quoted CSS `url('...')`.
fn css_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for ch in url.chars() {
        match ch {
            '\'' => out.push_str("%27"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '\\' => out.push_str("%5C"),
            _ => out.push(ch),
        }
    }
    out
}

fn background_style(url: &str) -> String {
    format!("background-image: url('{}');", css_url(url))
}

/// Hero slides are numbered `1..=hero_slide_count`, not taken from the catalog.
pub fn hero_slides_html(cfg: &RenderConfig) -> String {
    (1..=cfg.hero_slide_count)
        .map(|i| {
            let url = format!("{}/slide{:02}.webp", cfg.hero_slide_dir, i);
            format!(
                r#"<div class="slide" style="{}"></div>"#,
                attr(&background_style(&url))
            )
        })
        .collect()
}

pub fn slider_wrapper_id(category: &Category) -> String {
    format!("slider-{}", category.id)
}

/// The products listed on a category card: the first `limit`, in catalog order.
pub fn category_summary(category: &Category, limit: usize) -> &[Product] {
    let end = category.products.len().min(limit);
    &category.products[..end]
}

pub fn category_block_html(category: &Category, limit: usize) -> String {
    let slides: String = category
        .images
        .iter()
        .map(|img| {
            format!(
                r#"<div class="product-slide" style="{}"></div>"#,
                attr(&background_style(img))
            )
        })
        .collect();

    let items: String = category_summary(category, limit)
        .iter()
        .map(|p| format!("<li>{}</li>", text(&p.name)))
        .collect();

    format!(
        r#"
            <div class="product-category">
                <div class="product-slider-wrapper" id="{id}">
                    <div class="product-slider">{slides}</div>
                </div>
                <div class="product-content">
                    <img src="{icon}" alt="{alt} Icon" class="product-icon">
                    <h3>{name}</h3>
                    <p>{description}</p>
                    <ul>{items}</ul>
                </div>
            </div>
        "#,
        id = attr(&slider_wrapper_id(category)),
        icon = attr(&category.icon),
        alt = attr(&category.name),
        name = text(&category.name),
        description = text(&category.description),
    )
}

/// Selector for the nav link pointing at a page section.
pub fn nav_link_selector(section_id: &str) -> String {
    format!(r##"a[href="#{}"]"##, section_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_with(count: usize) -> Category {
        Category {
            id: "spices".into(),
            name: "Spices".into(),
            description: "Aromatic".into(),
            icon: "assets/icons/spices.svg".into(),
            images: vec!["a.webp".into(), "b.webp".into()],
            products: (1..=count)
                .map(|i| Product {
                    name: format!("P{i}"),
                    hs_code: String::new(),
                    hs_name: String::new(),
                    desc: String::new(),
                })
                .collect(),
        }
    }

    fn listed(html: &str) -> Vec<String> {
        html.split("<li>")
            .skip(1)
            .map(|s| s.split("</li>").next().unwrap_or_default().to_owned())
            .collect()
    }

    #[test]
    fn hero_slides_follow_asset_numbering() {
        let html = hero_slides_html(&RenderConfig::default());
        assert_eq!(html.matches(r#"class="slide""#).count(), 5);
        assert!(html.contains("assets/slides/slide01.webp"));
        assert!(html.contains("assets/slides/slide05.webp"));
        assert!(!html.contains("slide06"));
    }

    #[test]
    fn summary_truncates_to_first_seven() {
        let cat = category_with(10);
        let names: Vec<_> = category_summary(&cat, 7).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["P1", "P2", "P3", "P4", "P5", "P6", "P7"]);
        assert_eq!(listed(&category_block_html(&cat, 7)), names);
    }

    #[test]
    fn summary_keeps_short_lists_whole() {
        for count in [0, 1, 7] {
            let cat = category_with(count);
            assert_eq!(category_summary(&cat, 7).len(), count);
            assert_eq!(listed(&category_block_html(&cat, 7)).len(), count);
        }
    }

    #[test]
    fn block_has_one_slide_per_image() {
        let html = category_block_html(&category_with(2), 7);
        assert_eq!(html.matches(r#"class="product-slide""#).count(), 2);
        assert!(html.contains(r#"id="slider-spices""#));
        assert!(html.contains(r#"alt="Spices Icon""#));
        assert!(html.contains("<h3>Spices</h3>"));
    }

    #[test]
    fn catalog_text_is_escaped() {
        let mut cat = category_with(1);
        cat.name = "<script>x</script>".into();
        cat.products[0].name = "Salt & Pepper".into();
        let html = category_block_html(&cat, 7);
        assert!(!html.contains("<script>"));
        assert!(html.contains("<li>Salt &amp; Pepper</li>"));
    }

    #[test]
    fn image_urls_cannot_close_the_css_url() {
        let mut cat = category_with(0);
        cat.images = vec!["a'); color: red; ('.webp".into(), r#"b".webp"#.into()];
        let html = category_block_html(&cat, 7);
        assert!(html.contains("url('a%27%29; color: red; %28%27.webp')"));
        assert!(html.contains("url('b&quot;.webp')"));
        assert!(!html.contains("a')"));
    }

    #[test]
    fn nav_selector_targets_section_anchor() {
        assert_eq!(nav_link_selector("products"), r##"a[href="#products"]"##);
    }
}
