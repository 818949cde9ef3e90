// Server-built HTML for the demo pages. Values that came from users or the
// remote services are escaped before they land in markup.

use product_desk_core::manager::ProductManager;
use product_desk_core::worldtime::TimezoneRecord;

/// Minimal escaping for text and attribute positions.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1"/>
    <title>{title}</title>
    <style>
        body {{ font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 640px; padding: 0 1rem; }}
        form div {{ margin-bottom: 0.75rem; }}
        label {{ display: block; margin-bottom: 0.25rem; }}
        input {{ border: 1px solid #ccc; border-radius: 4px; padding: 0.5rem; width: 100%; }}
        button {{ border: 0; border-radius: 4px; color: white; cursor: pointer; padding: 0.5rem 1rem; }}
        button[formaction$="/update"], form > button {{ background: #3b82f6; }}
        button[formaction$="/delete"] {{ background: #ef4444; }}
        button[formaction$="/insert"] {{ background: #22c55e; }}
        .row {{ display: flex; gap: 1rem; margin-top: 1rem; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ border: 1px solid #ccc; border-radius: 4px; margin: 0.5rem 0; }}
        li a {{ color: inherit; display: block; padding: 0.5rem; text-decoration: none; }}
        .detail {{ border: 1px solid #ccc; border-radius: 4px; padding: 1rem; }}
        .message {{ margin-top: 1rem; }}
    </style>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

pub fn render_index_page() -> String {
    let body = r#"<h1>Product Desk</h1>
<ul>
    <li><a href="/products">Manage Products</a></li>
    <li><a href="/mock">Current Time</a></li>
</ul>"#;
    page("Product Desk", body)
}

/// The time page shows exactly one field of the fetched record; the rest of
/// the snapshot is discarded.
pub fn render_time_page(record: &TimezoneRecord) -> String {
    let timezone = record.timezone.as_deref().unwrap_or("");
    let body = format!(
        "<h1>Timezone: {}</h1>\n<p></p>",
        escape_html(timezone)
    );
    page("Current Time", &body)
}

pub fn render_products_page(manager: &ProductManager) -> String {
    let mut body = String::new();

    body.push_str("<h1>Manage Products</h1>\n");

    // One set of fields, three actions. Update is the form's default
    // submit; delete skips browser validation since it only needs the id.
    body.push_str(&format!(
        r#"<form method="post" action="/products/update">
    <div>
        <label for="id">Product ID (For Update/Delete)</label>
        <input type="text" id="id" name="id" value="{id}">
    </div>
    <div>
        <label for="product">Product Name</label>
        <input type="text" id="product" name="product" value="{product}" required>
    </div>
    <div>
        <label for="price">Price</label>
        <input type="number" id="price" name="price" value="{price}" step="any" required>
    </div>
    <button type="submit">Update Product</button>
    <div class="row">
        <button type="submit" formaction="/products/delete" formnovalidate>Delete Product</button>
        <button type="submit" formaction="/products/insert">Insert Product</button>
    </div>
</form>
"#,
        id = escape_html(&manager.form.id),
        product = escape_html(&manager.form.product),
        price = manager.form.price,
    ));

    if let Some(message) = &manager.message {
        body.push_str(&format!(
            "<p class=\"message\">{}</p>\n",
            escape_html(message)
        ));
    }

    body.push_str("<h2>All Products</h2>\n");
    if manager.products.is_empty() {
        body.push_str("<p>No products available.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for product in &manager.products {
            body.push_str(&format!(
                r#"    <li><a href="/products/select/{id}">
        <strong>ID:</strong> {id} <br>
        <strong>Product:</strong> {name} <br>
        <strong>Price:</strong> ${price}
    </a></li>
"#,
                id = escape_html(&product.id),
                name = escape_html(&product.product),
                price = product.price,
            ));
        }
        body.push_str("</ul>\n");
    }

    if let Some(selected) = &manager.selected_product {
        body.push_str("<h2>Selected Product</h2>\n<div class=\"detail\">\n");
        body.push_str(&format!(
            "    <div><strong>id: </strong>{}</div>\n",
            escape_html(&selected.id)
        ));
        body.push_str(&format!(
            "    <div><strong>product: </strong>{}</div>\n",
            escape_html(&selected.product)
        ));
        body.push_str(&format!(
            "    <div><strong>price: </strong>{}</div>\n",
            selected.price
        ));
        body.push_str("</div>\n");
    }

    page("Manage Products", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use product_desk_core::models::{Product, ProductForm};
    use product_desk_core::products_api::ProductsApiClient;

    fn test_manager() -> ProductManager {
        ProductManager::new(ProductsApiClient::new("http://127.0.0.1:1"))
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        let manager = test_manager();
        let html = render_products_page(&manager);
        assert!(html.contains("<h1>Manage Products</h1>"));
        assert!(html.contains("No products available."));
        assert!(!html.contains("Selected Product"));
    }

    #[test]
    fn test_list_entries_render_labeled_fields() {
        let mut manager = test_manager();
        manager.products.push(Product {
            id: "1".to_string(),
            product: "Widget".to_string(),
            price: 9.99,
        });

        let html = render_products_page(&manager);
        assert!(html.contains("<strong>ID:</strong> 1"));
        assert!(html.contains("<strong>Product:</strong> Widget"));
        assert!(html.contains("<strong>Price:</strong> $9.99"));
        assert!(html.contains("/products/select/1"));
        assert!(!html.contains("No products available."));
    }

    #[test]
    fn test_form_retains_current_values() {
        let mut manager = test_manager();
        manager.form = ProductForm {
            id: "3".to_string(),
            product: "Gadget".to_string(),
            price: 14.5,
        };

        let html = render_products_page(&manager);
        assert!(html.contains(r#"name="id" value="3""#));
        assert!(html.contains(r#"name="product" value="Gadget""#));
        assert!(html.contains(r#"name="price" value="14.5""#));
    }

    #[test]
    fn test_message_renders_only_when_set() {
        let mut manager = test_manager();
        assert!(!render_products_page(&manager).contains("class=\"message\""));

        manager.message = Some("Product inserted successfully!".to_string());
        let html = render_products_page(&manager);
        assert!(html.contains("Product inserted successfully!"));
    }

    #[test]
    fn test_selected_product_renders_detail_rows() {
        let mut manager = test_manager();
        manager.selected_product = Some(Product {
            id: "5".to_string(),
            product: "Gizmo".to_string(),
            price: 19.99,
        });

        let html = render_products_page(&manager);
        assert!(html.contains("<h2>Selected Product</h2>"));
        assert!(html.contains("<strong>id: </strong>5"));
        assert!(html.contains("<strong>product: </strong>Gizmo"));
        assert!(html.contains("<strong>price: </strong>19.99"));
    }

    #[test]
    fn test_product_names_are_escaped() {
        let mut manager = test_manager();
        manager.products.push(Product {
            id: "1".to_string(),
            product: "<script>alert(1)</script>".to_string(),
            price: 1.0,
        });

        let html = render_products_page(&manager);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_time_page_renders_timezone_heading() {
        let record: TimezoneRecord =
            serde_json::from_str(r#"{"timezone": "America/Vancouver"}"#).unwrap();
        let html = render_time_page(&record);
        assert!(html.contains("<h1>Timezone: America/Vancouver</h1>"));
    }

    #[test]
    fn test_time_page_tolerates_missing_field() {
        let record: TimezoneRecord = serde_json::from_str("{}").unwrap();
        let html = render_time_page(&record);
        assert!(html.contains("<h1>Timezone: </h1>"));
    }

    #[test]
    fn test_escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
