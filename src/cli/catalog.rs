//! Static product catalog shown by the `/catalog` command.

use std::fmt::Write;

/// One catalog item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub price: f64,
    pub quantity: u32,
}

const fn produce(name: &'static str, description: &'static str, price: f64, quantity: u32) -> Product {
    Product {
        name,
        description,
        category: "Produce",
        price,
        quantity,
    }
}

pub const PRODUCT_CATALOG: [Product; 10] = [
    produce("Gala Apples", "Sweet and crisp Gala apples, perfect for snacking.", 1.99, 100),
    produce("Ripe Bananas", "Fresh, ripe bananas, a good source of potassium.", 0.50, 50),
    produce("Navel Oranges", "Juicy and seedless Navel oranges, rich in Vitamin C.", 0.75, 75),
    produce("Strawberries", "Sweet and juicy strawberries, perfect for desserts and snacks.", 3.99, 60),
    produce("Avocados", "Creamy and nutritious avocados, a good source of healthy fats.", 1.50, 40),
    produce("Red Grapes", "Sweet and crisp red grapes, perfect for snacking.", 2.99, 30),
    produce("Blueberries", "Fresh blueberries, packed with antioxidants.", 4.99, 80),
    produce("Lemons", "Tart and juicy lemons, perfect for cooking and drinks.", 0.60, 90),
    produce("Watermelon", "Sweet and refreshing watermelon, perfect for summer.", 5.99, 55),
    produce("Pineapple", "Tropical pineapple, sweet and juicy.", 3.50, 65),
];

/// Render products as text blocks: name, description, then price and stock.
pub fn render_catalog(products: &[Product]) -> String {
    let mut out = String::new();
    for product in products {
        let _ = writeln!(out, "{} ({})", product.name, product.category);
        let _ = writeln!(out, "  {}", product.description);
        let _ = writeln!(
            out,
            "  ${:.2} | Stock: {}",
            product.price, product.quantity
        );
    }
    out
}
