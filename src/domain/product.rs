/// Pasta categories carried by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Rellenas,
    Secas,
}

/// A product in the shop catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub unit: String,
    pub stock: u32,
    pub description: String,
    pub image: String,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: Category,
        price: f64,
        unit: impl Into<String>,
        stock: u32,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            price,
            unit: unit.into(),
            stock,
            description: description.into(),
            image: image.into(),
        }
    }
}
