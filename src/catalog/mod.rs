//! Read-only catalog and customer directory, validated once at startup.

mod fixtures;

pub use fixtures::{mock_customers, mock_products};

use std::collections::HashSet;

use crate::domain::{Category, Customer, Product};
use crate::error::CatalogError;

/// Catalog filter: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// The product catalog. Immutable for the lifetime of the process.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { id: product.id });
            }
            if product.price <= 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: product.id,
                    price: product.price,
                });
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId { id: product.id });
            }
        }
        Ok(Self { products })
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products matching the category filter and a case-insensitive name
    /// search, in catalog order.
    pub fn filter(&self, category: CategoryFilter, search_term: &str) -> Vec<&Product> {
        let needle = search_term.to_lowercase();
        self.products
            .iter()
            .filter(|product| {
                category.matches(product.category) && product.name.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

/// The customer directory. Immutable for the lifetime of the process.
#[derive(Debug)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    pub fn new(customers: Vec<Customer>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for customer in &customers {
            if customer.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { id: customer.id });
            }
            if !seen.insert(customer.id) {
                return Err(CatalogError::DuplicateId { id: customer.id });
            }
        }
        Ok(Self { customers })
    }

    pub fn get(&self, id: u32) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_pass_validation() {
        let catalog = Catalog::new(mock_products()).expect("fixture catalog is valid");
        assert_eq!(catalog.products().len(), 8);

        let directory =
            CustomerDirectory::new(mock_customers()).expect("fixture directory is valid");
        assert_eq!(directory.customers().len(), 8);
    }

    #[test]
    fn rejects_empty_name() {
        let bad = vec![Product::new(
            1,
            "   ",
            Category::Secas,
            2000.0,
            "u",
            5,
            "",
            "🍝",
        )];
        match Catalog::new(bad) {
            Err(CatalogError::EmptyName { id }) => assert_eq!(id, 1),
            other => panic!("expected EmptyName, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_positive_price() {
        let bad = vec![Product::new(
            2,
            "Tallarines",
            Category::Secas,
            0.0,
            "u",
            5,
            "",
            "🍝",
        )];
        match Catalog::new(bad) {
            Err(CatalogError::InvalidPrice { id: 2, price }) => assert_eq!(price, 0.0),
            other => panic!("expected InvalidPrice, got {:?}", other),
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let bad = vec![
            Product::new(3, "Sorrentinos", Category::Rellenas, 4000.0, "u", 12, "", "🥟"),
            Product::new(3, "Canelones", Category::Rellenas, 3200.0, "u", 18, "", "📦"),
        ];
        match Catalog::new(bad) {
            Err(CatalogError::DuplicateId { id }) => assert_eq!(id, 3),
            other => panic!("expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn filter_honors_category_and_search() {
        let catalog = Catalog::new(mock_products()).unwrap();

        let rellenas = catalog.filter(CategoryFilter::Only(Category::Rellenas), "");
        assert_eq!(rellenas.len(), 4);
        assert!(rellenas.iter().all(|p| p.category == Category::Rellenas));

        let search = catalog.filter(CategoryFilter::All, "RAVIOLES");
        assert_eq!(search.len(), 1);
        assert_eq!(search[0].name, "Ravioles de Ricota");

        let both = catalog.filter(CategoryFilter::Only(Category::Secas), "ravioles");
        assert!(both.is_empty());

        let everything = catalog.filter(CategoryFilter::All, "");
        assert_eq!(everything.len(), 8);
    }
}
