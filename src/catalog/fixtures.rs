//! In-memory fixture data, re-created on every run. There is no backing
//! store behind these records.

use crate::domain::{Category, Customer, Product};

pub fn mock_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Ravioles de Ricota",
            Category::Rellenas,
            3500.0,
            "u",
            15,
            "Masa casera rellena de ricota y espinaca",
            "🥟",
        ),
        Product::new(
            2,
            "Tallarines",
            Category::Secas,
            2000.0,
            "u",
            25,
            "Tallarines artesanales de sémola",
            "🍝",
        ),
        Product::new(
            3,
            "Sorrentinos de J&Q",
            Category::Rellenas,
            4000.0,
            "u",
            12,
            "Sorrentinos rellenos de jamón y muzza",
            "🥟",
        ),
        Product::new(
            4,
            "Ñoquis de Papa",
            Category::Secas,
            2500.0,
            "u",
            20,
            "Ñoquis tradicionales de papa",
            "🥔",
        ),
        Product::new(
            5,
            "Capeletis de Carne",
            Category::Rellenas,
            3800.0,
            "u",
            10,
            "Capeletis rellenos de carne vacuna",
            "🥟",
        ),
        Product::new(
            6,
            "Fideos Moñitos",
            Category::Secas,
            1800.0,
            "u",
            30,
            "Moñitos de sémola",
            "🎀",
        ),
        Product::new(
            7,
            "Canelones",
            Category::Rellenas,
            3200.0,
            "u",
            18,
            "Masa para canelones lista para rellenar",
            "📦",
        ),
        Product::new(
            8,
            "Fettuccine",
            Category::Secas,
            2200.0,
            "u",
            22,
            "Fettuccine al huevo",
            "🍝",
        ),
    ]
}

pub fn mock_customers() -> Vec<Customer> {
    vec![
        Customer::new(1, "Juan Pérez"),
        Customer::new(2, "María Gómez"),
        Customer::new(3, "Carlos López"),
        Customer::new(4, "Ana Rodríguez"),
        Customer::new(5, "Lucía Fernández"),
        Customer::new(6, "Santiago Morales"),
        Customer::new(7, "Paula Herrera"),
        Customer::new(8, "Diego Suárez"),
    ]
}
