use crate::domain::Product;
use crate::error::CartError;

/// Quantity increment for every cart mutation. Quantities are whole units.
pub const QUANTITY_STEP: u32 = 1;

/// One cart entry: a snapshot of the originating product plus the chosen
/// quantity.
///
/// Invariants: `quantity` stays within `1..=stock`. A line that would reach
/// zero or below is removed from the ledger, never kept non-positive.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: u32,
    pub name: String,
    pub price: f64,
    pub unit: String,
    pub stock: u32,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            unit: product.unit.clone(),
            stock: product.stock,
            image: product.image.clone(),
            quantity: QUANTITY_STEP,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// The cart state-holder: an ordered list of lines (at most one per product,
/// insertion order preserved for display) plus the discount percentage.
///
/// All mutation goes through these operations; the session actor owns the
/// single instance.
#[derive(Debug, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
    discount_percent: f64,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, product_id: u32) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }

    /// Adds one step of `product`, creating the line on first add.
    ///
    /// Rejected without mutation when the resulting quantity would exceed the
    /// product's stock.
    pub fn add_product(&mut self, product: &Product) -> Result<(), CartError> {
        let current = self.line(product.id).map_or(0, |line| line.quantity);
        let next = current + QUANTITY_STEP;
        if next > product.stock {
            return Err(CartError::StockExceeded {
                name: product.name.clone(),
                available: product.stock,
                unit: product.unit.clone(),
            });
        }

        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            Some(line) => line.quantity = next,
            None => self.lines.push(CartLine::from_product(product)),
        }
        Ok(())
    }

    /// Applies a signed quantity delta to an existing line.
    ///
    /// The quantity floors at one step; it cannot reach zero through this
    /// path. Exceeding the line's stock rejects without mutation. A missing
    /// line is a no-op.
    pub fn change_quantity(&mut self, product_id: u32, delta: i32) -> Result<(), CartError> {
        let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        else {
            return Ok(());
        };

        let next = i64::from(line.quantity) + i64::from(delta);
        if next > i64::from(line.stock) {
            return Err(CartError::StockExceeded {
                name: line.name.clone(),
                available: line.stock,
                unit: line.unit.clone(),
            });
        }

        line.quantity = next.max(i64::from(QUANTITY_STEP)) as u32;
        // Post-condition: no line survives at zero or below.
        self.lines.retain(|line| line.quantity > 0);
        Ok(())
    }

    /// Deletes the line for `product_id`. Removing a missing line is a no-op.
    pub fn remove_line(&mut self, product_id: u32) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Stores the discount percentage, clamped into `[0, 100]`. Non-finite
    /// input clamps to 0.
    pub fn set_discount_percent(&mut self, value: f64) {
        self.discount_percent = if value.is_finite() {
            value.clamp(0.0, 100.0)
        } else {
            0.0
        };
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn discount_amount(&self) -> f64 {
        self.subtotal() * self.discount_percent / 100.0
    }

    pub fn total(&self) -> f64 {
        self.subtotal() - self.discount_amount()
    }

    /// Empties the ledger and resets the discount.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.discount_percent = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn product(id: u32, name: &str, price: f64, stock: u32) -> Product {
        Product::new(id, name, Category::Rellenas, price, "u", stock, "", "🥟")
    }

    #[test]
    fn add_product_enforces_stock_ceiling() {
        let raviol = product(1, "Ravioles de Ricota", 3500.0, 15);
        let mut ledger = CartLedger::new();

        for _ in 0..15 {
            ledger.add_product(&raviol).expect("within stock");
        }
        assert_eq!(ledger.line(1).map(|line| line.quantity), Some(15));

        let err = ledger.add_product(&raviol).expect_err("16th add exceeds stock");
        assert_eq!(
            err,
            CartError::StockExceeded {
                name: "Ravioles de Ricota".to_string(),
                available: 15,
                unit: "u".to_string(),
            }
        );
        assert_eq!(ledger.line(1).map(|line| line.quantity), Some(15));
    }

    #[test]
    fn add_product_with_zero_stock_is_rejected() {
        let sold_out = product(9, "Agnolottis", 4200.0, 0);
        let mut ledger = CartLedger::new();

        assert!(ledger.add_product(&sold_out).is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn change_quantity_floors_at_one_step() {
        let tallarin = product(2, "Tallarines", 2000.0, 25);
        let mut ledger = CartLedger::new();
        ledger.add_product(&tallarin).unwrap();
        ledger.add_product(&tallarin).unwrap();

        for _ in 0..10 {
            ledger.change_quantity(2, -1).unwrap();
        }
        assert_eq!(ledger.line(2).map(|line| line.quantity), Some(1));
    }

    #[test]
    fn change_quantity_rejects_above_stock_without_mutation() {
        let capeleti = product(5, "Capeletis de Carne", 3800.0, 10);
        let mut ledger = CartLedger::new();
        for _ in 0..10 {
            ledger.add_product(&capeleti).unwrap();
        }

        let err = ledger.change_quantity(5, 1).expect_err("already at stock");
        assert!(matches!(err, CartError::StockExceeded { available: 10, .. }));
        assert_eq!(ledger.line(5).map(|line| line.quantity), Some(10));
    }

    #[test]
    fn change_quantity_on_missing_line_is_noop() {
        let mut ledger = CartLedger::new();
        ledger.change_quantity(99, 1).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn remove_line_deletes_only_the_target() {
        let raviol = product(1, "Ravioles de Ricota", 3500.0, 15);
        let tallarin = product(2, "Tallarines", 2000.0, 25);
        let mut ledger = CartLedger::new();
        ledger.add_product(&raviol).unwrap();
        ledger.add_product(&tallarin).unwrap();

        ledger.remove_line(1);
        assert!(ledger.line(1).is_none());
        assert_eq!(ledger.lines().len(), 1);

        // Removing an absent line is a no-op.
        ledger.remove_line(1);
        assert_eq!(ledger.lines().len(), 1);
    }

    #[test]
    fn discount_clamps_into_range() {
        let mut ledger = CartLedger::new();

        ledger.set_discount_percent(-10.0);
        assert_eq!(ledger.discount_percent(), 0.0);

        ledger.set_discount_percent(150.0);
        assert_eq!(ledger.discount_percent(), 100.0);

        ledger.set_discount_percent(f64::NAN);
        assert_eq!(ledger.discount_percent(), 0.0);

        ledger.set_discount_percent(35.0);
        assert_eq!(ledger.discount_percent(), 35.0);
    }

    #[test]
    fn totals_follow_the_discount_formula() {
        let tallarin = product(2, "Tallarines", 2000.0, 25);
        let mut ledger = CartLedger::new();
        for _ in 0..3 {
            ledger.add_product(&tallarin).unwrap();
        }

        assert_eq!(ledger.subtotal(), 6000.0);

        ledger.set_discount_percent(10.0);
        assert_eq!(ledger.discount_amount(), 600.0);
        assert_eq!(ledger.total(), 5400.0);

        ledger.set_discount_percent(100.0);
        assert_eq!(ledger.total(), 0.0);
    }

    #[test]
    fn subtotal_sums_across_lines() {
        let raviol = product(1, "Ravioles de Ricota", 3500.0, 15);
        let tallarin = product(2, "Tallarines", 2000.0, 25);
        let mut ledger = CartLedger::new();
        ledger.add_product(&raviol).unwrap();
        ledger.add_product(&raviol).unwrap();
        ledger.add_product(&tallarin).unwrap();

        assert_eq!(ledger.subtotal(), 2.0 * 3500.0 + 2000.0);
    }

    #[test]
    fn clear_resets_lines_and_discount() {
        let raviol = product(1, "Ravioles de Ricota", 3500.0, 15);
        let mut ledger = CartLedger::new();
        ledger.add_product(&raviol).unwrap();
        ledger.set_discount_percent(40.0);

        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.discount_percent(), 0.0);
        assert_eq!(ledger.subtotal(), 0.0);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let raviol = product(1, "Ravioles de Ricota", 3500.0, 15);
        let tallarin = product(2, "Tallarines", 2000.0, 25);
        let sorrentino = product(3, "Sorrentinos de J&Q", 4000.0, 12);
        let mut ledger = CartLedger::new();
        ledger.add_product(&tallarin).unwrap();
        ledger.add_product(&sorrentino).unwrap();
        ledger.add_product(&raviol).unwrap();
        ledger.add_product(&tallarin).unwrap();

        let ids: Vec<u32> = ledger.lines().iter().map(|line| line.product_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
