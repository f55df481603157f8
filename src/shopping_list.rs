use crate::models::Product;
use crate::stepper::Stepper;

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListEntry {
    pub product: Product,
    quantity: Stepper,
}

impl ShoppingListEntry {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: Stepper::default(),
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.value()
    }

    pub fn can_decrease(&self) -> bool {
        self.quantity.can_decrement()
    }

    pub fn line_cost(&self) -> f64 {
        self.product.unit_cost * f64::from(self.quantity())
    }
}

/// Generated products, keyed by position, each with its own quantity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShoppingList {
    entries: Vec<ShoppingListEntry>,
}

impl ShoppingList {
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            entries: products.into_iter().map(ShoppingListEntry::new).collect(),
        }
    }

    pub fn entries(&self) -> &[ShoppingListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Returns the new quantity, None for a bad index
    pub fn increase(&mut self, index: usize) -> Option<u32> {
        self.entries.get_mut(index).map(|e| e.quantity.increment())
    }

    pub fn decrease(&mut self, index: usize) -> Option<u32> {
        self.entries.get_mut(index).map(|e| e.quantity.decrement())
    }

    /// Unrounded sum of every line.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(ShoppingListEntry::line_cost).sum()
    }

    pub fn formatted_total(&self) -> String {
        format_cost(self.total())
    }
}

pub fn format_cost(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
pub(crate) fn product(name: &str, cost: f64, ai: bool) -> Product {
    Product {
        name: name.to_string(),
        brand: "Marque".to_string(),
        unit_cost: cost,
        volume_label: "500 g".to_string(),
        image_url: format!("https://img.example/{}.png", name),
        ai_suggested: ai,
    }
}
