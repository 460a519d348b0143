/// A registered customer of the shop.
///
/// Orders can be assigned to a customer before confirmation; the assignment
/// is display state only and carries no further semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: u32,
    pub name: String,
}

impl Customer {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
