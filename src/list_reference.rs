/// A possibly unbound reference to a host-owned list property.
pub struct ListReference<'a, T> {
    property: String,
    list: Option<&'a mut Vec<T>>,
}

impl<'a, T> ListReference<'a, T> {
    pub fn bind(property: impl Into<String>, list: &'a mut Vec<T>) -> Self {
        Self {
            property: property.into(),
            list: Some(list),
        }
    }

    pub fn unbound(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            list: None,
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn is_valid(&self) -> bool {
        self.list.is_some()
    }

    /// Appends `item`. Returns false, dropping the item, if the reference is unbound.
    pub fn append(&mut self, item: T) -> bool {
        match self.list.as_deref_mut() {
            Some(list) => {
                list.push(item);
                true
            }
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.list.as_deref().map_or(0, Vec::len)
    }

    pub fn at(&self, index: usize) -> Option<&T> {
        self.list.as_deref().and_then(|list| list.get(index))
    }

    pub fn clear(&mut self) -> bool {
        match self.list.as_deref_mut() {
            Some(list) => {
                list.clear();
                true
            }
            None => false,
        }
    }
}
