use serde::Serialize;

/// Filtered records split into a priority section and the rest.
///
/// Both sections keep the relative order of the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Featured<R> {
    pub featured: Vec<R>,
    pub regular: Vec<R>,
}

impl<R> Featured<R> {
    pub fn len(&self) -> usize {
        self.featured.len() + self.regular.len()
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.regular.is_empty()
    }

    /// Featured records followed by regular ones, the display order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.featured.iter().chain(self.regular.iter())
    }
}

/// Split an already-filtered result by `is_featured`.
pub fn partition_featured<R>(records: Vec<R>, is_featured: impl Fn(&R) -> bool) -> Featured<R> {
    let (featured, regular): (Vec<R>, Vec<R>) = records.into_iter().partition(|r| is_featured(r));
    Featured { featured, regular }
}
