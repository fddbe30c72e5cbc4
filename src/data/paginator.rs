use crate::error::ConfigError;

/// Slices an ordered sequence into fixed-size, 1-indexed pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

/// One page of items plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_items: usize,
    pub total_pages: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize(page_size));
        }
        Ok(Self { page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total_items / page_size)`, never less than 1 so an empty list
    /// still has a single empty page
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size).max(1)
    }

    /// Constrain a requested page to `[1, total_pages]`
    pub fn clamp(&self, page: usize, total_items: usize) -> usize {
        page.clamp(1, self.total_pages(total_items))
    }

    /// Slice out `page` exactly as given. Pages past the end are empty;
    /// callers clamp first when they need a valid page.
    pub fn paginate<'a, T>(&self, items: &'a [T], page: usize) -> Page<'a, T> {
        let total_items = items.len();
        let start = page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(total_items);
        let end = start.saturating_add(self.page_size).min(total_items);

        Page {
            items: &items[start..end],
            total_items,
            total_pages: self.total_pages(total_items),
        }
    }
}
