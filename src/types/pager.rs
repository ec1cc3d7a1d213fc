use std::borrow::Cow;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{config::CONFIG, store::PreferenceStore};

pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Transitions that would change nothing return `self` as [`Cow::Borrowed`].
///
/// ```
/// use list_pager::types::Pager;
///
/// let pager = Pager::new(23, 2, 10);
/// assert_eq!((pager.item_first(), pager.item_last()), (21, 23));
/// assert!(!pager.can_go_next());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PagerFields")]
pub struct Pager {
    number_of_items: u64,
    page: u64,
    page_size: u64,
    skip: u64,
    item_first: u64,
    item_last: u64,
    can_go_next: bool,
    can_go_prev: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PagerFields {
    number_of_items: u64,
    #[serde(default)]
    page: u64,
    #[serde(default = "default_page_size")]
    page_size: u64,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn page_size_key(key: &str) -> String {
    format!("{}.pageSize", key)
}

fn last_page(number_of_items: u64, page_size: u64) -> u64 {
    number_of_items.div_ceil(page_size).saturating_sub(1)
}

impl Pager {
    /// A zero `page_size` is treated as 1.
    pub fn new(number_of_items: u64, page: u64, page_size: u64) -> Self {
        let page_size = page_size.max(1);
        let skip = page.saturating_mul(page_size);
        let item_first = if number_of_items > 0 {
            skip.saturating_add(1)
        } else {
            0
        };
        let item_last = skip.saturating_add(page_size).min(number_of_items);

        Self {
            number_of_items,
            page,
            page_size,
            skip,
            item_first,
            item_last,
            can_go_next: item_last < number_of_items,
            can_go_prev: page > 0,
        }
    }

    pub fn with_count(number_of_items: u64) -> Self {
        Self::new(number_of_items, 0, DEFAULT_PAGE_SIZE)
    }

    /// Reads `<key>.pageSize`.
    pub fn from_local_store<S>(key: &str, store: &S, default_size: u64) -> Self
    where
        S: PreferenceStore + ?Sized,
    {
        let key = page_size_key(key);
        let fallback = i64::try_from(default_size).unwrap_or(i64::MAX);
        let page_size = u64::try_from(store.get_int(&key, fallback))
            .ok()
            .filter(|size| *size > 0)
            .unwrap_or(default_size);

        debug!("Loaded page size {} from {}", page_size, key);
        Self::new(0, 0, page_size)
    }

    pub fn from_local_store_or_default<S>(key: &str, store: &S) -> Self
    where
        S: PreferenceStore + ?Sized,
    {
        Self::from_local_store(key, store, CONFIG.paging.default_page_size)
    }

    pub fn save_to<S>(&self, key: &str, store: &mut S)
    where
        S: PreferenceStore + ?Sized,
    {
        let key = page_size_key(key);
        debug!("Saving page size {} to {}", self.page_size, key);
        store.set_int(&key, i64::try_from(self.page_size).unwrap_or(i64::MAX));
    }

    pub fn number_of_items(&self) -> u64 {
        self.number_of_items
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn item_first(&self) -> u64 {
        self.item_first
    }

    pub fn item_last(&self) -> u64 {
        self.item_last
    }

    pub fn can_go_next(&self) -> bool {
        self.can_go_next
    }

    pub fn can_go_prev(&self) -> bool {
        self.can_go_prev
    }

    pub fn page_count(&self) -> u64 {
        self.number_of_items.div_ceil(self.page_size)
    }

    pub fn last_page(&self) -> u64 {
        last_page(self.number_of_items, self.page_size)
    }

    pub fn reset(&self) -> Cow<'_, Self> {
        if self.number_of_items == 0 && self.page == 0 {
            return Cow::Borrowed(self);
        }
        Cow::Owned(Self::new(0, 0, self.page_size))
    }

    pub fn go_next(&self) -> Cow<'_, Self> {
        if !self.can_go_next {
            return Cow::Borrowed(self);
        }
        Cow::Owned(Self::new(self.number_of_items, self.page + 1, self.page_size))
    }

    pub fn go_prev(&self) -> Cow<'_, Self> {
        if !self.can_go_prev {
            return Cow::Borrowed(self);
        }
        Cow::Owned(Self::new(self.number_of_items, self.page - 1, self.page_size))
    }

    /// Moves to the new last page when the current one no longer exists.
    pub fn set_count(&self, number_of_items: u64) -> Cow<'_, Self> {
        let page = self.page.min(last_page(number_of_items, self.page_size));
        if number_of_items == self.number_of_items && page == self.page {
            return Cow::Borrowed(self);
        }
        Cow::Owned(Self::new(number_of_items, page, self.page_size))
    }

    pub fn increment_count(&self) -> Self {
        self.set_count(self.number_of_items.saturating_add(1))
            .into_owned()
    }

    pub fn decrement_count(&self) -> Cow<'_, Self> {
        self.set_count(self.number_of_items.saturating_sub(1))
    }

    pub fn set_page_size(&self, page_size: u64) -> Cow<'_, Self> {
        if page_size.max(1) == self.page_size && self.page == 0 {
            return Cow::Borrowed(self);
        }
        Cow::Owned(Self::new(self.number_of_items, 0, page_size))
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::with_count(0)
    }
}

impl From<PagerFields> for Pager {
    fn from(fields: PagerFields) -> Self {
        Self::new(fields.number_of_items, fields.page, fields.page_size)
    }
}
