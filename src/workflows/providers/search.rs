use serde::{Deserialize, Serialize};
use tracing::debug;

use super::directory::ProviderDirectory;
use super::domain::{Provider, ProviderGender, ProviderType};

/// Active filter facets. `None` on a facet means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub provider_type: Option<ProviderType>,
    pub specialty: Option<String>,
    pub language: Option<String>,
    pub gender: Option<ProviderGender>,
    pub state: Option<String>,
    /// When set, only providers accepting new patients match.
    pub accepting_new_patients: bool,
    /// Case-insensitive substring of name or organization.
    pub search_term: String,
}

impl FilterCriteria {
    pub fn is_unrestricted(&self) -> bool {
        self.provider_type.is_none()
            && self.specialty.is_none()
            && self.language.is_none()
            && self.gender.is_none()
            && self.state.is_none()
            && !self.accepting_new_patients
            && self.search_term.trim().is_empty()
    }

    pub fn matches(&self, provider: &Provider) -> bool {
        if let Some(kind) = self.provider_type {
            if provider.provider_type != kind {
                return false;
            }
        }
        if let Some(specialty) = &self.specialty {
            if !provider.specialty.eq_ignore_ascii_case(specialty) {
                return false;
            }
        }
        if let Some(language) = &self.language {
            if !provider.speaks(language) {
                return false;
            }
        }
        if let Some(gender) = self.gender {
            if provider.gender != gender {
                return false;
            }
        }
        if let Some(state) = &self.state {
            if !provider.state.eq_ignore_ascii_case(state) {
                return false;
            }
        }
        if self.accepting_new_patients && !provider.accepting_new_patients {
            return false;
        }

        let term = self.search_term.trim().to_lowercase();
        term.is_empty()
            || provider.name.to_lowercase().contains(&term)
            || provider.organization.to_lowercase().contains(&term)
    }
}

/// Providers satisfying every active facet, in dataset order.
pub fn search<'a>(providers: &'a [Provider], criteria: &FilterCriteria) -> Vec<&'a Provider> {
    providers
        .iter()
        .filter(|provider| criteria.matches(provider))
        .collect()
}

/// One slice of a result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page actually served after clamping.
    pub page_number: usize,
    pub page_size: usize,
    pub total_count: usize,
    /// Zero when the list is empty.
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    /// 1-based position of the first item on the page, or 0 when empty.
    pub fn first_item_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page_number - 1) * self.page_size + 1
        }
    }
}

/// Slice `items` into pages of `page_size`. Page numbers below 1 serve page 1; numbers past
/// the end serve the last page. A page size of 0 is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page_number: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size);
    let page_number = page_number.clamp(1, total_pages.max(1));

    let start = ((page_number - 1) * page_size).min(total_count);
    let end = (start + page_size).min(total_count);

    Page {
        items: items[start..end].to_vec(),
        page_number,
        page_size,
        total_count,
        total_pages,
    }
}

/// Stateful search over a directory: keeps the criteria and the current page, and sends the
/// user back to page 1 whenever the criteria change.
#[derive(Debug, Clone)]
pub struct ProviderSearch<'a> {
    directory: &'a ProviderDirectory,
    criteria: FilterCriteria,
    page_number: usize,
    page_size: usize,
}

impl<'a> ProviderSearch<'a> {
    pub fn new(directory: &'a ProviderDirectory, page_size: usize) -> Self {
        Self {
            directory,
            criteria: FilterCriteria::default(),
            page_number: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page_number = 1;
    }

    /// Apply an edit to the criteria. Always lands on page 1.
    pub fn update<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut FilterCriteria),
    {
        edit(&mut self.criteria);
        self.page_number = 1;
        debug!(criteria = ?self.criteria, "provider filters changed");
    }

    pub fn reset(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    pub fn results(&self) -> Vec<&'a Provider> {
        search(self.directory.providers(), &self.criteria)
    }

    pub fn current_page(&self) -> Page<&'a Provider> {
        paginate(&self.results(), self.page_number, self.page_size)
    }

    /// Jump to a page; out-of-range requests settle on the nearest valid page.
    pub fn go_to_page(&mut self, page_number: usize) -> usize {
        self.page_number = paginate(&self.results(), page_number, self.page_size).page_number;
        self.page_number
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.page_number + 1)
    }

    pub fn previous_page(&mut self) -> usize {
        self.go_to_page(self.page_number.saturating_sub(1))
    }
}
