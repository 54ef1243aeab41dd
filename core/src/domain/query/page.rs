use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{params::PaginationParams, sql::calculate_total_pages};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64, pagination: &PaginationParams) -> Self {
        Self {
            data,
            pagination: PageInfo {
                page: pagination.page,
                page_size: pagination.page_size,
                total,
                total_pages: calculate_total_pages(total, pagination.page_size),
            },
        }
    }

    /// Slices an already filtered and ordered result set in memory.
    pub fn from_items(items: Vec<T>, pagination: &PaginationParams) -> Self {
        let total = items.len() as u64;
        let data = items
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.page_size as usize)
            .collect();

        Self::new(data, total, pagination)
    }
}
