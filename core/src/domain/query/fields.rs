use super::{
    QueryError,
    params::{Filters, PaginationParams, QueryParams},
    sql::{SqlFragment, build_order_by_clause, build_search_clause, build_where_clause},
};

/// Per-entity allow-lists mapping public field names to qualified columns.
///
/// Public names are what clients send (`filter_<name>`, `sortField=<name>`);
/// only the mapped column ever reaches SQL text.
#[derive(Debug, Clone, Copy)]
pub struct EntityFields {
    pub filters: &'static [(&'static str, &'static str)],
    pub sorts: &'static [(&'static str, &'static str)],
    pub search: &'static [&'static str],
    pub default_sort: &'static str,
}

impl EntityFields {
    pub fn filter_column(&self, name: &str) -> Option<&'static str> {
        lookup(self.filters, name)
    }

    pub fn sort_column(&self, name: &str) -> Option<&'static str> {
        lookup(self.sorts, name)
    }

    pub fn where_clause(&self, filters: &Filters) -> SqlFragment {
        let columns = filters
            .iter()
            .filter_map(|(name, value)| {
                self.filter_column(name)
                    .map(|column| (column, value.clone()))
            })
            .collect::<Filters>();
        let allowed = self
            .filters
            .iter()
            .map(|(_, column)| *column)
            .collect::<Vec<&str>>();

        build_where_clause(&columns, &allowed, None)
    }

    pub fn search_clause(&self, search: Option<&str>) -> SqlFragment {
        build_search_clause(search, self.search, None)
    }

    pub fn order_by_clause(&self, pagination: &PaginationParams) -> String {
        let column = pagination
            .sort_field
            .as_deref()
            .and_then(|name| self.sort_column(name));
        let allowed = self
            .sorts
            .iter()
            .map(|(_, column)| *column)
            .collect::<Vec<&str>>();

        build_order_by_clause(
            column,
            pagination.sort_order,
            &allowed,
            self.default_sort,
            None,
        )
    }

    /// `WHERE` over the filters and search text combined.
    pub fn conditions(&self, params: &QueryParams) -> SqlFragment {
        self.where_clause(&params.filters)
            .and(self.search_clause(params.search.as_deref()))
    }

    /// Rejects filter or sort names that are not allow-listed.
    pub fn check_strict(&self, params: &QueryParams) -> Result<(), QueryError> {
        if let Some((name, _)) = params
            .filters
            .iter()
            .find(|(name, _)| self.filter_column(name).is_none())
        {
            return Err(QueryError::UnknownFilterField(name.to_string()));
        }

        if let Some(name) = params.pagination.sort_field.as_deref()
            && self.sort_column(name).is_none()
        {
            return Err(QueryError::UnknownSortField(name.to_string()));
        }

        Ok(())
    }
}

fn lookup(entries: &[(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    entries
        .iter()
        .find(|(public, _)| *public == name)
        .map(|(_, column)| *column)
}
