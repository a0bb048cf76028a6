//! Translation of [`ListingQuery`] into PostgREST query parameters.
//!
//! PostgREST filters are `column=op.value` pairs; `ilike` patterns use `*`
//! as the wildcard, which is also what [`ListingQuery`] uses. Values are
//! passed through unchanged and percent-encoded by the HTTP client.

use crate::domain::{ListingQuery, Predicate};

/// Query parameters for a `GET` against the collection, in request order.
#[must_use]
pub fn query_params(query: &ListingQuery) -> Vec<(String, String)> {
    let mut params = Vec::with_capacity(query.predicates().len() + 3);
    params.push(("select".to_string(), "*".to_string()));

    for predicate in query.predicates() {
        let pair = match predicate {
            Predicate::Eq { column, value } => (column.to_string(), format!("eq.{value}")),
            Predicate::ILike { column, pattern } => {
                (column.to_string(), format!("ilike.{pattern}"))
            }
        };
        params.push(pair);
    }

    let order = query.order();
    let direction = if order.descending { "desc" } else { "asc" };
    params.push(("order".to_string(), format!("{}.{direction}", order.column)));
    params.push(("limit".to_string(), query.limit().to_string()));
    params
}
