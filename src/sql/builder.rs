//! Builds the parameterized statements for `shoppingentry`. Column names are fixed; values are always bound.

use crate::model::{ListFilter, UpdateEntryRequest};
use crate::store::ENTRY_TABLE;
use sqlx::{QueryBuilder, Sqlite};

/// Column list in `ShoppingEntry` field order.
pub const ENTRY_COLUMNS: &str = r#"id, created, "user", amount, name, market, done"#;

pub fn select_list(filter: &ListFilter) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::new(format!("SELECT {} FROM {}", ENTRY_COLUMNS, ENTRY_TABLE));
    if let Some(done) = filter.done {
        qb.push(" WHERE done = ").push_bind(done);
    }
    qb.push(" ORDER BY id ASC");
    qb
}

pub fn select_by_id() -> String {
    format!("SELECT {} FROM {} WHERE id = ?", ENTRY_COLUMNS, ENTRY_TABLE)
}

pub fn insert() -> String {
    format!(
        r#"INSERT INTO {} (created, "user", amount, name, market, done) VALUES (?, ?, ?, ?, ?, ?) RETURNING {}"#,
        ENTRY_TABLE, ENTRY_COLUMNS
    )
}

/// UPDATE ... SET only the fields present in the patch. `id` and `created` are never written.
/// Returns `None` for an empty patch.
pub fn update(id: i64, patch: &UpdateEntryRequest) -> Option<QueryBuilder<'static, Sqlite>> {
    if patch.is_empty() {
        return None;
    }
    let mut qb = QueryBuilder::new(format!("UPDATE {} SET ", ENTRY_TABLE));
    let mut sets = qb.separated(", ");
    if let Some(user) = &patch.user {
        sets.push(r#""user" = "#).push_bind_unseparated(user.clone());
    }
    if let Some(name) = &patch.name {
        sets.push("name = ").push_bind_unseparated(name.clone());
    }
    if let Some(market) = &patch.market {
        sets.push("market = ").push_bind_unseparated(market.clone());
    }
    if let Some(amount) = patch.amount {
        sets.push("amount = ").push_bind_unseparated(amount);
    }
    if let Some(done) = patch.done {
        sets.push("done = ").push_bind_unseparated(done);
    }
    qb.push(" WHERE id = ").push_bind(id);
    qb.push(format!(" RETURNING {}", ENTRY_COLUMNS));
    Some(qb)
}

pub fn delete() -> String {
    format!("DELETE FROM {} WHERE id = ?", ENTRY_TABLE)
}

pub fn count() -> String {
    format!("SELECT COUNT(*) FROM {}", ENTRY_TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_without_filter_is_ordered_by_id() {
        let qb = select_list(&ListFilter::default());
        assert_eq!(
            qb.sql(),
            r#"SELECT id, created, "user", amount, name, market, done FROM shoppingentry ORDER BY id ASC"#
        );
    }

    #[test]
    fn list_with_done_filter_binds_value() {
        let qb = select_list(&ListFilter { done: Some(false) });
        assert!(qb.sql().contains("WHERE done = ? ORDER BY id ASC"));
    }

    #[test]
    fn update_sets_only_present_fields() {
        let patch = UpdateEntryRequest {
            amount: Some(4),
            done: Some(true),
            ..Default::default()
        };
        let qb = update(3, &patch).unwrap();
        assert_eq!(
            qb.sql(),
            r#"UPDATE shoppingentry SET amount = ?, done = ? WHERE id = ? RETURNING id, created, "user", amount, name, market, done"#
        );
    }

    #[test]
    fn empty_update_builds_nothing() {
        assert!(update(1, &UpdateEntryRequest::default()).is_none());
    }
}
