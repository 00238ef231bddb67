//! Shopping entry shape, construction rule, and request payloads.

use serde::{Deserialize, Serialize};

/// A stored row of `shoppingentry`. `id` and `created` are owned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ShoppingEntry {
    pub id: i64,
    /// Nanoseconds since the Unix epoch.
    pub created: i64,
    pub user: String,
    pub amount: i64,
    pub name: String,
    pub market: String,
    pub done: bool,
}

/// An entry that has been constructed but not yet inserted, so it has no id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewShoppingEntry {
    pub created: i64,
    pub user: String,
    pub amount: i64,
    pub name: String,
    pub market: String,
    pub done: bool,
}

impl NewShoppingEntry {
    /// Stamps `created` with the current time and starts the entry as not done.
    /// Field contents are taken as given, including empty strings and non-positive amounts.
    pub fn new(user: impl Into<String>, name: impl Into<String>, market: impl Into<String>, amount: i64) -> Self {
        NewShoppingEntry {
            created: now_nanos(),
            user: user.into(),
            amount,
            name: name.into(),
            market: market.into(),
            done: false,
        }
    }
}

fn now_nanos() -> i64 {
    chrono::Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
}

/// Body of a create request. Missing fields decode to empty / zero; `id`, `created` and `done` are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateEntryRequest {
    pub user: String,
    pub name: String,
    pub market: String,
    pub amount: i64,
}

impl From<CreateEntryRequest> for NewShoppingEntry {
    fn from(req: CreateEntryRequest) -> Self {
        NewShoppingEntry::new(req.user, req.name, req.market, req.amount)
    }
}

/// Body of a PATCH request. Absent fields keep their stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateEntryRequest {
    pub user: Option<String>,
    pub name: Option<String>,
    pub market: Option<String>,
    pub amount: Option<i64>,
    pub done: Option<bool>,
}

impl UpdateEntryRequest {
    pub fn done(done: bool) -> Self {
        UpdateEntryRequest {
            done: Some(done),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_none()
            && self.name.is_none()
            && self.market.is_none()
            && self.amount.is_none()
            && self.done.is_none()
    }
}

/// Query string of the list endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListFilter {
    pub done: Option<bool>,
}
