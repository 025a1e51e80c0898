//! Employee entity model.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

/// An employee record as served by the upstream API.
///
/// The list and lookup endpoints use the long field names
/// (`employee_name`, ...) while the create endpoint echoes the short ones
/// (`name`, ...) with numbers rendered as strings. Both shapes
/// deserialize into this struct.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Upstream identifier.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: i64,
    /// Full name.
    #[serde(rename = "employee_name", alias = "name")]
    pub name: String,
    /// Annual salary.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(rename = "employee_salary", alias = "salary")]
    pub salary: i64,
    /// Age in years.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(rename = "employee_age", alias = "age")]
    pub age: i32,
    /// Profile image URL; upstream sends an empty string when unset.
    #[serde(default)]
    pub profile_image: Option<String>,
}
