//! Audit entry data structures
//!
//! Defines the structure of audit log entries including operation types,
//! entity types, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created or an entry appended
    Create,
    /// Existing value was replaced
    Update,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Account,
    Income,
    Expense,
    Budget,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Account => write!(f, "Account"),
            EntityType::Income => write!(f, "Income"),
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Budget => write!(f, "Budget"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Username owning the affected ledger
    pub username: String,

    /// Category the operation touched, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Value before the operation (for updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Value after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        username: impl Into<String>,
        category: Option<String>,
        value: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            username: username.into(),
            category,
            before: None,
            after: serde_json::to_value(value).ok(),
        }
    }

    /// Create a new audit entry for an update operation
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        username: impl Into<String>,
        category: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_type,
            username: username.into(),
            category,
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.username
        );

        if let Some(category) = &self.category {
            output.push_str(&format!(" '{}'", category));
        }

        match (&self.before, &self.after) {
            (Some(before), Some(after)) => output.push_str(&format!(
                ": {} -> {}",
                self.render_value(before),
                self.render_value(after)
            )),
            (None, Some(after)) => output.push_str(&format!(": {}", self.render_value(after))),
            _ => {}
        }

        output
    }

    /// Amounts are stored as cents; show them the way the menus do
    fn render_value(&self, value: &serde_json::Value) -> String {
        if self.entity_type == EntityType::Account {
            return value.to_string();
        }
        match serde_json::from_value::<Money>(value.clone()) {
            Ok(amount) => amount.to_string(),
            Err(_) => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
    }

    #[test]
    fn test_entity_type_display() {
        assert_eq!(EntityType::Account.to_string(), "Account");
        assert_eq!(EntityType::Budget.to_string(), "Budget");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            EntityType::Income,
            "alice",
            Some("salary".to_string()),
            &json!(1000),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Income);
        assert_eq!(entry.username, "alice");
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(json!(1000)));
    }

    #[test]
    fn test_update_entry() {
        let entry = AuditEntry::update(
            EntityType::Budget,
            "alice",
            Some("food".to_string()),
            &json!(100),
            &json!(250),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.before, Some(json!(100)));
        assert_eq!(entry.after, Some(json!(250)));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry =
            AuditEntry::create(EntityType::Account, "bob", None, &json!({"username": "bob"}));

        let line = serde_json::to_string(&entry).unwrap();
        assert!(!line.contains("category"));
        assert!(!line.contains("before"));

        let deserialized: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.entity_type, EntityType::Account);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            EntityType::Budget,
            "alice",
            Some("food".to_string()),
            &Money::from_cents(10_000),
            &Money::from_cents(25_050),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Budget alice 'food'"));
        assert!(formatted.ends_with(": 100.00 -> 250.50"));
    }

    #[test]
    fn test_human_readable_account_value_kept_as_json() {
        let entry =
            AuditEntry::create(EntityType::Account, "bob", None, &json!({"username": "bob"}));

        assert!(entry
            .format_human_readable()
            .ends_with("CREATE Account bob: {\"username\":\"bob\"}"));
    }
}
