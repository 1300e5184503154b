//! Permission vocabulary: the closed catalog of modules and operations.
//!
//! The server shares this vocabulary; wire spellings differ from the Rust
//! names for two modules (`Activity_Logs`, `Site_Configs`) and operations
//! travel upper-case.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use steward_core::{DomainError, PermissionId};

/// A protected resource category of the console.
///
/// Fixed, closed set known at build time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Module {
    Users,
    Roles,
    #[serde(rename = "Activity_Logs")]
    ActivityLogs,
    Settings,
    Customers,
    #[serde(rename = "Site_Configs")]
    SiteConfigs,
    Banners,
}

impl Module {
    /// Every module, in catalog order.
    pub const ALL: [Module; 7] = [
        Module::Users,
        Module::Roles,
        Module::ActivityLogs,
        Module::Settings,
        Module::Customers,
        Module::SiteConfigs,
        Module::Banners,
    ];

    /// Wire spelling used by the server.
    pub fn wire_name(self) -> &'static str {
        match self {
            Module::Users => "Users",
            Module::Roles => "Roles",
            Module::ActivityLogs => "Activity_Logs",
            Module::Settings => "Settings",
            Module::Customers => "Customers",
            Module::SiteConfigs => "Site_Configs",
            Module::Banners => "Banners",
        }
    }
}

impl core::fmt::Display for Module {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Module {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Module::ALL
            .into_iter()
            .find(|m| m.wire_name() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown permission module: {s}")))
    }
}

/// An operation kind a permission grants on a module.
///
/// Fixed, closed set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    /// Every operation, in catalog order.
    pub const ALL: [Operation; 4] = [
        Operation::Create,
        Operation::Read,
        Operation::Update,
        Operation::Delete,
    ];

    /// Wire spelling used by the server.
    pub fn wire_name(self) -> &'static str {
        match self {
            Operation::Create => "CREATE",
            Operation::Read => "READ",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.wire_name() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown permission operation: {s}")))
    }
}

/// A grantable (module, operation) pair with its server-assigned identifier.
///
/// Permissions are created and destroyed server-side; the client only reads
/// them. Grant matching compares the pair, never the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: PermissionId,
    pub module: Module,
    pub operation: Operation,
}

impl Permission {
    pub fn pair(&self) -> (Module, Operation) {
        (self.module, self.operation)
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.module, self.operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for module in Module::ALL {
            assert_eq!(module.wire_name().parse::<Module>().unwrap(), module);
        }
        for operation in Operation::ALL {
            assert_eq!(operation.wire_name().parse::<Operation>().unwrap(), operation);
        }
    }

    #[test]
    fn renamed_modules_serialize_with_wire_spelling() {
        let json = serde_json::to_string(&Module::ActivityLogs).unwrap();
        assert_eq!(json, "\"Activity_Logs\"");

        let json = serde_json::to_string(&Module::SiteConfigs).unwrap();
        assert_eq!(json, "\"Site_Configs\"");
    }

    #[test]
    fn operations_serialize_upper_case() {
        let json = serde_json::to_string(&Operation::Create).unwrap();
        assert_eq!(json, "\"CREATE\"");
    }

    #[test]
    fn unknown_names_are_validation_errors() {
        assert!(matches!(
            "Widgets".parse::<Module>(),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            "read".parse::<Operation>(),
            Err(DomainError::Validation(_))
        ));
    }
}
