// Authorization gate for timesheet entries.
//
// Purpose
// - Decide, from the caller's role and identity, what the caller may do with an entry.
// - Decide which entries are visible to the caller in list and statistics views.
//
// Boundaries
// - Pure functions only. Handlers ask the gate before touching the entry store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::modules::timesheets::core::entry::TimesheetEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "employee" => Ok(Role::Employee),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRole(value.to_string())),
        }
    }
}

/// The authenticated identity making a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: String,
    pub role: Role,
}

impl Caller {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }
}

/// What the caller wants to do. Read and Modify target an entry owned by `owner_id`;
/// Review (approve or reject) is not tied to ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    Read { owner_id: &'a str },
    Modify { owner_id: &'a str },
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    FullAccess,
    OwnerOnly,
    Denied,
}

impl Access {
    pub fn is_denied(&self) -> bool {
        matches!(self, Access::Denied)
    }
}

pub fn authorize(caller: &Caller, operation: Operation<'_>) -> Access {
    match (caller.role, operation) {
        (Role::Admin, _) => Access::FullAccess,
        (Role::Employee, Operation::Review) => Access::Denied,
        (Role::Employee, Operation::Read { owner_id } | Operation::Modify { owner_id }) => {
            if caller.user_id == owner_id {
                Access::OwnerOnly
            } else {
                Access::Denied
            }
        }
    }
}

/// Which entries a caller is allowed to see at all. Entries outside the scope never
/// reach the caller, they are not reported as forbidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    Everyone,
    OwnedBy(String),
}

impl Visibility {
    pub fn for_caller(caller: &Caller) -> Self {
        match caller.role {
            Role::Admin => Visibility::Everyone,
            Role::Employee => Visibility::OwnedBy(caller.user_id.clone()),
        }
    }

    pub fn owner_id(&self) -> Option<&str> {
        match self {
            Visibility::Everyone => None,
            Visibility::OwnedBy(owner_id) => Some(owner_id),
        }
    }

    pub fn includes(&self, entry: &TimesheetEntry) -> bool {
        match self {
            Visibility::Everyone => true,
            Visibility::OwnedBy(owner_id) => &entry.user_id == owner_id,
        }
    }
}

#[cfg(test)]
mod timesheet_access_tests {
    use super::*;
    use crate::tests::fixtures::callers::{admin, employee};
    use crate::tests::fixtures::entries::make_timesheet_entry;
    use rstest::rstest;

    #[rstest]
    #[case(Operation::Read { owner_id: "user-0001" }, Access::FullAccess)]
    #[case(Operation::Read { owner_id: "user-0002" }, Access::FullAccess)]
    #[case(Operation::Modify { owner_id: "user-0002" }, Access::FullAccess)]
    #[case(Operation::Review, Access::FullAccess)]
    fn it_should_grant_full_access_to_admins(#[case] operation: Operation<'static>, #[case] expected: Access) {
        assert_eq!(authorize(&admin("admin-0001"), operation), expected);
    }

    #[rstest]
    #[case(Operation::Read { owner_id: "user-0001" }, Access::OwnerOnly)]
    #[case(Operation::Modify { owner_id: "user-0001" }, Access::OwnerOnly)]
    #[case(Operation::Read { owner_id: "user-0002" }, Access::Denied)]
    #[case(Operation::Modify { owner_id: "user-0002" }, Access::Denied)]
    #[case(Operation::Review, Access::Denied)]
    fn it_should_limit_employees_to_their_own_entries(#[case] operation: Operation<'static>, #[case] expected: Access) {
        assert_eq!(authorize(&employee("user-0001"), operation), expected);
    }

    #[rstest]
    fn it_should_deny_review_to_employees_even_for_their_own_entry() {
        let caller = employee("user-0001");
        assert!(authorize(&caller, Operation::Review).is_denied());
    }

    #[rstest]
    #[case("employee", Role::Employee)]
    #[case("admin", Role::Admin)]
    #[case(" Admin ", Role::Admin)]
    fn it_should_parse_roles(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(raw.parse::<Role>(), Ok(expected));
    }

    #[rstest]
    fn it_should_reject_unknown_roles() {
        assert_eq!("manager".parse::<Role>(), Err(UnknownRole("manager".to_string())));
    }

    #[rstest]
    fn it_should_scope_employee_visibility_to_their_own_entries() {
        let visibility = Visibility::for_caller(&employee("user-0001"));
        assert_eq!(visibility.owner_id(), Some("user-0001"));
        assert!(visibility.includes(&make_timesheet_entry("user-0001", "Apollo")));
        assert!(!visibility.includes(&make_timesheet_entry("user-0002", "Apollo")));
    }

    #[rstest]
    fn it_should_let_admins_see_every_entry() {
        let visibility = Visibility::for_caller(&admin("admin-0001"));
        assert_eq!(visibility, Visibility::Everyone);
        assert!(visibility.includes(&make_timesheet_entry("user-0002", "Apollo")));
    }
}
