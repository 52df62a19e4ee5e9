use crate::modules::timesheets::core::access::{Caller, Role};

pub fn employee(user_id: &str) -> Caller {
    Caller::new(user_id, Role::Employee)
}

pub fn admin(user_id: &str) -> Caller {
    Caller::new(user_id, Role::Admin)
}
