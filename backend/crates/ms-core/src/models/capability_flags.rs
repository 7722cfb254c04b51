use crate::RemoteFunction;

use serde::Serialize;

/// Which user-sync functions the configured credentials may call.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct CapabilityFlags {
    pub create_users: bool,
    pub update_users: bool,
    pub delete_users: bool,
}

impl CapabilityFlags {
    /// Build flags from the function names advertised by the remote site.
    pub fn from_function_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut flags = Self::default();
        for name in names {
            if name == RemoteFunction::CreateUsers.as_str() {
                flags.create_users = true;
            } else if name == RemoteFunction::UpdateUsers.as_str() {
                flags.update_users = true;
            } else if name == RemoteFunction::DeleteUsers.as_str() {
                flags.delete_users = true;
            }
        }
        flags
    }

    pub fn all_available(&self) -> bool {
        self.create_users && self.update_users && self.delete_users
    }

    /// Flags paired with the function they describe, in display order.
    pub fn entries(&self) -> [(RemoteFunction, bool); 3] {
        [
            (RemoteFunction::CreateUsers, self.create_users),
            (RemoteFunction::UpdateUsers, self.update_users),
            (RemoteFunction::DeleteUsers, self.delete_users),
        ]
    }
}
