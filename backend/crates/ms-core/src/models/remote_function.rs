/// Moodle web-service functions this service calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteFunction {
    CreateUsers,
    UpdateUsers,
    DeleteUsers,
    GetSiteInfo,
}

impl RemoteFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateUsers => "core_user_create_users",
            Self::UpdateUsers => "core_user_update_users",
            Self::DeleteUsers => "core_user_delete_users",
            Self::GetSiteInfo => "core_webservice_get_site_info",
        }
    }
}
