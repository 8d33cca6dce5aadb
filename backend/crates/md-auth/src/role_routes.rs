use md_core::Role;

const DEFAULT_PROFESSIONAL_DASHBOARD: &str = "/professional/dashboard";
const DEFAULT_ADMIN_DASHBOARD: &str = "/admin/dashboard";
const DEFAULT_ROOT: &str = "/";

/// Landing paths per role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRoutes {
    pub professional_dashboard: String,
    pub admin_dashboard: String,
    pub root: String,
}

impl Default for RoleRoutes {
    fn default() -> Self {
        Self {
            professional_dashboard: String::from(DEFAULT_PROFESSIONAL_DASHBOARD),
            admin_dashboard: String::from(DEFAULT_ADMIN_DASHBOARD),
            root: String::from(DEFAULT_ROOT),
        }
    }
}

impl RoleRoutes {
    pub fn landing_path(&self, role: Role) -> &str {
        match role {
            Role::Professional => &self.professional_dashboard,
            Role::Admin => &self.admin_dashboard,
            Role::Patient => &self.root,
        }
    }

    /// Lenient variant for raw role strings; unknown roles land on root
    pub fn landing_path_for(&self, role: &str) -> &str {
        match role.parse::<Role>() {
            Ok(parsed) => self.landing_path(parsed),
            Err(_) => &self.root,
        }
    }
}
