use md_core::Role;

/// Role check input: one role or an ordered set of acceptable roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRequirement {
    One(Role),
    AnyOf(Vec<Role>),
}

impl RoleRequirement {
    pub fn is_satisfied_by(&self, role: Role) -> bool {
        match self {
            Self::One(required) => *required == role,
            Self::AnyOf(allowed) => allowed.contains(&role),
        }
    }
}

impl From<Role> for RoleRequirement {
    fn from(role: Role) -> Self {
        Self::One(role)
    }
}

impl From<Vec<Role>> for RoleRequirement {
    fn from(roles: Vec<Role>) -> Self {
        Self::AnyOf(roles)
    }
}

impl From<&[Role]> for RoleRequirement {
    fn from(roles: &[Role]) -> Self {
        Self::AnyOf(roles.to_vec())
    }
}

impl<const N: usize> From<[Role; N]> for RoleRequirement {
    fn from(roles: [Role; N]) -> Self {
        Self::AnyOf(roles.to_vec())
    }
}
