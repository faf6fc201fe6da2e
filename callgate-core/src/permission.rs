//! Capability masks and the permission evaluator.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::principal::Principal;
use crate::tenant::CustomerId;

/// A set of capability bits held by a principal or required by an operation.
///
/// A required mask is satisfied when the principal holds at least one of
/// its bits, so `CUSTOMER_ADMIN | CUSTOMER_MANAGER` reads "admin or manager".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(u64);

impl Permission {
    pub const NONE: Permission = Permission(0);

    pub const PROJECT_SUPER_ADMIN: Permission = Permission(0x0001);
    pub const PROJECT_ALL: Permission = Permission(0x000F);

    pub const CUSTOMER_AGENT: Permission = Permission(0x0010);
    pub const CUSTOMER_ADMIN: Permission = Permission(0x0020);
    pub const CUSTOMER_MANAGER: Permission = Permission(0x0040);
    pub const CUSTOMER_ALL: Permission = Permission(0x00F0);

    /// Held implicitly by every principal of the target tenant. Requiring
    /// it means "tenant match is enough".
    pub const MEMBER: Permission = Permission(1 << 63);

    pub const ALL: Permission = Permission(u64::MAX);

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u64 {
        self.0
    }

    pub const fn union(self, other: Permission) -> Self {
        Self(self.0 | other.0)
    }

    /// "Any of these roles suffice."
    pub const fn any_of(perms: &[Permission]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < perms.len() {
            bits |= perms[i].0;
            i += 1;
        }
        Self(bits)
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is present.
    pub const fn contains(&self, other: Permission) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if at least one bit is shared.
    pub const fn intersects(&self, other: Permission) -> bool {
        self.0 & other.0 != 0
    }

    pub fn names(&self) -> Vec<&'static str> {
        NAMES
            .iter()
            .filter(|(_, p)| self.intersects(*p))
            .map(|(n, _)| *n)
            .collect()
    }

    pub fn from_names(names: &[&str]) -> Self {
        names
            .iter()
            .filter_map(|n| NAMES.iter().find(|(k, _)| k == n).map(|(_, p)| *p))
            .fold(Permission::NONE, Permission::union)
    }
}

// Single bits only; the *_ALL groups are unions of these.
const NAMES: &[(&str, Permission)] = &[
    ("project-super-admin", Permission::PROJECT_SUPER_ADMIN),
    ("customer-agent", Permission::CUSTOMER_AGENT),
    ("customer-admin", Permission::CUSTOMER_ADMIN),
    ("customer-manager", Permission::CUSTOMER_MANAGER),
    ("member", Permission::MEMBER),
];

impl BitOr for Permission {
    type Output = Permission;

    fn bitor(self, rhs: Permission) -> Permission {
        self.union(rhs)
    }
}

impl BitOrAssign for Permission {
    fn bitor_assign(&mut self, rhs: Permission) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permission({:#06x} {:?})", self.0, self.names())
    }
}

/// Decide whether `principal` may act on a resource owned by `customer_id`.
///
/// 1. super-admins pass unconditionally, whatever the tenant or mask;
/// 2. a tenant mismatch is always denied;
/// 3. otherwise at least one bit of `required` must be held, counting the
///    implicit [`Permission::MEMBER`] bit.
///
/// An empty `required` mask can therefore only be met by a super-admin.
pub fn check(principal: &Principal, customer_id: CustomerId, required: Permission) -> bool {
    if principal.permission.contains(Permission::PROJECT_SUPER_ADMIN) {
        return true;
    }

    if principal.customer_id != customer_id {
        return false;
    }

    principal
        .permission
        .union(Permission::MEMBER)
        .intersects(required)
}
