//! Caller roles and the dog-catalog permission policy.
//!
//! A caller is a worker iff their identity carries the [`WORKER_GROUP`]
//! group. Reads are open to everyone; catalog writes need a worker.

use serde::Serialize;

/// Group whose members may create, edit and delete dog records.
pub const WORKER_GROUP: &str = "doghouse-workers";

pub const ROLE_WORKER: &str = "doghouse-worker";
pub const ROLE_USER: &str = "user";

/// Permission tier of an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    #[serde(rename = "doghouse-worker")]
    Worker,
    #[serde(rename = "user")]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Worker => ROLE_WORKER,
            Self::User => ROLE_USER,
        }
    }
}

/// Operations on the dog catalog, as far as permissions are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DogOperation {
    List,
    Retrieve,
    Create,
    Update,
    Destroy,
}

impl DogOperation {
    /// Whether the operation leaves the catalog untouched.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::List | Self::Retrieve)
    }
}

/// Resolve a caller's role from their group memberships.
pub fn resolve_role<S: AsRef<str>>(groups: &[S]) -> Role {
    if groups.iter().any(|g| g.as_ref() == WORKER_GROUP) {
        Role::Worker
    } else {
        Role::User
    }
}

/// Decide whether `role` may perform `operation`.
///
/// `None` stands for an anonymous caller, who may only read.
pub fn permits(role: Option<Role>, operation: DogOperation) -> bool {
    operation.is_read() || role == Some(Role::Worker)
}
