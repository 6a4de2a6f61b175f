//! Owner identity types.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// The resolved owner of a filesystem entry.
///
/// Identities compare and hash by `uid` only: the username is derived from
/// the uid, and the gid is read from whichever node was being inspected, so
/// the same user may surface with different gids within one scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Login name, or a `user<uid>` placeholder when the uid has no
    /// user-database entry.
    pub username: String,
    /// Numeric owner id.
    pub uid: u32,
    /// Numeric group id of the inspected node.
    pub gid: u32,
}

impl Identity {
    /// Create a new identity.
    pub fn new(username: impl Into<String>, uid: u32, gid: u32) -> Self {
        Self {
            username: username.into(),
            uid,
            gid,
        }
    }

    /// Identity for a uid with no user-database entry.
    ///
    /// Always a full record, never a bare name, so downstream folds see one
    /// uniform shape for resolved and orphaned owners alike.
    pub fn unresolved(uid: u32, gid: u32) -> Self {
        Self {
            username: format!("user{uid}"),
            uid,
            gid,
        }
    }

    /// Whether the username was synthesized rather than resolved.
    pub fn is_placeholder(&self) -> bool {
        self.username == format!("user{}", self.uid)
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for Identity {}

impl Hash for Identity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uid.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_keyed_by_uid() {
        let a = Identity::new("alice", 1000, 1000);
        let b = Identity::new("alice", 1000, 2000);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_unresolved_placeholder() {
        let id = Identity::unresolved(65534, 65534);
        assert_eq!(id.username, "user65534");
        assert!(id.is_placeholder());
        assert!(!Identity::new("nobody", 65534, 65534).is_placeholder());
    }
}
