//! Owner resolution against the host user database.

use std::collections::HashMap;
use std::ffi::CStr;

use coldsweep_core::Identity;

/// Resolves numeric owner ids to [`Identity`] records.
///
/// Lookups are memoized per resolver, so a scan queries the user database at
/// most once per distinct uid. Lookup failure degrades to a `user<uid>`
/// placeholder; resolution never fails a scan.
#[derive(Debug, Default)]
pub struct OwnerResolver {
    names: HashMap<u32, Option<String>>,
}

impl OwnerResolver {
    /// Create a resolver with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the owner of a node from its lstat uid/gid.
    ///
    /// The gid is the inspected node's group, not the user's primary group;
    /// identities compare by uid, so the distinction never splits an owner.
    pub fn resolve(&mut self, uid: u32, gid: u32) -> Identity {
        let name = self
            .names
            .entry(uid)
            .or_insert_with(|| lookup_username(uid));
        match name {
            Some(name) => Identity::new(name.clone(), uid, gid),
            None => Identity::unresolved(uid, gid),
        }
    }
}

/// Query the user database for a uid's login name.
///
/// Returns `None` for uids without an entry (orphaned files, container
/// uid remapping).
#[cfg(unix)]
fn lookup_username(uid: u32) -> Option<String> {
    let mut passwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::passwd = std::ptr::null_mut();
    let mut buf = vec![0 as libc::c_char; 1024];

    loop {
        let rc = unsafe {
            libc::getpwuid_r(
                uid,
                &mut passwd,
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };
        if rc == libc::ERANGE {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() {
            return None;
        }
        let name = unsafe { CStr::from_ptr(passwd.pw_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_current_user() {
        let uid = unsafe { libc::getuid() };
        let gid = unsafe { libc::getgid() };

        let mut resolver = OwnerResolver::new();
        let identity = resolver.resolve(uid, gid);

        assert_eq!(identity.uid, uid);
        assert_eq!(identity.gid, gid);
        assert!(!identity.username.is_empty());
    }

    #[test]
    fn test_resolve_unknown_uid_degrades() {
        // uids this high are never allocated by login systems
        let mut resolver = OwnerResolver::new();
        let identity = resolver.resolve(u32::MAX - 7, 100);

        assert_eq!(identity.username, format!("user{}", u32::MAX - 7));
        assert!(identity.is_placeholder());
    }

    #[test]
    fn test_resolution_is_cached() {
        let uid = unsafe { libc::getuid() };
        let mut resolver = OwnerResolver::new();

        let first = resolver.resolve(uid, 0);
        let second = resolver.resolve(uid, 1);
        assert_eq!(first.username, second.username);
        assert_eq!(resolver.names.len(), 1);
    }
}
