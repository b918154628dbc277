//! Attach detection for polling backends.
//!
//! A backend without a hot-plug callback re-enumerates periodically and hands
//! each snapshot to [`PathTracker::refresh`], which returns only the entries
//! whose path was absent from the previous snapshot.  A path that disappears
//! is forgotten, so a keyboard re-plugged onto the same path (e.g. a reused
//! `/dev/hidrawN`) is announced again.

use std::collections::{HashMap, HashSet};
use std::ffi::CString;

use super::DeviceId;

/// Device paths present in the most recent enumeration snapshot.
#[derive(Debug, Default)]
pub struct PathTracker {
    live: HashSet<CString>,
}

impl PathTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the live set with `snapshot` and returns the newly attached
    /// entries in snapshot order.
    ///
    /// When one path is listed several times (one entry per top-level
    /// collection on some platforms) only its first entry is returned.
    pub fn refresh<T>(&mut self, snapshot: Vec<(CString, T)>) -> Vec<(CString, T)> {
        let current: HashSet<&CString> = snapshot.iter().map(|(path, _)| path).collect();
        self.live.retain(|path| current.contains(path));
        let mut seen_now = HashSet::new();
        let mut fresh = Vec::new();
        for (path, item) in snapshot {
            if !seen_now.insert(path.clone()) || self.live.contains(&path) {
                continue;
            }
            fresh.push((path, item));
        }
        self.live.extend(fresh.iter().map(|(path, _)| path.clone()));
        fresh
    }

    /// Returns `true` if `path` was in the latest snapshot.
    pub fn is_live(&self, path: &CString) -> bool {
        self.live.contains(path)
    }

    /// Drops every id whose path is no longer live.
    pub fn prune(&self, table: &mut HashMap<DeviceId, CString>) {
        table.retain(|_, path| self.live.contains(path));
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    fn snapshot(paths: &[&str]) -> Vec<(CString, ())> {
        paths.iter().map(|p| (path(p), ())).collect()
    }

    fn fresh_paths(tracker: &mut PathTracker, paths: &[&str]) -> Vec<CString> {
        tracker
            .refresh(snapshot(paths))
            .into_iter()
            .map(|(p, _)| p)
            .collect()
    }

    #[test]
    fn test_first_snapshot_announces_every_path() {
        // Arrange
        let mut tracker = PathTracker::new();

        // Act
        let fresh = fresh_paths(&mut tracker, &["/dev/hidraw0", "/dev/hidraw1"]);

        // Assert
        assert_eq!(fresh, vec![path("/dev/hidraw0"), path("/dev/hidraw1")]);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_unchanged_snapshot_announces_nothing() {
        let mut tracker = PathTracker::new();
        fresh_paths(&mut tracker, &["/dev/hidraw0"]);

        let fresh = fresh_paths(&mut tracker, &["/dev/hidraw0"]);

        assert!(fresh.is_empty());
    }

    #[test]
    fn test_replugged_device_on_reused_path_is_announced_again() {
        let mut tracker = PathTracker::new();
        fresh_paths(&mut tracker, &["/dev/hidraw0", "/dev/hidraw3"]);

        // Unplugged: hidraw3 missing from the next poll.
        assert!(fresh_paths(&mut tracker, &["/dev/hidraw0"]).is_empty());
        assert!(!tracker.is_live(&path("/dev/hidraw3")));

        // Plugged back in on the same node.
        let fresh = fresh_paths(&mut tracker, &["/dev/hidraw0", "/dev/hidraw3"]);

        assert_eq!(fresh, vec![path("/dev/hidraw3")]);
    }

    #[test]
    fn test_duplicate_entries_for_one_path_yield_the_first() {
        let mut tracker = PathTracker::new();
        let entries = vec![(path("/dev/hidraw2"), 1), (path("/dev/hidraw2"), 2)];

        let fresh = tracker.refresh(entries);

        assert_eq!(fresh, vec![(path("/dev/hidraw2"), 1)]);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_live_set_shrinks_when_devices_leave() {
        let mut tracker = PathTracker::new();
        fresh_paths(&mut tracker, &["a", "b", "c"]);

        fresh_paths(&mut tracker, &[]);

        assert!(tracker.is_empty());
    }

    #[test]
    fn test_prune_drops_ids_of_departed_paths() {
        let mut tracker = PathTracker::new();
        fresh_paths(&mut tracker, &["/dev/hidraw0", "/dev/hidraw1"]);
        let mut table = HashMap::from([
            (DeviceId(1), path("/dev/hidraw0")),
            (DeviceId(2), path("/dev/hidraw1")),
        ]);

        fresh_paths(&mut tracker, &["/dev/hidraw1"]);
        tracker.prune(&mut table);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&DeviceId(2)), Some(&path("/dev/hidraw1")));
    }
}
