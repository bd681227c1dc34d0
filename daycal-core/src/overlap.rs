//! Overlap grouping for day layout.
//!
//! Activities on the same day that overlap in time are drawn side by side.
//! Grouping is a single greedy pass: each activity joins the first existing
//! group that has any member overlapping it, otherwise it opens a new group.
//! Groups are therefore connected clusters, not cliques. A member may share
//! a group with another member it does not itself overlap.

use serde::Serialize;

use crate::activity::Activity;

/// Position of an activity within its overlap group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub group_size: usize,
    pub index: usize,
}

impl Slot {
    /// Slot for an activity that overlaps nothing.
    pub const ALONE: Slot = Slot {
        group_size: 1,
        index: 0,
    };

    /// Horizontal placement as `(offset, width)` fractions of the available
    /// width.
    pub fn column(&self) -> (f32, f32) {
        let size = self.group_size.max(1) as f32;
        (self.index as f32 / size, 1.0 / size)
    }
}

impl From<Slot> for (usize, usize) {
    fn from(slot: Slot) -> Self {
        (slot.group_size, slot.index)
    }
}

/// Activities partitioned into overlap groups, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlapGroups {
    groups: Vec<Vec<Activity>>,
}

impl OverlapGroups {
    pub fn groups(&self) -> &[Vec<Activity>] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group size and position of `activity`, matched by id.
    ///
    /// Falls back to [`Slot::ALONE`] when the activity is in no group.
    pub fn overlap_data(&self, activity: &Activity) -> Slot {
        self.groups
            .iter()
            .find_map(|group| {
                group
                    .iter()
                    .position(|member| member.id() == activity.id())
                    .map(|index| Slot {
                        group_size: group.len(),
                        index,
                    })
            })
            .unwrap_or(Slot::ALONE)
    }

    pub fn into_inner(self) -> Vec<Vec<Activity>> {
        self.groups
    }
}

/// Partition one day's activities into overlap groups.
///
/// The caller is responsible for passing activities of a single day.
pub fn group_overlapping(activities: &[Activity]) -> OverlapGroups {
    let mut groups: Vec<Vec<Activity>> = Vec::new();

    for activity in activities {
        let joined = groups
            .iter_mut()
            .find(|group| group.iter().any(|member| member.overlaps(activity)));

        match joined {
            Some(group) => group.push(activity.clone()),
            None => groups.push(vec![activity.clone()]),
        }
    }

    OverlapGroups { groups }
}

/// Free-function form of [`OverlapGroups::overlap_data`].
pub fn overlap_data(activity: &Activity, groups: &OverlapGroups) -> Slot {
    groups.overlap_data(activity)
}
