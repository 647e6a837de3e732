use fxhash::FxHashMap;

use crate::timeline::ScheduleEntry;

/// Fixed course palette, handed out in order of first appearance.
pub const PALETTE: [&str; 8] = [
    "rgb(66,135,245)",
    "rgb(255,99,132)",
    "rgb(54,203,137)",
    "rgb(255,159,64)",
    "rgb(153,102,255)",
    "rgb(255,205,86)",
    "rgb(90,200,250)",
    "rgb(255,140,180)",
];

/// Course id to color, remembering the order courses were first seen in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorMap {
    entries: Vec<(String, &'static str)>,
    index: FxHashMap<String, usize>,
}

impl ColorMap {
    /// Assigns a color to every distinct course in `schedule`. The palette
    /// wraps around once all eight colors are taken.
    pub fn assign(schedule: &[ScheduleEntry]) -> ColorMap {
        let mut map = ColorMap::default();
        for entry in schedule {
            if map.index.contains_key(&entry.course_id) {
                continue;
            }
            let color = PALETTE[map.entries.len() % PALETTE.len()];
            map.index.insert(entry.course_id.clone(), map.entries.len());
            map.entries.push((entry.course_id.clone(), color));
        }
        if map.len() > PALETTE.len() {
            log::debug!(
                "{} courses share a palette of {}; colors repeat",
                map.len(),
                PALETTE.len()
            );
        }
        map
    }

    pub fn get(&self, course_id: &str) -> Option<&'static str> {
        self.index.get(course_id).map(|&i| self.entries[i].1)
    }

    /// (course id, color) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.entries.iter().map(|(id, color)| (id.as_str(), *color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(ids: &[&str]) -> Vec<ScheduleEntry> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| ScheduleEntry::new(id, i as u32 + 1, i as u32 + 1))
            .collect()
    }

    #[test]
    fn empty_schedule_empty_map() {
        let map = ColorMap::assign(&[]);
        assert!(map.is_empty());
        assert_eq!(map.get("anything"), None);
    }

    #[test]
    fn first_seen_order_and_reuse() {
        let map = ColorMap::assign(&schedule(&["b", "a", "b", "c"]));
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("b"), Some(PALETTE[0]));
        assert_eq!(map.get("a"), Some(PALETTE[1]));
        assert_eq!(map.get("c"), Some(PALETTE[2]));
        let order: Vec<_> = map.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn deterministic() {
        let s = schedule(&["x", "y", "z", "x"]);
        assert_eq!(ColorMap::assign(&s), ColorMap::assign(&s));
    }

    #[test]
    fn ninth_course_wraps_to_first_color() {
        let ids = ["c1", "c2", "c3", "c4", "c5", "c6", "c7", "c8", "c9"];
        let map = ColorMap::assign(&schedule(&ids));
        assert_eq!(map.get("c1"), map.get("c9"));
        assert_ne!(map.get("c1"), map.get("c8"));
        let distinct: std::collections::HashSet<_> = ids[..8].iter().filter_map(|id| map.get(id)).collect();
        assert_eq!(distinct.len(), 8);
    }
}
