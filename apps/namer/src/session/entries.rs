//! The per-session entry list.
//!
//! Ids are positional: after any add or delete the list is renumbered so the
//! entry at position `k` (0-based) always has id `format!("{:02}", k + 1)`.

use serde::Serialize;

use crate::naming::builder::BuiltFilename;
use crate::naming::segment::{colorize, ColoredSegment, Segment};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: String,
    pub filename: String,
    /// Typed segments the filename was joined from.
    pub segments: Vec<Segment>,
    /// Stored in full; display surfaces truncate on their own.
    pub description: String,
}


/// Entry as sent to the form, with segment colors resolved.
#[derive(Debug, Clone, Serialize)]
pub struct EntryView {
    pub id: String,
    pub filename: String,
    pub segments: Vec<ColoredSegment>,
    pub description: String,
}

impl From<&Entry> for EntryView {
    fn from(entry: &Entry) -> Self {
        EntryView {
            id: entry.id.clone(),
            filename: entry.filename.clone(),
            segments: colorize(&entry.segments),
            description: entry.description.clone(),
        }
    }
}

pub fn format_id(position: usize) -> String {
    format!("{:02}", position + 1)
}

#[derive(Debug, Clone, Default)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a built filename and returns the new entry.
    pub fn push(&mut self, built: BuiltFilename, description: String) -> &Entry {
        let position = self.entries.len();
        self.entries.push(Entry {
            id: format_id(position),
            filename: built.filename,
            segments: built.segments,
            description,
        });
        &self.entries[position]
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.position_of(id).map(|i| &self.entries[i])
    }

    pub fn set_description(&mut self, id: &str, description: String) -> Option<&Entry> {
        let position = self.position_of(id)?;
        let entry = &mut self.entries[position];
        entry.description = description;
        Some(&*entry)
    }

    /// Removes the entry and renumbers everything after it.
    pub fn remove(&mut self, id: &str) -> Option<Entry> {
        let position = self.position_of(id)?;
        let removed = self.entries.remove(position);
        self.renumber();
        Some(removed)
    }

    pub fn views(&self) -> Vec<EntryView> {
        self.entries.iter().map(EntryView::from).collect()
    }

    /// Accepts `"03"` or `"3"`; ids are 1-based.
    fn position_of(&self, id: &str) -> Option<usize> {
        let n: usize = id.trim().parse().ok()?;
        (1..=self.entries.len()).contains(&n).then(|| n - 1)
    }

    fn renumber(&mut self) {
        for (position, entry) in self.entries.iter_mut().enumerate() {
            entry.id = format_id(position);
        }
    }
}
