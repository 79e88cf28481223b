//! Skill tags for the registration form.

use tracing::debug;

/// Result of offering a candidate to a [`SkillList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Already present, ignoring case. Nothing was added.
    Duplicate,
    /// Empty after trimming. Nothing happened.
    Empty,
}

/// Ordered skill tags, unique ignoring case, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillList {
    entries: Vec<String>,
}

impl SkillList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim and append `candidate` unless it is empty or already present.
    /// The stored entry keeps the caller's casing.
    pub fn add(&mut self, candidate: &str) -> AddOutcome {
        let value = candidate.trim();
        if value.is_empty() {
            return AddOutcome::Empty;
        }
        if self.contains_ignore_case(value) {
            debug!(skill = value, "Skipping duplicate skill");
            return AddOutcome::Duplicate;
        }
        self.entries.push(value.to_string());
        AddOutcome::Added
    }

    /// Remove the first entry equal to `skill`. Returns false for non-members.
    pub fn remove(&mut self, skill: &str) -> bool {
        match self.entries.iter().position(|s| s == skill) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return the most recently added entry.
    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop()
    }

    pub fn contains_ignore_case(&self, skill: &str) -> bool {
        let needle = skill.to_lowercase();
        self.entries.iter().any(|s| s.to_lowercase() == needle)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Keys the skill input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKey {
    Char(char),
    Enter,
    Backspace,
}

/// What a key press did to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEdit {
    /// Draft text changed.
    Draft,
    /// Draft was committed.
    Committed(AddOutcome),
    /// Last tag was removed by Backspace on an empty draft.
    Popped(String),
    /// Nothing changed.
    Ignored,
}

/// Skill list plus the draft being typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillEditor {
    skills: SkillList,
    draft: String,
}

impl SkillEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skills(&self) -> &SkillList {
        &self.skills
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Offer the draft to the list. The draft is cleared unless it was blank.
    pub fn commit_draft(&mut self) -> AddOutcome {
        let outcome = self.skills.add(&self.draft);
        if outcome != AddOutcome::Empty {
            self.draft.clear();
        }
        outcome
    }

    pub fn remove(&mut self, skill: &str) -> bool {
        self.skills.remove(skill)
    }

    /// Enter and `,` commit the draft. Backspace edits the draft, or removes
    /// the last tag when the draft is already empty.
    pub fn handle_key(&mut self, key: TagKey) -> TagEdit {
        match key {
            TagKey::Enter | TagKey::Char(',') => TagEdit::Committed(self.commit_draft()),
            TagKey::Char(ch) => {
                self.draft.push(ch);
                TagEdit::Draft
            }
            TagKey::Backspace if self.draft.is_empty() => match self.skills.pop() {
                Some(skill) => TagEdit::Popped(skill),
                None => TagEdit::Ignored,
            },
            TagKey::Backspace => {
                self.draft.pop();
                TagEdit::Draft
            }
        }
    }

    pub fn clear(&mut self) {
        self.skills.clear();
        self.draft.clear();
    }
}
