use super::error::DecisionError;
use super::models::DecisionList;

/// One row of the list selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEntry {
    List {
        index: usize,
        title: String,
        locked: bool,
        active: bool,
    },
    CreateNew,
}

/// What choosing a selector row means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    List(usize),
    CreateNew,
}

/// The ordered collection of lists plus the index shown on the main stage.
///
/// Lists are addressed by position. Deleting a list shifts every later index
/// down by one, and `current` falls back to 0 whenever it stops pointing at a
/// list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListRegistry {
    lists: Vec<DecisionList>,
    current: usize,
}

impl ListRegistry {
    #[must_use]
    pub fn new(lists: Vec<DecisionList>) -> Self {
        let mut registry = Self { lists, current: 0 };
        registry.clamp();
        registry
    }

    pub fn replace_all(&mut self, lists: Vec<DecisionList>) {
        self.lists = lists;
        self.clamp();
    }

    #[must_use]
    pub fn lists(&self) -> &[DecisionList] {
        &self.lists
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Option<&DecisionList> {
        self.lists.get(self.current)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DecisionList> {
        self.lists.get(index)
    }

    pub fn clamp(&mut self) {
        if self.current >= self.lists.len() {
            self.current = 0;
        }
    }

    /// Returns `false` and leaves the selection alone when `index` is out of
    /// bounds.
    pub fn switch_to(&mut self, index: usize) -> bool {
        if index >= self.lists.len() {
            return false;
        }
        self.current = index;
        true
    }

    pub fn select_next(&mut self) -> bool {
        if self.lists.is_empty() {
            return false;
        }
        let next = (self.current + 1) % self.lists.len();
        self.switch_to(next)
    }

    pub fn select_prev(&mut self) -> bool {
        if self.lists.is_empty() {
            return false;
        }
        let prev = if self.current == 0 {
            self.lists.len() - 1
        } else {
            self.current - 1
        };
        self.switch_to(prev)
    }

    /// Selector rows: every list in display order, then the create entry.
    #[must_use]
    pub fn entries(&self) -> Vec<RegistryEntry> {
        self.lists
            .iter()
            .enumerate()
            .map(|(index, list)| RegistryEntry::List {
                index,
                title: list.title.clone(),
                locked: list.locked,
                active: index == self.current,
            })
            .chain(std::iter::once(RegistryEntry::CreateNew))
            .collect()
    }

    #[must_use]
    pub fn resolve(&self, entry_index: usize) -> Option<Selection> {
        match entry_index.cmp(&self.lists.len()) {
            std::cmp::Ordering::Less => Some(Selection::List(entry_index)),
            std::cmp::Ordering::Equal => Some(Selection::CreateNew),
            std::cmp::Ordering::Greater => None,
        }
    }

    /// Appends an unlocked list and makes it current. Returns its index.
    pub fn push(&mut self, title: String, options: Vec<String>) -> usize {
        self.lists.push(DecisionList::new(title, options));
        self.current = self.lists.len() - 1;
        self.current
    }

    /// Replaces title and options in place. The lock flag is never changed
    /// by an edit.
    pub fn replace(
        &mut self,
        index: usize,
        title: String,
        options: Vec<String>,
    ) -> Result<(), DecisionError> {
        let list = self
            .lists
            .get_mut(index)
            .ok_or(DecisionError::IndexOutOfBounds { index })?;
        list.title = title;
        list.options = options;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<DecisionList, DecisionError> {
        let list = self
            .lists
            .get(index)
            .ok_or(DecisionError::IndexOutOfBounds { index })?;
        if list.locked {
            return Err(DecisionError::ListLocked {
                title: list.title.clone(),
            });
        }
        let removed = self.lists.remove(index);
        self.current = 0;
        Ok(removed)
    }
}
