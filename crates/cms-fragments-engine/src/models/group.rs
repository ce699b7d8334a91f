use super::document::{Fragments, WithFragments};

/// One entry of a group: a small document keyed by bare field names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupDoc {
    pub fragments: Fragments,
}

impl GroupDoc {
    pub fn new(fragments: Fragments) -> Self {
        Self { fragments }
    }
}

impl WithFragments for GroupDoc {
    fn fragments(&self) -> &Fragments {
        &self.fragments
    }
}

/// A repeatable set of fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub docs: Vec<GroupDoc>,
}

impl Group {
    pub fn new(docs: Vec<GroupDoc>) -> Self {
        Self { docs }
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupDoc> {
        self.docs.iter()
    }
}
