//! Enumerations resolved from coded value sets.

use serde::Serialize;

/// A coded value set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<EnumMember>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            members: Vec::new(),
        }
    }

    pub fn member(&self, name: &str) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.members.iter().position(|m| m.name == name)
    }

    /// True if the member at `index` is, or descends from, a member with
    /// code `ancestor`.
    pub fn is_a(&self, index: usize, ancestor: &str) -> bool {
        let mut current = Some(index);
        // parent chains are acyclic by construction, but cap the walk anyway
        let mut remaining = self.members.len();
        while let Some(i) = current {
            let Some(member) = self.members.get(i) else {
                return false;
            };
            if member.value == ancestor {
                return true;
            }
            if remaining == 0 {
                return false;
            }
            remaining -= 1;
            current = member.parent;
        }
        false
    }
}

/// One code of an enumeration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumMember {
    pub name: String,
    pub value: String,
    pub display: Option<String>,
    pub description: Option<String>,
    pub system: Option<String>,
    pub case_sensitive: bool,
    /// Index of the parent concept in the owning enumeration's member list.
    pub parent: Option<usize>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            display: None,
            description: None,
            system: None,
            case_sensitive: false,
            parent: None,
        }
    }

    /// Members are the same when every field except the parent link matches.
    pub fn is_identical(&self, other: &EnumMember) -> bool {
        self.name == other.name
            && self.value == other.value
            && self.description == other.description
            && self.display == other.display
            && self.system == other.system
            && self.case_sensitive == other.case_sensitive
    }
}
