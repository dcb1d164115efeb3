//! Enumeration member naming and collision resolution.

use fhirts_core::{format_name, starts_with_number, with_suffix};
use fhirts_ir::EnumMember;
use fhirts_spec::model::{Concept, extension_value_string};

use super::ResolveOptions;

const DEFINITION_EXTENSION: &str = "http://hl7.org/fhir/StructureDefinition/valueset-definition";

/// Outcome of placing a member into an enumeration's member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// The member (possibly renamed) should be appended.
    Insert,
    /// An identical member already exists at this index.
    Duplicate(usize),
}

/// Derives member names from concepts.
pub(crate) struct MemberNaming<'a> {
    options: &'a ResolveOptions,
}

impl<'a> MemberNaming<'a> {
    pub(crate) fn new(options: &'a ResolveOptions) -> Self {
        Self { options }
    }

    fn fits(&self, text: &str) -> bool {
        text.chars().count() < self.options.max_name_length
    }

    /// Description of a concept: its definition, the definition extension, or
    /// a display text that reads as a phrase.
    pub(crate) fn description(concept: &Concept) -> Option<String> {
        concept
            .definition
            .clone()
            .or_else(|| {
                extension_value_string(&concept.extension, DEFINITION_EXTENSION).map(str::to_owned)
            })
            .or_else(|| concept.display.clone().filter(|d| d.contains(' ')))
    }

    /// Name for a member, in priority order: symbol table, display text,
    /// code, description, and finally the code regardless of shape.
    pub(crate) fn name(
        &self,
        code: &str,
        display: Option<&str>,
        description: Option<&str>,
    ) -> Option<String> {
        if let Some(symbol) = self.options.symbols.get(code) {
            return Some(format_name(symbol));
        }

        let display = display
            .map(str::trim)
            .filter(|d| !d.is_empty() && self.fits(d))
            .map(|d| d.replace('*', "Star"));
        let code_candidate = (!code.is_empty() && !starts_with_number(code)).then_some(code);
        let description = description.map(str::trim).filter(|d| self.fits(d));

        [
            display.as_deref(),
            code_candidate,
            description,
            Some(code),
        ]
        .into_iter()
        .flatten()
        .map(format_name)
        .find(|name| !name.is_empty())
    }

    /// The fallback name tried when a member's natural name collides.
    pub(crate) fn alternate(&self, member: &EnumMember) -> Option<String> {
        let candidate = if !member.value.is_empty() && !starts_with_number(&member.value) {
            Some(member.value.as_str())
        } else {
            member.description.as_deref().filter(|d| self.fits(d))
        };
        candidate.map(format_name).filter(|name| !name.is_empty())
    }

    /// Give `member` a name that is unique within `members`.
    ///
    /// Tried in order: drop an identical member, rename the newcomer to its
    /// alternate name, rename the existing holder of the name to its
    /// alternate name, and finally append a numeric suffix.
    pub(crate) fn place(&self, members: &mut [EnumMember], member: &mut EnumMember) -> Placement {
        let Some(existing) = position(members, &member.name) else {
            return Placement::Insert;
        };

        if members[existing].is_identical(member) {
            return Placement::Duplicate(existing);
        }

        let natural = member.name.clone();

        if let Some(alternate) = self.alternate(member)
            && position(members, &alternate).is_none()
        {
            member.name = alternate;
            return Placement::Insert;
        }

        if let Some(alternate) = self.alternate(&members[existing])
            && alternate != natural
            && position(members, &alternate).is_none()
        {
            members[existing].name = alternate;
            return Placement::Insert;
        }

        let mut n = 1;
        loop {
            let candidate = with_suffix(&natural, n);
            if position(members, &candidate).is_none() {
                member.name = candidate;
                return Placement::Insert;
            }
            n += 1;
        }
    }

    /// Merge `batch` into `members`.
    ///
    /// Parent links in `batch` index into `batch` itself and are rewritten to
    /// point into `members`.
    pub(crate) fn combine(&self, members: &mut Vec<EnumMember>, batch: Vec<EnumMember>) {
        let mut mapping: Vec<Option<usize>> = Vec::with_capacity(batch.len());

        for mut member in batch {
            member.parent = member.parent.and_then(|p| mapping.get(p).copied().flatten());
            match self.place(members, &mut member) {
                Placement::Insert => {
                    mapping.push(Some(members.len()));
                    members.push(member);
                }
                Placement::Duplicate(index) => mapping.push(Some(index)),
            }
        }
    }
}

fn position(members: &[EnumMember], name: &str) -> Option<usize> {
    members.iter().position(|m| m.name == name)
}

/// Copy the members accepted by `keep`, rewriting parent links so they point
/// into the returned list. Links to members that were left out are dropped.
pub(crate) fn subset(
    members: &[EnumMember],
    mut keep: impl FnMut(usize, &EnumMember) -> bool,
) -> Vec<EnumMember> {
    let mut mapping = vec![None; members.len()];
    let mut out = Vec::new();

    for (index, member) in members.iter().enumerate() {
        if keep(index, member) {
            let mut copy = member.clone();
            copy.parent = member.parent.and_then(|p| mapping.get(p).copied().flatten());
            mapping[index] = Some(out.len());
            out.push(copy);
        }
    }
    out
}

/// Append `batch` to `members`, offsetting its parent links.
pub(crate) fn append(members: &mut Vec<EnumMember>, batch: Vec<EnumMember>) {
    let offset = members.len();
    members.extend(batch.into_iter().map(|mut m| {
        m.parent = m.parent.map(|p| p + offset);
        m
    }));
}
