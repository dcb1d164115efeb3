//! Resolution of value sets and code systems into enumerations.

use fhirts_core::format_name;
use fhirts_ir::{EnumMember, EnumType, Type};
use fhirts_spec::{
    SpecificationDocument,
    model::{CodeSystem, Concept, Filter, Include, ValueSet},
};

use super::{
    Resolver,
    members::{MemberNaming, append, subset},
    state::TypeId,
};

/// A binding URL that points at the build site instead of the value set.
const MISSPELT_REQUEST_INTENT: &str = "http://build.fhir.org/valueset-request-intent.html";
const REQUEST_INTENT: &str = "http://hl7.org/fhir/ValueSet/request-intent";

impl<'a> Resolver<'a> {
    pub(super) fn resolve_value_set(&mut self, doc: &'a SpecificationDocument, vs: &'a ValueSet) {
        let mut enumeration = EnumType::new(self.enum_name(doc, vs.name.as_deref()));
        enumeration.description = vs.description.clone();
        let id = self.create(doc, Type::Enum(enumeration));

        let naming = MemberNaming::new(self.options);
        let mut members = Vec::new();

        if let Some(inline) = &vs.code_system {
            let batch = self.concept_members(
                &inline.concept,
                inline.system.as_deref(),
                inline.case_sensitive.unwrap_or(false),
            );
            naming.combine(&mut members, batch);
        }

        if let Some(compose) = &vs.compose {
            for url in &compose.import {
                if let Some(batch) = self.import_members(url) {
                    naming.combine(&mut members, batch);
                }
            }

            for include in &compose.include {
                if let Some(system) = include.system.as_deref() {
                    let batch = self.include_members(system, include);
                    naming.combine(&mut members, batch);
                }
                for url in &include.value_set {
                    if let Some(batch) = self.import_members(url) {
                        naming.combine(&mut members, batch);
                    }
                }
            }
        }

        self.enum_mut(id).members = members;
    }

    pub(super) fn resolve_code_system(
        &mut self,
        doc: &'a SpecificationDocument,
        cs: &'a CodeSystem,
    ) {
        let mut enumeration = EnumType::new(self.enum_name(doc, cs.name.as_deref()));
        enumeration.description = cs.description.clone();
        let id = self.create(doc, Type::Enum(enumeration));

        let batch = self.concept_members(
            &cs.concept,
            cs.url.as_deref(),
            cs.case_sensitive.unwrap_or(false),
        );
        let mut members = Vec::new();
        MemberNaming::new(self.options).combine(&mut members, batch);

        self.enum_mut(id).members = members;
    }

    /// Locate a value set or code system by canonical URL.
    ///
    /// Some bindings use a URL without the `vs` segment, so that spelling is
    /// tried as well.
    pub(super) fn value_set_key(&self, url: &str) -> Option<&'a str> {
        let url = if url == MISSPELT_REQUEST_INTENT {
            REQUEST_INTENT
        } else {
            url
        };

        self.key(url).or_else(|| {
            let (head, last) = url.rsplit_once('/')?;
            self.key(&format!("{head}/vs/{last}"))
        })
    }

    /// Name of the enumeration: the document's own name when it is a single
    /// word, then the symbol left by a binding, then the URL's last segment.
    fn enum_name(&mut self, doc: &'a SpecificationDocument, name: Option<&str>) -> String {
        let name = name
            .filter(|n| !n.is_empty() && !n.contains(' '))
            .map(str::to_owned)
            .or_else(|| self.state(&doc.id).symbol.clone());

        match name {
            Some(name) => format_name(&name),
            None => format_name(doc.id.rsplit('/').next().unwrap_or(&doc.id)),
        }
    }

    fn enum_mut(&mut self, id: TypeId) -> &mut EnumType {
        match &mut self.types[id] {
            Type::Enum(enumeration) => enumeration,
            other => unreachable!("type {:?} is not an enumeration", other.name()),
        }
    }

    /// Flatten a concept tree into members, children pointing back at their
    /// parent by index.
    fn concept_members(
        &mut self,
        concepts: &[Concept],
        system: Option<&str>,
        case_sensitive: bool,
    ) -> Vec<EnumMember> {
        let mut members = Vec::new();
        self.collect_concepts(concepts, None, system, case_sensitive, &mut members);
        members
    }

    fn collect_concepts(
        &mut self,
        concepts: &[Concept],
        parent: Option<usize>,
        system: Option<&str>,
        case_sensitive: bool,
        members: &mut Vec<EnumMember>,
    ) {
        let naming = MemberNaming::new(self.options);

        for concept in concepts {
            let code = concept.code.as_deref().unwrap_or_default();
            let display = concept
                .display
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty());
            let description = MemberNaming::description(concept);

            let Some(name) = naming.name(code, display, description.as_deref()) else {
                self.error("Unable to determine name for value set concept.");
                self.collect_concepts(&concept.concept, parent, system, case_sensitive, members);
                continue;
            };

            let index = members.len();
            members.push(EnumMember {
                display: display.map(str::to_owned),
                description,
                system: system.map(str::to_owned),
                case_sensitive,
                parent,
                ..EnumMember::new(name, code)
            });

            self.collect_concepts(&concept.concept, Some(index), system, case_sensitive, members);
        }
    }

    /// All members of another enumeration, resolved on demand.
    fn import_members(&mut self, url: &str) -> Option<Vec<EnumMember>> {
        let Some(key) = self.value_set_key(url) else {
            self.error(format!(
                "Unable to process import statement for '{url}' because value set with id '{url}' could not be found."
            ));
            return None;
        };

        self.enumeration(key).map(|e| e.members.clone())
    }

    /// The resolved enumeration behind `key`, if it is one.
    fn enumeration(&mut self, key: &'a str) -> Option<&EnumType> {
        self.process(key);
        let id = self.state(key).ty?;
        self.types[id].as_enum()
    }

    /// Members pulled in from a code system.
    ///
    /// When the system is known its members replace the listed concepts:
    /// those with a listed code, or all of them when the include lists no
    /// concepts and has no filters. Filters then add their matches, so a
    /// filter-only include yields just the filtered codes.
    fn include_members(&mut self, system: &str, include: &Include) -> Vec<EnumMember> {
        let listed = self.concept_members(&include.concept, Some(system), true);
        let filter_only = listed.is_empty() && !include.filter.is_empty();

        let substituted = self.value_set_key(system).and_then(|key| {
            let source = self.enumeration(key)?;
            Some(if filter_only {
                Vec::new()
            } else if listed.is_empty() {
                source.members.clone()
            } else {
                subset(&source.members, |_, m| listed.iter().any(|l| l.value == m.value))
            })
        });
        let mut batch = substituted.unwrap_or(listed);

        for filter in &include.filter {
            self.apply_filter(system, filter, &mut batch);
        }
        batch
    }

    /// Add every member of `system` that is-a `filter.value`.
    fn apply_filter(&mut self, system: &str, filter: &Filter, batch: &mut Vec<EnumMember>) {
        let Some(key) = self.value_set_key(system) else {
            return;
        };

        if filter.op != "is-a" {
            self.error(format!(
                "Do not know how to process filter operation '{}'.",
                filter.op
            ));
            return;
        }
        if filter.property != "concept" {
            self.error(format!(
                "Do not know how to process filter property '{}'.",
                filter.property
            ));
            return;
        }

        let Some(source) = self.enumeration(key) else {
            return;
        };
        let matching = subset(&source.members, |index, _| source.is_a(index, &filter.value));
        append(batch, matching);
    }
}
