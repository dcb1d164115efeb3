//! valueSets.ts enumeration file generator.

use std::path::{Path, PathBuf};

use fhirts_core::GeneratedFile;
use fhirts_ir::{EnumType, TypeGraph};

use crate::{
    ast::{Enum, EnumVariant},
    code_file::CodeFile,
};

pub const VALUE_SETS_TS: &str = "valueSets.ts";

/// Every enumeration of the graph as an exported string enum.
pub struct ValueSetsTs {
    file: CodeFile,
}

impl ValueSetsTs {
    pub fn new(graph: &TypeGraph) -> Self {
        let enums = graph.enums().filter(|e| !e.name.is_empty());
        let file = CodeFile::new().add_all(enums.map(declaration));
        Self { file }
    }
}

impl GeneratedFile for ValueSetsTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(VALUE_SETS_TS)
    }

    fn render(&self) -> String {
        self.file.render()
    }
}

fn declaration(enumeration: &EnumType) -> Enum {
    enumeration.members.iter().fold(
        Enum::new(&enumeration.name).doc(enumeration.description.as_deref()),
        |acc, member| {
            acc.variant(
                EnumVariant::new(&member.name, &member.value).doc(member.description.as_deref()),
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use fhirts_ir::{EnumMember, Type};

    use super::*;

    #[test]
    fn test_enums_only() {
        let mut status = EnumType::new("PublicationStatus");
        status.description = Some("The lifecycle status".into());
        status.members = vec![
            EnumMember::new("Draft", "draft"),
            EnumMember {
                description: Some("Ready for use.".into()),
                ..EnumMember::new("Active", "active")
            },
        ];
        let graph = TypeGraph::new(vec![Type::reference("ignored"), Type::Enum(status)]);

        assert_eq!(
            ValueSetsTs::new(&graph).render(),
            "/**\n * The lifecycle status\n */\nexport enum PublicationStatus {\n    Draft = \"draft\",\n    /**\n     * Ready for use.\n     */\n    Active = \"active\"\n}\n"
        );
    }

    #[test]
    fn test_empty_graph_renders_empty_file() {
        assert_eq!(ValueSetsTs::new(&TypeGraph::default()).render(), "");
    }
}
