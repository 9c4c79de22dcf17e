//! Property-based tests for the shim generator
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use cmdshim::emit::{CodeWriter, EmitConfig, Indent};
use cmdshim::generator::{GeneratorConfig, ShimGenerator};
use cmdshim_syntax::{
    Accessibility, Annotation, ArgValue, ClassSymbol, CompilationUnit, DeclNode, FunctionSymbol, InMemoryModel,
    Literal, NamespaceRef, NodeId, Symbol, TypeRef,
};
use proptest::prelude::*;

const MARKER: &str = "Remora.Commands.Groups.CommandGroup";
const COMMAND: &str = "Remora.Commands.Attributes.CommandAttribute";

/// Qualification facts for one generated handler
#[derive(Debug, Clone, Copy)]
struct HandlerShape {
    public: bool,
    is_async: bool,
    annotated: bool,
}

impl HandlerShape {
    fn qualifies(self) -> bool {
        !self.public && self.is_async && self.annotated
    }
}

fn handler_shape() -> impl Strategy<Value = HandlerShape> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(public, is_async, annotated)| HandlerShape {
        public,
        is_async,
        annotated,
    })
}

/// Build a unit with one command group per entry in `groups`, all in `namespace`.
fn build_unit(namespace: &str, groups: &[Vec<HandlerShape>]) -> (CompilationUnit, InMemoryModel) {
    let mut model = InMemoryModel::new()
        .with_type(TypeRef::named(MARKER))
        .with_type(TypeRef::named(COMMAND));
    let mut next_id = 1u32;
    let mut classes = Vec::new();

    for (g, handlers) in groups.iter().enumerate() {
        let class_id = NodeId(next_id);
        next_id += 1;
        let class_name = format!("Group{}", g);

        let mut members = Vec::new();
        for (h, shape) in handlers.iter().enumerate() {
            let id = NodeId(next_id);
            next_id += 1;
            let name = format!("Handler{}x{}Async", g, h);
            members.push(DeclNode::function(id, name.clone()));

            let mut annotations = Vec::new();
            if shape.annotated {
                annotations.push(
                    Annotation::new(TypeRef::named(COMMAND))
                        .with_arg(ArgValue::Scalar(Literal::Str(name.to_lowercase()))),
                );
            }
            model.insert_symbol(
                id,
                Symbol::Function(FunctionSymbol {
                    name,
                    accessibility: if shape.public {
                        Accessibility::Public
                    } else {
                        Accessibility::Private
                    },
                    return_type: if shape.is_async {
                        TypeRef::named("System.Threading.Tasks.Task")
                    } else {
                        TypeRef::keyword("System.Void", "void")
                    },
                    parameters: Vec::new(),
                    annotations,
                }),
            );
        }

        classes.push(
            DeclNode::class(class_id, class_name.clone())
                .with_modifiers(&["public", "partial"])
                .with_base("CommandGroup")
                .with_children(members),
        );
        model.insert_symbol(
            class_id,
            Symbol::Class(ClassSymbol {
                name: class_name,
                accessibility: Accessibility::Public,
                base_type: Some(TypeRef::named(MARKER)),
                namespace: NamespaceRef::named(namespace),
            }),
        );
    }

    let root = DeclNode::unit(NodeId(0)).with_children(classes);
    (CompilationUnit::new("Generated.cs", root), model)
}

fn generate_text(unit: &CompilationUnit, model: &InMemoryModel, config: GeneratorConfig) -> String {
    ShimGenerator::new(config)
        .generate_unit(unit, model)
        .expect("generation failed")
        .expect("unit produced no artifact")
        .text
}

// =============================================================================
// Emitter Properties
// =============================================================================

#[cfg(test)]
mod emitter_tests {
    use super::*;

    proptest! {
        /// Property: Releasing a child appends exactly its content, indented by one level
        #[test]
        fn release_appends_child_content_verbatim(
            before in prop::collection::vec("[a-z ]{0,12}", 0..4),
            inside in prop::collection::vec("[a-z]{1,12}", 0..6),
            width in 1usize..5,
        ) {
            let mut writer = CodeWriter::new(EmitConfig::new().with_indent(Indent::Spaces(width)));
            for line in &before {
                writer.append_line(line);
            }
            let prefix = writer.contents().to_string();

            let child_text;
            {
                let mut child = writer.child();
                for line in &inside {
                    child.append_line(line);
                }
                child_text = child.contents().to_string();
                child.release();
            }

            let expected: String = inside.iter().map(|l| format!("{}{}\n", " ".repeat(width), l)).collect();
            prop_assert_eq!(&child_text, &expected);
            prop_assert_eq!(writer.finish(), format!("{}{}", prefix, expected));
        }

        /// Property: Depth grows by one per nested child
        #[test]
        fn nested_depth_matches_nesting(levels in 1usize..8) {
            fn descend(writer: &mut CodeWriter<'_>, remaining: usize) {
                if remaining == 0 {
                    writer.append_line("leaf");
                    return;
                }
                let mut child = writer.child();
                descend(&mut child, remaining - 1);
                child.release();
            }

            let mut writer = CodeWriter::new(EmitConfig::default());
            descend(&mut writer, levels);
            prop_assert_eq!(writer.finish(), format!("{}leaf\n", "\t".repeat(levels)));
        }
    }
}

// =============================================================================
// Generation Properties
// =============================================================================

#[cfg(test)]
mod generation_tests {
    use super::*;

    fn groups_strategy() -> impl Strategy<Value = Vec<Vec<HandlerShape>>> {
        prop::collection::vec(prop::collection::vec(handler_shape(), 0..6), 1..4)
    }

    proptest! {
        /// Property: Exactly one shim per qualifying handler
        #[test]
        fn shim_count_matches_qualifying_handlers(groups in groups_strategy()) {
            let (unit, model) = build_unit("Bot.Commands", &groups);
            let text = generate_text(&unit, &model, GeneratorConfig::default());

            let expected = groups.iter().flatten().filter(|s| s.qualifies()).count();
            prop_assert_eq!(text.matches("public async ").count(), expected);

            for (g, handlers) in groups.iter().enumerate() {
                for (h, shape) in handlers.iter().enumerate() {
                    let shim = format!("Handler{}x{}Async_Shim(", g, h);
                    prop_assert_eq!(text.contains(&shim), shape.qualifies());
                }
            }
        }

        /// Property: Generation is idempotent
        #[test]
        fn generation_is_idempotent(groups in groups_strategy(), propagate in any::<bool>()) {
            let (unit, model) = build_unit("Bot.Commands", &groups);
            let config = GeneratorConfig::default().with_propagate_failures(propagate);
            let first = generate_text(&unit, &model, config.clone());
            let second = generate_text(&unit, &model, config);
            prop_assert_eq!(first, second);
        }

        /// Property: The namespace wrapper is opened once and every block is closed once
        #[test]
        fn namespace_wrapper_closed_once(groups in groups_strategy()) {
            let (unit, model) = build_unit("Bot.Commands", &groups);
            let text = generate_text(&unit, &model, GeneratorConfig::default());

            prop_assert_eq!(text.matches("namespace Bot.Commands").count(), 1);
            prop_assert_eq!(text.matches('{').count(), text.matches('}').count());
            prop_assert!(text.ends_with("\t}\n}\n"), "text does not end with closed blocks: {:?}", text);
            prop_assert_eq!(text.matches("partial class").count(), groups.len());
        }

        /// Property: Global-namespace groups are emitted without a wrapper
        #[test]
        fn global_namespace_has_no_wrapper(groups in groups_strategy()) {
            let (unit, model) = build_unit("", &groups);
            let text = generate_text(&unit, &model, GeneratorConfig::default());

            prop_assert!(!text.contains("namespace"));
            prop_assert_eq!(text.matches("\npartial class").count(), groups.len());
        }
    }
}
