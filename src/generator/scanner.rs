//! Walk one compilation unit and emit its shims.
//!
//! The scanner decides which declarations qualify and composes the artifact:
//!
//! 1. The unit qualifies only if its first class (document pre-order) derives from the command-group marker.
//! 2. Class blocks are emitted for partial classes that list at least one base type. A class that does not
//!    conform is skipped together with its members; scanning continues with its next sibling.
//! 3. The first emitted class that lives in a named namespace opens the unit's single namespace wrapper; the
//!    wrapper encloses that class and every class block after it.
//! 4. Inside an emitted class, every non-public function returning one of the recognized async types and carrying
//!    the command annotation gets exactly one shim.
//!
//! Every opened block (namespace or class) is closed exactly once, after its contents. A qualifying unit in
//! which no class gets a block yields no artifact.

use cmdshim_syntax::{
    ClassSymbol, CompilationUnit, DeclNode, FunctionSymbol, SemanticModel, Symbol, SyntaxKind, TypeRef,
};

use super::config::GeneratorConfig;
use super::errors::GenerateError;
use super::metadata::emit_annotations;
use super::shim::{emit_shim, shim_name};
use crate::emit::CodeWriter;

/// Scanner state for one unit.
pub struct DeclarationScanner<'a, M: SemanticModel> {
    config: &'a GeneratorConfig,
    model: &'a M,
    unit: &'a CompilationUnit,
    /// Resolved command annotation type; `None` when the compilation does not know it.
    command_attribute: Option<TypeRef>,
    shim_count: usize,
    class_count: usize,
}

impl<'a, M: SemanticModel> DeclarationScanner<'a, M> {
    pub fn new(config: &'a GeneratorConfig, model: &'a M, unit: &'a CompilationUnit) -> Self {
        Self {
            config,
            model,
            unit,
            command_attribute: model.type_by_name(&config.command_attribute_type),
            shim_count: 0,
            class_count: 0,
        }
    }

    /// Number of shims emitted by the last call to [`scan`](Self::scan).
    pub fn shim_count(&self) -> usize {
        self.shim_count
    }

    /// Number of class blocks emitted by the last call to [`scan`](Self::scan), nested ones included.
    pub fn class_count(&self) -> usize {
        self.class_count
    }

    /// Produce the unit's generated text, or `None` if the unit is not a command group or no class in it
    /// gets a block.
    ///
    /// ## Errors
    ///
    /// Returns an error if the host cannot resolve a declaration the scanner needs to inspect.
    #[tracing::instrument(skip_all, fields(unit = %self.unit.id))]
    pub fn scan(&mut self) -> Result<Option<String>, GenerateError> {
        self.shim_count = 0;
        self.class_count = 0;

        if !self.is_command_group_unit()? {
            return Ok(None);
        }

        let mut root = CodeWriter::new(self.config.emit);
        for line in &self.config.preamble {
            root.append_line(line);
        }

        let unit = self.unit;
        let mut outermost = Vec::new();
        collect_outermost_classes(&unit.root, &mut outermost);
        let mut classes = outermost.into_iter();

        // Class blocks before the namespace wrapper opens go straight into the root.
        let mut opener = None;
        for class in classes.by_ref() {
            let Some(symbol) = self.qualify_class(class)? else {
                continue;
            };
            if symbol.namespace.is_global() {
                self.emit_class(&mut root, class, &symbol)?;
            } else {
                opener = Some((class, symbol));
                break;
            }
        }

        if let Some((first, symbol)) = opener {
            root.append_line(&format!("namespace {}", symbol.namespace.name));
            root.append_line("{");
            {
                let mut body = root.child();
                self.emit_class(&mut body, first, &symbol)?;
                for class in classes {
                    if let Some(symbol) = self.qualify_class(class)? {
                        self.emit_class(&mut body, class, &symbol)?;
                    }
                }
                body.release();
            }
            root.append_line("}");
        }

        if self.class_count == 0 {
            tracing::debug!("no class block emitted");
            return Ok(None);
        }

        tracing::debug!(classes = self.class_count, shims = self.shim_count, "unit scanned");
        Ok(Some(root.finish()))
    }

    fn is_command_group_unit(&self) -> Result<bool, GenerateError> {
        let Some(first) = self.unit.root.first_class() else {
            tracing::debug!("no class declaration");
            return Ok(false);
        };
        let Some(marker) = self.model.type_by_name(&self.config.command_group_type) else {
            tracing::debug!(marker = %self.config.command_group_type, "marker type unknown to the compilation");
            return Ok(false);
        };
        let symbol = self.class_symbol(first)?;
        let derives = symbol
            .base_type
            .as_ref()
            .is_some_and(|base| self.model.types_equal(base, &marker));
        if !derives {
            tracing::debug!(class = %symbol.name, "first class is not a command group");
        }
        Ok(derives)
    }

    /// Resolve a class if it gets a block: partial and with a non-empty base list.
    fn qualify_class(&self, node: &DeclNode) -> Result<Option<ClassSymbol>, GenerateError> {
        if !node.is_partial() || !node.has_base_list() {
            tracing::trace!(class = %node.name, "skipping non-partial or baseless class");
            return Ok(None);
        }
        self.class_symbol(node).map(Some)
    }

    fn emit_class(
        &mut self,
        writer: &mut CodeWriter<'_>,
        node: &DeclNode,
        symbol: &ClassSymbol,
    ) -> Result<(), GenerateError> {
        self.class_count += 1;
        writer.append_line(&format!("partial class {}", symbol.name));
        writer.append_line("{");
        self.emit_members(writer, &node.children)?;
        writer.append_line("}");
        Ok(())
    }

    fn emit_members(&mut self, writer: &mut CodeWriter<'_>, members: &[DeclNode]) -> Result<(), GenerateError> {
        for member in members {
            match member.kind {
                SyntaxKind::Function => {
                    let Some(function) = self.qualify_function(member)? else {
                        continue;
                    };
                    let mut scope = writer.child();
                    emit_annotations(&mut scope, &function.annotations);
                    emit_shim(&mut scope, &function, self.config);
                    scope.release();

                    self.shim_count += 1;
                    tracing::debug!(shim = %shim_name(&function.name, self.config), "emitted shim");
                }
                SyntaxKind::Class => {
                    let Some(symbol) = self.qualify_class(member)? else {
                        continue;
                    };
                    let mut scope = writer.child();
                    self.emit_class(&mut scope, member, &symbol)?;
                    scope.release();
                }
                SyntaxKind::Unit | SyntaxKind::Namespace | SyntaxKind::Other => {
                    self.emit_members(writer, &member.children)?;
                }
            }
        }
        Ok(())
    }

    /// Resolve a function if it is a non-public, async, command-annotated handler.
    fn qualify_function(&self, node: &DeclNode) -> Result<Option<FunctionSymbol>, GenerateError> {
        let function = self.function_symbol(node)?;

        if function.accessibility.is_public() {
            tracing::trace!(function = %function.name, "skipping public function");
            return Ok(None);
        }
        if !self
            .config
            .is_async_return_type(&function.return_type.fully_qualified())
        {
            tracing::trace!(function = %function.name, "skipping non-async function");
            return Ok(None);
        }
        let Some(command) = &self.command_attribute else {
            return Ok(None);
        };
        if !function
            .annotations
            .iter()
            .any(|a| self.model.types_equal(&a.ty, command))
        {
            tracing::trace!(function = %function.name, "skipping function without command annotation");
            return Ok(None);
        }

        Ok(Some(function))
    }

    fn class_symbol(&self, node: &DeclNode) -> Result<ClassSymbol, GenerateError> {
        match self.resolve(node)? {
            Symbol::Class(class) => Ok(class),
            Symbol::Function(_) => Err(self.kind_mismatch(node, "class", "function")),
        }
    }

    fn function_symbol(&self, node: &DeclNode) -> Result<FunctionSymbol, GenerateError> {
        match self.resolve(node)? {
            Symbol::Function(function) => Ok(function),
            Symbol::Class(_) => Err(self.kind_mismatch(node, "function", "class")),
        }
    }

    fn resolve(&self, node: &DeclNode) -> Result<Symbol, GenerateError> {
        self.model
            .declared_symbol(node)
            .ok_or_else(|| GenerateError::UnresolvedSymbol {
                unit: self.unit.id.clone(),
                node: node.id,
            })
    }

    fn kind_mismatch(&self, node: &DeclNode, expected: &'static str, found: &'static str) -> GenerateError {
        GenerateError::SymbolKindMismatch {
            unit: self.unit.id.clone(),
            node: node.id,
            expected,
            found,
        }
    }
}

/// Collect classes not nested in another class, in document pre-order.
fn collect_outermost_classes<'t>(node: &'t DeclNode, out: &mut Vec<&'t DeclNode>) {
    for child in &node.children {
        match child.kind {
            SyntaxKind::Class => out.push(child),
            SyntaxKind::Function => {}
            SyntaxKind::Unit | SyntaxKind::Namespace | SyntaxKind::Other => collect_outermost_classes(child, out),
        }
    }
}
