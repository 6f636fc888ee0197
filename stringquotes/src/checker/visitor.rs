use super::{LiteralKind, LiteralOccurrence};
use crate::utils::LineIndex;
use ruff_python_ast::{self as ast, Expr, Pattern, Stmt};
use ruff_text_size::{Ranged, TextRange};

/// Depth-first, left-to-right walk over a parsed module that records every
/// string and bytes literal it encounters. Document order keeps the emitted
/// diagnostics sorted by (line, column) without an extra sort.
pub(super) struct LiteralVisitor<'a> {
    line_index: &'a LineIndex,
    pub(super) literals: Vec<LiteralOccurrence>,
}

impl<'a> LiteralVisitor<'a> {
    pub(super) fn new(line_index: &'a LineIndex) -> Self {
        Self {
            line_index,
            literals: Vec::new(),
        }
    }

    fn push_literal(&mut self, range: TextRange, kind: LiteralKind, value: String) {
        let (line, col) = self.line_index.line_col(range.start());
        let end_line = self.line_index.line_index(range.end());
        // Literals spanning physical lines carry no column; the validator
        // exempts them.
        let col = (line == end_line).then_some(col);
        self.literals.push(LiteralOccurrence {
            line,
            col,
            value,
            kind,
        });
    }

    pub(super) fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::FunctionDef(node) => {
                for decorator in &node.decorator_list {
                    self.visit_expr(&decorator.expression);
                }
                if let Some(type_params) = &node.type_params {
                    self.visit_type_params(type_params);
                }
                self.visit_parameters(&node.parameters);
                if let Some(returns) = &node.returns {
                    self.visit_expr(returns);
                }
                self.visit_body(&node.body);
            }
            Stmt::ClassDef(node) => {
                for decorator in &node.decorator_list {
                    self.visit_expr(&decorator.expression);
                }
                if let Some(type_params) = &node.type_params {
                    self.visit_type_params(type_params);
                }
                if let Some(arguments) = &node.arguments {
                    for arg in &arguments.args {
                        self.visit_expr(arg);
                    }
                    for keyword in &arguments.keywords {
                        self.visit_expr(&keyword.value);
                    }
                }
                self.visit_body(&node.body);
            }
            Stmt::Return(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Stmt::Delete(node) => {
                for target in &node.targets {
                    self.visit_expr(target);
                }
            }
            Stmt::Assign(node) => {
                for target in &node.targets {
                    self.visit_expr(target);
                }
                self.visit_expr(&node.value);
            }
            Stmt::AugAssign(node) => {
                self.visit_expr(&node.target);
                self.visit_expr(&node.value);
            }
            Stmt::AnnAssign(node) => {
                self.visit_expr(&node.target);
                self.visit_expr(&node.annotation);
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Stmt::TypeAlias(node) => {
                self.visit_expr(&node.name);
                if let Some(type_params) = &node.type_params {
                    self.visit_type_params(type_params);
                }
                self.visit_expr(&node.value);
            }
            Stmt::For(node) => {
                self.visit_expr(&node.target);
                self.visit_expr(&node.iter);
                self.visit_body(&node.body);
                self.visit_body(&node.orelse);
            }
            Stmt::While(node) => {
                self.visit_expr(&node.test);
                self.visit_body(&node.body);
                self.visit_body(&node.orelse);
            }
            Stmt::If(node) => {
                self.visit_expr(&node.test);
                self.visit_body(&node.body);
                for clause in &node.elif_else_clauses {
                    if let Some(test) = &clause.test {
                        self.visit_expr(test);
                    }
                    self.visit_body(&clause.body);
                }
            }
            Stmt::With(node) => {
                for item in &node.items {
                    self.visit_expr(&item.context_expr);
                    if let Some(vars) = &item.optional_vars {
                        self.visit_expr(vars);
                    }
                }
                self.visit_body(&node.body);
            }
            Stmt::Match(node) => {
                self.visit_expr(&node.subject);
                for case in &node.cases {
                    self.visit_pattern(&case.pattern);
                    if let Some(guard) = &case.guard {
                        self.visit_expr(guard);
                    }
                    self.visit_body(&case.body);
                }
            }
            Stmt::Raise(node) => {
                if let Some(exc) = &node.exc {
                    self.visit_expr(exc);
                }
                if let Some(cause) = &node.cause {
                    self.visit_expr(cause);
                }
            }
            Stmt::Try(node) => {
                self.visit_body(&node.body);
                for handler in &node.handlers {
                    let ast::ExceptHandler::ExceptHandler(handler) = handler;
                    if let Some(type_) = &handler.type_ {
                        self.visit_expr(type_);
                    }
                    self.visit_body(&handler.body);
                }
                self.visit_body(&node.orelse);
                self.visit_body(&node.finalbody);
            }
            Stmt::Assert(node) => {
                self.visit_expr(&node.test);
                if let Some(msg) = &node.msg {
                    self.visit_expr(msg);
                }
            }
            Stmt::Expr(node) => self.visit_expr(&node.value),
            // Import, Global, Nonlocal, Pass, Break, Continue carry no
            // literal-bearing expressions.
            _ => {}
        }
    }

    fn visit_body(&mut self, body: &[Stmt]) {
        for stmt in body {
            self.visit_stmt(stmt);
        }
    }

    #[allow(clippy::too_many_lines)]
    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::StringLiteral(node) => {
                for part in &node.value {
                    self.push_literal(part.range(), LiteralKind::Str, part.value.to_string());
                }
            }
            Expr::BytesLiteral(node) => {
                for part in &node.value {
                    self.push_literal(part.range(), LiteralKind::Bytes, decode_ascii(&part.value));
                }
            }
            Expr::FString(node) => {
                for part in &node.value {
                    match part {
                        ast::FStringPart::Literal(_) => {}
                        ast::FStringPart::FString(f) => {
                            for element in &f.elements {
                                if let ast::InterpolatedStringElement::Interpolation(interp) =
                                    element
                                {
                                    self.visit_expr(&interp.expression);
                                }
                            }
                        }
                    }
                }
            }
            Expr::BoolOp(node) => {
                for value in &node.values {
                    self.visit_expr(value);
                }
            }
            Expr::Named(node) => {
                self.visit_expr(&node.target);
                self.visit_expr(&node.value);
            }
            Expr::BinOp(node) => {
                self.visit_expr(&node.left);
                self.visit_expr(&node.right);
            }
            Expr::UnaryOp(node) => self.visit_expr(&node.operand),
            Expr::Lambda(node) => {
                if let Some(parameters) = &node.parameters {
                    self.visit_parameters(parameters);
                }
                self.visit_expr(&node.body);
            }
            Expr::If(node) => {
                self.visit_expr(&node.body);
                self.visit_expr(&node.test);
                self.visit_expr(&node.orelse);
            }
            Expr::Dict(node) => {
                for item in &node.items {
                    if let Some(key) = &item.key {
                        self.visit_expr(key);
                    }
                    self.visit_expr(&item.value);
                }
            }
            Expr::Set(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::ListComp(node) => {
                self.visit_expr(&node.elt);
                self.visit_comprehensions(&node.generators);
            }
            Expr::SetComp(node) => {
                self.visit_expr(&node.elt);
                self.visit_comprehensions(&node.generators);
            }
            Expr::DictComp(node) => {
                if let Some(key) = &node.key {
                    self.visit_expr(key);
                }
                self.visit_expr(&node.value);
                self.visit_comprehensions(&node.generators);
            }
            Expr::Generator(node) => {
                self.visit_expr(&node.elt);
                self.visit_comprehensions(&node.generators);
            }
            Expr::Await(node) => self.visit_expr(&node.value),
            Expr::Yield(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Expr::YieldFrom(node) => self.visit_expr(&node.value),
            Expr::Compare(node) => {
                self.visit_expr(&node.left);
                for comparator in &node.comparators {
                    self.visit_expr(comparator);
                }
            }
            Expr::Call(node) => {
                self.visit_expr(&node.func);
                for arg in &node.arguments.args {
                    self.visit_expr(arg);
                }
                for keyword in &node.arguments.keywords {
                    self.visit_expr(&keyword.value);
                }
            }
            Expr::Attribute(node) => self.visit_expr(&node.value),
            Expr::Subscript(node) => {
                self.visit_expr(&node.value);
                self.visit_expr(&node.slice);
            }
            Expr::Starred(node) => self.visit_expr(&node.value),
            Expr::List(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Tuple(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Slice(node) => {
                if let Some(lower) = &node.lower {
                    self.visit_expr(lower);
                }
                if let Some(upper) = &node.upper {
                    self.visit_expr(upper);
                }
                if let Some(step) = &node.step {
                    self.visit_expr(step);
                }
            }
            // Name and the remaining literal leaves carry no string content.
            _ => {}
        }
    }

    fn visit_pattern(&mut self, pattern: &Pattern) {
        match pattern {
            Pattern::MatchValue(node) => self.visit_expr(&node.value),
            Pattern::MatchSequence(node) => {
                for inner in &node.patterns {
                    self.visit_pattern(inner);
                }
            }
            Pattern::MatchMapping(node) => {
                for (key, inner) in node.keys.iter().zip(&node.patterns) {
                    self.visit_expr(key);
                    self.visit_pattern(inner);
                }
            }
            Pattern::MatchClass(node) => {
                self.visit_expr(&node.cls);
                for inner in &node.arguments.patterns {
                    self.visit_pattern(inner);
                }
                for keyword in &node.arguments.keywords {
                    self.visit_pattern(&keyword.pattern);
                }
            }
            Pattern::MatchAs(node) => {
                if let Some(inner) = &node.pattern {
                    self.visit_pattern(inner);
                }
            }
            Pattern::MatchOr(node) => {
                for inner in &node.patterns {
                    self.visit_pattern(inner);
                }
            }
            Pattern::MatchSingleton(_) | Pattern::MatchStar(_) => {}
        }
    }

    fn visit_parameters(&mut self, parameters: &ast::Parameters) {
        for param in parameters.posonlyargs.iter().chain(&parameters.args) {
            self.visit_parameter(&param.parameter);
            if let Some(default) = &param.default {
                self.visit_expr(default);
            }
        }
        if let Some(vararg) = &parameters.vararg {
            self.visit_parameter(vararg);
        }
        for param in &parameters.kwonlyargs {
            self.visit_parameter(&param.parameter);
            if let Some(default) = &param.default {
                self.visit_expr(default);
            }
        }
        if let Some(kwarg) = &parameters.kwarg {
            self.visit_parameter(kwarg);
        }
    }

    fn visit_parameter(&mut self, parameter: &ast::Parameter) {
        if let Some(annotation) = &parameter.annotation {
            self.visit_expr(annotation);
        }
    }

    fn visit_type_params(&mut self, type_params: &ast::TypeParams) {
        for type_param in &type_params.type_params {
            match type_param {
                ast::TypeParam::TypeVar(node) => {
                    if let Some(bound) = &node.bound {
                        self.visit_expr(bound);
                    }
                    if let Some(default) = &node.default {
                        self.visit_expr(default);
                    }
                }
                ast::TypeParam::ParamSpec(node) => {
                    if let Some(default) = &node.default {
                        self.visit_expr(default);
                    }
                }
                ast::TypeParam::TypeVarTuple(node) => {
                    if let Some(default) = &node.default {
                        self.visit_expr(default);
                    }
                }
            }
        }
    }

    fn visit_comprehensions(&mut self, generators: &[ast::Comprehension]) {
        for generator in generators {
            self.visit_expr(&generator.target);
            self.visit_expr(&generator.iter);
            for if_expr in &generator.ifs {
                self.visit_expr(if_expr);
            }
        }
    }
}

/// Decodes bytes-literal content to text for the containment check. The
/// opposite-quote characters are ASCII, so a byte-per-char mapping is
/// sufficient.
fn decode_ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
