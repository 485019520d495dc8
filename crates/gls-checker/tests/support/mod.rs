//! Test AST and in-memory type context shared by the calculator tests.

use crate::context::{Symbol, SymbolKind, TypeContext};
use crate::node::*;
use crate::registry::TypeCalculatorRegistry;
use gls_solver::SemanticType;
use rustc_hash::FxHashMap;
use std::sync::{LazyLock, Mutex, Once};

// =============================================================================
// Test AST
// =============================================================================

pub(crate) struct LiteralNode {
    /// `None` models a literal node without a value property.
    pub value: Option<LiteralValue<'static>>,
}

pub(crate) struct BinaryNode {
    pub left: Box<TestExpr>,
    pub operator: String,
    pub right: Box<TestExpr>,
}

pub(crate) struct PropertyNode {
    pub receiver: Option<Box<TestExpr>>,
    pub name: String,
    pub spread: bool,
}

pub(crate) struct ElvisNode {
    pub primary: Box<TestExpr>,
    pub fallback: Box<TestExpr>,
}

pub(crate) struct GStringNode {
    pub parts: Option<Vec<String>>,
    pub values: Option<Vec<TestExpr>>,
}

pub(crate) struct TernaryNode {
    pub condition: Box<TestExpr>,
    pub when_true: Box<TestExpr>,
    pub when_false: Box<TestExpr>,
}

pub(crate) struct MethodCallNode {
    pub receiver: Option<Box<TestExpr>>,
    pub name: String,
    pub arguments: Vec<TestExpr>,
    pub spread: bool,
}

pub(crate) struct CastNode {
    pub operand: Box<TestExpr>,
    pub target: String,
}

pub(crate) struct UnaryNode {
    pub operator: String,
    pub operand: Box<TestExpr>,
}

pub(crate) struct RangeNode {
    pub start: Box<TestExpr>,
    pub end: Box<TestExpr>,
}

pub(crate) enum TestExpr {
    Literal(LiteralNode),
    Binary(BinaryNode),
    List(Vec<TestExpr>),
    Map(Vec<(TestExpr, TestExpr)>),
    Property(PropertyNode),
    Elvis(ElvisNode),
    GString(GStringNode),
    Closure,
    Ternary(TernaryNode),
    Variable(String),
    MethodCall(MethodCallNode),
    ConstructorCall(String),
    Cast(CastNode),
    Unary(UnaryNode),
    Range(RangeNode),
    /// Reports `kind` but exposes no shape at all.
    Opaque(NodeKind),
}

impl ExprNode for TestExpr {
    fn kind(&self) -> NodeKind {
        match self {
            TestExpr::Literal(_) => NodeKind::Literal,
            TestExpr::Binary(_) => NodeKind::Binary,
            TestExpr::List(_) => NodeKind::List,
            TestExpr::Map(_) => NodeKind::Map,
            TestExpr::Property(_) => NodeKind::PropertyAccess,
            TestExpr::Elvis(_) => NodeKind::Elvis,
            TestExpr::GString(_) => NodeKind::GString,
            TestExpr::Closure => NodeKind::Closure,
            TestExpr::Ternary(_) => NodeKind::Ternary,
            TestExpr::Variable(_) => NodeKind::Variable,
            TestExpr::MethodCall(_) => NodeKind::MethodCall,
            TestExpr::ConstructorCall(_) => NodeKind::ConstructorCall,
            TestExpr::Cast(_) => NodeKind::Cast,
            TestExpr::Unary(_) => NodeKind::Unary,
            TestExpr::Range(_) => NodeKind::Range,
            TestExpr::Opaque(kind) => *kind,
        }
    }

    fn as_literal(&self) -> Option<&dyn LiteralShape> {
        match self {
            TestExpr::Literal(node) if node.value.is_some() => Some(node),
            _ => None,
        }
    }

    fn as_binary(&self) -> Option<&dyn BinaryShape> {
        match self {
            TestExpr::Binary(node) => Some(node),
            _ => None,
        }
    }

    fn as_list(&self) -> Option<&dyn ListShape> {
        match self {
            TestExpr::List(_) => Some(self),
            _ => None,
        }
    }

    fn as_map(&self) -> Option<&dyn MapShape> {
        match self {
            TestExpr::Map(_) => Some(self),
            _ => None,
        }
    }

    fn as_property(&self) -> Option<&dyn PropertyShape> {
        match self {
            TestExpr::Property(node) => Some(node),
            _ => None,
        }
    }

    fn as_elvis(&self) -> Option<&dyn ElvisShape> {
        match self {
            TestExpr::Elvis(node) => Some(node),
            _ => None,
        }
    }

    fn as_interpolation(&self) -> Option<&dyn InterpolationShape> {
        match self {
            TestExpr::GString(node) => Some(node),
            _ => None,
        }
    }

    fn as_ternary(&self) -> Option<&dyn TernaryShape> {
        match self {
            TestExpr::Ternary(node) => Some(node),
            _ => None,
        }
    }

    fn as_variable(&self) -> Option<&dyn VariableShape> {
        match self {
            TestExpr::Variable(_) => Some(self),
            _ => None,
        }
    }

    fn as_method_call(&self) -> Option<&dyn MethodCallShape> {
        match self {
            TestExpr::MethodCall(node) => Some(node),
            _ => None,
        }
    }

    fn as_constructor_call(&self) -> Option<&dyn ConstructorCallShape> {
        match self {
            TestExpr::ConstructorCall(_) => Some(self),
            _ => None,
        }
    }

    fn as_cast(&self) -> Option<&dyn CastShape> {
        match self {
            TestExpr::Cast(node) => Some(node),
            _ => None,
        }
    }

    fn as_unary(&self) -> Option<&dyn UnaryShape> {
        match self {
            TestExpr::Unary(node) => Some(node),
            _ => None,
        }
    }

    fn as_range(&self) -> Option<&dyn RangeShape> {
        match self {
            TestExpr::Range(node) => Some(node),
            _ => None,
        }
    }
}

impl LiteralShape for LiteralNode {
    fn value(&self) -> LiteralValue<'_> {
        self.value.unwrap_or(LiteralValue::Null)
    }
}

impl BinaryShape for BinaryNode {
    fn left(&self) -> &dyn ExprNode {
        &*self.left
    }
    fn right(&self) -> &dyn ExprNode {
        &*self.right
    }
    fn operator(&self) -> &str {
        &self.operator
    }
}

impl ListShape for TestExpr {
    fn elements(&self) -> Vec<&dyn ExprNode> {
        match self {
            TestExpr::List(elements) => elements.iter().map(|e| e as &dyn ExprNode).collect(),
            _ => Vec::new(),
        }
    }
}

impl MapShape for TestExpr {
    fn entries(&self) -> Vec<MapEntry<'_>> {
        match self {
            TestExpr::Map(entries) => entries
                .iter()
                .map(|(key, value)| MapEntry { key, value })
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl PropertyShape for PropertyNode {
    fn receiver(&self) -> Option<&dyn ExprNode> {
        self.receiver.as_deref().map(|r| r as &dyn ExprNode)
    }
    fn property_name(&self) -> &str {
        &self.name
    }
    fn is_spread(&self) -> bool {
        self.spread
    }
}

impl ElvisShape for ElvisNode {
    fn primary(&self) -> &dyn ExprNode {
        &*self.primary
    }
    fn fallback(&self) -> &dyn ExprNode {
        &*self.fallback
    }
}

impl InterpolationShape for GStringNode {
    fn literal_parts(&self) -> Option<Vec<&str>> {
        self.parts
            .as_ref()
            .map(|parts| parts.iter().map(String::as_str).collect())
    }
    fn values(&self) -> Option<Vec<&dyn ExprNode>> {
        self.values
            .as_ref()
            .map(|values| values.iter().map(|v| v as &dyn ExprNode).collect())
    }
}

impl TernaryShape for TernaryNode {
    fn condition(&self) -> &dyn ExprNode {
        &*self.condition
    }
    fn when_true(&self) -> &dyn ExprNode {
        &*self.when_true
    }
    fn when_false(&self) -> &dyn ExprNode {
        &*self.when_false
    }
}

impl VariableShape for TestExpr {
    fn name(&self) -> &str {
        match self {
            TestExpr::Variable(name) => name,
            _ => "",
        }
    }
}

impl MethodCallShape for MethodCallNode {
    fn receiver(&self) -> Option<&dyn ExprNode> {
        self.receiver.as_deref().map(|r| r as &dyn ExprNode)
    }
    fn method_name(&self) -> &str {
        &self.name
    }
    fn arguments(&self) -> Vec<&dyn ExprNode> {
        self.arguments.iter().map(|a| a as &dyn ExprNode).collect()
    }
    fn is_spread(&self) -> bool {
        self.spread
    }
}

impl ConstructorCallShape for TestExpr {
    fn type_name(&self) -> &str {
        match self {
            TestExpr::ConstructorCall(name) => name,
            _ => "",
        }
    }
}

impl CastShape for CastNode {
    fn operand(&self) -> &dyn ExprNode {
        &*self.operand
    }
    fn target_type(&self) -> &str {
        &self.target
    }
}

impl UnaryShape for UnaryNode {
    fn operator(&self) -> &str {
        &self.operator
    }
    fn operand(&self) -> &dyn ExprNode {
        &*self.operand
    }
}

impl RangeShape for RangeNode {
    fn start(&self) -> &dyn ExprNode {
        &*self.start
    }
    fn end(&self) -> &dyn ExprNode {
        &*self.end
    }
}

// =============================================================================
// Builders
// =============================================================================

pub(crate) fn lit(value: LiteralValue<'static>) -> TestExpr {
    TestExpr::Literal(LiteralNode { value: Some(value) })
}

pub(crate) fn valueless_literal() -> TestExpr {
    TestExpr::Literal(LiteralNode { value: None })
}

pub(crate) fn int(value: i32) -> TestExpr {
    lit(LiteralValue::Int(value))
}

pub(crate) fn long(value: i64) -> TestExpr {
    lit(LiteralValue::Long(value))
}

pub(crate) fn double(value: f64) -> TestExpr {
    lit(LiteralValue::Double(value))
}

pub(crate) fn boolean(value: bool) -> TestExpr {
    lit(LiteralValue::Boolean(value))
}

pub(crate) fn string(value: &'static str) -> TestExpr {
    lit(LiteralValue::String(value))
}

pub(crate) fn null() -> TestExpr {
    lit(LiteralValue::Null)
}

pub(crate) fn binary(left: TestExpr, operator: &str, right: TestExpr) -> TestExpr {
    TestExpr::Binary(BinaryNode {
        left: Box::new(left),
        operator: operator.to_string(),
        right: Box::new(right),
    })
}

pub(crate) fn list(elements: Vec<TestExpr>) -> TestExpr {
    TestExpr::List(elements)
}

pub(crate) fn map(entries: Vec<(TestExpr, TestExpr)>) -> TestExpr {
    TestExpr::Map(entries)
}

pub(crate) fn property(receiver: TestExpr, name: &str) -> TestExpr {
    TestExpr::Property(PropertyNode {
        receiver: Some(Box::new(receiver)),
        name: name.to_string(),
        spread: false,
    })
}

pub(crate) fn implicit_property(name: &str) -> TestExpr {
    TestExpr::Property(PropertyNode {
        receiver: None,
        name: name.to_string(),
        spread: false,
    })
}

pub(crate) fn spread_property(receiver: TestExpr, name: &str) -> TestExpr {
    TestExpr::Property(PropertyNode {
        receiver: Some(Box::new(receiver)),
        name: name.to_string(),
        spread: true,
    })
}

pub(crate) fn elvis(primary: TestExpr, fallback: TestExpr) -> TestExpr {
    TestExpr::Elvis(ElvisNode {
        primary: Box::new(primary),
        fallback: Box::new(fallback),
    })
}

pub(crate) fn gstring(parts: &[&str], values: Vec<TestExpr>) -> TestExpr {
    TestExpr::GString(GStringNode {
        parts: Some(parts.iter().map(|part| part.to_string()).collect()),
        values: Some(values),
    })
}

pub(crate) fn ternary(condition: TestExpr, when_true: TestExpr, when_false: TestExpr) -> TestExpr {
    TestExpr::Ternary(TernaryNode {
        condition: Box::new(condition),
        when_true: Box::new(when_true),
        when_false: Box::new(when_false),
    })
}

pub(crate) fn var(name: &str) -> TestExpr {
    TestExpr::Variable(name.to_string())
}

pub(crate) fn call(receiver: TestExpr, name: &str, arguments: Vec<TestExpr>) -> TestExpr {
    TestExpr::MethodCall(MethodCallNode {
        receiver: Some(Box::new(receiver)),
        name: name.to_string(),
        arguments,
        spread: false,
    })
}

pub(crate) fn implicit_call(name: &str, arguments: Vec<TestExpr>) -> TestExpr {
    TestExpr::MethodCall(MethodCallNode {
        receiver: None,
        name: name.to_string(),
        arguments,
        spread: false,
    })
}

pub(crate) fn spread_call(receiver: TestExpr, name: &str, arguments: Vec<TestExpr>) -> TestExpr {
    TestExpr::MethodCall(MethodCallNode {
        receiver: Some(Box::new(receiver)),
        name: name.to_string(),
        arguments,
        spread: true,
    })
}

pub(crate) fn new_instance(type_name: &str) -> TestExpr {
    TestExpr::ConstructorCall(type_name.to_string())
}

pub(crate) fn cast(operand: TestExpr, target: &str) -> TestExpr {
    TestExpr::Cast(CastNode {
        operand: Box::new(operand),
        target: target.to_string(),
    })
}

pub(crate) fn unary(operator: &str, operand: TestExpr) -> TestExpr {
    TestExpr::Unary(UnaryNode {
        operator: operator.to_string(),
        operand: Box::new(operand),
    })
}

pub(crate) fn range(start: TestExpr, end: TestExpr) -> TestExpr {
    TestExpr::Range(RangeNode {
        start: Box::new(start),
        end: Box::new(end),
    })
}

// =============================================================================
// Test context
// =============================================================================

type MethodOverload = (Vec<SemanticType>, SemanticType);

/// Symbol layer backed by in-memory tables. Sub-expressions re-enter
/// `registry`.
pub(crate) struct TestContext<'r> {
    registry: &'r TypeCalculatorRegistry,
    symbols: FxHashMap<String, Symbol>,
    fields: FxHashMap<(SemanticType, String), SemanticType>,
    methods: FxHashMap<(SemanticType, String), Vec<MethodOverload>>,
    types: FxHashMap<String, SemanticType>,
    /// Unregistered type names resolve to `Known(name)` instead of `Unknown`.
    resolve_any_type: bool,
    static_compilation: bool,
    /// Receivers passed to field and method lookups, in call order.
    seen_receivers: Mutex<Vec<SemanticType>>,
}

impl<'r> TestContext<'r> {
    pub(crate) fn new(registry: &'r TypeCalculatorRegistry) -> Self {
        init_test_tracing();
        Self {
            registry,
            symbols: FxHashMap::default(),
            fields: FxHashMap::default(),
            methods: FxHashMap::default(),
            types: FxHashMap::default(),
            resolve_any_type: false,
            static_compilation: false,
            seen_receivers: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_local(self, name: &str, ty: SemanticType) -> Self {
        self.with_symbol(Symbol::new(name, SymbolKind::LocalVariable, ty))
    }

    pub(crate) fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbols.insert(symbol.name.clone(), symbol);
        self
    }

    pub(crate) fn with_field(mut self, receiver: SemanticType, name: &str, ty: SemanticType) -> Self {
        self.fields.insert((receiver, name.to_string()), ty);
        self
    }

    /// Register an overload; lookups match argument types exactly.
    pub(crate) fn with_method(
        mut self,
        receiver: SemanticType,
        name: &str,
        params: Vec<SemanticType>,
        ret: SemanticType,
    ) -> Self {
        self.methods
            .entry((receiver, name.to_string()))
            .or_default()
            .push((params, ret));
        self
    }

    pub(crate) fn with_type(mut self, name: &str, ty: SemanticType) -> Self {
        self.types.insert(name.to_string(), ty);
        self
    }

    pub(crate) fn resolving_any_type(mut self) -> Self {
        self.resolve_any_type = true;
        self
    }

    /// Receivers seen by `get_field_type`/`get_method_return_type` so far.
    pub(crate) fn seen_receivers(&self) -> Vec<SemanticType> {
        self.seen_receivers
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }

    fn record_receiver(&self, receiver: &SemanticType) {
        if let Ok(mut seen) = self.seen_receivers.lock() {
            seen.push(receiver.clone());
        }
    }

    pub(crate) fn static_mode(mut self) -> Self {
        self.static_compilation = true;
        self
    }

    pub(crate) fn infer(&self, expr: &TestExpr) -> SemanticType {
        self.calculate_type(expr)
    }
}

impl TypeContext for TestContext<'_> {
    fn calculate_type(&self, node: &dyn ExprNode) -> SemanticType {
        self.registry.calculate(node, self)
    }

    fn resolve_type(&self, fqn: &str) -> SemanticType {
        match self.types.get(fqn) {
            Some(ty) => ty.clone(),
            None if self.resolve_any_type => SemanticType::known(fqn),
            None => SemanticType::unknown(format!("unresolved type {fqn}")),
        }
    }

    fn lookup_symbol(&self, name: &str) -> Option<Symbol> {
        self.symbols.get(name).cloned()
    }

    fn get_method_return_type(
        &self,
        receiver: &SemanticType,
        method_name: &str,
        arg_types: &[SemanticType],
    ) -> Option<SemanticType> {
        self.record_receiver(receiver);
        let overloads = self
            .methods
            .get(&(receiver.clone(), method_name.to_string()))?;
        overloads
            .iter()
            .find(|(params, _)| params.as_slice() == arg_types)
            .map(|(_, ret)| ret.clone())
    }

    fn get_field_type(&self, receiver: &SemanticType, field_name: &str) -> Option<SemanticType> {
        self.record_receiver(receiver);
        self.fields
            .get(&(receiver.clone(), field_name.to_string()))
            .cloned()
    }

    fn is_static_compilation(&self) -> bool {
        self.static_compilation
    }
}

// =============================================================================
// Shared fixtures
// =============================================================================

static STANDARD_REGISTRY: LazyLock<TypeCalculatorRegistry> =
    LazyLock::new(TypeCalculatorRegistry::standard);

pub(crate) fn standard_registry() -> &'static TypeCalculatorRegistry {
    &STANDARD_REGISTRY
}

/// Context over the standard registry with empty symbol tables.
pub(crate) fn standard_context() -> TestContext<'static> {
    TestContext::new(standard_registry())
}

fn init_test_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(gls_common::init_tracing);
}
