//! Structural view of expression nodes.
//!
//! The engine never depends on a concrete syntax tree. A host adapts its AST
//! once by implementing [`ExprNode`] and answering the shape accessors its
//! nodes support; every accessor defaults to `None`, meaning "this node does
//! not have that shape". Calculators only ever look at nodes through these
//! traits.

use std::fmt;

/// Kind tag used by the registry to pick candidate calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Literal,
    Binary,
    List,
    Map,
    PropertyAccess,
    Elvis,
    GString,
    Closure,
    Ternary,
    Variable,
    MethodCall,
    ConstructorCall,
    Cast,
    Unary,
    Range,
    /// Host-defined kind with no built-in calculator.
    Custom(&'static str),
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Literal => "Literal",
            NodeKind::Binary => "Binary",
            NodeKind::List => "List",
            NodeKind::Map => "Map",
            NodeKind::PropertyAccess => "PropertyAccess",
            NodeKind::Elvis => "Elvis",
            NodeKind::GString => "GString",
            NodeKind::Closure => "Closure",
            NodeKind::Ternary => "Ternary",
            NodeKind::Variable => "Variable",
            NodeKind::MethodCall => "MethodCall",
            NodeKind::ConstructorCall => "ConstructorCall",
            NodeKind::Cast => "Cast",
            NodeKind::Unary => "Unary",
            NodeKind::Range => "Range",
            NodeKind::Custom(name) => name,
        };
        f.write_str(name)
    }
}

/// An expression node of the host's syntax tree.
pub trait ExprNode {
    fn kind(&self) -> NodeKind;

    fn as_literal(&self) -> Option<&dyn LiteralShape> {
        None
    }
    fn as_binary(&self) -> Option<&dyn BinaryShape> {
        None
    }
    fn as_list(&self) -> Option<&dyn ListShape> {
        None
    }
    fn as_map(&self) -> Option<&dyn MapShape> {
        None
    }
    fn as_property(&self) -> Option<&dyn PropertyShape> {
        None
    }
    fn as_elvis(&self) -> Option<&dyn ElvisShape> {
        None
    }
    fn as_interpolation(&self) -> Option<&dyn InterpolationShape> {
        None
    }
    fn as_ternary(&self) -> Option<&dyn TernaryShape> {
        None
    }
    fn as_variable(&self) -> Option<&dyn VariableShape> {
        None
    }
    fn as_method_call(&self) -> Option<&dyn MethodCallShape> {
        None
    }
    fn as_constructor_call(&self) -> Option<&dyn ConstructorCallShape> {
        None
    }
    fn as_cast(&self) -> Option<&dyn CastShape> {
        None
    }
    fn as_unary(&self) -> Option<&dyn UnaryShape> {
        None
    }
    fn as_range(&self) -> Option<&dyn RangeShape> {
        None
    }
}

/// Scalar value of a literal. `Null` is a present value (`null` literal),
/// distinct from a node without a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue<'a> {
    Null,
    Boolean(bool),
    Byte(i8),
    Char(char),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    /// Arbitrary-precision integer, as written.
    BigInteger(&'a str),
    /// Arbitrary-precision decimal, as written.
    BigDecimal(&'a str),
    String(&'a str),
}

pub trait LiteralShape {
    fn value(&self) -> LiteralValue<'_>;
}

/// `left <operator> right`, including assignment and subscript (`[`).
pub trait BinaryShape {
    fn left(&self) -> &dyn ExprNode;
    fn right(&self) -> &dyn ExprNode;
    fn operator(&self) -> &str;
}

pub trait ListShape {
    fn elements(&self) -> Vec<&dyn ExprNode>;
}

#[derive(Clone, Copy)]
pub struct MapEntry<'a> {
    pub key: &'a dyn ExprNode,
    pub value: &'a dyn ExprNode,
}

pub trait MapShape {
    fn entries(&self) -> Vec<MapEntry<'_>>;
}

/// `receiver.name`, `receiver?.name`, `receiver*.name` or a bare `name`.
pub trait PropertyShape {
    /// `None` for an implicit receiver.
    fn receiver(&self) -> Option<&dyn ExprNode>;
    fn property_name(&self) -> &str;
    /// Spread access (`*.`) collects the property of every element.
    fn is_spread(&self) -> bool {
        false
    }
}

/// `primary ?: fallback`
pub trait ElvisShape {
    fn primary(&self) -> &dyn ExprNode;
    fn fallback(&self) -> &dyn ExprNode;
}

/// `"text ${value} text"`. A node qualifies only when both lists are present.
pub trait InterpolationShape {
    fn literal_parts(&self) -> Option<Vec<&str>>;
    fn values(&self) -> Option<Vec<&dyn ExprNode>>;
}

/// `condition ? when_true : when_false`
pub trait TernaryShape {
    fn condition(&self) -> &dyn ExprNode;
    fn when_true(&self) -> &dyn ExprNode;
    fn when_false(&self) -> &dyn ExprNode;
}

pub trait VariableShape {
    fn name(&self) -> &str;
}

pub trait MethodCallShape {
    /// `None` for an implicit receiver.
    fn receiver(&self) -> Option<&dyn ExprNode>;
    fn method_name(&self) -> &str;
    fn arguments(&self) -> Vec<&dyn ExprNode>;
    /// Spread call (`*.`) invokes the method on every element.
    fn is_spread(&self) -> bool {
        false
    }
}

/// `new TypeName(arguments)`
pub trait ConstructorCallShape {
    fn type_name(&self) -> &str;
}

/// `operand as Target` or `(Target) operand`
pub trait CastShape {
    fn operand(&self) -> &dyn ExprNode;
    fn target_type(&self) -> &str;
}

/// Prefix or postfix unary operator.
pub trait UnaryShape {
    fn operator(&self) -> &str;
    fn operand(&self) -> &dyn ExprNode;
}

/// `start..end` or `start..<end`
pub trait RangeShape {
    fn start(&self) -> &dyn ExprNode;
    fn end(&self) -> &dyn ExprNode;
}
