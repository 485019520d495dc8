//! Fully-qualified names of the built-in types the engine reasons about.

/// The universal top type.
pub const OBJECT: &str = "java.lang.Object";

pub const STRING: &str = "java.lang.String";
pub const GSTRING: &str = "groovy.lang.GString";
pub const CHAR_SEQUENCE: &str = "java.lang.CharSequence";
pub const COMPARABLE: &str = "java.lang.Comparable";
pub const SERIALIZABLE: &str = "java.io.Serializable";

// Boxed primitives
pub const BOOLEAN: &str = "java.lang.Boolean";
pub const BYTE: &str = "java.lang.Byte";
pub const CHARACTER: &str = "java.lang.Character";
pub const SHORT: &str = "java.lang.Short";
pub const INTEGER: &str = "java.lang.Integer";
pub const LONG: &str = "java.lang.Long";
pub const FLOAT: &str = "java.lang.Float";
pub const DOUBLE: &str = "java.lang.Double";

pub const NUMBER: &str = "java.lang.Number";
pub const BIG_INTEGER: &str = "java.math.BigInteger";
pub const BIG_DECIMAL: &str = "java.math.BigDecimal";

// Collections
pub const ITERABLE: &str = "java.lang.Iterable";
pub const COLLECTION: &str = "java.util.Collection";
pub const LIST: &str = "java.util.List";
pub const SET: &str = "java.util.Set";
pub const SORTED_SET: &str = "java.util.SortedSet";
pub const QUEUE: &str = "java.util.Queue";
pub const DEQUE: &str = "java.util.Deque";
pub const ARRAY_LIST: &str = "java.util.ArrayList";
pub const LINKED_LIST: &str = "java.util.LinkedList";
pub const HASH_SET: &str = "java.util.HashSet";
pub const LINKED_HASH_SET: &str = "java.util.LinkedHashSet";
pub const TREE_SET: &str = "java.util.TreeSet";
pub const MAP: &str = "java.util.Map";
pub const SORTED_MAP: &str = "java.util.SortedMap";
pub const HASH_MAP: &str = "java.util.HashMap";
pub const LINKED_HASH_MAP: &str = "java.util.LinkedHashMap";
pub const TREE_MAP: &str = "java.util.TreeMap";

// Groovy runtime types
pub const CLOSURE: &str = "groovy.lang.Closure";
pub const RANGE: &str = "groovy.lang.Range";
pub const INT_RANGE: &str = "groovy.lang.IntRange";

pub const MATCHER: &str = "java.util.regex.Matcher";

/// Last segment of a dotted name (`java.util.List` -> `List`).
pub fn simple_name(fqn: &str) -> &str {
    fqn.rsplit('.').next().unwrap_or(fqn)
}
