use crate::value::Value;
use std::fmt;

/// Errors returned by [`Store::find`].
#[derive(Debug, Clone, PartialEq)]
pub enum FindError {
    /// The queried name matches no stored key path.
    NotFound(String),

    /// The queried name is a prefix of two or more stored keys.
    Ambiguous(String),
}

impl fmt::Display for FindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindError::NotFound(name) => write!(f, "field '{}' not found", name),
            FindError::Ambiguous(name) => write!(f, "field '{}' is ambiguous", name),
        }
    }
}

impl std::error::Error for FindError {}

struct Node {
    /// Edge label leading into this node. Non-empty except on the root.
    label: String,
    value: Option<Value>,
    children: Vec<Node>,
}

impl Node {
    fn leaf(label: &str, value: Value) -> Node {
        Node {
            label: label.to_string(),
            value: Some(value),
            children: Vec::new(),
        }
    }
}

/// Byte length of the longest common prefix, aligned to char boundaries.
fn common_prefix(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    len
}

/// What a subtree holds: no value, exactly one, or several.
enum Reachable<'a> {
    None,
    One(&'a Value),
    Many,
}

fn reachable(node: &Node) -> Reachable<'_> {
    let mut found = None;
    if collect(node, &mut found) {
        match found {
            Some(value) => Reachable::One(value),
            None => Reachable::None,
        }
    } else {
        Reachable::Many
    }
}

/// Walks the subtree collecting at most one value. Returns false as soon
/// as a second value is seen.
fn collect<'a>(node: &'a Node, found: &mut Option<&'a Value>) -> bool {
    if let Some(value) = &node.value {
        if found.is_some() {
            return false;
        }
        *found = Some(value);
    }
    node.children.iter().all(|child| collect(child, found))
}

/// A compressed prefix trie mapping field names to typed values.
///
/// Keys sharing a prefix share storage: each edge carries a run of
/// characters, and no two sibling edges start with the same character,
/// so every query descends along a unique path. Lookups accept any
/// unambiguous abbreviation of a stored key. The answer to a lookup
/// never depends on the order keys were inserted in.
///
/// Construction is not internally synchronized; build the store fully
/// before sharing it for concurrent read-only lookups.
///
/// # Examples
///
/// ```
/// use picket_lang::Store;
///
/// let mut store = Store::new();
/// store.insert("destination", "Saturn");
/// store.insert("traveltime", 50_000_000u64);
///
/// assert!(store.find("dest").is_ok()); // unambiguous abbreviation
/// ```
pub struct Store {
    root: Node,
    len: usize,
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Store {
            root: Node {
                label: String::new(),
                value: None,
                children: Vec::new(),
            },
            len: 0,
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a single key with its typed value. Re-inserting an
    /// existing key replaces its value.
    pub fn insert<V: Into<Value>>(&mut self, key: &str, value: V) {
        if insert_at(&mut self.root, key, value.into()) {
            self.len += 1;
        }
    }

    /// Inserts every pair of a key/value mapping.
    pub fn insert_many<K, V, I>(&mut self, entries: I)
    where
        K: AsRef<str>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.insert(key.as_ref(), value);
        }
    }

    /// Resolves a field name, accepting any unambiguous abbreviation of
    /// a stored key.
    ///
    /// Exactly one of three outcomes:
    /// - the name reaches a stored value (exactly, or as a prefix from
    ///   which a single value is reachable) and that value is returned;
    /// - the name is a prefix of two or more stored keys → `Ambiguous`;
    /// - the name diverges from every stored key, or nothing is
    ///   reachable below it → `NotFound`.
    ///
    /// The empty name is ambiguous unless the store holds exactly one
    /// key.
    pub fn find(&self, name: &str) -> Result<&Value, FindError> {
        let mut node = &self.root;
        let mut query = name;

        while !query.is_empty() {
            let next = node.children.iter().find_map(|child| {
                let shared = common_prefix(&child.label, query);
                (shared > 0).then_some((child, shared))
            });

            let Some((child, shared)) = next else {
                return Err(FindError::NotFound(name.to_string()));
            };

            if shared == child.label.len() {
                // full edge consumed, keep descending
                node = child;
                query = &query[shared..];
            } else if shared == query.len() {
                // query ends mid-edge: only this child's subtree is reachable
                return match reachable(child) {
                    Reachable::One(value) => Ok(value),
                    Reachable::Many => Err(FindError::Ambiguous(name.to_string())),
                    Reachable::None => Err(FindError::NotFound(name.to_string())),
                };
            } else {
                // diverged inside the edge label
                return Err(FindError::NotFound(name.to_string()));
            }
        }

        if let Some(value) = &node.value {
            return Ok(value);
        }

        match reachable(node) {
            Reachable::One(value) => Ok(value),
            Reachable::Many => Err(FindError::Ambiguous(name.to_string())),
            Reachable::None => Err(FindError::NotFound(name.to_string())),
        }
    }
}

/// Returns true if the key was new, false if an existing value was
/// replaced.
fn insert_at(node: &mut Node, key: &str, value: Value) -> bool {
    if key.is_empty() {
        return node.value.replace(value).is_none();
    }

    let matched = node.children.iter().enumerate().find_map(|(i, child)| {
        let shared = common_prefix(&child.label, key);
        (shared > 0).then_some((i, shared))
    });

    let Some((index, shared)) = matched else {
        // no child shares a prefix: new edge with the whole remainder
        node.children.push(Node::leaf(key, value));
        return true;
    };

    let child = &mut node.children[index];
    if shared == child.label.len() {
        // the child's label is a prefix of the key: descend
        return insert_at(child, &key[shared..], value);
    }

    // partial overlap: split the edge at the shared prefix, demoting the
    // old child under an intermediate node
    let demoted = Node {
        label: child.label[shared..].to_string(),
        value: child.value.take(),
        children: std::mem::take(&mut child.children),
    };
    child.label.truncate(shared);
    child.children.push(demoted);

    let remainder = &key[shared..];
    if remainder.is_empty() {
        child.value = Some(value);
    } else {
        child.children.push(Node::leaf(remainder, value));
    }
    true
}
