use crate::error::{ListError, Result};
use bumpalo::Bump;
use std::{
    cell::Cell,
    fmt::{self, Debug, Display},
    ptr,
};
use tracing::debug;

/*
 * A singly linked list node living in a bump arena.
 * The successor sits in a Cell so that links can be rewired
 * through the shared references handed out by the arena.
 */
pub struct Node<'a> {
    pub value: i32,
    next: Cell<Option<&'a Node<'a>>>,
}

impl<'a> Node<'a> {
    fn new(value: i32) -> Self {
        Node {
            value,
            next: Cell::new(None),
        }
    }

    pub fn next(&self) -> Option<&'a Node<'a>> {
        self.next.get()
    }

    /*
     * Manual chain building. Linking a node back into its own chain
     * breaks acyclicity : check untrusted chains with has_cycle.
     */
    pub fn set_next(&self, next: Option<&'a Node<'a>>) {
        self.next.set(next);
    }
}

/*
 * Only the value : following the links would not terminate on a cycle
 */
impl<'a> Debug for Node<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/*
 * Hands out nodes from an arena. Every node shares the lifetime of the
 * arena, and storage is given back all at once when the arena is dropped.
 */
pub struct NodeFactory<'a> {
    bump: &'a Bump,
}

impl<'a> NodeFactory<'a> {
    pub fn new(bump: &'a Bump) -> Self {
        NodeFactory { bump }
    }

    pub fn create(&self, value: i32) -> Result<&'a Node<'a>> {
        let node: &'a Node<'a> = self
            .bump
            .try_alloc(Node::new(value))
            .map_err(|_| ListError::AllocationFailure { value })?;
        debug!(value, "allocated node");
        Ok(node)
    }

    /*
     * Build a chain holding <values> in order, front to back.
     */
    pub fn from_values(&self, values: &[i32]) -> Result<Option<&'a Node<'a>>> {
        let mut head = None;
        for &value in values.iter().rev() {
            let node = self.create(value)?;
            node.set_next(head);
            head = Some(node);
        }
        Ok(head)
    }
}

pub struct Iter<'a> {
    curr: Option<&'a Node<'a>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr?;
        self.curr = node.next();
        Some(node)
    }
}

pub fn iter<'a>(head: Option<&'a Node<'a>>) -> Iter<'a> {
    Iter { curr: head }
}

pub fn length<'a>(head: Option<&'a Node<'a>>) -> usize {
    iter(head).count()
}

pub fn values<'a>(head: Option<&'a Node<'a>>) -> Vec<i32> {
    iter(head).map(|node| node.value).collect()
}

/*
 * Iterative in-place reversal : returns the new head (the old tail).
 * Each step detaches <current> from the unvisited suffix and pushes it
 * onto the already reversed prefix rooted at <prev>.
 * O(n) time, O(1) space. The chain must be acyclic.
 */
pub fn reverse<'a>(head: Option<&'a Node<'a>>) -> Option<&'a Node<'a>> {
    let mut prev = None;
    let mut current = head;
    let mut count = 0usize;

    while let Some(node) = current {
        current = node.next.replace(prev);
        prev = Some(node);
        count += 1;
    }

    debug!(length = count, "reversed list");
    prev
}

/*
 * Floyd cycle detection : <fast> moves two links per step,
 * <slow> one. They meet iff the chain loops.
 */
pub fn has_cycle<'a>(head: Option<&'a Node<'a>>) -> bool {
    let mut slow = head;
    let mut fast = head;

    while let Some(f) = fast {
        let Some(f) = f.next() else {
            return false;
        };
        fast = f.next();
        slow = slow.and_then(|s| s.next());
        if let (Some(s), Some(f)) = (slow, fast) {
            if ptr::eq(s, f) {
                return true;
            }
        }
    }
    false
}

/*
 * Reversal for chains of unknown provenance
 */
pub fn try_reverse<'a>(head: Option<&'a Node<'a>>) -> Result<Option<&'a Node<'a>>> {
    if has_cycle(head) {
        return Err(ListError::CycleDetected);
    }
    Ok(reverse(head))
}

/*
 * Unlink every node in link order, capturing the successor before the
 * node is let go. Returns the number of nodes released.
 * The storage itself goes back with the arena.
 */
pub fn destroy<'a>(head: Option<&'a Node<'a>>) -> usize {
    let mut released = 0;
    let mut current = head;

    while let Some(node) = current {
        current = node.next.take();
        released += 1;
    }

    debug!(released, "released list");
    released
}

/*
 * Lazy rendering of a list : "1 -> 2 -> 3\n".
 * An empty list renders as a lone newline.
 */
pub struct Rendered<'a> {
    head: Option<&'a Node<'a>>,
}

pub fn render<'a>(head: Option<&'a Node<'a>>) -> Rendered<'a> {
    Rendered { head }
}

impl<'a> Display for Rendered<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in iter(self.head).enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node.value)?;
        }
        writeln!(f)
    }
}
