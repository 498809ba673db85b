//! Element Registry - Index allocation for the document's parallel arrays.
//!
//! Manages the lifecycle of element indices:
//! - ID ↔ Index bidirectional mapping
//! - Role and parent maps for structural queries
//! - Document order for deterministic iteration
//! - Free index pool for O(1) reuse
//! - ReactiveSet for registered indices (deriveds react to add/remove)
//!
//! The host registers its laid-out elements here once, before installing
//! behaviors. Behaviors then find their targets by [`Role`] and never hold
//! references to host structures.

use std::cell::RefCell;
use std::collections::HashMap;
use spark_signals::ReactiveSet;

use super::arrays;
use crate::types::{Rect, Role};

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Map element ID to array index.
    static ID_TO_INDEX: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());

    /// Map array index to element ID.
    static INDEX_TO_ID: RefCell<HashMap<usize, String>> = RefCell::new(HashMap::new());

    /// Structural role per index.
    static ROLES: RefCell<HashMap<usize, Role>> = RefCell::new(HashMap::new());

    /// Parent index per index (absent = top level).
    static PARENTS: RefCell<HashMap<usize, usize>> = RefCell::new(HashMap::new());

    /// Indices in registration order. Role queries, focus order, and hit
    /// testing all iterate this, which keeps results deterministic.
    static DOCUMENT_ORDER: RefCell<Vec<usize>> = RefCell::new(Vec::new());

    /// Set of currently registered indices.
    /// Using ReactiveSet so deriveds that iterate over this set
    /// automatically react when elements are added or removed.
    static REGISTERED: ReactiveSet<usize> = ReactiveSet::new();

    /// Pool of freed indices for reuse.
    static FREE_INDICES: RefCell<Vec<usize>> = RefCell::new(Vec::new());

    /// Next index to allocate if pool is empty.
    static NEXT_INDEX: RefCell<usize> = const { RefCell::new(0) };

    /// Counter for generating unique IDs.
    static ID_COUNTER: RefCell<usize> = const { RefCell::new(0) };
}

// =============================================================================
// Element Registration
// =============================================================================

/// Properties for registering an element.
///
/// `rect` is in page coordinates. `parent` must already be registered.
#[derive(Default)]
pub struct ElementProps {
    /// Optional element ID. If not provided, one is generated.
    pub id: Option<String>,
    /// Structural role.
    pub role: Role,
    /// Parent element, if nested.
    pub parent: Option<usize>,
    /// Laid-out geometry in page coordinates.
    pub rect: Rect,
    /// Whether the element can receive focus.
    pub focusable: bool,
}

/// Register an element and return its index.
///
/// Registering an ID that already exists returns the existing index
/// without changing the element.
pub fn register_element(props: ElementProps) -> usize {
    // Generate ID if not provided
    let element_id = match props.id {
        Some(id) => id,
        None => ID_COUNTER.with(|counter| {
            let mut counter = counter.borrow_mut();
            let id = format!("e{}", *counter);
            *counter += 1;
            id
        }),
    };

    // Check if already registered
    let existing = ID_TO_INDEX.with(|map| map.borrow().get(&element_id).copied());
    if let Some(index) = existing {
        return index;
    }

    // Reuse free index or allocate new
    let index = FREE_INDICES.with(|free| {
        let mut free = free.borrow_mut();
        if let Some(index) = free.pop() {
            index
        } else {
            NEXT_INDEX.with(|next| {
                let mut next = next.borrow_mut();
                let index = *next;
                *next += 1;
                index
            })
        }
    });

    // Register mappings
    ID_TO_INDEX.with(|map| {
        map.borrow_mut().insert(element_id.clone(), index);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().insert(index, element_id);
    });
    ROLES.with(|map| {
        map.borrow_mut().insert(index, props.role);
    });
    if let Some(parent) = props.parent {
        PARENTS.with(|map| {
            map.borrow_mut().insert(index, parent);
        });
    }
    DOCUMENT_ORDER.with(|order| {
        order.borrow_mut().push(index);
    });
    REGISTERED.with(|set| {
        set.insert(index);
    });

    // Ensure arrays have capacity, then seed the registered values
    arrays::ensure_capacity(index);
    arrays::set_rect(index, props.rect);
    if props.focusable {
        arrays::set_focusable(index, true);
    }

    index
}

/// Remove an element, releasing its index back to the pool.
///
/// Also recursively removes all children!
pub fn remove_element(index: usize) {
    let id = INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned());
    let Some(id) = id else { return };

    // FIRST: Find and remove all children (recursive!)
    // We collect children first to avoid modifying while iterating
    let children: Vec<usize> = DOCUMENT_ORDER.with(|order| {
        order
            .borrow()
            .iter()
            .copied()
            .filter(|&child| parent_of(child) == Some(index))
            .collect()
    });

    for child in children {
        remove_element(child);
    }

    // Clean up mappings
    ID_TO_INDEX.with(|map| {
        map.borrow_mut().remove(&id);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().remove(&index);
    });
    ROLES.with(|map| {
        map.borrow_mut().remove(&index);
    });
    PARENTS.with(|map| {
        map.borrow_mut().remove(&index);
    });
    DOCUMENT_ORDER.with(|order| {
        order.borrow_mut().retain(|&i| i != index);
    });
    REGISTERED.with(|set| {
        set.remove(&index);
    });

    // Clear all array values at this index
    arrays::clear_at_index(index);

    // Return to pool for reuse
    FREE_INDICES.with(|free| {
        free.borrow_mut().push(index);
    });

    // AUTO-CLEANUP: When the last element is removed, reset the arrays
    // and the index pool to free memory
    let is_empty = REGISTERED.with(|set| set.is_empty());
    if is_empty {
        arrays::reset();
        FREE_INDICES.with(|free| {
            free.borrow_mut().clear();
        });
        NEXT_INDEX.with(|next| {
            *next.borrow_mut() = 0;
        });
    }
}

// =============================================================================
// Lookups
// =============================================================================

/// Get index for an element ID.
pub fn get_index(id: &str) -> Option<usize> {
    ID_TO_INDEX.with(|map| map.borrow().get(id).copied())
}

/// Get ID for an index.
pub fn get_id(index: usize) -> Option<String> {
    INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned())
}

/// Get the role an element was registered with.
pub fn get_role(index: usize) -> Option<Role> {
    ROLES.with(|map| map.borrow().get(&index).copied())
}

/// Get an element's parent index.
pub fn parent_of(index: usize) -> Option<usize> {
    PARENTS.with(|map| map.borrow().get(&index).copied())
}

/// Check if an index is currently registered.
pub fn is_registered(index: usize) -> bool {
    REGISTERED.with(|set| set.contains(&index))
}

/// Get the count of currently registered elements.
pub fn element_count() -> usize {
    REGISTERED.with(|set| set.len())
}

/// Get all registered indices in document order.
pub fn document_order() -> Vec<usize> {
    DOCUMENT_ORDER.with(|order| order.borrow().clone())
}

// =============================================================================
// Structural Queries
// =============================================================================

/// First element with the given role, in document order.
pub fn first_with_role(role: Role) -> Option<usize> {
    DOCUMENT_ORDER.with(|order| {
        order
            .borrow()
            .iter()
            .copied()
            .find(|&index| get_role(index) == Some(role))
    })
}

/// All elements with the given role, in document order.
pub fn all_with_role(role: Role) -> Vec<usize> {
    DOCUMENT_ORDER.with(|order| {
        order
            .borrow()
            .iter()
            .copied()
            .filter(|&index| get_role(index) == Some(role))
            .collect()
    })
}

/// Descendants of `ancestor` with the given role, in document order.
pub fn descendants_with_role(ancestor: usize, role: Role) -> Vec<usize> {
    DOCUMENT_ORDER.with(|order| {
        order
            .borrow()
            .iter()
            .copied()
            .filter(|&index| {
                index != ancestor && get_role(index) == Some(role) && is_within(index, ancestor)
            })
            .collect()
    })
}

/// Whether `index` is `ancestor` itself or nested anywhere inside it.
pub fn is_within(index: usize, ancestor: usize) -> bool {
    let mut current = index;
    // Bounded walk so a malformed parent cycle cannot hang us
    for _ in 0..=element_count() {
        if current == ancestor {
            return true;
        }
        match parent_of(current) {
            Some(parent) => current = parent,
            None => return false,
        }
    }
    false
}

/// Nesting depth of an element (top level = 0).
fn depth_of(index: usize) -> usize {
    let mut depth = 0;
    let mut current = index;
    for _ in 0..=element_count() {
        match parent_of(current) {
            Some(parent) => {
                depth += 1;
                current = parent;
            }
            None => break,
        }
    }
    depth
}

/// Find the element under a page coordinate.
///
/// Returns the deepest element whose rect contains the point, matching
/// how an event target resolves to the innermost node. Among siblings at
/// equal depth the later one in document order wins. The viewport element
/// never hit-tests; its rect lives in screen coordinates.
pub fn hit_test(x: u16, y: u16) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for index in document_order() {
        if get_role(index) == Some(Role::Viewport) {
            continue;
        }
        if !arrays::get_rect(index).contains(x, y) {
            continue;
        }
        let depth = depth_of(index);
        match best {
            Some((_, best_depth)) if depth < best_depth => {}
            _ => best = Some((index, depth)),
        }
    }
    best.map(|(index, _)| index)
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset all registry state (for testing).
pub fn reset_document() {
    ID_TO_INDEX.with(|map| map.borrow_mut().clear());
    INDEX_TO_ID.with(|map| map.borrow_mut().clear());
    ROLES.with(|map| map.borrow_mut().clear());
    PARENTS.with(|map| map.borrow_mut().clear());
    DOCUMENT_ORDER.with(|order| order.borrow_mut().clear());
    REGISTERED.with(|set| set.clear());
    FREE_INDICES.with(|free| free.borrow_mut().clear());
    NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    ID_COUNTER.with(|counter| *counter.borrow_mut() = 0);
    arrays::reset();
}
