//! Single-step reorder planning for display-ordered lists.
//!
//! The planner works on the currently sorted view held in memory. It decides
//! which two records exchange their `display_order`, applies that exchange to
//! the slice so callers can show the new order without refetching, and
//! returns the writes the store must persist. Usually that is two rows; a view
//! carrying tied legacy values is renumbered so every order ends up distinct.

use serde::Serialize;

use crate::entities::GalleryImage;
use crate::enums::MoveDirection;
use crate::errors::CoreError;

/// A record with a display position.
pub trait Ordered {
    fn id(&self) -> &str;
    fn display_order(&self) -> i64;
    fn set_display_order(&mut self, order: i64);
}

impl Ordered for GalleryImage {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_order(&self) -> i64 {
        self.display_order
    }

    fn set_display_order(&mut self, order: i64) {
        self.display_order = order;
    }
}

/// A new `display_order` value for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderChange {
    pub id: String,
    pub display_order: i64,
}

/// The writes produced by a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovePlan {
    pub moved: OrderChange,
    pub neighbor: OrderChange,
    /// Other records renumbered because the view held tied orders.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shifted: Vec<OrderChange>,
}

impl MovePlan {
    pub fn changes(&self) -> impl Iterator<Item = &OrderChange> {
        [&self.moved, &self.neighbor]
            .into_iter()
            .chain(self.shifted.iter())
    }
}

/// Plan (and mirror in memory) moving `id` one step in `direction`.
///
/// `items` must already be sorted the way the admin list shows them.
/// Returns `Ok(None)` at either boundary: first item moving up, last item
/// moving down.
///
/// If exchanging the two values would leave the view without strictly
/// increasing orders (tied legacy values), the whole view is renumbered
/// densely from its lowest order instead. The other records keep their
/// relative positions either way.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if no item has the given id.
pub fn plan_move<T: Ordered>(
    items: &mut [T],
    id: &str,
    direction: MoveDirection,
) -> Result<Option<MovePlan>, CoreError> {
    let index = items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| CoreError::NotFound {
            entity_type: "gallery image".into(),
            id: id.to_string(),
        })?;

    let (first, second) = match direction {
        MoveDirection::Up if index == 0 => return Ok(None),
        MoveDirection::Down if index + 1 == items.len() => return Ok(None),
        MoveDirection::Up => (index - 1, index),
        MoveDirection::Down => (index, index + 1),
    };

    let before: Vec<i64> = items.iter().map(Ordered::display_order).collect();
    items[first].set_display_order(before[second]);
    items[second].set_display_order(before[first]);
    items.swap(first, second);

    let renumbered = !strictly_increasing(items);
    if renumbered {
        let base = before[0];
        for (offset, item) in (0_i64..).zip(items.iter_mut()) {
            item.set_display_order(base + offset);
        }
    }

    let (moved_index, neighbor_index) = match direction {
        MoveDirection::Up => (first, second),
        MoveDirection::Down => (second, first),
    };

    let change = |item: &T| OrderChange {
        id: item.id().to_string(),
        display_order: item.display_order(),
    };

    let shifted = if renumbered {
        items
            .iter()
            .zip(&before)
            .enumerate()
            .filter(|(index, (item, old))| {
                *index != first && *index != second && item.display_order() != **old
            })
            .map(|(_, (item, _))| change(item))
            .collect()
    } else {
        Vec::new()
    };

    Ok(Some(MovePlan {
        moved: change(&items[moved_index]),
        neighbor: change(&items[neighbor_index]),
        shifted,
    }))
}

fn strictly_increasing<T: Ordered>(items: &[T]) -> bool {
    items
        .windows(2)
        .all(|pair| pair[0].display_order() < pair[1].display_order())
}
