use crate::common::ManagerError;
use crate::manager::content::expect_ok;
use crate::manager::{ContentManager, GalleryResource, Notice};
use crate::models::{GalleryItem, GalleryKind};
use crate::types::ReorderEntry;

pub const REORDER_ENDPOINT: &str = "/api/gallery/reorder";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    fn step(&self, index: usize) -> Option<usize> {
        match self {
            Self::Up => index.checked_sub(1),
            Self::Down => index.checked_add(1),
        }
    }
}

/// Sort order for a new item: one past the highest of its kind.
pub fn next_sort_order(items: &[GalleryItem], kind: GalleryKind) -> i64 {
    items
        .iter()
        .filter(|item| item.kind == kind)
        .map(|item| item.sort_order)
        .max()
        .unwrap_or(0)
        + 1
}

/// Items of one kind as the panel lists them, by sort order.
pub fn visible(items: &[GalleryItem], kind: GalleryKind) -> Vec<GalleryItem> {
    let mut selected: Vec<GalleryItem> = items.iter().filter(|i| i.kind == kind).cloned().collect();
    selected.sort_by_key(|item| item.sort_order);
    selected
}

/// Moves the item at `index` of the visible `kind` list one step and
/// renumbers that kind 1..=n. Items of the other kind are returned
/// untouched. `None` when the move would leave the list.
pub fn reorder(
    items: &[GalleryItem],
    kind: GalleryKind,
    index: usize,
    direction: Direction,
) -> Option<Vec<GalleryItem>> {
    let mut shown = visible(items, kind);
    let target = direction.step(index)?;
    if index >= shown.len() || target >= shown.len() {
        return None;
    }

    let moved = shown.remove(index);
    shown.insert(target, moved);
    for (position, item) in shown.iter_mut().enumerate() {
        item.sort_order = position as i64 + 1;
    }

    let mut result: Vec<GalleryItem> = items.iter().filter(|i| i.kind != kind).cloned().collect();
    result.extend(shown);
    Some(result)
}

impl ContentManager<GalleryResource> {
    pub fn visible(&self, kind: GalleryKind) -> Vec<GalleryItem> {
        visible(&self.items(), kind)
    }

    /// Follows a tab switch. An open create form takes the new kind, with
    /// that kind's duration default; typed text is kept. Editing an existing
    /// item is left alone. Returns whether the draft changed.
    pub fn switch_kind(&self, kind: GalleryKind) -> bool {
        let state = self.snapshot();
        if !state.form_open || state.editing_id.is_some() || state.draft.kind == kind {
            return false;
        }

        self.update(|s| {
            s.draft = GalleryItem {
                kind,
                duration: GalleryItem::empty(kind).duration,
                ..s.draft.clone()
            };
        });
        true
    }

    /// Moves one item and persists the whole new ordering in a single batch,
    /// then refetches. Returns false when there was nothing to move.
    pub async fn move_item(
        &self,
        kind: GalleryKind,
        index: usize,
        direction: Direction,
    ) -> Result<bool, ManagerError> {
        let Some(updated) = reorder(&self.items(), kind, index, direction) else {
            return Ok(false);
        };

        let batch: Vec<ReorderEntry> = updated
            .iter()
            .filter_map(|item| {
                item.id.clone().map(|id| ReorderEntry {
                    id,
                    sort_order: item.sort_order,
                })
            })
            .collect();

        self.update(|s| {
            s.items = updated;
            s.loading = true;
        });

        let sent = match self.api().post(REORDER_ENDPOINT, &batch).await {
            Ok(response) => expect_ok(response, "reorder", REORDER_ENDPOINT).map(|_| ()),
            Err(e) => Err(e.into()),
        };

        if let Err(e) = &sent {
            log::error!("gallery reorder failed: {}", e);
        }

        if !matches!(sent, Err(ManagerError::Unauthorized)) {
            if let Err(e) = self.fetch_list().await {
                log::warn!("list refresh after reorder failed: {}", e);
            }
        }

        match sent {
            Ok(()) => Ok(true),
            Err(e) => {
                let message = e.to_string();
                self.update(|s| {
                    s.loading = false;
                    s.notice = Some(Notice::error(message));
                });
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, kind: GalleryKind, order: i64) -> GalleryItem {
        GalleryItem {
            id: Some(id.into()),
            sort_order: order,
            ..GalleryItem::empty(kind)
        }
    }

    #[test]
    fn test_next_sort_order_counts_same_kind_only() {
        let items = vec![
            item(1, GalleryKind::Photo, 4),
            item(2, GalleryKind::Video, 9),
        ];
        assert_eq!(next_sort_order(&items, GalleryKind::Photo), 5);
        assert_eq!(next_sort_order(&[], GalleryKind::Video), 1);
    }

    #[test]
    fn test_reorder_out_of_bounds_is_none() {
        let items = vec![item(1, GalleryKind::Photo, 1), item(2, GalleryKind::Photo, 2)];
        assert!(reorder(&items, GalleryKind::Photo, 0, Direction::Up).is_none());
        assert!(reorder(&items, GalleryKind::Photo, 1, Direction::Down).is_none());
    }
}
