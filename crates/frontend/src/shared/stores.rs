//! In-memory entity stores, one reactive collection per record type.
//!
//! Each store is the only copy of its data; pages read it through signals and
//! write back through the operations below. A lookup miss is a silent no-op.

use contracts::domain::a001_stock::aggregate::{self as stock, StockItem};
use contracts::domain::a002_product::aggregate::{self as product, Product};
use contracts::domain::a003_user::aggregate::{self as user, Employee};
use contracts::domain::a004_order::aggregate::{self as order, Order};
use contracts::domain::a005_role::aggregate::{self as role, Role};
use contracts::domain::a006_supplier::aggregate::{self as supplier, Supplier};
use contracts::domain::a007_report::aggregate::{self as report, Report};
use contracts::domain::common::{next_id, AggregateRoot, EntityId};
use leptos::prelude::*;
use std::collections::HashSet;

use crate::shared::date_utils::now_millis;

pub struct EntityStore<T: Send + Sync + 'static> {
    items: RwSignal<Vec<T>>,
}

impl<T: Send + Sync + 'static> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for EntityStore<T> {}

impl<T> EntityStore<T>
where
    T: AggregateRoot + Clone + Send + Sync + 'static,
{
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            items: RwSignal::new(seed),
        }
    }

    /// Tracked snapshot of the whole collection
    pub fn all(&self) -> Vec<T> {
        self.items.get()
    }

    /// Untracked copy, for event handlers
    pub fn snapshot(&self) -> Vec<T> {
        self.items.get_untracked()
    }

    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        self.items.with(|items| f(items))
    }

    pub fn len(&self) -> usize {
        self.items.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Id for a record about to be inserted
    pub fn next_id(&self) -> EntityId {
        self.next_id_at(now_millis())
    }

    /// Id for a record inserted at `now` (epoch millis)
    pub fn next_id_at(&self, now: i64) -> EntityId {
        self.items
            .with_untracked(|items| next_id(now, items.iter().map(AggregateRoot::id)))
    }

    pub fn find(&self, id: EntityId) -> Option<T> {
        self.items
            .with_untracked(|items| items.iter().find(|i| i.id() == id).cloned())
    }

    pub fn insert(&self, item: T) {
        log::info!("{}: added {}", T::collection_name(), item.display_name());
        self.items.update(|items| items.push(item));
    }

    /// Applies `f` to the record with `id`; returns what `f` returned, `None` on a miss.
    pub fn update<R>(&self, id: EntityId, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut result = None;
        self.items.update(|items| {
            if let Some(item) = items.iter_mut().find(|i| i.id() == id) {
                result = Some(f(item));
            }
        });
        if result.is_some() {
            log::info!("{}: updated #{id}", T::collection_name());
        }
        result
    }

    /// Runs a fallible edit on the record with `id`; `Ok(false)` when the record is gone.
    pub fn try_update<E>(
        &self,
        id: EntityId,
        f: impl FnOnce(&mut T) -> Result<(), E>,
    ) -> Result<bool, E> {
        self.update(id, f).map_or(Ok(false), |r| r.map(|()| true))
    }

    pub fn remove(&self, id: EntityId) -> Option<T> {
        let position = self
            .items
            .with_untracked(|items| items.iter().position(|i| i.id() == id))?;
        let mut removed = None;
        self.items.update(|items| removed = Some(items.remove(position)));
        if let Some(item) = &removed {
            log::info!("{}: removed {}", T::collection_name(), item.display_name());
        }
        removed
    }

    /// Removes every record whose id is in `ids`; returns how many went.
    pub fn remove_many(&self, ids: &HashSet<EntityId>) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let mut removed = 0;
        self.items.update(|items| {
            let before = items.len();
            items.retain(|i| !ids.contains(&i.id()));
            removed = before - items.len();
        });
        log::info!("{}: removed {removed} records", T::collection_name());
        removed
    }

    /// Records whose ids are in `ids`, in store order
    pub fn select(&self, ids: &HashSet<EntityId>) -> Vec<T> {
        self.items.with_untracked(|items| {
            items
                .iter()
                .filter(|i| ids.contains(&i.id()))
                .cloned()
                .collect()
        })
    }
}

/// Every store, provided once at the app root.
#[derive(Clone, Copy)]
pub struct EntityStores {
    pub stock: EntityStore<StockItem>,
    pub products: EntityStore<Product>,
    pub users: EntityStore<Employee>,
    pub orders: EntityStore<Order>,
    pub roles: EntityStore<Role>,
    pub suppliers: EntityStore<Supplier>,
    pub reports: EntityStore<Report>,
}

impl EntityStores {
    /// Stores filled with the demo data set
    pub fn seeded() -> Self {
        Self {
            stock: EntityStore::new(stock::demo_set()),
            products: EntityStore::new(product::demo_set()),
            users: EntityStore::new(user::demo_set()),
            orders: EntityStore::new(order::demo_set()),
            roles: EntityStore::new(role::demo_set()),
            suppliers: EntityStore::new(supplier::demo_set()),
            reports: EntityStore::new(report::demo_set()),
        }
    }
}

pub fn use_stores() -> EntityStores {
    use_context::<EntityStores>().expect("EntityStores not provided in context (provide it in app root)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_stock::aggregate::StockDto;
    use contracts::domain::common::ValidationError;

    fn dto(name: &str, stock: &str) -> StockDto {
        StockDto {
            name: name.into(),
            sku: "IBU400".into(),
            category: "Tablets".into(),
            stock: stock.into(),
            min_level: "10".into(),
            expiry: "2026-01-31".into(),
        }
    }

    #[test]
    fn test_remove_many_removes_only_given_ids() {
        let owner = Owner::new();
        owner.with(|| {
            let store = EntityStore::new(stock::demo_set());
            let ids: HashSet<EntityId> = [1, 3, 99].into_iter().collect();

            assert_eq!(store.remove_many(&ids), 2);
            let left: Vec<EntityId> = store.snapshot().iter().map(|i| i.id).collect();
            assert_eq!(left, vec![2]);
            assert_eq!(store.remove_many(&HashSet::new()), 0);
            assert_eq!(store.len(), 1);
        });
    }

    #[test]
    fn test_missing_id_is_a_no_op() {
        let owner = Owner::new();
        owner.with(|| {
            let store = EntityStore::new(stock::demo_set());

            assert!(store.update(42, |item| item.stock = 0).is_none());
            assert!(store.remove(42).is_none());
            assert!(store.find(42).is_none());
            assert_eq!(store.len(), 3);
            assert_eq!(store.snapshot(), stock::demo_set());
        });
    }

    #[test]
    fn test_next_id_unique_with_frozen_clock() {
        let owner = Owner::new();
        owner.with(|| {
            let store = EntityStore::new(stock::demo_set());
            let now: i64 = 1_700_000_000_000;
            let base = now as EntityId;
            let mut ids = Vec::new();
            for n in 0..3 {
                let id = store.next_id_at(now);
                let item = StockItem::new(id, &dto(&format!("Item {n}"), "5")).unwrap();
                store.insert(item);
                ids.push(id);
            }
            assert_eq!(ids, vec![base, base + 1, base + 2]);
            // a clock behind the stored ids still yields a fresh id
            assert_eq!(store.next_id_at(0), base + 3);
        });
    }

    #[test]
    fn test_try_update_reports_miss_and_validation() {
        let owner = Owner::new();
        owner.with(|| {
            let store = EntityStore::new(stock::demo_set());

            assert_eq!(store.try_update(42, |item| item.update(&dto("Gone", "5"))), Ok(false));
            assert_eq!(store.try_update(2, |item| item.update(&dto("Renamed", "5"))), Ok(true));
            assert_eq!(store.find(2).map(|i| i.name), Some("Renamed".to_string()));

            let err = store.try_update(2, |item| item.update(&dto("Broken", "-1")));
            assert_eq!(err, Err(ValidationError::Negative("Current Stock")));
            assert_eq!(store.find(2).map(|i| i.name), Some("Renamed".to_string()));
        });
    }
}
