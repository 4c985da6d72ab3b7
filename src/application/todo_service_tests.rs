#[cfg(test)]
mod tests {
    use super::super::todo_service::{TodoService, TodoServiceImpl};
    use crate::domain::{error::{TodoError, TodoResult}, id::ItemId, item::Item, repository::TodoRepository};
    use std::collections::BTreeMap;

    struct InMemoryRepo {
        last_id: i64,
        items: BTreeMap<ItemId, Item>,
    }

    impl InMemoryRepo {
        fn new() -> Self { Self { last_id: -1, items: BTreeMap::new() } }

        fn get_mut(&mut self, id: ItemId) -> TodoResult<&mut Item> { self.items.get_mut(&id).ok_or(TodoError::NotFound(id)) }
    }

    impl TodoRepository for InMemoryRepo {
        fn all(&self) -> Vec<Item> { self.items.values().cloned().collect() }
        fn count(&self) -> usize { self.items.len() }
        fn find(&self, id: ItemId) -> Option<Item> { self.items.get(&id).cloned() }
        fn create(&mut self, description: &str) -> TodoResult<Item> {
            self.last_id += 1;
            let item = Item::new(ItemId(self.last_id), description);
            self.items.insert(item.id, item.clone());
            Ok(item)
        }
        fn update(&mut self, id: ItemId, description: &str) -> TodoResult<Item> {
            let item = self.get_mut(id)?;
            item.description = description.to_string();
            Ok(item.clone())
        }
        fn complete(&mut self, id: ItemId) -> TodoResult<Item> {
            let item = self.get_mut(id)?;
            item.complete = true;
            Ok(item.clone())
        }
        fn un_complete(&mut self, id: ItemId) -> TodoResult<Item> {
            let item = self.get_mut(id)?;
            item.complete = false;
            Ok(item.clone())
        }
        fn delete(&mut self, id: ItemId) -> TodoResult<Item> { self.items.remove(&id).ok_or(TodoError::NotFound(id)) }
        fn delete_all(&mut self) -> TodoResult<()> { self.items.clear(); Ok(()) }
        fn clean_completed(&mut self) -> TodoResult<usize> {
            let before = self.items.len();
            self.items.retain(|_, item| !item.complete);
            Ok(before - self.items.len())
        }
    }

    #[test]
    fn unit_add_and_get() {
        let mut service = TodoServiceImpl::new(InMemoryRepo::new());
        let created = service.add("X").unwrap();
        assert_eq!(created.description, "X");
        let got = service.get(created.id).unwrap();
        assert_eq!(got, created);
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn unit_missing_item_keeps_typed_cause() {
        let mut service = TodoServiceImpl::new(InMemoryRepo::new());
        let err = service.complete(ItemId(3)).unwrap_err();
        assert_eq!(err.to_string(), "unable to complete item 3");
        assert!(matches!(err.downcast_ref::<TodoError>(), Some(TodoError::NotFound(ItemId(3)))));
        let err = service.edit(ItemId(5), "new text").unwrap_err();
        assert_eq!(err.to_string(), "unable to update item 5");
    }

    #[test]
    fn unit_cleanup_counts_removed() {
        let mut service = TodoServiceImpl::new(InMemoryRepo::new());
        service.add("a").unwrap();
        let b = service.add("b").unwrap();
        service.complete(b.id).unwrap();
        assert_eq!(service.cleanup().unwrap(), 1);
        assert_eq!(service.list().len(), 1);
        service.purge().unwrap();
        assert_eq!(service.count(), 0);
    }
}
