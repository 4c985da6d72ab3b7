use crate::domain::id::ItemId;
use crate::domain::item::Item;
use crate::domain::repository::TodoRepository;
use anyhow::{Context, Result};

pub trait TodoService {
    fn list(&self) -> Vec<Item>;
    fn count(&self) -> usize;
    fn get(&self, id: ItemId) -> Option<Item>;
    fn add(&mut self, description: &str) -> Result<Item>;
    fn edit(&mut self, id: ItemId, description: &str) -> Result<Item>;
    fn complete(&mut self, id: ItemId) -> Result<Item>;
    fn uncomplete(&mut self, id: ItemId) -> Result<Item>;
    fn remove(&mut self, id: ItemId) -> Result<Item>;
    fn purge(&mut self) -> Result<()>;
    /// Returns the number of completed items removed.
    fn cleanup(&mut self) -> Result<usize>;
}

pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    fn list(&self) -> Vec<Item> { self.repo.all() }
    fn count(&self) -> usize { self.repo.count() }
    fn get(&self, id: ItemId) -> Option<Item> { self.repo.find(id) }

    fn add(&mut self, description: &str) -> Result<Item> {
        self.repo.create(description).with_context(|| format!("unable to create item {description:?}"))
    }

    fn edit(&mut self, id: ItemId, description: &str) -> Result<Item> {
        self.repo.update(id, description).with_context(|| format!("unable to update item {id}"))
    }

    fn complete(&mut self, id: ItemId) -> Result<Item> {
        self.repo.complete(id).with_context(|| format!("unable to complete item {id}"))
    }

    fn uncomplete(&mut self, id: ItemId) -> Result<Item> {
        self.repo.un_complete(id).with_context(|| format!("unable to un-complete item {id}"))
    }

    fn remove(&mut self, id: ItemId) -> Result<Item> {
        self.repo.delete(id).with_context(|| format!("unable to remove item {id}"))
    }

    fn purge(&mut self) -> Result<()> {
        self.repo.delete_all().context("unable to remove all items")
    }

    fn cleanup(&mut self) -> Result<usize> {
        self.repo.clean_completed().context("unable to remove all completed items")
    }
}
