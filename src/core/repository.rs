use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // creates an entity, the repository assigns its id
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // replaces an entity in place
    async fn update(&self, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, id: i64) -> LibraryResult<Entity>;

    // delete an entity and return it
    async fn delete(&self, id: i64) -> LibraryResult<Entity>;

    // all entities in insertion order
    async fn list(&self) -> LibraryResult<Vec<Entity>>;
}
