//! SQLite-backed stores with a hand-written column mapping per entity.
//!
//! Every operation opens its own transaction on a pooled connection and commits
//! before returning; dropping the transaction on an error path rolls back and
//! releases the connection.

use crate::error::AppError;
use crate::model::{Hero, HeroDraft, Product, ProductDraft};
use crate::store::Store;
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct HeroStore {
    pool: SqlitePool,
}

impl HeroStore {
    pub fn new(pool: SqlitePool) -> Self {
        HeroStore { pool }
    }
}

#[async_trait]
impl Store for HeroStore {
    type Record = Hero;
    type Draft = HeroDraft;

    const ENTITY: &'static str = "Hero";
    const DEFAULT_LIMIT: Option<i64> = None;

    async fn list(&self, skip: i64, limit: Option<i64>) -> Result<Vec<Hero>, AppError> {
        let mut tx = self.pool.begin().await?;
        // SQLite treats a negative LIMIT as unbounded.
        let rows = sqlx::query_as::<_, Hero>(
            "SELECT id, name, age, secret_name FROM hero ORDER BY id LIMIT ?1 OFFSET ?2",
        )
        .bind(limit.unwrap_or(-1))
        .bind(skip.max(0))
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Hero, AppError> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, Hero>(
            "SELECT id, name, age, secret_name FROM hero WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;
        row.ok_or_else(|| AppError::not_found(Self::ENTITY, id))
    }

    async fn insert(&self, draft: HeroDraft) -> Result<Hero, AppError> {
        tracing::debug!(name = %draft.name, "insert hero");
        let mut tx = self.pool.begin().await?;
        let hero = sqlx::query_as::<_, Hero>(
            "INSERT INTO hero (name, age, secret_name) VALUES (?1, ?2, ?3) \
             RETURNING id, name, age, secret_name",
        )
        .bind(&draft.name)
        .bind(draft.age)
        .bind(&draft.secret_name)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(hero)
    }

    async fn replace(&self, id: i64, draft: HeroDraft) -> Result<Hero, AppError> {
        tracing::debug!(id, "replace hero");
        let mut tx = self.pool.begin().await?;
        let hero = sqlx::query_as::<_, Hero>(
            "UPDATE hero SET name = ?1, age = ?2, secret_name = ?3 WHERE id = ?4 \
             RETURNING id, name, age, secret_name",
        )
        .bind(&draft.name)
        .bind(draft.age)
        .bind(&draft.secret_name)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;
        hero.ok_or_else(|| AppError::not_found(Self::ENTITY, id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(id, "delete hero");
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM hero WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(Self::ENTITY, id));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct ProductStore {
    pool: SqlitePool,
}

impl ProductStore {
    pub fn new(pool: SqlitePool) -> Self {
        ProductStore { pool }
    }
}

#[async_trait]
impl Store for ProductStore {
    type Record = Product;
    type Draft = ProductDraft;

    const ENTITY: &'static str = "Product";
    const DEFAULT_LIMIT: Option<i64> = Some(10);

    async fn list(&self, skip: i64, limit: Option<i64>) -> Result<Vec<Product>, AppError> {
        let mut tx = self.pool.begin().await?;
        let rows = sqlx::query_as::<_, Product>(
            "SELECT id, name, price FROM products ORDER BY id LIMIT ?1 OFFSET ?2",
        )
        .bind(limit.unwrap_or(-1))
        .bind(skip.max(0))
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Product, AppError> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, Product>(
            "SELECT id, name, price FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;
        row.ok_or_else(|| AppError::not_found(Self::ENTITY, id))
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product, AppError> {
        tracing::debug!(name = %draft.name, "insert product");
        let mut tx = self.pool.begin().await?;
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price) VALUES (?1, ?2) \
             RETURNING id, name, price",
        )
        .bind(&draft.name)
        .bind(draft.price)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(product)
    }

    async fn replace(&self, id: i64, draft: ProductDraft) -> Result<Product, AppError> {
        tracing::debug!(id, "replace product");
        let mut tx = self.pool.begin().await?;
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET name = ?1, price = ?2 WHERE id = ?3 \
             RETURNING id, name, price",
        )
        .bind(&draft.name)
        .bind(draft.price)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;
        product.ok_or_else(|| AppError::not_found(Self::ENTITY, id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(id, "delete product");
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(Self::ENTITY, id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::apply_migrations;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        // One connection: each connection to :memory: is a separate database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        apply_migrations(&pool).await.unwrap();
        pool
    }

    fn deadpond() -> HeroDraft {
        HeroDraft {
            id: None,
            name: "Deadpond".into(),
            age: None,
            secret_name: "Dive Wilson".into(),
        }
    }

    #[tokio::test]
    async fn hero_roundtrip() {
        let store = HeroStore::new(test_pool().await);
        let created = store.insert(deadpond()).await.unwrap();
        assert_eq!(created.name, "Deadpond");
        assert_eq!(store.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn hero_replace_overwrites_optional_fields() {
        let store = HeroStore::new(test_pool().await);
        let created = store
            .insert(HeroDraft {
                id: None,
                name: "Rusty-Man".into(),
                age: Some(48),
                secret_name: "Tommy Sharp".into(),
            })
            .await
            .unwrap();
        let updated = store
            .replace(created.id, deadpond())
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.age, None);
        assert_eq!(updated.secret_name, "Dive Wilson");
    }

    #[tokio::test]
    async fn hero_missing_id_paths_are_not_found() {
        let store = HeroStore::new(test_pool().await);
        assert!(matches!(
            store.get(7).await.unwrap_err(),
            AppError::NotFound { id: 7, .. }
        ));
        assert!(store.replace(7, deadpond()).await.is_err());
        assert!(store.delete(7).await.is_err());
    }

    #[tokio::test]
    async fn hero_delete_then_get_is_not_found() {
        let store = HeroStore::new(test_pool().await);
        let created = store.insert(deadpond()).await.unwrap();
        store.delete(created.id).await.unwrap();
        assert!(store.get(created.id).await.is_err());
    }

    #[tokio::test]
    async fn product_list_is_pk_ordered_and_windowed() {
        let store = ProductStore::new(test_pool().await);
        for (name, price) in [("bolt", 0.1), ("nut", 0.2), ("washer", 0.05)] {
            store
                .insert(ProductDraft { name: name.into(), price })
                .await
                .unwrap();
        }
        let page = store.list(1, Some(2)).await.unwrap();
        assert_eq!(
            page.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            ["nut", "washer"]
        );
    }
}
