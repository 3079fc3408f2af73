//! Order Repository
//!
//! An order row references one client; its products live in `order_products`.
//! Reads assemble the full [`Order`] with the client and products resolved,
//! using a fixed number of queries inside one read transaction so every
//! order in a listing comes from the same snapshot. Writes that touch both
//! tables run in a single transaction.

use super::product::ProductRow;
use super::{RepoError, RepoResult};
use chrono::{DateTime, Utc};
use shared::models::{Client, Order, Product};
use sqlx::SqlitePool;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    order_id: Uuid,
    ordered_at: DateTime<Utc>,
    client_id: Uuid,
}

/// One product of one order
#[derive(Debug, sqlx::FromRow)]
struct LineRow {
    order_id: Uuid,
    #[sqlx(flatten)]
    product: ProductRow,
}

/// Which orders a read covers, as a predicate over `orders o`
#[derive(Debug, Clone, Copy)]
enum Scope {
    All,
    Order(Uuid),
    Client(Uuid),
    Product(Uuid),
}

impl Scope {
    fn predicate(&self) -> &'static str {
        match self {
            Scope::All => "1 = 1",
            Scope::Order(_) => "o.order_id = ?",
            Scope::Client(_) => "o.client_id = ?",
            Scope::Product(_) => {
                "o.order_id IN (SELECT order_id FROM order_products WHERE product_id = ?)"
            }
        }
    }

    fn param(&self) -> Option<Uuid> {
        match *self {
            Scope::All => None,
            Scope::Order(id) | Scope::Client(id) | Scope::Product(id) => Some(id),
        }
    }
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    load(pool, Scope::All).await
}

pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> RepoResult<Option<Order>> {
    Ok(load(pool, Scope::Order(id)).await?.into_iter().next())
}

/// Orders placed by a client, oldest first
pub async fn find_by_client(pool: &SqlitePool, client_id: Uuid) -> RepoResult<Vec<Order>> {
    load(pool, Scope::Client(client_id)).await
}

/// Orders that include a product, oldest first, each with all of its products
pub async fn find_by_product(pool: &SqlitePool, product_id: Uuid) -> RepoResult<Vec<Order>> {
    load(pool, Scope::Product(product_id)).await
}

pub async fn exists(pool: &SqlitePool, id: Uuid) -> RepoResult<bool> {
    let found: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM orders WHERE order_id = ?)")
            .bind(id)
            .fetch_one(pool)
            .await?;
    Ok(found)
}

/// Insert an order and its product associations
///
/// `product_ids` must already be free of repeats.
pub async fn create(
    pool: &SqlitePool,
    client_id: Uuid,
    product_ids: &[Uuid],
    ordered_at: DateTime<Utc>,
) -> RepoResult<Order> {
    let id = Uuid::new_v4();
    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO orders (order_id, ordered_at, client_id) VALUES (?, ?, ?)")
        .bind(id)
        .bind(ordered_at)
        .bind(client_id)
        .execute(&mut *tx)
        .await?;
    insert_products(&mut tx, id, product_ids).await?;

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".into()))
}

/// Replace the client, products and timestamp of an existing order
pub async fn update(
    pool: &SqlitePool,
    id: Uuid,
    client_id: Uuid,
    product_ids: &[Uuid],
    ordered_at: DateTime<Utc>,
) -> RepoResult<Order> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query("UPDATE orders SET ordered_at = ?, client_id = ? WHERE order_id = ?")
        .bind(ordered_at)
        .bind(client_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }

    sqlx::query("DELETE FROM order_products WHERE order_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    insert_products(&mut tx, id, product_ids).await?;

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}

/// Delete an order together with its product associations
pub async fn delete(pool: &SqlitePool, id: Uuid) -> RepoResult<bool> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM order_products WHERE order_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    let rows = sqlx::query("DELETE FROM orders WHERE order_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(rows.rows_affected() > 0)
}

// ── Internal helpers ─────────────────────────────────────────

async fn insert_products(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    order_id: Uuid,
    product_ids: &[Uuid],
) -> RepoResult<()> {
    for product_id in product_ids {
        sqlx::query("INSERT INTO order_products (order_id, product_id) VALUES (?, ?)")
            .bind(order_id)
            .bind(product_id)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

/// Read the orders in `scope` with their clients and products
///
/// Three queries regardless of how many orders match.
async fn load(pool: &SqlitePool, scope: Scope) -> RepoResult<Vec<Order>> {
    let filter = scope.predicate();
    let orders_sql = format!(
        "SELECT o.order_id, o.ordered_at, o.client_id FROM orders o \
         WHERE {filter} ORDER BY o.rowid"
    );
    let clients_sql = format!(
        "SELECT c.client_id, c.name, c.login, c.email FROM clients c \
         WHERE c.client_id IN (SELECT o.client_id FROM orders o WHERE {filter})"
    );
    let lines_sql = format!(
        "SELECT op.order_id, p.product_id, p.name, p.value FROM order_products op \
         JOIN products p ON p.product_id = op.product_id \
         JOIN orders o ON o.order_id = op.order_id \
         WHERE {filter} ORDER BY op.rowid"
    );

    let mut tx = pool.begin().await?;

    let mut orders_query = sqlx::query_as::<_, OrderRow>(&orders_sql);
    let mut clients_query = sqlx::query_as::<_, Client>(&clients_sql);
    let mut lines_query = sqlx::query_as::<_, LineRow>(&lines_sql);
    if let Some(id) = scope.param() {
        orders_query = orders_query.bind(id);
        clients_query = clients_query.bind(id);
        lines_query = lines_query.bind(id);
    }

    let rows = orders_query.fetch_all(&mut *tx).await?;
    let clients = clients_query.fetch_all(&mut *tx).await?;
    let lines = lines_query.fetch_all(&mut *tx).await?;
    tx.commit().await?;

    let clients: HashMap<Uuid, Client> =
        clients.into_iter().map(|c| (c.client_id, c)).collect();
    let mut products: HashMap<Uuid, Vec<Product>> = HashMap::new();
    for line in lines {
        products
            .entry(line.order_id)
            .or_default()
            .push(Product::try_from(line.product)?);
    }

    rows.into_iter()
        .map(|row| {
            let client = clients.get(&row.client_id).cloned().ok_or_else(|| {
                RepoError::Database(format!(
                    "Order {} references missing client {}",
                    row.order_id, row.client_id
                ))
            })?;
            Ok(Order {
                order_id: row.order_id,
                ordered_at: row.ordered_at,
                client,
                products: products.remove(&row.order_id).unwrap_or_default(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::{client, product};
    use rust_decimal::Decimal;
    use shared::models::{ClientPayload, ProductPayload};

    struct Fixture {
        pool: SqlitePool,
        client: Client,
        tea: Product,
        coffee: Product,
    }

    async fn fixture() -> Fixture {
        let pool = DbService::in_memory().await.unwrap().pool;
        let client = client::create(&pool, &ClientPayload::new("Ana", "ana", "ana@example.com"))
            .await
            .unwrap();
        let tea = product::create(&pool, &ProductPayload::new("Tea", Decimal::ONE))
            .await
            .unwrap();
        let coffee = product::create(&pool, &ProductPayload::new("Coffee", Decimal::TWO))
            .await
            .unwrap();
        Fixture {
            pool,
            client,
            tea,
            coffee,
        }
    }

    #[tokio::test]
    async fn test_create_resolves_associations() {
        let f = fixture().await;
        let now = Utc::now();
        let order = create(
            &f.pool,
            f.client.client_id,
            &[f.coffee.product_id, f.tea.product_id],
            now,
        )
        .await
        .unwrap();

        assert_eq!(order.client, f.client);
        assert_eq!(order.ordered_at, now);
        assert_eq!(order.product_ids(), vec![f.coffee.product_id, f.tea.product_id]);
        assert_eq!(order.products[0], f.coffee);
    }

    #[tokio::test]
    async fn test_create_with_unknown_product_rolls_back() {
        let f = fixture().await;
        let err = create(
            &f.pool,
            f.client.client_id,
            &[f.tea.product_id, Uuid::new_v4()],
            Utc::now(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
        assert!(find_all(&f.pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_products_and_client() {
        let f = fixture().await;
        let other = client::create(&f.pool, &ClientPayload::new("Bruno", "bruno", "b@example.com"))
            .await
            .unwrap();
        let order = create(&f.pool, f.client.client_id, &[f.tea.product_id], Utc::now())
            .await
            .unwrap();

        let later = order.ordered_at + chrono::Duration::seconds(5);
        let updated = update(
            &f.pool,
            order.order_id,
            other.client_id,
            &[f.coffee.product_id],
            later,
        )
        .await
        .unwrap();
        assert_eq!(updated.order_id, order.order_id);
        assert_eq!(updated.client, other);
        assert_eq!(updated.product_ids(), vec![f.coffee.product_id]);
        assert_eq!(updated.ordered_at, later);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let f = fixture().await;
        let err = update(&f.pool, Uuid::new_v4(), f.client.client_id, &[], Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_find_by_client_and_product() {
        let f = fixture().await;
        let first = create(&f.pool, f.client.client_id, &[f.tea.product_id], Utc::now())
            .await
            .unwrap();
        let second = create(
            &f.pool,
            f.client.client_id,
            &[f.tea.product_id, f.coffee.product_id],
            Utc::now(),
        )
        .await
        .unwrap();

        let by_client = find_by_client(&f.pool, f.client.client_id).await.unwrap();
        assert_eq!(by_client, vec![first.clone(), second.clone()]);

        let with_coffee = find_by_product(&f.pool, f.coffee.product_id).await.unwrap();
        assert_eq!(with_coffee, vec![second]);

        let with_tea = find_by_product(&f.pool, f.tea.product_id).await.unwrap();
        assert_eq!(with_tea.len(), 2);
    }

    #[tokio::test]
    async fn test_listing_assembles_each_order() {
        let f = fixture().await;
        let bruno = client::create(&f.pool, &ClientPayload::new("Bruno", "bruno", "b@example.com"))
            .await
            .unwrap();
        let first = create(
            &f.pool,
            f.client.client_id,
            &[f.coffee.product_id, f.tea.product_id],
            Utc::now(),
        )
        .await
        .unwrap();
        let empty = create(&f.pool, bruno.client_id, &[], Utc::now()).await.unwrap();
        let third = create(&f.pool, bruno.client_id, &[f.tea.product_id], Utc::now())
            .await
            .unwrap();

        let all = find_all(&f.pool).await.unwrap();
        assert_eq!(all, vec![first.clone(), empty.clone(), third.clone()]);
        assert_eq!(all[0].products, vec![f.coffee.clone(), f.tea.clone()]);
        assert_eq!(all[1].client, bruno);
        assert!(all[1].products.is_empty());

        let by_bruno = find_by_client(&f.pool, bruno.client_id).await.unwrap();
        assert_eq!(by_bruno, vec![empty, third]);

        // Filtering by one product still returns the whole order
        let with_coffee = find_by_product(&f.pool, f.coffee.product_id).await.unwrap();
        assert_eq!(with_coffee, vec![first]);
        assert_eq!(with_coffee[0].products.len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let f = fixture().await;
        assert!(find_by_id(&f.pool, Uuid::new_v4()).await.unwrap().is_none());
        assert!(find_all(&f.pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_releases_references() {
        let f = fixture().await;
        let order = create(&f.pool, f.client.client_id, &[f.tea.product_id], Utc::now())
            .await
            .unwrap();

        assert!(delete(&f.pool, order.order_id).await.unwrap());
        assert!(!exists(&f.pool, order.order_id).await.unwrap());
        assert_eq!(product::count_orders(&f.pool, f.tea.product_id).await.unwrap(), 0);
        assert!(product::delete(&f.pool, f.tea.product_id).await.unwrap());
        assert!(client::delete(&f.pool, f.client.client_id).await.unwrap());
    }
}
