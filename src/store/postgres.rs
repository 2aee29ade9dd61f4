use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::Result;
use crate::models::master_webhook_server::MasterWebhookServer;
use crate::models::producer::Producer;
use crate::models::request_details::{NewRequestDetails, RequestDetails};
use crate::store::WebhookStore;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WebhookStore for PgStore {
    async fn master_webhook_server(&self) -> Result<Option<MasterWebhookServer>> {
        let row = sqlx::query_as::<_, MasterWebhookServer>(
            "SELECT webhook_server_url FROM master_webhook_server LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_producer_by_url(&self, url: &str) -> Result<Option<Producer>> {
        let row = sqlx::query_as::<_, Producer>(
            "SELECT id, url, last_accessed FROM producer WHERE lower(url) = lower($1)",
        )
        .bind(url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_producer(
        &self,
        url: &str,
        last_accessed: DateTime<Utc>,
    ) -> Result<Option<Producer>> {
        // The unique index on lower(url) makes registration race-free: a
        // losing insert returns no row and the caller re-reads the winner.
        let row = sqlx::query_as::<_, Producer>(
            r#"
            INSERT INTO producer (url, last_accessed)
            VALUES ($1, $2)
            ON CONFLICT ((lower(url))) DO NOTHING
            RETURNING id, url, last_accessed
            "#,
        )
        .bind(url)
        .bind(last_accessed)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_request(&self, new: NewRequestDetails) -> Result<RequestDetails> {
        let row = sqlx::query_as::<_, RequestDetails>(
            r#"
            INSERT INTO request_details
                (producer_id, url, "timestamp", http_method, headers, response_status, response_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, producer_id, url, "timestamp", http_method, headers, response_status, response_time
            "#,
        )
        .bind(new.producer_id)
        .bind(&new.url)
        .bind(new.timestamp)
        .bind(&new.http_method)
        .bind(&new.headers)
        .bind(new.response_status)
        .bind(new.response_time)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn request_by_id(&self, id: i64) -> Result<Option<RequestDetails>> {
        let row = sqlx::query_as::<_, RequestDetails>(
            r#"
            SELECT id, producer_id, url, "timestamp", http_method, headers, response_status, response_time
            FROM request_details
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_requests(&self, producer_id: Option<i64>) -> Result<Vec<RequestDetails>> {
        let rows = sqlx::query_as::<_, RequestDetails>(
            r#"
            SELECT id, producer_id, url, "timestamp", http_method, headers, response_status, response_time
            FROM request_details
            WHERE ($1::BIGINT IS NULL OR producer_id = $1)
            ORDER BY id
            "#,
        )
        .bind(producer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn delete_requests_before(
        &self,
        producer_id: i64,
        cutoff: DateTime<Utc>,
    ) -> Result<u64> {
        let result = sqlx::query(
            r#"DELETE FROM request_details WHERE "timestamp" < $1 AND producer_id = $2"#,
        )
        .bind(cutoff)
        .bind(producer_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
