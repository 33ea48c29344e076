//! FalkorDB-backed social graph implementation.
//!
//! FalkorDB speaks the Redis protocol, so this implementation reuses the
//! same `redis` client stack as the cache layer and issues `GRAPH.QUERY`
//! commands carrying Cypher. Query parameters are passed via the `CYPHER`
//! prelude that FalkorDB parses ahead of the query text, with string values
//! escaped here.

use async_trait::async_trait;
use redis::{Client, Value, aio::ConnectionManager};
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::repositories::{GraphError, GraphResult, SocialGraph};

/// Social graph stored in FalkorDB.
///
/// Holds a `:User` node per directory user (id, username, email,
/// display_name) and directed `FOLLOWS` edges. Node ids are stringified
/// UUIDs matching the relational primary keys.
pub struct FalkorGraph {
    conn: ConnectionManager,
    graph_name: String,
}

impl FalkorGraph {
    /// Connects to FalkorDB and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Connection`] if the URL is invalid or the
    /// server is unreachable.
    pub async fn connect(redis_url: &str, graph_name: &str) -> GraphResult<Self> {
        info!("Connecting to FalkorDB (graph '{}')", graph_name);

        let client = Client::open(redis_url)
            .map_err(|e| GraphError::Connection(format!("Invalid FalkorDB URL: {}", e)))?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| GraphError::Connection(format!("Failed to connect to FalkorDB: {}", e)))?;

        let mut test_conn = conn.clone();
        redis::cmd("PING")
            .query_async::<()>(&mut test_conn)
            .await
            .map_err(|e| GraphError::Connection(format!("FalkorDB PING failed: {}", e)))?;

        info!("Connected to FalkorDB");

        Ok(Self {
            conn,
            graph_name: graph_name.to_string(),
        })
    }

    /// Creates the indexes used by node lookups, tolerating re-creation.
    pub async fn ensure_indexes(&self) -> GraphResult<()> {
        match self.query("CREATE INDEX FOR (u:User) ON (u.id)").await {
            Ok(_) => debug!("Created :User(id) index"),
            // FalkorDB reports an error when the attribute is already indexed.
            Err(GraphError::Query(msg)) if msg.contains("already indexed") => {
                debug!("Index :User(id) already exists")
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    /// Executes a Cypher query and returns the raw reply.
    async fn query(&self, cypher: &str) -> GraphResult<Value> {
        let mut conn = self.conn.clone();

        redis::cmd("GRAPH.QUERY")
            .arg(&self.graph_name)
            .arg(cypher)
            .query_async(&mut conn)
            .await
            .map_err(|e| GraphError::Query(e.to_string()))
    }

    /// Executes a Cypher query and returns the result rows (empty for
    /// write-only queries).
    async fn query_rows(&self, cypher: &str) -> GraphResult<Vec<Value>> {
        let reply = self.query(cypher).await?;
        Ok(result_rows(reply))
    }
}

#[async_trait]
impl SocialGraph for FalkorGraph {
    async fn upsert_user(&self, user: &User) -> GraphResult<()> {
        let cypher = format!(
            "CYPHER id={id} username={username} email={email} display_name={display_name} \
             MERGE (u:User {{id: $id}}) \
             SET u.username = $username, u.email = $email, u.display_name = $display_name",
            id = cypher_string(&user.id().to_string()),
            username = cypher_string(user.username()),
            email = cypher_string(user.email()),
            display_name = cypher_string(user.display_name().unwrap_or("")),
        );

        self.query(&cypher).await?;
        Ok(())
    }

    async fn remove_user(&self, id: Uuid) -> GraphResult<()> {
        let cypher = format!(
            "CYPHER id={id} MATCH (u:User {{id: $id}}) DETACH DELETE u",
            id = cypher_string(&id.to_string()),
        );

        self.query(&cypher).await?;
        Ok(())
    }

    async fn create_follow(&self, follower: Uuid, followed: Uuid) -> GraphResult<bool> {
        let cypher = format!(
            "CYPHER follower_id={follower} followed_id={followed} \
             MATCH (a:User {{id: $follower_id}}) \
             MATCH (b:User {{id: $followed_id}}) \
             MERGE (a)-[r:FOLLOWS]->(b) \
             RETURN r",
            follower = cypher_string(&follower.to_string()),
            followed = cypher_string(&followed.to_string()),
        );

        let rows = self.query_rows(&cypher).await?;
        Ok(!rows.is_empty())
    }

    async fn delete_follow(&self, follower: Uuid, followed: Uuid) -> GraphResult<()> {
        let cypher = format!(
            "CYPHER follower_id={follower} followed_id={followed} \
             MATCH (a:User {{id: $follower_id}})-[r:FOLLOWS]->(b:User {{id: $followed_id}}) \
             DELETE r",
            follower = cypher_string(&follower.to_string()),
            followed = cypher_string(&followed.to_string()),
        );

        self.query(&cypher).await?;
        Ok(())
    }

    async fn follower_ids(&self, id: Uuid) -> GraphResult<Vec<Uuid>> {
        let cypher = format!(
            "CYPHER user_id={id} \
             MATCH (follower:User)-[:FOLLOWS]->(u:User {{id: $user_id}}) \
             RETURN follower.id",
            id = cypher_string(&id.to_string()),
        );

        let rows = self.query_rows(&cypher).await?;
        Ok(collect_ids(&rows))
    }

    async fn following_ids(&self, id: Uuid) -> GraphResult<Vec<Uuid>> {
        let cypher = format!(
            "CYPHER user_id={id} \
             MATCH (u:User {{id: $user_id}})-[:FOLLOWS]->(followed:User) \
             RETURN followed.id",
            id = cypher_string(&id.to_string()),
        );

        let rows = self.query_rows(&cypher).await?;
        Ok(collect_ids(&rows))
    }

    async fn mutual_ids(&self, id: Uuid) -> GraphResult<Vec<Uuid>> {
        let cypher = format!(
            "CYPHER user_id={id} \
             MATCH (u:User {{id: $user_id}})-[:FOLLOWS]->(friend:User)-[:FOLLOWS]->(u) \
             RETURN friend.id",
            id = cypher_string(&id.to_string()),
        );

        let rows = self.query_rows(&cypher).await?;
        Ok(collect_ids(&rows))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .is_ok()
    }
}

/// Quotes and escapes a string for the `CYPHER` parameter prelude.
fn cypher_string(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Extracts result rows from a `GRAPH.QUERY` reply.
///
/// Read queries reply with `[header, rows, stats]`; write-only queries reply
/// with `[stats]` and yield no rows.
fn result_rows(reply: Value) -> Vec<Value> {
    match reply {
        Value::Array(mut parts) if parts.len() == 3 => match parts.remove(1) {
            Value::Array(rows) => rows,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Pulls UUIDs out of single-column result rows, skipping unparseable cells.
fn collect_ids(rows: &[Value]) -> Vec<Uuid> {
    rows.iter()
        .filter_map(cell_string)
        .filter_map(|s| Uuid::parse_str(&s).ok())
        .collect()
}

/// Extracts the first string scalar from a result cell.
///
/// FalkorDB encodes scalar cells as bulk strings, possibly nested one level
/// inside the row array.
fn cell_string(value: &Value) -> Option<String> {
    match value {
        Value::BulkString(bytes) => String::from_utf8(bytes.clone()).ok(),
        Value::SimpleString(s) => Some(s.clone()),
        Value::VerbatimString { text, .. } => Some(text.clone()),
        Value::Array(items) => items.iter().find_map(cell_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulk(s: &str) -> Value {
        Value::BulkString(s.as_bytes().to_vec())
    }

    #[test]
    fn test_cypher_string_escaping() {
        assert_eq!(cypher_string("alice"), "\"alice\"");
        assert_eq!(cypher_string("a\"b"), "\"a\\\"b\"");
        assert_eq!(cypher_string("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn test_result_rows_read_reply() {
        let reply = Value::Array(vec![
            Value::Array(vec![bulk("follower.id")]),
            Value::Array(vec![
                Value::Array(vec![bulk("4f2c0a9e-0000-0000-0000-000000000001")]),
                Value::Array(vec![bulk("4f2c0a9e-0000-0000-0000-000000000002")]),
            ]),
            Value::Array(vec![bulk("Query internal execution time: 0.2 ms")]),
        ]);

        let rows = result_rows(reply);
        assert_eq!(rows.len(), 2);

        let ids = collect_ids(&rows);
        assert_eq!(ids.len(), 2);
        assert_eq!(
            ids[0],
            Uuid::parse_str("4f2c0a9e-0000-0000-0000-000000000001").unwrap()
        );
    }

    #[test]
    fn test_result_rows_write_reply_is_empty() {
        let reply = Value::Array(vec![Value::Array(vec![bulk("Nodes created: 1")])]);
        assert!(result_rows(reply).is_empty());
    }

    #[test]
    fn test_collect_ids_skips_garbage() {
        let rows = vec![
            Value::Array(vec![bulk("not-a-uuid")]),
            Value::Array(vec![bulk("4f2c0a9e-0000-0000-0000-000000000003")]),
            Value::Int(7),
        ];

        let ids = collect_ids(&rows);
        assert_eq!(ids.len(), 1);
    }
}
