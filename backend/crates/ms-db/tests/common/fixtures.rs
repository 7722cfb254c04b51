use sqlx::SqlitePool;

/// A host session row with frontend, logged-in defaults
pub struct HostSessionFixture {
    pub session_id: String,
    pub username: String,
    pub client_id: i64,
    pub guest: bool,
    pub time: i64,
}

impl HostSessionFixture {
    pub fn frontend(username: &str, time: i64) -> Self {
        Self {
            session_id: format!("sess-{}-{}", username, time),
            username: username.to_string(),
            client_id: 0,
            guest: false,
            time,
        }
    }
}

/// Inserts a host session row the way the CMS would
pub async fn insert_host_session(pool: &SqlitePool, session: &HostSessionFixture) {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query(
        "INSERT INTO host_sessions (session_id, user_id, username, client_id, guest, time) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&session.session_id)
    .bind(1_i64)
    .bind(&session.username)
    .bind(session.client_id)
    .bind(if session.guest { 1_i64 } else { 0_i64 })
    .bind(session.time)
    .execute(pool)
    .await
    .expect("Failed to insert host session");
}
