use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum EnquiryKind {
    Enquiry,
    ScheduleVisit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum EnquiryStatus {
    Pending,
    Responded,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Enquiry {
    pub id: i64,
    pub hostel_id: i64,
    pub student_id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: EnquiryKind,
    pub message: Option<String>,
    pub scheduled_date: Option<String>,
    pub reply: Option<String>,
    pub status: EnquiryStatus,
    pub created_at: String,
    pub replied_at: Option<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct EnquiryWithNames {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub enquiry: Enquiry,
    pub student_name: String,
    pub hostel_name: String,
}

const WITH_NAMES: &str = "SELECT e.*, u.name AS student_name, h.name AS hostel_name \
     FROM enquiries e \
     JOIN users u ON e.student_id = u.id \
     JOIN hostels h ON e.hostel_id = h.id";

impl Enquiry {
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Enquiry>> {
        sqlx::query_as("SELECT * FROM enquiries WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_hostel(pool: &SqlitePool, hostel_id: i64) -> sqlx::Result<Vec<EnquiryWithNames>> {
        sqlx::query_as(&format!("{WITH_NAMES} WHERE e.hostel_id = ? ORDER BY e.id DESC"))
            .bind(hostel_id)
            .fetch_all(pool)
            .await
    }

    /// Every enquiry across all hostels owned by `owner_id`.
    pub async fn find_by_owner(pool: &SqlitePool, owner_id: i64) -> sqlx::Result<Vec<EnquiryWithNames>> {
        sqlx::query_as(&format!("{WITH_NAMES} WHERE h.owner_id = ? ORDER BY e.id DESC"))
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_student(pool: &SqlitePool, student_id: i64) -> sqlx::Result<Vec<EnquiryWithNames>> {
        sqlx::query_as(&format!("{WITH_NAMES} WHERE e.student_id = ? ORDER BY e.id DESC"))
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    pub async fn create(
        pool: &SqlitePool,
        hostel_id: i64,
        student_id: i64,
        kind: EnquiryKind,
        message: Option<&str>,
        scheduled_date: Option<&str>,
    ) -> sqlx::Result<Enquiry> {
        sqlx::query_as(
            "INSERT INTO enquiries (hostel_id, student_id, type, message, scheduled_date) \
             VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(hostel_id)
        .bind(student_id)
        .bind(kind)
        .bind(message)
        .bind(scheduled_date)
        .fetch_one(pool)
        .await
    }

    /// The pending -> responded transition. Replying again overwrites the
    /// previous reply and re-stamps `replied_at`.
    pub async fn reply(pool: &SqlitePool, id: i64, reply: &str) -> sqlx::Result<Option<Enquiry>> {
        sqlx::query(
            "UPDATE enquiries SET reply = ?, status = 'responded', replied_at = datetime('now') \
             WHERE id = ?",
        )
        .bind(reply)
        .bind(id)
        .execute(pool)
        .await?;

        Self::find_by_id(pool, id).await
    }
}
