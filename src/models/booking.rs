use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Booking {
    pub id: i64,
    pub hostel_id: i64,
    pub student_id: i64,
    pub status: BookingStatus,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct BookingWithNames {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub booking: Booking,
    pub hostel_name: String,
    pub student_name: String,
}

const WITH_NAMES: &str = "SELECT b.*, h.name AS hostel_name, u.name AS student_name \
     FROM bookings b \
     JOIN hostels h ON b.hostel_id = h.id \
     JOIN users u ON b.student_id = u.id";

impl Booking {
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Booking>> {
        sqlx::query_as("SELECT * FROM bookings WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_student(pool: &SqlitePool, student_id: i64) -> sqlx::Result<Vec<BookingWithNames>> {
        sqlx::query_as(&format!("{WITH_NAMES} WHERE b.student_id = ? ORDER BY b.id DESC"))
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_all(pool: &SqlitePool) -> sqlx::Result<Vec<BookingWithNames>> {
        sqlx::query_as(&format!("{WITH_NAMES} ORDER BY b.id DESC"))
            .fetch_all(pool)
            .await
    }

    pub async fn create(pool: &SqlitePool, hostel_id: i64, student_id: i64) -> sqlx::Result<Booking> {
        sqlx::query_as(
            "INSERT INTO bookings (hostel_id, student_id, status) \
             VALUES (?, ?, 'pending') RETURNING *",
        )
        .bind(hostel_id)
        .bind(student_id)
        .fetch_one(pool)
        .await
    }

    pub async fn set_status(
        pool: &SqlitePool,
        id: i64,
        status: BookingStatus,
    ) -> sqlx::Result<Option<Booking>> {
        sqlx::query("UPDATE bookings SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;

        Self::find_by_id(pool, id).await
    }
}
