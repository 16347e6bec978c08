use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub rating: i64,
    pub comment: String,
    pub hostel_id: i64,
    pub student_id: i64,
}

/// Review joined with the reviewer's and the hostel's names, the shape both
/// public listing endpoints return.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ReviewWithNames {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub review: Review,
    pub student_name: String,
    pub hostel_name: String,
}

const WITH_NAMES: &str = "SELECT r.*, u.name AS student_name, h.name AS hostel_name \
     FROM reviews r \
     JOIN users u ON r.student_id = u.id \
     JOIN hostels h ON r.hostel_id = h.id";

impl Review {
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Review>> {
        sqlx::query_as("SELECT * FROM reviews WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_hostel(pool: &SqlitePool, hostel_id: i64) -> sqlx::Result<Vec<ReviewWithNames>> {
        sqlx::query_as(&format!("{WITH_NAMES} WHERE r.hostel_id = ? ORDER BY r.id DESC"))
            .bind(hostel_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_student(pool: &SqlitePool, student_id: i64) -> sqlx::Result<Vec<ReviewWithNames>> {
        sqlx::query_as(&format!("{WITH_NAMES} WHERE r.student_id = ? ORDER BY r.id DESC"))
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    pub async fn create(
        pool: &SqlitePool,
        rating: i64,
        comment: &str,
        hostel_id: i64,
        student_id: i64,
    ) -> sqlx::Result<Review> {
        sqlx::query_as(
            "INSERT INTO reviews (rating, comment, hostel_id, student_id) \
             VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(rating)
        .bind(comment)
        .bind(hostel_id)
        .bind(student_id)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        rating: Option<i64>,
        comment: Option<&str>,
    ) -> sqlx::Result<Option<Review>> {
        sqlx::query(
            "UPDATE reviews SET rating = COALESCE(?, rating), comment = COALESCE(?, comment) \
             WHERE id = ?",
        )
        .bind(rating)
        .bind(comment)
        .bind(id)
        .execute(pool)
        .await?;

        Self::find_by_id(pool, id).await
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
