use serde::Serialize;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Hostel {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub rent: i64,
    pub facilities: String,
    pub owner_id: i64,
    pub contact_number: Option<String>,
    pub is_verified: i64,
}

impl Hostel {
    pub fn verified(&self) -> bool {
        self.is_verified == 1
    }
}

/// Hostel row joined with its owner's public contact details, the shape the
/// single-hostel endpoint and the student listing return.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct HostelWithOwner {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub hostel: Hostel,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_contact_number: String,
}

#[derive(Debug, Default)]
pub struct HostelFilter {
    pub verified_only: bool,
    pub owner_id: Option<i64>,
    pub city: Option<String>,
    pub max_rent: Option<i64>,
    pub facility: Option<String>,
}

#[derive(Debug, Default)]
pub struct HostelUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub rent: Option<i64>,
    pub facilities: Option<String>,
    pub contact_number: Option<String>,
}

impl HostelUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.rent.is_none()
            && self.facilities.is_none()
            && self.contact_number.is_none()
    }
}

impl Hostel {
    pub async fn find_all(pool: &SqlitePool, filter: &HostelFilter) -> sqlx::Result<Vec<Hostel>> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM hostels WHERE 1=1");

        if filter.verified_only {
            qb.push(" AND is_verified = 1");
        }
        if let Some(owner_id) = filter.owner_id {
            qb.push(" AND owner_id = ");
            qb.push_bind(owner_id);
        }
        if let Some(city) = &filter.city {
            qb.push(" AND city = ");
            qb.push_bind(city.as_str());
        }
        if let Some(max_rent) = filter.max_rent {
            qb.push(" AND rent <= ");
            qb.push_bind(max_rent);
        }
        if let Some(facility) = &filter.facility {
            qb.push(" AND LOWER(facilities) LIKE ");
            qb.push_bind(format!("%{}%", facility.to_lowercase()));
        }

        qb.push(" ORDER BY id DESC");
        qb.build_query_as().fetch_all(pool).await
    }

    /// Verified hostels with owner contact details, newest first. The student
    /// listing uses this so the frontend can show who to reach out to.
    pub async fn list_verified_with_owner(pool: &SqlitePool) -> sqlx::Result<Vec<HostelWithOwner>> {
        sqlx::query_as(
            "SELECT h.*, u.name AS owner_name, u.email AS owner_email, \
                    COALESCE(u.contact_number, '') AS owner_contact_number \
             FROM hostels h \
             JOIN users u ON h.owner_id = u.id \
             WHERE h.is_verified = 1 \
             ORDER BY h.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<HostelWithOwner>> {
        sqlx::query_as(
            "SELECT h.*, u.name AS owner_name, u.email AS owner_email, \
                    COALESCE(u.contact_number, '') AS owner_contact_number \
             FROM hostels h \
             JOIN users u ON h.owner_id = u.id \
             WHERE h.id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// New listings always start unverified; only an admin flips the flag.
    pub async fn create(
        pool: &SqlitePool,
        name: &str,
        address: &str,
        city: &str,
        rent: i64,
        facilities: &str,
        owner_id: i64,
        contact_number: Option<&str>,
    ) -> sqlx::Result<Hostel> {
        sqlx::query_as(
            "INSERT INTO hostels (name, address, city, rent, facilities, owner_id, contact_number, is_verified) \
             VALUES (?, ?, ?, ?, ?, ?, ?, 0) RETURNING *",
        )
        .bind(name)
        .bind(address)
        .bind(city)
        .bind(rent)
        .bind(facilities)
        .bind(owner_id)
        .bind(contact_number)
        .fetch_one(pool)
        .await
    }

    pub async fn update(pool: &SqlitePool, id: i64, changes: &HostelUpdate) -> sqlx::Result<()> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE hostels SET ");
        let mut fields = qb.separated(", ");

        if let Some(name) = &changes.name {
            fields.push("name = ");
            fields.push_bind_unseparated(name.as_str());
        }
        if let Some(address) = &changes.address {
            fields.push("address = ");
            fields.push_bind_unseparated(address.as_str());
        }
        if let Some(city) = &changes.city {
            fields.push("city = ");
            fields.push_bind_unseparated(city.as_str());
        }
        if let Some(rent) = changes.rent {
            fields.push("rent = ");
            fields.push_bind_unseparated(rent);
        }
        if let Some(facilities) = &changes.facilities {
            fields.push("facilities = ");
            fields.push_bind_unseparated(facilities.as_str());
        }
        if let Some(contact_number) = &changes.contact_number {
            fields.push("contact_number = ");
            fields.push_bind_unseparated(contact_number.as_str());
        }

        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.build().execute(pool).await?;
        Ok(())
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM hostels WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn set_verification(pool: &SqlitePool, id: i64, verified: bool) -> sqlx::Result<()> {
        sqlx::query("UPDATE hostels SET is_verified = ? WHERE id = ?")
            .bind(verified as i64)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
