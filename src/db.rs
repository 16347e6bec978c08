use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Bounded pool over the SQLite database named by `url`. Foreign keys are
/// switched on per connection so `ON DELETE CASCADE` actually fires.
pub async fn connect(url: &str) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
}

/// Create the schema if it does not exist yet.
pub async fn migrate(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            role TEXT NOT NULL CHECK(role IN ('student', 'owner', 'admin')),
            contact_number TEXT
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS hostels (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            address TEXT NOT NULL,
            city TEXT NOT NULL,
            rent INTEGER NOT NULL,
            facilities TEXT NOT NULL DEFAULT '',
            owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            contact_number TEXT,
            is_verified INTEGER NOT NULL DEFAULT 0
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            rating INTEGER NOT NULL CHECK(rating >= 1 AND rating <= 5),
            comment TEXT NOT NULL DEFAULT '',
            hostel_id INTEGER NOT NULL REFERENCES hostels(id) ON DELETE CASCADE,
            student_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS bookings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            hostel_id INTEGER NOT NULL REFERENCES hostels(id) ON DELETE CASCADE,
            student_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            status TEXT NOT NULL DEFAULT 'pending'
                CHECK(status IN ('pending', 'confirmed', 'cancelled'))
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS enquiries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            hostel_id INTEGER NOT NULL REFERENCES hostels(id) ON DELETE CASCADE,
            student_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            type TEXT NOT NULL CHECK(type IN ('enquiry', 'schedule_visit')),
            message TEXT,
            scheduled_date TEXT,
            reply TEXT,
            status TEXT NOT NULL DEFAULT 'pending' CHECK(status IN ('pending', 'responded')),
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            replied_at TEXT
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

struct SeedHostel {
    name: &'static str,
    address: &'static str,
    city: &'static str,
    rent: i64,
    facilities: &'static str,
    owner_email: &'static str,
    contact_number: &'static str,
    is_verified: i64,
}

const SEED_HOSTELS: &[SeedHostel] = &[
    SeedHostel {
        name: "Gulberg Boys Hostel",
        address: "Near Liberty Market, Gulberg III, Lahore, Punjab, Pakistan",
        city: "Lahore",
        rent: 15000,
        facilities: "Wifi, AC, Laundry, Mess, 24/7 Security",
        owner_email: "ali.owner@example.com",
        contact_number: "0300-1234567",
        is_verified: 1,
    },
    SeedHostel {
        name: "Johar Town Student Hostel",
        address: "Block R1, Johar Town, Lahore, Punjab, Pakistan",
        city: "Lahore",
        rent: 12000,
        facilities: "Wifi, Mess, Study Room, CCTV",
        owner_email: "ali.owner@example.com",
        contact_number: "0301-2345678",
        is_verified: 1,
    },
    SeedHostel {
        name: "DHA Girls Hostel",
        address: "Phase 5, DHA, Lahore, Punjab, Pakistan",
        city: "Lahore",
        rent: 18000,
        facilities: "Wifi, AC, Mess, Generator Backup, Laundry",
        owner_email: "sara.owner@example.com",
        contact_number: "0302-3456789",
        is_verified: 1,
    },
    SeedHostel {
        name: "G-10 Student Hostel",
        address: "Street 43, Sector G-10/2, Islamabad, Pakistan",
        city: "Islamabad",
        rent: 14000,
        facilities: "Wifi, Mess, Hot Water, UPS Backup",
        owner_email: "usman.owner@example.com",
        contact_number: "0303-4567890",
        is_verified: 1,
    },
    SeedHostel {
        name: "Blue Area Boys Hostel",
        address: "Near Jinnah Avenue, Blue Area, Islamabad, Pakistan",
        city: "Islamabad",
        rent: 16000,
        facilities: "Wifi, AC, Mess, Parking, 24/7 Security",
        owner_email: "usman.owner@example.com",
        contact_number: "0304-5678901",
        is_verified: 0,
    },
    SeedHostel {
        name: "University Road Hostel",
        address: "Near NIPA Chowrangi, University Road, Karachi, Sindh, Pakistan",
        city: "Karachi",
        rent: 13000,
        facilities: "Wifi, Mess, Laundry, CCTV",
        owner_email: "sara.owner@example.com",
        contact_number: "0305-6789012",
        is_verified: 1,
    },
    SeedHostel {
        name: "PECHS Girls Hostel",
        address: "Block 6, PECHS, Karachi, Sindh, Pakistan",
        city: "Karachi",
        rent: 17000,
        facilities: "Wifi, AC, Mess, Generator Backup, Housekeeping",
        owner_email: "sara.owner@example.com",
        contact_number: "0306-7890123",
        is_verified: 1,
    },
    SeedHostel {
        name: "Saddar Student Lodge",
        address: "Near Mall Road, Saddar, Rawalpindi, Punjab, Pakistan",
        city: "Rawalpindi",
        rent: 11000,
        facilities: "Wifi, Mess, Study Room, CCTV",
        owner_email: "ali.owner@example.com",
        contact_number: "0307-8901234",
        is_verified: 0,
    },
];

/// Seed demo accounts and listings into a fresh (zero-user) database.
/// Runs in one transaction so a partial seed can never be observed.
pub async fn seed(pool: &SqlitePool) -> sqlx::Result<()> {
    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    if user_count > 0 {
        return Ok(());
    }

    log::info!("seeding initial users and hostels");
    let mut tx = pool.begin().await?;

    let owners = [
        ("Ali Khan", "ali.owner@example.com", "0300-1234567"),
        ("Sara Ahmed", "sara.owner@example.com", "0301-2345678"),
        ("Usman Malik", "usman.owner@example.com", "0302-3456789"),
    ];
    for (name, email, contact) in owners {
        sqlx::query(
            "INSERT INTO users (name, email, password, role, contact_number) \
             VALUES (?, ?, 'password123', 'owner', ?)",
        )
        .bind(name)
        .bind(email)
        .bind(contact)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query(
        "INSERT INTO users (name, email, password, role) \
         VALUES ('Admin', 'admin.pk@example.com', 'admin123', 'admin')",
    )
    .execute(&mut *tx)
    .await?;
    sqlx::query(
        "INSERT INTO users (name, email, password, role) \
         VALUES ('ahad', 'ahad@gmail.com', '1234', 'student')",
    )
    .execute(&mut *tx)
    .await?;

    for h in SEED_HOSTELS {
        sqlx::query(
            "INSERT INTO hostels (name, address, city, rent, facilities, owner_id, contact_number, is_verified) \
             VALUES (?, ?, ?, ?, ?, (SELECT id FROM users WHERE email = ?), ?, ?)",
        )
        .bind(h.name)
        .bind(h.address)
        .bind(h.city)
        .bind(h.rent)
        .bind(h.facilities)
        .bind(h.owner_email)
        .bind(h.contact_number)
        .bind(h.is_verified)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    log::info!("seed data committed");
    Ok(())
}

/// Full startup initialization: schema, then demo data.
pub async fn init(pool: &SqlitePool) -> sqlx::Result<()> {
    migrate(pool).await?;
    seed(pool).await
}
