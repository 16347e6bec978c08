//! Single source of truth for the role visibility table.
//!
//! Handlers never branch on roles themselves; they ask this module and get an
//! allow (`Ok`) or a deny carrying the reason the caller sees. Unknown ids are
//! always surfaced as not-found *before* these checks run, so a denial here
//! always means "the record exists but is not yours to touch".

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::models::hostel::HostelFilter;
use crate::models::{Booking, Hostel, Review, Role};

/// What a role is allowed to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostelScope {
    /// Students: verified listings only.
    VerifiedOnly,
    /// Owners: their own listings, verified or not.
    OwnedBy(i64),
    /// Admins: everything.
    All,
}

pub fn hostel_scope(user: &AuthUser) -> HostelScope {
    match user.role {
        Role::Student => HostelScope::VerifiedOnly,
        Role::Owner => HostelScope::OwnedBy(user.id),
        Role::Admin => HostelScope::All,
    }
}

/// Base listing filter for the requester, before search criteria are added.
pub fn scope_filter(user: &AuthUser) -> HostelFilter {
    let mut filter = HostelFilter::default();
    match hostel_scope(user) {
        HostelScope::VerifiedOnly => filter.verified_only = true,
        HostelScope::OwnedBy(id) => filter.owner_id = Some(id),
        HostelScope::All => {}
    }
    filter
}

pub fn view_hostel(user: &AuthUser, hostel: &Hostel) -> ApiResult<()> {
    match user.role {
        Role::Student if !hostel.verified() => {
            Err(ApiError::Forbidden("This hostel is not verified yet".into()))
        }
        Role::Owner if hostel.owner_id != user.id => Err(ApiError::Forbidden(
            "You can only view your own hostels".into(),
        )),
        _ => Ok(()),
    }
}

/// Owners mutate their own rows; nobody else mutates through this path
/// (admins go through the dedicated verify/reject endpoints).
pub fn modify_hostel(user: &AuthUser, hostel: &Hostel, verb: &str) -> ApiResult<()> {
    if user.role != Role::Owner {
        return Err(ApiError::Forbidden(format!("Only owners can {verb} hostels")));
    }
    if hostel.owner_id != user.id {
        return Err(ApiError::Forbidden(format!(
            "You can only {verb} your own hostels"
        )));
    }
    Ok(())
}

pub fn require_role(user: &AuthUser, role: Role, action: &str) -> ApiResult<()> {
    if user.role != role {
        return Err(ApiError::Forbidden(format!(
            "Only {}s can {action}",
            role.as_str()
        )));
    }
    Ok(())
}

/// Students may only review, enquire about, or book verified listings.
pub fn require_verified(hostel: &Hostel, action: &str) -> ApiResult<()> {
    if !hostel.verified() {
        return Err(ApiError::Forbidden(format!(
            "You can only {action} verified hostels"
        )));
    }
    Ok(())
}

/// Record-level ownership: the requester must be the user the record belongs to.
pub fn require_own(user: &AuthUser, record_owner: i64, action: &str) -> ApiResult<()> {
    if record_owner != user.id {
        return Err(ApiError::Forbidden(format!("You can only {action}")));
    }
    Ok(())
}

pub fn edit_review(user: &AuthUser, review: &Review, verb: &str) -> ApiResult<()> {
    require_own(user, review.student_id, &format!("{verb} your own reviews"))
}

pub fn view_hostel_enquiries(user: &AuthUser, hostel: &Hostel) -> ApiResult<()> {
    if user.role != Role::Owner || hostel.owner_id != user.id {
        return Err(ApiError::Forbidden(
            "You can only view enquiries for your own hostels".into(),
        ));
    }
    Ok(())
}

pub fn reply_enquiry(user: &AuthUser, hostel: &Hostel) -> ApiResult<()> {
    if user.role != Role::Owner || hostel.owner_id != user.id {
        return Err(ApiError::Forbidden(
            "You can only reply to enquiries for your own hostels".into(),
        ));
    }
    Ok(())
}

pub fn confirm_booking(user: &AuthUser, hostel: &Hostel) -> ApiResult<()> {
    if user.role != Role::Owner || hostel.owner_id != user.id {
        return Err(ApiError::Forbidden(
            "You can only confirm bookings for your own hostels".into(),
        ));
    }
    Ok(())
}

/// The booking's student and the booked hostel's owner may cancel.
pub fn cancel_booking(user: &AuthUser, booking: &Booking, hostel: &Hostel) -> ApiResult<()> {
    let is_booking_student = user.role == Role::Student && booking.student_id == user.id;
    let is_hostel_owner = user.role == Role::Owner && hostel.owner_id == user.id;
    if !is_booking_student && !is_hostel_owner {
        return Err(ApiError::Forbidden(
            "You can only cancel your own bookings".into(),
        ));
    }
    Ok(())
}

pub fn require_admin(user: &AuthUser) -> ApiResult<()> {
    if user.role != Role::Admin {
        return Err(ApiError::Forbidden("Admin access required".into()));
    }
    Ok(())
}

/// What an admin rejection does to a hostel, as an explicit transition table.
/// Deleting cascades away the hostel's reviews, bookings, and enquiries;
/// unverifying keeps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectAction {
    /// Still-pending listing: removed outright.
    Delete,
    /// Already-verified listing: flipped back to unverified.
    Unverify,
}

pub fn reject_action(verified: bool) -> RejectAction {
    if verified {
        RejectAction::Unverify
    } else {
        RejectAction::Delete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, role: Role) -> AuthUser {
        AuthUser {
            id,
            name: format!("user{id}"),
            email: format!("user{id}@example.com"),
            role,
        }
    }

    fn hostel(id: i64, owner_id: i64, verified: bool) -> Hostel {
        Hostel {
            id,
            name: "Test Hostel".into(),
            address: "1 Test Street".into(),
            city: "Lahore".into(),
            rent: 12000,
            facilities: "Wifi".into(),
            owner_id,
            contact_number: None,
            is_verified: verified as i64,
        }
    }

    #[test]
    fn listing_scope_follows_the_role_table() {
        assert_eq!(hostel_scope(&user(1, Role::Student)), HostelScope::VerifiedOnly);
        assert_eq!(hostel_scope(&user(7, Role::Owner)), HostelScope::OwnedBy(7));
        assert_eq!(hostel_scope(&user(2, Role::Admin)), HostelScope::All);
    }

    #[test]
    fn student_views_verified_hostels_only() {
        let student = user(1, Role::Student);
        assert!(view_hostel(&student, &hostel(10, 5, true)).is_ok());
        assert!(matches!(
            view_hostel(&student, &hostel(10, 5, false)),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn owner_views_own_hostels_only() {
        let owner = user(5, Role::Owner);
        assert!(view_hostel(&owner, &hostel(10, 5, false)).is_ok());
        assert!(matches!(
            view_hostel(&owner, &hostel(11, 6, true)),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn admin_views_everything() {
        let admin = user(2, Role::Admin);
        assert!(view_hostel(&admin, &hostel(10, 5, false)).is_ok());
        assert!(view_hostel(&admin, &hostel(11, 6, true)).is_ok());
    }

    #[test]
    fn only_the_owning_owner_mutates() {
        let owner = user(5, Role::Owner);
        let other = user(6, Role::Owner);
        let student = user(1, Role::Student);
        let h = hostel(10, 5, true);

        assert!(modify_hostel(&owner, &h, "update").is_ok());
        assert!(modify_hostel(&other, &h, "update").is_err());
        assert!(modify_hostel(&student, &h, "delete").is_err());
    }

    #[test]
    fn verified_gate_wording_names_the_action() {
        let err = require_verified(&hostel(10, 5, false), "enquire about").unwrap_err();
        assert_eq!(
            err.to_string(),
            "You can only enquire about verified hostels"
        );
    }

    #[test]
    fn rejecting_pending_deletes_rejecting_verified_unverifies() {
        assert_eq!(reject_action(false), RejectAction::Delete);
        assert_eq!(reject_action(true), RejectAction::Unverify);
    }

    #[test]
    fn cancel_booking_allows_student_and_owner_parties_only() {
        let h = hostel(10, 5, true);
        let booking = Booking {
            id: 1,
            hostel_id: 10,
            student_id: 3,
            status: crate::models::BookingStatus::Pending,
        };

        assert!(cancel_booking(&user(3, Role::Student), &booking, &h).is_ok());
        assert!(cancel_booking(&user(5, Role::Owner), &booking, &h).is_ok());
        assert!(cancel_booking(&user(4, Role::Student), &booking, &h).is_err());
        assert!(cancel_booking(&user(6, Role::Owner), &booking, &h).is_err());
    }
}
