//! Regression coverage for donor values.

use chrono::{Duration, TimeZone};
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;

#[fixture]
fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

#[fixture]
fn new_donor() -> NewDonor {
    NewDonor {
        name: DonorName::new("  Jane Doe ").expect("valid name"),
        blood_type: BloodType::ONegative,
        contact_type: ContactType::Phone,
        contact: ContactDetails::new("9876543210").expect("valid contact"),
    }
}

#[rstest]
fn names_and_contacts_are_trimmed() {
    let name = DonorName::new("\tJane Doe  ").expect("valid name");
    assert_eq!(name.as_ref(), "Jane Doe");
    let contact = ContactDetails::new(" jane@gmail.com ").expect("valid contact");
    assert_eq!(contact.as_ref(), "jane@gmail.com");
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_text_is_rejected(#[case] raw: &str) {
    assert_eq!(DonorName::new(raw), Err(DonorValidationError::EmptyName));
    assert_eq!(
        ContactDetails::new(raw),
        Err(DonorValidationError::EmptyContact)
    );
}

#[rstest]
fn service_does_not_apply_console_rules() {
    assert!(DonorName::new("R2D2").is_ok());
    assert!(ContactDetails::new("not-a-phone").is_ok());
}

#[rstest]
#[case("3fa85f64-5717-4562-b3fc-2c963f66afa6", true)]
#[case("not-a-uuid", false)]
#[case("", false)]
fn donor_id_parses_uuids(#[case] raw: &str, #[case] ok: bool) {
    assert_eq!(raw.parse::<DonorId>().is_ok(), ok);
}

#[rstest]
fn create_stamps_both_timestamps(new_donor: NewDonor, created: DateTime<Utc>) {
    let donor = Donor::create(DonorId::random(), new_donor, created);
    assert_eq!(donor.created_at(), created);
    assert_eq!(donor.updated_at(), created);
    assert_eq!(donor.name().as_ref(), "Jane Doe");
}

#[rstest]
fn apply_overwrites_present_fields_only(new_donor: NewDonor, created: DateTime<Utc>) {
    let id = DonorId::random();
    let mut donor = Donor::create(id, new_donor, created);
    let later = created + Duration::minutes(5);

    donor.apply(
        DonorPatch {
            blood_type: Some(BloodType::AbPositive),
            ..DonorPatch::default()
        },
        later,
    );

    assert_eq!(donor.id(), id);
    assert_eq!(donor.blood_type(), BloodType::AbPositive);
    assert_eq!(donor.name().as_ref(), "Jane Doe");
    assert_eq!(donor.contact_type(), ContactType::Phone);
    assert_eq!(donor.created_at(), created);
    assert_eq!(donor.updated_at(), later);
}

#[rstest]
fn empty_patch_still_refreshes_updated_at(new_donor: NewDonor, created: DateTime<Utc>) {
    let mut donor = Donor::create(DonorId::random(), new_donor, created);
    let later = created + Duration::seconds(1);
    let patch = DonorPatch::default();
    assert!(patch.is_empty());

    donor.apply(patch, later);

    assert_eq!(donor.updated_at(), later);
}

#[rstest]
fn serialises_camel_case_record(new_donor: NewDonor, created: DateTime<Utc>) {
    let id: DonorId = "3fa85f64-5717-4562-b3fc-2c963f66afa6"
        .parse()
        .expect("valid id");
    let donor = Donor::create(id, new_donor, created);

    let value = serde_json::to_value(&donor).expect("donor serialises");

    assert_eq!(
        value,
        json!({
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "name": "Jane Doe",
            "bloodType": "O-",
            "contactType": "phone",
            "contact": "9876543210",
            "createdAt": "2024-03-01T09:30:00Z",
            "updatedAt": "2024-03-01T09:30:00Z",
        })
    );
}

#[rstest]
fn newest_first_orders_by_creation_then_id(new_donor: NewDonor, created: DateTime<Utc>) {
    let low = DonorId::from(Uuid::from_u128(1));
    let high = DonorId::from(Uuid::from_u128(2));
    let older = Donor::create(DonorId::random(), new_donor.clone(), created);
    let tied_low = Donor::create(low, new_donor.clone(), created + Duration::hours(1));
    let tied_high = Donor::create(high, new_donor, created + Duration::hours(1));

    let mut donors = vec![older.clone(), tied_low.clone(), tied_high.clone()];
    donors.sort_by(newest_first);

    assert_eq!(donors, vec![tied_high, tied_low, older]);
}
