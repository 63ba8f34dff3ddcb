// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dto::{AvailabilityUpdatePayload, GigPayload, GigRecord};
use gigbook_domain::{AvailabilityStatus, Gig, Phase};
use time::macros::date;

#[test]
fn test_gig_record_decodes_server_shape() {
    let json = r#"{
        "id": 2,
        "title": "Park Festival",
        "date": "2025-09-05",
        "fee": 800.0,
        "notes": "Outdoor stage.",
        "phase": "planning",
        "gent_ids": [2, 4]
    }"#;

    let record: GigRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id, 2);
    assert_eq!(record.date, date!(2025 - 09 - 05));
    assert_eq!(record.phase, Phase::Planning);
    assert_eq!(record.gent_ids, vec![2, 4]);
}

#[test]
fn test_gig_record_converts_to_persisted_gig() {
    let record = GigRecord {
        id: 5,
        title: String::from("Summer Gala"),
        date: date!(2025 - 08 - 24),
        fee: 1200.0,
        notes: String::from("Black tie."),
        phase: Phase::Booked,
        gent_ids: vec![1, 3],
    };

    let gig: Gig = record.into();
    assert_eq!(gig.id, Some(5));
    assert!(!gig.is_draft());
    assert_eq!(gig.phase, Phase::Booked);
}

#[test]
fn test_gig_record_decode_fails_on_malformed_body() {
    let result: Result<GigRecord, _> = serde_json::from_str(r#"{"id": "not-a-number"}"#);
    assert!(result.is_err());
}

#[test]
fn test_payload_carries_every_editable_field() {
    let mut draft: Gig = Gig::draft(Some(7));
    draft.title = String::from("Private Party");
    draft.date = date!(2025 - 09 - 12);
    draft.fee = 1500.0;
    draft.notes = String::from("Cash");

    let payload: GigPayload = GigPayload::from_gig(&draft);
    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["title"], "Private Party");
    assert_eq!(value["date"], "2025-09-12");
    assert_eq!(value["fee"], 1500.0);
    assert_eq!(value["notes"], "Cash");
    assert_eq!(value["phase"], "planning");
    assert_eq!(value["gent_ids"][0], 7);
    // No id: the server assigns it on create, the URL names it on update.
    assert!(value.get("id").is_none());
}

#[test]
fn test_availability_payload_uses_wire_status_names() {
    let payload = AvailabilityUpdatePayload {
        gent_id: 7,
        status: AvailabilityStatus::NoReply,
    };
    let json = serde_json::to_string(&payload).unwrap();
    assert_eq!(json, r#"{"gent_id":7,"status":"no_reply"}"#);
}
