mod common;

use granite_core::catalog::buy_request::{compose_message, encode_uri_component, whatsapp_link};
use granite_core::catalog::{BuyRequestLog, BuyRequestStatus, BuyerProfile, MaterialStatus};
use granite_core::error::GraniteError;

use common::sample_catalog;

fn buyer() -> BuyerProfile {
    BuyerProfile {
        email: "ops@builders.in".into(),
        display_name: None,
        company_name: Some("Sharma Builders".into()),
        phone: Some("+91 99999 11111".into()),
    }
}

#[test]
fn test_contact_name_prefers_display_name() {
    let mut b = buyer();
    assert_eq!(b.contact_name(), "Sharma Builders");
    b.display_name = Some("Anil".into());
    assert_eq!(b.contact_name(), "Anil");
    b.display_name = Some(String::new());
    assert_eq!(b.contact_name(), "Sharma Builders");
    b.company_name = None;
    assert_eq!(b.contact_name(), "");
}

#[test]
fn test_compose_message_layout() {
    let material = &sample_catalog()[0];
    let text = compose_message(material, &buyer());
    assert_eq!(
        text,
        "New Buy Request!\n\nMaterial: Rajasthan Stone Works\nBuyer: Sharma Builders\nPhone: +91 99999 11111\nEmail: ops@builders.in"
    );
}

#[test]
fn test_encode_uri_component_matches_browser() {
    assert_eq!(encode_uri_component("a b\nc"), "a%20b%0Ac");
    assert_eq!(encode_uri_component("x@y.com"), "x%40y.com");
    assert_eq!(encode_uri_component("+91"), "%2B91");
    assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
    assert_eq!(encode_uri_component("\u{20b9}"), "%E2%82%B9");
}

#[test]
fn test_whatsapp_link_strips_non_digits() {
    let link = whatsapp_link("+91 98765-43210", "Hi there");
    assert_eq!(link, "https://wa.me/919876543210?text=Hi%20there");
}

#[test]
fn test_submit_records_pending_request() {
    let material = &sample_catalog()[0];
    let mut log = BuyRequestLog::in_memory();
    let (request, link) = log.submit(material, &buyer(), "919876543210").unwrap();

    assert_eq!(request.id, "req-0001");
    assert_eq!(request.material_id, material.id);
    assert_eq!(request.buyer_name, "Sharma Builders");
    assert_eq!(request.status, BuyRequestStatus::Pending);
    assert!(link.starts_with("https://wa.me/919876543210?text=New%20Buy%20Request!"));
    assert_eq!(log.requests().len(), 1);
}

#[test]
fn test_sold_material_rejects_requests() {
    let material = &sample_catalog()[1];
    assert_eq!(material.status, MaterialStatus::Sold);
    let mut log = BuyRequestLog::in_memory();
    let result = log.submit(material, &buyer(), "1");
    assert!(matches!(result, Err(GraniteError::InvalidMaterial(_))));
    assert!(log.requests().is_empty());
}

#[test]
fn test_request_requires_buyer_email() {
    let material = &sample_catalog()[0];
    let mut anonymous = buyer();
    anonymous.email.clear();
    assert!(BuyRequestLog::in_memory().submit(material, &anonymous, "1").is_err());
}

#[test]
fn test_requests_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("buy_requests.json");
    let material = &sample_catalog()[0];

    {
        let mut log = BuyRequestLog::open(&path).unwrap();
        assert!(log.requests().is_empty());
        let (first, _) = log.submit(material, &buyer(), "1").unwrap();
        assert_eq!(first.id, "req-0001");
    }
    assert!(path.exists());

    let mut reopened = BuyRequestLog::open(&path).unwrap();
    assert_eq!(reopened.requests().len(), 1);
    assert_eq!(reopened.requests()[0].material_id, material.id);
    assert_eq!(reopened.requests()[0].buyer_email, "ops@builders.in");

    // Ids continue after the highest stored request.
    let (second, _) = reopened.submit(material, &buyer(), "1").unwrap();
    assert_eq!(second.id, "req-0002");
    assert_eq!(BuyRequestLog::open(&path).unwrap().requests().len(), 2);
}

#[test]
fn test_unstored_request_returns_no_link() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the log's parent directory should be.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let material = &sample_catalog()[0];

    let mut log = BuyRequestLog::open(&blocker.join("buy_requests.json")).unwrap();
    let result = log.submit(material, &buyer(), "1");
    assert!(matches!(result, Err(GraniteError::Io(_))));
    assert!(log.requests().is_empty());
}
