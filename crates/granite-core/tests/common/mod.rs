#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use granite_core::catalog::{Material, MaterialDraft, MaterialStatus};
use granite_core::viewer::{ImageList, ViewerSession};
use time::macros::datetime;
use time::OffsetDateTime;

/// Image list of `n` locators named `img-0.jpg`, `img-1.jpg`, ...
pub fn images(n: usize) -> ImageList {
    ImageList::new((0..n).map(|i| format!("img-{i}.jpg"))).unwrap()
}

/// Open a session and return it with a counter of close-callback invocations.
pub fn open_session(n: usize, initial: usize) -> (ViewerSession, Rc<Cell<usize>>) {
    let closed = Rc::new(Cell::new(0));
    let counter = closed.clone();
    let session = ViewerSession::open(images(n), initial, move || counter.set(counter.get() + 1))
        .unwrap();
    (session, closed)
}

pub fn draft(factory: &str, rate: &str) -> MaterialDraft {
    MaterialDraft {
        factory_name: factory.into(),
        owner_name: "R. Owner".into(),
        owner_phone: "+91 98000 00000".into(),
        rate: rate.into(),
        description: String::new(),
        notes: String::new(),
        status: MaterialStatus::Available,
    }
}

pub fn material(id: &str, factory: &str, status: MaterialStatus, photos: usize, created_at: OffsetDateTime) -> Material {
    Material {
        id: id.into(),
        factory_name: factory.into(),
        owner_name: "Owner".into(),
        owner_phone: String::new(),
        rate: 120.0,
        images: (0..photos).map(|i| format!("photos/{id}-{i}.jpg")).collect(),
        status,
        created_at,
        updated_at: created_at,
        created_by: "admin".into(),
        description: None,
        notes: None,
    }
}

/// Three listings from two factories, created on consecutive days.
pub fn sample_catalog() -> Vec<Material> {
    vec![
        material("mat-0001", "Rajasthan Stone Works", MaterialStatus::Available, 2, datetime!(2024-03-01 10:00 UTC)),
        material("mat-0002", "Deccan Granites", MaterialStatus::Sold, 3, datetime!(2024-03-02 10:00 UTC)),
        material("mat-0003", "Rajasthan Stone Works", MaterialStatus::Available, 0, datetime!(2024-03-03 10:00 UTC)),
    ]
}
