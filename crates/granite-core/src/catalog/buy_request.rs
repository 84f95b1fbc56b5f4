use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;

use crate::consts::{BUY_REQUEST_ID_PREFIX, WHATSAPP_BASE_URL};
use crate::error::{GraniteError, Result};

use super::material::Material;
use super::snapshot;

/// Contact details of the buyer sending a request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerProfile {
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl BuyerProfile {
    /// Display name, falling back to the company name.
    pub fn contact_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.company_name.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuyRequestStatus {
    #[default]
    Pending,
    Contacted,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuyRequest {
    pub id: String,
    pub material_id: String,
    pub buyer_email: String,
    pub buyer_name: String,
    pub buyer_phone: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub status: BuyRequestStatus,
}

/// Text handed to the messaging app for a buy request.
pub fn compose_message(material: &Material, buyer: &BuyerProfile) -> String {
    format!(
        "New Buy Request!\n\nMaterial: {}\nBuyer: {}\nPhone: {}\nEmail: {}",
        material.factory_name,
        buyer.contact_name(),
        buyer.phone.as_deref().unwrap_or_default(),
        buyer.email,
    )
}

/// Chat deep link to `number` with `text` pre-filled.
pub fn whatsapp_link(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("{WHATSAPP_BASE_URL}/{digits}?text={}", encode_uri_component(text))
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_uri_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// Buy requests, mirrored to a JSON snapshot file when one is configured.
///
/// A request is recorded before its deep link is handed out; delivery of the
/// chat message is never confirmed.
#[derive(Debug, Default)]
pub struct BuyRequestLog {
    path: Option<PathBuf>,
    requests: Vec<BuyRequest>,
}

impl BuyRequestLog {
    /// Log without a backing file.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the requests stored at `path`; a missing file starts an empty log.
    pub fn open(path: &Path) -> Result<Self> {
        let requests: Vec<BuyRequest> = snapshot::read_rows(path)?;
        info!(path = %path.display(), requests = requests.len(), "buy request log opened");
        Ok(Self {
            path: Some(path.to_path_buf()),
            requests,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Record a request for `material` and return it with the deep link to open.
    ///
    /// No link is returned unless the request has been stored.
    pub fn submit(
        &mut self,
        material: &Material,
        buyer: &BuyerProfile,
        number: &str,
    ) -> Result<(BuyRequest, String)> {
        if !material.is_available() {
            return Err(GraniteError::InvalidMaterial(format!(
                "{} is already sold",
                material.id
            )));
        }
        if buyer.email.trim().is_empty() {
            return Err(GraniteError::InvalidMaterial(
                "buyer email is required".into(),
            ));
        }

        let seq = snapshot::next_sequence(
            self.requests.iter().map(|r| r.id.as_str()),
            BUY_REQUEST_ID_PREFIX,
        );
        let request = BuyRequest {
            id: format!("{BUY_REQUEST_ID_PREFIX}-{seq:04}"),
            material_id: material.id.clone(),
            buyer_email: buyer.email.clone(),
            buyer_name: buyer.contact_name().to_string(),
            buyer_phone: buyer.phone.clone(),
            timestamp: OffsetDateTime::now_utc(),
            status: BuyRequestStatus::Pending,
        };

        let mut requests = self.requests.clone();
        requests.push(request.clone());
        if let Some(path) = &self.path {
            snapshot::write_rows(path, &requests)?;
        }
        self.requests = requests;

        let link = whatsapp_link(number, &compose_message(material, buyer));
        info!(request = %request.id, material = %material.id, "buy request recorded");
        Ok((request, link))
    }

    pub fn requests(&self) -> &[BuyRequest] {
        &self.requests
    }
}
