//! Donor service client.
//!
//! [`DonorApi`] is the port the console drives; [`HttpDonorApi`] implements
//! it over the service's REST surface with `reqwest`. Filtered loads use the
//! path form `/donors/bloodtype/{type}` so `+` never passes through a query
//! string.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use donor_schema::{BloodType, ContactType};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Failures talking to the donor service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("donor service unreachable: {message}")]
    Transport {
        /// Transport error text.
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("donor service returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `message` from the error body, or the status reason.
        message: String,
    },

    /// The response body was not the expected JSON.
    #[error("unexpected donor service response: {message}")]
    Decode {
        /// Decoder error text.
        message: String,
    },
}

impl ApiError {
    fn transport(error: &reqwest::Error) -> Self {
        Self::Transport {
            message: error.to_string(),
        }
    }

    fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Donor record as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorRecord {
    /// Stable identifier assigned by the service.
    pub id: Uuid,
    /// Donor's full name.
    pub name: String,
    /// ABO/Rh group.
    pub blood_type: BloodType,
    /// Contact channel.
    pub contact_type: ContactType,
    /// Phone number or email address.
    pub contact: String,
    /// Insert time.
    pub created_at: DateTime<Utc>,
    /// Last mutation time.
    pub updated_at: DateTime<Utc>,
}

/// Body sent to create or overwrite a donor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorInput {
    /// Donor's full name.
    pub name: String,
    /// ABO/Rh group.
    pub blood_type: BloodType,
    /// Contact channel.
    pub contact_type: ContactType,
    /// Phone number or email address.
    pub contact: String,
}

/// Donor counts as returned by `GET /stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRecord {
    /// Number of donors.
    pub total: u64,
    /// Count per blood type.
    #[serde(default)]
    pub blood_types: BTreeMap<BloodType, u64>,
}

impl StatsRecord {
    /// Count for `blood_type`, zero when the service omitted it.
    #[must_use]
    pub fn count(&self, blood_type: BloodType) -> u64 {
        self.blood_types.get(&blood_type).copied().unwrap_or(0)
    }
}

#[derive(Deserialize)]
struct DeleteResponse {
    donor: DonorRecord,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Operations the console needs from the donor service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonorApi: Send + Sync {
    /// Fetch donors newest first, optionally restricted to one blood type.
    async fn list_donors(
        &self,
        blood_type: Option<BloodType>,
    ) -> Result<Vec<DonorRecord>, ApiError>;

    /// Create a donor.
    async fn add_donor(&self, donor: &DonorInput) -> Result<DonorRecord, ApiError>;

    /// Overwrite the donor with `id`.
    async fn update_donor(&self, id: Uuid, donor: &DonorInput) -> Result<DonorRecord, ApiError>;

    /// Remove the donor with `id`, returning its last state.
    async fn delete_donor(&self, id: Uuid) -> Result<DonorRecord, ApiError>;

    /// Fetch the donor counts.
    async fn stats(&self) -> Result<StatsRecord, ApiError>;
}

/// [`DonorApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDonorApi {
    client: Client,
    base_url: Url,
}

impl HttpDonorApi {
    /// Build a client for the service rooted at `base_url` (for example
    /// `http://localhost:3000/api`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::transport(&e))?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::decode(format!("`{}` cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("request failed");
        let message = response
            .json::<ErrorBody>()
            .await
            .map_or_else(|_| reason.to_owned(), |body| body.message);
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::decode(e.to_string()))
}

#[async_trait]
impl DonorApi for HttpDonorApi {
    async fn list_donors(
        &self,
        blood_type: Option<BloodType>,
    ) -> Result<Vec<DonorRecord>, ApiError> {
        let url = match blood_type {
            Some(blood_type) => self.endpoint(&["donors", "bloodtype", blood_type.as_str()])?,
            None => self.endpoint(&["donors"])?,
        };
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::transport(&e))?;
        decode(response).await
    }

    async fn add_donor(&self, donor: &DonorInput) -> Result<DonorRecord, ApiError> {
        let response = self
            .client
            .post(self.endpoint(&["donors"])?)
            .json(donor)
            .send()
            .await
            .map_err(|e| ApiError::transport(&e))?;
        decode(response).await
    }

    async fn update_donor(&self, id: Uuid, donor: &DonorInput) -> Result<DonorRecord, ApiError> {
        let id = id.to_string();
        let response = self
            .client
            .put(self.endpoint(&["donors", &id])?)
            .json(donor)
            .send()
            .await
            .map_err(|e| ApiError::transport(&e))?;
        decode(response).await
    }

    async fn delete_donor(&self, id: Uuid) -> Result<DonorRecord, ApiError> {
        let id = id.to_string();
        let response = self
            .client
            .delete(self.endpoint(&["donors", &id])?)
            .send()
            .await
            .map_err(|e| ApiError::transport(&e))?;
        decode::<DeleteResponse>(response)
            .await
            .map(|body| body.donor)
    }

    async fn stats(&self) -> Result<StatsRecord, ApiError> {
        let response = self
            .client
            .get(self.endpoint(&["stats"])?)
            .send()
            .await
            .map_err(|e| ApiError::transport(&e))?;
        decode(response).await
    }
}
