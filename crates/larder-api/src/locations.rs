// Location lookup endpoint
//
// `GET /locations?zipcode={zip}&filterLimit={n}` returns the stores of the
// configured chain nearest to a zip code.

use tracing::debug;

use crate::client::CatalogClient;
use crate::error::Error;
use crate::models::{ApiLocation, LocationsResponse};

impl CatalogClient {
    /// List up to `limit` locations near `zip_code`.
    ///
    /// The zip code must be exactly five digits; anything else is rejected
    /// before a request is made.
    pub async fn get_locations(&self, zip_code: &str, limit: u32) -> Result<Vec<ApiLocation>, Error> {
        validate_zip_code(zip_code)?;
        if limit == 0 {
            return Err(Error::InvalidParameter {
                name: "filterLimit",
                reason: "must be at least 1".into(),
            });
        }

        let url = self.endpoint_url(
            "locations",
            &[("zipcode", zip_code.to_owned()), ("filterLimit", limit.to_string())],
        )?;
        debug!(zip_code, limit, "listing locations");

        let resp: LocationsResponse = self.get(url).await?;
        Ok(resp.data)
    }
}

/// Check that `zip_code` is a five-digit US zip code.
pub fn validate_zip_code(zip_code: &str) -> Result<(), Error> {
    if zip_code.len() == 5 && zip_code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name: "zipcode",
            reason: format!("'{zip_code}' is not a 5-digit zip code"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_five_digits() {
        assert!(validate_zip_code("97224").is_ok());
    }

    #[test]
    fn rejects_malformed_zip_codes() {
        for zip in ["", "9722", "972245", "97a24", "９７２２４"] {
            assert!(validate_zip_code(zip).is_err(), "{zip:?} should be rejected");
        }
    }
}
