use crate::client::{QueryParams, ServerApiClient};
use crate::error::ShopbyError;
use crate::models::display::EventDetailResponse;

/// Display (event / promotion page) endpoints of the server API.
#[derive(Debug, Clone)]
pub struct DisplayClient {
    api: ServerApiClient,
}

impl DisplayClient {
    pub fn new(api: ServerApiClient) -> Self {
        Self { api }
    }

    pub async fn get_event_detail(&self, event_no: u64) -> Result<EventDetailResponse, ShopbyError> {
        self.api
            .get(&format!("/events/{event_no}"), "1.0", QueryParams::new())
            .await
    }
}
