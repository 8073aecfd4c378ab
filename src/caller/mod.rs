//! # Profit Center Caller
//!
//! Fans out the requested reads against `API_PROFITCENTER_SRV`:
//!
//! - **Header** - `A_ProfitCenter` filtered by controlling area and profit
//!   center, then the header's `to_CompanyCode` and `to_Text` links.
//! - **CompanyCodeAssignment** - `A_PrftCtrCompanyCodeAssignment` with the
//!   same filter.
//! - **ProfitCenterName** - `A_ProfitCenterText` filtered by language and name.
//!
//! Each requested resource runs as its own Tokio task. A failing task logs
//! its error and stops; it never affects its siblings, and
//! [`ProfitCenterCaller::fetch_all`] waits for every task before returning.
//! Results are logged as they arrive; the returned [`FetchReport`] only says
//! which calls succeeded.

pub mod error;
pub mod report;

pub use error::*;
pub use report::*;

use crate::model::{
    CompanyCodeAssignmentRecord, HeaderRecord, ProfitCenterKey, ProfitCenterTextKey,
    RequestedResourceSet, Resource, TextRecord,
};
use odata_client::{error_detail, parse_results, Filter, Request, RequestClient, SAP_CLIENT_PARAM};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, info_span, instrument, Instrument};

/// Service root appended to the configured base URL.
pub const SERVICE_PATH: &str = "API_PROFITCENTER_SRV";

/// Reads profit center data through an injected [`RequestClient`].
///
/// Cheap to clone: clones share the client.
pub struct ProfitCenterCaller<C> {
    base_url: Arc<str>,
    sap_client: Option<Arc<str>>,
    client: Arc<C>,
}

impl<C> Clone for ProfitCenterCaller<C> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            sap_client: self.sap_client.clone(),
            client: self.client.clone(),
        }
    }
}

impl<C: RequestClient> ProfitCenterCaller<C> {
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        Self::with_shared_client(base_url, Arc::new(client))
    }

    pub fn with_shared_client(base_url: impl Into<String>, client: Arc<C>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').into(),
            sap_client: None,
            client,
        }
    }

    /// Sends `sap-client` with every entity-set query. Navigation links are
    /// still followed verbatim.
    pub fn with_sap_client(mut self, sap_client: Option<String>) -> Self {
        self.sap_client = sap_client.map(Into::into);
        self
    }

    /// `<base>/API_PROFITCENTER_SRV/<entity set>`
    pub fn entity_set_url(&self, resource: Resource) -> String {
        format!("{}/{}/{}", self.base_url, SERVICE_PATH, resource.entity_set())
    }

    /// Fetches every requested resource concurrently and waits for all of them.
    ///
    /// Never fails: errors are logged per call and listed in the report.
    #[instrument(skip_all, fields(
        controlling_area = %key.controlling_area,
        profit_center = %key.profit_center,
        requested = requested.len()
    ))]
    pub async fn fetch_all(
        &self,
        key: &ProfitCenterKey,
        text_key: &ProfitCenterTextKey,
        requested: &RequestedResourceSet,
    ) -> FetchReport {
        let mut branches = JoinSet::new();
        for resource in requested.iter() {
            let caller = self.clone();
            let key = key.clone();
            let text_key = text_key.clone();
            let span = info_span!("branch", resource = %resource);

            branches.spawn(
                async move {
                    match resource {
                        Resource::Header => caller.fetch_header(&key).await,
                        Resource::CompanyCodeAssignment => {
                            vec![caller.fetch_company_code_assignment(&key).await]
                        }
                        Resource::ProfitCenterName => {
                            vec![caller.fetch_profit_center_name(&text_key).await]
                        }
                    }
                }
                .instrument(span),
            );
        }

        let mut report = FetchReport::default();
        while let Some(joined) = branches.join_next().await {
            match joined {
                Ok(outcomes) => report.outcomes.extend(outcomes),
                Err(e) => error!(error = %e, "Branch task failed"),
            }
        }

        info!(
            calls = report.outcomes.len(),
            failed = report.failures().count(),
            "Fetch complete"
        );
        report
    }

    /// Reads the header, then follows its company-code and text links.
    ///
    /// The two follow-ups run one after the other and independently: a
    /// failure of one does not skip the other. An empty header result ends the
    /// branch.
    pub async fn fetch_header(&self, key: &ProfitCenterKey) -> Vec<CallOutcome> {
        let headers = self.get_headers(key).await.and_then(|headers| {
            if headers.is_empty() {
                Err(FetchError::EmptyHeader {
                    controlling_area: key.controlling_area.clone(),
                    profit_center: key.profit_center.clone(),
                })
            } else {
                Ok(headers)
            }
        });
        let first = headers.as_ref().ok().and_then(|h| h.first().cloned());

        let mut outcomes = vec![log_outcome(Call::Query(Resource::Header), headers)];
        let Some(header) = first else {
            return outcomes;
        };

        let assignments = match header.company_code_assignment_url() {
            Some(url) => self.follow_company_code_assignments(url).await,
            None => Err(FetchError::MissingNavigation(
                Navigation::CompanyCodeAssignment.property(),
            )),
        };
        outcomes.push(log_outcome(
            Call::Follow(Navigation::CompanyCodeAssignment),
            assignments,
        ));

        let texts = match header.text_url() {
            Some(url) => self.follow_texts(url).await,
            None => Err(FetchError::MissingNavigation(Navigation::Text.property())),
        };
        outcomes.push(log_outcome(Call::Follow(Navigation::Text), texts));

        outcomes
    }

    pub async fn fetch_company_code_assignment(&self, key: &ProfitCenterKey) -> CallOutcome {
        let result = self.get_company_code_assignments(key).await;
        log_outcome(Call::Query(Resource::CompanyCodeAssignment), result)
    }

    pub async fn fetch_profit_center_name(&self, text_key: &ProfitCenterTextKey) -> CallOutcome {
        let result = self.get_profit_center_names(text_key).await;
        log_outcome(Call::Query(Resource::ProfitCenterName), result)
    }

    pub async fn get_headers(&self, key: &ProfitCenterKey) -> Result<Vec<HeaderRecord>, FetchError> {
        self.query(Resource::Header, &key.filter()).await
    }

    pub async fn get_company_code_assignments(
        &self,
        key: &ProfitCenterKey,
    ) -> Result<Vec<CompanyCodeAssignmentRecord>, FetchError> {
        self.query(Resource::CompanyCodeAssignment, &key.filter()).await
    }

    pub async fn get_profit_center_names(
        &self,
        text_key: &ProfitCenterTextKey,
    ) -> Result<Vec<TextRecord>, FetchError> {
        self.query(Resource::ProfitCenterName, &text_key.filter()).await
    }

    /// Reads a header's company-code link verbatim.
    pub async fn follow_company_code_assignments(
        &self,
        url: &str,
    ) -> Result<Vec<CompanyCodeAssignmentRecord>, FetchError> {
        self.execute(Request::get(url)).await
    }

    /// Reads a header's text link verbatim.
    pub async fn follow_texts(&self, url: &str) -> Result<Vec<TextRecord>, FetchError> {
        self.execute(Request::get(url)).await
    }

    async fn query<T: DeserializeOwned>(
        &self,
        resource: Resource,
        filter: &Filter,
    ) -> Result<Vec<T>, FetchError> {
        let mut request = Request::get(self.entity_set_url(resource)).with_filter(filter);
        if let Some(sap_client) = &self.sap_client {
            request = request.with_query(SAP_CLIENT_PARAM, sap_client.to_string());
        }
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<Vec<T>, FetchError> {
        debug!(url = %request.url, filter = ?request.filter(), "Requesting");
        let response = self.client.send(request).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
                detail: error_detail(&response.body).unwrap_or_else(|| response.text()),
            });
        }
        Ok(parse_results(&response.body)?)
    }
}

fn log_outcome<T: Debug>(call: Call, result: Result<Vec<T>, FetchError>) -> CallOutcome {
    let result = match result {
        Ok(records) => {
            info!(%call, count = records.len(), ?records, "Fetched records");
            Ok(records.len())
        }
        Err(e) => {
            error!(%call, error = %e, "Fetch failed");
            Err(e)
        }
    };
    CallOutcome { call, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odata_client::mock::MockRequestClient;

    #[test]
    fn entity_set_url_trims_trailing_slash() {
        let caller = ProfitCenterCaller::new("https://host/odata/", MockRequestClient::new());
        assert_eq!(
            caller.entity_set_url(Resource::Header),
            "https://host/odata/API_PROFITCENTER_SRV/A_ProfitCenter"
        );
    }

    #[tokio::test]
    async fn status_error_carries_odata_message() {
        let mock = MockRequestClient::new();
        let caller = ProfitCenterCaller::new("https://host", mock.client());
        mock.expect_get(caller.entity_set_url(Resource::ProfitCenterName))
            .return_body(
                400,
                r#"{"error":{"code":"/IWBEP/CM_MGW_RT/022","message":{"lang":"en","value":"Invalid filter"}}}"#,
            );

        let result = caller
            .get_profit_center_names(&ProfitCenterTextKey::new("EN", "Finance"))
            .await;
        match result {
            Err(FetchError::Status { status, detail }) => {
                assert_eq!(status, 400);
                assert_eq!(detail, "/IWBEP/CM_MGW_RT/022: Invalid filter");
            }
            other => panic!("expected status error, got {:?}", other),
        }
        mock.verify();
    }
}
