pub mod error;

pub use error::{Error, Result};
pub use http::StatusCode;

use core::future::Future;
use http::{
    header::{ACCEPT, CONTENT_TYPE},
    Request, Uri,
};
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client as HttpClient},
    rt::TokioExecutor,
};
use model::{Ack, Choice, OptionId, Question, Survey, SurveyId, SurveyResult, Vote};
use serde::{de::DeserializeOwned, Serialize};

pub const APPLICATION_JSON: &str = "application/json";

/// Operations offered by the survey service, one HTTP request each.
pub trait Remote {
    /// Submits a new survey. The server assigns the survey ID.
    fn create_survey(&self, survey: &Survey) -> impl Future<Output = Result<Ack>> + Send;
    /// Submits a new question under an already-created survey.
    fn create_question(&self, question: &Question) -> impl Future<Output = Result<Ack>> + Send;
    /// Submits a new option under an already-created question.
    fn create_option(&self, option: &Choice) -> impl Future<Output = Result<Ack>> + Send;
    /// Increments the vote count of an option by exactly one.
    fn vote(&self, option: OptionId) -> impl Future<Output = Result<Ack>> + Send;
    /// Retrieves the current tallies of every question in a survey.
    fn fetch_results(&self, survey: SurveyId) -> impl Future<Output = Result<Vec<SurveyResult>>> + Send;
    /// Lists every survey. Nested questions are not guaranteed to be present.
    fn fetch_all_surveys(&self) -> impl Future<Output = Result<Vec<Survey>>> + Send;
    fn fetch_survey(&self, survey: SurveyId) -> impl Future<Output = Result<Survey>> + Send;
}

/// HTTP client bound to a single survey service.
#[derive(Clone)]
pub struct Client {
    base: Box<str>,
    http: HttpClient<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl Client {
    /// Binds a client to the service at `base` (e.g. `http://localhost:8080`).
    /// Both `http` and `https` are accepted.
    pub fn new(base: &str) -> Result<Self> {
        let base = base.trim_end_matches('/');
        let uri: Uri = base.parse()?;
        let (Some(scheme), Some(_)) = (uri.scheme_str(), uri.authority()) else {
            return Err(Error::NotAbsolute);
        };
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(Error::UnsupportedScheme(scheme.into()));
        }

        let https = HttpsConnectorBuilder::new().with_webpki_roots().https_or_http().enable_http1().build();
        let http = HttpClient::builder(TokioExecutor::new()).build(https);
        Ok(Self { base: base.into(), http })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Uri> {
        let uri = [self.base.as_ref(), path].concat().parse()?;
        Ok(uri)
    }

    async fn send<T>(&self, req: Request<Full<Bytes>>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        log::debug!("{} {}", req.method(), req.uri());
        let res = self.http.request(req).await?;
        let status = res.status();
        let bytes = res.into_body().collect().await?.to_bytes();
        log::trace!("{status}: {}", String::from_utf8_lossy(&bytes));

        if !status.is_success() {
            return Err(Error::Status(status));
        }

        serde_json::from_slice(&bytes).map_err(Error::Decode)
    }

    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let uri = self.endpoint(path)?;
        let req = Request::get(uri).header(ACCEPT, APPLICATION_JSON).body(Full::new(Bytes::new()))?;
        self.send(req).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let uri = self.endpoint(path)?;
        let payload = serde_json::to_vec(body).map_err(Error::Encode)?;
        log::trace!("{}", String::from_utf8_lossy(&payload));
        let req = Request::post(uri)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .body(Full::new(Bytes::from(payload)))?;
        self.send(req).await
    }
}

impl Remote for Client {
    async fn create_survey(&self, survey: &Survey) -> Result<Ack> {
        self.post("/add_survey", survey).await
    }

    async fn create_question(&self, question: &Question) -> Result<Ack> {
        self.post("/add_question", question).await
    }

    async fn create_option(&self, option: &Choice) -> Result<Ack> {
        self.post("/add_option", option).await
    }

    async fn vote(&self, option: OptionId) -> Result<Ack> {
        self.post("/vote_option", &Vote { option }).await
    }

    async fn fetch_results(&self, survey: SurveyId) -> Result<Vec<SurveyResult>> {
        self.get(&format!("/survey_results/{survey}")).await
    }

    async fn fetch_all_surveys(&self) -> Result<Vec<Survey>> {
        self.get("/read_data").await
    }

    async fn fetch_survey(&self, survey: SurveyId) -> Result<Survey> {
        self.get(&format!("/read_survey/{survey}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::{Client, Error};

    #[test]
    fn accepts_absolute_base_url() {
        let client = Client::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.endpoint("/read_data").unwrap(), "http://localhost:8080/read_data");
    }

    #[test]
    fn keeps_base_path_prefix() {
        let client = Client::new("http://example.com/api").unwrap();
        assert_eq!(client.endpoint("/read_survey/7").unwrap(), "http://example.com/api/read_survey/7");
    }

    #[test]
    fn rejects_relative_base_url() {
        assert!(matches!(Client::new("/api"), Err(Error::NotAbsolute)));
        assert!(matches!(Client::new("localhost"), Err(Error::NotAbsolute)));
    }

    #[test]
    fn accepts_https_base_url() {
        let client = Client::new("https://surveys.example.com").unwrap();
        assert_eq!(client.endpoint("/read_data").unwrap(), "https://surveys.example.com/read_data");
    }

    #[test]
    fn rejects_unsupported_scheme() {
        assert!(matches!(Client::new("ftp://surveys.example.com"), Err(Error::UnsupportedScheme(s)) if &*s == "ftp"));
        assert!(matches!(Client::new("ws://localhost:8080"), Err(Error::UnsupportedScheme(_))));
    }

    #[test]
    fn rejects_malformed_base_url() {
        assert!(matches!(Client::new("http://exa mple.com"), Err(Error::Uri(_))));
    }
}
