//! Minimal client for the Twilio Verify v2 API.
//!
//! Covers the two calls the verification workflow needs: starting an SMS
//! verification and checking a submitted code. Authentication is HTTP basic
//! with the account SID and auth token.

use std::collections::HashMap;

use reqwest::Client;
use thiserror::Error;

pub mod models;

use crate::models::{ApiErrorBody, VerificationCheckResource, VerificationResource};

const VERIFY_BASE_URL: &str = "https://verify.twilio.com/v2";

/// Credentials and the Verify service to operate against.
#[derive(Debug, Clone)]
pub struct TwilioOptions {
    pub account_sid: String,
    pub auth_token: String,
    pub service_id: String,
}

#[derive(Debug, Error)]
pub enum TwilioError {
    /// Twilio answered with a non-2xx status. `message` is Twilio's own
    /// error text when the body parsed, a generic one otherwise.
    #[error("Twilio rejected the request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never produced an HTTP response.
    #[error("request to Twilio failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Twilio answered 2xx but the body did not match the expected resource.
    #[error("unexpected Twilio response: {0}")]
    UnexpectedResponse(String),
}

#[derive(Debug, Clone)]
pub struct TwilioService {
    options: TwilioOptions,
    client: Client,
}

impl TwilioService {
    pub fn new(options: TwilioOptions) -> Self {
        Self {
            options,
            client: Client::new(),
        }
    }

    /// Ask Twilio to create a verification and text a one-time code to `to`.
    pub async fn start_verification(
        &self,
        to: &str,
    ) -> Result<VerificationResource, TwilioError> {
        let url = format!(
            "{}/Services/{}/Verifications",
            VERIFY_BASE_URL, self.options.service_id
        );

        let mut form_body: HashMap<&str, &str> = HashMap::new();
        form_body.insert("To", to);
        form_body.insert("Channel", "sms");

        let response = self
            .client
            .post(url)
            .basic_auth(&self.options.account_sid, Some(&self.options.auth_token))
            .form(&form_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::rejection(status.as_u16(), response).await);
        }

        response
            .json::<VerificationResource>()
            .await
            .map_err(|e| TwilioError::UnexpectedResponse(e.to_string()))
    }

    /// Submit a code for an in-flight verification.
    ///
    /// A wrong code is not an error at this layer: Twilio answers 200 with
    /// status `"pending"`. Expired or unknown verifications come back 404.
    pub async fn check_verification(
        &self,
        to: &str,
        code: &str,
    ) -> Result<VerificationCheckResource, TwilioError> {
        let url = format!(
            "{}/Services/{}/VerificationCheck",
            VERIFY_BASE_URL, self.options.service_id
        );

        let mut form_body: HashMap<&str, &str> = HashMap::new();
        form_body.insert("To", to);
        form_body.insert("Code", code);

        let response = self
            .client
            .post(url)
            .basic_auth(&self.options.account_sid, Some(&self.options.auth_token))
            .form(&form_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::rejection(status.as_u16(), response).await);
        }

        response
            .json::<VerificationCheckResource>()
            .await
            .map_err(|e| TwilioError::UnexpectedResponse(e.to_string()))
    }

    async fn rejection(status: u16, response: reqwest::Response) -> TwilioError {
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("Twilio returned HTTP {}", status),
        };
        TwilioError::Rejected { status, message }
    }
}
