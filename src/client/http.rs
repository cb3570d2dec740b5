//! reqwest による multipart 送信

use super::AnalysisTransport;
use crate::config::Config;
use crate::error::{Result, RuleCheckError};
use reqwest::multipart::{Form, Part};
use rule_check_common::{
    analyze_url, interpret_response, AnalysisResult, CheckError, DocumentFile, FormPart,
    Submission, DOCUMENT_MIME,
};

pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RuleCheckError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            url: analyze_url(base_url),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl AnalysisTransport for HttpTransport {
    async fn analyze(
        &self,
        submission: &Submission<DocumentFile>,
    ) -> rule_check_common::Result<AnalysisResult> {
        let form = build_form(submission)?;

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| CheckError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CheckError::transport(e.to_string()))?;
        tracing::debug!(status, body_len = body.len(), "analysis response received");

        interpret_response(status, &body)
    }
}

fn build_form(submission: &Submission<DocumentFile>) -> rule_check_common::Result<Form> {
    let mut form = Form::new();
    for part in submission.form_parts() {
        form = match part {
            FormPart::File { name, file } => {
                let part = Part::bytes(file.bytes.clone())
                    .file_name(file.name.clone())
                    .mime_str(mime_for(&file.name))
                    .map_err(|e| CheckError::transport(e.to_string()))?;
                form.part(name, part)
            }
            FormPart::Text { name, value } => form.text(name, value.to_string()),
        };
    }
    Ok(form)
}

/// 拡張子からMIMEタイプを決める（判定はサービス側）
fn mime_for(file_name: &str) -> &'static str {
    if file_name.to_lowercase().ends_with(".pdf") {
        DOCUMENT_MIME
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for("report.PDF"), "application/pdf");
        assert_eq!(mime_for("notes.txt"), "application/octet-stream");
    }

    #[test]
    fn test_transport_url() {
        let transport = HttpTransport::new("http://localhost:8000/", &Config::default()).unwrap();
        assert_eq!(transport.url(), "http://localhost:8000/analyze");
    }
}
