//! investing.com HTTP 전송 계층.
//!
//! 브라우저를 흉내 내는 고정 헤더와 요청 타임아웃을 가진 클라이언트입니다.
//! 설정은 [`ProviderConfig`]로 명시적으로 전달되며 전역 클라이언트는 없습니다.

use invest_core::ProviderConfig;
use reqwest::Client;
use tracing::debug;

use crate::error::{DataError, DataResult};

/// 폼 필드 목록.
pub type FormFields = Vec<(&'static str, String)>;

/// investing.com AJAX 엔드포인트 클라이언트.
///
/// 내부 `reqwest::Client`는 커넥션 풀을 공유하므로 복제 비용이 작습니다.
/// gzip/deflate/br 응답은 `Content-Encoding`에 따라 자동으로 해제됩니다.
#[derive(Debug, Clone)]
pub struct InvestingClient {
    http: Client,
    config: ProviderConfig,
}

impl InvestingClient {
    /// 설정으로 클라이언트를 생성합니다.
    pub fn new(config: ProviderConfig) -> DataResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { http, config })
    }

    /// 클라이언트 설정.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// 폼 인코딩 POST 요청을 보내고 (압축 해제된) 본문을 반환합니다.
    ///
    /// `Accept-Encoding`은 reqwest가 직접 채웁니다. 수동으로 넣으면 자동 해제가 꺼집니다.
    pub(crate) async fn post_form(
        &self,
        path: &str,
        accept: &str,
        referer: Option<&str>,
        form: &FormFields,
    ) -> DataResult<Vec<u8>> {
        let url = self.config.endpoint(path);
        debug!(url = %url, fields = form.len(), "POST 요청");

        let mut request = self
            .http
            .post(&url)
            .form(form)
            .header("Accept", accept)
            .header("X-Requested-With", "XMLHttpRequest");
        if let Some(referer) = referer {
            request = request.header("Referer", referer);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        debug!(url = %url, bytes = body.len(), "응답 수신");

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_config() {
        let config = ProviderConfig::with_base_url("http://127.0.0.1:9");
        let client = InvestingClient::new(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
    }
}
