use reqwest::Client as HttpClient;
use url::Url;

use crate::app::AppConfig;
use crate::error::{AppError, Result};

/// Builds and downloads initials avatars. The endpoint is treated as
/// opaque; only the seed varies between requests.
#[derive(Debug, Clone)]
pub struct AvatarClient {
    http: HttpClient,
    base: Url,
}

impl AvatarClient {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let base = Url::parse(&format!(
            "{}/{}",
            config.avatar_endpoint.trim_end_matches('/'),
            config.avatar_format
        ))?;
        let http = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()?;
        Ok(Self { http, base })
    }

    pub fn url_for(&self, seed: &str) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut().clear().append_pair("seed", seed);
        url
    }

    pub async fn fetch(&self, seed: &str) -> Result<Vec<u8>> {
        let resp = self.http.get(self.url_for(seed)).send().await?;
        if !resp.status().is_success() {
            return Err(AppError::Status(resp.status().as_u16()));
        }
        Ok(resp.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AvatarClient {
        AvatarClient::from_config(&AppConfig::default()).unwrap()
    }

    #[test]
    fn url_is_keyed_by_seed() {
        assert_eq!(
            client().url_for("AS").as_str(),
            "https://api.dicebear.com/7.x/initials/png?seed=AS"
        );
    }

    #[test]
    fn seed_is_query_encoded() {
        assert_eq!(
            client().url_for("Pizza Hub&co").query(),
            Some("seed=Pizza+Hub%26co")
        );
    }

    #[test]
    fn trailing_slash_on_endpoint_is_tolerated() {
        let config = AppConfig {
            avatar_endpoint: "https://avatars.example.com/initials/".into(),
            avatar_format: "svg".into(),
            ..AppConfig::default()
        };
        let client = AvatarClient::from_config(&config).unwrap();
        assert_eq!(
            client.url_for("dribbble").as_str(),
            "https://avatars.example.com/initials/svg?seed=dribbble"
        );
    }

    #[test]
    fn bad_endpoint_is_reported() {
        let config = AppConfig { avatar_endpoint: "not a url".into(), ..AppConfig::default() };
        assert!(matches!(AvatarClient::from_config(&config), Err(AppError::AvatarUrl(_))));
    }
}
