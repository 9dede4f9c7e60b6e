//! Guild channel listing.

use crate::{
    error::AppError,
    model::{
        api::ChannelDto,
        discord::{GuildChannel, GUILD_TEXT_CHANNEL},
    },
    service::discord::DiscordApi,
};

pub struct ChannelService<'a> {
    discord_api: &'a DiscordApi,
}

impl<'a> ChannelService<'a> {
    pub fn new(discord_api: &'a DiscordApi) -> Self {
        Self { discord_api }
    }

    /// Lists the text channels of a guild, ordered for display.
    ///
    /// Issues one authenticated read, filters to text channels, sorts
    /// ascending by position (missing position sorts as 0, ties keep input
    /// order) and projects to the `{id, name}` shape the dashboard needs.
    /// A failed call is reported upward immediately; there is no retry.
    ///
    /// # Returns
    /// - `Ok(Vec<ChannelDto>)` - Text channels sorted by position
    /// - `Err(AppError::Discord)` - Discord rejected the request; status and
    ///   body are preserved verbatim
    /// - `Err(AppError::BadGateway)` - Discord answered 2xx with a body that
    ///   is not a channel list
    pub async fn list_text_channels(&self, guild_id: &str) -> Result<Vec<ChannelDto>, AppError> {
        let response = self
            .discord_api
            .get(&format!("/guilds/{}/channels", guild_id))
            .await?;

        if !response.is_success() {
            tracing::error!(
                "Discord channel fetch failed for guild {}: {} {}",
                guild_id,
                response.status,
                response.body
            );
            return Err(AppError::Discord {
                status: response.status,
                detail: response.body,
            });
        }

        let Ok(channels) = serde_json::from_str::<Vec<GuildChannel>>(&response.body) else {
            tracing::error!("Discord returned unparseable channel list: {}", response.body);
            return Err(AppError::BadGateway);
        };

        let mut text_channels: Vec<GuildChannel> = channels
            .into_iter()
            .filter(|channel| channel.kind == GUILD_TEXT_CHANNEL)
            .collect();
        text_channels.sort_by_key(|channel| channel.position.unwrap_or(0));

        Ok(text_channels
            .into_iter()
            .map(|channel| ChannelDto {
                id: channel.id,
                name: channel.name,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup_mock_api() -> (MockServer, DiscordApi) {
        let mock_server = MockServer::start().await;
        let api = DiscordApi::new(reqwest::Client::new(), "test-bot-token".to_string())
            .with_base_url(mock_server.uri());
        (mock_server, api)
    }

    /// Tests only text channels survive and come back sorted by position,
    /// with a missing position sorting as 0 and ties keeping input order.
    ///
    /// Expected: [general(no position), rules(pos 1), lounge(pos 3)]
    #[tokio::test]
    async fn filters_and_sorts_text_channels() {
        let (mock_server, api) = setup_mock_api().await;

        Mock::given(method("GET"))
            .and(path("/guilds/123/channels"))
            .and(header("Authorization", "Bot test-bot-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "30", "name": "lounge", "type": 0, "position": 3},
                {"id": "99", "name": "voice-chat", "type": 2, "position": 0},
                {"id": "10", "name": "general", "type": 0},
                {"id": "20", "name": "rules", "type": 0, "position": 1},
            ])))
            .mount(&mock_server)
            .await;

        let channels = ChannelService::new(&api)
            .list_text_channels("123")
            .await
            .unwrap();

        let names: Vec<&str> = channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["general", "rules", "lounge"]);
    }

    /// Tests a Discord rejection surfaces the status code and raw body
    /// verbatim.
    ///
    /// Expected: Err(AppError::Discord { status: 403, detail: raw body })
    #[tokio::test]
    async fn relays_discord_rejection_verbatim() {
        let (mock_server, api) = setup_mock_api().await;

        Mock::given(method("GET"))
            .and(path("/guilds/123/channels"))
            .respond_with(ResponseTemplate::new(403).set_body_string(r#"{"message": "Missing Access", "code": 50001}"#))
            .mount(&mock_server)
            .await;

        let err = ChannelService::new(&api)
            .list_text_channels("123")
            .await
            .unwrap_err();

        match err {
            AppError::Discord { status, detail } => {
                assert_eq!(status, 403);
                assert!(detail.contains("Missing Access"));
            }
            err => panic!("Expected Discord error, got: {:?}", err),
        }
    }

    /// Tests a 2xx response whose body is not a channel list classifies as a
    /// contract breach, distinct from a rejection.
    ///
    /// Expected: Err(AppError::BadGateway)
    #[tokio::test]
    async fn classifies_unparseable_body_as_bad_gateway() {
        let (mock_server, api) = setup_mock_api().await;

        Mock::given(method("GET"))
            .and(path("/guilds/123/channels"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let err = ChannelService::new(&api)
            .list_text_channels("123")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadGateway));
    }
}
