use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

/// Largest page / id batch the Data API accepts
pub const MAX_RESULTS: usize = 50;

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChannelItem {
    #[serde(rename = "contentDetails")]
    content_details: ChannelContentDetails,
}

#[derive(Debug, Deserialize)]
struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
struct RelatedPlaylists {
    uploads: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    #[serde(rename = "contentDetails")]
    content_details: PlaylistItemDetails,
}

#[derive(Debug, Deserialize)]
struct PlaylistItemDetails {
    #[serde(rename = "videoId")]
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    #[serde(rename = "contentDetails")]
    content_details: VideoContentDetails,
}

#[derive(Debug, Deserialize)]
struct VideoContentDetails {
    #[serde(default)]
    duration: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Video id with its raw `contentDetails.duration` string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDuration {
    pub id: String,
    pub duration: String,
}

/// YouTube Data API v3 client
pub struct YouTube {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTube {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("yt-yoga/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.api_base_url.clone(),
        })
    }

    /// GET `{base}/{endpoint}` with the API key attached and decode the body
    async fn get<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?params, "YouTube API request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Prefer the message from YouTube's error envelope when there is one
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| Error::MalformedResponse(format!("{}: {}", endpoint, e)))
    }

    /// Resolve a channel's legacy username to its uploads playlist id
    pub async fn uploads_playlist_id(&self, channel: &str) -> Result<String> {
        let response: ListResponse<ChannelItem> = self
            .get(
                "channels",
                &[("part", "contentDetails"), ("forUsername", channel)],
            )
            .await?;

        response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.content_details.related_playlists.uploads)
            .ok_or_else(|| Error::ChannelNotFound(channel.to_string()))
    }

    /// Follow `nextPageToken` through a playlist and collect every video id in order
    pub async fn playlist_video_ids(&self, playlist_id: &str) -> Result<Vec<String>> {
        let max_results = MAX_RESULTS.to_string();
        let mut video_ids = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut params = vec![
                ("part", "contentDetails"),
                ("playlistId", playlist_id),
                ("maxResults", max_results.as_str()),
            ];
            if let Some(token) = page_token.as_deref() {
                params.push(("pageToken", token));
            }

            let page: ListResponse<PlaylistItem> = self.get("playlistItems", &params).await?;
            debug!(items = page.items.len(), "playlist page");

            video_ids.extend(page.items.into_iter().map(|item| item.content_details.video_id));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(video_ids)
    }

    /// Fetch durations for up to [`MAX_RESULTS`] videos in one request
    pub async fn video_durations(&self, ids: &[String]) -> Result<Vec<VideoDuration>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = ids.join(",");
        let response: ListResponse<VideoItem> = self
            .get("videos", &[("part", "contentDetails"), ("id", joined.as_str())])
            .await?;

        Ok(response
            .items
            .into_iter()
            .map(|item| VideoDuration {
                id: item.id,
                duration: item.content_details.duration,
            })
            .collect())
    }
}
