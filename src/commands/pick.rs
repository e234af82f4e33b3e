use reqwest::Client;

use crate::config::Config;
use crate::duration::TimeWindow;
use crate::error::{Error, Result};
use crate::filter::{Candidates, find_candidates};
use crate::picker::{Pick, choose, is_reachable, open_in_browser};
use crate::youtube::YouTube;

/// Collect every upload of the configured channel that fits in `minutes`
pub async fn collect_candidates(config: &Config, minutes: u32) -> Result<Candidates> {
    let youtube = YouTube::new(config)?;

    eprintln!("Looking up channel: {}", config.channel);
    let uploads = youtube.uploads_playlist_id(&config.channel).await?;

    let video_ids = youtube.playlist_video_ids(&uploads).await?;
    eprintln!("Found {} upload(s)", video_ids.len());

    let window = TimeWindow::for_budget(minutes);
    let candidates = find_candidates(&youtube, &video_ids, window).await?;
    eprintln!(
        "{} video(s) between {} and {} minutes",
        candidates.len(),
        window.lower,
        window.upper
    );

    Ok(candidates)
}

/// Pick a random video that fits in `minutes`
pub async fn pick_video(config: &Config, minutes: u32) -> Result<Pick> {
    let candidates = collect_candidates(config, minutes).await?;
    choose(&candidates, &mut rand::rng()).ok_or(Error::NoMatchingVideo { minutes })
}

pub async fn run(config: &Config, minutes: u32) -> Result<()> {
    let pick = pick_video(config, minutes).await?;
    let url = pick.url();
    eprintln!("Picked a {} minute video", pick.minutes);

    if !is_reachable(&Client::new(), &url).await {
        eprintln!("Video {} is not reachable, not opening it", url);
        return Ok(());
    }

    println!("{}", url);
    open_in_browser(&url)
}
