use std::collections::HashMap;

use tracing::debug;

use crate::duration::{TimeWindow, to_minutes};
use crate::error::Result;
use crate::youtube::{MAX_RESULTS, VideoDuration, YouTube};

/// Video id -> length in whole minutes, for videos that fit the window
pub type Candidates = HashMap<String, u32>;

/// Add every video whose decoded length falls inside `window`
pub fn retain_in_window(videos: &[VideoDuration], window: TimeWindow, candidates: &mut Candidates) {
    for video in videos {
        let minutes = to_minutes(&video.duration);
        if window.contains(minutes) {
            candidates.insert(video.id.clone(), minutes);
        }
    }
}

/// Look up durations in batches of 50 and keep the videos that fit `window`
pub async fn find_candidates(
    youtube: &YouTube,
    video_ids: &[String],
    window: TimeWindow,
) -> Result<Candidates> {
    let mut candidates = Candidates::new();

    for batch in video_ids.chunks(MAX_RESULTS) {
        let durations = youtube.video_durations(batch).await?;
        retain_in_window(&durations, window, &mut candidates);
        debug!(batch = batch.len(), candidates = candidates.len(), "duration batch");
    }

    Ok(candidates)
}
