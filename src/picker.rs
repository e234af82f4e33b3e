use std::process::{Command, Stdio};

use rand::Rng;
use rand::seq::IteratorRandom;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::filter::Candidates;

pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Chosen video and its length in minutes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub video_id: String,
    pub minutes: u32,
}

impl Pick {
    pub fn url(&self) -> String {
        watch_url(&self.video_id)
    }
}

pub fn watch_url(video_id: &str) -> String {
    format!("{}{}", WATCH_URL_PREFIX, video_id)
}

/// Pick one candidate uniformly at random; `None` when there are none
pub fn choose<R: Rng + ?Sized>(candidates: &Candidates, rng: &mut R) -> Option<Pick> {
    candidates
        .iter()
        .choose(rng)
        .map(|(id, minutes)| Pick {
            video_id: id.clone(),
            minutes: *minutes,
        })
}

/// Single GET against `url`; true only for a 200 response
pub async fn is_reachable(client: &Client, url: &str) -> bool {
    match client.get(url).send().await {
        Ok(response) if response.status() == reqwest::StatusCode::OK => true,
        Ok(response) => {
            warn!(%url, status = %response.status(), "video page returned non-success status");
            false
        }
        Err(e) => {
            warn!(%url, error = %e, "video page request failed");
            false
        }
    }
}

/// One command per `:`-separated `$BROWSER` entry; `%s` marks where the URL goes
fn browser_commands(url: &str, browser: &str) -> Vec<Command> {
    browser
        .split(':')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let mut parts = entry.split_whitespace();
            let mut cmd = Command::new(parts.next()?);
            let mut has_placeholder = false;
            for part in parts {
                if part.contains("%s") {
                    has_placeholder = true;
                    cmd.arg(part.replace("%s", url));
                } else {
                    cmd.arg(part);
                }
            }
            if !has_placeholder {
                cmd.arg(url);
            }
            Some(cmd)
        })
        .collect()
}

/// The desktop's own URL opener
fn system_opener(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

fn quiet(cmd: &mut Command) -> &mut Command {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
}

/// Start the first `$BROWSER` entry that launches, without waiting for it to exit.
/// Falls back to the system opener when no entry is set or none can be started.
fn launch(url: &str, browser: Option<&str>) -> Result<()> {
    for mut cmd in browser_commands(url, browser.unwrap_or_default()) {
        debug!(?cmd, "launching browser");
        match quiet(&mut cmd).spawn() {
            Ok(_) => return Ok(()),
            Err(e) => debug!(error = %e, "browser entry failed to start"),
        }
    }

    let mut cmd = system_opener(url);
    debug!(?cmd, "launching system opener");

    let status = quiet(&mut cmd)
        .status()
        .map_err(|e| Error::Browser(e.to_string()))?;

    if !status.success() {
        return Err(Error::Browser(format!("browser command exited with {}", status)));
    }

    Ok(())
}

/// Open `url` in the default browser, honouring `$BROWSER` when set
pub fn open_in_browser(url: &str) -> Result<()> {
    let browser = std::env::var("BROWSER").ok();
    launch(url, browser.as_deref())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(watch_url("abc123"), "https://www.youtube.com/watch?v=abc123");
    }

    fn program_and_args(cmd: &Command) -> (String, Vec<String>) {
        (
            cmd.get_program().to_string_lossy().to_string(),
            cmd.get_args().map(|a| a.to_string_lossy().to_string()).collect(),
        )
    }

    #[test]
    fn test_browser_list() {
        let url = "https://www.youtube.com/watch?v=abc";
        let cmds = browser_commands(url, "firefox:chromium --new-window");

        assert_eq!(cmds.len(), 2);
        assert_eq!(program_and_args(&cmds[0]), ("firefox".to_string(), vec![url.to_string()]));
        assert_eq!(
            program_and_args(&cmds[1]),
            (
                "chromium".to_string(),
                vec!["--new-window".to_string(), url.to_string()]
            )
        );
    }

    #[test]
    fn test_browser_placeholder_and_blanks() {
        let url = "https://www.youtube.com/watch?v=abc";
        let cmds = browser_commands(url, "::lynx -dump %s: ");

        assert_eq!(cmds.len(), 1);
        assert_eq!(
            program_and_args(&cmds[0]),
            ("lynx".to_string(), vec!["-dump".to_string(), url.to_string()])
        );
        assert!(browser_commands(url, "").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_skips_missing_browser() {
        let result = launch(
            "https://www.youtube.com/watch?v=abc",
            Some("yt-yoga-no-such-browser:true"),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(choose(&Candidates::new(), &mut rng), None);
    }

    #[test]
    fn test_choose_single() {
        let mut candidates = Candidates::new();
        candidates.insert("only".to_string(), 12);

        let mut rng = StdRng::seed_from_u64(7);
        let pick = choose(&candidates, &mut rng).unwrap();
        assert_eq!(pick.video_id, "only");
        assert_eq!(pick.minutes, 12);
        assert_eq!(pick.url(), "https://www.youtube.com/watch?v=only");
    }

    #[test]
    fn test_choose_reaches_every_candidate() {
        let candidates: Candidates = (0..4).map(|i| (format!("v{}", i), i)).collect();

        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let pick = choose(&candidates, &mut rng).unwrap();
            assert_eq!(candidates.get(&pick.video_id), Some(&pick.minutes));
            seen.insert(pick.video_id);
        }
        assert_eq!(seen.len(), 4);
    }
}
