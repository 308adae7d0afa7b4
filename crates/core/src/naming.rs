//! File names for downloaded specials and extras, in the layout media
//! servers expect for season 0 episodes and movie extras.

/// Characters that are invalid in file names on common filesystems.
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Remove invalid characters and collapse whitespace.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name.chars().filter(|c| !INVALID_CHARS.contains(c)).collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `"{series} - S{season:02}E{episode:02} - {title}"`, without extension.
pub fn episode_filename(series: &str, season: u32, episode: u32, title: &str) -> String {
    format!(
        "{} - S{:02}E{:02} - {}",
        sanitize_filename(series),
        season,
        episode,
        sanitize_filename(title)
    )
}

/// `"{title} ({year}) - {extra}"`, or `"{title} - {extra}"` when the year
/// is unknown.
pub fn extras_filename(title: &str, year: Option<i32>, extra_title: &str) -> String {
    let title = sanitize_filename(title);
    let extra = sanitize_filename(extra_title);
    match year {
        Some(year) => format!("{} ({}) - {}", title, year, extra),
        None => format!("{} - {}", title, extra),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Foundation: The Making Of"), "Foundation The Making Of");
        assert_eq!(sanitize_filename("What/If?  <Part 1>"), "WhatIf Part 1");
        assert_eq!(sanitize_filename("  plain  "), "plain");
    }

    #[test]
    fn test_episode_filename() {
        assert_eq!(
            episode_filename("Doctor Who", 0, 5, "The Five Doctors"),
            "Doctor Who - S00E05 - The Five Doctors"
        );
        assert_eq!(
            episode_filename("Foundation", 0, 112, "Q&A: Cast"),
            "Foundation - S00E112 - Q&A Cast"
        );
    }

    #[test]
    fn test_extras_filename() {
        assert_eq!(
            extras_filename("Dune", Some(2021), "Behind the Scenes"),
            "Dune (2021) - Behind the Scenes"
        );
        assert_eq!(
            extras_filename("Dune", None, "VFX: Breakdown"),
            "Dune - VFX Breakdown"
        );
    }
}
