use serde::Deserialize;

/// Root of the XML leaderboard feed:
/// `<response><entries><entry>...</entry>...</entries></response>`.
#[derive(Debug, Deserialize)]
pub struct LeaderboardFeed {
    #[serde(default)]
    pub entries: EntryList,
}

#[derive(Debug, Default, Deserialize)]
pub struct EntryList {
    #[serde(rename = "entry", default)]
    pub entries: Vec<FeedEntry>,
}

#[derive(Debug, Deserialize)]
pub struct FeedEntry {
    #[serde(rename = "steamid")]
    pub steam_id: String,
    pub score: i64,
    /// Packed per-run metadata, decoded by [`super::details`].
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_parses_entries() {
        let xml = r#"
            <response>
              <appID>424250</appID>
              <entries>
                <entry>
                  <steamid>76561198000000001</steamid>
                  <score>1500</score>
                  <rank>1</rank>
                  <details>0500000003000000</details>
                </entry>
                <entry>
                  <steamid>76561198000000002</steamid>
                  <score>1200</score>
                  <rank>2</rank>
                  <details>0000000001000000</details>
                </entry>
              </entries>
            </response>"#;

        let feed: LeaderboardFeed = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(feed.entries.entries.len(), 2);
        assert_eq!(feed.entries.entries[0].steam_id, "76561198000000001");
        assert_eq!(feed.entries.entries[0].score, 1500);
        assert_eq!(feed.entries.entries[0].details, "0500000003000000");
    }

    #[test]
    fn test_feed_with_no_entries() {
        let xml = "<response><entries></entries></response>";
        let feed: LeaderboardFeed = quick_xml::de::from_str(xml).unwrap();
        assert!(feed.entries.entries.is_empty());
    }
}
