// crates/rss/examples/render_feed.rs
//! Example of building a podcast feed and rendering it as RSS

use chrono::{TimeZone, Utc};
use podfeed_core::{
    build_feed, Author, Episode, EpisodeFrontMatter, EpisodeType, FeedOptions, ITunesCategory,
    ITunesChannelFields, ITunesOwner, ShowType,
};
use podfeed_rss::{RenderOptions, RssRenderer};

fn main() {
    env_logger::init();

    println!("=== podfeed RSS Demo ===\n");

    let site = "https://pod.example.com";
    let author = Author::new("Ada Lovelace", "ada@example.com").with_link(site);

    let mut options = FeedOptions::new(
        "https://pod.example.com",
        "Analytical Engines",
        "2024 Ada Lovelace",
        author.clone(),
    );
    options.link = Some(site.to_string());
    options.description = Some("Conversations about computing machinery".to_string());
    options.feed = Some(format!("{}/rss.xml", site));

    let itunes = ITunesChannelFields {
        summary: "Conversations about computing machinery".to_string(),
        author: author.name.clone(),
        keywords: vec!["computing".to_string(), "history".to_string()],
        categories: vec![
            ITunesCategory::new("Technology"),
            ITunesCategory::with_child("Arts", "Design"),
        ],
        image: format!("{}/cover.png", site),
        explicit: false,
        owner: ITunesOwner {
            name: author.name.clone(),
            email: author.email.clone(),
        },
        show_type: ShowType::Episodic,
        ..ITunesChannelFields::default()
    };

    let episodes = vec![
        episode(1, "Notes on the Engine", EpisodeType::Full, 1834.6),
        episode(2, "Bernoulli Numbers", EpisodeType::Full, 4012.0),
        episode(3, "Coming Up Next", EpisodeType::Trailer, 45.2),
    ];

    let feed = build_feed(episodes, site, &author, options, itunes);
    println!("Built feed with {} episodes\n", feed.item_count());

    let renderer = RssRenderer::new(RenderOptions::new().with_generator("podfeed demo"));
    match renderer.render(&feed) {
        Ok(xml) => println!("{}", xml),
        Err(e) => {
            eprintln!("Failed to render feed: {}", e);
            std::process::exit(1);
        }
    }
}

fn episode(n: u32, title: &str, episode_type: EpisodeType, duration_secs: f64) -> Episode {
    Episode {
        front_matter: EpisodeFrontMatter {
            title: title.to_string(),
            mp3_url: format!("/audio/ep{}.mp3", n),
            date: Utc
                .with_ymd_and_hms(2024, 1, n, 9, 0, 0)
                .single()
                .unwrap_or_else(Utc::now),
            description: format!("Episode {}: {}", n, title),
            episode_type: Some(episode_type),
            episode: Some(n),
            season: Some(1),
            slug: None,
        },
        body_html: format!("<h1>{}</h1><p>Show notes for episode {}.</p>", title, n),
        source_path: format!("episodes/ep{}.md", n),
        duration_secs,
        file_size: (duration_secs * 16_000.0) as u64,
    }
}
