#![allow(dead_code)]

use serde_json::{Value, json};

/// Builder for feed video entries
pub struct VideoBuilder {
    value: Value,
}

impl VideoBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            value: json!({
                "description": format!("{} description", title),
                "sources": [format!("http://media.test/{}.mp4", title.replace(' ', "_"))],
                "title": title,
                "background": "background.jpg",
                "card": "card.jpg",
                "studio": "Sample Studio"
            }),
        }
    }

    pub fn with_sources(mut self, sources: &[&str]) -> Self {
        self.value["sources"] = json!(sources);
        self
    }

    pub fn without(mut self, field: &str) -> Self {
        if let Some(object) = self.value.as_object_mut() {
            object.remove(field);
        }
        self
    }

    pub fn build(self) -> Value {
        self.value
    }
}

pub fn category(name: &str, videos: Vec<Value>) -> Value {
    json!({ "category": name, "videos": videos })
}

pub fn feed(categories: Vec<Value>) -> Value {
    json!({ "googlevideos": categories })
}

/// Two categories shaped like the public sample feed
pub fn sample_feed() -> Value {
    feed(vec![
        category(
            "Google+",
            vec![
                VideoBuilder::new("Instant Upload").build(),
                VideoBuilder::new("New Conversations").build(),
                VideoBuilder::new("No Sources").with_sources(&[]).build(),
                VideoBuilder::new("Pre Encoded")
                    .with_sources(&["http://media.test/Pre%20Encoded.mp4"])
                    .build(),
            ],
        ),
        category(
            "Demo Slam",
            vec![
                VideoBuilder::new("Google Demo Slam").build(),
                VideoBuilder::new("Extra Ear").build(),
            ],
        ),
    ])
}
