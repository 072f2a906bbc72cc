use serde::{Deserialize, Serialize};

/// One comic record as stored in the remote collection.
///
/// The publish date is carried twice on the wire (split fields and an epoch
/// timestamp); both are passed through unvalidated. The embedding vector is
/// opaque to this crate — relevance scoring happens server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub alt_title: String,
    pub transcript: String,
    pub topics: Vec<String>,
    pub image_url: String,
    pub publish_date_year: i32,
    pub publish_date_month: i32,
    pub publish_date_day: i32,
    pub publish_date_timestamp: i64,
    pub embedding: Vec<f32>,
}

/// One matched record from a search response.
///
/// The response also carries `highlight`/`highlights` metadata per hit; it is
/// not modelled here and serde drops it on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub document: Document,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_deserializes_document_and_drops_highlight_metadata() {
        let raw = serde_json::json!({
            "document": {
                "id": "2088",
                "title": "Making Tea",
                "altTitle": "No one likes my novelty mug.",
                "transcript": "[[Cueball pours hot water.]]",
                "topics": ["tea", "kitchen"],
                "imageUrl": "https://imgs.xkcd.com/comics/making_tea.png",
                "publishDateYear": 2018,
                "publishDateMonth": 12,
                "publishDateDay": 5,
                "publishDateTimestamp": 1543968000,
                "embedding": [0.1, -0.2, 0.3]
            },
            "highlight": {},
            "highlights": []
        });

        let hit: Hit = serde_json::from_value(raw).expect("hit should deserialize");
        assert_eq!(hit.document.id, "2088");
        assert_eq!(hit.document.alt_title, "No one likes my novelty mug.");
        assert_eq!(hit.document.image_url, "https://imgs.xkcd.com/comics/making_tea.png");
        assert_eq!(hit.document.topics, vec!["tea", "kitchen"]);
        assert_eq!(hit.document.publish_date_timestamp, 1543968000);
        assert_eq!(hit.document.embedding, vec![0.1, -0.2, 0.3]);
    }
}
