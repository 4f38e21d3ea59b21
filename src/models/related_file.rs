// file: src/models/related_file.rs
// description: related document entry shown next to an article
// reference: serialized as the JSON records consumed by the article front end

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedFile {
    #[serde(rename = "img")]
    pub image: String,
    pub path: String,
}

impl RelatedFile {
    pub fn new(image: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            path: path.into(),
        }
    }
}
