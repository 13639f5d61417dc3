use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::Name;
use fake::{Dummy, Fake, Faker};
use serde::{Deserialize, Serialize};

/// A titled text record attributed to an author, as served by `GET /posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Dummy)]
pub struct Post {
    #[dummy(faker = "1..100_000")]
    pub id: i64,
    #[dummy(faker = "Sentence(2..6)")]
    pub title: String,
    #[dummy(faker = "Paragraph(1..3)")]
    pub content: String,
    #[serde(default)]
    #[dummy(faker = "Name()")]
    pub author: String,
}

impl Post {
    pub fn fake() -> Self {
        Faker.fake()
    }
}

/// Request body shared by the create and edit endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBody {
    pub title: String,
    pub content: String,
    pub author_id: i64,
}
