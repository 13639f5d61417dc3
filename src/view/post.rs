use crate::model;
use rinja::Template;

pub struct PostRow<'p> {
    pub post: &'p model::Post,
    pub author: &'p str,
}

#[derive(Template)]
#[template(path = "components/post_list.txt")]
pub struct PostList<'p> {
    pub rows: Vec<PostRow<'p>>,
}

impl<'p> PostList<'p> {
    /// Rows fall back to the session's author name, then "Unknown", when the server sent none.
    pub fn new(posts: &'p [model::Post], author_name: Option<&'p str>) -> Self {
        let fallback = author_name.unwrap_or("Unknown");
        let rows = posts
            .iter()
            .map(|post| PostRow {
                post,
                author: if post.author.is_empty() {
                    fallback
                } else {
                    post.author.as_str()
                },
            })
            .collect();

        Self { rows }
    }
}
