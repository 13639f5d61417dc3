use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::PostBody;

/// The two controlled inputs of the post editor.
#[derive(Validate, Serialize, Deserialize, Display, Clone, Debug, Default, PartialEq, Eq)]
#[display("Title: {title} Content: {content}")]
pub struct PostForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

impl PostForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }

    pub fn into_body(self, author_id: i64) -> PostBody {
        PostBody {
            title: self.title,
            content: self.content,
            author_id,
        }
    }
}

/// Whether submitting the form creates a new post or updates the one being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(i64),
}

impl FormMode {
    pub fn from_editing(editing: Option<i64>) -> Self {
        match editing {
            Some(id) => Self::Update(id),
            None => Self::Create,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Create => "Create Post",
            Self::Update(_) => "Update Post",
        }
    }
}
