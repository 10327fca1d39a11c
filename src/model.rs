use std::collections::HashMap;

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use errors::BlogError;

/// Fixed local-time format posts carry in their `date` field.
const DATE_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub date: String,
}

impl Post {
    /// Build a fresh post: a newly generated random identifier and the
    /// current local time. The identifier never changes afterwards.
    pub fn new(new_post: NewPost) -> Post {
        Post {
            id: Uuid::new_v4().to_string(),
            author: new_post.author,
            title: new_post.title,
            content: new_post.content,
            date: current_timestamp(),
        }
    }

    /// Merge an edit into this post. A field the form left out or left
    /// blank keeps its current value; the date always becomes now.
    pub fn apply(&mut self, form: PostForm) {
        if let Some(author) = form.author.filter(|value| !value.is_empty()) {
            self.author = author;
        }
        if let Some(title) = form.title.filter(|value| !value.is_empty()) {
            self.title = title;
        }
        if let Some(content) = form.content.filter(|value| !value.is_empty()) {
            self.content = content;
        }
        self.date = current_timestamp();
    }
}

/// A complete, validated set of fields for a new post.
#[derive(Clone, Debug)]
pub struct NewPost {
    pub author: String,
    pub title: String,
    pub content: String,
}

/// Form input exactly as it came off the wire: every field optional.
#[derive(Clone, Debug, Default)]
pub struct PostForm {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostForm {
    /// Pick each known field's first value out of a decoded form body.
    pub fn from_query(query: &HashMap<String, Vec<String>>) -> PostForm {
        PostForm {
            author: first_value(query, "author"),
            title: first_value(query, "title"),
            content: first_value(query, "content"),
        }
    }

    /// Promote the form to creation input, rejecting absent fields.
    /// An empty string counts as present.
    pub fn into_new_post(self) -> Result<NewPost, BlogError> {
        Ok(NewPost {
            author: self.author.ok_or(BlogError::MissingField("author"))?,
            title: self.title.ok_or(BlogError::MissingField("title"))?,
            content: self.content.ok_or(BlogError::MissingField("content"))?,
        })
    }
}

fn first_value(query: &HashMap<String, Vec<String>>, name: &str) -> Option<String> {
    query.get(name).and_then(|values| values.first()).cloned()
}

fn current_timestamp() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}
