use std::fs;

use serde_json;

use model::Post;

/// Read the seed collection from `path`. A missing or unreadable file is
/// not a startup error: the blog simply begins empty. The file is only
/// ever read, never written back.
pub fn load_posts(path: &str) -> Vec<Post> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("No seed data at {}: {}", path, e);
            return vec![];
        }
    };
    match serde_json::from_str::<Vec<Post>>(&raw) {
        Ok(posts) => {
            info!("Loaded {} post(s) from {}", posts.len(), path);
            posts
        }
        Err(e) => {
            warn!("Ignoring malformed seed data in {}: {}", path, e);
            vec![]
        }
    }
}
