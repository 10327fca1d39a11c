use model::{NewPost, Post, PostForm};

/// The process-wide post collection. Handlers share one instance behind
/// `Arc<Mutex<_>>`, so every method call is one critical section.
#[derive(Clone, Debug)]
pub struct Database {
    posts: Vec<Post>,
}

impl Database {
    pub fn new() -> Database {
        Database { posts: vec![] }
    }

    /// Append a post as-is. Seeding and `create_post` both funnel through
    /// here, so insertion order is the only order the store knows.
    pub fn add_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Create a post from validated input: fresh identifier, current
    /// timestamp, appended at the end. Returns the stored post.
    pub fn create_post(&mut self, new_post: NewPost) -> Post {
        let post = Post::new(new_post);
        self.add_post(post.clone());
        post
    }

    /// The full collection in insertion order. Callers that hold the
    /// result across other calls should clone it as a snapshot.
    pub fn posts(&self) -> &Vec<Post> {
        &self.posts
    }

    /// Exact match on the identifier's canonical string form.
    pub fn find_post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Merge the form into the matching post and refresh its date,
    /// leaving its position untouched. `None` when no post has the id.
    pub fn update_post(&mut self, id: &str, form: PostForm) -> Option<Post> {
        match self.posts.iter_mut().find(|post| post.id == id) {
            Some(post) => {
                post.apply(form);
                Some(post.clone())
            }
            None => None,
        }
    }

    /// Remove the matching post. Deleting an unknown id is a no-op.
    pub fn delete_post(&mut self, id: &str) {
        self.posts.retain(|post| post.id != id);
    }
}
